use super::Complex;
use crate::error::ComplexError;
use crate::input::{self, ComplexBuilder, ComplexInput};
use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One component of the canonical literal: shortest decimal, exponent form
/// outside `[1e-6, 1e21)`. A precision from the caller's format string, as in
/// `{:.3}`, fixes the number of fractional digits; width and fill are ignored.
struct Part(f64, Option<usize>);

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Part(x, precision) = *self;
        let exponent = x != 0.0 && (x.abs() < 1e-6 || x.abs() >= 1e21);
        match (precision, exponent) {
            (None, _) if x == 0.0 => write!(f, "0"),
            (None, true) => write!(f, "{:e}", x),
            (None, false) => write!(f, "{}", x),
            (Some(p), true) => write!(f, "{:.*e}", p, x),
            (Some(p), false) => write!(f, "{:.*}", p, if x == 0.0 { 0.0 } else { x }),
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nan() {
            return write!(f, "NaN");
        }
        if self.is_infinite() {
            return write!(f, "Infinity");
        }

        let precision = f.precision();
        let (real, imag) = (self.re, self.im);
        if imag == 0.0 {
            return write!(f, "{}", Part(real, precision));
        }

        if real != 0.0 {
            write!(
                f,
                "{} {} ",
                Part(real, precision),
                if imag < 0.0 { '-' } else { '+' }
            )?;
        } else if imag < 0.0 {
            write!(f, "-")?;
        }
        if imag.abs() == 1.0 {
            write!(f, "i")
        } else {
            write!(f, "{}i", Part(imag.abs(), precision))
        }
    }
}

impl FromStr for Complex {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complex::parse(s)
    }
}

impl Serialize for Complex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct ComplexVisitor;

impl<'de> Visitor<'de> for ComplexVisitor {
    type Value = Complex;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a complex literal, a number, a [re, im] pair or a record")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Complex, E> {
        Complex::parse(v).map_err(E::custom)
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Complex, E> {
        input::build(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Complex, E> {
        self.visit_f64(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Complex, E> {
        self.visit_f64(v as f64)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Complex, A::Error> {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(2));
        while let Some(x) = seq.next_element::<f64>()? {
            values.push(x);
        }
        input::build(ComplexInput::PairSequence(values)).map_err(de::Error::custom)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Complex, A::Error> {
        const FIELDS: &[&str] = &["re", "im", "abs", "arg", "r", "phi"];
        let mut builder = ComplexBuilder::new();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value::<f64>()?;
            builder = match key.as_str() {
                "re" => builder.re(value),
                "im" => builder.im(value),
                "abs" => builder.abs(value),
                "arg" => builder.arg(value),
                "r" => builder.r(value),
                "phi" => builder.phi(value),
                other => return Err(de::Error::unknown_field(other, FIELDS)),
            };
        }
        builder.build().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Complex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ComplexVisitor)
    }
}

#[cfg(test)]
mod format_tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Complex::ONE.to_string(), "1");
        assert_eq!(Complex::I.to_string(), "i");
        assert_eq!(Complex::new(0.0, -1.0).to_string(), "-i");
        assert_eq!(Complex::new(-7.1, 2.5).to_string(), "-7.1 + 2.5i");
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3 - 4i");
        assert_eq!(Complex::new(3.0, 1.0).to_string(), "3 + i");
        assert_eq!(Complex::new(3.0, -1.0).to_string(), "3 - i");
        assert_eq!(Complex::new(0.0, -2.5).to_string(), "-2.5i");
        assert_eq!(Complex::new(-0.0, 0.0).to_string(), "0");
        assert_eq!(Complex::new(12.0, -0.0).to_string(), "12");
    }

    #[test]
    fn test_display_special() {
        assert_eq!(Complex::NAN.to_string(), "NaN");
        assert_eq!(Complex::new(1.0, f64::NAN).to_string(), "NaN");
        assert_eq!(Complex::INFINITY.to_string(), "Infinity");
        assert_eq!(Complex::new(f64::NEG_INFINITY, 2.0).to_string(), "Infinity");
    }

    #[test]
    fn test_display_exponent() {
        assert_eq!(
            Complex::new(6.123233995736766e-17, 2.0).to_string(),
            "6.123233995736766e-17 + 2i"
        );
        assert_eq!(Complex::new(1e21, 0.0).to_string(), "1e21");
        assert_eq!(Complex::new(0.0, 2.5e-7).to_string(), "2.5e-7i");
        assert_eq!(Complex::new(1e20, 0.000001).to_string(), "100000000000000000000 + 0.000001i");
    }

    #[test]
    fn test_display_precision() {
        assert_eq!(format!("{:.2}", Complex::new(1.23456, -2.5)), "1.23 - 2.50i");
        assert_eq!(format!("{:.0}", Complex::new(-7.6, 0.0)), "-8");
        assert_eq!(format!("{:.3}", Complex::new(1e-9, 0.0)), "1.000e-9");
        assert_eq!(format!("{:.1}", Complex::new(0.0, -1.0)), "-i");
        assert_eq!(format!("{:.1}", Complex::new(-0.0, 0.0)), "0.0");
        assert_eq!(format!("{:.2}", Complex::NAN), "NaN");
        assert_eq!(format!("{:>12}", Complex::new(3.0, 4.0)), "3 + 4i");
    }

    #[test]
    fn test_display_does_not_touch_value() {
        let z = Complex::new(2.0, -3.0);
        assert_eq!(format!("{}", z), "2 - 3i");
        assert_eq!(z.im(), -3.0);
    }

    #[test]
    fn test_display_reparses() {
        for z in [
            Complex::new(-7.1, 2.5),
            Complex::new(6.123233995736766e-17, 2.0),
            Complex::new(1.5e-9, -3.25e22),
            Complex::new(0.1, -0.2),
            Complex::new(0.0, -1.0),
        ] {
            let w: Complex = z.to_string().parse().unwrap();
            assert!(w.equals(z), "{} reparsed as {}", z, w);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("3 + 4i".parse::<Complex>().unwrap(), Complex::new(3.0, 4.0));
        assert!("".parse::<Complex>().is_err());
        assert!("3 + x".parse::<Complex>().is_err());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&Complex::new(-7.1, 2.5)).unwrap();
        assert_eq!(json, "\"-7.1 + 2.5i\"");
        let json = serde_json::to_string(&vec![Complex::ONE, Complex::I]).unwrap();
        assert_eq!(json, "[\"1\",\"i\"]");
    }

    #[test]
    fn test_deserialize_shapes() {
        let z: Complex = serde_json::from_str("\"3 - 6i\"").unwrap();
        assert_eq!(z, Complex::new(3.0, -6.0));
        let z: Complex = serde_json::from_str("4").unwrap();
        assert_eq!(z, Complex::new(4.0, 0.0));
        let z: Complex = serde_json::from_str("-2.5").unwrap();
        assert_eq!(z, Complex::new(-2.5, 0.0));
        let z: Complex = serde_json::from_str("[1.5, -2]").unwrap();
        assert_eq!(z, Complex::new(1.5, -2.0));
        let z: Complex = serde_json::from_str(r#"{"re": 1, "im": 2}"#).unwrap();
        assert_eq!(z, Complex::new(1.0, 2.0));
        let z: Complex = serde_json::from_str(r#"{"r": 2, "phi": 0}"#).unwrap();
        assert_eq!(z, Complex::new(2.0, 0.0));
        let z: Complex = serde_json::from_str(r#"{"abs": 3, "arg": 0}"#).unwrap();
        assert_eq!(z, Complex::new(3.0, 0.0));
    }

    #[test]
    fn test_deserialize_rejects() {
        assert!(serde_json::from_str::<Complex>("[1, 2, 3]").is_err());
        assert!(serde_json::from_str::<Complex>("[]").is_err());
        assert!(serde_json::from_str::<Complex>(r#"{"re": 1}"#).is_err());
        assert!(serde_json::from_str::<Complex>(r#"{"x": 1, "y": 2}"#).is_err());
        assert!(serde_json::from_str::<Complex>("\"3 +\"").is_err());
        assert!(serde_json::from_str::<Complex>("true").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let z = Complex::new(0.25, -1e-9);
        let back: Complex = serde_json::from_str(&serde_json::to_string(&z).unwrap()).unwrap();
        assert_eq!(back, z);
    }
}
