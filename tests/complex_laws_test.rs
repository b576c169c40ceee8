use cmplx::prelude::*;
use cmplx::util::comp_complex;
use float_cmp::F64Margin;

const SAMPLES: [(f64, f64); 8] = [
    (3.0, 4.0),
    (-1.5, 2.25),
    (0.1, -0.7),
    (-1e3, -2e-3),
    (1e-8, 5.0),
    (123.456, -0.001),
    (-2.0, 0.5),
    (0.3, 1e-7),
];

const EXTREME: [(f64, f64); 6] = [
    (1e200, -3e199),
    (1e-200, 2e-201),
    (1e308, 1e308),
    (-1.7e308, 5e307),
    (-3e-310, 1e-300),
    (1e300, -1e300),
];

fn samples() -> impl Iterator<Item = Complex> {
    SAMPLES.iter().map(|&(re, im)| Complex::new(re, im))
}

fn extremes() -> impl Iterator<Item = Complex> {
    EXTREME.iter().map(|&(re, im)| Complex::new(re, im))
}

fn lit(s: &str) -> Complex {
    Complex::parse(s).unwrap()
}

fn close(a: Complex, b: Complex, rel: f64) -> bool {
    (a - b).abs() <= rel * b.abs()
}

#[test]
fn literal_scenarios() {
    assert_eq!((lit("3 - 6i") * lit("i")).to_string(), "6 + 3i");
    assert_eq!((lit("++++--+1 + 4i") * lit("3 + 2i")).to_string(), "-5 + 14i");
    assert_eq!((lit("4i") * lit("-5i")).to_string(), "20");
    assert!(Complex::parse("").is_err());
    assert!(Complex::parse("3 + 4i +").is_err());
    match Complex::parse("3 + 4i +") {
        Err(ComplexError::InvalidParameter(_)) => {}
        other => panic!("expected InvalidParameter, got {:?}", other),
    }
}

#[test]
fn special_value_scenarios() {
    assert!((Complex::INFINITY + Complex::INFINITY).is_nan());
    assert!((Complex::INFINITY * 0.0).is_nan());
    assert_eq!(Complex::INFINITY * complex!(2, -3), Complex::INFINITY);
    assert!((Complex::ZERO / Complex::ZERO).is_nan());
    assert_eq!(complex!(5, 7) / Complex::INFINITY, Complex::ZERO);
    assert_eq!(Complex::ZERO.inverse(), Complex::INFINITY);
    assert_eq!(Complex::INFINITY.inverse(), Complex::ZERO);
}

#[test]
fn formatting_scenarios() {
    assert_eq!(complex!(1, 0).to_string(), "1");
    assert_eq!(complex!(0, 1).to_string(), "i");
    assert_eq!(complex!(0, -1).to_string(), "-i");
    assert_eq!(complex!(-7.1, 2.5).to_string(), "-7.1 + 2.5i");
}

#[test]
fn display_round_trips() {
    for z in samples() {
        let back = Complex::parse(&z.to_string()).unwrap();
        assert!(back.equals(z), "{} reparsed as {}", z, back);
    }
}

#[test]
fn arithmetic_commutes() {
    for a in samples() {
        for b in samples() {
            assert_eq!(a + b, b + a, "{} + {}", a, b);
            assert_eq!(a * b, b * a, "{} * {}", a, b);
        }
    }
}

#[test]
fn inverse_laws() {
    for z in samples().chain(extremes()) {
        assert!(close(z * z.inverse(), Complex::ONE, 1e-12), "{} * inverse", z);
        assert!(close(z / z, Complex::ONE, 1e-12), "{} / itself", z);
    }
}

#[test]
fn sqrt_squares_back() {
    for z in samples()
        .chain(extremes())
        .chain([Complex::ZERO, complex!(-9), complex!(0, -36)])
    {
        let w = z.sqrt();
        assert!(close(w * w, z, 1e-12), "sqrt({}) = {}", z, w);
        assert!(w.re() >= 0.0, "principal branch for {}", z);
    }
}

#[test]
fn exp_undoes_log() {
    for z in samples().chain(extremes()) {
        assert!(close(z.log().exp(), z, 1e-12), "exp(log({}))", z);
    }
}

#[test]
fn division_at_extreme_magnitudes() {
    assert_eq!(complex!(1e300, 1e300) / complex!(1e300, -1e300), Complex::I);
    assert_eq!(complex!(1e-300, -1e-300) / complex!(1e-300, 1e-300), complex!(0, -1));
    for a in extremes() {
        for b in extremes() {
            let q = a / b;
            assert!(q.is_finite() || q.is_infinite(), "{} / {} = {}", a, b, q);
            if q.is_finite() && !q.is_zero() && q.abs() > 1e-290 && q.abs() < 1e290 {
                assert!(close(q * b, a, 1e-12), "({} / {}) * {}", a, b, b);
            }
        }
    }
}

#[test]
fn magnitude_at_extremes() {
    let tiny = complex!(3e-200, 4e-200);
    assert!(close(complex!(tiny.abs()), complex!(5e-200), 1e-15));
    assert!(close(tiny.sign(), complex!(0.6, 0.8), 1e-15));
    let huge = complex!(3e307, -4e307);
    assert!(close(complex!(huge.abs()), complex!(5e307), 1e-15));
    assert!(close(huge.log().exp(), huge, 1e-12));
}

#[test]
fn builder_shapes_agree() {
    let margin = F64Margin {
        epsilon: 1e-14,
        ulps: 4,
    };
    let rect = build((1.0, 1.0)).unwrap();
    let polar = ComplexBuilder::new()
        .abs(2f64.sqrt())
        .arg(std::f64::consts::FRAC_PI_4)
        .build()
        .unwrap();
    comp_complex(&rect, &polar, margin, "abs/arg");
    assert_eq!(build(vec![1.0, 1.0]).unwrap(), rect);
    assert_eq!(build("1 + i").unwrap(), rect);
    assert_eq!(build(rect).unwrap(), rect);
    assert_eq!(build(()).unwrap(), Complex::ZERO);
    assert!(build(f64::NAN).is_err());
}

#[test]
fn operands_stay_shareable() {
    let z = lit("0.5 - 2i");
    let results = [z.asinh(), z.acosh(), z.atanh(), z.sqrt(), z + z, z * z];
    assert_eq!(z, complex!(0.5, -2));
    assert_eq!(z.to_string(), "0.5 - 2i");
    assert!(results.iter().all(|w| w.is_finite()));
}
