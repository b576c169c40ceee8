use crate::complex::Complex;
use float_cmp::{approx_eq, ApproxEq, F64Margin};

impl ApproxEq for Complex {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.re().approx_eq(other.re(), margin) && self.im().approx_eq(other.im(), margin)
    }
}

pub fn comp_vec_complex(exemplar: &[Complex], calc: &[Complex], precision: F64Margin, test: &str) {
    assert_eq!(exemplar.len(), calc.len(), "test {} length does not match", test);
    for k in 0..calc.len() {
        comp_complex(&exemplar[k], &calc[k], precision, &format!("{} ({})", test, k));
    }
}

pub fn comp_complex(exemplar: &Complex, calc: &Complex, precision: F64Margin, test: &str) {
    comp_f64(&exemplar.re(), &calc.re(), precision, test, "re");
    comp_f64(&exemplar.im(), &calc.im(), precision, test, "im");
}

pub fn comp_f64(exemplar: &f64, calc: &f64, precision: F64Margin, test: &str, idx: &str) {
    assert!(
        approx_eq!(f64, *calc, *exemplar, precision),
        " Failed test {} at location {}\n  exemplar: {}\n      calc: {}",
        test,
        idx,
        exemplar,
        calc
    );
}
