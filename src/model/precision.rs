use serde::Deserialize;

/// Floating-point width used for host function arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// Narrow the host's number to `f32`, compute, widen the result back.
    #[default]
    #[serde(alias = "f32")]
    Single,
    /// Compute directly in the host's `f64`.
    #[serde(alias = "f64")]
    Native,
}

impl Precision {
    pub fn label(&self) -> &'static str {
        match self {
            Precision::Single => "single",
            Precision::Native => "native",
        }
    }

    /// Evaluate `x` with whichever of the two kernels matches this precision.
    pub fn eval(self, x: f64, single: fn(f32) -> f32, native: fn(f64) -> f64) -> f64 {
        match self {
            Precision::Single => f64::from(single(x as f32)),
            Precision::Native => native(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arith;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        precision: Precision,
    }

    fn parse(raw: &str) -> Precision {
        toml::from_str::<Wrapper>(raw).unwrap().precision
    }

    #[test]
    fn deserializes_names_and_aliases() {
        assert_eq!(parse(r#"precision = "single""#), Precision::Single);
        assert_eq!(parse(r#"precision = "f32""#), Precision::Single);
        assert_eq!(parse(r#"precision = "native""#), Precision::Native);
        assert_eq!(parse(r#"precision = "f64""#), Precision::Native);
        assert!(toml::from_str::<Wrapper>(r#"precision = "double-ish""#).is_err());
    }

    #[test]
    fn single_narrows_before_multiplying() {
        let got = Precision::Single.eval(0.1, arith::square::<f32>, arith::square::<f64>);
        assert_eq!(got, f64::from(0.1_f32 * 0.1_f32));
        assert_ne!(got, 0.1 * 0.1);
    }

    #[test]
    fn native_keeps_host_width() {
        let got = Precision::Native.eval(0.1, arith::square::<f32>, arith::square::<f64>);
        assert_eq!(got, 0.1 * 0.1);
    }

    #[test]
    fn single_overflows_like_f32() {
        let single = Precision::Single.eval(1.0e20, arith::square::<f32>, arith::square::<f64>);
        let native = Precision::Native.eval(1.0e20, arith::square::<f32>, arith::square::<f64>);
        assert_eq!(single, f64::INFINITY);
        assert_eq!(native, 1.0e40);
    }

    #[test]
    fn default_is_single() {
        assert_eq!(Precision::default(), Precision::Single);
        assert_eq!(Precision::default().label(), "single");
    }
}
