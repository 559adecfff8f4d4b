//! Host-facing numeric values.
//!
//! A [`Scalar`] is what crosses the boundary between an array and its
//! caller: candidates for insertion, elements handed back out, and the
//! elements of foreign sequences an array is compared against. It is wider
//! than either element kind so that out-of-range candidates can be
//! represented and rejected by validation rather than truncated on the
//! way in.

use std::cmp::Ordering;
use std::fmt;

/// `2^127` as an `f64`; every `i128` is strictly below it.
const I128_UPPER: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;
/// `-2^127` as an `f64`; equal to `i128::MIN`.
const I128_LOWER: f64 = -I128_UPPER;

/// A numeric value as seen by the host environment.
///
/// Equality and ordering are numeric across variants, so `Int(2)` equals
/// `Float(2.0)`. NaN is unequal to everything, itself included.
#[derive(Clone, Copy, Debug)]
pub enum Scalar {
    /// An integer, possibly outside the `i64` range.
    Int(i128),
    /// A double-precision float, possibly non-finite.
    Float(f64),
}

impl Scalar {
    /// Returns `true` for [`Scalar::Int`].
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` for [`Scalar::Float`].
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// The value as an `f64`, rounding large integers to nearest.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

/// Exact comparison of an integer against a float.
fn cmp_int_float(int: i128, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I128_UPPER {
        return Some(Ordering::Less);
    }
    if float < I128_LOWER {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => whole.partial_cmp(&float),
        other => Some(other),
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
            (Self::Int(a), Self::Float(b)) => cmp_int_float(a, b),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => fmt_float(*v, f),
        }
    }
}

/// Shortest round-trip digits, positional for decimal exponents in
/// `-4..16` and scientific (`1e+300`, `1.5e-07`) outside it.
fn fmt_float(v: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("nan");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "inf" } else { "-inf" });
    }
    // `{:e}` yields the shortest round-trip mantissa, e.g. `-1.25e-7`.
    let sci = format!("{v:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return f.write_str(&sci);
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return f.write_str(&sci);
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    if !(-4..16).contains(&exp) {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return write!(f, "{sign}{mantissa}e{exp_sign}{:02}", exp.unsigned_abs());
    }
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    if exp < 0 {
        let zeros = "0".repeat(exp.unsigned_abs() as usize - 1);
        return write!(f, "{sign}0.{zeros}{digits}");
    }
    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let pad = "0".repeat(int_len - digits.len());
        write!(f, "{sign}{digits}{pad}.0")
    } else {
        let (int_part, frac) = digits.split_at(int_len);
        write!(f, "{sign}{int_part}.{frac}")
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Self::Int(i128::from(v))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn int_and_float_compare_numerically() {
        assert_eq!(Scalar::Int(2), Scalar::Float(2.0));
        assert_eq!(Scalar::Float(-7.0), Scalar::Int(-7));
        assert_ne!(Scalar::Int(2), Scalar::Float(2.5));
        assert!(Scalar::Int(2) < Scalar::Float(2.5));
        assert!(Scalar::Float(-0.5) < Scalar::Int(0));
    }

    #[test]
    fn nan_is_unequal_to_everything() {
        let nan = Scalar::Float(f64::NAN);
        assert_ne!(nan, nan);
        assert_ne!(nan, Scalar::Int(0));
        assert_eq!(nan.partial_cmp(&Scalar::Int(0)), None);
    }

    #[test]
    fn huge_floats_bracket_every_integer() {
        assert!(Scalar::Int(i128::MAX) < Scalar::Float(f64::INFINITY));
        assert!(Scalar::Int(i128::MAX) < Scalar::Float(1e39));
        assert!(Scalar::Int(i128::MIN) > Scalar::Float(f64::NEG_INFINITY));
        assert!(Scalar::Int(i128::MIN) > Scalar::Float(-1e39));
    }

    #[test]
    fn large_integers_are_not_rounded_into_equality() {
        // 2^53 + 1 is not representable as f64.
        let int = Scalar::Int((1i128 << 53) + 1);
        let float = Scalar::Float((1u64 << 53) as f64);
        assert_ne!(int, float);
        assert!(int > float);
    }

    #[test]
    fn display_keeps_float_marker() {
        assert_eq!(Scalar::Int(5).to_string(), "5");
        assert_eq!(Scalar::Float(5.0).to_string(), "5.0");
        assert_eq!(Scalar::Float(0.25).to_string(), "0.25");
    }

    #[test]
    fn display_switches_to_exponent_form_at_the_edges() {
        let cases = [
            (1e300, "1e+300"),
            (-1e-7, "-1e-07"),
            (1.5e-5, "1.5e-05"),
            (0.0001, "0.0001"),
            (1e15, "1000000000000000.0"),
            (1e16, "1e+16"),
            (123.456, "123.456"),
            (1.2345678901234568e17, "1.2345678901234568e+17"),
            (-0.0, "-0.0"),
            (0.0, "0.0"),
        ];
        for (value, expected) in cases {
            assert_eq!(Scalar::Float(value).to_string(), expected, "{value:?}");
        }
    }

    #[test]
    fn display_non_finite_in_lower_case() {
        assert_eq!(Scalar::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Scalar::Float(f64::INFINITY).to_string(), "inf");
        assert_eq!(Scalar::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn from_primitive_types() {
        assert!(Scalar::from(3i32).is_int());
        assert!(Scalar::from(3u64).is_int());
        assert!(Scalar::from(3.0f32).is_float());
        assert_eq!(Scalar::from(i64::MIN), Scalar::Int(i64::MIN as i128));
    }

    proptest! {
        #[test]
        fn mixed_ordering_matches_exact_integers(i in -1_000_000i64..1_000_000, j in -1_000_000i64..1_000_000) {
            let a = Scalar::Int(i128::from(i));
            let b = Scalar::Float(j as f64);
            prop_assert_eq!(a.partial_cmp(&b), Some(i.cmp(&j)));
            prop_assert_eq!(b.partial_cmp(&a), Some(j.cmp(&i)));
        }

        #[test]
        fn fractional_floats_sort_between_neighbours(i in -1_000_000i64..1_000_000) {
            let mid = Scalar::Float(i as f64 + 0.5);
            prop_assert!(Scalar::Int(i128::from(i)) < mid);
            prop_assert!(Scalar::Int(i128::from(i) + 1) > mid);
        }
    }
}
