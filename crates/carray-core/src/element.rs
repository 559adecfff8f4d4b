//! Per-kind element strategy.
//!
//! [`Element`] isolates every kind-specific behavior behind one fixed set
//! of operations so that array logic is written once and monomorphized per
//! kind. It is sealed: `i64` and `f64` are the only implementations.
//!
//! The slice operations (`read`, `write`, `shift_insert`, `shift_remove`,
//! `fill_reversed`) assume the caller has already bounds-checked; they
//! panic on out-of-range indices like ordinary slice indexing.

use std::fmt::Debug;

use crate::error::ArrayError;
use crate::kind::ElementKind;
use crate::scalar::Scalar;

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// A fixed-width numeric type storable in a typed array.
pub trait Element: Copy + PartialEq + Debug + Send + Sync + 'static + sealed::Sealed {
    /// The kind this type implements.
    const KIND: ElementKind;

    /// Admit a candidate value, converting it to the stored representation.
    ///
    /// This is the only gate through which values enter an array. Fails
    /// with [`ArrayError::OutOfRange`] if the value does not losslessly fit.
    fn validate(value: &Scalar) -> Result<Self, ArrayError>;

    /// Convert a stored element back to a host value.
    fn to_scalar(self) -> Scalar;

    /// Display tag for this kind.
    fn render_tag() -> &'static str {
        Self::KIND.tag()
    }

    /// Read the element at `index`.
    #[inline]
    fn read(buf: &[Self], index: usize) -> Self {
        buf[index]
    }

    /// Overwrite the element at `index`.
    #[inline]
    fn write(buf: &mut [Self], index: usize, value: Self) {
        buf[index] = value;
    }

    /// Move `buf[index..len]` one slot right, then write `value` at `index`.
    ///
    /// `buf` must hold at least `len + 1` initialized elements.
    fn shift_insert(buf: &mut [Self], index: usize, value: Self, len: usize) {
        buf.copy_within(index..len, index + 1);
        buf[index] = value;
    }

    /// Take the element at `index`, moving `buf[index + 1..len]` one slot left.
    ///
    /// Slot `len - 1` keeps a stale copy afterwards; the caller shrinks its
    /// logical length to exclude it.
    fn shift_remove(buf: &mut [Self], index: usize, len: usize) -> Self {
        let removed = buf[index];
        buf.copy_within(index + 1..len, index);
        removed
    }

    /// Write `src` into `dst` in reverse positional order.
    fn fill_reversed(dst: &mut [Self], src: &[Self]) {
        debug_assert_eq!(dst.len(), src.len());
        for (slot, &value) in dst.iter_mut().zip(src.iter().rev()) {
            *slot = value;
        }
    }
}

impl Element for i64 {
    const KIND: ElementKind = ElementKind::Integer;

    fn validate(value: &Scalar) -> Result<Self, ArrayError> {
        match *value {
            Scalar::Int(v) => i64::try_from(v).map_err(|_| ArrayError::out_of_range(Self::KIND, v)),
            // Integer arrays never accept floats, integral or not.
            Scalar::Float(_) => Err(ArrayError::out_of_range(Self::KIND, value)),
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Int(i128::from(self))
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Float;

    fn validate(value: &Scalar) -> Result<Self, ArrayError> {
        match *value {
            Scalar::Int(v) => Ok(v as f64),
            Scalar::Float(v) if v.is_infinite() => Err(ArrayError::out_of_range(Self::KIND, value)),
            Scalar::Float(v) => Ok(v),
        }
    }

    fn to_scalar(self) -> Scalar {
        Scalar::Float(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_accepts_full_i64_range() {
        assert_eq!(i64::validate(&Scalar::Int(i64::MAX as i128)), Ok(i64::MAX));
        assert_eq!(i64::validate(&Scalar::Int(i64::MIN as i128)), Ok(i64::MIN));
        assert_eq!(i64::validate(&Scalar::from(-42)), Ok(-42));
    }

    #[test]
    fn integer_rejects_overflow_and_floats() {
        for value in [
            Scalar::Int(i64::MAX as i128 + 1),
            Scalar::Int(i64::MIN as i128 - 1),
            Scalar::Float(1.9),
            Scalar::Float(2.0),
        ] {
            let err = i64::validate(&value).unwrap_err();
            assert!(matches!(
                err,
                ArrayError::OutOfRange {
                    kind: ElementKind::Integer,
                    ..
                }
            ));
        }
    }

    #[test]
    fn float_converts_integers() {
        assert_eq!(f64::validate(&Scalar::Int(1)), Ok(1.0));
        assert_eq!(f64::validate(&Scalar::Int(-8)), Ok(-8.0));
    }

    #[test]
    fn float_rejects_infinities_only() {
        assert!(f64::validate(&Scalar::Float(f64::INFINITY)).is_err());
        assert!(f64::validate(&Scalar::Float(f64::NEG_INFINITY)).is_err());
        assert_eq!(f64::validate(&Scalar::Float(f64::MAX)), Ok(f64::MAX));
        assert_eq!(f64::validate(&Scalar::Float(-f64::MAX)), Ok(-f64::MAX));
        assert!(f64::validate(&Scalar::Float(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn shift_insert_moves_tail_right() {
        // Slot 3 is the freshly claimed slot.
        let mut buf = [1i64, 2, 3, 0];
        i64::shift_insert(&mut buf, 1, 9, 3);
        assert_eq!(buf, [1, 9, 2, 3]);
    }

    #[test]
    fn shift_insert_at_end_is_a_write() {
        let mut buf = [1.0f64, 2.0, 0.0];
        f64::shift_insert(&mut buf, 2, 7.5, 2);
        assert_eq!(buf, [1.0, 2.0, 7.5]);
    }

    #[test]
    fn shift_remove_moves_tail_left() {
        let mut buf = [1i64, 2, 3, 4];
        let removed = i64::shift_remove(&mut buf, 1, 4);
        assert_eq!(removed, 2);
        assert_eq!(&buf[..3], &[1, 3, 4]);
    }

    #[test]
    fn fill_reversed_handles_odd_and_even() {
        let mut dst = [0i64; 3];
        i64::fill_reversed(&mut dst, &[1, 2, 3]);
        assert_eq!(dst, [3, 2, 1]);

        let mut dst = [0.0f64; 2];
        f64::fill_reversed(&mut dst, &[2.0, 5.0]);
        assert_eq!(dst, [5.0, 2.0]);
    }

    #[test]
    fn render_tags() {
        assert_eq!(i64::render_tag(), "integer");
        assert_eq!(f64::render_tag(), "float");
    }
}
