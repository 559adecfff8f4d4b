//! Array operations over values already read from Python.
//!
//! A host value arrives as `Option<Scalar>`: `None` when it is not a
//! Python number. These functions decide which error wins and what a
//! non-number means for each method.

use carray_array::Carray;
use carray_core::{ArrayError, ElementKind, Scalar, ScalarSequence};

use crate::error::AdapterError;

/// Resolve a typecode string to an element kind.
///
/// Anything but a single character is a `TypeError`; a single unknown
/// character is the array's `ValueError`.
pub(crate) fn parse_typecode(text: &str) -> Result<ElementKind, AdapterError> {
    let mut chars = text.chars();
    let code = match (chars.next(), chars.next()) {
        (Some(code), None) => code,
        _ => return Err(AdapterError::TypecodeLength),
    };
    ElementKind::from_typecode(code).map_err(|err| {
        tracing::debug!(code = %code, "rejected typecode");
        AdapterError::from(err)
    })
}

/// Build an array from the items of a construction source.
///
/// `items` is `None` when the source reports no length.
pub(crate) fn build(
    kind: ElementKind,
    items: Option<Vec<Option<Scalar>>>,
) -> Result<Carray, AdapterError> {
    let items = items.ok_or_else(|| ArrayError::InvalidSource {
        reason: "argument 2 must be a sized iterable".into(),
    })?;
    let values = items
        .into_iter()
        .map(|item| item.ok_or(AdapterError::NonNumeric(kind)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Carray::from_scalars(kind, values)?)
}

fn numeric(array: &Carray, value: Option<Scalar>) -> Result<Scalar, AdapterError> {
    value.ok_or(AdapterError::NonNumeric(array.kind()))
}

/// `__setitem__`: the index is checked before the value.
pub(crate) fn assign(
    array: &mut Carray,
    index: isize,
    value: Option<Scalar>,
) -> Result<(), AdapterError> {
    array.get(index)?;
    let value = numeric(array, value)?;
    Ok(array.set(index, value)?)
}

/// `append`.
pub(crate) fn append(array: &mut Carray, value: Option<Scalar>) -> Result<(), AdapterError> {
    let value = numeric(array, value)?;
    Ok(array.append(value)?)
}

/// `insert`.
pub(crate) fn insert(
    array: &mut Carray,
    index: isize,
    value: Option<Scalar>,
) -> Result<(), AdapterError> {
    let value = numeric(array, value)?;
    Ok(array.insert(index, value)?)
}

/// `remove`: a non-number matches nothing.
pub(crate) fn remove(array: &mut Carray, value: Option<Scalar>) {
    if let Some(value) = value {
        array.remove_value(&value);
    }
}

/// `__eq__` against a foreign sequence; `None` when it has no length.
pub(crate) fn equals<S: ScalarSequence>(array: &Carray, other: Option<S>) -> bool {
    other.is_some_and(|seq| array.equals(&seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExceptionKind;
    use carray_test_utils::MockSequence;

    fn array(kind: ElementKind, values: &[f64]) -> Carray {
        Carray::from_scalars(kind, values.iter().copied()).unwrap()
    }

    fn ints(values: &[i64]) -> Carray {
        Carray::from_scalars(ElementKind::Integer, values.iter().copied()).unwrap()
    }

    // ── typecodes ──────────────────────────────────────────────

    #[test]
    fn typecode_must_be_one_character() {
        assert_eq!(parse_typecode("i"), Ok(ElementKind::Integer));
        assert_eq!(parse_typecode("d"), Ok(ElementKind::Float));
        assert_eq!(parse_typecode("int"), Err(AdapterError::TypecodeLength));
        assert_eq!(parse_typecode(""), Err(AdapterError::TypecodeLength));
    }

    #[test]
    fn unknown_single_typecode_is_value_error() {
        let err = parse_typecode("f").unwrap_err();
        assert_eq!(err.exception_kind(), ExceptionKind::ValueError);
        assert_eq!(
            parse_typecode("\u{e9}").unwrap_err().exception_kind(),
            ExceptionKind::ValueError
        );
    }

    // ── construction ───────────────────────────────────────────

    #[test]
    fn unsized_source_is_type_error() {
        let err = build(ElementKind::Float, None).unwrap_err();
        assert!(matches!(err, AdapterError::Array(ArrayError::InvalidSource { .. })));
        assert_eq!(err.exception_kind(), ExceptionKind::TypeError);
    }

    #[test]
    fn non_numeric_source_item_is_type_error() {
        let items = vec![Some(Scalar::Float(2.1)), None];
        let err = build(ElementKind::Float, Some(items)).unwrap_err();
        assert_eq!(err, AdapterError::NonNumeric(ElementKind::Float));
    }

    #[test]
    fn float_source_item_into_integer_array_is_type_error() {
        let items = vec![Some(Scalar::Float(2.1)), Some(Scalar::Int(5))];
        let err = build(ElementKind::Integer, Some(items)).unwrap_err();
        assert_eq!(err.exception_kind(), ExceptionKind::TypeError);
    }

    #[test]
    fn sized_source_fills_the_array() {
        let items = vec![Some(Scalar::Int(1)), Some(Scalar::Float(9999.0))];
        let a = build(ElementKind::Float, Some(items)).unwrap();
        assert!(a.equals(&[1.0, 9999.0]));
        assert_eq!(a.capacity(), 2);
        assert!(build(ElementKind::Integer, Some(Vec::new())).unwrap().is_empty());
    }

    // ── mutators ───────────────────────────────────────────────

    #[test]
    fn setitem_reports_index_before_type() {
        let mut a = array(ElementKind::Float, &[2.0, 3.0, 4.0]);
        let err = assign(&mut a, 3, None).unwrap_err();
        assert_eq!(err.exception_kind(), ExceptionKind::IndexError);
        let err = assign(&mut a, -4, Some(Scalar::Float(f64::INFINITY))).unwrap_err();
        assert_eq!(err.exception_kind(), ExceptionKind::IndexError);
        let err = assign(&mut a, 0, None).unwrap_err();
        assert_eq!(err, AdapterError::NonNumeric(ElementKind::Float));
        assign(&mut a, -1, Some(Scalar::Int(-42))).unwrap();
        assert!(a.equals(&[2.0, 3.0, -42.0]));
    }

    #[test]
    fn rejected_values_leave_the_array_untouched() {
        let rejected = [
            None,
            Some(Scalar::Float(1.9)),
            Some(Scalar::Int(999_999_999_999_999_999_999_999_999_999)),
            Some(Scalar::Int(-999_999_999_999_999_999_999_999_999_999)),
        ];
        for value in rejected {
            let mut a = ints(&[1]);
            let footprint = a.storage_footprint();
            let errs = [
                assign(&mut a, 0, value).unwrap_err(),
                append(&mut a, value).unwrap_err(),
                insert(&mut a, 1, value).unwrap_err(),
            ];
            for err in errs {
                assert_eq!(err.exception_kind(), ExceptionKind::TypeError, "{value:?}");
            }
            assert!(a.equals(&[1]));
            assert_eq!(a.storage_footprint(), footprint);
        }
    }

    #[test]
    fn append_and_insert_accept_numbers() {
        let mut a = array(ElementKind::Float, &[2.0, 5.0]);
        append(&mut a, Some(Scalar::Int(1))).unwrap();
        insert(&mut a, -10, Some(Scalar::Int(8))).unwrap();
        insert(&mut a, 10, Some(Scalar::Float(0.5))).unwrap();
        assert!(a.equals(&[8.0, 2.0, 5.0, 1.0, 0.5]));
    }

    #[test]
    fn remove_ignores_non_numbers() {
        let mut a = ints(&[48, 5, 0]);
        remove(&mut a, None);
        assert!(a.equals(&[48, 5, 0]));
        remove(&mut a, Some(Scalar::Float(5.0)));
        assert!(a.equals(&[48, 0]));
        remove(&mut a, Some(Scalar::Int(8)));
        assert!(a.equals(&[48, 0]));
    }

    // ── equality ───────────────────────────────────────────────

    #[test]
    fn equality_against_foreign_sequences() {
        let a = array(ElementKind::Float, &[2.0, 5.0]);
        assert!(equals(&a, Some(MockSequence::new().push(2).push(5.0))));
        assert!(!equals(&a, Some(MockSequence::new().push(2).push_opaque())));
        assert!(!equals(&a, Some(MockSequence::new().push(2.0))));
        assert!(!equals::<MockSequence>(&a, None));
        assert!(equals(&ints(&[]), Some(MockSequence::new())));
    }
}
