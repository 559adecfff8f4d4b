//! The closed set of element kinds an array can hold.

use std::fmt;

use crate::error::ArrayError;

/// Numeric representation bound to an array at construction.
///
/// Chosen once and never changed for the lifetime of the array. Each kind
/// has a one-character selector code used by host adapters:
///
/// | Kind | Code | Rust type | Tag |
/// |------|------|-----------|-----|
/// | [`Integer`](Self::Integer) | `'i'` | `i64` | `integer` |
/// | [`Float`](Self::Float) | `'d'` | `f64` | `float` |
///
/// # Examples
///
/// ```
/// use carray_core::ElementKind;
///
/// assert_eq!(ElementKind::from_typecode('d').unwrap(), ElementKind::Float);
/// assert_eq!(ElementKind::Integer.element_size(), 8);
/// assert!(ElementKind::from_typecode('f').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit IEEE 754 double.
    Float,
}

impl ElementKind {
    /// All kinds, in selector-table order.
    pub const ALL: [ElementKind; 2] = [ElementKind::Integer, ElementKind::Float];

    /// Resolve a type-selector code.
    ///
    /// Returns [`ArrayError::UnknownTypecode`] for anything other than
    /// `'i'` or `'d'`.
    pub fn from_typecode(code: char) -> Result<Self, ArrayError> {
        match code {
            'i' => Ok(Self::Integer),
            'd' => Ok(Self::Float),
            other => Err(ArrayError::UnknownTypecode { code: other }),
        }
    }

    /// The selector code for this kind.
    pub fn typecode(self) -> char {
        match self {
            Self::Integer => 'i',
            Self::Float => 'd',
        }
    }

    /// Size of one stored element in bytes.
    pub fn element_size(self) -> usize {
        match self {
            Self::Integer => std::mem::size_of::<i64>(),
            Self::Float => std::mem::size_of::<f64>(),
        }
    }

    /// Human-readable tag used in rendered arrays.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Float => "float",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
