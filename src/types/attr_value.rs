//! Typed values for error chain attributes.
//!
//! [`AttrValue`] is the value side of the key/value pairs attached to a
//! [`ChainedError`](crate::ChainedError). `From` conversions cover the
//! primitive families so call sites can pass bare literals.

use core::fmt;

use crate::types::alloc_type::{Cow, String};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Value stored under an attribute key on a chain node.
///
/// # Examples
///
/// ```
/// use error_veil::{AttrValue, ChainedError};
///
/// let err = ChainedError::new("lookup failed")
///     .attr("table", "accounts")
///     .attr("rows", 0u64)
///     .attr("retried", true);
///
/// assert_eq!(err.attrs()["rows"], AttrValue::UInt(0));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Borrowed or owned text.
    Str(Cow<'static, str>),
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Floating point number.
    Float(f64),
    /// Boolean flag.
    Bool(bool),
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(value) => f.write_str(value),
            AttrValue::Int(value) => write!(f, "{value}"),
            AttrValue::UInt(value) => write!(f, "{value}"),
            AttrValue::Float(value) => write!(f, "{value}"),
            AttrValue::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&'static str> for AttrValue {
    #[inline]
    fn from(value: &'static str) -> Self {
        AttrValue::Str(Cow::Borrowed(value))
    }
}

impl From<String> for AttrValue {
    #[inline]
    fn from(value: String) -> Self {
        AttrValue::Str(Cow::Owned(value))
    }
}

impl From<Cow<'static, str>> for AttrValue {
    #[inline]
    fn from(value: Cow<'static, str>) -> Self {
        AttrValue::Str(value)
    }
}

impl From<bool> for AttrValue {
    #[inline]
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i8> for AttrValue {
    #[inline]
    fn from(value: i8) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<i16> for AttrValue {
    #[inline]
    fn from(value: i16) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<i32> for AttrValue {
    #[inline]
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<i64> for AttrValue {
    #[inline]
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<isize> for AttrValue {
    #[inline]
    fn from(value: isize) -> Self {
        AttrValue::Int(value as i64)
    }
}

impl From<u8> for AttrValue {
    #[inline]
    fn from(value: u8) -> Self {
        AttrValue::UInt(value.into())
    }
}

impl From<u16> for AttrValue {
    #[inline]
    fn from(value: u16) -> Self {
        AttrValue::UInt(value.into())
    }
}

impl From<u32> for AttrValue {
    #[inline]
    fn from(value: u32) -> Self {
        AttrValue::UInt(value.into())
    }
}

impl From<u64> for AttrValue {
    #[inline]
    fn from(value: u64) -> Self {
        AttrValue::UInt(value)
    }
}

impl From<usize> for AttrValue {
    #[inline]
    fn from(value: usize) -> Self {
        AttrValue::UInt(value as u64)
    }
}

impl From<f32> for AttrValue {
    #[inline]
    fn from(value: f32) -> Self {
        AttrValue::Float(value.into())
    }
}

impl From<f64> for AttrValue {
    #[inline]
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}
