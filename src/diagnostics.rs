//! Inspection helpers over any error-like value.
//!
//! Key features:
//! - [`full_error`], [`location_trace`], and [`attrs`] accept anything
//!   implementing [`ErrorLike`]: a concrete error or a `dyn Error`
//!   reference.
//! - [`OptionalErrorExt`] carries the same read-outs over an `Option`,
//!   degrading gracefully when the error is absent: empty strings and
//!   `None` results, never panics.
//! - [`OptionalChainExt`] renders an absent chain as a fixed placeholder
//!   so log fields stay populated.

use core::borrow::Borrow;
use core::error::Error;

use crate::traits::ErrorLike;
use crate::types::alloc_type::{Cow, String};
use crate::types::chained_error::NIL_PLACEHOLDER;
use crate::types::{AttrMap, ChainedError};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

/// Returns the complete diagnostic text of any error-like value.
///
/// A chain-typed value renders its full composition, redaction
/// notwithstanding. Any other error renders its own `Display` text.
///
/// # Arguments
///
/// * `err` - The value to inspect
///
/// # Examples
///
/// ```
/// use error_veil::{full_error, ChainedError};
///
/// let err = ChainedError::new("database error").redact_as("unable to save data");
/// assert_eq!(full_error(&err), "(unable to save data) database error");
///
/// let io = std::io::Error::other("disk full");
/// assert_eq!(full_error(&io), "disk full");
/// ```
#[must_use]
pub fn full_error<E: ErrorLike + ?Sized>(err: &E) -> String {
    let any = err.as_dyn_error();
    match as_chain(any) {
        Some(chain) => chain.full_error(),
        None => any.to_string(),
    }
}

/// Returns the recorded location trace of a chain-typed value.
///
/// Produces an empty string when the value is not chain-typed or carries
/// no recorded site.
///
/// # Arguments
///
/// * `err` - The value to inspect
///
/// # Examples
///
/// ```
/// use error_veil::{location_trace, ChainedError};
///
/// let err = ChainedError::new("parse failed");
/// assert_eq!(location_trace(&err), "");
///
/// let io = std::io::Error::other("disk full");
/// assert_eq!(location_trace(&io), "");
/// ```
#[must_use]
pub fn location_trace<E: ErrorLike + ?Sized>(err: &E) -> String {
    match as_chain(err.as_dyn_error()) {
        Some(chain) => chain.location_trace(),
        None => String::new(),
    }
}

/// Returns the merged attribute map of a chain-typed value.
///
/// `None` when the value is not chain-typed; `Some` with a possibly-empty
/// map when it is.
///
/// # Arguments
///
/// * `err` - The value to inspect
///
/// # Examples
///
/// ```
/// use error_veil::{attrs, ChainedError};
///
/// let err = ChainedError::new("db error").attr("db", "mydb");
/// let merged = attrs(&err).unwrap();
/// assert_eq!(merged["db"].to_string(), "mydb");
///
/// let io = std::io::Error::other("disk full");
/// assert!(attrs(&io).is_none());
/// ```
#[must_use]
pub fn attrs<E: ErrorLike + ?Sized>(err: &E) -> Option<AttrMap> {
    as_chain(err.as_dyn_error()).map(ChainedError::attrs)
}

#[inline]
fn as_chain<'a>(err: &'a (dyn Error + 'static)) -> Option<&'a ChainedError> {
    err.downcast_ref::<ChainedError>()
}

/// The free-function read-outs over a possibly-absent error.
///
/// `source()` channels and error slots hand back `Option`s; these methods
/// inspect the content without unwrapping first. An absent error degrades
/// to the empty results of the free functions: `""` for the texts, `None`
/// for the attributes.
///
/// The single implementation covers `Option<&E>` for any [`ErrorLike`]
/// target, so `source()` results apply directly and owned options apply
/// through `as_ref()`.
///
/// # Examples
///
/// ```
/// use error_veil::{ChainedError, OptionalErrorExt};
///
/// let stored = Some(ChainedError::new("database error").redact_as("unable to save data"));
/// assert_eq!(stored.as_ref().full_error(), "(unable to save data) database error");
///
/// let empty: Option<ChainedError> = None;
/// assert_eq!(empty.as_ref().full_error(), "");
/// assert!(empty.as_ref().attrs().is_none());
/// ```
pub trait OptionalErrorExt {
    /// [`full_error`] of the contained error, or `""` when absent.
    #[must_use]
    fn full_error(&self) -> String;

    /// [`location_trace`] of the contained error, or `""` when absent.
    #[must_use]
    fn location_trace(&self) -> String;

    /// [`attrs`] of the contained error, or `None` when absent.
    #[must_use]
    fn attrs(&self) -> Option<AttrMap>;
}

impl<'a, E: ErrorLike + ?Sized> OptionalErrorExt for Option<&'a E> {
    fn full_error(&self) -> String {
        match self {
            Some(err) => full_error(*err),
            None => String::new(),
        }
    }

    fn location_trace(&self) -> String {
        match self {
            Some(err) => location_trace(*err),
            None => String::new(),
        }
    }

    fn attrs(&self) -> Option<AttrMap> {
        self.and_then(|err| attrs(err))
    }
}

/// Placeholder-aware text accessors for optional chains.
///
/// An absent chain renders as `"(nil)"`, keeping log fields populated
/// when an error slot is empty.
///
/// # Examples
///
/// ```
/// use error_veil::{ChainedError, OptionalChainExt};
///
/// let present = Some(ChainedError::new("timeout"));
/// let absent: Option<ChainedError> = None;
///
/// assert_eq!(present.public_text(), "timeout");
/// assert_eq!(absent.public_text(), "(nil)");
/// ```
pub trait OptionalChainExt {
    /// Public composition of the chain, or `"(nil)"` when absent.
    fn public_text(&self) -> Cow<'static, str>;

    /// Full diagnostic of the chain, or `"(nil)"` when absent.
    fn full_text(&self) -> Cow<'static, str>;
}

impl<C: Borrow<ChainedError>> OptionalChainExt for Option<C> {
    fn public_text(&self) -> Cow<'static, str> {
        match self {
            Some(chain) => Cow::Owned(chain.borrow().to_string()),
            None => Cow::Borrowed(NIL_PLACEHOLDER),
        }
    }

    fn full_text(&self) -> Cow<'static, str> {
        match self {
            Some(chain) => Cow::Owned(chain.borrow().full_error()),
            None => Cow::Borrowed(NIL_PLACEHOLDER),
        }
    }
}
