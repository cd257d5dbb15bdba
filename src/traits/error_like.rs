//! Trait for viewing error values behind a common object seam.
//!
//! The diagnostic free functions accept any [`ErrorLike`] value, so a
//! concrete error or a `dyn Error` reference can be inspected without
//! adaptation. Possibly-absent errors go through
//! [`OptionalErrorExt`](crate::diagnostics::OptionalErrorExt) instead.
//!
//! # Examples
//!
//! ```
//! use error_veil::{full_error, ChainedError};
//!
//! let chain = ChainedError::new("timeout");
//! let concrete = std::io::Error::other("disk full");
//!
//! assert_eq!(full_error(&chain), "timeout");
//! assert_eq!(full_error(&concrete), "disk full");
//! ```

use core::error::Error;

/// Types that can be viewed as a `dyn Error` object.
///
/// Implementations exist for every [`core::error::Error`] type and for
/// the `dyn Error` object flavors. The set stops there: a blanket over
/// `Error` cannot coexist with impls for `&E` or `Option<E>`, so a
/// `Box<dyn Error>` is passed as the dereferenced object (`&*boxed`)
/// and optional errors use
/// [`OptionalErrorExt`](crate::diagnostics::OptionalErrorExt).
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be inspected as an error",
    label = "this type does not implement `ErrorLike`",
    note = "implement `core::error::Error` for the type, or pass a reference to an error type",
    note = "for `Box<dyn Error>` values, pass the dereferenced object: `&*boxed`",
    note = "for `Option` values, call `.as_ref()` and use the `OptionalErrorExt` methods"
)]
pub trait ErrorLike {
    /// Returns the error as a `dyn Error` object.
    fn as_dyn_error(&self) -> &(dyn Error + 'static);
}

impl<E: Error + 'static> ErrorLike for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorLike for dyn Error + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorLike for dyn Error + Send + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

impl ErrorLike for dyn Error + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn Error + 'static) {
        self
    }
}
