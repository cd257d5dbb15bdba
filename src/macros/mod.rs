//! Constructor macro for error chain nodes.
//!
//! [`macro@crate::chain`] covers the common construction shapes in one
//! invocation: an empty leaf, a formatted leaf, a bare wrap, or a wrap
//! with a formatted message. The node records the macro call site when
//! location capture is enabled.
//!
//! # Examples
//!
//! ```
//! use error_veil::chain;
//!
//! let io = std::io::Error::other("no rows in result set");
//! let err = chain!(io, "query {} failed", "accounts");
//!
//! assert_eq!(err.to_string(), "query accounts failed: no rows in result set");
//! ```

/// Builds a [`ChainedError`](crate::ChainedError) from the common
/// argument shapes.
///
/// # Syntax
///
/// - `chain!()` - Empty leaf node
/// - `chain!("fmt", args...)` - Leaf with a formatted message
/// - `chain!(err)` - Wraps an existing error with no added message
/// - `chain!(err, "fmt", args...)` - Wraps with a formatted message
///
/// The format string must be a literal; `err` may be any
/// `core::error::Error + Send + Sync + 'static` value.
///
/// # Examples
///
/// ```
/// use error_veil::chain;
///
/// // Formatted leaf
/// let err = chain!("str {}, float {:.2}, int {}", "ok", 1.23, -45);
/// assert_eq!(err.to_string(), "str ok, float 1.23, int -45");
///
/// // Wrapping an earlier error
/// let io = std::io::Error::other("disk full");
/// let err = chain!(io, "flush failed");
/// assert_eq!(err.to_string(), "flush failed: disk full");
///
/// // Bare wrap keeps the parent text only
/// let io = std::io::Error::other("disk full");
/// let err = chain!(io);
/// assert_eq!(err.to_string(), "disk full");
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        $crate::ChainedError::new("")
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ChainedError::new(format!($fmt $(, $arg)*))
    };
    ($err:expr $(,)?) => {
        $crate::ChainedError::wrap($err, "")
    };
    ($err:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::ChainedError::wrap($err, format!($fmt $(, $arg)*))
    };
}
