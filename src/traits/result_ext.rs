//! Extension traits for building error chains from `Result` values.
//!
//! [`ResultExt`] wraps a foreign error into a [`ChainedError`] at the point
//! where it crosses a layer boundary; [`ChainedResultExt`] adjusts an
//! already-chained error without unwrapping the `Result`.
//!
//! # Examples
//!
//! ```
//! use error_veil::{ChainedResult, ChainedResultExt, ResultExt};
//!
//! fn load_config() -> ChainedResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .chain("loading configuration file")
//!         .redact_as("configuration unavailable")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.to_string(), "configuration unavailable");
//! ```

use core::error::Error;

use crate::types::alloc_type::String;
use crate::types::{AttrValue, ChainedError, ChainedResult};

/// Extension trait wrapping `Result` errors into a [`ChainedError`].
///
/// Both methods are transparent to location capture: when the switch is
/// on, the recorded site is the caller of `chain`/`chain_with`, not this
/// module.
///
/// # Examples
///
/// ```
/// use error_veil::{ChainedResult, ResultExt};
///
/// fn read_data() -> ChainedResult<String> {
///     std::fs::read_to_string("data.txt").chain("reading data file")
/// }
///
/// assert!(read_data().is_err());
/// ```
pub trait ResultExt<T, E> {
    /// Wraps the error in a new chain link with the given message.
    #[track_caller]
    fn chain<M: Into<String>>(self, message: M) -> ChainedResult<T>;

    /// Wraps the error with a lazily-built message; the closure runs only
    /// on the error path.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::{ChainedResult, ResultExt};
    ///
    /// fn process(user_id: u64) -> ChainedResult<()> {
    ///     let result: Result<(), std::io::Error> =
    ///         Err(std::io::Error::other("not found"));
    ///     result.chain_with(|| format!("processing user {user_id}"))
    /// }
    ///
    /// let err = process(42).unwrap_err();
    /// assert_eq!(err.to_string(), "processing user 42: not found");
    /// ```
    #[track_caller]
    fn chain_with<F, M>(self, message: F) -> ChainedResult<T>
    where
        F: FnOnce() -> M,
        M: Into<String>;
}

impl<T, E> ResultExt<T, E> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    #[inline]
    #[track_caller]
    fn chain<M: Into<String>>(self, message: M) -> ChainedResult<T> {
        // match instead of map_err keeps the caller location intact.
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(ChainedError::wrap(err, message)),
        }
    }

    #[inline]
    #[track_caller]
    fn chain_with<F, M>(self, message: F) -> ChainedResult<T>
    where
        F: FnOnce() -> M,
        M: Into<String>,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(ChainedError::wrap(err, message())),
        }
    }
}

/// Extension trait adjusting the error of an already-chained `Result`.
///
/// # Examples
///
/// ```
/// use error_veil::{ChainedError, ChainedResult, ChainedResultExt};
///
/// let result: ChainedResult<()> = Err(ChainedError::new("row not found"));
/// let err = result.attr("table", "accounts").redact().unwrap_err();
///
/// assert_eq!(err.to_string(), "unexpected error");
/// assert_eq!(err.attrs()["table"].to_string(), "accounts");
/// ```
pub trait ChainedResultExt<T> {
    /// Marks the error private with the generic public fallback.
    fn redact(self) -> ChainedResult<T>;

    /// Marks the error private with the given public message.
    fn redact_as<M: Into<String>>(self, public_message: M) -> ChainedResult<T>;

    /// Sets an attribute on the error.
    fn attr<K, V>(self, key: K, value: V) -> ChainedResult<T>
    where
        K: Into<String>,
        V: Into<AttrValue>;
}

impl<T> ChainedResultExt<T> for ChainedResult<T> {
    #[inline]
    fn redact(self) -> ChainedResult<T> {
        self.map_err(ChainedError::redact)
    }

    #[inline]
    fn redact_as<M: Into<String>>(self, public_message: M) -> ChainedResult<T> {
        self.map_err(|err| err.redact_as(public_message))
    }

    #[inline]
    fn attr<K, V>(self, key: K, value: V) -> ChainedResult<T>
    where
        K: Into<String>,
        V: Into<AttrValue>,
    {
        self.map_err(|err| err.attr(key, value))
    }
}
