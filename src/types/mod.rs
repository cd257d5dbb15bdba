//! Error chain types and aliases.
//!
//! The central type is [`ChainedError`], one link in an error chain.
//! [`AttrValue`] is the typed value side of node attributes, and the
//! aliases below name the common collection and `Result` shapes.
//!
//! # Examples
//!
//! ```
//! use error_veil::{ChainedError, ChainedResult};
//!
//! fn save() -> ChainedResult<()> {
//!     Err(ChainedError::new("database error").attr("db", "mydb"))
//! }
//!
//! let err = save().unwrap_err();
//! assert_eq!(err.to_string(), "database error");
//! ```
use smallvec::SmallVec;

use crate::types::alloc_type::{BTreeMap, Box, String};

pub mod alloc_type;
pub mod attr_value;
pub mod chained_error;

pub use attr_value::AttrValue;
pub use chained_error::ChainedError;

/// SmallVec-backed storage for one node's attribute entries.
///
/// Inline storage covers a couple of attributes per node without a heap
/// allocation; an empty vector allocates nothing at all.
pub type AttrVec = SmallVec<[(String, AttrValue); 2]>;

/// Merged attribute view across a whole chain, ordered by key.
pub type AttrMap = BTreeMap<String, AttrValue>;

/// Result alias for operations failing with a [`ChainedError`].
pub type ChainedResult<T> = Result<T, ChainedError>;

/// Result alias with a boxed [`ChainedError`] for reduced stack size.
///
/// # Examples
///
/// ```
/// use error_veil::{BoxedChainedResult, ChainedError};
///
/// fn parse_count(input: &str) -> BoxedChainedResult<u32> {
///     input
///         .parse()
///         .map_err(|err| Box::new(ChainedError::wrap(err, "invalid count")))
/// }
///
/// assert_eq!(parse_count("7").unwrap(), 7);
///
/// let err = parse_count("seven").unwrap_err();
/// assert_eq!(err.to_string(), "invalid count: invalid digit found in string");
/// ```
pub type BoxedChainedResult<T> = Result<T, Box<ChainedError>>;
