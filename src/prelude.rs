//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick
//! starts. Import everything with:
//!
//! ```
//! use error_veil::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`](crate::chain)
//! - **Types**: [`ChainedError`], [`AttrValue`], the `Result` aliases
//! - **Traits**: [`ResultExt`], [`ChainedResultExt`], [`ErrorLike`],
//!   [`OptionalErrorExt`], [`OptionalChainExt`]
//! - **Capture switch**: [`set_location_capture`], [`location_capture`]
//!
//! # Examples
//!
//! ```
//! use error_veil::prelude::*;
//!
//! fn load_config() -> ChainedResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .chain("loading configuration")
//!         .redact_as("configuration unavailable")
//! }
//!
//! let err = load_config().unwrap_err();
//! assert_eq!(err.to_string(), "configuration unavailable");
//! assert!(full_error(&err).contains("loading configuration"));
//! ```

// Macros
pub use crate::chain;

// Core types and aliases
pub use crate::types::{AttrMap, AttrValue, BoxedChainedResult, ChainedError, ChainedResult};

// Traits
pub use crate::traits::{ChainedResultExt, ErrorLike, ResultExt};

// Inspection helpers
pub use crate::diagnostics::{attrs, full_error, location_trace, OptionalChainExt, OptionalErrorExt};

// Capture switch
pub use crate::capture::{location_capture, set_location_capture};
