//! Core traits for error chain construction and inspection.
//!
//! This module defines the traits that connect foreign errors to the
//! chain type:
//!
//! - [`ErrorLike`]: Views concrete errors and trait objects uniformly
//! - [`ResultExt`]: Wraps `Result` errors into a chain link
//! - [`ChainedResultExt`]: Adjusts an already-chained `Result` error
//!
//! # Examples
//!
//! ```
//! use error_veil::traits::{ChainedResultExt, ResultExt};
//!
//! fn fetch() -> error_veil::ChainedResult<String> {
//!     std::fs::read_to_string("rows.csv")
//!         .chain("fetching rows")
//!         .attr("source", "rows.csv")
//! }
//!
//! let err = fetch().unwrap_err();
//! assert_eq!(err.attrs()["source"].to_string(), "rows.csv");
//! ```

pub mod error_like;
pub mod result_ext;

pub use error_like::ErrorLike;
pub use result_ext::{ChainedResultExt, ResultExt};
