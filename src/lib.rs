//! Chained errors with a public/private message split.
//!
//! Each link in a chain carries a diagnostic message and, once redacted,
//! a user-safe public message. `Display` renders the public composition:
//! from the first redacted link outward only public messages surface and
//! wrapped foreign errors stay hidden. [`full_error`] renders the
//! complete diagnostic for logs, and key/value attributes ride along on
//! any link.
//!
//! # Examples
//!
//! ## Wrapping and redacting
//!
//! ```
//! use error_veil::{full_error, ChainedError};
//!
//! let db = std::io::Error::other("no rows in result set");
//! let err = ChainedError::wrap(db, "database error")
//!     .redact_as("unable to save data");
//! let err = ChainedError::wrap(err, "error processing request");
//!
//! // User-facing text stops at the redacted link's public message.
//! assert_eq!(err.to_string(), "error processing request: unable to save data");
//!
//! // The diagnostic keeps everything.
//! assert_eq!(
//!     full_error(&err),
//!     "error processing request: (unable to save data) database error: no rows in result set",
//! );
//! ```
//!
//! ## Attributes
//!
//! ```
//! use error_veil::ChainedError;
//!
//! let inner = ChainedError::new("db error").attr("db", "mydb");
//! let outer = ChainedError::wrap(inner, "save failed").attr("server", "west-12");
//!
//! let merged = outer.attrs();
//! assert_eq!(merged["db"].to_string(), "mydb");
//! assert_eq!(merged["server"].to_string(), "west-12");
//! ```
//!
//! ## Result chaining
//!
//! ```
//! use error_veil::prelude::*;
//!
//! fn save_user(id: u64) -> ChainedResult<()> {
//!     let lookup: Result<(), std::io::Error> =
//!         Err(std::io::Error::other("no rows in result set"));
//!     lookup
//!         .chain_with(|| format!("saving user {id}"))
//!         .redact_as("unable to save data")
//! }
//!
//! let err = save_user(7).unwrap_err();
//! assert_eq!(err.to_string(), "unable to save data");
//! ```
//!
//! # Feature Flags
//!
//! - `std` (off by default): links the standard library instead of
//!   `alloc`.
//! - `serde`: `Serialize`/`Deserialize` derives on [`AttrValue`]. The
//!   chain type itself never serializes.
//! - `full`: `std` + `serde`.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Process-wide switch for capture-site recording
pub mod capture;
/// Inspection helpers over any error-like value
pub mod diagnostics;
/// Constructor macro for chain nodes
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for chain construction and inspection
pub mod traits;
/// ChainedError, attribute values, and aliases
pub mod types;

pub use capture::{location_capture, set_location_capture};
pub use diagnostics::{attrs, full_error, location_trace, OptionalChainExt, OptionalErrorExt};
pub use traits::*;
pub use types::{
    AttrMap, AttrValue, AttrVec, BoxedChainedResult, ChainedError, ChainedResult,
};
