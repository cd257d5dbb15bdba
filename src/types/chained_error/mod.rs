//! Chained error type with separated public and diagnostic text.
//!
//! This module provides [`ChainedError`], a link in an error chain that carries:
//! - A diagnostic message plus an optional user-safe public message
//! - Key/value attributes with per-node overwrite-by-key semantics
//! - An optional capture site recorded while location capture is enabled

use core::error::Error;
use core::panic::Location;

use crate::capture;
use crate::types::alloc_type::{Box, String};
use crate::types::{AttrMap, AttrValue, AttrVec};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(feature = "std")]
use std::string::ToString;

mod traits;

/// Public fallback used by [`ChainedError::redact`].
pub(crate) const REDACTED_FALLBACK: &str = "unexpected error";

/// Placeholder rendered for an absent chain.
pub(crate) const NIL_PLACEHOLDER: &str = "(nil)";

/// A link in an error chain separating user-safe text from diagnostics.
///
/// `Display` renders the public composition: once any link along the walk
/// is redacted, everything after it stays hidden and only public messages
/// surface. [`full_error`](ChainedError::full_error) renders the complete
/// diagnostic regardless of redaction.
///
/// A node may wrap any [`core::error::Error`] value. Wrapped values that
/// are themselves `ChainedError` continue the chain; anything else is an
/// opaque tail that contributes its own `Display` text and nothing more.
///
/// # Examples
///
/// ```
/// use error_veil::ChainedError;
///
/// let db = std::io::Error::other("no rows in result set");
/// let err = ChainedError::wrap(db, "database error")
///     .redact_as("unable to save data");
/// let err = ChainedError::wrap(err, "error processing request");
///
/// assert_eq!(err.to_string(), "error processing request: unable to save data");
/// assert!(err.full_error().contains("no rows in result set"));
/// ```
#[must_use]
pub struct ChainedError {
    pub(crate) parent: Option<Box<dyn Error + Send + Sync + 'static>>,
    pub(crate) private: bool,
    pub(crate) message: String,
    pub(crate) public_message: String,
    pub(crate) location: Option<&'static Location<'static>>,
    pub(crate) attrs: AttrVec,
}

impl ChainedError {
    /// Creates a leaf node with the given diagnostic message.
    ///
    /// Records the caller's location when
    /// [`set_location_capture`](crate::set_location_capture) has enabled
    /// capture.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let err = ChainedError::new("connection refused");
    /// assert_eq!(err.to_string(), "connection refused");
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            parent: None,
            private: false,
            message: message.into(),
            public_message: String::new(),
            location: capture::capture_site(),
            attrs: AttrVec::new(),
        }
    }

    /// Wraps an existing error in a new link with the given message.
    ///
    /// The wrapped value becomes the parent of the new node. A
    /// `ChainedError` parent continues the chain; any other error type is
    /// kept as an opaque tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let io = std::io::Error::other("disk full");
    /// let err = ChainedError::wrap(io, "flush failed");
    /// assert_eq!(err.to_string(), "flush failed: disk full");
    /// ```
    #[track_caller]
    pub fn wrap<E>(parent: E, message: impl Into<String>) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::wrap_boxed(Box::new(parent), message)
    }

    /// Wraps an already-boxed error without boxing it again.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let boxed: Box<dyn std::error::Error + Send + Sync> =
    ///     "timeout".into();
    /// let err = ChainedError::wrap_boxed(boxed, "fetch failed");
    /// assert_eq!(err.to_string(), "fetch failed: timeout");
    /// ```
    #[track_caller]
    pub fn wrap_boxed(
        parent: Box<dyn Error + Send + Sync + 'static>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            parent: Some(parent),
            private: false,
            message: message.into(),
            public_message: String::new(),
            location: capture::capture_site(),
            attrs: AttrVec::new(),
        }
    }

    /// Marks this node private with the generic public fallback.
    ///
    /// Equivalent to `redact_as("unexpected error")`.
    #[inline]
    pub fn redact(self) -> Self {
        self.redact_as(REDACTED_FALLBACK)
    }

    /// Marks this node private and sets its public message.
    ///
    /// From this link outward, `Display` renders public messages only and
    /// suppresses opaque parent text entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let err = ChainedError::new("password hash mismatch for bob")
    ///     .redact_as("login failed");
    /// assert_eq!(err.to_string(), "login failed");
    /// ```
    #[inline]
    pub fn redact_as(mut self, public_message: impl Into<String>) -> Self {
        self.private = true;
        self.public_message = public_message.into();
        self
    }

    /// Sets an attribute on this node, overwriting any previous value
    /// under the same key.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let err = ChainedError::new("lookup failed")
    ///     .attr("table", "accounts")
    ///     .attr("table", "users");
    /// assert_eq!(err.attrs()["table"].to_string(), "users");
    /// ```
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((key, value)),
        }
        self
    }

    /// Returns the complete diagnostic text of the whole chain.
    ///
    /// Each link contributes `(public) message` when both are set, or
    /// whichever is non-empty; links join with `": "`. Redaction never
    /// hides anything here.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let err = ChainedError::new("database error")
    ///     .redact_as("unable to save data");
    /// assert_eq!(err.full_error(), "(unable to save data) database error");
    /// ```
    #[must_use]
    pub fn full_error(&self) -> String {
        let mut text = if !self.public_message.is_empty() && !self.message.is_empty() {
            let mut own =
                String::with_capacity(self.public_message.len() + self.message.len() + 3);
            own.push('(');
            own.push_str(&self.public_message);
            own.push_str(") ");
            own.push_str(&self.message);
            own
        } else if !self.public_message.is_empty() {
            self.public_message.clone()
        } else {
            self.message.clone()
        };

        if let Some(parent) = self.parent.as_deref() {
            let parent_text = match as_chain(parent) {
                Some(chain) => chain.full_error(),
                None => parent.to_string(),
            };
            if !text.is_empty() && !parent_text.is_empty() {
                text.push_str(": ");
            }
            text.push_str(&parent_text);
        }
        text
    }

    /// Renders the recorded capture sites, one line per link.
    ///
    /// Returns an empty string when this node recorded no site. A link
    /// without a site ends the walk, dropping its ancestors' lines; the
    /// walk also stops at the first opaque parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let err = ChainedError::new("parse failed");
    /// assert_eq!(err.location_trace(), "");
    /// ```
    #[must_use]
    pub fn location_trace(&self) -> String {
        use core::fmt::Write;

        let Some(site) = self.location else {
            return String::new();
        };
        let mut trace = String::new();
        let _ = writeln!(trace, " at {}:{}:{}", site.file(), site.line(), site.column());
        if let Some(parent) = self.parent.as_deref() {
            if let Some(chain) = as_chain(parent) {
                trace.push_str(&chain.location_trace());
            }
        }
        trace
    }

    /// Merges the attributes of the whole chain into one map.
    ///
    /// This node's entries are written first, then each chained ancestor's
    /// in turn, so on a key collision the deepest ancestor's value wins.
    /// Opaque parents contribute nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_veil::ChainedError;
    ///
    /// let inner = ChainedError::new("db error").attr("db", "mydb");
    /// let outer = ChainedError::wrap(inner, "save failed").attr("server", "west-12");
    ///
    /// let merged = outer.attrs();
    /// assert_eq!(merged["db"].to_string(), "mydb");
    /// assert_eq!(merged["server"].to_string(), "west-12");
    /// ```
    #[must_use]
    pub fn attrs(&self) -> AttrMap {
        let mut merged = AttrMap::new();
        self.merge_attrs(&mut merged);
        merged
    }

    /// Returns whether this node has been marked private.
    #[inline]
    #[must_use]
    pub fn is_redacted(&self) -> bool {
        self.private
    }

    /// Returns this node's recorded capture site, if any.
    #[inline]
    #[must_use]
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Public composition walk. The flag turns sticky once any visited
    /// link is private.
    pub(crate) fn compose(&self, mut public_only: bool) -> String {
        public_only |= self.private;
        let mut text = if public_only {
            self.public_message.clone()
        } else {
            self.message.clone()
        };

        if let Some(parent) = self.parent.as_deref() {
            let parent_text = match as_chain(parent) {
                Some(chain) => chain.compose(public_only),
                None if public_only => String::new(),
                None => parent.to_string(),
            };
            if !text.is_empty() && !parent_text.is_empty() {
                text.push_str(": ");
            }
            text.push_str(&parent_text);
        }
        text
    }

    fn merge_attrs(&self, into: &mut AttrMap) {
        for (key, value) in &self.attrs {
            into.insert(key.clone(), value.clone());
        }
        if let Some(parent) = self.parent.as_deref() {
            if let Some(chain) = as_chain(parent) {
                chain.merge_attrs(into);
            }
        }
    }
}

/// Downcasts a parent to continue the chain walk.
#[inline]
fn as_chain<'a>(err: &'a (dyn Error + Send + Sync + 'static)) -> Option<&'a ChainedError> {
    err.downcast_ref::<ChainedError>()
}
