//! Process-wide switch for capture-site recording.
//!
//! Recording is off by default. While the switch is on, every
//! [`ChainedError`](crate::ChainedError) constructor stores the caller's
//! source location, which [`location_trace`](crate::ChainedError::location_trace)
//! later renders one line per node.
//!
//! # Examples
//!
//! ```
//! use error_veil::{set_location_capture, ChainedError};
//!
//! set_location_capture(true);
//! let err = ChainedError::new("parse failed");
//! set_location_capture(false);
//!
//! assert!(err.location_trace().contains(".rs"));
//! ```

use core::panic::Location;
use core::sync::atomic::{AtomicBool, Ordering};

static LOCATION_CAPTURE: AtomicBool = AtomicBool::new(false);

/// Enables or disables capture-site recording for subsequently built nodes.
///
/// The switch is process-wide. A toggle concurrent with a construction on
/// another thread may or may not affect that construction; callers needing
/// a strict cutover must serialize externally.
///
/// # Examples
///
/// ```
/// use error_veil::{location_capture, set_location_capture};
///
/// set_location_capture(true);
/// assert!(location_capture());
/// set_location_capture(false);
/// ```
#[inline]
pub fn set_location_capture(enabled: bool) {
    LOCATION_CAPTURE.store(enabled, Ordering::Relaxed);
}

/// Returns whether capture-site recording is currently enabled.
#[inline]
#[must_use]
pub fn location_capture() -> bool {
    LOCATION_CAPTURE.load(Ordering::Relaxed)
}

/// Captures the caller's location when the switch is on.
#[inline]
#[track_caller]
pub(crate) fn capture_site() -> Option<&'static Location<'static>> {
    if location_capture() {
        Some(Location::caller())
    } else {
        None
    }
}
