use std::error::Error;
use std::fmt;
use std::io;

use error_veil::{attrs, full_error, location_trace, ChainedError, OptionalErrorExt};

/// Error type exposing a chain through the standard source channel.
#[derive(Debug)]
struct WithSource {
    inner: ChainedError,
}

impl fmt::Display for WithSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("outer failure")
    }
}

impl Error for WithSource {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[test]
fn concrete_errors_render_their_own_text() {
    let io_err = io::Error::other("disk full");
    assert_eq!(full_error(&io_err), "disk full");
    assert_eq!(location_trace(&io_err), "");
    assert!(attrs(&io_err).is_none());
}

#[test]
fn dyn_error_objects_are_inspectable() {
    let boxed: Box<dyn Error + Send + Sync> =
        Box::new(ChainedError::new("timeout").attr("host", "east-1"));

    assert_eq!(full_error(&*boxed), "timeout");
    assert_eq!(attrs(&*boxed).unwrap()["host"].to_string(), "east-1");
}

#[test]
fn plain_dyn_error_objects_work_too() {
    let boxed: Box<dyn Error> = Box::new(io::Error::other("reset"));
    assert_eq!(full_error(&*boxed), "reset");
    assert!(attrs(&*boxed).is_none());
}

#[test]
fn send_only_dyn_objects_are_inspectable() {
    let boxed: Box<dyn Error + Send> = Box::new(io::Error::other("reset"));
    assert_eq!(full_error(&*boxed), "reset");
}

#[test]
fn absent_values_degrade_to_empty_results() {
    let absent: Option<ChainedError> = None;
    assert_eq!(absent.as_ref().full_error(), "");
    assert_eq!(absent.as_ref().location_trace(), "");
    assert!(absent.as_ref().attrs().is_none());
}

#[test]
fn present_options_delegate_to_their_error() {
    let present = Some(ChainedError::new("boom").redact_as("failed"));
    assert_eq!(present.as_ref().full_error(), "(failed) boom");
}

#[test]
fn source_results_are_inspectable() {
    let outer = WithSource {
        inner: ChainedError::new("inner detail").redact_as("safe"),
    };

    let source = outer.source();
    assert_eq!(source.full_error(), "(safe) inner detail");
    assert!(source.attrs().is_some());

    let plain = io::Error::from(io::ErrorKind::NotFound);
    assert_eq!(plain.source().full_error(), "");
}
