use std::error::Error;
use std::fmt;

use error_veil::{AttrValue, ChainedError};

use super::driver_error;

/// Foreign error type that carries a chain internally but is not one.
#[derive(Debug)]
struct ForeignWrapper(ChainedError);

impl fmt::Display for ForeignWrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wrapped: {}", self.0)
    }
}

impl Error for ForeignWrapper {}

#[test]
fn redact_uses_the_generic_fallback() {
    let err = ChainedError::new("password hash mismatch").redact();

    assert!(err.is_redacted());
    assert_eq!(err.to_string(), "unexpected error");
    assert_eq!(err.full_error(), "(unexpected error) password hash mismatch");
}

#[test]
fn redact_as_empty_clears_the_public_text() {
    let err = ChainedError::wrap(driver_error(), "database error").redact_as("");
    assert_eq!(err.to_string(), "");
    assert_eq!(err.full_error(), "database error: no rows in result set");
}

#[test]
fn attr_overwrites_by_key_per_node() {
    let err = ChainedError::new("boom")
        .attr("k", "v1")
        .attr("k", "v2")
        .attr("n", 1u64);

    let merged = err.attrs();
    assert_eq!(merged.len(), 2);
    assert_eq!(merged["k"].to_string(), "v2");
    assert_eq!(merged["n"], AttrValue::UInt(1));
}

#[test]
fn attribute_collision_prefers_the_deepest_ancestor() {
    let inner = ChainedError::new("inner").attr("region", "inner-value");
    let outer = ChainedError::wrap(inner, "outer").attr("region", "outer-value");

    assert_eq!(outer.attrs()["region"], AttrValue::Str("inner-value".into()));
}

#[test]
fn opaque_parents_contribute_no_attributes() {
    let outer = ChainedError::wrap(driver_error(), "outer").attr("server", "west-12");

    let merged = outer.attrs();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged["server"].to_string(), "west-12");
}

#[test]
fn attrs_are_empty_but_present_without_any_writes() {
    assert!(ChainedError::new("bare").attrs().is_empty());
}

#[test]
fn foreign_wrappers_stay_opaque_under_redaction() {
    let hidden = ForeignWrapper(ChainedError::new("secret detail").redact_as("safe"));
    let outer = ChainedError::wrap(hidden, "request failed").redact_as("try again later");

    // The foreign parent is a leaf: its text is suppressed entirely once
    // privacy is asserted, public message inside notwithstanding.
    assert_eq!(outer.to_string(), "try again later");
    assert!(outer.full_error().contains("wrapped: safe"));
}

#[test]
fn wrap_boxed_preserves_chain_typing() {
    let inner: Box<dyn Error + Send + Sync> =
        Box::new(ChainedError::new("inner detail").redact_as("safe"));
    let outer = ChainedError::wrap_boxed(inner, "outer");

    assert_eq!(outer.to_string(), "outer: safe");
}

#[test]
fn source_stays_closed() {
    let err = ChainedError::wrap(driver_error(), "database error");
    assert!(err.source().is_none());
}

#[test]
fn debug_renders_the_full_diagnostic() {
    let err = ChainedError::wrap(driver_error(), "database error")
        .redact_as("unable to save data");

    assert_eq!(format!("{err:?}"), err.full_error());
}

#[test]
fn chained_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ChainedError>();
}
