use std::io;

use error_veil::{chain, full_error};

#[test]
fn formats_a_leaf_message() {
    let err = chain!("str {}, float {:.2}, int {}", "ok", 1.23, -45);
    assert_eq!(err.to_string(), "str ok, float 1.23, int -45");
}

#[test]
fn plain_literal_builds_a_leaf() {
    let err = chain!("some error");
    assert_eq!(err.to_string(), "some error");
}

#[test]
fn empty_invocation_builds_an_empty_leaf() {
    let err = chain!();
    assert_eq!(err.to_string(), "");
    assert_eq!(full_error(&err), "");
}

#[test]
fn wraps_an_error_without_a_message() {
    let io_err = io::Error::other("no rows in result set");
    let err = chain!(io_err);

    assert_eq!(err.to_string(), "no rows in result set");
}

#[test]
fn wraps_an_error_with_a_formatted_message() {
    let io_err = io::Error::other("no rows in result set");
    let err = chain!(io_err, "query {} failed", "accounts");

    assert_eq!(err.to_string(), "query accounts failed: no rows in result set");
    assert_eq!(
        full_error(&err),
        "query accounts failed: no rows in result set"
    );
}

#[test]
fn nested_invocations_continue_the_chain() {
    let err = chain!(chain!("inner"), "outer");
    assert_eq!(err.to_string(), "outer: inner");
}

#[test]
fn trailing_commas_are_accepted() {
    let io_err = io::Error::other("boom");
    let err = chain!(io_err,);
    assert_eq!(err.to_string(), "boom");

    let formatted = chain!("value {}", 7,);
    assert_eq!(formatted.to_string(), "value 7");
}
