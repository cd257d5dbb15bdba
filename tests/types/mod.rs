use std::io;

use error_veil::{full_error, ChainedError};

mod chained_error;

fn driver_error() -> io::Error {
    io::Error::other("no rows in result set")
}

#[test]
fn redacted_outer_hides_all_ancestors() {
    let database_error = ChainedError::wrap(driver_error(), "database error").attr("db", "mydb");
    let outer = ChainedError::wrap(database_error, "").redact_as("unable to save data");

    assert_eq!(outer.to_string(), "unable to save data");
    assert_eq!(
        full_error(&outer),
        "unable to save data: database error: no rows in result set"
    );
}

#[test]
fn full_error_parenthesizes_links_with_both_messages() {
    let database_error = ChainedError::wrap(driver_error(), "database error");
    let outer = ChainedError::wrap(database_error, "error processing request")
        .redact_as("unable to save data");

    assert_eq!(
        full_error(&outer),
        "(unable to save data) error processing request: database error: no rows in result set"
    );
}

#[test]
fn public_wrapper_over_private_inner_shows_inner_public_message() {
    let database_error = ChainedError::wrap(driver_error(), "database error").attr("db", "mydb");
    let inner = ChainedError::wrap(database_error, "").redact_as("unable to save data");
    let outer = ChainedError::wrap(inner, "public err").attr("server", "west-12");

    assert_eq!(outer.to_string(), "public err: unable to save data");

    let merged = outer.attrs();
    assert_eq!(merged["server"].to_string(), "west-12");
    assert_eq!(merged["db"].to_string(), "mydb");
}

#[test]
fn new_leaf_displays_its_message() {
    assert_eq!(ChainedError::new("some error").to_string(), "some error");
}

#[test]
fn display_skips_separator_when_one_side_is_empty() {
    let bare_wrap = ChainedError::wrap(driver_error(), "");
    assert_eq!(bare_wrap.to_string(), "no rows in result set");

    let empty_leaf = ChainedError::new("");
    assert_eq!(empty_leaf.to_string(), "");
}

#[test]
fn redacted_display_is_shorter_than_the_diagnostic() {
    let err = ChainedError::wrap(driver_error(), "database error")
        .redact_as("unable to save data");

    assert_eq!(err.to_string(), "unable to save data");
    assert!(err.full_error().len() > "unable to save data".len());
}
