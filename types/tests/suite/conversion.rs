//! Conversions between Maybe, Outcome and the std types at the boundary

use std::cell::Cell;

use optres_types::{Maybe, Outcome};

#[test]
fn some_converts_to_success() {
    let outcome = Maybe::some("foo").ok_or("bar");
    assert!(outcome.is_ok());
    assert_eq!(outcome.get_result(), Ok(&"foo"));
}

#[test]
fn none_converts_to_error() {
    let outcome = Maybe::<&str>::none().ok_or("err");
    assert!(outcome.is_err());
    assert_eq!(outcome.get_error(), Ok(&"err"));
}

#[test]
fn ok_or_else_calls_supplier_only_when_absent() {
    let calls = Cell::new(0);
    let supplier = || {
        calls.set(calls.get() + 1);
        "bar"
    };

    let outcome = Maybe::some("foo").ok_or_else(supplier);
    assert_eq!(outcome.into_result(), Ok("foo"));
    assert_eq!(calls.get(), 0);

    let outcome = Maybe::<&str>::none().ok_or_else(supplier);
    assert_eq!(outcome.into_error(), Ok("bar"));
    assert_eq!(calls.get(), 1);
}

#[test]
fn round_trips_through_outcome_views() {
    assert_eq!(Outcome::<i32, i32>::ok(7).ok_value().into_value(), Ok(7));
    assert!(Outcome::<i32, i32>::ok(7).err_value().is_none());
    assert_eq!(Outcome::<i32, i32>::err(9).err_value().into_value(), Ok(9));
    assert!(Outcome::<i32, i32>::err(9).ok_value().is_none());
}

#[test]
fn std_option_round_trip() {
    let maybe: Maybe<u8> = Some(3).into();
    assert_eq!(maybe, Maybe::some(3));
    let back: Option<u8> = maybe.into();
    assert_eq!(back, Some(3));
    assert_eq!(Maybe::<u8>::from(None).into_option(), None);
}

#[test]
fn std_result_round_trip() {
    let parsed: Outcome<i32, _> = "12".parse::<i32>().into();
    assert!(parsed.is_ok());
    assert_eq!(Result::from(parsed.clone()), Ok(12));

    let failed: Outcome<i32, _> = "twelve".parse::<i32>().into();
    assert!(failed.is_err());
    assert!(failed.into_std().is_err());
}
