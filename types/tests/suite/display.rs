//! Debug renderings of both wrappers

use insta::assert_snapshot;
use optres_types::{Maybe, Outcome};

#[test]
fn maybe_renders_present_and_absent() {
    assert_snapshot!(Maybe::some("foo").to_string(), @"Some(foo)");
    assert_snapshot!(Maybe::<&str>::none().to_string(), @"None()");
}

#[test]
fn outcome_renders_both_sides() {
    assert_snapshot!(Outcome::<&str, &str>::ok("foo").to_string(), @"Ok(foo)");
    assert_snapshot!(Outcome::<&str, &str>::err("foo").to_string(), @"Err(foo)");
}

#[test]
fn nested_wrappers_render_inside_out() {
    let nested = Outcome::<Maybe<u8>, String>::ok(Maybe::some(1));
    assert_snapshot!(nested.to_string(), @"Ok(Some(1))");
    assert_snapshot!(Maybe::some(Outcome::<u8, &str>::err("late")).to_string(), @"Some(Err(late))");
}
