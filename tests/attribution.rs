//! Failure attribution against the live stack: failing assertions point at
//! the exact line that raised them.

use verdict::output::{OutputConfig, OutputFormatter};
use verdict::{Record, TestCase};

fn quiet_case() -> TestCase {
    TestCase::with_formatter(module_path!(), OutputFormatter::new(OutputConfig::quiet()))
        .expect("module path is never empty")
}

#[test]
fn direct_call_site_is_attributed_exactly() {
    let mut case = quiet_case();

    case.are_equal(&1, &2);
    let expected_line = line!() - 1;

    let entry = case.log().iter().last().unwrap();
    let location = entry.location().expect("failing assertion should be attributed");
    assert!(location.file.ends_with("attribution.rs"));
    assert_eq!(location.line, expected_line);

    let _ = case.finish();
}

#[test]
fn passed_assertions_are_never_attributed() {
    let mut case = quiet_case();

    case.are_equal(&1, &1);

    let entry = case.log().iter().last().unwrap();
    assert_eq!(entry.location(), None);
    assert!(case.finish().is_ok());
}

#[test]
fn closures_attribute_to_the_enclosing_module() {
    let mut case = quiet_case();

    let check = |case: &mut TestCase| {
        case.is_true(false);
    };
    check(&mut case);

    let entry = case.log().iter().last().unwrap();
    let location = entry.location().expect("closure frames should normalize");
    assert!(location.file.ends_with("attribution.rs"));

    let _ = case.finish();
}

#[test]
fn retried_blocks_attribute_like_direct_calls() {
    let mut case = quiet_case();

    case.retry(2, |attempt| {
        attempt.are_equal(&1, &2);
    })
    .unwrap();

    let entry = case.log().iter().last().unwrap();
    let location = entry.location().expect("retry closures should normalize");
    assert!(location.file.ends_with("attribution.rs"));

    let _ = case.finish();
}

#[test]
fn foreign_contexts_degrade_to_the_placeholder() {
    let mut case = TestCase::with_formatter(
        "some::other::module",
        OutputFormatter::new(OutputConfig::quiet()),
    )
    .unwrap();

    case.are_equal(&1, &2);

    let entry = case.log().iter().last().unwrap();
    assert_eq!(entry.location(), None);
    assert!(entry.to_string().ends_with("unknown: line ?"));

    let _ = case.finish();
}
