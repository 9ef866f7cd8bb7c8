use pretty_assertions::assert_eq;

use super::*;

fn drive(min: usize, input: &str) -> Step {
    let mut rest = RestCapture::new(min);
    for b in input.bytes() {
        assert_eq!(rest.advance(Some(b)), Step::Continue);
    }
    rest.advance(None)
}

#[test]
fn captures_everything_including_whitespace() {
    assert_eq!(
        drive(1, "docker:alpine|^3 "),
        Step::Done(String::from("docker:alpine|^3 "))
    );
}

#[test]
fn too_short_fails() {
    assert_eq!(
        drive(3, "ab"),
        Step::Fail(ScanErrorKind::InsufficientLength { min: 3, found: 2 })
    );
}

#[test]
fn zero_minimum_accepts_empty() {
    assert_eq!(drive(0, ""), Step::Done(String::new()));
}

#[test]
fn exactly_minimum_is_enough() {
    assert_eq!(drive(2, "ab"), Step::Done(String::from("ab")));
}

#[test]
fn keeps_multibyte_text() {
    assert_eq!(drive(1, "vérsion"), Step::Done(String::from("vérsion")));
}

mod proptest_rest {
    use super::drive;
    use crate::{ScanErrorKind, Step};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn done_iff_long_enough(input in "[ -~]{0,24}", min in 0usize..16) {
            match drive(min, &input) {
                Step::Done(rest) => {
                    prop_assert!(input.len() >= min);
                    prop_assert_eq!(rest, input);
                }
                Step::Fail(ScanErrorKind::InsufficientLength { min: m, found }) => {
                    prop_assert!(input.len() < min);
                    prop_assert_eq!(m, min);
                    prop_assert_eq!(found, input.len());
                }
                other => prop_assert!(false, "unexpected {:?}", other),
            }
        }
    }
}
