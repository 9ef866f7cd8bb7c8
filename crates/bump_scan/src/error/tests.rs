use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages_match_scan_causes() {
    let cases = [
        (
            ScanErrorKind::ExpectedClass {
                class: "whitespace",
            },
            "expected whitespace",
        ),
        (
            ScanErrorKind::ExpectedDelimiter { quote: b'/' },
            "expected /",
        ),
        (
            ScanErrorKind::UnterminatedLiteral { quote: b'"' },
            "found no ending \"",
        ),
        (
            ScanErrorKind::InsufficientLength { min: 1, found: 0 },
            "expected more characters (at least 1, found 0)",
        ),
        (ScanErrorKind::NoAlternativeMatched, "no match"),
        (
            ScanErrorKind::UnexpectedTrailingInput { found: b'x' },
            "unexpected x",
        ),
        (ScanErrorKind::IncompleteInput, "unexpected end of input"),
    ];

    for (kind, message) in cases {
        assert_eq!(kind.to_string(), message);
    }
}

#[test]
fn non_ascii_bytes_are_escaped() {
    let kind = ScanErrorKind::UnexpectedTrailingInput { found: 0xC3 };
    assert_eq!(kind.to_string(), "unexpected \\xc3");
}

#[test]
fn whitespace_bytes_are_escaped() {
    let kind = ScanErrorKind::UnexpectedTrailingInput { found: b'\t' };
    assert_eq!(kind.to_string(), "unexpected \\t");
}

#[test]
fn named_prefixes_the_cause() {
    let kind = ScanErrorKind::UnterminatedLiteral { quote: b'/' }.named("re");
    assert_eq!(kind.to_string(), "re: found no ending /");
}

#[test]
fn root_strips_every_name() {
    let kind = ScanErrorKind::NoAlternativeMatched
        .named("inner")
        .named("outer");
    assert_eq!(kind.root(), &ScanErrorKind::NoAlternativeMatched);
    assert_eq!(kind.to_string(), "outer: inner: no match");
}

#[test]
fn scan_error_displays_kind_and_keeps_position() {
    let err = ScanError::new(4, ScanErrorKind::IncompleteInput.named("title"));
    assert_eq!(err.pos, 4);
    assert_eq!(err.token_name(), Some("title"));
    assert_eq!(err.root(), &ScanErrorKind::IncompleteInput);
    assert_eq!(err.to_string(), "title: unexpected end of input");
}

#[test]
fn unnamed_error_has_no_token_name() {
    let err = ScanError::new(0, ScanErrorKind::NoAlternativeMatched);
    assert_eq!(err.token_name(), None);
}
