//! End-to-end parsing of configuration lines through the public API.

use bump_line::{link_line_grammar, pattern_line_grammar, LineError, LinkLine, PatternLine};
use bump_scan::{scan, ScanErrorKind};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn check_style_lines() {
    let cases = [
        (
            r"/FROM alpine:([\d.]+)/ docker:alpine|^3",
            r"FROM alpine:([\d.]+)",
            "docker:alpine|^3",
        ),
        (
            r"/golang:(\d+\.\d+)/ gittag:https://github.com/golang/go.git|re:/go(.*)/$1/|^1",
            r"golang:(\d+\.\d+)",
            "gittag:https://github.com/golang/go.git|re:/go(.*)/$1/|^1",
        ),
        (r"/v\/(\d+)/ static:1,2", r"v/(\d+)", "static:1,2"),
    ];

    for (input, pattern, pipeline) in cases {
        let line = PatternLine::parse(input).unwrap();
        assert_eq!(line.pattern, pattern, "{input}");
        assert_eq!(line.pipeline, pipeline, "{input}");
    }
}

#[test]
fn grammar_can_be_driven_directly() {
    let mut grammar = pattern_line_grammar();
    let input = "/x/ static:1";
    assert_eq!(scan(input, &mut grammar), Ok(input.len()));
    let captured: Vec<_> = grammar.captures().iter().collect();
    assert_eq!(captured, vec![("re", "x"), ("pipeline", "static:1")]);
}

#[test]
fn link_grammar_captures_in_order() {
    let mut grammar = link_line_grammar();
    scan("\"a b\" c", &mut grammar).unwrap();
    let captured: Vec<_> = grammar.into_captures().into_iter().collect();
    assert_eq!(
        captured,
        vec![("title", String::from("a b")), ("URL", String::from("c"))]
    );
}

#[test]
fn errors_are_fatal_and_positioned() {
    let cases: [(&str, usize, &str); 4] = [
        ("", 0, "re: found no ending /"),
        ("abc", 0, "re: expected /"),
        ("/abc/", 5, "expected whitespace"),
        ("/abc/\t", 6, "pipeline: expected more characters (at least 1, found 0)"),
    ];

    for (input, pos, message) in cases {
        let err = PatternLine::parse(input).unwrap_err();
        let LineError::Scan(scan) = &err else {
            panic!("expected scan error for {input:?}, got {err:?}");
        };
        assert_eq!(scan.pos, pos, "{input:?}");
        assert_eq!(err.to_string(), message, "{input:?}");
    }
}

#[test]
fn link_line_rejects_empty_url() {
    let err = LinkLine::parse("title ").unwrap_err();
    match err {
        LineError::Scan(scan) => assert_eq!(
            scan.root(),
            &ScanErrorKind::InsufficientLength { min: 1, found: 0 }
        ),
        LineError::MissingCapture(name) => panic!("unexpected missing capture {name}"),
    }
}

proptest! {
    #[test]
    fn pattern_lines_round_trip(
        pattern in r"[a-z0-9()/.+* ]{0,16}",
        pipeline in r"[a-z0-9:|^/]{1,16}",
    ) {
        let line = PatternLine { pattern, pipeline };
        let Some(text) = line.to_line() else {
            return Err(TestCaseError::fail("pattern without backslashes always has a quoted form"));
        };
        prop_assert_eq!(PatternLine::parse(&text), Ok(line));
    }
}
