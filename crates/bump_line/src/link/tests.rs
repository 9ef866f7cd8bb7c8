use bump_scan::ScanErrorKind;
use pretty_assertions::assert_eq;

use super::*;

fn scan_pos(err: &LineError) -> usize {
    match err {
        LineError::Scan(scan) => scan.pos,
        other => panic!("expected scan error, got {other:?}"),
    }
}

#[test]
fn quoted_title() {
    let line = LinkLine::parse("\"hej asdas\" tjo").unwrap();
    assert_eq!(line.title, "hej asdas");
    assert_eq!(line.url, "tjo");
}

#[test]
fn word_title() {
    let line = LinkLine::parse("tjo hej").unwrap();
    assert_eq!(
        line,
        LinkLine {
            title: String::from("tjo"),
            url: String::from("hej"),
        }
    );
}

#[test]
fn url_keeps_inner_spaces() {
    let line = LinkLine::parse("notes https://example.org/a b").unwrap();
    assert_eq!(line.url, "https://example.org/a b");
}

#[test]
fn title_matching_nothing() {
    let err = LinkLine::parse("-x y").unwrap_err();
    let LineError::Scan(scan) = err else {
        panic!("expected scan error");
    };
    assert_eq!(scan.pos, 0);
    assert_eq!(scan.kind, ScanErrorKind::NoAlternativeMatched.named("title"));
    assert_eq!(scan.to_string(), "title: no match");
}

#[test]
fn word_title_followed_by_punctuation() {
    // The word branch completes on `-`, which then fails the separator.
    let err = LinkLine::parse("ab-c d").unwrap_err();
    assert_eq!(scan_pos(&err), 2);
    assert_eq!(err.to_string(), "expected whitespace");
}

#[test]
fn unterminated_quoted_title() {
    let err = LinkLine::parse("\"abc").unwrap_err();
    assert_eq!(err.to_string(), "title: no match");
    assert_eq!(scan_pos(&err), 4);
}
