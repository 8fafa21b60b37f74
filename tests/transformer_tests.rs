#![cfg(feature = "transformer")]

use snippet_transform::{Error, Transformer};

fn transform(pattern: &str, format: &str, flags: &str, input: &str) -> String {
    Transformer::new(pattern, format, flags)
        .unwrap()
        .transform(input)
}

#[test]
fn test_transform_basic() {
    let result = transform(r"world", "universe", "", "hello world");
    assert_eq!(result, "hello universe");
}

#[test]
fn test_transform_no_match() {
    let result = transform(r"xyz", "universe", "", "hello world");
    assert_eq!(result, "hello world");
}

#[test]
fn test_transform_with_capture_groups() {
    let result = transform(r"(\w+)\s+(\w+)", "$2 $1", "", "hello world");
    assert_eq!(result, "world hello");
}

#[test]
fn test_transform_with_group_zero() {
    let result = transform(r"\d+", "[$0]", "", "Price: 123");
    assert_eq!(result, "Price: [123]");
}

#[test]
fn test_transform_escaped_dollar() {
    let result = transform(r"\d+", r"\$$0", "", "Price: 123");
    assert_eq!(result, "Price: $123");
}

#[test]
fn test_transform_first_match_only() {
    let result = transform(r"\d+", "X", "", "a1b2c3");
    assert_eq!(result, "aXb2c3");
}

#[test]
fn test_transform_global() {
    let result = transform(r"\d+", "X", "g", "a1b2c3");
    assert_eq!(result, "aXbXcX");

    let result = transform(r"(\w+)\s+(\w+)", "$2-$1", "g", "hello world foo bar");
    assert_eq!(result, "world-hello bar-foo");
}

#[test]
fn test_transform_case_insensitive() {
    let result = transform(r"(hello)", "${1:/upcase}", "i", "Hello WORLD");
    assert_eq!(result, "HELLO WORLD");
}

#[test]
fn test_transform_case_per_word() {
    let result = transform(r"\b(\w)(\w*)", "${1:/upcase}${2:/downcase}", "g", "hELLO wORLD");
    assert_eq!(result, "Hello World");
}

#[test]
fn test_transform_conditionals() {
    let t = Transformer::new(r"(\d+)|(\w+)", "${1:?num:word}", "g").unwrap();
    assert_eq!(t.transform("abc 12 de"), "word num word");

    let t = Transformer::new(r"(a)?b", "${1:+A}|${1:-none}", "g").unwrap();
    assert_eq!(t.transform("ab b"), "A|a |none");
}

#[test]
fn test_no_match_uses_fallback() {
    // With nothing matched, the output is the fallback pass alone.
    let result = transform(r"(\d+)", "${1:-no digits}", "", "letters only");
    assert_eq!(result, "no digits");

    let result = transform(r"(\d+)", "<${1:?yes:no}>", "g", "letters only");
    assert_eq!(result, "<no>");

    // Without fallback text, the input passes through.
    let result = transform(r"(\d+)", "${1:+yes}", "", "letters only");
    assert_eq!(result, "letters only");
}

#[test]
fn test_empty_match_stops() {
    let result = transform(r"(?=\d)", "X", "g", "a1b2c");
    assert_eq!(result, "aX1b2c");

    let result = transform(r"(\s*)", "[$1]", "g", "abc");
    assert_eq!(result, "[]abc");
}

#[test]
fn test_unicode_input() {
    let result = transform(r"(\S+)", "${1:/upcase}", "g", "straße über");
    assert_eq!(result, "STRAßE ÜBER");

    let result = transform(r"(\S+)", "${1:/capitalize}", "g", "ärger élan");
    assert_eq!(result, "Ärger Élan");
}

#[test]
fn test_transform_into_appends() {
    let t = Transformer::new(r"(\w+)", "<$1>", "g").unwrap();
    let mut out = String::from("> ");
    t.transform_into("a b", &mut out);
    assert_eq!(out, "> <a> <b>");
    assert!(t.is_global());
    assert_eq!(t.program().len(), 3);
}

#[test]
fn test_errors() {
    let err = Transformer::new(r"(\w+", "$1", "").unwrap_err();
    assert!(matches!(err, Error::Regex(_)), "{:?}", err);
    assert!(err.to_string().starts_with("invalid regex: "));

    let err = Transformer::new(r"(\w+)", "${1:/loud}", "").unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed placeholder: unexpected transform /loud}"
    );
}
