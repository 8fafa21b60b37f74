#![allow(dead_code)]

use snippet_transform::{Program, Range};

/// Compile \p format, panicking with the error text if it does not compile.
#[track_caller]
pub fn compile(format: &str) -> Program {
    match Program::new(format) {
        Ok(p) => p,
        Err(err) => panic!("Format should have compiled: {}: {}", format, err),
    }
}

/// Test that \p format fails to compile.
#[track_caller]
pub fn test_compile_fails(format: &str) {
    let res = Program::new(format);
    assert!(res.is_err(), "Format should not have compiled: {}", format);
}

/// Compute the group ranges of \p groups within \p text.
/// Each group is given as its text, located by searching left to right from
/// the end of the previous group; None marks a group which did not
/// participate. Group 0 is the whole text.
pub fn groups_of(text: &str, groups: &[Option<&str>]) -> Vec<Option<Range>> {
    let mut result = vec![Some(0..text.len())];
    let mut from = 0;
    for g in groups {
        result.push(g.map(|g| {
            let start = from + text[from..].find(g).expect("group not in text");
            from = start + g.len();
            start..from
        }));
    }
    result
}

/// A compiled format paired with some helpers for applying it.
#[derive(Debug, Clone)]
pub struct TestProgram {
    pub program: Program,
}

impl TestProgram {
    /// Apply to \p text whose capture groups 1.. are \p groups.
    #[track_caller]
    pub fn apply(&self, text: &str, groups: &[Option<&str>]) -> String {
        self.program.render(text, &groups_of(text, groups))
    }

    /// Apply with no captures at all.
    pub fn apply_fallback(&self) -> String {
        let mut out = String::new();
        self.program.apply_fallback(&mut out);
        out
    }

    /// Apply to \p text and check the result is \p expected.
    #[track_caller]
    pub fn test_eq(&self, text: &str, groups: &[Option<&str>], expected: &str) {
        assert_eq!(self.apply(text, groups), expected)
    }
}

/// Compile \p format into a TestProgram.
#[track_caller]
pub fn program(format: &str) -> TestProgram {
    TestProgram {
        program: compile(format),
    }
}
