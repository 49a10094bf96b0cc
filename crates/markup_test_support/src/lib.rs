//! Helpers shared by the workspace's integration tests: TOML fixtures that
//! describe node trees, and readable diffs for golden output.

pub mod fixture;

pub use fixture::{
    FixtureAttribute, FixtureFile, FixtureNode, FixtureStyle, RenderCase, load_fixture,
};

use std::fmt::Write;

/// Makes whitespace and control characters visible in a diff line.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            ' ' => out.push('·'),
            ch if ch < ' ' => {
                let _ = write!(&mut out, "\\u{{{:02X}}}", ch as u32);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Line-by-line diff of two rendered texts, showing a little context
/// around the first differing line.
pub fn diff_text(expected: &str, actual: &str) -> String {
    let expected: Vec<String> = expected.split('\n').map(escape_text).collect();
    let actual: Vec<String> = actual.split('\n').map(escape_text).collect();
    let max = expected.len().max(actual.len());
    let line = |lines: &[String], i: usize| -> String {
        lines.get(i).cloned().unwrap_or_else(|| "<missing>".to_string())
    };

    let mut out = String::new();
    match (0..max).find(|&i| line(&expected[..], i) != line(&actual[..], i)) {
        Some(i) => {
            let start = i.saturating_sub(2);
            let end = (i + 3).min(max);
            let _ = writeln!(
                &mut out,
                "first mismatch at line {} (showing {}..={}):",
                i + 1,
                start + 1,
                end
            );
            for idx in start..end {
                let marker = if idx == i { ">" } else { " " };
                let _ = writeln!(&mut out, "{marker} {:>4}  expected: {}", idx + 1, line(&expected[..], idx));
                let _ = writeln!(&mut out, "{marker} {:>4}    actual: {}", idx + 1, line(&actual[..], idx));
            }
        }
        None => {
            let _ = writeln!(&mut out, "texts are identical");
        }
    }
    let _ = writeln!(
        &mut out,
        "expected {} lines, actual {} lines",
        expected.len(),
        actual.len()
    );
    out
}

/// Panics with a line diff when `actual` differs from `expected`.
pub fn assert_text_eq(case: &str, expected: &str, actual: &str) {
    if expected != actual {
        panic!(
            "case {case:?} output mismatch\n{}",
            diff_text(expected, actual)
        );
    }
}
