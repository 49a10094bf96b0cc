use markup::serialize;
use markup_test_support::{assert_text_eq, load_fixture};
use std::path::Path;

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn golden_markup_cases() {
    let file = load_fixture(&fixture_path("serialize.toml"));
    assert!(!file.cases.is_empty(), "fixture file has no cases");

    for case in &file.cases {
        let Some(expected) = case.markup.as_deref() else {
            continue;
        };
        let tree = case.tree.build();
        let actual = serialize(&tree, case.indent, 0);
        assert_text_eq(&case.name, expected, &actual);

        let again = serialize(&tree, case.indent, 0);
        assert_text_eq(&case.name, &actual, &again);
    }
}
