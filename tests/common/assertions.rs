use flexlay::{LayoutSnapshot, LayoutTree, NodeId, floats_equal};
use serde_json::Value;

/// Compares the computed layout of `root`'s subtree against `expected`,
/// given in the [`LayoutSnapshot`] JSON shape. Children may be omitted from
/// `expected` to skip checking them.
pub fn assert_layout(tree: &LayoutTree, root: NodeId, expected: Value) {
    let actual = LayoutSnapshot::capture(tree, root).expect("root must be a valid node");
    let expected: LayoutSnapshot = serde_json::from_value(expected).expect("expected layout must be a snapshot");
    compare(&actual, &expected, "root");
}

fn compare(actual: &LayoutSnapshot, expected: &LayoutSnapshot, path: &str) {
    for (name, a, e) in [
        ("left", actual.left, expected.left),
        ("top", actual.top, expected.top),
        ("width", actual.width, expected.width),
        ("height", actual.height, expected.height),
    ] {
        assert!(
            floats_equal(a, e),
            "{}.{}: expected {}, got {}\nfull layout: {}",
            path,
            name,
            e,
            a,
            actual.to_json().unwrap_or_default()
        );
    }

    if expected.children.is_empty() {
        return;
    }
    assert_eq!(
        actual.children.len(),
        expected.children.len(),
        "{}: child count differs",
        path
    );
    for (i, (a, e)) in actual.children.iter().zip(&expected.children).enumerate() {
        compare(a, e, &format!("{}.children[{}]", path, i));
    }
}
