mod common;

use common::{Fixture, TestResult, assert_layout};
use serde_json::json;

#[test]
fn test_absolute_child_is_taken_out_of_flow() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "height": 100 },
        "children": [
            { "style": { "height": 20 } },
            { "style": { "position": "absolute", "width": 30, "height": 30, "top": 10, "left": 10 } },
            { "style": { "height": 20 } }
        ]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({
            "left": 0, "top": 0, "width": 100, "height": 100,
            "children": [
                { "left": 0, "top": 0, "width": 100, "height": 20 },
                { "left": 10, "top": 10, "width": 30, "height": 30 },
                { "left": 0, "top": 20, "width": 100, "height": 20 }
            ]
        }),
    );
    Ok(())
}

#[test]
fn test_absolute_offsets_define_size() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "height": 80, "border": 2 },
        "children": [
            { "style": { "position": "absolute", "left": 10, "right": 10, "top": 5, "bottom": 5 } }
        ]
    }))?;
    fx.layout()?;

    // Offsets are measured from the padding box edge, inside the border.
    assert_layout(
        &fx.tree,
        fx.node(&[0]),
        json!({ "left": 12, "top": 7, "width": 76, "height": 66 }),
    );
    Ok(())
}

#[test]
fn test_absolute_child_anchored_bottom_right() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "height": 100 },
        "children": [
            { "style": { "position": "absolute", "width": 20, "height": 10, "right": 5, "bottom": 5 } }
        ]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.node(&[0]),
        json!({ "left": 75, "top": 85, "width": 20, "height": 10 }),
    );
    Ok(())
}

#[test]
fn test_absolute_child_in_content_sized_parent() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "flexDirection": "row" },
        "children": [
            { "style": { "width": 40, "height": 40 } },
            { "style": { "position": "absolute", "left": 0, "right": 0, "height": 5, "bottom": 0 } }
        ]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({
            "left": 0, "top": 0, "width": 40, "height": 40,
            "children": [
                { "left": 0, "top": 0, "width": 40, "height": 40 },
                { "left": 0, "top": 35, "width": 40, "height": 5 }
            ]
        }),
    );
    Ok(())
}

#[test]
fn test_start_and_end_offsets_from_document() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "flexDirection": "row", "width": 100, "height": 50 },
        "children": [
            { "style": { "position": "absolute", "start": 10, "end": 20, "height": 10 } },
            { "style": { "width": 10, "height": 10, "start": 5 } }
        ]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({
            "left": 0, "top": 0, "width": 100, "height": 50,
            "children": [
                { "left": 10, "top": 0, "width": 70, "height": 10 },
                { "left": 5, "top": 0, "width": 10, "height": 10 }
            ]
        }),
    );
    Ok(())
}
