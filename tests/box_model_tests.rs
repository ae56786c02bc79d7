mod common;

use common::{Fixture, TestResult, assert_layout};
use serde_json::json;

#[test]
fn test_padding_and_border_inset_children() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "height": 100, "padding": 10, "border": 5 },
        "children": [{ "style": { "height": 20 } }]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({
            "left": 0, "top": 0, "width": 100, "height": 100,
            "children": [{ "left": 15, "top": 15, "width": 70, "height": 20 }]
        }),
    );
    Ok(())
}

#[test]
fn test_content_size_includes_padding_and_border() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "padding": "2 4", "border": "1px" },
        "children": [{ "style": { "width": 10, "height": 10 } }]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({
            "left": 0, "top": 0, "width": 20, "height": 16,
            "children": [{ "left": 5, "top": 3, "width": 10, "height": 10 }]
        }),
    );
    Ok(())
}

#[test]
fn test_negative_padding_is_ignored_but_negative_margin_applies() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 50, "height": 50, "padding": -10, "alignItems": "flex-start" },
        "children": [{ "style": { "width": 10, "height": 10, "margin": { "left": -5 } } }]
    }))?;
    fx.layout()?;

    let child = fx.node(&[0]);
    assert_eq!(fx.tree.layout_x(child)?, -5.0);
    assert_eq!(fx.tree.layout_y(child)?, 0.0);
    Ok(())
}

#[test]
fn test_root_margin_offsets_root() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "margin": 10 },
        "children": [{ "style": { "width": 20, "height": 20 } }]
    }))?;
    fx.layout()?;

    assert_layout(
        &fx.tree,
        fx.root,
        json!({ "left": 10, "top": 10, "width": 20, "height": 20 }),
    );
    Ok(())
}

#[test]
fn test_min_and_max_bound_content_size() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "maxWidth": 50, "minHeight": 30 },
        "children": [{ "style": { "width": 80, "height": 10 } }]
    }))?;
    fx.layout()?;

    assert_eq!(fx.tree.layout_width(fx.root)?, 50.0);
    assert_eq!(fx.tree.layout_height(fx.root)?, 30.0);
    Ok(())
}

#[test]
fn test_min_wins_over_max() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "minWidth": 60, "maxWidth": 40, "height": 10 }
    }))?;
    fx.layout()?;

    assert_eq!(fx.tree.layout_width(fx.root)?, 60.0);
    Ok(())
}

#[test]
fn test_size_never_below_padding_and_border() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 5, "height": 5, "padding": 4, "border": 1 }
    }))?;
    fx.layout()?;

    assert_eq!(fx.tree.layout_width(fx.root)?, 10.0);
    assert_eq!(fx.tree.layout_height(fx.root)?, 10.0);
    Ok(())
}

#[test]
fn test_start_margin_on_cross_axis_mirrors_in_rtl() -> TestResult {
    for (direction, left) in [("ltr", 7.0), ("rtl", 83.0)] {
        let mut fx = Fixture::from_json(json!({
            "style": { "direction": direction, "width": 100, "height": 100, "alignItems": "flex-start" },
            "children": [{ "style": { "width": 10, "height": 10, "margin": { "start": 7 } } }]
        }))?;
        fx.layout()?;

        assert_eq!(fx.tree.layout_x(fx.node(&[0]))?, left, "direction {}", direction);
    }
    Ok(())
}
