mod common;

use common::{Fixture, TestResult, consume_layouts, init_logger, text_measure};
use flexlay::{
    DebugProfiler, Direction, LayoutConfig, LayoutContext, LayoutTree, MEASUREMENT_CACHE_CAPACITY, MeasureMode,
    Size, measure_fn,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

#[test]
fn test_stretched_text_wraps_to_container_width() -> TestResult {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, 300.0)?;
    let text = tree.new_node();
    tree.set_measure_function(text, Some(text_measure(100, 10.0, 20.0)))?;
    tree.add_child(root, text)?;

    let mut ctx = LayoutContext::default();
    tree.calculate_layout(&mut ctx, root, f32::NAN, f32::NAN, Direction::Inherit)?;

    assert_eq!(tree.layout_width(text)?, 300.0);
    assert_eq!(tree.layout_height(text)?, 80.0);
    assert_eq!(tree.layout_height(root)?, 80.0);
    Ok(())
}

#[test]
fn test_available_width_limits_text_in_unsized_root() -> TestResult {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_align_items(root, flexlay::Align::FlexStart)?;
    let text = tree.new_node();
    tree.set_measure_function(text, Some(text_measure(30, 10.0, 20.0)))?;
    tree.add_child(root, text)?;
    let mut ctx = LayoutContext::default();

    tree.calculate_layout(&mut ctx, root, 200.0, f32::NAN, Direction::Inherit)?;
    assert_eq!(tree.layout_width(text)?, 200.0);
    assert_eq!(tree.layout_height(text)?, 40.0);

    consume_layouts(&mut tree, root)?;
    tree.calculate_layout(&mut ctx, root, 500.0, f32::NAN, Direction::Inherit)?;
    assert_eq!(tree.layout_width(text)?, 300.0);
    assert_eq!(tree.layout_height(text)?, 20.0);
    assert_eq!(tree.layout_width(root)?, 300.0);
    Ok(())
}

#[test]
fn test_measured_leaf_from_document() -> TestResult {
    let mut fx = Fixture::from_json(json!({
        "style": { "width": 100, "alignItems": "flex-start" },
        "children": [{ "measure": { "width": 150, "height": 20 } }]
    }))?;
    fx.layout()?;

    let leaf = fx.node(&[0]);
    assert_eq!(fx.tree.layout_width(leaf)?, 100.0);
    assert_eq!(fx.tree.layout_height(leaf)?, 20.0);
    Ok(())
}

#[test]
fn test_only_unknown_dimensions_are_measured() -> TestResult {
    init_logger();
    let calls = Arc::new(Mutex::new(Vec::new()));
    let recorded = calls.clone();

    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let leaf = tree.new_node();
    tree.set_width(leaf, 40.0)?;
    tree.set_padding(leaf, flexlay::Edge::Horizontal, 5.0)?;
    tree.set_measure_function(
        leaf,
        Some(measure_fn(move |_, width, width_mode, _, height_mode| {
            recorded.lock().unwrap().push((width, width_mode, height_mode));
            Size::new(999.0, 12.0)
        })),
    )?;
    tree.add_child(root, leaf)?;

    let mut ctx = LayoutContext::default();
    tree.calculate_layout(&mut ctx, root, f32::NAN, f32::NAN, Direction::Inherit)?;

    // The style width wins over the measured one; the content box is offered.
    assert_eq!(tree.layout_width(leaf)?, 40.0);
    assert_eq!(tree.layout_height(leaf)?, 12.0);
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0], (30.0, MeasureMode::Exactly, MeasureMode::Undefined));
    Ok(())
}

#[test]
fn test_fully_sized_leaf_is_never_measured() -> TestResult {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let leaf = tree.new_node();
    tree.set_width(leaf, 40.0)?;
    tree.set_height(leaf, 10.0)?;
    tree.set_measure_function(leaf, Some(measure_fn(|_, _, _, _, _| panic!("measured a sized leaf"))))?;
    tree.add_child(root, leaf)?;

    let mut ctx = LayoutContext::default();
    tree.calculate_layout(&mut ctx, root, f32::NAN, f32::NAN, Direction::Inherit)?;

    assert_eq!(tree.layout_height(root)?, 10.0);
    Ok(())
}

#[test]
fn test_measurement_cache_evicts_oldest_entry() -> TestResult {
    init_logger();
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_align_items(root, flexlay::Align::FlexStart)?;
    let leaf = tree.new_node();
    tree.set_measure_function(leaf, Some(text_measure(100, 10.0, 20.0)))?;
    tree.add_child(root, leaf)?;

    let profiler = Arc::new(DebugProfiler::new());
    let mut ctx = LayoutContext::with_profiler(LayoutConfig::default(), profiler.clone());

    let widths: Vec<f32> = (0..=MEASUREMENT_CACHE_CAPACITY).map(|i| 100.0 + i as f32).collect();
    for &width in widths.iter().chain([widths[0], widths[widths.len() - 1]].iter()) {
        tree.set_width(root, width)?;
        tree.calculate_layout(&mut ctx, root, f32::NAN, f32::NAN, Direction::Inherit)?;
        consume_layouts(&mut tree, root)?;
    }

    // One more distinct width than the cache holds pushes out the first.
    assert_eq!(profiler.measures(), MEASUREMENT_CACHE_CAPACITY + 2);
    assert_eq!(profiler.measure_hits(), 1);
    profiler.log_summary();
    Ok(())
}
