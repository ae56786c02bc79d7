//! JSON descriptions of layout trees.
//!
//! A [`NodeDocument`] describes a node, its style and its children. Styles
//! accept numbers or unit strings for lengths (`10`, `"10px"`, `"auto"`) and
//! CSS-style shorthand for spacing (`"4 8"`). Leaves can declare a fixed
//! intrinsic size, which is installed as a measure function.
//!
//! [`LayoutSnapshot`] goes the other way and captures computed layouts as a
//! serializable tree.

use crate::{LayoutError, LayoutTree, MeasureMode, NodeId, measure_fn};
use flexlay_style::{
    Align, Direction, FlexDirection, FlexWrap, JustifyContent, PositionType, StyleParseError, Style,
    parse_length_value, parse_spacing_shorthand,
};
use flexlay_types::{Edge, Size, UNDEFINED};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Style error: {0}")]
    Style(#[from] StyleParseError),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// A length given either as a plain number or as text such as `"12px"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum LengthValue {
    Number(f32),
    Text(String),
}

impl LengthValue {
    pub fn resolve(&self) -> Result<f32, StyleParseError> {
        match self {
            LengthValue::Number(v) => Ok(*v),
            LengthValue::Text(s) => parse_length_value(s),
        }
    }
}

/// Spacing for margin, padding or border.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SpacingValue {
    /// The same value on every edge.
    Uniform(f32),
    /// One, two or four space-separated lengths.
    Shorthand(String),
    /// Explicit edges, e.g. `{"horizontal": 4, "start": "2px"}`.
    Edges(HashMap<Edge, LengthValue>),
}

impl SpacingValue {
    pub fn resolve(&self) -> Result<Vec<(Edge, f32)>, StyleParseError> {
        match self {
            SpacingValue::Uniform(v) => Ok(vec![(Edge::All, *v)]),
            SpacingValue::Shorthand(s) => parse_spacing_shorthand(s),
            SpacingValue::Edges(edges) => edges
                .iter()
                .map(|(&edge, value)| value.resolve().map(|v| (edge, v)))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StyleDocument {
    pub direction: Option<Direction>,
    pub flex_direction: Option<FlexDirection>,
    pub justify_content: Option<JustifyContent>,
    pub align_items: Option<Align>,
    pub align_self: Option<Align>,
    pub align_content: Option<Align>,
    pub position: Option<PositionType>,
    pub flex_wrap: Option<FlexWrap>,

    /// Legacy single-value flex. Applied before the explicit factors below.
    pub flex: Option<f32>,
    pub flex_grow: Option<f32>,
    pub flex_shrink: Option<f32>,
    pub flex_basis: Option<LengthValue>,

    pub width: Option<LengthValue>,
    pub height: Option<LengthValue>,
    pub min_width: Option<LengthValue>,
    pub min_height: Option<LengthValue>,
    pub max_width: Option<LengthValue>,
    pub max_height: Option<LengthValue>,

    pub margin: Option<SpacingValue>,
    pub padding: Option<SpacingValue>,
    pub border: Option<SpacingValue>,

    pub left: Option<LengthValue>,
    pub top: Option<LengthValue>,
    pub right: Option<LengthValue>,
    pub bottom: Option<LengthValue>,
    pub start: Option<LengthValue>,
    pub end: Option<LengthValue>,
}

fn length_or_undefined(value: &Option<LengthValue>) -> Result<f32, StyleParseError> {
    value.as_ref().map_or(Ok(UNDEFINED), LengthValue::resolve)
}

impl StyleDocument {
    /// Builds an engine style, starting from the defaults.
    pub fn to_style(&self) -> Result<Style, StyleParseError> {
        let mut style = Style::default();

        if let Some(v) = self.direction {
            style.direction = v;
        }
        if let Some(v) = self.flex_direction {
            style.flex_direction = v;
        }
        if let Some(v) = self.justify_content {
            style.justify_content = v;
        }
        if let Some(v) = self.align_items {
            style.align_items = v;
        }
        if let Some(v) = self.align_self {
            style.align_self = v;
        }
        if let Some(v) = self.align_content {
            style.align_content = v;
        }
        if let Some(v) = self.position {
            style.position_type = v;
        }
        if let Some(v) = self.flex_wrap {
            style.flex_wrap = v;
        }

        if let Some(flex) = self.flex {
            style.set_flex(flex);
        }
        if let Some(v) = self.flex_grow {
            style.flex_grow = v;
        }
        if let Some(v) = self.flex_shrink {
            style.flex_shrink = v;
        }
        if self.flex_basis.is_some() {
            style.flex_basis = length_or_undefined(&self.flex_basis)?;
        }

        style.width = length_or_undefined(&self.width)?;
        style.height = length_or_undefined(&self.height)?;
        style.min_width = length_or_undefined(&self.min_width)?;
        style.min_height = length_or_undefined(&self.min_height)?;
        style.max_width = length_or_undefined(&self.max_width)?;
        style.max_height = length_or_undefined(&self.max_height)?;

        for (value, spacing) in [
            (&self.margin, &mut style.margin),
            (&self.padding, &mut style.padding),
            (&self.border, &mut style.border),
        ] {
            if let Some(value) = value {
                for (edge, v) in value.resolve()? {
                    spacing.set(edge, v);
                }
            }
        }

        for (edge, value) in [
            (Edge::Left, &self.left),
            (Edge::Top, &self.top),
            (Edge::Right, &self.right),
            (Edge::Bottom, &self.bottom),
            (Edge::Start, &self.start),
            (Edge::End, &self.end),
        ] {
            if let Some(value) = value {
                style.position.set(edge, value.resolve()?);
            }
        }

        Ok(style)
    }
}

/// Intrinsic size of a measured leaf.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MeasuredSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeDocument {
    #[serde(default)]
    pub style: StyleDocument,
    #[serde(default)]
    pub children: Vec<NodeDocument>,
    /// Makes the node a measured leaf reporting this size, clamped to an
    /// at-most width.
    #[serde(default)]
    pub measure: Option<MeasuredSize>,
}

impl NodeDocument {
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self, DocumentError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Creates the described subtree in `tree` and returns its root.
    pub fn build(&self, tree: &mut LayoutTree) -> Result<NodeId, DocumentError> {
        let id = tree.new_node_with_style(self.style.to_style()?);

        if let Some(size) = self.measure {
            tree.set_measure_function(
                id,
                Some(measure_fn(move |_, width, width_mode, _, _| {
                    let width = match width_mode {
                        MeasureMode::AtMost => size.width.min(width),
                        _ => size.width,
                    };
                    Size::new(width, size.height)
                })),
            )?;
        }

        for child in &self.children {
            let child_id = child.build(tree)?;
            tree.add_child(id, child_id)?;
        }

        log::trace!("Built node {:?} with {} children", id, self.children.len());
        Ok(id)
    }
}

/// Parses a JSON node document and builds it into `tree`.
pub fn build_from_json(tree: &mut LayoutTree, json: &str) -> Result<NodeId, DocumentError> {
    NodeDocument::from_json(json)?.build(tree)
}

/// Computed layout of a subtree, in the shape the JSON documents use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutSnapshot>,
}

impl LayoutSnapshot {
    pub fn capture(tree: &LayoutTree, id: NodeId) -> Result<Self, LayoutError> {
        let layout = tree.layout(id)?;
        let children = tree
            .children(id)?
            .iter()
            .map(|&child| LayoutSnapshot::capture(tree, child))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            left: layout.left(),
            top: layout.top(),
            width: layout.width(),
            height: layout.height(),
            children,
        })
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(self)?)
    }
}
