//! Point-in-time capture of rendered row positions.
//!
//! Capture must run after the renderer has committed the current tree state,
//! otherwise the rectangles are stale. Each capture is independent; callers
//! coalesce bursts (resize) and keep only the latest result.

use crate::model::{NodeKind, TreeRow, ROOT_PATH};
use crate::traits::LayoutSource;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors that can occur when loading a serialized layout capture.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// The capture JSON could not be parsed.
    #[error("Invalid layout capture: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A measured rectangle in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn is_finite(&self) -> bool {
        self.left.is_finite() && self.top.is_finite() && self.height.is_finite()
    }
}

/// Raw attributes a renderer attaches to one row, plus its measured rect.
///
/// Attribute values arrive as text (or bare JSON numbers and booleans) and
/// are validated during capture, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDescriptor {
    #[serde(default, deserialize_with = "attribute")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "attribute")]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "attribute")]
    pub parent_path: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "attribute")]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "attribute")]
    pub collapsed: Option<String>,
    pub rect: Rect,
}

impl RowDescriptor {
    /// Describe a visible tree row rendered at `rect`.
    pub fn from_row(row: &TreeRow, rect: Rect) -> Self {
        Self {
            level: Some(row.level.to_string()),
            path: Some(row.path.clone()),
            parent_path: Some(row.parent_path.clone()),
            node_type: Some(row.kind.as_str().to_string()),
            collapsed: Some(row.collapsed.to_string()),
            rect,
        }
    }
}

/// Attribute values as renderers emit them.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttributeValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

fn attribute<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<AttributeValue> = Option::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        AttributeValue::Text(text) => text,
        AttributeValue::Number(number) => number.to_string(),
        AttributeValue::Flag(flag) => flag.to_string(),
    }))
}

/// A serialized capture: the container plus every row descriptor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutCapture {
    pub container: Rect,
    pub rows: Vec<RowDescriptor>,
}

impl LayoutCapture {
    /// Parse a capture exported by a renderer.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl LayoutSource for LayoutCapture {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn rows(&self) -> Vec<RowDescriptor> {
        self.rows.clone()
    }
}

/// Position of one rendered node relative to the scroll container.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    /// Left edge of the row.
    pub cx: f64,
    /// Vertical center of the row.
    pub cy: f64,
    pub level: usize,
    pub path: String,
    pub parent_path: String,
    pub kind: NodeKind,
    pub collapsed: bool,
}

/// Rendered nodes grouped by parent path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutSnapshot {
    nodes_by_parent: BTreeMap<String, Vec<LayoutNode>>,
}

impl LayoutSnapshot {
    /// Project measured rows into container-relative nodes.
    ///
    /// Rows without a numeric level or a path are decorative and skipped.
    pub fn capture(rows: &[RowDescriptor], container: Rect) -> Self {
        let mut nodes_by_parent: BTreeMap<String, Vec<LayoutNode>> = BTreeMap::new();
        let mut skipped = 0;

        for row in rows {
            let Some(node) = layout_node(row, container) else {
                skipped += 1;
                continue;
            };
            nodes_by_parent
                .entry(node.parent_path.clone())
                .or_default()
                .push(node);
        }

        if skipped > 0 {
            log::debug!("Skipped {} rows without tree attributes", skipped);
        }
        Self { nodes_by_parent }
    }

    /// Capture from an injected layout source.
    pub fn capture_from(source: &dyn LayoutSource) -> Self {
        Self::capture(&source.rows(), source.container_rect())
    }

    /// Build a snapshot from already positioned nodes.
    pub fn from_nodes(nodes: impl IntoIterator<Item = LayoutNode>) -> Self {
        let mut nodes_by_parent: BTreeMap<String, Vec<LayoutNode>> = BTreeMap::new();
        for node in nodes {
            nodes_by_parent
                .entry(node.parent_path.clone())
                .or_default()
                .push(node);
        }
        Self { nodes_by_parent }
    }

    pub fn nodes_by_parent(&self) -> &BTreeMap<String, Vec<LayoutNode>> {
        &self.nodes_by_parent
    }

    /// Children of `parent_path`, in capture order.
    pub fn children(&self, parent_path: &str) -> &[LayoutNode] {
        self.nodes_by_parent
            .get(parent_path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All nodes.
    pub fn nodes(&self) -> impl Iterator<Item = &LayoutNode> {
        self.nodes_by_parent.values().flatten()
    }

    /// Find a node by its own path.
    pub fn node(&self, path: &str) -> Option<&LayoutNode> {
        self.nodes().find(|node| node.path == path)
    }

    pub fn len(&self) -> usize {
        self.nodes_by_parent.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn layout_node(row: &RowDescriptor, container: Rect) -> Option<LayoutNode> {
    let level = parse_level(row.level.as_deref()?)?;
    let path = row.path.as_deref().filter(|p| !p.is_empty())?;
    if !row.rect.is_finite() {
        return None;
    }

    let parent_path = row
        .parent_path
        .as_deref()
        .filter(|p| !p.is_empty())
        .unwrap_or(ROOT_PATH);
    let kind = row
        .node_type
        .as_deref()
        .map(NodeKind::from_token)
        .unwrap_or_default();
    let collapsed = row
        .collapsed
        .as_deref()
        .is_some_and(|c| c.trim().eq_ignore_ascii_case("true"));

    Some(LayoutNode {
        cx: row.rect.left - container.left,
        cy: row.rect.top - container.top + row.rect.height / 2.0,
        level,
        path: path.to_string(),
        parent_path: parent_path.to_string(),
        kind,
        collapsed,
    })
}

/// Non-negative integral level. JSON numbers like `1.0` count as integral.
fn parse_level(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if let Ok(level) = raw.parse::<usize>() {
        return Some(level);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(level: &str, path: &str, parent: Option<&str>, rect: Rect) -> RowDescriptor {
        RowDescriptor {
            level: Some(level.to_string()),
            path: Some(path.to_string()),
            parent_path: parent.map(str::to_string),
            node_type: Some("directory".to_string()),
            collapsed: None,
            rect,
        }
    }

    #[test]
    fn test_capture_relative_to_container() {
        let container = Rect::new(100.0, 50.0, 300.0, 600.0);
        let rows = vec![row("0", "src", None, Rect::new(110.0, 60.0, 200.0, 24.0))];

        let snapshot = LayoutSnapshot::capture(&rows, container);
        let node = snapshot.node("src").unwrap();

        assert_eq!(node.cx, 10.0);
        assert_eq!(node.cy, 22.0);
        assert_eq!(node.parent_path, ROOT_PATH);
        assert_eq!(node.kind, NodeKind::Directory);
        assert!(!node.collapsed);
    }

    #[test]
    fn test_capture_groups_by_parent() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let rows = vec![
            row("0", "src", Some("root"), rect),
            row("1", "src/a.rs", Some("src"), rect),
            row("1", "src/b.rs", Some("src"), rect),
        ];

        let snapshot = LayoutSnapshot::capture(&rows, Rect::default());
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.children("src").len(), 2);
        assert_eq!(snapshot.children("root").len(), 1);
        assert!(snapshot.children("missing").is_empty());
    }

    #[test]
    fn test_capture_skips_rows_without_tree_attributes() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut no_path = row("1", "", None, rect);
        no_path.path = None;
        let rows = vec![
            row("abc", "src", None, rect),
            row("", "lib", None, rect),
            no_path,
            row("1", "", None, rect),
            row(" 2 ", "ok", None, rect),
        ];

        let snapshot = LayoutSnapshot::capture(&rows, Rect::default());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.node("ok").unwrap().level, 2);
    }

    #[test]
    fn test_capture_accepts_integral_float_levels() {
        let json = r#"{
            "container": {"left": 0, "top": 0, "width": 200, "height": 400},
            "rows": [
                {"level": 1.0, "path": "src/a.rs", "parentPath": "src",
                 "rect": {"left": 0, "top": 0, "width": 100, "height": 20}},
                {"level": 1.5, "path": "src/b.rs", "parentPath": "src",
                 "rect": {"left": 0, "top": 20, "width": 100, "height": 20}},
                {"level": -1, "path": "src/c.rs", "parentPath": "src",
                 "rect": {"left": 0, "top": 40, "width": 100, "height": 20}}
            ]
        }"#;

        let snapshot = LayoutSnapshot::capture_from(&LayoutCapture::from_json(json).unwrap());
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.node("src/a.rs").unwrap().level, 1);
    }

    #[test]
    fn test_capture_defaults_type_and_collapsed() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut unknown = row("0", "weird", None, rect);
        unknown.node_type = Some("symlink".to_string());
        let mut file = row("0", "file.rs", None, rect);
        file.node_type = Some("file".to_string());
        file.collapsed = Some("TRUE".to_string());

        let snapshot = LayoutSnapshot::capture(&[unknown, file], Rect::default());
        assert_eq!(snapshot.node("weird").unwrap().kind, NodeKind::Directory);
        assert!(!snapshot.node("weird").unwrap().collapsed);
        assert_eq!(snapshot.node("file.rs").unwrap().kind, NodeKind::File);
        assert!(snapshot.node("file.rs").unwrap().collapsed);
    }

    #[test]
    fn test_capture_from_json() {
        let json = r#"{
            "container": {"left": 0, "top": 0, "width": 200, "height": 400},
            "rows": [
                {"level": 0, "path": "src", "parentPath": "root", "type": "directory",
                 "collapsed": false, "rect": {"left": 4, "top": 0, "width": 100, "height": 20}},
                {"level": "1", "path": "src/lib.rs", "parentPath": "src", "type": "file",
                 "rect": {"left": 20, "top": 20, "width": 100, "height": 20}},
                {"rect": {"left": 0, "top": 40, "width": 100, "height": 20}}
            ]
        }"#;

        let capture = LayoutCapture::from_json(json).unwrap();
        let snapshot = LayoutSnapshot::capture_from(&capture);

        assert_eq!(snapshot.len(), 2);
        let lib = snapshot.node("src/lib.rs").unwrap();
        assert_eq!((lib.cx, lib.cy), (20.0, 30.0));
        assert_eq!(lib.kind, NodeKind::File);
    }
}
