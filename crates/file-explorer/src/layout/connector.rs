//! Parent-to-child connector paths for the tree overlay.
//!
//! Paths use SVG path syntax in container-relative pixels. Rows are anchored
//! at their left edge and vertical center (see [`LayoutNode`]).

use super::{LayoutNode, LayoutSnapshot};
use crate::model::{NodeKind, ROOT_PATH};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Horizontal distance from a parent's left edge to its guide line.
pub const OFFSET_X: f64 = 11.0;
/// Vertical drop below a directory's center where its guide line starts.
pub const OFFSET_Y: f64 = 8.0;
/// Gap left before a directory row's chevron.
pub const DIRECTORY_END_INSET: f64 = 4.0;
/// Corner radius used for rounded connectors.
pub const ROUNDED_RADIUS: f64 = 6.0;

/// How connectors are stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStyle {
    #[default]
    Solid,
    Dashed,
    /// No connectors; routing is skipped entirely.
    None,
}

impl ConnectorStyle {
    /// Whether connectors are drawn at all.
    pub fn is_visible(&self) -> bool {
        !matches!(self, ConnectorStyle::None)
    }

    /// Stroke dash pattern for the overlay, `None` for continuous lines.
    pub fn dash_array(&self) -> Option<&'static str> {
        match self {
            ConnectorStyle::Dashed => Some("4 4"),
            ConnectorStyle::Solid | ConnectorStyle::None => None,
        }
    }
}

/// Route one connector per node whose parent is present in the snapshot.
///
/// Top-level nodes are not connected to the implicit root, and nodes whose
/// parent was not captured are skipped.
pub fn route(snapshot: &LayoutSnapshot, radius: f64) -> Vec<String> {
    let by_path: HashMap<&str, &LayoutNode> = snapshot
        .nodes()
        .map(|node| (node.path.as_str(), node))
        .collect();

    let mut paths = Vec::new();
    for (parent_path, children) in snapshot.nodes_by_parent() {
        if parent_path == ROOT_PATH {
            continue;
        }
        let Some(parent) = by_path.get(parent_path.as_str()) else {
            log::trace!(
                "No rendered parent {:?}, skipping {} connectors",
                parent_path,
                children.len()
            );
            continue;
        };

        paths.extend(children.iter().map(|child| connector_path(parent, child, radius)));
    }
    paths
}

/// Path from `parent`'s guide line to `child`.
///
/// A zero radius gives a sharp elbow. A positive radius rounds the elbow
/// when the vertical run fits two radii, otherwise the connector becomes a
/// straight segment.
pub fn connector_path(parent: &LayoutNode, child: &LayoutNode, radius: f64) -> String {
    let start_x = parent.cx + OFFSET_X;
    let start_y = parent.cy
        + match parent.kind {
            NodeKind::Directory => OFFSET_Y,
            NodeKind::File => 0.0,
        };
    let end_x = child.cx
        + match child.kind {
            NodeKind::Directory => DIRECTORY_END_INSET,
            NodeKind::File => 0.0,
        };
    let end_y = child.cy;

    let radius = radius.max(0.0);
    if radius == 0.0 {
        return format!(
            "M {} {} V {} H {}",
            num(start_x),
            num(start_y),
            num(end_y),
            num(end_x)
        );
    }

    let fitted = radius.min(((end_y - start_y) / 2.0).max(0.0));
    let curve_start_y = end_y - fitted;
    if fitted < radius || curve_start_y <= start_y {
        return format!(
            "M {} {} L {} {}",
            num(start_x),
            num(start_y),
            num(end_x),
            num(end_y)
        );
    }

    let direction = if end_x >= start_x { 1.0 } else { -1.0 };
    format!(
        "M {} {} V {} Q {} {} {} {} H {}",
        num(start_x),
        num(start_y),
        num(curve_start_y),
        num(start_x),
        num(end_y),
        num(start_x + direction * fitted),
        num(end_y),
        num(end_x)
    )
}

/// Format a coordinate without a trailing `.0` or a negative zero.
fn num(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
