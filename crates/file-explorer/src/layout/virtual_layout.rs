//! Layout synthesized from visible rows with fixed metrics.

use super::{Rect, RowDescriptor};
use crate::model::TreeRow;
use crate::traits::LayoutSource;

/// Default row height in pixels.
pub const DEFAULT_ROW_HEIGHT: f64 = 24.0;

/// A layout source that places rows on a fixed grid: one row per
/// `row_height`, indented by `indent_px` per level.
///
/// Useful where no real surface exists, such as text output and tests.
#[derive(Debug, Clone)]
pub struct VirtualLayout {
    rows: Vec<TreeRow>,
    container: Rect,
    row_height: f64,
    indent_px: f64,
}

impl VirtualLayout {
    /// Create a layout for `rows` in a container at the origin.
    pub fn new(rows: Vec<TreeRow>, indent_px: f64) -> Self {
        Self {
            rows,
            container: Rect::default(),
            row_height: DEFAULT_ROW_HEIGHT,
            indent_px,
        }
    }

    /// Set the row height.
    pub fn with_row_height(mut self, row_height: f64) -> Self {
        self.row_height = row_height;
        self
    }

    /// Place the container at a page position.
    pub fn with_container(mut self, container: Rect) -> Self {
        self.container = container;
        self
    }

    /// Rectangle of the row at `index`.
    fn row_rect(&self, index: usize, row: &TreeRow) -> Rect {
        Rect::new(
            self.container.left + row.level as f64 * self.indent_px,
            self.container.top + index as f64 * self.row_height,
            (self.container.width - row.level as f64 * self.indent_px).max(0.0),
            self.row_height,
        )
    }
}

impl LayoutSource for VirtualLayout {
    fn container_rect(&self) -> Rect {
        self.container
    }

    fn rows(&self) -> Vec<RowDescriptor> {
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| RowDescriptor::from_row(row, self.row_rect(i, row)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSnapshot;
    use crate::model::{build_tree, visible_rows, FileRecord};
    use std::collections::BTreeSet;

    #[test]
    fn test_rows_on_grid() {
        let tree = build_tree(&[FileRecord::modified("src/lib.rs")], false);
        let expanded: BTreeSet<String> = ["src".to_string()].into_iter().collect();
        let layout = VirtualLayout::new(visible_rows(&tree, &expanded), 16.0)
            .with_row_height(20.0)
            .with_container(Rect::new(100.0, 200.0, 300.0, 400.0));

        let snapshot = LayoutSnapshot::capture_from(&layout);
        let src = snapshot.node("src").unwrap();
        let lib = snapshot.node("src/lib.rs").unwrap();

        assert_eq!((src.cx, src.cy), (0.0, 10.0));
        assert_eq!((lib.cx, lib.cy), (16.0, 30.0));
        assert_eq!(lib.parent_path, "src");
    }
}
