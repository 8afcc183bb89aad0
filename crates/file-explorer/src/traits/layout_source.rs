//! Trait for obtaining measured row rectangles.

use crate::layout::{Rect, RowDescriptor};

/// Provides the rendered rows and their container, measured after the
/// renderer has committed the current tree state.
///
/// Implement this over whatever surface draws the tree. Routing only ever
/// sees the values returned here, so it stays testable without a UI.
///
/// # Example
///
/// ```ignore
/// struct DomRows<'a> {
///     container: &'a Element,
/// }
///
/// impl LayoutSource for DomRows<'_> {
///     fn container_rect(&self) -> Rect {
///         to_rect(self.container.get_bounding_client_rect())
///     }
///
///     fn rows(&self) -> Vec<RowDescriptor> {
///         self.container
///             .query_selector_all("[data-path]")
///             .map(|el| RowDescriptor {
///                 level: el.get_attribute("data-level"),
///                 path: el.get_attribute("data-path"),
///                 parent_path: el.get_attribute("data-parent-path"),
///                 node_type: el.get_attribute("data-type"),
///                 collapsed: el.get_attribute("data-collapsed"),
///                 rect: to_rect(el.get_bounding_client_rect()),
///             })
///             .collect()
///     }
/// }
/// ```
pub trait LayoutSource {
    /// Rectangle of the scroll container the overlay is drawn in.
    fn container_rect(&self) -> Rect;

    /// Descriptors for every rendered row, decorative rows included.
    fn rows(&self) -> Vec<RowDescriptor>;
}
