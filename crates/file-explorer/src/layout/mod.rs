//! Measured layout and connector routing.

mod connector;
mod snapshot;
mod virtual_layout;

pub use connector::{
    connector_path, route, ConnectorStyle, DIRECTORY_END_INSET, OFFSET_X, OFFSET_Y,
    ROUNDED_RADIUS,
};
pub use snapshot::{LayoutCapture, LayoutError, LayoutNode, LayoutSnapshot, Rect, RowDescriptor};
pub use virtual_layout::{VirtualLayout, DEFAULT_ROW_HEIGHT};
