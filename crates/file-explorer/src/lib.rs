//! # file-explorer
//!
//! The file tree behind a pull-request review screen: a directory tree built
//! from the flat list of changed files, search filtering, expansion state,
//! and the geometry of the guide lines connecting each row to its parent.
//!
//! ## Design Principles
//!
//! This crate is **renderer-agnostic**. It owns the data model and the
//! geometry; drawing stays with the host:
//!
//! - The host supplies [`FileRecord`]s and [`ExplorerOptions`]
//! - The renderer draws [`TreeRow`]s from [`ExplorerState::visible_rows`]
//! - After layout, the renderer exposes its rows through a [`LayoutSource`]
//!   and gets back SVG path strings for the connector overlay
//!
//! Nothing in here fails on malformed input. Bad rows are skipped, unknown
//! node types are treated as directories, and connectors that cannot be
//! routed are simply not drawn.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use file_explorer::{ExplorerAction, ExplorerOptions, ExplorerState, FileCatalog};
//!
//! let catalog = FileCatalog::from_json(&json)?;
//! let mut state = ExplorerState::new(catalog, ExplorerOptions::default());
//!
//! // Map host input to actions
//! state.handle_action(ExplorerAction::SetQuery("hooks".into()));
//!
//! // Render rows, then route connectors from the measured layout
//! let rows = state.visible_rows();
//! renderer.draw(&rows);
//! let paths = state.connectors(&renderer.layout());
//! ```

pub mod action;
pub mod event;
pub mod layout;
pub mod model;
pub mod search;
pub mod state;
pub mod traits;

// Re-export commonly used types
pub use action::ExplorerAction;
pub use event::ExplorerEvent;
pub use layout::{
    connector_path, route, ConnectorStyle, LayoutCapture, LayoutError, LayoutNode,
    LayoutSnapshot, Rect, RowDescriptor, VirtualLayout,
};
pub use model::{
    build_tree, visible_rows, CatalogError, DirectoryNode, FileCatalog, FileNode, FileRecord,
    FileStatus, NodeKind, TreeNode, TreeRow, DEV_NULL, ROOT_PATH,
};
pub use search::filter_files;
pub use state::{ExpansionState, ExplorerOptions, ExplorerState};
pub use traits::LayoutSource;
