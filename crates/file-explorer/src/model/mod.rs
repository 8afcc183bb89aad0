//! Data models for the file explorer.

mod file;
mod row;
mod tree;

pub use file::{CatalogError, FileCatalog, FileRecord, FileStatus, DEV_NULL};
pub use row::{visible_rows, NodeKind, TreeRow};
pub use tree::{build_tree, child_path, DirectoryNode, FileNode, TreeNode, ROOT_PATH};
