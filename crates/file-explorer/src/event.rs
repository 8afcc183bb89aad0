//! Events emitted by the explorer for the host application to handle.

/// Events emitted by [`ExplorerState`](crate::ExplorerState).
///
/// The explorer never touches the renderer directly. After handling these,
/// the host re-renders and, once the new rows are laid out, captures a fresh
/// layout for connector routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerEvent {
    /// The tree was rebuilt (catalog, query or folding changed).
    TreeRebuilt {
        /// Files in the rebuilt tree.
        file_count: usize,
        /// Directories in the rebuilt tree.
        directory_count: usize,
    },

    /// The set of open directories changed.
    ExpansionChanged,

    /// A file was selected.
    FileSelected {
        /// Key of the selected file.
        key: String,
    },

    /// The selected file is no longer in the catalog.
    SelectionCleared,
}
