//! File Explorer Actions
//!
//! Tagged actions the explorer state can process. The host maps its own
//! input (clicks, keys, search box edits, config reloads) to these and
//! dispatches them to [`ExplorerState`](crate::ExplorerState).

use crate::model::FileRecord;

/// Actions that can be performed on the file explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerAction {
    // === Catalog ===
    /// Replace the changed-file catalog (new diff loaded)
    SetFiles(Vec<FileRecord>),

    // === Search ===
    /// Set the search query
    SetQuery(String),
    /// Clear the search query
    ClearQuery,

    // === Tree Shape ===
    /// Enable or disable folding of single-child directory chains
    SetCollapsePackages(bool),

    // === Expansion ===
    /// Open or close a directory
    ToggleDirectory { path: String, expanded: bool },
    /// Open every directory
    ExpandAll,
    /// Close every directory
    CollapseAll,

    // === Selection ===
    /// Select a file by key
    SelectFile(String),
}

impl ExplorerAction {
    /// Check if this action changes the shape of the tree
    pub fn rebuilds_tree(&self) -> bool {
        matches!(
            self,
            ExplorerAction::SetFiles(_)
                | ExplorerAction::SetQuery(_)
                | ExplorerAction::ClearQuery
                | ExplorerAction::SetCollapsePackages(_)
        )
    }

    /// Check if this action only affects which directories are open
    pub fn is_expansion(&self) -> bool {
        matches!(
            self,
            ExplorerAction::ToggleDirectory { .. }
                | ExplorerAction::ExpandAll
                | ExplorerAction::CollapseAll
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuilds_tree() {
        assert!(ExplorerAction::SetQuery("src".into()).rebuilds_tree());
        assert!(ExplorerAction::SetCollapsePackages(true).rebuilds_tree());
        assert!(!ExplorerAction::ExpandAll.rebuilds_tree());
    }

    #[test]
    fn test_is_expansion() {
        let toggle = ExplorerAction::ToggleDirectory {
            path: "src".into(),
            expanded: false,
        };
        assert!(toggle.is_expansion());
        assert!(ExplorerAction::CollapseAll.is_expansion());
        assert!(!ExplorerAction::SelectFile("a.rs".into()).is_expansion());
    }
}
