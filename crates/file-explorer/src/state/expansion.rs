//! Which directories are open.
//!
//! Three sources feed the effective set: directories the user toggled, the
//! "start expanded" policy, and directories kept open by an active search.
//! The policy is applied when the user set is seeded (see
//! [`ExpansionState::reconcile`]), so the effective set only merges the user
//! set with the search-driven directories.

use crate::model::DirectoryNode;
use crate::search::is_active_query;
use std::collections::BTreeSet;

/// User-controlled expansion state, keyed by directory path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    /// Directories the user (or the start-expanded policy) opened.
    user: BTreeSet<String>,
}

impl ExpansionState {
    /// Create an empty expansion state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state seeded for `tree`: every directory open with
    /// `start_expanded`, none otherwise.
    pub fn for_tree(tree: &DirectoryNode, start_expanded: bool) -> Self {
        let mut state = Self::new();
        state.reconcile(tree, start_expanded);
        state
    }

    /// Create a state with the given directories open.
    pub fn with_expanded<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            user: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The user-controlled set.
    pub fn user_set(&self) -> &BTreeSet<String> {
        &self.user
    }

    pub fn is_expanded(&self, path: &str) -> bool {
        self.user.contains(path)
    }

    /// Set membership of `path` in the user set. Returns whether anything
    /// changed.
    pub fn toggle(&mut self, path: &str, expanded: bool) -> bool {
        if self.user.contains(path) == expanded {
            return false;
        }

        if expanded {
            self.user.insert(path.to_string());
        } else {
            self.user.remove(path);
        }
        log::trace!("Directory {:?} expanded: {}", path, expanded);
        true
    }

    /// Open every directory of `tree`.
    pub fn expand_all(&mut self, tree: &DirectoryNode) {
        self.user = tree.directory_paths();
    }

    /// Close every directory.
    pub fn collapse_all(&mut self) {
        self.user.clear();
    }

    /// Directories to render open: the user set, plus every directory of the
    /// (already filtered) tree while a search is active.
    pub fn effective_set(&self, tree: &DirectoryNode, search_query: &str) -> BTreeSet<String> {
        let mut effective = self.user.clone();

        if is_active_query(search_query) {
            effective.extend(tree.directory_paths());
        }
        effective
    }

    /// Carry the user set over to a freshly built tree.
    ///
    /// Paths that no longer exist are dropped. With `start_expanded`, an
    /// empty result falls back to every directory of the new tree.
    pub fn reconcile(&mut self, tree: &DirectoryNode, start_expanded: bool) {
        let current = tree.directory_paths();
        let before = self.user.len();
        self.user.retain(|path| current.contains(path));

        if before != self.user.len() {
            log::debug!(
                "Pruned {} stale expanded directories",
                before - self.user.len()
            );
        }

        if start_expanded && self.user.is_empty() {
            self.user = current;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{build_tree, FileRecord};
    use crate::search::filter_files;
    use pretty_assertions::assert_eq;

    fn files() -> Vec<FileRecord> {
        ["src/components/Button.tsx", "src/hooks/useFetch.ts", "README.md"]
            .iter()
            .map(|p| FileRecord::modified(*p))
            .collect()
    }

    fn set(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_toggle_reports_changes() {
        let mut state = ExpansionState::new();
        assert!(state.toggle("src", true));
        assert!(!state.toggle("src", true));
        assert!(state.is_expanded("src"));
        assert!(state.toggle("src", false));
        assert!(!state.toggle("src", false));
        assert!(state.user_set().is_empty());
    }

    #[test]
    fn test_effective_set_without_query_is_user_set() {
        let tree = build_tree(&files(), false);
        let state = ExpansionState::with_expanded(["src/hooks"]);

        assert_eq!(state.effective_set(&tree, ""), set(&["src/hooks"]));
        assert_eq!(state.effective_set(&tree, "  "), set(&["src/hooks"]));
    }

    #[test]
    fn test_effective_set_with_query_adds_matching_directories() {
        let filtered = filter_files(&files(), "button");
        let tree = build_tree(&filtered, false);
        let state = ExpansionState::with_expanded(["docs"]);

        assert_eq!(
            state.effective_set(&tree, "button"),
            set(&["docs", "src", "src/components"])
        );
    }

    #[test]
    fn test_toggle_during_search_only_touches_user_set() {
        let filtered = filter_files(&files(), "button");
        let tree = build_tree(&filtered, false);
        let mut state = ExpansionState::with_expanded(["src"]);

        state.toggle("src", false);
        assert!(state.user_set().is_empty());
        assert!(state.effective_set(&tree, "button").contains("src"));
        assert!(!state.effective_set(&tree, "").contains("src"));
    }

    #[test]
    fn test_start_expanded_seeds_every_directory() {
        let tree = build_tree(&files(), false);

        let open = ExpansionState::for_tree(&tree, true);
        assert_eq!(
            open.effective_set(&tree, ""),
            set(&["src", "src/components", "src/hooks"])
        );

        let closed = ExpansionState::for_tree(&tree, false);
        assert!(closed.effective_set(&tree, "").is_empty());
        assert!(ExpansionState::new().effective_set(&tree, "").is_empty());
    }

    #[test]
    fn test_closing_one_directory_keeps_the_others_open() {
        let tree = build_tree(&files(), false);
        let mut state = ExpansionState::for_tree(&tree, true);

        assert!(state.toggle("src/hooks", false));
        assert_eq!(
            state.effective_set(&tree, ""),
            set(&["src", "src/components"])
        );
    }

    #[test]
    fn test_reconcile_prunes_stale_paths() {
        let tree = build_tree(&files(), false);
        let mut state = ExpansionState::with_expanded(["src", "gone", "src/hooks"]);

        state.reconcile(&tree, true);
        assert_eq!(state.user_set(), &set(&["src", "src/hooks"]));
    }

    #[test]
    fn test_reconcile_falls_back_to_expand_all() {
        let tree = build_tree(&files(), false);
        let mut state = ExpansionState::with_expanded(["gone"]);

        state.reconcile(&tree, true);
        assert_eq!(
            state.user_set(),
            &set(&["src", "src/components", "src/hooks"])
        );

        let mut closed = ExpansionState::with_expanded(["gone"]);
        closed.reconcile(&tree, false);
        assert!(closed.user_set().is_empty());
    }

    #[test]
    fn test_reconcile_after_collapse_packages_change() {
        let files = vec![
            FileRecord::modified("src/only/inner/Icon.tsx"),
            FileRecord::modified("src/main.ts"),
        ];
        let flat = build_tree(&files, false);
        let folded = build_tree(&files, true);

        let mut state = ExpansionState::for_tree(&flat, true);
        state.toggle("src/only", false);

        // The folded node keeps the path of the innermost directory.
        state.reconcile(&folded, true);
        assert_eq!(state.user_set(), &set(&["src", "src/only/inner"]));
    }
}
