//! Main state for the file explorer.

use super::ExpansionState;
use crate::action::ExplorerAction;
use crate::event::ExplorerEvent;
use crate::layout::{route, ConnectorStyle, LayoutSnapshot, ROUNDED_RADIUS};
use crate::model::{build_tree, visible_rows, DirectoryNode, FileCatalog, TreeRow};
use crate::search::{filter_files, is_active_query};
use crate::traits::LayoutSource;
use std::collections::BTreeSet;

/// Options the host passes to the explorer.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerOptions {
    /// Open every directory until the user decides otherwise.
    pub start_expanded: bool,
    /// Fold single-child directory chains into one row.
    pub collapse_packages: bool,
    pub node_connector: ConnectorStyle,
    /// Corner radius for connector elbows (0 = sharp).
    pub corner_radius: f64,
    /// Horizontal indent per level, used by renderers.
    pub indent_px: f64,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            start_expanded: true,
            collapse_packages: false,
            node_connector: ConnectorStyle::Solid,
            corner_radius: ROUNDED_RADIUS,
            indent_px: 16.0,
        }
    }
}

/// Main state for the file explorer.
#[derive(Debug, Clone)]
pub struct ExplorerState {
    catalog: FileCatalog,
    query: String,
    options: ExplorerOptions,
    expansion: ExpansionState,
    /// Key of the selected file.
    selected: Option<String>,

    // === Cached state ===
    /// Tree of the files matching the current query (invalidated on rebuild).
    cached_tree: Option<DirectoryNode>,
}

impl ExplorerState {
    /// Create a new explorer over `catalog`.
    pub fn new(catalog: FileCatalog, options: ExplorerOptions) -> Self {
        let mut state = Self {
            catalog,
            query: String::new(),
            options,
            expansion: ExpansionState::new(),
            selected: None,
            cached_tree: None,
        };
        state.reconcile_expansion();
        state
    }

    pub fn catalog(&self) -> &FileCatalog {
        &self.catalog
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    // === Cache accessors ===

    /// Tree of the files matching the current query (cached).
    pub fn tree(&mut self) -> &DirectoryNode {
        cached_tree(
            &mut self.cached_tree,
            &self.catalog,
            &self.query,
            self.options.collapse_packages,
        )
    }

    /// Directories to render open.
    pub fn expanded_set(&mut self) -> BTreeSet<String> {
        let tree = cached_tree(
            &mut self.cached_tree,
            &self.catalog,
            &self.query,
            self.options.collapse_packages,
        );
        self.expansion.effective_set(tree, &self.query)
    }

    /// Rows to render, in display order.
    pub fn visible_rows(&mut self) -> Vec<TreeRow> {
        let expanded = self.expanded_set();
        visible_rows(self.tree(), &expanded)
    }

    /// Connector paths for the rows currently laid out by `source`.
    ///
    /// Call only after the renderer has committed the rows from
    /// [`visible_rows`](Self::visible_rows). Returns nothing when connectors
    /// are disabled.
    pub fn connectors(&self, source: &dyn LayoutSource) -> Vec<String> {
        if !self.options.node_connector.is_visible() {
            return Vec::new();
        }
        let snapshot = LayoutSnapshot::capture_from(source);
        route(&snapshot, self.options.corner_radius)
    }

    // === Cache invalidation ===

    fn invalidate_tree_cache(&mut self) {
        self.cached_tree = None;
    }

    /// Carry user expansion over to the unfiltered tree of the current
    /// catalog.
    fn reconcile_expansion(&mut self) {
        let full_tree = build_tree(self.catalog.files(), self.options.collapse_packages);
        self.expansion
            .reconcile(&full_tree, self.options.start_expanded);
    }

    /// Handle an action and return events for the host.
    pub fn handle_action(&mut self, action: ExplorerAction) -> Vec<ExplorerEvent> {
        log::trace!("Explorer action: {:?}", action);
        let rebuilds = action.rebuilds_tree();
        let mut events = Vec::new();

        match action {
            ExplorerAction::SetFiles(files) => {
                self.catalog = FileCatalog::new(files);
                self.reconcile_expansion();
                let selection_gone = self
                    .selected
                    .as_deref()
                    .is_some_and(|key| self.catalog.get(key).is_none());
                if selection_gone {
                    self.selected = None;
                    events.push(ExplorerEvent::SelectionCleared);
                }
            }
            ExplorerAction::SetQuery(query) => {
                if query == self.query {
                    return events;
                }
                self.query = query;
            }
            ExplorerAction::ClearQuery => {
                if self.query.is_empty() {
                    return events;
                }
                self.query.clear();
            }
            ExplorerAction::SetCollapsePackages(collapse) => {
                if collapse == self.options.collapse_packages {
                    return events;
                }
                self.options.collapse_packages = collapse;
                self.reconcile_expansion();
            }
            ExplorerAction::ToggleDirectory { path, expanded } => {
                if self.expansion.toggle(&path, expanded) {
                    events.push(ExplorerEvent::ExpansionChanged);
                }
            }
            ExplorerAction::ExpandAll => {
                let full_tree = build_tree(self.catalog.files(), self.options.collapse_packages);
                self.expansion.expand_all(&full_tree);
                events.push(ExplorerEvent::ExpansionChanged);
            }
            ExplorerAction::CollapseAll => {
                self.expansion.collapse_all();
                events.push(ExplorerEvent::ExpansionChanged);
            }
            ExplorerAction::SelectFile(key) => {
                if self.catalog.get(&key).is_some() {
                    self.selected = Some(key.clone());
                    events.push(ExplorerEvent::FileSelected { key });
                } else {
                    log::debug!("Ignoring selection of unknown file {:?}", key);
                }
            }
        }

        if rebuilds {
            self.invalidate_tree_cache();
            let tree = self.tree();
            let file_count = tree.file_count();
            let directory_count = tree.directory_paths().len();
            log::debug!(
                "Rebuilt tree: {} files, {} directories (query: {:?})",
                file_count,
                directory_count,
                is_active_query(&self.query).then_some(&self.query)
            );
            events.push(ExplorerEvent::TreeRebuilt {
                file_count,
                directory_count,
            });
        }

        events
    }
}

fn cached_tree<'a>(
    slot: &'a mut Option<DirectoryNode>,
    catalog: &FileCatalog,
    query: &str,
    collapse_packages: bool,
) -> &'a DirectoryNode {
    slot.get_or_insert_with(|| {
        let files = filter_files(catalog.files(), query);
        build_tree(&files, collapse_packages)
    })
}
