//! Directory/file tree built from a flat list of changed files.

use super::FileRecord;
use std::collections::{BTreeMap, BTreeSet};

/// Implicit path of the tree root. Top-level nodes use it as their parent.
pub const ROOT_PATH: &str = "root";

/// Node in the file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory(DirectoryNode),
    File(FileNode),
}

impl TreeNode {
    /// Display name of the node.
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory(dir) => &dir.name,
            TreeNode::File(file) => &file.name,
        }
    }

    /// Check if this node is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, TreeNode::Directory(_))
    }

    pub fn as_directory(&self) -> Option<&DirectoryNode> {
        match self {
            TreeNode::Directory(dir) => Some(dir),
            TreeNode::File(_) => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileNode> {
        match self {
            TreeNode::File(file) => Some(file),
            TreeNode::Directory(_) => None,
        }
    }
}

/// A leaf holding one changed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    pub name: String,
    pub file: FileRecord,
}

/// A directory. After package collapsing the name may span several
/// segments (`a/b/c`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryNode {
    pub name: String,
    /// Children keyed by display name. Iteration order carries no meaning.
    pub children: BTreeMap<String, TreeNode>,
}

/// Path of a child node given its parent's path.
pub fn child_path(parent_path: &str, name: &str) -> String {
    if parent_path == ROOT_PATH || parent_path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent_path, name)
    }
}

/// Build a tree from `files`, optionally folding single-child directory
/// chains into one node.
///
/// Empty path segments are skipped. The builder does not sort; ordering is
/// left to the consumer.
pub fn build_tree(files: &[FileRecord], collapse_packages: bool) -> DirectoryNode {
    let mut root = DirectoryNode::new(ROOT_PATH);

    for file in files {
        let segments: Vec<&str> = file.key().split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            log::debug!("Skipping file without path segments: {:?}", file.key());
            continue;
        }
        root.insert_path(&segments, file);
    }

    if collapse_packages {
        root.collapse_children();
    }

    log::trace!(
        "Built file tree for {} files (collapse_packages: {})",
        files.len(),
        collapse_packages
    );
    root
}

impl DirectoryNode {
    /// Create an empty directory node.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: BTreeMap::new(),
        }
    }

    /// Insert a file below this directory, creating intermediate directories.
    fn insert_path(&mut self, parts: &[&str], file: &FileRecord) {
        match parts {
            [] => {}
            [name] => {
                if let Some(TreeNode::Directory(_)) = self.children.get(*name) {
                    log::warn!(
                        "File {:?} clashes with an existing directory, skipping",
                        file.key()
                    );
                    return;
                }
                self.children.insert(
                    name.to_string(),
                    TreeNode::File(FileNode {
                        name: name.to_string(),
                        file: file.clone(),
                    }),
                );
            }
            [dir_name, rest @ ..] => {
                let child = self
                    .children
                    .entry(dir_name.to_string())
                    .or_insert_with(|| TreeNode::Directory(DirectoryNode::new(*dir_name)));

                match child {
                    TreeNode::Directory(dir) => dir.insert_path(rest, file),
                    TreeNode::File(_) => log::warn!(
                        "Directory {:?} clashes with an existing file, skipping {:?}",
                        dir_name,
                        file.key()
                    ),
                }
            }
        }
    }

    /// Fold single-child directory chains below this node. The node itself
    /// keeps its name, which is what the implicit root needs.
    fn collapse_children(&mut self) {
        let children = std::mem::take(&mut self.children);
        self.children = children
            .into_values()
            .map(|mut node| {
                if let TreeNode::Directory(dir) = &mut node {
                    dir.absorb_single_child_chain();
                    dir.collapse_children();
                }
                (node.name().to_string(), node)
            })
            .collect();
    }

    /// Merge the only child into this node while that child is a directory.
    fn absorb_single_child_chain(&mut self) {
        while self.children.len() == 1 {
            let Some((_, TreeNode::Directory(_))) = self.children.first_key_value() else {
                break;
            };
            if let Some((_, TreeNode::Directory(child))) = self.children.pop_first() {
                self.name = format!("{}/{}", self.name, child.name);
                self.children = child.children;
            }
        }
    }

    /// Number of files below this directory.
    pub fn file_count(&self) -> usize {
        self.children
            .values()
            .map(|child| match child {
                TreeNode::Directory(dir) => dir.file_count(),
                TreeNode::File(_) => 1,
            })
            .sum()
    }

    /// Visit every node below this directory in depth-first order with its
    /// full path and its parent's path. `self_path` is this directory's path.
    pub fn walk<'a>(&'a self, self_path: &str, visit: &mut impl FnMut(&str, &str, &'a TreeNode)) {
        for child in self.children.values() {
            let path = child_path(self_path, child.name());
            visit(&path, self_path, child);
            if let TreeNode::Directory(dir) = child {
                dir.walk(&path, visit);
            }
        }
    }

    /// Paths of every directory in the tree, excluding the root.
    pub fn directory_paths(&self) -> BTreeSet<String> {
        let mut paths = BTreeSet::new();
        self.walk(ROOT_PATH, &mut |path, _, node| {
            if node.is_directory() {
                paths.insert(path.to_string());
            }
        });
        paths
    }

    /// Every file node together with its full path.
    pub fn file_nodes(&self) -> Vec<(String, &FileNode)> {
        let mut files = Vec::new();
        self.walk(ROOT_PATH, &mut |path, _, node| {
            if let TreeNode::File(file) = node {
                files.push((path.to_string(), file));
            }
        });
        files
    }

    /// Resolve a node by its full path. Collapsed directory names are matched
    /// as a whole.
    pub fn find(&self, path: &str) -> Option<&TreeNode> {
        let path = path.trim_matches('/');
        for child in self.children.values() {
            let name = child.name();
            if path == name {
                return Some(child);
            }
            if let (TreeNode::Directory(dir), Some(rest)) = (child, path.strip_prefix(name)) {
                if let Some(rest) = rest.strip_prefix('/') {
                    return dir.find(rest);
                }
            }
        }
        None
    }
}
