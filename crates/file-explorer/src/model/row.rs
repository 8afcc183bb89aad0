//! Visible-row projection of the tree, in the order a renderer draws it.

use super::tree::{child_path, DirectoryNode, TreeNode, ROOT_PATH};
use super::FileRecord;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Kind of a rendered node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    File,
    #[default]
    Directory,
}

impl NodeKind {
    /// Attribute token used by renderers.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::File => "file",
            NodeKind::Directory => "directory",
        }
    }

    /// Parse a renderer token. Anything other than `file` is a directory.
    pub fn from_token(token: &str) -> Self {
        if token.trim().eq_ignore_ascii_case("file") {
            NodeKind::File
        } else {
            NodeKind::Directory
        }
    }
}

/// A row in the rendered tree.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    /// Nesting depth (0 = top level).
    pub level: usize,
    /// Display name (collapsed directories show the joined chain).
    pub name: String,
    /// Full path of the node.
    pub path: String,
    /// Full path of the parent, `root` for top-level rows.
    pub parent_path: String,
    pub kind: NodeKind,
    /// Whether this directory is closed. Always false for files.
    pub collapsed: bool,
    /// The file record (for files).
    pub file: Option<FileRecord>,
    /// Whether this is the last item in its parent.
    pub is_last: bool,
    /// For each ancestor level, whether that ancestor has more siblings below.
    pub ancestor_has_next: Vec<bool>,
}

impl TreeRow {
    pub fn is_directory(&self) -> bool {
        self.kind == NodeKind::Directory
    }

    /// Get the icon for this row.
    pub fn icon(&self) -> &'static str {
        match (self.kind, self.collapsed) {
            (NodeKind::Directory, false) => "▼ ",
            (NodeKind::Directory, true) => "▶ ",
            (NodeKind::File, _) => "  ",
        }
    }

    /// Get the tree prefix with guide lines.
    /// - Top level: ""
    /// - Nested, more siblings below: "│  ├─ "
    /// - Nested, last item: "│  └─ "
    pub fn tree_prefix(&self) -> String {
        if self.level == 0 {
            return String::new();
        }

        let mut prefix: String = self
            .ancestor_has_next
            .iter()
            .map(|&has_next| if has_next { "│  " } else { "   " })
            .collect();

        prefix.push_str(if self.is_last { "└─ " } else { "├─ " });
        prefix
    }
}

/// Directories first, then names ignoring case.
fn display_order(a: &TreeNode, b: &TreeNode) -> Ordering {
    match (a.is_directory(), b.is_directory()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name()
            .to_lowercase()
            .cmp(&b.name().to_lowercase())
            .then_with(|| a.name().cmp(b.name())),
    }
}

/// Flatten the tree into rows, descending only into directories contained
/// in `expanded`.
pub fn visible_rows(root: &DirectoryNode, expanded: &BTreeSet<String>) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    push_children(root, ROOT_PATH, 0, &[], expanded, &mut rows);
    rows
}

fn push_children(
    dir: &DirectoryNode,
    dir_path: &str,
    level: usize,
    ancestor_has_next: &[bool],
    expanded: &BTreeSet<String>,
    rows: &mut Vec<TreeRow>,
) {
    let mut children: Vec<&TreeNode> = dir.children.values().collect();
    children.sort_by(|a, b| display_order(a, b));
    let count = children.len();

    for (i, child) in children.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let path = child_path(dir_path, child.name());

        match child {
            TreeNode::Directory(sub) => {
                let is_open = expanded.contains(&path);
                rows.push(TreeRow {
                    level,
                    name: sub.name.clone(),
                    path: path.clone(),
                    parent_path: dir_path.to_string(),
                    kind: NodeKind::Directory,
                    collapsed: !is_open,
                    file: None,
                    is_last,
                    ancestor_has_next: ancestor_has_next.to_vec(),
                });

                if is_open {
                    // Top-level rows have no guide column of their own.
                    let mut child_ancestors = ancestor_has_next.to_vec();
                    if level > 0 {
                        child_ancestors.push(!is_last);
                    }
                    push_children(sub, &path, level + 1, &child_ancestors, expanded, rows);
                }
            }
            TreeNode::File(file) => rows.push(TreeRow {
                level,
                name: file.name.clone(),
                path,
                parent_path: dir_path.to_string(),
                kind: NodeKind::File,
                collapsed: false,
                file: Some(file.file.clone()),
                is_last,
                ancestor_has_next: ancestor_has_next.to_vec(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::build_tree;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> DirectoryNode {
        let files: Vec<FileRecord> = ["src/main.rs", "src/lib.rs", "tests/test.rs", "Cargo.toml"]
            .iter()
            .map(|p| FileRecord::modified(*p))
            .collect();
        build_tree(&files, false)
    }

    fn expanded(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_rows_directories_first_and_sorted() {
        let rows = visible_rows(&sample_tree(), &expanded(&["src", "tests"]));
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();

        assert_eq!(
            paths,
            vec![
                "src",
                "src/lib.rs",
                "src/main.rs",
                "tests",
                "tests/test.rs",
                "Cargo.toml"
            ]
        );
        assert_eq!(rows[0].parent_path, ROOT_PATH);
        assert_eq!(rows[1].parent_path, "src");
        assert_eq!(rows[1].level, 1);
    }

    #[test]
    fn test_closed_directories_hide_children() {
        let rows = visible_rows(&sample_tree(), &expanded(&["tests"]));
        let paths: Vec<&str> = rows.iter().map(|r| r.path.as_str()).collect();

        assert_eq!(paths, vec!["src", "tests", "tests/test.rs", "Cargo.toml"]);
        assert!(rows[0].collapsed);
        assert!(!rows[1].collapsed);
        assert_eq!(rows[0].icon(), "▶ ");
        assert_eq!(rows[1].icon(), "▼ ");
        assert_eq!(rows[3].icon(), "  ");
    }

    #[test]
    fn test_last_child_flags() {
        let rows = visible_rows(&sample_tree(), &expanded(&["src"]));
        let lib = &rows[1];
        let main = &rows[2];

        assert!(!lib.is_last);
        assert!(main.is_last);
        assert_eq!(lib.tree_prefix(), "├─ ");
        assert_eq!(main.tree_prefix(), "└─ ");
        assert!(rows.last().unwrap().is_last);
    }

    #[test]
    fn test_nested_tree_prefix() {
        let files = vec![
            FileRecord::modified("src/utils/mod.rs"),
            FileRecord::modified("src/main.rs"),
        ];
        let tree = build_tree(&files, false);
        let rows = visible_rows(&tree, &expanded(&["src", "src/utils"]));

        let module = rows.iter().find(|r| r.path == "src/utils/mod.rs").unwrap();
        assert_eq!(module.level, 2);
        assert_eq!(module.ancestor_has_next, vec![true]);
        assert_eq!(module.tree_prefix(), "│  └─ ");
    }

    #[test]
    fn test_node_kind_tokens() {
        assert_eq!(NodeKind::from_token("file"), NodeKind::File);
        assert_eq!(NodeKind::from_token("directory"), NodeKind::Directory);
        assert_eq!(NodeKind::from_token("symlink"), NodeKind::Directory);
        assert_eq!(NodeKind::File.as_str(), "file");
    }
}
