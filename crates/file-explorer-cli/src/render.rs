//! Plain-text rendering of the visible rows.

use file_explorer::TreeRow;

/// Render rows as an indented tree with guide lines.
///
/// Directories show an open/closed marker, files their status letter.
pub fn render_tree(rows: &[TreeRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&row.tree_prefix());
        out.push_str(row.icon());
        if let Some(file) = &row.file {
            out.push(file.status().as_char());
            out.push(' ');
        }
        out.push_str(&row.name);
        if row.is_directory() {
            out.push('/');
        }
        out.push('\n');
    }
    out
}
