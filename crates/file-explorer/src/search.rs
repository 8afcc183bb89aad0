//! Case-insensitive path search over the file catalog.

use crate::model::FileRecord;

/// Whether a query should filter at all.
pub fn is_active_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Keep the files whose key contains `query`, ignoring case.
///
/// A blank query returns every file. Otherwise the query is matched as
/// given, surrounding whitespace included. Order is preserved.
pub fn filter_files(files: &[FileRecord], query: &str) -> Vec<FileRecord> {
    if !is_active_query(query) {
        return files.to_vec();
    }

    let needle = query.to_lowercase();
    let matches: Vec<FileRecord> = files
        .iter()
        .filter(|file| file.key().to_lowercase().contains(&needle))
        .cloned()
        .collect();

    log::debug!(
        "Search {:?} matched {}/{} files",
        query,
        matches.len(),
        files.len()
    );
    matches
}
