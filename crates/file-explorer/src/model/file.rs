//! Changed-file records supplied by the host application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Path used by diffs for the missing side of a created or deleted file.
pub const DEV_NULL: &str = "/dev/null";

/// Errors that can occur when loading a file catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog JSON could not be parsed.
    #[error("Invalid file catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single changed file in a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Path before the change (`/dev/null` for created files).
    pub old_path: String,
    /// Path after the change (`/dev/null` for deleted files).
    pub new_path: String,
    #[serde(default)]
    pub is_renamed: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_deleted: bool,
    /// Language tag used by the highlighter.
    #[serde(default)]
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_binary: Option<bool>,
}

impl FileRecord {
    /// Create a modified file record where both sides share `path`.
    pub fn modified(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            language: language_for(&path).to_string(),
            old_path: path.clone(),
            new_path: path,
            is_renamed: false,
            is_new: false,
            is_deleted: false,
            is_binary: None,
        }
    }

    /// Create a record for a newly added file.
    pub fn added(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            language: language_for(&path).to_string(),
            old_path: DEV_NULL.to_string(),
            new_path: path,
            is_renamed: false,
            is_new: true,
            is_deleted: false,
            is_binary: None,
        }
    }

    /// Create a record for a deleted file.
    pub fn deleted(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            language: language_for(&path).to_string(),
            old_path: path,
            new_path: DEV_NULL.to_string(),
            is_renamed: false,
            is_new: false,
            is_deleted: true,
            is_binary: None,
        }
    }

    /// Create a record for a file moved from `old_path` to `new_path`.
    pub fn renamed(old_path: impl Into<String>, new_path: impl Into<String>) -> Self {
        let new_path = new_path.into();
        Self {
            language: language_for(&new_path).to_string(),
            old_path: old_path.into(),
            new_path,
            is_renamed: true,
            is_new: false,
            is_deleted: false,
            is_binary: None,
        }
    }

    /// Identity of the file in the tree: the new path, or the old path when
    /// the file was deleted.
    pub fn key(&self) -> &str {
        if self.new_path == DEV_NULL {
            &self.old_path
        } else {
            &self.new_path
        }
    }

    /// Last segment of the key.
    pub fn name(&self) -> &str {
        self.key()
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_else(|| self.key())
    }

    /// Change status derived from the record flags.
    pub fn status(&self) -> FileStatus {
        if self.is_new || self.old_path == DEV_NULL {
            FileStatus::Added
        } else if self.is_deleted || self.new_path == DEV_NULL {
            FileStatus::Deleted
        } else if self.is_renamed {
            FileStatus::Renamed
        } else {
            FileStatus::Modified
        }
    }

    /// Whether the record can be placed in a tree at all.
    fn has_key(&self) -> bool {
        self.key() != DEV_NULL && self.key().split('/').any(|s| !s.is_empty())
    }
}

/// Best-effort language tag from a file extension.
fn language_for(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("rs") => "rust",
        Some("ts") => "typescript",
        Some("tsx") => "tsx",
        Some("js") | Some("mjs") | Some("cjs") => "javascript",
        Some("jsx") => "jsx",
        Some("json") => "json",
        Some("md") => "markdown",
        Some("toml") => "toml",
        Some("css") => "css",
        Some("html") => "html",
        Some("py") => "python",
        Some("go") => "go",
        Some("yml") | Some("yaml") => "yaml",
        _ => "plaintext",
    }
}

/// File status in the pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Added,
    Modified,
    Deleted,
    Renamed,
}

impl FileStatus {
    /// Get a single-character representation.
    pub fn as_char(&self) -> char {
        match self {
            FileStatus::Added => 'A',
            FileStatus::Modified => 'M',
            FileStatus::Deleted => 'D',
            FileStatus::Renamed => 'R',
        }
    }
}

/// The flat, ordered collection of changed files for one diff load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileCatalog {
    files: Vec<FileRecord>,
}

impl FileCatalog {
    /// Build a catalog, dropping records that have no usable path.
    pub fn new(files: Vec<FileRecord>) -> Self {
        let total = files.len();
        let files: Vec<FileRecord> = files
            .into_iter()
            .filter(|file| {
                let keep = file.has_key();
                if !keep {
                    log::warn!(
                        "Dropping file record without a path (old: {:?}, new: {:?})",
                        file.old_path,
                        file.new_path
                    );
                }
                keep
            })
            .collect();

        log::debug!("Loaded file catalog with {}/{} records", files.len(), total);
        Self { files }
    }

    /// Parse a catalog from the host's JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let files: Vec<FileRecord> = serde_json::from_str(json)?;
        Ok(Self::new(files))
    }

    /// Records in host order.
    pub fn files(&self) -> &[FileRecord] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Find a record by its key.
    pub fn get(&self, key: &str) -> Option<&FileRecord> {
        self.files.iter().find(|f| f.key() == key)
    }
}

impl From<Vec<FileRecord>> for FileCatalog {
    fn from(files: Vec<FileRecord>) -> Self {
        Self::new(files)
    }
}
