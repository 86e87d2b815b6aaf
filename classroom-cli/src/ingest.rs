//! File ingestion - turns the paths given on the command line into one
//! document string for the planner.
//!
//! Images are skipped outright. Plain text and markdown are read as-is. PDF
//! and DOCX need a decoding library this CLI does not ship, so they are
//! reported and contribute nothing. Anything else is read as lossy UTF-8.

use std::fs;
use std::path::Path;
use thiserror::Error;

const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "svg", "bmp", "webp"];
const TEXT_EXTENSIONS: [&str; 2] = ["txt", "md"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Image,
    Text,
    Pdf,
    Docx,
    Other,
}

impl SourceKind {
    /// Classify by file extension, case-insensitively
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            e if IMAGE_EXTENSIONS.contains(&e) => SourceKind::Image,
            e if TEXT_EXTENSIONS.contains(&e) => SourceKind::Text,
            "pdf" => SourceKind::Pdf,
            "docx" => SourceKind::Docx,
            _ => SourceKind::Other,
        }
    }

    pub fn is_textual(self) -> bool {
        !matches!(self, SourceKind::Image)
    }
}

#[derive(Debug, Clone)]
pub struct SourceFile {
    pub name: String,
    pub kind: SourceKind,
    /// `None` for images; empty for files that could not be decoded
    pub content: Option<String>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, kind: SourceKind, content: Option<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            content,
        }
    }
}

/// Read one file according to its kind
pub fn load_source(path: &Path) -> Result<SourceFile, IngestError> {
    let name = path.display().to_string();
    let kind = SourceKind::from_path(path);

    let content = match kind {
        SourceKind::Image => {
            tracing::info!("🖼️  {name}: image, excluded from topic extraction");
            None
        }
        SourceKind::Pdf | SourceKind::Docx => {
            tracing::warn!(
                "⚠️  {name}: {kind:?} decoding is not supported, convert it to text first"
            );
            Some(String::new())
        }
        SourceKind::Text | SourceKind::Other => {
            let bytes = fs::read(path).map_err(|source| IngestError::Read {
                path: name.clone(),
                source,
            })?;
            Some(String::from_utf8_lossy(&bytes).into_owned())
        }
    };

    Ok(SourceFile::new(name, kind, content))
}

/// Read every path. Unreadable files are logged and kept with empty content
/// so one bad file does not sink the whole batch.
pub fn load_sources<P: AsRef<Path>>(paths: &[P]) -> Vec<SourceFile> {
    paths
        .iter()
        .map(|path| {
            let path = path.as_ref();
            load_source(path).unwrap_or_else(|err| {
                tracing::error!("❌ {err}");
                SourceFile::new(
                    path.display().to_string(),
                    SourceKind::from_path(path),
                    Some(String::new()),
                )
            })
        })
        .collect()
}

/// Join the textual contents of all non-image files with a blank line
pub fn assemble_document_text(files: &[SourceFile]) -> String {
    files
        .iter()
        .filter(|file| file.kind.is_textual())
        .filter_map(|file| file.content.as_deref())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}
