//! Knowledge base reading and CSV parsing
//!
//! The reader is strict: it either returns every row of the source or an
//! error. It never hands back a partially populated knowledge base.

use crate::core::{KnowledgeBase, QaEntry};
use crate::error::{KbError, Result};
use log::{debug, trace};
use std::fs;
use std::path::Path;

/// Column holding the stored question
pub const QUESTION_COLUMN: &str = "Question";
/// Column holding the stored answer
pub const ANSWER_COLUMN: &str = "Answer";

/// Configuration for the knowledge base reader
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Maximum file size to read (in bytes)
    pub max_file_size: Option<usize>,
    /// Whether to drop a leading UTF-8 byte order mark before parsing
    pub strip_bom: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_file_size: Some(10 * 1024 * 1024), // 10MB default limit
            strip_bom: true,
        }
    }
}

/// CSV knowledge base reader
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBaseReader {
    config: ReaderConfig,
}

impl KnowledgeBaseReader {
    /// Create a new reader with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new reader with custom configuration
    pub fn with_config(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a knowledge base from a file path
    pub fn read_file<P: AsRef<Path>>(&self, path: P) -> Result<KnowledgeBase> {
        let path = path.as_ref();

        let metadata = fs::metadata(path).map_err(|e| KbError::from_io(path, e))?;

        if !metadata.is_file() {
            return Err(KbError::invalid_resource(path));
        }

        if let Some(max_size) = self.config.max_file_size {
            if metadata.len() > max_size as u64 {
                return Err(KbError::too_large(path, metadata.len(), max_size));
            }
        }

        let content = fs::read_to_string(path).map_err(|e| KbError::from_io(path, e))?;

        debug!("Read {} bytes from {}", content.len(), path.display());
        self.parse_content(&content, Some(path))
    }

    /// Parse a knowledge base from CSV text
    ///
    /// A header row naming `Question` and `Answer` is required; column order
    /// is free and extra columns are ignored. Field text is kept verbatim.
    pub fn parse_content(&self, content: &str, path: Option<&Path>) -> Result<KnowledgeBase> {
        let path = path.unwrap_or_else(|| Path::new("<memory>"));

        let content = if self.config.strip_bom {
            content.strip_prefix('\u{feff}').unwrap_or(content)
        } else {
            content
        };

        // No header at all: nothing to load
        if content.trim().is_empty() {
            debug!("{} is empty, loaded no entries", path.display());
            return Ok(KnowledgeBase::empty());
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| KbError::malformed(path, format!("unreadable header row: {}", e)))?
            .clone();

        for column in [QUESTION_COLUMN, ANSWER_COLUMN] {
            if !headers.iter().any(|h| h == column) {
                return Err(KbError::malformed(
                    path,
                    format!("missing column `{}` in header", column),
                ));
            }
        }

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| KbError::malformed(path, describe_csv_error(&e)))?;

            let entry: QaEntry = record.deserialize(Some(&headers)).map_err(|e| {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                KbError::malformed(path, format!("line {}: {}", line, e))
            })?;

            trace!("loaded entry {:?}", entry.question);
            entries.push(entry);
        }

        debug!("Loaded {} entries from {}", entries.len(), path.display());
        Ok(KnowledgeBase::new(entries))
    }

    /// Get reader configuration
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }
}

fn describe_csv_error(err: &csv::Error) -> String {
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map(|p| p.line()).unwrap_or_default();
            format!(
                "line {}: expected {} fields, found {}",
                line, expected_len, len
            )
        }
        _ => err.to_string(),
    }
}

/// Convenience functions for common operations
pub mod convenience {
    use super::*;

    /// Read a knowledge base from a file path with default settings
    pub fn read_knowledge_base<P: AsRef<Path>>(path: P) -> Result<KnowledgeBase> {
        KnowledgeBaseReader::new().read_file(path)
    }

    /// Parse a knowledge base from CSV text with default settings
    pub fn parse_knowledge_base(content: &str) -> Result<KnowledgeBase> {
        KnowledgeBaseReader::new().parse_content(content, None)
    }
}
