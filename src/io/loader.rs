//! Startup loading with graceful degradation
//!
//! A missing knowledge base is an error. Any other failure (a directory at the
//! path, an unreadable or malformed file) degrades to an empty knowledge base,
//! and the reason is kept in the [`LoadReport`] and logged so callers are not
//! misled.

use crate::core::KnowledgeBase;
use crate::error::{KbError, Result};
use crate::io::reader::{KnowledgeBaseReader, ReaderConfig};
use log::{info, warn};
use std::path::Path;

/// Outcome of a tolerant knowledge base load
#[derive(Debug)]
pub struct LoadReport {
    pub knowledge_base: KnowledgeBase,
    /// Set when the source could not be read or interpreted and was replaced
    /// by an empty knowledge base
    pub degraded: Option<KbError>,
}

impl LoadReport {
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    pub fn into_knowledge_base(self) -> KnowledgeBase {
        self.knowledge_base
    }
}

/// Load a knowledge base with the default reader configuration
pub fn load_knowledge_base<P: AsRef<Path>>(path: P) -> Result<LoadReport> {
    load_knowledge_base_with(path, ReaderConfig::default())
}

/// Load a knowledge base, degrading recoverable failures to an empty result
///
/// The only error returned is a missing resource.
pub fn load_knowledge_base_with<P: AsRef<Path>>(path: P, config: ReaderConfig) -> Result<LoadReport> {
    let path = path.as_ref();
    match KnowledgeBaseReader::with_config(config).read_file(path) {
        Ok(knowledge_base) => {
            info!(
                "Loaded {} entries from {}",
                knowledge_base.len(),
                path.display()
            );
            Ok(LoadReport {
                knowledge_base,
                degraded: None,
            })
        }
        Err(err) if err.is_recoverable() => {
            warn!(
                "An error occurred while loading the knowledge base ({}): {}",
                err.severity(),
                err
            );
            Ok(LoadReport {
                knowledge_base: KnowledgeBase::empty(),
                degraded: Some(err),
            })
        }
        Err(err) => Err(err),
    }
}
