//! healthbot: answer free-text questions from a CSV knowledge base
//!
//! The library loads question/answer pairs from a two-column CSV file and
//! answers queries by case-insensitive, bidirectional substring matching.
//! The first stored question that contains the query, or is contained in it,
//! supplies the answer. When nothing matches, a fixed default sentence is
//! returned instead.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use healthbot::{KnowledgeBaseReader, Result};
//!
//! fn main() -> Result<()> {
//!     let kb = KnowledgeBaseReader::new().read_file("data/health_info.csv")?;
//!     println!("{}", kb.respond("how do I treat a fever"));
//!     Ok(())
//! }
//! ```
//!
//! ## Matching in memory
//!
//! ```rust
//! use healthbot::{respond, KnowledgeBase, QaEntry, DEFAULT_RESPONSE};
//!
//! let kb = KnowledgeBase::new(vec![QaEntry::new(
//!     "Any advice on headache?",
//!     "Pain relievers and rest.",
//! )]);
//!
//! assert_eq!(
//!     respond("Could you give me any advice on headache please?", &kb),
//!     "Pain relievers and rest."
//! );
//! assert_eq!(respond("What is the meaning of life?", &kb), DEFAULT_RESPONSE);
//! ```
//!
//! # Architecture
//!
//! - [`core`](crate::core): the data model and the matcher
//! - [`io`]: CSV loading, default path resolution and tolerant startup loading
//! - [`error`]: error kinds for loading failures
//!
//! A loaded [`KnowledgeBase`] is immutable, so it can be shared freely
//! between threads without synchronization.

// Public API exports
pub use error::{ErrorSeverity, KbError, Result};

// Core types
pub use crate::core::{
    find_match, normalize_query, normalize_question, respond, KnowledgeBase, QaEntry,
    DEFAULT_RESPONSE,
};

// IO types
pub use io::{
    load_knowledge_base, resolve_kb_path, KnowledgeBaseReader, LoadReport, ReaderConfig,
    DEFAULT_KB_PATH,
};

pub mod core;
pub mod error;
pub mod io;
