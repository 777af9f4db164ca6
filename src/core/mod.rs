//! Core types and matching logic
//!
//! - `entry`: the question/answer data model and the ordered knowledge base
//! - `matcher`: query normalization and first-match-wins lookup

pub mod entry;
pub mod matcher;

pub use entry::{KnowledgeBase, QaEntry};
pub use matcher::{find_match, normalize_query, normalize_question, respond, DEFAULT_RESPONSE};
