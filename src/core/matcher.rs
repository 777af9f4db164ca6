//! Query matching against a knowledge base
//!
//! Matching is bidirectional substring containment on normalized text:
//! an entry matches when the query contains its question or its question
//! contains the query. The first matching entry in knowledge base order wins.
//!
//! Short, generic queries can match unrelated questions that happen to
//! contain them. That is the intended behavior and the first-match-wins
//! order must be kept.

use crate::core::entry::{KnowledgeBase, QaEntry};
use log::{debug, trace};

/// Returned when nothing in the knowledge base matches
pub const DEFAULT_RESPONSE: &str = "I'm sorry, I don't have an answer to that question right now.";

/// Trailing characters stripped from stored questions before comparison
const TRAILING_PUNCTUATION: &[char] = &['?', '.', '!'];

/// Lowercase and trim a user query
pub fn normalize_query(query: &str) -> String {
    query.to_lowercase().trim().to_string()
}

/// Lowercase, trim and drop trailing `?`, `.` and `!` from a stored question
///
/// Whitespace uncovered by the punctuation strip is left in place.
pub fn normalize_question(question: &str) -> String {
    question
        .to_lowercase()
        .trim()
        .trim_end_matches(TRAILING_PUNCTUATION)
        .to_string()
}

/// Bidirectional containment on already-normalized text
fn is_match(query: &str, question: &str) -> bool {
    question.contains(query) || query.contains(question)
}

/// Find the first entry matching `query`, if any
pub fn find_match<'a>(query: &str, kb: &'a KnowledgeBase) -> Option<&'a QaEntry> {
    let query = normalize_query(query);
    if query.is_empty() {
        trace!("empty query, skipping knowledge base scan");
        return None;
    }

    kb.iter().enumerate().find_map(|(index, entry)| {
        let question = normalize_question(&entry.question);
        if question.is_empty() {
            trace!("skipping entry {} with empty question", index);
            return None;
        }
        if is_match(&query, &question) {
            debug!("query {:?} matched entry {} ({:?})", query, index, entry.question);
            Some(entry)
        } else {
            None
        }
    })
}

/// Answer `query` from `kb`, or return [`DEFAULT_RESPONSE`]
pub fn respond<'a>(query: &str, kb: &'a KnowledgeBase) -> &'a str {
    match find_match(query, kb) {
        Some(entry) => entry.answer.as_str(),
        None => DEFAULT_RESPONSE,
    }
}
