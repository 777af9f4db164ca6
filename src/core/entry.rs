//! Knowledge base data model
//!
//! Entries are stored exactly as read from the source. All normalization
//! happens in the matcher at query time.

use crate::core::matcher;
use serde::Deserialize;

/// One stored question/answer fact
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QaEntry {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}

impl QaEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Ordered, read-only collection of question/answer pairs
///
/// Order follows the source rows. It matters: the matcher returns the
/// answer of the first matching entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: Vec<QaEntry>,
}

impl KnowledgeBase {
    /// Create a knowledge base from entries in source order
    pub fn new(entries: Vec<QaEntry>) -> Self {
        Self { entries }
    }

    /// Create a knowledge base with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[QaEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&QaEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QaEntry> {
        self.entries.iter()
    }

    /// Answer a free-text query, falling back to [`matcher::DEFAULT_RESPONSE`]
    pub fn respond(&self, query: &str) -> &str {
        matcher::respond(query, self)
    }
}

impl FromIterator<QaEntry> for KnowledgeBase {
    fn from_iter<I: IntoIterator<Item = QaEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a KnowledgeBase {
    type Item = &'a QaEntry;
    type IntoIter = std::slice::Iter<'a, QaEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_entries_keep_source_order_and_text() {
        let kb: KnowledgeBase = vec![
            QaEntry::new("  What is a Cold?! ", "A cold is a common illness."),
            QaEntry::new("How to treat fever?", "Rest and fluids."),
        ]
        .into_iter()
        .collect();

        assert_eq!(kb.len(), 2);
        assert_eq!(kb.entries()[0].question, "  What is a Cold?! ");
        assert_eq!(kb.get(1).unwrap().answer, "Rest and fluids.");
        assert!(kb.get(2).is_none());

        let questions: Vec<&str> = kb.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["  What is a Cold?! ", "How to treat fever?"]);
    }

    #[test]
    fn test_empty_knowledge_base() {
        let kb = KnowledgeBase::empty();
        assert!(kb.is_empty());
        assert_eq!((&kb).into_iter().count(), 0);
        assert_eq!(kb.respond("anything"), matcher::DEFAULT_RESPONSE);
    }
}
