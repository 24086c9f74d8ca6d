//! Deduplicated, bounded comment collections

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Ordered comment texts with no exact duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentSet {
    comments: Vec<String>,
}

impl CommentSet {
    /// Deduplicate by exact text, keeping first occurrences, then keep at most `max` entries
    pub fn collect_bounded<I>(texts: I, max: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen: AHashSet<String> = AHashSet::new();

        let comments = texts
            .into_iter()
            .filter(|text| seen.insert(text.clone()))
            .take(max)
            .collect();

        Self { comments }
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.comments.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.comments
    }

    pub fn into_vec(self) -> Vec<String> {
        self.comments
    }
}

impl<'a> IntoIterator for &'a CommentSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.comments.iter()
    }
}
