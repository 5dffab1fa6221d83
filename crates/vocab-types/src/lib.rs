//! Shared types for auditing vocabulary data files.
//!
//! The scanner produces borrowed [`Declaration`]s straight from file text and
//! turns them into owned [`WordEntry`] values once each word is paired with a
//! topic. The audit side folds entries into [`DuplicateRecord`]s and a
//! [`TopicCounts`] tally that remembers the order topics were first seen.
//!
//! ```rust
//! use vocab_types::{TopicCounts, WordEntry, normalize_word};
//!
//! let entry = WordEntry::new("Apple", "Fruits");
//! assert_eq!(normalize_word("  Apple "), "apple");
//!
//! let mut counts = TopicCounts::default();
//! counts.increment(&entry.topic);
//! assert_eq!(counts.get("Fruits"), Some(1));
//! ```

use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Topic assigned to words that have no preceding topic declaration.
pub const UNKNOWN_TOPIC: &str = "Unknown";

/// Canonical form used for duplicate detection: lowercased, then trimmed.
///
/// Trimming also strips the `\x1c`..=`\x1f` separator controls, which
/// [`str::trim`] alone keeps.
pub fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
        .to_string()
}

/// A quoted value pulled out of a declaration, with the byte offset where
/// the declaration starts.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Declaration<'a> {
    pub value: &'a str,
    pub position: usize,
}

/// One vocabulary word paired with the topic it was filed under.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct WordEntry {
    pub word: String,
    pub topic: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, topic: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            topic: topic.into(),
        }
    }
}

/// A repeated word, with the topic of the repeat and the topic of the first
/// occurrence.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DuplicateRecord {
    pub word: String,
    pub topic: String,
    pub original_topic: String,
}

impl fmt::Display for DuplicateRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' in '{}' (Original in '{}')",
            self.word, self.topic, self.original_topic
        )
    }
}

/// Count for a single topic.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TopicCount {
    pub topic: String,
    pub count: usize,
}

impl fmt::Display for TopicCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.topic, self.count)
    }
}

/// Per-topic tally that iterates in first-seen order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TopicCounts {
    entries: Vec<TopicCount>,
    slots: HashMap<String, usize>,
}

impl TopicCounts {
    /// Bump the count for `topic`, appending it if this is its first entry.
    pub fn increment(&mut self, topic: &str) {
        if let Some(&slot) = self.slots.get(topic) {
            self.entries[slot].count += 1;
            return;
        }
        self.slots.insert(topic.to_string(), self.entries.len());
        self.entries.push(TopicCount {
            topic: topic.to_string(),
            count: 1,
        });
    }

    pub fn get(&self, topic: &str) -> Option<usize> {
        self.slots.get(topic).map(|&slot| self.entries[slot].count)
    }

    /// Sum of every topic's count.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TopicCount> + '_ {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl Serialize for TopicCounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
