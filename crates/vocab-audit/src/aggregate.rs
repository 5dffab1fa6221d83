use std::collections::HashMap;

use serde::Serialize;
use vocab_types::{DuplicateRecord, TopicCounts, WordEntry, normalize_word};

/// Folds word entries into duplicate records and topic counts.
///
/// Entries must be fed in file order, then position order; the first entry
/// for a normalized word is the one every later repeat is reported against.
#[derive(Debug, Default)]
pub struct Aggregator {
    seen: HashMap<String, String>,
    duplicates: Vec<DuplicateRecord>,
    counts: TopicCounts,
    total: usize,
}

/// Outcome of an audit run.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AuditReport {
    pub total: usize,
    pub unique: usize,
    pub duplicates: Vec<DuplicateRecord>,
    pub topic_counts: TopicCounts,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: WordEntry) {
        self.total += 1;
        self.counts.increment(&entry.topic);

        let normalized = normalize_word(&entry.word);
        match self.seen.get(&normalized) {
            Some(original_topic) => self.duplicates.push(DuplicateRecord {
                word: entry.word,
                topic: entry.topic,
                original_topic: original_topic.clone(),
            }),
            None => {
                self.seen.insert(normalized, entry.topic);
            }
        }
    }

    pub fn finish(self) -> AuditReport {
        AuditReport {
            total: self.total,
            unique: self.seen.len(),
            duplicates: self.duplicates,
            topic_counts: self.counts,
        }
    }
}

impl Extend<WordEntry> for Aggregator {
    fn extend<I: IntoIterator<Item = WordEntry>>(&mut self, entries: I) {
        for entry in entries {
            self.record(entry);
        }
    }
}

/// Audit a full, already ordered sequence of entries.
pub fn audit(entries: impl IntoIterator<Item = WordEntry>) -> AuditReport {
    let mut aggregator = Aggregator::new();
    aggregator.extend(entries);
    aggregator.finish()
}
