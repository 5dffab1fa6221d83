use vocab_types::{Declaration, UNKNOWN_TOPIC, WordEntry};

/// Pair each word with the latest topic declared strictly before it.
///
/// This is a proximity rule, not a structural parse: nesting is ignored and
/// only byte offsets matter. `topics` must be in document order.
pub fn assign_topics(words: &[Declaration<'_>], topics: &[Declaration<'_>]) -> Vec<WordEntry> {
    words
        .iter()
        .map(|word| WordEntry::new(word.value, topic_before(topics, word.position)))
        .collect()
}

/// Name of the last topic starting before `position`, or [`UNKNOWN_TOPIC`].
pub fn topic_before<'a>(topics: &[Declaration<'a>], position: usize) -> &'a str {
    topics
        .iter()
        .rev()
        .find(|topic| topic.position < position)
        .map_or(UNKNOWN_TOPIC, |topic| topic.value)
}
