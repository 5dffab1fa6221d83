//! Pull vocabulary words and their topics out of structured-literal data files.
//!
//! The scanner does not parse the files. It looks for two fixed declaration
//! shapes, a topic group such as `VocabTopic(name: 'Fruits', ...)` and a word
//! entry such as `VocabWord(word: 'Apple', ...)`, and pairs every word with
//! the closest topic declaration that starts before it in the same file.
//! Anything that does not match either shape is ignored.
//!
//! # Example
//! ```no_run
//! use vocab_scan::{Extractor, UnreadablePolicy, scan_files};
//!
//! # fn main() -> anyhow::Result<()> {
//! let extractor = Extractor::default();
//! let entries = scan_files(
//!     &extractor,
//!     "lib/data",
//!     &["topics_1_5.dart", "topics_6_10.dart"],
//!     UnreadablePolicy::Abort,
//! )?;
//! for entry in &entries {
//!     println!("{} -> {}", entry.word, entry.topic);
//! }
//! # Ok(()) }
//! ```
//!
//! For a runnable demo, see `cargo run -p vocab-scan --example dump -- <file>`.

pub mod assign;
pub mod extract;
pub mod source;

pub use assign::{assign_topics, topic_before};
pub use extract::{DeclarationShape, Extractor};
pub use source::{UnreadablePolicy, load_optional, scan_files};
pub use vocab_types::{Declaration, UNKNOWN_TOPIC, WordEntry};
