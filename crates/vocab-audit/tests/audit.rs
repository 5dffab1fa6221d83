use std::path::Path;

use vocab_audit::{OutputFormat, audit, render};
use vocab_scan::{Extractor, UnreadablePolicy, scan_files};

fn write(dir: &Path, name: &str, text: &str) {
    std::fs::write(dir.join(name), text).unwrap();
}

fn run(dir: &Path, names: &[&str]) -> String {
    let entries = scan_files(&Extractor::default(), dir, names, UnreadablePolicy::Abort).unwrap();
    render(&audit(entries), OutputFormat::Text).unwrap()
}

#[test]
fn reports_cross_topic_duplicate() {
    let tempdir = tempfile::tempdir().unwrap();
    write(
        tempdir.path(),
        "topics_1_5.dart",
        "VocabTopic(name: 'Fruits', words: [\n\
         VocabWord(word: 'Apple'),\n\
         VocabWord(word: 'Banana'),\n\
         ]),\n\
         VocabTopic(name: 'Animals', words: [VocabWord(word: 'apple')]),\n",
    );

    let text = run(tempdir.path(), &["topics_1_5.dart"]);
    assert_eq!(
        text,
        "Total words found: 3\n\
         Duplicates found:\n\
         - 'apple' in 'Animals' (Original in 'Fruits')\n\
         \n\
         Topic counts:\n\
         - Fruits: 2\n\
         - Animals: 1\n"
    );
}

#[test]
fn duplicates_across_files_follow_file_order() {
    let tempdir = tempfile::tempdir().unwrap();
    write(
        tempdir.path(),
        "a.dart",
        "VocabTopic(name: 'Home') VocabWord(word: 'Chair')",
    );
    write(
        tempdir.path(),
        "b.dart",
        "VocabWord(word: ' chair ') VocabTopic(name: 'Office') VocabWord(word: 'Desk')",
    );

    let text = run(tempdir.path(), &["b.dart", "a.dart"]);
    assert!(text.contains("- 'Chair' in 'Home' (Original in 'Unknown')\n"));
    assert!(text.ends_with("- Unknown: 1\n- Office: 1\n- Home: 1\n"));
}

#[test]
fn missing_and_empty_files_contribute_nothing() {
    let tempdir = tempfile::tempdir().unwrap();
    write(tempdir.path(), "empty.dart", "");
    write(
        tempdir.path(),
        "words.dart",
        "VocabWord(word: 'Red') VocabWord(word: 'Blue')",
    );

    let text = run(tempdir.path(), &["missing.dart", "empty.dart", "words.dart"]);
    assert_eq!(
        text,
        "Total words found: 2\nNo duplicates found.\n\nTopic counts:\n- Unknown: 2\n"
    );
}

#[test]
fn repeated_runs_are_identical() {
    let tempdir = tempfile::tempdir().unwrap();
    write(
        tempdir.path(),
        "mixed.dart",
        "VocabTopic(name: 'Café') VocabWord(word: 'Crème') VocabWord(word: 'crème')\n\
         VocabTopic(name: 'Über') VocabWord(word: 'Straße') VocabWord(word: 'CRÈME')",
    );

    let first = run(tempdir.path(), &["mixed.dart"]);
    let second = run(tempdir.path(), &["mixed.dart"]);
    assert_eq!(first, second);
    assert!(first.starts_with("Total words found: 4\n"));
    assert!(first.contains("- 'CRÈME' in 'Über' (Original in 'Café')\n"));
}
