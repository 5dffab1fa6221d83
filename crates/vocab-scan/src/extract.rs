use anyhow::{Context, Result};
use regex::Regex;
use vocab_types::{Declaration, WordEntry};

use crate::assign::assign_topics;

/// Names that make up the two declaration shapes the scanner recognises.
///
/// A declaration matches `<type>(` followed by optional whitespace, then
/// `<field>:`, optional whitespace and a single-quoted value. The value runs
/// to the next `'`; escaped quotes are not understood.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DeclarationShape {
    pub entry_type: String,
    pub entry_field: String,
    pub group_type: String,
    pub group_field: String,
}

impl Default for DeclarationShape {
    fn default() -> Self {
        Self {
            entry_type: "VocabWord".to_string(),
            entry_field: "word".to_string(),
            group_type: "VocabTopic".to_string(),
            group_field: "name".to_string(),
        }
    }
}

/// Compiled matchers for word and topic declarations.
#[derive(Clone, Debug)]
pub struct Extractor {
    entry: Regex,
    group: Regex,
}

impl Extractor {
    pub fn new(shape: &DeclarationShape) -> Result<Self> {
        let entry = declaration_regex(&shape.entry_type, &shape.entry_field)?;
        let group = declaration_regex(&shape.group_type, &shape.group_field)?;
        Ok(Self { entry, group })
    }

    /// Word declarations in document order.
    pub fn word_declarations<'a>(&self, text: &'a str) -> Vec<Declaration<'a>> {
        find_declarations(&self.entry, text)
    }

    /// Topic declarations in document order.
    pub fn topic_declarations<'a>(&self, text: &'a str) -> Vec<Declaration<'a>> {
        find_declarations(&self.group, text)
    }

    /// Every word in `text` paired with its topic, in document order.
    pub fn entries(&self, text: &str) -> Vec<WordEntry> {
        let topics = self.topic_declarations(text);
        let words = self.word_declarations(text);
        assign_topics(&words, &topics)
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&DeclarationShape::default()).expect("default declaration shape compiles")
    }
}

fn declaration_regex(type_name: &str, field: &str) -> Result<Regex> {
    if type_name.trim().is_empty() || field.trim().is_empty() {
        anyhow::bail!("declaration type and field names must not be empty");
    }
    let pattern = format!(
        r"{}\(\s*{}:\s*'([^']+)'",
        regex::escape(type_name),
        regex::escape(field)
    );
    Regex::new(&pattern).with_context(|| format!("compile declaration pattern for {type_name}"))
}

fn find_declarations<'a>(re: &Regex, text: &'a str) -> Vec<Declaration<'a>> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let value = caps.get(1)?;
            Some(Declaration {
                value: value.as_str(),
                position: whole.start(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
final topics = [
  VocabTopic(name: 'Fruits', words: [
    VocabWord(word: 'Apple', meaning: 'táo'),
    VocabWord( word:  'Banana', meaning: 'chuối'),
  ]),
  VocabTopic(
    name: 'Animals',
    words: [VocabWord(word: 'apple')],
  ),
];
";

    #[test]
    fn finds_declarations_in_order() {
        let extractor = Extractor::default();
        let topics: Vec<_> = extractor
            .topic_declarations(SAMPLE)
            .iter()
            .map(|d| d.value)
            .collect();
        assert_eq!(topics, vec!["Fruits", "Animals"]);

        let words = extractor.word_declarations(SAMPLE);
        let values: Vec<_> = words.iter().map(|d| d.value).collect();
        assert_eq!(values, vec!["Apple", "Banana", "apple"]);
        assert!(words.windows(2).all(|w| w[0].position < w[1].position));
    }

    #[test]
    fn position_points_at_type_name() {
        let extractor = Extractor::default();
        let words = extractor.word_declarations(SAMPLE);
        assert!(SAMPLE[words[0].position..].starts_with("VocabWord("));
    }

    #[test]
    fn ignores_other_shapes() {
        let extractor = Extractor::default();
        let text = r#"
            VocabWord(word: "double quoted")
            VocabWord(meaning: 'x', word: 'late field')
            VocabWord(word: '')
            vocabword(word: 'lowercase type')
            VocabWords(word: 'plural')
        "#;
        assert!(extractor.word_declarations(text).is_empty());
    }

    #[test]
    fn apostrophe_ends_value() {
        let extractor = Extractor::default();
        let words = extractor.word_declarations("VocabWord(word: 'don\\'t')");
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].value, "don\\");
    }

    #[test]
    fn keeps_non_ascii_words() {
        let extractor = Extractor::default();
        let words = extractor.word_declarations("VocabWord(word: 'naïve café')");
        assert_eq!(words[0].value, "naïve café");
    }

    #[test]
    fn custom_shape_is_escaped() {
        let shape = DeclarationShape {
            entry_type: "Entry.new".into(),
            entry_field: "term".into(),
            group_type: "Group".into(),
            group_field: "title".into(),
        };
        let extractor = Extractor::new(&shape).unwrap();
        let text = "Group(title: 'Colors') Entry.new(term: 'red') EntryXnew(term: 'blue')";
        let entries = extractor.entries(text);
        assert_eq!(entries, vec![WordEntry::new("red", "Colors")]);
    }

    #[test]
    fn rejects_empty_names() {
        let shape = DeclarationShape {
            entry_field: " ".into(),
            ..DeclarationShape::default()
        };
        assert!(Extractor::new(&shape).is_err());
    }
}
