//! Text Normalization and Segmentation.
//!
//! Leaf dependency of the whole pipeline: collapses whitespace, splits
//! the document into sentences and lowercase word tokens. Everything
//! downstream consumes this and nothing else.

/// A normalized, segmented view of one input document.
///
/// Transient value: computed once per `analyze` call and discarded with
/// the result. Sentence fragments keep their original leading and
/// trailing spaces; consumers trim at their own boundaries (claim text,
/// entity token split) while the timeline truncates the raw fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Input with whitespace runs collapsed to single spaces and ends trimmed
    pub clean: String,
    /// Sentence fragments split on `.`/`!`/`?` runs, blank fragments dropped
    pub sentences: Vec<String>,
    /// Lowercase word tokens split on non-word character runs
    pub tokens: Vec<String>,
}

/// Word characters follow the ASCII word class: letters, digits, underscore.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

impl Document {
    /// Normalize and segment a raw document. Never fails; empty input
    /// yields empty sentence and token sequences.
    pub fn new(raw: &str) -> Self {
        let clean = raw.split_whitespace().collect::<Vec<_>>().join(" ");

        let sentences: Vec<String> = clean
            .split(['.', '!', '?'])
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .collect();

        let tokens: Vec<String> = clean
            .to_lowercase()
            .split(|c: char| !is_word_char(c))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            clean,
            sentences,
            tokens,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_collapse() {
        let doc = Document::new("  Hello\t\n  world.  ");
        assert_eq!(doc.clean, "Hello world.");
    }

    #[test]
    fn test_sentence_split() {
        let doc = Document::new("First sentence. Second one! Third?");
        assert_eq!(
            doc.sentences,
            vec!["First sentence", " Second one", " Third"]
        );
    }

    #[test]
    fn test_sentence_split_drops_blank_fragments() {
        let doc = Document::new("One... Two!!! ");
        assert_eq!(doc.sentences, vec!["One", " Two"]);
    }

    #[test]
    fn test_tokens_lowercase_and_split() {
        let doc = Document::new("Hello, World-wide web_2 test");
        assert_eq!(doc.tokens, vec!["hello", "world", "wide", "web_2", "test"]);
    }

    #[test]
    fn test_empty_input() {
        let doc = Document::new("");
        assert!(doc.clean.is_empty());
        assert!(doc.sentences.is_empty());
        assert!(doc.tokens.is_empty());

        let doc = Document::new("   \n\t ");
        assert!(doc.sentences.is_empty());
        assert!(doc.tokens.is_empty());
    }

    #[test]
    fn test_punctuation_only_input() {
        let doc = Document::new("... !!! ???");
        assert!(doc.sentences.is_empty());
        assert!(doc.tokens.is_empty());
    }
}
