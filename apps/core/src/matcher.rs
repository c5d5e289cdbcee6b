//! Similarity Matching against a fixed knowledge base.
//!
//! Answers free-text questions with character-level fuzzy matching:
//! bigram Jaccard similarity on the question text, combined with a
//! keyword-overlap score. This is NOT an embedding model; it is a
//! deterministic, fully local lookup sufficient for a small FAQ set.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Sentinel score returned when the candidate list is empty. Below any
/// acceptance threshold a caller might use.
pub const NO_MATCH_SCORE: f64 = -1.0;

/// Acceptance threshold used by the reference chat widget
pub const DEFAULT_ACCEPTANCE_THRESHOLD: f64 = 0.1;

/// Score bonus for a full substring containment between query and question
const CONTAINMENT_SCORE: f64 = 0.8;

/// Weight applied to the keyword-overlap fraction
const KEYWORD_WEIGHT: f64 = 0.5;

/// Question words shorter than this never count as keywords
const MIN_KEYWORD_LEN: usize = 5;

/// One question/answer pair in the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseItem {
    /// The canonical question
    #[serde(rename = "q")]
    pub question: String,
    /// The canned answer
    #[serde(rename = "a")]
    pub answer: String,
    /// Optional editorial tags; matching derives its own keywords from
    /// the question text
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Knowledge base metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseMeta {
    pub version: String,
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
}

/// A versioned knowledge base document, as shipped by host applications
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub meta: KnowledgeBaseMeta,
    pub faqs: Vec<KnowledgeBaseItem>,
}

impl KnowledgeBase {
    /// Load a knowledge base from its JSON document. Entries with an
    /// empty question can never match anything and are rejected.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let kb: KnowledgeBase = serde_json::from_str(json)?;
        if kb.faqs.iter().any(|item| item.question.is_empty()) {
            return Err(EngineError::Validation(
                "knowledge base contains an entry with an empty question".to_string(),
            ));
        }
        Ok(kb)
    }
}

/// Best match for a query, borrowing the winning item from the caller's
/// knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult<'a> {
    /// The winning candidate, or `None` for an empty candidate list
    #[serde(rename = "match")]
    pub matched: Option<&'a KnowledgeBaseItem>,
    /// Combined score in [0, 1], or -1.0 when there were no candidates
    pub score: f64,
}

impl MatchResult<'_> {
    /// Whether the match clears the given acceptance threshold. The
    /// sentinel no-match score fails every threshold.
    pub fn is_confident(&self, threshold: f64) -> bool {
        self.matched.is_some() && self.score > threshold
    }
}

/// Overlapping 2-character windows, duplicates kept
fn bigrams(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|pair| pair.iter().collect()).collect()
}

/// Character-level similarity between two strings, in [0, 1].
///
/// Case-insensitive. Identical strings score 1.0; substring containment
/// either way scores 0.8; everything else falls back to bigram Jaccard.
/// The intersection uses containment counting: every bigram of the first
/// string counts as a hit if it occurs anywhere in the second string's
/// bigram list, even when it was already counted. That over-counts
/// repeated bigrams relative to a true multiset intersection and is the
/// intended behavior.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let s1 = a.to_lowercase();
    let s2 = b.to_lowercase();

    if s1 == s2 {
        return 1.0;
    }
    if s1.contains(&s2) || s2.contains(&s1) {
        return CONTAINMENT_SCORE;
    }

    let bigrams1 = bigrams(&s1);
    let bigrams2 = bigrams(&s2);

    let intersection = bigrams1.iter().filter(|bg| bigrams2.contains(*bg)).count();
    let union = bigrams1.len() + bigrams2.len() - intersection;

    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Keyword-overlap score: the fraction of the question's words longer
/// than 4 characters that occur as substrings of the lowercase query,
/// weighted by 0.5. Zero when the question has no qualifying words.
fn keyword_overlap(query_lower: &str, question: &str) -> f64 {
    let question_lower = question.to_lowercase();
    let keywords: Vec<&str> = question_lower
        .split(' ')
        .filter(|w| w.len() >= MIN_KEYWORD_LEN)
        .collect();

    if keywords.is_empty() {
        return 0.0;
    }

    let hits = keywords
        .iter()
        .filter(|k| query_lower.contains(*k))
        .count();

    hits as f64 / keywords.len() as f64 * KEYWORD_WEIGHT
}

/// Find the candidate whose question best matches the query.
///
/// Each candidate scores the maximum of its character similarity and
/// its keyword overlap. Comparison is strict greater-than, so the first
/// candidate wins ties. An empty candidate list returns no match with
/// the sentinel score.
pub fn find_best_match<'a>(query: &str, candidates: &'a [KnowledgeBaseItem]) -> MatchResult<'a> {
    let query_lower = query.to_lowercase();

    let mut best_score = NO_MATCH_SCORE;
    let mut best_match: Option<&KnowledgeBaseItem> = None;

    for item in candidates {
        let question_score = similarity(query, &item.question);
        let keyword_score = keyword_overlap(&query_lower, &item.question);
        let score = question_score.max(keyword_score);

        if score > best_score {
            best_score = score;
            best_match = Some(item);
        }
    }

    MatchResult {
        matched: best_match,
        score: best_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(question: &str, answer: &str) -> KnowledgeBaseItem {
        KnowledgeBaseItem {
            question: question.to_string(),
            answer: answer.to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_similarity_identity() {
        assert_eq!(similarity("hello world", "hello world"), 1.0);
        assert_eq!(similarity("Hello", "hello"), 1.0);
    }

    #[test]
    fn test_similarity_empty_sides() {
        assert_eq!(similarity("", "anything"), 0.0);
        assert_eq!(similarity("anything", ""), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }

    #[test]
    fn test_similarity_containment() {
        assert_eq!(similarity("hello", "hello world"), 0.8);
        assert_eq!(similarity("hello world", "world"), 0.8);
    }

    #[test]
    fn test_similarity_bigram_jaccard() {
        // "night" and "nacht": bigrams {ni,ig,gh,ht} vs {na,ac,ch,ht}
        // containment-count intersection 1, union 7
        let score = similarity("night", "nacht");
        assert!((score - 1.0 / 7.0).abs() < 1e-9);

        // No shared bigrams at all
        assert_eq!(similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_similarity_single_char_strings() {
        // One-char strings yield no bigrams; containment covers equality,
        // so only disjoint single chars reach the zero-union branch
        assert_eq!(similarity("a", "b"), 0.0);
    }

    #[test]
    fn test_find_best_match_empty_candidates() {
        let result = find_best_match("anything", &[]);
        assert!(result.matched.is_none());
        assert_eq!(result.score, NO_MATCH_SCORE);
        assert!(!result.is_confident(DEFAULT_ACCEPTANCE_THRESHOLD));
    }

    #[test]
    fn test_find_best_match_reference_scenario() {
        let kb = vec![item("How does this work?", "It analyzes text locally.")];
        let result = find_best_match("how does this tool work", &kb);

        assert_eq!(result.matched, Some(&kb[0]));
        assert!(
            result.score >= DEFAULT_ACCEPTANCE_THRESHOLD,
            "score {} should clear the acceptance threshold",
            result.score
        );
    }

    #[test]
    fn test_keyword_overlap_path() {
        let kb = vec![
            item("Explain quantum entanglement basics", "Spooky action."),
            item("Describe classical mechanics", "Apples fall."),
        ];
        let result = find_best_match("tell me about quantum entanglement", &kb);

        assert_eq!(result.matched, Some(&kb[0]));
        assert!(result.is_confident(DEFAULT_ACCEPTANCE_THRESHOLD));
    }

    #[test]
    fn test_first_candidate_wins_ties() {
        let kb = vec![item("Same question?", "first"), item("Same question?", "second")];
        let result = find_best_match("same question?", &kb);

        let matched = result.matched.expect("should match");
        assert_eq!(matched.answer, "first");
    }

    #[test]
    fn test_knowledge_base_from_json() {
        let json = r#"{
            "meta": {"version": "1.0", "lastUpdated": "2024-11-02"},
            "faqs": [
                {"q": "How does this work?", "a": "Locally.", "keywords": ["how"]},
                {"q": "Is my data uploaded?", "a": "No."}
            ]
        }"#;

        let kb = KnowledgeBase::from_json(json).expect("valid KB should parse");
        assert_eq!(kb.meta.version, "1.0");
        assert_eq!(kb.faqs.len(), 2);
        assert!(kb.faqs[1].keywords.is_empty());
    }

    #[test]
    fn test_knowledge_base_rejects_bad_input() {
        assert!(matches!(
            KnowledgeBase::from_json("not json"),
            Err(EngineError::Parse(_))
        ));

        let empty_question = r#"{
            "meta": {"version": "1.0", "lastUpdated": "2024-11-02"},
            "faqs": [{"q": "", "a": "orphan"}]
        }"#;
        assert!(matches!(
            KnowledgeBase::from_json(empty_question),
            Err(EngineError::Validation(_))
        ));
    }
}
