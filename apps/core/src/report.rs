//! Analysis Report - Output structures for document analysis.
//!
//! These types are the contract with the presentation layer: the
//! serialized field names match the downloadable JSON report exactly
//! and must not change without a format version bump.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Emotion category recognized by the lexicon scorer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
    Joy,
    Anger,
    Fear,
    Sadness,
    Trust,
}

impl EmotionCategory {
    /// All categories, in report order
    pub const ALL: [EmotionCategory; 5] = [
        EmotionCategory::Joy,
        EmotionCategory::Anger,
        EmotionCategory::Fear,
        EmotionCategory::Sadness,
        EmotionCategory::Trust,
    ];

    /// Returns a human-readable label for the category
    pub fn label(&self) -> &'static str {
        match self {
            EmotionCategory::Joy => "joy",
            EmotionCategory::Anger => "anger",
            EmotionCategory::Fear => "fear",
            EmotionCategory::Sadness => "sadness",
            EmotionCategory::Trust => "trust",
        }
    }
}

/// Emotion distribution as integer percentages.
///
/// Each category is rounded independently, so the five values do not
/// necessarily sum to exactly 100. Consumers must not rely on the sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionScores {
    pub joy: u32,
    pub anger: u32,
    pub fear: u32,
    pub sadness: u32,
    pub trust: u32,
}

impl EmotionScores {
    /// Get the value for a category
    pub fn get(&self, category: EmotionCategory) -> u32 {
        match category {
            EmotionCategory::Joy => self.joy,
            EmotionCategory::Anger => self.anger,
            EmotionCategory::Fear => self.fear,
            EmotionCategory::Sadness => self.sadness,
            EmotionCategory::Trust => self.trust,
        }
    }

    /// Get a mutable reference to the value for a category
    pub fn get_mut(&mut self, category: EmotionCategory) -> &mut u32 {
        match category {
            EmotionCategory::Joy => &mut self.joy,
            EmotionCategory::Anger => &mut self.anger,
            EmotionCategory::Fear => &mut self.fear,
            EmotionCategory::Sadness => &mut self.sadness,
            EmotionCategory::Trust => &mut self.trust,
        }
    }

    /// Sum over all categories
    pub fn total(&self) -> u32 {
        EmotionCategory::ALL.iter().map(|c| self.get(*c)).sum()
    }
}

/// Intent category for the analyzed document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentKind {
    Promotion,
    #[serde(rename = "Damage Control")]
    DamageControl,
    Persuasion,
    Information,
}

impl IntentKind {
    /// Returns a human-readable label for the intent
    pub fn label(&self) -> &'static str {
        match self {
            IntentKind::Promotion => "Promotion",
            IntentKind::DamageControl => "Damage Control",
            IntentKind::Persuasion => "Persuasion",
            IntentKind::Information => "Information",
        }
    }
}

impl std::fmt::Display for IntentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ranked intent entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentScore {
    /// Intent label, serialized as its display name
    pub label: IntentKind,
    /// Score in 0-100, 25 points per keyword hit
    pub score: u32,
}

/// Kind of claim found in a sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimKind {
    /// Contains at least one digit
    Numeric,
    /// Verbal assertion without numbers
    Assertion,
}

/// A sentence flagged as a factual or numeric assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Trimmed sentence text
    pub text: String,
    /// Index of the originating sentence
    pub index: usize,
    /// Claim classification
    #[serde(rename = "type")]
    pub kind: ClaimKind,
}

/// Entity type guessed by the capitalization heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
    Org,
    Person,
    Loc,
    Unknown,
}

/// An extracted named-entity candidate with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Canonical surface form
    pub text: String,
    /// Guessed type, UNKNOWN unless a corporate marker matched
    #[serde(rename = "type")]
    pub entity_type: EntityType,
    /// Number of occurrences across all sentences
    pub count: usize,
}

/// A dated event extracted from the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// 4-digit year, or "Today" for the synthetic fallback entry
    pub date: String,
    /// Truncated first sentence mentioning the year
    pub event: String,
}

/// Basic readability statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocStats {
    /// Number of word tokens
    pub word_count: usize,
    /// Number of sentences
    pub sentence_count: usize,
    /// Formatted reading time, e.g. "3 min" (200 wpm, rounded up)
    pub reading_time: String,
}

/// Confidence, bias and emotion scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Writer-confidence estimate, clamped to 40-100
    pub confidence: u32,
    /// Rhetorical-bias score, clamped to -50..=50
    pub bias: i32,
    /// Emotion distribution in integer percentages
    pub emotion: EmotionScores,
}

/// Complete analysis report for one document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Readability statistics
    pub stats: DocStats,

    /// Confidence, bias and emotion scores
    pub scores: Scores,

    /// Intent ranking, sorted descending by score
    pub intents: Vec<IntentScore>,

    /// Flagged claims in sentence order
    pub claims: Vec<Claim>,

    /// Extracted entities, sorted descending by count, at most 10
    pub entities: Vec<Entity>,

    /// Advisory flags on structural weaknesses
    pub blindspots: Vec<String>,

    /// Fixed advisory checklist (input-independent by design)
    pub recommendations: Vec<String>,

    /// Year-based timeline, sorted ascending and deduplicated
    pub timeline: Vec<TimelineEvent>,
}

impl AnalysisResult {
    /// Serialize the report to pretty-printed JSON, as exported by the
    /// download feature of the presentation layer.
    pub fn to_json(&self) -> Result<String, EngineError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a report from its JSON export
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_category_labels() {
        assert_eq!(EmotionCategory::Joy.label(), "joy");
        assert_eq!(EmotionCategory::Trust.label(), "trust");
    }

    #[test]
    fn test_emotion_scores_accessors() {
        let mut scores = EmotionScores::default();
        *scores.get_mut(EmotionCategory::Fear) += 3;
        assert_eq!(scores.get(EmotionCategory::Fear), 3);
        assert_eq!(scores.total(), 3);
    }

    #[test]
    fn test_intent_labels() {
        assert_eq!(IntentKind::DamageControl.label(), "Damage Control");
        assert_eq!(IntentKind::Promotion.to_string(), "Promotion");
    }

    #[test]
    fn test_serialized_field_names() {
        let stats = DocStats {
            word_count: 4,
            sentence_count: 1,
            reading_time: "1 min".to_string(),
        };
        let json = serde_json::to_string(&stats).expect("stats should serialize");
        assert!(json.contains("\"wordCount\""));
        assert!(json.contains("\"sentenceCount\""));
        assert!(json.contains("\"readingTime\""));

        let claim = Claim {
            text: "Revenue grew 20%".to_string(),
            index: 0,
            kind: ClaimKind::Numeric,
        };
        let json = serde_json::to_string(&claim).expect("claim should serialize");
        assert!(json.contains("\"type\":\"numeric\""));

        let entity = Entity {
            text: "Corp".to_string(),
            entity_type: EntityType::Org,
            count: 1,
        };
        let json = serde_json::to_string(&entity).expect("entity should serialize");
        assert!(json.contains("\"type\":\"ORG\""));
    }

    #[test]
    fn test_intent_score_serialization() {
        let entry = IntentScore {
            label: IntentKind::DamageControl,
            score: 50,
        };
        let json = serde_json::to_string(&entry).expect("intent should serialize");
        assert!(json.contains("\"label\":\"Damage Control\""));
    }
}
