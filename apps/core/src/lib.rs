//! # Veritas Core
//!
//! Deterministic, fully local text-analysis engine. Derives a
//! structured profile from an arbitrary document: readability stats,
//! emotional tone, rhetorical-bias score, confidence estimate, intent
//! ranking, extracted claims and entities, a chronological timeline and
//! advisory blindspots. A separate fuzzy matcher answers free-text
//! questions against a small fixed knowledge base.
//!
//! Everything is rule-based: no model, no network, no persistence, no
//! randomness. Identical input always yields an identical report.
//!
//! ## Components
//! - `segment`: whitespace normalization, sentence and token splitting
//! - `scorer`: lexicon-driven stats, emotion, bias, confidence, intent
//! - `extract`: capitalization-heuristic entities, claims, timeline
//! - `advisory`: blindspot rules and the fixed recommendation list
//! - `matcher`: bigram-Jaccard knowledge-base lookup
//! - `report`: output data structures with stable JSON field names
//! - `analyzer`: pipeline orchestrator

pub mod advisory;
pub mod analyzer;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod report;
pub mod scorer;
pub mod segment;

#[cfg(test)]
mod tests;

pub use analyzer::{DocumentAnalyzer, DEFAULT_MAX_INPUT_CHARS};
pub use error::EngineError;
pub use matcher::{
    KnowledgeBase, KnowledgeBaseItem, KnowledgeBaseMeta, MatchResult,
    DEFAULT_ACCEPTANCE_THRESHOLD, NO_MATCH_SCORE,
};
pub use report::{
    AnalysisResult, Claim, ClaimKind, DocStats, EmotionCategory, EmotionScores, Entity,
    EntityType, IntentKind, IntentScore, Scores, TimelineEvent,
};
pub use segment::Document;

/// Analyze a raw document with the default configuration.
///
/// This is the primary operation consumed by the presentation layer; the
/// returned report serializes to the exact JSON shape of the export
/// feature.
pub fn analyze(raw: &str) -> AnalysisResult {
    DocumentAnalyzer::new().analyze(raw)
}

/// Find the knowledge-base item best matching a free-text query.
///
/// The caller applies its own acceptance threshold (the reference chat
/// widget accepts scores above [`DEFAULT_ACCEPTANCE_THRESHOLD`] and
/// otherwise falls back to a canned reply). An empty knowledge base
/// yields no match with the [`NO_MATCH_SCORE`] sentinel.
pub fn find_best_match<'a>(query: &str, knowledge_base: &'a [KnowledgeBaseItem]) -> MatchResult<'a> {
    matcher::find_best_match(query, knowledge_base)
}
