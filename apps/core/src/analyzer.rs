//! Document Analyzer - Main orchestrator for the analysis pipeline.
//!
//! Runs segmentation, lexicon scoring, entity/claim/timeline extraction
//! and advisory generation in sequence and assembles the final report.
//!
//! The analyzer is pure and synchronous: no I/O, no shared mutable
//! state, no randomness. One instance can serve concurrent callers.

use std::borrow::Cow;
use std::time::Instant;

use tracing::{debug, warn};

use crate::advisory;
use crate::extract;
use crate::report::{AnalysisResult, Scores};
use crate::scorer;
use crate::segment::Document;

/// Default cap on input length, in characters. Generous for realistic
/// documents (hundreds to low thousands of words) while bounding the
/// quadratic entity and bigram scans on pathological input.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 1_000_000;

/// Main analyzer that orchestrates all pipeline stages
pub struct DocumentAnalyzer {
    max_input_chars: usize,
}

impl Default for DocumentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentAnalyzer {
    /// Create a new analyzer with the default input cap
    pub fn new() -> Self {
        Self::with_config(DEFAULT_MAX_INPUT_CHARS)
    }

    /// Create an analyzer with a custom input cap in characters. Input
    /// beyond the cap is truncated at a character boundary rather than
    /// rejected, keeping the operation infallible.
    pub fn with_config(max_input_chars: usize) -> Self {
        Self { max_input_chars }
    }

    /// Truncate oversized input at the configured character cap
    fn bounded<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        match raw.char_indices().nth(self.max_input_chars) {
            Some((byte_index, _)) => {
                warn!(
                    input_chars = raw.chars().count(),
                    max_chars = self.max_input_chars,
                    "input exceeds configured cap, analyzing truncated prefix"
                );
                Cow::Owned(raw[..byte_index].to_string())
            }
            None => Cow::Borrowed(raw),
        }
    }

    /// Analyze a raw document and produce the full report.
    ///
    /// Deterministic: identical input yields an identical report. Never
    /// fails; empty input degrades to zero counts, empty lists and
    /// clamped default scores.
    pub fn analyze(&self, raw: &str) -> AnalysisResult {
        let start = Instant::now();

        let raw = self.bounded(raw);
        let doc = Document::new(&raw);
        let clean_lower = doc.clean.to_lowercase();

        // 1. Readability stats
        let stats = scorer::stats(&doc);

        // 2. Emotion distribution
        let emotion = scorer::emotion_distribution(&doc.tokens);

        // 3. Bias and confidence
        let (bias, rule_hits) = scorer::bias(&doc.tokens);
        let confidence = scorer::confidence(doc.sentences.len(), rule_hits);

        // 4. Intent ranking
        let intents = scorer::rank_intents(&clean_lower);

        // 5. Entities, claims, timeline
        let entities = extract::entities(&doc.sentences);
        let claims = extract::claims(&doc.sentences);
        let timeline = extract::timeline(&doc.clean, &doc.sentences);

        // 6. Advisories (need bias, claims and entities first)
        let blindspots = advisory::blindspots(&claims, bias, &entities, &clean_lower);
        let recommendations = advisory::recommendations();

        debug!(
            words = stats.word_count,
            sentences = stats.sentence_count,
            claims = claims.len(),
            entities = entities.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "analysis complete"
        );

        AnalysisResult {
            stats,
            scores: Scores {
                confidence,
                bias,
                emotion,
            },
            intents,
            claims,
            entities,
            blindspots,
            recommendations,
            timeline,
        }
    }
}
