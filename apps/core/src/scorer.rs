//! Lexicon-Based Scoring.
//!
//! Readability stats, emotion distribution, rhetorical-bias score,
//! writer-confidence estimate and intent ranking. All scoring is
//! keyword-driven against fixed lexicons; no model, no randomness,
//! identical output for identical input.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::report::{DocStats, EmotionCategory, EmotionScores, IntentKind, IntentScore};
use crate::segment::Document;

/// Words per minute assumed for the reading-time estimate
const READING_WPM: usize = 200;

/// Word-to-emotion lexicon. Each word maps to exactly one category.
const EMOTION_LEXICON: &[(&str, EmotionCategory)] = &[
    ("delighted", EmotionCategory::Joy),
    ("thrilled", EmotionCategory::Joy),
    ("happy", EmotionCategory::Joy),
    ("growth", EmotionCategory::Joy),
    ("success", EmotionCategory::Joy),
    ("furious", EmotionCategory::Anger),
    ("attack", EmotionCategory::Anger),
    ("fail", EmotionCategory::Anger),
    ("reject", EmotionCategory::Anger),
    ("worried", EmotionCategory::Fear),
    ("concern", EmotionCategory::Fear),
    ("risk", EmotionCategory::Fear),
    ("threat", EmotionCategory::Fear),
    ("sad", EmotionCategory::Sadness),
    ("loss", EmotionCategory::Sadness),
    ("regret", EmotionCategory::Sadness),
    ("decline", EmotionCategory::Sadness),
    ("believe", EmotionCategory::Trust),
    ("commit", EmotionCategory::Trust),
    ("partner", EmotionCategory::Trust),
    ("assure", EmotionCategory::Trust),
];

static EMOTION_MAP: LazyLock<HashMap<&'static str, EmotionCategory>> =
    LazyLock::new(|| EMOTION_LEXICON.iter().copied().collect());

/// Absolute qualifiers: strong bias signal and a rule hit
const ABSOLUTE_WORDS: &[&str] = &["always", "never", "everyone", "nobody", "undoubtedly", "obviously"];

/// Hedging words: soften bias, no rule hit
const HEDGING_WORDS: &[&str] = &["might", "could", "perhaps", "seemingly", "allegedly"];

/// Subjective qualifiers: moderate bias signal and a rule hit
const SUBJECTIVE_WORDS: &[&str] = &["amazing", "terrible", "shocking", "miracle", "disaster"];

/// Intent keyword sets. Declaration order is the tie-break order of the
/// final ranking and must stay fixed.
const INTENT_PATTERNS: &[(IntentKind, &[&str])] = &[
    (
        IntentKind::Promotion,
        &["announce", "launch", "new", "excited", "partnership"],
    ),
    (
        IntentKind::DamageControl,
        &["apologize", "mistake", "correct", "ensure", "regret"],
    ),
    (
        IntentKind::Persuasion,
        &["should", "must", "urge", "critical", "join"],
    ),
    (
        IntentKind::Information,
        &["report", "update", "status", "confirm", "detail"],
    ),
];

/// Compute basic readability statistics for a document.
///
/// Reading time rounds up, so any non-empty document reads as at least
/// one minute and the empty document as "0 min".
pub fn stats(doc: &Document) -> DocStats {
    let word_count = doc.tokens.len();
    DocStats {
        word_count,
        sentence_count: doc.sentences.len(),
        reading_time: format!("{} min", word_count.div_ceil(READING_WPM)),
    }
}

/// Score the emotion distribution over the token stream.
///
/// Raw per-category hit counts are normalized to integer percentages of
/// the total. Each category rounds independently, so the percentages may
/// not sum to exactly 100. When no lexicon word matched, all categories
/// are 0.
pub fn emotion_distribution(tokens: &[String]) -> EmotionScores {
    let mut raw = EmotionScores::default();
    for token in tokens {
        if let Some(category) = EMOTION_MAP.get(token.as_str()) {
            *raw.get_mut(*category) += 1;
        }
    }

    // Floor the denominator at 1 so an unmatched document stays all-zero.
    let total = raw.total().max(1) as f64;

    let mut percentages = EmotionScores::default();
    for category in EmotionCategory::ALL {
        let pct = (raw.get(category) as f64 / total * 100.0).round() as u32;
        *percentages.get_mut(category) = pct;
    }
    percentages
}

/// Scan tokens against the bias word lists.
///
/// Returns the clamped bias score and the number of rule hits. A token
/// present in more than one list triggers every matching rule; hedging
/// words adjust bias but never count as rule hits.
pub fn bias(tokens: &[String]) -> (i32, u32) {
    let mut raw_bias: i32 = 0;
    let mut rule_hits: u32 = 0;

    for token in tokens {
        let word = token.as_str();
        if ABSOLUTE_WORDS.contains(&word) {
            raw_bias += 2;
            rule_hits += 1;
        }
        if SUBJECTIVE_WORDS.contains(&word) {
            raw_bias += 1;
            rule_hits += 1;
        }
        if HEDGING_WORDS.contains(&word) {
            raw_bias -= 1;
        }
    }

    ((raw_bias * 5).clamp(-50, 50), rule_hits)
}

/// Writer-confidence estimate: 60 base, +2 per sentence, -2 per rule
/// hit, clamped to 40-100.
pub fn confidence(sentence_count: usize, rule_hits: u32) -> u32 {
    let score = 60 + 2 * sentence_count as i64 - 2 * rule_hits as i64;
    score.clamp(40, 100) as u32
}

/// Rank intent categories by keyword hits against the lowercase clean
/// text. Matching is substring containment, not token-exact; each hit
/// is worth 25 points, capped at 100. The sort is stable, so equal
/// scores keep the declaration order of `INTENT_PATTERNS`.
pub fn rank_intents(clean_lower: &str) -> Vec<IntentScore> {
    let mut ranked: Vec<IntentScore> = INTENT_PATTERNS
        .iter()
        .map(|(kind, keywords)| {
            let hits = keywords.iter().filter(|k| clean_lower.contains(*k)).count();
            IntentScore {
                label: *kind,
                score: (hits as u32 * 25).min(100),
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked
}
