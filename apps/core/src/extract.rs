//! Entity, Claim and Timeline Extraction.
//!
//! Heuristic extraction over the segmented document: capitalized-word
//! entity candidates, sentences flagged as claims, and a year-based
//! timeline. Pure pattern matching, no model.

use std::sync::LazyLock;

use regex::Regex;

use crate::report::{Claim, ClaimKind, Entity, EntityType, TimelineEvent};

/// Maximum number of entities kept in the final ranking
const MAX_ENTITIES: usize = 10;

/// Maximum event length before the ellipsis is appended
const EVENT_TRUNCATE_CHARS: usize = 60;

/// Exact surface forms reclassified as ORG. Kept as written: the length
/// gate below means "Inc" and "Ltd" never reach this check.
const ORG_MARKERS: &[&str] = &["Inc", "Corp", "Ltd", "Company"];

/// Claim-indicating verbs, matched as substrings of the lowercase sentence
const CLAIM_VERBS: &[&str] = &["announced", "claimed", "stated", "proven", "results"];

// Compiled once at first use. The literals are static and known-valid.
static ENTITY_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+$").expect("Invalid regex: entity shape pattern"));

static NUMERIC_CLAIM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+%|\$\d+|\d{4}").expect("Invalid regex: numeric claim pattern")
});

static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").expect("Invalid regex: year pattern"));

/// Extract capitalized-word entity candidates from the sentences.
///
/// A candidate is any word after the first position of a trimmed
/// sentence that is a single capitalized lowercase-tail word longer
/// than 3 characters. Repeats increment the count; the ranking is
/// sorted descending by count and truncated to 10, with first-seen
/// order breaking ties.
pub fn entities(sentences: &[String]) -> Vec<Entity> {
    let mut found: Vec<Entity> = Vec::new();

    for sentence in sentences {
        for (position, word) in sentence.trim().split(' ').enumerate() {
            if position == 0 || word.len() <= 3 || !ENTITY_SHAPE.is_match(word) {
                continue;
            }

            // Strip non-word characters; a no-op after the shape check,
            // kept so the canonical form never carries punctuation.
            let canonical: String = word
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect();

            match found.iter_mut().find(|e| e.text == canonical) {
                Some(entity) => entity.count += 1,
                None => {
                    let entity_type = if ORG_MARKERS.contains(&canonical.as_str()) {
                        EntityType::Org
                    } else {
                        EntityType::Unknown
                    };
                    found.push(Entity {
                        text: canonical,
                        entity_type,
                        count: 1,
                    });
                }
            }
        }
    }

    found.sort_by(|a, b| b.count.cmp(&a.count));
    found.truncate(MAX_ENTITIES);
    found
}

/// Flag sentences containing numeric facts or claim-indicating verbs.
///
/// A sentence is a claim if it contains a percentage, a currency
/// amount, a 4-digit number, or any claim verb as a substring. The
/// claim is numeric when any digit is present, otherwise an assertion.
pub fn claims(sentences: &[String]) -> Vec<Claim> {
    let mut found = Vec::new();

    for (index, sentence) in sentences.iter().enumerate() {
        let lower = sentence.to_lowercase();
        let is_claim = NUMERIC_CLAIM.is_match(sentence)
            || CLAIM_VERBS.iter().any(|verb| lower.contains(verb));

        if is_claim {
            let kind = if sentence.chars().any(|c| c.is_ascii_digit()) {
                ClaimKind::Numeric
            } else {
                ClaimKind::Assertion
            };
            found.push(Claim {
                text: sentence.trim().to_string(),
                index,
                kind,
            });
        }
    }

    found
}

/// Build a chronological timeline from 4-digit years (1900-2099).
///
/// Years are deduplicated and sorted ascending as strings; the fixed
/// 4-digit width makes string order coincide with numeric order. Each
/// entry carries the first sentence mentioning the year, truncated to
/// 60 characters. A document without years yields a single synthetic
/// "Today" entry.
pub fn timeline(clean: &str, sentences: &[String]) -> Vec<TimelineEvent> {
    let mut years: Vec<&str> = Vec::new();
    for found in YEAR.find_iter(clean) {
        let year = found.as_str();
        if !years.contains(&year) {
            years.push(year);
        }
    }
    years.sort_unstable();

    let mut events: Vec<TimelineEvent> = years
        .into_iter()
        .map(|year| {
            let source = sentences
                .iter()
                .map(String::as_str)
                .find(|s| s.contains(year))
                .unwrap_or("Event detected");
            let truncated: String = source.chars().take(EVENT_TRUNCATE_CHARS).collect();
            TimelineEvent {
                date: year.to_string(),
                event: format!("{}...", truncated),
            }
        })
        .collect();

    if events.is_empty() {
        events.push(TimelineEvent {
            date: "Today".to_string(),
            event: "Analysis conducted".to_string(),
        });
    }

    events
}
