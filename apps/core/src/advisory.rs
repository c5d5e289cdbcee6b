//! Advisory Generation.
//!
//! Derives blindspot flags from the scoring and extraction results and
//! attaches the fixed recommendation checklist. Rules fire
//! independently and in a fixed order, so the output list is stable.

use crate::report::{Claim, Entity};

/// Absolute bias magnitude above which the framing rule fires
const BIAS_ALERT_THRESHOLD: i32 = 20;

/// Minimum number of extracted entities before the missing-actors rule fires
const MIN_EXPECTED_ENTITIES: usize = 2;

const BLINDSPOT_UNSOURCED: &str = "Several claims made without explicit source attribution.";
const BLINDSPOT_FRAMING: &str = "Strong emotive language may indicate framing bias.";
const BLINDSPOT_MISSING_ACTORS: &str = "Lack of specific actors or entities mentioned.";

/// Fixed recommendation checklist. Deliberately input-independent; the
/// same three items are returned for every document.
const RECOMMENDATIONS: &[&str] = &[
    "Verify primary sources for numeric claims.",
    "Cross-reference dates with external timelines.",
    "Check for omission of key stakeholders.",
];

/// Evaluate the blindspot rules in order. Zero or more may fire.
pub fn blindspots(
    claims: &[Claim],
    bias: i32,
    entities: &[Entity],
    clean_lower: &str,
) -> Vec<String> {
    let mut found = Vec::new();

    if !claims.is_empty() && !clean_lower.contains("source") {
        found.push(BLINDSPOT_UNSOURCED.to_string());
    }
    if bias > BIAS_ALERT_THRESHOLD || bias < -BIAS_ALERT_THRESHOLD {
        found.push(BLINDSPOT_FRAMING.to_string());
    }
    if entities.len() < MIN_EXPECTED_ENTITIES {
        found.push(BLINDSPOT_MISSING_ACTORS.to_string());
    }

    found
}

/// The fixed recommendation list
pub fn recommendations() -> Vec<String> {
    RECOMMENDATIONS.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ClaimKind, EntityType};

    fn claim() -> Claim {
        Claim {
            text: "Revenue grew 20%".to_string(),
            index: 0,
            kind: ClaimKind::Numeric,
        }
    }

    fn entity(text: &str) -> Entity {
        Entity {
            text: text.to_string(),
            entity_type: EntityType::Unknown,
            count: 1,
        }
    }

    #[test]
    fn test_unsourced_claims_flagged() {
        let entities = vec![entity("Alice"), entity("Berlin")];

        let flags = blindspots(&[claim()], 0, &entities, "revenue grew 20%");
        assert_eq!(flags, vec![BLINDSPOT_UNSOURCED.to_string()]);

        // Mentioning a source anywhere suppresses the rule
        let flags = blindspots(&[claim()], 0, &entities, "revenue grew 20% per one source");
        assert!(flags.is_empty());
    }

    #[test]
    fn test_framing_bias_flagged_in_both_directions() {
        let entities = vec![entity("Alice"), entity("Berlin")];

        let flags = blindspots(&[], 25, &entities, "");
        assert_eq!(flags, vec![BLINDSPOT_FRAMING.to_string()]);

        let flags = blindspots(&[], -25, &entities, "");
        assert_eq!(flags, vec![BLINDSPOT_FRAMING.to_string()]);

        // Exactly at the threshold does not fire
        let flags = blindspots(&[], 20, &entities, "");
        assert!(flags.is_empty());
    }

    #[test]
    fn test_missing_actors_flagged() {
        let flags = blindspots(&[], 0, &[entity("Alice")], "");
        assert_eq!(flags, vec![BLINDSPOT_MISSING_ACTORS.to_string()]);
    }

    #[test]
    fn test_rules_fire_in_fixed_order() {
        let flags = blindspots(&[claim()], 30, &[], "no attribution here");
        assert_eq!(
            flags,
            vec![
                BLINDSPOT_UNSOURCED.to_string(),
                BLINDSPOT_FRAMING.to_string(),
                BLINDSPOT_MISSING_ACTORS.to_string(),
            ]
        );
    }

    #[test]
    fn test_recommendations_are_fixed() {
        let recs = recommendations();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs, recommendations());
    }
}
