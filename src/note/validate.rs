use thiserror::Error;

use super::draft::{AssistanceDraft, MeasurableDraft, OutcomesDraft, MAX_MEASURABLE_OUTCOMES};
use super::{Section, SelectedSections};

/// Serialized snapshot payloads may not exceed 1 MiB.
pub const MAX_SNAPSHOT_BYTES: usize = 1_048_576;

pub const MAX_NAME_CHARS: usize = 50;

const OUTCOME_FRAGMENT_LIMIT: usize = 150;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select at least one {0}")]
    Empty(&'static str),
    #[error("Please select no more than {limit} {noun}")]
    TooMany { limit: usize, noun: &'static str },
    #[error("Each selected {noun} must be {limit} characters or less")]
    ItemTooLong { noun: &'static str, limit: usize },
    #[error("You can select a maximum of {limit} {noun}")]
    SelectionCap { limit: usize, noun: &'static str },
    #[error("Please select an assistance level")]
    MissingAssistanceLevel,
    #[error("Please select both cueing level and reason when cueing assistance is provided")]
    IncompleteCueing,
    #[error("Please select all outcome components")]
    IncompleteOutcome,
    #[error("Please provide both measurement value and unit when selecting a measurement type")]
    IncompleteMeasurement,
    #[error("The generated note is too long. Please reduce the number of selections.")]
    AssistanceFragmentTooLong,
    #[error("The generated outcome is too long. Please make different selections.")]
    OutcomeFragmentTooLong,
    #[error("The outcome \"{0}\" is too long. Please make it more concise.")]
    MeasurableRowTooLong(String),
    #[error("You can add a maximum of {limit} items to the {section} section.")]
    SectionCap { limit: usize, section: &'static str },
    #[error("Please enter a valid name for your note (1-50 characters)")]
    InvalidName,
    #[error("The note content is invalid or too large")]
    InvalidContent,
}

impl ValidationError {
    /// Whole-state cap violations surface in the global banner rather than
    /// inside a modal.
    pub fn is_global(&self) -> bool {
        matches!(self, ValidationError::SectionCap { .. })
    }
}

/// Commit-time checks for the phrase-picker sections, in fixed order:
/// emptiness, count, then per-item length.
pub fn validate_phrase_commit(section: Section, items: &[String]) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::Empty(section.noun()));
    }
    if items.len() > section.max_items() {
        return Err(ValidationError::TooMany {
            limit: section.max_items(),
            noun: section.noun_plural(),
        });
    }
    let limit = section.item_char_limit();
    if items.iter().any(|item| item.chars().count() > limit) {
        return Err(ValidationError::ItemTooLong {
            noun: section.noun_short(),
            limit,
        });
    }
    Ok(())
}

/// Validates the assistance draft and, on success, returns the generated
/// fragment. Cross-field rule: cueing types require both a cueing level and
/// a cueing reason.
pub fn validate_assistance(draft: &AssistanceDraft) -> Result<String, ValidationError> {
    if draft.assistance_level.is_empty() {
        return Err(ValidationError::MissingAssistanceLevel);
    }
    if draft.selected_reasons.is_empty() {
        return Err(ValidationError::Empty("reason for assistance"));
    }
    if draft.selected_reasons.len() > super::draft::MAX_REASONS {
        return Err(ValidationError::TooMany {
            limit: super::draft::MAX_REASONS,
            noun: "reasons for assistance",
        });
    }
    if !draft.cueing_assistance.is_empty()
        && (draft.cueing_level.is_empty() || draft.cueing_reason.is_empty())
    {
        return Err(ValidationError::IncompleteCueing);
    }
    if draft.cueing_assistance.len() > super::draft::MAX_CUEING_TYPES {
        return Err(ValidationError::TooMany {
            limit: super::draft::MAX_CUEING_TYPES,
            noun: "cueing assistance types",
        });
    }
    let fragment = draft.generate_fragment();
    if fragment.chars().count() > Section::Assistance.item_char_limit() {
        return Err(ValidationError::AssistanceFragmentTooLong);
    }
    Ok(fragment)
}

/// Validates the main outcomes draft and returns the generated fragment.
pub fn validate_outcome(draft: &OutcomesDraft) -> Result<String, ValidationError> {
    if draft.outcome.is_empty() || draft.component.is_empty() || draft.performance.is_empty() {
        return Err(ValidationError::IncompleteOutcome);
    }
    let fragment = draft.generate_fragment();
    if fragment.chars().count() > OUTCOME_FRAGMENT_LIMIT {
        return Err(ValidationError::OutcomeFragmentTooLong);
    }
    Ok(fragment)
}

/// Validates the measurable-outcomes draft and returns the formatted rows.
pub fn validate_measurable(draft: &MeasurableDraft) -> Result<Vec<String>, ValidationError> {
    if draft.selected_outcomes.is_empty() {
        return Err(ValidationError::Empty("outcome"));
    }
    if draft.selected_outcomes.len() > MAX_MEASURABLE_OUTCOMES {
        return Err(ValidationError::TooMany {
            limit: MAX_MEASURABLE_OUTCOMES,
            noun: "outcomes",
        });
    }
    if !draft.measurement_type.is_empty()
        && (draft.measurement_value.is_empty() || draft.measurement_unit.is_empty())
    {
        return Err(ValidationError::IncompleteMeasurement);
    }
    let rows = draft.format_outcomes();
    for (row, outcome) in rows.iter().zip(&draft.selected_outcomes) {
        if row.chars().count() > OUTCOME_FRAGMENT_LIMIT {
            return Err(ValidationError::MeasurableRowTooLong(outcome.clone()));
        }
    }
    Ok(rows)
}

/// Checks a whole selection state against every section cap. Used for
/// all-or-nothing updates: the first overflow rejects the entire update.
pub fn validate_sections(sections: &SelectedSections) -> Result<(), ValidationError> {
    for section in Section::STEP_ORDER {
        if sections.get(section).len() > section.max_items() {
            return Err(ValidationError::SectionCap {
                limit: section.max_items(),
                section: section.key(),
            });
        }
    }
    Ok(())
}

/// Strips control characters and trims surrounding whitespace.
pub fn sanitize_name(raw: &str) -> String {
    raw.chars()
        .filter(|ch| !ch.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn validate_note_name(name: &str) -> Result<(), ValidationError> {
    let count = name.chars().count();
    if count == 0 || count > MAX_NAME_CHARS {
        return Err(ValidationError::InvalidName);
    }
    Ok(())
}

/// Serializes the sections for persistence, enforcing the payload size cap.
pub fn encode_sections(sections: &SelectedSections) -> Result<String, ValidationError> {
    let json = serde_json::to_string(sections).map_err(|_| ValidationError::InvalidContent)?;
    if json.len() > MAX_SNAPSHOT_BYTES {
        return Err(ValidationError::InvalidContent);
    }
    Ok(json)
}

/// Parses a persisted payload back into sections, rejecting oversized or
/// malformed content.
pub fn decode_sections(json: &str) -> Result<SelectedSections, ValidationError> {
    if json.len() > MAX_SNAPSHOT_BYTES {
        return Err(ValidationError::InvalidContent);
    }
    let value: serde_json::Value =
        serde_json::from_str(json).map_err(|_| ValidationError::InvalidContent)?;
    if !value.is_object() {
        return Err(ValidationError::InvalidContent);
    }
    serde_json::from_value(value).map_err(|_| ValidationError::InvalidContent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::draft::AssistanceDraft;
    use assert_matches::assert_matches;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("Item {i}")).collect()
    }

    #[test]
    fn phrase_commit_checks_run_in_fixed_order() {
        let err = validate_phrase_commit(Section::Intervention, &[]).unwrap_err();
        assert_eq!(err.to_string(), "Please select at least one intervention");

        let err = validate_phrase_commit(Section::Intervention, &items(11)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Please select no more than 10 interventions"
        );

        let long = vec!["x".repeat(151)];
        let err = validate_phrase_commit(Section::Intervention, &long).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Each selected intervention must be 150 characters or less"
        );
    }

    #[test]
    fn purpose_items_cap_at_one_hundred_chars() {
        let ok = vec!["y".repeat(100)];
        assert!(validate_phrase_commit(Section::PurposeOfTreatment, &ok).is_ok());

        let long = vec!["y".repeat(101)];
        let err = validate_phrase_commit(Section::PurposeOfTreatment, &long).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Each selected purpose must be 100 characters or less"
        );
    }

    #[test]
    fn assistance_requires_level_then_reasons() {
        let mut draft = AssistanceDraft::default();
        assert_matches!(
            validate_assistance(&draft),
            Err(ValidationError::MissingAssistanceLevel)
        );

        draft.assistance_level = "Minimal Assist".into();
        assert_matches!(validate_assistance(&draft), Err(ValidationError::Empty(_)));
    }

    #[test]
    fn assistance_cueing_requires_level_and_reason() {
        let draft = AssistanceDraft {
            assistance_level: "Minimal Assist".into(),
            selected_reasons: vec!["Impaired static balance".into()],
            cueing_assistance: vec!["Verbal cues".into()],
            cueing_level: "Minimal".into(),
            cueing_reason: String::new(),
        };
        assert_matches!(
            validate_assistance(&draft),
            Err(ValidationError::IncompleteCueing)
        );
    }

    #[test]
    fn assistance_fragment_over_250_chars_is_rejected() {
        let draft = AssistanceDraft {
            assistance_level: "Maximum Assist".into(),
            selected_reasons: vec!["r".repeat(120), "s".repeat(120)],
            ..Default::default()
        };
        assert_matches!(
            validate_assistance(&draft),
            Err(ValidationError::AssistanceFragmentTooLong)
        );
    }

    #[test]
    fn assistance_happy_path_returns_fragment() {
        let draft = AssistanceDraft {
            assistance_level: "Minimal Assist".into(),
            selected_reasons: vec!["Impaired static balance".into()],
            ..Default::default()
        };
        assert_eq!(
            validate_assistance(&draft).unwrap(),
            "Patient required minimal assist due to impaired static balance"
        );
    }

    #[test]
    fn outcome_requires_all_three_components() {
        let draft = OutcomesDraft {
            outcome: "demonstrated improved independence with".into(),
            component: String::new(),
            performance: "with task completion".into(),
            ..Default::default()
        };
        assert_matches!(
            validate_outcome(&draft),
            Err(ValidationError::IncompleteOutcome)
        );
    }

    #[test]
    fn measurable_measurement_type_requires_value_and_unit() {
        let mut draft = MeasurableDraft::default();
        draft.toggle_outcome("Improved rolling ability").unwrap();
        draft.measurement_type = "Distance".into();
        assert_matches!(
            validate_measurable(&draft),
            Err(ValidationError::IncompleteMeasurement)
        );

        draft.measurement_value = "10".into();
        draft.measurement_unit = "feet".into();
        assert_eq!(
            validate_measurable(&draft).unwrap(),
            vec!["Improved rolling ability (Distance: 10 feet)".to_string()]
        );
    }

    #[test]
    fn measurable_long_row_names_the_offending_outcome() {
        let mut draft = MeasurableDraft::default();
        draft.toggle_outcome("Improved rolling ability").unwrap();
        draft.set_specific("Improved rolling ability", "z".repeat(150));
        let err = validate_measurable(&draft).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The outcome \"Improved rolling ability\" is too long. Please make it more concise."
        );
    }

    #[test]
    fn section_overflow_produces_global_banner_message() {
        let mut sections = SelectedSections::default();
        sections.intervention = items(11);
        let err = validate_sections(&sections).unwrap_err();
        assert!(err.is_global());
        assert_eq!(
            err.to_string(),
            "You can add a maximum of 10 items to the intervention section."
        );
    }

    #[test]
    fn sections_at_exact_caps_pass() {
        let mut sections = SelectedSections::default();
        for section in Section::STEP_ORDER {
            *sections.get_mut(section) = items(section.max_items());
        }
        assert!(validate_sections(&sections).is_ok());
    }

    #[test]
    fn name_validation_trims_and_bounds_length() {
        assert_eq!(sanitize_name("  My Note\u{0007}  "), "My Note");
        assert!(validate_note_name("a").is_ok());
        assert!(validate_note_name(&"n".repeat(50)).is_ok());
        assert_matches!(
            validate_note_name(""),
            Err(ValidationError::InvalidName)
        );
        assert_matches!(
            validate_note_name(&"n".repeat(51)),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn decode_rejects_non_object_payloads() {
        assert_matches!(
            decode_sections("[1, 2, 3]"),
            Err(ValidationError::InvalidContent)
        );
        assert_matches!(
            decode_sections("not json"),
            Err(ValidationError::InvalidContent)
        );
    }

    #[test]
    fn payloads_over_one_mebibyte_are_rejected() {
        let mut sections = SelectedSections::default();
        sections.intervention.push("x".repeat(MAX_SNAPSHOT_BYTES));
        assert_matches!(
            encode_sections(&sections),
            Err(ValidationError::InvalidContent)
        );

        let padding = "y".repeat(MAX_SNAPSHOT_BYTES);
        let json = format!(r#"{{"intervention":["{padding}"]}}"#);
        assert_matches!(decode_sections(&json), Err(ValidationError::InvalidContent));
    }

    #[test]
    fn encode_decode_round_trips_sections() {
        let mut sections = SelectedSections::default();
        sections.outcomes.push("Patient improved".into());
        let json = encode_sections(&sections).unwrap();
        assert_eq!(decode_sections(&json).unwrap(), sections);
    }
}
