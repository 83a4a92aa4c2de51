use indexmap::IndexMap;

use super::validate::ValidationError;
use super::Section;

pub const MAX_REASONS: usize = 5;
pub const MAX_CUEING_TYPES: usize = 3;
pub const MAX_MEASURABLE_OUTCOMES: usize = 5;

/// Working selections for the assistance flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistanceDraft {
    pub assistance_level: String,
    pub selected_reasons: Vec<String>,
    pub cueing_assistance: Vec<String>,
    pub cueing_level: String,
    pub cueing_reason: String,
}

impl AssistanceDraft {
    /// Builds the narrative fragment from the current selections.
    /// The cueing sentence only appears once level and reason are both set.
    pub fn generate_fragment(&self) -> String {
        let mut note = format!(
            "Patient required {} due to {}",
            self.assistance_level.to_lowercase(),
            self.selected_reasons.join(", ").to_lowercase()
        );
        if !self.cueing_assistance.is_empty()
            && !self.cueing_level.is_empty()
            && !self.cueing_reason.is_empty()
        {
            note.push_str(&format!(
                ". {} {} were provided for {}",
                self.cueing_level,
                self.cueing_assistance.join(", "),
                self.cueing_reason.to_lowercase()
            ));
        }
        note
    }

    pub fn toggle_reason(&mut self, reason: &str) -> Result<(), ValidationError> {
        toggle_capped(
            &mut self.selected_reasons,
            reason,
            MAX_REASONS,
            "reasons for assistance",
        )
    }

    pub fn toggle_cueing_type(&mut self, cueing: &str) -> Result<(), ValidationError> {
        toggle_capped(
            &mut self.cueing_assistance,
            cueing,
            MAX_CUEING_TYPES,
            "cueing assistance types",
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutcomeType {
    #[default]
    ProgressIndicators,
    ContinuingNeeds,
}

impl OutcomeType {
    pub fn label(self) -> &'static str {
        match self {
            OutcomeType::ProgressIndicators => "Progress Indicators",
            OutcomeType::ContinuingNeeds => "Continuing Needs",
        }
    }
}

/// Working selections for the main outcomes flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutcomesDraft {
    pub outcome_type: OutcomeType,
    pub outcome: String,
    pub component: String,
    pub performance: String,
}

impl OutcomesDraft {
    pub fn generate_fragment(&self) -> String {
        format!("Patient {} {}", self.outcome, self.performance)
    }
}

/// Working selections for the measurable-outcomes sub-flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeasurableDraft {
    pub selected_outcomes: Vec<String>,
    pub specifics: IndexMap<String, String>,
    pub measurement_type: String,
    pub measurement_value: String,
    pub measurement_unit: String,
}

impl MeasurableDraft {
    pub fn toggle_outcome(&mut self, outcome: &str) -> Result<(), ValidationError> {
        let removed = self.selected_outcomes.iter().position(|o| o == outcome);
        if let Some(idx) = removed {
            self.selected_outcomes.remove(idx);
            self.specifics.shift_remove(outcome);
            return Ok(());
        }
        if self.selected_outcomes.len() >= MAX_MEASURABLE_OUTCOMES {
            return Err(ValidationError::SelectionCap {
                limit: MAX_MEASURABLE_OUTCOMES,
                noun: "outcomes",
            });
        }
        self.selected_outcomes.push(outcome.to_string());
        Ok(())
    }

    pub fn set_specific(&mut self, outcome: &str, value: String) {
        if value.is_empty() {
            self.specifics.shift_remove(outcome);
        } else {
            self.specifics.insert(outcome.to_string(), value);
        }
    }

    fn measurement_suffix(&self) -> Option<String> {
        if self.measurement_type.is_empty()
            || self.measurement_value.is_empty()
            || self.measurement_unit.is_empty()
        {
            return None;
        }
        Some(format!(
            "{}: {} {}",
            self.measurement_type, self.measurement_value, self.measurement_unit
        ))
    }

    /// Formats one row per selected outcome, appending specificity and the
    /// measurement suffix when present.
    pub fn format_outcomes(&self) -> Vec<String> {
        let measurement = self.measurement_suffix();
        self.selected_outcomes
            .iter()
            .map(|outcome| {
                let mut formatted = outcome.clone();
                if let Some(specific) = self.specifics.get(outcome) {
                    formatted.push_str(&format!(" - {specific}"));
                }
                if let Some(measurement) = &measurement {
                    formatted.push_str(&format!(" ({measurement})"));
                }
                formatted
            })
            .collect()
    }
}

/// Every modal flow's working selections. Drafts survive modal close and
/// reopen; only Clear All resets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Drafts {
    pub purpose_of_treatment: Vec<String>,
    pub intervention: Vec<String>,
    pub observations: Vec<String>,
    pub plan: Vec<String>,
    pub assistance: AssistanceDraft,
    pub outcomes: OutcomesDraft,
    pub measurable: MeasurableDraft,
}

impl Drafts {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Phrase-list draft for the four picker sections.
    pub fn phrase_list(&self, section: Section) -> Option<&Vec<String>> {
        match section {
            Section::PurposeOfTreatment => Some(&self.purpose_of_treatment),
            Section::Intervention => Some(&self.intervention),
            Section::Observations => Some(&self.observations),
            Section::Plan => Some(&self.plan),
            _ => None,
        }
    }

    /// Toggles a phrase in a picker section's draft. Purpose, intervention
    /// and observation picks are capped at toggle time; plan picks are only
    /// capped at commit.
    pub fn toggle_phrase(&mut self, section: Section, phrase: &str) -> Result<(), ValidationError> {
        let (list, cap) = match section {
            Section::PurposeOfTreatment => (
                &mut self.purpose_of_treatment,
                Some((section.max_items(), "purposes of treatment")),
            ),
            Section::Intervention => (
                &mut self.intervention,
                Some((section.max_items(), "interventions")),
            ),
            Section::Observations => (
                &mut self.observations,
                Some((section.max_items(), "observations")),
            ),
            Section::Plan => (&mut self.plan, None),
            _ => return Ok(()),
        };
        match cap {
            Some((limit, noun)) => toggle_capped(list, phrase, limit, noun),
            None => {
                toggle(list, phrase);
                Ok(())
            }
        }
    }
}

fn toggle(list: &mut Vec<String>, item: &str) {
    if let Some(idx) = list.iter().position(|existing| existing == item) {
        list.remove(idx);
    } else {
        list.push(item.to_string());
    }
}

fn toggle_capped(
    list: &mut Vec<String>,
    item: &str,
    limit: usize,
    noun: &'static str,
) -> Result<(), ValidationError> {
    if let Some(idx) = list.iter().position(|existing| existing == item) {
        list.remove(idx);
        return Ok(());
    }
    if list.len() >= limit {
        return Err(ValidationError::SelectionCap { limit, noun });
    }
    list.push(item.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn assistance_fragment_lowercases_level_and_reasons() {
        let draft = AssistanceDraft {
            assistance_level: "Minimal Assist".into(),
            selected_reasons: vec!["Impaired static balance".into()],
            ..Default::default()
        };
        assert_eq!(
            draft.generate_fragment(),
            "Patient required minimal assist due to impaired static balance"
        );
    }

    #[test]
    fn assistance_fragment_appends_cueing_sentence_when_complete() {
        let draft = AssistanceDraft {
            assistance_level: "Moderate Assist".into(),
            selected_reasons: vec!["Decreased strength".into(), "Impaired attention".into()],
            cueing_assistance: vec!["Verbal cues".into(), "Tactile cues".into()],
            cueing_level: "Moderate".into(),
            cueing_reason: "Impaired sequencing".into(),
        };
        assert_eq!(
            draft.generate_fragment(),
            "Patient required moderate assist due to decreased strength, impaired attention. \
             Moderate Verbal cues, Tactile cues were provided for impaired sequencing"
        );
    }

    #[test]
    fn assistance_fragment_omits_cueing_without_level_and_reason() {
        let draft = AssistanceDraft {
            assistance_level: "Minimal Assist".into(),
            selected_reasons: vec!["Impaired static balance".into()],
            cueing_assistance: vec!["Verbal cues".into()],
            ..Default::default()
        };
        assert!(!draft.generate_fragment().contains("were provided"));
    }

    #[test]
    fn cueing_toggle_rejects_fourth_type_and_keeps_draft_unchanged() {
        let mut draft = AssistanceDraft::default();
        let types = [
            "Verbal cues",
            "Visual cues",
            "Tactile cues",
            "Gestural cues",
            "Environmental cues",
            "Written cues",
        ];
        let mut accepted = 0;
        for cueing in types {
            match draft.toggle_cueing_type(cueing) {
                Ok(()) => accepted += 1,
                Err(err) => assert_eq!(
                    err.to_string(),
                    "You can select a maximum of 3 cueing assistance types"
                ),
            }
        }
        assert_eq!(accepted, 3);
        assert_eq!(draft.cueing_assistance.len(), 3);
    }

    #[test]
    fn reason_toggle_untoggles_existing_selection() {
        let mut draft = AssistanceDraft::default();
        draft.toggle_reason("Decreased strength").unwrap();
        draft.toggle_reason("Decreased strength").unwrap();
        assert!(draft.selected_reasons.is_empty());
    }

    #[test]
    fn outcome_fragment_combines_outcome_and_performance() {
        let draft = OutcomesDraft {
            outcome: "demonstrated improved independence with".into(),
            component: "Dressing".into(),
            performance: "with sleeve management".into(),
            ..Default::default()
        };
        assert_eq!(
            draft.generate_fragment(),
            "Patient demonstrated improved independence with with sleeve management"
        );
    }

    #[test]
    fn measurable_rows_include_specificity_and_measurement() {
        let mut draft = MeasurableDraft::default();
        draft.toggle_outcome("Improved static standing balance").unwrap();
        draft.toggle_outcome("Increased shoulder flexion").unwrap();
        draft.set_specific("Increased shoulder flexion", "right side".into());
        draft.measurement_type = "Time".into();
        draft.measurement_value = "30".into();
        draft.measurement_unit = "seconds".into();

        assert_eq!(
            draft.format_outcomes(),
            vec![
                "Improved static standing balance (Time: 30 seconds)".to_string(),
                "Increased shoulder flexion - right side (Time: 30 seconds)".to_string(),
            ]
        );
    }

    #[test]
    fn measurable_rows_omit_incomplete_measurement() {
        let mut draft = MeasurableDraft::default();
        draft.toggle_outcome("Improved rolling ability").unwrap();
        draft.measurement_type = "Distance".into();
        assert_eq!(
            draft.format_outcomes(),
            vec!["Improved rolling ability".to_string()]
        );
    }

    #[test]
    fn measurable_toggle_caps_at_five_and_clears_specific_on_removal() {
        let mut draft = MeasurableDraft::default();
        for i in 0..5 {
            draft.toggle_outcome(&format!("Outcome {i}")).unwrap();
        }
        assert_matches!(
            draft.toggle_outcome("Outcome 5"),
            Err(ValidationError::SelectionCap { limit: 5, .. })
        );

        draft.set_specific("Outcome 0", "detail".into());
        draft.toggle_outcome("Outcome 0").unwrap();
        assert!(draft.specifics.get("Outcome 0").is_none());
    }

    #[test]
    fn plan_phrases_toggle_without_cap() {
        let mut drafts = Drafts::default();
        for i in 0..12 {
            drafts
                .toggle_phrase(Section::Plan, &format!("Plan {i}"))
                .unwrap();
        }
        assert_eq!(drafts.plan.len(), 12);
    }

    #[test]
    fn purpose_phrases_cap_at_toggle_time() {
        let mut drafts = Drafts::default();
        for i in 0..5 {
            drafts
                .toggle_phrase(Section::PurposeOfTreatment, &format!("Purpose {i}"))
                .unwrap();
        }
        let err = drafts
            .toggle_phrase(Section::PurposeOfTreatment, "Purpose 5")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "You can select a maximum of 5 purposes of treatment"
        );
        assert_eq!(drafts.purpose_of_treatment.len(), 5);
    }
}
