use serde::{Deserialize, Serialize};
use strum::EnumIter;

pub mod compose;
pub mod draft;
pub mod validate;

pub use draft::{AssistanceDraft, Drafts, MeasurableDraft, OutcomeType, OutcomesDraft};
pub use validate::ValidationError;

/// The six note sections, in guided-step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    PurposeOfTreatment,
    Intervention,
    Assistance,
    Observations,
    Outcomes,
    Plan,
}

impl Section {
    pub const STEP_ORDER: [Section; 6] = [
        Section::PurposeOfTreatment,
        Section::Intervention,
        Section::Assistance,
        Section::Observations,
        Section::Outcomes,
        Section::Plan,
    ];

    /// Hard cap on committed items per section.
    pub fn max_items(self) -> usize {
        match self {
            Section::PurposeOfTreatment => 5,
            Section::Intervention => 10,
            Section::Assistance => 5,
            Section::Observations => 15,
            Section::Outcomes => 10,
            Section::Plan => 10,
        }
    }

    /// Character ceiling for a single committed item.
    pub fn item_char_limit(self) -> usize {
        match self {
            Section::PurposeOfTreatment => 100,
            Section::Assistance => 250,
            _ => 150,
        }
    }

    /// Canonical camelCase key, used in persisted payloads and cap messages.
    pub fn key(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "purposeOfTreatment",
            Section::Intervention => "intervention",
            Section::Assistance => "assistance",
            Section::Observations => "observations",
            Section::Outcomes => "outcomes",
            Section::Plan => "plan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "Purpose of Treatment",
            Section::Intervention => "Intervention",
            Section::Assistance => "Assistance",
            Section::Observations => "Observations",
            Section::Outcomes => "Outcomes",
            Section::Plan => "Plan for Next Session",
        }
    }

    /// One-line step hint shown in the guided sidebar.
    pub fn step_hint(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "Why skilled treatment was indicated",
            Section::Intervention => "What was done during the session",
            Section::Assistance => "Level and reasons for assistance provided",
            Section::Observations => "Clinical observations during treatment",
            Section::Outcomes => "Progress indicators and continuing needs",
            Section::Plan => "Focus areas for the next session",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "purpose of treatment",
            Section::Intervention => "intervention",
            Section::Assistance => "assistance entry",
            Section::Observations => "observation",
            Section::Outcomes => "outcome",
            Section::Plan => "plan item",
        }
    }

    fn noun_plural(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "purposes of treatment",
            Section::Intervention => "interventions",
            Section::Assistance => "assistance entries",
            Section::Observations => "observations",
            Section::Outcomes => "outcomes",
            Section::Plan => "plan items",
        }
    }

    /// Short noun used in the per-item length message
    /// ("Each selected purpose must be 100 characters or less").
    fn noun_short(self) -> &'static str {
        match self {
            Section::PurposeOfTreatment => "purpose",
            other => other.noun(),
        }
    }

    pub fn next(self) -> Option<Section> {
        let idx = Self::STEP_ORDER.iter().position(|s| *s == self)?;
        Self::STEP_ORDER.get(idx + 1).copied()
    }

    pub fn previous(self) -> Option<Section> {
        let idx = Self::STEP_ORDER.iter().position(|s| *s == self)?;
        idx.checked_sub(1).map(|prev| Self::STEP_ORDER[prev])
    }
}

/// Committed phrases per section. This is the unit that snapshots persist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectedSections {
    pub purpose_of_treatment: Vec<String>,
    pub intervention: Vec<String>,
    pub assistance: Vec<String>,
    pub observations: Vec<String>,
    pub outcomes: Vec<String>,
    pub plan: Vec<String>,
}

impl SelectedSections {
    pub fn get(&self, section: Section) -> &[String] {
        match section {
            Section::PurposeOfTreatment => &self.purpose_of_treatment,
            Section::Intervention => &self.intervention,
            Section::Assistance => &self.assistance,
            Section::Observations => &self.observations,
            Section::Outcomes => &self.outcomes,
            Section::Plan => &self.plan,
        }
    }

    pub fn get_mut(&mut self, section: Section) -> &mut Vec<String> {
        match section {
            Section::PurposeOfTreatment => &mut self.purpose_of_treatment,
            Section::Intervention => &mut self.intervention,
            Section::Assistance => &mut self.assistance,
            Section::Observations => &mut self.observations,
            Section::Outcomes => &mut self.outcomes,
            Section::Plan => &mut self.plan,
        }
    }

    pub fn is_empty(&self) -> bool {
        Section::STEP_ORDER
            .iter()
            .all(|section| self.get(*section).is_empty())
    }

    /// Sections with at least one committed item, in step order.
    pub fn completed_sections(&self) -> Vec<Section> {
        Section::STEP_ORDER
            .iter()
            .copied()
            .filter(|section| !self.get(*section).is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_order_navigation_clamps_at_ends() {
        assert_eq!(Section::PurposeOfTreatment.previous(), None);
        assert_eq!(Section::Plan.next(), None);
        assert_eq!(
            Section::PurposeOfTreatment.next(),
            Some(Section::Intervention)
        );
        assert_eq!(Section::Outcomes.previous(), Some(Section::Observations));
    }

    #[test]
    fn section_keys_round_trip_through_serde() {
        let json = serde_json::to_string(&Section::PurposeOfTreatment).unwrap();
        assert_eq!(json, "\"purposeOfTreatment\"");
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::PurposeOfTreatment);
    }

    #[test]
    fn selected_sections_serialize_with_camel_case_keys() {
        let mut sections = SelectedSections::default();
        sections.purpose_of_treatment.push("Improve safety".into());
        let json = serde_json::to_value(&sections).unwrap();
        assert!(json.get("purposeOfTreatment").is_some());
        assert!(json.get("plan").is_some());
    }

    #[test]
    fn completed_sections_follow_step_order() {
        let mut sections = SelectedSections::default();
        sections.plan.push("a".into());
        sections.intervention.push("b".into());
        assert_eq!(
            sections.completed_sections(),
            vec![Section::Intervention, Section::Plan]
        );
    }

    #[test]
    fn caps_match_documented_limits() {
        let caps: Vec<usize> = Section::STEP_ORDER
            .iter()
            .map(|s| s.max_items())
            .collect();
        assert_eq!(caps, vec![5, 10, 5, 15, 10, 10]);
    }
}
