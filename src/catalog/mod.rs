//! Read-only phrase catalog.
//!
//! Selection modals never hold free text of their own; everything they offer
//! comes from the titled groups here. Accessors that take a caller-supplied
//! key return a [`Lookup`] so a bad key degrades to an empty list with a
//! warning instead of a panic.

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::warn;

use crate::note::{OutcomeType, Section};

mod content;

/// A titled list of selectable phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogGroup {
    pub title: &'static str,
    pub phrases: &'static [&'static str],
}

/// Documentation context. Switching the category swaps which purpose,
/// intervention, and plan groups are offered; committed selections are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "kebab-case")]
pub enum NoteCategory {
    #[default]
    SelfCare,
    TherapeuticActivities,
}

impl NoteCategory {
    pub fn label(self) -> &'static str {
        match self {
            NoteCategory::SelfCare => "Self-Care",
            NoteCategory::TherapeuticActivities => "Therapeutic Activities",
        }
    }

    pub fn toggled(self) -> NoteCategory {
        match self {
            NoteCategory::SelfCare => NoteCategory::TherapeuticActivities,
            NoteCategory::TherapeuticActivities => NoteCategory::SelfCare,
        }
    }
}

/// Result of a keyed catalog lookup. A miss is reported once at the lookup
/// site and then behaves like an empty group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(&'static [&'static str]),
    NotFound,
}

impl Lookup {
    pub fn phrases(self) -> &'static [&'static str] {
        match self {
            Lookup::Found(phrases) => phrases,
            Lookup::NotFound => &[],
        }
    }

    pub fn is_found(self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

fn lookup_group(groups: &'static [CatalogGroup], title: &str, kind: &str) -> Lookup {
    match groups.iter().find(|group| group.title == title) {
        Some(group) => Lookup::Found(group.phrases),
        None => {
            warn!(kind, title, "unknown catalog key");
            Lookup::NotFound
        }
    }
}

/// Purpose-of-treatment groups for the active category. Pain management and
/// cognitive function apply to both categories.
pub fn purpose_groups(category: NoteCategory) -> &'static [CatalogGroup] {
    match category {
        NoteCategory::SelfCare => &[
            content::PURPOSE_PAIN_MANAGEMENT,
            content::PURPOSE_COGNITIVE_FUNCTION,
            content::PURPOSE_ADL,
            content::PURPOSE_DRESSING,
            content::PURPOSE_BATHING,
            content::PURPOSE_GROOMING,
        ],
        NoteCategory::TherapeuticActivities => &[
            content::PURPOSE_PAIN_MANAGEMENT,
            content::PURPOSE_COGNITIVE_FUNCTION,
            content::PURPOSE_FUNCTIONAL_MOBILITY,
            content::PURPOSE_STRENGTH_ENDURANCE,
            content::PURPOSE_BALANCE,
            content::PURPOSE_COORDINATION,
        ],
    }
}

pub fn intervention_groups(category: NoteCategory) -> &'static [CatalogGroup] {
    match category {
        NoteCategory::SelfCare => &[
            content::INTERVENTION_GENERAL_STRATEGIES,
            content::INTERVENTION_SELF_CARE_TECHNIQUES,
            content::INTERVENTION_TOILETING,
            content::INTERVENTION_UPPER_BODY_DRESSING,
            content::INTERVENTION_LOWER_BODY_DRESSING,
            content::INTERVENTION_BATHING,
            content::INTERVENTION_GROOMING,
        ],
        NoteCategory::TherapeuticActivities => &[
            content::INTERVENTION_GENERAL_STRATEGIES,
            content::INTERVENTION_GAIT_TRAINING,
            content::INTERVENTION_BALANCE_TRAINING,
            content::INTERVENTION_STRENGTHENING,
            content::INTERVENTION_TRANSFERS,
        ],
    }
}

/// Observation groups are category-independent.
pub fn observation_groups() -> &'static [CatalogGroup] {
    content::OBSERVATION_GROUPS
}

pub fn plan_groups(category: NoteCategory) -> &'static [CatalogGroup] {
    match category {
        NoteCategory::SelfCare => &[
            content::PLAN_SELF_CARE_ADLS,
            content::PLAN_COGNITIVE_SAFETY,
        ],
        NoteCategory::TherapeuticActivities => &[
            content::PLAN_FUNCTIONAL_MOBILITY,
            content::PLAN_BALANCE_COORDINATION,
            content::PLAN_STRENGTH_ENDURANCE,
        ],
    }
}

pub fn assistance_levels() -> &'static [&'static str] {
    content::ASSISTANCE_LEVELS
}

pub fn reason_groups() -> &'static [CatalogGroup] {
    content::REASON_GROUPS
}

pub fn cueing_levels() -> &'static [&'static str] {
    content::CUEING_LEVELS
}

pub fn cueing_types() -> &'static [&'static str] {
    content::CUEING_TYPES
}

pub fn cueing_reason_groups() -> &'static [CatalogGroup] {
    content::CUEING_REASON_GROUPS
}

/// Performance phrases ("demonstrated improved independence with", ...) for
/// the chosen outcome type.
pub fn outcome_phrases(outcome_type: OutcomeType) -> &'static [&'static str] {
    match outcome_type {
        OutcomeType::ProgressIndicators => content::PROGRESS_INDICATOR_PHRASES,
        OutcomeType::ContinuingNeeds => content::CONTINUING_NEED_PHRASES,
    }
}

pub fn performance_components() -> &'static [CatalogGroup] {
    content::PERFORMANCE_COMPONENTS
}

pub fn performances_for_component(component: &str) -> Lookup {
    lookup_group(content::PERFORMANCE_COMPONENTS, component, "performance component")
}

pub fn outcome_category_groups() -> &'static [CatalogGroup] {
    content::OUTCOME_CATEGORY_GROUPS
}

pub fn measurement_types() -> impl Iterator<Item = &'static str> {
    content::MEASUREMENT_UNIT_GROUPS.iter().map(|group| group.title)
}

pub fn units_for_measurement(measurement_type: &str) -> Lookup {
    lookup_group(content::MEASUREMENT_UNIT_GROUPS, measurement_type, "measurement type")
}

/// One-keystroke additions offered outside the guided flow.
pub fn quick_add_items() -> &'static [(Section, &'static str)] {
    &[
        (Section::PurposeOfTreatment, "Improve functional mobility"),
        (Section::Intervention, "Gait training"),
        (Section::Assistance, "Minimal assistance"),
        (Section::Observations, "Improved balance"),
        (Section::Outcomes, "Increased independence"),
        (Section::Plan, "Continue with current interventions"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_phrase_fits_its_section_limit() {
        for category in NoteCategory::iter() {
            let per_section: [(&[CatalogGroup], Section); 4] = [
                (purpose_groups(category), Section::PurposeOfTreatment),
                (intervention_groups(category), Section::Intervention),
                (observation_groups(), Section::Observations),
                (plan_groups(category), Section::Plan),
            ];
            for (groups, section) in per_section {
                for group in groups {
                    for phrase in group.phrases {
                        assert!(
                            phrase.chars().count() <= section.item_char_limit(),
                            "{phrase:?} exceeds the {} limit",
                            section.key()
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn category_toggle_round_trips() {
        let category = NoteCategory::default();
        assert_eq!(category, NoteCategory::SelfCare);
        assert_eq!(category.toggled().toggled(), category);
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&NoteCategory::TherapeuticActivities).unwrap();
        assert_eq!(json, "\"therapeutic-activities\"");
    }

    #[test]
    fn known_measurement_type_lists_units() {
        let units = units_for_measurement("Distance");
        assert!(units.is_found());
        assert_eq!(units.phrases(), &["inches", "centimeters", "feet", "meters"]);
    }

    #[test]
    fn unknown_lookup_degrades_to_empty() {
        let units = units_for_measurement("Altitude");
        assert!(!units.is_found());
        assert!(units.phrases().is_empty());

        assert_eq!(
            performances_for_component("Bathing"),
            Lookup::NotFound
        );
    }

    #[test]
    fn quick_add_covers_every_section_once() {
        let items = quick_add_items();
        assert_eq!(items.len(), Section::STEP_ORDER.len());
        for (expected, (section, label)) in Section::STEP_ORDER.iter().zip(items) {
            assert_eq!(section, expected);
            assert!(!label.is_empty());
        }
    }

    #[test]
    fn outcome_phrases_match_outcome_type() {
        assert!(outcome_phrases(OutcomeType::ProgressIndicators)
            .contains(&"demonstrated improved independence with"));
        assert!(outcome_phrases(OutcomeType::ContinuingNeeds)
            .contains(&"still requiring cues for"));
    }

    #[test]
    fn assistance_reasons_include_default_balance_deficits() {
        let balance = reason_groups()
            .iter()
            .find(|group| group.title == "Balance")
            .unwrap();
        assert!(balance.phrases.contains(&"Impaired static balance"));
        assert_eq!(assistance_levels().len(), 8);
        assert_eq!(cueing_types().len(), 5);
    }
}
