use super::{Section, SelectedSections};

/// Literal marker that splits the rendered preview into the session body and
/// the plan block.
pub const PLAN_SENTINEL: &str = "Plan for next session";

/// Renders the full preview text. Each section's phrases are joined with a
/// single space, then the per-section strings are joined with a single space,
/// in the order sections were first touched. No trimming or punctuation is
/// inserted.
pub fn compose_preview(order: &[Section], sections: &SelectedSections) -> String {
    order
        .iter()
        .map(|section| sections.get(*section).join(" "))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits a preview at the first occurrence of [`PLAN_SENTINEL`]. The leading
/// block is trimmed; the remainder (text after the sentinel) is returned
/// untouched so the renderer can re-attach it under a plan heading.
pub fn split_at_plan(preview: &str) -> (String, Option<String>) {
    match preview.split_once(PLAN_SENTINEL) {
        Some((head, tail)) => (head.trim().to_string(), Some(tail.to_string())),
        None => (preview.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sections() -> SelectedSections {
        let mut sections = SelectedSections::default();
        sections
            .purpose_of_treatment
            .push("Improve functional mobility".into());
        sections.intervention.push("Gait training".into());
        sections
            .assistance
            .push("Patient required minimal assist due to impaired static balance".into());
        sections
    }

    #[test]
    fn preview_joins_sections_in_touch_order() {
        let sections = sample_sections();
        let order = vec![Section::Intervention, Section::PurposeOfTreatment];
        assert_eq!(
            compose_preview(&order, &sections),
            "Gait training Improve functional mobility"
        );
    }

    #[test]
    fn preview_is_deterministic() {
        let sections = sample_sections();
        let order = vec![
            Section::PurposeOfTreatment,
            Section::Intervention,
            Section::Assistance,
        ];
        let first = compose_preview(&order, &sections);
        let second = compose_preview(&order, &sections);
        assert_eq!(first, second);
        assert_eq!(
            first,
            "Improve functional mobility Gait training \
             Patient required minimal assist due to impaired static balance"
        );
    }

    #[test]
    fn preview_keeps_empty_section_join_artifacts() {
        // A touched-but-emptied section contributes an empty string, which
        // the join renders as a doubled space. The behavior is intentional.
        let sections = sample_sections();
        let order = vec![
            Section::Intervention,
            Section::Observations,
            Section::PurposeOfTreatment,
        ];
        assert_eq!(
            compose_preview(&order, &sections),
            "Gait training  Improve functional mobility"
        );
    }

    #[test]
    fn split_trims_leading_block_and_preserves_tail() {
        let preview = "  Patient tolerated treatment well. Plan for next session: progress gait distance";
        let (head, tail) = split_at_plan(preview);
        assert_eq!(head, "Patient tolerated treatment well.");
        assert_eq!(tail.as_deref(), Some(": progress gait distance"));
    }

    #[test]
    fn split_without_sentinel_returns_whole_preview() {
        let (head, tail) = split_at_plan("  Gait training performed  ");
        assert_eq!(head, "Gait training performed");
        assert_eq!(tail, None);
    }

    #[test]
    fn split_uses_first_sentinel_occurrence() {
        let preview = "a Plan for next session b Plan for next session c";
        let (head, tail) = split_at_plan(preview);
        assert_eq!(head, "a");
        assert_eq!(tail.as_deref(), Some(" b Plan for next session c"));
    }
}
