use crate::note::Section;

/// Sub-flows reachable from a step. Only Outcomes has one, and nesting is a
/// single level deep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubFlow {
    MeasurableOutcomes,
}

/// Tracks the clinician's position in the fixed guided sequence. Completion
/// is never stored here; it is derived from the committed sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    current: Section,
    sub_flow: Option<SubFlow>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            current: Section::PurposeOfTreatment,
            sub_flow: None,
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn sub_flow(&self) -> Option<SubFlow> {
        self.sub_flow
    }

    pub fn in_measurable_outcomes(&self) -> bool {
        self.sub_flow == Some(SubFlow::MeasurableOutcomes)
    }

    /// Advances one step; a no-op at the last step.
    pub fn next(&mut self) -> bool {
        match self.current.next() {
            Some(section) => {
                self.jump_to(section);
                true
            }
            None => false,
        }
    }

    /// Steps back; a no-op at the first step.
    pub fn previous(&mut self) -> bool {
        match self.current.previous() {
            Some(section) => {
                self.jump_to(section);
                true
            }
            None => false,
        }
    }

    /// Direct jump to any step. Leaving a step abandons its sub-flow.
    pub fn jump_to(&mut self, section: Section) {
        self.current = section;
        self.sub_flow = None;
    }

    /// Enters the measurable-outcomes sub-flow. Only valid from Outcomes and
    /// a no-op when already inside.
    pub fn enter_measurable_outcomes(&mut self) -> bool {
        if self.current != Section::Outcomes || self.sub_flow.is_some() {
            return false;
        }
        self.sub_flow = Some(SubFlow::MeasurableOutcomes);
        true
    }

    /// Leaves the sub-flow and lands back on Outcomes.
    pub fn exit_sub_flow(&mut self) -> bool {
        self.sub_flow.take().is_some()
    }
}
