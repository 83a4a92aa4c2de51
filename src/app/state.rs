use std::time::{Duration, Instant};

use crate::catalog::{self, NoteCategory};
use crate::config::{AppConfig, ThemeName};
use crate::note::validate::{
    self, validate_assistance, validate_measurable, validate_note_name, validate_outcome,
    validate_phrase_commit, validate_sections,
};
use crate::note::{Drafts, OutcomeType, Section, SelectedSections, ValidationError};
use crate::storage::{NoteIndexEntry, NoteRecord, TemplateRecord};
use crate::wizard::WizardState;

/// Which list inside the open modal currently has focus. The variant decides
/// what the phrase list shows and what Space / Enter does to the drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneKind {
    Phrases(Section),
    AssistanceLevel,
    AssistanceReasons,
    CueingTypes,
    CueingLevel,
    CueingReasons,
    OutcomeType,
    OutcomePhrase,
    OutcomeComponent,
    OutcomePerformance,
    MeasurableOutcomes,
    MeasurementType,
    MeasurementUnit,
    MeasurementValue,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalCursor {
    pub pane: usize,
    pub row: usize,
}

/// A validation message with its display deadline. Expired errors are swept
/// on the next tick.
#[derive(Debug, Clone)]
pub struct TransientError {
    pub message: String,
    raised_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    SaveNote { name: String },
    LoadNote { selected: usize },
    Templates { selected: usize, naming: Option<String> },
}

pub struct AppState {
    sections: SelectedSections,
    section_order: Vec<Section>,
    pub drafts: Drafts,
    pub wizard: WizardState,
    category: NoteCategory,
    theme: ThemeName,
    modal: Option<Section>,
    pub modal_cursor: ModalCursor,
    overlay: Option<OverlayState>,
    note_id: Option<String>,
    saved_notes: Vec<NoteIndexEntry>,
    templates: Vec<NoteIndexEntry>,
    section_error: Option<TransientError>,
    global_error: Option<TransientError>,
    status_message: Option<String>,
    error_ttl: Duration,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            sections: SelectedSections::default(),
            section_order: Vec::new(),
            drafts: Drafts::default(),
            wizard: WizardState::new(),
            category: config.default_category,
            theme: config.theme,
            modal: None,
            modal_cursor: ModalCursor::default(),
            overlay: None,
            note_id: None,
            saved_notes: Vec::new(),
            templates: Vec::new(),
            section_error: None,
            global_error: None,
            status_message: None,
            error_ttl: Duration::from_secs(config.error_display_secs),
        }
    }

    pub fn sections(&self) -> &SelectedSections {
        &self.sections
    }

    pub fn section_order(&self) -> &[Section] {
        &self.section_order
    }

    pub fn category(&self) -> NoteCategory {
        self.category
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    pub fn modal(&self) -> Option<Section> {
        self.modal
    }

    pub fn overlay(&self) -> Option<&OverlayState> {
        self.overlay.as_ref()
    }

    pub fn overlay_mut(&mut self) -> Option<&mut OverlayState> {
        self.overlay.as_mut()
    }

    pub fn note_id(&self) -> Option<&str> {
        self.note_id.as_deref()
    }

    pub fn saved_notes(&self) -> &[NoteIndexEntry] {
        &self.saved_notes
    }

    pub fn templates(&self) -> &[NoteIndexEntry] {
        &self.templates
    }

    pub fn section_error(&self) -> Option<&str> {
        self.section_error.as_ref().map(|err| err.message.as_str())
    }

    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_ref().map(|err| err.message.as_str())
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_message = Some(message.into());
    }

    pub fn toggle_category(&mut self) {
        self.category = self.category.toggled();
        self.modal_cursor = ModalCursor::default();
        self.set_status_message(format!("Category: {}", self.category.label()));
    }

    /// Sweeps expired transient errors. Called from the event-loop tick.
    pub fn tick(&mut self, now: Instant) {
        let ttl = self.error_ttl;
        let expired =
            |err: &Option<TransientError>| matches!(err, Some(e) if now.duration_since(e.raised_at) >= ttl);
        if expired(&self.section_error) {
            self.section_error = None;
        }
        if expired(&self.global_error) {
            self.global_error = None;
        }
    }

    fn raise_error(&mut self, err: ValidationError) {
        let transient = TransientError {
            message: err.to_string(),
            raised_at: Instant::now(),
        };
        if err.is_global() {
            self.global_error = Some(transient);
        } else {
            self.section_error = Some(transient);
        }
    }

    // --- guided flow -------------------------------------------------------

    /// Opens a section's modal and records it in the preview order on first
    /// touch.
    pub fn open_section(&mut self, section: Section) {
        self.wizard.jump_to(section);
        self.modal = Some(section);
        self.modal_cursor = ModalCursor::default();
        self.section_error = None;
        self.touch_section(section);
    }

    pub fn close_modal(&mut self) {
        if self.wizard.exit_sub_flow() {
            // leaving measurable outcomes lands back on the outcomes modal
            self.modal_cursor = ModalCursor::default();
            return;
        }
        self.modal = None;
        self.section_error = None;
    }

    pub fn open_next_section(&mut self) {
        if self.wizard.next() {
            self.open_section(self.wizard.current());
        }
    }

    pub fn open_previous_section(&mut self) {
        if self.wizard.previous() {
            self.open_section(self.wizard.current());
        }
    }

    pub fn enter_measurable_outcomes(&mut self) {
        if self.modal == Some(Section::Outcomes) && self.wizard.enter_measurable_outcomes() {
            self.modal_cursor = ModalCursor::default();
            self.section_error = None;
        }
    }

    fn touch_section(&mut self, section: Section) {
        if !self.section_order.contains(&section) {
            self.section_order.push(section);
        }
    }

    // --- modal panes -------------------------------------------------------

    pub fn pane_count(&self) -> usize {
        let Some(section) = self.modal else { return 0 };
        if self.wizard.in_measurable_outcomes() {
            return 4;
        }
        match section {
            Section::Assistance => 5,
            Section::Outcomes => 4,
            _ => 1,
        }
    }

    pub fn pane_kind(&self) -> Option<PaneKind> {
        self.pane_kind_at(self.modal_cursor.pane)
    }

    /// Pane role for an arbitrary pane index; the renderer walks all panes,
    /// not just the focused one.
    pub fn pane_kind_at(&self, pane: usize) -> Option<PaneKind> {
        let section = self.modal?;
        if self.wizard.in_measurable_outcomes() {
            return Some(match pane {
                0 => PaneKind::MeasurableOutcomes,
                1 => PaneKind::MeasurementType,
                2 => PaneKind::MeasurementUnit,
                _ => PaneKind::MeasurementValue,
            });
        }
        Some(match section {
            Section::Assistance => match pane {
                0 => PaneKind::AssistanceLevel,
                1 => PaneKind::AssistanceReasons,
                2 => PaneKind::CueingTypes,
                3 => PaneKind::CueingLevel,
                _ => PaneKind::CueingReasons,
            },
            Section::Outcomes => match pane {
                0 => PaneKind::OutcomeType,
                1 => PaneKind::OutcomePhrase,
                2 => PaneKind::OutcomeComponent,
                _ => PaneKind::OutcomePerformance,
            },
            other => PaneKind::Phrases(other),
        })
    }

    /// Selectable rows for a pane. Empty for the free-text measurement value.
    pub fn pane_items(&self, kind: PaneKind) -> Vec<&'static str> {
        match kind {
            PaneKind::Phrases(section) => {
                let groups = match section {
                    Section::PurposeOfTreatment => catalog::purpose_groups(self.category),
                    Section::Intervention => catalog::intervention_groups(self.category),
                    Section::Observations => catalog::observation_groups(),
                    Section::Plan => catalog::plan_groups(self.category),
                    _ => &[],
                };
                groups
                    .iter()
                    .flat_map(|group| group.phrases.iter().copied())
                    .collect()
            }
            PaneKind::AssistanceLevel => catalog::assistance_levels().to_vec(),
            PaneKind::AssistanceReasons => catalog::reason_groups()
                .iter()
                .flat_map(|group| group.phrases.iter().copied())
                .collect(),
            PaneKind::CueingTypes => catalog::cueing_types().to_vec(),
            PaneKind::CueingLevel => catalog::cueing_levels().to_vec(),
            PaneKind::CueingReasons => catalog::cueing_reason_groups()
                .iter()
                .flat_map(|group| group.phrases.iter().copied())
                .collect(),
            PaneKind::OutcomeType => vec![
                OutcomeType::ProgressIndicators.label(),
                OutcomeType::ContinuingNeeds.label(),
            ],
            PaneKind::OutcomePhrase => {
                catalog::outcome_phrases(self.drafts.outcomes.outcome_type).to_vec()
            }
            PaneKind::OutcomeComponent => catalog::performance_components()
                .iter()
                .map(|group| group.title)
                .collect(),
            PaneKind::OutcomePerformance => {
                catalog::performances_for_component(&self.drafts.outcomes.component)
                    .phrases()
                    .to_vec()
            }
            PaneKind::MeasurableOutcomes => catalog::outcome_category_groups()
                .iter()
                .flat_map(|group| group.phrases.iter().copied())
                .collect(),
            PaneKind::MeasurementType => catalog::measurement_types().collect(),
            PaneKind::MeasurementUnit => {
                catalog::units_for_measurement(&self.drafts.measurable.measurement_type)
                    .phrases()
                    .to_vec()
            }
            PaneKind::MeasurementValue => Vec::new(),
        }
    }

    pub fn is_item_selected(&self, kind: PaneKind, item: &str) -> bool {
        match kind {
            PaneKind::Phrases(section) => self
                .drafts
                .phrase_list(section)
                .map(|list| list.iter().any(|existing| existing == item))
                .unwrap_or(false),
            PaneKind::AssistanceLevel => self.drafts.assistance.assistance_level == item,
            PaneKind::AssistanceReasons => self
                .drafts
                .assistance
                .selected_reasons
                .iter()
                .any(|existing| existing == item),
            PaneKind::CueingTypes => self
                .drafts
                .assistance
                .cueing_assistance
                .iter()
                .any(|existing| existing == item),
            PaneKind::CueingLevel => self.drafts.assistance.cueing_level == item,
            PaneKind::CueingReasons => self.drafts.assistance.cueing_reason == item,
            PaneKind::OutcomeType => self.drafts.outcomes.outcome_type.label() == item,
            PaneKind::OutcomePhrase => self.drafts.outcomes.outcome == item,
            PaneKind::OutcomeComponent => self.drafts.outcomes.component == item,
            PaneKind::OutcomePerformance => self.drafts.outcomes.performance == item,
            PaneKind::MeasurableOutcomes => self
                .drafts
                .measurable
                .selected_outcomes
                .iter()
                .any(|existing| existing == item),
            PaneKind::MeasurementType => self.drafts.measurable.measurement_type == item,
            PaneKind::MeasurementUnit => self.drafts.measurable.measurement_unit == item,
            PaneKind::MeasurementValue => false,
        }
    }

    pub fn move_modal_row(&mut self, delta: isize) {
        let Some(kind) = self.pane_kind() else { return };
        let len = self.pane_items(kind).len();
        if len == 0 {
            return;
        }
        let current = self.modal_cursor.row.min(len - 1) as isize;
        let next = (current + delta).clamp(0, len as isize - 1);
        self.modal_cursor.row = next as usize;
    }

    pub fn move_modal_pane(&mut self, delta: isize) {
        let panes = self.pane_count();
        if panes == 0 {
            return;
        }
        let current = self.modal_cursor.pane.min(panes - 1) as isize;
        let next = (current + delta).rem_euclid(panes as isize);
        self.modal_cursor.pane = next as usize;
        self.modal_cursor.row = 0;
    }

    /// Applies the focused row to the drafts: toggles multi-select panes,
    /// assigns single-select ones. Cap violations surface as section errors.
    pub fn activate_current(&mut self) {
        let Some(kind) = self.pane_kind() else { return };
        let items = self.pane_items(kind);
        let Some(item) = items.get(self.modal_cursor.row).copied() else {
            return;
        };
        let result = match kind {
            PaneKind::Phrases(section) => self.drafts.toggle_phrase(section, item),
            PaneKind::AssistanceLevel => {
                self.drafts.assistance.assistance_level = item.to_string();
                Ok(())
            }
            PaneKind::AssistanceReasons => self.drafts.assistance.toggle_reason(item),
            PaneKind::CueingTypes => self.drafts.assistance.toggle_cueing_type(item),
            PaneKind::CueingLevel => {
                self.drafts.assistance.cueing_level = item.to_string();
                Ok(())
            }
            PaneKind::CueingReasons => {
                self.drafts.assistance.cueing_reason = item.to_string();
                Ok(())
            }
            PaneKind::OutcomeType => {
                let outcome_type = if item == OutcomeType::ContinuingNeeds.label() {
                    OutcomeType::ContinuingNeeds
                } else {
                    OutcomeType::ProgressIndicators
                };
                if outcome_type != self.drafts.outcomes.outcome_type {
                    self.drafts.outcomes.outcome_type = outcome_type;
                    self.drafts.outcomes.outcome.clear();
                }
                Ok(())
            }
            PaneKind::OutcomePhrase => {
                self.drafts.outcomes.outcome = item.to_string();
                Ok(())
            }
            PaneKind::OutcomeComponent => {
                if self.drafts.outcomes.component != item {
                    self.drafts.outcomes.component = item.to_string();
                    self.drafts.outcomes.performance.clear();
                }
                Ok(())
            }
            PaneKind::OutcomePerformance => {
                self.drafts.outcomes.performance = item.to_string();
                Ok(())
            }
            PaneKind::MeasurableOutcomes => self.drafts.measurable.toggle_outcome(item),
            PaneKind::MeasurementType => {
                let measurable = &mut self.drafts.measurable;
                measurable.measurement_type = item.to_string();
                let units = catalog::units_for_measurement(item);
                if !units.phrases().contains(&measurable.measurement_unit.as_str()) {
                    measurable.measurement_unit.clear();
                }
                Ok(())
            }
            PaneKind::MeasurementUnit => {
                self.drafts.measurable.measurement_unit = item.to_string();
                Ok(())
            }
            PaneKind::MeasurementValue => Ok(()),
        };
        match result {
            Ok(()) => self.section_error = None,
            Err(err) => self.raise_error(err),
        }
    }

    pub fn push_value_char(&mut self, ch: char) {
        if self.pane_kind() == Some(PaneKind::MeasurementValue) {
            self.drafts.measurable.measurement_value.push(ch);
        }
    }

    pub fn pop_value_char(&mut self) {
        if self.pane_kind() == Some(PaneKind::MeasurementValue) {
            self.drafts.measurable.measurement_value.pop();
        }
    }

    // --- commits -----------------------------------------------------------

    /// Validates and commits the open modal's drafts into the note. All
    /// checks pass or nothing changes. Returns true when the note changed.
    pub fn commit_current(&mut self) -> bool {
        let Some(section) = self.modal else {
            return false;
        };
        let result = if self.wizard.in_measurable_outcomes() {
            self.commit_measurable()
        } else {
            match section {
                Section::Assistance => self.commit_assistance(),
                Section::Outcomes => self.commit_outcome(),
                other => self.commit_phrases(other),
            }
        };
        match result {
            Ok(status) => {
                self.section_error = None;
                self.global_error = None;
                if self.wizard.in_measurable_outcomes() {
                    self.wizard.exit_sub_flow();
                    self.modal_cursor = ModalCursor::default();
                } else {
                    self.modal = None;
                }
                self.set_status_message(status);
                true
            }
            Err(err) => {
                self.raise_error(err);
                false
            }
        }
    }

    fn commit_phrases(&mut self, section: Section) -> Result<String, ValidationError> {
        let draft = self
            .drafts
            .phrase_list(section)
            .cloned()
            .unwrap_or_default();
        validate_phrase_commit(section, &draft)?;
        let mut candidate = self.sections.clone();
        let count = draft.len();
        if section == Section::PurposeOfTreatment {
            *candidate.get_mut(section) = draft;
        } else {
            candidate.get_mut(section).extend(draft);
        }
        validate_sections(&candidate)?;
        self.sections = candidate;
        if section != Section::PurposeOfTreatment {
            if let Section::Intervention = section {
                self.drafts.intervention.clear();
            } else if let Section::Observations = section {
                self.drafts.observations.clear();
            } else if let Section::Plan = section {
                self.drafts.plan.clear();
            }
        }
        Ok(format!("{}: {} selection(s) applied", section.title(), count))
    }

    fn commit_assistance(&mut self) -> Result<String, ValidationError> {
        let fragment = validate_assistance(&self.drafts.assistance)?;
        let mut candidate = self.sections.clone();
        candidate.assistance.push(fragment);
        validate_sections(&candidate)?;
        self.sections = candidate;
        Ok("Assistance statement added".to_string())
    }

    fn commit_outcome(&mut self) -> Result<String, ValidationError> {
        let fragment = validate_outcome(&self.drafts.outcomes)?;
        let mut candidate = self.sections.clone();
        candidate.outcomes.push(fragment);
        validate_sections(&candidate)?;
        self.sections = candidate;
        Ok("Outcome added".to_string())
    }

    fn commit_measurable(&mut self) -> Result<String, ValidationError> {
        let rows = validate_measurable(&self.drafts.measurable)?;
        let mut candidate = self.sections.clone();
        let count = rows.len();
        candidate.outcomes.extend(rows);
        validate_sections(&candidate)?;
        self.sections = candidate;
        self.drafts.measurable = Default::default();
        Ok(format!("{count} measurable outcome(s) added"))
    }

    /// One-keystroke append outside the guided flow. Runs through the same
    /// whole-note validation as modal commits.
    pub fn quick_add(&mut self, section: Section, phrase: &str) -> bool {
        let mut candidate = self.sections.clone();
        candidate.get_mut(section).push(phrase.to_string());
        if let Err(err) = validate_sections(&candidate) {
            self.raise_error(err);
            return false;
        }
        self.sections = candidate;
        self.global_error = None;
        self.touch_section(section);
        self.set_status_message(format!("Added \"{phrase}\" to {}", section.title()));
        true
    }

    /// Resets the whole builder, including the saved-note association. The
    /// next save creates a new snapshot.
    pub fn clear_all(&mut self) {
        self.sections = SelectedSections::default();
        self.section_order.clear();
        self.drafts.reset();
        self.wizard = WizardState::new();
        self.modal = None;
        self.modal_cursor = ModalCursor::default();
        self.note_id = None;
        self.section_error = None;
        self.global_error = None;
        self.set_status_message("Cleared all selections");
    }

    // --- overlays ----------------------------------------------------------

    pub fn open_save_overlay(&mut self) {
        let name = self
            .saved_note_name()
            .map(str::to_string)
            .unwrap_or_default();
        self.overlay = Some(OverlayState::SaveNote { name });
    }

    pub fn open_load_overlay(&mut self, notes: Vec<NoteIndexEntry>) {
        self.saved_notes = notes;
        self.overlay = Some(OverlayState::LoadNote { selected: 0 });
    }

    pub fn open_templates_overlay(&mut self, templates: Vec<NoteIndexEntry>) {
        self.templates = templates;
        self.overlay = Some(OverlayState::Templates {
            selected: 0,
            naming: None,
        });
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    fn saved_note_name(&self) -> Option<&str> {
        let id = self.note_id.as_deref()?;
        self.saved_notes
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| entry.name.as_str())
    }

    /// Validates the pending save. Returns the sanitized snapshot name; the
    /// caller supplies the id policy and performs the write.
    pub fn prepare_note(&mut self, raw_name: &str) -> Option<String> {
        let name = validate::sanitize_name(raw_name);
        if let Err(err) = validate_note_name(&name) {
            self.raise_error(err);
            return None;
        }
        if self.sections.is_empty() {
            self.raise_error(ValidationError::InvalidContent);
            return None;
        }
        if let Err(err) = validate::encode_sections(&self.sections) {
            self.raise_error(err);
            return None;
        }
        Some(name)
    }

    pub fn on_note_saved(&mut self, id: String, name: &str) {
        self.note_id = Some(id);
        self.overlay = None;
        self.set_status_message(format!("Saved \"{name}\""));
    }

    /// Replaces the working note with a saved snapshot. Preview order is
    /// rebuilt as step order filtered to non-empty sections.
    pub fn load_note(&mut self, record: NoteRecord) {
        self.section_order = record.sections.completed_sections();
        self.sections = record.sections;
        self.note_id = Some(record.id);
        self.drafts.reset();
        self.wizard = WizardState::new();
        self.modal = None;
        self.overlay = None;
        self.section_error = None;
        self.global_error = None;
        self.set_status_message(format!("Loaded \"{}\"", record.name));
    }

    /// Applies a template: contents load like a note, but the result is a
    /// fresh unsaved document with every section slot in the preview order.
    pub fn load_template(&mut self, record: TemplateRecord) {
        self.sections = record.sections;
        self.section_order = Section::STEP_ORDER.to_vec();
        self.note_id = None;
        self.drafts.reset();
        self.wizard = WizardState::new();
        self.modal = None;
        self.overlay = None;
        self.set_status_message(format!("Applied template \"{}\"", record.name));
    }

    pub fn move_overlay_selection(&mut self, delta: isize) {
        let (selected, len) = match &mut self.overlay {
            Some(OverlayState::LoadNote { selected }) => (selected, self.saved_notes.len()),
            Some(OverlayState::Templates { selected, .. }) => (selected, self.templates.len()),
            _ => return,
        };
        if len == 0 {
            return;
        }
        let next = ((*selected).min(len - 1) as isize + delta).clamp(0, len as isize - 1);
        *selected = next as usize;
    }
}
