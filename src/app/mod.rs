use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::clipboard::{Clipboard, Osc52Clipboard};
use crate::config::AppConfig;
use crate::note::compose::compose_preview;
use crate::note::Section;
use crate::storage::{self, StorageHandle};
use crate::{catalog, ui};

mod actions;
pub mod state;

pub use state::{AppState, ModalCursor, OverlayState, PaneKind};

enum Action {
    Quit,
    OpenCurrentSection,
    NextSection,
    PreviousSection,
    JumpToSection(Section),
    QuickAdd(usize),
    CopyNote,
    ClearAll,
    ToggleCategory,
    OpenSaveOverlay,
    OpenLoadOverlay,
    OpenTemplatesOverlay,
}

pub struct App {
    pub config: Arc<AppConfig>,
    pub storage: StorageHandle,
    state: AppState,
    clipboard: Box<dyn Clipboard>,
    should_quit: bool,
    tick_rate: Duration,
}

impl App {
    pub fn new(config: Arc<AppConfig>, storage: StorageHandle) -> Self {
        let state = AppState::new(&config);
        Self {
            config,
            storage,
            state,
            clipboard: Box::new(Osc52Clipboard),
            should_quit: false,
            tick_rate: Duration::from_millis(250),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();
        loop {
            terminal
                .draw(|frame| ui::draw_app(frame, &self.state))
                .context("rendering frame")?;

            if self.should_quit {
                break;
            }

            let timeout = self
                .tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_millis(0));

            if event::poll(timeout).context("polling for terminal events")? {
                match event::read().context("reading terminal event")? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(_, _) => {
                        // no-op: next draw will naturally adapt to the new size
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= self.tick_rate {
                self.on_tick();
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    fn on_tick(&mut self) {
        self.state.tick(Instant::now());
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.handle_overlay_key(key) {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => {
                    self.handle_action(Action::CopyNote);
                    return;
                }
                KeyCode::Char('x') => {
                    self.handle_action(Action::ClearAll);
                    return;
                }
                KeyCode::Char(ch @ '0'..='5') => {
                    let idx = ch as usize - '0' as usize;
                    self.handle_action(Action::JumpToSection(Section::STEP_ORDER[idx]));
                    return;
                }
                _ => {}
            }
        }

        if self.state.modal().is_some() {
            self.handle_modal_key(key);
            return;
        }

        let action = match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter => Some(Action::OpenCurrentSection),
            KeyCode::Char('n') | KeyCode::Right => Some(Action::NextSection),
            KeyCode::Char('p') | KeyCode::Left => Some(Action::PreviousSection),
            KeyCode::Char('s')
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Action::OpenSaveOverlay)
            }
            KeyCode::Char('l')
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Action::OpenLoadOverlay)
            }
            KeyCode::Char('t')
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Action::OpenTemplatesOverlay)
            }
            KeyCode::Char('c')
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Action::ToggleCategory)
            }
            KeyCode::Char(ch @ '1'..='6')
                if !key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) =>
            {
                Some(Action::QuickAdd(ch as usize - '1' as usize))
            }
            _ => None,
        };

        if let Some(action) = action {
            self.handle_action(action);
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::OpenCurrentSection => {
                let current = self.state.wizard.current();
                self.state.open_section(current);
            }
            Action::NextSection => self.state.open_next_section(),
            Action::PreviousSection => self.state.open_previous_section(),
            Action::JumpToSection(section) => self.state.open_section(section),
            Action::QuickAdd(index) => {
                if let Some((section, phrase)) = catalog::quick_add_items().get(index).copied() {
                    self.state.quick_add(section, phrase);
                }
            }
            Action::CopyNote => self.handle_copy_note(),
            Action::ClearAll => self.state.clear_all(),
            Action::ToggleCategory => self.state.toggle_category(),
            Action::OpenSaveOverlay => self.state.open_save_overlay(),
            Action::OpenLoadOverlay => self.open_load_overlay(),
            Action::OpenTemplatesOverlay => self.open_templates_overlay(),
        }
    }

    fn handle_modal_key(&mut self, key: KeyEvent) {
        // free-text measurement value pane swallows printable keys
        if self.state.pane_kind() == Some(PaneKind::MeasurementValue) {
            match key.code {
                KeyCode::Backspace => {
                    self.state.pop_value_char();
                    return;
                }
                KeyCode::Char(ch)
                    if !key.modifiers.intersects(
                        KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                    ) && (ch.is_ascii_digit() || ch == '.') =>
                {
                    self.state.push_value_char(ch);
                    return;
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => self.state.close_modal(),
            KeyCode::Enter => {
                self.state.commit_current();
            }
            KeyCode::Char(' ') => self.state.activate_current(),
            KeyCode::Char('j') | KeyCode::Down => self.state.move_modal_row(1),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_modal_row(-1),
            KeyCode::PageDown => self.state.move_modal_row(5),
            KeyCode::PageUp => self.state.move_modal_row(-5),
            KeyCode::Tab => self.state.move_modal_pane(1),
            KeyCode::BackTab => self.state.move_modal_pane(-1),
            KeyCode::Char('m') => self.state.enter_measurable_outcomes(),
            KeyCode::Char('n') => self.state.open_next_section(),
            KeyCode::Char('p') => self.state.open_previous_section(),
            _ => {}
        }
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> bool {
        let Some(overlay) = self.state.overlay() else {
            return false;
        };
        match overlay {
            OverlayState::SaveNote { .. } => {
                match key.code {
                    KeyCode::Esc => {
                        self.state.close_overlay();
                        self.state.set_status_message("Save canceled");
                    }
                    KeyCode::Enter => self.submit_save_note(),
                    KeyCode::Backspace => {
                        if let Some(OverlayState::SaveNote { name }) = self.state.overlay_mut() {
                            name.pop();
                        }
                    }
                    KeyCode::Char(ch)
                        if !key.modifiers.intersects(
                            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                        ) =>
                    {
                        if let Some(OverlayState::SaveNote { name }) = self.state.overlay_mut() {
                            if name.chars().count() < 50 {
                                name.push(ch);
                            }
                        }
                    }
                    _ => {}
                }
                true
            }
            OverlayState::LoadNote { .. } => {
                match key.code {
                    KeyCode::Esc => self.state.close_overlay(),
                    KeyCode::Enter => self.submit_load_note(),
                    KeyCode::Char('d') => self.delete_selected_note(),
                    KeyCode::Char('j') | KeyCode::Down => self.state.move_overlay_selection(1),
                    KeyCode::Char('k') | KeyCode::Up => self.state.move_overlay_selection(-1),
                    _ => {}
                }
                true
            }
            OverlayState::Templates { naming: Some(_), .. } => {
                match key.code {
                    KeyCode::Esc => {
                        if let Some(OverlayState::Templates { naming, .. }) =
                            self.state.overlay_mut()
                        {
                            *naming = None;
                        }
                    }
                    KeyCode::Enter => self.submit_save_template(),
                    KeyCode::Backspace => {
                        if let Some(OverlayState::Templates {
                            naming: Some(name), ..
                        }) = self.state.overlay_mut()
                        {
                            name.pop();
                        }
                    }
                    KeyCode::Char(ch)
                        if !key.modifiers.intersects(
                            KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                        ) =>
                    {
                        if let Some(OverlayState::Templates {
                            naming: Some(name), ..
                        }) = self.state.overlay_mut()
                        {
                            if name.chars().count() < 50 {
                                name.push(ch);
                            }
                        }
                    }
                    _ => {}
                }
                true
            }
            OverlayState::Templates { naming: None, .. } => {
                match key.code {
                    KeyCode::Esc => self.state.close_overlay(),
                    KeyCode::Enter => self.submit_load_template(),
                    KeyCode::Char('d') => self.delete_selected_template(),
                    KeyCode::Char('s') => {
                        if let Some(OverlayState::Templates { naming, .. }) =
                            self.state.overlay_mut()
                        {
                            *naming = Some(String::new());
                        }
                    }
                    KeyCode::Char('j') | KeyCode::Down => self.state.move_overlay_selection(1),
                    KeyCode::Char('k') | KeyCode::Up => self.state.move_overlay_selection(-1),
                    _ => {}
                }
                true
            }
        }
    }

    fn handle_copy_note(&mut self) {
        let preview = compose_preview(self.state.section_order(), self.state.sections());
        if preview.trim().is_empty() {
            self.state.set_status_message("Nothing to copy yet");
            return;
        }
        match self.clipboard.write_text(&preview) {
            Ok(()) => self.state.set_status_message("Note copied to clipboard"),
            Err(err) => {
                tracing::error!(?err, "clipboard write failed");
                self.state.set_status_message("Failed to copy note");
            }
        }
    }

    fn submit_save_note(&mut self) {
        let Some(OverlayState::SaveNote { name }) = self.state.overlay() else {
            return;
        };
        let raw = name.clone();
        let Some(name) = self.state.prepare_note(&raw) else {
            return;
        };
        // keep the association with a loaded note; otherwise mint a fresh id
        let id = self
            .state
            .note_id()
            .map(str::to_string)
            .unwrap_or_else(storage::generate_note_id);
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        match dispatcher.save_note(&id, &name, self.state.sections()) {
            Ok(()) => self.state.on_note_saved(id, &name),
            Err(err) => {
                tracing::error!(?err, "failed to save note");
                self.state.set_status_message("Failed to save note");
            }
        }
    }

    fn open_load_overlay(&mut self) {
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        match dispatcher.list_notes() {
            Ok(notes) => {
                if notes.is_empty() {
                    self.state.set_status_message("No saved notes yet");
                } else {
                    self.state.open_load_overlay(notes);
                }
            }
            Err(err) => {
                tracing::error!(?err, "failed to list notes");
                self.state.set_status_message("Failed to list saved notes");
            }
        }
    }

    fn open_templates_overlay(&mut self) {
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        match dispatcher.list_templates() {
            Ok(templates) => self.state.open_templates_overlay(templates),
            Err(err) => {
                tracing::error!(?err, "failed to list templates");
                self.state.set_status_message("Failed to list templates");
            }
        }
    }

    fn selected_overlay_id(&self) -> Option<String> {
        match self.state.overlay() {
            Some(OverlayState::LoadNote { selected }) => self
                .state
                .saved_notes()
                .get(*selected)
                .map(|entry| entry.id.clone()),
            Some(OverlayState::Templates { selected, .. }) => self
                .state
                .templates()
                .get(*selected)
                .map(|entry| entry.id.clone()),
            _ => None,
        }
    }

    fn submit_load_note(&mut self) {
        let Some(id) = self.selected_overlay_id() else {
            return;
        };
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        match dispatcher.fetch_note(&id) {
            Ok(Some(record)) => self.state.load_note(record),
            Ok(None) => self.state.set_status_message("Note no longer exists"),
            Err(err) => {
                tracing::error!(?err, id, "failed to load note");
                self.state.set_status_message("Failed to load note");
            }
        }
    }

    fn delete_selected_note(&mut self) {
        let Some(id) = self.selected_overlay_id() else {
            return;
        };
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        if let Err(err) = dispatcher.delete_note(&id) {
            tracing::error!(?err, id, "failed to delete note");
            self.state.set_status_message("Failed to delete note");
            return;
        }
        match dispatcher.list_notes() {
            Ok(notes) if notes.is_empty() => {
                self.state.close_overlay();
                self.state.set_status_message("Deleted the last saved note");
            }
            Ok(notes) => {
                self.state.open_load_overlay(notes);
                self.state.set_status_message("Note deleted");
            }
            Err(err) => {
                tracing::error!(?err, "failed to refresh notes after delete");
                self.state.close_overlay();
            }
        }
    }

    fn submit_load_template(&mut self) {
        let Some(id) = self.selected_overlay_id() else {
            return;
        };
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        match dispatcher.fetch_template(&id) {
            Ok(Some(record)) => self.state.load_template(record),
            Ok(None) => self.state.set_status_message("Template no longer exists"),
            Err(err) => {
                tracing::error!(?err, id, "failed to load template");
                self.state.set_status_message("Failed to load template");
            }
        }
    }

    fn submit_save_template(&mut self) {
        let Some(OverlayState::Templates {
            naming: Some(name), ..
        }) = self.state.overlay()
        else {
            return;
        };
        let raw = name.clone();
        let Some(name) = self.state.prepare_note(&raw) else {
            return;
        };
        let id = storage::generate_note_id();
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        if let Err(err) = dispatcher.save_template(&id, &name, self.state.sections()) {
            tracing::error!(?err, "failed to save template");
            self.state.set_status_message("Failed to save template");
            return;
        }
        match dispatcher.list_templates() {
            Ok(templates) => self.state.open_templates_overlay(templates),
            Err(err) => {
                tracing::error!(?err, "failed to refresh templates");
                self.state.close_overlay();
            }
        }
        self.state
            .set_status_message(format!("Saved template \"{name}\""));
    }

    fn delete_selected_template(&mut self) {
        let Some(id) = self.selected_overlay_id() else {
            return;
        };
        let dispatcher = actions::SnapshotDispatcher::new(&self.storage);
        if let Err(err) = dispatcher.delete_template(&id) {
            tracing::error!(?err, id, "failed to delete template");
            self.state.set_status_message("Failed to delete template");
            return;
        }
        match dispatcher.list_templates() {
            Ok(templates) => {
                self.state.open_templates_overlay(templates);
                self.state.set_status_message("Template deleted");
            }
            Err(err) => {
                tracing::error!(?err, "failed to refresh templates after delete");
                self.state.close_overlay();
            }
        }
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("switching to alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal backend")?;
    terminal.hide_cursor().context("hiding cursor")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    terminal.show_cursor().ok();
    disable_raw_mode().context("disabling raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("restoring screen state")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::FakeClipboard;
    use crate::storage::StorageHandle;
    use std::rc::Rc;

    struct SharedClipboard(Rc<FakeClipboard>);

    impl Clipboard for SharedClipboard {
        fn write_text(&self, text: &str) -> Result<()> {
            self.0.write_text(text)
        }
    }

    fn test_app() -> (App, Rc<FakeClipboard>) {
        let fake = Rc::new(FakeClipboard::default());
        let mut app = App::new(
            Arc::new(AppConfig::default()),
            StorageHandle::disabled(),
        );
        app.clipboard = Box::new(SharedClipboard(Rc::clone(&fake)));
        (app, fake)
    }

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn ctrl_c_copies_composed_note() {
        let (mut app, clipboard) = test_app();
        app.state.quick_add(Section::Intervention, "Gait training");
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(
            clipboard.copied.borrow().as_slice(),
            ["Gait training".to_string()]
        );
        assert!(!app.should_quit);
    }

    #[test]
    fn copy_with_empty_note_does_not_touch_clipboard() {
        let (mut app, clipboard) = test_app();
        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(clipboard.copied.borrow().is_empty());
        assert_eq!(app.state.status_message(), Some("Nothing to copy yet"));
    }

    #[test]
    fn ctrl_x_clears_everything() {
        let (mut app, _) = test_app();
        app.state.quick_add(Section::Plan, "Continue with current interventions");
        press(&mut app, KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(app.state.sections().is_empty());
    }

    #[test]
    fn ctrl_digits_jump_to_sections_in_step_order() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Char('4'), KeyModifiers::CONTROL);
        assert_eq!(app.state.modal(), Some(Section::Outcomes));
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('0'), KeyModifiers::CONTROL);
        assert_eq!(app.state.modal(), Some(Section::PurposeOfTreatment));
    }

    #[test]
    fn digit_keys_quick_add_outside_modals() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(
            app.state.sections().intervention,
            vec!["Gait training".to_string()]
        );
    }

    #[test]
    fn modal_keys_toggle_and_commit() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.state.modal(), Some(Section::PurposeOfTreatment));

        press(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.state.modal().is_none());
        assert_eq!(app.state.sections().purpose_of_treatment.len(), 1);
    }

    #[test]
    fn q_quits_only_outside_modals() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn save_overlay_types_name_and_requires_content() {
        let (mut app, _) = test_app();
        press(&mut app, KeyCode::Char('s'), KeyModifiers::NONE);
        assert!(matches!(
            app.state.overlay(),
            Some(OverlayState::SaveNote { .. })
        ));
        for ch in "Session".chars() {
            press(&mut app, KeyCode::Char(ch), KeyModifiers::NONE);
        }
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        // empty note: save refused, overlay stays open
        assert!(app.state.overlay().is_some());
        assert!(app.state.section_error().is_some());
    }
}
