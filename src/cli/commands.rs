use std::fmt::Write as _;
use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand};

use crate::app::App;
use crate::note::compose::compose_preview;
use crate::storage::{NoteIndexEntry, NoteRecord, StorageHandle};

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Note identifier (see `therascribe list`)
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    /// Note identifier (see `therascribe list`)
    pub id: String,
}

#[derive(Args, Debug, Clone)]
pub struct DeleteArgs {
    /// Note identifier
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateArgs {
    #[command(subcommand)]
    pub command: TemplateCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplateCommand {
    /// List saved templates
    List,
    /// Delete a template
    Delete(TemplateDeleteArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TemplateDeleteArgs {
    /// Template identifier
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}

pub fn run_tui(app: &mut App) -> Result<()> {
    app.run()
}

pub fn list_notes(storage: &StorageHandle) -> Result<()> {
    let entries = storage.list_notes().context("listing saved notes")?;
    print!("{}", format_note_index(&entries, "No saved notes."));
    Ok(())
}

pub fn show_note(storage: &StorageHandle, args: ShowArgs) -> Result<()> {
    let record = fetch_note_or_bail(storage, &args.id)?;
    print!("{}", render_note_sections(&record));
    Ok(())
}

pub fn export_note(storage: &StorageHandle, args: ExportArgs) -> Result<()> {
    let record = fetch_note_or_bail(storage, &args.id)?;
    println!("{}", render_note_text(&record));
    Ok(())
}

pub fn delete_note(storage: &StorageHandle, args: DeleteArgs) -> Result<()> {
    let record = fetch_note_or_bail(storage, &args.id)?;
    if !args.yes && !confirm(&format!("Delete note \"{}\"?", record.name))? {
        println!("Canceled.");
        return Ok(());
    }
    storage
        .delete_note(&args.id)
        .with_context(|| format!("deleting note {}", args.id))?;
    println!("Deleted \"{}\"", record.name);
    Ok(())
}

pub fn handle_template_command(storage: &StorageHandle, args: TemplateArgs) -> Result<()> {
    match args.command {
        TemplateCommand::List => {
            let entries = storage.list_templates().context("listing templates")?;
            print!("{}", format_note_index(&entries, "No templates."));
            Ok(())
        }
        TemplateCommand::Delete(args) => delete_template(storage, args),
    }
}

fn delete_template(storage: &StorageHandle, args: TemplateDeleteArgs) -> Result<()> {
    let Some(record) = storage
        .fetch_template(&args.id)
        .with_context(|| format!("fetching template {}", args.id))?
    else {
        bail!("template {} not found", args.id);
    };
    if !args.yes && !confirm(&format!("Delete template \"{}\"?", record.name))? {
        println!("Canceled.");
        return Ok(());
    }
    storage
        .delete_template(&args.id)
        .with_context(|| format!("deleting template {}", args.id))?;
    println!("Deleted template \"{}\"", record.name);
    Ok(())
}

fn fetch_note_or_bail(storage: &StorageHandle, id: &str) -> Result<NoteRecord> {
    let Some(record) = storage
        .fetch_note(id)
        .with_context(|| format!("fetching note {id}"))?
    else {
        bail!("note {id} not found");
    };
    Ok(record)
}

fn confirm(question: &str) -> Result<bool> {
    if !atty::is(atty::Stream::Stdin) {
        bail!("stdin is not a terminal; pass --yes to delete non-interactively");
    }
    let mut stdout = io::stdout();
    write!(stdout, "{question} [y/N] ").context("writing prompt")?;
    stdout.flush().context("flushing prompt")?;
    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .context("reading confirmation")?;
    Ok(matches!(input.trim(), "y" | "Y" | "yes"))
}

fn format_note_index(entries: &[NoteIndexEntry], empty_message: &str) -> String {
    if entries.is_empty() {
        return format!("{empty_message}\n");
    }
    let mut out = String::new();
    for entry in entries {
        let _ = writeln!(
            &mut out,
            "{}  {}  (updated {})",
            entry.id, entry.name, entry.updated_at
        );
    }
    out
}

fn render_note_sections(record: &NoteRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(&mut out, "{} (saved {})", record.name, record.updated_at);
    for section in record.sections.completed_sections() {
        out.push('\n');
        let _ = writeln!(&mut out, "{}:", section.title());
        for phrase in record.sections.get(section) {
            let _ = writeln!(&mut out, "- {phrase}");
        }
    }
    out
}

/// The same narrative text the TUI copies to the clipboard, rebuilt in
/// step order since a saved snapshot carries no touch order.
fn render_note_text(record: &NoteRecord) -> String {
    let order = record.sections.completed_sections();
    compose_preview(&order, &record.sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigPaths, StorageOptions};
    use crate::note::SelectedSections;
    use crate::storage;
    use tempfile::TempDir;

    type TestResult<T = ()> = Result<T>;

    fn setup_storage() -> TestResult<(TempDir, StorageHandle)> {
        let temp = TempDir::new().context("creating temp dir")?;
        let root = temp.path();
        let paths = ConfigPaths {
            config_dir: root.join("config"),
            config_file: root.join("config/config.toml"),
            data_dir: root.join("data"),
            database_path: root.join("data/therascribe.db"),
            log_dir: root.join("logs"),
        };
        let mut storage_opts = StorageOptions::default();
        storage_opts.database_path = paths.database_path.clone();

        let handle = storage::init(&paths, &storage_opts)?;
        Ok((temp, handle))
    }

    fn sample_sections() -> SelectedSections {
        let mut sections = SelectedSections::default();
        sections
            .purpose_of_treatment
            .push("Improve functional mobility".into());
        sections.intervention.push("Gait training".into());
        sections
            .plan
            .push("Continue with current interventions".into());
        sections
    }

    #[test]
    fn list_formats_saved_notes_with_ids() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        storage.save_note("100", "Morning session", &sample_sections())?;

        let entries = storage.list_notes()?;
        let output = format_note_index(&entries, "No saved notes.");
        assert!(output.contains("100"));
        assert!(output.contains("Morning session"));
        Ok(())
    }

    #[test]
    fn list_reports_empty_store() {
        let output = format_note_index(&[], "No saved notes.");
        assert_eq!(output, "No saved notes.\n");
    }

    #[test]
    fn show_renders_sections_in_step_order() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        storage.save_note("100", "Morning session", &sample_sections())?;

        let record = fetch_note_or_bail(&storage, "100")?;
        let output = render_note_sections(&record);
        assert!(output.starts_with("Morning session"));
        assert!(output.contains("Purpose of Treatment:\n- Improve functional mobility"));
        let purpose_at = output.find("Purpose of Treatment").unwrap();
        let plan_at = output.find("Plan for Next Session").unwrap();
        assert!(purpose_at < plan_at);
        Ok(())
    }

    #[test]
    fn export_composes_narrative_text() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        storage.save_note("100", "Morning session", &sample_sections())?;

        let record = fetch_note_or_bail(&storage, "100")?;
        assert_eq!(
            render_note_text(&record),
            "Improve functional mobility Gait training Continue with current interventions"
        );
        Ok(())
    }

    #[test]
    fn delete_with_yes_removes_note() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        storage.save_note("100", "Morning session", &sample_sections())?;

        delete_note(
            &storage,
            DeleteArgs {
                id: "100".into(),
                yes: true,
            },
        )?;
        assert!(storage.fetch_note("100")?.is_none());
        Ok(())
    }

    #[test]
    fn missing_note_is_an_error() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        let err = fetch_note_or_bail(&storage, "9000").unwrap_err();
        assert!(err.to_string().contains("not found"));
        Ok(())
    }

    #[test]
    fn template_delete_with_yes_removes_template() -> TestResult {
        let (_temp, storage) = setup_storage()?;
        storage.save_template("tpl-1", "Mobility", &sample_sections())?;

        delete_template(
            &storage,
            TemplateDeleteArgs {
                id: "tpl-1".into(),
                yes: true,
            },
        )?;
        assert!(storage.fetch_template("tpl-1")?.is_none());
        Ok(())
    }
}
