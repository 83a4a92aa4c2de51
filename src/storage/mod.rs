//! SQLite-backed snapshot store for saved notes and templates.
//!
//! Section payloads are stored as a JSON column rather than normalized rows;
//! a snapshot is always written and read as a whole. The handle can also be
//! constructed in a disabled mode where every operation is a silent no-op, so
//! the rest of the app never branches on persistence being available.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use rusqlite::config::DbConfig;
use rusqlite::{params, Connection, OptionalExtension};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::config::{ConfigPaths, StorageOptions};
use crate::note::validate::{decode_sections, encode_sections};
use crate::note::SelectedSections;

mod schema;

/// A saved note snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRecord {
    pub id: String,
    pub name: String,
    pub sections: SelectedSections,
    /// RFC 3339 timestamps. Kept as text so snapshots survive round trips
    /// without precision loss.
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRecord {
    pub id: String,
    pub name: String,
    pub sections: SelectedSections,
    pub created_at: String,
}

/// Lightweight listing row for pickers; avoids decoding section payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteIndexEntry {
    pub id: String,
    pub name: String,
    pub updated_at: String,
}

#[derive(Clone)]
pub struct StorageHandle {
    db_path: Option<Arc<PathBuf>>,
    options: Arc<StorageOptions>,
}

impl StorageHandle {
    /// A handle with no backing database. Saves vanish, fetches return
    /// nothing, listings are empty.
    pub fn disabled() -> Self {
        Self {
            db_path: None,
            options: Arc::new(StorageOptions::default()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.db_path.is_some()
    }

    pub fn database_path(&self) -> Option<&Path> {
        self.db_path.as_deref().map(PathBuf::as_path)
    }

    fn connect(&self) -> Result<Option<Connection>> {
        let Some(db_path) = &self.db_path else {
            return Ok(None);
        };
        let conn = Connection::open(&**db_path)
            .with_context(|| format!("opening database {}", db_path.display()))?;
        prepare_connection(&conn, &self.options)?;
        Ok(Some(conn))
    }

    fn with_connection<F, T>(&self, default: T, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        match self.connect()? {
            Some(conn) => f(&conn),
            None => Ok(default),
        }
    }

    /// Upserts a note snapshot. An existing row keeps its `created_at`;
    /// `updated_at` is always refreshed.
    pub fn save_note(&self, id: &str, name: &str, sections: &SelectedSections) -> Result<()> {
        let payload = encode_sections(sections).context("encoding note sections")?;
        let now = now_rfc3339()?;
        self.with_connection((), |conn| {
            let created_at: Option<String> = conn
                .query_row(
                    "SELECT created_at FROM notes WHERE id = ?1",
                    params![id],
                    |row| row.get(0),
                )
                .optional()?;
            conn.execute(
                "INSERT OR REPLACE INTO notes (id, name, sections, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, name, payload, created_at.as_deref().unwrap_or(&now), now],
            )
            .context("saving note snapshot")?;
            Ok(())
        })
    }

    pub fn fetch_note(&self, id: &str) -> Result<Option<NoteRecord>> {
        self.with_connection(None, |conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, sections, created_at, updated_at
                     FROM notes WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, String>(3)?,
                            row.get::<_, String>(4)?,
                        ))
                    },
                )
                .optional()?;
            row.map(|(id, name, payload, created_at, updated_at)| {
                let sections = decode_sections(&payload)
                    .with_context(|| format!("decoding sections for note {id}"))?;
                Ok(NoteRecord {
                    id,
                    name,
                    sections,
                    created_at,
                    updated_at,
                })
            })
            .transpose()
        })
    }

    /// Most recently updated first.
    pub fn list_notes(&self) -> Result<Vec<NoteIndexEntry>> {
        self.with_connection(Vec::new(), |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, updated_at FROM notes ORDER BY updated_at DESC, id DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(NoteIndexEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    updated_at: row.get(2)?,
                })
            })?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .context("listing note snapshots")
        })
    }

    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.with_connection((), |conn| {
            let deleted = conn
                .execute("DELETE FROM notes WHERE id = ?1", params![id])
                .context("deleting note snapshot")?;
            if deleted == 0 {
                bail!("note {id} not found");
            }
            Ok(())
        })
    }

    pub fn save_template(&self, id: &str, name: &str, sections: &SelectedSections) -> Result<()> {
        let payload = encode_sections(sections).context("encoding template sections")?;
        let now = now_rfc3339()?;
        self.with_connection((), |conn| {
            conn.execute(
                "INSERT OR REPLACE INTO templates (id, name, sections, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, name, payload, now],
            )
            .context("saving template")?;
            Ok(())
        })
    }

    pub fn fetch_template(&self, id: &str) -> Result<Option<TemplateRecord>> {
        self.with_connection(None, |conn| {
            let row = conn
                .query_row(
                    "SELECT id, name, sections, created_at FROM templates WHERE id = ?1",
                    params![id],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                            row.get::<_, String>(3)?,
                        ))
                    },
                )
                .optional()?;
            row.map(|(id, name, payload, created_at)| {
                let sections = decode_sections(&payload)
                    .with_context(|| format!("decoding sections for template {id}"))?;
                Ok(TemplateRecord {
                    id,
                    name,
                    sections,
                    created_at,
                })
            })
            .transpose()
        })
    }

    pub fn list_templates(&self) -> Result<Vec<NoteIndexEntry>> {
        self.with_connection(Vec::new(), |conn| {
            let mut stmt = conn.prepare(
                "SELECT id, name, created_at FROM templates ORDER BY created_at DESC, id DESC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(NoteIndexEntry {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    updated_at: row.get(2)?,
                })
            })?;
            rows.collect::<std::result::Result<Vec<_>, _>>()
                .context("listing templates")
        })
    }

    pub fn delete_template(&self, id: &str) -> Result<()> {
        self.with_connection((), |conn| {
            let deleted = conn
                .execute("DELETE FROM templates WHERE id = ?1", params![id])
                .context("deleting template")?;
            if deleted == 0 {
                bail!("template {id} not found");
            }
            Ok(())
        })
    }
}

pub fn init(paths: &ConfigPaths, storage: &StorageOptions) -> Result<StorageHandle> {
    if !storage.enabled {
        tracing::info!("persistence disabled, snapshots will not be saved");
        return Ok(StorageHandle::disabled());
    }
    let db_path = &paths.database_path;
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }
    let conn = Connection::open(db_path)
        .with_context(|| format!("opening database {}", db_path.display()))?;
    prepare_connection(&conn, storage)?;
    schema::apply(&conn)?;
    Ok(StorageHandle {
        db_path: Some(Arc::new(db_path.clone())),
        options: Arc::new(storage.clone()),
    })
}

fn prepare_connection(conn: &Connection, storage: &StorageOptions) -> Result<()> {
    conn.set_db_config(DbConfig::SQLITE_DBCONFIG_ENABLE_FKEY, true)
        .context("enabling foreign keys")?;
    conn.pragma_update(None, "journal_mode", "WAL")
        .context("setting journal_mode=WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")
        .context("setting synchronous=NORMAL")?;
    conn.pragma_update(
        None,
        "wal_autocheckpoint",
        storage.wal_autocheckpoint.to_string(),
    )
    .context("setting wal_autocheckpoint")?;
    Ok(())
}

/// Millisecond-resolution timestamp id for new snapshots. Collisions within
/// the same millisecond resolve to an upsert, which matches save semantics.
pub fn generate_note_id() -> String {
    let now = OffsetDateTime::now_utc();
    let millis = now.unix_timestamp() as i128 * 1_000 + i128::from(now.millisecond());
    millis.to_string()
}

fn now_rfc3339() -> Result<String> {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .context("formatting timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_paths(root: &TempDir) -> ConfigPaths {
        let base = root.path();
        let config_dir = base.join("config");
        let data_dir = base.join("data");
        ConfigPaths {
            config_dir: config_dir.clone(),
            config_file: config_dir.join("config.toml"),
            data_dir: data_dir.clone(),
            database_path: data_dir.join("therascribe.db"),
            log_dir: base.join("logs"),
        }
    }

    fn setup_storage() -> anyhow::Result<(TempDir, StorageHandle)> {
        let temp = TempDir::new()?;
        let paths = temp_paths(&temp);
        paths.ensure_directories()?;
        let mut options = StorageOptions::default();
        options.database_path = paths.database_path.clone();
        let storage = init(&paths, &options)?;
        Ok((temp, storage))
    }

    fn sample_sections() -> SelectedSections {
        let mut sections = SelectedSections::default();
        sections
            .purpose_of_treatment
            .push("Improve functional mobility".into());
        sections.intervention.push("Gait training".into());
        sections
            .plan
            .push("Increase walking distance and duration for improved endurance".into());
        sections
    }

    #[test]
    fn note_round_trip_preserves_sections() -> anyhow::Result<()> {
        let (_temp, storage) = setup_storage()?;
        let sections = sample_sections();
        storage.save_note("100", "Morning session", &sections)?;

        let record = storage.fetch_note("100")?.expect("note present");
        assert_eq!(record.name, "Morning session");
        assert_eq!(record.sections, sections);
        assert!(!record.created_at.is_empty());
        Ok(())
    }

    #[test]
    fn saving_twice_upserts_and_keeps_created_at() -> anyhow::Result<()> {
        let (_temp, storage) = setup_storage()?;
        storage.save_note("100", "First", &sample_sections())?;
        let first = storage.fetch_note("100")?.expect("note present");

        let mut updated = sample_sections();
        updated.observations.push("Demonstrated poor static standing balance".into());
        storage.save_note("100", "Renamed", &updated)?;

        let second = storage.fetch_note("100")?.expect("note present");
        assert_eq!(storage.list_notes()?.len(), 1);
        assert_eq!(second.name, "Renamed");
        assert_eq!(second.sections, updated);
        assert_eq!(second.created_at, first.created_at);
        Ok(())
    }

    #[test]
    fn unknown_note_fetches_as_none() -> anyhow::Result<()> {
        let (_temp, storage) = setup_storage()?;
        assert!(storage.fetch_note("missing")?.is_none());
        assert!(storage.delete_note("missing").is_err());
        Ok(())
    }

    #[test]
    fn templates_round_trip_and_delete() -> anyhow::Result<()> {
        let (_temp, storage) = setup_storage()?;
        let sections = sample_sections();
        storage.save_template("tpl-1", "Gait template", &sections)?;

        let record = storage.fetch_template("tpl-1")?.expect("template present");
        assert_eq!(record.sections, sections);
        assert_eq!(storage.list_templates()?.len(), 1);

        storage.delete_template("tpl-1")?;
        assert!(storage.fetch_template("tpl-1")?.is_none());
        Ok(())
    }

    #[test]
    fn disabled_handle_is_a_silent_no_op() -> anyhow::Result<()> {
        let storage = StorageHandle::disabled();
        assert!(!storage.is_enabled());
        storage.save_note("1", "ignored", &sample_sections())?;
        assert!(storage.fetch_note("1")?.is_none());
        assert!(storage.list_notes()?.is_empty());
        storage.delete_note("1")?;
        Ok(())
    }

    #[test]
    fn generated_ids_are_numeric_timestamps() {
        let id = generate_note_id();
        let millis: i128 = id.parse().expect("numeric id");
        // sanity bound: after 2020-01-01 in milliseconds
        assert!(millis > 1_577_836_800_000);
    }
}
