use anyhow::Result;

use crate::note::SelectedSections;
use crate::storage::{NoteIndexEntry, NoteRecord, StorageHandle, TemplateRecord};

/// Thin seam between key handling and the snapshot store.
pub struct SnapshotDispatcher<'a> {
    storage: &'a StorageHandle,
}

impl<'a> SnapshotDispatcher<'a> {
    pub fn new(storage: &'a StorageHandle) -> Self {
        Self { storage }
    }

    pub fn save_note(&self, id: &str, name: &str, sections: &SelectedSections) -> Result<()> {
        self.storage.save_note(id, name, sections)
    }

    pub fn fetch_note(&self, id: &str) -> Result<Option<NoteRecord>> {
        self.storage.fetch_note(id)
    }

    pub fn list_notes(&self) -> Result<Vec<NoteIndexEntry>> {
        self.storage.list_notes()
    }

    pub fn delete_note(&self, id: &str) -> Result<()> {
        self.storage.delete_note(id)
    }

    pub fn save_template(&self, id: &str, name: &str, sections: &SelectedSections) -> Result<()> {
        self.storage.save_template(id, name, sections)
    }

    pub fn fetch_template(&self, id: &str) -> Result<Option<TemplateRecord>> {
        self.storage.fetch_template(id)
    }

    pub fn list_templates(&self) -> Result<Vec<NoteIndexEntry>> {
        self.storage.list_templates()
    }

    pub fn delete_template(&self, id: &str) -> Result<()> {
        self.storage.delete_template(id)
    }
}
