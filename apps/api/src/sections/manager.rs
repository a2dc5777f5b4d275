//! Custom Section Manager — draft-based create/update/delete over the
//! `customSections` array.
#![allow(dead_code)]
//!
//! Drafts never touch the store until committed, and a commit requires a
//! non-empty trimmed title; otherwise the draft stays open and the store is
//! left untouched. Removal is immediate and unconditional.

use crate::sections::settings::{ColumnChoice, CustomSection};
use crate::sections::store::{CustomSectionPatch, SectionSettingsStore, SyncOutcome};

/// Editable fields of a custom section while it is being drafted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionDraft {
    pub title: String,
    pub content: String,
    pub sidebar: bool,
    pub column: ColumnChoice,
}

impl SectionDraft {
    fn from_section(section: &CustomSection) -> Self {
        Self {
            title: section.title.clone(),
            content: section.content.clone(),
            sidebar: section.sidebar,
            column: section.column,
        }
    }
}

#[derive(Debug)]
struct EditDraft {
    id: String,
    draft: SectionDraft,
}

/// Manager state: at most one add draft and one edit draft at a time.
#[derive(Debug, Default)]
pub struct CustomSectionManager {
    adding: Option<SectionDraft>,
    editing: Option<EditDraft>,
}

impl CustomSectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_adding(&self) -> bool {
        self.adding.is_some()
    }

    pub fn editing_id(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.id.as_str())
    }

    /// Opens a fresh add draft (replacing any previous one).
    pub fn start_adding(&mut self) {
        self.adding = Some(SectionDraft::default());
    }

    pub fn cancel_adding(&mut self) {
        self.adding = None;
    }

    pub fn adding_draft_mut(&mut self) -> Option<&mut SectionDraft> {
        self.adding.as_mut()
    }

    /// Commits the add draft. Requires a non-empty trimmed title; otherwise
    /// nothing reaches the store and the draft stays open.
    pub async fn commit_add(
        &mut self,
        store: &mut SectionSettingsStore,
    ) -> Option<(String, SyncOutcome)> {
        if self.adding.as_ref()?.title.trim().is_empty() {
            return None;
        }
        let draft = self.adding.take()?;
        let (id, outcome) = store
            .add_custom_section(&draft.title, &draft.content, draft.sidebar, draft.column)
            .await;
        Some((id, outcome))
    }

    /// Loads an existing entry into an edit draft keyed by its id.
    /// Returns `false` when the id does not exist.
    pub fn start_editing(&mut self, store: &SectionSettingsStore, id: &str) -> bool {
        match store.custom(id) {
            Some(section) => {
                self.editing = Some(EditDraft {
                    id: id.to_string(),
                    draft: SectionDraft::from_section(section),
                });
                true
            }
            None => false,
        }
    }

    pub fn editing_draft_mut(&mut self) -> Option<&mut SectionDraft> {
        self.editing.as_mut().map(|e| &mut e.draft)
    }

    /// Discards the edit draft; the store is untouched.
    pub fn discard_edit(&mut self) {
        self.editing = None;
    }

    /// Commits the edit draft back into the store. Requires a non-empty
    /// trimmed title; otherwise the draft stays open.
    pub async fn commit_edit(&mut self, store: &mut SectionSettingsStore) -> Option<SyncOutcome> {
        if self.editing.as_ref()?.draft.title.trim().is_empty() {
            return None;
        }
        let editing = self.editing.take()?;
        let outcome = store
            .update_custom_section(
                &editing.id,
                CustomSectionPatch {
                    title: Some(editing.draft.title),
                    content: Some(editing.draft.content),
                    sidebar: Some(editing.draft.sidebar),
                    column: Some(editing.draft.column),
                    ..Default::default()
                },
            )
            .await;
        Some(outcome)
    }

    /// Immediate removal, no confirmation step.
    pub async fn remove(&mut self, store: &mut SectionSettingsStore, id: &str) -> SyncOutcome {
        if self.editing_id() == Some(id) {
            self.editing = None;
        }
        store.remove_custom_section(id).await
    }

    /// Management-view listing: every custom section (hidden included),
    /// ascending by `order` with array-position tie-break.
    pub fn list<'a>(&self, store: &'a SectionSettingsStore) -> Vec<&'a CustomSection> {
        let mut sections: Vec<&CustomSection> = store.settings().custom_sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }
}
