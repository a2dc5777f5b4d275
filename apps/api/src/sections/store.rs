//! Section Settings Store — the single source of truth for section display
//! configuration during an editing session.
#![allow(dead_code)]
//!
//! Every mutation re-synchronizes the settings subtree into the persisted
//! resume document through the `ResumePersistence` collaborator. Saves are
//! optimistic: a rejected save is logged and reported, never rolled back.
//! All operations are total over malformed input — unknown ids and empty
//! titles degrade to no-ops rather than raising.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;
use uuid::Uuid;

use crate::sections::settings::{ColumnChoice, CustomSection, SectionKey, SectionSettings};

/// Persistence collaborator for the settings subtree. Carried in `AppState`
/// as `Arc<dyn ResumePersistence>` so tests can swap in a recording fake.
#[async_trait]
pub trait ResumePersistence: Send + Sync {
    async fn save_section_settings(
        &self,
        resume_id: Uuid,
        settings: &SectionSettings,
    ) -> anyhow::Result<()>;
}

/// Result of a store mutation. `Unchanged` means the input was a no-op and
/// no save was attempted; `SaveFailed` means the in-memory change applied
/// but the document write was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    Saved,
    SaveFailed,
    Unchanged,
}

impl SyncOutcome {
    /// `false` only when a save was attempted and rejected.
    pub fn saved(self) -> bool {
        self != SyncOutcome::SaveFailed
    }
}

/// Partial update for one custom section; absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSectionPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub visible: Option<bool>,
    pub order: Option<i64>,
    pub sidebar: Option<bool>,
    pub column: Option<ColumnChoice>,
}

pub struct SectionSettingsStore {
    resume_id: Uuid,
    settings: SectionSettings,
    persistence: Arc<dyn ResumePersistence>,
}

impl SectionSettingsStore {
    /// Hydrates a store from a document's settings subtree. `None` means the
    /// resume was never customized and starts from the defaults.
    pub fn hydrate(
        resume_id: Uuid,
        settings: Option<SectionSettings>,
        persistence: Arc<dyn ResumePersistence>,
    ) -> Self {
        Self {
            resume_id,
            settings: settings.unwrap_or_default(),
            persistence,
        }
    }

    pub fn resume_id(&self) -> Uuid {
        self.resume_id
    }

    pub fn settings(&self) -> &SectionSettings {
        &self.settings
    }

    pub fn into_settings(self) -> SectionSettings {
        self.settings
    }

    /// Configured title for a built-in section, never empty.
    pub fn title(&self, key: SectionKey) -> &str {
        self.settings.title(key)
    }

    /// `true` unless the section was explicitly hidden.
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.settings.is_visible(key)
    }

    pub fn custom(&self, id: &str) -> Option<&CustomSection> {
        self.settings.custom(id)
    }

    /// Sets the title of a built-in section. Titles that are empty after
    /// trimming are dropped so a meaningful default is never overwritten.
    pub async fn update_title(&mut self, key: SectionKey, new_title: &str) -> SyncOutcome {
        let trimmed = new_title.trim();
        if trimmed.is_empty() {
            return SyncOutcome::Unchanged;
        }
        self.settings.builtin_mut(key).title = Some(trimmed.to_string());
        self.sync().await
    }

    /// Flips the effective visibility of a built-in section.
    pub async fn toggle_visibility(&mut self, key: SectionKey) -> SyncOutcome {
        let next = !self.settings.is_visible(key);
        self.settings.builtin_mut(key).visible = Some(next);
        self.sync().await
    }

    /// Appends a new custom section and returns its fresh id.
    ///
    /// `order` is the current array length — append semantics, not
    /// max(order)+1. After removals this can produce duplicate order values;
    /// the stable tie-break in `placement` keeps that benign.
    pub async fn add_custom_section(
        &mut self,
        title: &str,
        content: &str,
        sidebar: bool,
        column: ColumnChoice,
    ) -> (String, SyncOutcome) {
        let id = Uuid::new_v4().to_string();
        let order = self.settings.custom_sections.len() as i64;
        self.settings.custom_sections.push(CustomSection {
            id: id.clone(),
            title: title.to_string(),
            content: content.to_string(),
            visible: Some(true),
            order,
            sidebar,
            column,
        });
        let outcome = self.sync().await;
        (id, outcome)
    }

    /// Merges the present patch fields into the matching custom section.
    /// Unknown ids are a no-op.
    pub async fn update_custom_section(
        &mut self,
        id: &str,
        patch: CustomSectionPatch,
    ) -> SyncOutcome {
        let Some(section) = self.settings.custom_mut(id) else {
            return SyncOutcome::Unchanged;
        };
        if let Some(title) = patch.title {
            section.title = title;
        }
        if let Some(content) = patch.content {
            section.content = content;
        }
        if let Some(visible) = patch.visible {
            section.visible = Some(visible);
        }
        if let Some(order) = patch.order {
            section.order = order;
        }
        if let Some(sidebar) = patch.sidebar {
            section.sidebar = sidebar;
        }
        if let Some(column) = patch.column {
            section.column = column;
        }
        self.sync().await
    }

    /// Deletes the matching custom section. Unknown ids are a no-op.
    pub async fn remove_custom_section(&mut self, id: &str) -> SyncOutcome {
        let before = self.settings.custom_sections.len();
        self.settings.custom_sections.retain(|s| s.id != id);
        if self.settings.custom_sections.len() == before {
            return SyncOutcome::Unchanged;
        }
        self.sync().await
    }

    /// Pushes the in-memory settings into the persisted document. The local
    /// copy stays authoritative even when the write is rejected.
    async fn sync(&self) -> SyncOutcome {
        match self
            .persistence
            .save_section_settings(self.resume_id, &self.settings)
            .await
        {
            Ok(()) => SyncOutcome::Saved,
            Err(e) => {
                warn!(
                    resume_id = %self.resume_id,
                    "section settings save failed: {e:#}"
                );
                SyncOutcome::SaveFailed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records every save; optionally rejects them all.
    struct RecordingPersistence {
        saves: Mutex<Vec<SectionSettings>>,
        fail: bool,
    }

    impl RecordingPersistence {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                saves: Mutex::new(vec![]),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                saves: Mutex::new(vec![]),
                fail: true,
            })
        }

        fn save_count(&self) -> usize {
            self.saves.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ResumePersistence for RecordingPersistence {
        async fn save_section_settings(
            &self,
            _resume_id: Uuid,
            settings: &SectionSettings,
        ) -> anyhow::Result<()> {
            self.saves.lock().unwrap().push(settings.clone());
            if self.fail {
                anyhow::bail!("connection reset");
            }
            Ok(())
        }
    }

    fn make_store(persistence: Arc<RecordingPersistence>) -> SectionSettingsStore {
        SectionSettingsStore::hydrate(Uuid::new_v4(), None, persistence)
    }

    #[tokio::test]
    async fn test_title_falls_back_to_default_until_configured() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence.clone());

        assert_eq!(store.title(SectionKey::Skills), "Skills");

        let outcome = store.update_title(SectionKey::Skills, "Technical Skills").await;
        assert_eq!(outcome, SyncOutcome::Saved);
        assert_eq!(store.title(SectionKey::Skills), "Technical Skills");
        assert_eq!(persistence.save_count(), 1);
    }

    #[tokio::test]
    async fn test_empty_title_is_a_no_op_and_triggers_no_save() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence.clone());
        let before = store.settings().clone();

        assert_eq!(
            store.update_title(SectionKey::Summary, "   ").await,
            SyncOutcome::Unchanged
        );
        assert_eq!(store.settings(), &before);
        assert_eq!(persistence.save_count(), 0);
    }

    #[tokio::test]
    async fn test_toggle_twice_returns_to_original() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence);

        assert!(store.is_visible(SectionKey::Projects));
        store.toggle_visibility(SectionKey::Projects).await;
        assert!(!store.is_visible(SectionKey::Projects));
        store.toggle_visibility(SectionKey::Projects).await;
        assert!(store.is_visible(SectionKey::Projects));
    }

    #[tokio::test]
    async fn test_add_assigns_distinct_ids_and_sequential_orders() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence);

        let (awards_id, _) = store
            .add_custom_section("Awards", "", false, ColumnChoice::Auto)
            .await;
        let (certs_id, _) = store
            .add_custom_section("Certs", "", true, ColumnChoice::Sidebar)
            .await;

        assert_ne!(awards_id, certs_id);
        let sections = &store.settings().custom_sections;
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].order, 0);
        assert_eq!(sections[1].order, 1);
        assert_eq!(sections[0].title, "Awards");
        assert!(sections[1].sidebar);
        assert_eq!(sections[1].column, ColumnChoice::Sidebar);
        assert_eq!(sections[0].visible, Some(true));
    }

    #[tokio::test]
    async fn test_order_reuses_length_after_removal() {
        // Removing the middle entry then adding again reuses order = len,
        // which can duplicate an existing order value. Accepted quirk; the
        // stable sort tie-break keeps rendering deterministic.
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence);

        let (a, _) = store.add_custom_section("A", "", false, ColumnChoice::Auto).await;
        store.add_custom_section("B", "", false, ColumnChoice::Auto).await;
        store.add_custom_section("C", "", false, ColumnChoice::Auto).await;
        store.remove_custom_section(&a).await;

        let (_, _) = store.add_custom_section("D", "", false, ColumnChoice::Auto).await;
        let orders: Vec<i64> = store
            .settings()
            .custom_sections
            .iter()
            .map(|s| s.order)
            .collect();
        // B=1, C=2, D=len-at-add=2 — duplicate order preserved as-is.
        assert_eq!(orders, vec![1, 2, 2]);
    }

    #[tokio::test]
    async fn test_remove_deletes_exactly_one_entry() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence);

        let (awards_id, _) = store
            .add_custom_section("Awards", "", false, ColumnChoice::Auto)
            .await;
        let (certs_id, _) = store
            .add_custom_section("Certs", "", true, ColumnChoice::Sidebar)
            .await;

        assert_eq!(
            store.remove_custom_section(&awards_id).await,
            SyncOutcome::Saved
        );

        let sections = &store.settings().custom_sections;
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, certs_id);
        assert_eq!(sections[0].title, "Certs");
        assert_eq!(sections[0].order, 1);
    }

    #[tokio::test]
    async fn test_update_merges_only_present_fields() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence);

        let (id, _) = store
            .add_custom_section("Certs", "<p>AWS</p>", false, ColumnChoice::Auto)
            .await;

        store
            .update_custom_section(
                &id,
                CustomSectionPatch {
                    visible: Some(false),
                    ..Default::default()
                },
            )
            .await;

        let section = store.custom(&id).unwrap();
        assert_eq!(section.visible, Some(false));
        assert_eq!(section.title, "Certs");
        assert_eq!(section.content, "<p>AWS</p>");
    }

    #[tokio::test]
    async fn test_unknown_id_operations_are_no_ops() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence.clone());

        assert_eq!(
            store
                .update_custom_section("nope", CustomSectionPatch::default())
                .await,
            SyncOutcome::Unchanged
        );
        assert_eq!(
            store.remove_custom_section("nope").await,
            SyncOutcome::Unchanged
        );
        assert_eq!(persistence.save_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_save_keeps_local_state() {
        let persistence = RecordingPersistence::failing();
        let mut store = make_store(persistence.clone());

        let outcome = store.update_title(SectionKey::Experience, "Work History").await;
        assert_eq!(outcome, SyncOutcome::SaveFailed);
        assert!(!outcome.saved());
        // Optimistic update: the local edit survives the rejected write.
        assert_eq!(store.title(SectionKey::Experience), "Work History");
        assert_eq!(persistence.save_count(), 1);
    }

    #[tokio::test]
    async fn test_every_mutation_syncs_once() {
        let persistence = RecordingPersistence::ok();
        let mut store = make_store(persistence.clone());

        let (id, _) = store
            .add_custom_section("Links", "", false, ColumnChoice::Auto)
            .await;
        store.toggle_visibility(SectionKey::Summary).await;
        store
            .update_custom_section(
                &id,
                CustomSectionPatch {
                    content: Some("<ul><li>GitHub</li></ul>".to_string()),
                    ..Default::default()
                },
            )
            .await;
        store.remove_custom_section(&id).await;

        assert_eq!(persistence.save_count(), 4);
    }
}
