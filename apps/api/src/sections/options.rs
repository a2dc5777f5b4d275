//! Section Options Control — the per-section rename / hide-or-show / remove
//! affordance.
#![allow(dead_code)]
//!
//! One control instance per rendered section header; no state is shared
//! between instances. The state machine is
//! `Closed → MenuOpen → {Closed, Editing}` with `Editing → Closed` on save
//! or cancel, and an outside click (`dismiss`) closing from any state.

use crate::sections::settings::SectionKey;
use crate::sections::store::{CustomSectionPatch, SectionSettingsStore, SyncOutcome};

/// What a control instance is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionTarget {
    Builtin(SectionKey),
    Custom(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Closed,
    MenuOpen,
    Editing,
}

pub struct SectionOptionsControl {
    target: SectionTarget,
    state: ControlState,
    edit_title: String,
}

impl SectionOptionsControl {
    pub fn new(target: SectionTarget) -> Self {
        Self {
            target,
            state: ControlState::Closed,
            edit_title: String::new(),
        }
    }

    pub fn target(&self) -> &SectionTarget {
        &self.target
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn edit_title(&self) -> &str {
        &self.edit_title
    }

    /// Remove is only reachable for custom sections; built-ins can be
    /// renamed or hidden but never removed.
    pub fn can_remove(&self) -> bool {
        matches!(self.target, SectionTarget::Custom(_))
    }

    /// Current header text for the bound section, read from the store.
    pub fn current_title(&self, store: &SectionSettingsStore) -> String {
        match &self.target {
            SectionTarget::Builtin(key) => store.title(*key).to_string(),
            SectionTarget::Custom(id) => store
                .custom(id)
                .map(|s| s.effective_title().to_string())
                .unwrap_or_else(|| "Custom Section".to_string()),
        }
    }

    /// Current visibility for the bound section, read from the store.
    pub fn is_visible(&self, store: &SectionSettingsStore) -> bool {
        match &self.target {
            SectionTarget::Builtin(key) => store.is_visible(*key),
            SectionTarget::Custom(id) => store.custom(id).map(|s| s.is_visible()).unwrap_or(true),
        }
    }

    /// Menu button: opens from `Closed`, closes from `MenuOpen`.
    pub fn toggle_menu(&mut self) {
        self.state = match self.state {
            ControlState::Closed => ControlState::MenuOpen,
            ControlState::MenuOpen => ControlState::Closed,
            ControlState::Editing => ControlState::Editing,
        };
    }

    /// Outside click: back to `Closed` from any state.
    pub fn dismiss(&mut self) {
        self.state = ControlState::Closed;
        self.edit_title.clear();
    }

    /// Opens the rename editor seeded with the current title. Only reachable
    /// from the open menu.
    pub fn start_rename(&mut self, store: &SectionSettingsStore) {
        if self.state != ControlState::MenuOpen {
            return;
        }
        self.edit_title = self.current_title(store);
        self.state = ControlState::Editing;
    }

    pub fn set_edit_title(&mut self, title: &str) {
        self.edit_title = title.to_string();
    }

    /// Saves the rename and closes the editor. Empty trimmed input closes
    /// without touching the store.
    pub async fn commit_rename(&mut self, store: &mut SectionSettingsStore) -> SyncOutcome {
        if self.state != ControlState::Editing {
            return SyncOutcome::Unchanged;
        }
        let title = std::mem::take(&mut self.edit_title);
        self.state = ControlState::Closed;
        if title.trim().is_empty() {
            return SyncOutcome::Unchanged;
        }
        match &self.target {
            SectionTarget::Builtin(key) => store.update_title(*key, &title).await,
            SectionTarget::Custom(id) => {
                store
                    .update_custom_section(
                        id,
                        CustomSectionPatch {
                            title: Some(title.trim().to_string()),
                            ..Default::default()
                        },
                    )
                    .await
            }
        }
    }

    pub fn cancel_rename(&mut self) {
        if self.state == ControlState::Editing {
            self.state = ControlState::Closed;
            self.edit_title.clear();
        }
    }

    /// Flips visibility and closes the menu. The current value is read from
    /// the store immediately before flipping, so rapid repeated toggles
    /// never act on a stale snapshot.
    pub async fn toggle_visibility(&mut self, store: &mut SectionSettingsStore) -> SyncOutcome {
        self.state = ControlState::Closed;
        match &self.target {
            SectionTarget::Builtin(key) => store.toggle_visibility(*key).await,
            SectionTarget::Custom(id) => {
                let Some(current) = store.custom(id).map(|s| s.is_visible()) else {
                    return SyncOutcome::Unchanged;
                };
                store
                    .update_custom_section(
                        id,
                        CustomSectionPatch {
                            visible: Some(!current),
                            ..Default::default()
                        },
                    )
                    .await
            }
        }
    }

    /// Removes the bound custom section and closes the menu. No-op for
    /// built-in targets.
    pub async fn remove(&mut self, store: &mut SectionSettingsStore) -> SyncOutcome {
        self.state = ControlState::Closed;
        match &self.target {
            SectionTarget::Builtin(_) => SyncOutcome::Unchanged,
            SectionTarget::Custom(id) => store.remove_custom_section(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::settings::{ColumnChoice, SectionSettings};
    use crate::sections::store::ResumePersistence;
    use async_trait::async_trait;
    use std::sync::Arc;
    use uuid::Uuid;

    struct NullPersistence;

    #[async_trait]
    impl ResumePersistence for NullPersistence {
        async fn save_section_settings(
            &self,
            _resume_id: Uuid,
            _settings: &SectionSettings,
        ) -> anyhow::Result<()> {
            Ok(())
        }
    }

    fn make_store() -> SectionSettingsStore {
        SectionSettingsStore::hydrate(Uuid::new_v4(), None, Arc::new(NullPersistence))
    }

    #[test]
    fn test_menu_state_machine_transitions() {
        let store = make_store();
        let mut control = SectionOptionsControl::new(SectionTarget::Builtin(SectionKey::Skills));

        assert_eq!(control.state(), ControlState::Closed);
        control.toggle_menu();
        assert_eq!(control.state(), ControlState::MenuOpen);
        control.toggle_menu();
        assert_eq!(control.state(), ControlState::Closed);

        // Rename is only reachable through the open menu.
        control.start_rename(&store);
        assert_eq!(control.state(), ControlState::Closed);

        control.toggle_menu();
        control.start_rename(&store);
        assert_eq!(control.state(), ControlState::Editing);
        assert_eq!(control.edit_title(), "Skills");

        control.cancel_rename();
        assert_eq!(control.state(), ControlState::Closed);
    }

    #[test]
    fn test_dismiss_closes_from_any_state() {
        let store = make_store();
        let mut control = SectionOptionsControl::new(SectionTarget::Builtin(SectionKey::Summary));

        control.toggle_menu();
        control.dismiss();
        assert_eq!(control.state(), ControlState::Closed);

        control.toggle_menu();
        control.start_rename(&store);
        control.dismiss();
        assert_eq!(control.state(), ControlState::Closed);
        assert_eq!(control.edit_title(), "");
    }

    #[tokio::test]
    async fn test_rename_builtin_routes_to_update_title() {
        let mut store = make_store();
        let mut control = SectionOptionsControl::new(SectionTarget::Builtin(SectionKey::Skills));

        control.toggle_menu();
        control.start_rename(&store);
        control.set_edit_title("Technical Skills");
        let outcome = control.commit_rename(&mut store).await;

        assert_eq!(outcome, SyncOutcome::Saved);
        assert_eq!(store.title(SectionKey::Skills), "Technical Skills");
        assert_eq!(control.state(), ControlState::Closed);
    }

    #[tokio::test]
    async fn test_rename_custom_routes_to_update_custom_section() {
        let mut store = make_store();
        let (id, _) = store
            .add_custom_section("Certs", "", false, ColumnChoice::Auto)
            .await;
        let mut control = SectionOptionsControl::new(SectionTarget::Custom(id.clone()));

        control.toggle_menu();
        control.start_rename(&store);
        assert_eq!(control.edit_title(), "Certs");
        control.set_edit_title("Certifications");
        control.commit_rename(&mut store).await;

        assert_eq!(store.custom(&id).unwrap().title, "Certifications");
    }

    #[tokio::test]
    async fn test_empty_rename_closes_without_store_mutation() {
        let mut store = make_store();
        let mut control = SectionOptionsControl::new(SectionTarget::Builtin(SectionKey::Projects));

        control.toggle_menu();
        control.start_rename(&store);
        control.set_edit_title("   ");
        let outcome = control.commit_rename(&mut store).await;

        assert_eq!(outcome, SyncOutcome::Unchanged);
        assert_eq!(store.title(SectionKey::Projects), "Projects");
        assert_eq!(control.state(), ControlState::Closed);
    }

    #[tokio::test]
    async fn test_rapid_toggles_always_read_fresh_visibility() {
        let mut store = make_store();
        let (id, _) = store
            .add_custom_section("Certs", "", false, ColumnChoice::Auto)
            .await;
        let mut control = SectionOptionsControl::new(SectionTarget::Custom(id.clone()));

        for _ in 0..5 {
            control.toggle_visibility(&mut store).await;
        }
        // Odd number of flips from visible → hidden.
        assert!(!store.custom(&id).unwrap().is_visible());
        control.toggle_visibility(&mut store).await;
        assert!(store.custom(&id).unwrap().is_visible());
    }

    #[tokio::test]
    async fn test_remove_only_reaches_custom_sections() {
        let mut store = make_store();
        let (id, _) = store
            .add_custom_section("Certs", "", false, ColumnChoice::Auto)
            .await;

        let mut builtin = SectionOptionsControl::new(SectionTarget::Builtin(SectionKey::Skills));
        assert!(!builtin.can_remove());
        assert_eq!(builtin.remove(&mut store).await, SyncOutcome::Unchanged);

        let mut custom = SectionOptionsControl::new(SectionTarget::Custom(id.clone()));
        assert!(custom.can_remove());
        assert_eq!(custom.remove(&mut store).await, SyncOutcome::Saved);
        assert!(store.custom(&id).is_none());
    }
}
