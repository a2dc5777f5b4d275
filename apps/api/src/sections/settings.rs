//! Section display configuration persisted inside each resume document.
//!
//! The five built-in sections always exist (absent config means "default
//! title, visible"); custom sections are user-authored blocks with their own
//! ordering and placement metadata. Field names are camelCase on the wire to
//! match the persisted document shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ────────────────────────────────────────────────────────────────────────────
// Built-in section keys
// ────────────────────────────────────────────────────────────────────────────

/// The five fixed resume categories. These never appear in `customSections`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl SectionKey {
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Summary,
        SectionKey::Experience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Summary => "summary",
            SectionKey::Experience => "experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Projects => "projects",
        }
    }

    /// Compiled-in header text used when no custom title is configured.
    pub fn default_title(self) -> &'static str {
        match self {
            SectionKey::Summary => "Summary",
            SectionKey::Experience => "Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Projects => "Projects",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(SectionKey::Summary),
            "experience" => Ok(SectionKey::Experience),
            "education" => Ok(SectionKey::Education),
            "skills" => Ok(SectionKey::Skills),
            "projects" => Ok(SectionKey::Projects),
            _ => Err(()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Per-section config
// ────────────────────────────────────────────────────────────────────────────

/// Display config for one built-in section. Absent fields mean "use the
/// default title" and "visible" respectively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuiltinSectionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

/// Placement choice for a custom section. `Auto` defers to the legacy
/// `sidebar` flag, then to the template's default zone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnChoice {
    #[default]
    Auto,
    Main,
    Sidebar,
    Left,
    Right,
}

/// A user-authored resume block with its own placement and ordering metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSection {
    pub id: String,
    pub title: String,
    /// Rendered as trusted markup, never re-escaped.
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    /// Sort rank within a placement zone. Values may collide; ties resolve
    /// by array position.
    #[serde(default)]
    pub order: i64,
    /// Legacy placement flag, superseded by `column` when that is explicit.
    #[serde(default)]
    pub sidebar: bool,
    #[serde(default)]
    pub column: ColumnChoice,
}

impl CustomSection {
    /// Absent or undefined `visible` means visible.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    /// Header text shown for this section; blank titles fall back.
    pub fn effective_title(&self) -> &str {
        let trimmed = self.title.trim();
        if trimmed.is_empty() {
            "Custom Section"
        } else {
            trimmed
        }
    }

    /// Resolves the placement precedence: an explicit `column` wins, then the
    /// legacy `sidebar` flag, then `Auto`.
    pub fn placement(&self) -> ColumnChoice {
        if self.column != ColumnChoice::Auto {
            self.column
        } else if self.sidebar {
            ColumnChoice::Sidebar
        } else {
            ColumnChoice::Auto
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// The settings subtree
// ────────────────────────────────────────────────────────────────────────────

/// The `sectionSettings` subtree of a resume document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SectionSettings {
    pub summary: BuiltinSectionConfig,
    pub experience: BuiltinSectionConfig,
    pub education: BuiltinSectionConfig,
    pub skills: BuiltinSectionConfig,
    pub projects: BuiltinSectionConfig,
    pub custom_sections: Vec<CustomSection>,
}

impl SectionSettings {
    pub fn builtin(&self, key: SectionKey) -> &BuiltinSectionConfig {
        match key {
            SectionKey::Summary => &self.summary,
            SectionKey::Experience => &self.experience,
            SectionKey::Education => &self.education,
            SectionKey::Skills => &self.skills,
            SectionKey::Projects => &self.projects,
        }
    }

    pub fn builtin_mut(&mut self, key: SectionKey) -> &mut BuiltinSectionConfig {
        match key {
            SectionKey::Summary => &mut self.summary,
            SectionKey::Experience => &mut self.experience,
            SectionKey::Education => &mut self.education,
            SectionKey::Skills => &mut self.skills,
            SectionKey::Projects => &mut self.projects,
        }
    }

    /// Configured title for a built-in section, falling back to the
    /// compiled-in default. Never returns an empty string.
    pub fn title(&self, key: SectionKey) -> &str {
        match self.builtin(key).title.as_deref().map(str::trim) {
            Some(t) if !t.is_empty() => t,
            _ => key.default_title(),
        }
    }

    /// `true` unless visibility was explicitly set to `false`.
    pub fn is_visible(&self, key: SectionKey) -> bool {
        self.builtin(key).visible != Some(false)
    }

    pub fn custom(&self, id: &str) -> Option<&CustomSection> {
        self.custom_sections.iter().find(|s| s.id == id)
    }

    pub fn custom_mut(&mut self, id: &str) -> Option<&mut CustomSection> {
        self.custom_sections.iter_mut().find(|s| s.id == id)
    }
}
