//! The declarative template table: twelve interchangeable layouts, each a
//! static spec consumed by the layout engine.
#![allow(dead_code)]
//!
//! A spec declares which zone each built-in section lives in, how the four
//! custom-section `column` values collapse onto the template's two zones
//! (`SplitRule`, deterministic per template), and the header styling tokens
//! the HTML emitter applies. Adding a template means adding a table entry,
//! not a renderer.

use serde::{Deserialize, Serialize};

use crate::sections::placement::SplitRule;
use crate::sections::settings::SectionKey;

// ────────────────────────────────────────────────────────────────────────────
// Template identifiers
// ────────────────────────────────────────────────────────────────────────────

/// The twelve layout variants. Unknown keys fall back to `Default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    Default,
    Onix,
    Azurill,
    Ditto,
    Pikachu,
    Classic,
    Modern,
    Executive,
    Minimal,
    Corporate,
    Technical,
    Engineer,
}

impl TemplateId {
    pub const ALL: [TemplateId; 12] = [
        TemplateId::Default,
        TemplateId::Onix,
        TemplateId::Azurill,
        TemplateId::Ditto,
        TemplateId::Pikachu,
        TemplateId::Classic,
        TemplateId::Modern,
        TemplateId::Executive,
        TemplateId::Minimal,
        TemplateId::Corporate,
        TemplateId::Technical,
        TemplateId::Engineer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::Default => "default",
            TemplateId::Onix => "onix",
            TemplateId::Azurill => "azurill",
            TemplateId::Ditto => "ditto",
            TemplateId::Pikachu => "pikachu",
            TemplateId::Classic => "classic",
            TemplateId::Modern => "modern",
            TemplateId::Executive => "executive",
            TemplateId::Minimal => "minimal",
            TemplateId::Corporate => "corporate",
            TemplateId::Technical => "technical",
            TemplateId::Engineer => "engineer",
        }
    }

    /// Case-insensitive lookup with the default template as fallback, so a
    /// document carrying a stale or unknown key still renders.
    pub fn from_name(name: &str) -> TemplateId {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .unwrap_or(TemplateId::Default)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Styling tokens
// ────────────────────────────────────────────────────────────────────────────

/// How a section header is decorated. Tokens, not styling — the HTML
/// emitter maps them to classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderDecoration {
    Plain,
    Underline,
    AccentBar,
    Band,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderStyle {
    pub uppercase: bool,
    pub decoration: HeaderDecoration,
}

// ────────────────────────────────────────────────────────────────────────────
// Template specs
// ────────────────────────────────────────────────────────────────────────────

/// One row of the template table.
#[derive(Debug, Clone, Copy)]
pub struct TemplateSpec {
    pub id: TemplateId,
    pub name: &'static str,
    pub description: &'static str,
    /// Built-in sections assigned to the main flow, in render order.
    pub main_builtins: &'static [SectionKey],
    /// Built-in sections assigned to the sidebar zone, in render order.
    pub sidebar_builtins: &'static [SectionKey],
    /// How custom-section placement collapses onto this template's zones.
    pub split_rule: SplitRule,
    pub header: HeaderStyle,
}

use SectionKey::{Education, Experience, Projects, Skills, Summary};

const SINGLE_FLOW: &[SectionKey] = &[Summary, Experience, Projects, Education, Skills];
const CLASSIC_FLOW: &[SectionKey] = &[Summary, Experience, Education, Projects, Skills];
const MAIN_FLOW: &[SectionKey] = &[Summary, Experience, Projects];
const SIDE_FLOW: &[SectionKey] = &[Education, Skills];

static TEMPLATES: [TemplateSpec; 12] = [
    TemplateSpec {
        id: TemplateId::Default,
        name: "Default",
        description: "Simple and classic single-column layout",
        main_builtins: SINGLE_FLOW,
        sidebar_builtins: &[],
        split_rule: SplitRule::SingleColumn,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::Underline,
        },
    },
    TemplateSpec {
        id: TemplateId::Onix,
        name: "Onix",
        description: "Clean minimalist single-column design",
        main_builtins: SINGLE_FLOW,
        sidebar_builtins: &[],
        split_rule: SplitRule::SingleColumn,
        header: HeaderStyle {
            uppercase: false,
            decoration: HeaderDecoration::Plain,
        },
    },
    TemplateSpec {
        id: TemplateId::Azurill,
        name: "Azurill",
        description: "Professional sidebar layout",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::Underline,
        },
    },
    TemplateSpec {
        id: TemplateId::Ditto,
        name: "Ditto",
        description: "Card-based two-column design",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::LeftRight,
        header: HeaderStyle {
            uppercase: false,
            decoration: HeaderDecoration::Band,
        },
    },
    TemplateSpec {
        id: TemplateId::Pikachu,
        name: "Pikachu",
        description: "Colorful layout with skill ratings",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::LeftRight,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::AccentBar,
        },
    },
    TemplateSpec {
        id: TemplateId::Classic,
        name: "Classic",
        description: "Traditional single-column resume",
        main_builtins: CLASSIC_FLOW,
        sidebar_builtins: &[],
        split_rule: SplitRule::SingleColumn,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::Underline,
        },
    },
    TemplateSpec {
        id: TemplateId::Modern,
        name: "Modern",
        description: "Contemporary sidebar-first layout",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::AccentBar,
        },
    },
    TemplateSpec {
        id: TemplateId::Executive,
        name: "Executive",
        description: "Premium layout for senior positions",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: false,
            decoration: HeaderDecoration::Underline,
        },
    },
    TemplateSpec {
        id: TemplateId::Minimal,
        name: "Minimal",
        description: "Ultra-clean, maximum content density",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: false,
            decoration: HeaderDecoration::Plain,
        },
    },
    TemplateSpec {
        id: TemplateId::Corporate,
        name: "Corporate",
        description: "Traditional corporate sections",
        main_builtins: &[Summary, Experience, Education, Projects],
        sidebar_builtins: &[Skills],
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::Band,
        },
    },
    TemplateSpec {
        id: TemplateId::Technical,
        name: "Technical",
        description: "Developer-focused, skills up front",
        main_builtins: &[Summary, Skills, Projects, Experience],
        sidebar_builtins: &[Education],
        split_rule: SplitRule::EveryThirdSidebar,
        header: HeaderStyle {
            uppercase: true,
            decoration: HeaderDecoration::AccentBar,
        },
    },
    TemplateSpec {
        id: TemplateId::Engineer,
        name: "Engineer",
        description: "Systematic engineering layout",
        main_builtins: MAIN_FLOW,
        sidebar_builtins: SIDE_FLOW,
        split_rule: SplitRule::MainSidebar,
        header: HeaderStyle {
            uppercase: false,
            decoration: HeaderDecoration::Underline,
        },
    },
];

/// Returns the static spec for a template.
pub fn template_spec(id: TemplateId) -> &'static TemplateSpec {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .expect("every TemplateId has a table entry")
}

/// The full table, for listings.
pub fn all_templates() -> &'static [TemplateSpec] {
    &TEMPLATES
}
