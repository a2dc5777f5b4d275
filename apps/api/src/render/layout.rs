//! The layout engine: a pure projection of `(ResumeDocument, SectionSettings,
//! TemplateSpec)` into a zone tree.
//!
//! Contract shared by all twelve templates:
//! - a built-in section appears only if its data collection is non-empty AND
//!   it is visible; hidden or data-empty sections produce no header at all
//! - header text is the settings' effective title
//! - every block carries the binding hook for its Section Options Control
//!   (section key for built-ins, section id for custom blocks)
//! - custom sections are filtered by visibility, partitioned by the
//!   column-over-legacy-sidebar precedence, collapsed per the template's
//!   split rule, and ordered ascending by `order` with array-position ties

use serde::Serialize;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, ResumeDocument, SkillEntry,
};
use crate::render::template::{HeaderDecoration, TemplateSpec};
use crate::sections::placement::split_custom_sections;
use crate::sections::settings::{CustomSection, SectionKey, SectionSettings};

/// Marker for strings rendered as trusted markup. Anything wrapped in this
/// type reaches the emitted HTML verbatim; everything else is escaped.
/// Constructing one is the explicit capability decision — the content is
/// authored by the resume owner and trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(pub String);

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityHeader {
    pub full_name: String,
    pub job_title: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub competitive_programming_platform: String,
    pub competitive_programming_link: String,
    pub other_profile_platform: String,
    pub other_link: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum SectionBody {
    Summary { text: String },
    Experience { items: Vec<ExperienceEntry> },
    Education { items: Vec<EducationEntry> },
    Skills { items: Vec<SkillEntry> },
    Projects { items: Vec<ProjectEntry> },
    Custom { content: TrustedHtml },
}

/// One rendered section with its options-control binding hook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase", tag = "section")]
pub enum SectionBlock {
    Builtin {
        key: SectionKey,
        title: String,
        body: SectionBody,
    },
    Custom {
        id: String,
        title: String,
        body: SectionBody,
    },
}

impl SectionBlock {
    pub fn title(&self) -> &str {
        match self {
            SectionBlock::Builtin { title, .. } | SectionBlock::Custom { title, .. } => title,
        }
    }
}

/// The composed page: identity header plus the template's two zones, each
/// already in final render order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeLayout {
    pub template: &'static str,
    pub theme_color: String,
    pub uppercase_headers: bool,
    pub header_decoration: HeaderDecoration,
    pub identity: IdentityHeader,
    pub main: Vec<SectionBlock>,
    pub sidebar: Vec<SectionBlock>,
}

/// Projects a document through a template spec. Pure; consults the settings
/// passed explicitly (normally the document's own subtree, or the live
/// store's copy during an editing session).
pub fn compose(
    doc: &ResumeDocument,
    settings: &SectionSettings,
    spec: &TemplateSpec,
) -> ResumeLayout {
    let mut main: Vec<SectionBlock> = spec
        .main_builtins
        .iter()
        .filter_map(|&key| builtin_block(doc, settings, key))
        .collect();
    let mut sidebar: Vec<SectionBlock> = spec
        .sidebar_builtins
        .iter()
        .filter_map(|&key| builtin_block(doc, settings, key))
        .collect();

    let partition = split_custom_sections(&settings.custom_sections, spec.split_rule);
    main.extend(partition.main.into_iter().map(custom_block));
    sidebar.extend(partition.sidebar.into_iter().map(custom_block));

    ResumeLayout {
        template: spec.id.as_str(),
        theme_color: doc.theme_color.clone(),
        uppercase_headers: spec.header.uppercase,
        header_decoration: spec.header.decoration,
        identity: IdentityHeader {
            full_name: format!("{} {}", doc.first_name.trim(), doc.last_name.trim())
                .trim()
                .to_string(),
            job_title: doc.job_title.clone(),
            address: doc.address.clone(),
            phone: doc.phone.clone(),
            email: doc.email.clone(),
            competitive_programming_platform: doc.competitive_programming_platform.clone(),
            competitive_programming_link: doc.competitive_programming_link.clone(),
            other_profile_platform: doc.other_profile_platform.clone(),
            other_link: doc.other_link.clone(),
        },
        main,
        sidebar,
    }
}

/// A built-in section renders only when it has data and is visible.
fn builtin_block(
    doc: &ResumeDocument,
    settings: &SectionSettings,
    key: SectionKey,
) -> Option<SectionBlock> {
    if !settings.is_visible(key) || !has_data(doc, key) {
        return None;
    }
    let body = match key {
        SectionKey::Summary => SectionBody::Summary {
            text: doc.summary.clone(),
        },
        SectionKey::Experience => SectionBody::Experience {
            items: doc.experience.clone(),
        },
        SectionKey::Education => SectionBody::Education {
            items: doc.education.clone(),
        },
        SectionKey::Skills => SectionBody::Skills {
            items: doc.skills.clone(),
        },
        SectionKey::Projects => SectionBody::Projects {
            items: doc.projects.clone(),
        },
    };
    Some(SectionBlock::Builtin {
        key,
        title: settings.title(key).to_string(),
        body,
    })
}

fn has_data(doc: &ResumeDocument, key: SectionKey) -> bool {
    match key {
        SectionKey::Summary => !doc.summary.trim().is_empty(),
        SectionKey::Experience => !doc.experience.is_empty(),
        SectionKey::Education => !doc.education.is_empty(),
        SectionKey::Skills => !doc.skills.is_empty(),
        SectionKey::Projects => !doc.projects.is_empty(),
    }
}

fn custom_block(section: &CustomSection) -> SectionBlock {
    SectionBlock::Custom {
        id: section.id.clone(),
        title: section.effective_title().to_string(),
        body: SectionBody::Custom {
            content: TrustedHtml(section.content.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillEntry;
    use crate::render::template::{template_spec, TemplateId};
    use crate::sections::settings::ColumnChoice;

    fn make_doc() -> ResumeDocument {
        ResumeDocument {
            title: "My Resume".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            summary: "Engineer and analyst.".to_string(),
            skills: vec![SkillEntry {
                name: "Rust".to_string(),
                rating: 90,
            }],
            theme_color: "#336699".to_string(),
            ..Default::default()
        }
    }

    fn make_custom(id: &str, order: i64, column: ColumnChoice, visible: Option<bool>) -> CustomSection {
        CustomSection {
            id: id.to_string(),
            title: format!("Section {id}"),
            content: format!("<p>{id}</p>"),
            visible,
            order,
            sidebar: false,
            column,
        }
    }

    fn block_titles(blocks: &[SectionBlock]) -> Vec<&str> {
        blocks.iter().map(|b| b.title()).collect()
    }

    #[test]
    fn test_empty_collection_renders_no_header_even_when_visible() {
        let doc = make_doc(); // experience is empty
        let settings = SectionSettings::default();
        assert!(settings.is_visible(SectionKey::Experience));

        for id in TemplateId::ALL {
            let layout = compose(&doc, &settings, template_spec(id));
            let all: Vec<&SectionBlock> = layout.main.iter().chain(layout.sidebar.iter()).collect();
            assert!(
                !all.iter().any(|b| matches!(
                    b,
                    SectionBlock::Builtin {
                        key: SectionKey::Experience,
                        ..
                    }
                )),
                "template {id:?} rendered an empty Experience section"
            );
        }
    }

    #[test]
    fn test_hidden_builtin_renders_nothing() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.skills.visible = Some(false);

        let layout = compose(&doc, &settings, template_spec(TemplateId::Modern));
        let all: Vec<&SectionBlock> = layout.main.iter().chain(layout.sidebar.iter()).collect();
        assert!(!all.iter().any(|b| matches!(
            b,
            SectionBlock::Builtin {
                key: SectionKey::Skills,
                ..
            }
        )));
    }

    #[test]
    fn test_rename_changes_header_text_only_across_all_templates() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.skills.title = Some("Technical Skills".to_string());

        for id in TemplateId::ALL {
            let layout = compose(&doc, &settings, template_spec(id));
            let skills = layout
                .main
                .iter()
                .chain(layout.sidebar.iter())
                .find_map(|b| match b {
                    SectionBlock::Builtin {
                        key: SectionKey::Skills,
                        title,
                        body: SectionBody::Skills { items },
                    } => Some((title, items)),
                    _ => None,
                })
                .expect("skills section should render");
            assert_eq!(skills.0, "Technical Skills", "template {id:?}");
            // The data itself is untouched by the rename.
            assert_eq!(skills.1.len(), 1);
            assert_eq!(skills.1[0].name, "Rust");
        }
    }

    #[test]
    fn test_hidden_custom_section_omitted_while_sibling_renders() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.custom_sections.push(make_custom("hidden", 0, ColumnChoice::Auto, Some(false)));
        settings.custom_sections.push(make_custom("shown", 1, ColumnChoice::Auto, Some(true)));

        for id in TemplateId::ALL {
            let layout = compose(&doc, &settings, template_spec(id));
            let customs: Vec<&str> = layout
                .main
                .iter()
                .chain(layout.sidebar.iter())
                .filter_map(|b| match b {
                    SectionBlock::Custom { id, .. } => Some(id.as_str()),
                    _ => None,
                })
                .collect();
            assert_eq!(customs, vec!["shown"], "template {id:?}");
        }
    }

    #[test]
    fn test_custom_sections_render_in_order_rank_not_array_order() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.custom_sections.push(make_custom("c", 2, ColumnChoice::Main, None));
        settings.custom_sections.push(make_custom("a", 0, ColumnChoice::Main, None));
        settings.custom_sections.push(make_custom("b", 1, ColumnChoice::Main, None));

        let layout = compose(&doc, &settings, template_spec(TemplateId::Azurill));
        let customs: Vec<&str> = layout
            .main
            .iter()
            .filter_map(|b| match b {
                SectionBlock::Custom { id, .. } => Some(id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(customs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_custom_sections_append_after_builtins_in_each_zone() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.custom_sections.push(make_custom("side", 0, ColumnChoice::Sidebar, None));
        settings.custom_sections.push(make_custom("mn", 1, ColumnChoice::Main, None));

        let layout = compose(&doc, &settings, template_spec(TemplateId::Modern));
        // Only Summary and Skills carry data; custom sections follow the
        // built-ins within their zone.
        assert_eq!(block_titles(&layout.main), vec!["Summary", "Section mn"]);
        assert_eq!(block_titles(&layout.sidebar), vec!["Skills", "Section side"]);
    }

    #[test]
    fn test_single_column_template_routes_everything_to_main() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings.custom_sections.push(make_custom("s", 0, ColumnChoice::Sidebar, None));

        let layout = compose(&doc, &settings, template_spec(TemplateId::Onix));
        assert!(layout.sidebar.is_empty());
        assert!(layout
            .main
            .iter()
            .any(|b| matches!(b, SectionBlock::Custom { id, .. } if id == "s")));
    }

    #[test]
    fn test_custom_content_is_wrapped_as_trusted_markup() {
        let doc = make_doc();
        let mut settings = SectionSettings::default();
        settings
            .custom_sections
            .push(make_custom("x", 0, ColumnChoice::Main, None));

        let layout = compose(&doc, &settings, template_spec(TemplateId::Default));
        let content = layout
            .main
            .iter()
            .find_map(|b| match b {
                SectionBlock::Custom {
                    body: SectionBody::Custom { content },
                    ..
                } => Some(content),
                _ => None,
            })
            .unwrap();
        assert_eq!(content, &TrustedHtml("<p>x</p>".to_string()));
    }

    #[test]
    fn test_identity_header_carries_profile_fields() {
        let doc = make_doc();
        let settings = SectionSettings::default();
        let layout = compose(&doc, &settings, template_spec(TemplateId::Classic));
        assert_eq!(layout.identity.full_name, "Ada Lovelace");
        assert_eq!(layout.theme_color, "#336699");
    }
}
