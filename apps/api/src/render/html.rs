//! HTML emitter for composed layouts.
//!
//! Every string is escaped on the way out except `TrustedHtml` fields
//! (work summaries, project summaries, custom-section content), which are
//! owner-authored rich text and emitted verbatim. Section headers carry
//! `data-section-key` / `data-custom-section-id` attributes as the binding
//! hooks for Section Options Controls.

use std::fmt::Write as _;

use crate::models::resume::{
    EducationEntry, ExperienceEntry, ProjectEntry, SkillEntry, WorkMode,
};
use crate::render::layout::{ResumeLayout, SectionBlock, SectionBody};
use crate::render::template::HeaderDecoration;

/// Escapes text for use in HTML body and attribute positions.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Emits a standalone HTML document for a composed layout.
pub fn render_html(layout: &ResumeLayout) -> String {
    let mut out = String::with_capacity(4096);
    let theme = escape_html(&layout.theme_color);

    let header_transform = if layout.uppercase_headers {
        "text-transform: uppercase; letter-spacing: 0.05em;"
    } else {
        ""
    };
    let header_decoration = match layout.header_decoration {
        HeaderDecoration::Plain => String::new(),
        HeaderDecoration::Underline => format!("border-bottom: 1px solid {theme};"),
        HeaderDecoration::AccentBar => format!("border-left: 4px solid {theme}; padding-left: 6px;"),
        HeaderDecoration::Band => format!("background: {theme}; color: #fff; padding: 2px 6px;"),
    };

    let _ = write!(
        out,
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n\
         <style>\n\
         body {{ font-family: system-ui, sans-serif; margin: 0 auto; max-width: 52rem; padding: 1.5rem; color: #1f2937; font-size: 0.8rem; line-height: 1.35; }}\n\
         .identity {{ text-align: center; margin-bottom: 1rem; }}\n\
         .identity h1 {{ margin: 0; font-size: 1.4rem; color: {theme}; }}\n\
         .identity .contact {{ color: #4b5563; font-size: 0.75rem; }}\n\
         .columns {{ display: flex; gap: 1.25rem; }}\n\
         .zone-main {{ flex: 2; min-width: 0; }}\n\
         .zone-sidebar {{ flex: 1; min-width: 0; }}\n\
         section {{ margin-bottom: 0.8rem; }}\n\
         section > h2 {{ font-size: 0.85rem; margin: 0 0 0.3rem; color: {theme}; {header_transform} {header_decoration} }}\n\
         .entry {{ margin-bottom: 0.5rem; }}\n\
         .entry .heading {{ display: flex; justify-content: space-between; font-weight: 600; }}\n\
         .entry .dates {{ color: #6b7280; font-weight: 400; }}\n\
         .skill {{ display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.2rem; }}\n\
         .skill .bar {{ background: #e5e7eb; height: 4px; width: 40%; }}\n\
         .skill .bar > div {{ background: {theme}; height: 4px; }}\n\
         </style>\n</head>\n<body data-template=\"{template}\">\n",
        title = escape_html(&layout.identity.full_name),
        template = layout.template,
    );

    write_identity(&mut out, layout);

    if layout.sidebar.is_empty() {
        for block in &layout.main {
            write_section(&mut out, block);
        }
    } else {
        out.push_str("<div class=\"columns\">\n<div class=\"zone-main\">\n");
        for block in &layout.main {
            write_section(&mut out, block);
        }
        out.push_str("</div>\n<div class=\"zone-sidebar\">\n");
        for block in &layout.sidebar {
            write_section(&mut out, block);
        }
        out.push_str("</div>\n</div>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn write_identity(out: &mut String, layout: &ResumeLayout) {
    let identity = &layout.identity;
    let _ = write!(
        out,
        "<header class=\"identity\">\n<h1>{}</h1>\n",
        escape_html(&identity.full_name)
    );
    if !identity.job_title.is_empty() {
        let _ = write!(out, "<p>{}</p>\n", escape_html(&identity.job_title));
    }

    let mut contact: Vec<String> = Vec::new();
    if !identity.address.is_empty() {
        contact.push(escape_html(&identity.address));
    }
    if !identity.phone.is_empty() {
        contact.push(format!(
            "<a href=\"tel:{0}\">{0}</a>",
            escape_html(&identity.phone)
        ));
    }
    if !identity.email.is_empty() {
        contact.push(format!(
            "<a href=\"mailto:{0}\">{0}</a>",
            escape_html(&identity.email)
        ));
    }
    if !identity.competitive_programming_link.is_empty() {
        contact.push(format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&identity.competitive_programming_link),
            escape_html(profile_label(&identity.competitive_programming_platform)),
        ));
    }
    if !identity.other_link.is_empty() {
        contact.push(format!(
            "<a href=\"{}\">{}</a>",
            escape_html(&identity.other_link),
            escape_html(profile_label(&identity.other_profile_platform)),
        ));
    }
    if !contact.is_empty() {
        let _ = write!(
            out,
            "<p class=\"contact\">{}</p>\n",
            contact.join(" &middot; ")
        );
    }
    out.push_str("</header>\n");
}

fn profile_label(platform: &str) -> &str {
    match platform {
        "leetcode" => "LeetCode",
        "codeforces" => "Codeforces",
        "codechef" => "CodeChef",
        "github" => "GitHub",
        "linkedin" => "LinkedIn",
        "portfolio" => "Portfolio",
        other => other,
    }
}

fn write_section(out: &mut String, block: &SectionBlock) {
    match block {
        SectionBlock::Builtin { key, title, body } => {
            let _ = write!(
                out,
                "<section data-section-key=\"{}\">\n<h2>{}</h2>\n",
                key.as_str(),
                escape_html(title)
            );
            write_body(out, body);
            out.push_str("</section>\n");
        }
        SectionBlock::Custom { id, title, body } => {
            let _ = write!(
                out,
                "<section data-custom-section-id=\"{}\">\n<h2>{}</h2>\n",
                escape_html(id),
                escape_html(title)
            );
            write_body(out, body);
            out.push_str("</section>\n");
        }
    }
}

fn write_body(out: &mut String, body: &SectionBody) {
    match body {
        SectionBody::Summary { text } => {
            let _ = write!(out, "<p>{}</p>\n", escape_html(text));
        }
        SectionBody::Experience { items } => {
            for item in items {
                write_experience(out, item);
            }
        }
        SectionBody::Education { items } => {
            for item in items {
                write_education(out, item);
            }
        }
        SectionBody::Skills { items } => {
            for item in items {
                write_skill(out, item);
            }
        }
        SectionBody::Projects { items } => {
            for item in items {
                write_project(out, item);
            }
        }
        SectionBody::Custom { content } => {
            if content.0.is_empty() {
                out.push_str("<p>No content available</p>\n");
            } else {
                // Trusted markup: emitted verbatim.
                out.push_str(&content.0);
                out.push('\n');
            }
        }
    }
}

fn write_experience(out: &mut String, item: &ExperienceEntry) {
    let location = match (item.work_mode, item.city.is_empty()) {
        (WorkMode::Remote, _) => "Remote".to_string(),
        (_, true) => String::new(),
        (_, false) if item.state.is_empty() => item.city.clone(),
        (_, false) => format!("{}, {}", item.city, item.state),
    };
    let _ = write!(
        out,
        "<div class=\"entry\">\n<div class=\"heading\"><span>{company}</span><span class=\"dates\">{dates}</span></div>\n<div>{title}{sep}{location}</div>\n",
        company = escape_html(&item.company_name),
        dates = escape_html(&date_range(&item.start_date, &item.end_date, &item.currently_working)),
        title = escape_html(&item.title),
        sep = if item.title.is_empty() || location.is_empty() { "" } else { " &middot; " },
        location = escape_html(&location),
    );
    if !item.work_summary.is_empty() {
        // Trusted markup: emitted verbatim.
        out.push_str(&item.work_summary);
        out.push('\n');
    }
    out.push_str("</div>\n");
}

fn write_education(out: &mut String, item: &EducationEntry) {
    let degree_line = match (item.degree.is_empty(), item.major.is_empty()) {
        (false, false) => format!("{} in {}", item.degree, item.major),
        (false, true) => item.degree.clone(),
        (true, false) => item.major.clone(),
        (true, true) => String::new(),
    };
    let _ = write!(
        out,
        "<div class=\"entry\">\n<div class=\"heading\"><span>{university}</span><span class=\"dates\">{dates}</span></div>\n",
        university = escape_html(&item.university_name),
        dates = escape_html(&date_range(&item.start_date, &item.end_date, "")),
    );
    if !degree_line.is_empty() {
        let _ = write!(out, "<div>{}</div>\n", escape_html(&degree_line));
    }
    if !item.description.is_empty() {
        let _ = write!(out, "<p>{}</p>\n", escape_html(&item.description));
    }
    out.push_str("</div>\n");
}

fn write_skill(out: &mut String, item: &SkillEntry) {
    let width = item.rating.clamp(0, 100);
    let _ = write!(
        out,
        "<div class=\"skill\"><span>{name}</span><span class=\"bar\"><div style=\"width: {width}%\"></div></span></div>\n",
        name = escape_html(&item.name),
    );
}

fn write_project(out: &mut String, item: &ProjectEntry) {
    let _ = write!(
        out,
        "<div class=\"entry\">\n<div class=\"heading\"><span>{name}</span><span class=\"dates\">{dates}</span></div>\n",
        name = escape_html(&item.project_name),
        dates = escape_html(&date_range(&item.start_date, &item.end_date, "")),
    );
    if !item.tech_stack.is_empty() {
        let _ = write!(out, "<div>{}</div>\n", escape_html(&item.tech_stack));
    }
    if !item.project_summary.is_empty() {
        // Trusted markup: emitted verbatim.
        out.push_str(&item.project_summary);
        out.push('\n');
    }
    out.push_str("</div>\n");
}

fn date_range(start: &str, end: &str, currently_working: &str) -> String {
    let end = if !currently_working.trim().is_empty() {
        "Present"
    } else if end.is_empty() {
        ""
    } else {
        end
    };
    match (start.is_empty(), end.is_empty()) {
        (true, true) => String::new(),
        (false, true) => start.to_string(),
        (true, false) => end.to_string(),
        (false, false) => format!("{start} – {end}"),
    }
}
