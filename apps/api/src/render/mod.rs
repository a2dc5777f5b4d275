// Template rendering: one parameterized layout engine driven by a
// per-template declarative placement table, instead of twelve hand-written
// renderer copies. Every template honors the same data contract; the specs
// differ only in zone assignment, split rule, and header styling tokens.

pub mod html;
pub mod layout;
pub mod template;

pub use html::render_html;
pub use layout::{compose, ResumeLayout, SectionBlock, TrustedHtml};
pub use template::{template_spec, TemplateId, TemplateSpec};
