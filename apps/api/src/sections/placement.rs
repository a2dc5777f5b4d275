//! Partitioning of custom sections into a template's two placement zones.
//!
//! Placement precedence (identical for every template): an explicit `column`
//! wins, then the legacy `sidebar` flag, then the template's rule for
//! unplaced sections. Within a zone, sections order ascending by `order`
//! with ties broken by original array position (stable sort).

use crate::sections::settings::{ColumnChoice, CustomSection};

/// How a template collapses the four `column` values onto its two zones.
/// Every rule is deterministic; the mapping per variant is the template's
/// documented layout choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// One flow only: everything lands in the main zone.
    SingleColumn,
    /// main/left → main, sidebar/right → sidebar; unplaced → main.
    MainSidebar,
    /// Zones are left/right columns: main/left → left (main bucket),
    /// sidebar/right → right (sidebar bucket); unplaced → left.
    LeftRight,
    /// main/left → main, sidebar/right → sidebar; every third unplaced
    /// section (by array index) lands in the sidebar.
    EveryThirdSidebar,
}

/// Visible custom sections split into the template's two zones, each in
/// final render order.
#[derive(Debug, Default)]
pub struct Partition<'a> {
    pub main: Vec<&'a CustomSection>,
    pub sidebar: Vec<&'a CustomSection>,
}

/// Filters hidden sections, buckets the rest per the rule, and sorts each
/// bucket by `order` (stable, so array position breaks ties).
pub fn split_custom_sections(sections: &[CustomSection], rule: SplitRule) -> Partition<'_> {
    let mut partition = Partition::default();

    for (index, section) in sections.iter().enumerate() {
        if !section.is_visible() {
            continue;
        }
        if goes_to_sidebar(section, index, rule) {
            partition.sidebar.push(section);
        } else {
            partition.main.push(section);
        }
    }

    partition.main.sort_by_key(|s| s.order);
    partition.sidebar.sort_by_key(|s| s.order);
    partition
}

fn goes_to_sidebar(section: &CustomSection, index: usize, rule: SplitRule) -> bool {
    if rule == SplitRule::SingleColumn {
        return false;
    }
    match section.placement() {
        ColumnChoice::Sidebar | ColumnChoice::Right => true,
        ColumnChoice::Main | ColumnChoice::Left => false,
        ColumnChoice::Auto => rule == SplitRule::EveryThirdSidebar && index % 3 == 2,
    }
}
