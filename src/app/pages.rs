//! Page presets.
//!
//! Every page drives the same engine (registry, filter, grouper, selection,
//! clipboard). A preset only chooses the grouping policy, the theme, what
//! Enter does, and whether the page shows a detail drawer.
//!
//! | id           | grouping                          | Enter          |
//! |--------------|-----------------------------------|----------------|
//! | `catalog`    | alphabetical                      | open drawer    |
//! | `broadsheet` | Recent / Material / UI 24px       | open in catalog|
//! | `showcase`   | five slices, feature tiers inside | open in catalog|
//! | `daily` ..   | one flat bucket                   | copy name      |

use crate::domain::IconEntry;
use crate::search::{DisplayGroup, Grouper, GroupingPolicy, Slice};

/// Identifier of the page holding the detail drawer.
pub const DETAIL_PAGE: &str = "catalog";

/// What Enter does on the row under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Select the entry and open the drawer in place.
    OpenDetail,
    /// Switch to the detail page with the entry open.
    Route,
    /// Copy the entry name.
    CopyName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: &'static str,
    pub title: &'static str,
    /// Built-in theme name used unless the configuration overrides it.
    pub theme: &'static str,
    pub policy: GroupingPolicy,
    /// Split every group into feature tiers after applying `policy`.
    pub feature_split: bool,
    pub has_drawer: bool,
    pub primary: PrimaryAction,
}

impl Page {
    fn flat(id: &'static str, title: &'static str) -> Self {
        Self {
            id,
            title,
            theme: id,
            policy: GroupingPolicy::Ungrouped,
            feature_split: false,
            has_drawer: false,
            primary: PrimaryAction::CopyName,
        }
    }

    /// Groups `filtered` the way this page displays it.
    #[must_use]
    pub fn group(&self, grouper: &Grouper<'_>, filtered: &[IconEntry]) -> DisplayGroup {
        let outer = grouper.group(filtered, &self.policy);
        if !self.feature_split {
            return outer;
        }

        let mut nested = DisplayGroup::default();
        for section in outer {
            for tier in grouper.group(&section.entries, &GroupingPolicy::FeatureSplit) {
                nested.push(format!("{} · {}", section.label, tier.label), tier.entries);
            }
        }
        nested
    }
}

/// All presets in Tab order.
#[must_use]
pub fn presets() -> Vec<Page> {
    vec![
        Page {
            id: DETAIL_PAGE,
            title: "Collection",
            theme: "catalog",
            policy: GroupingPolicy::Alphabetical,
            feature_split: false,
            has_drawer: true,
            primary: PrimaryAction::OpenDetail,
        },
        Page {
            id: "broadsheet",
            title: "Collections",
            theme: "broadsheet",
            policy: GroupingPolicy::FixedSlices(vec![
                Slice::new("Recent", 0, 4),
                Slice::new("Material", 4, 8),
                Slice::new("UI 24px", 8, 20),
            ]),
            feature_split: false,
            has_drawer: false,
            primary: PrimaryAction::Route,
        },
        Page {
            id: "showcase",
            title: "Showcase",
            theme: "showcase",
            policy: GroupingPolicy::FixedSlices(vec![
                Slice::new("Recent Additions", 0, 5),
                Slice::new("Material Design", 5, 10),
                Slice::new("User Interface", 10, 15),
                Slice::new("Brand Logos", 15, 20),
                Slice::new("System Icons", 20, 25),
            ]),
            feature_split: true,
            has_drawer: false,
            primary: PrimaryAction::Route,
        },
        Page::flat("daily", "The Daily Glyph"),
        Page::flat("bauhaus", "Bauhaus"),
        Page::flat("candy", "Candy"),
        Page::flat("darkroom", "Darkroom"),
        Page::flat("ink", "Ink"),
        Page::flat("terminal", "Terminal"),
    ]
}

/// Position of `id` in [`presets`].
#[must_use]
pub fn position(pages: &[Page], id: &str) -> Option<usize> {
    pages.iter().position(|page| page.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::IconRegistry;
    use crate::domain::Glyph;
    use std::collections::HashSet;

    fn registry(count: usize) -> IconRegistry {
        let entries: Vec<IconEntry> = (0..count)
            .map(|i| IconEntry::new(format!("Icon{i:02}"), Glyph::new("*")))
            .collect();
        IconRegistry::load(&entries, 800).unwrap()
    }

    #[test]
    fn nine_unique_presets() {
        let pages = presets();
        assert_eq!(pages.len(), 9);
        let ids: HashSet<&str> = pages.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(position(&pages, DETAIL_PAGE), Some(0));
    }

    #[test]
    fn only_detail_page_has_drawer() {
        for page in presets() {
            assert_eq!(page.has_drawer, page.id == DETAIL_PAGE, "{}", page.id);
        }
    }

    #[test]
    fn showcase_nests_feature_tiers_in_slices() {
        let reg = registry(30);
        let pages = presets();
        let showcase = &pages[position(&pages, "showcase").unwrap()];
        let display = showcase.group(&Grouper::new(&reg), reg.entries());

        let labels = display.labels();
        assert_eq!(labels.len(), 15);
        assert_eq!(labels[0], "Recent Additions · Featured");
        assert_eq!(labels[1], "Recent Additions · Secondary");
        assert_eq!(labels[2], "Recent Additions · Standard");
        assert_eq!(display.get("Recent Additions · Standard").unwrap().len(), 2);
        assert_eq!(display.entry_count(), 25);
    }

    #[test]
    fn broadsheet_uses_fixed_ranges() {
        let reg = registry(30);
        let pages = presets();
        let broadsheet = &pages[position(&pages, "broadsheet").unwrap()];
        let display = broadsheet.group(&Grouper::new(&reg), reg.entries());
        assert_eq!(display.labels(), vec!["Recent", "Material", "UI 24px"]);
        assert_eq!(display.get("UI 24px").unwrap().len(), 12);
    }
}
