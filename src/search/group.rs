//! Grouping of filtered results into labelled display buckets.
//!
//! [`Grouper::group`] is a pure function of the filtered sequence and a
//! [`GroupingPolicy`]; the registry reference it holds is only read to resolve
//! fixed slice membership.
//!
//! # Policies
//!
//! - **Alphabetical**: one bucket per uppercase first character, ascending
//! - **`FixedSlices`**: static registry ranges, filtered independently
//! - **`FeatureSplit`**: rank tiers `[0..1]`, `[1..3]`, `[3..]`
//! - **Ungrouped**: a single `All` bucket

use crate::catalog::IconRegistry;
use crate::domain::IconEntry;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Label of the single bucket produced by [`GroupingPolicy::Ungrouped`].
pub const UNGROUPED_LABEL: &str = "All";

/// Tier labels produced by [`GroupingPolicy::FeatureSplit`], in order.
pub const FEATURE_LABELS: [&str; 3] = ["Featured", "Secondary", "Standard"];

/// A human-authored registry range `[start, end)` with a display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

impl Slice {
    #[must_use]
    pub fn new(label: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }
}

/// How a filtered sequence is bucketed for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupingPolicy {
    Alphabetical,
    FixedSlices(Vec<Slice>),
    FeatureSplit,
    Ungrouped,
}

/// One labelled bucket of entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub label: String,
    pub entries: Vec<IconEntry>,
}

/// Ordered label → entries mapping.
///
/// Labels are unique and iterate in the order the policy defines. Every group
/// is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DisplayGroup {
    groups: Vec<Group>,
}

impl DisplayGroup {
    pub(crate) fn push(&mut self, label: impl Into<String>, entries: Vec<IconEntry>) {
        if !entries.is_empty() {
            self.groups.push(Group {
                label: label.into(),
                entries,
            });
        }
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&[IconEntry]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.entries.as_slice())
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of entries across all groups.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}

impl IntoIterator for DisplayGroup {
    type Item = Group;
    type IntoIter = std::vec::IntoIter<Group>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Three contiguous rank tiers of one ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureTiers {
    pub featured: Vec<IconEntry>,
    pub secondary: Vec<IconEntry>,
    pub standard: Vec<IconEntry>,
}

/// Splits `entries` into featured `[0..1]`, secondary `[1..3]` and standard `[3..]`.
///
/// ```rust
/// use zicons::domain::{Glyph, IconEntry};
/// use zicons::search::feature_split;
///
/// let list: Vec<IconEntry> = ["A", "B", "C", "D", "E"]
///     .into_iter()
///     .map(|n| IconEntry::new(n, Glyph::new("*")))
///     .collect();
/// let tiers = feature_split(&list);
/// assert_eq!(tiers.featured.len(), 1);
/// assert_eq!(tiers.secondary.len(), 2);
/// assert_eq!(tiers.standard.len(), 2);
/// ```
#[must_use]
pub fn feature_split(entries: &[IconEntry]) -> FeatureTiers {
    let featured_end = entries.len().min(1);
    let secondary_end = entries.len().min(3);
    FeatureTiers {
        featured: entries[..featured_end].to_vec(),
        secondary: entries[featured_end..secondary_end].to_vec(),
        standard: entries[secondary_end..].to_vec(),
    }
}

/// Buckets entries by the uppercase form of their first character.
#[must_use]
pub fn alphabetical(entries: &[IconEntry]) -> DisplayGroup {
    let mut buckets: BTreeMap<String, Vec<IconEntry>> = BTreeMap::new();
    for entry in entries {
        let key: String = entry
            .name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        buckets.entry(key).or_default().push(entry.clone());
    }

    let mut display = DisplayGroup::default();
    for (label, members) in buckets {
        display.push(label, members);
    }
    display
}

/// Applies grouping policies against a fixed registry.
#[derive(Debug, Clone, Copy)]
pub struct Grouper<'a> {
    registry: &'a IconRegistry,
}

impl<'a> Grouper<'a> {
    #[must_use]
    pub const fn new(registry: &'a IconRegistry) -> Self {
        Self { registry }
    }

    /// Groups a filtered sequence under `policy`.
    ///
    /// The same inputs always produce the same output; neither the registry nor
    /// `filtered` is modified.
    #[must_use]
    pub fn group(&self, filtered: &[IconEntry], policy: &GroupingPolicy) -> DisplayGroup {
        match policy {
            GroupingPolicy::Alphabetical => alphabetical(filtered),
            GroupingPolicy::FixedSlices(slices) => self.slices(filtered, slices),
            GroupingPolicy::FeatureSplit => {
                let tiers = feature_split(filtered);
                let mut display = DisplayGroup::default();
                display.push(FEATURE_LABELS[0], tiers.featured);
                display.push(FEATURE_LABELS[1], tiers.secondary);
                display.push(FEATURE_LABELS[2], tiers.standard);
                display
            }
            GroupingPolicy::Ungrouped => {
                let mut display = DisplayGroup::default();
                display.push(UNGROUPED_LABEL, filtered.to_vec());
                display
            }
        }
    }

    /// Keeps, for each slice, the filtered entries whose registry position
    /// falls inside the slice range. Slice order and identity come from
    /// configuration; a slice with no surviving members is omitted.
    fn slices(&self, filtered: &[IconEntry], slices: &[Slice]) -> DisplayGroup {
        let visible: HashSet<&str> = filtered.iter().map(|e| e.name.as_str()).collect();
        let base = self.registry.entries();

        let mut display = DisplayGroup::default();
        for slice in slices {
            let start = slice.start.min(base.len());
            let end = slice.end.min(base.len()).max(start);
            let members: Vec<IconEntry> = base[start..end]
                .iter()
                .filter(|entry| visible.contains(entry.name.as_str()))
                .cloned()
                .collect();
            display.push(slice.label.clone(), members);
        }
        display
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::filter;

    fn entries(names: &[&str]) -> Vec<IconEntry> {
        names
            .iter()
            .map(|n| IconEntry::new(*n, crate::domain::Glyph::new("*")))
            .collect()
    }

    fn registry(names: &[&str]) -> IconRegistry {
        IconRegistry::load(&entries(names), crate::catalog::DEFAULT_CAP).unwrap()
    }

    fn names(entries: &[IconEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn alphabetical_single_bucket_scenario() {
        let reg = registry(&["Home", "House", "Heart", "Star"]);
        let filtered = filter(reg.entries(), "h");
        let display = Grouper::new(&reg).group(&filtered, &GroupingPolicy::Alphabetical);
        assert_eq!(display.labels(), vec!["H"]);
        assert_eq!(names(display.get("H").unwrap()), vec!["Home", "House", "Heart"]);
    }

    #[test]
    fn alphabetical_is_complete_and_sorted() {
        let reg = registry(&["zap", "Anchor", "bell", "Atom", "Bomb", "Zoom"]);
        let display = Grouper::new(&reg).group(reg.entries(), &GroupingPolicy::Alphabetical);

        assert_eq!(display.labels(), vec!["A", "B", "Z"]);
        assert_eq!(display.entry_count(), reg.len());
        assert!(display.groups().iter().all(|g| !g.entries.is_empty()));
        for group in display.groups() {
            for entry in &group.entries {
                assert!(entry.name.to_uppercase().starts_with(&group.label));
            }
        }
        assert_eq!(names(display.get("Z").unwrap()), vec!["zap", "Zoom"]);
    }

    #[test]
    fn alphabetical_empty_input_has_no_buckets() {
        assert!(alphabetical(&[]).is_empty());
    }

    #[test]
    fn feature_split_five_scenario() {
        let tiers = feature_split(&entries(&["A", "B", "C", "D", "E"]));
        assert_eq!(names(&tiers.featured), vec!["A"]);
        assert_eq!(names(&tiers.secondary), vec!["B", "C"]);
        assert_eq!(names(&tiers.standard), vec!["D", "E"]);
    }

    #[test]
    fn feature_split_sizes_partition_every_length() {
        let pool = ["A", "B", "C", "D", "E", "F", "G"];
        for len in 0..=pool.len() {
            let list = entries(&pool[..len]);
            let tiers = feature_split(&list);
            assert_eq!(tiers.featured.len(), len.min(1));
            assert_eq!(tiers.secondary.len(), len.saturating_sub(1).min(2));
            assert_eq!(tiers.standard.len(), len.saturating_sub(3));

            let rejoined: Vec<IconEntry> = tiers
                .featured
                .iter()
                .chain(&tiers.secondary)
                .chain(&tiers.standard)
                .cloned()
                .collect();
            assert_eq!(rejoined, list);
        }
    }

    #[test]
    fn feature_split_policy_omits_empty_tiers() {
        let reg = registry(&["A", "B"]);
        let display = Grouper::new(&reg).group(reg.entries(), &GroupingPolicy::FeatureSplit);
        assert_eq!(display.labels(), vec!["Featured", "Secondary"]);
    }

    #[test]
    fn fixed_slices_filter_within_membership() {
        let reg = registry(&["Home", "Star", "House", "Bell", "Heart", "Zap"]);
        let policy = GroupingPolicy::FixedSlices(vec![
            Slice::new("Recent", 0, 2),
            Slice::new("Material", 2, 4),
            Slice::new("UI", 4, 6),
        ]);
        let grouper = Grouper::new(&reg);

        let all = grouper.group(reg.entries(), &policy);
        assert_eq!(all.labels(), vec!["Recent", "Material", "UI"]);

        let filtered = filter(reg.entries(), "h");
        let display = grouper.group(&filtered, &policy);
        assert_eq!(display.labels(), vec!["Recent", "Material", "UI"]);
        assert_eq!(names(display.get("Recent").unwrap()), vec!["Home"]);
        assert_eq!(names(display.get("Material").unwrap()), vec!["House"]);
        assert_eq!(names(display.get("UI").unwrap()), vec!["Heart"]);

        let filtered = filter(reg.entries(), "zap");
        assert_eq!(grouper.group(&filtered, &policy).labels(), vec!["UI"]);
    }

    #[test]
    fn fixed_slices_clamp_to_registry_bounds() {
        let reg = registry(&["A", "B", "C"]);
        let policy = GroupingPolicy::FixedSlices(vec![
            Slice::new("Head", 0, 2),
            Slice::new("Tail", 2, 20),
            Slice::new("Beyond", 10, 20),
        ]);
        let display = Grouper::new(&reg).group(reg.entries(), &policy);
        assert_eq!(display.labels(), vec!["Head", "Tail"]);
        assert_eq!(names(display.get("Tail").unwrap()), vec!["C"]);
    }

    #[test]
    fn ungrouped_wraps_everything_in_one_bucket() {
        let reg = registry(&["B", "A"]);
        let display = Grouper::new(&reg).group(reg.entries(), &GroupingPolicy::Ungrouped);
        assert_eq!(display.labels(), vec![UNGROUPED_LABEL]);
        assert_eq!(names(display.get(UNGROUPED_LABEL).unwrap()), vec!["B", "A"]);
    }

    #[test]
    fn grouping_is_deterministic() {
        let reg = registry(&["Home", "House", "Heart", "Star", "Anchor"]);
        let grouper = Grouper::new(&reg);
        let filtered = filter(reg.entries(), "a");
        for policy in [
            GroupingPolicy::Alphabetical,
            GroupingPolicy::FeatureSplit,
            GroupingPolicy::Ungrouped,
            GroupingPolicy::FixedSlices(vec![Slice::new("First", 0, 3)]),
        ] {
            assert_eq!(grouper.group(&filtered, &policy), grouper.group(&filtered, &policy));
        }
    }
}
