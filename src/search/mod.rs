//! Search and grouping over the icon registry.
//!
//! Both halves are pure: [`filter`] narrows a sequence by query, and
//! [`Grouper`] turns the result into labelled buckets for display. Neither
//! touches the registry.
//!
//! ```text
//! IconRegistry ─▶ filter(query) ─▶ Grouper::group(policy) ─▶ view model
//! ```

mod filter;
mod group;

pub use filter::{filter, highlight_range};
pub use group::{
    alphabetical, feature_split, DisplayGroup, FeatureTiers, Group, Grouper, GroupingPolicy, Slice,
    FEATURE_LABELS, UNGROUPED_LABEL,
};
