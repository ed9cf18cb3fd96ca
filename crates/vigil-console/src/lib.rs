//! vigil-console: renderer-facing view-state for the vigil error console.
//!
//! Owns the breadcrumb trail pipeline (facets, search, collapse window) and
//! the data-scrubbing rule list editor. Rendering, the rule edit modal, and
//! data fetching live elsewhere; this crate only holds the state a renderer
//! reads and the reducers its event handlers drive.

pub mod collapse;
pub mod details;
pub mod rules;
pub mod trail;

pub use collapse::{collapse_window, CollapseWindow, MAX_CRUMBS_WHEN_COLLAPSED};
pub use details::{details_for, BreadcrumbDetails};
pub use rules::{Rule, RuleAction, RuleEditorState, RuleEffect};
pub use trail::{FacetGroup, FilterFacet, TrailAction, TrailEntry, TrailState};

/// Stable crate label used by bootstrap smoke tests.
#[must_use]
pub fn crate_label() -> &'static str {
    "vigil-console"
}

#[cfg(test)]
mod tests {
    use super::crate_label;

    #[test]
    fn crate_label_is_stable() {
        assert_eq!(crate_label(), "vigil-console");
    }
}
