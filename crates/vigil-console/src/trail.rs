//! Breadcrumb trail view-state: facets plus the two-stage filter pipeline.
//!
//! Filtering runs as two explicitly separate passes. Stage one narrows the
//! full trail by checked type facets into `facet_filtered`. Stage two narrows
//! `search_base` — a snapshot of stage one captured when a search begins — by
//! case-folded substring. The passes are deliberately not composed: toggling
//! a facet while a search is active replaces the display set with the facet
//! pass alone. Level facets are tracked for the filter picker but do not
//! participate in filtering yet.

use vigil_core::breadcrumb::{Breadcrumb, RawBreadcrumb};
use vigil_core::event::Event;
use vigil_core::normalize_trail;

use crate::collapse::{collapse_window, CollapseWindow};
use crate::details::{details_for, BreadcrumbDetails};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetGroup {
    Type,
    Level,
}

/// One filter-picker entry, derived from the values observed in the trail.
/// `is_checked` defaults to true on load and is owner-mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterFacet {
    pub group: FacetGroup,
    pub value: String,
    pub is_checked: bool,
    pub description: String,
}

/// One displayable trail entry: the normalized crumb plus its presentation
/// details.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailEntry {
    pub crumb: Breadcrumb,
    pub details: BreadcrumbDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailAction {
    SetFacetChecked {
        group: FacetGroup,
        value: String,
        is_checked: bool,
    },
    SetSearchTerm(String),
    /// Clear the term and re-collapse the trail (the search bar's clean-up
    /// affordance).
    ClearSearch,
    ToggleCollapse,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrailState {
    /// Full normalized + enriched trail; rebuilt wholesale by `load`, never
    /// mutated in place.
    pub breadcrumbs: Vec<TrailEntry>,
    pub facets: Vec<FilterFacet>,
    pub search_term: String,
    /// Stage one output: trail narrowed by checked type facets.
    pub facet_filtered: Vec<TrailEntry>,
    /// Stage two base: `facet_filtered` as of the moment the current search
    /// began.
    pub search_base: Vec<TrailEntry>,
    /// Display set after both passes.
    pub filtered: Vec<TrailEntry>,
    pub is_collapsed: bool,
}

impl Default for TrailState {
    fn default() -> Self {
        Self {
            breadcrumbs: Vec::new(),
            facets: Vec::new(),
            search_term: String::new(),
            facet_filtered: Vec::new(),
            search_base: Vec::new(),
            filtered: Vec::new(),
            is_collapsed: true,
        }
    }
}

impl TrailState {
    /// Rebuild the whole state from the parent event and its raw trail.
    /// Facets carry one entry per distinct type (first-seen order, virtual
    /// crumb included), then one per distinct observed level.
    #[must_use]
    pub fn load(event: &Event, values: &[RawBreadcrumb]) -> Self {
        let breadcrumbs: Vec<TrailEntry> = normalize_trail(values, event)
            .into_iter()
            .map(|crumb| TrailEntry {
                details: details_for(crumb.kind),
                crumb,
            })
            .collect();

        let mut facets: Vec<FilterFacet> = Vec::new();
        let mut level_facets: Vec<FilterFacet> = Vec::new();
        for entry in &breadcrumbs {
            let kind = entry.crumb.kind.as_str();
            if !facets.iter().any(|facet| facet.value == kind) {
                facets.push(FilterFacet {
                    group: FacetGroup::Type,
                    value: kind.to_owned(),
                    is_checked: true,
                    description: entry.details.description.to_owned(),
                });
            }
            if let Some(level) = entry.crumb.level.as_deref() {
                if !level_facets.iter().any(|facet| facet.value == level) {
                    level_facets.push(FilterFacet {
                        group: FacetGroup::Level,
                        value: level.to_owned(),
                        is_checked: true,
                        description: level.to_owned(),
                    });
                }
            }
        }
        facets.extend(level_facets);

        Self {
            facet_filtered: breadcrumbs.clone(),
            search_base: breadcrumbs.clone(),
            filtered: breadcrumbs.clone(),
            breadcrumbs,
            facets,
            ..Self::default()
        }
    }

    /// Run one state transition. Handlers run to completion; every dependent
    /// field is settled before this returns.
    pub fn apply(&mut self, action: TrailAction) {
        match action {
            TrailAction::SetFacetChecked {
                group,
                value,
                is_checked,
            } => {
                if let Some(facet) = self
                    .facets
                    .iter_mut()
                    .find(|facet| facet.group == group && facet.value == value)
                {
                    facet.is_checked = is_checked;
                }
                self.facet_filtered = facet_pass(&self.breadcrumbs, &self.facets);
                // An active search term is not re-applied here; the next
                // search keystroke still narrows the earlier snapshot.
                self.filtered = self.facet_filtered.clone();
            }
            TrailAction::SetSearchTerm(term) => self.set_search_term(&term),
            TrailAction::ClearSearch => {
                self.set_search_term("");
                self.is_collapsed = true;
            }
            TrailAction::ToggleCollapse => self.is_collapsed = !self.is_collapsed,
        }
    }

    /// Display window for the renderer.
    #[must_use]
    pub fn window(&self) -> CollapseWindow<'_> {
        collapse_window(&self.filtered, self.is_collapsed)
    }

    fn set_search_term(&mut self, term: &str) {
        let term = term.to_lowercase();
        if term.is_empty() && self.search_term.is_empty() {
            return;
        }
        if self.search_term.is_empty() && !term.is_empty() {
            self.search_base = self.facet_filtered.clone();
        }
        self.search_term = term;
        self.filtered = search_pass(&self.search_base, &self.search_term);
    }
}

/// Stage one: a crumb passes iff a checked `Type` facet matches its kind.
/// A kind with no facet at all is excluded (fail-closed). Level facets are
/// ignored here.
fn facet_pass(breadcrumbs: &[TrailEntry], facets: &[FilterFacet]) -> Vec<TrailEntry> {
    breadcrumbs
        .iter()
        .filter(|entry| {
            facets
                .iter()
                .find(|facet| {
                    facet.group == FacetGroup::Type && facet.value == entry.crumb.kind.as_str()
                })
                .is_some_and(|facet| facet.is_checked)
        })
        .cloned()
        .collect()
}

/// Stage two: case-folded substring match over category, message, level, and
/// timestamp. An empty term yields the base untouched.
fn search_pass(base: &[TrailEntry], term: &str) -> Vec<TrailEntry> {
    if term.is_empty() {
        return base.to_vec();
    }

    base.iter()
        .filter(|entry| {
            [
                entry.crumb.category.as_deref(),
                entry.crumb.message.as_deref(),
                entry.crumb.level.as_deref(),
                entry.crumb.timestamp.as_deref(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(term))
        })
        .cloned()
        .collect()
}
