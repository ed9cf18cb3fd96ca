//! Collapse windowing for the filtered trail.

use crate::trail::TrailEntry;

pub const MAX_CRUMBS_WHEN_COLLAPSED: usize = 10;

/// Window over the filtered trail. `visible` preserves trail order; when
/// collapsed only the tail (the most recent entries, virtual crumb last) is
/// shown and `collapsed_quantity` feeds the "show N more" affordance.
#[derive(Debug, Clone, PartialEq)]
pub struct CollapseWindow<'a> {
    pub visible: &'a [TrailEntry],
    pub collapsed_quantity: usize,
}

/// Pure view over `filtered`; toggling the flag never touches the data.
#[must_use]
pub fn collapse_window(filtered: &[TrailEntry], is_collapsed: bool) -> CollapseWindow<'_> {
    let total = filtered.len();
    let visible = if is_collapsed && total > MAX_CRUMBS_WHEN_COLLAPSED {
        &filtered[total - MAX_CRUMBS_WHEN_COLLAPSED..]
    } else {
        filtered
    };

    CollapseWindow {
        visible,
        collapsed_quantity: total - visible.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::{collapse_window, MAX_CRUMBS_WHEN_COLLAPSED};
    use crate::details::details_for;
    use crate::trail::TrailEntry;
    use vigil_core::breadcrumb::{Breadcrumb, BreadcrumbData, BreadcrumbType};

    fn entries(count: usize) -> Vec<TrailEntry> {
        (0..count)
            .map(|id| TrailEntry {
                crumb: Breadcrumb {
                    id,
                    kind: BreadcrumbType::Http,
                    category: None,
                    message: None,
                    level: None,
                    timestamp: None,
                    event_id: None,
                    data: BreadcrumbData::default(),
                },
                details: details_for(BreadcrumbType::Http),
            })
            .collect()
    }

    #[test]
    fn collapsed_window_keeps_the_most_recent_ten() {
        let filtered = entries(15);
        let window = collapse_window(&filtered, true);

        assert_eq!(window.visible.len(), MAX_CRUMBS_WHEN_COLLAPSED);
        assert_eq!(window.collapsed_quantity, 5);
        assert_eq!(window.visible[0].crumb.id, 5);
        assert_eq!(window.visible[9].crumb.id, 14);
    }

    #[test]
    fn expanding_shows_everything() {
        let filtered = entries(15);
        let window = collapse_window(&filtered, false);

        assert_eq!(window.visible.len(), 15);
        assert_eq!(window.collapsed_quantity, 0);
    }

    #[test]
    fn short_trails_are_never_windowed() {
        let filtered = entries(10);
        let window = collapse_window(&filtered, true);

        assert_eq!(window.visible.len(), 10);
        assert_eq!(window.collapsed_quantity, 0);
    }
}
