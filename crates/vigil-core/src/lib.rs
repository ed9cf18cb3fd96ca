//! vigil-core: breadcrumb data model and normalization for the vigil error console.

pub mod breadcrumb;
pub mod event;
pub mod normalize;
pub mod virtual_crumb;

pub use breadcrumb::{Breadcrumb, BreadcrumbData, BreadcrumbType, RawBreadcrumb};
pub use event::Event;
pub use normalize::{normalize_breadcrumb, normalize_trail};

/// Stable crate label used by bootstrap smoke tests.
#[must_use]
pub fn crate_label() -> &'static str {
    "vigil-core"
}
