//! Presentation metadata per breadcrumb type.

use vigil_core::BreadcrumbType;

/// Row and facet presentation tokens for one breadcrumb type. The renderer
/// maps tokens to theme colors and icon components; this crate only picks
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreadcrumbDetails {
    pub color: &'static str,
    pub border_color: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Total lookup; the `default` row doubles as the fallback since every
/// unknown raw type normalizes to `BreadcrumbType::Default`.
#[must_use]
pub const fn details_for(kind: BreadcrumbType) -> BreadcrumbDetails {
    match kind {
        BreadcrumbType::Navigation => BreadcrumbDetails {
            color: "green300",
            border_color: "green400",
            icon: "icon-location",
            description: "Navigation",
        },
        BreadcrumbType::Http => BreadcrumbDetails {
            color: "green300",
            border_color: "green400",
            icon: "icon-switch",
            description: "HTTP request",
        },
        BreadcrumbType::Info => BreadcrumbDetails {
            color: "blue300",
            border_color: "blue400",
            icon: "icon-info",
            description: "Info",
        },
        BreadcrumbType::Debug => BreadcrumbDetails {
            color: "purple300",
            border_color: "purple400",
            icon: "icon-sliders",
            description: "Debug",
        },
        BreadcrumbType::Message => BreadcrumbDetails {
            color: "red300",
            border_color: "red400",
            icon: "icon-chat",
            description: "Message",
        },
        BreadcrumbType::Query => BreadcrumbDetails {
            color: "purple300",
            border_color: "purple400",
            icon: "icon-stack",
            description: "Query",
        },
        BreadcrumbType::Ui => BreadcrumbDetails {
            color: "purple300",
            border_color: "purple400",
            icon: "icon-cursor",
            description: "User Action",
        },
        BreadcrumbType::User => BreadcrumbDetails {
            color: "purple300",
            border_color: "purple400",
            icon: "icon-user",
            description: "User",
        },
        BreadcrumbType::Exception => BreadcrumbDetails {
            color: "red300",
            border_color: "red400",
            icon: "icon-fire",
            description: "Exception",
        },
        BreadcrumbType::Warning => BreadcrumbDetails {
            color: "orange300",
            border_color: "orange400",
            icon: "icon-warning",
            description: "Warning",
        },
        BreadcrumbType::Error => BreadcrumbDetails {
            color: "red300",
            border_color: "red400",
            icon: "icon-fire",
            description: "Error",
        },
        BreadcrumbType::Default => BreadcrumbDetails {
            color: "gray300",
            border_color: "gray400",
            icon: "icon-terminal",
            description: "Default",
        },
    }
}
