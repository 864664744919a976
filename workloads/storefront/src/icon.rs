//! Icon primitive, registered into the component registry at startup.

use leptos::prelude::*;

/// The icons the storefront ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconKind {
    Cart,
    Store,
    Search,
    User,
}

impl IconKind {
    pub const ALL: [IconKind; 4] = [
        IconKind::Cart,
        IconKind::Store,
        IconKind::Search,
        IconKind::User,
    ];

    /// Name the icon is registered under.
    pub fn component_name(self) -> &'static str {
        match self {
            IconKind::Cart => "icon-cart",
            IconKind::Store => "icon-store",
            IconKind::Search => "icon-search",
            IconKind::User => "icon-user",
        }
    }

    /// Accessible label.
    pub fn label(self) -> &'static str {
        match self {
            IconKind::Cart => "Cart",
            IconKind::Store => "Store",
            IconKind::Search => "Search",
            IconKind::User => "Account",
        }
    }

    /// SVG path data on a 24x24 grid, stroked.
    pub fn path(self) -> &'static str {
        match self {
            IconKind::Cart => {
                "M9 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2zM20 21a1 1 0 1 0 0-2 1 1 0 0 0 0 2z\
                 M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6"
            }
            IconKind::Store => {
                "M6 2L3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4zM3 6h18M16 10a4 4 0 0 1-8 0"
            }
            IconKind::Search => "M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16zM21 21l-4.35-4.35",
            IconKind::User => {
                "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"
            }
        }
    }
}

#[component]
pub fn Icon(kind: IconKind, #[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let class = class.unwrap_or_else(|| "icon".to_string());

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width="24"
            height="24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=kind.label()
        >
            <path d=kind.path()/>
        </svg>
    }
}
