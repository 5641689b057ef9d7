use dioxus::prelude::*;
use crate::components::icons::NavGlyph;
use crate::nav::{nav_link_class, LinkVariant, NavEntry, NAV_ENTRIES};
use crate::Route;

/// Pairs each menu entry with its router target. Entries whose path the
/// router does not know are skipped with a warning.
pub fn routed_entries() -> Vec<(&'static NavEntry, Route)> {
    NAV_ENTRIES
        .iter()
        .filter_map(|entry| match entry.path.parse::<Route>() {
            Ok(route) => Some((entry, route)),
            Err(e) => {
                tracing::warn!(path = entry.path, "navigation entry has no route: {e}");
                None
            }
        })
        .collect()
}

/// One strip of navigation links. Highlighting comes from `current_path`,
/// not from the router's own active-link matching.
#[component]
pub fn NavLinks(current_path: String, variant: LinkVariant) -> Element {
    let links: Vec<_> = routed_entries()
        .into_iter()
        .map(|(entry, route)| (entry, route, nav_link_class(entry.is_active(&current_path), variant)))
        .collect();

    let (container_class, label_class) = match variant {
        LinkVariant::Desktop => ("nav-links", "nav-link-label"),
        LinkVariant::Mobile => ("mobile-nav", "mobile-nav-label"),
    };

    rsx! {
        nav { class: "{container_class}",
            for (entry, route, class) in links {
                Link {
                    key: "{entry.path}",
                    to: route,
                    class: "{class}",
                    NavGlyph { icon: entry.icon, class: "icon icon--sm" }
                    span { class: "{label_class}", "{entry.label}" }
                }
            }
        }
    }
}
