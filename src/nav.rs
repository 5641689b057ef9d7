//! Navigation entries and active-route resolution.
//!
//! The resolver only ever sees plain path strings. Turning a router location
//! into a path is the caller's job, so nothing here depends on dioxus.

use std::collections::HashSet;

/// Opaque glyph tag for a menu entry. Drawn by `components::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavIcon {
    ArrowRightLeft,
    Droplets,
    Wallet,
    BarChart3,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
}

impl NavEntry {
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.path)
    }
}

/// Menu entries in display order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { label: "Swap", path: "/Swap", icon: NavIcon::ArrowRightLeft },
    NavEntry { label: "Pools", path: "/Pools", icon: NavIcon::Droplets },
    NavEntry { label: "Portfolio", path: "/Portfolio", icon: NavIcon::Wallet },
    NavEntry { label: "Analytics", path: "/Analytics", icon: NavIcon::BarChart3 },
];

/// Build the URL of a named page: `"Swap"` -> `"/Swap"`, `"Add Liquidity"` -> `"/Add-Liquidity"`.
pub fn create_page_url(page_name: &str) -> String {
    format!("/{}", page_name.replace(' ', "-"))
}

/// Exact, case-sensitive comparison. Paths must already be normalized.
pub fn is_active(current_path: &str, entry_path: &str) -> bool {
    current_path == entry_path
}

/// The entry highlighted for `current_path`, if any.
pub fn active_entry<'a>(entries: &'a [NavEntry], current_path: &str) -> Option<&'a NavEntry> {
    entries.iter().find(|entry| entry.is_active(current_path))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavListError {
    #[error("navigation path {0:?} does not start with '/'")]
    RelativePath(&'static str),
    #[error("navigation path {0:?} appears more than once")]
    DuplicatePath(&'static str),
    #[error("navigation path {path:?} is not the page URL of {label:?}")]
    PathMismatch { label: &'static str, path: &'static str },
}

/// Checks that paths are absolute, pairwise distinct and built from their
/// labels. Distinct paths keep at most one entry active at a time.
pub fn validate_entries(entries: &[NavEntry]) -> Result<(), NavListError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !entry.path.starts_with('/') {
            return Err(NavListError::RelativePath(entry.path));
        }
        if !seen.insert(entry.path) {
            return Err(NavListError::DuplicatePath(entry.path));
        }
        if entry.path != create_page_url(entry.label) {
            return Err(NavListError::PathMismatch { label: entry.label, path: entry.path });
        }
    }
    Ok(())
}

/// Which navigation strip a link is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    Desktop,
    Mobile,
}

pub fn nav_link_class(active: bool, variant: LinkVariant) -> &'static str {
    match (variant, active) {
        (LinkVariant::Desktop, true) => "nav-link nav-link--active",
        (LinkVariant::Desktop, false) => "nav-link",
        (LinkVariant::Mobile, true) => "mobile-nav-link mobile-nav-link--active",
        (LinkVariant::Mobile, false) => "mobile-nav-link",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_path_activates_only_swap() {
        let active: Vec<_> = NAV_ENTRIES
            .iter()
            .filter(|e| e.is_active("/Swap"))
            .map(|e| e.label)
            .collect();
        assert_eq!(active, vec!["Swap"]);
        assert_eq!(active_entry(NAV_ENTRIES, "/Swap").map(|e| e.label), Some("Swap"));
    }

    #[test]
    fn test_unknown_path_activates_nothing() {
        assert!(NAV_ENTRIES.iter().all(|e| !e.is_active("/unknown")));
        assert_eq!(active_entry(NAV_ENTRIES, "/unknown"), None);
    }

    #[test]
    fn test_matching_is_exact() {
        assert!(is_active("/Pools", "/Pools"));
        assert!(!is_active("/pools", "/Pools"), "matching must be case-sensitive");
        assert!(!is_active("/Pools/", "/Pools"), "no trailing-slash normalization");
        assert!(!is_active("/Pools/eth-usdc", "/Pools"), "no prefix matching");
        assert!(!is_active("", "/Pools"));
    }

    #[test]
    fn test_at_most_one_entry_active() {
        let probes = ["/Swap", "/Pools", "/Portfolio", "/Analytics", "/", "/unknown", "/Swap/"];
        for path in probes {
            let count = NAV_ENTRIES.iter().filter(|e| e.is_active(path)).count();
            assert!(count <= 1, "{path} activated {count} entries");
        }
        for entry in NAV_ENTRIES {
            assert_eq!(active_entry(NAV_ENTRIES, entry.path), Some(entry));
        }
    }

    #[test]
    fn test_entries_are_valid_and_ordered() {
        assert_eq!(validate_entries(NAV_ENTRIES), Ok(()));
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Swap", "Pools", "Portfolio", "Analytics"]);
        for entry in NAV_ENTRIES {
            assert_eq!(entry.path, create_page_url(entry.label));
        }
    }

    #[test]
    fn test_validate_rejects_bad_lists() {
        let dup = [NAV_ENTRIES[0], NAV_ENTRIES[0]];
        assert_eq!(validate_entries(&dup), Err(NavListError::DuplicatePath("/Swap")));

        let relative = [NavEntry { label: "Swap", path: "Swap", icon: NavIcon::ArrowRightLeft }];
        assert_eq!(validate_entries(&relative), Err(NavListError::RelativePath("Swap")));

        let mismatched = [NavEntry { label: "Swap", path: "/Trade", icon: NavIcon::ArrowRightLeft }];
        assert_eq!(
            validate_entries(&mismatched),
            Err(NavListError::PathMismatch { label: "Swap", path: "/Trade" })
        );
    }

    #[test]
    fn test_create_page_url_hyphenates_spaces() {
        assert_eq!(create_page_url("Swap"), "/Swap");
        assert_eq!(create_page_url("Add Liquidity"), "/Add-Liquidity");
    }

    #[test]
    fn test_link_class_depends_on_activity() {
        assert_ne!(
            nav_link_class(true, LinkVariant::Desktop),
            nav_link_class(false, LinkVariant::Desktop)
        );
        assert!(nav_link_class(true, LinkVariant::Mobile).contains("--active"));
        assert!(!nav_link_class(false, LinkVariant::Mobile).contains("--active"));
    }
}
