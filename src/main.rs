mod components;
mod config;
mod nav;
mod wallet;

use components::pages::{AnalyticsPage, NotFoundPage, PoolsPage, PortfolioPage, SwapPage};
use components::shell::Shell;
use config::ShellConfig;

use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Swap {})]
    #[layout(Shell)]
        #[route("/Swap", SwapPage)]
        Swap {},
        #[route("/Pools", PoolsPage)]
        Pools {},
        #[route("/Portfolio", PortfolioPage)]
        Portfolio {},
        #[route("/Analytics", AnalyticsPage)]
        Analytics {},
        #[route("/:..segments", NotFoundPage)]
        NotFound { segments: Vec<String> },
}

fn init_logging() {
    // RUST_LOG takes over on native targets, otherwise the dioxus logger
    #[cfg(not(target_arch = "wasm32"))]
    {
        use tracing_subscriber::EnvFilter;
        if std::env::var_os("RUST_LOG").is_some()
            && tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::from_default_env())
                .with_target(true)
                .try_init()
                .is_ok()
        {
            return;
        }
    }

    #[cfg(debug_assertions)]
    let level = dioxus::logger::tracing::Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = dioxus::logger::tracing::Level::INFO;

    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger failed to init: {e}");
    }
}

fn main() {
    init_logging();

    if let Err(e) = nav::validate_entries(nav::NAV_ENTRIES) {
        tracing::error!("navigation list is inconsistent: {e}");
    }

    tracing::info!(entries = nav::NAV_ENTRIES.len(), "launching shell");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(ShellConfig::load);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::nav_links::routed_entries;
    use crate::nav::{active_entry, NAV_ENTRIES};

    #[test]
    fn test_every_nav_entry_has_a_route() {
        let routed = routed_entries();
        assert_eq!(routed.len(), NAV_ENTRIES.len());
        for (entry, route) in routed {
            assert_eq!(route.to_string(), entry.path, "router and menu disagree on {}", entry.label);
        }
    }

    #[test]
    fn test_route_paths_resolve_to_their_entry() {
        assert_eq!(active_entry(NAV_ENTRIES, &Route::Pools {}.to_string()).map(|e| e.label), Some("Pools"));
        assert_eq!(
            active_entry(NAV_ENTRIES, &Route::Analytics {}.to_string()).map(|e| e.label),
            Some("Analytics")
        );
    }

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        let route: Route = "/unknown".parse().expect("catch-all route should match");
        assert!(matches!(route, Route::NotFound { .. }), "got {route:?}");
        assert_eq!(active_entry(NAV_ENTRIES, &route.to_string()), None);
    }
}
