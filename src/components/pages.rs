//! Placeholder pages mounted under the shell. Trading, pool and portfolio
//! logic live elsewhere; these only give each route something to render.

use dioxus::prelude::*;
use crate::Route;

#[component]
fn PagePlaceholder(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "panel animate-fade-in",
            div { class: "panel-header",
                h2 { class: "page-title gradient-text", "{title}" }
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

#[component]
pub fn SwapPage() -> Element {
    rsx! {
        PagePlaceholder { title: "Swap", subtitle: "Trade tokens instantly on Base" }
    }
}

#[component]
pub fn PoolsPage() -> Element {
    rsx! {
        PagePlaceholder { title: "Pools", subtitle: "Provide liquidity and earn fees" }
    }
}

#[component]
pub fn PortfolioPage() -> Element {
    rsx! {
        PagePlaceholder { title: "Portfolio", subtitle: "Your positions at a glance" }
    }
}

#[component]
pub fn AnalyticsPage() -> Element {
    rsx! {
        PagePlaceholder { title: "Analytics", subtitle: "Volume, liquidity and top pairs" }
    }
}

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "no page for route");

    rsx! {
        div { class: "panel empty-state",
            p { class: "empty-state-title", "Page not found" }
            p { class: "empty-state-text font-mono", "{path}" }
            Link { to: Route::Swap {}, class: "btn btn-wallet", "Back to Swap" }
        }
    }
}
