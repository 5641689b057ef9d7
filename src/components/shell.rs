use dioxus::prelude::*;
use crate::components::footer::Footer;
use crate::components::icons::NavGlyph;
use crate::components::nav_links::NavLinks;
use crate::components::settings_menu::SettingsMenu;
use crate::components::wallet_button::WalletButton;
use crate::config::ShellConfig;
use crate::nav::{active_entry, LinkVariant, NavIcon, NAV_ENTRIES};
use crate::wallet::ConnectionState;
use crate::Route;

/// Persistent layout around every page: header with navigation and wallet
/// button, routed content, footer.
#[component]
pub fn Shell() -> Element {
    let config = use_context::<ShellConfig>();
    let current_path = use_route::<Route>().to_string();

    // Owned by this shell instance, starts disconnected on every load.
    let mut connection = use_signal(ConnectionState::default);

    let active = active_entry(NAV_ENTRIES, &current_path).map(|entry| entry.label);
    tracing::debug!(path = %current_path, ?active, "rendering shell");

    let on_toggle = move |_: ()| {
        let from = connection();
        let to = from.toggled();
        tracing::debug!(?from, ?to, "wallet toggle");
        connection.set(to);
    };

    rsx! {
        div { class: "shell min-h-screen",
            header { class: "shell-header glass-effect",
                div { class: "page-container",
                    div { class: "shell-header-row",
                        Link { to: Route::Swap {}, class: "shell-logo",
                            div { class: "logo-mark glow-effect",
                                NavGlyph { icon: NavIcon::ArrowRightLeft, class: "icon icon--lg" }
                            }
                            div {
                                h1 { class: "logo-text", "{config.brand_name}" }
                                p { class: "logo-tagline", "{config.tagline}" }
                            }
                        }

                        div { class: "desktop-only",
                            NavLinks { current_path: current_path.clone(), variant: LinkVariant::Desktop }
                        }

                        div { class: "shell-actions",
                            SettingsMenu {}
                            WalletButton { state: connection(), on_toggle: on_toggle }
                        }
                    }

                    div { class: "mobile-only",
                        NavLinks { current_path: current_path.clone(), variant: LinkVariant::Mobile }
                    }
                }
            }

            main { class: "page-container shell-main",
                Outlet::<Route> {}
            }

            Footer {}
        }
    }
}
