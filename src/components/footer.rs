use dioxus::prelude::*;
use crate::components::icons::NavGlyph;
use crate::config::ShellConfig;
use crate::nav::NavIcon;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<ShellConfig>();

    rsx! {
        footer { class: "shell-footer",
            div { class: "page-container shell-footer-inner",
                div { class: "shell-footer-brand",
                    div { class: "logo-mark logo-mark--sm",
                        NavGlyph { icon: NavIcon::ArrowRightLeft, class: "icon icon--sm" }
                    }
                    span { class: "shell-footer-text", "{config.footer_blurb}" }
                }
                div { class: "shell-footer-links",
                    for link in config.footer_links.iter() {
                        a { key: "{link.label}", href: "{link.href}", class: "footer-link", "{link.label}" }
                    }
                }
            }
        }
    }
}
