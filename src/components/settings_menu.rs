use dioxus::prelude::*;
use crate::components::icons::NavGlyph;
use crate::nav::NavIcon;

const SETTINGS_ITEMS: &[&str] = &["Settings", "Language", "Theme"];

/// Settings dropdown. The items have no behaviour yet; picking one just closes the menu.
#[component]
pub fn SettingsMenu() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "settings-menu",
            button {
                class: "btn btn-ghost btn-icon",
                "aria-label": "Settings",
                "aria-expanded": "{open}",
                onclick: move |_| open.set(!open()),
                NavGlyph { icon: NavIcon::Settings, class: "icon" }
            }
            if open() {
                div { class: "dropdown glass-effect",
                    for item in SETTINGS_ITEMS.iter() {
                        div {
                            key: "{item}",
                            class: "dropdown-item",
                            onclick: move |_| open.set(false),
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}
