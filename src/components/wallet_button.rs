use dioxus::prelude::*;
use crate::components::icons::NavGlyph;
use crate::nav::NavIcon;
use crate::wallet::{wallet_button_class, wallet_label, ConnectionState, WalletLabel};

/// Wallet connect button. The state lives in the shell; this only renders
/// it and reports clicks.
#[component]
pub fn WalletButton(state: ConnectionState, on_toggle: EventHandler<()>) -> Element {
    let class = wallet_button_class(state);
    let pressed = state.is_connected();

    rsx! {
        button {
            class: "{class}",
            "aria-pressed": "{pressed}",
            onclick: move |_| on_toggle.call(()),
            NavGlyph { icon: NavIcon::Wallet, class: "icon icon--sm icon--leading" }
            match wallet_label(state) {
                WalletLabel::Connect(label) => rsx! {
                    span { "{label}" }
                },
                WalletLabel::Connected { wide, narrow } => rsx! {
                    span { class: "wide-only font-mono", "{wide}" }
                    span { class: "narrow-only", "{narrow}" }
                },
            }
        }
    }
}
