//! Placeholder wallet connection state.
//!
//! This is a UI stub. No address is resolved and nothing is signed; the
//! connected label is a fixed string.

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const PLACEHOLDER_ADDRESS: &str = "0x7a3d...8f2c";
pub const CONNECTED_SHORT_LABEL: &str = "Connected";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connected,
}

impl ConnectionState {
    pub fn toggled(self) -> Self {
        toggle(self)
    }

    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Connected)
    }
}

/// Single transition of the connection state machine. Self-inverse.
pub fn toggle(state: ConnectionState) -> ConnectionState {
    match state {
        ConnectionState::Disconnected => ConnectionState::Connected,
        ConnectionState::Connected => ConnectionState::Disconnected,
    }
}

/// Text shown on the wallet button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletLabel {
    /// Call to action, same on every viewport.
    Connect(&'static str),
    /// Placeholder address on wide viewports, short label on narrow ones.
    Connected { wide: &'static str, narrow: &'static str },
}

pub fn wallet_label(state: ConnectionState) -> WalletLabel {
    match state {
        ConnectionState::Disconnected => WalletLabel::Connect(CONNECT_LABEL),
        ConnectionState::Connected => WalletLabel::Connected {
            wide: PLACEHOLDER_ADDRESS,
            narrow: CONNECTED_SHORT_LABEL,
        },
    }
}

pub fn wallet_button_class(state: ConnectionState) -> &'static str {
    match state {
        // the call to action glows, the connected pill does not
        ConnectionState::Disconnected => "btn btn-wallet glow-effect",
        ConnectionState::Connected => "btn btn-wallet",
    }
}
