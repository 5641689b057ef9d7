pub mod footer;
pub mod icons;
pub mod nav_links;
pub mod pages;
pub mod settings_menu;
pub mod shell;
pub mod wallet_button;
