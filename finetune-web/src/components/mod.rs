pub(crate) mod header_nav_item;
pub(crate) mod language_selector;
pub(crate) mod language_selector_button;
pub(crate) mod loading;
pub(crate) mod redirect;
pub(crate) mod theme_switcher;
pub(crate) mod user_dropdown;
