pub mod active_links;
pub mod auth_dropdown;
pub mod mobile_menu;
pub mod reveal;
