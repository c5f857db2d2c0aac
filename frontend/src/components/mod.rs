pub mod auth_panel;
pub mod icon;
