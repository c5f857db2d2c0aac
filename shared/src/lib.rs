pub mod active_link;
pub mod auth_view;
pub mod classes;
pub mod config;
pub mod dropdown;
pub mod reveal;
pub mod session;

pub use active_link::{is_match, normalize_href, page_id, ActiveLinkStyle, LinkCandidate, LinkRegion};
pub use auth_view::{AuthLayout, AuthView, DASHBOARD_PAGE, LOGIN_PAGE, SIGNUP_PAGE};
pub use classes::{ClassEdit, ClassSet};
pub use config::SiteConfig;
pub use dropdown::{DropdownEffect, DropdownEvent, DropdownState, PanelStyle};
pub use reveal::{RevealPhase, RevealSet, REVEAL_EDIT};
pub use session::{
    logout, MemorySessionStore, SessionError, SessionFlag, SessionState, SessionStore,
};
