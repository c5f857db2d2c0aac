use serde::Deserialize;

/// Element ids, selectors and tuning values the site scripts depend on.
///
/// Every field has a default matching the site's markup, so a page only needs
/// to override what differs.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Run setup automatically once the document is parsed. Pages that call
    /// `init_site` themselves turn this off.
    pub auto_init: bool,
    /// Page identifier used when the location path ends in `/`.
    pub default_page: String,
    pub mobile_menu_button_id: String,
    pub mobile_menu_close_id: String,
    pub mobile_menu_id: String,
    pub desktop_auth_id: String,
    /// Older pages still use this id for the desktop auth container.
    pub legacy_desktop_auth_id: String,
    pub mobile_auth_id: String,
    pub nav_link_selector: String,
    pub reveal_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            auto_init: true,
            default_page: "index.html".to_string(),
            mobile_menu_button_id: "mobile-menu-btn".to_string(),
            mobile_menu_close_id: "mobile-menu-close".to_string(),
            mobile_menu_id: "mobile-menu".to_string(),
            desktop_auth_id: "auth-dropdown-desktop".to_string(),
            legacy_desktop_auth_id: "auth-dropdown".to_string(),
            mobile_auth_id: "auth-mobile".to_string(),
            nav_link_selector: "nav a".to_string(),
            reveal_selector: ".reveal".to_string(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Selector for every navigation anchor: desktop nav plus mobile menu.
    pub fn link_selector(&self) -> String {
        format!("{}, #{} a", self.nav_link_selector, self.mobile_menu_id)
    }
}
