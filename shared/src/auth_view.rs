//! Which auth affordances a container shows.

pub const LOGIN_PAGE: &str = "./login.html";
pub const SIGNUP_PAGE: &str = "./signup.html";
pub const DASHBOARD_PAGE: &str = "./user-dashboard.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLayout {
    /// Content of the header dropdown.
    Desktop,
    /// Footer section of the mobile menu.
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthView {
    MobileAuthenticated,
    MobileAnonymous,
    DesktopAuthenticated,
    DesktopAnonymous,
}

impl AuthView {
    pub fn select(logged_in: bool, layout: AuthLayout) -> Self {
        match (layout, logged_in) {
            (AuthLayout::Mobile, true) => AuthView::MobileAuthenticated,
            (AuthLayout::Mobile, false) => AuthView::MobileAnonymous,
            (AuthLayout::Desktop, true) => AuthView::DesktopAuthenticated,
            (AuthLayout::Desktop, false) => AuthView::DesktopAnonymous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_covers_all_combinations() {
        assert_eq!(AuthView::select(true, AuthLayout::Mobile), AuthView::MobileAuthenticated);
        assert_eq!(AuthView::select(false, AuthLayout::Mobile), AuthView::MobileAnonymous);
        assert_eq!(AuthView::select(true, AuthLayout::Desktop), AuthView::DesktopAuthenticated);
        assert_eq!(AuthView::select(false, AuthLayout::Desktop), AuthView::DesktopAnonymous);
    }
}
