use std::rc::Rc;

use cosmo_nav_shared::{AuthLayout, AuthView, SessionState, DASHBOARD_PAGE, LOGIN_PAGE, SIGNUP_PAGE};
use leptos::*;
use web_sys::Element;

use crate::components::icon::{Icon, IconKind};
use crate::utils::{html_element, DomError};

const MOBILE_LINK_CLASS: &str = "flex items-center justify-center gap-2 py-3 border border-white/10 rounded-xl text-center text-sm font-bold hover:bg-white/5 transition";
const DESKTOP_LINK_CLASS: &str = "flex items-center gap-3 px-4 py-2.5 text-sm text-gray-300 hover:text-white hover:bg-white/5 rounded-lg transition-colors";

/// Replaces the container's children with the auth view for `session`.
///
/// Rendering twice leaves the same content as rendering once.
pub fn render_auth_panel(
    container: &Element,
    session: SessionState,
    layout: AuthLayout,
    on_logout: Rc<dyn Fn()>,
) -> Result<AuthView, DomError> {
    let auth_view = AuthView::select(session.logged_in, layout);
    let parent = html_element(container)?;
    parent.set_inner_html("");

    mount_to(parent, move || {
        let on_logout = Callback::new(move |_: ()| on_logout());
        view! { <AuthPanel auth_view=auth_view on_logout=on_logout /> }
    });

    Ok(auth_view)
}

#[component]
pub fn AuthPanel(auth_view: AuthView, on_logout: Callback<()>) -> impl IntoView {
    match auth_view {
        AuthView::MobileAuthenticated => view! { <MobileSignedIn on_logout=on_logout /> }.into_view(),
        AuthView::MobileAnonymous => view! { <MobileSignedOut /> }.into_view(),
        AuthView::DesktopAuthenticated => view! { <DesktopSignedIn on_logout=on_logout /> }.into_view(),
        AuthView::DesktopAnonymous => view! { <DesktopSignedOut /> }.into_view(),
    }
}

#[component]
fn MobileSignedIn(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex items-center gap-4 mb-4">
            <div class="w-10 h-10 rounded-full bg-blue-600/20 flex items-center justify-center text-blue-500">
                <Icon kind=IconKind::User class="w-5 h-5" />
            </div>
            <div>
                <p class="text-sm font-bold text-white">"Welcome Back"</p>
                <a href=DASHBOARD_PAGE class="text-xs text-blue-400 hover:underline">
                    "Go to Dashboard"
                </a>
            </div>
        </div>
        <button
            type="button"
            class="w-full py-3 rounded-xl border border-red-500/20 text-sm font-bold text-red-400 hover:bg-red-500/10 transition"
            on:click=move |_| on_logout.call(())
        >
            "Log Out"
        </button>
    }
}

#[component]
fn MobileSignedOut() -> impl IntoView {
    view! {
        <a href=LOGIN_PAGE class=MOBILE_LINK_CLASS>
            <Icon kind=IconKind::Login class="w-4 h-4" />
            "Log In"
        </a>
        <a href=SIGNUP_PAGE class=MOBILE_LINK_CLASS>
            <Icon kind=IconKind::Signup class="w-4 h-4" />
            "Sign Up"
        </a>
    }
}

#[component]
fn DesktopSignedIn(on_logout: Callback<()>) -> impl IntoView {
    view! {
        <a href=DASHBOARD_PAGE class=DESKTOP_LINK_CLASS>
            <Icon kind=IconKind::Dashboard class="w-4 h-4 text-blue-400" />
            <span>"Dashboard"</span>
        </a>
        <div class="h-px bg-white/5 my-1"></div>
        <button
            type="button"
            class="w-full flex items-center gap-3 px-4 py-2.5 text-sm text-red-400 hover:text-red-300 hover:bg-red-500/5 rounded-lg transition-colors text-left"
            on:click=move |_| on_logout.call(())
        >
            <Icon kind=IconKind::Logout class="w-4 h-4" />
            <span>"Log Out"</span>
        </button>
    }
}

#[component]
fn DesktopSignedOut() -> impl IntoView {
    view! {
        <a href=LOGIN_PAGE class=DESKTOP_LINK_CLASS>
            <Icon kind=IconKind::Login class="w-4 h-4 text-blue-400" />
            <span>"Log In"</span>
        </a>
        <a href=SIGNUP_PAGE class=DESKTOP_LINK_CLASS>
            <Icon kind=IconKind::Signup class="w-4 h-4 text-blue-400" />
            <span>"Sign Up"</span>
        </a>
    }
}
