use std::rc::Rc;

use cosmo_nav_shared::{AuthLayout, SessionStore, SiteConfig};
use leptos::logging::{log, warn};
use web_sys::{Document, Element, HtmlElement};

use crate::components::auth_panel::render_auth_panel;
use crate::controllers::active_links::mark_active_links;
use crate::controllers::auth_dropdown::{AuthDropdown, DropdownParts};
use crate::controllers::mobile_menu::MobileMenu;
use crate::controllers::reveal::{observe_reveals, RevealOptions};
use crate::session::{logout_handler, LocalSessionStore};
use crate::utils::{document, element_by_id, listen, query_all, DomError, JsResultExt};

/// Id of an optional `<script type="application/json">` holding a partial
/// [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-nav-config";

/// Elements the site scripts look up by id. Any of them may be missing: not
/// every page has every widget.
pub struct SiteElements {
    pub mobile_menu_button: Option<Element>,
    pub mobile_menu_close: Option<Element>,
    pub mobile_menu: Option<Element>,
    pub desktop_auth: Option<Element>,
    pub mobile_auth: Option<Element>,
    pub body: Option<HtmlElement>,
}

impl SiteElements {
    pub fn locate(document: &Document, config: &SiteConfig) -> Self {
        Self {
            mobile_menu_button: element_by_id(document, &config.mobile_menu_button_id),
            mobile_menu_close: element_by_id(document, &config.mobile_menu_close_id),
            mobile_menu: element_by_id(document, &config.mobile_menu_id),
            desktop_auth: element_by_id(document, &config.desktop_auth_id)
                .or_else(|| element_by_id(document, &config.legacy_desktop_auth_id)),
            mobile_auth: element_by_id(document, &config.mobile_auth_id),
            body: document.body(),
        }
    }
}

/// Reads the inline page configuration, falling back to the defaults.
pub fn page_config(document: &Document) -> SiteConfig {
    let Some(text) = element_by_id(document, CONFIG_ELEMENT_ID).and_then(|el| el.text_content())
    else {
        return SiteConfig::default();
    };

    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(e) => {
            warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            SiteConfig::default()
        }
    }
}

/// Runs `f` once the document has been parsed.
pub fn when_ready<F>(document: &Document, f: F) -> Result<(), DomError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let mut pending = Some(f);
    listen(document, "DOMContentLoaded", move |_| {
        if let Some(f) = pending.take() {
            f();
        }
    })
}

/// Sets up every feature against the current document.
///
/// Features are independent: one that fails is logged and the rest still
/// run. Only a missing document is an error.
pub fn init(config: &SiteConfig, store: Rc<dyn SessionStore>) -> Result<(), DomError> {
    let document = document()?;
    let elements = SiteElements::locate(&document, config);
    let session = store.load();
    let on_logout = logout_handler(store);

    run_feature("mobile menu", || {
        let menu = MobileMenu::new(
            elements.mobile_menu_button.clone(),
            elements.mobile_menu_close.clone(),
            elements.mobile_menu.clone(),
            elements.body.clone(),
        );
        if let Some(menu) = menu {
            menu.attach()?;
        }
        Ok(())
    });

    run_feature("auth panels", || {
        if let Some(container) = &elements.desktop_auth {
            render_auth_panel(container, session, AuthLayout::Desktop, on_logout.clone())?;
        }
        if let Some(container) = &elements.mobile_auth {
            render_auth_panel(container, session, AuthLayout::Mobile, on_logout.clone())?;
        }
        Ok(())
    });

    run_feature("auth dropdown", || {
        let Some(container) = &elements.desktop_auth else {
            return Ok(());
        };
        if let Some(parts) = DropdownParts::from_container(container)? {
            AuthDropdown::attach(&document, parts)?;
        }
        Ok(())
    });

    run_feature("scroll reveal", || {
        let targets = query_all(&document, &config.reveal_selector)?;
        let options = RevealOptions {
            threshold: config.reveal_threshold,
            root_margin: config.reveal_root_margin.clone(),
        };
        observe_reveals(targets, &options)?;
        Ok(())
    });

    // Runs last so links injected by the auth panels are included.
    run_feature("active links", || {
        let path = match document.location() {
            Some(location) => location.pathname().dom("location.pathname")?,
            None => String::new(),
        };
        let links = query_all(&document, &config.link_selector())?;
        let marked = mark_active_links(
            &links,
            &path,
            &config.default_page,
            elements.mobile_menu.as_ref(),
        )?;
        log!("active links: {} marked for {}", marked, path);
        Ok(())
    });

    Ok(())
}

/// Entry used by the start hook: browser storage, errors to the console.
pub fn start(config: &SiteConfig) {
    if let Err(e) = init(config, Rc::new(LocalSessionStore)) {
        warn!("site setup failed: {}", e);
    }
}

fn run_feature<F>(name: &str, setup: F)
where
    F: FnOnce() -> Result<(), DomError>,
{
    if let Err(e) = setup() {
        warn!("{} setup failed: {}", name, e);
    }
}
