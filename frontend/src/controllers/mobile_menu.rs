use std::rc::Rc;

use leptos::logging::warn;
use web_sys::{Element, HtmlElement};

use crate::utils::{listen, DomError, JsResultExt};

const HIDDEN_CLASS: &str = "hidden";

/// Full-screen mobile navigation with explicit open and close buttons.
///
/// While open the page behind it does not scroll. The panel is only closed
/// by its close button.
pub struct MobileMenu {
    open_button: Element,
    close_button: Element,
    panel: Element,
    body: HtmlElement,
}

impl MobileMenu {
    /// Returns `None` unless every part is on the page.
    pub fn new(
        open_button: Option<Element>,
        close_button: Option<Element>,
        panel: Option<Element>,
        body: Option<HtmlElement>,
    ) -> Option<Self> {
        Some(Self {
            open_button: open_button?,
            close_button: close_button?,
            panel: panel?,
            body: body?,
        })
    }

    pub fn attach(self) -> Result<Rc<Self>, DomError> {
        let menu = Rc::new(self);

        let opener = menu.clone();
        listen(&menu.open_button, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            if let Err(e) = opener.open() {
                warn!("mobile menu: open failed: {}", e);
            }
        })?;

        let closer = menu.clone();
        listen(&menu.close_button, "click", move |event| {
            event.prevent_default();
            event.stop_propagation();
            if let Err(e) = closer.close() {
                warn!("mobile menu: close failed: {}", e);
            }
        })?;

        Ok(menu)
    }

    pub fn open(&self) -> Result<(), DomError> {
        self.panel
            .class_list()
            .remove_1(HIDDEN_CLASS)
            .dom("classList.remove")?;
        self.body
            .style()
            .set_property("overflow", "hidden")
            .dom("style.setProperty")
    }

    pub fn close(&self) -> Result<(), DomError> {
        self.panel
            .class_list()
            .add_1(HIDDEN_CLASS)
            .dom("classList.add")?;
        self.body
            .style()
            .remove_property("overflow")
            .dom("style.removeProperty")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use crate::utils::{document, html_element};

    wasm_bindgen_test_configure!(run_in_browser);

    fn is_open(menu: &MobileMenu) -> bool {
        !menu.panel.class_list().contains(HIDDEN_CLASS)
    }

    struct Fixture {
        root: Element,
        open: HtmlElement,
        close: HtmlElement,
        panel: Element,
        body: HtmlElement,
    }

    fn fixture() -> Fixture {
        let document = document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_inner_html(
            r#"<a href="/fallback" class="open">Menu</a>
               <div class="panel hidden"><button class="close">X</button></div>"#,
        );
        let body = document.body().unwrap();
        body.append_child(&root).unwrap();

        let find = |selector: &str| root.query_selector(selector).unwrap().unwrap();
        Fixture {
            open: html_element(&find(".open")).unwrap(),
            close: html_element(&find(".close")).unwrap(),
            panel: find(".panel"),
            body,
            root: root.clone(),
        }
    }

    #[wasm_bindgen_test]
    fn test_open_and_close_toggle_panel_and_scroll_lock() {
        let f = fixture();
        let menu = MobileMenu::new(
            Some(f.open.clone().unchecked_into()),
            Some(f.close.clone().unchecked_into()),
            Some(f.panel.clone()),
            Some(f.body.clone()),
        )
        .unwrap()
        .attach()
        .unwrap();

        assert!(!is_open(&menu));
        f.open.click();
        assert!(is_open(&menu));
        assert_eq!(f.body.style().get_property_value("overflow").unwrap(), "hidden");

        f.close.click();
        assert!(!is_open(&menu));
        assert_eq!(f.body.style().get_property_value("overflow").unwrap(), "");

        f.root.remove();
    }

    #[wasm_bindgen_test]
    fn test_missing_part_disables_menu() {
        let f = fixture();
        assert!(MobileMenu::new(
            None,
            Some(f.close.clone().unchecked_into()),
            Some(f.panel.clone()),
            Some(f.body.clone()),
        )
        .is_none());
        assert!(MobileMenu::new(
            Some(f.open.clone().unchecked_into()),
            Some(f.close.clone().unchecked_into()),
            None,
            Some(f.body.clone()),
        )
        .is_none());
        f.root.remove();
    }
}
