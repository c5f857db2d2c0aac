//! Click-driven desktop auth dropdown.
//!
//! The header markup nests the auth container like this:
//!
//! ```text
//! div.relative.group          wrapper
//!   button                    trigger
//!   div.absolute.opacity-0    panel
//!     div#auth-dropdown       container (rendered by the auth panel)
//! ```
//!
//! The Tailwind `group` class makes the panel appear on hover. The controller
//! removes it and drives visibility through inline styles instead.

use std::cell::Cell;
use std::rc::Rc;

use cosmo_nav_shared::{DropdownEffect, DropdownEvent, DropdownState, PanelStyle};
use leptos::logging::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use crate::utils::{apply_edit, html_element, listen, DomError, JsResultExt};

pub struct DropdownParts {
    pub wrapper: Element,
    pub trigger: Element,
    pub panel: HtmlElement,
}

impl DropdownParts {
    /// Walks up from the auth container. `None` when the markup does not
    /// have the expected shape.
    pub fn from_container(container: &Element) -> Result<Option<Self>, DomError> {
        let Some(panel) = container.parent_element() else {
            return Ok(None);
        };
        let Some(wrapper) = panel.parent_element() else {
            return Ok(None);
        };
        let Some(trigger) = wrapper.query_selector("button").dom("querySelector")? else {
            return Ok(None);
        };
        let Ok(panel) = html_element(&panel) else {
            return Ok(None);
        };
        Ok(Some(Self {
            wrapper,
            trigger,
            panel,
        }))
    }
}

pub struct AuthDropdown {
    parts: DropdownParts,
    state: Cell<DropdownState>,
}

impl AuthDropdown {
    /// Takes over the panel and starts listening for clicks and Escape.
    pub fn attach(document: &Document, parts: DropdownParts) -> Result<Rc<Self>, DomError> {
        parts
            .wrapper
            .class_list()
            .remove_1(PanelStyle::HOVER_CLASS)
            .dom("classList.remove")?;

        let dropdown = Rc::new(Self {
            parts,
            state: Cell::new(DropdownState::Closed),
        });
        dropdown.apply_panel_style(PanelStyle::CLOSED)?;
        dropdown
            .parts
            .panel
            .style()
            .set_property("transition", PanelStyle::TRANSITION)
            .dom("style.setProperty")?;

        let on_trigger = dropdown.clone();
        listen(&dropdown.parts.trigger, "click", move |event| {
            event.stop_propagation();
            on_trigger.dispatch_logged(DropdownEvent::TriggerClicked);
        })?;

        let on_document = dropdown.clone();
        listen(document, "click", move |event| {
            let inside = event
                .target()
                .and_then(|target| target.dyn_into::<Node>().ok())
                .map(|node| on_document.parts.wrapper.contains(Some(&node)))
                .unwrap_or(false);
            if !inside {
                on_document.dispatch_logged(DropdownEvent::OutsideClicked);
            }
        })?;

        let on_key = dropdown.clone();
        listen(document, "keydown", move |event| {
            let key = event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|event| DropdownEvent::from_key(&event.key()));
            if let Some(event) = key {
                on_key.dispatch_logged(event);
            }
        })?;

        Ok(dropdown)
    }

    #[cfg(test)]
    fn state(&self) -> DropdownState {
        self.state.get()
    }

    /// Runs one transition and applies its effect to the DOM.
    pub fn dispatch(&self, event: DropdownEvent) -> Result<(), DomError> {
        let (next, effect) = self.state.get().handle(event);
        self.state.set(next);

        match effect {
            Some(DropdownEffect::Show) => self.render(DropdownState::Open),
            Some(DropdownEffect::Hide) => self.render(DropdownState::Closed),
            None => Ok(()),
        }
    }

    fn dispatch_logged(&self, event: DropdownEvent) {
        if let Err(e) = self.dispatch(event) {
            warn!("auth dropdown: {:?} failed: {}", event, e);
        }
    }

    fn render(&self, state: DropdownState) -> Result<(), DomError> {
        self.apply_panel_style(PanelStyle::for_state(state))?;
        apply_edit(&self.parts.trigger, &PanelStyle::trigger_edit(state))
    }

    fn apply_panel_style(&self, style: PanelStyle) -> Result<(), DomError> {
        let declaration = self.parts.panel.style();
        for (property, value) in style.properties() {
            declaration
                .set_property(property, value)
                .dom("style.setProperty")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use web_sys::KeyboardEventInit;
    use wasm_bindgen_test::*;

    use crate::utils::{class_set, document};

    wasm_bindgen_test_configure!(run_in_browser);

    const MARKUP: &str = r#"
        <div class="relative group">
            <button class="trigger p-2 text-gray-400">Account</button>
            <div class="panel absolute opacity-0">
                <div class="container"></div>
            </div>
        </div>
        <p class="outside">elsewhere</p>
    "#;

    struct Fixture {
        root: Element,
        dropdown: Rc<AuthDropdown>,
    }

    impl Fixture {
        fn new() -> Self {
            let document = document().unwrap();
            let root = document.create_element("div").unwrap();
            root.set_inner_html(MARKUP);
            document.body().unwrap().append_child(&root).unwrap();

            let container = root.query_selector(".container").unwrap().unwrap();
            let parts = DropdownParts::from_container(&container).unwrap().unwrap();
            let dropdown = AuthDropdown::attach(&document, parts).unwrap();
            Self { root, dropdown }
        }

        fn click(&self, selector: &str) {
            let element = self.root.query_selector(selector).unwrap().unwrap();
            html_element(&element).unwrap().click();
        }

        fn panel_style(&self, property: &str) -> String {
            self.dropdown
                .parts
                .panel
                .style()
                .get_property_value(property)
                .unwrap()
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            self.root.remove();
        }
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        document().unwrap().dispatch_event(&event).unwrap();
    }

    #[wasm_bindgen_test]
    fn test_attach_disables_hover_and_hides_panel() {
        let f = Fixture::new();
        assert!(!class_set(&f.dropdown.parts.wrapper).contains("group"));
        assert_eq!(f.panel_style("opacity"), "0");
        assert_eq!(f.panel_style("visibility"), "hidden");
        assert_eq!(f.panel_style("pointer-events"), "none");
        assert_eq!(f.dropdown.state(), DropdownState::Closed);
    }

    #[wasm_bindgen_test]
    fn test_trigger_toggles_and_restores_styling() {
        let f = Fixture::new();
        let original = class_set(&f.dropdown.parts.trigger);

        f.click(".trigger");
        assert_eq!(f.dropdown.state(), DropdownState::Open);
        assert_eq!(f.panel_style("opacity"), "1");
        assert_eq!(f.panel_style("visibility"), "visible");
        assert!(class_set(&f.dropdown.parts.trigger).contains("bg-white/10"));

        f.click(".trigger");
        assert_eq!(f.dropdown.state(), DropdownState::Closed);
        assert_eq!(f.panel_style("opacity"), "0");
        let restored = class_set(&f.dropdown.parts.trigger);
        assert!(restored.contains("text-gray-400"));
        assert!(!restored.contains_any(&["text-white", "bg-white/10"]));
        assert_eq!(restored, original);
    }

    #[wasm_bindgen_test]
    fn test_outside_click_closes_then_trigger_reopens() {
        let f = Fixture::new();
        f.click(".trigger");
        f.click(".outside");
        assert_eq!(f.dropdown.state(), DropdownState::Closed);

        f.click(".trigger");
        assert_eq!(f.dropdown.state(), DropdownState::Open);
    }

    #[wasm_bindgen_test]
    fn test_click_inside_panel_keeps_it_open() {
        let f = Fixture::new();
        f.click(".trigger");
        f.click(".container");
        assert_eq!(f.dropdown.state(), DropdownState::Open);
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_and_other_keys_do_not() {
        let f = Fixture::new();
        f.click(".trigger");
        press("Enter");
        assert_eq!(f.dropdown.state(), DropdownState::Open);
        press("Escape");
        assert_eq!(f.dropdown.state(), DropdownState::Closed);
    }

    #[wasm_bindgen_test]
    fn test_unexpected_markup_is_ignored() {
        let document = document().unwrap();
        let orphan = document.create_element("div").unwrap();
        assert!(DropdownParts::from_container(&orphan).unwrap().is_none());
    }
}
