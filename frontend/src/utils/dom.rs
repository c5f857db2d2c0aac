//! Thin helpers over `web-sys` so controllers can use `?` instead of
//! juggling `JsValue` errors.

use cosmo_nav_shared::{ClassEdit, ClassSet};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, NodeList};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no document available")]
    NoDocument,
    #[error("element is not an HTML element")]
    NotHtmlElement,
    #[error("{operation} failed: {message}")]
    Js {
        operation: &'static str,
        message: String,
    },
}

impl DomError {
    pub fn js(operation: &'static str, value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|error| String::from(error.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js { operation, message }
    }
}

/// Names the DOM call that produced a `JsValue` error.
pub trait JsResultExt<T> {
    fn dom(self, operation: &'static str) -> Result<T, DomError>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
    fn dom(self, operation: &'static str) -> Result<T, DomError> {
        self.map_err(|value| DomError::js(operation, value))
    }
}

pub fn document() -> Result<Document, DomError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(DomError::NoDocument)
}

pub fn element_by_id(document: &Document, id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document.get_element_by_id(id)
}

pub fn html_element(element: &Element) -> Result<HtmlElement, DomError> {
    element
        .dyn_ref::<HtmlElement>()
        .cloned()
        .ok_or(DomError::NotHtmlElement)
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    let list = document
        .query_selector_all(selector)
        .dom("querySelectorAll")?;
    Ok(elements(&list))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn class_set(element: &Element) -> ClassSet {
    ClassSet::parse(&element.get_attribute("class").unwrap_or_default())
}

pub fn apply_edit(element: &Element, edit: &ClassEdit) -> Result<(), DomError> {
    let classes = element.class_list();
    for class in edit.remove {
        classes.remove_1(class).dom("classList.remove")?;
    }
    for class in edit.add {
        classes.add_1(class).dom("classList.add")?;
    }
    Ok(())
}

/// Adds an event listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .dom("addEventListener")?;
    closure.forget();
    Ok(())
}
