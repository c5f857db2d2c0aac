use std::rc::Rc;

use cosmo_nav_shared::{RevealSet, REVEAL_EDIT};
use leptos::logging::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::utils::{apply_edit, DomError, JsResultExt};

#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

/// The observed elements and which of them have already been revealed.
pub struct RevealTargets {
    elements: Rc<Vec<Element>>,
    tracker: RevealSet,
}

impl RevealTargets {
    pub fn new(elements: Rc<Vec<Element>>) -> Self {
        let tracker = RevealSet::new(elements.len());
        Self { elements, tracker }
    }

    /// Handles one intersection entry. Returns `true` when `target` was just
    /// revealed and should no longer be observed.
    pub fn on_entry(&mut self, target: &Element, intersecting: bool) -> Result<bool, DomError> {
        let Some(index) = self
            .elements
            .iter()
            .position(|element| js_sys::Object::is(element, target))
        else {
            return Ok(false);
        };

        if !self.tracker.on_entry(index, intersecting) {
            return Ok(false);
        }
        apply_edit(target, &REVEAL_EDIT)?;
        Ok(true)
    }
}

/// Fades `elements` in the first time each one scrolls into view.
///
/// Returns `None` when there is nothing to observe.
pub fn observe_reveals(
    elements: Vec<Element>,
    options: &RevealOptions,
) -> Result<Option<IntersectionObserver>, DomError> {
    if elements.is_empty() {
        return Ok(None);
    }

    let elements = Rc::new(elements);
    let mut targets = RevealTargets::new(elements.clone());

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                match targets.on_entry(&target, entry.is_intersecting()) {
                    Ok(true) => observer.unobserve(&target),
                    Ok(false) => {}
                    Err(e) => {
                        warn!("scroll reveal: {}", e);
                        observer.unobserve(&target);
                    }
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold_f64(options.threshold);
    init.set_root_margin(&options.root_margin);

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .dom("new IntersectionObserver")?;
    callback.forget();

    for element in elements.iter() {
        observer.observe(element);
    }

    Ok(Some(observer))
}
