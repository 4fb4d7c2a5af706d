use std::any::Any;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement,
    IntersectionObserver, NodeList, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::Error;

pub fn window() -> Result<Window, Error> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document, Error> {
    window()?.document().ok_or(Error::NoDocument)
}

/// Monotonic milliseconds since page load. Falls back to the wall clock
/// when the performance timeline is unavailable.
pub fn now() -> f64 {
    match web_sys::window().and_then(|w| w.performance()) {
        Some(performance) => performance.now(),
        None => js_sys::Date::now(),
    }
}

/// First element matching `selector`. Invalid selectors count as missing.
pub fn query(selector: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn query_all(selector: &str) -> Vec<HtmlElement> {
    match document() {
        Ok(doc) => collect(selector, doc.query_selector_all(selector)),
        Err(_) => Vec::new(),
    }
}

/// Descendants of `root` matching `selector`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    collect(selector, root.query_selector_all(selector))
}

fn collect(selector: &str, list: Result<NodeList, JsValue>) -> Vec<HtmlElement> {
    let list = match list {
        Ok(list) => list,
        Err(e) => {
            log::debug!("Selector {} rejected: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()
        .ok()?
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

pub fn set_class(element: &Element, class: &str, on: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, on) {
        log::warn!("Failed to toggle class {}: {:?}", class, e);
    }
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

/// Locks or restores scrolling of the page body.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = document().ok().and_then(|doc| doc.body()) {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

fn smooth_options() -> ScrollToOptions {
    let options = ScrollToOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options
}

pub fn smooth_scroll_window_to(top: f64) {
    if let Ok(window) = window() {
        let options = smooth_options();
        options.set_top(top);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn smooth_scroll_element_to(element: &Element, left: f64) {
    let options = smooth_options();
    options.set_left(left);
    element.scroll_to_with_scroll_to_options(&options);
}

/// Event listener that unregisters itself when dropped.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new(
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, Error> {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        target.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    /// Same as [`Listener::new`], registered as passive for scroll performance.
    pub fn passive(
        target: &EventTarget,
        kind: &'static str,
        f: impl FnMut(Event) + 'static,
    ) -> Result<Self, Error> {
        let callback = Closure::<dyn FnMut(Event)>::new(f);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            kind,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Intersection observer that disconnects itself when dropped.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl ObserverGuard {
    pub fn new(
        observer: IntersectionObserver,
        callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    ) -> Self {
        Self {
            observer,
            _callback: callback,
        }
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Everything a behavior component attached, released together when the
/// component unmounts.
#[derive(Default)]
pub struct Teardown {
    guards: Vec<Box<dyn Any>>,
}

impl Teardown {
    pub fn keep<T: 'static>(&mut self, guard: T) {
        self.guards.push(Box::new(guard));
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }
}
