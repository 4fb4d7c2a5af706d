//! Interaction layer of the RenalFlow landing page.
//!
//! The page markup is served as static HTML. This crate mounts an empty
//! Yew app next to it whose components attach behavior to that markup:
//! scroll effects, the mobile menu, the Arabic/English toggle, the FAQ
//! accordion, the testimonial carousel, entrance and counter animations
//! and the download consent dialog.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod interactions;
pub mod state;
pub mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::app::{App, AppProps};
use crate::config::Config;
use crate::error::Error;

/// Id of the element the app mounts into. Created when absent.
pub const MOUNT_ID: &str = "renalflow-runtime";

fn mount_point() -> Result<web_sys::Element, Error> {
    let document = utils::dom::document()?;
    if let Some(root) = document.get_element_by_id(MOUNT_ID) {
        return Ok(root);
    }
    let root = document.create_element("div")?;
    root.set_id(MOUNT_ID);
    root.set_attribute("hidden", "")?;
    document
        .body()
        .ok_or(Error::MissingElement("body"))?
        .append_child(&root)?;
    Ok(root)
}

/// Starts the interaction layer and tears it down again when the page is
/// unloaded.
pub fn run() -> Result<(), Error> {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));

    let config = Rc::new(Config::from_document());
    let root = mount_point()?;
    let handle = yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render();

    let handle = Rc::new(RefCell::new(Some(handle)));
    let on_pagehide = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        // Pages kept in the back/forward cache come back with their state.
        let persisted = event
            .dyn_ref::<web_sys::PageTransitionEvent>()
            .map_or(false, |e| e.persisted());
        if persisted {
            return;
        }
        if let Some(handle) = handle.borrow_mut().take() {
            log::debug!("Page hidden, releasing interaction layer");
            handle.destroy();
        }
    });
    utils::dom::window()?
        .add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())?;
    on_pagehide.forget();

    gloo_console::log!("RenalFlow landing page");
    Ok(())
}
