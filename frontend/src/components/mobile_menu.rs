use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::state::{PageContext, PageEvent};
use crate::utils::dom::{self, Listener, Teardown};

#[function_component(MobileMenu)]
pub fn mobile_menu() -> Html {
    use_behavior("mobile menu", attach);
    html! {}
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let toggle = dom::query(".mobile-menu-toggle").ok_or(Error::MissingElement(".mobile-menu-toggle"))?;
    let menu = dom::query(".nav-menu").ok_or(Error::MissingElement(".nav-menu"))?;
    let document = dom::document()?;
    let mut teardown = Teardown::default();

    // The DOM follows the state: every open/close, whoever caused it,
    // arrives here.
    {
        let toggle = toggle.clone();
        let menu = menu.clone();
        teardown.keep(page.subscribe(move |event| {
            if let PageEvent::MenuToggled { open } = *event {
                dom::set_class(&toggle, "active", open);
                dom::set_class(&menu, "active", open);
                dom::set_body_scroll_locked(open);
            }
        }));
    }

    {
        let page = page.clone();
        teardown.keep(Listener::new(&toggle, "click", move |_| {
            page.toggle_menu();
        })?);
    }

    {
        let page = page.clone();
        let toggle_node: Node = toggle.into();
        let menu_node: Node = menu.into();
        teardown.keep(Listener::new(&document, "click", move |event| {
            if !page.is_menu_open() {
                return;
            }
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let inside = |node: &Node| node.contains(target.as_ref());
            if !inside(&menu_node) && !inside(&toggle_node) {
                page.close_menu();
            }
        })?);
    }

    Ok(teardown)
}
