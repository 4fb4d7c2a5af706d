//! Behavior components. Each one renders nothing; it attaches its widget
//! to the existing page markup when mounted and releases everything it
//! attached when unmounted.

pub mod accordion;
pub mod animations;
pub mod carousel;
pub mod consent_modal;
pub mod download_tracking;
pub mod language_toggle;
pub mod mobile_menu;
pub mod scroll_effects;
pub mod visibility_title;

use yew::prelude::*;

use crate::error::Error;
use crate::state::PageContext;
use crate::utils::dom::Teardown;

/// Attaches a widget to the page and returns what must be released.
pub type Attach = fn(&PageContext) -> Result<Teardown, Error>;

/// Runs `attach` once with the page context. A failing or missing widget
/// is logged and left inert; it never affects the other widgets.
#[hook]
pub fn use_behavior(name: &'static str, attach: Attach) {
    let page = use_context::<PageContext>();
    use_effect_with_deps(
        move |page: &Option<PageContext>| {
            let teardown = match page {
                Some(page) => match attach(page) {
                    Ok(teardown) => {
                        log::debug!("{} attached ({} handles)", name, teardown.len());
                        teardown
                    }
                    Err(e) => {
                        log::log!(e.log_level(), "{} disabled: {}", name, e);
                        Teardown::default()
                    }
                },
                None => {
                    log::error!("{} mounted without a page context", name);
                    Teardown::default()
                }
            };
            move || drop(teardown)
        },
        page,
    );
}
