use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{EventTarget, HtmlElement, HtmlInputElement};
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::consent::{Confirmation, ConsentModal};
use crate::state::PageContext;
use crate::utils::dom::{self, Listener, Teardown};

const MODAL_ID: &str = "downloadModal";
const CLOSE_ID: &str = "closeModal";
const CHECKBOX_ID: &str = "consentCheck";
const ACTION_ID: &str = "modalDownloadBtn";

#[function_component(ConsentGate)]
pub fn consent_gate() -> Html {
    use_behavior("consent modal", attach);
    html! {}
}

struct View {
    modal: HtmlElement,
    checkbox: HtmlInputElement,
    action: HtmlElement,
}

impl View {
    fn render(&self, state: &ConsentModal) {
        dom::set_style(&self.modal, "display", if state.is_open() { "flex" } else { "none" });
        dom::set_body_scroll_locked(state.is_open());
        self.checkbox.set_checked(state.has_consent());
        self.render_action(state);
    }

    fn render_action(&self, state: &ConsentModal) {
        let appearance = state.action_appearance();
        dom::set_style(&self.action, "opacity", appearance.opacity);
        dom::set_style(&self.action, "pointer-events", appearance.pointer_events);
        let _ = if appearance.disabled {
            self.action.set_attribute("disabled", "true")
        } else {
            self.action.remove_attribute("disabled")
        };
    }
}

struct Modal {
    state: RefCell<ConsentModal>,
    view: View,
    pending_close: RefCell<Option<Timeout>>,
}

impl Modal {
    fn open(&self) {
        self.pending_close.borrow_mut().take();
        let mut state = self.state.borrow_mut();
        state.open();
        self.view.render(&state);
    }

    fn close(&self) {
        let mut state = self.state.borrow_mut();
        state.close();
        self.view.render(&state);
    }

    fn sync_consent(&self) {
        let mut state = self.state.borrow_mut();
        state.set_consent(self.view.checkbox.checked());
        self.view.render_action(&state);
    }
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let modal = Rc::new(Modal {
        state: RefCell::new(ConsentModal::default()),
        view: View {
            modal: dom::by_id(MODAL_ID).ok_or(Error::MissingElement(MODAL_ID))?,
            checkbox: dom::by_id(CHECKBOX_ID).ok_or(Error::MissingElement(CHECKBOX_ID))?,
            action: dom::by_id(ACTION_ID).ok_or(Error::MissingElement(ACTION_ID))?,
        },
        pending_close: RefCell::new(None),
    });
    let close_delay_ms = page.config().modal_close_delay_ms;
    let selector = format!("a[href*=\"{}\"]", page.config().download_pattern);
    let mut teardown = Teardown::default();

    modal.view.render_action(&modal.state.borrow());

    for link in dom::query_all(&selector) {
        // The dialog's own action is a download link too.
        if link == modal.view.action {
            continue;
        }
        let modal = modal.clone();
        teardown.keep(Listener::new(&link, "click", move |event| {
            event.prevent_default();
            modal.open();
        })?);
    }

    {
        let m = modal.clone();
        teardown.keep(Listener::new(&modal.view.checkbox, "change", move |_| {
            m.sync_consent();
        })?);
    }

    if let Some(close) = dom::by_id::<HtmlElement>(CLOSE_ID) {
        let modal = modal.clone();
        teardown.keep(Listener::new(&close, "click", move |_| modal.close())?);
    }

    {
        let m = modal.clone();
        let backdrop: EventTarget = modal.view.modal.clone().into();
        teardown.keep(Listener::new(&modal.view.modal, "click", move |event| {
            if event.target().as_ref() == Some(&backdrop) {
                m.close();
            }
        })?);
    }

    {
        let m = modal.clone();
        teardown.keep(Listener::new(&modal.view.action, "click", move |event| {
            let confirmation = m.state.borrow().confirm();
            match confirmation {
                Confirmation::Proceed => {
                    let weak = Rc::downgrade(&m);
                    *m.pending_close.borrow_mut() = Some(Timeout::new(close_delay_ms, move || {
                        if let Some(modal) = weak.upgrade() {
                            modal.close();
                        }
                    }));
                }
                Confirmation::Blocked => event.prevent_default(),
            }
        })?);
    }

    teardown.keep(modal);
    Ok(teardown)
}
