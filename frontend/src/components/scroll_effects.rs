use web_sys::{Event, HtmlElement};
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::scroll::{self, ScrollMetrics};
use crate::state::PageContext;
use crate::utils::dom::{self, Listener, Teardown};
use crate::utils::rate_limit::Throttle;

#[function_component(ScrollEffects)]
pub fn scroll_effects() -> Html {
    use_behavior("scroll effects", attach);
    html! {}
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let window = dom::window()?;
    let config = page.config();
    let navbar = dom::query(".navbar");
    let scroll_top = dom::query(".scroll-top");
    let progress_bar = dom::query(".progress-bar");
    let mut teardown = Teardown::default();

    if navbar.is_some() || scroll_top.is_some() {
        let mut throttle = Throttle::new(config.scroll_throttle_ms);
        let navbar = navbar.clone();
        let scroll_top = scroll_top.clone();
        let config = config.clone();
        let win = window.clone();
        teardown.keep(Listener::passive(&window, "scroll", move |_| {
            if !throttle.permit(dom::now()) {
                return;
            }
            let y = win.scroll_y().unwrap_or(0.0);
            if let Some(navbar) = &navbar {
                dom::set_class(navbar, "scrolled", scroll::navbar_scrolled(y, config.navbar_scroll_threshold));
            }
            if let Some(button) = &scroll_top {
                dom::set_class(button, "visible", scroll::scroll_top_visible(y, config.scroll_top_threshold));
            }
        })?);
    }

    if let Some(bar) = progress_bar {
        let mut throttle = Throttle::new(config.progress_throttle_ms);
        let win = window.clone();
        teardown.keep(Listener::passive(&window, "scroll", move |_| {
            if !throttle.permit(dom::now()) {
                return;
            }
            let progress = read_metrics(&win).map_or(0.0, |m| m.progress());
            dom::set_style(&bar, "transform", &format!("scaleX({})", progress));
        })?);
    }

    if let Some(button) = scroll_top {
        teardown.keep(Listener::new(&button, "click", |_| {
            dom::smooth_scroll_window_to(0.0);
        })?);
    }

    for anchor in dom::query_all("a[href^=\"#\"]") {
        let page = page.clone();
        let navbar = navbar.clone();
        let link = anchor.clone();
        teardown.keep(Listener::new(&anchor, "click", move |event| {
            scroll_to_fragment(&event, &link, navbar.as_ref(), &page);
        })?);
    }

    Ok(teardown)
}

fn read_metrics(window: &web_sys::Window) -> Option<ScrollMetrics> {
    let root = window.document()?.document_element()?;
    Some(ScrollMetrics {
        scroll_top: window.scroll_y().ok()?,
        document_height: root.scroll_height() as f64,
        viewport_height: window.inner_height().ok()?.as_f64()?,
    })
}

fn scroll_to_fragment(event: &Event, link: &HtmlElement, navbar: Option<&HtmlElement>, page: &PageContext) {
    event.prevent_default();
    let Some(href) = link.get_attribute("href") else {
        return;
    };
    let Some(selector) = scroll::fragment_target(&href) else {
        return;
    };
    let Some(target) = dom::query(selector) else {
        log::debug!("No element for {}", selector);
        return;
    };
    let navbar_height = navbar.map_or(0.0, |n| n.offset_height() as f64);
    dom::smooth_scroll_window_to(scroll::anchor_offset(target.offset_top() as f64, navbar_height));
    page.close_menu();
}
