use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::use_behavior;
use crate::config::Config;
use crate::error::Error;
use crate::interactions::counter::StatCounter;
use crate::interactions::reveal::OneShot;
use crate::state::PageContext;
use crate::utils::dom::{self, ObserverGuard, Teardown};

const REVEAL_SELECTOR: &str =
    ".feature-card, .problem-card, .solution-card, .testimonial-card, .timeline-item";
const STAT_SELECTOR: &str = ".stat-number";
const ANIMATED_MARKER: &str = "data-animated";

/// Entrance animation for cards entering the viewport.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll() -> Html {
    use_behavior("reveal on scroll", attach_reveal);
    html! {}
}

/// Count-up animation of the stat figures.
#[function_component(StatCounters)]
pub fn stat_counters() -> Html {
    use_behavior("stat counters", attach_stats);
    html! {}
}

/// Observes `elements` and calls `on_enter` the first time each one
/// intersects. Elements are unobserved right after.
fn observe_once(
    elements: &[web_sys::HtmlElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_enter: impl FnMut(Element) + 'static,
) -> Result<Option<ObserverGuard>, Error> {
    if elements.is_empty() {
        return Ok(None);
    }
    let targets: Vec<Element> = elements.iter().map(|el| el.clone().into()).collect();
    let mut entered = OneShot::new(targets.len());
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                // A batch may still hold an entry queued before unobserve.
                let index = targets.iter().position(|el| *el == target);
                if index.map_or(false, |i| entered.enter(i)) {
                    on_enter(target);
                }
            }
        },
    );
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    let guard = ObserverGuard::new(observer, callback);
    for element in elements {
        guard.observe(element);
    }
    Ok(Some(guard))
}

fn attach_reveal(page: &PageContext) -> Result<Teardown, Error> {
    let config = page.config();
    let mut teardown = Teardown::default();
    let observer = observe_once(
        &dom::query_all(REVEAL_SELECTOR),
        config.reveal_threshold,
        Some(config.reveal_root_margin.as_str()),
        |target| dom::set_class(&target, "animate-in", true),
    )?;
    if let Some(observer) = observer {
        teardown.keep(observer);
    }
    Ok(teardown)
}

/// Cleared on teardown so running animations stop at their next step.
struct Alive(Rc<Cell<bool>>);

impl Drop for Alive {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

fn attach_stats(page: &PageContext) -> Result<Teardown, Error> {
    let config = page.config();
    let alive = Rc::new(Cell::new(true));
    let mut teardown = Teardown::default();

    let observer = {
        let config = config.clone();
        let alive = alive.clone();
        observe_once(&dom::query_all(STAT_SELECTOR), config.stats_threshold, None, move |target| {
            if target.has_attribute(ANIMATED_MARKER) {
                return;
            }
            let _ = target.set_attribute(ANIMATED_MARKER, "true");
            animate_stat(target, &config, alive.clone());
        })?
    };
    if let Some(observer) = observer {
        teardown.keep(observer);
    }
    teardown.keep(Alive(alive));
    Ok(teardown)
}

fn animate_stat(element: Element, config: &Config, alive: Rc<Cell<bool>>) {
    let text = element.text_content().unwrap_or_default();
    let counter = match StatCounter::parse(&text, config.stats_steps) {
        Ok(counter) => counter,
        Err(e) => {
            log::debug!("Skipping stat animation: {}", e);
            return;
        }
    };
    let step_ms = config.stats_step_ms();
    spawn_local(async move {
        for frame in counter.frames() {
            TimeoutFuture::new(step_ms).await;
            if !alive.get() {
                return;
            }
            element.set_text_content(Some(&frame));
        }
    });
}
