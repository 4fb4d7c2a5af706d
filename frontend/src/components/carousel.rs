use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::carousel::{self, SlideTrigger};
use crate::state::{PageContext, PageEvent};
use crate::utils::dom::{self, Listener, Teardown};
use crate::utils::rate_limit::Debouncer;

#[function_component(Carousel)]
pub fn carousel() -> Html {
    use_behavior("carousel", attach);
    html! {}
}

struct Controller {
    page: PageContext,
    track: HtmlElement,
    /// Safety release of the transition lock when `scrollend` never comes.
    settle: RefCell<Option<Timeout>>,
    autoplay: RefCell<Option<Interval>>,
}

impl Controller {
    fn go_to(self: &Rc<Self>, index: usize, trigger: SlideTrigger) {
        let transition = match self.page.go_to_slide(index) {
            Ok(transition) => transition,
            Err(reason) => {
                log::debug!("Slide {} ({:?}) skipped: {}", index, trigger, reason);
                return;
            }
        };

        let config = self.page.config();
        let slide_width = dom::query_all_in(&self.track, ".carousel-slide")
            .first()
            .map_or(0.0, |slide| slide.offset_width() as f64);
        dom::smooth_scroll_element_to(
            &self.track,
            carousel::slide_offset(index, slide_width, config.carousel_gap_px),
        );

        let page = self.page.clone();
        *self.settle.borrow_mut() = Some(Timeout::new(config.carousel_settle_ms, move || {
            page.finish_slide(transition.generation);
        }));

        if config.autoplay_policy.restarts_after(trigger) && self.page.is_autoplay_running() {
            self.start_autoplay();
        }
    }

    fn advance(self: &Rc<Self>) {
        if let Some(next) = self.page.next_slide() {
            self.go_to(next, SlideTrigger::Autoplay);
        }
    }

    /// Starts autoplay, or restarts its interval when already running.
    fn start_autoplay(self: &Rc<Self>) {
        let controller = Rc::downgrade(self);
        let interval = Interval::new(self.page.config().carousel_autoplay_ms, move || {
            if let Some(controller) = controller.upgrade() {
                controller.advance();
            }
        });
        *self.autoplay.borrow_mut() = Some(interval);
    }

    fn stop_autoplay(&self) {
        self.autoplay.borrow_mut().take();
    }
}

impl Drop for Controller {
    fn drop(&mut self) {
        self.stop_autoplay();
        self.settle.borrow_mut().take();
    }
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let track = dom::query(".carousel-track").ok_or(Error::MissingElement(".carousel-track"))?;
    let dots = dom::query_all(".carousel-dot");
    page.register_slides(dom::query_all_in(&track, ".carousel-slide").len());

    let controller = Rc::new(Controller {
        page: page.clone(),
        track: track.clone(),
        settle: RefCell::new(None),
        autoplay: RefCell::new(None),
    });
    let mut teardown = Teardown::default();

    {
        let dots = dots.clone();
        let controller = Rc::downgrade(&controller);
        teardown.keep(page.subscribe(move |event| match *event {
            PageEvent::SlideChanged { index } => {
                for (i, dot) in dots.iter().enumerate() {
                    dom::set_class(dot, "active", i == index);
                }
            }
            PageEvent::AutoplayToggled { running } => {
                if let Some(controller) = controller.upgrade() {
                    if running {
                        controller.start_autoplay();
                    } else {
                        controller.stop_autoplay();
                    }
                }
            }
            _ => {}
        }));
    }

    for (index, dot) in dots.iter().enumerate() {
        let controller = controller.clone();
        teardown.keep(Listener::new(dot, "click", move |_| {
            controller.go_to(index, SlideTrigger::Manual);
        })?);
    }

    // The platform's scroll completion releases the lock as soon as the
    // animated scroll has landed.
    {
        let page = page.clone();
        teardown.keep(Listener::new(&track, "scrollend", move |_| {
            page.finish_current_slide();
        })?);
    }

    {
        let window = dom::window()?;
        let mut debouncer = Debouncer::new(page.config().resize_debounce_ms);
        let controller = Rc::downgrade(&controller);
        teardown.keep(Listener::new(&window, "resize", move |_| {
            let controller = controller.clone();
            debouncer.call(move || {
                if let Some(controller) = controller.upgrade() {
                    let current = controller.page.current_slide();
                    controller.go_to(current, SlideTrigger::Reposition);
                }
            });
        })?);
    }

    // Autoplay pauses while the page is in a background tab.
    {
        let document = dom::document()?;
        let page = page.clone();
        let doc = document.clone();
        teardown.keep(Listener::new(&document, "visibilitychange", move |_| {
            page.set_autoplay(!doc.hidden());
        })?);
    }

    if page.is_autoplay_running() {
        controller.start_autoplay();
    }
    teardown.keep(controller);
    Ok(teardown)
}
