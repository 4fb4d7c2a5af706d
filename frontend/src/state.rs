//! Page-level state shared by every interactive widget.
//!
//! The record is owned by a [`PageContext`] and only changes through its
//! transition methods. Each transition broadcasts a [`PageEvent`] to the
//! subscribers, which is how widgets keep the DOM in step with the state.
//! Events raised by a handler are queued and delivered after the current
//! one, so every subscriber sees the same order.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

use thiserror::Error;

use crate::config::Config;
use crate::interactions::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    LanguageChanged(Language),
    SlideChanged { index: usize },
    MenuToggled { open: bool },
    AutoplayToggled { running: bool },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideRejected {
    #[error("A slide transition is already in flight")]
    InFlight,
    #[error("The carousel has no slides")]
    NoSlides,
    #[error("Slide {index} is out of range for {count} slides")]
    OutOfRange { index: usize, count: usize },
}

/// A started slide transition. The generation identifies it when the
/// lock is released, so that a late release never unlocks a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideTransition {
    pub index: usize,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    language: Language,
    menu_open: bool,
    current_slide: usize,
    slide_count: usize,
    in_flight: Option<u64>,
    generation: u64,
    autoplay: bool,
}

impl PageState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            menu_open: false,
            current_slide: 0,
            slide_count: 0,
            in_flight: None,
            generation: 0,
            autoplay: true,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn is_animating(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay
    }

    fn begin_slide(&mut self, index: usize) -> Result<SlideTransition, SlideRejected> {
        if self.in_flight.is_some() {
            return Err(SlideRejected::InFlight);
        }
        if self.slide_count == 0 {
            return Err(SlideRejected::NoSlides);
        }
        if index >= self.slide_count {
            return Err(SlideRejected::OutOfRange {
                index,
                count: self.slide_count,
            });
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.current_slide = index;
        Ok(SlideTransition {
            index,
            generation: self.generation,
        })
    }

    fn finish_slide(&mut self, generation: u64) -> bool {
        if self.in_flight == Some(generation) {
            self.in_flight = None;
            true
        } else {
            false
        }
    }
}

type Handler = Rc<dyn Fn(&PageEvent)>;

struct Inner {
    config: Rc<Config>,
    state: RefCell<PageState>,
    handlers: RefCell<Vec<(u64, Handler)>>,
    next_id: Cell<u64>,
    queue: RefCell<VecDeque<PageEvent>>,
    dispatching: Cell<bool>,
}

/// Shared handle to the page state and its subscribers.
#[derive(Clone)]
pub struct PageContext {
    inner: Rc<Inner>,
}

impl PartialEq for PageContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageContext")
            .field("state", &*self.inner.state.borrow())
            .field("subscribers", &self.inner.handlers.borrow().len())
            .finish()
    }
}

/// Keeps a handler registered; dropping it unsubscribes.
pub struct Subscription {
    inner: Weak<Inner>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

impl PageContext {
    pub fn new(config: Rc<Config>, language: Language) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                state: RefCell::new(PageState::new(language)),
                handlers: RefCell::new(Vec::new()),
                next_id: Cell::new(0),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    pub fn config(&self) -> Rc<Config> {
        self.inner.config.clone()
    }

    pub fn snapshot(&self) -> PageState {
        self.inner.state.borrow().clone()
    }

    pub fn language(&self) -> Language {
        self.inner.state.borrow().language()
    }

    pub fn is_menu_open(&self) -> bool {
        self.inner.state.borrow().is_menu_open()
    }

    pub fn current_slide(&self) -> usize {
        self.inner.state.borrow().current_slide()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.state.borrow().is_animating()
    }

    pub fn is_autoplay_running(&self) -> bool {
        self.inner.state.borrow().is_autoplay_running()
    }

    pub fn subscribe(&self, handler: impl Fn(&PageEvent) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .handlers
            .borrow_mut()
            .push((id, Rc::new(handler)));
        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Runs every handler with the state already released, so handlers may
    /// trigger further transitions. Those are queued behind the event being
    /// delivered.
    fn emit(&self, event: PageEvent) {
        self.inner.queue.borrow_mut().push_back(event);
        if self.inner.dispatching.replace(true) {
            return;
        }
        loop {
            let Some(event) = self.inner.queue.borrow_mut().pop_front() else {
                break;
            };
            log::debug!("Page event: {:?}", event);
            let handlers: Vec<Handler> = self
                .inner
                .handlers
                .borrow()
                .iter()
                .map(|(_, handler)| handler.clone())
                .collect();
            for handler in handlers {
                handler(&event);
            }
        }
        self.inner.dispatching.set(false);
    }

    pub fn toggle_menu(&self) -> bool {
        let open = {
            let mut state = self.inner.state.borrow_mut();
            state.menu_open = !state.menu_open;
            state.menu_open
        };
        self.emit(PageEvent::MenuToggled { open });
        open
    }

    /// Closes the menu. Returns false when it was already closed.
    pub fn close_menu(&self) -> bool {
        let was_open = std::mem::replace(&mut self.inner.state.borrow_mut().menu_open, false);
        if was_open {
            self.emit(PageEvent::MenuToggled { open: false });
        }
        was_open
    }

    pub fn set_language(&self, language: Language) {
        self.inner.state.borrow_mut().language = language;
        self.emit(PageEvent::LanguageChanged(language));
    }

    pub fn toggle_language(&self) -> Language {
        let next = self.language().other();
        self.set_language(next);
        next
    }

    /// Re-broadcasts the current language, used for the initial render.
    pub fn announce_language(&self) {
        self.emit(PageEvent::LanguageChanged(self.language()));
    }

    /// Declares how many slides the carousel holds.
    pub fn register_slides(&self, count: usize) {
        let mut state = self.inner.state.borrow_mut();
        state.slide_count = count;
        if state.current_slide >= count {
            state.current_slide = 0;
        }
    }

    /// Starts or stops carousel autoplay. Returns false when nothing changed.
    pub fn set_autoplay(&self, running: bool) -> bool {
        let was = std::mem::replace(&mut self.inner.state.borrow_mut().autoplay, running);
        if was != running {
            self.emit(PageEvent::AutoplayToggled { running });
        }
        was != running
    }

    pub fn go_to_slide(&self, index: usize) -> Result<SlideTransition, SlideRejected> {
        let transition = self.inner.state.borrow_mut().begin_slide(index)?;
        self.emit(PageEvent::SlideChanged { index });
        Ok(transition)
    }

    /// The slide autoplay moves to next, wrapping after the last one.
    pub fn next_slide(&self) -> Option<usize> {
        let state = self.inner.state.borrow();
        match state.slide_count {
            0 => None,
            count => Some((state.current_slide + 1) % count),
        }
    }

    pub fn finish_slide(&self, generation: u64) -> bool {
        self.inner.state.borrow_mut().finish_slide(generation)
    }

    /// Releases whatever transition is in flight.
    pub fn finish_current_slide(&self) -> bool {
        let in_flight = self.inner.state.borrow().in_flight;
        in_flight.map_or(false, |generation| self.finish_slide(generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> PageContext {
        PageContext::new(Rc::new(Config::default()), Language::Arabic)
    }

    fn record(page: &PageContext) -> (Rc<RefCell<Vec<PageEvent>>>, Subscription) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        let subscription = page.subscribe(move |event| sink.borrow_mut().push(*event));
        (events, subscription)
    }

    #[test]
    fn menu_transitions_are_broadcast() {
        let page = context();
        let (events, _sub) = record(&page);

        assert!(page.toggle_menu());
        assert!(page.is_menu_open());
        assert!(page.close_menu());
        assert!(!page.close_menu());
        assert!(page.toggle_menu());
        assert!(!page.toggle_menu());

        assert_eq!(
            *events.borrow(),
            vec![
                PageEvent::MenuToggled { open: true },
                PageEvent::MenuToggled { open: false },
                PageEvent::MenuToggled { open: true },
                PageEvent::MenuToggled { open: false },
            ]
        );
    }

    #[test]
    fn two_language_toggles_restore_the_start() {
        let page = context();
        let (events, _sub) = record(&page);
        let start = page.language();

        assert_eq!(page.toggle_language(), Language::English);
        assert_eq!(page.toggle_language(), start);
        assert_eq!(
            *events.borrow(),
            vec![
                PageEvent::LanguageChanged(Language::English),
                PageEvent::LanguageChanged(Language::Arabic),
            ]
        );
    }

    #[test]
    fn slide_requests_while_in_flight_are_ignored() {
        let page = context();
        page.register_slides(4);
        let (events, _sub) = record(&page);

        let first = page.go_to_slide(2).unwrap();
        let before = page.snapshot();
        assert_eq!(page.go_to_slide(3), Err(SlideRejected::InFlight));
        assert_eq!(page.snapshot(), before);
        assert_eq!(*events.borrow(), vec![PageEvent::SlideChanged { index: 2 }]);

        assert!(page.finish_slide(first.generation));
        assert!(!page.is_animating());
        assert_eq!(page.go_to_slide(3).map(|t| t.index), Ok(3));
    }

    #[test]
    fn out_of_range_slides_are_rejected() {
        let page = context();
        assert_eq!(page.go_to_slide(0), Err(SlideRejected::NoSlides));

        page.register_slides(3);
        assert_eq!(
            page.go_to_slide(3),
            Err(SlideRejected::OutOfRange { index: 3, count: 3 })
        );
        assert_eq!(page.current_slide(), 0);
        assert!(!page.is_animating());
    }

    #[test]
    fn autoplay_wraps_after_last_slide() {
        let page = context();
        assert_eq!(page.next_slide(), None);

        page.register_slides(3);
        let t = page.go_to_slide(2).unwrap();
        page.finish_slide(t.generation);
        assert_eq!(page.next_slide(), Some(0));
    }

    #[test]
    fn stale_release_does_not_unlock_newer_transition() {
        let page = context();
        page.register_slides(3);

        let first = page.go_to_slide(1).unwrap();
        assert!(page.finish_current_slide());
        let second = page.go_to_slide(2).unwrap();

        // The settle timer of the first transition fires late.
        assert!(!page.finish_slide(first.generation));
        assert!(page.is_animating());
        assert!(page.finish_slide(second.generation));
    }

    #[test]
    fn shrinking_slide_count_keeps_index_in_range() {
        let page = context();
        page.register_slides(5);
        let t = page.go_to_slide(4).unwrap();
        page.finish_slide(t.generation);

        page.register_slides(2);
        assert_eq!(page.current_slide(), 0);
    }

    #[test]
    fn handlers_may_trigger_transitions() {
        let page = context();
        let inner = page.clone();
        let _close_on_language = page.subscribe(move |event| {
            if let PageEvent::LanguageChanged(_) = event {
                inner.close_menu();
            }
        });
        let (events, _sub) = record(&page);

        page.toggle_menu();
        page.toggle_language();

        assert!(!page.is_menu_open());
        assert_eq!(
            *events.borrow(),
            vec![
                PageEvent::MenuToggled { open: true },
                PageEvent::LanguageChanged(Language::English),
                PageEvent::MenuToggled { open: false },
            ]
        );
    }

    #[test]
    fn every_subscriber_sees_nested_events_in_order() {
        let page = context();
        let (first, _first) = record(&page);
        let inner = page.clone();
        let _chain = page.subscribe(move |event| match event {
            PageEvent::LanguageChanged(_) => {
                inner.toggle_menu();
            }
            PageEvent::MenuToggled { open: true } => {
                inner.set_autoplay(false);
            }
            _ => {}
        });
        let (last, _last) = record(&page);

        page.set_language(Language::English);

        let expected = vec![
            PageEvent::LanguageChanged(Language::English),
            PageEvent::MenuToggled { open: true },
            PageEvent::AutoplayToggled { running: false },
        ];
        assert_eq!(*first.borrow(), expected);
        assert_eq!(*last.borrow(), expected);
        assert!(page.is_menu_open());
        assert!(!page.is_autoplay_running());
    }

    #[test]
    fn autoplay_start_and_stop_are_broadcast_once() {
        let page = context();
        let (events, _sub) = record(&page);
        assert!(page.is_autoplay_running());

        assert!(!page.set_autoplay(true));
        assert!(page.set_autoplay(false));
        assert!(!page.set_autoplay(false));
        assert!(!page.is_autoplay_running());
        assert!(page.set_autoplay(true));

        assert_eq!(
            *events.borrow(),
            vec![
                PageEvent::AutoplayToggled { running: false },
                PageEvent::AutoplayToggled { running: true },
            ]
        );
    }

    #[test]
    fn stopped_autoplay_leaves_manual_navigation_alone() {
        let page = context();
        page.register_slides(3);
        page.set_autoplay(false);

        let t = page.go_to_slide(1).unwrap();
        assert!(page.finish_slide(t.generation));
        assert_eq!(page.current_slide(), 1);
        assert!(!page.is_autoplay_running());
    }

    #[test]
    fn dropped_subscription_stops_delivery() {
        let page = context();
        let (events, sub) = record(&page);
        page.toggle_menu();
        drop(sub);
        page.toggle_menu();
        assert_eq!(events.borrow().len(), 1);
    }
}
