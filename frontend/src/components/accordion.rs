use std::cell::RefCell;
use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::accordion::Accordion;
use crate::state::PageContext;
use crate::utils::dom::{self, Listener, Teardown};

#[function_component(AccordionGroup)]
pub fn accordion_group() -> Html {
    use_behavior("accordion", attach);
    html! {}
}

fn attach(_page: &PageContext) -> Result<Teardown, Error> {
    let items = Rc::new(dom::query_all(".accordion-item"));
    let accordion = Accordion::from_markers(items.iter().map(|item| item.class_list().contains("active")));
    render(&items, &accordion);
    let accordion = Rc::new(RefCell::new(accordion));
    let mut teardown = Teardown::default();

    for (index, item) in items.iter().enumerate() {
        let Ok(Some(header)) = item.query_selector(".accordion-header") else {
            continue;
        };
        let items = items.clone();
        let accordion = accordion.clone();
        teardown.keep(Listener::new(&header, "click", move |_| {
            let mut accordion = accordion.borrow_mut();
            accordion.click(index);
            render(&items, &accordion);
        })?);
    }

    Ok(teardown)
}

fn render(items: &[HtmlElement], accordion: &Accordion) {
    for (index, item) in items.iter().enumerate() {
        dom::set_class(item, "active", accordion.is_open(index));
    }
}
