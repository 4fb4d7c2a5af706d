use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::title::TitleSwap;
use crate::state::PageContext;
use crate::utils::dom::{self, Listener, Teardown};

#[function_component(VisibilityTitle)]
pub fn visibility_title() -> Html {
    use_behavior("visibility title", attach);
    html! {}
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let document = dom::document()?;
    let swap = TitleSwap::new(document.title(), page.config().farewell_title.clone());
    let mut teardown = Teardown::default();

    let doc = document.clone();
    teardown.keep(Listener::new(&document, "visibilitychange", move |_| {
        doc.set_title(swap.title(doc.hidden()));
    })?);
    Ok(teardown)
}
