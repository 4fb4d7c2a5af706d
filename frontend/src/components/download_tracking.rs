use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::state::PageContext;
use crate::utils::analytics::{self, AnalyticsEvent};
use crate::utils::dom::{self, Listener, Teardown};

#[function_component(DownloadTracking)]
pub fn download_tracking() -> Html {
    use_behavior("download tracking", attach);
    html! {}
}

fn attach(_page: &PageContext) -> Result<Teardown, Error> {
    let mut teardown = Teardown::default();
    for button in dom::query_all(".btn-download, .btn-primary[href*=\"apk\"]") {
        teardown.keep(Listener::new(&button, "click", |_| {
            analytics::track(&AnalyticsEvent::download_click());
        })?);
    }
    Ok(teardown)
}
