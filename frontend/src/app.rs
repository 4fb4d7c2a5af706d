use std::rc::Rc;

use yew::prelude::*;

use crate::components::accordion::AccordionGroup;
use crate::components::animations::{RevealOnScroll, StatCounters};
use crate::components::carousel::Carousel;
use crate::components::consent_modal::ConsentGate;
use crate::components::download_tracking::DownloadTracking;
use crate::components::language_toggle::LanguageToggle;
use crate::components::mobile_menu::MobileMenu;
use crate::components::scroll_effects::ScrollEffects;
use crate::components::visibility_title::VisibilityTitle;
use crate::config::Config;
use crate::interactions::language;
use crate::state::PageContext;
use crate::utils::storage::LocalStorage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<Config>,
}

/// Root of the interaction layer. Widgets attach in the order they are
/// listed, after the page context is built.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let page = {
        let config = props.config.clone();
        use_state(move || {
            let lang = language::load_preference(&LocalStorage, &config.storage_key, config.default_language);
            PageContext::new(config, lang)
        })
    };

    html! {
        <ContextProvider<PageContext> context={(*page).clone()}>
            <ScrollEffects />
            <MobileMenu />
            <AccordionGroup />
            <RevealOnScroll />
            <LanguageToggle />
            <StatCounters />
            <VisibilityTitle />
            <ConsentGate />
            <DownloadTracking />
            <Carousel />
        </ContextProvider<PageContext>>
    }
}
