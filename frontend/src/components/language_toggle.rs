use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{CustomEvent, CustomEventInit, HtmlElement};
use yew::prelude::*;

use super::use_behavior;
use crate::error::Error;
use crate::interactions::language::{self, Language, LanguageView, TextPair};
use crate::state::{PageContext, PageEvent};
use crate::utils::dom::{self, Listener, Teardown};
use crate::utils::storage::LocalStorage;

/// Window event announcing the active language to other scripts.
pub const LANGUAGE_CHANGED_EVENT: &str = "languageChanged";

#[derive(Serialize)]
struct LanguageChangedDetail {
    language: &'static str,
}

#[function_component(LanguageToggle)]
pub fn language_toggle() -> Html {
    use_behavior("language toggle", attach);
    html! {}
}

fn attach(page: &PageContext) -> Result<Teardown, Error> {
    let toggle = dom::query(".lang-toggle");
    let storage_key = page.config().storage_key.clone();
    let mut teardown = Teardown::default();

    {
        let toggle = toggle.clone();
        teardown.keep(page.subscribe(move |event| {
            if let PageEvent::LanguageChanged(lang) = *event {
                render(lang, toggle.as_ref());
                language::save_preference(&LocalStorage, &storage_key, lang);
                broadcast(lang);
            }
        }));
    }

    if let Some(toggle) = toggle {
        let page = page.clone();
        teardown.keep(Listener::new(&toggle, "click", move |_| {
            page.toggle_language();
        })?);
    }

    page.announce_language();
    Ok(teardown)
}

/// Applies `lang` to the whole page in one pass.
fn render(lang: Language, toggle: Option<&HtmlElement>) {
    let view = LanguageView::for_language(lang);
    let Ok(document) = dom::document() else {
        return;
    };

    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", view.lang);
        let _ = root.set_attribute("dir", view.dir);
    }
    if let Some(body) = document.body() {
        let _ = body.set_attribute("dir", view.dir);
    }

    for element in dom::query_all(&language::translatable_selector()) {
        let pair = TextPair {
            arabic: element.get_attribute(&Language::Arabic.attribute()).unwrap_or_default(),
            english: element.get_attribute(&Language::English.attribute()).unwrap_or_default(),
        };
        element.set_text_content(Some(pair.text(lang)));
    }

    if let Some(label) = toggle.and_then(|t| t.query_selector("#langText").ok().flatten()) {
        label.set_text_content(Some(view.toggle_label));
    }
}

fn broadcast(lang: Language) {
    let detail = LanguageChangedDetail {
        language: lang.code(),
    };
    let result = serde_json::to_string(&detail)
        .map_err(Error::from)
        .and_then(|json| js_sys::JSON::parse(&json).map_err(Error::from))
        .and_then(|detail: JsValue| {
            let init = CustomEventInit::new();
            init.set_detail(&detail);
            CustomEvent::new_with_event_init_dict(LANGUAGE_CHANGED_EVENT, &init).map_err(Error::from)
        })
        .and_then(|event| dom::window()?.dispatch_event(&event).map_err(Error::from));
    if let Err(e) = result {
        log::warn!("Failed to announce language change: {}", e);
    }
}
