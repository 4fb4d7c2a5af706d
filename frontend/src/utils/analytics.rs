use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

/// Event reported to the page's analytics hook (`window.gtag`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsEvent {
    #[serde(skip)]
    pub action: String,
    #[serde(rename = "event_category")]
    pub category: String,
    #[serde(rename = "event_label")]
    pub label: String,
}

impl AnalyticsEvent {
    pub fn new(category: &str, action: &str, label: &str) -> Self {
        Self {
            action: action.to_string(),
            category: category.to_string(),
            label: label.to_string(),
        }
    }

    pub fn download_click() -> Self {
        Self::new("engagement", "download_click", "APK Download")
    }

    /// Parameters object passed along with the action.
    pub fn params_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Reports `event` when the analytics hook is installed. A page without
/// analytics silently drops it.
pub fn track(event: &AnalyticsEvent) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hook = match js_sys::Reflect::get(&window, &JsValue::from_str("gtag")) {
        Ok(hook) => hook,
        Err(_) => return,
    };
    let Some(gtag) = hook.dyn_ref::<js_sys::Function>() else {
        log::debug!("No analytics hook, dropping {:?}", event);
        return;
    };
    let params = match js_sys::JSON::parse(&event.params_json()) {
        Ok(params) => params,
        Err(e) => {
            log::warn!("Failed to build analytics parameters: {:?}", e);
            return;
        }
    };
    if let Err(e) = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(&event.action),
        &params,
    ) {
        log::warn!("Analytics hook failed: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_carry_category_and_label_only() {
        let event = AnalyticsEvent::download_click();
        let params: serde_json::Value = serde_json::from_str(&event.params_json()).unwrap();
        assert_eq!(
            params,
            serde_json::json!({
                "event_category": "engagement",
                "event_label": "APK Download",
            })
        );
        assert_eq!(event.action, "download_click");
    }
}
