use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No window available")]
    NoWindow,
    #[error("No document available")]
    NoDocument,
    #[error("Missing element: {0}")]
    MissingElement(&'static str),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Storage(String),
}

impl Error {
    /// Level at which a widget that failed to attach is reported. Missing
    /// markup only means the page does not use that widget.
    pub fn log_level(&self) -> log::Level {
        match self {
            Error::MissingElement(_) => log::Level::Debug,
            _ => log::Level::Warn,
        }
    }
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::JSON::stringify(&value)
                    .ok()
                    .and_then(|s| s.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Js(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_markup_is_quieter_than_real_failures() {
        assert_eq!(Error::MissingElement(".carousel-track").log_level(), log::Level::Debug);
        assert_eq!(Error::Js("TypeError".to_string()).log_level(), log::Level::Warn);
        assert_eq!(Error::NoDocument.log_level(), log::Level::Warn);
    }
}
