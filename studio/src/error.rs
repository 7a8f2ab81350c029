//! Error type for fallible DOM access.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while talking to the browser.
///
/// None of these reach the user: event handlers log them and keep the
/// previous visual state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiteError {
    #[error("no global `window` object")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no root element")]
    NoRootElement,

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        SiteError::Js(message)
    }
}

/// Result alias used by the DOM helpers.
pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(SiteError::NoWindow.to_string(), "no global `window` object");
        assert_eq!(
            SiteError::Js("boom".into()).to_string(),
            "javascript error: boom"
        );
    }
}
