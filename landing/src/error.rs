//! Error types.
//!
//! Nothing on the page surfaces an error to the visitor. These exist so the
//! browser glue and the token loader can report what went wrong through
//! `tracing` and carry on.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure while talking to the browser.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global `window` available")]
    NoWindow,

    #[error("`{0}` did not return a number")]
    NotANumber(&'static str),

    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        DomError::Js(message)
    }
}

/// The embedded design-token table could not be used.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("invalid design token table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("palette `{0}` has no shades")]
    EmptyPalette(String),
}

/// Testimonial indicator pointed past the end of the list.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("testimonial {index} is out of range (have {len})")]
    OutOfRange { index: usize, len: usize },
}
