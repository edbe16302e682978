use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Request failed: {0}")]
    Transport(#[source] gloo::net::Error),
    #[error("Could not decode response: {0}")]
    Decode(#[source] gloo::net::Error),
    #[error("JS error: {0}")]
    Js(String),
}

impl From<JsValue> for UploadError {
    fn from(value: JsValue) -> Self {
        UploadError::Js(format!("{value:?}"))
    }
}
