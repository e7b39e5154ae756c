use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no global `window`")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("scheduler has no session attached")]
    Detached,
    #[error("javascript error: {0}")]
    Js(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        use wasm_bindgen::JsCast;

        if let Some(err) = value.dyn_ref::<js_sys::Error>() {
            return Error::Js(String::from(err.message()));
        }
        Error::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
