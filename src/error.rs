use thiserror::Error;

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("no global window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("element {0} not found")]
    MissingElement(String),
    #[error("element {0} has unexpected type")]
    WrongElementType(String),
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("countdown target {0:?} is not a valid timestamp")]
    BadTarget(String),
}

impl InviteError {
    /// Missing targets are an expected, silent no-op for the feature that wanted them.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, InviteError::MissingElement(_))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for InviteError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let text = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &"message".into())
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        InviteError::Js(text)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<InviteError> for wasm_bindgen::JsValue {
    fn from(value: InviteError) -> Self {
        wasm_bindgen::JsValue::from_str(&value.to_string())
    }
}
