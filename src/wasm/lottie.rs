use js_sys::{Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::dom;
use super::page::PageRef;
use crate::error::InviteError;

const CONTAINER_ID: &str = "lottie-container";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = lottie, js_name = loadAnimation, catch)]
    fn load_animation(params: &Object) -> Result<JsValue, JsValue>;
}

/// Small looping heart in the bottom-right corner, when the player is present.
pub fn start(page: &PageRef) -> Result<(), InviteError> {
    if !page.caps.vector {
        return Ok(());
    }
    let container: HtmlElement = dom::by_id(&page.document, CONTAINER_ID)?;
    for (prop, value) in [
        ("position", "fixed"),
        ("bottom", "14px"),
        ("right", "14px"),
        ("width", "90px"),
        ("height", "90px"),
        ("z-index", "10"),
        ("opacity", ".85"),
        ("pointer-events", "none"),
    ] {
        dom::set_style(&container, prop, value);
    }

    let params = Object::new();
    let set = |k: &str, v: JsValue| {
        Reflect::set(&params, &JsValue::from_str(k), &v).ok();
    };
    set("container", container.into());
    set("renderer", "svg".into());
    set("loop", true.into());
    set("autoplay", true.into());
    set("path", page.config.lottie_path.as_str().into());

    if let Err(e) = load_animation(&params) {
        log::warn!("lottie load failed: {}", InviteError::from(e));
    }
    Ok(())
}
