use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::InviteError;

pub fn window() -> Result<Window, InviteError> {
    web_sys::window().ok_or(InviteError::NoWindow)
}

pub fn by_id<T: JsCast>(doc: &Document, id: &str) -> Result<T, InviteError> {
    doc.get_element_by_id(id)
        .ok_or_else(|| InviteError::MissingElement(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| InviteError::WrongElementType(format!("#{id}")))
}

pub fn query(doc: &Document, selector: &str) -> Result<HtmlElement, InviteError> {
    doc.query_selector(selector)?
        .ok_or_else(|| InviteError::MissingElement(selector.to_string()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InviteError::WrongElementType(selector.to_string()))
}

/// All `HtmlElement` descendants of `root` matching `selector`, in document order.
pub fn query_all(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn query_all_in_document(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<Element>().ok())
        .collect()
}

pub fn create_div(doc: &Document) -> Result<HtmlElement, InviteError> {
    doc.create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| InviteError::WrongElementType("div".to_string()))
}

pub fn set_style(el: &HtmlElement, prop: &str, value: &str) {
    el.style().set_property(prop, value).ok();
}

/// Run `f` once after `ms`. The closure frees itself after it fires.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) -> Result<i32, InviteError> {
    let cb = Closure::once_into_js(f);
    let id = window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms as i32,
    )?;
    Ok(id)
}

/// Run `f` every `ms` for the rest of the page's life, or until cleared.
pub fn set_interval(ms: u32, f: impl FnMut() + 'static) -> Result<i32, InviteError> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
    let id = window()?.set_interval_with_callback_and_timeout_and_arguments_0(
        cb.as_ref().unchecked_ref(),
        ms as i32,
    )?;
    cb.forget();
    Ok(id)
}

pub fn clear_interval(id: i32) {
    if let Ok(w) = window() {
        w.clear_interval_with_handle(id);
    }
}

pub fn on<E: FromWasmAbi + 'static>(
    target: &web_sys::EventTarget,
    event: &str,
    f: impl FnMut(E) + 'static,
) -> Result<(), InviteError> {
    let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

pub fn request_animation_frame(f: &Closure<dyn FnMut(f64)>) -> Result<i32, InviteError> {
    Ok(window()?.request_animation_frame(f.as_ref().unchecked_ref())?)
}

/// Log a failed subsystem start without disturbing anything else.
pub fn report(feature: &str, result: Result<(), InviteError>) {
    match result {
        Ok(()) => log::debug!("{feature}: started"),
        Err(e) if e.is_missing_target() => log::debug!("{feature}: skipped, {e}"),
        Err(e) => log::warn!("{feature}: {e}"),
    }
}
