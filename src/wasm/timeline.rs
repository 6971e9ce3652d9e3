//! Bindings to the page's `gsap` global.
//!
//! Nothing here probes for the global; callers check
//! [`Capabilities::timeline`](crate::capability::Capabilities) first. Every
//! import is `catch` so an exception inside the engine surfaces as an error
//! instead of a trap.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::error::InviteError;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Object)]
    pub type Timeline;

    #[wasm_bindgen(js_namespace = gsap, js_name = timeline, catch)]
    fn gsap_timeline(vars: &Object) -> Result<Timeline, JsValue>;

    #[wasm_bindgen(js_namespace = gsap, js_name = to, catch)]
    fn gsap_to(targets: &JsValue, vars: &Object) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, js_name = to, catch)]
    fn tl_to(this: &Timeline, targets: &JsValue, vars: &Object, position: &JsValue)
        -> Result<Timeline, JsValue>;

    #[wasm_bindgen(method, js_name = from, catch)]
    fn tl_from(
        this: &Timeline,
        targets: &JsValue,
        vars: &Object,
        position: &JsValue,
    ) -> Result<Timeline, JsValue>;

    #[wasm_bindgen(method, js_name = play)]
    fn tl_play(this: &Timeline) -> Timeline;
}

/// Tween/timeline options object.
pub struct Vars(Object);

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

impl Vars {
    pub fn new() -> Self {
        Vars(Object::new())
    }

    fn put(self, key: &str, value: &JsValue) -> Self {
        Reflect::set(&self.0, &JsValue::from_str(key), value).ok();
        self
    }

    pub fn num(self, key: &str, value: f64) -> Self {
        self.put(key, &JsValue::from_f64(value))
    }

    pub fn text(self, key: &str, value: &str) -> Self {
        self.put(key, &JsValue::from_str(value))
    }

    pub fn nested(self, key: &str, value: Vars) -> Self {
        let obj: JsValue = value.0.into();
        self.put(key, &obj)
    }

    pub fn flag(self, key: &str, value: bool) -> Self {
        self.put(key, &JsValue::from_bool(value))
    }

    /// Attach a one-shot callback such as `onStart` or `onComplete`.
    pub fn on(self, key: &str, f: impl FnOnce() + 'static) -> Self {
        let cb = Closure::once_into_js(f);
        self.put(key, &cb)
    }
}

/// Animation targets: a CSS selector, a list of selectors, or a node.
pub enum Targets<'a> {
    Selector(&'a str),
    Selectors(&'a [&'a str]),
    Node(&'a JsValue),
}

impl Targets<'_> {
    fn to_js(&self) -> JsValue {
        match self {
            Targets::Selector(s) => JsValue::from_str(s),
            Targets::Selectors(list) => list
                .iter()
                .map(|s| JsValue::from_str(s))
                .collect::<Array>()
                .into(),
            Targets::Node(v) => (*v).clone(),
        }
    }
}

/// Where in the timeline a tween is placed.
pub enum At<'a> {
    End,
    Seconds(f64),
    Label(&'a str),
}

impl At<'_> {
    fn to_js(&self) -> JsValue {
        match self {
            At::End => JsValue::UNDEFINED,
            At::Seconds(s) => JsValue::from_f64(*s),
            At::Label(l) => JsValue::from_str(l),
        }
    }
}

pub struct Sequence(Timeline);

impl Sequence {
    pub fn new(vars: Vars) -> Result<Self, InviteError> {
        Ok(Sequence(gsap_timeline(&vars.0)?))
    }

    pub fn to(self, targets: Targets<'_>, vars: Vars, at: At<'_>) -> Result<Self, InviteError> {
        self.0.tl_to(&targets.to_js(), &vars.0, &at.to_js())?;
        Ok(self)
    }

    pub fn from(self, targets: Targets<'_>, vars: Vars, at: At<'_>) -> Result<Self, InviteError> {
        self.0.tl_from(&targets.to_js(), &vars.0, &at.to_js())?;
        Ok(self)
    }

    pub fn play(&self) {
        self.0.tl_play();
    }
}

/// Standalone tween.
pub fn tween_to(targets: Targets<'_>, vars: Vars) -> Result<(), InviteError> {
    gsap_to(&targets.to_js(), &vars.0)?;
    Ok(())
}
