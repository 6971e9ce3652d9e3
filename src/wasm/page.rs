use std::cell::{RefCell, RefMut};
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::JsValue;
use web_sys::{Document, Window};

use super::dom;
use crate::capability::Capabilities;
use crate::config::InviteConfig;
use crate::error::InviteError;

const CONFIG_ELEMENT: &str = "invite-config";

/// Everything a subsystem needs, computed once at load and shared by `Rc`.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub caps: Capabilities,
    pub config: InviteConfig,
    rng: RefCell<SmallRng>,
}

pub type PageRef = Rc<Page>;

impl Page {
    pub fn load() -> Result<PageRef, InviteError> {
        let window = dom::window()?;
        let document = window.document().ok_or(InviteError::NoDocument)?;
        let global: JsValue = window.clone().into();
        let caps = Capabilities::probe(|name| {
            js_sys::Reflect::get(&global, &JsValue::from_str(name))
                .map(|v| !v.is_undefined() && !v.is_null())
                .unwrap_or(false)
        });
        let config = load_config(&document);
        log::info!("capabilities: {caps:?}");

        Ok(Rc::new(Page {
            window,
            document,
            caps,
            config,
            rng: RefCell::new(SmallRng::seed_from_u64(js_sys::Date::now() as u64)),
        }))
    }

    pub fn rng(&self) -> RefMut<'_, SmallRng> {
        self.rng.borrow_mut()
    }
}

/// Optional JSON overrides from `<script id="invite-config" type="application/json">`.
fn load_config(document: &Document) -> InviteConfig {
    let Some(text) = document
        .get_element_by_id(CONFIG_ELEMENT)
        .and_then(|el| el.text_content())
    else {
        return InviteConfig::default();
    };
    match InviteConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(e) => {
            log::warn!("ignoring #{CONFIG_ELEMENT}: {e}");
            InviteConfig::default()
        }
    }
}
