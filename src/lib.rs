#![cfg_attr(target_arch = "wasm32", allow(dead_code))]

//! Visual behaviour for the wedding invitation page.
//!
//! The modules at the root are plain logic and build on any target so they can
//! be tested on the host. The browser glue that drives them is only compiled
//! for wasm32.

pub mod audio;
pub mod capability;
pub mod config;
pub mod confetti;
pub mod countdown;
pub mod decor;
pub mod error;
pub mod fireworks;
pub mod gate;
pub mod rsvp;
pub mod slideshow;
pub mod url;

pub use capability::Capabilities;
pub use config::InviteConfig;
pub use error::InviteError;

#[cfg(target_arch = "wasm32")]
pub use wasm::boot;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use wasm_bindgen::prelude::*;

    mod audio;
    mod confetti;
    mod countdown;
    mod decor;
    mod dom;
    mod fireworks;
    mod intro;
    mod lottie;
    mod page;
    mod reveal;
    mod rsvp;
    mod slideshow;
    mod timeline;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        boot()
    }

    /// Wire the page: music toggle, the late petal wave, and the intro gate.
    pub fn boot() -> Result<(), JsValue> {
        let page = page::Page::load()?;
        web_sys::console::log_2(
            &"%c Wedding Invite Loaded ".into(),
            &"background:#ffb3c6;color:#4a2; padding:4px 8px; border-radius:4px".into(),
        );

        audio::wire_toggle(&page);
        decor::schedule_extra_petals(&page);
        intro::start(page);
        Ok(())
    }
}
