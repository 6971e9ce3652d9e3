use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;
use web_sys::{EventTarget, HtmlElement, KeyboardEvent, MouseEvent};

use super::timeline::{self, At, Sequence, Targets, Vars};
use super::{audio, decor, dom, reveal};
use super::page::PageRef;
use crate::error::InviteError;
use crate::gate::{Gate, GateAction};

const OVERLAY_ID: &str = "intro-overlay";
const OPEN_BUTTON_ID: &str = "intro-text";
const DOOR_SECONDS: f64 = 1.0;
const OVERLAY_FADE_SECONDS: f64 = 0.6;

/// Put the gate up, or skip straight to the card when the URL asks for it.
pub fn start(page: PageRef) {
    let overlay: HtmlElement = match dom::by_id(&page.document, OVERLAY_ID) {
        Ok(el) => el,
        Err(e) => return dom::report("intro", Err(e)),
    };
    let gate = Rc::new(RefCell::new(Gate::new(page.caps)));

    if bypass_requested(&page) {
        log::info!("intro bypassed via URL");
        if gate.borrow_mut().bypass() == GateAction::Reveal {
            open_card(&page, &overlay);
        }
        return;
    }

    let intro_tl = if page.caps.timeline {
        dom::report("falling petals", decor::falling_petals(&page));
        match intro_timeline() {
            Ok(tl) => Some(tl),
            Err(e) => {
                log::warn!("intro timeline: {e}");
                None
            }
        }
    } else {
        None
    };

    dom::report("intro gate", wire_button(page, gate, overlay, intro_tl));
}

fn wire_button(
    page: PageRef,
    gate: Rc<RefCell<Gate>>,
    overlay: HtmlElement,
    intro_tl: Option<Sequence>,
) -> Result<(), InviteError> {
    let button: HtmlElement = dom::by_id(&page.document, OPEN_BUTTON_ID)?;
    let target: EventTarget = button.clone().into();

    let activate = Rc::new(move || {
        let action = gate.borrow_mut().activate();
        match action {
            GateAction::Ignore => {}
            GateAction::Reveal => open_card(&page, &overlay),
            GateAction::PlayDoors => {
                audio::play_intro(&page);
                if let Err(e) = play_doors(&page, &gate, &button, &overlay) {
                    log::warn!("door animation failed: {e}");
                    if gate.borrow_mut().finish_transition() == GateAction::Reveal {
                        open_card(&page, &overlay);
                    }
                }
                if let Some(tl) = &intro_tl {
                    tl.play();
                }
            }
        }
    });

    let on_click = activate.clone();
    dom::on(&target, "click", move |_: MouseEvent| on_click())?;
    dom::on(&target, "keydown", move |e: KeyboardEvent| {
        if matches!(e.key().as_str(), "Enter" | " ") {
            e.prevent_default();
            activate();
        }
    })?;
    Ok(())
}

/// Two doors swing open; once they finish the overlay fades and the card opens.
fn play_doors(
    page: &PageRef,
    gate: &Rc<RefCell<Gate>>,
    button: &HtmlElement,
    overlay: &HtmlElement,
) -> Result<(), InviteError> {
    let on_start = {
        let button = button.clone();
        move || dom::set_style(&button, "visibility", "hidden")
    };
    let on_complete = {
        let page = page.clone();
        let gate = gate.clone();
        let overlay = overlay.clone();
        move || fade_overlay(page, gate, overlay)
    };

    let door = |origin: &str, angle: f64| {
        Vars::new()
            .text("transformOrigin", origin)
            .num("rotateY", angle)
            .num("duration", DOOR_SECONDS)
            .text("ease", "power3.inOut")
    };

    Sequence::new(Vars::new().on("onStart", on_start).on("onComplete", on_complete))?
        .to(Targets::Selector("#door-left"), door("left center", -100.0), At::End)?
        .to(Targets::Selector("#door-right"), door("right center", 100.0), At::Label("<"))?;
    Ok(())
}

fn fade_overlay(page: PageRef, gate: Rc<RefCell<Gate>>, overlay: HtmlElement) {
    let node: JsValue = overlay.clone().into();
    let finish = {
        let page = page.clone();
        let gate = gate.clone();
        let overlay = overlay.clone();
        move || {
            if gate.borrow_mut().finish_transition() == GateAction::Reveal {
                open_card(&page, &overlay);
            }
        }
    };
    let fade = Vars::new()
        .num("opacity", 0.0)
        .num("duration", OVERLAY_FADE_SECONDS)
        .on("onComplete", finish);
    if let Err(e) = timeline::tween_to(Targets::Node(&node), fade) {
        log::warn!("overlay fade failed: {e}");
        if gate.borrow_mut().finish_transition() == GateAction::Reveal {
            open_card(&page, &overlay);
        }
    }
}

/// Bride and groom slide in, then swell and fade. Paused until the gate opens.
fn intro_timeline() -> Result<Sequence, InviteError> {
    let slide_in = |dx: f64| {
        Vars::new()
            .num("opacity", 0.0)
            .num("x", dx)
            .num("duration", 1.2)
            .text("ease", "back.out(1.5)")
    };
    Sequence::new(Vars::new().flag("paused", true))?
        .from(Targets::Selector("#intro-bride"), slide_in(100.0), At::Seconds(0.5))?
        .from(Targets::Selector("#intro-groom"), slide_in(-100.0), At::Seconds(0.5))?
        .to(
            Targets::Selectors(&["#intro-bride", "#intro-groom"]),
            Vars::new().num("scale", 1.2).num("opacity", 0.0).num("duration", 0.8),
            At::Label("+=0.5"),
        )
}

fn open_card(page: &PageRef, overlay: &HtmlElement) {
    dom::set_style(overlay, "display", "none");
    reveal::run(page);
}

/// A malformed location just means the normal gated flow.
fn bypass_requested(page: &PageRef) -> bool {
    let Ok(href) = page.window.location().href() else {
        return false;
    };
    match web_sys::Url::new(&href) {
        Ok(url) => {
            let params = url.search_params();
            crate::url::bypass_requested(&url.hash(), &page.config.bypass_token, |key| params.has(key))
        }
        Err(_) => false,
    }
}
