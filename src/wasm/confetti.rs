use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Animation, HtmlElement};

use super::dom;
use super::page::PageRef;
use super::timeline::{self, Targets, Vars};
use crate::confetti::{self, ConfettiPiece};
use crate::error::InviteError;

/// Fire one burst from the centre of the screen. Each dot removes itself when
/// its animation completes.
pub fn burst(page: &PageRef) -> Result<(), InviteError> {
    let body = page
        .document
        .body()
        .ok_or_else(|| InviteError::MissingElement("body".to_string()))?;
    let pieces = confetti::burst(&page.config.confetti, &mut *page.rng());

    for piece in &pieces {
        let el = dom::create_div(&page.document)?;
        el.style()
            .set_css_text(&format!("{}background:{};", ConfettiPiece::BASE_STYLE, piece.color));
        body.append_child(&el)?;

        let animated = if page.caps.timeline {
            with_timeline(&el, piece)
        } else {
            natively(&el, piece)
        };
        if let Err(e) = animated {
            log::debug!("confetti piece not animated: {e}");
            el.remove();
        }
    }
    Ok(())
}

fn with_timeline(el: &HtmlElement, piece: &ConfettiPiece) -> Result<(), InviteError> {
    let node: JsValue = el.clone().into();
    let done = el.clone();
    let vars = Vars::new()
        .num("x", piece.dx)
        .num("y", piece.dy)
        .num("scale", piece.scale)
        .num("rotation", piece.rotation_deg)
        .num("opacity", 0.0)
        .num("duration", piece.duration_ms / 1000.0)
        .text("ease", "power2.out")
        .on("onComplete", move || done.remove());
    timeline::tween_to(Targets::Node(&node), vars)
}

/// Web Animations fallback when no timeline engine is loaded.
fn natively(el: &HtmlElement, piece: &ConfettiPiece) -> Result<(), InviteError> {
    let frame = |transform: &str, opacity: f64| -> Object {
        let obj = Object::new();
        Reflect::set(&obj, &"transform".into(), &transform.into()).ok();
        Reflect::set(&obj, &"opacity".into(), &opacity.into()).ok();
        obj
    };
    let (from, to) = piece.keyframes();
    let keyframes: Array = [frame(&from, 1.0), frame(&to, 0.0)].iter().collect();

    let options = Object::new();
    Reflect::set(&options, &"duration".into(), &piece.duration_ms.into())?;
    Reflect::set(&options, &"easing".into(), &"ease-out".into())?;
    Reflect::set(&options, &"fill".into(), &"forwards".into())?;

    let animate: Function = Reflect::get(el, &"animate".into())?
        .dyn_into()
        .map_err(|_| InviteError::Js("Element.animate unavailable".to_string()))?;
    let animation: Animation = animate
        .call2(el, &keyframes, &options)?
        .dyn_into()
        .map_err(|_| InviteError::Js("animate() returned no Animation".to_string()))?;

    let done = el.clone();
    let on_finish = Closure::once_into_js(move || done.remove());
    animation.set_onfinish(Some(on_finish.unchecked_ref()));
    Ok(())
}
