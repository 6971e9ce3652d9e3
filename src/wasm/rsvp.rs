use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{EventTarget, HtmlButtonElement, HtmlElement, MouseEvent};

use super::page::PageRef;
use super::{confetti, dom};
use crate::error::InviteError;
use crate::rsvp::{RsvpControl, RsvpEvent};

const BUTTON_ID: &str = "rsvpBtn";
const MESSAGE_STYLE: &str = "position:fixed;inset:0;display:flex;align-items:center;\
    justify-content:center;z-index:4000;font-family:Playfair Display,serif;";
const BUBBLE_STYLE: &str = "background:#ffffffee;padding:26px 34px;border-radius:24px;\
    font-size:20px;color:#d24e6c;box-shadow:0 10px 40px -8px rgba(0,0,0,.25);animation:pop .6s ease;";

pub fn start(page: &PageRef) -> Result<(), InviteError> {
    let button: HtmlButtonElement = dom::by_id(&page.document, BUTTON_ID)?;
    let target: EventTarget = button.clone().into();
    let control = Rc::new(RefCell::new(RsvpControl::default()));
    let page = page.clone();

    dom::on(&target, "click", move |_: MouseEvent| {
        if !control.borrow_mut().press() {
            return;
        }
        button.set_disabled(true);
        button.class_list().add_1("active").ok();

        let message = match flash_message(&page) {
            Ok(el) => Some(el),
            Err(e) => {
                log::debug!("rsvp message: {e}");
                None
            }
        };
        dom::report("confetti", confetti::burst(&page));

        for (delay, event) in RsvpControl::schedule(&page.config.rsvp) {
            let control = control.clone();
            let button = button.clone();
            let message = message.clone();
            let transition_ms = page.config.rsvp.message_transition_ms;
            let fired = dom::set_timeout(delay, move || {
                control.borrow_mut().apply(event);
                match event {
                    RsvpEvent::FadeMessage => {
                        if let Some(el) = &message {
                            dom::set_style(el, "transition", &format!("opacity {transition_ms}ms"));
                            dom::set_style(el, "opacity", "0");
                        }
                    }
                    RsvpEvent::RemoveMessage => {
                        if let Some(el) = &message {
                            el.remove();
                        }
                    }
                    RsvpEvent::Rearm => {
                        button.set_disabled(false);
                        button.class_list().remove_1("active").ok();
                    }
                }
            });
            if let Err(e) = fired {
                log::warn!("rsvp timer: {e}");
            }
        }
    })
}

/// Centred thank-you bubble over the page.
fn flash_message(page: &PageRef) -> Result<HtmlElement, InviteError> {
    let body = page
        .document
        .body()
        .ok_or_else(|| InviteError::MissingElement("body".to_string()))?;
    let overlay = dom::create_div(&page.document)?;
    overlay.style().set_css_text(MESSAGE_STYLE);

    let bubble = dom::create_div(&page.document)?;
    bubble.style().set_css_text(BUBBLE_STYLE);
    bubble.set_text_content(Some(page.config.rsvp.message.as_str()));
    overlay.append_child(&bubble)?;
    body.append_child(&overlay)?;
    Ok(overlay)
}
