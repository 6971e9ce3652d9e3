use std::cell::Cell;
use std::rc::Rc;

use web_sys::HtmlElement;

use super::dom;
use super::page::PageRef;
use crate::countdown::{Countdown, Tick};
use crate::error::InviteError;

const FIELD_IDS: [&str; 4] = ["d", "h", "m", "s"];

pub fn start(page: &PageRef) -> Result<(), InviteError> {
    let target_text = &page.config.countdown_target;
    let target_ms = js_sys::Date::parse(target_text);
    if target_ms.is_nan() {
        return Err(InviteError::BadTarget(target_text.clone()));
    }

    let fields = FIELD_IDS
        .iter()
        .map(|id| dom::by_id::<HtmlElement>(&page.document, id))
        .collect::<Result<Vec<_>, _>>()?;

    let mut countdown = Countdown::new(target_ms);
    let render = move |values: &[String; 4]| {
        for (el, value) in fields.iter().zip(values) {
            el.set_text_content(Some(value.as_str()));
        }
    };

    // Render right away, then on the cadence until the target passes.
    let finished = match countdown.tick(js_sys::Date::now()) {
        Tick::Render(values) => {
            render(&values);
            false
        }
        Tick::Finished(values) => {
            render(&values);
            true
        }
        Tick::Stopped => true,
    };
    if finished {
        log::debug!("countdown target already reached");
        return Ok(());
    }

    let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let own_handle = handle.clone();
    let id = dom::set_interval(page.config.countdown_tick_ms, move || {
        match countdown.tick(js_sys::Date::now()) {
            Tick::Render(values) => render(&values),
            Tick::Finished(values) => {
                render(&values);
                if let Some(id) = own_handle.get() {
                    dom::clear_interval(id);
                }
            }
            Tick::Stopped => {}
        }
    })?;
    handle.set(Some(id));
    Ok(())
}
