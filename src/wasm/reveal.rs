use super::timeline::{At, Sequence, Targets, Vars};
use super::page::PageRef;
use super::{countdown, decor, dom, fireworks, lottie, rsvp, slideshow};
use crate::error::InviteError;

const CARD_SELECTOR: &str = ".card";
const BOUQUET_SELECTOR: &str = ".bouquet-bloom";

/// Show the card and start every per-feature subsystem.
///
/// Only the gate calls this, once it reaches its terminal state, so it runs at
/// most once per page load. Subsystems are independent: one failing to find
/// its target does not stop the others.
pub fn run(page: &PageRef) {
    dom::report("card", show_card(page));
    dom::report("countdown", countdown::start(page));
    dom::report("background hearts", decor::background_hearts(page));
    dom::report("entrance", entrance(page));
    dom::report("rsvp", rsvp::start(page));
    dom::report("lottie", lottie::start(page));
    dom::report("slideshow", slideshow::start(page));
    dom::report("fireworks", fireworks::start(page));
    dom::report("bouquet", bouquet(page));
    dom::report("card petals", decor::card_petals(page));
    log::info!("card revealed");
}

fn show_card(page: &PageRef) -> Result<(), InviteError> {
    let card = dom::query(&page.document, CARD_SELECTOR)?;
    dom::set_style(&card, "visibility", "visible");
    Ok(())
}

/// Staggered entrance of the card's contents.
fn entrance(page: &PageRef) -> Result<(), InviteError> {
    if !page.caps.timeline {
        return Ok(());
    }
    let rise = |y: f64| Vars::new().num("y", y).num("opacity", 0.0);
    let grow = |from: f64| Vars::new().num("scale", from).num("opacity", 0.0);

    Sequence::new(
        Vars::new().nested("defaults", Vars::new().text("ease", "power3.out").num("duration", 0.9)),
    )?
    .from(Targets::Selector(".card"), rise(40.0), At::End)?
    .from(Targets::Selector(".names span"), rise(30.0).num("stagger", 0.15), At::Label("-=.4"))?
    .from(Targets::Selector(".names em"), grow(0.0), At::Label("-=.5"))?
    .from(Targets::Selector(".date"), rise(20.0), At::Label("-=.5"))?
    .from(
        Targets::Selector(".avatar-wrap"),
        grow(0.6).num("stagger", 0.15).text("ease", "back.out(1.5)"),
        At::Label("-=.3"),
    )?
    .from(Targets::Selector(".countdown .time"), rise(24.0).num("stagger", 0.07), At::Label("-=.2"))?
    .from(Targets::Selector(".info-item"), rise(24.0).num("stagger", 0.1), At::Label("-=.4"))?
    .from(Targets::Selector(".rsvp-btn"), rise(24.0), At::Label("-=.5"))?;
    Ok(())
}

fn bouquet(page: &PageRef) -> Result<(), InviteError> {
    let el = dom::query(&page.document, BOUQUET_SELECTOR)?;
    dom::set_timeout(page.config.bouquet_delay_ms, move || {
        el.class_list().add_1("is-visible").ok();
    })?;
    Ok(())
}
