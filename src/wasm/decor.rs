use web_sys::{Element, HtmlElement, Node};

use super::dom;
use super::page::PageRef;
use crate::decor::{self, Decor, DecorKind};
use crate::error::InviteError;

const PETALS_ID: &str = "falling-petals";
const HEARTS_ID: &str = "bg-hearts";
const CARD_LAYER: &str = ".card-effects";

const INTRO_PETALS: usize = 20;
const EXTRA_PETALS: usize = 15;
const HEARTS: usize = 14;

fn append(page: &PageRef, parent: &Element, item: &Decor) -> Result<HtmlElement, InviteError> {
    let el = dom::create_div(&page.document)?;
    el.set_class_name(item.class);
    el.set_text_content(Some(item.glyph));
    el.style().set_css_text(&item.css());
    parent.append_child(&el)?;
    Ok(el)
}

fn fill(page: &PageRef, container_id: &str, kind: &DecorKind, n: usize) -> Result<(), InviteError> {
    let container: Element = dom::by_id(&page.document, container_id)?;
    let items = kind.spawn_many(n, &mut *page.rng());
    for item in &items {
        append(page, &container, item)?;
    }
    Ok(())
}

pub fn falling_petals(page: &PageRef) -> Result<(), InviteError> {
    fill(page, PETALS_ID, &DecorKind::intro_petal(), INTRO_PETALS)
}

pub fn background_hearts(page: &PageRef) -> Result<(), InviteError> {
    fill(page, HEARTS_ID, &DecorKind::heart(), HEARTS)
}

/// A second, gentler wave of petals a few seconds after load, gate or not.
pub fn schedule_extra_petals(page: &PageRef) {
    let later = page.clone();
    let scheduled = dom::set_timeout(page.config.extra_petals_delay_ms, move || {
        dom::report(
            "extra petals",
            fill(&later, PETALS_ID, &DecorKind::extra_petal(), EXTRA_PETALS),
        );
    });
    if let Err(e) = scheduled {
        log::warn!("extra petals: {e}");
    }
}

/// Endless trickle of petals inside the card. Stops once the layer leaves the document.
pub fn card_petals(page: &PageRef) -> Result<(), InviteError> {
    let layer = dom::query(&page.document, CARD_LAYER)?;
    drop_card_petal(page.clone(), layer);
    Ok(())
}

fn drop_card_petal(page: PageRef, layer: HtmlElement) {
    let node: &Node = &layer;
    let attached = page
        .document
        .body()
        .map(|body| body.contains(Some(node)))
        .unwrap_or(false);
    if !attached {
        return;
    }

    let item = DecorKind::card_petal().spawn(&mut *page.rng());
    match append(&page, &layer, &item) {
        Ok(el) => {
            let lifetime = item.lifetime_ms() as u32;
            dom::set_timeout(lifetime, move || el.remove()).ok();
        }
        Err(e) => log::debug!("card petal: {e}"),
    }

    let next = decor::next_card_petal_ms(&mut *page.rng()) as u32;
    let again = page.clone();
    if let Err(e) = dom::set_timeout(next, move || drop_card_petal(again, layer)) {
        log::warn!("card petals stopped: {e}");
    }
}
