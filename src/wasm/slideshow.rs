use super::dom;
use super::page::PageRef;
use crate::error::InviteError;
use crate::slideshow::Rotation;

const GROUP_SELECTOR: &str = ".slideshow";
const SLIDE_SELECTOR: &str = ".avatar";
const ACTIVE: &str = "active";

/// One independent timer per group; groups with a single slide are left alone.
pub fn start(page: &PageRef) -> Result<(), InviteError> {
    let groups = dom::query_all_in_document(&page.document, GROUP_SELECTOR);
    if groups.is_empty() {
        return Err(InviteError::MissingElement(GROUP_SELECTOR.to_string()));
    }
    for group in groups {
        let slides = dom::query_all(&group, SLIDE_SELECTOR);
        let Some(mut rotation) = Rotation::new(slides.len()) else {
            continue;
        };
        // Markup may pre-mark any slide (or several); start from a single mark.
        for (i, slide) in slides.iter().enumerate() {
            slide
                .class_list()
                .toggle_with_force(ACTIVE, rotation.is_active(i))
                .ok();
        }
        dom::set_interval(page.config.slide_interval_ms, move || {
            let (prev, next) = rotation.advance();
            slides[prev].class_list().remove_1(ACTIVE).ok();
            slides[next].class_list().add_1(ACTIVE).ok();
        })?;
    }
    Ok(())
}
