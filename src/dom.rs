use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::nav::items::Section;
use crate::nav::tracker::SectionBounds;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("no element with id `{0}`")]
    MissingElement(&'static str),
    #[error("element `{0}` is not an html element")]
    NotHtml(&'static str),
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> f64 {
    window()
        .ok()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Jump to the top without animation. Every view calls this on mount.
pub fn reset_scroll() {
    if let Ok(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(ScrollBehavior::Instant);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn smooth_scroll_to_top() -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

pub fn scroll_to_section(section: Section) -> Result<(), DomError> {
    let element = document()?
        .get_element_by_id(section.id())
        .ok_or(DomError::MissingElement(section.id()))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

fn section_element(document: &Document, section: Section) -> Result<HtmlElement, DomError> {
    document
        .get_element_by_id(section.id())
        .ok_or(DomError::MissingElement(section.id()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::NotHtml(section.id()))
}

/// Measures every tracked section currently in the DOM, in declaration order.
/// Sections that are not mounted are left out.
pub fn section_bounds(document: &Document) -> Vec<SectionBounds> {
    Section::ALL
        .iter()
        .filter_map(|&section| section_element(document, section).ok().map(|el| SectionBounds {
            section,
            top: f64::from(el.offset_top()),
            height: f64::from(el.offset_height()),
        }))
        .collect()
}

pub fn page_origin() -> Option<String> {
    window().ok()?.location().origin().ok()
}

/// Current URL fragment including the leading `#`, empty when there is none.
pub fn location_hash() -> String {
    window()
        .ok()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}
