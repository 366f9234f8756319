use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::config::SECTION_THRESHOLD_PX;
use crate::dom;
use crate::nav::items::{route_marker, Section};
use crate::Route;

/// Vertical extent of one mounted section, in document pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub section: Section,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// First section (in the given order) whose interval holds `scroll_y + threshold`.
pub fn locate(scroll_y: f64, bounds: &[SectionBounds]) -> Option<Section> {
    let probe = scroll_y + SECTION_THRESHOLD_PX;
    bounds.iter().find(|b| b.contains(probe)).map(|b| b.section)
}

/// Keeps the previous marker when the probe falls between sections.
pub fn next_active(
    previous: Option<&'static str>,
    scroll_y: f64,
    bounds: &[SectionBounds],
) -> Option<&'static str> {
    locate(scroll_y, bounds).map(Section::id).or(previous)
}

/// Scroll-spy for the navigation bar.
///
/// On the home route a window `scroll` listener re-measures the sections and
/// updates the marker; it also runs once at install time. On the other routes
/// no listener exists and the marker is the route's own identifier.
#[hook]
pub fn use_active_section(route: &Route) -> Option<&'static str> {
    let active = use_state_eq(|| None::<&'static str>);
    let latest = use_mut_ref(|| None::<&'static str>);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |route: &Route| {
                let mut cleanup: Option<Box<dyn FnOnce()>> = None;

                if *route == Route::Home {
                    // A page marker carried over from /policies or /sponsors means nothing here
                    if latest.borrow().map_or(false, |id| Section::from_id(id).is_none()) {
                        *latest.borrow_mut() = None;
                        active.set(None);
                    }
                    match (dom::window(), dom::document()) {
                        (Ok(window), Ok(document)) => {
                            let on_scroll = Closure::wrap(Box::new(move || {
                                let bounds = dom::section_bounds(&document);
                                let previous = *latest.borrow();
                                let next = next_active(previous, dom::scroll_y(), &bounds);
                                if next != previous {
                                    debug!("active section: {:?} -> {:?}", previous, next);
                                    *latest.borrow_mut() = next;
                                    active.set(next);
                                }
                            }) as Box<dyn FnMut()>);

                            if window
                                .add_event_listener_with_callback(
                                    "scroll",
                                    on_scroll.as_ref().unchecked_ref(),
                                )
                                .is_ok()
                            {
                                // Initial check so a reload mid-page highlights right away
                                let _ = on_scroll
                                    .as_ref()
                                    .unchecked_ref::<web_sys::js_sys::Function>()
                                    .call0(&JsValue::NULL);

                                cleanup = Some(Box::new(move || {
                                    let _ = window.remove_event_listener_with_callback(
                                        "scroll",
                                        on_scroll.as_ref().unchecked_ref(),
                                    );
                                }));
                            }
                        }
                        (Err(err), _) | (_, Err(err)) => {
                            log::warn!("section tracking disabled: {}", err);
                        }
                    }
                } else if let Some(marker) = route_marker(route) {
                    *latest.borrow_mut() = Some(marker);
                    active.set(Some(marker));
                }

                move || {
                    if let Some(cleanup) = cleanup {
                        cleanup();
                    }
                }
            },
            route.clone(),
        );
    }

    *active
}

#[cfg(test)]
mod tests {
    use super::*;

    // home 0..800, experience 800..1600, tickets 1600..2200, info 2200..3000, about 3000..3600
    fn layout() -> Vec<SectionBounds> {
        let spans = [
            (Section::Home, 0.0, 800.0),
            (Section::Experience, 800.0, 800.0),
            (Section::Tickets, 1600.0, 600.0),
            (Section::Info, 2200.0, 800.0),
            (Section::About, 3000.0, 600.0),
        ];
        spans
            .iter()
            .map(|&(section, top, height)| SectionBounds { section, top, height })
            .collect()
    }

    #[test]
    fn probe_is_offset_by_threshold() {
        let bounds = layout();
        assert_eq!(locate(0.0, &bounds), Some(Section::Home));
        assert_eq!(locate(699.0, &bounds), Some(Section::Home));
        assert_eq!(locate(700.0, &bounds), Some(Section::Experience));
        assert_eq!(locate(1500.0, &bounds), Some(Section::Tickets));
        assert_eq!(locate(3400.0, &bounds), Some(Section::About));
    }

    #[test]
    fn every_probe_inside_the_layout_maps_to_its_interval() {
        let bounds = layout();
        for y in (0..3500).step_by(25) {
            let y = f64::from(y);
            let probe = y + SECTION_THRESHOLD_PX;
            let expected = bounds.iter().find(|b| probe >= b.top && probe < b.top + b.height);
            assert_eq!(locate(y, &bounds), expected.map(|b| b.section), "scroll_y = {}", y);
        }
    }

    #[test]
    fn first_declared_wins_on_overlap() {
        let bounds = vec![
            SectionBounds { section: Section::Info, top: 0.0, height: 1000.0 },
            SectionBounds { section: Section::About, top: 0.0, height: 1000.0 },
        ];
        assert_eq!(locate(200.0, &bounds), Some(Section::Info));
    }

    #[test]
    fn gap_keeps_previous_marker() {
        let bounds = vec![
            SectionBounds { section: Section::Home, top: 0.0, height: 500.0 },
            SectionBounds { section: Section::Tickets, top: 900.0, height: 500.0 },
        ];
        assert_eq!(next_active(Some("home"), 500.0, &bounds), Some("home"));
        assert_eq!(next_active(None, 500.0, &bounds), None);
        assert_eq!(next_active(Some("home"), 5000.0, &bounds), Some("home"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let mut bounds = layout();
        bounds.retain(|b| b.section != Section::Experience);
        assert_eq!(next_active(Some("home"), 1000.0, &bounds), Some("home"));
        assert_eq!(next_active(Some("home"), 1600.0, &bounds), Some("tickets"));
    }

    #[test]
    fn scrolling_from_experience_into_tickets() {
        let bounds = layout();
        let active = next_active(None, 900.0, &bounds);
        assert_eq!(active, Some("experience"));
        let active = next_active(active, 1650.0, &bounds);
        assert_eq!(active, Some("tickets"));
    }

    #[test]
    fn same_position_is_idempotent() {
        let bounds = layout();
        let once = next_active(None, 2300.0, &bounds);
        assert_eq!(next_active(once, 2300.0, &bounds), once);
    }
}
