use log::{debug, warn};
use yew_router::prelude::Navigator;

use crate::dom;
use crate::nav::items::{NavTarget, Section};
use crate::nav::pending::PendingScroll;
use crate::Route;

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    /// Already home: smooth-scroll to the top.
    ScrollToTop,
    /// Switch views; the target view resets the scroll itself on mount.
    Transition(Route),
    /// Already home: scroll to the anchor after the settle delay.
    ScrollToSection(Section),
    /// Switch to home, then scroll once it has mounted.
    TransitionThenScroll(Section),
}

pub fn resolve(target: &NavTarget, current: &Route) -> NavAction {
    let on_home = *current == Route::Home;
    match target {
        NavTarget::Top if on_home => NavAction::ScrollToTop,
        NavTarget::Top => NavAction::Transition(Route::Home),
        NavTarget::Section(section) if on_home => NavAction::ScrollToSection(*section),
        NavTarget::Section(section) => NavAction::TransitionThenScroll(*section),
        NavTarget::Page(route) => NavAction::Transition(route.clone()),
    }
}

/// Carries out a navigation request from the header.
///
/// Callers close the mobile drawer before calling this. Any scroll still
/// queued or armed from an earlier request is dropped first.
pub fn navigate(
    target: &NavTarget,
    current: &Route,
    navigator: Option<&Navigator>,
    pending: &PendingScroll,
) {
    pending.cancel();

    let action = resolve(target, current);
    debug!("navigate {} from {:?}: {:?}", target.href(), current, action);

    match action {
        NavAction::ScrollToTop => {
            if let Err(err) = dom::smooth_scroll_to_top() {
                warn!("scroll to top failed: {}", err);
            }
        }
        NavAction::Transition(route) => push(navigator, &route),
        NavAction::ScrollToSection(section) => pending.arm(section),
        NavAction::TransitionThenScroll(section) => {
            pending.queue(section);
            push(navigator, &Route::Home);
        }
    }
}

fn push(navigator: Option<&Navigator>, route: &Route) {
    match navigator {
        Some(navigator) => navigator.push(route),
        None => warn!("no router available, cannot open {:?}", route),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_target() {
        assert_eq!(resolve(&NavTarget::Top, &Route::Home), NavAction::ScrollToTop);
        assert_eq!(
            resolve(&NavTarget::Top, &Route::Policies),
            NavAction::Transition(Route::Home)
        );
        assert_eq!(
            resolve(&NavTarget::Top, &Route::Sponsors),
            NavAction::Transition(Route::Home)
        );
    }

    #[test]
    fn anchor_target_on_home_scrolls_in_place() {
        for section in Section::ALL {
            assert_eq!(
                resolve(&NavTarget::Section(section), &Route::Home),
                NavAction::ScrollToSection(section)
            );
        }
    }

    #[test]
    fn anchor_target_elsewhere_goes_home_first() {
        assert_eq!(
            resolve(&NavTarget::Section(Section::Tickets), &Route::Sponsors),
            NavAction::TransitionThenScroll(Section::Tickets)
        );
        assert_eq!(
            resolve(&NavTarget::Section(Section::About), &Route::Policies),
            NavAction::TransitionThenScroll(Section::About)
        );
    }

    #[test]
    fn unknown_path_is_not_home() {
        assert_eq!(
            resolve(&NavTarget::Section(Section::Tickets), &Route::NotFound),
            NavAction::TransitionThenScroll(Section::Tickets)
        );
        assert_eq!(
            resolve(&NavTarget::Top, &Route::NotFound),
            NavAction::Transition(Route::Home)
        );
    }

    #[test]
    fn page_target_is_a_plain_transition() {
        for current in [Route::Home, Route::Policies, Route::Sponsors] {
            assert_eq!(
                resolve(&NavTarget::Page(Route::Sponsors), &current),
                NavAction::Transition(Route::Sponsors)
            );
        }
    }

    #[test]
    fn tickets_from_sponsors_leaves_the_section_for_the_home_view() {
        let pending = PendingScroll::default();
        navigate(
            &NavTarget::Section(Section::Tickets),
            &Route::Sponsors,
            None,
            &pending,
        );
        assert_eq!(pending.take(), Some(Section::Tickets));
    }

    #[test]
    fn a_later_request_clears_the_queued_section() {
        let pending = PendingScroll::default();
        navigate(&NavTarget::Section(Section::Info), &Route::Policies, None, &pending);
        navigate(&NavTarget::Top, &Route::Policies, None, &pending);
        assert_eq!(pending.take(), None);
    }
}
