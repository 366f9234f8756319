use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config::SETTLE_DELAY_MS;
use crate::dom;
use crate::nav::items::Section;

#[derive(Default)]
struct Slot {
    queued: Option<Section>,
    armed: Option<Timeout>,
}

/// Hand-off between the navigator and the home view.
///
/// A cross-page anchor navigation queues its section here before switching
/// routes; the home view takes it once mounted and arms the settle timer.
/// Each new request replaces whatever was queued or armed before, and
/// dropping the replaced `Timeout` cancels it.
#[derive(Clone, Default)]
pub struct PendingScroll(Rc<RefCell<Slot>>);

impl PartialEq for PendingScroll {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PendingScroll {
    pub fn queue(&self, section: Section) {
        let mut slot = self.0.borrow_mut();
        slot.armed = None;
        slot.queued = Some(section);
    }

    /// Takes the queued section, if any. Called once by the home view on mount.
    pub fn take(&self) -> Option<Section> {
        self.0.borrow_mut().queued.take()
    }

    /// Scrolls to `section` after the settle delay unless superseded first.
    pub fn arm(&self, section: Section) {
        let timeout = Timeout::new(SETTLE_DELAY_MS, move || {
            if let Err(err) = dom::scroll_to_section(section) {
                debug!("skipping scroll to #{}: {}", section.id(), err);
            }
        });
        let mut slot = self.0.borrow_mut();
        slot.queued = None;
        slot.armed = Some(timeout);
    }

    pub fn cancel(&self) {
        let mut slot = self.0.borrow_mut();
        slot.queued = None;
        slot.armed = None;
    }

    #[cfg(test)]
    fn is_idle(&self) -> bool {
        let slot = self.0.borrow();
        slot.queued.is_none() && slot.armed.is_none()
    }
}

#[hook]
pub fn use_pending_scroll() -> PendingScroll {
    use_context::<PendingScroll>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_section_is_taken_once() {
        let pending = PendingScroll::default();
        pending.queue(Section::Tickets);
        assert_eq!(pending.take(), Some(Section::Tickets));
        assert_eq!(pending.take(), None);
        assert!(pending.is_idle());
    }

    #[test]
    fn newer_request_supersedes_older() {
        let pending = PendingScroll::default();
        pending.queue(Section::Tickets);
        pending.queue(Section::About);
        assert_eq!(pending.take(), Some(Section::About));
    }

    #[test]
    fn cancel_drops_queued_request() {
        let pending = PendingScroll::default();
        pending.queue(Section::Info);
        pending.cancel();
        assert_eq!(pending.take(), None);
        assert!(pending.is_idle());
    }

    #[test]
    fn clones_share_one_slot() {
        let navigator_side = PendingScroll::default();
        let view_side = navigator_side.clone();
        assert!(navigator_side == view_side);
        assert!(navigator_side != PendingScroll::default());

        navigator_side.queue(Section::Experience);
        assert_eq!(view_side.take(), Some(Section::Experience));
    }
}
