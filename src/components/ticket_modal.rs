use std::rc::Rc;

use log::{debug, error};
use stylist::Style;
use yew::prelude::*;

use crate::config::{EARLY_BIRD_PRICE, TICKET_QR_IMAGE, TICKET_URL};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    pub open: bool,
}

pub enum ModalAction {
    Open,
    Close,
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = matches!(action, ModalAction::Open);
        if self.open == open {
            self
        } else {
            Rc::new(ModalState { open })
        }
    }
}

/// Shared handle to the ticket overlay. Every "buy tickets" trigger on every
/// route goes through this one flag.
#[derive(Clone)]
pub struct ModalController(UseReducerHandle<ModalState>);

impl PartialEq for ModalController {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl ModalController {
    pub fn new(handle: UseReducerHandle<ModalState>) -> Self {
        Self(handle)
    }

    pub fn open(&self) {
        debug!("ticket modal: open");
        self.0.dispatch(ModalAction::Open);
    }

    pub fn close(&self) {
        debug!("ticket modal: close");
        self.0.dispatch(ModalAction::Close);
    }

    pub fn is_open(&self) -> bool {
        self.0.open
    }

    pub fn open_callback<E: 'static>(&self) -> Callback<E> {
        let controller = self.clone();
        Callback::from(move |_: E| controller.open())
    }
}

#[hook]
pub fn use_ticket_modal() -> Option<ModalController> {
    use_context::<ModalController>()
}

const MODAL_CSS: &str = r#"
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1rem;
    background: rgba(0, 0, 0, 0.8);
    backdrop-filter: blur(4px);

    .qr-card {
        position: relative;
        background: #ffffff;
        border-radius: 1.5rem;
        padding: 2rem;
        max-width: 28rem;
        width: 100%;
        text-align: center;
        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.35);
    }
    .qr-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        border: none;
        background: #f3f4f6;
        border-radius: 9999px;
        width: 2.25rem;
        height: 2.25rem;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .qr-title {
        font-size: 1.75rem;
        font-weight: 700;
        background: linear-gradient(90deg, #f97316, #ec4899);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin: 0 0 1.5rem 0;
    }
    .qr-image {
        width: 16rem;
        height: 16rem;
        object-fit: contain;
        border-radius: 1rem;
        border: 4px solid #fed7aa;
    }
    .qr-link {
        display: block;
        margin-top: 1rem;
        color: #ea580c;
        word-break: break-all;
        font-size: 0.875rem;
    }
    .qr-price {
        font-size: 1.125rem;
        font-weight: 600;
        color: #111827;
        margin: 1.5rem 0 0.5rem 0;
    }
    .qr-instructions {
        color: #4b5563;
        margin: 0 0 1rem 0;
    }
    .qr-tip {
        background: #fff7ed;
        border-radius: 0.75rem;
        padding: 0.75rem;
        color: #9a3412;
        font-size: 0.875rem;
    }
"#;

#[function_component(QrCodeModal)]
pub fn qr_code_modal() -> Html {
    let style = use_memo(|_| Style::new(MODAL_CSS), ());
    let modal = use_ticket_modal();
    let Some(modal) = modal else {
        error!("QrCodeModal rendered outside of a ModalController provider");
        return html! {};
    };

    if !modal.is_open() {
        return html! {};
    }

    let class = match &*style {
        Ok(style) => style.get_class_name().to_string(),
        Err(err) => {
            error!("qr modal stylesheet rejected: {}", err);
            String::new()
        }
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.close())
    };
    // Clicks on the card itself must not reach the backdrop
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!(class, "qr-backdrop")} onclick={on_close.clone()}>
            <div class="qr-card" onclick={keep_open} role="dialog" aria-modal="true" aria-labelledby="qr-title">
                <button class="qr-close" onclick={on_close} aria-label="Close">{"×"}</button>
                <h3 id="qr-title" class="qr-title">{"Get Your Tickets"}</h3>
                <img class="qr-image" src={TICKET_QR_IMAGE} alt="QR Code for Ticket Purchase" />
                <a class="qr-link" href={TICKET_URL} target="_blank" rel="noopener noreferrer">
                    {TICKET_URL}
                </a>
                <p class="qr-price">{format!("Early Bird Special: {}", EARLY_BIRD_PRICE)}</p>
                <p class="qr-instructions">{"Use your phone's camera to scan the QR code above"}</p>
                <div class="qr-tip">
                    {"💡 Tip: Point your camera at the QR code and tap the notification that appears"}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<ModalState>, actions: impl IntoIterator<Item = ModalAction>) -> Rc<ModalState> {
        actions.into_iter().fold(state, |state, action| state.reduce(action))
    }

    #[test]
    fn starts_closed() {
        assert!(!ModalState::default().open);
    }

    #[test]
    fn repeated_opens_stay_open() {
        let state = apply(Rc::new(ModalState::default()), (0..5).map(|_| ModalAction::Open));
        assert!(state.open);
    }

    #[test]
    fn single_close_after_many_opens() {
        let opened = apply(Rc::new(ModalState::default()), (0..3).map(|_| ModalAction::Open));
        let closed = opened.reduce(ModalAction::Close);
        assert!(!closed.open);
    }

    #[test]
    fn unchanged_state_is_reused() {
        let closed = Rc::new(ModalState::default());
        let again = closed.clone().reduce(ModalAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));

        let open = again.reduce(ModalAction::Open);
        let still_open = open.clone().reduce(ModalAction::Open);
        assert!(Rc::ptr_eq(&open, &still_open));
    }
}
