use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dom;
mod nav {
    pub mod items;
    pub mod navigator;
    pub mod pending;
    pub mod tracker;
}
mod components {
    pub mod footer;
    pub mod header;
    pub mod ticket_modal;
}
mod pages {
    pub mod home;
    pub mod policies;
    pub mod sponsors;
}

use components::{
    footer::Footer,
    header::Header,
    ticket_modal::{ModalController, ModalState, QrCodeModal},
};
use nav::pending::PendingScroll;
use pages::{home::Home, policies::Policies, sponsors::Sponsors};

#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/policies")]
    Policies,
    #[at("/sponsors")]
    Sponsors,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Policies => {
            info!("Rendering Policies page");
            html! { <Policies /> }
        }
        Route::Sponsors => {
            info!("Rendering Sponsors page");
            html! { <Sponsors /> }
        }
        Route::NotFound => {
            warn!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let modal = use_reducer(ModalState::default);
    let pending = use_state(PendingScroll::default);

    html! {
        <BrowserRouter>
            <ContextProvider<ModalController> context={ModalController::new(modal)}>
                <ContextProvider<PendingScroll> context={(*pending).clone()}>
                    <QrCodeModal />
                    <Header />
                    <main>
                        <Switch<Route> render={switch} />
                    </main>
                    <Footer />
                </ContextProvider<PendingScroll>>
            </ContextProvider<ModalController>>
        </BrowserRouter>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/nope"), Some(Route::NotFound));
        assert_eq!(Route::recognize("/sponsors"), Some(Route::Sponsors));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting festival site");
    yew::Renderer::<App>::new().render();
}
