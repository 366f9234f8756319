use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ticket_modal::use_ticket_modal;
use crate::config::{CITY, LOGO_IMAGE};
use crate::content::event_date_label;
use crate::nav::items::{is_highlighted, NavItem, NavTarget, NAV_ITEMS};
use crate::nav::navigator::navigate;
use crate::nav::pending::use_pending_scroll;
use crate::nav::tracker::use_active_section;
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>().unwrap_or(Route::Home);
    let navigator = use_navigator();
    let pending = use_pending_scroll();
    let modal = use_ticket_modal();
    let menu_open = use_state(|| false);
    let active = use_active_section(&route);

    // Home and anchor links are handled here; page links go through the router
    let on_nav = {
        let menu_open = menu_open.clone();
        let route = route.clone();
        let pending = pending.clone();
        Callback::from(move |target: NavTarget| {
            menu_open.set(false);
            navigate(&target, &route, navigator.as_ref(), &pending);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        let pending = pending.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            pending.cancel();
        })
    };

    let get_tickets = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            match &modal {
                Some(modal) => modal.open(),
                None => log::warn!("ticket modal unavailable"),
            }
        })
    };

    let on_logo = {
        let on_nav = on_nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_nav.emit(NavTarget::Top);
        })
    };

    let render_item = |item: &NavItem| -> Html {
        let class = classes!(
            "nav-link",
            is_highlighted(item, &route, active).then(|| "active")
        );
        match &item.target {
            NavTarget::Page(page) => html! {
                <div onclick={close_menu.clone()} key={item.id}>
                    <Link<Route> to={page.clone()} classes={class}>
                        {item.label}
                    </Link<Route>>
                </div>
            },
            target => {
                let onclick = {
                    let on_nav = on_nav.clone();
                    let target = target.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_nav.emit(target.clone());
                    })
                };
                html! {
                    <div key={item.id}>
                        <a href={target.href()} class={class} onclick={onclick}>{item.label}</a>
                    </div>
                }
            }
        }
    };

    let drawer_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class="site-header">
            <div class="header-row">
                <a href="/" class="header-logo" onclick={on_logo}>
                    <img src={LOGO_IMAGE} alt="Incredible India Festival" />
                </a>
                <div class="header-info">
                    <h1>{"Incredible India Festival"}</h1>
                    <p>{format!("{} • {}", event_date_label(), CITY)}</p>
                </div>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle navigation">
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
                <nav class={drawer_class}>
                    { for NAV_ITEMS.iter().map(render_item) }
                    <button class="nav-tickets" onclick={get_tickets}>
                        {"Get Tickets"}
                    </button>
                </nav>
            </div>
            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #e5e7eb;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.08);
                }
                .header-row {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: grid;
                    grid-template-columns: auto 1fr auto;
                    align-items: center;
                    gap: 1rem;
                }
                .header-logo img {
                    height: 4rem;
                    width: auto;
                    display: block;
                }
                .header-info {
                    text-align: center;
                }
                .header-info h1 {
                    font-size: 1.25rem;
                    margin: 0;
                }
                .header-info p {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 0.25rem 0 0 0;
                }
                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }
                .nav-link {
                    font-weight: 500;
                    color: #374151;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #f97316;
                }
                .nav-tickets {
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    color: #fff;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    font-weight: 600;
                    cursor: pointer;
                    box-shadow: 0 10px 15px rgba(249, 115, 22, 0.25);
                    transition: transform 0.2s;
                }
                .nav-tickets:hover {
                    transform: scale(1.05);
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.25rem;
                    color: #374151;
                    cursor: pointer;
                }
                @media (max-width: 1024px) {
                    .header-row {
                        grid-template-columns: 1fr auto;
                    }
                    .header-logo img {
                        height: 3rem;
                    }
                    .header-info {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                    .nav-links {
                        display: none;
                        grid-column: 1 / -1;
                        flex-direction: column;
                        align-items: stretch;
                        gap: 0.75rem;
                        padding-top: 0.75rem;
                        border-top: 1px solid #e5e7eb;
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </header>
    }
}
