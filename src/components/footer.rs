use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{CITY, LOGO_IMAGE};
use crate::content::{event_year, SOCIAL_LINKS};
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-row">
                <div class="footer-brand">
                    <Link<Route> to={Route::Home}>
                        <img src={LOGO_IMAGE} alt="Incredible India Festival" />
                    </Link<Route>>
                    <div>
                        <h3>{"Incredible India Festival"}</h3>
                        <p>{"Presented by Sanskriti"}</p>
                    </div>
                </div>
                <div class="footer-legal">
                    <p>{format!("© {} Sanskriti, Inc. All rights reserved.", event_year())}</p>
                    <p class="footer-location">{format!("Incredible India Festival - {}, Wisconsin", CITY)}</p>
                </div>
            </div>
            <div class="footer-social">
                { for SOCIAL_LINKS.iter().map(|link| html! {
                    <a
                        key={link.label}
                        href={link.href}
                        aria-label={link.label}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <span aria-hidden="true">{link.icon}</span>
                        <span class="sr-only">{link.label}</span>
                    </a>
                }) }
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #000;
                    color: #fff;
                    padding: 4rem 1rem;
                }
                .footer-row {
                    max-width: 1280px;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-brand img {
                    height: 5rem;
                    width: auto;
                }
                .footer-brand h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }
                .footer-brand p,
                .footer-legal p {
                    color: #9ca3af;
                    font-size: 1.125rem;
                    margin: 0.25rem 0 0 0;
                }
                .footer-legal {
                    text-align: right;
                }
                .footer-legal .footer-location {
                    color: #6b7280;
                    font-size: 1rem;
                    margin-top: 0.5rem;
                }
                .footer-social {
                    margin-top: 2rem;
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    font-size: 1.5rem;
                }
                .footer-social a {
                    color: #fff;
                    text-decoration: none;
                }
                .footer-social a:hover {
                    color: #fb923c;
                }
                .sr-only {
                    position: absolute;
                    width: 1px;
                    height: 1px;
                    overflow: hidden;
                    clip: rect(0, 0, 0, 0);
                }
                @media (max-width: 768px) {
                    .footer-row {
                        flex-direction: column;
                        text-align: center;
                    }
                    .footer-legal {
                        text-align: center;
                    }
                }
                "#}
            </style>
        </footer>
    }
}
