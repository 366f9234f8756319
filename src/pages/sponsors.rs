use yew::prelude::*;

use crate::content::{
    is_larger_silver_logo, rows, Sponsor, BIGGEST_SUPPORTER, CLIENT_IMAGE, CO_ORGANIZER,
    DIAMOND_SPONSORS, FOOD_VENDORS, FOOD_VENDOR_ROWS, GOLD_SPONSORS, SILVER_SPONSORS, SUPPORTERS,
    SUPPORTER_ROWS,
};
use crate::dom;

fn tier_heading(title: &str) -> Html {
    html! {
        <div class="tier-heading">
            <h2>{title.to_string()}</h2>
            <div class="tier-rule"></div>
        </div>
    }
}

fn logo(sponsor: &Sponsor, class: &'static str) -> Html {
    html! {
        <div class={class}>
            <img src={sponsor.image} alt={sponsor.name} loading="lazy" />
        </div>
    }
}

fn logo_rows(items: &[Sponsor], sizes: &[usize], class: &'static str) -> Html {
    html! {
        <div class="logo-rows">
            { for rows(items, sizes).into_iter().map(|row| html! {
                <div class="logo-row">
                    { for row.iter().map(|sponsor| logo(sponsor, class)) }
                </div>
            }) }
        </div>
    }
}

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            dom::reset_scroll();
            || ()
        },
        (),
    );

    html! {
        <div class="sponsors-page">
            <section class="sponsors-hero">
                <h1>{"Our "}<span class="gradient-text">{"Sponsors"}</span></h1>
                <p>{"We are grateful to our sponsors who have made the Incredible India Festival possible"}</p>
            </section>

            <section class="tier">
                { tier_heading("Biggest Supporter") }
                <div class="featured-sponsor">
                    <img src={BIGGEST_SUPPORTER.image} alt={BIGGEST_SUPPORTER.name} />
                    <h3>{"Consulate General of India"}<br />{"Chicago"}</h3>
                </div>
            </section>

            <section class="tier">
                { tier_heading("Co-organizer") }
                <div class="featured-sponsor">
                    <img src={CO_ORGANIZER.image} alt={CO_ORGANIZER.name} />
                </div>
            </section>

            <section class="tier">
                { tier_heading("Diamond Sponsors") }
                <div class="logo-row">
                    { for DIAMOND_SPONSORS.iter().map(|s| logo(s, "logo-card logo-xl")) }
                </div>
            </section>

            <section class="tier">
                { tier_heading("Gold Sponsors") }
                <div class="logo-row">
                    { for GOLD_SPONSORS.iter().map(|s| logo(s, "logo-card logo-lg")) }
                </div>
            </section>

            <section class="tier">
                { tier_heading("Silver Sponsors") }
                <div class="logo-row">
                    { for SILVER_SPONSORS.iter().enumerate().map(|(index, s)| {
                        let class = if is_larger_silver_logo(index) {
                            "logo-card logo-md logo-boost"
                        } else {
                            "logo-card logo-md"
                        };
                        logo(s, class)
                    }) }
                </div>
            </section>

            <section class="tier">
                { tier_heading("Our Food Vendors") }
                { logo_rows(&FOOD_VENDORS, &FOOD_VENDOR_ROWS, "logo-card logo-md") }
            </section>

            <section class="tier">
                <div class="client-photo">
                    <img src={CLIENT_IMAGE} alt="Client" loading="lazy" />
                </div>
            </section>

            <section class="tier">
                { tier_heading("Our Supporters") }
                { logo_rows(&SUPPORTERS, &SUPPORTER_ROWS, "logo-card logo-sm") }
            </section>

            <style>
                {r#"
                .sponsors-page {
                    padding: 8rem 1rem 5rem 1rem;
                    background: linear-gradient(to bottom, #fff7ed, #ffffff, #fdf2f8);
                }
                .sponsors-hero {
                    text-align: center;
                    margin-bottom: 4rem;
                }
                .sponsors-hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 800;
                    margin: 0 0 1.5rem 0;
                }
                .sponsors-hero p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .tier {
                    max-width: 72rem;
                    margin: 0 auto 5rem auto;
                }
                .tier-heading {
                    text-align: center;
                    margin-bottom: 2.5rem;
                }
                .tier-heading h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    margin: 0;
                }
                .tier-rule {
                    width: 6rem;
                    height: 0.25rem;
                    margin: 1rem auto 0 auto;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #f97316, #ec4899);
                }
                .featured-sponsor {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                    text-align: center;
                }
                .featured-sponsor img {
                    max-height: 16rem;
                    width: auto;
                }
                .featured-sponsor h3 {
                    font-size: 1.75rem;
                    margin: 0;
                }
                .logo-rows {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }
                .logo-row {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }
                .logo-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
                    transition: transform 0.3s;
                }
                .logo-card:hover {
                    transform: translateY(-4px);
                }
                .logo-card img {
                    max-width: 100%;
                    max-height: 100%;
                    object-fit: contain;
                }
                .logo-xl { width: 22rem; height: 14rem; }
                .logo-lg { width: 18rem; height: 11rem; }
                .logo-md { width: 14rem; height: 9rem; }
                .logo-sm { width: 12rem; height: 8rem; }
                .logo-boost img { transform: scale(1.25); }
                .client-photo {
                    display: flex;
                    justify-content: center;
                }
                .client-photo img {
                    max-width: 48rem;
                    width: 100%;
                    border-radius: 1.5rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.15);
                }
                "#}
            </style>
        </div>
    }
}
