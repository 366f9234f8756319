use log::debug;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ticket_modal::use_ticket_modal;
use crate::config::{
    FLYER_PATH, HERO_BACKGROUND_IMAGE, LOGO_IMAGE, SANSKRITI_LOGO_IMAGE, TICKET_QR_IMAGE, VENUE,
    VENUE_MAP_EMBED,
};
use crate::content::{
    event_date_label, event_hours_label, FEATURES, SUPPORTING_PARTNERS, TICKET_PERKS,
    WHAT_TO_EXPECT,
};
use crate::dom;
use crate::nav::items::Section;
use crate::nav::pending::use_pending_scroll;
use crate::Route;

/// Section to scroll to once the home view has mounted. A section handed over
/// by the navigator wins over the URL fragment.
pub fn mount_target(queued: Option<Section>, hash: &str) -> Option<Section> {
    queued.or_else(|| Section::from_hash(hash))
}

#[function_component(Home)]
pub fn home() -> Html {
    let pending = use_pending_scroll();
    let modal = use_ticket_modal();

    // On mount: start at the top, then honour a section handed over by the
    // navigator or, on a fresh load, the URL fragment.
    {
        let pending = pending.clone();
        use_effect_with_deps(
            move |_| {
                dom::reset_scroll();
                if let Some(section) = mount_target(pending.take(), &dom::location_hash()) {
                    debug!("home mounted, scrolling to #{}", section.id());
                    pending.arm(section);
                }
                || ()
            },
            (),
        );
    }

    let open_tickets = match &modal {
        Some(modal) => modal.open_callback::<MouseEvent>(),
        None => Callback::noop(),
    };

    html! {
        <div class="home-page">
            <section id={Section::Home.id()} class="hero">
                <div class="hero-background" style={format!("background-image: url('{}');", HERO_BACKGROUND_IMAGE)}></div>
                <div class="hero-overlay"></div>
                <div class="hero-floaters" aria-hidden="true">
                    <span class="floater" style="top: 18%; left: 8%; animation-delay: 0s;">{"👑"}</span>
                    <span class="floater" style="top: 30%; right: 10%; animation-delay: 1s;">{"⭐"}</span>
                    <span class="floater" style="bottom: 28%; left: 12%; animation-delay: 2s;">{"✨"}</span>
                    <span class="floater" style="top: 62%; right: 16%; animation-delay: 3s;">{"🪷"}</span>
                    <span class="floater" style="bottom: 14%; right: 40%; animation-delay: 4s;">{"🌐"}</span>
                </div>
                <div class="hero-content">
                    <div class="hero-badge">
                        {"✨ "}<strong>{"SANSKRITI"}</strong>{" PRESENTS ✨"}
                    </div>
                    <img class="hero-logo" src={LOGO_IMAGE} alt="Incredible India Festival Logo" />
                    <h1 class="hero-title">
                        <span class="hero-title-top">{"INCREDIBLE"}</span>
                        <span class="hero-title-main">{"INDIA FESTIVAL"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"First time ever at the iconic"}<br />
                        {VENUE}
                    </p>
                    <p class="hero-tagline">
                        {"\"Come join us to make history • Where culture meets rhythm and flavors tell stories\""}
                    </p>
                    <a class="hero-flyer" href={FLYER_PATH} download="real-flyer.png">
                        <img src={FLYER_PATH} alt="Flyer thumbnail" />
                        <span>{"Tap here to download flyer"}</span>
                    </a>
                    <button class="cta-button hero-cta" onclick={open_tickets.clone()}>
                        {"Buy Tickets Now"}
                    </button>
                </div>
                <div class="scroll-indicator">
                    <span>{"Scroll to explore"}</span>
                    <div class="scroll-mouse"><div class="scroll-wheel"></div></div>
                </div>
            </section>

            <section id={Section::Experience.id()} class="home-section experience">
                <div class="section-heading">
                    <h2>{"Festival Highlights"}</h2>
                    <p>
                        {"A journey through India's culture - experience the music, flavors, and traditions that unite us. Celebrating the richness of diverse traditions through music, cuisine and cultural experiences."}
                    </p>
                </div>
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card" key={feature.title}>
                            <div class="feature-icon">{feature.icon}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
                <img class="experience-logo" src={LOGO_IMAGE} alt="Incredible India Festival Logo" loading="lazy" />
            </section>

            <section id={Section::Tickets.id()} class="home-section tickets">
                <div class="section-heading">
                    <h2>{"Get Your Tickets"}</h2>
                    <p>{"Secure your spot at the Incredible India Festival. Early bird tickets available now!"}</p>
                </div>
                <div class="ticket-card">
                    <div class="ticket-details">
                        <h3>{"Early Bird Special"}</h3>
                        <ul class="dot-list">
                            { for TICKET_PERKS.iter().map(|perk| html! { <li key={*perk}>{*perk}</li> }) }
                        </ul>
                        <button class="cta-button" onclick={open_tickets.clone()}>
                            {"Buy Tickets Now"}
                        </button>
                    </div>
                    <img
                        class="ticket-qr"
                        src={TICKET_QR_IMAGE}
                        alt="QR Code for Ticket Purchase"
                        onclick={open_tickets}
                    />
                </div>
            </section>

            <section id={Section::Info.id()} class="home-section info">
                <div class="section-heading">
                    <h2>{"Event Information"}</h2>
                    <p>{"Everything you need to know about the Incredible India Festival"}</p>
                </div>
                <div class="info-grid">
                    <div class="info-card">
                        <h3>{"Location & Time"}</h3>
                        <p>
                            <strong>{"Date: "}</strong>{event_date_label()}<br />
                            <strong>{"Time: "}</strong>{event_hours_label()}<br />
                            <strong>{"Venue: "}</strong>{VENUE}
                        </p>
                        <div class="map-frame">
                            <iframe
                                src={VENUE_MAP_EMBED}
                                width="100%"
                                height="100%"
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                                title="Map of Henry Maier Festival Park"
                            ></iframe>
                        </div>
                    </div>
                    <div class="info-card">
                        <h3>{"What to Expect"}</h3>
                        <ul class="dot-list">
                            { for WHAT_TO_EXPECT.iter().map(|line| html! { <li key={*line}>{*line}</li> }) }
                        </ul>
                    </div>
                </div>
            </section>

            <section id={Section::About.id()} class="home-section about">
                <div class="section-heading">
                    <h2>{"About Sanskriti"}</h2>
                    <p>{"Promoting Indian culture and heritage in our community"}</p>
                </div>
                <div class="about-card">
                    <img src={SANSKRITI_LOGO_IMAGE} alt="Sanskriti Logo" loading="lazy" />
                    <div>
                        <h3>{"Our Mission"}</h3>
                        <p>
                            {"Sanskriti is a non-profit organization dedicated to promoting and preserving Indian culture, traditions, and heritage in the Milwaukee area. Through events, educational programs, and community initiatives, we aim to create awareness and appreciation for the rich cultural diversity of India."}
                        </p>
                        <p>
                            {"The Incredible India Festival is our flagship annual event that brings together the community to celebrate Indian arts, music, dance, cuisine, and traditions. We invite everyone to join us in this cultural celebration and experience the vibrant spirit of India."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="home-section partners">
                <div class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Supporting Partners"}</span></h2>
                    <p>{"Proudly supported by industry leaders who share our vision"}</p>
                </div>
                <div class="partner-row">
                    { for SUPPORTING_PARTNERS.iter().map(|partner| html! {
                        <div class="partner-logo" key={partner.image}>
                            <img src={partner.image} alt={partner.name} loading="lazy" />
                        </div>
                    }) }
                </div>
                <div class="partner-footer">
                    <span class="partner-trust">{"Trusted by Industry Leaders"}</span>
                    <Link<Route> to={Route::Sponsors} classes="cta-button partner-cta">
                        {"View All Sponsors →"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .home-page {
                    padding-top: 88px;
                    overflow-x: hidden;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    color: #fff;
                    text-align: center;
                }
                .hero-background {
                    position: absolute;
                    inset: 0;
                    background-size: cover;
                    background-position: center;
                    z-index: -2;
                }
                .hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.5), rgba(0, 0, 0, 0.8));
                    z-index: -1;
                }
                .hero-floaters .floater {
                    position: absolute;
                    font-size: 2rem;
                    opacity: 0.6;
                    animation: float 6s ease-in-out infinite;
                }
                @keyframes float {
                    0%, 100% { transform: translateY(0) rotate(0deg) scale(1); }
                    33% { transform: translateY(-20px) rotate(5deg) scale(1.1); }
                    66% { transform: translateY(-10px) rotate(-5deg) scale(1.05); }
                }
                .hero-content {
                    position: relative;
                    max-width: 64rem;
                    padding: 3rem 1rem 6rem 1rem;
                }
                .hero-badge {
                    display: inline-block;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    font-size: 1.125rem;
                    letter-spacing: 0.1em;
                    box-shadow: 0 0 30px rgba(255, 165, 0, 0.4);
                }
                .hero-logo {
                    display: block;
                    margin: 2rem auto 1rem auto;
                    height: 8rem;
                    width: auto;
                }
                .hero-title {
                    font-size: clamp(2.5rem, 8vw, 5.5rem);
                    font-weight: 900;
                    line-height: 1.05;
                    margin: 0 0 1.5rem 0;
                    text-shadow: 0 2px 16px rgba(0, 0, 0, 0.7);
                }
                .hero-title span {
                    display: block;
                }
                .hero-title-main {
                    font-size: 1.2em;
                    background: linear-gradient(90deg, #fb923c, #f472b6, #facc15, #fb923c);
                    background-size: 200% 200%;
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                    animation: shimmer 5s linear infinite;
                }
                @keyframes shimmer {
                    0% { background-position: 0% 50%; }
                    50% { background-position: 100% 50%; }
                    100% { background-position: 0% 50%; }
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .hero-tagline {
                    font-size: 1.125rem;
                    font-style: italic;
                    color: #fde68a;
                }
                .hero-flyer {
                    display: inline-flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    margin: 1.5rem 0;
                    color: #fff;
                    text-decoration: none;
                }
                .hero-flyer img {
                    width: 8rem;
                    border-radius: 0.75rem;
                    border: 3px solid rgba(255, 255, 255, 0.7);
                }
                .cta-button {
                    display: inline-block;
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    color: #fff;
                    border: none;
                    border-radius: 9999px;
                    padding: 1rem 2.5rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                    cursor: pointer;
                    text-decoration: none;
                    box-shadow: 0 0 20px rgba(255, 165, 0, 0.3);
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .cta-button:hover {
                    transform: translateY(-3px) scale(1.03);
                    box-shadow: 0 0 30px rgba(255, 165, 0, 0.6);
                }
                .hero-cta {
                    display: block;
                    margin: 0 auto;
                }
                .scroll-indicator {
                    position: absolute;
                    bottom: 2rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.875rem;
                    opacity: 0.8;
                }
                .scroll-mouse {
                    width: 1.5rem;
                    height: 2.5rem;
                    border: 2px solid #fff;
                    border-radius: 9999px;
                    display: flex;
                    justify-content: center;
                }
                .scroll-wheel {
                    width: 0.25rem;
                    height: 0.75rem;
                    margin-top: 0.5rem;
                    background: #fff;
                    border-radius: 9999px;
                    animation: wheel 1.5s ease-in-out infinite;
                }
                @keyframes wheel {
                    0%, 100% { transform: translateY(0); opacity: 1; }
                    50% { transform: translateY(10px); opacity: 0.3; }
                }
                .home-section {
                    padding: 6rem 1rem;
                }
                .section-heading {
                    max-width: 48rem;
                    margin: 0 auto 4rem auto;
                    text-align: center;
                }
                .section-heading h2 {
                    font-size: clamp(2.25rem, 5vw, 3.75rem);
                    font-weight: 800;
                    margin: 0 0 1.5rem 0;
                }
                .section-heading p {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #f97316, #ec4899);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .experience {
                    background: linear-gradient(to bottom right, #fff7ed, #fdf2f8);
                }
                .feature-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 2rem;
                }
                .feature-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.08);
                    transition: transform 0.3s;
                }
                .feature-card:hover {
                    transform: translateY(-8px) scale(1.02);
                }
                .feature-icon {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    background: linear-gradient(to bottom right, #f97316, #ec4899);
                    margin-bottom: 1.5rem;
                }
                .feature-card p {
                    color: #4b5563;
                    line-height: 1.6;
                }
                .experience-logo {
                    display: block;
                    margin: 4rem auto 0 auto;
                    height: 10rem;
                    width: auto;
                }
                .ticket-card {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr auto;
                    gap: 3rem;
                    align-items: center;
                    background: linear-gradient(to bottom right, #fff7ed, #fce7f3);
                    border-radius: 1.5rem;
                    padding: 3rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.1);
                }
                .ticket-qr {
                    width: 16rem;
                    height: 16rem;
                    object-fit: contain;
                    border-radius: 1rem;
                    cursor: pointer;
                    background: #fff;
                    padding: 1rem;
                }
                .dot-list {
                    list-style: none;
                    padding: 0;
                }
                .dot-list li {
                    position: relative;
                    padding-left: 1.5rem;
                    margin-bottom: 0.75rem;
                    font-size: 1.125rem;
                    color: #374151;
                }
                .dot-list li::before {
                    content: '';
                    position: absolute;
                    left: 0;
                    top: 0.55em;
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    background: linear-gradient(90deg, #f97316, #ec4899);
                }
                .info {
                    background: #f9fafb;
                }
                .info-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                    gap: 2rem;
                }
                .info-card {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
                }
                .info-card p {
                    line-height: 1.8;
                    color: #374151;
                }
                .map-frame {
                    margin-top: 1.5rem;
                    height: 16rem;
                    border-radius: 0.75rem;
                    overflow: hidden;
                }
                .map-frame iframe {
                    border: 0;
                }
                .about-card {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    gap: 3rem;
                    align-items: center;
                }
                .about-card img {
                    width: 14rem;
                    border-radius: 1rem;
                }
                .about-card p {
                    color: #4b5563;
                    line-height: 1.7;
                }
                .partners {
                    background: linear-gradient(to bottom, #fff, #fff7ed);
                }
                .partner-row {
                    max-width: 64rem;
                    margin: 0 auto;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 2rem;
                }
                .partner-logo {
                    background: #fff;
                    border-radius: 1rem;
                    padding: 1.5rem;
                    width: 14rem;
                    height: 10rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.06);
                }
                .partner-logo img {
                    max-height: 100%;
                    object-fit: contain;
                }
                .partner-footer {
                    margin-top: 3rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }
                .partner-trust {
                    color: #6b7280;
                    letter-spacing: 0.05em;
                }
                @media (max-width: 768px) {
                    .ticket-card {
                        grid-template-columns: 1fr;
                        padding: 2rem;
                        justify-items: center;
                    }
                    .about-card {
                        flex-direction: column;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_section_beats_fragment() {
        assert_eq!(mount_target(Some(Section::Tickets), "#about"), Some(Section::Tickets));
    }

    #[test]
    fn fragment_alone_on_fresh_load() {
        assert_eq!(mount_target(None, "#info"), Some(Section::Info));
    }

    #[test]
    fn no_target_without_a_known_fragment() {
        assert_eq!(mount_target(None, ""), None);
        assert_eq!(mount_target(None, "#"), None);
        assert_eq!(mount_target(None, "#sponsors"), None);
    }
}
