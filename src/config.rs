use chrono_tz::Tz;
use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose navigation tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Pixels added to the scroll offset before testing which section contains it.
pub const SECTION_THRESHOLD_PX: f64 = 100.0;

/// Delay before an anchor scroll starts, so menus and freshly mounted views settle.
pub const SETTLE_DELAY_MS: u32 = 100;

pub const TICKET_URL: &str = "https://www.scan2scan.com/show/incredible-india-festival#/";
pub const TICKET_QR_IMAGE: &str =
    "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/fa2224b2-8b84-4d3a-8c37-b9328a3a9088.jpg";
pub const EARLY_BIRD_PRICE: &str = "$8 per person";

pub const LOGO_IMAGE: &str =
    "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/incredible_india_logo-removebg-preview.png";
pub const SANSKRITI_LOGO_IMAGE: &str =
    "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-06-10%20at%2020.25.07_c354347d.jpg";
pub const HERO_BACKGROUND_IMAGE: &str =
    "https://4536150.fs1.hubspotusercontent-na1.net/hubfs/4536150/Canva%20images/dl.beatsnoop.com-3000-vE2rhFRz71.jpg";
pub const FLYER_PATH: &str = "/real-flyer.png";

pub const POLICY_DOCUMENT_PATH: &str = "/service-animals_2025.pdf";
pub const POLICY_DOCUMENT_DOWNLOAD_NAME: &str =
    "Incredible_India_Festival_Service_Animals_Policy_2025.pdf";
pub const GOOGLE_VIEWER_BASE: &str = "https://docs.google.com/viewer";
pub const BAG_POLICY_IMAGE: &str = "/policies.png";

pub const CITY: &str = "Milwaukee";
pub const VENUE: &str = "Henry Maier Festival Park, Milwaukee";
pub const VENUE_MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d2917.6554863691597!2d-87.89990252392953!3d43.02904777112881!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x8805173a9b9e0241%3A0xb5c667de2f0c8d5e!2sHenry%20Maier%20Festival%20Park!5e0!3m2!1sen!2sus!4v1700000000000!5m2!1sen!2sus";

pub const EVENT_TIMEZONE: Tz = chrono_tz::America::Chicago;
pub const EVENT_DATE: (i32, u32, u32) = (2025, 7, 12);
pub const EVENT_OPENS: (u32, u32) = (12, 0);
pub const EVENT_CLOSES: (u32, u32) = (19, 0);
