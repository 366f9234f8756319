//! Fixed copy and logo lists the views render from.

use chrono::{Datelike, NaiveDate, TimeZone};

use crate::config::{EVENT_CLOSES, EVENT_DATE, EVENT_OPENS, EVENT_TIMEZONE};

pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎵",
        title: "Live Performances & Fashion Show",
        description: "Experience folk & classical dances, live music performances by talented local singers, awesome percussionists, and a stunning fashion showcase celebrating India's diverse cultural heritage.",
    },
    Feature {
        icon: "🍛",
        title: "Authentic Indian Food trucks and Stalls",
        description: "Savor authentic Indian cuisine from various regions, featuring traditional dishes and modern fusion flavors from local vendors.",
    },
    Feature {
        icon: "🎨",
        title: "Art Exhibits & Cultural Activities",
        description: "Discover beautiful jewelry, indian outfits, intricate henna art, cultural exhibits, cricket booth, and family-friendly activities showcasing Indian artistic traditions.",
    },
    Feature {
        icon: "🎮",
        title: "Games",
        description: "Enjoy traditional Indian games and fun activities for all ages. From interactive cultural experiences that bring families together to water-balloon fights for kids and Indian games for seniors as well.",
    },
];

pub static TICKET_PERKS: [&str; 3] = [
    "$8 per person",
    "Access to all performances",
    "Food and merchandise available for purchase",
];

pub static WHAT_TO_EXPECT: [&str; 5] = [
    "Live music and dance performances throughout the day",
    "Authentic Indian cuisine from various regions",
    "Cultural exhibits and art installations",
    "Fashion show featuring traditional and modern Indian attire",
    "Family-friendly activities and games",
];

fn event_day() -> Option<NaiveDate> {
    let (year, month, day) = EVENT_DATE;
    NaiveDate::from_ymd_opt(year, month, day)
}

pub fn event_year() -> i32 {
    event_day().map_or(EVENT_DATE.0, |d| d.year())
}

/// "July 12, 2025"
pub fn event_date_label() -> String {
    event_day()
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Opening hours in venue-local time, e.g. "12:00 PM - 7:00 PM CDT".
pub fn event_hours_label() -> String {
    let local = |(hour, minute): (u32, u32)| {
        event_day()
            .and_then(|d| d.and_hms_opt(hour, minute, 0))
            .and_then(|naive| EVENT_TIMEZONE.from_local_datetime(&naive).single())
    };
    match (local(EVENT_OPENS), local(EVENT_CLOSES)) {
        (Some(opens), Some(closes)) => format!(
            "{} - {}",
            opens.format("%-I:%M %p"),
            closes.format("%-I:%M %p %Z")
        ),
        _ => String::new(),
    }
}

pub struct Sponsor {
    pub name: &'static str,
    pub image: &'static str,
}

const fn sponsor(name: &'static str, image: &'static str) -> Sponsor {
    Sponsor { name, image }
}

pub static SUPPORTING_PARTNERS: [Sponsor; 3] = [
    sponsor("Partner Logo 1", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/image%20(19)-2.png"),
    sponsor("Partner Logo 2", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-06-10%20at%2020.25.07_c354347d.jpg"),
    sponsor("AAPI", "/sponsors/big/aapi.png"),
];

pub static BIGGEST_SUPPORTER: Sponsor = sponsor(
    "Consulate General of India Chicago",
    "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/main%20supporter.png",
);

pub static CO_ORGANIZER: Sponsor = sponsor(
    "Co-organizer Logo",
    "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/charu.png",
);

pub static DIAMOND_SPONSORS: [Sponsor; 2] = [
    sponsor("AAPI", "/sponsors/big/aapi.png"),
    sponsor("Creative Moods", "/sponsors/big/creativemoods.jpg"),
];

pub static GOLD_SPONSORS: [Sponsor; 2] = [
    sponsor("New Gold Sponsor", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-07-03%20at%2015.06.29_cbf079e6.jpg"),
    sponsor("Mars", "/sponsors/big/mars.png"),
];

pub static SILVER_SPONSORS: [Sponsor; 6] = [
    sponsor("DNA College Advising", "/sponsors/small/image (11).png"),
    sponsor("Elements Massage", "/sponsors/small/image (12).png"),
    sponsor("New Silver Sponsor", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-07-03%20at%2015.06.28_66438146.jpg"),
    sponsor("Indian Groceries and Spices, Milwaukee", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/indian%20groceries.png"),
    sponsor("Holiday Inn", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/holidayinn-removebg-preview.png"),
    sponsor("Country Inn", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/country-removebg-preview.png"),
];

/// Silver logos at these positions are drawn larger; their artwork has more padding.
const LARGER_SILVER_LOGOS: [usize; 3] = [2, 4, 5];

pub fn is_larger_silver_logo(index: usize) -> bool {
    LARGER_SILVER_LOGOS.contains(&index)
}

pub static FOOD_VENDORS: [Sponsor; 9] = [
    sponsor("Sponsor 5", "/sponsors/small/image (15).png"),
    sponsor("Sponsor 6", "/sponsors/small/image (16).png"),
    sponsor("New Sponsor", "https://i.imgur.com/AR3gtJ3.png"),
    sponsor("", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/unnamed.png"),
    sponsor("", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/unnamed%20(1).png"),
    sponsor("Dosa District", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/dosadistrict-removebg-preview.png"),
    sponsor("Mini Donuts", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/minidonuts.jpg"),
    sponsor("Organic Coffee", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/organic%20coffee.jpg"),
    sponsor("New Food Vendor", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-07-11%20at%2013.11.06_41957912.jpg"),
];

pub static FOOD_VENDOR_ROWS: [usize; 4] = [3, 3, 2, 1];

pub const CLIENT_IMAGE: &str = "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/client.jpg";

pub static SUPPORTERS: [Sponsor; 9] = [
    sponsor("New Supporter", "/sponsors/small/image (17).png"),
    sponsor("Sewa USA", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/sewa%20usa%20logo.png"),
    sponsor("Akshaya Patra", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/askshaya.png"),
    sponsor("Desi Vibes", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/desivibes.png"),
    sponsor("Cafe 94 Indian Fusion", "/sponsors/small/image (18).png"),
    sponsor("New Supporter 2", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-07-11%20at%2012.03.25_0429a790.jpg"),
    sponsor("New Supporter 3", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/WhatsApp%20Image%202025-07-11%20at%2012.06.00_0ef46be1.jpg"),
    sponsor("Best Food", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/bestfood.png"),
    sponsor("New Supporter 1", "https://22527425.fs1.hubspotusercontent-na1.net/hubfs/22527425/unnamed-1.png"),
];

pub static SUPPORTER_ROWS: [usize; 3] = [4, 3, 2];

/// Splits `items` into consecutive rows of the given sizes. Rows past the end
/// of `items` are dropped; leftover items go nowhere.
pub fn rows<'a, T>(items: &'a [T], sizes: &[usize]) -> Vec<&'a [T]> {
    let mut rest = items;
    let mut out = Vec::with_capacity(sizes.len());
    for &size in sizes {
        if rest.is_empty() {
            break;
        }
        let (row, tail) = rest.split_at(size.min(rest.len()));
        out.push(row);
        rest = tail;
    }
    out
}

pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Instagram", icon: "📷", href: "https://instagram.com/incredibleindiafestivalmke" },
    SocialLink { label: "Facebook", icon: "📘", href: "https://www.facebook.com/profile.php?id=61577139086824#" },
    SocialLink { label: "Twitter", icon: "🐦", href: "https://twitter.com/incredindiamke" },
    SocialLink { label: "Bluesky", icon: "☁️", href: "https://incredibleindiamke.bsky.social" },
];

pub const CARRY_IN_NOTICE: &str = "Milwaukee World Festival, Inc. d/b/a Summerfest reserves the right to alter carry-in item policies at any time. MWF will not offer accommodations for prohibited items and are not responsible for items left behind in the screening process.";

pub const SECURITY_SCREENING_INTRO: &str = "In line with all other major venues and stadiums, all visitors and employees will enter Henry Maier Festival Park (the \"Park\") through metal detection and should be prepared to comply with other security screening requirements.";

pub static SECURITY_SCREENING: [&str; 4] = [
    "All bags are subject to inspection prior to entering the Summerfest grounds. No backpacks at all or bags larger than 9x10x12 will be allowed on the grounds. All bags larger than 9X10X12 will need to be returned to a vehicle or home before entering the Park.",
    "Please leave any unnecessary articles secured within your vehicle or at home to expedite your entry into the park. Items NOT ALLOWED CANNOT be checked in (see list below).",
    "Any prohibited items will be confiscated by security and will not be returned.",
    "Milwaukee World Festival, INC (MWF) is not responsible for fire, theft, damage or loss of vehicle including articles left within.",
];

pub static ALLOWED_ITEMS: [&str; 5] = [
    "Umbrellas (Note: Umbrellas are not allowed inside the American Family Insurance Amphitheater or at the BMO Pavilion",
    "Strollers (Note: Strollers are not allowed inside the American Family Insurance Amphitheater, BMO Pavilion, or the Miller Level Up Deck)",
    "Disposable Camera",
    "Small Camera (No Professional Grade Cameras and Video Equipment)",
    "Small Bag, Cinch bag, or Purse (See graphic above)",
];

pub static PROHIBITED_ITEMS: [&str; 30] = [
    "Backpacks (special consideration will be given for parents with infants and those with medical needs)",
    "Large Bags over 9X10X12 inches",
    "Camelback style hydration packs",
    "Picnic Baskets",
    "Outside food and beverages (unless needed for infants, medical or dietary needs)",
    "Cans and Glass/Plastic or Metal Containers (including Yeti type bottles, tumblers, thermos, and disposable plastic bottles)",
    "Coolers or other hard side containers",
    "Stainless steel reusable drinking straws",
    "Self-defense sprays (such as OC, pepper spray or mace)",
    "Aerosol cans (except for spray sunscreens 6oz or less, 1 per patron)",
    "UAV-Drones",
    "Alcohol",
    "Illegal drugs or substances",
    "Firearms (no open or concealed weapons/firearms)",
    "Knives",
    "Weapons or objects that could be used as weapons",
    "Fireworks, sparklers, or explosives",
    "Professional cameras (cameras with a detachable lens or lens that extends further than 3 inches) or video equipment",
    "Recording devices",
    "Brooms/broomsticks, selfie sticks, poles, trekking sticks, and tripods",
    "Pets (except service animals, or during special events or promotions)",
    "Banners or flags on poles",
    "Laser pointers",
    "Skateboards, roller skates, inline skates or hoverboards",
    "Foot powered or electric scooters",
    "Bicycles, tricycles or unicycles",
    "Wagons",
    "Kites",
    "Hula-hoops, Frisbees, and beach balls",
    "Stadium seats, Sit-Upon, seat cushions, and lawn chairs",
];

pub const PROHIBITED_DISCLAIMER: &str = "*This list is not exhaustive. Items not appearing on the list may still be prohibited at the discretion of MWF Security if the items pose a potential threat to safety of our guests or due to event restrictions";

pub static MEDICAL_ITEMS: [&str; 3] = [
    "If you have privacy concerns, put those items in a smaller bag that you cannot see through and then place that bag in a clear bag.",
    "Please note, the small cosmetic or privacy bag is still subject to inspection.",
    "Nursing mothers may bring in needed items in a similar manner or separate bag.",
];

pub static AMPHITHEATER_RESTRICTIONS: [&str; 5] = [
    "Strollers",
    "Umbrellas",
    "Professional grade cameras, GO Pro style cameras, Ipads/tablets, video, or video recording equipment, unless authorized by the performer. Standard point and shoot cameras may or may not be prohibited depending on event restrictions",
    "Stadium seats, Sit-Upon, seat cushions, and lawn chairs",
    "Other items as determined by the performer",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_labels() {
        assert_eq!(event_date_label(), "July 12, 2025");
        assert_eq!(event_hours_label(), "12:00 PM - 7:00 PM CDT");
        assert_eq!(event_year(), 2025);
    }

    #[test]
    fn vendor_rows_are_three_three_two_one() {
        let sizes: Vec<usize> = rows(&FOOD_VENDORS, &FOOD_VENDOR_ROWS).iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![3, 3, 2, 1]);
        assert_eq!(rows(&FOOD_VENDORS, &FOOD_VENDOR_ROWS)[3][0].name, "New Food Vendor");
    }

    #[test]
    fn supporter_rows_are_four_three_two() {
        let grid = rows(&SUPPORTERS, &SUPPORTER_ROWS);
        let sizes: Vec<usize> = grid.iter().map(|r| r.len()).collect();
        assert_eq!(sizes, vec![4, 3, 2]);
        assert_eq!(grid[1][0].name, "Cafe 94 Indian Fusion");
    }

    #[test]
    fn rows_stop_when_items_run_out() {
        let items = [1, 2, 3, 4];
        assert_eq!(rows(&items, &[3, 3, 2]), vec![&[1, 2, 3][..], &[4][..]]);
        assert!(rows::<u8>(&[], &[2, 2]).is_empty());
    }

    #[test]
    fn larger_silver_logos() {
        let larger: Vec<usize> = (0..SILVER_SPONSORS.len()).filter(|&i| is_larger_silver_logo(i)).collect();
        assert_eq!(larger, vec![2, 4, 5]);
    }
}
