use yew_router::Routable;

use crate::Route;

/// Named regions of the home view, in the order the tracker tests them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Experience,
    Tickets,
    Info,
    About,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Experience,
        Section::Tickets,
        Section::Info,
        Section::About,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Experience => "experience",
            Section::Tickets => "tickets",
            Section::Info => "info",
            Section::About => "about",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.id() == id)
    }

    /// Parses a location fragment such as `#tickets`.
    pub fn from_hash(hash: &str) -> Option<Section> {
        Section::from_id(hash.strip_prefix('#').unwrap_or(hash))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavTarget {
    /// The top of the home view.
    Top,
    /// An anchor on the home view, `/#<id>`.
    Section(Section),
    /// A separate top-level page.
    Page(Route),
}

impl NavTarget {
    pub fn href(&self) -> String {
        match self {
            NavTarget::Top => Route::Home.to_path(),
            NavTarget::Section(section) => format!("/#{}", section.id()),
            NavTarget::Page(route) => route.to_path(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub target: NavTarget,
}

pub static NAV_ITEMS: [NavItem; 7] = [
    NavItem { id: "home", label: "Home", target: NavTarget::Top },
    NavItem { id: "experience", label: "Experience", target: NavTarget::Section(Section::Experience) },
    NavItem { id: "tickets", label: "Tickets", target: NavTarget::Section(Section::Tickets) },
    NavItem { id: "info", label: "Info", target: NavTarget::Section(Section::Info) },
    NavItem { id: "policies", label: "Policies", target: NavTarget::Page(Route::Policies) },
    NavItem { id: "sponsors", label: "Sponsors", target: NavTarget::Page(Route::Sponsors) },
    NavItem { id: "about", label: "About Sanskriti", target: NavTarget::Section(Section::About) },
];

/// Identifier a non-home route contributes as the active marker: its path
/// without the leading slash.
pub fn route_marker(route: &Route) -> Option<&'static str> {
    match route {
        Route::Home | Route::NotFound => None,
        Route::Policies => Some("policies"),
        Route::Sponsors => Some("sponsors"),
    }
}

pub fn is_highlighted(item: &NavItem, route: &Route, active: Option<&str>) -> bool {
    match route {
        Route::Home => active == Some(item.id),
        Route::Policies => item.id == "policies",
        Route::Sponsors => item.id == "sponsors",
        Route::NotFound => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> &'static NavItem {
        NAV_ITEMS.iter().find(|i| i.id == id).unwrap()
    }

    #[test]
    fn hrefs_follow_target_kind() {
        assert_eq!(item("home").target.href(), "/");
        assert_eq!(item("tickets").target.href(), "/#tickets");
        assert_eq!(item("about").target.href(), "/#about");
        assert_eq!(item("policies").target.href(), "/policies");
        assert_eq!(item("sponsors").target.href(), "/sponsors");
    }

    #[test]
    fn route_markers_match_paths() {
        for route in [Route::Policies, Route::Sponsors] {
            let path = route.to_path();
            assert_eq!(route_marker(&route), Some(&path[1..]));
        }
        assert_eq!(route_marker(&Route::Home), None);
        assert_eq!(route_marker(&Route::NotFound), None);
    }

    #[test]
    fn hash_parsing() {
        assert_eq!(Section::from_hash("#tickets"), Some(Section::Tickets));
        assert_eq!(Section::from_hash("about"), Some(Section::About));
        assert_eq!(Section::from_hash("#sponsors"), None);
        assert_eq!(Section::from_hash(""), None);
    }

    #[test]
    fn scrolling_into_tickets_moves_the_highlight() {
        let route = Route::Home;
        assert!(is_highlighted(item("experience"), &route, Some("experience")));
        assert!(is_highlighted(item("tickets"), &route, Some("tickets")));
        assert!(!is_highlighted(item("experience"), &route, Some("tickets")));
    }

    #[test]
    fn pages_highlight_their_own_item_regardless_of_scroll_state() {
        assert!(is_highlighted(item("policies"), &Route::Policies, Some("tickets")));
        assert!(!is_highlighted(item("tickets"), &Route::Policies, Some("tickets")));
        assert!(is_highlighted(item("sponsors"), &Route::Sponsors, None));
        assert!(!is_highlighted(item("home"), &Route::Sponsors, Some("home")));
    }

    #[test]
    fn nothing_highlighted_on_home_before_tracking() {
        assert!(NAV_ITEMS.iter().all(|i| !is_highlighted(i, &Route::Home, None)));
    }
}
