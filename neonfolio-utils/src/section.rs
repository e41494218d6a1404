// Neonfolio page sections
//
// The six in-page anchors, in document order. Navigation, scroll-spy and the
// page renderer all key off this enum.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// An in-page navigation target.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Timeline,
    Contact,
}

impl Section {
    /// All sections in document order
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Timeline,
        Section::Contact,
    ];

    /// The anchor id, e.g. `projects`
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Timeline => "timeline",
            Section::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Timeline => "Timeline",
            Section::Contact => "Contact",
        }
    }

    /// Resolve an href such as `#about` (or a bare `about`).
    pub fn from_href(href: &str) -> Option<Self> {
        href.trim_start_matches('#').parse().ok()
    }
}
