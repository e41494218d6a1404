// Neonfolio navigation
//
// Scroll-spy over the six section anchors plus the bits of navigation bar
// state that go with it (scrolled style, mobile menu).

use std::collections::HashMap;

use neonfolio_utils::Section;

/// A section counts as active once its top is within this many pixels of the
/// viewport top
pub const ACTIVE_THRESHOLD: f32 = 100.0;
/// Past this scroll offset the bar switches to its compact style
pub const SCROLLED_THRESHOLD: f32 = 50.0;

/// Source of "where is this section's top, relative to the viewport".
/// `None` means the section is not on the page.
pub trait SectionRects {
    fn top_of(&self, section: Section) -> Option<f32>;
}

impl SectionRects for HashMap<Section, f32> {
    fn top_of(&self, section: Section) -> Option<f32> {
        self.get(&section).copied()
    }
}

/// Document offsets (pixels from the top of the page) of rendered sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    offsets: Vec<(Section, f32)>,
}

impl PageLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, section: Section, top: f32) {
        match self.offsets.iter_mut().find(|(s, _)| *s == section) {
            Some(entry) => entry.1 = top,
            None => self.offsets.push((section, top)),
        }
    }

    pub fn offset_of(&self, section: Section) -> Option<f32> {
        self.offsets
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, top)| *top)
    }

    /// Viewport-relative rects for a given scroll offset
    pub fn at_scroll(&self, scroll_y: f32) -> Viewport<'_> {
        Viewport {
            layout: self,
            scroll_y,
        }
    }
}

pub struct Viewport<'a> {
    layout: &'a PageLayout,
    scroll_y: f32,
}

impl SectionRects for Viewport<'_> {
    fn top_of(&self, section: Section) -> Option<f32> {
        self.layout
            .offset_of(section)
            .map(|top| top - self.scroll_y)
    }
}

#[derive(Debug, Clone)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    threshold: f32,
}

impl ScrollSpy {
    pub fn new(sections: Vec<Section>, threshold: f32) -> Self {
        Self {
            sections,
            threshold,
        }
    }

    /// Last section in document order whose top is at or above the
    /// threshold. Missing sections are skipped.
    pub fn select<R: SectionRects>(&self, rects: &R) -> Option<Section> {
        self.sections.iter().rev().copied().find(|section| {
            rects
                .top_of(*section)
                .map_or(false, |top| top <= self.threshold)
        })
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(Section::ALL.to_vec(), ACTIVE_THRESHOLD)
    }
}

/// Navigation bar state
#[derive(Debug, Clone)]
pub struct Navigation {
    spy: ScrollSpy,
    active: Section,
    scrolled: bool,
    menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            spy: ScrollSpy::default(),
            active: Section::Home,
            scrolled: false,
            menu_open: false,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Handle a scroll event. When no section qualifies the previous active
    /// section is kept.
    pub fn on_scroll<R: SectionRects>(&mut self, scroll_y: f32, rects: &R) -> Section {
        self.scrolled = scroll_y > SCROLLED_THRESHOLD;
        if let Some(section) = self.spy.select(rects) {
            if section != self.active {
                log::debug!("Active section {} -> {}", self.active, section);
            }
            self.active = section;
        }
        self.active
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Scroll target for a section, closing the mobile menu. A section that
    /// is not on the page yields `None` and nothing scrolls.
    pub fn navigate(&mut self, section: Section, layout: &PageLayout) -> Option<f32> {
        self.menu_open = false;
        layout.offset_of(section)
    }

    pub fn navigate_href(&mut self, href: &str, layout: &PageLayout) -> Option<f32> {
        match Section::from_href(href) {
            Some(section) => self.navigate(section, layout),
            None => {
                self.menu_open = false;
                None
            },
        }
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rects(tops: &[(Section, f32)]) -> HashMap<Section, f32> {
        tops.iter().copied().collect()
    }

    #[test]
    fn test_selects_last_section_above_threshold() {
        let spy = ScrollSpy::default();
        let mock = rects(&[
            (Section::Home, -1200.0),
            (Section::About, -400.0),
            (Section::Skills, 80.0),
            (Section::Projects, 600.0),
            (Section::Timeline, 1400.0),
            (Section::Contact, 2200.0),
        ]);
        assert_eq!(spy.select(&mock), Some(Section::Skills));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let spy = ScrollSpy::default();
        let mock = rects(&[(Section::Home, -500.0), (Section::About, 100.0)]);
        assert_eq!(spy.select(&mock), Some(Section::About));

        let mock = rects(&[(Section::Home, -500.0), (Section::About, 100.5)]);
        assert_eq!(spy.select(&mock), Some(Section::Home));
    }

    #[test]
    fn test_ties_go_to_last_declared() {
        // Several sections stacked at the same spot: the later one wins
        let spy = ScrollSpy::default();
        let mock = rects(&[
            (Section::Home, 0.0),
            (Section::About, 0.0),
            (Section::Skills, 0.0),
        ]);
        assert_eq!(spy.select(&mock), Some(Section::Skills));
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let spy = ScrollSpy::default();
        let mock = rects(&[(Section::Home, -900.0), (Section::Projects, 300.0)]);
        assert_eq!(spy.select(&mock), Some(Section::Home));
        assert_eq!(spy.select(&HashMap::new()), None);
    }

    #[test]
    fn test_navigation_keeps_previous_when_nothing_qualifies() {
        let mut nav = Navigation::new();
        let mut layout = PageLayout::new();
        layout.insert(Section::Home, 0.0);
        layout.insert(Section::About, 900.0);

        assert_eq!(nav.on_scroll(850.0, &layout.at_scroll(850.0)), Section::About);
        assert!(nav.is_scrolled());

        // every section below the threshold: keep About
        assert_eq!(nav.on_scroll(-500.0, &HashMap::new()), Section::About);
    }

    #[test]
    fn test_scrolled_flag() {
        let mut nav = Navigation::new();
        let layout = PageLayout::new();
        nav.on_scroll(50.0, &layout.at_scroll(50.0));
        assert!(!nav.is_scrolled());
        nav.on_scroll(51.0, &layout.at_scroll(51.0));
        assert!(nav.is_scrolled());
        assert_eq!(nav.active(), Section::Home);
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut nav = Navigation::new();
        let mut layout = PageLayout::new();
        layout.insert(Section::Contact, 4200.0);

        nav.toggle_menu();
        assert!(nav.is_menu_open());
        assert_eq!(nav.navigate_href("#contact", &layout), Some(4200.0));
        assert!(!nav.is_menu_open());

        nav.toggle_menu();
        assert_eq!(nav.navigate(Section::Timeline, &layout), None);
        assert!(!nav.is_menu_open());

        assert_eq!(nav.navigate_href("#nowhere", &layout), None);
    }

    #[test]
    fn test_layout_insert_replaces() {
        let mut layout = PageLayout::new();
        layout.insert(Section::About, 100.0);
        layout.insert(Section::About, 250.0);
        assert_eq!(layout.offset_of(Section::About), Some(250.0));
        assert_eq!(layout.at_scroll(50.0).top_of(Section::About), Some(200.0));
    }
}
