// Neonfolio project gallery
// Carousel over the project list with an all/featured filter.

use std::fmt;

use neonfolio_utils::content::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Featured,
}

impl ProjectFilter {
    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Featured => project.featured,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectFilter::All => write!(f, "all"),
            ProjectFilter::Featured => write!(f, "featured"),
        }
    }
}

pub struct ProjectGallery<'a> {
    projects: &'a [Project],
    filter: ProjectFilter,
    active: usize,
}

impl<'a> ProjectGallery<'a> {
    pub fn new(projects: &'a [Project]) -> Self {
        Self {
            projects,
            filter: ProjectFilter::All,
            active: 0,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    /// Changing the filter always rewinds to the first project
    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.active = 0;
    }

    pub fn visible(&self) -> Vec<&'a Project> {
        self.projects
            .iter()
            .filter(|project| self.filter.matches(project))
            .collect()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&'a Project> {
        self.visible().get(self.active).copied()
    }

    pub fn next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.active = (self.active + 1) % len;
        }
    }

    pub fn prev(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.active = (self.active + len - 1) % len;
        }
    }

    /// Jump straight to a dot in the carousel; out of range is ignored
    pub fn select(&mut self, index: usize) {
        if index < self.visible().len() {
            self.active = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonfolio_utils::content::PROJECTS;

    #[test]
    fn test_next_prev_wrap() {
        let mut gallery = ProjectGallery::new(&PROJECTS);
        gallery.prev();
        assert_eq!(gallery.active_index(), 5);
        gallery.next();
        assert_eq!(gallery.active_index(), 0);
        gallery.next();
        assert_eq!(gallery.active().map(|p| p.title), Some("CyberChat"));
    }

    #[test]
    fn test_filter_resets_index() {
        let mut gallery = ProjectGallery::new(&PROJECTS);
        gallery.select(4);
        gallery.set_filter(ProjectFilter::Featured);
        assert_eq!(gallery.active_index(), 0);
        assert_eq!(gallery.visible().len(), 3);

        gallery.prev();
        assert_eq!(gallery.active().map(|p| p.title), Some("DataViz Pro"));
    }

    #[test]
    fn test_empty_filter_is_noop() {
        let none_featured: Vec<Project> = PROJECTS
            .iter()
            .copied()
            .filter(|p| !p.featured)
            .collect();
        let mut gallery = ProjectGallery::new(&none_featured);
        gallery.set_filter(ProjectFilter::Featured);
        gallery.next();
        gallery.prev();
        assert_eq!(gallery.active_index(), 0);
        assert!(gallery.active().is_none());
    }

    #[test]
    fn test_select_out_of_range_ignored() {
        let mut gallery = ProjectGallery::new(&PROJECTS);
        gallery.select(2);
        gallery.select(42);
        assert_eq!(gallery.active_index(), 2);
        assert_eq!(ProjectFilter::Featured.to_string(), "featured");
    }
}
