// Neonfolio page renderer
//
// Lays the six sections out top to bottom and records where each one starts,
// so scroll-spy and anchor navigation can work off the rendered output.

use neonfolio_utils::content::{
    SkillCategory, TimelineEntry, PROFILE, SKILL_CATEGORIES, SKILL_LEVELS, STATS, TIMELINE,
};
use neonfolio_utils::contact::{ContactField, ContactFields, SubmitStatus};
use neonfolio_utils::{Section, ThemeContext};

use super::{bar, center, pad_right, wrap, Painter};
use crate::gallery::{ProjectFilter, ProjectGallery};
use crate::navigation::{Navigation, PageLayout};

/// Height of one terminal row in page pixels
pub const ROW_HEIGHT_PX: f32 = 24.0;

const LEVEL_BAR_WIDTH: usize = 20;

pub struct ContactView<'a> {
    pub fields: &'a ContactFields,
    pub status: &'a SubmitStatus,
}

/// Everything dynamic the page shows at one instant
pub struct PageView<'a> {
    /// Current typewriter text in the hero
    pub typed: &'a str,
    /// Odometer readings, one per entry in `STATS`
    pub stats: &'a [String],
    /// Skill canvas rows, see [`render_canvas`](super::render_canvas)
    pub canvas: Option<&'a [String]>,
    pub gallery: &'a ProjectGallery<'a>,
    pub contact: ContactView<'a>,
    pub width: usize,
}

#[derive(Debug, Clone, Default)]
pub struct RenderedPage {
    pub lines: Vec<String>,
    pub layout: PageLayout,
}

impl RenderedPage {
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn height_px(&self) -> f32 {
        self.lines.len() as f32 * ROW_HEIGHT_PX
    }
}

struct PageBuilder {
    painter: Painter,
    width: usize,
    page: RenderedPage,
}

impl PageBuilder {
    fn start(&mut self, section: Section) {
        let top = self.page.lines.len() as f32 * ROW_HEIGHT_PX;
        self.page.layout.insert(section, top);
    }

    fn push(&mut self, line: String) {
        self.page.lines.push(line);
    }

    fn blank(&mut self) {
        self.page.lines.push(String::new());
    }

    fn heading(&mut self, title: &str, subtitle: &str) {
        let palette = self.painter.palette();
        let line = self.painter.bold(palette.primary, &center(title, self.width));
        self.push(line);
        let line = self.painter.muted(&center(subtitle, self.width));
        self.push(line);
        self.blank();
    }

    fn paragraph(&mut self, text: &str, indent: usize) {
        for line in wrap(text, self.width.saturating_sub(indent).max(1)) {
            let line = format!("{}{}", " ".repeat(indent), self.painter.foreground(&line));
            self.push(line);
        }
    }
}

/// The fixed navigation bar. In its compact (scrolled) style the separator
/// rule is dropped; an open mobile menu lists the links underneath.
pub fn render_nav(nav: &Navigation, ctx: &ThemeContext, width: usize) -> Vec<String> {
    let painter = Painter::new(ctx);
    let palette = painter.palette();
    let links: Vec<String> = Section::ALL
        .iter()
        .map(|section| {
            if *section == nav.active() {
                painter.bold(palette.primary, &format!("[{}]", section.title()))
            } else {
                painter.muted(&format!(" {} ", section.title()))
            }
        })
        .collect();

    let mut lines = vec![format!(
        "{}  {}  {}",
        painter.bold(palette.accent, PROFILE.logo),
        links.join(" "),
        painter.foreground(ctx.theme().toggle_icon()),
    )];
    if !nav.is_scrolled() {
        lines.push(painter.muted(&"─".repeat(width)));
    }
    if nav.is_menu_open() {
        for section in Section::ALL {
            let marker = if section == nav.active() { "▸" } else { " " };
            lines.push(painter.foreground(&format!("  {} {}", marker, section.title())));
        }
    }
    lines
}

pub fn render_page(view: &PageView<'_>, ctx: &ThemeContext) -> RenderedPage {
    let mut builder = PageBuilder {
        painter: Painter::new(ctx),
        width: view.width.max(20),
        page: RenderedPage::default(),
    };

    render_home(&mut builder, view);
    render_about(&mut builder, view);
    render_skills(&mut builder, view);
    render_projects(&mut builder, view.gallery);
    render_timeline(&mut builder);
    render_contact(&mut builder, &view.contact);
    render_footer(&mut builder);

    builder.page
}

fn render_home(b: &mut PageBuilder, view: &PageView<'_>) {
    b.start(Section::Home);
    let palette = b.painter.palette();
    b.blank();
    let line = b.painter.muted(PROFILE.greeting);
    b.push(line);
    let line = b.painter.bold(
        palette.foreground,
        &format!("Hi, I'm {} {}", PROFILE.first_name, PROFILE.last_name),
    );
    b.push(line);
    let line = format!("{}{}", b.painter.accent(view.typed), b.painter.primary("▌"));
    b.push(line);
    b.blank();
    b.paragraph(PROFILE.summary, 0);
    b.blank();
    let socials: Vec<String> = PROFILE
        .socials
        .iter()
        .map(|link| b.painter.primary(link.label))
        .collect();
    let line = socials.join(&b.painter.muted(" · "));
    b.push(line);
    b.blank();
}

fn render_about(b: &mut PageBuilder, view: &PageView<'_>) {
    b.start(Section::About);
    b.heading("About Me", "Get to know me better");
    let line = b.painter.muted(&format!("Based in {}", PROFILE.location));
    b.push(line);
    b.blank();
    let palette = b.painter.palette();
    for (index, stat) in STATS.iter().enumerate() {
        let reading = view
            .stats
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("0{}", stat.suffix));
        let line = format!(
            "  {} {}",
            b.painter.bold(palette.primary, &pad_right(&reading, 5)),
            b.painter.foreground(stat.label),
        );
        b.push(line);
    }
    b.blank();
}

fn render_skills(b: &mut PageBuilder, view: &PageView<'_>) {
    b.start(Section::Skills);
    b.heading("Skills & Technologies", "Technologies I work with");
    if let Some(lines) = view.canvas {
        for line in lines {
            b.push(line.clone());
        }
        b.blank();
    }
    for category in SKILL_CATEGORIES.iter() {
        render_category(b, category);
    }
    b.blank();
    for level in SKILL_LEVELS.iter() {
        let line = format!(
            "  {} {} {}",
            b.painter.foreground(&pad_right(level.level, 12)),
            b.painter.hex(level.color, &bar(level.fraction(), LEVEL_BAR_WIDTH)),
            b.painter.muted(&format!("{}%", level.percentage())),
        );
        b.push(line);
    }
    b.blank();
}

fn render_category(b: &mut PageBuilder, category: &SkillCategory) {
    let line = b.painter.hex(category.color, &format!("■ {}", category.title));
    b.push(line);
    let skills = category.skills.join(" · ");
    b.paragraph(&skills, 4);
}

fn render_projects(b: &mut PageBuilder, gallery: &ProjectGallery<'_>) {
    b.start(Section::Projects);
    b.heading("Featured Projects", "Some things I've built");
    let palette = b.painter.palette();

    let tabs: Vec<String> = [ProjectFilter::All, ProjectFilter::Featured]
        .iter()
        .map(|filter| {
            let label = match filter {
                ProjectFilter::All => "All Projects",
                ProjectFilter::Featured => "Featured",
            };
            if *filter == gallery.filter() {
                b.painter.bold(palette.primary, &format!("[{}]", label))
            } else {
                b.painter.muted(&format!(" {} ", label))
            }
        })
        .collect();
    let line = tabs.join(" ");
    b.push(line);
    b.blank();

    match gallery.active() {
        Some(project) => {
            let line = b.painter.bold(palette.accent, project.title);
            b.push(line);
            b.paragraph(project.description, 2);
            let line = format!("  {}", b.painter.primary(&project.tags.join(" ")));
            b.push(line);
            let line = b.painter.muted(&format!(
                "  Live Demo: {}  Code: {}",
                project.live_url, project.github_url
            ));
            b.push(line);
        },
        None => {
            let line = b.painter.muted("  No projects match this filter");
            b.push(line);
        },
    }

    let dots: String = (0..gallery.visible().len())
        .map(|index| if index == gallery.active_index() { '●' } else { '○' })
        .collect();
    let line = b.painter.primary(&center(&dots, b.width));
    b.push(line);
    b.blank();
}

fn render_timeline(b: &mut PageBuilder) {
    b.start(Section::Timeline);
    b.heading("My Journey", "Education, work and milestones");
    let mut seen = Vec::new();
    for entry in TIMELINE.iter() {
        if !seen.contains(&entry.kind) {
            seen.push(entry.kind);
        }
    }
    let legend: Vec<String> = seen
        .iter()
        .map(|kind| b.painter.muted(&format!("◇ {}", kind.legend())))
        .collect();
    let line = legend.join("  ");
    b.push(line);
    b.blank();
    for entry in TIMELINE.iter() {
        render_entry(b, entry);
    }
}

fn render_entry(b: &mut PageBuilder, entry: &TimelineEntry) {
    let palette = b.painter.palette();
    let line = format!(
        "{} {} {}",
        b.painter.primary(&pad_right(entry.date, 12)),
        b.painter.bold(palette.foreground, entry.title),
        b.painter.muted(&format!("@ {}", entry.organization)),
    );
    b.push(line);
    b.paragraph(entry.description, 13);
    b.blank();
}

fn render_contact(b: &mut PageBuilder, contact: &ContactView<'_>) {
    b.start(Section::Contact);
    b.heading("Get In Touch", "Have a project in mind? Let's talk");
    let line = b.painter.foreground(&format!("✉ {}", PROFILE.email));
    b.push(line);
    let line = b.painter.foreground(&format!("⌖ {}", PROFILE.location));
    b.push(line);
    b.blank();

    for field in ContactField::ALL {
        let value = contact.fields.get(field);
        let shown = if value.is_empty() {
            b.painter.muted(field.placeholder())
        } else {
            b.painter.foreground(value)
        };
        let line = format!("  {} {}", b.painter.primary(&pad_right(field.label(), 8)), shown);
        b.push(line);
    }
    b.blank();

    let palette = b.painter.palette();
    let button = format!("[ {} ]", contact.status.button_label());
    let line = match contact.status {
        SubmitStatus::Success => b.painter.success(&button),
        SubmitStatus::Error(_) => b.painter.accent(&button),
        _ => b.painter.bold(palette.primary, &button),
    };
    b.push(line);
    if let SubmitStatus::Error(detail) = contact.status {
        let line = b.painter.accent(&format!("  {}", detail));
        b.push(line);
    }
    b.blank();
}

fn render_footer(b: &mut PageBuilder) {
    let line = b.painter.muted(&"─".repeat(b.width));
    b.push(line);
    let line = b.painter.muted(&center(
        &format!(
            "Designed & built by {} {}",
            PROFILE.first_name, PROFILE.last_name
        ),
        b.width,
    ));
    b.push(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use neonfolio_utils::content::PROJECTS;
    use neonfolio_utils::Theme;

    fn render(gallery: &ProjectGallery<'_>, fields: &ContactFields, status: &SubmitStatus) -> RenderedPage {
        let stats: Vec<String> = STATS
            .iter()
            .map(|s| format!("{}{}", s.value, s.suffix))
            .collect();
        let view = PageView {
            typed: "Full Stack",
            stats: &stats,
            canvas: None,
            gallery,
            contact: ContactView { fields, status },
            width: 80,
        };
        render_page(&view, &ThemeContext::plain(Theme::Dark))
    }

    #[test]
    fn test_sections_are_laid_out_in_order() {
        let gallery = ProjectGallery::new(&PROJECTS);
        let page = render(&gallery, &ContactFields::default(), &SubmitStatus::Idle);
        assert_eq!(page.layout.offset_of(Section::Home), Some(0.0));
        let mut last = -1.0;
        for section in Section::ALL {
            let top = page.layout.offset_of(section).expect("every section rendered");
            assert!(top > last, "{} at {}", section, top);
            assert_eq!(top % ROW_HEIGHT_PX, 0.0);
            last = top;
        }
        assert!(page.height_px() > last);
    }

    #[test]
    fn test_offsets_point_at_headings() {
        let gallery = ProjectGallery::new(&PROJECTS);
        let page = render(&gallery, &ContactFields::default(), &SubmitStatus::Idle);
        let row = |section| (page.layout.offset_of(section).unwrap() / ROW_HEIGHT_PX) as usize;
        assert!(page.lines[row(Section::About)].contains("About Me"));
        assert!(page.lines[row(Section::Contact)].contains("Get In Touch"));
    }

    #[test]
    fn test_page_content() {
        let gallery = ProjectGallery::new(&PROJECTS);
        let page = render(&gallery, &ContactFields::default(), &SubmitStatus::Idle);
        let text = page.text();
        assert!(text.contains("Hi, I'm RAJ PATIL"));
        assert!(text.contains("Full Stack▌"));
        assert!(text.contains("50+"));
        assert!(text.contains("[All Projects]"));
        assert!(text.contains("●○○○○○"));
        assert!(text.contains("[ Send Message ]"));
        assert!(text.contains("john@example.com"));
        assert!(!text.contains('\u{1b}'));
    }

    #[test]
    fn test_filter_and_status_show_up() {
        let mut gallery = ProjectGallery::new(&PROJECTS);
        gallery.set_filter(ProjectFilter::Featured);
        gallery.next();
        let fields = ContactFields {
            name: "Ada".to_string(),
            ..ContactFields::default()
        };
        let status = SubmitStatus::Error("relay unreachable".to_string());
        let text = render(&gallery, &fields, &status).text();
        assert!(text.contains("[Featured]"));
        assert!(text.contains("○●○"));
        assert!(text.contains("Ada"));
        assert!(text.contains("[ Error - Try Again ]"));
        assert!(text.contains("relay unreachable"));
    }

    #[test]
    fn test_canvas_rows_sit_under_skills_heading() {
        let gallery = ProjectGallery::new(&PROJECTS);
        let canvas = vec!["   ◆React".to_string(), "      ◆Docker".to_string()];
        let view = PageView {
            typed: "",
            stats: &[],
            canvas: Some(canvas.as_slice()),
            gallery: &gallery,
            contact: ContactView {
                fields: &ContactFields::default(),
                status: &SubmitStatus::Idle,
            },
            width: 60,
        };
        let page = render_page(&view, &ThemeContext::plain(Theme::Dark));
        let skills = (page.layout.offset_of(Section::Skills).unwrap() / ROW_HEIGHT_PX) as usize;
        assert_eq!(page.lines[skills + 3], "   ◆React");
        assert_eq!(page.lines[skills + 4], "      ◆Docker");
        // no odometer readings yet: counters show zero
        assert!(page.text().contains("0+"));
    }

    #[test]
    fn test_nav_bar() {
        let mut nav = Navigation::new();
        let ctx = ThemeContext::plain(Theme::Dark);
        let lines = render_nav(&nav, &ctx, 30);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("<CYBER/>"));
        assert!(lines[0].contains("[Home]"));
        assert!(lines[0].ends_with('☀'));

        nav.toggle_menu();
        let lines = render_nav(&nav, &ctx, 30);
        assert_eq!(lines.len(), 2 + Section::ALL.len());
        assert_eq!(lines[2], "  ▸ Home");
    }
}
