//! `neonfolio show`: boot screen, then the page, optionally kept animating.

use std::io::{self, IsTerminal, Stdout, Write};
use std::time::Duration;

use anyhow::{anyhow, Context};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;
use tokio::time::{interval, interval_at, sleep_until, Instant};

use neonfolio_client::animation::{AnimationFrame, Odometer, ParticleField, Typewriter};
use neonfolio_client::gallery::ProjectGallery;
use neonfolio_client::navigation::Navigation;
use neonfolio_client::render::{
    render_canvas, render_nav, render_page, render_preloader, ContactView, PageView, ROW_HEIGHT_PX,
};
use neonfolio_runtime::driver::spawn_engine;
use neonfolio_runtime::preloader::Preloader;
use neonfolio_runtime::EffectGroup;
use neonfolio_utils::content::{
    PROJECTS, SKILL_MARKERS, STATS, STATUS_MESSAGES, TYPING_TAGS,
};
use neonfolio_utils::{Config, ContactFields, Section, SubmitStatus, ThemeContext};

use super::{rng, theme_context};
use crate::cli::ShowArgs;

const DEFAULT_WIDTH: usize = 80;
const MIN_WIDTH: usize = 40;
const CANVAS_ROWS: usize = 16;
const REDRAW_INTERVAL: Duration = Duration::from_millis(50);
const GALLERY_ROTATE: Duration = Duration::from_secs(3);

pub async fn run(config: &Config, args: &ShowArgs) -> anyhow::Result<()> {
    if let Some(href) = &args.section {
        Section::from_href(href).ok_or_else(|| anyhow!("unknown section `{}`", href))?;
    }
    let ctx = theme_context(config);
    let width = args.width.unwrap_or(DEFAULT_WIDTH).max(MIN_WIDTH);
    let mut rng = rng(config);
    let mut screen = Screen::new();

    if !args.skip_preloader {
        let preloader_rng = StdRng::seed_from_u64(rng.gen());
        if !run_preloader(config, &ctx, width, preloader_rng, &mut screen).await? {
            return Ok(());
        }
    }

    let mut page = PageState::new(width, args.section.clone());
    match args.animate {
        Some(duration) => animate(config, &ctx, &mut page, rng, duration, &mut screen).await,
        None => {
            let field = ParticleField::new(&SKILL_MARKERS, &config.particles, rng)?
                .with_grid(width, CANVAS_ROWS);
            let frame = Frame {
                typed: TYPING_TAGS[0].to_string(),
                stats: STATS
                    .iter()
                    .map(|stat| format!("{}{}", stat.value, stat.suffix))
                    .collect(),
                canvas: render_canvas(&field, &ctx),
            };
            let lines = page.compose(&frame, &ctx)?;
            screen.finish(&lines)?;
            Ok(())
        },
    }
}

/// Returns false when interrupted before the boot sequence finished.
async fn run_preloader(
    config: &Config,
    ctx: &ThemeContext,
    width: usize,
    rng: StdRng,
    screen: &mut Screen,
) -> anyhow::Result<bool> {
    let handle = Preloader::new(config.preloader.clone(), rng)
        .mount(|| log::info!("Preloader complete"));
    let mut rx = handle.subscribe();
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let completed = loop {
        let state = rx.borrow_and_update().clone();
        screen.draw(&render_preloader(&state, &STATUS_MESSAGES, ctx, width))?;
        if state.completed {
            break true;
        }
        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break false;
                }
            },
            _ = &mut ctrl_c => {
                log::info!("Interrupted during preloader");
                break false;
            },
        }
    };
    handle.teardown();
    Ok(completed)
}

async fn animate(
    config: &Config,
    ctx: &ThemeContext,
    page: &mut PageState,
    mut rng: StdRng,
    duration: Duration,
    screen: &mut Screen,
) -> anyhow::Result<()> {
    let group = EffectGroup::new("page");
    let scheduler = group.scheduler();

    let typewriter = Typewriter::new(TYPING_TAGS)?.with_timing(&config.typewriter);
    let typed = spawn_engine(&scheduler, typewriter);
    let field = ParticleField::new(
        &SKILL_MARKERS,
        &config.particles,
        StdRng::seed_from_u64(rng.gen()),
    )?
    .with_grid(page.width, CANVAS_ROWS);
    let canvas = spawn_engine(&scheduler, field);
    let stats: Vec<_> = STATS
        .iter()
        .map(|stat| spawn_engine(&scheduler, Odometer::from_stat(stat)))
        .collect();

    let deadline = Instant::now() + duration;
    let mut redraw = interval(REDRAW_INTERVAL);
    let mut rotate = interval_at(Instant::now() + GALLERY_ROTATE, GALLERY_ROTATE);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut lines = Vec::new();
    loop {
        tokio::select! {
            _ = sleep_until(deadline) => break,
            _ = &mut ctrl_c => break,
            _ = rotate.tick() => page.gallery.next(),
            _ = redraw.tick() => {},
        }
        let frame = Frame {
            typed: latest(&typed).unwrap_or_default(),
            stats: STATS
                .iter()
                .zip(&stats)
                .map(|(stat, rx)| latest(rx).unwrap_or_else(|| format!("0{}", stat.suffix)))
                .collect(),
            canvas: canvas
                .borrow()
                .as_ref()
                .map(AnimationFrame::rows)
                .unwrap_or_default(),
        };
        lines = page.compose(&frame, ctx)?;
        screen.draw(&lines)?;
    }

    group.shutdown().await;
    log::debug!("Page animation stopped");
    screen.finish(&lines)?;
    Ok(())
}

fn latest(rx: &watch::Receiver<Option<AnimationFrame>>) -> Option<String> {
    rx.borrow().as_ref().map(|frame| frame.content.clone())
}

/// Dynamic readings for one redraw
struct Frame {
    typed: String,
    stats: Vec<String>,
    canvas: Vec<String>,
}

struct PageState {
    nav: Navigation,
    gallery: ProjectGallery<'static>,
    contact: ContactFields,
    status: SubmitStatus,
    width: usize,
    jump_to: Option<String>,
}

impl PageState {
    fn new(width: usize, jump_to: Option<String>) -> Self {
        Self {
            nav: Navigation::new(),
            gallery: ProjectGallery::new(&PROJECTS),
            contact: ContactFields::default(),
            status: SubmitStatus::Idle,
            width,
            jump_to,
        }
    }

    /// Navigation bar plus the page, scrolled to the requested anchor
    fn compose(&mut self, frame: &Frame, ctx: &ThemeContext) -> anyhow::Result<Vec<String>> {
        let view = PageView {
            typed: &frame.typed,
            stats: &frame.stats,
            canvas: if frame.canvas.is_empty() {
                None
            } else {
                Some(frame.canvas.as_slice())
            },
            gallery: &self.gallery,
            contact: ContactView {
                fields: &self.contact,
                status: &self.status,
            },
            width: self.width,
        };
        let rendered = render_page(&view, ctx);

        let scroll_y = match &self.jump_to {
            Some(href) => self
                .nav
                .navigate_href(href, &rendered.layout)
                .with_context(|| format!("section `{}` is not on the page", href))?,
            None => 0.0,
        };
        self.nav.on_scroll(scroll_y, &rendered.layout.at_scroll(scroll_y));

        let skip = (scroll_y / ROW_HEIGHT_PX) as usize;
        let mut lines = render_nav(&self.nav, ctx, self.width);
        lines.extend(rendered.lines.into_iter().skip(skip));
        Ok(lines)
    }
}

/// Redraws in place on a terminal. Piped output only gets the final picture.
struct Screen {
    out: Stdout,
    interactive: bool,
    drawn: usize,
}

impl Screen {
    fn new() -> Self {
        let out = io::stdout();
        let interactive = out.is_terminal();
        Self {
            out,
            interactive,
            drawn: 0,
        }
    }

    fn draw(&mut self, lines: &[String]) -> io::Result<()> {
        if self.interactive {
            self.paint(lines)?;
        }
        Ok(())
    }

    fn finish(&mut self, lines: &[String]) -> io::Result<()> {
        self.paint(lines)?;
        self.drawn = 0;
        Ok(())
    }

    fn paint(&mut self, lines: &[String]) -> io::Result<()> {
        let mut out = self.out.lock();
        if self.interactive && self.drawn > 0 {
            write!(out, "\x1b[{}A\x1b[J", self.drawn)?;
        }
        for line in lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        self.drawn = lines.len();
        Ok(())
    }
}
