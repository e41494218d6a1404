// Neonfolio preloader sequencer
//
// Four independent timers drive the boot screen:
//   progress  - random bounded increments until 100, then a delayed completion
//   status    - reveal one more boot log line until the last one
//   glitch    - sometimes scramble the banner, revert shortly after
//   cursor    - blink
// All of them, and the one-shots they schedule, live in one effect group.

use std::ops::ControlFlow;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::watch;

use neonfolio_client::animation::{GlitchText, PreloaderState};
use neonfolio_utils::config::PreloaderConfig;
use neonfolio_utils::content::STATUS_MESSAGES;

use crate::effects::{EffectGroup, Scheduler};

pub struct Preloader {
    config: PreloaderConfig,
    status_count: usize,
    glitch: GlitchText,
    rng: StdRng,
}

impl Preloader {
    pub fn new(config: PreloaderConfig, rng: StdRng) -> Self {
        Self {
            config,
            status_count: STATUS_MESSAGES.len(),
            glitch: GlitchText::default(),
            rng,
        }
    }

    pub fn with_status_count(mut self, status_count: usize) -> Self {
        self.status_count = status_count;
        self
    }

    pub fn with_glitch(mut self, glitch: GlitchText) -> Self {
        self.glitch = glitch;
        self
    }

    /// Start all four timers. `on_complete` runs exactly once, a grace period
    /// after progress reaches 100, unless the preloader is torn down first.
    pub fn mount<F>(self, on_complete: F) -> PreloaderHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let Preloader {
            config,
            status_count,
            glitch,
            mut rng,
        } = self;

        let initial = PreloaderState::new(status_count).with_banner(glitch.original());
        let (tx, rx) = watch::channel(initial);
        let state = Arc::new(tx);
        let group = EffectGroup::new("preloader");

        let progress_rng = StdRng::seed_from_u64(rng.gen());
        spawn_progress(&group, &config, Arc::clone(&state), progress_rng, on_complete);
        spawn_status(&group, &config, Arc::clone(&state));
        spawn_glitch(&group, &config, Arc::clone(&state), glitch, rng);
        spawn_cursor(&group, &config, state);

        log::info!("Preloader mounted with {} status lines", status_count);
        PreloaderHandle { group, state: rx }
    }
}

fn spawn_progress<F>(
    group: &EffectGroup,
    config: &PreloaderConfig,
    state: Arc<watch::Sender<PreloaderState>>,
    mut rng: StdRng,
    on_complete: F,
) where
    F: FnOnce() + Send + 'static,
{
    let scheduler = group.scheduler();
    let grace = config.completion_delay();
    let mut on_complete = Some(on_complete);
    group.spawn_periodic(config.progress_interval(), move || {
        let amount = PreloaderState::random_increment(&mut rng);
        let mut loaded = false;
        state.send_modify(|s| loaded = s.advance_progress(amount));
        if !loaded {
            return ControlFlow::Continue(());
        }
        if let Some(done) = on_complete.take() {
            schedule_completion(&scheduler, grace, Arc::clone(&state), done);
        }
        ControlFlow::Break(())
    });
}

fn schedule_completion<F>(
    scheduler: &Scheduler,
    grace: std::time::Duration,
    state: Arc<watch::Sender<PreloaderState>>,
    done: F,
) where
    F: FnOnce() + Send + 'static,
{
    log::debug!("Progress at 100%, completing in {:?}", grace);
    scheduler.spawn_after(grace, move || {
        state.send_modify(|s| s.completed = true);
        log::info!("Preloader complete");
        done();
    });
}

fn spawn_status(
    group: &EffectGroup,
    config: &PreloaderConfig,
    state: Arc<watch::Sender<PreloaderState>>,
) {
    if state.borrow().all_statuses_revealed() {
        return;
    }
    group.spawn_periodic(config.status_interval(), move || {
        let mut more = false;
        state.send_modify(|s| more = s.reveal_next_status());
        if more {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    });
}

fn spawn_glitch(
    group: &EffectGroup,
    config: &PreloaderConfig,
    state: Arc<watch::Sender<PreloaderState>>,
    glitch: GlitchText,
    mut rng: StdRng,
) {
    let scheduler = group.scheduler();
    let revert = config.glitch_revert();
    group.spawn_periodic(config.glitch_interval(), move || {
        if let Some(scrambled) = glitch.roll(&mut rng) {
            state.send_modify(|s| s.glitch_text = scrambled);
            let state = Arc::clone(&state);
            scheduler.spawn_after(revert, move || {
                state.send_modify(|s| s.revert_glitch());
            });
        }
        ControlFlow::Continue(())
    });
}

fn spawn_cursor(
    group: &EffectGroup,
    config: &PreloaderConfig,
    state: Arc<watch::Sender<PreloaderState>>,
) {
    group.spawn_periodic(config.cursor_interval(), move || {
        state.send_modify(PreloaderState::toggle_cursor);
        ControlFlow::Continue(())
    });
}

/// A mounted preloader. Dropping it tears every timer down.
pub struct PreloaderHandle {
    group: EffectGroup,
    state: watch::Receiver<PreloaderState>,
}

impl PreloaderHandle {
    /// Current picture
    pub fn snapshot(&self) -> PreloaderState {
        self.state.borrow().clone()
    }

    /// A receiver that observes every published change
    pub fn subscribe(&self) -> watch::Receiver<PreloaderState> {
        self.state.clone()
    }

    /// Timers (periodic or pending one-shots) still alive
    pub fn active_timers(&self) -> usize {
        self.group.active()
    }

    pub fn is_torn_down(&self) -> bool {
        self.group.is_cancelled()
    }

    /// Resolves once the completion notice has fired. Returns false if the
    /// preloader was torn down before that.
    pub async fn completed(&self) -> bool {
        let mut rx = self.state.clone();
        let token = self.group.scheduler().token().clone();
        let fired = async move { rx.wait_for(|s| s.completed).await.is_ok() };
        tokio::select! {
            biased;
            _ = token.cancelled() => self.state.borrow().completed,
            done = fired => done,
        }
    }

    /// Stop everything regardless of how far the sequence got.
    pub fn teardown(&self) {
        if !self.group.is_cancelled() {
            log::info!("Preloader torn down at {}%", self.state.borrow().percent());
        }
        self.group.cancel();
    }
}

impl Drop for PreloaderHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}
