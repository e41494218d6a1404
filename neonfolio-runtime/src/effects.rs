// Neonfolio effect groups
//
// A view's timers (periodic ticks, one-shot delays, frame drivers) are tokio
// tasks registered with one group. Cancelling the group, explicitly or by
// dropping it, ends every task at its next await point.

use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;

use tokio::time::{interval_at, sleep_until, Instant};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

/// Cloneable spawning handle for a group. Timer callbacks use it to schedule
/// follow-up one-shots (a glitch revert, the completion notice) that must die
/// with the group.
#[derive(Clone)]
pub struct Scheduler {
    token: CancellationToken,
    tracker: TaskTracker,
}

impl Scheduler {
    /// Run `future` until it finishes or the group is cancelled.
    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.token.clone();
        self.tracker.spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {},
                _ = future => {},
            }
        });
    }

    /// Call `tick` every `period`, the first time one full period from now.
    /// The timer stops when `tick` breaks or the group is cancelled.
    pub fn spawn_periodic<F>(&self, period: Duration, mut tick: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        let token = self.token.clone();
        let start = Instant::now() + period;
        self.tracker.spawn(async move {
            let mut ticker = interval_at(start, period);
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        if tick().is_break() {
                            break;
                        }
                    },
                }
            }
        });
    }

    /// Call `callback` once, `delay` from now, unless the group is cancelled
    /// first.
    pub fn spawn_after<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = Instant::now() + delay;
        self.spawn(async move {
            sleep_until(deadline).await;
            callback();
        });
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// Owner of a view's timers. Dropping it cancels all of them.
pub struct EffectGroup {
    name: String,
    scheduler: Scheduler,
}

impl EffectGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scheduler: Scheduler {
                token: CancellationToken::new(),
                tracker: TaskTracker::new(),
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scheduler(&self) -> Scheduler {
        self.scheduler.clone()
    }

    pub fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.scheduler.spawn(future);
    }

    pub fn spawn_periodic<F>(&self, period: Duration, tick: F)
    where
        F: FnMut() -> ControlFlow<()> + Send + 'static,
    {
        self.scheduler.spawn_periodic(period, tick);
    }

    pub fn spawn_after<F>(&self, delay: Duration, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.scheduler.spawn_after(delay, callback);
    }

    /// Timers that have not finished yet
    pub fn active(&self) -> usize {
        self.scheduler.tracker.len()
    }

    pub fn is_cancelled(&self) -> bool {
        self.scheduler.is_cancelled()
    }

    /// Cancel every timer in the group. Idempotent.
    pub fn cancel(&self) {
        if self.scheduler.token.is_cancelled() {
            return;
        }
        log::debug!(
            "Cancelling effect group `{}` ({} active)",
            self.name,
            self.active()
        );
        self.scheduler.token.cancel();
        self.scheduler.tracker.close();
    }

    /// Cancel and wait until every task has observed it.
    pub async fn shutdown(&self) {
        self.cancel();
        self.scheduler.tracker.close();
        self.scheduler.tracker.wait().await;
    }
}

impl Drop for EffectGroup {
    fn drop(&mut self) {
        self.cancel();
    }
}
