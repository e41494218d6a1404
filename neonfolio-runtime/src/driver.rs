// Neonfolio engine driver
// Runs any AnimationEngine on its own cadence inside an effect group and
// publishes each frame through a watch channel.

use tokio::sync::watch;
use tokio::time::sleep;

use neonfolio_client::animation::{AnimationEngine, AnimationFrame};

use crate::effects::Scheduler;

/// Wait `frame_duration()`, take `next_frame()`, publish, repeat. Stops when a
/// finite engine runs out of frames, every receiver is gone, or the group is
/// cancelled. The receiver starts at `None` until the first frame.
pub fn spawn_engine<E>(scheduler: &Scheduler, mut engine: E) -> watch::Receiver<Option<AnimationFrame>>
where
    E: AnimationEngine + 'static,
{
    let (tx, rx) = watch::channel(None);
    scheduler.spawn(async move {
        loop {
            sleep(engine.frame_duration()).await;
            match engine.next_frame() {
                Some(frame) => {
                    if tx.send(Some(frame)).is_err() {
                        log::debug!("Frame receiver dropped, stopping engine");
                        break;
                    }
                },
                None => break,
            }
        }
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectGroup;
    use neonfolio_client::animation::{Odometer, Typewriter};
    use std::time::Duration;
    use tokio::time::advance;

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    fn content(rx: &watch::Receiver<Option<AnimationFrame>>) -> Option<String> {
        rx.borrow().as_ref().map(|frame| frame.content.clone())
    }

    #[tokio::test(start_paused = true)]
    async fn test_typewriter_follows_its_own_cadence() {
        let group = EffectGroup::new("hero");
        let typewriter = Typewriter::new(["ab"]).unwrap();
        let rx = spawn_engine(&group.scheduler(), typewriter);
        settle().await;
        assert_eq!(content(&rx), None);

        advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(content(&rx).as_deref(), Some("a"));

        advance(Duration::from_millis(100)).await;
        settle().await;
        assert_eq!(content(&rx).as_deref(), Some("ab"));

        // full phrase: a 2000 ms hold before the first deletion
        advance(Duration::from_millis(1000)).await;
        settle().await;
        assert_eq!(content(&rx).as_deref(), Some("ab"));
        advance(Duration::from_millis(1000)).await;
        settle().await;
        advance(Duration::from_millis(50)).await;
        settle().await;
        assert_eq!(content(&rx).as_deref(), Some("a"));

        group.cancel();
        settle().await;
        advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(content(&rx).as_deref(), Some("a"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_finite_engine_stops_on_its_own() {
        let group = EffectGroup::new("stats");
        let odometer = Odometer::new(50).with_fps(10).with_duration(Duration::from_millis(500));
        let rx = spawn_engine(&group.scheduler(), odometer);
        settle().await;
        for _ in 0..10 {
            advance(Duration::from_millis(100)).await;
            settle().await;
        }
        assert_eq!(content(&rx).as_deref(), Some("50"));
        assert_eq!(group.active(), 0);
    }
}
