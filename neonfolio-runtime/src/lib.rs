//! The live side of Neonfolio. Every animated view gets an [`EffectGroup`]:
//! a set of tokio timer tasks sharing one cancellation token, so tearing the
//! view down stops all of its timers at once.

pub mod contact;
pub mod driver;
pub mod effects;
pub mod notifications;
pub mod preloader;

pub use effects::{EffectGroup, Scheduler};
pub use notifications::NotificationBus;

#[cfg(test)]
mod unit;
