//! The boot screen's live timers. See [`Preloader::mount`].

mod sequencer;

pub use sequencer::{Preloader, PreloaderHandle};
