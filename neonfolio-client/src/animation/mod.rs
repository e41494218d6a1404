// Neonfolio animation engines
// Frame-based animations for the preloader, hero, about and skills views

pub mod engine;
pub mod error;
pub mod glitch;
pub mod odometer;
pub mod particles;
pub mod preloader;
pub mod typewriter;

pub use engine::{AnimationEngine, AnimationFrame, DirtyRegion};
pub use error::{AnimationError, AnimationResult};
pub use glitch::GlitchText;
pub use odometer::Odometer;
pub use particles::{Bounds, GridCell, Particle, ParticleField, FOCUSED_MARKER, MARKER};
pub use preloader::PreloaderState;
pub use typewriter::{Typewriter, TypewriterPhase};
