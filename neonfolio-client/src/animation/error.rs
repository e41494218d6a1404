// Neonfolio animation: error types

use std::fmt;

/// Errors raised when an animation is built with unusable parameters
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationError {
    /// Typewriter needs at least one phrase to cycle through
    NoPhrases,

    /// Canvas is smaller than twice its padding in some dimension
    CanvasTooSmall {
        width: f32,
        height: f32,
        padding: f32,
    },

    /// Particle index does not exist
    NoSuchParticle { index: usize, len: usize },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPhrases => write!(f, "Typewriter needs at least one phrase"),
            Self::CanvasTooSmall {
                width,
                height,
                padding,
            } => write!(
                f,
                "Canvas {}x{} is too small for a padding of {}",
                width, height, padding
            ),
            Self::NoSuchParticle { index, len } => {
                write!(f, "No particle at index {} (field has {})", index, len)
            },
        }
    }
}

impl std::error::Error for AnimationError {}

pub type AnimationResult<T> = Result<T, AnimationError>;
