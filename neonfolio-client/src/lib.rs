//! Client side of Neonfolio: frame-based animation engines, the state behind
//! navigation and the project gallery, and the ANSI renderers that turn all
//! of it into terminal output.

pub mod animation;
pub mod gallery;
pub mod navigation;
pub mod render;
