//! Types shared by every Neonfolio crate: the static page content, the
//! section anchors, the theme context, notifications and configuration.

pub mod config;
pub mod contact;
pub mod content;
pub mod errors;
pub mod notification;
pub mod section;
pub mod theme;

pub use config::Config;
pub use contact::{ContactField, ContactFields, SubmitStatus};
pub use errors::{ConfigError, ConfigResult};
pub use section::Section;
pub use theme::{Theme, ThemeContext};
