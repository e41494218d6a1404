// Neonfolio configuration
//
// Timings and physics constants for every animated view, optionally read from
// a KDL file:
//
// ```kdl
// theme "light"
// seed 42
// preloader {
//     progress_interval_ms 100
//     completion_delay_ms 500
// }
// particles {
//     width 800
//     height 500
// }
// ```
//
// Every node is optional; anything missing keeps its default. A child block
// written on one line needs `;` after its last child: `contact { send_delay_ms
// 10; }`. Without it the KDL parser rejects the document.

use kdl::{KdlDocument, KdlNode, KdlValue};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::{ConfigError, ConfigResult};
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreloaderConfig {
    pub progress_interval_ms: u64,
    pub status_interval_ms: u64,
    pub glitch_interval_ms: u64,
    pub glitch_revert_ms: u64,
    pub cursor_interval_ms: u64,
    pub completion_delay_ms: u64,
}

impl Default for PreloaderConfig {
    fn default() -> Self {
        Self {
            progress_interval_ms: 100,
            status_interval_ms: 700,
            glitch_interval_ms: 150,
            glitch_revert_ms: 100,
            cursor_interval_ms: 500,
            completion_delay_ms: 500,
        }
    }
}

impl PreloaderConfig {
    pub fn progress_interval(&self) -> Duration {
        Duration::from_millis(self.progress_interval_ms)
    }

    pub fn status_interval(&self) -> Duration {
        Duration::from_millis(self.status_interval_ms)
    }

    pub fn glitch_interval(&self) -> Duration {
        Duration::from_millis(self.glitch_interval_ms)
    }

    pub fn glitch_revert(&self) -> Duration {
        Duration::from_millis(self.glitch_revert_ms)
    }

    pub fn cursor_interval(&self) -> Duration {
        Duration::from_millis(self.cursor_interval_ms)
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    fn apply(&mut self, node: &KdlNode) -> ConfigResult<()> {
        for child in children(node) {
            let key = child.name().value();
            let path = format!("preloader.{}", key);
            let slot = match key {
                "progress_interval_ms" => &mut self.progress_interval_ms,
                "status_interval_ms" => &mut self.status_interval_ms,
                "glitch_interval_ms" => &mut self.glitch_interval_ms,
                "glitch_revert_ms" => &mut self.glitch_revert_ms,
                "cursor_interval_ms" => &mut self.cursor_interval_ms,
                "completion_delay_ms" => &mut self.completion_delay_ms,
                _ => {
                    log::warn!("Ignoring unknown config node `{}`", path);
                    continue;
                },
            };
            *slot = u64_arg(child, &path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    pub type_ms: u64,
    pub delete_ms: u64,
    pub hold_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_ms: 100,
            delete_ms: 50,
            hold_ms: 2000,
        }
    }
}

impl TypewriterConfig {
    fn apply(&mut self, node: &KdlNode) -> ConfigResult<()> {
        for child in children(node) {
            let key = child.name().value();
            let path = format!("typewriter.{}", key);
            let slot = match key {
                "type_ms" => &mut self.type_ms,
                "delete_ms" => &mut self.delete_ms,
                "hold_ms" => &mut self.hold_ms,
                _ => {
                    log::warn!("Ignoring unknown config node `{}`", path);
                    continue;
                },
            };
            *slot = u64_arg(child, &path)?;
        }
        Ok(())
    }
}

/// Drift physics for the skill canvas. Distances are canvas pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleConfig {
    pub padding: f32,
    /// Width of the uniform random kick applied to each velocity component
    pub acceleration: f32,
    pub damping: f32,
    pub max_speed: f32,
    pub width: f32,
    pub height: f32,
    pub fps: u32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            padding: 40.0,
            acceleration: 0.3,
            damping: 0.99,
            max_speed: 1.5,
            width: 800.0,
            height: 500.0,
            fps: 60,
        }
    }
}

impl ParticleConfig {
    fn apply(&mut self, node: &KdlNode) -> ConfigResult<()> {
        for child in children(node) {
            let key = child.name().value();
            let path = format!("particles.{}", key);
            match key {
                "fps" => {
                    let fps = u64_arg(child, &path)?;
                    self.fps = u32::try_from(fps)
                        .map_err(|_| ConfigError::invalid(path, "a frame rate that fits in u32"))?;
                },
                "padding" => self.padding = f32_arg(child, &path)?,
                "acceleration" => self.acceleration = f32_arg(child, &path)?,
                "damping" => self.damping = f32_arg(child, &path)?,
                "max_speed" => self.max_speed = f32_arg(child, &path)?,
                "width" => self.width = f32_arg(child, &path)?,
                "height" => self.height = f32_arg(child, &path)?,
                _ => log::warn!("Ignoring unknown config node `{}`", path),
            }
        }
        Ok(())
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.fps == 0 {
            return Err(ConfigError::ZeroInterval("particles.fps".to_string()));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return Err(ConfigError::invalid("particles.damping", "a value in (0, 1]"));
        }
        if self.max_speed <= 0.0 {
            return Err(ConfigError::invalid("particles.max_speed", "a positive speed"));
        }
        if self.padding < 0.0 {
            return Err(ConfigError::invalid("particles.padding", "a non-negative padding"));
        }
        if self.acceleration < 0.0 {
            return Err(ConfigError::invalid(
                "particles.acceleration",
                "a non-negative acceleration",
            ));
        }
        if self.width < self.padding * 2.0 || self.height < self.padding * 2.0 {
            return Err(ConfigError::invalid(
                "particles.width/height",
                "a canvas at least twice the padding in each dimension",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub send_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            send_delay_ms: 1500,
            reset_delay_ms: 3000,
        }
    }
}

impl ContactConfig {
    pub fn send_delay(&self) -> Duration {
        Duration::from_millis(self.send_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }

    fn apply(&mut self, node: &KdlNode) -> ConfigResult<()> {
        for child in children(node) {
            let key = child.name().value();
            let path = format!("contact.{}", key);
            let slot = match key {
                "send_delay_ms" => &mut self.send_delay_ms,
                "reset_delay_ms" => &mut self.reset_delay_ms,
                _ => {
                    log::warn!("Ignoring unknown config node `{}`", path);
                    continue;
                },
            };
            *slot = u64_arg(child, &path)?;
        }
        Ok(())
    }
}

/// Effective configuration for a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    /// Seed for every random effect; `None` draws from the OS
    pub seed: Option<u64>,
    pub preloader: PreloaderConfig,
    pub typewriter: TypewriterConfig,
    pub particles: ParticleConfig,
    pub contact: ContactConfig,
}

impl Config {
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loading config from {}", path.display());
        Self::from_kdl(&text)
    }

    pub fn from_kdl(text: &str) -> ConfigResult<Self> {
        let doc: KdlDocument = text.parse()?;
        let mut config = Config::default();

        for node in doc.nodes() {
            match node.name().value() {
                "theme" => {
                    let name = string_arg(node, "theme")?;
                    config.theme = Theme::from_str(name)
                        .ok_or_else(|| ConfigError::invalid("theme", "\"dark\" or \"light\""))?;
                },
                "seed" => config.seed = Some(u64_arg(node, "seed")?),
                "preloader" => config.preloader.apply(node)?,
                "typewriter" => config.typewriter.apply(node)?,
                "particles" => config.particles.apply(node)?,
                "contact" => config.contact.apply(node)?,
                other => log::warn!("Ignoring unknown config node `{}`", other),
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let intervals = [
            ("preloader.progress_interval_ms", self.preloader.progress_interval_ms),
            ("preloader.status_interval_ms", self.preloader.status_interval_ms),
            ("preloader.glitch_interval_ms", self.preloader.glitch_interval_ms),
            ("preloader.cursor_interval_ms", self.preloader.cursor_interval_ms),
            ("typewriter.type_ms", self.typewriter.type_ms),
            ("typewriter.delete_ms", self.typewriter.delete_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::ZeroInterval(name.to_string()));
            }
        }
        self.particles.validate()
    }
}

fn children(node: &KdlNode) -> &[KdlNode] {
    node.children().map(|doc| doc.nodes()).unwrap_or(&[])
}

fn first_arg(node: &KdlNode) -> Option<&KdlValue> {
    node.entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .map(|entry| entry.value())
}

fn u64_arg(node: &KdlNode, path: &str) -> ConfigResult<u64> {
    first_arg(node)
        .and_then(|value| value.as_i64())
        .and_then(|value| u64::try_from(value).ok())
        .ok_or_else(|| ConfigError::invalid(path, "a non-negative integer"))
}

fn f32_arg(node: &KdlNode, path: &str) -> ConfigResult<f32> {
    first_arg(node)
        .and_then(|value| value.as_f64().or_else(|| value.as_i64().map(|v| v as f64)))
        .map(|value| value as f32)
        .ok_or_else(|| ConfigError::invalid(path, "a number"))
}

fn string_arg<'a>(node: &'a KdlNode, path: &str) -> ConfigResult<&'a str> {
    first_arg(node)
        .and_then(|value| value.as_string())
        .ok_or_else(|| ConfigError::invalid(path, "a string"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_page_timings() {
        let config = Config::default();
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.preloader.progress_interval(), Duration::from_millis(100));
        assert_eq!(config.preloader.status_interval(), Duration::from_millis(700));
        assert_eq!(config.preloader.glitch_interval(), Duration::from_millis(150));
        assert_eq!(config.preloader.cursor_interval(), Duration::from_millis(500));
        assert_eq!(config.preloader.completion_delay(), Duration::from_millis(500));
        assert_eq!(config.typewriter.hold_ms, 2000);
        assert_eq!(config.contact.send_delay(), Duration::from_millis(1500));
        assert_eq!(config.contact.reset_delay(), Duration::from_millis(3000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_kdl("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_overrides() {
        let config = Config::from_kdl(
            r#"
            theme "light"
            seed 7
            preloader {
                completion_delay_ms 250
            }
            particles {
                width 1024
                damping 0.95
            }
            "#,
        )
        .unwrap();

        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.preloader.completion_delay_ms, 250);
        assert_eq!(config.preloader.progress_interval_ms, 100);
        assert_eq!(config.particles.width, 1024.0);
        assert!((config.particles.damping - 0.95).abs() < f32::EPSILON);
        assert_eq!(config.particles.height, 500.0);
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let config = Config::from_kdl("analytics true\ncontact {\n    retries 3\n}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let err = Config::from_kdl("typewriter { type_ms \"fast\"; }").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
        assert!(err.to_string().contains("typewriter.type_ms"));
    }

    #[test]
    fn test_bad_theme_is_rejected() {
        let err = Config::from_kdl("theme \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_zero_interval_is_rejected() {
        let err = Config::from_kdl("preloader { cursor_interval_ms 0; }").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroInterval(_)));
    }

    #[test]
    fn test_tiny_canvas_is_rejected() {
        let err = Config::from_kdl("particles {\n    width 60\n}").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_one_line_child_block_needs_terminator() {
        let config = Config::from_kdl("contact { send_delay_ms 10; reset_delay_ms 20; }").unwrap();
        assert_eq!(config.contact.send_delay_ms, 10);
        assert_eq!(config.contact.reset_delay_ms, 20);

        let err = Config::from_kdl("contact { send_delay_ms 10 }").unwrap_err();
        assert!(matches!(err, ConfigError::Kdl(_)));
    }

    #[test]
    fn test_malformed_kdl() {
        let err = Config::from_kdl("preloader {").unwrap_err();
        assert!(matches!(err, ConfigError::Kdl(_)));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "contact {{\n    send_delay_ms 10\n}}").unwrap();

        let config = Config::from_path(file.path()).unwrap();
        assert_eq!(config.contact.send_delay_ms, 10);

        let missing = Config::from_path(Path::new("/definitely/not/here.kdl"));
        assert!(matches!(missing, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_json_dump_round_trips() {
        let config = Config {
            seed: Some(3),
            ..Config::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
