//! Configuration errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse KDL config: {0}")]
    Kdl(#[from] kdl::KdlError),

    #[error("invalid value for `{node}`: expected {expected}")]
    InvalidValue {
        node: String,
        expected: &'static str,
    },

    #[error("`{0}` must be greater than zero")]
    ZeroInterval(String),
}

impl ConfigError {
    pub fn invalid(node: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidValue {
            node: node.into(),
            expected,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
