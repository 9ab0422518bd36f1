//! Configuration (§6).
//!
//! Read-only once constructed and consulted by the arbiter at call time;
//! nothing here is mutated after `DpiConfig::from_file` or
//! `DpiConfig::default` returns. Follows the same "read-then-parse"
//! two-step construction the teacher crate uses for `.torrent` files
//! (`Torrent::from_file` -> `Torrent::from_bytes`), swapped from bencode
//! to TOML since there's no torrent metadata here, just scalar knobs.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::signatures::DEFAULT_WHITELIST_PORTS;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("entropy_threshold must be within [0, 8], got {0}")]
    InvalidEntropyThreshold(f64),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DpiConfig {
    pub entropy_threshold: f64,
    pub min_payload_size: usize,
    pub block_socks: bool,
    pub whitelist_ports: Vec<u16>,
}

impl DpiConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path_ref = path.as_ref();
        let text = fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_str(&text, path_ref.display().to_string())
    }

    fn from_str(text: &str, path: String) -> Result<Self, ConfigError> {
        let config: DpiConfig =
            toml::from_str(text).map_err(|source| ConfigError::Parse { path, source })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=8.0).contains(&self.entropy_threshold) {
            return Err(ConfigError::InvalidEntropyThreshold(self.entropy_threshold));
        }
        Ok(())
    }
}

impl Default for DpiConfig {
    fn default() -> Self {
        DpiConfig {
            entropy_threshold: 7.6,
            min_payload_size: 60,
            block_socks: false,
            whitelist_ports: DEFAULT_WHITELIST_PORTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_matches_spec_defaults() {
        let config = DpiConfig::default();
        assert_eq!(config.entropy_threshold, 7.6);
        assert_eq!(config.min_payload_size, 60);
        assert!(!config.block_socks);
        assert_eq!(config.whitelist_ports, vec![22, 53, 80, 443, 853, 5222, 5269]);
    }

    #[test]
    fn loads_partial_overrides_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entropy_threshold = 7.0\nblock_socks = true").unwrap();
        let config = DpiConfig::from_file(file.path()).unwrap();
        assert_eq!(config.entropy_threshold, 7.0);
        assert!(config.block_socks);
        // untouched fields fall back to defaults
        assert_eq!(config.min_payload_size, 60);
    }

    #[test]
    fn rejects_entropy_threshold_out_of_range() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "entropy_threshold = 9.5").unwrap();
        let err = DpiConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEntropyThreshold(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DpiConfig::from_file("/nonexistent/path/dpi.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "this is not valid = = toml").unwrap();
        let err = DpiConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
