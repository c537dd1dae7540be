//! Flat `key=value` settings files.
//!
//! The same format stores driver parameters and designer settings:
//!
//! ```text
//! ; Dayton RSS265HF-4
//! fs=22.1
//! qts=0.39
//! vas=64.4
//! ```
//!
//! Blank lines and lines starting with `;` or `#` are ignored. Keys are
//! written back in sorted order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::driver::{DriverParameters, FIELD_NAMES};

/// Errors that can occur while reading or writing settings files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write the file.
    #[error("config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be parsed as a number.
    #[error("invalid number for '{key}': {value:?}")]
    InvalidNumber { key: String, value: String },

    /// The key does not name a driver parameter.
    #[error("unknown driver parameter '{0}'")]
    UnknownKey(String),
}

/// An ordered in-memory `key=value` store backed by a text file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueFile {
    data: BTreeMap<String, String>,
}

impl KeyValueFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `path`, merging its entries into this store.
    pub fn load(&mut self, path: &Path) -> Result<(), ConfigError> {
        let text = fs::read_to_string(path)?;
        self.merge_str(&text);
        log::debug!("Loaded {} entries from {}", self.data.len(), path.display());
        Ok(())
    }

    /// Convenience constructor around [`load`](Self::load).
    pub fn open(path: &Path) -> Result<Self, ConfigError> {
        let mut file = Self::new();
        file.load(path)?;
        Ok(file)
    }

    /// Parses `key=value` lines from `text`. Later keys overwrite earlier ones.
    pub fn merge_str(&mut self, text: &str) {
        for (line_number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                log::warn!("Skipping line {} without '=': {line:?}", line_number + 1);
                continue;
            };

            self.set(key.trim(), value.trim());
        }
    }

    /// Writes every entry to `path` as `key=value` lines.
    ///
    /// On Unix the file is restricted to owner read/write.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, self.to_text())?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }

        log::debug!("Saved {} entries to {}", self.data.len(), path.display());
        Ok(())
    }

    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for (key, value) in &self.data {
            text.push_str(key);
            text.push('=');
            text.push_str(value);
            text.push('\n');
        }
        text
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    /// Parses `key` as a number. A missing key is `Ok(None)`.
    pub fn get_f64(&self, key: &str) -> Result<Option<f64>, ConfigError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidNumber {
                key: key.to_string(),
                value: value.to_string(),
            })
    }

    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, ConfigError> {
        Ok(self.get_f64(key)?.unwrap_or(default))
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads the eleven driver keys. Missing keys stay at zero.
    pub fn load_driver_parameters(&self) -> Result<DriverParameters, ConfigError> {
        let mut params = DriverParameters::default();
        for key in FIELD_NAMES {
            if let Some(value) = self.get_f64(key)? {
                params.set(key, value)?;
            }
        }
        Ok(params)
    }

    /// Writes all eleven driver keys.
    pub fn store_driver_parameters(&mut self, params: &DriverParameters) {
        for key in FIELD_NAMES {
            if let Some(value) = params.get(key) {
                self.set(key, value.to_string());
            }
        }
    }
}
