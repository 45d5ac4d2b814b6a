// Fri Oct 16 2026 - Alex

use crate::structure::catalog::{DEFAULT_REFERENCE_MARKER, NATIVE_WORD_SIZE};
use crate::structure::optimizer::{DEFAULT_MAX_BRUTE_FORCE_FIELDS, DEFAULT_TOP_K};
use crate::structure::SizeClass;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub word_size: usize,
    pub reference_marker: char,
    pub top_k: usize,
    pub max_brute_force_fields: usize,
    pub write_back: bool,
    pub extra_types: IndexMap<String, usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_size: NATIVE_WORD_SIZE,
            reference_marker: DEFAULT_REFERENCE_MARKER,
            top_k: DEFAULT_TOP_K,
            max_brute_force_fields: DEFAULT_MAX_BRUTE_FORCE_FIELDS,
            write_back: true,
            extra_types: IndexMap::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_word_size(mut self, word_size: usize) -> Self {
        self.word_size = word_size;
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_brute_force_fields(mut self, limit: usize) -> Self {
        self.max_brute_force_fields = limit;
        self
    }

    pub fn with_write_back(mut self, write_back: bool) -> Self {
        self.write_back = write_back;
        self
    }

    pub fn with_extra_type(mut self, name: &str, size: usize) -> Self {
        self.extra_types.insert(name.to_string(), size);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_size != 4 && self.word_size != 8 {
            return Err(ConfigError::Invalid(format!(
                "word_size must be 4 or 8, got {}",
                self.word_size
            )));
        }
        if self.top_k == 0 {
            return Err(ConfigError::Invalid("top_k must be greater than 0".to_string()));
        }
        if self.max_brute_force_fields == 0 {
            return Err(ConfigError::Invalid(
                "max_brute_force_fields must be greater than 0".to_string(),
            ));
        }
        if self.reference_marker.is_alphanumeric() || self.reference_marker.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "reference_marker '{}' must be a symbol",
                self.reference_marker
            )));
        }
        for (name, size) in &self.extra_types {
            if SizeClass::from_bytes(*size).is_none() {
                return Err(ConfigError::Invalid(format!(
                    "type {} has size {}, expected one of 1, 2, 4, 8, 16",
                    name, size
                )));
            }
        }
        Ok(())
    }
}
