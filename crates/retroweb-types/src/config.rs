//! Shell configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RetrowebError};

/// Tunables for the interaction engine, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// URL opened by the bookmark key ('n').
    pub bookmark_url: String,
    /// Pixels scrolled per arrow-key press.
    pub line_scroll: i32,
    /// Subtracted from the viewport height for page-up/page-down.
    pub page_scroll_margin: i32,
    /// Total address-bar buffer size, including the terminator slot.
    pub address_capacity: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            bookmark_url: "http://68k.news".to_string(),
            line_scroll: 8,
            page_scroll_margin: 24,
            address_capacity: 256,
        }
    }
}

impl ShellConfig {
    /// Parse and validate a config from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ShellConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)
            .map_err(|e| RetrowebError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Reject values the engine cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.address_capacity < 2 {
            return Err(RetrowebError::Config(format!(
                "address_capacity must be at least 2, got {}",
                self.address_capacity
            )));
        }
        if self.line_scroll <= 0 {
            return Err(RetrowebError::Config(format!(
                "line_scroll must be positive, got {}",
                self.line_scroll
            )));
        }
        Ok(())
    }

    /// Scroll distance for page-up/page-down given the viewport height.
    pub fn page_scroll(&self, window_height: i32) -> i32 {
        window_height - self.page_scroll_margin
    }
}
