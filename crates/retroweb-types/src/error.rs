//! Error types for RetroWeb.

use std::io;

/// Errors produced while configuring or driving RetroWeb.
///
/// The interaction engine itself has no fallible operations; these
/// errors come from loading configuration and input scripts, and from
/// host backends.
#[derive(Debug, thiserror::Error)]
pub enum RetrowebError {
    #[error("config error: {0}")]
    Config(String),

    #[error("script error: {0}")]
    Script(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, RetrowebError>;
