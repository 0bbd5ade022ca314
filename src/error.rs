// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for contrastbot

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContrastbotError>;

#[derive(Error, Debug)]
pub enum ContrastbotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Theme error: {0}")]
    Theme(String),

    #[error("Invalid color format: {0:?} (expected #RRGGBB)")]
    InvalidColorFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
