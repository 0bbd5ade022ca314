// SPDX-License-Identifier: PMPL-1.0-or-later
//! Contrastbot - WCAG color contrast checks for storefront themes
//!
//! Part of the gitbot-fleet ecosystem. Contrastbot evaluates the color
//! scheme of a storefront theme and reports which text/background
//! combinations fall short of WCAG AA (1.4.3).
//!
//! ## Modules
//!
//! - **contrast**: hex parsing, relative luminance, contrast ratio, verdicts
//! - **palette**: batch evaluation of labeled color pairs
//! - **theme**: theme loading (TOML, YAML, JSON, CSS custom properties)
//! - **fleet**: findings for the fleet coordinator
//! - **report**: text, JSON and SARIF output
//! - **scanner**: directory walking

pub mod config;
pub mod contrast;
pub mod error;
pub mod fleet;
pub mod palette;
pub mod report;
pub mod scanner;
pub mod theme;

pub use contrast::{classify, contrast_ratio, parse_color, relative_luminance, Rgb, Verdict};
pub use error::{ContrastbotError, Result};
pub use palette::{evaluate_palette, ColorPair, PaletteReport, PaletteRow};
