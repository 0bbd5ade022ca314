// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast evaluation - WCAG 1.4.3 Contrast (Minimum)
//!
//! Converts `#RRGGBB` color pairs into a WCAG relative contrast ratio
//! and classifies it against fixed thresholds:
//! - Good: 4.5:1 or better (AA for normal text)
//! - Poor: 3:1 up to 4.5:1 (marginal, passes only for large text)
//! - Bad: below 3:1
//!
//! Every function here is pure. A color that fails to parse yields `None`,
//! and `None` is carried through luminance, ratio and classification so
//! callers can tell "unknown" apart from a computed `Bad`.

use crate::error::ContrastbotError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Minimum ratio for normal-size text at WCAG AA.
pub const AA_NORMAL_TEXT: f64 = 4.5;

/// Looser threshold used to flag marginal contrast.
pub const MARGINAL_THRESHOLD: f64 = 3.0;

/// Linear-segment cutoff of the sRGB transfer function (WCAG 2.0 value).
const SRGB_LINEAR_CUTOFF: f64 = 0.03928;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ContrastbotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| ContrastbotError::InvalidColorFormat(s.to_string()))
    }
}

/// Classification of a contrast ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Meets AA for normal text
    Good,
    /// Between the marginal and AA thresholds
    Poor,
    /// Below the marginal threshold
    Bad,
}

impl Verdict {
    /// Whether the verdict falls short of AA
    pub fn needs_improvement(&self) -> bool {
        !matches!(self, Verdict::Good)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Good => write!(f, "Good"),
            Verdict::Poor => write!(f, "Poor"),
            Verdict::Bad => write!(f, "Bad"),
        }
    }
}

/// Parse a `#RRGGBB` or `RRGGBB` hex color.
///
/// Returns `None` for empty input, a body that is not exactly six
/// characters, or any non-hex character.
pub fn parse_color(input: &str) -> Option<Rgb> {
    let hex = input.strip_prefix('#').unwrap_or(input);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

fn linearize(channel: u8) -> f64 {
    let v = channel as f64 / 255.0;
    if v <= SRGB_LINEAR_CUTOFF {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Calculate relative luminance per WCAG 2.x
/// <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// Contrast ratio between two already-parsed colors, always >= 1.0
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let l1 = relative_luminance(a);
    let l2 = relative_luminance(b);
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
///
/// `None` when either color does not parse.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let a = parse_color(a)?;
    let b = parse_color(b)?;
    Some(contrast_ratio_rgb(a, b))
}

/// Classify a ratio. An absent ratio stays absent.
pub fn classify(ratio: Option<f64>) -> Option<Verdict> {
    let ratio = ratio?;
    Some(if ratio >= AA_NORMAL_TEXT {
        Verdict::Good
    } else if ratio >= MARGINAL_THRESHOLD {
        Verdict::Poor
    } else {
        Verdict::Bad
    })
}
