//! Accent color parsing and palette derivation.
//!
//! `shade` is the single brightness rule used everywhere an accent variant
//! is needed: scale each channel by `(100 + percent) / 100`, truncate toward
//! zero, clamp to the byte range.

use std::fmt;
use std::str::FromStr;

use crate::error::PreferenceError;
use crate::settings::{SHADE_DARK_PERCENT, SHADE_LIGHT_PERCENT};

/// Compiled-in default accent color (`#ff1e56`).
pub const DEFAULT_ACCENT: HexColor = HexColor::rgb(0xff, 0x1e, 0x56);

/// A `#rrggbb` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    r: u8,
    g: u8,
    b: u8,
}

impl HexColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` value, case-insensitive.
    pub fn parse(input: &str) -> Result<Self, PreferenceError> {
        let invalid = || PreferenceError::InvalidColorFormat(input.to_string());
        let normalized = input.trim().to_ascii_lowercase();
        let Some(hex) = normalized.strip_prefix('#') else {
            return Err(invalid());
        };
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
        Ok(Self { r, g, b })
    }

    /// Channel triple, for hosts that need raw components.
    pub fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Brightness-adjust by `percent` (negative darkens, positive lightens).
    pub fn shade(self, percent: i32) -> HexColor {
        HexColor {
            r: shade_channel(self.r, percent),
            g: shade_channel(self.g, percent),
            b: shade_channel(self.b, percent),
        }
    }
}

/// Scale one channel; integer division truncates toward zero, clamping
/// happens on the result rather than on `percent`.
fn shade_channel(channel: u8, percent: i32) -> u8 {
    let scaled = i64::from(channel) * (100 + i64::from(percent)) / 100;
    scaled.clamp(0, 255) as u8
}

impl FromStr for HexColor {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Base/dark/light triad derived from one accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedPalette {
    pub base: HexColor,
    pub dark: HexColor,
    pub light: HexColor,
}

impl DerivedPalette {
    /// Recomputed on every accent change; never cached.
    pub fn from_accent(accent: HexColor) -> Self {
        Self {
            base: accent,
            dark: accent.shade(SHADE_DARK_PERCENT),
            light: accent.shade(SHADE_LIGHT_PERCENT),
        }
    }
}
