// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use peniko::color::{parse_color, Srgb};

/// A 32-bit ARGB color.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF00_0000);

    /// Creates a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Creates an opaque color from its channels.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba(r, g, b, 0xFF)
    }

    /// Creates a color from its channels and alpha.
    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self((a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// The alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Parses a CSS color value.
    ///
    /// Everything CSS Color 4 accepts is understood (hex forms, named colors, `rgb()`, `hsl()`
    /// and friends); the result is converted to sRGB and quantized to 8 bits per channel.
    pub fn parse(value: &str) -> Option<Self> {
        let parsed = parse_color(value.trim()).ok()?;
        let rgba = parsed.to_alpha_color::<Srgb>().to_rgba8();
        Some(Self::from_rgba(rgba.r, rgba.g, rgba.b, rgba.a))
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({:#010x})", self.0)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or(ParseColorError)
    }
}

/// Error returned when a string is not a supported color syntax.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsupported color syntax")
    }
}

impl core::error::Error for ParseColorError {}
