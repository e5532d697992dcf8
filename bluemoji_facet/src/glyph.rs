// Copyright 2025 the Bluemoji Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph sizing relative to the surrounding text.
//!
//! An inline emoji draws slightly larger than the cap height of the text
//! around it and is pushed down a fixed fraction of the font size so it sits
//! on the same optical baseline. The two wire generations historically used
//! slightly different ratios; both are preserved here, expressed in
//! twentieths of the font size.

/// Font size assumed when a style does not provide one.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Multiplier applied by hosts to runs that consist only of emoji.
pub const EMOJI_ONLY_MULTIPLIER: f64 = 1.85;

/// The slice of text style the emoji mapping reads.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextStyle {
    /// Font size of the surrounding text, if the style sets one.
    pub font_size: Option<f64>,
}

impl TextStyle {
    /// Construct a style with an explicit font size.
    #[must_use]
    pub const fn with_font_size(font_size: f64) -> Self {
        Self {
            font_size: Some(font_size),
        }
    }

    /// The effective font size, falling back to [`DEFAULT_FONT_SIZE`].
    #[must_use]
    pub fn font_size(&self) -> f64 {
        self.font_size.unwrap_or(DEFAULT_FONT_SIZE)
    }
}

/// Resolved glyph geometry for one inline emoji.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlyphMetrics {
    /// Width and height of the square glyph box.
    pub edge: f64,
    /// Downward offset from the text baseline.
    pub baseline_drop: f64,
}

/// Metrics for the current format-aware path: edge 23.5/20, drop 5/20.
#[must_use]
pub fn format_metrics(style: &TextStyle) -> GlyphMetrics {
    let font_size = style.font_size();
    GlyphMetrics {
        edge: font_size * 23.5 / 20.0,
        baseline_drop: font_size * 5.0 / 20.0,
    }
}

/// Metrics for the legacy single-image path: edge 26/20, drop 6.5/20.
#[must_use]
pub fn legacy_metrics(style: &TextStyle) -> GlyphMetrics {
    let font_size = style.font_size();
    GlyphMetrics {
        edge: font_size * 26.0 / 20.0,
        baseline_drop: font_size * 6.5 / 20.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_path_ratios() {
        let m = format_metrics(&TextStyle::with_font_size(20.0));
        assert_eq!(m.edge, 23.5);
        assert_eq!(m.baseline_drop, 5.0);
    }

    #[test]
    fn legacy_path_ratios() {
        let m = legacy_metrics(&TextStyle::with_font_size(20.0));
        assert_eq!(m.edge, 26.0);
        assert_eq!(m.baseline_drop, 6.5);
    }

    #[test]
    fn missing_font_size_falls_back() {
        let style = TextStyle::default();
        assert_eq!(style.font_size(), DEFAULT_FONT_SIZE);
        let m = format_metrics(&style);
        assert_eq!(m.edge, DEFAULT_FONT_SIZE * 23.5 / 20.0);
    }

    #[test]
    fn glyph_scales_with_font_size() {
        let small = format_metrics(&TextStyle::with_font_size(14.0));
        let large = format_metrics(&TextStyle::with_font_size(28.0));
        assert_eq!(large.edge, small.edge * 2.0);
        assert_eq!(large.baseline_drop, small.baseline_drop * 2.0);
    }
}
