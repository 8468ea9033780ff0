// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for text block layout.
//!
//! `textwarp` never measures rendered text itself: the geometry resolver is
//! handed the pre-rotation size of a text block by whoever renders it. This
//! crate is that measurement seam. A renderer implements [`TextMeasurer`] for
//! its shaping backend, and [`measure_block`] turns a run of spans into the
//! block size the layout crate consumes.
//!
//! Blocks are single-line: the static label, an optional separator and the
//! dynamic value are laid out along one line, horizontally or vertically.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface.
///
/// Implementations can be heuristic, backed by a shaping engine, or backed by
/// platform text measurement (e.g. an HTML canvas).
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// `text` is treated as a single line; line breaks are not interpreted.
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Extra advance added after every character, in pixels.
    pub letter_spacing: f64,
    /// Extra advance added after every space, in pixels.
    pub word_spacing: f64,
    /// Offset of the first glyph from the line start, in pixels.
    pub text_indent: f64,
    /// Unitless line height multiplier (CSS `line-height: <number>`).
    pub line_height: f64,
}

impl TextStyle {
    /// Line height used when none is configured.
    pub const DEFAULT_LINE_HEIGHT: f64 = 1.6;

    /// Creates a default `TextStyle` with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::Named(Arc::from("Segoe UI")),
            letter_spacing: 0.0,
            word_spacing: 0.0,
            text_indent: 0.0,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    /// Sets the letter spacing.
    #[must_use]
    pub fn with_letter_spacing(mut self, letter_spacing: f64) -> Self {
        self.letter_spacing = letter_spacing;
        self
    }

    /// Sets the word spacing.
    #[must_use]
    pub fn with_word_spacing(mut self, word_spacing: f64) -> Self {
        self.word_spacing = word_spacing;
        self
    }

    /// Sets the first-line indent.
    #[must_use]
    pub fn with_text_indent(mut self, text_indent: f64) -> Self {
        self.text_indent = text_indent;
        self
    }

    /// Sets the line height multiplier.
    #[must_use]
    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = font_family;
        self
    }

    /// Height of one line box: `font_size * line_height`.
    ///
    /// A non-positive multiplier falls back to [`Self::DEFAULT_LINE_HEIGHT`].
    #[must_use]
    pub fn line_box(&self) -> f64 {
        let factor = if self.line_height > 0.0 {
            self.line_height
        } else {
            Self::DEFAULT_LINE_HEIGHT
        };
        self.font_size * factor
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(18.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Segoe UI"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width along the line.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
    /// Additional line spacing beyond ascent+descent.
    pub leading: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent + leading`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent + self.leading
    }
}

/// A heuristic text measurer suitable for demos and tests.
///
/// It assumes an average glyph width of ~0.6em and a baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        let chars = text.chars().count() as f64;
        let spaces = text.chars().filter(|c| *c == ' ').count() as f64;
        let advance_width =
            (0.6 * style.font_size + style.letter_spacing) * chars + style.word_spacing * spaces;
        TextMetrics {
            advance_width: advance_width.max(0.0),
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
            leading: 0.0,
        }
    }
}

/// The axis a block's line runs along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BlockAxis {
    /// Lines run left to right; the block grows downward.
    Horizontal,
    /// Lines run top to bottom; the block grows sideways.
    Vertical,
}

/// The unrotated size of a measured text block.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlockMetrics {
    /// Block width in pixels.
    pub width: f64,
    /// Block height in pixels.
    pub height: f64,
    /// Summed advance of all spans, measured along the line.
    pub content_width: f64,
}

/// Where the static label sits relative to the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LabelPosition {
    /// `label : value`.
    #[default]
    Prefix,
    /// `value : label`.
    Suffix,
}

/// Separator placed between label and value when the colon is shown.
pub const COLON_SEPARATOR: &str = " : ";

/// Orders a static label and a dynamic value into the spans of one line.
///
/// An empty label yields the value alone. Otherwise the label and value are
/// joined by [`COLON_SEPARATOR`] or a single space, in the order given by
/// `position`. Unused slots are empty strings, which [`measure_block`] skips.
pub fn order_spans<'a>(
    label: &'a str,
    value: &'a str,
    show_colon: bool,
    position: LabelPosition,
) -> [&'a str; 3] {
    if label.is_empty() {
        return [value, "", ""];
    }
    let separator = if show_colon { COLON_SEPARATOR } else { " " };
    match position {
        LabelPosition::Prefix => [label, separator, value],
        LabelPosition::Suffix => [value, separator, label],
    }
}

/// Measures a run of spans laid out on a single line.
///
/// The text indent is added once to the summed advance; the result never goes
/// below zero. Empty spans contribute nothing. For [`BlockAxis::Vertical`] the
/// line runs down the page, so the summed advance becomes the block height and
/// one line box becomes the block width.
pub fn measure_block(
    measurer: &dyn TextMeasurer,
    spans: &[&str],
    style: &TextStyle,
    axis: BlockAxis,
) -> BlockMetrics {
    let content_width: f64 = spans
        .iter()
        .filter(|span| !span.is_empty())
        .map(|span| measurer.measure(span, style).advance_width)
        .sum();
    let content_width = (content_width + style.text_indent).max(0.0);
    let line_box = style.line_box().max(0.0);
    match axis {
        BlockAxis::Horizontal => BlockMetrics {
            width: content_width,
            height: line_box,
            content_width,
        },
        BlockAxis::Vertical => BlockMetrics {
            width: line_box,
            height: content_width,
            content_width,
        },
    }
}
