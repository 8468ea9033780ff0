// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Semantic text style inputs for the geometry resolver.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

use crate::angle::{finite_or_zero, normalize_degrees};

/// Block-flow orientation of a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingDirection {
    /// Lines run left to right, stacked top to bottom.
    #[default]
    HorizontalTb,
    /// `HorizontalTb` turned upside down.
    HorizontalBt,
    /// Lines run top to bottom, stacked right to left.
    VerticalRl,
    /// `VerticalRl` turned upside down.
    VerticalLr,
}

impl WritingDirection {
    /// All directions, in formatting-pane order.
    pub const ALL: [Self; 4] = [
        Self::HorizontalTb,
        Self::HorizontalBt,
        Self::VerticalRl,
        Self::VerticalLr,
    ];

    /// Returns `true` for the two vertical directions.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::VerticalRl | Self::VerticalLr)
    }

    /// Returns `true` for directions rendered as a half-turned copy of another.
    ///
    /// `horizontal-bt` is drawn as `horizontal-tb` rotated by 180°, and
    /// `vertical-lr` as `vertical-rl` rotated by 180°.
    pub fn is_mirrored(self) -> bool {
        matches!(self, Self::HorizontalBt | Self::VerticalLr)
    }

    /// The direction this one mirrors, or itself when it is not mirrored.
    pub fn unmirrored(self) -> Self {
        match self {
            Self::HorizontalBt => Self::HorizontalTb,
            Self::VerticalLr => Self::VerticalRl,
            other => other,
        }
    }

    /// The formatting-pane spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HorizontalTb => "horizontal-tb",
            Self::HorizontalBt => "horizontal-bt",
            Self::VerticalRl => "vertical-rl",
            Self::VerticalLr => "vertical-lr",
        }
    }
}

/// Horizontal alignment of a text block within its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Pinned to the left edge.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Pinned to the right edge.
    Right,
}

impl Alignment {
    /// All alignments.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Swaps `Left` and `Right`.
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Center => Self::Center,
            Self::Right => Self::Left,
        }
    }

    /// Distance of the alignment point from the leading edge, in percent.
    pub(crate) fn inline_percent(self) -> f64 {
        match self {
            Self::Left => 0.0,
            Self::Center => 50.0,
            Self::Right => 100.0,
        }
    }

    /// The formatting-pane spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical alignment of a text block within its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VerticalAlignment {
    /// Pinned to the top edge.
    #[default]
    Top,
    /// Centered.
    Middle,
    /// Pinned to the bottom edge.
    Bottom,
}

impl VerticalAlignment {
    /// All vertical alignments.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    /// Distance of the alignment point from the top edge, in percent.
    pub(crate) fn block_percent(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Middle => 50.0,
            Self::Bottom => 100.0,
        }
    }

    /// The formatting-pane spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

/// A formatting-pane value that names none of the known options.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseStyleError {
    /// Not one of the four writing directions.
    #[error("unknown writing direction `{0}`")]
    Direction(String),
    /// Not `left`, `center` or `right`.
    #[error("unknown alignment `{0}`")]
    Alignment(String),
    /// Not `top`, `middle` or `bottom`.
    #[error("unknown vertical alignment `{0}`")]
    VerticalAlignment(String),
}

impl FromStr for WritingDirection {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseStyleError::Direction(s.to_string()))
    }
}

impl FromStr for Alignment {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseStyleError::Alignment(s.to_string()))
    }
}

impl FromStr for VerticalAlignment {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| ParseStyleError::VerticalAlignment(s.to_string()))
    }
}

impl fmt::Display for WritingDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for VerticalAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Style inputs for one render pass.
///
/// Angles are in degrees. Numeric fields may hold anything; accessors
/// normalize them before they reach any trigonometry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyleConfig {
    /// Writing direction.
    pub direction: WritingDirection,
    /// Horizontal alignment.
    pub alignment: Alignment,
    /// Vertical alignment.
    pub vertical_alignment: VerticalAlignment,
    /// Rotation in degrees, unbounded.
    pub rotation: f64,
    /// Font size in pixels.
    pub font_size: f64,
    /// Signed line indent in pixels. The sign picks the padding side.
    pub line_indent: f64,
    /// Perspective strength; `0` disables the perspective tilt.
    pub perspective: f64,
    /// Horizontal skew in degrees.
    pub skew_x: f64,
    /// Vertical skew in degrees.
    pub skew_y: f64,
}

impl Default for TextStyleConfig {
    fn default() -> Self {
        Self {
            direction: WritingDirection::HorizontalTb,
            alignment: Alignment::Left,
            vertical_alignment: VerticalAlignment::Top,
            rotation: 0.0,
            font_size: Self::DEFAULT_FONT_SIZE,
            line_indent: 0.0,
            perspective: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl TextStyleConfig {
    /// Font size used when none is configured.
    pub const DEFAULT_FONT_SIZE: f64 = 18.0;

    /// Creates a config for the given direction and alignments, with defaults elsewhere.
    pub fn new(
        direction: WritingDirection,
        alignment: Alignment,
        vertical_alignment: VerticalAlignment,
    ) -> Self {
        Self {
            direction,
            alignment,
            vertical_alignment,
            ..Self::default()
        }
    }

    /// Sets the rotation (degrees).
    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the signed line indent.
    pub fn with_line_indent(mut self, line_indent: f64) -> Self {
        self.line_indent = line_indent;
        self
    }

    /// Sets the perspective strength.
    pub fn with_perspective(mut self, perspective: f64) -> Self {
        self.perspective = perspective;
        self
    }

    /// Sets both skew angles (degrees).
    pub fn with_skew(mut self, skew_x: f64, skew_y: f64) -> Self {
        self.skew_x = skew_x;
        self.skew_y = skew_y;
        self
    }

    /// Rotation normalized to `[0, 360)`; see [`normalize_degrees`].
    pub fn rotation_degrees(&self) -> f64 {
        normalize_degrees(self.rotation)
    }

    /// Font size with non-finite values mapped to `0`.
    pub fn font_size_px(&self) -> f64 {
        finite_or_zero(self.font_size)
    }

    /// Absolute value of the line indent.
    pub fn line_indent_magnitude(&self) -> f64 {
        let indent = finite_or_zero(self.line_indent);
        if indent < 0.0 { -indent } else { indent }
    }

    /// Whether the indent selects the first of the two opposing padding sides.
    pub(crate) fn indent_leads(&self) -> bool {
        finite_or_zero(self.line_indent) >= 0.0
    }
}
