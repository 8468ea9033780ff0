// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-rotation placement of a text block inside its container.
//!
//! Placement works like CSS relative positioning: the block is offset so that
//! an anchor edge sits at a percentage of the container, then translated by a
//! percentage of its own size so the matching point of the block lands on the
//! anchor. For each vertical alignment the container anchor moves to 0%, 50%
//! or 100% of the height; vertical writing directions also anchor
//! horizontally at 0%, 50% or 100% of the width.
//!
//! Mirrored directions (`horizontal-bt`, `vertical-lr`) are the half-turned
//! images of their bases, so every translation they need has the opposite sign.

use kurbo::Vec2;

use crate::style::{Alignment, TextStyleConfig, WritingDirection};

/// The container edge an anchor offset is measured from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnchorSide {
    /// Offset from the top edge.
    Top,
    /// Offset from the left edge.
    Left,
}

/// An edge offset, as a percentage of the container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Anchor {
    /// Edge the offset is measured from.
    pub side: AnchorSide,
    /// Offset in percent of the container size along that edge's axis.
    pub percent: f64,
}

impl Anchor {
    /// An anchor offset from the top edge.
    pub fn top(percent: f64) -> Self {
        Self {
            side: AnchorSide::Top,
            percent,
        }
    }

    /// An anchor offset from the left edge.
    pub fn left(percent: f64) -> Self {
        Self {
            side: AnchorSide::Left,
            percent,
        }
    }
}

/// The side that receives the line indent as padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaddingSide {
    /// `padding-top`.
    Top,
    /// `padding-bottom`.
    Bottom,
    /// `padding-left`.
    Left,
    /// `padding-right`.
    Right,
}

/// How a horizontal block fits the container width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InlineFit {
    /// Keep the measured width and the leading edge.
    #[default]
    Natural,
    /// Float to the right edge.
    FloatRight,
    /// Clear the fixed width so the content can be centered.
    ClearWidth,
}

/// Output of [`resolve_anchor`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnchorPlacement {
    /// Self-relative translation in percent of the block size.
    pub translate: Vec2,
    /// The anchor that positions the block.
    ///
    /// This is the horizontal anchor when one is needed (centered or
    /// right-aligned vertical text), otherwise the vertical one.
    pub anchor: Anchor,
    /// The vertical anchor, when `anchor` is horizontal and the block is not
    /// top-aligned.
    pub cross_anchor: Option<Anchor>,
    /// The side receiving the line indent.
    pub padding_side: PaddingSide,
    /// Padding in pixels; the magnitude of the line indent.
    pub padding: f64,
    /// Width handling for horizontal directions.
    pub inline_fit: InlineFit,
}

impl AnchorPlacement {
    /// Iterates over the anchors that must be applied.
    pub fn anchors(&self) -> impl Iterator<Item = Anchor> {
        core::iter::once(self.anchor).chain(self.cross_anchor)
    }
}

/// Translation sign for a direction: negative for the base directions,
/// positive for their mirrors.
fn mirror_sign(direction: WritingDirection) -> f64 {
    if direction.is_mirrored() { 1.0 } else { -1.0 }
}

/// The two opposing padding sides for a direction: the first when the indent
/// is non-negative, the second otherwise.
fn padding_sides(direction: WritingDirection) -> (PaddingSide, PaddingSide) {
    match direction {
        WritingDirection::HorizontalTb => (PaddingSide::Top, PaddingSide::Bottom),
        WritingDirection::HorizontalBt => (PaddingSide::Bottom, PaddingSide::Top),
        WritingDirection::VerticalRl => (PaddingSide::Right, PaddingSide::Left),
        WritingDirection::VerticalLr => (PaddingSide::Left, PaddingSide::Right),
    }
}

fn inline_fit(direction: WritingDirection, alignment: Alignment) -> InlineFit {
    if direction.is_vertical() {
        return InlineFit::Natural;
    }
    match alignment {
        Alignment::Left => InlineFit::Natural,
        Alignment::Center => InlineFit::ClearWidth,
        Alignment::Right => InlineFit::FloatRight,
    }
}

/// Resolves the rotation-independent placement of a text block.
pub fn resolve_anchor(config: &TextStyleConfig) -> AnchorPlacement {
    let direction = config.direction;
    let sign = mirror_sign(direction);
    let block = config.vertical_alignment.block_percent();

    // Horizontal text spans the container; only vertical text needs a
    // horizontal anchor.
    let inline = if direction.is_vertical() {
        config.alignment.inline_percent()
    } else {
        0.0
    };

    let (anchor, cross_anchor) = if inline > 0.0 {
        let cross = (block > 0.0).then(|| Anchor::top(block));
        (Anchor::left(inline), cross)
    } else {
        (Anchor::top(block), None)
    };

    let (lead, trail) = padding_sides(direction);
    let padding_side = if config.indent_leads() { lead } else { trail };

    AnchorPlacement {
        translate: Vec2::new(sign * inline + 0.0, sign * block + 0.0),
        anchor,
        cross_anchor,
        padding_side,
        padding: config.line_indent_magnitude(),
        inline_fit: inline_fit(direction, config.alignment),
    }
}
