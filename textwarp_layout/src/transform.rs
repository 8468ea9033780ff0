// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element-level transform inputs: writing mode, rotation, skew, perspective.
//!
//! The transform list is applied in this order: skew, rotate, then the
//! self-relative translate from [`crate::resolve_anchor`]. Percent translates
//! depend on the block size, so [`TransformOp::to_affine`] needs the measured
//! box.

use kurbo::{Affine, Vec2};
use smallvec::SmallVec;

use crate::angle::{FULL_TURN, HALF_TURN, finite_or_zero, tan_deg, to_radians};
use crate::measure::MeasuredBox;
use crate::style::{Alignment, TextStyleConfig, WritingDirection};

/// The CSS `writing-mode` a direction is rendered with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WritingMode {
    /// `horizontal-tb`.
    HorizontalTb,
    /// `tb-rl`.
    TbRl,
}

impl WritingMode {
    /// The CSS value.
    pub fn as_css_str(self) -> &'static str {
        match self {
            Self::HorizontalTb => "horizontal-tb",
            Self::TbRl => "tb-rl",
        }
    }
}

/// The axis a perspective tilt turns around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TiltAxis {
    /// `rotateX`, for horizontal text.
    X,
    /// `rotateY`, for vertical text.
    Y,
}

/// A perspective projection with a fixed tilt of the inner block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Perspective {
    /// CSS `perspective` depth in pixels; smaller is stronger.
    pub depth: f64,
    /// Axis of the tilt applied to the inner block.
    pub tilt_axis: TiltAxis,
    /// Tilt angle in degrees.
    pub tilt: f64,
}

impl Perspective {
    /// Tilt applied to the inner block whenever a perspective is set.
    pub const TILT_DEGREES: f64 = 25.0;
}

/// One step of a transform list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformOp {
    /// `skewX(deg)`.
    SkewX(f64),
    /// `skewY(deg)`.
    SkewY(f64),
    /// `rotate(deg)`, clockwise on screen.
    Rotate(f64),
    /// `translate(x%, y%)` relative to the block size.
    TranslatePercent(Vec2),
}

impl TransformOp {
    /// The op as an affine map in block-local pixels.
    pub fn to_affine(self, measured: &MeasuredBox) -> Affine {
        match self {
            Self::SkewX(deg) => Affine::skew(tan_deg(deg), 0.0),
            Self::SkewY(deg) => Affine::skew(0.0, tan_deg(deg)),
            Self::Rotate(deg) => Affine::rotate(to_radians(deg)),
            Self::TranslatePercent(pct) => Affine::translate(Vec2::new(
                pct.x / 100.0 * measured.width_px(),
                pct.y / 100.0 * measured.height_px(),
            )),
        }
    }
}

/// Output of [`resolve_transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTransform {
    /// Writing mode to render with.
    pub writing_mode: WritingMode,
    /// Text alignment to render with.
    pub text_align: Alignment,
    /// Element rotation in degrees.
    pub rotation: f64,
    /// Horizontal skew in degrees, in `[0, 360]`.
    pub skew_x: f64,
    /// Vertical skew in degrees, in `[0, 360]`.
    pub skew_y: f64,
    /// Perspective projection, if any.
    pub perspective: Option<Perspective>,
}

fn clamp_skew(degrees: f64) -> f64 {
    finite_or_zero(degrees).clamp(0.0, FULL_TURN)
}

/// Resolves the element transform for a style.
///
/// Mirrored directions render their base writing mode turned a further
/// 180°; `horizontal-bt` also swaps left and right alignment so the text
/// lands on the requested side after the turn.
pub fn resolve_transform(config: &TextStyleConfig) -> TextTransform {
    let direction = config.direction;
    let writing_mode = match direction.unmirrored() {
        WritingDirection::VerticalRl | WritingDirection::VerticalLr => WritingMode::TbRl,
        WritingDirection::HorizontalTb | WritingDirection::HorizontalBt => {
            WritingMode::HorizontalTb
        }
    };
    let text_align = if direction == WritingDirection::HorizontalBt {
        config.alignment.flipped()
    } else {
        config.alignment
    };
    let mirror_turn = if direction.is_mirrored() {
        HALF_TURN
    } else {
        0.0
    };

    let perspective = finite_or_zero(config.perspective);
    let depth = 101.0 - perspective;
    let perspective = (perspective > 0.0 && depth > 0.0).then(|| Perspective {
        depth,
        tilt_axis: if direction.is_vertical() {
            TiltAxis::Y
        } else {
            TiltAxis::X
        },
        tilt: Perspective::TILT_DEGREES,
    });

    TextTransform {
        writing_mode,
        text_align,
        rotation: config.rotation_degrees() + mirror_turn,
        skew_x: clamp_skew(config.skew_x),
        skew_y: clamp_skew(config.skew_y),
        perspective,
    }
}

impl TextTransform {
    /// The skew and rotate steps, in application order.
    pub fn ops(&self) -> SmallVec<[TransformOp; 4]> {
        let mut ops = SmallVec::new();
        ops.push(TransformOp::SkewX(self.skew_x));
        ops.push(TransformOp::SkewY(self.skew_y));
        ops.push(TransformOp::Rotate(self.rotation));
        ops
    }
}
