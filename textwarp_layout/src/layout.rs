// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of the transform, anchor and overflow resolvers.
//!
//! Rendering a text block follows a measure/arrange shape:
//! - **Measure**: render the spans unrotated and record a [`MeasuredBox`].
//! - **Arrange**: resolve a [`LayoutCorrection`] from the style and the
//!   measured box, then position and transform the block with it.

use kurbo::{Affine, Point, Size, Vec2};
use smallvec::SmallVec;

use crate::anchor::{AnchorPlacement, AnchorSide, resolve_anchor};
use crate::log::{debug, warn};
use crate::measure::MeasuredBox;
use crate::overflow::{OverflowCorrection, resolve_overflow};
use crate::settings::TextSettings;
use crate::style::TextStyleConfig;
use crate::transform::{TextTransform, TransformOp, resolve_transform};

/// Everything needed to place one rotated text block.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCorrection {
    /// Element transform inputs.
    pub transform: TextTransform,
    /// Rotation-independent placement.
    pub placement: AnchorPlacement,
    /// Margins undoing the drift caused by rotation.
    ///
    /// `None` when the rotation is zero, in which case any margins left over
    /// from an earlier render should be removed.
    pub overflow: Option<OverflowCorrection>,
}

impl LayoutCorrection {
    /// Resolves the full correction for a style and a measured block.
    pub fn resolve(config: &TextStyleConfig, measured: &MeasuredBox) -> Self {
        let overflow =
            (config.rotation_degrees() != 0.0).then(|| resolve_overflow(config, measured));
        Self {
            transform: resolve_transform(config),
            placement: resolve_anchor(config),
            overflow,
        }
    }

    /// Resolves the correction from formatting-pane settings.
    ///
    /// Returns `None` when an enumerated setting names an unknown value; the
    /// block is then rendered without any correction.
    pub fn from_settings(settings: &TextSettings, measured: &MeasuredBox) -> Option<Self> {
        match settings.style_config() {
            Ok(config) => Some(Self::resolve(&config, measured)),
            Err(_err) => {
                warn!(error = %_err, "skipping text layout correction");
                None
            }
        }
    }

    /// The overflow margins, or zero when none apply.
    pub fn margins(&self) -> OverflowCorrection {
        self.overflow.unwrap_or(OverflowCorrection::ZERO)
    }

    /// The element transform list, in CSS order.
    pub fn transform_ops(&self) -> SmallVec<[TransformOp; 4]> {
        let mut ops = self.transform.ops();
        ops.push(TransformOp::TranslatePercent(self.placement.translate));
        ops
    }

    /// The element transform as a single affine map about the block center.
    pub fn affine(&self, measured: &MeasuredBox) -> Affine {
        let center = measured.size().to_vec2() / 2.0;
        let list = self
            .transform_ops()
            .into_iter()
            .fold(Affine::IDENTITY, |acc, op| acc * op.to_affine(measured));
        Affine::translate(center) * list * Affine::translate(-center)
    }

    /// Top-left corner of the untransformed block inside a container.
    ///
    /// Combines the anchors with the overflow margins; the padding and the
    /// transform are applied on top of this by the renderer.
    pub fn origin(&self, container: Size) -> Point {
        let mut offset = Vec2::ZERO;
        for anchor in self.placement.anchors() {
            match anchor.side {
                AnchorSide::Left => offset.x = anchor.percent / 100.0 * container.width,
                AnchorSide::Top => offset.y = anchor.percent / 100.0 * container.height,
            }
        }
        let margins = self.margins();
        let origin = Point::new(
            offset.x + margins.margin_left,
            offset.y + margins.margin_top,
        );
        debug!(x = origin.x, y = origin.y, "placed text block");
        origin
    }
}
