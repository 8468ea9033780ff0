// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measured text block sizes.
//!
//! Measurement happens downstream (a DOM pass, a shaping engine, or
//! [`textwarp_text::measure_block`]); the resolver only consumes the result.

use kurbo::{Affine, Rect, Size};
use textwarp_text::BlockMetrics;

use crate::angle::{finite_or_zero, to_radians};

/// The rendered size of a text block before any rotation is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeasuredBox {
    /// Block width in pixels.
    pub width: f64,
    /// Block height in pixels.
    pub height: f64,
    /// Summed width of the rendered spans.
    ///
    /// Equal to `width` unless the container width was cleared, which happens
    /// for centered horizontal text.
    pub content_width: f64,
}

impl MeasuredBox {
    /// Creates a box whose content fills its width.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content_width: width,
        }
    }

    /// Sets the content width.
    pub fn with_content_width(mut self, content_width: f64) -> Self {
        self.content_width = content_width;
        self
    }

    /// Width, with non-finite values mapped to `0`.
    pub fn width_px(&self) -> f64 {
        finite_or_zero(self.width)
    }

    /// Height, with non-finite values mapped to `0`.
    pub fn height_px(&self) -> f64 {
        finite_or_zero(self.height)
    }

    /// Content width, with non-finite values mapped to `0`.
    pub fn content_width_px(&self) -> f64 {
        finite_or_zero(self.content_width)
    }

    /// The box size as a `kurbo::Size`.
    pub fn size(&self) -> Size {
        Size::new(self.width_px(), self.height_px())
    }

    /// Size of the axis-aligned bounding box of this box rotated by `degrees`.
    pub fn rotated_extent(&self, degrees: f64) -> Size {
        let rect = Rect::from_origin_size((0.0, 0.0), self.size());
        Affine::rotate(to_radians(finite_or_zero(degrees)))
            .transform_rect_bbox(rect)
            .size()
    }
}

impl From<BlockMetrics> for MeasuredBox {
    fn from(block: BlockMetrics) -> Self {
        Self::new(block.width, block.height).with_content_width(block.content_width)
    }
}

impl From<Size> for MeasuredBox {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}
