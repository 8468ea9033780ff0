// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry for rotated, styled text blocks.
//!
//! Given a writing direction, a pair of alignments and a rotation, this crate
//! works out where a text block goes and how to keep it there once rotated:
//! - **Anchors** pin the unrotated block to an edge or the center of its
//!   container ([`resolve_anchor`]).
//! - **Transforms** carry the writing mode, skew, perspective and rotation
//!   ([`resolve_transform`]).
//! - **Overflow correction** offsets the block so rotation about its center
//!   does not pull it off its anchor ([`resolve_overflow`]).
//!
//! [`LayoutCorrection`] composes all three. Text measurement happens
//! elsewhere; the resolvers only read a [`MeasuredBox`].
//!
//! Every resolver is a pure function of its inputs. Non-finite numbers are
//! read as zero, so no output ever carries a NaN.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

mod anchor;
mod angle;
#[cfg(not(feature = "std"))]
mod float;
mod layout;
mod log;
mod measure;
mod overflow;
mod settings;
mod style;
#[cfg(test)]
mod table_tests;
mod transform;

pub use anchor::{Anchor, AnchorPlacement, AnchorSide, InlineFit, PaddingSide, resolve_anchor};
pub use angle::{finite_or_zero, normalize_degrees, to_radians};
pub use layout::LayoutCorrection;
pub use measure::MeasuredBox;
pub use overflow::{
    BandModel, BufferScale, Lateral, OverflowCorrection, OverflowRule, Span, apply_rule,
    band_margin, drift_buffer, overflow_rule, resolve_overflow,
};
pub use settings::{ObjectBag, PropertyValue, StaticTextSettings, TextSettings};
pub use style::{Alignment, ParseStyleError, TextStyleConfig, VerticalAlignment, WritingDirection};
pub use transform::{
    Perspective, TextTransform, TiltAxis, TransformOp, WritingMode, resolve_transform,
};
