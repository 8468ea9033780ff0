// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotation-overflow correction.
//!
//! Rotating a block about its center moves the corner or edge it was
//! anchored by. The corrector returns a top/left margin that puts that point
//! back. It is a piecewise function of the normalized rotation `r` in
//! `[0, 360)`, selected by `(vertical alignment, direction, alignment)`.
//!
//! The selection is the [`OverflowRule`] table in [`overflow_rule`]. Each rule
//! is built from a few terms:
//!
//! - the *band margin*: `(h - h·sin(90 - r)) / 2` for `r ∈ (0, 90]`,
//!   `(h + h·sin(r - 90)) / 2` for `r ∈ (90, 270]`,
//!   `(h - h·sin(r mod 270)) / 2` for `r ∈ (270, 360)`, and `0` at `r = 0`;
//! - a *lateral* term, a sine of `r` scaled by the block height;
//! - the *drift buffer*, a linear stand-in for the sideways drift of
//!   right-aligned text: `2·r/100·s` below 180° and `2·(360 - r)/100·s`
//!   from 180° on, where `s` is the font size (or the block width for
//!   middle-aligned `vertical-rl`).
//!
//! Mirrored directions are drawn with an extra half turn, which the
//! corrector undoes before evaluating: every rule sees the rotation the user
//! asked for. Top- and bottom-aligned rules are shared across each mirror
//! pair; middle-aligned `vertical-lr` has rows of its own.

use crate::angle::{
    FULL_TURN, HALF_TURN, QUARTER_TURN, THREE_QUARTER_TURN, finite_or_zero, sin_deg,
};
use crate::log::debug;
use crate::measure::MeasuredBox;
use crate::style::{Alignment, TextStyleConfig, VerticalAlignment, WritingDirection};

/// Margins that keep a rotated block on its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverflowCorrection {
    /// Top margin in pixels.
    pub margin_top: f64,
    /// Left margin in pixels.
    pub margin_left: f64,
}

impl OverflowCorrection {
    /// No correction.
    pub const ZERO: Self = Self {
        margin_top: 0.0,
        margin_left: 0.0,
    };

    fn new(margin_top: f64, margin_left: f64) -> Self {
        Self {
            margin_top: finite_or_zero(margin_top),
            margin_left: finite_or_zero(margin_left),
        }
    }
}

/// Which width a horizontal rule leans on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Span {
    /// The measured block width.
    Box,
    /// The summed width of the rendered spans.
    Content,
}

/// What scales the drift buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BufferScale {
    /// The font size.
    FontSize,
    /// The measured block width.
    BoxWidth,
}

/// How the first band of the band margin reads its angle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BandModel {
    /// `sin(90 - r)`.
    Standard,
    /// `sin(90 - (r mod 90))`, which reads a quarter turn as no turn.
    QuarterWrapped,
}

/// The sideways term of a banded rule.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lateral {
    /// `-h·sin(r)` on one half turn, `0` on the other.
    HalfTurn {
        /// `true` for `r ∈ (180, 360)`, `false` for `r ∈ (0, 180)`.
        upper: bool,
    },
    /// `scale·h·|sin(r)|`, negated below 180°.
    Centered {
        /// Multiplier on the block height.
        scale: f64,
    },
    /// `-lead·h·sin(r mod 180)` up to 180°, `trail·h·sin(r mod 180)` beyond.
    Split {
        /// Multiplier for `r ≤ 180`.
        lead: f64,
        /// Multiplier for `r > 180`.
        trail: f64,
    },
}

/// One row of the correction table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OverflowRule {
    /// No correction.
    None,
    /// Top-aligned horizontal text: `margin_top = span/2 · sin(r mod 180)`.
    LeanTop(Span),
    /// Bottom-aligned horizontal text:
    /// `margin_top = -(span/2 · sin(r mod 180) + buffer)`.
    SinkTop(Span),
    /// Top-aligned vertical text on the leading edge:
    /// `margin_left = h/2 · sin(r mod 180)`.
    LeanLeft,
    /// Top-aligned vertical text on the trailing edge:
    /// `margin_left = -(h/2 · sin(r mod 180) + buffer)`.
    PullLeft,
    /// Middle- and bottom-aligned vertical text: `margin_top` is
    /// `-top_scale` band margins and `margin_left` is the lateral term, less
    /// the drift buffer when one is given.
    Banded {
        /// Multiplier on the negated band margin.
        top_scale: f64,
        /// First-band angle handling.
        band: BandModel,
        /// Sideways term.
        lateral: Lateral,
        /// Drift buffer subtracted from the lateral term.
        buffer: Option<BufferScale>,
    },
}

const fn banded(
    top_scale: f64,
    band: BandModel,
    lateral: Lateral,
    buffer: Option<BufferScale>,
) -> OverflowRule {
    OverflowRule::Banded {
        top_scale,
        band,
        lateral,
        buffer,
    }
}

/// Looks up the correction rule for a style.
pub fn overflow_rule(
    vertical_alignment: VerticalAlignment,
    direction: WritingDirection,
    alignment: Alignment,
) -> OverflowRule {
    use Alignment::{Center, Left, Right};
    use BandModel::{QuarterWrapped, Standard};
    use VerticalAlignment::{Bottom, Middle, Top};
    use WritingDirection::{HorizontalBt, HorizontalTb, VerticalLr, VerticalRl};

    let span = if alignment == Center {
        Span::Content
    } else {
        Span::Box
    };

    match (vertical_alignment, direction, alignment) {
        (Top, HorizontalTb | HorizontalBt, _) => OverflowRule::LeanTop(span),
        (Top, VerticalRl | VerticalLr, Left) => OverflowRule::LeanLeft,
        (Top, VerticalRl | VerticalLr, Right) => OverflowRule::PullLeft,
        (Top, VerticalRl | VerticalLr, Center) => OverflowRule::None,

        (Middle, HorizontalTb | HorizontalBt, _) => OverflowRule::None,
        (Middle, VerticalRl, Left) => banded(
            1.0,
            Standard,
            Lateral::HalfTurn { upper: true },
            Some(BufferScale::BoxWidth),
        ),
        (Middle, VerticalRl, Right) => banded(
            1.0,
            Standard,
            Lateral::HalfTurn { upper: false },
            Some(BufferScale::BoxWidth),
        ),
        (Middle, VerticalRl, Center) => {
            banded(1.0, Standard, Lateral::Centered { scale: 0.5 }, None)
        }
        (Middle, VerticalLr, Left) => {
            banded(1.0, QuarterWrapped, Lateral::HalfTurn { upper: true }, None)
        }
        (Middle, VerticalLr, Right) => banded(
            1.0,
            Standard,
            Lateral::HalfTurn { upper: false },
            Some(BufferScale::FontSize),
        ),
        (Middle, VerticalLr, Center) => {
            banded(1.0, QuarterWrapped, Lateral::Centered { scale: 0.5 }, None)
        }

        (Bottom, HorizontalTb | HorizontalBt, _) => OverflowRule::SinkTop(span),
        (Bottom, VerticalRl | VerticalLr, Left) => banded(
            2.0,
            Standard,
            Lateral::Split {
                lead: 0.5,
                trail: 1.5,
            },
            None,
        ),
        (Bottom, VerticalRl | VerticalLr, Right) => banded(
            2.0,
            Standard,
            Lateral::Split {
                lead: 1.5,
                trail: 0.5,
            },
            Some(BufferScale::FontSize),
        ),
        (Bottom, VerticalRl | VerticalLr, Center) => {
            banded(2.0, Standard, Lateral::Centered { scale: 1.0 }, None)
        }
    }
}

/// The band margin for height `h` at normalized rotation `rot`.
pub fn band_margin(h: f64, rot: f64, band: BandModel) -> f64 {
    if rot > 0.0 && rot <= QUARTER_TURN {
        let angle = match band {
            BandModel::Standard => rot,
            BandModel::QuarterWrapped => rot % QUARTER_TURN,
        };
        (h - h * sin_deg(QUARTER_TURN - angle)) / 2.0
    } else if rot > QUARTER_TURN && rot <= THREE_QUARTER_TURN {
        (h + h * sin_deg(rot - QUARTER_TURN)) / 2.0
    } else if rot > THREE_QUARTER_TURN && rot < FULL_TURN {
        (h - h * sin_deg(rot % THREE_QUARTER_TURN)) / 2.0
    } else {
        0.0
    }
}

/// The drift buffer at normalized rotation `rot` for scale `scale`.
pub fn drift_buffer(rot: f64, scale: f64) -> f64 {
    let turn = if rot < HALF_TURN {
        rot
    } else {
        FULL_TURN - rot
    };
    (turn / 100.0 * 2.0) * scale
}

fn lateral_term(lateral: Lateral, h: f64, rot: f64) -> f64 {
    match lateral {
        Lateral::HalfTurn { upper } => {
            let active = if upper {
                rot > HALF_TURN && rot < FULL_TURN
            } else {
                rot > 0.0 && rot < HALF_TURN
            };
            if active { h * -sin_deg(rot) } else { 0.0 }
        }
        Lateral::Centered { scale } => {
            let sin = sin_deg(rot);
            let magnitude = scale * h * if sin > 0.0 { sin } else { -sin };
            if rot < HALF_TURN {
                -magnitude
            } else {
                magnitude
            }
        }
        Lateral::Split { lead, trail } => {
            let sin = sin_deg(rot % HALF_TURN);
            if rot <= HALF_TURN {
                -lead * h * sin
            } else {
                trail * h * sin
            }
        }
    }
}

/// Evaluates a rule at normalized rotation `rot`.
pub fn apply_rule(
    rule: OverflowRule,
    rot: f64,
    font_size: f64,
    measured: &MeasuredBox,
) -> OverflowCorrection {
    let h = measured.height_px();
    let span_width = |span: Span| match span {
        Span::Box => measured.width_px(),
        Span::Content => measured.content_width_px(),
    };
    let buffer_for = |scale: BufferScale| match scale {
        BufferScale::FontSize => drift_buffer(rot, font_size),
        BufferScale::BoxWidth => drift_buffer(rot, measured.width_px()),
    };
    let half_turn_sin = sin_deg(rot % HALF_TURN);

    match rule {
        OverflowRule::None => OverflowCorrection::ZERO,
        OverflowRule::LeanTop(span) => {
            OverflowCorrection::new(span_width(span) / 2.0 * half_turn_sin, 0.0)
        }
        OverflowRule::SinkTop(span) => OverflowCorrection::new(
            -(span_width(span) / 2.0 * half_turn_sin + drift_buffer(rot, font_size)),
            0.0,
        ),
        OverflowRule::LeanLeft => OverflowCorrection::new(0.0, h / 2.0 * half_turn_sin),
        OverflowRule::PullLeft => OverflowCorrection::new(
            0.0,
            -(h / 2.0 * half_turn_sin + drift_buffer(rot, font_size)),
        ),
        OverflowRule::Banded {
            top_scale,
            band,
            lateral,
            buffer,
        } => {
            let margin_top = -top_scale * band_margin(h, rot, band);
            let margin_left = lateral_term(lateral, h, rot) - buffer.map_or(0.0, buffer_for);
            OverflowCorrection::new(margin_top, margin_left)
        }
    }
}

/// Computes the margins that keep a rotated block on its anchor.
///
/// Returns [`OverflowCorrection::ZERO`] when the normalized rotation is zero.
pub fn resolve_overflow(config: &TextStyleConfig, measured: &MeasuredBox) -> OverflowCorrection {
    let rot = config.rotation_degrees();
    if rot == 0.0 {
        return OverflowCorrection::ZERO;
    }
    let rule = overflow_rule(
        config.vertical_alignment,
        config.direction,
        config.alignment,
    );
    let correction = apply_rule(rule, rot, config.font_size_px(), measured);
    debug!(
        rotation = rot,
        margin_top = correction.margin_top,
        margin_left = correction.margin_left,
        "resolved overflow correction"
    );
    correction
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const EPS: f64 = 1e-9;

    fn correction(
        direction: WritingDirection,
        alignment: Alignment,
        vertical: VerticalAlignment,
        rotation: f64,
        measured: MeasuredBox,
    ) -> OverflowCorrection {
        let config = TextStyleConfig::new(direction, alignment, vertical).with_rotation(rotation);
        resolve_overflow(&config, &measured)
    }

    #[test]
    fn band_margin_is_continuous_across_bands() {
        let h = 40.0;
        for &boundary in &[90.0, 270.0] {
            let below = band_margin(h, boundary - 1e-7, BandModel::Standard);
            let above = band_margin(h, boundary + 1e-7, BandModel::Standard);
            assert!((below - above).abs() < 1e-5, "jump at {boundary}");
        }
        assert!((band_margin(h, 180.0, BandModel::Standard) - h).abs() < EPS);
        assert_eq!(band_margin(h, 0.0, BandModel::Standard), 0.0);
    }

    #[test]
    fn quarter_wrapped_band_reads_a_quarter_turn_as_none() {
        let h = 40.0;
        assert!((band_margin(h, 90.0, BandModel::Standard) - 20.0).abs() < EPS);
        assert!(band_margin(h, 90.0, BandModel::QuarterWrapped).abs() < EPS);
        let standard = band_margin(h, 45.0, BandModel::Standard);
        let wrapped = band_margin(h, 45.0, BandModel::QuarterWrapped);
        assert!((standard - wrapped).abs() < EPS);
    }

    #[test]
    fn drift_buffer_peaks_at_half_turn() {
        assert!((drift_buffer(90.0, 18.0) - 32.4).abs() < EPS);
        assert!((drift_buffer(180.0, 18.0) - 64.8).abs() < EPS);
        assert!((drift_buffer(270.0, 18.0) - 32.4).abs() < EPS);
        assert_eq!(drift_buffer(0.0, 18.0), 0.0);
    }

    #[test]
    fn middle_rl_left_at_quarter_turn() {
        let measured = MeasuredBox::new(30.0, 120.0);
        let c = correction(
            WritingDirection::VerticalRl,
            Alignment::Left,
            VerticalAlignment::Middle,
            90.0,
            measured,
        );
        // h/2, and no lateral term below 180°; only the width-scaled buffer.
        assert!((c.margin_top + 60.0).abs() < EPS);
        assert!((c.margin_left + drift_buffer(90.0, 30.0)).abs() < EPS);
    }

    #[test]
    fn middle_rl_right_combines_lateral_and_buffer() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let c = correction(
            WritingDirection::VerticalRl,
            Alignment::Right,
            VerticalAlignment::Middle,
            30.0,
            measured,
        );
        let expected_top = -(100.0 - 100.0 * sin_deg(60.0)) / 2.0;
        let expected_left = -100.0 * 0.5 - 0.6 * 30.0;
        assert!((c.margin_top - expected_top).abs() < EPS);
        assert!((c.margin_left - expected_left).abs() < 1e-6);
    }

    #[test]
    fn middle_lr_left_has_no_buffer() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let c = correction(
            WritingDirection::VerticalLr,
            Alignment::Left,
            VerticalAlignment::Middle,
            210.0,
            measured,
        );
        // -h·sin(210°) = 50.
        assert!((c.margin_left - 50.0).abs() < 1e-6);
    }

    #[test]
    fn middle_lr_right_buffers_by_font_size() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let lr = correction(
            WritingDirection::VerticalLr,
            Alignment::Right,
            VerticalAlignment::Middle,
            30.0,
            measured,
        );
        let rl = correction(
            WritingDirection::VerticalRl,
            Alignment::Right,
            VerticalAlignment::Middle,
            30.0,
            measured,
        );
        // -h·sin(30°) - (30/100·2)·18
        assert!((lr.margin_left - -60.8).abs() < 1e-6);
        // -h·sin(30°) - (30/100·2)·30
        assert!((rl.margin_left - -68.0).abs() < 1e-6);
        assert!((lr.margin_top - rl.margin_top).abs() < EPS);

        let config = TextStyleConfig::new(
            WritingDirection::VerticalLr,
            Alignment::Right,
            VerticalAlignment::Middle,
        )
        .with_rotation(30.0)
        .with_font_size(36.0);
        let larger = resolve_overflow(&config, &measured);
        assert!((larger.margin_left - -(50.0 + 21.6)).abs() < 1e-6);
    }

    #[test]
    fn middle_lr_center_uses_half_the_height() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let c = correction(
            WritingDirection::VerticalLr,
            Alignment::Center,
            VerticalAlignment::Middle,
            30.0,
            measured,
        );
        assert!((c.margin_left - -25.0).abs() < 1e-6);
        assert!((c.margin_top - -(100.0 - 100.0 * sin_deg(60.0)) / 2.0).abs() < EPS);

        let quarter = correction(
            WritingDirection::VerticalLr,
            Alignment::Center,
            VerticalAlignment::Middle,
            90.0,
            measured,
        );
        assert!((quarter.margin_left - -50.0).abs() < 1e-6);
        assert_eq!(quarter.margin_top, 0.0);

        let past_half = correction(
            WritingDirection::VerticalLr,
            Alignment::Center,
            VerticalAlignment::Middle,
            210.0,
            measured,
        );
        assert!((past_half.margin_left - 25.0).abs() < 1e-6);
    }

    #[test]
    fn bottom_center_doubles_band_and_lateral() {
        let measured = MeasuredBox::new(30.0, 100.0);
        for direction in [WritingDirection::VerticalRl, WritingDirection::VerticalLr] {
            let c = correction(
                direction,
                Alignment::Center,
                VerticalAlignment::Bottom,
                210.0,
                measured,
            );
            // h·|sin(210°)|, positive past a half turn.
            assert!((c.margin_left - 50.0).abs() < 1e-6, "{direction}");
            // -2·(h + h·sin(120°))/2
            let expected_top = -(100.0 + 100.0 * sin_deg(120.0));
            assert!((c.margin_top - expected_top).abs() < 1e-6, "{direction}");
            assert!((c.margin_top - -186.602_540_378).abs() < 1e-6, "{direction}");
        }

        let before_half = correction(
            WritingDirection::VerticalRl,
            Alignment::Center,
            VerticalAlignment::Bottom,
            30.0,
            measured,
        );
        assert!((before_half.margin_left - -50.0).abs() < 1e-6);
    }

    #[test]
    fn centered_lateral_flips_sign_at_half_turn() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let before = correction(
            WritingDirection::VerticalRl,
            Alignment::Center,
            VerticalAlignment::Middle,
            90.0,
            measured,
        );
        let after = correction(
            WritingDirection::VerticalRl,
            Alignment::Center,
            VerticalAlignment::Middle,
            270.0,
            measured,
        );
        assert!((before.margin_left + 50.0).abs() < EPS);
        assert!((after.margin_left - 50.0).abs() < EPS);
    }

    #[test]
    fn bottom_split_uses_one_and_a_half_heights_past_half_turn() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let left = correction(
            WritingDirection::VerticalRl,
            Alignment::Left,
            VerticalAlignment::Bottom,
            210.0,
            measured,
        );
        // 1.5·h·sin(30°)
        assert!((left.margin_left - 75.0).abs() < 1e-6);

        let right = correction(
            WritingDirection::VerticalRl,
            Alignment::Right,
            VerticalAlignment::Bottom,
            30.0,
            measured,
        );
        // -1.5·h·sin(30°) - buffer(30°, 18)
        assert!((right.margin_left - (-75.0 - 10.8)).abs() < 1e-6);
    }

    #[test]
    fn top_horizontal_leans_on_half_the_span() {
        let measured = MeasuredBox::new(200.0, 20.0).with_content_width(120.0);
        let left = correction(
            WritingDirection::HorizontalTb,
            Alignment::Left,
            VerticalAlignment::Top,
            30.0,
            measured,
        );
        assert!((left.margin_top - 50.0).abs() < 1e-6);
        assert_eq!(left.margin_left, 0.0);

        let center = correction(
            WritingDirection::HorizontalTb,
            Alignment::Center,
            VerticalAlignment::Top,
            30.0,
            measured,
        );
        assert!((center.margin_top - 30.0).abs() < 1e-6);
    }

    #[test]
    fn bottom_horizontal_sinks_by_span_and_buffer() {
        let measured = MeasuredBox::new(200.0, 20.0);
        let c = correction(
            WritingDirection::HorizontalBt,
            Alignment::Right,
            VerticalAlignment::Bottom,
            210.0,
            measured,
        );
        // 210 mod 180 = 30: -(100·0.5 + 2·150/100·18)
        assert!((c.margin_top - -(50.0 + 54.0)).abs() < 1e-6);
    }

    #[test]
    fn top_vertical_right_pulls_left() {
        let measured = MeasuredBox::new(30.0, 100.0);
        let c = correction(
            WritingDirection::VerticalLr,
            Alignment::Right,
            VerticalAlignment::Top,
            30.0,
            measured,
        );
        assert!((c.margin_left - -(25.0 + 10.8)).abs() < 1e-6);
        assert_eq!(c.margin_top, 0.0);

        let centered = correction(
            WritingDirection::VerticalLr,
            Alignment::Center,
            VerticalAlignment::Top,
            30.0,
            measured,
        );
        assert_eq!(centered, OverflowCorrection::ZERO);
    }

    #[test]
    fn middle_horizontal_needs_no_correction() {
        let measured = MeasuredBox::new(200.0, 20.0);
        for direction in [
            WritingDirection::HorizontalTb,
            WritingDirection::HorizontalBt,
        ] {
            for alignment in Alignment::ALL {
                let c = correction(
                    direction,
                    alignment,
                    VerticalAlignment::Middle,
                    45.0,
                    measured,
                );
                assert_eq!(c, OverflowCorrection::ZERO);
            }
        }
    }

    #[test]
    fn non_finite_inputs_never_leak() {
        let measured = MeasuredBox::new(f64::NAN, f64::INFINITY);
        for direction in WritingDirection::ALL {
            for alignment in Alignment::ALL {
                for vertical in VerticalAlignment::ALL {
                    let config = TextStyleConfig::new(direction, alignment, vertical)
                        .with_rotation(135.0)
                        .with_font_size(f64::NAN);
                    let c = resolve_overflow(&config, &measured);
                    assert!(c.margin_top.is_finite() && c.margin_left.is_finite());
                }
            }
        }
    }
}
