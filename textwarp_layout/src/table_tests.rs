// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties that hold across the whole overflow correction table.

extern crate std;

use std::vec::Vec;

use crate::{
    Alignment, MeasuredBox, OverflowCorrection, TextStyleConfig, VerticalAlignment,
    WritingDirection, resolve_overflow,
};

const EPS: f64 = 1e-9;

fn all_configs() -> Vec<TextStyleConfig> {
    let mut configs = Vec::new();
    for v in VerticalAlignment::ALL {
        for d in WritingDirection::ALL {
            for a in Alignment::ALL {
                configs.push(TextStyleConfig::new(d, a, v).with_font_size(16.0));
            }
        }
    }
    configs
}

fn rotations() -> impl Iterator<Item = f64> {
    (0..48).map(|step| f64::from(step) * 7.5)
}

fn measured() -> MeasuredBox {
    MeasuredBox::new(140.0, 36.0).with_content_width(110.0)
}

#[test]
fn every_combination_is_covered() {
    assert_eq!(all_configs().len(), 36);
}

#[test]
fn zero_rotation_is_no_correction() {
    for config in all_configs() {
        for rotation in [0.0, -0.0, 360.0, -720.0, f64::NAN, f64::INFINITY] {
            assert_eq!(
                resolve_overflow(&config.with_rotation(rotation), &measured()),
                OverflowCorrection::ZERO,
                "{} {} {} at {rotation}",
                config.vertical_alignment,
                config.direction,
                config.alignment,
            );
        }
    }
}

#[test]
fn correction_repeats_every_full_turn() {
    for config in all_configs() {
        for rotation in rotations() {
            let once = resolve_overflow(&config.with_rotation(rotation), &measured());
            let again = resolve_overflow(&config.with_rotation(rotation + 360.0), &measured());
            let negated = resolve_overflow(&config.with_rotation(-rotation), &measured());
            assert_eq!(
                once, again,
                "{} {} {} at {rotation}",
                config.vertical_alignment, config.direction, config.alignment,
            );
            assert_eq!(once, negated);
        }
    }
}

#[test]
fn resolving_twice_is_bit_identical() {
    for config in all_configs() {
        for rotation in rotations() {
            let config = config.with_rotation(rotation);
            let first = resolve_overflow(&config, &measured());
            let second = resolve_overflow(&config, &measured());
            assert_eq!(first.margin_top.to_bits(), second.margin_top.to_bits());
            assert_eq!(first.margin_left.to_bits(), second.margin_left.to_bits());
        }
    }
}

#[test]
fn outputs_are_always_finite() {
    let boxes = [
        measured(),
        MeasuredBox::new(0.0, 0.0),
        MeasuredBox::new(f64::NAN, f64::INFINITY).with_content_width(f64::NEG_INFINITY),
    ];
    for config in all_configs() {
        for rotation in rotations().chain([1e300, -1e-300, f64::MAX]) {
            for measured in &boxes {
                let c = resolve_overflow(&config.with_rotation(rotation), measured);
                assert!(c.margin_top.is_finite() && c.margin_left.is_finite());
                assert!(c.margin_top.to_bits() != (-0.0_f64).to_bits());
                assert!(c.margin_left.to_bits() != (-0.0_f64).to_bits());
            }
        }
    }
}

#[test]
fn bottom_drops_twice_as_far_as_middle() {
    for direction in [WritingDirection::VerticalRl, WritingDirection::VerticalLr] {
        for alignment in Alignment::ALL {
            for rotation in rotations() {
                // Middle-aligned vertical-lr reads a quarter turn as no turn
                // in its first band.
                if direction == WritingDirection::VerticalLr
                    && alignment != Alignment::Right
                    && rotation == 90.0
                {
                    continue;
                }
                let config = TextStyleConfig::new(direction, alignment, VerticalAlignment::Middle)
                    .with_rotation(rotation);
                let middle = resolve_overflow(&config, &measured());
                let bottom = resolve_overflow(
                    &TextStyleConfig {
                        vertical_alignment: VerticalAlignment::Bottom,
                        ..config
                    },
                    &measured(),
                );
                assert!(
                    (bottom.margin_top - 2.0 * middle.margin_top).abs() < EPS,
                    "{direction} {alignment} at {rotation}"
                );
            }
        }
    }
}

#[test]
fn mirror_pairs_share_top_and_bottom_rows() {
    let pairs = [
        (
            WritingDirection::HorizontalTb,
            WritingDirection::HorizontalBt,
        ),
        (WritingDirection::VerticalRl, WritingDirection::VerticalLr),
    ];
    for (base, mirror) in pairs {
        for v in [VerticalAlignment::Top, VerticalAlignment::Bottom] {
            for a in Alignment::ALL {
                for rotation in rotations() {
                    let lhs = TextStyleConfig::new(base, a, v).with_rotation(rotation);
                    let rhs = TextStyleConfig::new(mirror, a, v).with_rotation(rotation);
                    assert_eq!(
                        resolve_overflow(&lhs, &measured()),
                        resolve_overflow(&rhs, &measured()),
                        "{base}/{mirror} {a} {v} at {rotation}"
                    );
                }
            }
        }
    }
}

#[test]
fn middle_horizontal_and_top_centered_vertical_never_move() {
    for rotation in rotations() {
        for d in WritingDirection::ALL {
            for a in Alignment::ALL {
                let config =
                    TextStyleConfig::new(d, a, VerticalAlignment::Middle).with_rotation(rotation);
                if !d.is_vertical() {
                    assert_eq!(
                        resolve_overflow(&config, &measured()),
                        OverflowCorrection::ZERO
                    );
                }
            }
            if d.is_vertical() {
                let config = TextStyleConfig::new(d, Alignment::Center, VerticalAlignment::Top)
                    .with_rotation(rotation);
                assert_eq!(
                    resolve_overflow(&config, &measured()),
                    OverflowCorrection::ZERO
                );
            }
        }
    }
}
