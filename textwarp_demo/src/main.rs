// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rotated text gallery for `textwarp_layout`.
//!
//! Writes one SVG per rotation. Each SVG is a grid with one cell per
//! direction and alignment pair: the container outline, the anchor point,
//! the rotated block and the bounding box of the rotation.
mod svg;

use kurbo::{Affine, Circle, Point, Rect, Shape, Size, Vec2};
use peniko::Brush;
use peniko::color::palette::css;
use textwarp_layout::{
    Alignment, LayoutCorrection, MeasuredBox, ObjectBag, StaticTextSettings, TextSettings,
    VerticalAlignment, WritingDirection, WritingMode,
};
use textwarp_text::{BlockAxis, HeuristicTextMeasurer, measure_block};

use crate::svg::{SvgScene, SvgText};

const CELL: Size = Size::new(220.0, 220.0);
const GUTTER: f64 = 24.0;
const ROTATIONS: [f64; 5] = [0.0, 30.0, 90.0, 135.0, 270.0];
const VALUE: &str = "1,204";

fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    for rotation in ROTATIONS {
        let scene = gallery(rotation);
        let path = format!("textwarp_demo_{rotation}.svg");
        std::fs::write(&path, scene.to_svg_string())?;
        tracing::info!(%path, "wrote gallery");
    }
    Ok(())
}

fn settings_bag(
    direction: WritingDirection,
    alignment: Alignment,
    vertical: VerticalAlignment,
    rotation: f64,
) -> ObjectBag {
    let mut bag = ObjectBag::new();
    bag.insert(TextSettings::OBJECT, "direction", direction.as_str())
        .insert(TextSettings::OBJECT, "alignment", alignment.as_str())
        .insert(TextSettings::OBJECT, "alignmentV", vertical.as_str())
        .insert(TextSettings::OBJECT, "textRotate", rotation)
        .insert(TextSettings::OBJECT, "fontSize", 16.0)
        .insert(StaticTextSettings::OBJECT, "postText", "Revenue")
        .insert(StaticTextSettings::OBJECT, "showColon", true)
        .insert(StaticTextSettings::OBJECT, "textPosition", "prefix");
    bag
}

/// Columns are directions; rows are vertical alignment then alignment.
fn gallery(rotation: f64) -> SvgScene {
    let mut scene = SvgScene::default();
    let columns = WritingDirection::ALL.len() as f64;
    let rows = (VerticalAlignment::ALL.len() * Alignment::ALL.len()) as f64;
    scene.set_view_box(Rect::new(
        0.0,
        0.0,
        columns * (CELL.width + GUTTER) + GUTTER,
        rows * (CELL.height + GUTTER) + GUTTER,
    ));

    for (col, direction) in WritingDirection::ALL.into_iter().enumerate() {
        let mut row = 0_u32;
        for vertical in VerticalAlignment::ALL {
            for alignment in Alignment::ALL {
                let cell_origin = Point::new(
                    GUTTER + col as f64 * (CELL.width + GUTTER),
                    GUTTER + f64::from(row) * (CELL.height + GUTTER),
                );
                let bag = settings_bag(direction, alignment, vertical, rotation);
                let label = StaticTextSettings::from_bag(&bag);
                draw_cell(
                    &mut scene,
                    cell_origin,
                    &TextSettings::from_bag(&bag),
                    &label.spans(VALUE),
                );
                row += 1;
            }
        }
    }
    scene
}

fn draw_cell(scene: &mut SvgScene, cell_origin: Point, settings: &TextSettings, spans: &[&str]) {
    let cell = Rect::from_origin_size(cell_origin, CELL);
    scene.stroke(&cell, Brush::Solid(css::SILVER), 1.0, false);

    let Ok(config) = settings.style_config() else {
        return;
    };
    let style = settings.text_style();
    let axis = if config.direction.is_vertical() {
        BlockAxis::Vertical
    } else {
        BlockAxis::Horizontal
    };
    let measured = MeasuredBox::from(measure_block(&HeuristicTextMeasurer, spans, &style, axis));
    let Some(layout) = LayoutCorrection::from_settings(settings, &measured) else {
        return;
    };

    let origin = cell_origin + layout.origin(CELL).to_vec2();
    let to_cell = Affine::translate(origin.to_vec2()) * layout.affine(&measured);

    let block = Rect::from_origin_size(Point::ORIGIN, measured.size());
    scene.fill(
        &(to_cell * block.to_path(0.1)),
        Brush::Solid(css::LIGHT_STEEL_BLUE),
    );
    scene.stroke(
        &(to_cell * block.to_path(0.1)),
        Brush::Solid(css::STEEL_BLUE),
        1.0,
        false,
    );

    let center = to_cell * block.center();
    let extent = measured.rotated_extent(layout.transform.rotation);
    scene.stroke(
        &Rect::from_center_size(center, extent),
        Brush::Solid(css::DARK_ORANGE),
        1.0,
        true,
    );

    let anchor = cell_origin + anchor_offset(&layout, CELL);
    scene.fill(&Circle::new(anchor, 3.0), Brush::Solid(css::CRIMSON));

    let font_size = style.font_size;
    let pos = match layout.transform.writing_mode {
        WritingMode::HorizontalTb => Point::new(0.0, style.line_box() * 0.5 + font_size * 0.3),
        WritingMode::TbRl => Point::new(measured.width_px() * 0.5, 0.0),
    };
    scene.text(SvgText {
        pos,
        text: spans.concat(),
        font_size,
        font_family: style.font_family.as_css_family().to_string(),
        writing_mode: layout.transform.writing_mode.as_css_str(),
        transform: to_cell,
        fill: Brush::Solid(css::BLACK),
    });
}

/// The anchor point inside the container, before margins.
fn anchor_offset(layout: &LayoutCorrection, container: Size) -> Vec2 {
    let without_margins = LayoutCorrection {
        overflow: None,
        ..*layout
    };
    without_margins.origin(container).to_vec2()
}
