// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `textwarp_demo`.

use kurbo::{Affine, BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};

/// A vertical or horizontal run of text drawn in block-local coordinates.
#[derive(Clone, Debug)]
pub(crate) struct SvgText {
    pub(crate) pos: Point,
    pub(crate) text: String,
    pub(crate) font_size: f64,
    pub(crate) font_family: String,
    pub(crate) writing_mode: &'static str,
    pub(crate) transform: Affine,
    pub(crate) fill: Brush,
}

#[derive(Clone, Debug)]
enum SvgItem {
    Path {
        path: BezPath,
        fill: Brush,
        stroke: Brush,
        stroke_width: f64,
        dashed: bool,
    },
    Text(SvgText),
}

#[derive(Debug, Default)]
pub(crate) struct SvgScene {
    items: Vec<SvgItem>,
    view_box: Option<Rect>,
}

impl SvgScene {
    pub(crate) fn set_view_box(&mut self, view_box: Rect) {
        self.view_box = Some(view_box);
    }

    pub(crate) fn fill(&mut self, shape: &impl Shape, fill: Brush) {
        self.items.push(SvgItem::Path {
            path: shape.to_path(0.1),
            fill,
            stroke: Brush::Solid(Color::TRANSPARENT),
            stroke_width: 0.0,
            dashed: false,
        });
    }

    pub(crate) fn stroke(&mut self, shape: &impl Shape, stroke: Brush, width: f64, dashed: bool) {
        self.items.push(SvgItem::Path {
            path: shape.to_path(0.1),
            fill: Brush::Solid(Color::TRANSPARENT),
            stroke,
            stroke_width: width,
            dashed,
        });
    }

    pub(crate) fn text(&mut self, text: SvgText) {
        self.items.push(SvgItem::Text(text));
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let view_box = self
            .view_box
            .or_else(|| self.bounds())
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut out = String::new();

        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}" preserveAspectRatio="xMinYMin meet">"#,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height(),
            view_box.width(),
            view_box.height()
        ));
        out.push('\n');

        for item in &self.items {
            match item {
                SvgItem::Path {
                    path,
                    fill,
                    stroke,
                    stroke_width,
                    dashed,
                } => {
                    out.push_str(&format!(r#"<path d="{}""#, path.to_svg()));
                    write_paint_attr(&mut out, "fill", fill);
                    if *stroke_width > 0.0 {
                        write_paint_attr(&mut out, "stroke", stroke);
                        out.push_str(&format!(r#" stroke-width="{stroke_width}""#));
                        if *dashed {
                            out.push_str(r#" stroke-dasharray="3 2""#);
                        }
                    }
                    out.push_str("/>\n");
                }
                SvgItem::Text(t) => {
                    let [a, b, c, d, e, f] = t.transform.as_coeffs();
                    out.push_str(&format!(
                        r#"<text x="{}" y="{}" font-size="{}" font-family="{}" writing-mode="{}" transform="matrix({a} {b} {c} {d} {e} {f})""#,
                        t.pos.x,
                        t.pos.y,
                        t.font_size,
                        escape_xml(&t.font_family),
                        t.writing_mode,
                    ));
                    write_paint_attr(&mut out, "fill", &t.fill);
                    out.push('>');
                    out.push_str(&escape_xml(&t.text));
                    out.push_str("</text>\n");
                }
            }
        }

        out.push_str("</svg>\n");
        out
    }

    fn bounds(&self) -> Option<Rect> {
        let mut rect: Option<Rect> = None;
        for item in &self.items {
            let SvgItem::Path { path, .. } = item else {
                continue;
            };
            let b = path.bounding_box();
            rect = Some(rect.map_or(b, |r| r.union(b)));
        }

        rect.map(|r| {
            // Add a small padding margin.
            let pad = 10.0;
            Rect::new(r.x0 - pad, r.y0 - pad, r.x1 + pad, r.y1 + pad)
        })
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            if rgba.a == 0 {
                return ("none".to_string(), None);
            }
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn transparent_fill_is_none() {
        let mut scene = SvgScene::default();
        scene.stroke(
            &Rect::new(0.0, 0.0, 10.0, 10.0),
            Brush::Solid(css::BLACK),
            1.0,
            true,
        );
        let svg = scene.to_svg_string();
        assert!(svg.contains(r#"fill="none""#));
        assert!(svg.contains(r##"stroke="#000000""##));
        assert!(svg.contains("stroke-dasharray"));
    }

    #[test]
    fn text_is_escaped_and_transformed() {
        let mut scene = SvgScene::default();
        scene.text(SvgText {
            pos: Point::new(1.0, 2.0),
            text: "a<b".into(),
            font_size: 12.0,
            font_family: "Segoe UI".into(),
            writing_mode: "tb-rl",
            transform: Affine::translate((5.0, 6.0)),
            fill: Brush::Solid(css::BLACK),
        });
        let svg = scene.to_svg_string();
        assert!(svg.contains("a&lt;b"));
        assert!(svg.contains("matrix(1 0 0 1 5 6)"));
        assert!(svg.contains(r#"writing-mode="tb-rl""#));
    }
}
