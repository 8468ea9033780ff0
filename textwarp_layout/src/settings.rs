// Copyright 2025 the textwarp Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatting-pane settings.
//!
//! The host hands over its property values as loosely typed objects. This
//! module reads the `textSettings` object into [`TextSettings`], filling in
//! defaults for missing values and clamping numbers to the ranges the
//! formatting pane allows. The `staticText` object, read into
//! [`StaticTextSettings`], decides how the label joins the value.

use alloc::string::String;

use hashbrown::HashMap;
use textwarp_text::{FontFamily, LabelPosition, TextStyle, order_spans};

use crate::angle::{FULL_TURN, finite_or_zero};
use crate::style::{
    Alignment, ParseStyleError, TextStyleConfig, VerticalAlignment, WritingDirection,
};

/// A single formatting-pane property value.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// A numeric value.
    Number(f64),
    /// A string or enumeration value.
    Text(String),
    /// A toggle.
    Bool(bool),
    /// An explicitly cleared value.
    Null,
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Property values grouped by object name.
#[derive(Clone, Debug, Default)]
pub struct ObjectBag {
    objects: HashMap<String, HashMap<String, PropertyValue>>,
}

impl ObjectBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `object.property`, replacing any previous value.
    pub fn insert(
        &mut self,
        object: &str,
        property: &str,
        value: impl Into<PropertyValue>,
    ) -> &mut Self {
        self.objects
            .entry(object.into())
            .or_default()
            .insert(property.into(), value.into());
        self
    }

    /// Looks up `object.property`.
    pub fn get(&self, object: &str, property: &str) -> Option<&PropertyValue> {
        self.objects.get(object)?.get(property)
    }

    /// The numeric value of `object.property`, if it is a number.
    pub fn number(&self, object: &str, property: &str) -> Option<f64> {
        match self.get(object, property)? {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The value of `object.property`, if it is a toggle.
    pub fn flag(&self, object: &str, property: &str) -> Option<bool> {
        match self.get(object, property)? {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The string value of `object.property`, if it is text.
    pub fn text(&self, object: &str, property: &str) -> Option<&str> {
        match self.get(object, property)? {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// The typed `textSettings` object, with defaults applied.
///
/// Enumerated values are kept as strings until [`TextSettings::style_config`]
/// so an unknown value can be reported instead of silently replaced.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSettings {
    /// Font size in pixels.
    pub font_size: f64,
    /// Font family name.
    pub font_family: String,
    /// Horizontal alignment spelling.
    pub alignment: String,
    /// Vertical alignment spelling.
    pub vertical_alignment: String,
    /// Writing direction spelling.
    pub direction: String,
    /// Extra advance per character, in `[-3, 50]`.
    pub letter_spacing: f64,
    /// Extra advance per space, in `[-3, 50]`.
    pub word_spacing: f64,
    /// First-line indent in pixels, at least `-3`.
    pub text_indent: f64,
    /// Line height multiplier, in `[0, 50]`.
    pub line_height: f64,
    /// Line indent in pixels, non-negative.
    pub line_indent: f64,
    /// Perspective strength, non-negative.
    pub perspective: f64,
    /// Rotation in degrees, in `[0, 360]`.
    pub rotation: f64,
    /// Horizontal skew in degrees, in `[0, 360]`.
    pub skew_x: f64,
    /// Vertical skew in degrees, in `[0, 360]`.
    pub skew_y: f64,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            font_size: TextStyleConfig::DEFAULT_FONT_SIZE,
            font_family: Self::DEFAULT_FONT_FAMILY.into(),
            alignment: Alignment::Left.as_str().into(),
            vertical_alignment: VerticalAlignment::Top.as_str().into(),
            direction: WritingDirection::HorizontalTb.as_str().into(),
            letter_spacing: 0.0,
            word_spacing: 0.0,
            text_indent: 0.0,
            line_height: TextStyle::DEFAULT_LINE_HEIGHT,
            line_indent: 0.0,
            perspective: 0.0,
            rotation: 0.0,
            skew_x: 0.0,
            skew_y: 0.0,
        }
    }
}

impl TextSettings {
    /// Name of the object the settings are read from.
    pub const OBJECT: &'static str = "textSettings";

    /// Font family used when none is configured.
    pub const DEFAULT_FONT_FAMILY: &'static str = "Segoe UI";

    /// Reads the `textSettings` object, applying defaults and clamps.
    pub fn from_bag(bag: &ObjectBag) -> Self {
        let defaults = Self::default();
        let number = |property: &str, default: f64| {
            bag.number(Self::OBJECT, property)
                .filter(|n| n.is_finite())
                .unwrap_or(default)
        };
        let text = |property: &str, default: String| {
            bag.text(Self::OBJECT, property).map_or(default, String::from)
        };

        let line_height = number("lineHeight", defaults.line_height);
        let line_height = if line_height == 0.0 {
            TextStyle::DEFAULT_LINE_HEIGHT
        } else {
            line_height.clamp(0.0, 50.0)
        };

        Self {
            font_size: number("fontSize", defaults.font_size),
            font_family: text("fontFamily", defaults.font_family),
            alignment: text("alignment", defaults.alignment),
            vertical_alignment: text("alignmentV", defaults.vertical_alignment),
            direction: text("direction", defaults.direction),
            letter_spacing: number("letterSpacing", 0.0).clamp(-3.0, 50.0),
            word_spacing: number("wordSpacing", 0.0).clamp(-3.0, 50.0),
            text_indent: number("textIndent", 0.0).max(-3.0),
            line_height,
            line_indent: number("lineIndent", 0.0).max(0.0),
            perspective: number("perspective", 0.0).max(0.0),
            rotation: number("textRotate", 0.0).clamp(0.0, FULL_TURN),
            skew_x: number("skewX", 0.0).clamp(0.0, FULL_TURN),
            skew_y: number("skewY", 0.0).clamp(0.0, FULL_TURN),
        }
    }

    /// Parses the enumerated values into a geometry config.
    pub fn style_config(&self) -> Result<TextStyleConfig, ParseStyleError> {
        let direction = self.direction.parse::<WritingDirection>()?;
        let alignment = self.alignment.parse::<Alignment>()?;
        let vertical_alignment = self.vertical_alignment.parse::<VerticalAlignment>()?;
        let config = TextStyleConfig::new(direction, alignment, vertical_alignment)
            .with_rotation(self.rotation)
            .with_font_size(self.font_size)
            .with_line_indent(self.line_indent)
            .with_perspective(self.perspective)
            .with_skew(self.skew_x, self.skew_y);
        Ok(config)
    }

    /// The text style used to measure spans.
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(finite_or_zero(self.font_size))
            .with_font_family(FontFamily::Named(self.font_family.as_str().into()))
            .with_letter_spacing(self.letter_spacing)
            .with_word_spacing(self.word_spacing)
            .with_text_indent(self.text_indent)
            .with_line_height(self.line_height)
    }
}

/// The typed `staticText` object: the label shown next to the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StaticTextSettings {
    /// Label text; empty hides the label.
    pub label: String,
    /// Whether label and value are joined by a colon.
    pub show_colon: bool,
    /// Side of the value the label sits on.
    pub position: LabelPosition,
}

impl StaticTextSettings {
    /// Name of the object the settings are read from.
    pub const OBJECT: &'static str = "staticText";

    /// Reads the `staticText` object.
    ///
    /// The colon is shown unless turned off. Any position other than
    /// `suffix` places the label first.
    pub fn from_bag(bag: &ObjectBag) -> Self {
        let position = match bag.text(Self::OBJECT, "textPosition") {
            Some("suffix") => LabelPosition::Suffix,
            _ => LabelPosition::Prefix,
        };
        Self {
            label: bag.text(Self::OBJECT, "postText").unwrap_or_default().into(),
            show_colon: bag.flag(Self::OBJECT, "showColon").unwrap_or(true),
            position,
        }
    }

    /// The spans of one rendered line for `value`.
    pub fn spans<'a>(&'a self, value: &'a str) -> [&'a str; 3] {
        order_spans(&self.label, value, self.show_colon, self.position)
    }
}
