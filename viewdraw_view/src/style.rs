// Copyright 2025 the Viewdraw Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use peniko::Color;

use crate::surface::{Surface, TextAlign};

/// A partial set of surface style properties.
///
/// `None` fields are left untouched when the style is applied. The draw
/// context also uses this type to mirror what the surface currently holds,
/// where `None` means "unknown".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Fill color.
    pub fill_color: Option<Color>,
    /// Stroke color.
    pub stroke_color: Option<Color>,
    /// Stroke width in CSS pixels.
    pub line_width: Option<f64>,
    /// CSS font shorthand, e.g. `"12px monospace"`.
    pub font: Option<String>,
    /// Text alignment.
    pub text_align: Option<TextAlign>,
}

impl Style {
    /// An empty style that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets both fill and stroke color.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        self.with_fill_color(color).with_stroke_color(color)
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = Some(color);
        self
    }

    /// Sets the stroke color.
    #[must_use]
    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = Some(width);
        self
    }

    /// Sets the font.
    #[must_use]
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    /// Sets the text alignment.
    #[must_use]
    pub fn with_text_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    /// Pushes every field of `patch` that differs from `self` to `surface`,
    /// then records it in `self`.
    pub(crate) fn apply(&mut self, surface: &mut dyn Surface, patch: &Self) {
        if let Some(color) = patch.fill_color {
            self.set_fill_color(surface, color);
        }
        if let Some(color) = patch.stroke_color {
            self.set_stroke_color(surface, color);
        }
        if let Some(width) = patch.line_width {
            self.set_line_width(surface, width);
        }
        if let Some(font) = &patch.font {
            self.set_font(surface, font);
        }
        if let Some(align) = patch.text_align {
            self.set_text_align(surface, align);
        }
    }

    pub(crate) fn set_fill_color(&mut self, surface: &mut dyn Surface, color: Color) {
        if self.fill_color != Some(color) {
            surface.set_fill_color(color);
            self.fill_color = Some(color);
        }
    }

    pub(crate) fn set_stroke_color(&mut self, surface: &mut dyn Surface, color: Color) {
        if self.stroke_color != Some(color) {
            surface.set_stroke_color(color);
            self.stroke_color = Some(color);
        }
    }

    pub(crate) fn set_line_width(&mut self, surface: &mut dyn Surface, width: f64) {
        if self.line_width != Some(width) {
            surface.set_line_width(width);
            self.line_width = Some(width);
        }
    }

    pub(crate) fn set_font(&mut self, surface: &mut dyn Surface, font: &str) {
        if self.font.as_deref() != Some(font) {
            surface.set_font(font);
            self.font = Some(font.into());
        }
    }

    pub(crate) fn set_text_align(&mut self, surface: &mut dyn Surface, align: TextAlign) {
        if self.text_align != Some(align) {
            surface.set_text_align(align);
            self.text_align = Some(align);
        }
    }
}
