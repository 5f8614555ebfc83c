use crate::foundation::core::{LayoutResult, Point, Vec2, ensure_positive_size};
use crate::foundation::error::{SceneError, SceneResult};
use crate::layout::engine::LayoutEngine;
use crate::spec::model::{ConnectionLayout, SingleLayout};

/// Resolved endpoints of a line or arrow.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ConnectionResult {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
}

impl ConnectionResult {
    pub fn from_point(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn to_point(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

/// Largest `(width, height)` with aspect ratio `aspect` that fits inside `max_w x max_h`.
///
/// Wide content is driven by width first, tall content by height first.
pub(crate) fn fit_aspect(aspect: f64, max_w: f64, max_h: f64) -> (f64, f64) {
    if aspect >= 1.0 {
        let w = max_w.min(max_h * aspect);
        (w, w / aspect)
    } else {
        let h = max_h.min(max_w / aspect);
        (h * aspect, h)
    }
}

impl LayoutEngine {
    /// Fit an element with intrinsic size `intrinsic_w x intrinsic_h` into its region.
    ///
    /// The result keeps the intrinsic aspect ratio, is anchored at its top-left corner and
    /// carries the applied `scale`.
    pub fn layout_single(
        &self,
        layout: &SingleLayout,
        intrinsic_w: f64,
        intrinsic_h: f64,
    ) -> SceneResult<LayoutResult> {
        ensure_positive_size("element", intrinsic_w, intrinsic_h)?;

        let region = self.region_bounds(layout.region.unwrap_or_default());
        let ratio = layout.size.unwrap_or_default().area_ratio();
        let max_w = region.width * ratio;
        let max_h = region.height * ratio;

        let (width, height) = fit_aspect(intrinsic_w / intrinsic_h, max_w, max_h);
        let scale = width / intrinsic_w;

        let origin = self.position_in_bounds(
            region,
            layout.position,
            width,
            height,
            self.config.position_padding,
        ) + layout.offset.unwrap_or(Vec2::ZERO);

        Ok(LayoutResult {
            x: origin.x,
            y: origin.y,
            width,
            height,
            scale: Some(scale),
        })
    }

    /// Place a text run using a fixed-advance estimate of its box.
    ///
    /// `width = chars * font_size * char_width_ratio(font_family)`,
    /// `height = font_size * line_height`. No fitting is applied and no scale is reported.
    pub fn layout_text(
        &self,
        layout: &SingleLayout,
        text: &str,
        font_size: f64,
        font_family: &str,
    ) -> SceneResult<LayoutResult> {
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(SceneError::geometry(format!(
                "font size must be finite and > 0, got {font_size}"
            )));
        }

        let (width, height) =
            self.estimate_text(text, font_size, self.fonts.width_ratio(font_family));
        let region = self.region_bounds(layout.region.unwrap_or_default());
        let origin = self.position_in_bounds(
            region,
            layout.position,
            width,
            height,
            self.config.position_padding,
        ) + layout.offset.unwrap_or(Vec2::ZERO);

        Ok(LayoutResult {
            x: origin.x,
            y: origin.y,
            width,
            height,
            scale: None,
        })
    }

    /// Estimated `(width, height)` of a single line of text.
    ///
    /// Length is measured in UTF-16 code units, so a character outside the BMP counts twice.
    pub fn estimate_text(&self, text: &str, font_size: f64, char_width_ratio: f64) -> (f64, f64) {
        let chars = text.encode_utf16().count() as f64;
        (
            chars * font_size * char_width_ratio,
            font_size * self.config.line_height,
        )
    }

    /// Resolve both endpoints of a connection independently.
    pub fn layout_connection(&self, layout: &ConnectionLayout) -> ConnectionResult {
        let from = self.anchor_point(layout.from.region, layout.from.anchor);
        let to = self.anchor_point(layout.to.region, layout.to.anchor);
        ConnectionResult {
            x: from.x,
            y: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
