use crate::foundation::core::{BoundingBox, Canvas, Point};
use crate::layout::engine::LayoutEngine;
use crate::spec::keywords::{Position, Region};

/// Resolve a region keyword to its box on `canvas`.
pub(crate) fn region_bounds(canvas: Canvas, region: Region) -> BoundingBox {
    let w = canvas.width_f64();
    let h = canvas.height_f64();
    let third_w = w / 3.0;
    let third_h = h / 3.0;
    match region {
        Region::Full => BoundingBox::new(0.0, 0.0, w, h),
        Region::TopHalf => BoundingBox::new(0.0, 0.0, w, h / 2.0),
        Region::BottomHalf => BoundingBox::new(0.0, h / 2.0, w, h / 2.0),
        Region::LeftHalf => BoundingBox::new(0.0, 0.0, w / 2.0, h),
        Region::RightHalf => BoundingBox::new(w / 2.0, 0.0, w / 2.0, h),
        Region::LeftThird => BoundingBox::new(0.0, 0.0, third_w, h),
        Region::CenterThird => BoundingBox::new(third_w, 0.0, third_w, h),
        Region::RightThird => BoundingBox::new(w - third_w, 0.0, third_w, h),
        Region::TopThird => BoundingBox::new(0.0, 0.0, w, third_h),
        Region::MiddleThird => BoundingBox::new(0.0, third_h, w, third_h),
        Region::BottomThird => BoundingBox::new(0.0, h - third_h, w, third_h),
        Region::Center => BoundingBox::new(0.15 * w, 0.15 * h, 0.7 * w, 0.7 * h),
        Region::MainContent => BoundingBox::new(0.1 * w, 0.15 * h, 0.8 * w, 0.7 * h),
        Region::TopBanner => BoundingBox::new(0.0, 0.0, w, 0.15 * h),
        Region::BottomBanner => BoundingBox::new(0.0, 0.85 * h, w, 0.15 * h),
    }
}

/// Top-left corner for an element of `elem_w x elem_h` anchored at `position` inside `bounds`.
///
/// `padding` insets every edge-relative anchor; centered axes ignore it.
pub(crate) fn position_in_bounds(
    bounds: BoundingBox,
    position: Position,
    elem_w: f64,
    elem_h: f64,
    padding: f64,
) -> Point {
    let center_x = bounds.x + (bounds.width - elem_w) / 2.0;
    let center_y = bounds.y + (bounds.height - elem_h) / 2.0;
    let left = bounds.x + padding;
    let right = bounds.x + bounds.width - elem_w - padding;
    let top = bounds.y + padding;
    let bottom = bounds.y + bounds.height - elem_h - padding;

    let (x, y) = match position {
        Position::Center => (center_x, center_y),
        Position::Top => (center_x, top),
        Position::Bottom => (center_x, bottom),
        Position::Left => (left, center_y),
        Position::Right => (right, center_y),
        Position::TopLeft => (left, top),
        Position::TopRight => (right, top),
        Position::BottomLeft => (left, bottom),
        Position::BottomRight => (right, bottom),
    };
    Point::new(x, y)
}

impl LayoutEngine {
    pub fn region_bounds(&self, region: Region) -> BoundingBox {
        region_bounds(self.canvas, region)
    }

    pub fn position_in_bounds(
        &self,
        bounds: BoundingBox,
        position: Position,
        elem_w: f64,
        elem_h: f64,
        padding: f64,
    ) -> Point {
        position_in_bounds(bounds, position, elem_w, elem_h, padding)
    }

    /// Exact anchor point of a region: zero element size, zero padding.
    pub fn anchor_point(&self, region: Region, anchor: Position) -> Point {
        position_in_bounds(self.region_bounds(region), anchor, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/region.rs"]
mod tests;
