use std::collections::BTreeMap;

use crate::foundation::core::{LayoutResult, ensure_positive_size};
use crate::foundation::error::{SceneError, SceneResult};
use crate::layout::engine::LayoutEngine;
use crate::spec::keywords::{Align, Direction, Justify, Sizing};
use crate::spec::model::GroupLayout;

/// An item handed to [`LayoutEngine::layout_group`].
#[derive(Clone, Debug, PartialEq)]
pub struct FlexItem {
    pub id: String,
    pub intrinsic_width: f64,
    pub intrinsic_height: f64,
    /// `intrinsic_width / intrinsic_height`.
    pub aspect_ratio: f64,
}

impl FlexItem {
    pub fn new(
        id: impl Into<String>,
        intrinsic_width: f64,
        intrinsic_height: f64,
    ) -> SceneResult<Self> {
        let id = id.into();
        ensure_positive_size(&format!("flex item '{id}'"), intrinsic_width, intrinsic_height)?;
        Ok(Self {
            id,
            intrinsic_width,
            intrinsic_height,
            aspect_ratio: intrinsic_width / intrinsic_height,
        })
    }
}

/// Placement of every group item, keyed by [`FlexItem::id`].
pub type GroupLayoutResult = BTreeMap<String, LayoutResult>;

fn split(direction: Direction, width: f64, height: f64) -> (f64, f64) {
    match direction {
        Direction::Row => (width, height),
        Direction::Column => (height, width),
    }
}

fn join(direction: Direction, main: f64, cross: f64) -> (f64, f64) {
    // split is its own inverse
    split(direction, main, cross)
}

/// Cross-axis extent per unit of main-axis extent for content of aspect ratio `aspect`.
fn cross_per_main(direction: Direction, aspect: f64) -> f64 {
    match direction {
        Direction::Row => 1.0 / aspect,
        Direction::Column => aspect,
    }
}

/// Fit `share` on the main axis, shrinking both axes if the cross extent exceeds `cross_cap`.
fn fit_share(direction: Direction, aspect: f64, share: f64, cross_cap: f64) -> (f64, f64) {
    let ratio = cross_per_main(direction, aspect);
    let mut main = share;
    let mut cross = share * ratio;
    if cross > cross_cap {
        cross = cross_cap;
        main = cross_cap / ratio;
    }
    join(direction, main, cross)
}

fn size_items(
    sizing: Sizing,
    direction: Direction,
    items: &[FlexItem],
    main: f64,
    cross_cap: f64,
    gap: f64,
) -> Vec<(f64, f64)> {
    let n = items.len() as f64;
    let available = main - (n - 1.0) * gap;
    match sizing {
        Sizing::Uniform => {
            let avg_aspect = items.iter().map(|i| i.aspect_ratio).sum::<f64>() / n;
            let shared = fit_share(direction, avg_aspect, available / n, cross_cap);
            vec![shared; items.len()]
        }
        Sizing::Intrinsic => {
            let sum_main = items
                .iter()
                .map(|i| split(direction, i.intrinsic_width, i.intrinsic_height).0)
                .sum::<f64>();
            let max_cross = items
                .iter()
                .map(|i| split(direction, i.intrinsic_width, i.intrinsic_height).1)
                .fold(0.0, f64::max);
            let factor = (available / sum_main).min(cross_cap / max_cross);
            items
                .iter()
                .map(|i| (i.intrinsic_width * factor, i.intrinsic_height * factor))
                .collect()
        }
        Sizing::Fill => items
            .iter()
            .map(|i| fit_share(direction, i.aspect_ratio, available / n, cross_cap))
            .collect(),
    }
}

/// `(leading offset, gap between consecutive items)` along the main axis.
fn justify_offsets(justify: Justify, main: f64, total: f64, gap: f64, n: f64) -> (f64, f64) {
    let free = main - total;
    match justify {
        Justify::Start => (0.0, gap),
        Justify::End => (free - (n - 1.0) * gap, gap),
        Justify::Center => ((free - (n - 1.0) * gap) / 2.0, gap),
        Justify::SpaceBetween => {
            if n > 1.0 {
                (0.0, free / (n - 1.0))
            } else {
                (0.0, 0.0)
            }
        }
        Justify::SpaceAround => {
            let g = free / n;
            (g / 2.0, g)
        }
        Justify::SpaceEvenly => {
            let g = free / (n + 1.0);
            (g, g)
        }
    }
}

fn align_offset(align: Align, cross: f64, item_cross: f64) -> f64 {
    match align {
        Align::Start => 0.0,
        Align::End => cross - item_cross,
        Align::Center | Align::Stretch => (cross - item_cross) / 2.0,
    }
}

impl LayoutEngine {
    /// Distribute `items` along the group's main axis inside its padded region.
    ///
    /// Every result is anchored at its top-left corner and carries the scale relative to the
    /// item's own intrinsic width. Items sharing an id collapse to the last one placed.
    pub fn layout_group(
        &self,
        layout: &GroupLayout,
        items: &[FlexItem],
    ) -> SceneResult<GroupLayoutResult> {
        let mut out = GroupLayoutResult::new();
        if items.is_empty() {
            return Ok(out);
        }

        let direction = layout.direction;
        let gap = layout.gap.unwrap_or(self.config.group_gap);
        let padding = layout.padding.unwrap_or(self.config.group_padding);
        let content = self
            .region_bounds(layout.region.unwrap_or_default())
            .inset(padding);
        let (main, cross) = split(direction, content.width, content.height);
        let cross_cap = cross * self.config.cross_axis_cap;

        let sizes = size_items(
            layout.sizing.unwrap_or_default(),
            direction,
            items,
            main,
            cross_cap,
            gap,
        );
        for (item, &(w, h)) in items.iter().zip(&sizes) {
            if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
                return Err(SceneError::geometry(format!(
                    "group item '{}' collapsed to {w}x{h}; content area {}x{} is too small for {} items",
                    item.id,
                    content.width,
                    content.height,
                    items.len()
                )));
            }
        }

        let total_main = sizes
            .iter()
            .map(|&(w, h)| split(direction, w, h).0)
            .sum::<f64>();
        let (mut cursor, step_gap) = justify_offsets(
            layout.justify.unwrap_or_default(),
            main,
            total_main,
            gap,
            items.len() as f64,
        );
        let align = layout.align.unwrap_or_default();

        for (item, &(w, h)) in items.iter().zip(&sizes) {
            let (item_main, item_cross) = split(direction, w, h);
            let (dx, dy) = join(direction, cursor, align_offset(align, cross, item_cross));
            out.insert(
                item.id.clone(),
                LayoutResult {
                    x: content.x + dx,
                    y: content.y + dy,
                    width: w,
                    height: h,
                    scale: Some(w / item.intrinsic_width),
                },
            );
            cursor += item_main + step_gap;
        }

        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flex.rs"]
mod tests;
