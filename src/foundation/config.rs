use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Dimensions;
use crate::foundation::error::{SceneError, SceneResult};

/// Numeric constants used by the geometry engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Inset applied when resolving a non-center position inside a region.
    pub position_padding: f64,
    /// Padding subtracted from every side of a group's region.
    pub group_padding: f64,
    /// Gap between consecutive group items.
    pub group_gap: f64,
    /// Fraction of the cross axis a group item may occupy.
    pub cross_axis_cap: f64,
    /// Text box height as a multiple of the font size.
    pub line_height: f64,
    /// Character-width ratio for font families missing from the registry.
    pub default_char_width_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            position_padding: 50.0,
            group_padding: 50.0,
            group_gap: 30.0,
            cross_axis_cap: 0.8,
            line_height: 1.2,
            default_char_width_ratio: 0.5,
        }
    }
}

/// Values the compiler substitutes for fields an element leaves out.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CompileDefaults {
    pub font_family: String,
    pub font_size: f64,
    pub text_color: String,
    pub shape_color: String,
    pub stroke_width: f64,
    pub arrow_head_size: f64,
    pub volume: f64,
    /// Fallback for asset ids with no declared dimensions.
    pub generic_asset_size: Dimensions,
    /// Fallback for image elements whose asset declares no dimensions.
    pub image_size: Dimensions,
    /// Intrinsic box fitted for closed shapes.
    pub shape_intrinsic_size: Dimensions,
    /// Character-width ratio used to size text items inside groups.
    pub group_text_char_width: f64,
    pub text_animation: String,
    pub image_animation: String,
}

impl Default for CompileDefaults {
    fn default() -> Self {
        Self {
            font_family: "CaveatBrush".to_string(),
            font_size: 72.0,
            text_color: "#000000".to_string(),
            shape_color: "#000000".to_string(),
            stroke_width: 3.0,
            arrow_head_size: 15.0,
            volume: 1.0,
            generic_asset_size: Dimensions::new(100.0, 100.0),
            image_size: Dimensions::new(400.0, 300.0),
            shape_intrinsic_size: Dimensions::new(100.0, 100.0),
            group_text_char_width: 0.55,
            text_animation: "draw".to_string(),
            image_animation: "fade".to_string(),
        }
    }
}

/// Complete tunable configuration for one compiler instance.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub engine: EngineConfig,
    pub defaults: CompileDefaults,
}

impl LayoutConfig {
    /// Parse a config document; absent fields keep their defaults.
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        serde_json::from_str(s).map_err(|e| SceneError::serde(format!("invalid layout config: {e}")))
    }

    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read layout config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
