use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::Canvas;
use crate::foundation::error::{SceneError, SceneResult};
use crate::spec::model::ShapeKind;

/// Fully compiled document consumed by the animation runtime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub meta: ProjectMeta,
    pub assets: ProjectAssets,
    pub scenes: Vec<CompiledScene>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMeta {
    pub title: String,
    pub version: String,
    pub resolution: Canvas,
    pub fps: u32,
    /// End of the last scene, in seconds.
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Asset declarations grouped by kind; empty kinds are omitted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssets {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svgs: Option<Vec<ProjectAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<ProjectAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<Vec<ProjectAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProjectAsset>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Svg,
    Video,
    Audio,
    Image,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAsset {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledScene {
    pub id: String,
    pub name: String,
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    pub actions: Vec<Action>,
}

/// One resolved drawing or audio instruction.
///
/// Pixel fields are whole pixels. Svg and text actions are anchored at their top-left corner;
/// shape and image actions are anchored at their center.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    SvgAnimation(SvgAnimationAction),
    Text(TextAction),
    Shape(ShapeAction),
    Image(ImageAction),
    Audio(AudioAction),
}

impl Action {
    pub fn id(&self) -> &str {
        match self {
            Self::SvgAnimation(a) => &a.id,
            Self::Text(a) => &a.id,
            Self::Shape(a) => &a.id,
            Self::Image(a) => &a.id,
            Self::Audio(a) => &a.id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SvgAnimation(_) => "svgAnimation",
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Image(_) => "image",
            Self::Audio(_) => "audio",
        }
    }

    /// `(startTime, duration)` on the project timeline.
    pub fn timing(&self) -> (f64, f64) {
        match self {
            Self::SvgAnimation(a) => (a.start_time, a.duration),
            Self::Text(a) => (a.start_time, a.duration),
            Self::Shape(a) => (a.start_time, a.duration),
            Self::Image(a) => (a.start_time, a.duration),
            Self::Audio(a) => (a.start_time, a.duration),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgAnimationAction {
    pub id: String,
    pub asset_id: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub scale: f64,
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAction {
    pub id: String,
    pub text: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub font_size: f64,
    pub font_family: String,
    pub color: String,
    pub animation_type: String,
    pub start_time: f64,
    pub duration: f64,
}

/// Whole-pixel point, used for polygon vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i64,
    pub y: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAction {
    pub id: String,
    pub shape: ShapeKind,
    /// Center for closed shapes, start point for lines and arrows.
    pub x: i64,
    pub y: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x2: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y2: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<Vec<PixelPoint>>,
    pub color: String,
    pub fill: bool,
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_head_size: Option<f64>,
    pub start_time: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAction {
    pub id: String,
    pub asset_id: String,
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
    pub scale: f64,
    pub animation_type: String,
    pub start_time: f64,
    pub duration: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAction {
    pub id: String,
    pub asset_id: String,
    pub volume: f64,
    pub start_time: f64,
    pub duration: f64,
}

impl Project {
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        serde_json::from_str(s).map_err(|e| SceneError::serde(format!("invalid project: {e}")))
    }

    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read project '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every action across all scenes, in emission order.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.scenes.iter().flat_map(|s| s.actions.iter())
    }
}
