use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Vec2};
use crate::foundation::error::{SceneError, SceneResult};
use crate::spec::keywords::{Align, Direction, Justify, Position, Region, SizeHint, Sizing};

/// A declarative, resolution-independent scene document.
///
/// Nothing in a spec is expressed in pixels except the output resolution and asset
/// dimensions; every placement is a semantic layout resolved by the compiler.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSpec {
    pub meta: SpecMeta,
    #[serde(default)]
    pub assets: SpecAssets,
    #[serde(default)]
    pub scenes: Vec<Scene>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecMeta {
    pub title: String,
    pub version: String,
    pub resolution: Canvas,
    pub fps: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
}

/// Asset declarations grouped by kind.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecAssets {
    #[serde(default)]
    pub svgs: Vec<SvgAssetDecl>,
    #[serde(default)]
    pub audio: Vec<AudioAssetDecl>,
    #[serde(default)]
    pub images: Vec<ImageAssetDecl>,
}

/// SVG asset; its intrinsic size is always declared.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgAssetDecl {
    pub id: String,
    pub url: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAssetDecl {
    pub id: String,
    pub url: String,
}

/// Raster image asset; dimensions are optional.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAssetDecl {
    pub id: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// One scene on the project timeline. Times are in seconds.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    pub id: String,
    pub name: String,
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioRef>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// Background track for a scene, spanning the whole scene.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioRef {
    pub asset_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<f64>,
}

/// Scene element, discriminated by its `type` field.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Svg(SvgElement),
    Text(TextElement),
    Shape(ShapeElement),
    Image(ImageElement),
    Group(GroupElement),
}

impl Element {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Svg(_) => "svg",
            Self::Text(_) => "text",
            Self::Shape(_) => "shape",
            Self::Image(_) => "image",
            Self::Group(_) => "group",
        }
    }

    /// `(startTime, duration)` relative to the owning scene.
    pub fn timing(&self) -> (f64, f64) {
        match self {
            Self::Svg(e) => (e.start_time, e.duration),
            Self::Text(e) => (e.start_time, e.duration),
            Self::Shape(e) => (e.start_time, e.duration),
            Self::Image(e) => (e.start_time, e.duration),
            Self::Group(e) => (e.start_time, e.duration),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgElement {
    pub asset_id: String,
    pub layout: SingleLayout,
    #[serde(default)]
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub text: String,
    pub layout: SingleLayout,
    #[serde(default)]
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Arrow,
    Circle,
    Rectangle,
    Ellipse,
    Polygon,
}

impl ShapeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
        }
    }

    /// Line and arrow shapes join two anchors instead of occupying a box.
    pub fn is_connector(self) -> bool {
        matches!(self, Self::Line | Self::Arrow)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeElement {
    pub shape: ShapeKind,
    pub layout: ShapeLayout,
    #[serde(default)]
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_head_size: Option<f64>,
    /// Polygon vertices as offsets from the shape's center, in unscaled units.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub points: Vec<Vec2>,
}

/// A shape is either fitted into a region or stretched between two anchors.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShapeLayout {
    Connection(ConnectionLayout),
    Single(SingleLayout),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub asset_id: String,
    pub layout: SingleLayout,
    #[serde(default)]
    pub start_time: f64,
    pub duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupElement {
    pub layout: GroupLayout,
    #[serde(default)]
    pub items: Vec<GroupItem>,
    #[serde(default)]
    pub start_time: f64,
    pub duration: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupItemKind {
    Svg,
    Text,
    Image,
}

/// Member of a flex group.
///
/// An item missing the field its kind requires (`assetId` or `text`) is skipped by the
/// compiler; the rest of the group still compiles.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupItem {
    #[serde(rename = "type")]
    pub kind: GroupItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
    /// Overrides the group's start time (relative to the scene).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// Placement of one element inside a region.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleLayout {
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeHint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Vec2>,
}

/// Flex container distributing items along one axis.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupLayout {
    pub direction: Direction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify: Option<Justify>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sizing: Option<Sizing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
}

/// One end of a connection: an anchor inside a region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    pub region: Region,
    pub anchor: Position,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionLayout {
    pub from: Endpoint,
    pub to: Endpoint,
}

impl LayoutSpec {
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        serde_json::from_str(s).map_err(|e| SceneError::serde(format!("invalid layout spec: {e}")))
    }

    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read layout spec '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_pretty(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn canvas(&self) -> SceneResult<Canvas> {
        Canvas::new(self.meta.resolution.width, self.meta.resolution.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/spec/model.rs"]
mod tests;
