//! A layout compiler for declarative animation scenes.
//!
//! A [`LayoutSpec`] describes scenes in resolution-independent terms: named canvas regions,
//! semantic positions, size hints, flex groups and anchor-to-anchor connections. The
//! [`Compiler`] resolves all of it against a fixed [`Canvas`] and emits a [`Project`]: an
//! ordered list of pixel-exact [`Action`]s per scene with absolute timing.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: JSON -> [`LayoutSpec`] (keywords parse totally; unknown keys take defaults)
//! 2. **Validate** (optional): [`LayoutSpec::validate`] checks timeline and asset references
//! 3. **Compile**: [`Compiler::compile`] walks every scene and element through the
//!    [`LayoutEngine`] and converts geometry into actions
//!
//! Compilation is synchronous, deterministic and free of IO. The only inputs besides the spec
//! are the [`FontRegistry`] (for text width estimation) and an [`AssetDimensions`] provider.
#![forbid(unsafe_code)]

mod compile;
mod fonts;
mod foundation;
mod layout;
mod spec;

pub use compile::assets::{AssetDimensions, SpecAssetDimensions};
pub use compile::compiler::Compiler;
pub use compile::project::{
    Action, AssetKind, AudioAction, CompiledScene, ImageAction, PixelPoint, Project,
    ProjectAsset, ProjectAssets, ProjectMeta, ShapeAction, SvgAnimationAction, TextAction,
};
pub use fonts::registry::{FontEntry, FontLocality, FontRegistry};
pub use foundation::config::{CompileDefaults, EngineConfig, LayoutConfig};
pub use foundation::core::{
    BoundingBox, Canvas, Dimensions, LayoutResult, Point, Rect, Vec2, round_px,
};
pub use foundation::error::{SceneError, SceneResult};
pub use layout::engine::LayoutEngine;
pub use layout::fit::ConnectionResult;
pub use layout::flex::{FlexItem, GroupLayoutResult};
pub use spec::keywords::{Align, Direction, Justify, Position, Region, SizeHint, Sizing};
pub use spec::model::{
    AudioAssetDecl, AudioRef, ConnectionLayout, Element, Endpoint, GroupElement, GroupItem,
    GroupItemKind, GroupLayout, ImageAssetDecl, ImageElement, LayoutSpec, Scene, ShapeElement,
    ShapeKind, ShapeLayout, SingleLayout, SpecAssets, SpecMeta, SvgAssetDecl, SvgElement,
    TextElement,
};
pub use spec::validate::SpecIssue;
