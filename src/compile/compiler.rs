use crate::compile::assets::{AssetDimensions, SpecAssetDimensions};
use crate::compile::project::{
    Action, AudioAction, CompiledScene, ImageAction, PixelPoint, Project, ProjectAssets,
    ProjectMeta, ShapeAction, SvgAnimationAction, TextAction,
};
use crate::fonts::registry::FontRegistry;
use crate::foundation::config::{CompileDefaults, LayoutConfig};
use crate::foundation::core::{Canvas, LayoutResult, round_px};
use crate::foundation::error::{SceneError, SceneResult};
use crate::layout::engine::LayoutEngine;
use crate::layout::flex::FlexItem;
use crate::spec::model::{
    Element, GroupElement, GroupItem, GroupItemKind, ImageElement, LayoutSpec, Scene, ShapeElement,
    ShapeKind, ShapeLayout, SvgElement, TextElement,
};

/// Translates a [`LayoutSpec`] into a pixel-exact [`Project`].
///
/// A compiler holds no per-compilation state: action ids come from a counter that lives only
/// for one [`Compiler::compile`] call, so one instance may serve concurrent compilations.
#[derive(Clone, Debug)]
pub struct Compiler {
    engine: LayoutEngine,
    defaults: CompileDefaults,
}

/// Sequential action ids, restarted for every compilation.
#[derive(Debug, Default)]
struct IdGen {
    last: u64,
}

impl IdGen {
    fn next(&mut self, kind: &str) -> String {
        self.last += 1;
        format!("{kind}_{}", self.last)
    }
}

impl Compiler {
    /// Compiler over `canvas` with the built-in fonts and default configuration.
    pub fn new(canvas: Canvas) -> Self {
        Self::with_config(canvas, FontRegistry::builtin(), LayoutConfig::default())
    }

    pub fn with_config(canvas: Canvas, fonts: FontRegistry, config: LayoutConfig) -> Self {
        Self {
            engine: LayoutEngine::with_parts(canvas, fonts, config.engine),
            defaults: config.defaults,
        }
    }

    /// Compiler sized to the spec's own output resolution.
    pub fn for_spec(spec: &LayoutSpec) -> SceneResult<Self> {
        Ok(Self::new(spec.canvas()?))
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn defaults(&self) -> &CompileDefaults {
        &self.defaults
    }

    /// Compile using the asset sizes declared in the spec itself.
    pub fn compile(&self, spec: &LayoutSpec) -> SceneResult<Project> {
        let dims = SpecAssetDimensions::from_spec(&spec.assets);
        self.compile_with_assets(spec, &dims)
    }

    /// Compile with an external provider of intrinsic asset sizes.
    #[tracing::instrument(
        skip(self, spec, dims),
        fields(title = %spec.meta.title, scenes = spec.scenes.len())
    )]
    pub fn compile_with_assets(
        &self,
        spec: &LayoutSpec,
        dims: &dyn AssetDimensions,
    ) -> SceneResult<Project> {
        let mut ids = IdGen::default();

        let duration = spec
            .scenes
            .iter()
            .map(|s| s.start_time + s.duration)
            .fold(0.0, f64::max);

        let mut scenes = Vec::with_capacity(spec.scenes.len());
        for scene in &spec.scenes {
            let mut cx = SceneCompiler {
                compiler: self,
                dims,
                ids: &mut ids,
                scene,
                actions: Vec::with_capacity(scene.elements.len() + 1),
            };
            cx.compile_scene()?;
            let actions = cx.actions;
            scenes.push(CompiledScene {
                id: scene.id.clone(),
                name: scene.name.clone(),
                start_time: scene.start_time,
                duration: scene.duration,
                background: scene.background.clone(),
                actions,
            });
        }

        tracing::debug!(actions = ids.last, duration, "compiled project");

        Ok(Project {
            meta: ProjectMeta {
                title: spec.meta.title.clone(),
                version: spec.meta.version.clone(),
                resolution: spec.meta.resolution,
                fps: spec.meta.fps,
                duration,
                background_color: spec.meta.background_color.clone(),
            },
            assets: ProjectAssets::from_spec(&spec.assets),
            scenes,
        })
    }
}

/// Per-scene compilation state.
struct SceneCompiler<'a> {
    compiler: &'a Compiler,
    dims: &'a dyn AssetDimensions,
    ids: &'a mut IdGen,
    scene: &'a Scene,
    actions: Vec<Action>,
}

/// Timing of one emitted action, already absolute.
#[derive(Clone, Copy)]
struct Timing {
    start: f64,
    duration: f64,
}

impl SceneCompiler<'_> {
    fn engine(&self) -> &LayoutEngine {
        &self.compiler.engine
    }

    fn defaults(&self) -> &CompileDefaults {
        &self.compiler.defaults
    }

    fn timing(&self, start: f64, duration: f64) -> Timing {
        Timing {
            start: self.scene.start_time + start,
            duration,
        }
    }

    fn compile_scene(&mut self) -> SceneResult<()> {
        let scene = self.scene;
        tracing::debug!(
            scene = %scene.id,
            elements = scene.elements.len(),
            "compiling scene"
        );

        if let Some(audio) = &scene.audio {
            let id = self.ids.next("audio");
            self.actions.push(Action::Audio(AudioAction {
                id,
                asset_id: audio.asset_id.clone(),
                volume: audio.volume.unwrap_or(self.defaults().volume),
                start_time: scene.start_time,
                duration: scene.duration,
            }));
        }

        for (index, element) in scene.elements.iter().enumerate() {
            tracing::trace!(scene = %scene.id, index, kind = element.kind(), "dispatch element");
            match element {
                Element::Svg(e) => self.svg(e)?,
                Element::Text(e) => self.text(e)?,
                Element::Shape(e) => self.shape(e)?,
                Element::Image(e) => self.image(e)?,
                Element::Group(e) => self.group(index, e)?,
            }
        }
        Ok(())
    }

    fn svg(&mut self, el: &SvgElement) -> SceneResult<()> {
        let size = self
            .dims
            .dimensions_or(&el.asset_id, self.defaults().generic_asset_size);
        let r = self.engine().layout_single(&el.layout, size.width, size.height)?;
        let timing = self.timing(el.start_time, el.duration);
        self.push_svg(&el.asset_id, &r, timing, el.animation_type.clone());
        Ok(())
    }

    fn text(&mut self, el: &TextElement) -> SceneResult<()> {
        let font_size = el.font_size.unwrap_or(self.defaults().font_size);
        let font_family = el
            .font_family
            .clone()
            .unwrap_or_else(|| self.defaults().font_family.clone());
        let r = self
            .engine()
            .layout_text(&el.layout, &el.text, font_size, &font_family)?;
        let timing = self.timing(el.start_time, el.duration);
        let parts = TextParts {
            text: &el.text,
            font_size,
            font_family,
            color: el.color.as_deref(),
            animation_type: el.animation_type.as_deref(),
        };
        self.push_text(parts, &r, timing);
        Ok(())
    }

    fn shape(&mut self, el: &ShapeElement) -> SceneResult<()> {
        let color = el
            .color
            .clone()
            .unwrap_or_else(|| self.defaults().shape_color.clone());
        let stroke_width = el.stroke_width.unwrap_or(self.defaults().stroke_width);
        let timing = self.timing(el.start_time, el.duration);

        let mut action = ShapeAction {
            id: String::new(),
            shape: el.shape,
            x: 0,
            y: 0,
            x2: None,
            y2: None,
            width: None,
            height: None,
            radius: None,
            points: None,
            color,
            fill: el.fill.unwrap_or(false),
            stroke_width,
            arrow_head_size: None,
            start_time: timing.start,
            duration: timing.duration,
        };

        match (&el.layout, el.shape.is_connector()) {
            (ShapeLayout::Connection(conn), true) => {
                let c = self.engine().layout_connection(conn);
                action.x = round_px(c.x);
                action.y = round_px(c.y);
                action.x2 = Some(round_px(c.x2));
                action.y2 = Some(round_px(c.y2));
                action.fill = el.shape == ShapeKind::Arrow;
                if el.shape == ShapeKind::Arrow {
                    action.arrow_head_size =
                        Some(el.arrow_head_size.unwrap_or(self.defaults().arrow_head_size));
                }
            }
            (ShapeLayout::Single(layout), false) => {
                let base = self.defaults().shape_intrinsic_size;
                let r = self.engine().layout_single(layout, base.width, base.height)?;
                let center = r.center();
                action.x = round_px(center.x);
                action.y = round_px(center.y);
                match el.shape {
                    ShapeKind::Circle => {
                        action.radius = Some(round_px(r.width.min(r.height) / 2.0));
                    }
                    ShapeKind::Rectangle | ShapeKind::Ellipse => {
                        action.width = Some(round_px(r.width));
                        action.height = Some(round_px(r.height));
                    }
                    ShapeKind::Polygon => {
                        let scale = r.scale.unwrap_or(1.0);
                        action.points = Some(
                            el.points
                                .iter()
                                .map(|&offset| {
                                    let p = center + offset * scale;
                                    PixelPoint {
                                        x: round_px(p.x),
                                        y: round_px(p.y),
                                    }
                                })
                                .collect(),
                        );
                    }
                    ShapeKind::Line | ShapeKind::Arrow => {}
                }
            }
            (_, true) => {
                return Err(SceneError::validation(format!(
                    "scene '{}': {} shape requires a from/to connection layout",
                    self.scene.id,
                    el.shape.as_str()
                )));
            }
            (_, false) => {
                return Err(SceneError::validation(format!(
                    "scene '{}': {} shape requires a position layout, not a connection",
                    self.scene.id,
                    el.shape.as_str()
                )));
            }
        }

        action.id = self.ids.next("shape");
        self.actions.push(Action::Shape(action));
        Ok(())
    }

    fn image(&mut self, el: &ImageElement) -> SceneResult<()> {
        let size = self
            .dims
            .dimensions_or(&el.asset_id, self.defaults().image_size);
        let r = self.engine().layout_single(&el.layout, size.width, size.height)?;
        let timing = self.timing(el.start_time, el.duration);
        self.push_image(&el.asset_id, &r, timing, el.animation_type.as_deref());
        Ok(())
    }

    fn group(&mut self, index: usize, el: &GroupElement) -> SceneResult<()> {
        let mut flex = Vec::with_capacity(el.items.len());
        let mut members = Vec::with_capacity(el.items.len());
        for (item_index, item) in el.items.iter().enumerate() {
            let Some(size) = self.group_item_size(item) else {
                tracing::warn!(
                    scene = %self.scene.id,
                    group = index,
                    item = item_index,
                    kind = ?item.kind,
                    "skipping group item missing its required field"
                );
                continue;
            };
            let id = format!("item-{item_index}");
            flex.push(FlexItem::new(id.clone(), size.0, size.1)?);
            members.push((id, item));
        }

        let placed = self.engine().layout_group(&el.layout, &flex)?;
        for (id, item) in members {
            let Some(r) = placed.get(&id) else {
                continue;
            };
            let timing = self.timing(
                item.start_time.unwrap_or(el.start_time),
                item.duration.unwrap_or(el.duration),
            );
            match item.kind {
                GroupItemKind::Svg => {
                    if let Some(asset_id) = &item.asset_id {
                        self.push_svg(asset_id, r, timing, item.animation_type.clone());
                    }
                }
                GroupItemKind::Image => {
                    if let Some(asset_id) = &item.asset_id {
                        self.push_image(asset_id, r, timing, item.animation_type.as_deref());
                    }
                }
                GroupItemKind::Text => {
                    if let Some(text) = &item.text {
                        let parts = TextParts {
                            text,
                            font_size: item.font_size.unwrap_or(self.defaults().font_size),
                            font_family: item
                                .font_family
                                .clone()
                                .unwrap_or_else(|| self.defaults().font_family.clone()),
                            color: item.color.as_deref(),
                            animation_type: item.animation_type.as_deref(),
                        };
                        self.push_text(parts, r, timing);
                    }
                }
            }
        }
        Ok(())
    }

    /// Intrinsic size of a group item, or `None` when the item lacks its required field.
    fn group_item_size(&self, item: &GroupItem) -> Option<(f64, f64)> {
        let defaults = self.defaults();
        match item.kind {
            GroupItemKind::Svg | GroupItemKind::Image => {
                let asset_id = item.asset_id.as_deref()?;
                let d = self
                    .dims
                    .dimensions_or(asset_id, defaults.generic_asset_size);
                Some((d.width, d.height))
            }
            GroupItemKind::Text => {
                let text = item.text.as_deref().filter(|t| !t.is_empty())?;
                let font_size = item.font_size.unwrap_or(defaults.font_size);
                Some(
                    self.engine()
                        .estimate_text(text, font_size, defaults.group_text_char_width),
                )
            }
        }
    }

    fn push_svg(
        &mut self,
        asset_id: &str,
        r: &LayoutResult,
        timing: Timing,
        animation_type: Option<String>,
    ) {
        let id = self.ids.next("svg");
        self.actions.push(Action::SvgAnimation(SvgAnimationAction {
            id,
            asset_id: asset_id.to_string(),
            x: round_px(r.x),
            y: round_px(r.y),
            width: round_px(r.width),
            height: round_px(r.height),
            scale: r.scale.unwrap_or(1.0),
            start_time: timing.start,
            duration: timing.duration,
            animation_type,
        }));
    }

    fn push_text(&mut self, parts: TextParts<'_>, r: &LayoutResult, timing: Timing) {
        let id = self.ids.next("text");
        let defaults = self.defaults();
        let action = TextAction {
            id,
            text: parts.text.to_string(),
            x: round_px(r.x),
            y: round_px(r.y),
            width: round_px(r.width),
            height: round_px(r.height),
            font_size: parts.font_size,
            font_family: parts.font_family,
            color: parts
                .color
                .map_or_else(|| defaults.text_color.clone(), str::to_string),
            animation_type: parts
                .animation_type
                .map_or_else(|| defaults.text_animation.clone(), str::to_string),
            start_time: timing.start,
            duration: timing.duration,
        };
        self.actions.push(Action::Text(action));
    }

    fn push_image(
        &mut self,
        asset_id: &str,
        r: &LayoutResult,
        timing: Timing,
        animation_type: Option<&str>,
    ) {
        let id = self.ids.next("image");
        let center = r.center();
        let animation_type =
            animation_type.map_or_else(|| self.defaults().image_animation.clone(), str::to_string);
        self.actions.push(Action::Image(ImageAction {
            id,
            asset_id: asset_id.to_string(),
            x: round_px(center.x),
            y: round_px(center.y),
            width: round_px(r.width),
            height: round_px(r.height),
            scale: r.scale.unwrap_or(1.0),
            animation_type,
            start_time: timing.start,
            duration: timing.duration,
        }));
    }
}

/// Text fields shared by standalone text elements and text group items.
struct TextParts<'a> {
    text: &'a str,
    font_size: f64,
    font_family: String,
    color: Option<&'a str>,
    animation_type: Option<&'a str>,
}

#[cfg(test)]
#[path = "../../tests/unit/compile/compiler.rs"]
mod tests;
