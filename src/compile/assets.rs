use std::collections::HashMap;

use crate::compile::project::{AssetKind, ProjectAsset, ProjectAssets};
use crate::foundation::core::Dimensions;
use crate::spec::model::SpecAssets;

/// Source of intrinsic asset sizes for the compiler.
pub trait AssetDimensions {
    /// Declared size of `asset_id`, if known.
    fn dimensions(&self, asset_id: &str) -> Option<Dimensions>;

    fn dimensions_or(&self, asset_id: &str, fallback: Dimensions) -> Dimensions {
        self.dimensions(asset_id).unwrap_or(fallback)
    }
}

/// Sizes declared in a spec's asset table.
///
/// Svg sizes are always present; images only contribute when both width and height are declared.
#[derive(Clone, Debug, Default)]
pub struct SpecAssetDimensions {
    dims: HashMap<String, Dimensions>,
}

impl SpecAssetDimensions {
    pub fn from_spec(assets: &SpecAssets) -> Self {
        let mut dims = HashMap::with_capacity(assets.svgs.len() + assets.images.len());
        for svg in &assets.svgs {
            dims.insert(svg.id.clone(), Dimensions::new(svg.width, svg.height));
        }
        for img in &assets.images {
            if let (Some(w), Some(h)) = (img.width, img.height) {
                dims.insert(img.id.clone(), Dimensions::new(w, h));
            }
        }
        Self { dims }
    }
}

impl AssetDimensions for SpecAssetDimensions {
    fn dimensions(&self, asset_id: &str) -> Option<Dimensions> {
        self.dims.get(asset_id).copied()
    }
}

impl AssetDimensions for HashMap<String, Dimensions> {
    fn dimensions(&self, asset_id: &str) -> Option<Dimensions> {
        self.get(asset_id).copied()
    }
}

fn non_empty(list: Vec<ProjectAsset>) -> Option<Vec<ProjectAsset>> {
    if list.is_empty() { None } else { Some(list) }
}

impl ProjectAssets {
    /// Re-emit spec declarations tagged by kind, dropping empty kinds.
    pub(crate) fn from_spec(assets: &SpecAssets) -> Self {
        let svgs = assets
            .svgs
            .iter()
            .map(|a| ProjectAsset {
                id: a.id.clone(),
                kind: AssetKind::Svg,
                url: a.url.clone(),
                width: Some(a.width),
                height: Some(a.height),
            })
            .collect();
        let audio = assets
            .audio
            .iter()
            .map(|a| ProjectAsset {
                id: a.id.clone(),
                kind: AssetKind::Audio,
                url: a.url.clone(),
                width: None,
                height: None,
            })
            .collect();
        let images = assets
            .images
            .iter()
            .map(|a| ProjectAsset {
                id: a.id.clone(),
                kind: AssetKind::Image,
                url: a.url.clone(),
                width: a.width,
                height: a.height,
            })
            .collect();

        Self {
            svgs: non_empty(svgs),
            videos: None,
            audio: non_empty(audio),
            images: non_empty(images),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compile/assets.rs"]
mod tests;
