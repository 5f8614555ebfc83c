use std::collections::BTreeMap;

use crate::foundation::error::{SceneError, SceneResult};

/// Where a font's bytes are served from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontLocality {
    /// Fetched from a public font CDN at render time.
    Remote,
    /// Shipped alongside the renderer.
    Bundled,
}

/// One registered font family.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FontEntry {
    pub url: String,
    /// Average glyph advance as a fraction of the font size.
    pub char_width_ratio: f64,
    pub locality: FontLocality,
}

impl FontEntry {
    pub fn new(url: impl Into<String>, char_width_ratio: f64, locality: FontLocality) -> Self {
        Self {
            url: url.into(),
            char_width_ratio,
            locality,
        }
    }
}

/// Read-mostly table of font families known to the renderer.
///
/// The layout engine only consumes [`FontRegistry::width_ratio`]. [`FontRegistry::url`] is for
/// asset-resolution collaborators and is the one fail-fast lookup.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontRegistry {
    entries: BTreeMap<String, FontEntry>,
    default_width_ratio: Option<f64>,
}

const DEFAULT_WIDTH_RATIO: f64 = 0.5;

impl FontRegistry {
    /// Empty registry; every width lookup falls back to the default ratio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the families the renderer ships with.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        let google = |family: &str| format!("https://fonts.googleapis.com/css2?family={family}");
        reg.register(
            "CaveatBrush",
            FontEntry::new(google("Caveat+Brush"), 0.5, FontLocality::Remote),
        );
        reg.register(
            "Caveat",
            FontEntry::new(google("Caveat"), 0.45, FontLocality::Remote),
        );
        reg.register(
            "PatrickHand",
            FontEntry::new(google("Patrick+Hand"), 0.48, FontLocality::Remote),
        );
        reg.register(
            "Inter",
            FontEntry::new("fonts/Inter-Regular.ttf", 0.55, FontLocality::Bundled),
        );
        reg.register(
            "Roboto",
            FontEntry::new("fonts/Roboto-Regular.ttf", 0.55, FontLocality::Bundled),
        );
        reg.register(
            "Merriweather",
            FontEntry::new(google("Merriweather"), 0.6, FontLocality::Remote),
        );
        reg
    }

    /// Override the ratio returned for unregistered families.
    pub fn with_default_width_ratio(mut self, ratio: f64) -> Self {
        self.default_width_ratio = Some(ratio);
        self
    }

    /// Insert or replace a family.
    pub fn register(&mut self, name: impl Into<String>, entry: FontEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn get(&self, name: &str) -> Option<&FontEntry> {
        self.entries.get(name)
    }

    /// Registered family names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Character-width ratio for `name`, or the default ratio when unregistered.
    pub fn width_ratio(&self, name: &str) -> f64 {
        match self.entries.get(name) {
            Some(entry) => entry.char_width_ratio,
            None => self.default_width_ratio.unwrap_or(DEFAULT_WIDTH_RATIO),
        }
    }

    /// Source URL for `name`.
    pub fn url(&self, name: &str) -> SceneResult<&str> {
        match self.entries.get(name) {
            Some(entry) => Ok(entry.url.as_str()),
            None => {
                let known = self.names().collect::<Vec<_>>().join(", ");
                Err(SceneError::font(format!(
                    "unknown font family '{name}'; registered families: [{known}]"
                )))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/registry.rs"]
mod tests;
