use crate::fonts::registry::FontRegistry;
use crate::foundation::config::EngineConfig;
use crate::foundation::core::Canvas;

/// Pure geometry over a fixed canvas.
///
/// The engine owns everything its computations read: the canvas size, the font registry used
/// for text estimation, and the numeric constants in [`EngineConfig`]. None of it changes after
/// construction, so an engine can be shared freely across threads.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    pub(crate) canvas: Canvas,
    pub(crate) fonts: FontRegistry,
    pub(crate) config: EngineConfig,
}

impl LayoutEngine {
    /// Engine with the built-in font table and default constants.
    pub fn new(canvas: Canvas) -> Self {
        Self::with_parts(canvas, FontRegistry::builtin(), EngineConfig::default())
    }

    pub fn with_parts(canvas: Canvas, fonts: FontRegistry, config: EngineConfig) -> Self {
        let fonts = fonts.with_default_width_ratio(config.default_char_width_ratio);
        Self {
            canvas,
            fonts,
            config,
        }
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
