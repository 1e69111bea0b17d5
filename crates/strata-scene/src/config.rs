//! Scene configuration.

/// How a node's pixel size is derived.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SizingMode {
    /// `floor(min(viewport.w, viewport.h) * scale)` for every node.
    ///
    /// Position nests through parents but size does not.
    #[default]
    Viewport,
    /// Children scale against their parent's pixel size; roots use the viewport.
    Parent,
}

/// Registry-wide settings, fixed at construction.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SceneConfig {
    pub sizing: SizingMode,
    /// Longest parent chain accepted at registration.
    pub max_depth: usize,
}

impl SceneConfig {
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn with_sizing(sizing: SizingMode) -> Self {
        Self { sizing, ..Self::default() }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sizing: SizingMode::Viewport,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }
}
