use strata_engine::coords::{Point, Viewport};

use crate::interact::Interaction;
use crate::node::NodeId;

/// Everything one call to [`SceneRegistry::draw`](crate::SceneRegistry::draw) depends on
/// besides the static tree.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameInput {
    pub viewport: Viewport,
    /// `None` while the pointer is outside the window; nothing is hovered then.
    pub pointer: Option<Point>,
    /// Primary press this frame. Must not be carried into the next frame.
    pub click: Option<Point>,
}

impl FrameInput {
    pub fn new(viewport: Viewport, pointer: Point) -> Self {
        Self { viewport, pointer: Some(pointer), click: None }
    }

    /// Frame with the pointer outside the window.
    pub fn without_pointer(viewport: Viewport) -> Self {
        Self { viewport, pointer: None, click: None }
    }

    pub fn with_click(mut self, click: Point) -> Self {
        self.click = Some(click);
        self
    }
}

/// What happened during one frame besides the recorded primitives.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    /// Topmost interactable node under the pointer.
    pub hovered: Option<NodeId>,
    pub interactions: Vec<Interaction>,
}
