use std::fmt;

use strata_engine::coords::Point;
use strata_engine::scene::ZIndex;

use crate::interact::{InteractHandler, Interaction};
use crate::kind::ShapeKind;

/// Stable handle of a node inside a [`SceneRegistry`](crate::SceneRegistry) arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Geometry, appearance and interaction data for one element.
///
/// Built with a consuming builder and then handed to the registry, which owns it
/// for the rest of its life. Tree links are filled in by the registry.
///
/// ```rust,ignore
/// let dial = ShapeNode::circle("lightgray", 0.3)
///     .interactable(true)
///     .border(3)
///     .z_order(30);
/// ```
pub struct ShapeNode {
    pub(crate) kind: ShapeKind,
    pub(crate) color: String,
    pub(crate) scale: f64,
    pub(crate) offset: (f64, f64),
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) interactable: bool,
    pub(crate) has_border: bool,
    pub(crate) border_thickness: u32,
    pub(crate) z_order: ZIndex,
    pub(crate) on_interact: Option<InteractHandler>,
}

impl ShapeNode {
    /// Border thickness used when none is given.
    pub const DEFAULT_BORDER_THICKNESS: u32 = 3;

    /// Color token of the outline; not affected by highlighting.
    pub const BORDER_COLOR: &'static str = "black";

    pub fn new(kind: ShapeKind, color: impl Into<String>, scale: f64) -> Self {
        Self {
            kind,
            color: color.into(),
            scale,
            offset: (0.0, 0.0),
            parent: None,
            children: Vec::new(),
            interactable: false,
            has_border: false,
            border_thickness: Self::DEFAULT_BORDER_THICKNESS,
            z_order: ZIndex::default(),
            on_interact: None,
        }
    }

    pub fn square(color: impl Into<String>, scale: f64) -> Self {
        Self::new(ShapeKind::Square, color, scale)
    }

    pub fn circle(color: impl Into<String>, scale: f64) -> Self {
        Self::new(ShapeKind::Circle, color, scale)
    }

    /// Center offset as a fraction of the parent's pixel size (or the viewport for roots).
    pub fn offset(mut self, x: f64, y: f64) -> Self {
        self.offset = (x, y);
        self
    }

    pub fn interactable(mut self, interactable: bool) -> Self {
        self.interactable = interactable;
        self
    }

    /// Enables a black outline of `thickness` pixels.
    pub fn border(mut self, thickness: u32) -> Self {
        self.has_border = true;
        self.border_thickness = thickness;
        self
    }

    /// Enables the outline with [`DEFAULT_BORDER_THICKNESS`](Self::DEFAULT_BORDER_THICKNESS).
    pub fn bordered(self) -> Self {
        self.border(Self::DEFAULT_BORDER_THICKNESS)
    }

    pub fn z_order(mut self, z: i32) -> Self {
        self.z_order = ZIndex::new(z);
        self
    }

    /// Callback run when a click lands on this node while it is the hover target.
    pub fn on_interact(mut self, f: impl Fn(&Interaction) + 'static) -> Self {
        self.on_interact = Some(Box::new(f));
        self
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[inline]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn relative_offset(&self) -> (f64, f64) {
        self.offset
    }

    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in attachment order. Order has no effect on painting.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[inline]
    pub fn is_interactable(&self) -> bool {
        self.interactable
    }

    #[inline]
    pub fn has_border(&self) -> bool {
        self.has_border
    }

    #[inline]
    pub fn border_thickness(&self) -> u32 {
        self.border_thickness
    }

    #[inline]
    pub fn z(&self) -> ZIndex {
        self.z_order
    }

    /// The click hook: logs the notification and runs the node's callback, if any.
    pub(crate) fn interact(&self, node: NodeId, at: Point) -> Interaction {
        let interaction = Interaction { node, kind: self.kind, z_order: self.z_order, at };
        log::info!("{} (z:{}) was clicked", self.kind, self.z_order);
        if let Some(handler) = &self.on_interact {
            handler(&interaction);
        }
        interaction
    }
}

impl fmt::Debug for ShapeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeNode")
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("scale", &self.scale)
            .field("offset", &self.offset)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("interactable", &self.interactable)
            .field("has_border", &self.has_border)
            .field("border_thickness", &self.border_thickness)
            .field("z_order", &self.z_order)
            .field("on_interact", &self.on_interact.is_some())
            .finish()
    }
}
