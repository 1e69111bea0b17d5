use strata_engine::coords::Point;
use strata_engine::scene::ZIndex;

use crate::kind::ShapeKind;
use crate::node::NodeId;

/// Notification emitted when a click lands on the hovered node.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Interaction {
    pub node: NodeId,
    pub kind: ShapeKind,
    pub z_order: ZIndex,
    /// Click position.
    pub at: Point,
}

/// Per-node click hook. Hosts needing mutable state capture a `Cell`/`RefCell`.
pub type InteractHandler = Box<dyn Fn(&Interaction)>;
