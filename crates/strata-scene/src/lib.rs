//! Strata scene: nested 2D shapes with one global paint and hit order.
//!
//! Nodes form a tree for *placement* only: a child's center is offset from its
//! parent's. Painting and hit-testing ignore the tree and use each node's z order
//! across the whole scene, so a deep child can sit below a shallow sibling branch.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use strata_scene::prelude::*;
//!
//! let mut scene = SceneRegistry::new();
//! let panel = scene.add(ShapeNode::square("gray", 0.7).offset(0.5, 0.5).bordered(), None)?;
//! scene.add(
//!     ShapeNode::circle("lightgray", 0.3)
//!         .interactable(true)
//!         .z_order(30)
//!         .on_interact(|i| println!("{} clicked", i.kind)),
//!     Some(panel),
//! )?;
//!
//! // Once per frame:
//! let mut list = DrawList::new();
//! let report = scene.draw(&FrameInput::new(viewport, pointer), &mut list);
//! canvas.execute(&list);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod frame;
pub mod interact;
pub mod kind;
pub mod node;
pub mod preset;
pub mod registry;
pub mod view;

pub use color::{ColorResolver, NamedColors};
pub use config::{SceneConfig, SizingMode};
pub use error::{Result, SceneError};
pub use frame::{FrameInput, FrameReport};
pub use interact::{InteractHandler, Interaction};
pub use kind::ShapeKind;
pub use node::{NodeId, ShapeNode};
pub use registry::SceneRegistry;
pub use view::{Geometry, NodeRef};

/// Common imports for building and driving a scene.
pub mod prelude {
    pub use crate::color::{ColorResolver, NamedColors};
    pub use crate::config::{SceneConfig, SizingMode};
    pub use crate::frame::{FrameInput, FrameReport};
    pub use crate::interact::Interaction;
    pub use crate::kind::ShapeKind;
    pub use crate::node::{NodeId, ShapeNode};
    pub use crate::registry::SceneRegistry;
    pub use strata_engine::coords::{Point, Viewport};
    pub use strata_engine::scene::DrawList;
}
