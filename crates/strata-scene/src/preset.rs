//! The sample "safe" widget: a panel with a door, four corner screws and a dial.

use crate::config::SceneConfig;
use crate::error::Result;
use crate::node::{NodeId, ShapeNode};
use crate::registry::SceneRegistry;

pub const BACKGROUND_Z: i32 = 0;
pub const DOOR_Z: i32 = 10;
pub const SCREW_Z: i32 = 20;
pub const DIAL_Z: i32 = 30;

const BACKGROUND_SCALE: f64 = 0.7;
const DOOR_SCALE: f64 = 0.5;
const SCREW_SCALE: f64 = 0.1;
const DIAL_SCALE: f64 = 0.3;

/// A built safe scene plus the ids of its parts.
#[derive(Debug)]
pub struct SafePreset {
    pub registry: SceneRegistry,
    pub background: NodeId,
    pub door: NodeId,
    /// Top-left, top-right, bottom-left, bottom-right.
    pub screws: [NodeId; 4],
    pub dial: NodeId,
}

impl SafePreset {
    /// Every interactable part, in registration order.
    pub fn interactable(&self) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::once(self.door)
            .chain(self.screws.iter().copied())
            .chain(std::iter::once(self.dial))
    }
}

/// Builds the safe with the default scene configuration.
pub fn build_safe(open: bool, size_multiplier: f64) -> Result<SafePreset> {
    build_safe_with(SceneConfig::default(), open, size_multiplier)
}

/// Builds the safe into a registry using `config`.
///
/// `size_multiplier` scales the panel, screws and dial; the door keeps a fixed
/// scale. `open` is accepted for future door states and has no effect yet.
pub fn build_safe_with(config: SceneConfig, open: bool, size_multiplier: f64) -> Result<SafePreset> {
    log::debug!("building safe (open={open}, size multiplier={size_multiplier})");

    let mut registry = SceneRegistry::with_config(config);

    let safe_scale = BACKGROUND_SCALE * size_multiplier;
    let background = registry.add(
        ShapeNode::square("gray", safe_scale)
            .offset(0.5, 0.5)
            .bordered()
            .z_order(BACKGROUND_Z),
        None,
    )?;

    let door = registry.add(
        ShapeNode::square("gray", DOOR_SCALE)
            .interactable(true)
            .bordered()
            .z_order(DOOR_Z),
        Some(background),
    )?;

    let screw_scale = SCREW_SCALE * size_multiplier;
    // Screw centers sit just outside the panel's corners.
    let reach = 0.5 * safe_scale + 0.5 * screw_scale;
    let corners = [(-reach, -reach), (reach, -reach), (-reach, reach), (reach, reach)];
    let mut screws = [background; 4];
    for (slot, (x, y)) in screws.iter_mut().zip(corners) {
        *slot = registry.add(
            ShapeNode::circle("lightgray", screw_scale)
                .offset(x, y)
                .interactable(true)
                .bordered()
                .z_order(SCREW_Z),
            Some(background),
        )?;
    }

    let dial = registry.add(
        ShapeNode::circle("lightgray", DIAL_SCALE * size_multiplier)
            .interactable(true)
            .bordered()
            .z_order(DIAL_Z),
        Some(background),
    )?;

    log::info!("safe built: {} nodes, {} root(s)", registry.len(), registry.roots().len());

    Ok(SafePreset { registry, background, door, screws, dial })
}
