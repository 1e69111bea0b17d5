use std::collections::HashSet;
use std::fmt;

use strata_engine::coords::{Point, Viewport};
use strata_engine::paint::Rgb;
use strata_engine::scene::{DrawList, Pass, ZIndex};

use crate::color::{ColorResolver, NamedColors};
use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::frame::{FrameInput, FrameReport};
use crate::node::{NodeId, ShapeNode};
use crate::view::NodeRef;

struct Slot {
    node: ShapeNode,
    registered: bool,
}

/// Owns every node of a scene and runs the per-frame paint/hover protocol.
///
/// Nodes live in an arena indexed by [`NodeId`]; parent links are plain ids, so
/// the tree has exactly one owner and no reference cycles. Paint order comes from
/// the flat registration list sorted by z, never from walking the tree.
///
/// Lifecycle: [`insert`](Self::insert) / [`attach`](Self::attach) /
/// [`register`](Self::register) (or [`add`](Self::add) for all three) during setup,
/// then one [`draw`](Self::draw) per frame. Nothing is removed afterwards.
pub struct SceneRegistry {
    slots: Vec<Slot>,
    /// Registration order; the stable tie-break for equal z.
    all: Vec<NodeId>,
    roots: Vec<NodeId>,
    config: SceneConfig,
    resolver: Box<dyn ColorResolver>,
}

impl SceneRegistry {
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            slots: Vec::new(),
            all: Vec::new(),
            roots: Vec::new(),
            config,
            resolver: Box::new(NamedColors),
        }
    }

    /// Replaces the color table used when drawing.
    pub fn with_resolver(mut self, resolver: impl ColorResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    #[inline]
    pub fn config(&self) -> SceneConfig {
        self.config
    }

    pub(crate) fn resolve_color(&self, token: &str) -> Rgb {
        self.resolver.resolve(token)
    }

    // ── construction ──────────────────────────────────────────────────────

    /// Moves a node into the arena without registering it.
    pub fn insert(&mut self, node: ShapeNode) -> Result<NodeId> {
        if !node.scale.is_finite() || node.scale <= 0.0 {
            return Err(SceneError::InvalidScale { scale: node.scale });
        }

        let id = NodeId(self.slots.len());
        self.slots.push(Slot { node, registered: false });
        Ok(id)
    }

    /// Makes `parent` the owner of `child`.
    ///
    /// Only unregistered children can be moved. Links are validated when the child
    /// is registered, which is where a cycle is reported.
    pub fn attach(&mut self, child: NodeId, parent: NodeId) -> Result<()> {
        self.slot(parent)?;
        let slot = self.slot(child)?;
        if slot.registered {
            return Err(SceneError::AlreadyRegistered(child));
        }

        if let Some(old) = slot.node.parent {
            self.slots[old.0].node.children.retain(|&c| c != child);
        }
        self.slots[child.0].node.parent = Some(parent);
        self.slots[parent.0].node.children.push(child);
        Ok(())
    }

    /// Adds `id` to the paint list, and to the roots if it has no parent.
    ///
    /// Nodes can be registered in any order, but each exactly once. The parent chain
    /// is walked with a visited set and a depth bound before anything is recorded.
    pub fn register(&mut self, id: NodeId) -> Result<()> {
        let slot = self.slot(id)?;
        if slot.registered {
            return Err(SceneError::AlreadyRegistered(id));
        }
        self.check_ownership_chain(id)?;

        let slot = &mut self.slots[id.0];
        slot.registered = true;
        self.all.push(id);
        if slot.node.parent.is_none() {
            self.roots.push(id);
        }

        log::debug!(
            "registered {id}: {} z={} parent={:?}",
            slot.node.kind,
            slot.node.z_order,
            slot.node.parent
        );
        Ok(())
    }

    /// Inserts, attaches under `parent` (if any) and registers in one step.
    pub fn add(&mut self, node: ShapeNode, parent: Option<NodeId>) -> Result<NodeId> {
        if let Some(p) = parent {
            self.slot(p)?;
        }
        let id = self.insert(node)?;
        if let Some(p) = parent {
            self.attach(id, p)?;
        }
        self.register(id)?;
        Ok(id)
    }

    fn check_ownership_chain(&self, id: NodeId) -> Result<()> {
        let mut visited = HashSet::new();
        let mut current = Some(id);
        let mut depth = 0;

        while let Some(cur) = current {
            if !visited.insert(cur) {
                return Err(SceneError::CyclicOwnership { node: id });
            }
            if depth > self.config.max_depth {
                return Err(SceneError::DepthExceeded { node: id, limit: self.config.max_depth });
            }
            current = self.slots[cur.0].node.parent;
            depth += 1;
        }

        Ok(())
    }

    fn slot(&self, id: NodeId) -> Result<&Slot> {
        self.slots.get(id.0).ok_or(SceneError::UnknownNode(id))
    }

    // ── queries ───────────────────────────────────────────────────────────

    /// View of any node in the arena, registered or not.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        self.slots.get(id.0).map(|s| NodeRef::new(self, id, &s.node))
    }

    pub fn is_registered(&self, id: NodeId) -> bool {
        self.slots.get(id.0).is_some_and(|s| s.registered)
    }

    /// Registered nodes without a parent, in registration order.
    #[inline]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Every registered node, in registration order.
    #[inline]
    pub fn registered(&self) -> &[NodeId] {
        &self.all
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    fn view(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef::new(self, id, &self.slots[id.0].node)
    }

    /// Registered nodes in ascending z; equal z keeps registration order.
    pub fn paint_order(&self) -> Vec<NodeId> {
        let mut order = self.all.clone();
        order.sort_by_key(|id| self.slots[id.0].node.z_order);
        order
    }

    /// Interactable node under `point` with the greatest z.
    ///
    /// Ties go to the node registered first.
    pub fn topmost_interactable_at(&self, point: Point, viewport: Viewport) -> Option<NodeId> {
        let mut best: Option<(NodeId, ZIndex)> = None;

        for &id in &self.all {
            let view = self.view(id);
            if !view.is_interactable() || !view.hit_test(point, viewport) {
                continue;
            }
            // Strictly greater, so an equal z never displaces an earlier node.
            if best.is_none_or(|(_, z)| view.z() > z) {
                best = Some((id, view.z()));
            }
        }

        best.map(|(id, _)| id)
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Records one frame into `out` and resolves hover and click.
    ///
    /// 1. Base pass: every registered node, normal state, ascending z.
    /// 2. Hover pass, skipped while the pointer is outside the window: the
    ///    topmost interactable node under the pointer is redrawn
    ///    highlighted, then every node with a strictly greater z is redrawn over it
    ///    in ascending z. A click that also hits the hovered node fires its hook.
    ///
    /// Pure with respect to the tree: hover and click are not stored anywhere.
    pub fn draw(&self, input: &FrameInput, out: &mut DrawList) -> FrameReport {
        let viewport = input.viewport;
        let order = self.paint_order();

        for &id in &order {
            self.view(id).draw(viewport, false, Pass::Base, out);
        }

        let mut report = FrameReport::default();
        let Some(pointer) = input.pointer else {
            return report;
        };
        let Some(hovered) = self.topmost_interactable_at(pointer, viewport) else {
            return report;
        };
        report.hovered = Some(hovered);

        let target = self.view(hovered);
        target.draw(viewport, true, Pass::Hover, out);

        let hover_z = target.z();
        for &id in order.iter().filter(|&&id| self.slots[id.0].node.z_order > hover_z) {
            self.view(id).draw(viewport, false, Pass::Hover, out);
        }

        if let Some(click) = input.click {
            if target.hit_test(click, viewport) {
                report.interactions.push(target.node().interact(hovered, click));
            }
        }

        report
    }
}

impl Default for SceneRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SceneRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneRegistry")
            .field("nodes", &self.slots.len())
            .field("registered", &self.all)
            .field("roots", &self.roots)
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use strata_engine::coords::Size;
    use strata_engine::scene::DrawCmd;

    use super::*;
    use crate::config::SizingMode;

    const VP: Viewport = Viewport::new(800, 600);

    fn centered_square(scale: f64) -> ShapeNode {
        ShapeNode::square("gray", scale).offset(0.5, 0.5)
    }

    fn base_zs(list: &DrawList) -> Vec<i32> {
        list.iter_pass(Pass::Base)
            .filter(|i| !i.cmd.is_stroke())
            .map(|i| i.z.get())
            .collect()
    }

    fn hover_zs(list: &DrawList) -> Vec<i32> {
        list.iter_pass(Pass::Hover)
            .filter(|i| !i.cmd.is_stroke())
            .map(|i| i.z.get())
            .collect()
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn root_geometry_follows_viewport() {
        for (w, h) in [(800, 600), (1024, 768), (333, 999), (1, 1)] {
            let mut scene = SceneRegistry::new();
            let id = scene.add(centered_square(0.5), None).unwrap();
            let node = scene.node(id).unwrap();
            let vp = Viewport::new(w, h);

            let side = (f64::from(w.min(h)) * 0.5).floor() as i32;
            assert_eq!(node.pixel_size(vp), Size::square(side));
            assert_eq!(node.absolute_position(vp), Point::new(w / 2, h / 2));
        }
    }

    #[test]
    fn background_at_800_by_600() {
        let mut scene = SceneRegistry::new();
        let id = scene.add(centered_square(0.7), None).unwrap();
        let node = scene.node(id).unwrap();

        assert_eq!(node.pixel_size(VP), Size::square(420));
        assert_eq!(node.absolute_position(VP), Point::new(400, 300));
    }

    #[test]
    fn position_nests_but_size_does_not() {
        let mut scene = SceneRegistry::new();
        let parent = scene.add(centered_square(0.5), None).unwrap();
        let child = scene
            .add(ShapeNode::circle("red", 0.25).offset(0.25, -0.25), Some(parent))
            .unwrap();
        let child = scene.node(child).unwrap();

        // Parent is 300px at (400, 300); offset scales with the parent's size.
        assert_eq!(child.absolute_position(VP), Point::new(475, 225));
        // Size comes from the viewport's shorter side, not the parent.
        assert_eq!(child.pixel_size(VP), Size::square(150));
    }

    #[test]
    fn parent_sizing_mode_scales_against_parent() {
        let mut scene = SceneRegistry::with_config(SceneConfig::with_sizing(SizingMode::Parent));
        let parent = scene.add(centered_square(0.5), None).unwrap();
        let child = scene.add(ShapeNode::circle("red", 0.25), Some(parent)).unwrap();

        assert_eq!(scene.node(parent).unwrap().pixel_size(VP), Size::square(300));
        assert_eq!(scene.node(child).unwrap().pixel_size(VP), Size::square(75));
    }

    #[test]
    fn grandchild_accumulates_offsets() {
        let mut scene = SceneRegistry::new();
        let a = scene.add(ShapeNode::square("gray", 0.5).offset(0.25, 0.5), None).unwrap();
        let b = scene.add(ShapeNode::square("gray", 0.5).offset(0.5, 0.0), Some(a)).unwrap();
        let c = scene.add(ShapeNode::square("gray", 0.5).offset(0.0, 0.5), Some(b)).unwrap();

        // a at (200, 300); each level is 300px.
        assert_eq!(scene.node(b).unwrap().absolute_position(VP), Point::new(350, 300));
        assert_eq!(scene.node(c).unwrap().absolute_position(VP), Point::new(350, 450));
    }

    #[test]
    fn resize_takes_effect_on_next_frame() {
        let mut scene = SceneRegistry::new();
        let id = scene.add(centered_square(0.5).interactable(true), None).unwrap();

        let mut list = DrawList::new();
        scene.draw(&FrameInput::new(VP, Point::new(400, 300)), &mut list);
        let DrawCmd::FillRect(before) = &list.items()[0].cmd else { panic!("expected a rect") };
        assert_eq!(before.rect.size, Size::square(300));

        list.clear();
        let small = Viewport::new(400, 300);
        let report = scene.draw(&FrameInput::new(small, Point::new(200, 150)), &mut list);
        let DrawCmd::FillRect(after) = &list.items()[0].cmd else { panic!("expected a rect") };
        assert_eq!(after.rect.size, Size::square(150));
        assert_eq!(after.rect.origin, Point::new(125, 75));
        assert_eq!(report.hovered, Some(id));
    }

    // ── registration ──────────────────────────────────────────────────────

    #[test]
    fn roots_and_all_are_tracked_separately() {
        let mut scene = SceneRegistry::new();
        let a = scene.add(centered_square(0.5), None).unwrap();
        let b = scene.add(centered_square(0.1), Some(a)).unwrap();
        let c = scene.add(centered_square(0.2), None).unwrap();

        assert_eq!(scene.roots(), &[a, c]);
        assert_eq!(scene.registered(), &[a, b, c]);
        assert_eq!(scene.node(a).unwrap().children(), &[b]);
        assert_eq!(scene.node(b).unwrap().parent().map(|p| p.id()), Some(a));
    }

    #[test]
    fn registration_order_is_free() {
        let mut scene = SceneRegistry::new();
        let parent = scene.insert(centered_square(0.5)).unwrap();
        let child = scene.insert(centered_square(0.1)).unwrap();
        scene.attach(child, parent).unwrap();

        scene.register(child).unwrap();
        scene.register(parent).unwrap();

        assert_eq!(scene.registered(), &[child, parent]);
        assert_eq!(scene.roots(), &[parent]);
    }

    #[test]
    fn double_registration_is_rejected() {
        let mut scene = SceneRegistry::new();
        let id = scene.add(centered_square(0.5), None).unwrap();
        assert_eq!(scene.register(id), Err(SceneError::AlreadyRegistered(id)));
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn cycle_is_reported_at_registration() {
        let mut scene = SceneRegistry::new();
        let a = scene.insert(centered_square(0.5)).unwrap();
        let b = scene.insert(centered_square(0.5)).unwrap();
        scene.attach(a, b).unwrap();
        scene.attach(b, a).unwrap();

        assert_eq!(scene.register(a), Err(SceneError::CyclicOwnership { node: a }));
        assert!(!scene.is_registered(a));
        assert!(scene.is_empty());
    }

    #[test]
    fn self_parenting_is_a_cycle() {
        let mut scene = SceneRegistry::new();
        let a = scene.insert(centered_square(0.5)).unwrap();
        scene.attach(a, a).unwrap();
        assert_eq!(scene.register(a), Err(SceneError::CyclicOwnership { node: a }));
    }

    #[test]
    fn geometry_of_cyclic_node_still_terminates() {
        let mut scene = SceneRegistry::new();
        let a = scene.insert(centered_square(0.5)).unwrap();
        let b = scene.insert(centered_square(0.5)).unwrap();
        scene.attach(a, b).unwrap();
        scene.attach(b, a).unwrap();

        let _ = scene.node(a).unwrap().absolute_position(VP);
    }

    #[test]
    fn chain_deeper_than_limit_is_rejected() {
        let config = SceneConfig { max_depth: 2, ..SceneConfig::default() };
        let mut scene = SceneRegistry::with_config(config);
        let a = scene.add(centered_square(0.5), None).unwrap();
        let b = scene.add(centered_square(0.5), Some(a)).unwrap();
        let c = scene.add(centered_square(0.5), Some(b)).unwrap();
        let d = scene.insert(centered_square(0.5)).unwrap();
        scene.attach(d, c).unwrap();

        assert_eq!(scene.register(d), Err(SceneError::DepthExceeded { node: d, limit: 2 }));
    }

    #[test]
    fn attach_after_registration_is_rejected() {
        let mut scene = SceneRegistry::new();
        let a = scene.add(centered_square(0.5), None).unwrap();
        let b = scene.add(centered_square(0.5), None).unwrap();
        assert_eq!(scene.attach(b, a), Err(SceneError::AlreadyRegistered(b)));
    }

    #[test]
    fn reattach_moves_child_between_parents() {
        let mut scene = SceneRegistry::new();
        let a = scene.insert(centered_square(0.5)).unwrap();
        let b = scene.insert(centered_square(0.5)).unwrap();
        let c = scene.insert(centered_square(0.5)).unwrap();
        scene.attach(c, a).unwrap();
        scene.attach(c, b).unwrap();

        assert!(scene.node(a).unwrap().children().is_empty());
        assert_eq!(scene.node(b).unwrap().children(), &[c]);
    }

    #[test]
    fn unknown_ids_and_bad_scales_are_rejected() {
        let mut scene = SceneRegistry::new();
        let ghost = NodeId(42);
        assert_eq!(scene.register(ghost), Err(SceneError::UnknownNode(ghost)));
        assert_eq!(
            scene.add(centered_square(0.5), Some(ghost)).unwrap_err(),
            SceneError::UnknownNode(ghost)
        );
        assert!(matches!(
            scene.insert(centered_square(0.0)),
            Err(SceneError::InvalidScale { .. })
        ));
        assert!(matches!(
            scene.insert(centered_square(f64::NAN)),
            Err(SceneError::InvalidScale { .. })
        ));
    }

    // ── hit resolution ────────────────────────────────────────────────────

    #[test]
    fn higher_z_wins_regardless_of_registration_order() {
        for flip in [false, true] {
            let mut scene = SceneRegistry::new();
            let low = centered_square(0.5).interactable(true).z_order(1);
            let high = centered_square(0.2).interactable(true).z_order(9);
            let (low, high) = if flip {
                let h = scene.add(high, None).unwrap();
                (scene.add(low, None).unwrap(), h)
            } else {
                let l = scene.add(low, None).unwrap();
                (l, scene.add(high, None).unwrap())
            };

            assert_eq!(scene.topmost_interactable_at(Point::new(400, 300), VP), Some(high));
            // Outside the small square only the big one is hit.
            assert_eq!(scene.topmost_interactable_at(Point::new(400, 160), VP), Some(low));
        }
    }

    #[test]
    fn equal_z_prefers_first_registered() {
        let mut scene = SceneRegistry::new();
        let first = scene.add(centered_square(0.2).interactable(true).z_order(5), None).unwrap();
        let _second = scene.add(centered_square(0.5).interactable(true).z_order(5), None).unwrap();

        assert_eq!(scene.topmost_interactable_at(Point::new(400, 300), VP), Some(first));
    }

    #[test]
    fn non_interactable_nodes_never_hover() {
        let mut scene = SceneRegistry::new();
        scene.add(centered_square(0.5).z_order(100), None).unwrap();
        let below = scene.add(centered_square(0.5).interactable(true).z_order(1), None).unwrap();

        assert_eq!(scene.topmost_interactable_at(Point::new(400, 300), VP), Some(below));
        assert_eq!(scene.topmost_interactable_at(Point::new(5, 5), VP), None);
    }

    // ── draw protocol ─────────────────────────────────────────────────────

    #[test]
    fn base_pass_orders_globally_across_branches() {
        let mut scene = SceneRegistry::new();
        let a = scene.add(centered_square(0.5).z_order(0), None).unwrap();
        scene.add(centered_square(0.1).z_order(50), Some(a)).unwrap();
        let b = scene.add(centered_square(0.4).z_order(10), None).unwrap();
        scene.add(centered_square(0.1).z_order(5), Some(b)).unwrap();

        let mut list = DrawList::new();
        let report = scene.draw(&FrameInput::new(VP, Point::new(0, 0)), &mut list);

        assert_eq!(base_zs(&list), vec![0, 5, 10, 50]);
        assert!(report.hovered.is_none());
        assert_eq!(list.iter_pass(Pass::Hover).count(), 0);
    }

    #[test]
    fn border_follows_its_fill() {
        let mut scene = SceneRegistry::new();
        scene.add(centered_square(0.5).border(4).z_order(1), None).unwrap();
        scene.add(ShapeNode::circle("red", 0.2).offset(0.5, 0.5).border(4).z_order(2), None).unwrap();

        let mut list = DrawList::new();
        scene.draw(&FrameInput::new(VP, Point::new(0, 0)), &mut list);
        let items = list.items();

        assert_eq!(items.len(), 4);
        assert!(matches!(&items[0].cmd, DrawCmd::FillRect(_)));
        assert!(matches!(&items[1].cmd, DrawCmd::StrokeRect(s) if s.thickness == 4 && s.color == Rgb::BLACK));
        assert!(matches!(&items[2].cmd, DrawCmd::FillCircle(c) if c.radius == 60));
        assert!(matches!(&items[3].cmd, DrawCmd::StrokeCircle(s) if s.radius == 62));
    }

    #[test]
    fn hover_pass_highlights_then_restores_higher_layers() {
        let mut scene = SceneRegistry::new();
        scene.add(centered_square(0.9).z_order(0), None).unwrap();
        let mid = scene.add(centered_square(0.5).interactable(true).z_order(10), None).unwrap();
        scene.add(ShapeNode::circle("yellow", 0.1).offset(0.5, 0.5).z_order(30), None).unwrap();
        scene.add(ShapeNode::circle("red", 0.1).offset(0.1, 0.1).z_order(20), None).unwrap();

        let mut list = DrawList::new();
        // Inside `mid` but outside the small yellow circle.
        let report = scene.draw(&FrameInput::new(VP, Point::new(300, 300)), &mut list);

        assert_eq!(report.hovered, Some(mid));
        assert_eq!(hover_zs(&list), vec![10, 20, 30]);

        let hover: Vec<_> = list.iter_pass(Pass::Hover).collect();
        let DrawCmd::FillRect(highlight) = &hover[0].cmd else { panic!("expected a rect") };
        assert_eq!(highlight.color, Rgb::new(168, 168, 168));
        let DrawCmd::FillCircle(restored) = &hover[2].cmd else { panic!("expected a circle") };
        assert_eq!(restored.color, Rgb::new(255, 255, 0));
    }

    #[test]
    fn equal_z_neighbours_are_not_redrawn_over_highlight() {
        let mut scene = SceneRegistry::new();
        let a = scene.add(centered_square(0.5).interactable(true).z_order(5), None).unwrap();
        scene.add(centered_square(0.6).z_order(5), None).unwrap();

        let mut list = DrawList::new();
        let report = scene.draw(&FrameInput::new(VP, Point::new(400, 300)), &mut list);

        assert_eq!(report.hovered, Some(a));
        assert_eq!(hover_zs(&list), vec![5]);
    }

    #[test]
    fn click_on_hovered_node_notifies_once() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);

        let mut scene = SceneRegistry::new();
        let id = scene
            .add(
                centered_square(0.5)
                    .interactable(true)
                    .z_order(3)
                    .on_interact(move |_| counter.set(counter.get() + 1)),
                None,
            )
            .unwrap();

        let mut list = DrawList::new();
        let at = Point::new(410, 310);
        let input = FrameInput::new(VP, Point::new(400, 300)).with_click(at);
        let report = scene.draw(&input, &mut list);

        assert_eq!(report.interactions.len(), 1);
        assert_eq!(report.interactions[0].node, id);
        assert_eq!(report.interactions[0].z_order, ZIndex(3));
        assert_eq!(report.interactions[0].at, at);
        assert_eq!(clicks.get(), 1);

        // Next frame without a click: nothing replays.
        list.clear();
        let report = scene.draw(&FrameInput::new(VP, Point::new(400, 300)), &mut list);
        assert!(report.interactions.is_empty());
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn click_outside_every_node_notifies_nothing() {
        let mut scene = SceneRegistry::new();
        scene.add(centered_square(0.5).interactable(true), None).unwrap();

        let mut list = DrawList::new();
        let input = FrameInput::new(VP, Point::new(400, 300)).with_click(Point::new(5, 5));
        let report = scene.draw(&input, &mut list);

        assert!(report.hovered.is_some());
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn click_without_hover_notifies_nothing() {
        let mut scene = SceneRegistry::new();
        scene.add(centered_square(0.5).interactable(true), None).unwrap();

        let mut list = DrawList::new();
        let input = FrameInput::new(VP, Point::new(5, 5)).with_click(Point::new(400, 300));
        let report = scene.draw(&input, &mut list);

        assert!(report.hovered.is_none());
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn pointer_outside_window_hovers_nothing() {
        let mut scene = SceneRegistry::new();
        // Centered on the viewport origin, so (-1, -1) is inside it.
        let id = scene.add(ShapeNode::square("gray", 0.5).interactable(true), None).unwrap();

        let mut list = DrawList::new();
        let input = FrameInput::without_pointer(VP).with_click(Point::new(0, 0));
        let report = scene.draw(&input, &mut list);
        assert!(report.hovered.is_none());
        assert!(report.interactions.is_empty());
        assert!(hover_zs(&list).is_empty());

        list.clear();
        let report = scene.draw(&FrameInput::new(VP, Point::new(-1, -1)), &mut list);
        assert_eq!(report.hovered, Some(id));
    }

    #[test]
    fn custom_resolver_is_used() {
        let mut scene = SceneRegistry::new().with_resolver(|_: &str| Rgb::new(1, 2, 3));
        scene.add(centered_square(0.5), None).unwrap();

        let mut list = DrawList::new();
        scene.draw(&FrameInput::new(VP, Point::new(0, 0)), &mut list);
        let DrawCmd::FillRect(fill) = &list.items()[0].cmd else { panic!("expected a rect") };
        assert_eq!(fill.color, Rgb::new(1, 2, 3));
    }
}
