use core::ops::Deref;

use strata_engine::coords::{Point, Rect, Size, Viewport};
use strata_engine::scene::{Border, DrawList, Pass};

use crate::config::SizingMode;
use crate::kind::ShapeKind;
use crate::node::{NodeId, ShapeNode};
use crate::registry::SceneRegistry;

/// Resolved screen geometry of a node for one viewport.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Geometry {
    /// Absolute position of the shape's center.
    pub center: Point,
    /// Square bounding box; a circle's diameter is `size.width`.
    pub size: Size,
}

/// Borrowed view of a registry node that can resolve geometry through its parents.
///
/// Nothing is cached: every call recomputes from the viewport it is given.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    registry: &'a SceneRegistry,
    id: NodeId,
    node: &'a ShapeNode,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(registry: &'a SceneRegistry, id: NodeId, node: &'a ShapeNode) -> Self {
        Self { registry, id, node }
    }

    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn node(&self) -> &'a ShapeNode {
        self.node
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.node.parent.and_then(|p| self.registry.node(p))
    }

    /// Center of the shape in pixels.
    ///
    /// Roots: `floor(viewport * offset)`. Children: the parent's position plus
    /// `floor(parent_pixel_size * offset)`.
    pub fn absolute_position(&self, viewport: Viewport) -> Point {
        self.geometry(viewport).center
    }

    /// Square bounding box in pixels; see [`SizingMode`] for the basis.
    pub fn pixel_size(&self, viewport: Viewport) -> Size {
        self.geometry(viewport).size
    }

    pub fn geometry(&self, viewport: Viewport) -> Geometry {
        self.resolve(viewport, 0)
    }

    /// Whether `point` hits this node at the given viewport's geometry.
    pub fn hit_test(&self, point: Point, viewport: Viewport) -> bool {
        let g = self.geometry(viewport);
        self.node.kind.hit_test(g.center, g.size, point)
    }

    /// Records the fill, then the border if the node has one.
    pub fn draw(&self, viewport: Viewport, highlighted: bool, pass: Pass, out: &mut DrawList) {
        let g = self.geometry(viewport);
        let base = self.registry.resolve_color(&self.node.color);
        let color = if highlighted { base.highlighted() } else { base };
        let z = self.node.z_order;
        let border = self.node.has_border.then(|| {
            Border::new(
                self.node.border_thickness,
                self.registry.resolve_color(ShapeNode::BORDER_COLOR),
            )
        });

        match self.node.kind {
            ShapeKind::Square => {
                let rect = Rect::centered(g.center, g.size);
                out.fill_rect(z, pass, rect, color);
                if let Some(b) = border {
                    out.stroke_rect(z, pass, rect, b.color, b.thickness);
                }
            }
            ShapeKind::Circle => {
                let radius = g.size.width / 2;
                out.fill_circle(z, pass, g.center, radius, color);
                if let Some(b) = border {
                    // The ring straddles the fill's edge, centered on it.
                    let outer = radius + (b.thickness / 2) as i32;
                    out.stroke_circle(z, pass, g.center, outer, b.color, b.thickness);
                }
            }
        }
    }

    fn resolve(&self, viewport: Viewport, depth: usize) -> Geometry {
        let (ox, oy) = self.node.offset;
        let scale = self.node.scale;
        let viewport_size = Size::square(viewport.shorter_side()).scaled_floor(scale);

        // Registered chains are never deeper than `max_depth`, so the cap only
        // stops walks over rejected (cyclic) links.
        let parent = if depth < self.registry.config().max_depth {
            self.parent()
        } else {
            None
        };

        let Some(parent) = parent else {
            return Geometry { center: viewport.fraction(ox, oy), size: viewport_size };
        };

        let pg = parent.resolve(viewport, depth + 1);
        let center = pg.center
            + Point::new(
                (f64::from(pg.size.width) * ox).floor() as i32,
                (f64::from(pg.size.height) * oy).floor() as i32,
            );
        let size = match self.registry.config().sizing {
            SizingMode::Viewport => viewport_size,
            SizingMode::Parent => pg.size.scaled_floor(scale),
        };

        Geometry { center, size }
    }
}

impl Deref for NodeRef<'_> {
    type Target = ShapeNode;

    fn deref(&self) -> &ShapeNode {
        self.node
    }
}
