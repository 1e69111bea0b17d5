use super::{DrawCmd, ZIndex};

/// Which render pass emitted an item.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Pass {
    /// Every node in its normal state, back to front.
    Base,
    /// The highlighted node plus the higher layers redrawn over it.
    Hover,
}

/// A single recorded primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    /// Layer of the node that produced this primitive.
    pub z: ZIndex,
    pub pass: Pass,
    pub cmd: DrawCmd,
}

/// Recorded draw stream for a frame.
///
/// Unlike a z-sorted display list, the producer is responsible for ordering:
/// items are kept exactly in the order they were pushed, and that order is the
/// paint order. The z layer is recorded alongside each item for inspection.
///
/// `clear()` keeps the allocation, so reusing one list across frames does not
/// allocate once warmed.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items emitted by one pass, in paint order.
    pub fn iter_pass(&self, pass: Pass) -> impl Iterator<Item = &DrawItem> {
        self.items.iter().filter(move |item| item.pass == pass)
    }

    /// Appends a primitive.
    #[inline]
    pub fn push(&mut self, z: ZIndex, pass: Pass, cmd: DrawCmd) {
        self.items.push(DrawItem { z, pass, cmd });
    }
}
