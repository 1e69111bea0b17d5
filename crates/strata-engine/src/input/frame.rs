use std::collections::HashSet;

use crate::coords::Point;

use super::types::Key;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held keys/buttons, pointer position).
/// `InputFrame` provides the transitions of the current frame. The runtime clears
/// it after every frame, so nothing recorded here is ever seen twice.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame. Auto-repeat does not add a key twice.
    pub keys_pressed: HashSet<Key>,

    /// Position of the first primary-button press this frame.
    pub click: Option<Point>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.click = None;
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
