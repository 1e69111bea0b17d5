use std::collections::HashSet;

use crate::coords::Point;

use super::frame::InputFrame;
use super::types::{
    InputEvent,
    Key,
    KeyState,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};

/// Current input state for a single window.
///
/// Holds "is down" information and current pointer position.
/// Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in pixels; `None` while the pointer is outside the window.
    pub pointer_pos: Option<Point>,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,

    /// Set of currently held mouse buttons.
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // On focus loss, clear "down" sets to avoid stuck keys/buttons.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(PointerMoveEvent { pos }) => {
                self.pointer_pos = Some(*pos);
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state, pos }) => {
                self.pointer_pos = Some(*pos);

                match state {
                    MouseButtonState::Pressed => {
                        if self.buttons_down.insert(*button) {
                            // At most one click per frame; later presses are dropped.
                            if *button == MouseButton::Left && frame.click.is_none() {
                                frame.click = Some(*pos);
                            }
                        }
                    }
                    MouseButtonState::Released => {
                        self.buttons_down.remove(button);
                    }
                }
            }
        }
    }

    /// Pointer position, or `fallback` when the pointer is outside the window.
    pub fn pointer_or(&self, fallback: Point) -> Point {
        self.pointer_pos.unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(button: MouseButton, x: i32, y: i32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Pressed,
            pos: Point::new(x, y),
        })
    }

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    fn release(button: MouseButton, x: i32, y: i32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button,
            state: MouseButtonState::Released,
            pos: Point::new(x, y),
        })
    }

    #[test]
    fn primary_press_records_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Left, 10, 20));

        assert_eq!(frame.click, Some(Point::new(10, 20)));
        assert_eq!(state.pointer_pos, Some(Point::new(10, 20)));
    }

    #[test]
    fn only_first_click_per_frame_is_kept() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Left, 1, 1));
        state.apply_event(&mut frame, release(MouseButton::Left, 1, 1));
        state.apply_event(&mut frame, press(MouseButton::Left, 5, 5));

        assert_eq!(frame.click, Some(Point::new(1, 1)));
    }

    #[test]
    fn secondary_button_is_not_a_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Right, 3, 3));

        assert!(frame.click.is_none());
        assert!(state.buttons_down.contains(&MouseButton::Right));
    }

    #[test]
    fn clear_drops_stale_click() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Left, 1, 1));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        frame.clear();

        assert!(frame.click.is_none());
        assert!(frame.keys_pressed.is_empty());
    }

    #[test]
    fn pointer_left_clears_position() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(PointerMoveEvent { pos: Point::new(4, 4) }));
        state.apply_event(&mut frame, InputEvent::PointerLeft);

        assert_eq!(state.pointer_pos, None);
        assert_eq!(state.pointer_or(Point::zero()), Point::zero());
    }

    #[test]
    fn focus_loss_releases_held_buttons() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, press(MouseButton::Left, 0, 0));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        frame.clear();

        // The release was lost with focus; the next press must still count.
        state.apply_event(&mut frame, press(MouseButton::Left, 2, 2));
        assert_eq!(frame.click, Some(Point::new(2, 2)));
    }

    #[test]
    fn held_key_fires_once_until_released() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        assert!(frame.key_pressed(Key::Escape));

        frame.clear();
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        assert!(!frame.key_pressed(Key::Escape));

        state.apply_event(&mut frame, key(Key::Escape, KeyState::Released));
        state.apply_event(&mut frame, key(Key::Escape, KeyState::Pressed));
        assert!(frame.key_pressed(Key::Escape));
    }
}
