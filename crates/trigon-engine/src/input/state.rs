use std::collections::HashSet;

use trigon_geom::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Last known pointer position in logical pixels; `None` while outside the window.
    pub pointer_pos: Option<Vec2>,

    /// Currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies an event to the current state and records deltas into `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Release events are not delivered to an unfocused window.
                    self.keys_down.clear();
                }
            }

            InputEvent::PointerMoved(p) => {
                self.pointer_pos = Some(*p);
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
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },
        }

        frame.push_event(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// `+1` if only `positive` is held, `-1` if only `negative`, else `0`.
    pub fn axis(&self, negative: Key, positive: Key) -> f32 {
        let mut v = 0.0;
        if self.key_down(positive) {
            v += 1.0;
        }
        if self.key_down(negative) {
            v -= 1.0;
        }
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_is_reported_once() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();

        state.apply_event(&mut frame, key(Key::W, KeyState::Pressed));
        assert!(state.key_down(Key::W));
        assert!(frame.key_pressed(Key::W));

        frame.clear();
        // OS repeat of a held key is not a new press.
        state.apply_event(&mut frame, InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: true });
        assert!(!frame.key_pressed(Key::W));
        assert!(state.key_down(Key::W));
    }

    #[test]
    fn release_clears_held_key() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed));
        state.apply_event(&mut frame, key(Key::A, KeyState::Released));
        assert!(!state.key_down(Key::A));
        assert!(frame.keys_released.contains(&Key::A));
        assert_eq!(frame.events.len(), 2);
    }

    #[test]
    fn focus_loss_drops_held_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(state.keys_down.is_empty());
        assert!(!state.focused);
    }

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(10.0, 20.0)));
        assert_eq!(state.pointer_pos, Some(Vec2::new(10.0, 20.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, None);
    }

    #[test]
    fn axis_cancels_opposing_keys() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        assert_eq!(state.axis(Key::A, Key::D), 0.0);
        state.apply_event(&mut frame, key(Key::D, KeyState::Pressed));
        assert_eq!(state.axis(Key::A, Key::D), 1.0);
        state.apply_event(&mut frame, key(Key::A, KeyState::Pressed));
        assert_eq!(state.axis(Key::A, Key::D), 0.0);
        state.apply_event(&mut frame, key(Key::D, KeyState::Released));
        assert_eq!(state.axis(Key::A, Key::D), -1.0);
    }
}
