use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton, PointerButtonEvent};

/// Per-frame input deltas.
///
/// Window events are queued here between frames. The application drains the
/// queue at the start of its frame and the runtime clears it afterwards, so
/// nothing reacts to input from inside a platform callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame.
    pub keys_pressed: HashSet<Key>,

    /// Keys released this frame.
    pub keys_released: HashSet<Key>,

    /// Mouse buttons pressed this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Mouse buttons released this frame.
    pub buttons_released: HashSet<MouseButton>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Primary-button presses of this frame, in arrival order.
    pub fn primary_clicks(&self) -> impl Iterator<Item = &PointerButtonEvent> {
        self.events.iter().filter_map(|ev| match ev {
            InputEvent::PointerButton(b) if b.is_primary_press() => Some(b),
            _ => None,
        })
    }
}
