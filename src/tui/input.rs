// Input handling with per-key press tracking
//
// Every key in this app is a single-action key: it should fire once per
// physical press, not repeat while held. Terminals that report key
// releases get exact press/release tracking; terminals that only send
// repeated Press events fall back to a time debounce.

use crossterm::event::KeyCode;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Minimum time between triggers while a key is held.
/// Handles terminals that never send Release events.
const HELD_DEBOUNCE: Duration = Duration::from_millis(150);

/// Tracks the state of a single key
#[derive(Debug)]
struct KeyState {
    is_pressed: bool,
    last_triggered: Option<Instant>,
}

/// Input handler that turns raw key events into at-most-once triggers
#[derive(Debug, Default)]
pub struct InputHandler {
    key_states: HashMap<KeyCode, KeyState>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key press event.
    /// Returns true if the action should be triggered.
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        let now = Instant::now();
        let state = self.key_states.entry(key).or_insert(KeyState {
            is_pressed: false,
            last_triggered: None,
        });

        if state.is_pressed {
            // Held key (or a terminal without release events): only
            // re-trigger after the debounce window
            match state.last_triggered {
                Some(last) if now.duration_since(last) >= HELD_DEBOUNCE => {
                    state.last_triggered = Some(now);
                    true
                }
                _ => false,
            }
        } else {
            // New key press - always trigger
            state.is_pressed = true;
            state.last_triggered = Some(now);
            true
        }
    }

    /// Handle a key release event
    pub fn handle_key_release(&mut self, key: KeyCode) {
        if let Some(state) = self.key_states.get_mut(&key) {
            state.is_pressed = false;
            state.last_triggered = None;
        }
    }
}
