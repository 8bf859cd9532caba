use crate::prelude::*;

use std::collections::HashSet;
use winit::event::{MouseButton, TouchPhase};
use winit::keyboard::KeyCode;

/// A raw touch event, as delivered by the window this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchInput {
    pub id: u64,
    pub phase: TouchPhase,
    pub position: (f32, f32),
}

/// Resource that tracks keyboard, mouse and touch input state
#[derive(Resource, Default)]
pub struct InputState {
    /// Currently pressed keys
    pub keys_pressed: HashSet<KeyCode>,
    /// Keys that went down since the last frame
    pub keys_just_pressed: HashSet<KeyCode>,
    /// Currently pressed mouse buttons
    pub buttons_pressed: HashSet<MouseButton>,
    /// Mouse buttons that went down since the last frame
    pub buttons_just_pressed: HashSet<MouseButton>,
    /// Mouse delta since last frame (x, y)
    pub mouse_delta: (f32, f32),
    /// Mouse position in window coordinates
    pub mouse_position: (f32, f32),
    /// Whether the mouse is captured for camera control
    pub mouse_captured: bool,
    /// Touch events received since the last frame, in arrival order
    pub touches: Vec<TouchInput>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn any_key_pressed(&self, keys: &[KeyCode]) -> bool {
        keys.iter().any(|key| self.is_key_pressed(*key))
    }

    /// Check if a key went down this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    pub fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_just_pressed.contains(&button)
    }

    /// Reset per-frame state (call once every layer has seen the frame)
    pub fn reset_frame(&mut self) {
        self.mouse_delta = (0.0, 0.0);
        self.keys_just_pressed.clear();
        self.buttons_just_pressed.clear();
        self.touches.clear();
    }

    /// Handle key press
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_pressed.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Handle key release
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        if self.buttons_pressed.insert(button) {
            self.buttons_just_pressed.insert(button);
        }
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons_pressed.remove(&button);
    }

    /// Drop held keys and buttons, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
    }

    /// Add mouse delta movement
    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        if self.mouse_captured {
            self.mouse_delta.0 += dx;
            self.mouse_delta.1 += dy;
        }
    }

    /// Update mouse position
    pub fn set_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = (x, y);
    }

    pub fn push_touch(&mut self, id: u64, phase: TouchPhase, x: f32, y: f32) {
        self.touches.push(TouchInput {
            id,
            phase,
            position: (x, y),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_edges_last_one_frame() {
        let mut input = InputState::new();
        input.press_key(KeyCode::KeyW);
        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_just_pressed(KeyCode::KeyW));

        input.reset_frame();
        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));

        // Holding the key does not produce a second edge
        input.press_key(KeyCode::KeyW);
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_mouse_delta_only_while_captured() {
        let mut input = InputState::new();
        input.add_mouse_delta(4.0, 2.0);
        assert_eq!(input.mouse_delta, (0.0, 0.0));

        input.mouse_captured = true;
        input.add_mouse_delta(4.0, 2.0);
        input.add_mouse_delta(1.0, -1.0);
        assert_eq!(input.mouse_delta, (5.0, 1.0));

        input.reset_frame();
        assert_eq!(input.mouse_delta, (0.0, 0.0));
    }

    #[test]
    fn test_touches_are_per_frame() {
        let mut input = InputState::new();
        input.push_touch(7, TouchPhase::Started, 10.0, 20.0);
        input.push_touch(7, TouchPhase::Moved, 12.0, 20.0);
        assert_eq!(input.touches.len(), 2);
        assert_eq!(input.touches[1].position, (12.0, 20.0));

        input.reset_frame();
        assert!(input.touches.is_empty());
    }
}
