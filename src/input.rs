use std::collections::HashSet;

use sdl2::{event::Event, keyboard::Keycode};

/// The current state of the keyboard.
#[derive(Default)]
pub struct KeyboardState {
    pub down: HashSet<Keycode>,
    pub pressed: HashSet<Keycode>,
    pub released: HashSet<Keycode>,
}

impl KeyboardState {
    /// Clears the keys that were pressed or released during the last frame.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    /// Records a key event. Other events are ignored.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.press(*keycode),
            Event::KeyUp {
                keycode: Some(keycode),
                repeat: false,
                ..
            } => self.release(*keycode),
            _ => {}
        }
    }

    pub fn press(&mut self, keycode: Keycode) {
        self.down.insert(keycode);
        self.pressed.insert(keycode);
    }

    pub fn release(&mut self, keycode: Keycode) {
        self.down.remove(&keycode);
        self.released.insert(keycode);
    }

    pub fn is_down(&self, keycode: Keycode) -> bool {
        self.down.contains(&keycode)
    }

    pub fn was_pressed(&self, keycode: Keycode) -> bool {
        self.pressed.contains(&keycode)
    }

    /// Whether the user asked to close the window from the keyboard.
    pub fn close_requested(&self) -> bool {
        self.is_down(Keycode::Escape)
    }
}

/// Context handed to a lesson once per frame.
pub struct FrameContext<'a> {
    pub keyboard: &'a KeyboardState,
    /// Seconds since the previous frame.
    pub delta_time: f32,
    /// Seconds since the render loop started.
    pub elapsed: f32,
}

impl<'a> FrameContext<'a> {
    pub fn new(keyboard: &'a KeyboardState, delta_time: f32, elapsed: f32) -> Self {
        Self {
            keyboard,
            delta_time,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_requests_close() {
        let mut keyboard = KeyboardState::default();
        assert!(!keyboard.close_requested());
        keyboard.press(Keycode::Escape);
        assert!(keyboard.close_requested());
        keyboard.release(Keycode::Escape);
        assert!(!keyboard.close_requested());
    }

    #[test]
    fn test_edges_clear_between_frames() {
        let mut keyboard = KeyboardState::default();
        keyboard.press(Keycode::Up);
        assert!(keyboard.was_pressed(Keycode::Up));
        assert!(keyboard.is_down(Keycode::Up));

        keyboard.begin_frame();
        assert!(!keyboard.was_pressed(Keycode::Up));
        assert!(keyboard.is_down(Keycode::Up));

        keyboard.release(Keycode::Up);
        assert!(keyboard.released.contains(&Keycode::Up));
        keyboard.begin_frame();
        assert!(keyboard.released.is_empty());
        assert!(keyboard.down.is_empty());
    }
}
