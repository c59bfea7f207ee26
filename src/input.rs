use bitflags::bitflags;

bitflags! {
    /// Directional keys currently held down.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HeldKeys: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl HeldKeys {
    /// Per-tick `(delta_x, delta_y)` in degrees. Opposite keys cancel out.
    pub fn rotation_delta(self, step: f32) -> (f32, f32) {
        let mut delta = (0.0, 0.0);
        if self.contains(Self::UP) {
            delta.0 -= step;
        }
        if self.contains(Self::DOWN) {
            delta.0 += step;
        }
        if self.contains(Self::LEFT) {
            delta.1 -= step;
        }
        if self.contains(Self::RIGHT) {
            delta.1 += step;
        }
        delta
    }
}

/// Keys with a discrete key-down meaning.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    /// Resets the rotation.
    Space,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputEvent {
    /// The window was closed.
    Quit,
    KeyDown(Key),
}

/// Source of input for one session.
pub trait InputSource {
    /// Appends every event received since the last call.
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    /// Directional keys held at the time of the call.
    fn held_keys(&self) -> HeldKeys;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_combine_additively() {
        assert_eq!((HeldKeys::UP | HeldKeys::LEFT).rotation_delta(2.0), (-2.0, -2.0));
        assert_eq!((HeldKeys::DOWN | HeldKeys::RIGHT).rotation_delta(2.0), (2.0, 2.0));
        assert_eq!((HeldKeys::UP | HeldKeys::DOWN).rotation_delta(2.0), (0.0, 0.0));
        assert_eq!(HeldKeys::empty().rotation_delta(2.0), (0.0, 0.0));
    }
}
