use crate::vec::Vec2;

/// Which mouse button, if any, is held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseState {
    #[default]
    NoClick,
    LeftClick,
    MiddleClick,
    RightClick,
}

/// Source of mouse input, polled once per update.
pub trait MouseInput {
    fn mouse_button_state(&self) -> MouseState;
    fn mouse_location(&self) -> Vec2;
}

/// A captured frame of mouse input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputSnapshot {
    pub state: MouseState,
    pub location: Vec2,
}

impl InputSnapshot {
    pub const fn new(state: MouseState, location: Vec2) -> Self {
        Self { state, location }
    }

    pub fn capture(input: &impl MouseInput) -> Self {
        Self::new(input.mouse_button_state(), input.mouse_location())
    }
}

impl MouseInput for InputSnapshot {
    fn mouse_button_state(&self) -> MouseState {
        self.state
    }

    fn mouse_location(&self) -> Vec2 {
        self.location
    }
}
