use std::path::PathBuf;

use log::{debug, trace, warn};

use crate::color::Color;
use crate::error::Error;
use crate::framebuffer::FrameBuffer;
use crate::input::{MouseInput, MouseState};
use crate::shape::{Hoverable, Shape};
use crate::text::{Alignment, Text, TextRenderer};
use crate::vec::Vec2;

pub type Callback = Box<dyn FnMut(MouseState)>;

/// Which input transitions make a button fire its callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Behaviour {
    /// Every update.
    #[default]
    OnAll,
    /// Hovering and the trigger went down this frame.
    OnPress,
    /// Hovering and the trigger came up this frame.
    OnRelease,
    /// Hovering and the mouse state changed in any way.
    OnPressAndRelease,
    /// Hovering and the trigger is down, every frame.
    OnHold,
    /// Hovering, whatever the buttons are doing.
    OnHover,
}

impl TryFrom<u8> for Behaviour {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Error> {
        Ok(match code {
            0 => Self::OnAll,
            1 => Self::OnPress,
            2 => Self::OnRelease,
            3 => Self::OnPressAndRelease,
            4 => Self::OnHold,
            5 => Self::OnHover,
            _ => return Err(Error::UnsupportedBehaviour(code)),
        })
    }
}

/// A pressable button built on top of any hoverable shape.
///
/// Call [`Button::update`] once per frame with the current input, then
/// [`Button::draw`]. Press and release are detected by comparing the input
/// against what the previous update saw.
pub struct Button<S> {
    shape: S,
    label: Text,
    callback: Callback,
    trigger: MouseState,
    behaviour: Behaviour,
    prev_state: MouseState,
    prev_location: Vec2,
}

impl<S: Hoverable> Button<S> {
    pub fn new(shape: S, font: impl Into<PathBuf>) -> Self {
        let label = Text::new("", shape.pos(), font);

        Self {
            shape,
            label,
            callback: Box::new(|_| warn!("button callback not configured")),
            trigger: MouseState::LeftClick,
            behaviour: Behaviour::default(),
            prev_state: MouseState::NoClick,
            prev_location: Vec2::ZERO,
        }
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut S {
        &mut self.shape
    }

    pub fn label(&self) -> &Text {
        &self.label
    }

    pub fn trigger(&self) -> MouseState {
        self.trigger
    }

    pub fn behaviour(&self) -> Behaviour {
        self.behaviour
    }

    /// Receives the mouse state that caused the button to fire.
    pub fn set_callback(&mut self, callback: impl FnMut(MouseState) + 'static) -> &mut Self {
        self.callback = Box::new(callback);
        self
    }

    pub fn set_trigger(&mut self, trigger: MouseState) -> &mut Self {
        self.trigger = trigger;
        self
    }

    pub fn set_behaviour(&mut self, behaviour: Behaviour) -> &mut Self {
        self.behaviour = behaviour;
        self
    }

    /// Samples `input` and fires the callback if the configured behaviour
    /// matches. Returns whether it fired.
    pub fn update(&mut self, input: &impl MouseInput) -> bool {
        let state = input.mouse_button_state();
        let location = input.mouse_location();
        let hovering = self.shape.is_within(location);

        trace!("button update: {state:?} at {location:?}, hovering: {hovering}");

        let fire = match self.behaviour {
            Behaviour::OnAll => true,
            Behaviour::OnHover => hovering,
            Behaviour::OnPress => {
                hovering && self.prev_state == MouseState::NoClick && state == self.trigger
            }
            Behaviour::OnRelease => {
                hovering && self.prev_state == self.trigger && state == MouseState::NoClick
            }
            Behaviour::OnPressAndRelease => hovering && self.prev_state != state,
            Behaviour::OnHold => hovering && state == self.trigger,
        };

        if fire {
            debug!("button fired ({:?}, {state:?})", self.behaviour);
            (self.callback)(state);
        }

        self.prev_state = state;
        self.prev_location = location;

        fire
    }

    /// Whether the cursor was over the button at the last update.
    pub fn is_hovering(&self) -> bool {
        self.shape.is_within(self.prev_location)
    }

    pub fn move_by(&mut self, mov: Vec2) {
        self.shape.move_by(mov);
        self.label.move_by(mov);
    }

    /// Draws the shape, then the label re-anchored on the shape's centre.
    pub fn draw(&mut self, buf: &mut FrameBuffer) {
        self.shape.draw(buf);
        self.label.set_pos(self.shape.centre());
        self.label.draw(buf);
    }

    pub fn draw_with(&mut self, buf: &mut FrameBuffer, renderer: &dyn TextRenderer) {
        self.shape.draw(buf);
        self.label.set_pos(self.shape.centre());
        self.label.draw_with(buf, renderer);
    }

    pub fn set_label_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.label.set_text(text);
        self
    }

    pub fn set_label_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.label.set_alignment(alignment);
        self
    }

    /// Only has an effect with [`Alignment::Custom`].
    pub fn set_label_offset(&mut self, offset: Vec2) -> &mut Self {
        self.label.set_offset(offset);
        self
    }

    /// Overwritten by the next draw, which re-centres the label.
    pub fn set_label_pos(&mut self, pos: Vec2) -> &mut Self {
        self.label.set_pos(pos);
        self
    }

    pub fn set_label_color(&mut self, color: Color) -> &mut Self {
        self.label.set_color(color);
        self
    }

    pub fn set_label_font(&mut self, font: impl Into<PathBuf>) -> &mut Self {
        self.label.set_font(font);
        self
    }

    pub fn set_label_dpi(&mut self, dpi: f64) -> &mut Self {
        self.label.set_dpi(dpi);
        self
    }

    pub fn set_label_size(&mut self, size: f64) -> &mut Self {
        self.label.set_size(size);
        self
    }

    pub fn set_label_spacing(&mut self, spacing: f64) -> &mut Self {
        self.label.set_spacing(spacing);
        self
    }

    pub fn set_label_mask_size(&mut self, width: u32, height: u32) -> &mut Self {
        self.label.set_mask_size(width, height);
        self
    }
}
