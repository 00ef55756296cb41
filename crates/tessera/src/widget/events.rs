//! Widget-specific event types.
//!
//! The host delivers pointer and geometry changes to a widget by wrapping
//! them in a [`WidgetEvent`] and calling
//! [`Widget::event`](super::Widget::event).
//!
//! ```
//! use tessera::widget::{MouseButton, MousePressEvent, WidgetEvent};
//! use tessera_render::Point;
//!
//! let mut event = WidgetEvent::MousePress(MousePressEvent::new(
//!     MouseButton::Left,
//!     Point::new(4.0, 4.0),
//! ));
//! assert!(!event.is_accepted());
//! event.accept();
//! assert!(event.is_accepted());
//! ```

use tessera_render::{Point, Size};

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

impl MouseButton {
    /// The bit this button occupies in a button mask.
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

/// Common data for all widget events.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventBase {
    accepted: bool,
}

impl EventBase {
    /// Create a new event base.
    pub fn new() -> Self {
        Self { accepted: false }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Accept the event, preventing further propagation.
    pub fn accept(&mut self) {
        self.accepted = true;
    }

    /// Ignore the event, allowing further propagation.
    pub fn ignore(&mut self) {
        self.accepted = false;
    }
}

/// Resize event, sent when a widget's size changes.
#[derive(Debug, Clone, Copy)]
pub struct ResizeEvent {
    /// Base event data.
    pub base: EventBase,
    /// The old size of the widget.
    pub old_size: Size,
    /// The new size of the widget.
    pub new_size: Size,
}

impl ResizeEvent {
    /// Create a new resize event.
    pub fn new(old_size: Size, new_size: Size) -> Self {
        Self {
            base: EventBase::new(),
            old_size,
            new_size,
        }
    }
}

/// Mouse press event.
#[derive(Debug, Clone, Copy)]
pub struct MousePressEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MousePressEvent {
    /// Create a new mouse press event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse release event.
#[derive(Debug, Clone, Copy)]
pub struct MouseReleaseEvent {
    /// Base event data.
    pub base: EventBase,
    /// The button that was released.
    pub button: MouseButton,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a new mouse release event.
    pub fn new(button: MouseButton, local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            button,
            local_pos,
        }
    }
}

/// Mouse move event.
#[derive(Debug, Clone, Copy)]
pub struct MouseMoveEvent {
    /// Base event data.
    pub base: EventBase,
    /// Position in widget-local coordinates.
    pub local_pos: Point,
    /// Mouse buttons currently held, as a mask of [`MouseButton::mask`] bits.
    pub buttons: u8,
}

impl MouseMoveEvent {
    /// Create a new mouse move event.
    pub fn new(local_pos: Point, buttons: u8) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
            buttons,
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        (self.buttons & button.mask()) != 0
    }

    /// Check if no button is held.
    pub fn no_buttons(&self) -> bool {
        self.buttons == 0
    }
}

/// Enter event, sent when the mouse enters the widget area.
#[derive(Debug, Clone, Copy)]
pub struct EnterEvent {
    /// Base event data.
    pub base: EventBase,
    /// The position where the mouse entered.
    pub local_pos: Point,
}

impl EnterEvent {
    /// Create a new enter event.
    pub fn new(local_pos: Point) -> Self {
        Self {
            base: EventBase::new(),
            local_pos,
        }
    }
}

/// Leave event, sent when the mouse leaves the widget area.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaveEvent {
    /// Base event data.
    pub base: EventBase,
}

impl LeaveEvent {
    /// Create a new leave event.
    pub fn new() -> Self {
        Self {
            base: EventBase::new(),
        }
    }
}

/// Unified widget event type.
#[derive(Debug, Clone, Copy)]
pub enum WidgetEvent {
    /// Resize event.
    Resize(ResizeEvent),
    /// Mouse press event.
    MousePress(MousePressEvent),
    /// Mouse release event.
    MouseRelease(MouseReleaseEvent),
    /// Mouse move event.
    MouseMove(MouseMoveEvent),
    /// Mouse enter event.
    Enter(EnterEvent),
    /// Mouse leave event.
    Leave(LeaveEvent),
}

impl WidgetEvent {
    fn base(&self) -> &EventBase {
        match self {
            Self::Resize(e) => &e.base,
            Self::MousePress(e) => &e.base,
            Self::MouseRelease(e) => &e.base,
            Self::MouseMove(e) => &e.base,
            Self::Enter(e) => &e.base,
            Self::Leave(e) => &e.base,
        }
    }

    fn base_mut(&mut self) -> &mut EventBase {
        match self {
            Self::Resize(e) => &mut e.base,
            Self::MousePress(e) => &mut e.base,
            Self::MouseRelease(e) => &mut e.base,
            Self::MouseMove(e) => &mut e.base,
            Self::Enter(e) => &mut e.base,
            Self::Leave(e) => &mut e.base,
        }
    }

    /// Check if the event has been accepted.
    pub fn is_accepted(&self) -> bool {
        self.base().is_accepted()
    }

    /// Accept the event.
    pub fn accept(&mut self) {
        self.base_mut().accept();
    }

    /// Ignore the event.
    pub fn ignore(&mut self) {
        self.base_mut().ignore();
    }

    /// Check if this event should propagate to parent widgets.
    ///
    /// Resize, enter and leave are specific to one widget; pointer input
    /// propagates while unaccepted.
    pub fn should_propagate(&self) -> bool {
        match self {
            Self::Resize(_) | Self::Enter(_) | Self::Leave(_) => false,
            Self::MousePress(_) | Self::MouseRelease(_) | Self::MouseMove(_) => {
                !self.is_accepted()
            }
        }
    }
}
