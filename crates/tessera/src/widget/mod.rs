//! Widget layer.
//!
//! Widgets own their state and are driven by the host through explicit
//! calls: [`WidgetEvent`]s for input and geometry, [`paint_widget`] (or
//! [`Widget::paint`] with a [`PaintContext`]) for drawing.

mod base;
mod events;
mod geometry;
mod traits;
pub mod widgets;

pub use base::WidgetBase;
pub use events::{
    EnterEvent, EventBase, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent,
    MouseReleaseEvent, ResizeEvent, WidgetEvent,
};
pub use geometry::SizeHint;
pub use traits::{PaintContext, Widget, paint_widget};
