//! Tessera - a color picker button and a scalable image label.
//!
//! This is the widget crate; it re-exports the core and render crates so
//! hosts only need one dependency.
//!
//! # Example
//!
//! ```
//! use tessera::render::{Color, DisplayList, Size};
//! use tessera::widget::widgets::ColorPickerButton;
//! use tessera::widget::{Widget, paint_widget};
//!
//! let mut button = ColorPickerButton::new(Some(Color::from_rgb8(0, 255, 0)));
//! button.resize(Size::new(32.0, 24.0));
//!
//! let mut list = DisplayList::new();
//! paint_widget(&mut button, &mut list);
//! assert_eq!(list.fills().count(), 1);
//! ```

pub use tessera_core::*;

pub mod config;
pub mod widget;

/// Graphics types, images and the painter abstraction.
pub mod render {
    pub use tessera_render::*;
}
