//! Concrete widgets.
//!
//! - [`ColorPickerButton`] - a color swatch button backed by a host [`ColorChooser`]
//! - [`ScalableImageLabel`] - a static or animated image scaled to fit

mod color_dialog;
mod color_picker_button;
mod scalable_image_label;

pub use color_dialog::{
    ColorChooser, ColorDialogOptions, DEFAULT_DIALOG_TITLE, DismissingChooser,
};
pub use color_picker_button::{
    ButtonVisualState, ColorPickerButton, EMPTY_BORDER_INSET, HOVER_DARKER_FACTOR,
    PRESSED_LIGHTER_FACTOR, TEXT_BRIGHTNESS_THRESHOLD,
};
pub use scalable_image_label::{ScalableImageLabel, ScaledRender};
