//! The color chooser seam.
//!
//! [`ColorPickerButton`](super::ColorPickerButton) does not draw a dialog of
//! its own. When the user clicks it, it asks a [`ColorChooser`] supplied by
//! the host, which typically runs a native or toolkit color dialog modally
//! and returns the user's choice.
//!
//! Any `FnMut(Option<Color>, &ColorDialogOptions) -> Option<Color>` closure
//! is a chooser:
//!
//! ```
//! use tessera::widget::widgets::{ColorChooser, ColorDialogOptions};
//! use tessera_render::Color;
//!
//! let mut chooser = |_initial: Option<Color>, _options: &ColorDialogOptions| {
//!     Some(Color::from_rgb8(255, 0, 0))
//! };
//! let picked = chooser.choose(None, &ColorDialogOptions::default());
//! assert_eq!(picked, Some(Color::from_rgb8(255, 0, 0)));
//! ```

use tessera_core::logging::targets;
use tessera_render::Color;

/// Title used for the color dialog.
pub const DEFAULT_DIALOG_TITLE: &str = "Select a color";

/// How the host should present the color dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDialogOptions {
    /// Window title of the dialog.
    pub title: String,
    /// Whether the dialog should let the user edit the alpha channel.
    pub show_alpha_channel: bool,
}

impl Default for ColorDialogOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_DIALOG_TITLE.to_owned(),
            show_alpha_channel: true,
        }
    }
}

/// A modal color picker provided by the host.
pub trait ColorChooser: Send + Sync {
    /// Ask the user for a color, starting from `initial`.
    ///
    /// Returns `None` if the user dismissed the dialog.
    fn choose(&mut self, initial: Option<Color>, options: &ColorDialogOptions) -> Option<Color>;
}

impl<F> ColorChooser for F
where
    F: FnMut(Option<Color>, &ColorDialogOptions) -> Option<Color> + Send + Sync,
{
    fn choose(&mut self, initial: Option<Color>, options: &ColorDialogOptions) -> Option<Color> {
        self(initial, options)
    }
}

/// A chooser that always reports the dialog as dismissed.
///
/// Used until the host installs a real chooser.
#[derive(Debug, Clone, Copy, Default)]
pub struct DismissingChooser;

impl ColorChooser for DismissingChooser {
    fn choose(&mut self, _initial: Option<Color>, options: &ColorDialogOptions) -> Option<Color> {
        tracing::debug!(
            target: targets::COLOR_PICKER,
            title = %options.title,
            "no color chooser installed, treating dialog as dismissed"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ColorDialogOptions::default();
        assert_eq!(options.title, "Select a color");
        assert!(options.show_alpha_channel);
    }

    #[test]
    fn test_dismissing_chooser() {
        let mut chooser = DismissingChooser;
        assert_eq!(
            chooser.choose(Some(Color::WHITE), &ColorDialogOptions::default()),
            None
        );
    }

    #[test]
    fn test_closure_receives_initial_color() {
        let mut seen = None;
        {
            let mut chooser = |initial: Option<Color>, _: &ColorDialogOptions| {
                seen = initial;
                None
            };
            chooser.choose(Some(Color::BLACK), &ColorDialogOptions::default());
        }
        assert_eq!(seen, Some(Color::BLACK));
    }
}
