//! Color picker button widget implementation.
//!
//! This module provides [`ColorPickerButton`], a button that shows a color
//! swatch, asks the host's [`ColorChooser`] for a new color when clicked, and
//! reverts to its construction-time color on a secondary click.
//!
//! # Example
//!
//! ```
//! use tessera::widget::widgets::{ColorDialogOptions, ColorPickerButton};
//! use tessera_render::Color;
//!
//! let mut button = ColorPickerButton::new(Some(Color::from_rgb8(0, 255, 0)))
//!     .with_chooser(|_initial: Option<Color>, _options: &ColorDialogOptions| {
//!         Some(Color::from_rgb8(255, 0, 0))
//!     });
//!
//! button.color_changed.connect(|(old, new)| {
//!     println!("color changed from {:?} to {:?}", old, new);
//! });
//!
//! button.choose_color();
//! assert_eq!(button.color(), Some(Color::from_rgb8(255, 0, 0)));
//! ```

use tessera_core::Signal;
use tessera_core::logging::targets;
use tessera_render::{Alignment, Color, Point, RenderHints};

use super::color_dialog::{ColorChooser, ColorDialogOptions, DismissingChooser};
use crate::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, PaintContext, SizeHint,
    Widget, WidgetBase, WidgetEvent,
};

/// HSV value factor applied to the swatch while hovered (about 15% darker).
pub const HOVER_DARKER_FACTOR: u32 = 115;

/// HSV value factor applied to the swatch while pressed (about 15% lighter).
pub const PRESSED_LIGHTER_FACTOR: u32 = 115;

/// Swatch brightness above which the overlay text is drawn black.
pub const TEXT_BRIGHTNESS_THRESHOLD: u8 = 128;

/// Inset of the outline drawn when no color is set.
pub const EMPTY_BORDER_INSET: f32 = 2.0;

type SelectionCallback = Box<dyn Fn(Color) + Send + Sync>;

// ============================================================================
// ButtonVisualState
// ============================================================================

/// Presentational state of a [`ColorPickerButton`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVisualState {
    /// Pointer outside, nothing pressed.
    #[default]
    Normal,
    /// Pointer over the button.
    Hovered,
    /// Primary button held after pressing inside the button.
    Pressed,
}

// ============================================================================
// ColorPickerButton
// ============================================================================

/// A button widget that displays and edits a color.
///
/// Clicks act on release: a primary press followed by a release inside the
/// button opens the chooser, and a secondary press and release inside it
/// restores the construction-time color. Releasing outside cancels either
/// gesture. Disabling the button returns it to the normal state.
///
/// # Signals
///
/// - `color_changed((old, new))`: Emitted when the color actually changes
/// - `clicked()`: Emitted on a primary click, before the chooser opens
/// - `visual_state_changed(state)`: Emitted on hover/press transitions
pub struct ColorPickerButton {
    base: WidgetBase,

    /// Current color; `None` means unset.
    color: Option<Color>,

    /// Color restored by a secondary click.
    initial_color: Option<Color>,

    /// Fixed overlay text; the RGBA tuple is shown when absent.
    label: Option<String>,

    state: ButtonVisualState,

    /// Secondary button pressed inside the button and not yet released.
    secondary_pressed: bool,

    chooser: Box<dyn ColorChooser>,
    dialog_options: ColorDialogOptions,
    on_color_selected: Option<SelectionCallback>,

    /// Signal emitted with `(old, new)` when the color changes.
    pub color_changed: Signal<(Option<Color>, Option<Color>)>,

    /// Signal emitted when the button is clicked with the primary button.
    pub clicked: Signal<()>,

    /// Signal emitted when the visual state changes.
    pub visual_state_changed: Signal<ButtonVisualState>,
}

impl ColorPickerButton {
    /// Create a new button showing `color`, which is also the color a
    /// secondary click reverts to.
    pub fn new(color: Option<Color>) -> Self {
        Self {
            base: WidgetBase::new(),
            color,
            initial_color: color,
            label: None,
            state: ButtonVisualState::Normal,
            secondary_pressed: false,
            chooser: Box::new(DismissingChooser),
            dialog_options: ColorDialogOptions::default(),
            on_color_selected: None,
            color_changed: Signal::new(),
            clicked: Signal::new(),
            visual_state_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Show fixed text instead of the RGBA tuple.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Install the chooser used on primary click.
    pub fn with_chooser(mut self, chooser: impl ColorChooser + 'static) -> Self {
        self.chooser = Box::new(chooser);
        self
    }

    /// Set the callback invoked with a confirmed selection, before the color
    /// is applied.
    pub fn with_on_color_selected<F>(mut self, callback: F) -> Self
    where
        F: Fn(Color) + Send + Sync + 'static,
    {
        self.on_color_selected = Some(Box::new(callback));
        self
    }

    /// Override how the chooser dialog is presented.
    pub fn with_dialog_options(mut self, options: ColorDialogOptions) -> Self {
        self.dialog_options = options;
        self
    }

    // =========================================================================
    // Color
    // =========================================================================

    /// Get the current color.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Get the current color as RGB, `(0, 0, 0)` when unset.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        self.color.map(Color::rgb).unwrap_or((0, 0, 0))
    }

    /// The color a secondary click reverts to.
    pub fn initial_color(&self) -> Option<Color> {
        self.initial_color
    }

    /// Set the current color.
    ///
    /// Emits `color_changed` and requests a repaint only when the value
    /// actually changes.
    pub fn set_color(&mut self, color: Option<Color>) {
        if self.color == color {
            return;
        }
        let old = std::mem::replace(&mut self.color, color);
        tracing::debug!(
            target: targets::COLOR_PICKER,
            old = ?old,
            new = ?color,
            "color changed"
        );
        self.color_changed.emit((old, color));
        self.base.update();
    }

    /// Revert to the construction-time color.
    pub fn reset_color(&mut self) {
        self.set_color(self.initial_color);
    }

    /// Run the chooser and apply a confirmed selection.
    ///
    /// Returns the selected color, or `None` if the dialog was dismissed.
    pub fn choose_color(&mut self) -> Option<Color> {
        let selected = self.chooser.choose(self.color, &self.dialog_options)?;
        if let Some(callback) = &self.on_color_selected {
            callback(selected);
        }
        self.set_color(Some(selected));
        Some(selected)
    }

    // =========================================================================
    // Label
    // =========================================================================

    /// Get the fixed label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set or clear the fixed label.
    pub fn set_label(&mut self, label: Option<String>) {
        if self.label != label {
            self.label = label;
            self.base.update();
        }
    }

    // =========================================================================
    // Visual State
    // =========================================================================

    /// Get the current visual state.
    pub fn visual_state(&self) -> ButtonVisualState {
        self.state
    }

    fn set_visual_state(&mut self, state: ButtonVisualState) {
        if self.state == state {
            return;
        }
        tracing::trace!(
            target: targets::COLOR_PICKER,
            from = ?self.state,
            to = ?state,
            "visual state changed"
        );
        self.state = state;
        self.visual_state_changed.emit(state);
        self.base.update();
    }

    /// The swatch fill for the current state, or `None` when unset.
    pub fn swatch_color(&self) -> Option<Color> {
        let color = self.color?;
        Some(match self.state {
            ButtonVisualState::Normal => color,
            ButtonVisualState::Hovered => color.darker(HOVER_DARKER_FACTOR),
            ButtonVisualState::Pressed => color.lighter(PRESSED_LIGHTER_FACTOR),
        })
    }

    /// The overlay text, or `None` when nothing should be drawn.
    pub fn display_text(&self) -> Option<String> {
        match (&self.label, self.color) {
            (Some(label), _) => Some(label.clone()),
            (None, Some(color)) => Some(color.to_string()),
            (None, None) => None,
        }
    }

    /// Color of the overlay text: black on bright swatches, white on dark
    /// ones, black when unset.
    pub fn text_color(&self) -> Color {
        match self.color {
            Some(color) if color.value() <= TEXT_BRIGHTNESS_THRESHOLD => Color::WHITE,
            _ => Color::BLACK,
        }
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        // No buttons down also ends a press whose release never arrived.
        if event.no_buttons() {
            self.secondary_pressed = false;
            self.set_visual_state(ButtonVisualState::Hovered);
        }
        false
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if !self.base.contains_point(event.local_pos) {
            return false;
        }
        match event.button {
            MouseButton::Left => {
                self.set_visual_state(ButtonVisualState::Pressed);
                true
            }
            MouseButton::Right => {
                self.secondary_pressed = true;
                true
            }
            MouseButton::Middle => false,
        }
    }

    fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        let inside = self.base.contains_point(event.local_pos);
        match event.button {
            MouseButton::Left if self.state == ButtonVisualState::Pressed => {
                if inside {
                    self.set_visual_state(ButtonVisualState::Hovered);
                    self.clicked.emit(());
                    self.choose_color();
                } else {
                    self.set_visual_state(ButtonVisualState::Normal);
                }
                true
            }
            MouseButton::Right if self.secondary_pressed => {
                self.secondary_pressed = false;
                if inside {
                    self.reset_color();
                }
                true
            }
            _ => false,
        }
    }

    fn handle_enter(&mut self, _pos: Point) {
        self.base.set_hovered(true);
        if self.state == ButtonVisualState::Normal {
            self.set_visual_state(ButtonVisualState::Hovered);
        }
    }

    fn handle_leave(&mut self) {
        self.base.set_hovered(false);
        self.secondary_pressed = false;
        self.set_visual_state(ButtonVisualState::Normal);
    }
}

impl Widget for ColorPickerButton {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::from_dimensions(32.0, 24.0).with_minimum_dimensions(24.0, 18.0)
    }

    fn paint(&self, ctx: &mut PaintContext<'_>) {
        let rect = ctx.rect();
        let painter = ctx.painter();
        let hints = RenderHints {
            antialiasing: true,
            ..painter.render_hints()
        };
        painter.set_render_hints(hints);

        match self.swatch_color() {
            Some(fill) => painter.fill_rect(rect, fill),
            None => {
                let inset = EMPTY_BORDER_INSET;
                painter.stroke_rect(rect.adjusted(inset, inset, -inset, -inset), Color::BLACK, 1.0);
            }
        }

        if let Some(text) = self.display_text() {
            painter.draw_text(rect, &text, self.text_color(), Alignment::CENTER);
        }
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.base.set_enabled(enabled);
        if !enabled {
            self.secondary_pressed = false;
            self.set_visual_state(ButtonVisualState::Normal);
        }
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        match event {
            WidgetEvent::Leave(_) => {
                self.handle_leave();
                return false;
            }
            WidgetEvent::Resize(e) => {
                self.base.set_size(e.new_size);
                return false;
            }
            _ => {}
        }
        if !self.base.is_enabled() {
            return false;
        }

        let handled = match event {
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::Enter(e) => {
                self.handle_enter(e.local_pos);
                false
            }
            WidgetEvent::Leave(_) | WidgetEvent::Resize(_) => false,
        };

        if handled {
            event.accept();
        }
        handled
    }
}

impl std::fmt::Debug for ColorPickerButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorPickerButton")
            .field("color", &self.color)
            .field("initial_color", &self.initial_color)
            .field("label", &self.label)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// Thread safety assertion
static_assertions::assert_impl_all!(ColorPickerButton: Send, Sync);
