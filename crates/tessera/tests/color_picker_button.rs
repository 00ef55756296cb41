//! Tests for the color picker button driven through widget events.

use std::sync::Arc;

use parking_lot::Mutex;

use tessera::render::{Color, DisplayList, DrawCommand, Point, Rect, Size};
use tessera::widget::widgets::{
    ButtonVisualState, ColorDialogOptions, ColorPickerButton, DEFAULT_DIALOG_TITLE,
};
use tessera::widget::{
    EnterEvent, LeaveEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    ResizeEvent, Widget, WidgetEvent, paint_widget,
};

const GREEN: Color = Color::from_rgb8(0, 255, 0);
const RED: Color = Color::from_rgb8(255, 0, 0);

const INSIDE: Point = Point::new(10.0, 10.0);
const OUTSIDE: Point = Point::new(100.0, 10.0);

fn sized(button: ColorPickerButton) -> ColorPickerButton {
    let mut button = button;
    button.resize(Size::new(40.0, 20.0));
    button
}

fn record_changes(button: &ColorPickerButton) -> Arc<Mutex<Vec<(Option<Color>, Option<Color>)>>> {
    let changes = Arc::new(Mutex::new(Vec::new()));
    let changes_clone = changes.clone();
    button
        .color_changed
        .connect(move |change| changes_clone.lock().push(*change));
    changes
}

fn press(button: &mut ColorPickerButton, which: MouseButton, pos: Point) -> bool {
    button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(which, pos)))
}

fn release(button: &mut ColorPickerButton, which: MouseButton, pos: Point) -> bool {
    button.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(which, pos)))
}

fn click(button: &mut ColorPickerButton, which: MouseButton) {
    press(button, which, INSIDE);
    release(button, which, INSIDE);
}

fn hover(button: &mut ColorPickerButton) {
    button.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(INSIDE, 0)));
}

fn leave(button: &mut ColorPickerButton) {
    button.event(&mut WidgetEvent::Leave(LeaveEvent::new()));
}

fn paint(button: &mut ColorPickerButton) -> DisplayList {
    let mut list = DisplayList::new();
    paint_widget(button, &mut list);
    list
}

#[test]
fn test_set_color_then_secondary_click_restores_initial() {
    let mut button = sized(ColorPickerButton::new(Some(GREEN)));
    let changes = record_changes(&button);

    button.set_color(Some(RED));
    assert_eq!(*changes.lock(), vec![(Some(GREEN), Some(RED))]);

    click(&mut button, MouseButton::Right);
    assert_eq!(button.color(), Some(GREEN));
    assert_eq!(
        *changes.lock(),
        vec![(Some(GREEN), Some(RED)), (Some(RED), Some(GREEN))]
    );
}

#[test]
fn test_secondary_click_without_change_emits_nothing() {
    let mut button = sized(ColorPickerButton::new(Some(GREEN)));
    let changes = record_changes(&button);

    click(&mut button, MouseButton::Right);
    assert_eq!(button.color(), Some(GREEN));
    assert!(changes.lock().is_empty());
}

#[test]
fn test_secondary_release_outside_does_not_reset() {
    let mut button = sized(ColorPickerButton::new(Some(GREEN)));
    button.set_color(Some(RED));

    press(&mut button, MouseButton::Right, INSIDE);
    release(&mut button, MouseButton::Right, OUTSIDE);
    assert_eq!(button.color(), Some(RED));
}

#[test]
fn test_primary_click_applies_chosen_color() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_chooser = seen.clone();
    let selected = Arc::new(Mutex::new(Vec::new()));
    let selected_clone = selected.clone();

    let mut button = sized(
        ColorPickerButton::new(Some(GREEN))
            .with_chooser(move |initial: Option<Color>, options: &ColorDialogOptions| {
                seen_chooser.lock().push((initial, options.title.clone()));
                Some(RED)
            })
            .with_on_color_selected(move |color| selected_clone.lock().push(color)),
    );
    let changes = record_changes(&button);
    let clicks = Arc::new(Mutex::new(0));
    let clicks_clone = clicks.clone();
    button.clicked.connect(move |_| *clicks_clone.lock() += 1);

    hover(&mut button);
    assert!(press(&mut button, MouseButton::Left, INSIDE));
    assert_eq!(button.visual_state(), ButtonVisualState::Pressed);
    assert!(release(&mut button, MouseButton::Left, INSIDE));

    assert_eq!(button.visual_state(), ButtonVisualState::Hovered);
    assert_eq!(*clicks.lock(), 1);
    assert_eq!(*seen.lock(), vec![(Some(GREEN), DEFAULT_DIALOG_TITLE.to_owned())]);
    assert_eq!(*selected.lock(), vec![RED]);
    assert_eq!(*changes.lock(), vec![(Some(GREEN), Some(RED))]);
    assert_eq!(button.color(), Some(RED));
}

#[test]
fn test_dismissed_dialog_keeps_color() {
    let mut button = sized(
        ColorPickerButton::new(Some(GREEN))
            .with_chooser(|_: Option<Color>, _: &ColorDialogOptions| None),
    );
    let changes = record_changes(&button);

    click(&mut button, MouseButton::Left);
    assert_eq!(button.color(), Some(GREEN));
    assert!(changes.lock().is_empty());
}

#[test]
fn test_primary_release_outside_cancels() {
    let opened = Arc::new(Mutex::new(0));
    let opened_clone = opened.clone();
    let mut button = sized(ColorPickerButton::new(Some(GREEN)).with_chooser(
        move |_: Option<Color>, _: &ColorDialogOptions| {
            *opened_clone.lock() += 1;
            Some(RED)
        },
    ));

    hover(&mut button);
    press(&mut button, MouseButton::Left, INSIDE);
    release(&mut button, MouseButton::Left, OUTSIDE);

    assert_eq!(button.visual_state(), ButtonVisualState::Normal);
    assert_eq!(*opened.lock(), 0);
    assert_eq!(button.color(), Some(GREEN));
}

#[test]
fn test_visual_state_machine() {
    let mut button = sized(ColorPickerButton::new(Some(GREEN)));
    let states = Arc::new(Mutex::new(Vec::new()));
    let states_clone = states.clone();
    button
        .visual_state_changed
        .connect(move |state| states_clone.lock().push(*state));

    button.event(&mut WidgetEvent::Enter(EnterEvent::new(INSIDE)));
    assert_eq!(button.visual_state(), ButtonVisualState::Hovered);
    assert!(button.is_hovered());

    press(&mut button, MouseButton::Left, INSIDE);
    assert_eq!(button.visual_state(), ButtonVisualState::Pressed);

    // Moving with the button held keeps the press.
    button.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(
        INSIDE,
        MouseButton::Left.mask(),
    )));
    assert_eq!(button.visual_state(), ButtonVisualState::Pressed);

    leave(&mut button);
    assert_eq!(button.visual_state(), ButtonVisualState::Normal);
    assert!(!button.is_hovered());

    assert_eq!(
        *states.lock(),
        vec![
            ButtonVisualState::Hovered,
            ButtonVisualState::Pressed,
            ButtonVisualState::Normal
        ]
    );
}

#[test]
fn test_disabled_button_ignores_input() {
    let mut button = sized(ColorPickerButton::new(Some(GREEN)));
    button.set_enabled(false);

    hover(&mut button);
    assert!(!press(&mut button, MouseButton::Left, INSIDE));
    assert_eq!(button.visual_state(), ButtonVisualState::Normal);
}

#[test]
fn test_free_move_after_lost_release_hovers() {
    let opened = Arc::new(Mutex::new(0));
    let opened_clone = opened.clone();
    let mut button = sized(ColorPickerButton::new(Some(GREEN)).with_chooser(
        move |_: Option<Color>, _: &ColorDialogOptions| {
            *opened_clone.lock() += 1;
            Some(RED)
        },
    ));

    press(&mut button, MouseButton::Left, INSIDE);
    assert_eq!(button.visual_state(), ButtonVisualState::Pressed);

    // The release was delivered elsewhere; the next move has no buttons held.
    hover(&mut button);
    assert_eq!(button.visual_state(), ButtonVisualState::Hovered);

    release(&mut button, MouseButton::Left, INSIDE);
    assert_eq!(*opened.lock(), 0);
    assert_eq!(button.color(), Some(GREEN));
}

#[test]
fn test_press_alone_does_not_open_chooser() {
    let opened = Arc::new(Mutex::new(0));
    let opened_clone = opened.clone();
    let mut button = sized(ColorPickerButton::new(Some(GREEN)).with_chooser(
        move |_: Option<Color>, _: &ColorDialogOptions| {
            *opened_clone.lock() += 1;
            Some(RED)
        },
    ));
    button.set_color(Some(RED));

    press(&mut button, MouseButton::Left, INSIDE);
    press(&mut button, MouseButton::Right, INSIDE);
    assert_eq!(*opened.lock(), 0);
    assert_eq!(button.color(), Some(RED));
}

#[test]
fn test_disabling_hovered_button_resets_state() {
    let mut button = sized(ColorPickerButton::new(Some(RED)));
    hover(&mut button);
    button.event(&mut WidgetEvent::Enter(EnterEvent::new(INSIDE)));
    assert_eq!(button.visual_state(), ButtonVisualState::Hovered);

    button.set_enabled(false);
    assert_eq!(button.visual_state(), ButtonVisualState::Normal);
    let list = paint(&mut button);
    assert_eq!(list.fills().map(|(_, c)| *c).collect::<Vec<_>>(), vec![RED]);

    leave(&mut button);
    assert_eq!(button.visual_state(), ButtonVisualState::Normal);
    assert!(!button.is_hovered());
}

#[test]
fn test_disabled_button_tracks_resize() {
    let mut button = sized(ColorPickerButton::new(Some(RED)));
    button.set_enabled(false);

    button.event(&mut WidgetEvent::Resize(ResizeEvent::new(
        Size::new(40.0, 20.0),
        Size::new(80.0, 30.0),
    )));
    assert_eq!(button.size(), Size::new(80.0, 30.0));
}

#[test]
fn test_paint_tints_swatch_by_state() {
    let mut button = sized(ColorPickerButton::new(Some(RED)));

    let list = paint(&mut button);
    assert_eq!(list.fills().map(|(_, c)| *c).collect::<Vec<_>>(), vec![RED]);

    hover(&mut button);
    let list = paint(&mut button);
    assert_eq!(
        list.fills().map(|(_, c)| *c).collect::<Vec<_>>(),
        vec![Color::from_rgb8(221, 0, 0)]
    );

    press(&mut button, MouseButton::Left, INSIDE);
    let list = paint(&mut button);
    assert_eq!(
        list.fills().map(|(_, c)| *c).collect::<Vec<_>>(),
        vec![Color::from_rgb8(255, 38, 38)]
    );
}

#[test]
fn test_unset_color_draws_only_border_in_every_state() {
    let mut button = sized(ColorPickerButton::new(None));

    let mut lists = vec![paint(&mut button)];
    hover(&mut button);
    lists.push(paint(&mut button));
    press(&mut button, MouseButton::Left, INSIDE);
    lists.push(paint(&mut button));

    for list in lists {
        assert_eq!(list.fills().count(), 0);
        let strokes: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::StrokeRect { rect, color, .. } => Some((*rect, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, vec![(Rect::new(2.0, 2.0, 36.0, 16.0), Color::BLACK)]);
        assert_eq!(list.texts().count(), 0);
    }
}

#[test]
fn test_paint_text_contrast() {
    let mut button = sized(ColorPickerButton::new(Some(Color::from_rgba8(0, 0, 100, 255))));
    let list = paint(&mut button);
    assert_eq!(
        list.texts().collect::<Vec<_>>(),
        vec![("[0, 0, 100, 255]", &Color::WHITE)]
    );

    let mut labelled =
        sized(ColorPickerButton::new(Some(Color::from_rgb8(250, 250, 0))).with_label("Fill"));
    let list = paint(&mut labelled);
    assert_eq!(list.texts().collect::<Vec<_>>(), vec![("Fill", &Color::BLACK)]);
}

#[test]
fn test_set_color_requests_repaint() {
    let mut button = sized(ColorPickerButton::new(None));
    paint(&mut button);
    assert!(!button.needs_repaint());

    button.set_color(Some(RED));
    assert!(button.needs_repaint());
}
