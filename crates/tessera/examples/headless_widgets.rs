//! Headless widget walkthrough.
//!
//! Drives a color picker button and a scalable image label with synthetic
//! events and prints what they draw. Pass an image path to display it in
//! the label; otherwise a generated two-frame animation is used.
//!
//! Run with: cargo run -p tessera --example headless_widgets -- [IMAGE]

use std::time::Duration;

use tracing_subscriber::EnvFilter;

use tessera::render::{
    Alignment, AnimatedImage, AnimationFrame, Color, DisplayList, Image, Painter, PixelSize,
    Point, Rect, RenderHints, Size,
};
use tessera::widget::widgets::{ColorDialogOptions, ColorPickerButton, ScalableImageLabel};
use tessera::widget::{
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, Widget, WidgetEvent,
    paint_widget,
};

/// Prints every drawing call instead of rasterizing it.
#[derive(Default)]
struct ConsolePainter {
    hints: RenderHints,
}

impl Painter for ConsolePainter {
    fn set_render_hints(&mut self, hints: RenderHints) {
        self.hints = hints;
    }

    fn render_hints(&self) -> RenderHints {
        self.hints
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        println!("  fill   {rect:?} with {color}");
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        println!("  stroke {rect:?} with {color} ({width}px)");
    }

    fn draw_text(&mut self, _rect: Rect, text: &str, color: Color, alignment: Alignment) {
        println!("  text   {text:?} in {color}, {alignment:?}");
    }

    fn draw_image(&mut self, origin: Point, image: &Image) {
        println!(
            "  image  {} at ({}, {}), smooth={}",
            image.size(),
            origin.x,
            origin.y,
            self.hints.smooth_pixmap_transform
        );
    }
}

fn show(title: &str, widget: &mut dyn Widget) {
    println!("{title}");
    let mut list = DisplayList::new();
    paint_widget(widget, &mut list);
    list.replay(&mut ConsolePainter::default());
}

fn demo_animation() -> Result<AnimatedImage, Box<dyn std::error::Error>> {
    let size = PixelSize::new(64, 32);
    let delay = Duration::from_millis(80);
    let frames = vec![
        AnimationFrame::new(Image::from_color(size, Color::from_rgb8(220, 40, 40)), delay),
        AnimationFrame::new(Image::from_color(size, Color::from_rgb8(40, 40, 220)), delay),
    ];
    Ok(AnimatedImage::from_frames(frames)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tessera=debug")),
        )
        .init();

    // Color picker button
    let mut button = ColorPickerButton::new(Some(Color::from_rgb8(0, 255, 0))).with_chooser(
        |initial: Option<Color>, options: &ColorDialogOptions| {
            println!("  [{}] starting from {:?}", options.title, initial);
            Some(Color::from_rgb8(255, 0, 0))
        },
    );
    button.color_changed.connect(|(old, new)| {
        println!("  color_changed: {old:?} -> {new:?}");
    });
    button.resize(Size::new(96.0, 24.0));
    show("button, normal:", &mut button);

    let inside = Point::new(10.0, 10.0);
    button.event(&mut WidgetEvent::MouseMove(MouseMoveEvent::new(inside, 0)));
    show("button, hovered:", &mut button);

    button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Left,
        inside,
    )));
    show("button, pressed:", &mut button);

    button.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Left,
        inside,
    )));
    show("button, after choosing:", &mut button);

    button.event(&mut WidgetEvent::MousePress(MousePressEvent::new(
        MouseButton::Right,
        inside,
    )));
    button.event(&mut WidgetEvent::MouseRelease(MouseReleaseEvent::new(
        MouseButton::Right,
        inside,
    )));
    show("button, after reset:", &mut button);

    // Scalable image label
    let mut label = ScalableImageLabel::new().with_text("preview");
    match std::env::args().nth(1) {
        Some(path) => label.load_file(path)?,
        None => label.set_animation(demo_animation()?),
    }
    label.frame_changed.connect(|frame| println!("  frame_changed: {frame}"));

    label.resize(Size::new(200.0, 50.0));
    show("label, 200x50:", &mut label);

    label.set_oversize_allowed(true);
    show("label, 200x50 with oversize:", &mut label);

    for _ in 0..3 {
        if label.update_animation(Duration::from_millis(80)) {
            show("label, next frame:", &mut label);
        }
    }

    Ok(())
}
