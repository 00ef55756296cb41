//! Tests for the scalable image label: scaling, alignment, animation and
//! loading from disk.

use std::sync::Arc;
use std::time::Duration;

use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, ImageFormat, Rgba, RgbaImage};
use parking_lot::Mutex;

use tessera::config::WidgetsConfig;
use tessera::render::{
    Alignment, AnimatedImage, AnimationFrame, Color, DisplayList, HorizontalAlign, Image,
    LoopCount, PixelSize, Point, Size, VerticalAlign,
};
use tessera::widget::widgets::ScalableImageLabel;
use tessera::widget::{Widget, paint_widget};

fn solid(width: u32, height: u32) -> Image {
    Image::from_color(PixelSize::new(width, height), Color::from_rgb8(10, 20, 30))
}

fn two_frames(delay_ms: u64) -> AnimatedImage {
    let delay = Duration::from_millis(delay_ms);
    let frames = vec![
        AnimationFrame::new(solid(30, 20), delay),
        AnimationFrame::new(solid(30, 20), delay),
    ];
    AnimatedImage::from_frames(frames).unwrap()
}

fn write_png(path: &std::path::Path, width: u32, height: u32) {
    RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

fn write_gif(path: &std::path::Path, frame_count: usize) {
    let file = std::fs::File::create(path).unwrap();
    let mut encoder = GifEncoder::new(file);
    encoder.set_repeat(Repeat::Infinite).unwrap();
    for i in 0..frame_count {
        let buffer = RgbaImage::from_pixel(8, 6, Rgba([(i * 60) as u8, 0, 0, 255]));
        let frame = Frame::from_parts(buffer, 0, 0, Delay::from_numer_denom_ms(40, 1));
        encoder.encode_frame(frame).unwrap();
    }
}

#[test]
fn test_scaled_size_never_exceeds_native_without_oversize() {
    let mut label = ScalableImageLabel::new().with_image(solid(64, 48));

    for (w, h) in [(10.0, 10.0), (64.0, 48.0), (500.0, 30.0), (30.0, 500.0), (1000.0, 1000.0)] {
        label.resize(Size::new(w, h));
        let scaled = label.scaled_size();
        assert!(scaled.width <= 64 && scaled.height <= 48, "{scaled} at {w}x{h}");
        assert!(scaled.width as f32 <= w && scaled.height as f32 <= h);
    }
}

#[test]
fn test_oversize_upscales_and_keeps_aspect() {
    let mut label = ScalableImageLabel::new()
        .with_image(solid(64, 48))
        .with_oversize_allowed(true);

    for (w, h) in [(640.0, 1000.0), (1000.0, 300.0), (129.0, 97.0)] {
        label.resize(Size::new(w, h));
        let scaled = label.scaled_size();
        assert!(scaled.width > 64 || scaled.height > 48);

        let ratio = scaled.width as f32 / scaled.height as f32;
        assert!((ratio - 64.0 / 48.0).abs() < 0.02, "{scaled} at {w}x{h}");
    }
}

#[test]
fn test_alignment_origins() {
    let cases = [
        (HorizontalAlign::Left, VerticalAlign::Top, Point::new(0.0, 0.0)),
        (HorizontalAlign::Center, VerticalAlign::Center, Point::new(40.0, 20.0)),
        (HorizontalAlign::Right, VerticalAlign::Bottom, Point::new(80.0, 40.0)),
        (HorizontalAlign::Left, VerticalAlign::Bottom, Point::new(0.0, 40.0)),
        (HorizontalAlign::Right, VerticalAlign::Center, Point::new(80.0, 20.0)),
    ];

    for (horizontal, vertical, expected) in cases {
        let mut label = ScalableImageLabel::new()
            .with_image(solid(20, 10))
            .with_alignment(Alignment::new(horizontal, vertical));
        label.resize(Size::new(100.0, 50.0));

        let mut list = DisplayList::new();
        paint_widget(&mut label, &mut list);
        let origins: Vec<Point> = list.images().map(|(origin, _)| *origin).collect();
        assert_eq!(origins, vec![expected], "{horizontal:?}/{vertical:?}");
    }
}

#[test]
fn test_empty_label_draws_nothing() {
    let mut label = ScalableImageLabel::new();
    label.resize(Size::new(50.0, 50.0));

    let mut list = DisplayList::new();
    paint_widget(&mut label, &mut list);
    assert!(list.is_empty());
}

#[test]
fn test_replacing_animation_stops_frame_events() {
    let mut label = ScalableImageLabel::new().with_animation(two_frames(10));
    let frames = Arc::new(Mutex::new(Vec::new()));
    let frames_clone = frames.clone();
    label
        .frame_changed
        .connect(move |frame| frames_clone.lock().push(*frame));

    assert!(label.update_animation(Duration::from_millis(10)));
    assert_eq!(*frames.lock(), vec![1]);

    label.set_image(Some(solid(5, 5)));
    for _ in 0..10 {
        assert!(!label.update_animation(Duration::from_millis(10)));
    }
    assert_eq!(*frames.lock(), vec![1]);

    label.set_animation(two_frames(10));
    label.clear();
    assert!(!label.update_animation(Duration::from_millis(10)));
    assert_eq!(*frames.lock(), vec![1]);
}

#[test]
fn test_finite_animation_stops_playing() {
    let animation = two_frames(10).with_loop_count(LoopCount::Finite(1));
    let mut label = ScalableImageLabel::new().with_animation(animation);

    assert!(label.update_animation(Duration::from_millis(10)));
    label.update_animation(Duration::from_millis(10));
    assert!(!label.is_playing());
    assert!(!label.update_animation(Duration::from_millis(100)));
}

#[test]
fn test_speed_multiplier() {
    let mut label = ScalableImageLabel::new().with_animation(two_frames(100));
    label.set_speed(2.0);
    assert_eq!(label.speed(), 2.0);
    assert!(label.update_animation(Duration::from_millis(50)));
    assert_eq!(label.current_frame(), 1);
}

#[test]
fn test_size_hint_follows_content() {
    let mut label = ScalableImageLabel::new();
    assert_eq!(label.size_hint().preferred, Size::new(100.0, 100.0));

    label.set_image(Some(solid(64, 48)));
    assert_eq!(label.size_hint().preferred, Size::new(64.0, 48.0));
}

#[test]
fn test_load_png_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("still.png");
    write_png(&path, 12, 6);

    let mut label = ScalableImageLabel::new();
    label.load_file(&path).unwrap();
    label.resize(Size::new(6.0, 6.0));

    assert!(!label.is_animated());
    assert_eq!(label.image_size(), Some(PixelSize::new(12, 6)));
    assert_eq!(label.scaled_size(), PixelSize::new(6, 3));
}

#[test]
fn test_load_gif_file_plays() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spinner.gif");
    write_gif(&path, 3);

    let mut label = ScalableImageLabel::new();
    label.load_file(&path).unwrap();

    assert!(label.is_animated());
    assert!(label.is_playing());
    assert_eq!(label.frame_count(), 3);
    assert_eq!(label.size(), Size::new(8.0, 6.0));
    assert!(label.update_animation(Duration::from_millis(40)));
    assert_eq!(label.current_frame(), 1);
}

#[test]
fn test_missing_file_leaves_label_empty() {
    let mut label = ScalableImageLabel::new().with_image(solid(4, 4));
    assert!(label.load_file("/nonexistent/tessera/image.png").is_err());
    assert!(label.is_empty());

    let mut list = DisplayList::new();
    label.resize(Size::new(10.0, 10.0));
    paint_widget(&mut label, &mut list);
    assert_eq!(list.images().count(), 0);
}

#[test]
fn test_label_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("logo.png"), 40, 20);
    let config_path = dir.path().join("widgets.toml");
    std::fs::write(
        &config_path,
        r#"
        [image_labels.logo]
        source = "logo.png"
        oversize = true
        horizontal_align = "left"
        vertical_align = "top"
        "#,
    )
    .unwrap();

    let config = WidgetsConfig::from_file(&config_path).unwrap();
    let mut label = config.image_labels["logo"].build().unwrap();
    label.resize(Size::new(80.0, 80.0));

    assert_eq!(label.scaled_size(), PixelSize::new(80, 40));
    assert_eq!(label.scaled_render().origin(), Point::ZERO);
}
