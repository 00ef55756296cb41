//! Animated image support for GIF sequences.
//!
//! This module provides frame storage ([`AnimatedImage`]) and tick-driven
//! playback ([`AnimationController`]). The controller has no timer of its
//! own; the owner feeds it elapsed time through
//! [`update`](AnimationController::update).
//!
//! # Example
//!
//! ```ignore
//! use tessera_render::{AnimatedImage, AnimationController};
//! use std::time::Duration;
//!
//! let animated = AnimatedImage::from_file("spinner.gif")?;
//! let mut controller = AnimationController::new(&animated);
//!
//! // On every tick:
//! if controller.update(delta) {
//!     let frame = animated.frame(controller.current_frame());
//!     // repaint with `frame.image()`
//! }
//! ```

use std::io::{BufRead, Cursor, Seek};
use std::path::Path;
use std::time::Duration;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, ImageDecoder};
use tessera_core::logging::targets;

use crate::error::{RenderError, RenderResult};
use crate::image::Image;
use crate::types::PixelSize;

/// Delay used for frames that declare none.
pub const DEFAULT_FRAME_DELAY: Duration = Duration::from_millis(100);

/// A single frame in an animation.
#[derive(Clone)]
pub struct AnimationFrame {
    image: Image,
    delay: Duration,
}

impl AnimationFrame {
    /// Create a frame. A zero delay is replaced by [`DEFAULT_FRAME_DELAY`].
    pub fn new(image: Image, delay: Duration) -> Self {
        let delay = if delay.is_zero() {
            DEFAULT_FRAME_DELAY
        } else {
            delay
        };
        Self { image, delay }
    }

    /// The full-canvas pixels of this frame.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Get the delay before showing the next frame.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl std::fmt::Debug for AnimationFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationFrame")
            .field("dimensions", &self.image.size().to_string())
            .field("delay", &self.delay)
            .finish()
    }
}

/// Loop behavior for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopCount {
    /// Loop indefinitely.
    #[default]
    Infinite,
    /// Loop a specific number of times.
    Finite(u32),
}

/// An animated image containing multiple frames.
#[derive(Clone)]
pub struct AnimatedImage {
    frames: Vec<AnimationFrame>,
    size: PixelSize,
    loop_count: LoopCount,
    total_duration: Duration,
}

impl AnimatedImage {
    /// Build an animation from frames.
    ///
    /// The canvas size is taken from the first frame.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NoFrames`] if `frames` is empty.
    pub fn from_frames(frames: Vec<AnimationFrame>) -> RenderResult<Self> {
        let first = frames.first().ok_or(RenderError::NoFrames)?;
        let size = first.image.size();
        let total_duration = frames.iter().map(|f| f.delay).sum();

        Ok(Self {
            frames,
            size,
            loop_count: LoopCount::Infinite,
            total_duration,
        })
    }

    /// Set the loop behavior.
    pub fn with_loop_count(mut self, loop_count: LoopCount) -> Self {
        self.loop_count = loop_count;
        self
    }

    /// Load an animated GIF from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid GIF.
    pub fn from_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let data = std::fs::read(path.as_ref())?;
        Self::from_bytes(&data)
    }

    /// Load an animated GIF from bytes in memory.
    pub fn from_bytes(data: &[u8]) -> RenderResult<Self> {
        Self::from_reader(Cursor::new(data))
    }

    fn from_reader<R: BufRead + Seek>(reader: R) -> RenderResult<Self> {
        let decoder = GifDecoder::new(reader)?;
        let (width, height) = decoder.dimensions();

        let mut frames = Vec::new();
        for frame in decoder.into_frames() {
            let frame = frame?;

            let (num, denom) = frame.delay().numer_denom_ms();
            let delay_ms = if denom > 0 { num / denom } else { 0 };

            // Frames come back composited onto the full canvas.
            let image = Image::from_rgba_image(frame.into_buffer());
            frames.push(AnimationFrame::new(
                image,
                Duration::from_millis(u64::from(delay_ms)),
            ));
        }

        let animated = Self::from_frames(frames)?;
        tracing::debug!(
            target: targets::LOADER,
            width,
            height,
            frames = animated.frame_count(),
            "decoded animation"
        );
        Ok(animated)
    }

    /// Get the number of frames in the animation.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Get a specific frame by index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= frame_count()`.
    #[inline]
    pub fn frame(&self, index: usize) -> &AnimationFrame {
        &self.frames[index]
    }

    /// Get a specific frame by index, returning None if out of bounds.
    #[inline]
    pub fn get_frame(&self, index: usize) -> Option<&AnimationFrame> {
        self.frames.get(index)
    }

    /// Get all frames as a slice.
    #[inline]
    pub fn frames(&self) -> &[AnimationFrame] {
        &self.frames
    }

    /// Intrinsic canvas size of the animation.
    #[inline]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Get the loop count for the animation.
    #[inline]
    pub fn loop_count(&self) -> LoopCount {
        self.loop_count
    }

    /// Get the total duration of one loop of the animation.
    #[inline]
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Check if this is a single-frame "animation".
    #[inline]
    pub fn is_static(&self) -> bool {
        self.frames.len() == 1
    }
}

impl std::fmt::Debug for AnimatedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimatedImage")
            .field("dimensions", &self.size.to_string())
            .field("frames", &self.frames.len())
            .field("loop_count", &self.loop_count)
            .field("total_duration", &self.total_duration)
            .finish()
    }
}

/// Playback state for an animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Animation is playing.
    Playing,
    /// Animation is paused.
    Paused,
    /// Animation has stopped (finished or stopped explicitly).
    Stopped,
}

/// Controls playback of an animated image.
///
/// The controller tracks the current frame, elapsed time, and playback state.
/// Call `update()` with the delta time to advance the animation.
pub struct AnimationController {
    current_frame: usize,
    frame_elapsed: Duration,
    state: PlaybackState,
    loops_completed: u32,
    frame_delays: Vec<Duration>,
    loop_count: LoopCount,
    /// Playback speed multiplier (1.0 = normal speed).
    speed: f64,
}

impl AnimationController {
    /// Create a new controller; it starts in the `Playing` state at frame 0.
    pub fn new(animated: &AnimatedImage) -> Self {
        Self {
            current_frame: 0,
            frame_elapsed: Duration::ZERO,
            state: PlaybackState::Playing,
            loops_completed: 0,
            frame_delays: animated.frames.iter().map(|f| f.delay).collect(),
            loop_count: animated.loop_count(),
            speed: 1.0,
        }
    }

    /// Create a new animation controller that starts paused.
    pub fn new_paused(animated: &AnimatedImage) -> Self {
        let mut controller = Self::new(animated);
        controller.state = PlaybackState::Paused;
        controller
    }

    /// Advance the animation by `delta` of wall time.
    ///
    /// Whole loops covered by a long `delta` are skipped arithmetically, so
    /// one call walks at most two loops' worth of frames. Durations that
    /// overflow saturate.
    ///
    /// Returns `true` if the current frame changed.
    pub fn update(&mut self, delta: Duration) -> bool {
        if self.state != PlaybackState::Playing || self.frame_delays.is_empty() {
            return false;
        }
        let loop_duration: Duration = self.frame_delays.iter().sum();
        if loop_duration.is_zero() {
            return false;
        }

        let scaled = if self.speed == 1.0 {
            delta
        } else {
            Duration::try_from_secs_f64(delta.as_secs_f64() * self.speed).unwrap_or(Duration::MAX)
        };
        self.frame_elapsed = self.frame_elapsed.saturating_add(scaled);

        let mut frame_changed = false;

        // Finish the loop in progress.
        while self.current_frame != 0 && self.advance_frame(&mut frame_changed) {}

        if self.state == PlaybackState::Playing
            && self.current_frame == 0
            && self.frame_elapsed >= loop_duration
        {
            let whole = self.frame_elapsed.as_nanos() / loop_duration.as_nanos();
            let remainder = self.frame_elapsed.as_nanos() % loop_duration.as_nanos();
            let whole = u32::try_from(whole).unwrap_or(u32::MAX);
            let last_frame = self.frame_delays.len() - 1;

            match self.loop_count {
                LoopCount::Finite(count) if self.loops_completed.saturating_add(whole) >= count => {
                    self.loops_completed = count;
                    self.state = PlaybackState::Stopped;
                    self.frame_elapsed = Duration::ZERO;
                    if self.current_frame != last_frame {
                        self.current_frame = last_frame;
                        frame_changed = true;
                    }
                    return frame_changed;
                }
                _ => {
                    self.loops_completed = self.loops_completed.saturating_add(whole);
                    self.frame_elapsed = u64::try_from(remainder)
                        .map(Duration::from_nanos)
                        .unwrap_or(Duration::ZERO);
                    if last_frame > 0 {
                        frame_changed = true;
                    }
                }
            }
        }

        // Less than one loop of time is left here.
        while self.advance_frame(&mut frame_changed) {}

        frame_changed
    }

    /// Step past the current frame if its delay has elapsed.
    ///
    /// Returns `false` once no further step is possible.
    fn advance_frame(&mut self, frame_changed: &mut bool) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let current_delay = self.frame_delays[self.current_frame];
        if self.frame_elapsed < current_delay {
            return false;
        }
        self.frame_elapsed -= current_delay;

        let next_frame = self.current_frame + 1;
        if next_frame < self.frame_delays.len() {
            self.current_frame = next_frame;
            *frame_changed = true;
            return true;
        }

        self.loops_completed = self.loops_completed.saturating_add(1);
        match self.loop_count {
            LoopCount::Finite(count) if self.loops_completed >= count => {
                self.state = PlaybackState::Stopped;
                self.frame_elapsed = Duration::ZERO;
                false
            }
            _ => {
                if self.current_frame != 0 {
                    *frame_changed = true;
                }
                self.current_frame = 0;
                true
            }
        }
    }

    /// Get the current frame index.
    #[inline]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Get the current playback state.
    #[inline]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Check if the animation is playing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// Check if the animation has stopped.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.state == PlaybackState::Stopped
    }

    /// Get the number of completed loops.
    #[inline]
    pub fn loops_completed(&self) -> u32 {
        self.loops_completed
    }

    /// Get the playback speed multiplier.
    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Set the playback speed multiplier. Clamped to at least 0.01.
    pub fn set_speed(&mut self, speed: f64) {
        self.speed = if speed.is_finite() {
            speed.max(0.01)
        } else {
            1.0
        };
    }

    /// Start or resume playback. A finished animation restarts from frame 0.
    pub fn play(&mut self) {
        if self.state == PlaybackState::Stopped {
            self.reset();
        }
        self.state = PlaybackState::Playing;
    }

    /// Pause playback.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Stop the animation.
    pub fn stop(&mut self) {
        tracing::trace!(target: targets::ANIMATION, frame = self.current_frame, "animation stopped");
        self.state = PlaybackState::Stopped;
    }

    /// Reset the animation to the beginning.
    pub fn reset(&mut self) {
        self.current_frame = 0;
        self.frame_elapsed = Duration::ZERO;
        self.loops_completed = 0;
        if self.state == PlaybackState::Stopped {
            self.state = PlaybackState::Paused;
        }
    }

    /// Get the time remaining until the next frame change.
    pub fn time_until_next_frame(&self) -> Duration {
        if self.frame_delays.is_empty() || self.state != PlaybackState::Playing {
            return Duration::ZERO;
        }
        self.frame_delays[self.current_frame].saturating_sub(self.frame_elapsed)
    }
}

impl std::fmt::Debug for AnimationController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationController")
            .field("current_frame", &self.current_frame)
            .field("state", &self.state)
            .field("speed", &self.speed)
            .field("loops_completed", &self.loops_completed)
            .finish()
    }
}
