//! Logging facilities for Tessera.
//!
//! Tessera uses the `tracing` crate for instrumentation. Libraries in this
//! workspace never install a subscriber; to see logs, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("tessera=debug,tessera_render=info")
//!     .init();
//! ```
//!
//! The constants in [`targets`] name the `target:` used by each subsystem,
//! so they can be used verbatim in filter directives.

/// Target names for log filtering.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "tessera_core::signal";
    /// Image decoding and loading target.
    pub const LOADER: &str = "tessera_render::loader";
    /// Animation playback target.
    pub const ANIMATION: &str = "tessera_render::animation";
    /// Color picker button target.
    pub const COLOR_PICKER: &str = "tessera::color_picker_button";
    /// Scalable image label target.
    pub const IMAGE_LABEL: &str = "tessera::scalable_image_label";
    /// Widget configuration target.
    pub const CONFIG: &str = "tessera::config";
}
