//! Core systems for Tessera.
//!
//! This crate provides the foundational pieces shared by the Tessera widget
//! crates:
//!
//! - **Signal/Slot System**: Type-safe observer lists used for change
//!   notification between widgets and the host application
//! - **Errors**: Error types for the core systems
//! - **Logging**: Stable `tracing` target names for log filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use tessera_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<(i32, i32)>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|&(old, new)| {
//!     println!("Value changed from {} to {}", old, new);
//! });
//!
//! // Emit the signal
//! value_changed.emit((1, 42));
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{Result, SignalError, TesseraError};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
