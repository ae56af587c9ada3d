//! Core systems for the MRU combo box.
//!
//! This crate provides the pieces the widget crate builds on:
//!
//! - **Signal/Slot System**: synchronous, ordered notifications
//! - **Geometry**: points, sizes, rectangles and colors used for row layout
//!   and delete-icon hit-testing
//! - **Logging**: `tracing` target names for each subsystem
//!
//! # Signal/Slot Example
//!
//! ```
//! use mru_combo_core::Signal;
//!
//! let item_added = Signal::<String>::new();
//!
//! let conn_id = item_added.connect(|item| {
//!     println!("Added: {}", item);
//! });
//!
//! item_added.emit("report.txt".to_string());
//! item_added.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;
mod types;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use types::{Color, Font, Point, Rect, Size};
