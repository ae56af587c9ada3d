//! MRU Combo - a most-recently-used combo box widget.
//!
//! The widget keeps a bounded, de-duplicated list of recently used strings
//! with the newest at the top, and draws a delete icon on every drop-down row
//! so users can prune entries with one click.
//!
//! This crate re-exports the core types it builds on (signals and geometry).
//!
//! # Example
//!
//! ```
//! use mru_combo::{DrawItemEvent, MruComboBox, Point, Rect, RecordingPainter};
//!
//! let mut combo = MruComboBox::new();
//! combo.add_mru_item("first.txt");
//! combo.add_mru_item("second.txt");
//!
//! // The host paints each visible row...
//! let mut painter = RecordingPainter::new();
//! for row in 0..combo.count() {
//!     let bounds = Rect::new(0.0, row as f32 * 20.0, 200.0, 20.0);
//!     combo.draw_item(&DrawItemEvent::new(row as i32, bounds), &mut painter);
//! }
//!
//! // ...and a click on the second row's delete icon removes it.
//! combo.handle_delete_click(Point::new(185.0, 30.0));
//! assert_eq!(combo.items().as_slice(), ["second.txt"]);
//! ```

pub use mru_combo_core::*;

pub mod bridge;
mod combo_box;
pub mod config;
pub mod error;
mod items;
pub mod platform;
pub mod policy;
mod regions;
pub mod render;
mod tool_strip;

pub use bridge::{
    MouseButton, MouseReleaseEvent, NativeHandle, NativeHost, NativeMessage, PopupListBridge,
};
pub use combo_box::{MruComboBox, MruItemEvent};
pub use config::MruConfig;
pub use error::{BridgeError, MruError, Result};
pub use items::ItemCollection;
pub use policy::{InsertOutcome, MruPolicy};
pub use regions::DeleteRegionMap;
pub use render::{DrawItemEvent, PaintCommand, RecordingPainter, RowLayout, RowPainter};
pub use tool_strip::{DEFAULT_PREFERRED_SIZE, ToolStripMruComboBox};

#[cfg(target_os = "windows")]
pub use platform::Win32Host;
