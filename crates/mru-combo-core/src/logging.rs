//! Logging facilities.
//!
//! The MRU combo crates use the `tracing` crate for instrumentation. To see
//! logs, install a subscriber in the host application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("mru_combo=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal emission target.
    pub const SIGNAL: &str = "mru_combo_core::signal";
    /// Item store and promotion/eviction target.
    pub const LIST: &str = "mru_combo::list";
    /// Owner-drawn row rendering target.
    pub const RENDER: &str = "mru_combo::render";
    /// Native popup list bridge target.
    pub const BRIDGE: &str = "mru_combo::bridge";
}
