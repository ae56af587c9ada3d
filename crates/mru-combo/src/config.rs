//! Per-widget configuration.
//!
//! Every field has a default, so a configuration file only needs the keys it
//! wants to change:
//!
//! ```
//! use mru_combo::MruConfig;
//!
//! let config = MruConfig::from_toml_str(r#"
//! max_items = 5
//! case_sensitive = true
//! "#).unwrap();
//!
//! assert_eq!(config.max_items, 5);
//! assert!(config.case_sensitive);
//! assert_eq!(config.delete_icon_padding, 2.0);
//! ```

use mru_combo_core::Size;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default cap on the number of retained items.
pub const DEFAULT_MAX_ITEMS: i32 = 10;

/// Default delete icon size, matching a 16x16 icon resource.
pub const DEFAULT_DELETE_ICON_SIZE: Size = Size::new(16.0, 16.0);

/// Default gap between the top of a row and its delete icon.
pub const DEFAULT_DELETE_ICON_PADDING: f32 = 2.0;

/// Configuration owned by one [`MruComboBox`](crate::MruComboBox).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MruConfig {
    /// Maximum number of items to retain. Values `<= 0` disable eviction.
    pub max_items: i32,
    /// Whether duplicate detection compares case-sensitively.
    pub case_sensitive: bool,
    /// Size of the delete icon drawn at the right of each row.
    pub delete_icon_size: Size,
    /// Vertical offset of the delete icon from the row's top edge.
    pub delete_icon_padding: f32,
}

impl Default for MruConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            case_sensitive: false,
            delete_icon_size: DEFAULT_DELETE_ICON_SIZE,
            delete_icon_padding: DEFAULT_DELETE_ICON_PADDING,
        }
    }
}

impl MruConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Set the item cap using builder pattern.
    pub fn with_max_items(mut self, max_items: i32) -> Self {
        self.max_items = max_items;
        self
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Whether the item cap is enforced.
    pub fn eviction_enabled(&self) -> bool {
        self.max_items > 0
    }
}
