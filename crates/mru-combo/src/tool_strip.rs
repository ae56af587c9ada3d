//! Tool strip host for the MRU combo box.
//!
//! [`ToolStripMruComboBox`] wraps a [`MruComboBox`] so it can sit in a tool
//! strip or toolbar. It forwards the MRU surface to the inner control and
//! adds the preferred size the strip lays it out with.

use mru_combo_core::{Signal, Size};

use crate::combo_box::{MruComboBox, MruItemEvent};
use crate::items::ItemCollection;

/// Default preferred size of the hosted combo box.
pub const DEFAULT_PREFERRED_SIZE: Size = Size::new(120.0, 28.0);

/// A tool strip item hosting an [`MruComboBox`].
#[derive(Debug)]
pub struct ToolStripMruComboBox {
    combo: MruComboBox,
    preferred_size: Size,
}

impl ToolStripMruComboBox {
    /// Create a tool strip item around a new combo box.
    pub fn new() -> Self {
        Self::from_combo(MruComboBox::new())
    }

    /// Host an existing combo box.
    pub fn from_combo(combo: MruComboBox) -> Self {
        Self {
            combo,
            preferred_size: DEFAULT_PREFERRED_SIZE,
        }
    }

    /// The hosted control.
    pub fn combo(&self) -> &MruComboBox {
        &self.combo
    }

    /// Mutable access to the hosted control.
    pub fn combo_mut(&mut self) -> &mut MruComboBox {
        &mut self.combo
    }

    /// Unwrap the hosted control.
    pub fn into_inner(self) -> MruComboBox {
        self.combo
    }

    /// The size the strip lays the item out with.
    pub fn preferred_size(&self) -> Size {
        self.preferred_size
    }

    /// Set the preferred size.
    pub fn set_preferred_size(&mut self, size: Size) {
        self.preferred_size = size;
    }

    /// Set the preferred size using builder pattern.
    pub fn with_preferred_size(mut self, size: Size) -> Self {
        self.preferred_size = size;
        self
    }

    pub fn items(&self) -> &ItemCollection {
        self.combo.items()
    }

    pub fn items_mut(&mut self) -> &mut ItemCollection {
        self.combo.items_mut()
    }

    pub fn max_items(&self) -> i32 {
        self.combo.max_items()
    }

    pub fn set_max_items(&mut self, max_items: i32) {
        self.combo.set_max_items(max_items);
    }

    pub fn case_sensitive(&self) -> bool {
        self.combo.case_sensitive()
    }

    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.combo.set_case_sensitive(case_sensitive);
    }

    /// See [`MruComboBox::add_mru_item`].
    pub fn add_mru_item<'a>(&mut self, item: impl Into<Option<&'a str>>) {
        self.combo.add_mru_item(item);
    }

    /// The hosted control's `item_added` signal.
    pub fn item_added(&self) -> &Signal<MruItemEvent> {
        &self.combo.item_added
    }

    /// The hosted control's `item_deleted` signal.
    pub fn item_deleted(&self) -> &Signal<MruItemEvent> {
        &self.combo.item_deleted
    }
}

impl Default for ToolStripMruComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl From<MruComboBox> for ToolStripMruComboBox {
    fn from(combo: MruComboBox) -> Self {
        Self::from_combo(combo)
    }
}
