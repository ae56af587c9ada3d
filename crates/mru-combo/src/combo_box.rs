//! The MRU combo box widget.
//!
//! [`MruComboBox`] keeps a most-recently-used list of strings:
//!
//! - [`add_mru_item`](MruComboBox::add_mru_item) puts an entry at the top,
//!   dropping duplicates and evicting from the bottom past `max_items`
//! - selecting a row promotes it to the top
//! - every row is owner-drawn with a delete icon; clicking the icon removes
//!   the row
//!
//! # Example
//!
//! ```
//! use mru_combo::{MruComboBox, MruConfig};
//!
//! let mut combo = MruComboBox::with_config(MruConfig::default().with_max_items(3));
//!
//! combo.item_added.connect(|event| {
//!     println!("Added: {}", event.item());
//! });
//!
//! for path in ["a.txt", "b.txt", "c.txt", "d.txt"] {
//!     combo.add_mru_item(path);
//! }
//!
//! let items: Vec<&str> = combo.items().iter().collect();
//! assert_eq!(items, ["d.txt", "c.txt", "b.txt"]);
//! ```

use mru_combo_core::logging::targets;
use mru_combo_core::{Point, Signal};

use crate::bridge::{MouseButton, MouseReleaseEvent, NativeHandle, NativeHost, NativeMessage, PopupListBridge};
use crate::config::MruConfig;
use crate::items::ItemCollection;
use crate::policy::MruPolicy;
use crate::regions::DeleteRegionMap;
use crate::render::{DrawItemEvent, RowLayout, RowPainter};

// ============================================================================
// MRU Item Event
// ============================================================================

/// Payload of the `item_added` and `item_deleted` signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MruItemEvent {
    item: String,
}

impl MruItemEvent {
    /// Create an event for `item`.
    pub fn new(item: impl Into<String>) -> Self {
        Self { item: item.into() }
    }

    /// The text of the added or deleted item.
    pub fn item(&self) -> &str {
        &self.item
    }
}

// ============================================================================
// MruComboBox Widget
// ============================================================================

/// A drop-down list that keeps its entries in most-recently-used order.
///
/// # Signals
///
/// - `item_added(MruItemEvent)`: after every [`add_mru_item`](Self::add_mru_item)
///   that was not a no-op, including re-adds of an existing entry
/// - `item_deleted(MruItemEvent)`: once per row removed through its delete icon
/// - `current_index_changed(i32)`: the selected row changed (-1 = none)
/// - `text_changed(String)`: the current text changed
///
/// Slots run synchronously while the widget is mutably borrowed. A slot must
/// not try to lock a mutex the widget is stored in.
pub struct MruComboBox {
    items: ItemCollection,
    config: MruConfig,
    regions: DeleteRegionMap,

    /// Selected row (-1 means no selection).
    current_index: i32,
    /// Text shown in the edit portion.
    text: String,

    /// Set while the widget reorders its own items, so the selection change
    /// that reordering causes doesn't promote again.
    reordering: bool,

    handle: Option<NativeHandle>,
    host: Option<Box<dyn NativeHost>>,
    bridge: Option<PopupListBridge>,

    // Signals
    /// Signal emitted when an item is added.
    pub item_added: Signal<MruItemEvent>,
    /// Signal emitted when an item is deleted through its delete icon.
    pub item_deleted: Signal<MruItemEvent>,
    /// Signal emitted when the current index changes.
    pub current_index_changed: Signal<i32>,
    /// Signal emitted when the current text changes.
    pub text_changed: Signal<String>,
}

impl MruComboBox {
    /// Create an empty combo box with default settings.
    pub fn new() -> Self {
        Self::with_config(MruConfig::default())
    }

    /// Create an empty combo box with the given configuration.
    pub fn with_config(config: MruConfig) -> Self {
        Self {
            items: ItemCollection::new(),
            config,
            regions: DeleteRegionMap::new(),
            current_index: -1,
            text: String::new(),
            reordering: false,
            handle: None,
            host: None,
            bridge: None,
            item_added: Signal::new(),
            item_deleted: Signal::new(),
            current_index_changed: Signal::new(),
            text_changed: Signal::new(),
        }
    }

    /// Set the native host using builder pattern.
    pub fn with_host(mut self, host: impl NativeHost + 'static) -> Self {
        self.set_host(host);
        self
    }

    /// Set the native host that resolves and intercepts the popup list.
    pub fn set_host(&mut self, host: impl NativeHost + 'static) {
        self.host = Some(Box::new(host));
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &MruConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Like [`set_max_items`](Self::set_max_items), a smaller cap takes effect
    /// on the next [`add_mru_item`](Self::add_mru_item).
    pub fn set_config(&mut self, config: MruConfig) {
        self.config = config;
    }

    /// Maximum number of retained items.
    pub fn max_items(&self) -> i32 {
        self.config.max_items
    }

    /// Set the maximum number of retained items; `<= 0` disables eviction.
    pub fn set_max_items(&mut self, max_items: i32) {
        self.config.max_items = max_items;
    }

    /// Set max items using builder pattern.
    pub fn with_max_items(mut self, max_items: i32) -> Self {
        self.config.max_items = max_items;
        self
    }

    /// Whether duplicate detection is case-sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.config.case_sensitive
    }

    /// Set whether duplicate detection is case-sensitive.
    pub fn set_case_sensitive(&mut self, case_sensitive: bool) {
        self.config.case_sensitive = case_sensitive;
    }

    /// Set case sensitivity using builder pattern.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.config.case_sensitive = case_sensitive;
        self
    }

    fn policy(&self) -> MruPolicy {
        MruPolicy::from(&self.config)
    }

    // =========================================================================
    // Items
    // =========================================================================

    /// The items in display order.
    pub fn items(&self) -> &ItemCollection {
        &self.items
    }

    /// Mutable access to the raw item collection.
    ///
    /// Changes made here bypass the MRU rules: duplicates are allowed and
    /// nothing is evicted.
    pub fn items_mut(&mut self) -> &mut ItemCollection {
        &mut self.items
    }

    /// Number of items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Put `item` at the top of the list.
    ///
    /// `None` and the empty string are ignored. Otherwise every entry equal to
    /// `item` (under the configured case sensitivity) is removed, `item` is
    /// inserted at index 0, the list is trimmed to `max_items`, the current
    /// text becomes `item`, and `item_added` is emitted.
    pub fn add_mru_item<'a>(&mut self, item: impl Into<Option<&'a str>>) {
        let Some(item) = item.into().filter(|item| !item.is_empty()) else {
            return;
        };

        self.reordering = true;
        let outcome = self.policy().insert(&mut self.items, item);
        self.set_text(item);
        self.reordering = false;

        tracing::debug!(
            target: targets::LIST,
            item,
            duplicates_removed = outcome.duplicates_removed,
            evicted = outcome.evicted.len(),
            count = self.items.len(),
            "added MRU item"
        );
        self.item_added.emit(MruItemEvent::new(item));
    }

    /// Remove all items and clear the selection.
    pub fn clear(&mut self) {
        self.items.clear();
        self.regions.clear();
        self.set_current_index(-1);
    }

    // =========================================================================
    // Current Selection
    // =========================================================================

    /// The selected row (-1 if no selection).
    pub fn current_index(&self) -> i32 {
        if self.current_index >= 0 && (self.current_index as usize) < self.items.len() {
            self.current_index
        } else {
            -1
        }
    }

    /// Select the row at `index`; out-of-range values clear the selection.
    ///
    /// Selecting any row other than the top one promotes it to the top, so
    /// afterwards the selection is at index 0.
    pub fn set_current_index(&mut self, index: i32) {
        let count = self.items.len() as i32;
        let new_index = if index < 0 || index >= count { -1 } else { index };

        if self.current_index == new_index {
            return;
        }
        self.current_index = new_index;

        if let Some(text) = self.selected_item().map(str::to_owned) {
            self.update_text(text);
        }
        self.current_index_changed.emit(new_index);
        self.on_selected_index_changed();
    }

    /// The text of the selected row.
    pub fn selected_item(&self) -> Option<&str> {
        usize::try_from(self.current_index())
            .ok()
            .and_then(|index| self.items.get(index))
    }

    /// The text shown in the edit portion.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text shown in the edit portion.
    ///
    /// If an item with exactly this text exists it becomes the selection.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        let matching = self.items.index_of(&text);
        self.update_text(text);
        if let Some(index) = matching {
            self.set_current_index(index as i32);
        }
    }

    fn update_text(&mut self, text: String) {
        if self.text != text {
            self.text = text.clone();
            self.text_changed.emit(text);
        }
    }

    /// Selection-changed hook: promotes the newly selected row.
    fn on_selected_index_changed(&mut self) {
        if self.reordering {
            return;
        }
        let Ok(index) = usize::try_from(self.current_index) else {
            return;
        };
        if index == 0 || index >= self.items.len() {
            return;
        }

        self.reordering = true;
        if let Some(item) = self.policy().promote(&mut self.items, index) {
            tracing::debug!(target: targets::LIST, item = %item, from = index, "promoted item");
            self.set_current_index(0);
        }
        self.reordering = false;
    }

    /// Keep the selection on the same item after `removed` was taken out.
    fn selection_after_removal(&mut self, removed: usize) {
        let Ok(current) = usize::try_from(self.current_index) else {
            return;
        };
        let new_index = if current == removed {
            -1
        } else if current > removed {
            current as i32 - 1
        } else {
            return;
        };
        self.current_index = new_index;
        self.current_index_changed.emit(new_index);
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Owner-draw hook, called by the host once per visible popup row.
    ///
    /// Paints the background, the item text, and the delete icon, then records
    /// the icon rectangle as the row's delete region. Rows outside the item
    /// list are ignored.
    pub fn draw_item(&mut self, event: &DrawItemEvent, painter: &mut dyn RowPainter) {
        let Some(row) = usize::try_from(event.index)
            .ok()
            .filter(|&row| row < self.items.len())
        else {
            tracing::trace!(target: targets::RENDER, index = event.index, "skipping out-of-range row");
            return;
        };

        painter.fill_background(event.bounds, event.back_color, event.selected);

        let layout = RowLayout::compute(
            event.bounds,
            self.config.delete_icon_size,
            self.config.delete_icon_padding,
        );
        painter.draw_text(&self.items[row], &event.font, event.fore_color, layout.text_bounds);
        painter.draw_delete_icon(layout.delete_rect);

        self.regions.record(row, layout.delete_rect, self.items.revision());
    }

    /// The delete regions recorded by the last paint.
    pub fn delete_regions(&self) -> &DeleteRegionMap {
        &self.regions
    }

    // =========================================================================
    // Delete Clicks
    // =========================================================================

    /// Remove every row whose delete icon contains `pos`.
    ///
    /// Rows are removed from the highest index down so earlier removals don't
    /// shift the rows still to be removed. Emits `item_deleted` per row and
    /// hands focus back to the combo box. Returns the number of rows removed.
    pub fn handle_delete_click(&mut self, pos: Point) -> usize {
        let mut rows = self.regions.hit_test(pos, self.items.revision());
        if rows.is_empty() {
            return 0;
        }
        rows.sort_unstable_by(|a, b| b.cmp(a));

        let mut removed = 0;
        for row in rows {
            let Ok(item) = self.items.remove_at(row) else {
                continue;
            };
            self.regions.remove(row);
            self.selection_after_removal(row);
            removed += 1;

            tracing::debug!(target: targets::LIST, item = %item, row, "deleted item");
            self.item_deleted.emit(MruItemEvent::new(item));
        }

        if let (Some(host), Some(handle)) = (self.host.as_mut(), self.handle) {
            host.set_focus(handle);
        }
        removed
    }

    /// Mouse-up handler for the popup list.
    pub fn on_popup_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }
        self.handle_delete_click(event.local_pos) > 0
    }

    // =========================================================================
    // Native Handle Lifecycle
    // =========================================================================

    /// Handle-created hook.
    ///
    /// Attaches the popup list bridge when the host can provide one. Without a
    /// host or a popup list the widget keeps working, only delete-icon clicks
    /// are unavailable.
    pub fn on_handle_created(&mut self, handle: NativeHandle) {
        self.handle = Some(handle);
        self.bridge = None;

        let Some(host) = self.host.as_mut() else {
            tracing::debug!(target: targets::BRIDGE, "no native host, delete icons disabled");
            return;
        };

        match PopupListBridge::attach(host.as_mut(), handle) {
            Ok(bridge) => self.bridge = Some(bridge),
            Err(err) => {
                tracing::debug!(target: targets::BRIDGE, %err, "popup list bridge unavailable, delete icons disabled");
            }
        }
    }

    /// Handle-destroyed hook. Forgets the native handles.
    pub fn on_handle_destroyed(&mut self) {
        self.handle = None;
        self.bridge = None;
        self.regions.clear();
    }

    /// The widget's native handle, once created.
    pub fn handle(&self) -> Option<NativeHandle> {
        self.handle
    }

    /// The attached popup list bridge.
    pub fn popup_bridge(&self) -> Option<&PopupListBridge> {
        self.bridge.as_ref()
    }

    /// Observe a message delivered to the popup list window.
    ///
    /// Left-button releases are forwarded to the delete-click handler. The
    /// caller still passes every message on to the default window procedure.
    /// Returns `true` if the message deleted at least one row.
    pub fn handle_popup_message(&mut self, message: &NativeMessage) -> bool {
        let Some(event) = self.bridge.as_ref().and_then(|bridge| bridge.translate(message)) else {
            return false;
        };
        self.on_popup_mouse_release(&event)
    }
}

impl Default for MruComboBox {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MruComboBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MruComboBox")
            .field("items", &self.items)
            .field("config", &self.config)
            .field("current_index", &self.current_index)
            .field("text", &self.text)
            .field("handle", &self.handle)
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
