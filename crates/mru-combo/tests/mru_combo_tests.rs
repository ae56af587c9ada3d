//! Integration tests for the MRU combo box.

use std::sync::Arc;

use mru_combo::{
    BridgeError, DrawItemEvent, MruComboBox, MruConfig, MruItemEvent, NativeHandle, NativeHost,
    NativeMessage, Point, Rect, RecordingPainter, Signal, ToolStripMruComboBox,
};
use parking_lot::Mutex;

const COMBO: NativeHandle = NativeHandle::new(0x1000);
const LIST: NativeHandle = NativeHandle::new(0x2000);

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mru_combo=trace")
        .with_test_writer()
        .try_init();
}

fn capture(signal: &Signal<MruItemEvent>) -> Arc<Mutex<Vec<String>>> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let received_clone = received.clone();
    signal.connect(move |event| received_clone.lock().push(event.item().to_owned()));
    received
}

fn row_bounds(row: usize) -> Rect {
    Rect::new(0.0, row as f32 * 20.0, 200.0, 20.0)
}

fn paint_rows(combo: &mut MruComboBox) {
    let mut painter = RecordingPainter::new();
    for row in 0..combo.count() {
        combo.draw_item(&DrawItemEvent::new(row as i32, row_bounds(row)), &mut painter);
    }
}

fn icon_point(row: usize) -> Point {
    Point::new(188.0, row as f32 * 20.0 + 10.0)
}

#[derive(Clone, Default)]
struct MockHost {
    list: Option<NativeHandle>,
    intercepted: Arc<Mutex<Vec<NativeHandle>>>,
    focused: Arc<Mutex<Vec<NativeHandle>>>,
}

impl NativeHost for MockHost {
    fn popup_list_handle(&self, combo: NativeHandle) -> Option<NativeHandle> {
        assert_eq!(combo, COMBO);
        self.list
    }

    fn intercept_messages(&mut self, list: NativeHandle) -> Result<(), BridgeError> {
        self.intercepted.lock().push(list);
        Ok(())
    }

    fn set_focus(&mut self, combo: NativeHandle) {
        self.focused.lock().push(combo);
    }
}

// =========================================================================
// Ordering, de-duplication and eviction
// =========================================================================

#[test]
fn test_eviction_keeps_most_recent() {
    setup();
    let mut combo = MruComboBox::with_config(MruConfig::default().with_max_items(3));
    for item in ["First", "Second", "Third", "Fourth"] {
        combo.add_mru_item(item);
    }
    assert_eq!(combo.items().as_slice(), ["Fourth", "Third", "Second"]);
}

#[test]
fn test_case_insensitive_readd_replaces_entry() {
    setup();
    let mut combo = MruComboBox::new();
    for item in ["Hello", "World", "hello"] {
        combo.add_mru_item(item);
    }
    assert_eq!(combo.items().as_slice(), ["hello", "World"]);
}

#[test]
fn test_ignore_case_compares_char_by_char() {
    setup();
    let mut combo = MruComboBox::new();
    for item in ["straße", "STRASSE", "Ärger", "ärger"] {
        combo.add_mru_item(item);
    }
    assert_eq!(combo.items().as_slice(), ["ärger", "STRASSE", "straße"]);
}

#[test]
fn test_case_sensitive_keeps_both_spellings() {
    setup();
    let mut combo = MruComboBox::new().with_case_sensitive(true);
    for item in ["Hello", "World", "hello"] {
        combo.add_mru_item(item);
    }
    assert_eq!(combo.items().as_slice(), ["hello", "World", "Hello"]);
}

#[test]
fn test_item_added_fires_once_per_add() {
    setup();
    let mut combo = MruComboBox::new();
    let added = capture(&combo.item_added);

    combo.add_mru_item("x");
    assert_eq!(*added.lock(), vec!["x"]);
    assert_eq!(combo.items().get(0), Some("x"));

    combo.add_mru_item(None);
    combo.add_mru_item("");
    assert_eq!(*added.lock(), vec!["x"]);
    assert_eq!(combo.count(), 1);
}

#[test]
fn test_invariants_over_add_sequence() {
    setup();
    let mut combo = MruComboBox::new().with_max_items(4);
    let sequence = ["a", "B", "c", "A", "d", "e", "b", "C", "f", "a", "g"];

    for item in sequence {
        let before: Vec<String> = combo.items().as_slice().to_vec();
        combo.add_mru_item(item);
        let items = combo.items().as_slice();

        assert_eq!(items[0], item);
        assert!(items.len() <= 4);

        let mut lowered: Vec<String> = items.iter().map(|s| s.to_lowercase()).collect();
        lowered.sort();
        lowered.dedup();
        assert_eq!(lowered.len(), items.len(), "duplicate after adding {item}");

        // Survivors keep their relative order.
        let expected: Vec<&String> = before
            .iter()
            .filter(|s| !s.eq_ignore_ascii_case(item))
            .take(3)
            .collect();
        let actual: Vec<&String> = items[1..].iter().collect();
        assert_eq!(actual, expected);
    }
}

#[test]
fn test_unbounded_when_max_items_not_positive() {
    setup();
    let mut combo = MruComboBox::new().with_max_items(0);
    for n in 0..25 {
        combo.add_mru_item(n.to_string().as_str());
    }
    assert_eq!(combo.count(), 25);
}

#[test]
fn test_lowering_max_items_applies_on_next_add() {
    setup();
    let mut combo = MruComboBox::new();
    for item in ["a", "b", "c", "d"] {
        combo.add_mru_item(item);
    }
    combo.set_max_items(2);
    assert_eq!(combo.count(), 4);

    combo.add_mru_item("e");
    assert_eq!(combo.items().as_slice(), ["e", "d"]);
}

// =========================================================================
// Promotion
// =========================================================================

#[test]
fn test_selection_promotes_row() {
    setup();
    let mut combo = MruComboBox::new();
    combo.items_mut().add_range(["A", "B", "C", "D", "E"]);

    combo.set_current_index(3);
    assert_eq!(combo.items().as_slice(), ["D", "A", "B", "C", "E"]);
    assert_eq!(combo.current_index(), 0);
    assert_eq!(combo.text(), "D");
}

#[test]
fn test_set_text_selects_and_promotes_match() {
    setup();
    let mut combo = MruComboBox::new();
    combo.items_mut().add_range(["A", "B", "C"]);

    combo.set_text("C");
    assert_eq!(combo.items().as_slice(), ["C", "A", "B"]);
    assert_eq!(combo.selected_item(), Some("C"));

    combo.set_text("not an item");
    assert_eq!(combo.text(), "not an item");
    assert_eq!(combo.items().as_slice(), ["C", "A", "B"]);
}

// =========================================================================
// Delete clicks
// =========================================================================

#[test]
fn test_click_covering_several_rows_deletes_all() {
    setup();
    let mut combo = MruComboBox::new();
    combo.items_mut().add_range(["A", "B", "C", "D", "E"]);
    let deleted = capture(&combo.item_deleted);

    // Rows 2, 0 and 4 are painted in that order onto the same bounds so their
    // icons overlap.
    let mut painter = RecordingPainter::new();
    for row in [2, 0, 4] {
        combo.draw_item(&DrawItemEvent::new(row, row_bounds(0)), &mut painter);
    }
    for row in [1, 3] {
        combo.draw_item(&DrawItemEvent::new(row as i32, row_bounds(row)), &mut painter);
    }
    assert_eq!(combo.delete_regions().hit_test(icon_point(0), combo.items().revision()), vec![0, 2, 4]);

    assert_eq!(combo.handle_delete_click(icon_point(0)), 3);
    assert_eq!(combo.items().as_slice(), ["B", "D"]);
    assert_eq!(*deleted.lock(), vec!["E", "C", "A"]);
}

#[test]
fn test_click_on_each_row_in_turn() {
    setup();
    let mut combo = MruComboBox::new();
    for item in ["one", "two", "three"] {
        combo.add_mru_item(item);
    }
    let deleted = capture(&combo.item_deleted);

    while combo.count() > 0 {
        paint_rows(&mut combo);
        let last = combo.count() - 1;
        assert_eq!(combo.handle_delete_click(icon_point(last)), 1);
    }

    assert_eq!(*deleted.lock(), vec!["one", "two", "three"]);
    assert_eq!(combo.current_index(), -1);
}

#[test]
fn test_click_without_paint_is_noop() {
    setup();
    let mut combo = MruComboBox::new();
    combo.add_mru_item("A");
    assert_eq!(combo.handle_delete_click(icon_point(0)), 0);
    assert_eq!(combo.count(), 1);
}

// =========================================================================
// Native bridge
// =========================================================================

#[test]
fn test_bridge_routes_left_button_up_to_delete() {
    setup();
    let host = MockHost {
        list: Some(LIST),
        ..Default::default()
    };
    let mut combo = MruComboBox::new().with_host(host.clone());
    combo.items_mut().add_range(["A", "B", "C"]);
    let deleted = capture(&combo.item_deleted);

    combo.on_handle_created(COMBO);
    assert_eq!(*host.intercepted.lock(), vec![LIST]);
    assert_eq!(combo.popup_bridge().map(|bridge| bridge.handle()), Some(LIST));

    paint_rows(&mut combo);

    // Mouse moves and presses over the icon pass through.
    assert!(!combo.handle_popup_message(&NativeMessage::new(0x0200, 0, 0)));
    assert!(!combo.handle_popup_message(&NativeMessage::new(0x0201, 0, 0)));
    assert_eq!(combo.count(), 3);

    assert!(combo.handle_popup_message(&NativeMessage::left_button_up(188, 30)));
    assert_eq!(combo.items().as_slice(), ["A", "C"]);
    assert_eq!(*deleted.lock(), vec!["B"]);
    assert_eq!(*host.focused.lock(), vec![COMBO]);

    // Releases away from any icon leave the list alone and keep focus where it is.
    assert!(!combo.handle_popup_message(&NativeMessage::left_button_up(20, 10)));
    assert_eq!(host.focused.lock().len(), 1);
}

#[test]
fn test_missing_popup_list_is_not_fatal() {
    setup();
    let host = MockHost::default();
    let mut combo = MruComboBox::new().with_host(host.clone());

    combo.on_handle_created(COMBO);
    assert!(combo.popup_bridge().is_none());
    assert!(host.intercepted.lock().is_empty());

    combo.add_mru_item("still works");
    assert_eq!(combo.count(), 1);
}

#[test]
fn test_handle_destroyed_detaches_bridge() {
    setup();
    let host = MockHost {
        list: Some(LIST),
        ..Default::default()
    };
    let mut combo = MruComboBox::new().with_host(host);
    combo.add_mru_item("A");
    combo.on_handle_created(COMBO);
    paint_rows(&mut combo);

    combo.on_handle_destroyed();
    assert!(combo.handle().is_none());
    assert!(!combo.handle_popup_message(&NativeMessage::left_button_up(188, 10)));
    assert_eq!(combo.count(), 1);
}

#[test]
fn test_widget_behind_shared_mutex() {
    setup();
    let combo = Arc::new(Mutex::new(MruComboBox::new()));
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_clone = log.clone();
    combo
        .lock()
        .item_added
        .connect(move |event| log_clone.lock().push(event.item().to_owned()));

    let worker = {
        let combo = combo.clone();
        std::thread::spawn(move || combo.lock().add_mru_item("from thread"))
    };
    worker.join().unwrap();

    assert_eq!(combo.lock().items().as_slice(), ["from thread"]);
    assert_eq!(*log.lock(), vec!["from thread"]);
}

// =========================================================================
// Configuration and tool strip
// =========================================================================

#[test]
fn test_config_from_toml() {
    setup();
    let config = MruConfig::from_toml_str("max_items = 2\ncase_sensitive = true\n").unwrap();
    let mut combo = MruComboBox::with_config(config);
    for item in ["a", "A", "b"] {
        combo.add_mru_item(item);
    }
    assert_eq!(combo.items().as_slice(), ["b", "A"]);
}

#[test]
fn test_tool_strip_forwards_notifications() {
    setup();
    let mut item = ToolStripMruComboBox::new();
    item.set_max_items(2);
    let added = capture(item.item_added());
    let deleted = capture(item.item_deleted());

    for text in ["x", "y", "z"] {
        item.add_mru_item(text);
    }
    assert_eq!(item.items().as_slice(), ["z", "y"]);
    assert_eq!(*added.lock(), vec!["x", "y", "z"]);

    paint_rows(item.combo_mut());
    item.combo_mut().handle_delete_click(icon_point(1));
    assert_eq!(*deleted.lock(), vec!["y"]);
}
