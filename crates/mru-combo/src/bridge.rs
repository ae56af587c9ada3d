//! Native input bridge for the open drop-down list.
//!
//! The popup list of a native combo box is a separate window whose clicks the
//! toolkit never reports back to the combo box. To make the delete icons
//! clickable the widget watches raw messages on that window and turns
//! left-button releases into [`MouseReleaseEvent`]s in list coordinates.
//!
//! Everything platform-specific sits behind [`NativeHost`]:
//!
//! 1. On handle creation the widget asks the host for the popup list handle.
//! 2. If there is one, the host is asked to start routing that window's
//!    messages to [`MruComboBox::handle_popup_message`](crate::MruComboBox::handle_popup_message).
//! 3. The host keeps passing every message on to the default window procedure;
//!    the widget only observes.
//!
//! Hosts without a native popup (or tests) can implement the trait directly.
//! See [`Win32Host`](crate::platform::Win32Host) for the Windows implementation.

use mru_combo_core::Point;
use mru_combo_core::logging::targets;

use crate::error::BridgeError;

/// Left mouse button released (`WM_LBUTTONUP`).
pub const WM_LBUTTONUP: u32 = 0x0202;

/// An opaque native window handle.
///
/// The widget borrows handles, it never owns or destroys the windows behind them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NativeHandle(isize);

impl NativeHandle {
    /// Wrap a raw handle value.
    pub const fn new(raw: isize) -> Self {
        Self(raw)
    }

    /// The raw handle value.
    pub const fn raw(self) -> isize {
        self.0
    }

    /// Whether this is the null handle.
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// A raw window message as delivered to a window procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeMessage {
    pub msg: u32,
    pub wparam: usize,
    pub lparam: isize,
}

impl NativeMessage {
    /// Create a message from its raw parts.
    pub const fn new(msg: u32, wparam: usize, lparam: isize) -> Self {
        Self {
            msg,
            wparam,
            lparam,
        }
    }

    /// A left-button release at client coordinates `(x, y)`.
    pub fn left_button_up(x: u16, y: u16) -> Self {
        Self::new(WM_LBUTTONUP, 0, pack_coordinates(x, y))
    }
}

/// Pack client coordinates the way pointer messages carry them:
/// x in the low word, y in the high word.
pub fn pack_coordinates(x: u16, y: u16) -> isize {
    ((y as isize) << 16) | x as isize
}

/// Unpack client coordinates from a pointer message's `lparam`.
///
/// Both words are read as unsigned 16-bit values.
pub fn decode_coordinates(lparam: isize) -> Point {
    let x = (lparam & 0xFFFF) as f32;
    let y = ((lparam >> 16) & 0xFFFF) as f32;
    Point::new(x, y)
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// A button release in popup list coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseReleaseEvent {
    /// The released button.
    pub button: MouseButton,
    /// Position relative to the popup list's client area.
    pub local_pos: Point,
}

impl MouseReleaseEvent {
    /// Create a left-button release at `local_pos`.
    pub fn left(local_pos: Point) -> Self {
        Self {
            button: MouseButton::Left,
            local_pos,
        }
    }
}

/// Native windowing capabilities the widget needs from its host.
pub trait NativeHost: Send {
    /// Resolve the popup list window belonging to the combo box `combo`.
    ///
    /// Returns `None` when the host has no such window.
    fn popup_list_handle(&self, combo: NativeHandle) -> Option<NativeHandle>;

    /// Start routing `list`'s messages to the widget.
    fn intercept_messages(&mut self, list: NativeHandle) -> Result<(), BridgeError>;

    /// Give keyboard focus back to the combo box.
    fn set_focus(&mut self, combo: NativeHandle);
}

/// An attached popup list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupListBridge {
    list: NativeHandle,
}

impl PopupListBridge {
    /// Resolve the popup list of `combo` and start intercepting its messages.
    pub fn attach(host: &mut dyn NativeHost, combo: NativeHandle) -> Result<Self, BridgeError> {
        let list = host
            .popup_list_handle(combo)
            .filter(|list| !list.is_null())
            .ok_or(BridgeError::HandleUnavailable)?;

        host.intercept_messages(list)?;
        tracing::debug!(
            target: targets::BRIDGE,
            combo = combo.raw(),
            list = list.raw(),
            "attached popup list bridge"
        );
        Ok(Self { list })
    }

    /// The popup list handle.
    pub fn handle(&self) -> NativeHandle {
        self.list
    }

    /// Translate a popup list message into a mouse release, if it is one.
    pub fn translate(&self, message: &NativeMessage) -> Option<MouseReleaseEvent> {
        match message.msg {
            WM_LBUTTONUP => {
                let local_pos = decode_coordinates(message.lparam);
                tracing::trace!(target: targets::BRIDGE, x = local_pos.x, y = local_pos.y, "popup list button up");
                Some(MouseReleaseEvent::left(local_pos))
            }
            _ => None,
        }
    }
}
