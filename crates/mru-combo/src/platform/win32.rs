//! Win32 host: finds the drop-down list window with `GetComboBoxInfo` and
//! subclasses it with `SetWindowSubclass` to observe its messages.

use std::sync::Weak;

use mru_combo_core::logging::targets;
use parking_lot::Mutex;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::Input::KeyboardAndMouse::SetFocus;
use windows::Win32::UI::Shell::{
    DefSubclassProc, GetWindowSubclass, RemoveWindowSubclass, SetWindowSubclass,
};
use windows::Win32::UI::WindowsAndMessaging::{COMBOBOXINFO, GetComboBoxInfo, WM_NCDESTROY};

use crate::bridge::{NativeHandle, NativeHost, NativeMessage};
use crate::combo_box::MruComboBox;
use crate::error::BridgeError;

/// Subclass id used for the popup list window.
const SUBCLASS_ID: usize = 0x4D52_5543;

type SharedCombo = Weak<Mutex<MruComboBox>>;

/// [`NativeHost`] backed by the Win32 combo box control.
///
/// The host holds a weak reference to the widget it serves, so it is normally
/// built inside [`std::sync::Arc::new_cyclic`]:
///
/// ```ignore
/// let combo = Arc::new_cyclic(|weak| {
///     Mutex::new(MruComboBox::new().with_host(Win32Host::new(weak.clone())))
/// });
/// ```
#[derive(Debug)]
pub struct Win32Host {
    combo: SharedCombo,
}

impl Win32Host {
    /// Create a host that routes popup messages to `combo`.
    pub fn new(combo: SharedCombo) -> Self {
        Self { combo }
    }
}

fn to_hwnd(handle: NativeHandle) -> HWND {
    HWND(handle.raw() as *mut _)
}

impl NativeHost for Win32Host {
    fn popup_list_handle(&self, combo: NativeHandle) -> Option<NativeHandle> {
        let mut info = COMBOBOXINFO {
            cbSize: std::mem::size_of::<COMBOBOXINFO>() as u32,
            ..Default::default()
        };

        // SAFETY: `info` is a properly sized COMBOBOXINFO that outlives the call.
        // An invalid combo handle makes the call fail, it does not touch `info`.
        let result = unsafe { GetComboBoxInfo(to_hwnd(combo), &mut info) };
        if let Err(err) = result {
            tracing::debug!(target: targets::BRIDGE, %err, "GetComboBoxInfo failed");
            return None;
        }

        let list = NativeHandle::new(info.hwndList.0 as isize);
        (!list.is_null()).then_some(list)
    }

    fn intercept_messages(&mut self, list: NativeHandle) -> Result<(), BridgeError> {
        if list.is_null() {
            return Err(BridgeError::InvalidHandle(list.raw()));
        }

        let hwnd = to_hwnd(list);

        // Reattaching replaces the ref data of an existing subclass.
        let mut previous = 0usize;
        // SAFETY: `previous` is a valid out pointer for the duration of the call.
        let reinstalling = unsafe {
            GetWindowSubclass(hwnd, Some(popup_subclass_proc), SUBCLASS_ID, Some(&mut previous as *mut usize))
        }
        .as_bool();

        let ref_data = Box::into_raw(Box::new(self.combo.clone()));

        // SAFETY: `ref_data` is a leaked box that only `popup_subclass_proc`
        // reads. It is reclaimed below on failure, or by the subclass proc on
        // WM_NCDESTROY.
        let installed = unsafe {
            SetWindowSubclass(hwnd, Some(popup_subclass_proc), SUBCLASS_ID, ref_data as usize)
        };

        if installed.as_bool() {
            if reinstalling && previous != 0 {
                // SAFETY: `previous` was boxed by an earlier call and the
                // subclass no longer refers to it.
                drop(unsafe { Box::from_raw(previous as *mut SharedCombo) });
                tracing::debug!(target: targets::BRIDGE, list = list.raw(), "replaced popup list subclass");
            }
        } else {
            // SAFETY: the subclass was not installed, so nothing else holds the box.
            drop(unsafe { Box::from_raw(ref_data) });
            return Err(BridgeError::InterceptFailed(format!(
                "SetWindowSubclass failed for list {:#x}",
                list.raw()
            )));
        }
        Ok(())
    }

    fn set_focus(&mut self, combo: NativeHandle) {
        // SAFETY: SetFocus validates the handle and reports failure.
        if let Err(err) = unsafe { SetFocus(to_hwnd(combo)) } {
            tracing::debug!(target: targets::BRIDGE, %err, "SetFocus failed");
        }
    }
}

/// Subclass procedure installed on the popup list.
///
/// Forwards every message to the widget and always continues with the default
/// procedure.
unsafe extern "system" fn popup_subclass_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
    _id: usize,
    ref_data: usize,
) -> LRESULT {
    let combo = ref_data as *const SharedCombo;

    if msg == WM_NCDESTROY {
        // SAFETY: `ref_data` came from `Box::into_raw` in `intercept_messages`
        // and WM_NCDESTROY is the last message the window receives.
        unsafe {
            let _ = RemoveWindowSubclass(hwnd, Some(popup_subclass_proc), SUBCLASS_ID);
            drop(Box::from_raw(combo as *mut SharedCombo));
        }
    } else {
        // SAFETY: the box stays alive until WM_NCDESTROY.
        let weak = unsafe { &*combo };
        if let Some(shared) = weak.upgrade() {
            // The widget may already be locked when a message arrives
            // re-entrantly; skip it then.
            if let Some(mut guard) = shared.try_lock() {
                let message = NativeMessage::new(msg, wparam.0, lparam.0);
                guard.handle_popup_message(&message);
            }
        }
    }

    // SAFETY: called from within a subclass procedure with its own arguments.
    unsafe { DefSubclassProc(hwnd, msg, wparam, lparam) }
}
