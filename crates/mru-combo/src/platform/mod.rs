//! Platform hosts for the native popup list bridge.
//!
//! Only Windows has a native host today. On other platforms the widget runs
//! without a bridge and callers feed [`MouseReleaseEvent`](crate::MouseReleaseEvent)s
//! to [`MruComboBox::on_popup_mouse_release`](crate::MruComboBox::on_popup_mouse_release)
//! themselves.

#[cfg(target_os = "windows")]
mod win32;

#[cfg(target_os = "windows")]
pub use win32::Win32Host;
