//! Native event delivery for the thread that owns the hotkey manager.
//!
//! On Windows, `WM_HOTKEY` goes to a hidden window owned by the registering
//! thread. It only reaches the event receiver once that thread dispatches
//! its message queue. X11 runs its own listener thread, so nothing is needed
//! there. macOS only delivers hotkeys to the main thread's run loop and is
//! not supported by the background listener.

/// Dispatch every message queued for the current thread without blocking
#[cfg(windows)]
pub fn pump_messages() {
    use windows::Win32::UI::WindowsAndMessaging::{
        DispatchMessageW, MSG, PM_REMOVE, PeekMessageW, TranslateMessage,
    };

    unsafe {
        let mut msg = MSG::default();
        while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }
}

#[cfg(not(windows))]
pub fn pump_messages() {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pump_returns_with_empty_queue() {
        pump_messages();
        pump_messages();
    }
}
