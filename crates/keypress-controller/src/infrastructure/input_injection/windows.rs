//! Windows input injection via the SendInput API.
//!
//! Converts the owned [`SyntheticInput`] records into native `INPUT`
//! structures and queues them with `SendInput`.  No translation happens here:
//! scancodes and flags were already decided by the input builder.

#![cfg(target_os = "windows")]

use keypress_core::input::{KeyboardInput, MouseInput, SyntheticInput};
use tracing::warn;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBDINPUT, KEYBD_EVENT_FLAGS,
    MOUSEINPUT, MOUSE_EVENT_FLAGS, VIRTUAL_KEY,
};

use crate::application::key_input::InputInjector;

/// Windows implementation of [`InputInjector`] using SendInput.
pub struct WindowsInjector;

impl WindowsInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl InputInjector for WindowsInjector {
    fn send_inputs(&self, inputs: &[SyntheticInput]) -> u32 {
        let native: Vec<INPUT> = inputs.iter().map(to_native).collect();
        // SAFETY: every element is a fully initialised INPUT and cbSize is
        // the size of one element.
        let queued = unsafe { SendInput(&native, std::mem::size_of::<INPUT>() as i32) };
        if queued as usize != native.len() {
            // SendInput returns 0 when the input was blocked (e.g. UIPI).
            warn!(
                requested = native.len(),
                queued,
                error = %windows::core::Error::from_win32(),
                "SendInput did not queue every event"
            );
        }
        queued
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_native(input: &SyntheticInput) -> INPUT {
    match input {
        SyntheticInput::Keyboard(ki) => keyboard_input(ki),
        SyntheticInput::Mouse(mi) => mouse_input(mi),
    }
}

fn keyboard_input(ki: &KeyboardInput) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(ki.virtual_key),
                wScan: ki.scancode,
                dwFlags: KEYBD_EVENT_FLAGS(ki.flags.0),
                time: ki.time,
                dwExtraInfo: ki.extra_info,
            },
        },
    }
}

fn mouse_input(mi: &MouseInput) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: mi.dx,
                dy: mi.dy,
                mouseData: mi.mouse_data,
                dwFlags: MOUSE_EVENT_FLAGS(mi.flags.0),
                time: mi.time,
                dwExtraInfo: mi.extra_info,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypress_core::input::{KeyEventFlags, MouseEventFlags};
    use keypress_core::InputAction;
    use windows::Win32::UI::Input::KeyboardAndMouse::{
        KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, KEYEVENTF_SCANCODE, KEYEVENTF_UNICODE,
        MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP,
        MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, MOUSEEVENTF_WHEEL, MOUSEEVENTF_XDOWN,
        MOUSEEVENTF_XUP,
    };
    use windows::Win32::UI::WindowsAndMessaging::{WHEEL_DELTA, XBUTTON1, XBUTTON2};

    #[test]
    fn test_key_flag_constants_match_win32() {
        assert_eq!(KeyEventFlags::EXTENDED_KEY, KEYEVENTF_EXTENDEDKEY.0);
        assert_eq!(KeyEventFlags::KEY_UP, KEYEVENTF_KEYUP.0);
        assert_eq!(KeyEventFlags::UNICODE, KEYEVENTF_UNICODE.0);
        assert_eq!(KeyEventFlags::SCANCODE, KEYEVENTF_SCANCODE.0);
    }

    #[test]
    fn test_mouse_flag_constants_match_win32() {
        assert_eq!(MouseEventFlags::LEFT_DOWN, MOUSEEVENTF_LEFTDOWN.0);
        assert_eq!(MouseEventFlags::LEFT_UP, MOUSEEVENTF_LEFTUP.0);
        assert_eq!(MouseEventFlags::RIGHT_DOWN, MOUSEEVENTF_RIGHTDOWN.0);
        assert_eq!(MouseEventFlags::RIGHT_UP, MOUSEEVENTF_RIGHTUP.0);
        assert_eq!(MouseEventFlags::MIDDLE_DOWN, MOUSEEVENTF_MIDDLEDOWN.0);
        assert_eq!(MouseEventFlags::MIDDLE_UP, MOUSEEVENTF_MIDDLEUP.0);
        assert_eq!(MouseEventFlags::X_DOWN, MOUSEEVENTF_XDOWN.0);
        assert_eq!(MouseEventFlags::X_UP, MOUSEEVENTF_XUP.0);
        assert_eq!(MouseEventFlags::WHEEL, MOUSEEVENTF_WHEEL.0);
        assert_eq!(keypress_core::input::event::XBUTTON1, XBUTTON1 as u32);
        assert_eq!(keypress_core::input::event::XBUTTON2, XBUTTON2 as u32);
        assert_eq!(keypress_core::input::event::WHEEL_DELTA, WHEEL_DELTA as i32);
    }

    #[test]
    fn test_keyboard_input_converts_field_for_field() {
        // Arrange
        let input = SyntheticInput::keyboard(0x39, InputAction::Release);

        // Act
        let native = to_native(&input);

        // Assert
        assert_eq!(native.r#type, INPUT_KEYBOARD);
        // SAFETY: the keyboard variant was written above.
        let ki = unsafe { native.Anonymous.ki };
        assert_eq!(ki.wVk, VIRTUAL_KEY(0));
        assert_eq!(ki.wScan, 0x39);
        assert_eq!(ki.dwFlags, KEYEVENTF_SCANCODE | KEYEVENTF_KEYUP);
        assert_eq!(ki.time, 0);
        assert_eq!(ki.dwExtraInfo, 0);
    }

    #[test]
    fn test_mouse_input_converts_field_for_field() {
        let input = SyntheticInput::mouse(MouseEventFlags::X_DOWN, 2);

        let native = to_native(&input);

        assert_eq!(native.r#type, INPUT_MOUSE);
        // SAFETY: the mouse variant was written above.
        let mi = unsafe { native.Anonymous.mi };
        assert_eq!(mi.dwFlags, MOUSEEVENTF_XDOWN);
        assert_eq!(mi.mouseData, 2);
        assert_eq!((mi.dx, mi.dy), (0, 0));
    }
}
