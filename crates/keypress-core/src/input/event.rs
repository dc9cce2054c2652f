//! Owned synthetic input records.
//!
//! These mirror the Win32 `INPUT` / `KEYBDINPUT` / `MOUSEINPUT` layout field
//! for field, but are plain Rust values with no OS dependency.  The platform
//! injector converts them into the native structure right before the call.
//!
//! # Flag values (for beginners)
//!
//! The OS primitive reads a bit set to decide what the event means.  For a
//! keyboard event built from a scancode:
//!
//! | Transition | Flags                                   |
//! |------------|-----------------------------------------|
//! | Press      | `SCANCODE` (`0x0008`)                   |
//! | Release    | `SCANCODE \| KEYUP` (`0x0008 \| 0x0002`) |
//!
//! Mouse events use a separate bit set where each button has its own
//! "down" and "up" bit.

use crate::keymap::Scancode;

/// Direction of a key or button transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    Press,
    Release,
}

impl std::fmt::Display for InputAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Press => f.write_str("press"),
            Self::Release => f.write_str("release"),
        }
    }
}

/// Keyboard event flag bits (`dwFlags` of `KEYBDINPUT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyEventFlags(pub u32);

impl KeyEventFlags {
    pub const EXTENDED_KEY: u32 = 0x0001;
    pub const KEY_UP: u32 = 0x0002;
    pub const UNICODE: u32 = 0x0004;
    pub const SCANCODE: u32 = 0x0008;

    /// Returns `true` if the event releases the key.
    pub fn key_up(&self) -> bool {
        self.0 & Self::KEY_UP != 0
    }

    /// Returns `true` if `wScan` carries the code and `wVk` is ignored.
    pub fn scancode(&self) -> bool {
        self.0 & Self::SCANCODE != 0
    }
}

/// Mouse event flag bits (`dwFlags` of `MOUSEINPUT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MouseEventFlags(pub u32);

impl MouseEventFlags {
    pub const LEFT_DOWN: u32 = 0x0002;
    pub const LEFT_UP: u32 = 0x0004;
    pub const RIGHT_DOWN: u32 = 0x0008;
    pub const RIGHT_UP: u32 = 0x0010;
    pub const MIDDLE_DOWN: u32 = 0x0020;
    pub const MIDDLE_UP: u32 = 0x0040;
    pub const X_DOWN: u32 = 0x0080;
    pub const X_UP: u32 = 0x0100;
    pub const WHEEL: u32 = 0x0800;
}

/// `mouseData` value selecting the first extra button.
pub const XBUTTON1: u32 = 0x0001;
/// `mouseData` value selecting the second extra button.
pub const XBUTTON2: u32 = 0x0002;
/// One wheel detent.
pub const WHEEL_DELTA: i32 = 120;

/// Keyboard half of the input union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardInput {
    /// Always 0 in scancode mode.
    pub virtual_key: u16,
    pub scancode: u16,
    pub flags: KeyEventFlags,
    /// 0 lets the OS stamp the event.
    pub time: u32,
    pub extra_info: usize,
}

/// Mouse half of the input union.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub dx: i32,
    pub dy: i32,
    /// X button selector or signed wheel delta, depending on `flags`.
    pub mouse_data: u32,
    pub flags: MouseEventFlags,
    pub time: u32,
    pub extra_info: usize,
}

/// One event for the OS input queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntheticInput {
    Keyboard(KeyboardInput),
    Mouse(MouseInput),
}

impl SyntheticInput {
    /// Builds a scancode-mode keyboard event.
    pub fn keyboard(scancode: Scancode, action: InputAction) -> Self {
        let mut flags = KeyEventFlags::SCANCODE;
        if action == InputAction::Release {
            flags |= KeyEventFlags::KEY_UP;
        }
        Self::Keyboard(KeyboardInput {
            virtual_key: 0,
            scancode,
            flags: KeyEventFlags(flags),
            time: 0,
            extra_info: 0,
        })
    }

    /// Builds a mouse button or wheel event with no pointer motion.
    pub fn mouse(flags: u32, mouse_data: u32) -> Self {
        Self::Mouse(MouseInput {
            dx: 0,
            dy: 0,
            mouse_data,
            flags: MouseEventFlags(flags),
            time: 0,
            extra_info: 0,
        })
    }

    /// Numeric `type` tag of the native `INPUT` structure.
    pub fn type_tag(&self) -> u32 {
        match self {
            Self::Mouse(_) => 0,
            Self::Keyboard(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyboard_press_uses_scancode_flag_only() {
        // Arrange / Act
        let input = SyntheticInput::keyboard(0x39, InputAction::Press);

        // Assert
        let SyntheticInput::Keyboard(ki) = input else {
            panic!("expected keyboard input");
        };
        assert_eq!(ki.flags.0, 0x0008);
        assert_eq!(ki.scancode, 0x39);
        assert_eq!(ki.virtual_key, 0);
        assert!(!ki.flags.key_up());
    }

    #[test]
    fn test_keyboard_release_adds_key_up_flag() {
        let SyntheticInput::Keyboard(ki) = SyntheticInput::keyboard(0x1E, InputAction::Release)
        else {
            panic!("expected keyboard input");
        };
        assert_eq!(ki.flags.0, 0x000A);
        assert!(ki.flags.key_up());
        assert!(ki.flags.scancode());
    }

    #[test]
    fn test_reserved_fields_are_zero() {
        let SyntheticInput::Keyboard(ki) = SyntheticInput::keyboard(0x01, InputAction::Press)
        else {
            panic!("expected keyboard input");
        };
        assert_eq!(ki.time, 0);
        assert_eq!(ki.extra_info, 0);
    }

    #[test]
    fn test_type_tags_match_native_constants() {
        // INPUT_MOUSE = 0, INPUT_KEYBOARD = 1
        assert_eq!(SyntheticInput::mouse(MouseEventFlags::LEFT_DOWN, 0).type_tag(), 0);
        assert_eq!(SyntheticInput::keyboard(0x10, InputAction::Press).type_tag(), 1);
    }

    #[test]
    fn test_action_display() {
        assert_eq!(InputAction::Press.to_string(), "press");
        assert_eq!(InputAction::Release.to_string(), "release");
    }
}
