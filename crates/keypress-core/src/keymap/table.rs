//! Key name → scancode table.
//!
//! Keyboard entries are DirectInput `DIK_*` scancodes (IBM PC scan code set 1,
//! with `0x80` set on the extended keys such as the arrows).  Reference:
//! Visual Studio 6.0 DirectInput keyboard device constants.
//!
//! # Mouse pseudo-scancodes
//!
//! Mouse buttons and wheel notches do not have keyboard scancodes.  They are
//! layered into the same code space starting at [`MOUSE_CODE_BASE`] (`0x100`),
//! which is above anything a set-1 scancode can hold in one byte.  The input
//! builder routes these codes to a separate mouse event path; they are never
//! sent to the OS as keyboard scancodes.
//!
//! Order matters: [`KEY_TABLE`] is listed in the order the names are reported
//! to the user when a lookup fails.

use super::Scancode;

/// First pseudo-scancode used for mouse buttons and the wheel.
pub const MOUSE_CODE_BASE: Scancode = 0x100;

/// Every valid key name (upper case) paired with its scancode.
///
/// Names are unique.  Codes are not: `DELETE` and `NUMPAD_PERIOD` share
/// `0x53` because they are the same physical scan position.
pub const KEY_TABLE: &[(&str, Scancode)] = &[
    // ── Letters ───────────────────────────────────────────────────────────────
    ("Q", 0x10),
    ("E", 0x12),
    ("W", 0x11),
    ("R", 0x13),
    ("T", 0x14),
    ("Y", 0x15),
    ("U", 0x16),
    ("I", 0x17),
    ("O", 0x18),
    ("P", 0x19),
    ("A", 0x1E),
    ("S", 0x1F),
    ("D", 0x20),
    ("F", 0x21),
    ("G", 0x22),
    ("H", 0x23),
    ("J", 0x24),
    ("K", 0x25),
    ("L", 0x26),
    ("Z", 0x2C),
    ("X", 0x2D),
    ("C", 0x2E),
    ("V", 0x2F),
    ("B", 0x30),
    ("N", 0x31),
    ("M", 0x32),
    // ── Arrow keys (extended) ─────────────────────────────────────────────────
    ("LEFT_ARROW", 0xCB),
    ("RIGHT_ARROW", 0xCD),
    ("UP_ARROW", 0xC8),
    ("DOWN_ARROW", 0xD0),
    // ── Escape and digit row ──────────────────────────────────────────────────
    ("ESC", 0x01),
    ("ONE", 0x02),
    ("TWO", 0x03),
    ("THREE", 0x04),
    ("FOUR", 0x05),
    ("FIVE", 0x06),
    ("SIX", 0x07),
    ("SEVEN", 0x08),
    ("EIGHT", 0x09),
    ("NINE", 0x0A),
    ("ZERO", 0x0B),
    ("MINUS", 0x0C),
    ("EQUALS", 0x0D),
    ("BACKSPACE", 0x0E),
    // ── Control and punctuation ───────────────────────────────────────────────
    ("APOSTROPHE", 0x28),
    ("SEMICOLON", 0x27),
    ("TAB", 0x0F),
    ("CAPSLOCK", 0x3A),
    ("ENTER", 0x1C),
    ("LEFT_CONTROL", 0x1D),
    ("LEFT_ALT", 0x38),
    ("LEFT_SHIFT", 0x2A),
    ("RIGHT_SHIFT", 0x36),
    ("TILDE", 0x29),
    ("PRINTSCREEN", 0x37),
    ("NUM_LOCK", 0x45),
    ("SPACE", 0x39),
    ("DELETE", 0x53),
    ("COMMA", 0x33),
    ("PERIOD", 0x34),
    ("BACKSLASH", 0x35),
    ("FORWARDSLASH", 0x2B),
    ("LEFT_BRACKET", 0x1A),
    ("RIGHT_BRACKET", 0x1B),
    // ── Function keys ─────────────────────────────────────────────────────────
    ("F1", 0x3B),
    ("F2", 0x3C),
    ("F3", 0x3D),
    ("F4", 0x3E),
    ("F5", 0x3F),
    ("F6", 0x40),
    ("F7", 0x41),
    ("F8", 0x42),
    ("F9", 0x43),
    ("F10", 0x44),
    ("F11", 0x57),
    ("F12", 0x58),
    // ── Numpad ────────────────────────────────────────────────────────────────
    ("NUMPAD_0", 0x52),
    ("NUMPAD_1", 0x4F),
    ("NUMPAD_2", 0x50),
    ("NUMPAD_3", 0x51),
    ("NUMPAD_4", 0x4B),
    ("NUMPAD_5", 0x4C),
    ("NUMPAD_6", 0x4D),
    ("NUMPAD_7", 0x47),
    ("NUMPAD_8", 0x48),
    ("NUMPAD_9", 0x49),
    ("NUMPAD_PLUS", 0x4E),
    ("NUMPAD_MINUS", 0x4A),
    ("NUMPAD_PERIOD", 0x53),
    ("NUMPAD_ENTER", 0x9C),
    ("NUMPAD_BACKSLASH", 0xB5),
    // ── Mouse (pseudo-scancodes, see module docs) ─────────────────────────────
    ("LEFT_MOUSE", 0x100),
    ("RIGHT_MOUSE", 0x101),
    ("MIDDLE_MOUSE", 0x102),
    ("MOUSE3", 0x103),
    ("MOUSE4", 0x104),
    ("MOUSE5", 0x105),
    ("MOUSE6", 0x106),
    ("MOUSE7", 0x107),
    ("MOUSE_WHEEL_UP", 0x108),
    ("MOUSE_WHEEL_DOWN", 0x109),
];
