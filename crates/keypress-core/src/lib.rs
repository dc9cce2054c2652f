//! # keypress-core
//!
//! Shared library for KeyPresser containing the key name table, the
//! scancode lookup, and the owned synthetic-input structures handed to the
//! OS injection primitive.
//!
//! This crate has zero dependencies on OS APIs.  Everything that actually
//! touches the operating system lives in `keypress-controller`.
//!
//! # Architecture overview (for beginners)
//!
//! KeyPresser lets a program press and release keyboard keys and mouse
//! buttons by *name* (`"SPACE"`, `"LEFT_MOUSE"`).  Two things have to happen
//! before the OS sees anything:
//!
//! - **`keymap`** – The human-readable name is looked up (case-insensitively)
//!   in a fixed table and turned into a hardware *scancode*, the number the
//!   keyboard itself would send for that physical key position.
//!
//! - **`input`** – The scancode plus a direction (press or release) is turned
//!   into exactly one [`SyntheticInput`]: a plain Rust struct carrying the
//!   fields the OS injection call expects (type tag, code, flags and the
//!   reserved time/extra-info fields).

pub mod input;
pub mod keymap;

pub use input::{build_input, BuildError, InputAction, SyntheticInput};
pub use keymap::{lookup, Key, Scancode, UnknownKeyError};
