//! keypress-controller library entry point.
//!
//! # What does keypress-controller do? (for beginners)
//!
//! It lets a program press, hold and release keyboard keys and mouse buttons
//! *by name*, as if a user were doing it:
//!
//! 1. The name (`"space"`, `"LEFT_MOUSE"`) is validated and translated to a
//!    scancode by `keypress_core::keymap`.
//! 2. The [`KeyInputController`] builds one synthetic input event and hands it
//!    to an [`InputInjector`], which on Windows calls `SendInput`.
//! 3. The controller remembers which keys it is holding so that
//!    [`KeyInputController::release_all`] can let go of all of them.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use keypress_controller::{infrastructure::input_injection::platform_injector, KeyInputController};
//!
//! let injector = platform_injector().expect("SendInput is available");
//! let mut controller = KeyInputController::new(injector);
//! controller.press("LEFT_SHIFT").unwrap();
//! controller.press_and_hold("w", Duration::from_millis(500)).unwrap();
//! controller.release_all();
//! ```

/// Application layer: the key input controller.
pub mod application;

/// Infrastructure layer: OS injectors and configuration storage.
pub mod infrastructure;

pub use application::key_input::{
    ControllerError, ControllerSettings, InjectionError, InputInjector, KeyInputController,
    ReleaseSummary,
};
