//! Mock input injector for tests and dry runs.
//!
//! # Why a mock injector?
//!
//! The real injector calls `SendInput`, which:
//!
//! - Requires an interactive Windows desktop.
//! - Actually presses keys on the machine running the tests.
//! - Cannot be observed directly from Rust test code.
//!
//! `MockInjector` replaces the OS call with in-memory recording.  Every input
//! is pushed into a `Mutex<Vec<...>>` so assertions can inspect exactly what
//! was sent and in what order.
//!
//! # Usage in tests
//!
//! ```
//! use std::sync::Arc;
//! use keypress_controller::{infrastructure::input_injection::mock::MockInjector, KeyInputController};
//!
//! let injector = Arc::new(MockInjector::new());
//! let mut controller = KeyInputController::new(injector.clone());
//!
//! controller.press("A").unwrap();
//!
//! assert_eq!(injector.key_downs(), vec![0x1E]);
//! ```
//!
//! # Simulating OS failures
//!
//! Call [`MockInjector::set_failing`] to make every call report zero events
//! queued, or [`MockInjector::refuse_scancode`] to fail only one key.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Mutex,
};

use keypress_core::{
    input::{MouseInput, SyntheticInput},
    Scancode,
};

use crate::application::key_input::InputInjector;

/// An injector that records every input instead of calling the OS.
#[derive(Default)]
pub struct MockInjector {
    /// Every accepted input, in order.
    pub inputs: Mutex<Vec<SyntheticInput>>,
    failing: AtomicBool,
    refused: Mutex<Vec<Scancode>>,
}

impl MockInjector {
    pub fn new() -> Self {
        Self::default()
    }

    /// When `true`, every call reports zero events queued and records nothing.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Refuses keyboard inputs carrying `scancode` from now on.
    pub fn refuse_scancode(&self, scancode: Scancode) {
        self.refused.lock().unwrap().push(scancode);
    }

    /// Scancodes of recorded keyboard key-down events.
    pub fn key_downs(&self) -> Vec<Scancode> {
        self.keyboard_codes(false)
    }

    /// Scancodes of recorded keyboard key-up events.
    pub fn key_ups(&self) -> Vec<Scancode> {
        self.keyboard_codes(true)
    }

    /// Recorded mouse events.
    pub fn mouse_events(&self) -> Vec<MouseInput> {
        self.inputs
            .lock()
            .unwrap()
            .iter()
            .filter_map(|input| match input {
                SyntheticInput::Mouse(mi) => Some(*mi),
                SyntheticInput::Keyboard(_) => None,
            })
            .collect()
    }

    /// Number of recorded inputs.
    pub fn len(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forgets everything recorded so far.
    pub fn clear(&self) {
        self.inputs.lock().unwrap().clear();
    }

    fn keyboard_codes(&self, key_up: bool) -> Vec<Scancode> {
        self.inputs
            .lock()
            .unwrap()
            .iter()
            .filter_map(|input| match input {
                SyntheticInput::Keyboard(ki) if ki.flags.key_up() == key_up => Some(ki.scancode),
                _ => None,
            })
            .collect()
    }
}

impl InputInjector for MockInjector {
    /// Records each accepted input and returns how many were accepted.
    fn send_inputs(&self, inputs: &[SyntheticInput]) -> u32 {
        if self.failing.load(Ordering::SeqCst) {
            return 0;
        }
        let refused = self.refused.lock().unwrap();
        let mut recorded = self.inputs.lock().unwrap();
        let mut queued = 0;
        for input in inputs {
            if let SyntheticInput::Keyboard(ki) = input {
                if refused.contains(&ki.scancode) {
                    continue;
                }
            }
            recorded.push(*input);
            queued += 1;
        }
        queued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keypress_core::InputAction;

    #[test]
    fn test_records_inputs_in_order() {
        // Arrange
        let mock = MockInjector::new();
        let down = SyntheticInput::keyboard(0x10, InputAction::Press);
        let up = SyntheticInput::keyboard(0x10, InputAction::Release);

        // Act
        assert_eq!(mock.send_inputs(&[down]), 1);
        assert_eq!(mock.send_inputs(&[up]), 1);

        // Assert
        assert_eq!(*mock.inputs.lock().unwrap(), vec![down, up]);
        assert_eq!(mock.key_downs(), vec![0x10]);
        assert_eq!(mock.key_ups(), vec![0x10]);
    }

    #[test]
    fn test_failing_reports_zero_and_records_nothing() {
        let mock = MockInjector::new();
        mock.set_failing(true);

        let queued = mock.send_inputs(&[SyntheticInput::keyboard(0x10, InputAction::Press)]);

        assert_eq!(queued, 0);
        assert!(mock.is_empty());
    }

    #[test]
    fn test_refused_scancode_only_affects_that_key() {
        let mock = MockInjector::new();
        mock.refuse_scancode(0x39);

        let batch = [
            SyntheticInput::keyboard(0x39, InputAction::Press),
            SyntheticInput::keyboard(0x1E, InputAction::Press),
        ];

        assert_eq!(mock.send_inputs(&batch), 1);
        assert_eq!(mock.key_downs(), vec![0x1E]);
    }

    #[test]
    fn test_mouse_events_are_separated() {
        let mock = MockInjector::new();
        mock.send_inputs(&[SyntheticInput::mouse(0x0002, 0)]);

        assert_eq!(mock.mouse_events().len(), 1);
        assert!(mock.key_downs().is_empty());
    }

    #[test]
    fn test_clear() {
        let mock = MockInjector::new();
        mock.send_inputs(&[SyntheticInput::keyboard(0x01, InputAction::Press)]);
        mock.clear();
        assert_eq!(mock.len(), 0);
    }
}
