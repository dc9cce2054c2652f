//! KeyInputController: validates key names, injects press/release events,
//! and tracks which keys this process is holding down.
//!
//! The controller sits at the application layer and delegates the actual OS
//! call to an [`InputInjector`] trait object.  Platform implementations are in
//! the infrastructure layer.
//!
//! # Held-keys bookkeeping (for beginners)
//!
//! The OS does not tell us which keys *we* pressed.  The controller therefore
//! keeps its own set of canonical key names:
//!
//! - `press` adds a name only after the OS accepted the key-down event.
//! - `release` removes a name only after the OS accepted the key-up event.
//!
//! If an injection fails the set is left untouched, so a key whose release was
//! lost is still reported as held and `release_all` will try it again.
//!
//! The set can drift from the real keyboard state if something else presses
//! or releases the same keys; it is never reconciled with the hardware.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use keypress_core::{
    build_input, keymap, BuildError, InputAction, Key, SyntheticInput, UnknownKeyError,
};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Error type for the OS injection step.
#[derive(Debug, Error)]
pub enum InjectionError {
    /// The primitive reported zero events queued.
    #[error("OS queued no events for {action} of {key}")]
    NothingQueued {
        key: &'static str,
        action: InputAction,
    },
    #[error("{key} has no native mouse button equivalent")]
    UnsupportedMouseButton { key: &'static str },
    #[error("mouse input is disabled; refusing to {action} {key}")]
    MouseDisabled {
        key: &'static str,
        action: InputAction,
    },
    #[error("input injection is not supported on this platform")]
    UnsupportedPlatform,
}

impl From<BuildError> for InjectionError {
    fn from(err: BuildError) -> Self {
        match err {
            BuildError::UnsupportedMouseButton { name } => Self::UnsupportedMouseButton { key: name },
        }
    }
}

/// Error type returned by every controller operation.
#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    UnknownKey(#[from] UnknownKeyError),
    #[error("input injection failed: {0}")]
    Injection(#[from] InjectionError),
}

/// The OS input-injection primitive.
///
/// Mirrors `SendInput`: takes a batch of events and returns how many were
/// placed on the input queue.  The controller always passes exactly one.
#[cfg_attr(test, mockall::automock)]
pub trait InputInjector: Send + Sync {
    fn send_inputs(&self, inputs: &[SyntheticInput]) -> u32;
}

/// Tunables for [`KeyInputController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// Hold time used by [`KeyInputController::tap`].
    pub default_hold: Duration,
    /// Release every held key when the controller is dropped.
    pub release_on_drop: bool,
    /// Allow mouse button and wheel names.
    pub mouse_enabled: bool,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            default_hold: Duration::from_millis(100),
            release_on_drop: false,
            mouse_enabled: true,
        }
    }
}

/// Outcome of [`KeyInputController::release_all`].
#[derive(Debug, Default)]
pub struct ReleaseSummary {
    pub released: Vec<&'static str>,
    /// Keys whose release failed; they remain in the held set.
    pub failed: Vec<(&'static str, ControllerError)>,
}

impl ReleaseSummary {
    /// Returns `true` if every held key was released.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// The key input controller.
///
/// Construct one per process at the composition root and pass it (or a
/// `Mutex` around it) to whoever needs to press keys.
pub struct KeyInputController {
    injector: Arc<dyn InputInjector>,
    held: BTreeSet<&'static str>,
    settings: ControllerSettings,
}

impl KeyInputController {
    /// Creates a controller with default settings.
    pub fn new(injector: Arc<dyn InputInjector>) -> Self {
        Self::with_settings(injector, ControllerSettings::default())
    }

    pub fn with_settings(injector: Arc<dyn InputInjector>, settings: ControllerSettings) -> Self {
        info!(
            default_hold_ms = settings.default_hold.as_millis() as u64,
            release_on_drop = settings.release_on_drop,
            mouse_enabled = settings.mouse_enabled,
            "key input controller created"
        );
        Self {
            injector,
            held: BTreeSet::new(),
            settings,
        }
    }

    /// Resolves `key_name` (case-insensitive) to its table entry.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::UnknownKey`] if the name is not in the table.
    pub fn lookup(&self, key_name: &str) -> Result<Key, ControllerError> {
        Ok(keymap::lookup(key_name)?)
    }

    /// Presses and holds `key_name`.
    ///
    /// The name is validated before anything is injected.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::UnknownKey`] for an invalid name, or
    /// [`ControllerError::Injection`] if the OS did not accept the event.
    pub fn press(&mut self, key_name: &str) -> Result<(), ControllerError> {
        let key = self.lookup(key_name)?;
        self.inject(key, InputAction::Press)?;
        self.held.insert(key.name);
        Ok(())
    }

    /// Releases `key_name`.  Releasing a key that is not held still sends the
    /// key-up event and leaves the held set unchanged.
    ///
    /// # Errors
    ///
    /// Same as [`press`](Self::press).
    pub fn release(&mut self, key_name: &str) -> Result<(), ControllerError> {
        let key = self.lookup(key_name)?;
        self.inject(key, InputAction::Release)?;
        self.held.remove(key.name);
        Ok(())
    }

    /// Presses `key_name`, blocks the calling thread for `duration`, then
    /// releases it.  The wait cannot be interrupted.
    ///
    /// # Errors
    ///
    /// Propagates the first error from the press or the release.  A failed
    /// press skips both the wait and the release.
    pub fn press_and_hold(&mut self, key_name: &str, duration: Duration) -> Result<(), ControllerError> {
        self.press(key_name)?;
        if !duration.is_zero() {
            thread::sleep(duration);
        }
        self.release(key_name)
    }

    /// [`press_and_hold`](Self::press_and_hold) with a hold time in seconds.
    ///
    /// Zero, negative and NaN values release immediately.
    pub fn press_and_hold_secs(&mut self, key_name: &str, seconds: f64) -> Result<(), ControllerError> {
        self.press_and_hold(key_name, hold_duration(seconds))
    }

    /// Presses and releases `key_name` using the configured default hold.
    pub fn tap(&mut self, key_name: &str) -> Result<(), ControllerError> {
        let hold = self.settings.default_hold;
        self.press_and_hold(key_name, hold)
    }

    /// Releases every held key, one `release` per key.
    ///
    /// Best-effort: a failing key is logged and recorded in the summary and
    /// the remaining keys are still attempted.
    pub fn release_all(&mut self) -> ReleaseSummary {
        let snapshot: Vec<&'static str> = self.held.iter().copied().collect();
        let mut summary = ReleaseSummary::default();

        for name in snapshot {
            match self.release(name) {
                Ok(()) => summary.released.push(name),
                Err(err) => {
                    warn!(key = name, error = %err, "failed to release held key");
                    summary.failed.push((name, err));
                }
            }
        }

        debug!(
            released = summary.released.len(),
            failed = summary.failed.len(),
            "release_all finished"
        );
        summary
    }

    /// Canonical names of the keys this controller believes are held.
    pub fn held_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.held.iter().copied()
    }

    /// Returns `true` if `key_name` is a valid name and currently held.
    pub fn is_held(&self, key_name: &str) -> bool {
        keymap::lookup(key_name)
            .map(|key| self.held.contains(key.name))
            .unwrap_or(false)
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    pub fn injector(&self) -> &Arc<dyn InputInjector> {
        &self.injector
    }

    /// Sends the single event for `action` on `key`.
    fn inject(&self, key: Key, action: InputAction) -> Result<(), InjectionError> {
        if key.is_mouse() && !self.settings.mouse_enabled {
            return Err(InjectionError::MouseDisabled {
                key: key.name,
                action,
            });
        }

        let Some(input) = build_input(key, action)? else {
            debug!(key = key.name, %action, "no native event for transition");
            return Ok(());
        };

        let queued = self.injector.send_inputs(std::slice::from_ref(&input));
        if queued == 0 {
            warn!(key = key.name, %action, "OS queued no events");
            return Err(InjectionError::NothingQueued {
                key: key.name,
                action,
            });
        }

        debug!(key = key.name, scancode = key.scancode, %action, "injected");
        Ok(())
    }
}

impl Drop for KeyInputController {
    fn drop(&mut self) {
        if self.settings.release_on_drop && !self.held.is_empty() {
            let summary = self.release_all();
            if !summary.is_clean() {
                warn!(
                    still_held = summary.failed.len(),
                    "keys left held after drop"
                );
            }
        }
    }
}

/// Converts a seconds value into a sleep duration.
fn hold_duration(seconds: f64) -> Duration {
    if seconds.is_nan() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
