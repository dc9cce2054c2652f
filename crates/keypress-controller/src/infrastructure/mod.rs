//! Infrastructure layer.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keypress_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_injection`** – [`InputInjector`](crate::InputInjector)
//!   implementations.  The Windows `SendInput` injector is selected at compile
//!   time with `#[cfg(target_os = "windows")]`; a recording `MockInjector` is
//!   available everywhere for tests and dry runs.
//!
//! - **`storage`** – TOML configuration file for controller settings.

pub mod input_injection;
pub mod storage;
