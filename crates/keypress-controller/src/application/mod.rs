//! Application layer use cases.
//!
//! - **`key_input`** – The key input controller: validates key names against
//!   the key table, injects press/release events through an
//!   [`key_input::InputInjector`] supplied at construction time, and keeps the
//!   held-keys bookkeeping.

pub mod key_input;
