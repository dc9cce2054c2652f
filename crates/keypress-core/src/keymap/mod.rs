//! Key name lookup.
//!
//! Callers refer to keys by name (`"SPACE"`, `"f12"`, `"Left_Mouse"`).  Names
//! are case-insensitive: the input is upper-cased and matched against
//! [`table::KEY_TABLE`].  A successful lookup yields a [`Key`] that carries
//! the canonical `'static` spelling, so the controller's bookkeeping never
//! depends on how the caller capitalised the name.

pub mod table;

use thiserror::Error;

use table::{KEY_TABLE, MOUSE_CODE_BASE};

/// Hardware scancode.  Values at or above `0x100` are mouse pseudo-codes.
pub type Scancode = u16;

/// A validated key: canonical name plus its scancode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key {
    /// Upper-case name exactly as it appears in the table.
    pub name: &'static str,
    pub scancode: Scancode,
}

impl Key {
    /// Returns `true` for mouse buttons and wheel notches.
    pub fn is_mouse(&self) -> bool {
        self.scancode >= MOUSE_CODE_BASE
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// The requested name is not in the key table.
///
/// The message lists every valid name once, in table order, so the caller
/// can see what they should have typed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "{name} is not a valid key name. Please choose from the following valid keys: {}",
    .valid_names.join(", ")
)]
pub struct UnknownKeyError {
    /// The rejected name, upper-cased.
    pub name: String,
    pub valid_names: Vec<&'static str>,
}

/// Looks up `key_name` (case-insensitive) in the key table.
///
/// # Errors
///
/// Returns [`UnknownKeyError`] if no entry matches.
pub fn lookup(key_name: &str) -> Result<Key, UnknownKeyError> {
    let normalized = key_name.to_uppercase();
    KEY_TABLE
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|&(name, scancode)| Key { name, scancode })
        .ok_or_else(|| UnknownKeyError {
            name: normalized,
            valid_names: valid_key_names().collect(),
        })
}

/// All valid key names in table order.
pub fn valid_key_names() -> impl Iterator<Item = &'static str> {
    KEY_TABLE.iter().map(|(name, _)| *name)
}

/// Enumeration helpers over the fixed key table.
pub struct KeyTable;

impl KeyTable {
    /// Number of named keys.
    pub fn len() -> usize {
        KEY_TABLE.len()
    }

    /// Every entry as a [`Key`], in table order.
    pub fn iter() -> impl Iterator<Item = Key> {
        KEY_TABLE
            .iter()
            .map(|&(name, scancode)| Key { name, scancode })
    }

    /// Returns `true` if `key_name` names a key (case-insensitive).
    pub fn contains(key_name: &str) -> bool {
        lookup(key_name).is_ok()
    }
}
