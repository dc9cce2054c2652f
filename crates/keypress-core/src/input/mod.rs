//! Synthetic input events and the builder that produces them.

pub mod builder;
pub mod event;

pub use builder::{build_input, BuildError};
pub use event::{
    InputAction, KeyEventFlags, KeyboardInput, MouseEventFlags, MouseInput, SyntheticInput,
};
