//! Key + direction → [`SyntheticInput`].
//!
//! Keyboard keys always produce exactly one scancode-mode keyboard event.
//! Mouse pseudo-scancodes take a separate path and become mouse events:
//!
//! | Name               | Press                      | Release        |
//! |--------------------|----------------------------|----------------|
//! | `LEFT_MOUSE`       | `LEFT_DOWN`                | `LEFT_UP`      |
//! | `RIGHT_MOUSE`      | `RIGHT_DOWN`               | `RIGHT_UP`     |
//! | `MIDDLE_MOUSE`     | `MIDDLE_DOWN`              | `MIDDLE_UP`    |
//! | `MOUSE3`           | `X_DOWN` + `XBUTTON1`      | `X_UP`         |
//! | `MOUSE4`           | `X_DOWN` + `XBUTTON2`      | `X_UP`         |
//! | `MOUSE5`–`MOUSE7`  | unsupported                | unsupported    |
//! | `MOUSE_WHEEL_UP`   | `WHEEL`, `+120`            | no event       |
//! | `MOUSE_WHEEL_DOWN` | `WHEEL`, `-120`            | no event       |
//!
//! `MOUSE3` is the fourth button when counting from zero (left, right,
//! middle, then the extras).  The OS only exposes two extra buttons, so the
//! remaining indices have nothing to map onto.

use thiserror::Error;
use tracing::trace;

use super::event::{InputAction, MouseEventFlags, SyntheticInput, WHEEL_DELTA, XBUTTON1, XBUTTON2};
use crate::keymap::Key;

/// The key exists in the table but the OS has no event for it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{name} has no native mouse button equivalent")]
    UnsupportedMouseButton { name: &'static str },
}

/// Builds the single event that performs `action` on `key`.
///
/// Returns `Ok(None)` when the transition has no OS-visible effect (releasing
/// a wheel notch).
///
/// # Errors
///
/// Returns [`BuildError::UnsupportedMouseButton`] for `MOUSE5`–`MOUSE7`.
pub fn build_input(key: Key, action: InputAction) -> Result<Option<SyntheticInput>, BuildError> {
    if !key.is_mouse() {
        return Ok(Some(SyntheticInput::keyboard(key.scancode, action)));
    }

    let pressed = action == InputAction::Press;
    let pick = |down: u32, up: u32| if pressed { down } else { up };

    let input = match key.scancode {
        0x100 => SyntheticInput::mouse(pick(MouseEventFlags::LEFT_DOWN, MouseEventFlags::LEFT_UP), 0),
        0x101 => {
            SyntheticInput::mouse(pick(MouseEventFlags::RIGHT_DOWN, MouseEventFlags::RIGHT_UP), 0)
        }
        0x102 => {
            SyntheticInput::mouse(pick(MouseEventFlags::MIDDLE_DOWN, MouseEventFlags::MIDDLE_UP), 0)
        }
        0x103 => SyntheticInput::mouse(pick(MouseEventFlags::X_DOWN, MouseEventFlags::X_UP), XBUTTON1),
        0x104 => SyntheticInput::mouse(pick(MouseEventFlags::X_DOWN, MouseEventFlags::X_UP), XBUTTON2),
        0x108 | 0x109 if !pressed => {
            trace!(key = key.name, "wheel release has no native event");
            return Ok(None);
        }
        0x108 => SyntheticInput::mouse(MouseEventFlags::WHEEL, WHEEL_DELTA as u32),
        // Negative deltas travel as the two's-complement bit pattern.
        0x109 => SyntheticInput::mouse(MouseEventFlags::WHEEL, (-WHEEL_DELTA) as u32),
        _ => return Err(BuildError::UnsupportedMouseButton { name: key.name }),
    };
    Ok(Some(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::MouseInput;
    use crate::keymap::lookup;

    fn mouse_of(name: &str, action: InputAction) -> MouseInput {
        match build_input(lookup(name).unwrap(), action).unwrap() {
            Some(SyntheticInput::Mouse(mi)) => mi,
            other => panic!("expected a mouse input for {name}, got {other:?}"),
        }
    }

    #[test]
    fn test_keyboard_key_builds_keyboard_input() {
        // Arrange
        let key = lookup("A").unwrap();

        // Act
        let input = build_input(key, InputAction::Press).unwrap();

        // Assert
        assert_eq!(input, Some(SyntheticInput::keyboard(0x1E, InputAction::Press)));
    }

    #[test]
    fn test_extended_dik_code_is_passed_through_unchanged() {
        let input = build_input(lookup("LEFT_ARROW").unwrap(), InputAction::Release).unwrap();
        assert_eq!(input, Some(SyntheticInput::keyboard(0xCB, InputAction::Release)));
    }

    #[test]
    fn test_left_mouse_press_and_release() {
        assert_eq!(mouse_of("LEFT_MOUSE", InputAction::Press).flags.0, MouseEventFlags::LEFT_DOWN);
        assert_eq!(mouse_of("LEFT_MOUSE", InputAction::Release).flags.0, MouseEventFlags::LEFT_UP);
    }

    #[test]
    fn test_right_and_middle_mouse() {
        assert_eq!(mouse_of("RIGHT_MOUSE", InputAction::Press).flags.0, MouseEventFlags::RIGHT_DOWN);
        assert_eq!(mouse_of("MIDDLE_MOUSE", InputAction::Release).flags.0, MouseEventFlags::MIDDLE_UP);
    }

    #[test]
    fn test_extra_buttons_select_xbutton() {
        let mouse3 = mouse_of("MOUSE3", InputAction::Press);
        assert_eq!(mouse3.flags.0, MouseEventFlags::X_DOWN);
        assert_eq!(mouse3.mouse_data, XBUTTON1);

        let mouse4 = mouse_of("MOUSE4", InputAction::Release);
        assert_eq!(mouse4.flags.0, MouseEventFlags::X_UP);
        assert_eq!(mouse4.mouse_data, XBUTTON2);
    }

    #[test]
    fn test_wheel_press_scrolls_one_notch() {
        let up = mouse_of("MOUSE_WHEEL_UP", InputAction::Press);
        assert_eq!(up.flags.0, MouseEventFlags::WHEEL);
        assert_eq!(up.mouse_data as i32, 120);

        let down = mouse_of("MOUSE_WHEEL_DOWN", InputAction::Press);
        assert_eq!(down.mouse_data as i32, -120);
    }

    #[test]
    fn test_wheel_release_has_no_event() {
        let key = lookup("MOUSE_WHEEL_UP").unwrap();
        assert_eq!(build_input(key, InputAction::Release), Ok(None));
    }

    #[test]
    fn test_mouse5_to_mouse7_are_unsupported() {
        for name in ["MOUSE5", "MOUSE6", "MOUSE7"] {
            let key = lookup(name).unwrap();
            let err = build_input(key, InputAction::Press).unwrap_err();
            assert_eq!(err, BuildError::UnsupportedMouseButton { name: key.name });
        }
    }

    #[test]
    fn test_mouse_events_carry_no_motion() {
        let mi = mouse_of("LEFT_MOUSE", InputAction::Press);
        assert_eq!((mi.dx, mi.dy), (0, 0));
    }
}
