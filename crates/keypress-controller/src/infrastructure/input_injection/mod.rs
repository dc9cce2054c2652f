//! Platform input injectors.
//!
//! Only Windows has a native implementation.  Other targets get
//! [`InjectionError::UnsupportedPlatform`] from [`platform_injector`] and can
//! still use [`mock::MockInjector`].

use std::sync::Arc;

use crate::application::key_input::{InjectionError, InputInjector};

pub mod mock;

#[cfg(target_os = "windows")]
pub mod windows;

/// Returns the injector for the current OS.
///
/// # Errors
///
/// Returns [`InjectionError::UnsupportedPlatform`] on targets without a
/// native injector.
pub fn platform_injector() -> Result<Arc<dyn InputInjector>, InjectionError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(self::windows::WindowsInjector::new()))
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(InjectionError::UnsupportedPlatform)
    }
}
