//! The OS surface the shortcut bridge depends on.

use crate::models::{IconResource, PinSupport, ShortcutDescriptor};

/// First Android API level with `ShortcutManager.requestPinShortcut` (Android 8.0).
pub const MIN_API_LEVEL: u32 = 26;

/// A failure raised by the OS while building or submitting a shortcut.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct PlatformError(String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Operations the host OS provides for pinned shortcuts.
pub trait ShortcutPlatform: Send + Sync {
    /// OS API level, or `None` when the OS has no notion of one.
    fn api_level(&self) -> Option<u32>;

    /// Whether the shortcut service exists and accepts pin requests.
    fn pin_support(&self) -> Result<PinSupport, PlatformError>;

    /// Look up an icon resource by name; `Ok(None)` when it does not exist.
    fn resolve_icon(&self, name: &str) -> Result<Option<IconResource>, PlatformError>;

    /// Submit a pin request. Returns once the OS has accepted the request,
    /// not once the user has confirmed it.
    fn request_pin(&self, shortcut: &ShortcutDescriptor) -> Result<(), PlatformError>;
}

/// Platforms without pinned shortcuts (desktop, iOS).
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedPlatform;

impl ShortcutPlatform for UnsupportedPlatform {
    fn api_level(&self) -> Option<u32> {
        None
    }

    fn pin_support(&self) -> Result<PinSupport, PlatformError> {
        Ok(PinSupport::ServiceUnavailable)
    }

    fn resolve_icon(&self, _name: &str) -> Result<Option<IconResource>, PlatformError> {
        Ok(None)
    }

    fn request_pin(&self, _shortcut: &ShortcutDescriptor) -> Result<(), PlatformError> {
        Err(PlatformError::new("pinned shortcuts are not available on this platform"))
    }
}
