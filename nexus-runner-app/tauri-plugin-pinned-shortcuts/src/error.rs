//! Error types for the pinned-shortcuts plugin.

use serde::{Serialize, Serializer};

use crate::platform::PlatformError;

/// Result type alias for plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Reasons a pin request is rejected.
///
/// The web layer only ever sees the display string, so the variants exist
/// for Rust callers and logging rather than for structured error codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The OS is older than the first release with pinned shortcuts.
    #[error("Pinned shortcuts require Android 8.0 or higher")]
    UnsupportedVersion,

    /// One of `id`, `shortLabel` or `intent` is absent or empty.
    #[error("Missing required parameters: id, shortLabel, intent")]
    MissingParameters,

    /// The shortcut system service could not be obtained.
    #[error("Shortcut service not available")]
    ServiceUnavailable,

    /// The launcher does not accept pin requests.
    #[error("Device does not support pinned shortcuts")]
    PinUnsupported,

    /// Building or submitting the shortcut failed inside the OS.
    #[error("Failed to create shortcut: {0}")]
    CreateFailed(String),
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::CreateFailed(err.to_string())
    }
}

impl Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
