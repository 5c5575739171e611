//! Mobile implementation.
//!
//! - **Android**: talks to `ShortcutManager` directly over JNI
//! - **iOS**: has no pinned shortcuts; behaves like desktop

use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::bridge::ShortcutBridge;
use crate::models::*;

/// Initialize the mobile plugin.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
    config: Config,
) -> crate::Result<PinnedShortcuts<R>> {
    #[cfg(target_os = "android")]
    let platform = crate::android::AndroidPlatform::new(&config);
    #[cfg(not(target_os = "android"))]
    let platform = crate::platform::UnsupportedPlatform;

    Ok(PinnedShortcuts {
        _app: app.clone(),
        bridge: ShortcutBridge::new(platform, config),
    })
}

/// Access to the pinned-shortcuts mobile APIs.
pub struct PinnedShortcuts<R: Runtime> {
    _app: AppHandle<R>,
    bridge: ShortcutBridge,
}

impl<R: Runtime> PinnedShortcuts<R> {
    /// Ask the launcher to pin a shortcut.
    ///
    /// Resolves once the request is handed to the OS. Whether the user
    /// accepts the system dialog is not observed.
    pub fn pin(&self, request: PinRequest) -> crate::Result<()> {
        self.bridge.pin(request)
    }

    /// Whether the device accepts pin requests.
    pub fn is_supported(&self) -> SupportStatus {
        SupportStatus {
            supported: self.bridge.is_supported(),
        }
    }
}
