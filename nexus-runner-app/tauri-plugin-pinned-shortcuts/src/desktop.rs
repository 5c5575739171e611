use serde::de::DeserializeOwned;
use tauri::{plugin::PluginApi, AppHandle, Runtime};

use crate::bridge::ShortcutBridge;
use crate::models::*;
use crate::platform::UnsupportedPlatform;

/// Initialize the desktop plugin.
///
/// Desktop operating systems have no pinned shortcuts, so the bridge runs
/// against [`UnsupportedPlatform`]: `pin` rejects and `is_supported` is false.
pub fn init<R: Runtime, C: DeserializeOwned>(
    app: &AppHandle<R>,
    _api: PluginApi<R, C>,
    config: Config,
) -> crate::Result<PinnedShortcuts<R>> {
    Ok(PinnedShortcuts {
        _app: app.clone(),
        bridge: ShortcutBridge::new(UnsupportedPlatform, config),
    })
}

/// Access to the pinned-shortcuts APIs (desktop stub).
pub struct PinnedShortcuts<R: Runtime> {
    _app: AppHandle<R>,
    bridge: ShortcutBridge,
}

impl<R: Runtime> PinnedShortcuts<R> {
    /// Always rejects with the OS version message.
    pub fn pin(&self, request: PinRequest) -> crate::Result<()> {
        self.bridge.pin(request)
    }

    /// Always `{ supported: false }`.
    pub fn is_supported(&self) -> SupportStatus {
        SupportStatus {
            supported: self.bridge.is_supported(),
        }
    }
}
