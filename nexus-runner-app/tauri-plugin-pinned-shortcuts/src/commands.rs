//! Tauri command handlers for the pinned-shortcuts plugin.

use tauri::{command, AppHandle, Runtime};

use crate::models::*;
use crate::PinnedShortcutsExt;
use crate::Result;

/// Request a pinned shortcut on the home screen.
///
/// Arguments mirror the JS call `pin({ id, shortLabel, longLabel, icon, intent })`.
/// Resolves with no payload once the request reaches the OS.
#[command]
pub(crate) async fn pin<R: Runtime>(
    app: AppHandle<R>,
    id: Option<String>,
    short_label: Option<String>,
    long_label: Option<String>,
    icon: Option<String>,
    intent: Option<String>,
) -> Result<()> {
    app.pinned_shortcuts().pin(PinRequest {
        id,
        short_label,
        long_label,
        icon,
        intent,
    })
}

/// Check whether pinned shortcuts can be requested on this device.
#[command]
pub(crate) async fn is_supported<R: Runtime>(app: AppHandle<R>) -> Result<SupportStatus> {
    Ok(app.pinned_shortcuts().is_supported())
}
