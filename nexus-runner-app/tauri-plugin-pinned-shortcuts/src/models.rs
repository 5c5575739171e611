//! Data types for the pinned-shortcuts plugin.

use serde::{Deserialize, Serialize};

/// Icon used when the caller names none, or names one that does not exist.
pub const DEFAULT_ICON: &str = "ic_launcher";

/// Resource type icons are looked up under.
pub const DEFAULT_ICON_RESOURCE_TYPE: &str = "mipmap";

/// `Intent.FLAG_ACTIVITY_NEW_TASK`
pub const FLAG_ACTIVITY_NEW_TASK: i32 = 0x1000_0000;
/// `Intent.FLAG_ACTIVITY_CLEAR_TASK`
pub const FLAG_ACTIVITY_CLEAR_TASK: i32 = 0x0000_8000;

/// Plugin configuration read from `plugins.pinned-shortcuts` in `tauri.conf.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Icon name used when a request omits `icon` or names a missing resource.
    pub default_icon: String,
    /// Android resource type the icon names are resolved in.
    pub icon_resource_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_icon: DEFAULT_ICON.to_string(),
            icon_resource_type: DEFAULT_ICON_RESOURCE_TYPE.to_string(),
        }
    }
}

/// A pin request as it arrives over IPC.
///
/// Every field is optional on the wire; [`PinRequest::validate`] decides
/// whether the request is usable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PinRequest {
    pub id: Option<String>,
    pub short_label: Option<String>,
    pub long_label: Option<String>,
    pub icon: Option<String>,
    pub intent: Option<String>,
}

impl PinRequest {
    /// Check required fields and fill in defaults.
    ///
    /// Returns `None` when `id`, `shortLabel` or `intent` is missing or empty.
    pub fn validate(self, default_icon: &str) -> Option<ShortcutRequest> {
        let id = non_empty(self.id)?;
        let short_label = non_empty(self.short_label)?;
        let intent_uri = non_empty(self.intent)?;

        Some(ShortcutRequest {
            id,
            short_label,
            long_label: non_empty(self.long_label),
            icon_name: self.icon.unwrap_or_else(|| default_icon.to_string()),
            intent_uri,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A validated pin request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutRequest {
    pub id: String,
    pub short_label: String,
    /// Only set when the caller supplied a non-empty long label.
    pub long_label: Option<String>,
    pub icon_name: String,
    pub intent_uri: String,
}

/// An icon resource that exists in the application package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconResource {
    pub name: String,
    pub id: i32,
}

/// The launch action a shortcut fires. Always scoped to the host package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchIntent {
    /// The caller's URI text, exactly as given.
    pub uri: String,
    pub flags: i32,
}

impl LaunchIntent {
    /// `ACTION_VIEW` on `uri`, starting a fresh task.
    pub fn view(uri: String) -> Self {
        Self {
            uri,
            flags: FLAG_ACTIVITY_NEW_TASK | FLAG_ACTIVITY_CLEAR_TASK,
        }
    }
}

/// Everything the OS needs to pin one shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutDescriptor {
    pub id: String,
    pub short_label: String,
    pub long_label: Option<String>,
    pub icon: IconResource,
    pub intent: LaunchIntent,
}

/// What the shortcut service says about pin requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSupport {
    /// The service could not be obtained.
    ServiceUnavailable,
    /// The service exists but the launcher refuses pin requests.
    Unsupported,
    Supported,
}

/// Response from the `is_supported` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportStatus {
    pub supported: bool,
}
