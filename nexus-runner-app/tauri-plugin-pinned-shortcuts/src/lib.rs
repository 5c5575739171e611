use tauri::{
    plugin::{Builder, TauriPlugin},
    Manager, Runtime,
};
use tracing::debug;

pub use models::*;

#[cfg(desktop)]
mod desktop;
#[cfg(mobile)]
mod mobile;
#[cfg(target_os = "android")]
mod android;

mod bridge;
mod commands;
mod error;
mod models;
mod platform;

pub use error::{Error, Result};
pub use platform::{PlatformError, ShortcutPlatform, MIN_API_LEVEL};

#[cfg(desktop)]
pub use desktop::PinnedShortcuts;
#[cfg(mobile)]
pub use mobile::PinnedShortcuts;

/// Extensions to [`tauri::App`], [`tauri::AppHandle`] and [`tauri::Window`] to access the pinned-shortcuts APIs.
pub trait PinnedShortcutsExt<R: Runtime> {
    fn pinned_shortcuts(&self) -> &PinnedShortcuts<R>;
}

impl<R: Runtime, T: Manager<R>> crate::PinnedShortcutsExt<R> for T {
    fn pinned_shortcuts(&self) -> &PinnedShortcuts<R> {
        self.state::<PinnedShortcuts<R>>().inner()
    }
}

/// Initializes the pinned-shortcuts plugin.
///
/// Exposes two commands to the webview:
/// - `pin`: request a home-screen shortcut (Android 8.0+)
/// - `is_supported`: whether the launcher accepts pin requests
pub fn init<R: Runtime>() -> TauriPlugin<R, Option<Config>> {
    Builder::<R, Option<Config>>::new("pinned-shortcuts")
        .invoke_handler(tauri::generate_handler![commands::pin, commands::is_supported])
        .setup(|app, api| {
            let config = api.config().clone().unwrap_or_default();
            debug!("pinned-shortcuts config: {:?}", config);

            #[cfg(mobile)]
            let pinned_shortcuts = mobile::init(app, api, config)?;
            #[cfg(desktop)]
            let pinned_shortcuts = desktop::init(app, api, config)?;
            app.manage(pinned_shortcuts);
            Ok(())
        })
        .build()
}
