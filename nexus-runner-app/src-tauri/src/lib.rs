mod commands;
mod deeplink;
mod error;
mod state;

use tauri::AppHandle;
use tauri_plugin_deep_link::DeepLinkExt;
use tauri_plugin_pinned_shortcuts::PinnedShortcutsExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use state::PendingLaunch;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "nexus_runner_lib=debug,tauri_plugin_pinned_shortcuts=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Nexus Runner...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .plugin(tauri_plugin_deep_link::init())
        .plugin(tauri_plugin_pinned_shortcuts::init())
        .manage(PendingLaunch::default())
        .setup(|app| {
            let status = app.handle().pinned_shortcuts().is_supported();
            info!("Pinned shortcuts supported: {}", status.supported);

            // Desktop schemes are only registered by installers; do it at
            // runtime so `nexus://` links work from a dev build too.
            #[cfg(any(windows, target_os = "linux"))]
            if let Err(e) = app.deep_link().register_all() {
                warn!("Failed to register deep link schemes: {}", e);
            }

            let handle = app.handle().clone();
            app.deep_link().on_open_url(move |event| {
                for url in event.urls() {
                    route_or_log(&handle, url.as_str());
                }
            });

            // The URL the app was started with (e.g. a shortcut tap on a cold start).
            match app.deep_link().get_current() {
                Ok(Some(urls)) => {
                    for url in urls {
                        route_or_log(app.handle(), url.as_str());
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("Failed to read launch URL: {}", e),
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::open_launch_url,
            commands::take_pending_launch,
            commands::pin_project,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}

fn route_or_log(app: &AppHandle, url: &str) {
    if let Err(e) = commands::route_launch_url(app, url) {
        error!("Failed to handle launch URL {}: {}", url, e);
    }
}
