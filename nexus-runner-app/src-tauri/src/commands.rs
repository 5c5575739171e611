use serde::{Deserialize, Serialize};
use tauri::{AppHandle, Emitter, Manager, Runtime, State};
use tauri_plugin_opener::OpenerExt;
use tauri_plugin_pinned_shortcuts::{PinRequest, PinnedShortcutsExt};
use tracing::{debug, info};

use crate::deeplink::{parse_launch_url, project_intent_uri, LaunchTarget};
use crate::error::Result;
use crate::state::PendingLaunch;

/// Event emitted when a launch URL names a project.
pub const LAUNCH_PROJECT_EVENT: &str = "launch-project";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchProjectPayload {
    pub project_id: String,
}

/// Side effects of following a launch URL.
pub trait LaunchHandler {
    fn launch_project(&self, project_id: &str) -> Result<()>;
    fn open_external(&self, url: &str) -> Result<()>;
}

impl<R: Runtime> LaunchHandler for AppHandle<R> {
    fn launch_project(&self, project_id: &str) -> Result<()> {
        self.state::<PendingLaunch>().set(project_id.to_string());
        self.emit(
            LAUNCH_PROJECT_EVENT,
            LaunchProjectPayload {
                project_id: project_id.to_string(),
            },
        )?;
        Ok(())
    }

    fn open_external(&self, url: &str) -> Result<()> {
        self.opener().open_url(url, None::<&str>)?;
        Ok(())
    }
}

/// Route a URL the app was opened with.
///
/// Project links go to the frontend; anything else goes to the system browser.
/// Used for deep links delivered by the OS and for `open_launch_url`.
pub fn route_launch_url(handler: &impl LaunchHandler, url: &str) -> Result<LaunchTarget> {
    let target = parse_launch_url(url);
    match &target {
        LaunchTarget::Project { id } => {
            info!("Launch URL opens project {}", id);
            handler.launch_project(id)?;
        }
        LaunchTarget::External { url } => {
            debug!("Opening external URL {}", url);
            handler.open_external(url)?;
        }
    }
    Ok(target)
}

#[tauri::command]
pub async fn open_launch_url(app: AppHandle, url: String) -> Result<LaunchTarget> {
    route_launch_url(&app, &url)
}

/// Take the project a launch URL asked for before the frontend was ready.
#[tauri::command]
pub fn take_pending_launch(pending: State<'_, PendingLaunch>) -> Option<String> {
    pending.take()
}

/// Pin a home-screen shortcut that reopens `project_id`.
#[tauri::command]
pub async fn pin_project(
    app: AppHandle,
    project_id: String,
    name: String,
    description: Option<String>,
) -> Result<()> {
    let request = PinRequest {
        intent: Some(project_intent_uri(&project_id)),
        id: Some(project_id),
        short_label: Some(name),
        long_label: description,
        icon: None,
    };
    app.pinned_shortcuts().pin(request)?;
    Ok(())
}
