use std::sync::Mutex;

/// The project a launch URL asked for, held until the frontend picks it up.
///
/// A shortcut tap restarts the task, so the `launch-project` event usually
/// fires before the webview is listening. The frontend reads this after
/// initialization to catch that case.
#[derive(Debug, Default)]
pub struct PendingLaunch(Mutex<Option<String>>);

impl PendingLaunch {
    pub fn set(&self, project_id: String) {
        *self.0.lock().unwrap_or_else(|e| e.into_inner()) = Some(project_id);
    }

    pub fn take(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).take()
    }
}
