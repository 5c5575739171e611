use thiserror::Error;

#[derive(Error, Debug)]
pub enum NexusError {
    #[error(transparent)]
    Shortcut(#[from] tauri_plugin_pinned_shortcuts::Error),

    #[error("Failed to open external link: {0}")]
    Opener(String),

    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),
}

impl From<tauri_plugin_opener::Error> for NexusError {
    fn from(err: tauri_plugin_opener::Error) -> Self {
        NexusError::Opener(err.to_string())
    }
}

impl serde::Serialize for NexusError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NexusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_error_keeps_plugin_message() {
        let err: NexusError = tauri_plugin_pinned_shortcuts::Error::UnsupportedVersion.into();
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, "\"Pinned shortcuts require Android 8.0 or higher\"");
    }
}
