//! Validation and delegation for pin requests.
//!
//! The bridge owns no state beyond its configuration. Each call checks the
//! capability gate, validates the request and makes at most one pin
//! submission through the [`ShortcutPlatform`].

use tracing::{debug, info, warn};
use url::Url;

use crate::error::{Error, Result};
use crate::models::*;
use crate::platform::{PlatformError, ShortcutPlatform, MIN_API_LEVEL};

pub struct ShortcutBridge {
    platform: Box<dyn ShortcutPlatform>,
    config: Config,
}

impl ShortcutBridge {
    pub fn new(platform: impl ShortcutPlatform + 'static, config: Config) -> Self {
        Self {
            platform: Box::new(platform),
            config,
        }
    }

    /// Ask the OS to pin a shortcut.
    ///
    /// Success means the request was handed to the OS. The user may still
    /// decline in the system dialog; that outcome is never reported here.
    pub fn pin(&self, request: PinRequest) -> Result<()> {
        if !self.meets_min_api_level() {
            warn!("Pin rejected: API level {:?} below {}", self.platform.api_level(), MIN_API_LEVEL);
            return Err(Error::UnsupportedVersion);
        }

        let shortcut = request
            .validate(&self.config.default_icon)
            .ok_or(Error::MissingParameters)?;

        match self.platform.pin_support()? {
            PinSupport::Supported => {}
            PinSupport::ServiceUnavailable => return Err(Error::ServiceUnavailable),
            PinSupport::Unsupported => return Err(Error::PinUnsupported),
        }

        let descriptor = self.build_descriptor(shortcut)?;
        debug!(
            "Requesting pin for shortcut '{}' -> {}",
            descriptor.id, descriptor.intent.uri
        );
        self.platform.request_pin(&descriptor)?;

        info!("Pin request submitted for shortcut '{}'", descriptor.id);
        Ok(())
    }

    /// Whether a pin request could succeed on this device. Never fails.
    pub fn is_supported(&self) -> bool {
        if !self.meets_min_api_level() {
            return false;
        }

        match self.platform.pin_support() {
            Ok(support) => support == PinSupport::Supported,
            Err(e) => {
                warn!("Could not query pin shortcut support: {}", e);
                false
            }
        }
    }

    fn meets_min_api_level(&self) -> bool {
        self.platform
            .api_level()
            .is_some_and(|level| level >= MIN_API_LEVEL)
    }

    fn build_descriptor(&self, shortcut: ShortcutRequest) -> Result<ShortcutDescriptor> {
        // Validate only; the OS gets the caller's text untouched.
        Url::parse(&shortcut.intent_uri).map_err(|e| {
            PlatformError::new(format!("invalid intent URI '{}': {}", shortcut.intent_uri, e))
        })?;
        let icon = self.resolve_icon(&shortcut.icon_name)?;

        Ok(ShortcutDescriptor {
            id: shortcut.id,
            short_label: shortcut.short_label,
            long_label: shortcut.long_label,
            icon,
            intent: LaunchIntent::view(shortcut.intent_uri),
        })
    }

    /// Look up the requested icon, falling back to the configured default.
    fn resolve_icon(&self, name: &str) -> Result<IconResource> {
        if let Some(icon) = self.platform.resolve_icon(name)? {
            return Ok(icon);
        }

        let fallback = &self.config.default_icon;
        debug!("Icon '{}' not found, falling back to '{}'", name, fallback);
        self.platform
            .resolve_icon(fallback)?
            .ok_or_else(|| Error::CreateFailed(format!("icon resource '{}' not found", fallback)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct FakePlatform {
        api_level: Option<u32>,
        support: std::result::Result<PinSupport, PlatformError>,
        icons: HashMap<String, i32>,
        submit_error: Option<PlatformError>,
        submitted: Arc<Mutex<Vec<ShortcutDescriptor>>>,
    }

    impl FakePlatform {
        fn supported() -> Self {
            Self {
                api_level: Some(34),
                support: Ok(PinSupport::Supported),
                icons: HashMap::from([("ic_launcher".to_string(), 0x7f0d_0000)]),
                submit_error: None,
                submitted: Arc::default(),
            }
        }

        fn submissions(&self) -> Vec<ShortcutDescriptor> {
            self.submitted.lock().unwrap().clone()
        }
    }

    impl ShortcutPlatform for FakePlatform {
        fn api_level(&self) -> Option<u32> {
            self.api_level
        }

        fn pin_support(&self) -> std::result::Result<PinSupport, PlatformError> {
            self.support.clone()
        }

        fn resolve_icon(
            &self,
            name: &str,
        ) -> std::result::Result<Option<IconResource>, PlatformError> {
            Ok(self.icons.get(name).map(|&id| IconResource {
                name: name.to_string(),
                id,
            }))
        }

        fn request_pin(
            &self,
            shortcut: &ShortcutDescriptor,
        ) -> std::result::Result<(), PlatformError> {
            if let Some(err) = &self.submit_error {
                return Err(err.clone());
            }
            self.submitted.lock().unwrap().push(shortcut.clone());
            Ok(())
        }
    }

    fn run_request() -> PinRequest {
        PinRequest {
            id: Some("run-1".into()),
            short_label: Some("Run".into()),
            intent: Some("nexus://run?id=run-1".into()),
            ..Default::default()
        }
    }

    fn bridge(platform: &FakePlatform) -> ShortcutBridge {
        ShortcutBridge::new(platform.clone(), Config::default())
    }

    #[test]
    fn test_pin_submits_once_on_supported_device() {
        let platform = FakePlatform::supported();
        bridge(&platform).pin(run_request()).unwrap();

        let submitted = platform.submissions();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].id, "run-1");
        assert_eq!(submitted[0].short_label, "Run");
        assert_eq!(submitted[0].intent.uri, "nexus://run?id=run-1");
        assert_eq!(
            submitted[0].intent.flags,
            FLAG_ACTIVITY_NEW_TASK | FLAG_ACTIVITY_CLEAR_TASK
        );
        assert_eq!(submitted[0].icon.name, "ic_launcher");
    }

    #[test]
    fn test_pin_rejects_old_os_without_submitting() {
        let mut platform = FakePlatform::supported();
        platform.api_level = Some(25);

        let err = bridge(&platform).pin(run_request()).unwrap_err();
        assert_eq!(err, Error::UnsupportedVersion);
        assert!(err.to_string().contains("Android 8.0"));
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_version_gate_wins_over_missing_fields() {
        let mut platform = FakePlatform::supported();
        platform.api_level = None;

        let err = bridge(&platform).pin(PinRequest::default()).unwrap_err();
        assert_eq!(err, Error::UnsupportedVersion);
    }

    #[test]
    fn test_pin_rejects_missing_required_fields() {
        let platform = FakePlatform::supported();
        let bridge = bridge(&platform);

        for strip in 0..3 {
            let mut req = run_request();
            match strip {
                0 => req.id = None,
                1 => req.short_label = None,
                _ => req.intent = None,
            }
            assert_eq!(bridge.pin(req).unwrap_err(), Error::MissingParameters);
        }
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_pin_reports_capability_errors() {
        let mut platform = FakePlatform::supported();
        platform.support = Ok(PinSupport::ServiceUnavailable);
        assert_eq!(
            bridge(&platform).pin(run_request()).unwrap_err(),
            Error::ServiceUnavailable
        );

        platform.support = Ok(PinSupport::Unsupported);
        assert_eq!(
            bridge(&platform).pin(run_request()).unwrap_err(),
            Error::PinUnsupported
        );
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_long_label_carried_only_when_non_empty() {
        let platform = FakePlatform::supported();
        let bridge = bridge(&platform);

        let mut req = run_request();
        req.long_label = Some(String::new());
        bridge.pin(req).unwrap();

        let mut req = run_request();
        req.long_label = Some("Run the demo".into());
        bridge.pin(req).unwrap();

        let submitted = platform.submissions();
        assert_eq!(submitted[0].long_label, None);
        assert_eq!(submitted[1].long_label.as_deref(), Some("Run the demo"));
    }

    #[test]
    fn test_unknown_icon_falls_back_to_default() {
        let mut platform = FakePlatform::supported();
        platform.icons.insert("ic_rocket".into(), 0x7f0d_0001);
        let bridge = bridge(&platform);

        let mut req = run_request();
        req.icon = Some("ic_missing".into());
        bridge.pin(req).unwrap();

        let mut req = run_request();
        req.icon = Some("ic_rocket".into());
        bridge.pin(req).unwrap();

        let submitted = platform.submissions();
        assert_eq!(submitted[0].icon.name, "ic_launcher");
        assert_eq!(submitted[1].icon.name, "ic_rocket");
    }

    #[test]
    fn test_missing_default_icon_fails_creation() {
        let mut platform = FakePlatform::supported();
        platform.icons.clear();

        let err = bridge(&platform).pin(run_request()).unwrap_err();
        assert!(matches!(err, Error::CreateFailed(_)));
        assert!(err.to_string().starts_with("Failed to create shortcut"));
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_malformed_intent_uri_fails_creation() {
        let platform = FakePlatform::supported();
        let mut req = run_request();
        req.intent = Some("not a uri".into());

        let err = bridge(&platform).pin(req).unwrap_err();
        assert!(err.to_string().contains("invalid intent URI"));
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_intent_uri_submitted_verbatim() {
        let platform = FakePlatform::supported();
        let bridge = bridge(&platform);
        let uris = [
            "HTTPS://Runner.Example.com/run?id=a",
            "nexus://run?id=a b",
            "https://example.com",
            "nexus://run/../x?id=1",
        ];

        for uri in uris {
            let mut req = run_request();
            req.intent = Some(uri.into());
            bridge.pin(req).unwrap();
        }

        let submitted: Vec<String> = platform
            .submissions()
            .into_iter()
            .map(|s| s.intent.uri)
            .collect();
        assert_eq!(submitted, uris);
    }

    #[test]
    fn test_support_query_failure_fails_creation() {
        let mut platform = FakePlatform::supported();
        platform.support = Err(PlatformError::new("binder died"));

        let err = bridge(&platform).pin(run_request()).unwrap_err();
        assert_eq!(err, Error::CreateFailed("binder died".into()));
        assert!(platform.submissions().is_empty());
    }

    #[test]
    fn test_submission_failure_carries_os_message() {
        let mut platform = FakePlatform::supported();
        platform.submit_error = Some(PlatformError::new("Max number of shortcuts exceeded"));

        let err = bridge(&platform).pin(run_request()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to create shortcut: Max number of shortcuts exceeded"
        );
    }

    #[test]
    fn test_is_supported_matrix() {
        let platform = FakePlatform::supported();
        assert!(bridge(&platform).is_supported());

        let mut old = FakePlatform::supported();
        old.api_level = Some(25);
        assert!(!bridge(&old).is_supported());

        let mut no_service = FakePlatform::supported();
        no_service.support = Ok(PinSupport::ServiceUnavailable);
        assert!(!bridge(&no_service).is_supported());

        let mut refuses = FakePlatform::supported();
        refuses.support = Ok(PinSupport::Unsupported);
        assert!(!bridge(&refuses).is_supported());

        let mut broken = FakePlatform::supported();
        broken.support = Err(PlatformError::new("binder died"));
        assert!(!bridge(&broken).is_supported());
    }

    #[test]
    fn test_unsupported_platform_never_pins() {
        let bridge = ShortcutBridge::new(crate::platform::UnsupportedPlatform, Config::default());
        assert!(!bridge.is_supported());
        assert_eq!(bridge.pin(run_request()).unwrap_err(), Error::UnsupportedVersion);
    }
}
