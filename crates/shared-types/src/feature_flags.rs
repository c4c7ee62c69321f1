use serde::{Deserialize, Serialize};

fn enabled() -> bool {
    true
}

/// Feature flags controlling which optional UI affordances are shown.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. A missing key leaves the flag switched on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureFlags {
    /// "Continue with Google/Facebook" buttons in the player login modal.
    #[serde(default = "enabled")]
    pub social_login: bool,
    /// Manual court list under the scanner's "Start Scanning" button.
    #[serde(default = "enabled")]
    pub manual_court_selection: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            social_login: true,
            manual_court_selection: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_flags_all_enabled() {
        let flags = FeatureFlags::default();
        assert!(flags.social_login);
        assert!(flags.manual_court_selection);
    }

    #[test]
    fn deserialize_json_with_missing_fields_defaults() {
        let flags: FeatureFlags = serde_json::from_str("{}").unwrap();
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn deserialize_json_can_disable_social_login() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"social_login":false}"#).unwrap();
        assert!(!flags.social_login);
        assert!(flags.manual_court_selection);
    }
}
