use serde::{Deserialize, Serialize};

use crate::FeatureFlags;

/// Timings and amounts driving the simulated workflows.
///
/// Every field has a default matching the demo timings, so a partial
/// `[simulation]` table only overrides what it names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// How long the fake QR scan takes before a court is "detected".
    pub scan_delay_ms: u64,
    /// How long a demo recording runs before the scanner closes itself.
    pub recording_delay_ms: u64,
    /// Credits granted to a freshly fabricated player.
    pub starting_credits: u32,
    /// Credits quoted by the club "Top Up" action.
    pub top_up_amount: u32,
    /// Credits quoted to unlock a locked video.
    pub unlock_cost: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scan_delay_ms: 2000,
            recording_delay_ms: 3000,
            starting_credits: 5,
            top_up_amount: 10,
            unlock_cost: 1,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
///
/// The same struct is handed to the client, it carries nothing secret.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_empty_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.simulation.scan_delay_ms, 2000);
        assert_eq!(config.simulation.recording_delay_ms, 3000);
        assert_eq!(config.simulation.starting_credits, 5);
    }

    #[test]
    fn deserialize_partial_simulation_table() {
        let config: AppConfig = toml::from_str(
            r#"
            [simulation]
            scan_delay_ms = 500
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.scan_delay_ms, 500);
        assert_eq!(config.simulation.recording_delay_ms, 3000);
        assert_eq!(config.simulation.top_up_amount, 10);
        assert_eq!(config.features, FeatureFlags::default());
    }

    #[test]
    fn deserialize_full_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [features]
            social_login = false
            manual_court_selection = false

            [simulation]
            scan_delay_ms = 100
            recording_delay_ms = 200
            starting_credits = 0
            top_up_amount = 25
            unlock_cost = 2
            "#,
        )
        .unwrap();
        assert_eq!(
            config,
            AppConfig {
                features: FeatureFlags {
                    social_login: false,
                    manual_court_selection: false,
                },
                simulation: SimulationConfig {
                    scan_delay_ms: 100,
                    recording_delay_ms: 200,
                    starting_credits: 0,
                    top_up_amount: 25,
                    unlock_cost: 2,
                },
            }
        );
    }
}
