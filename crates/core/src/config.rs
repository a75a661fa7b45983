use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `INTAKE__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_flow")]
    pub default_flow: String,
    #[serde(default)]
    pub navigation: NavigationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavigationConfig {
    /// Emit a debug log line for every next/previous decision.
    #[serde(default = "default_log_transitions")]
    pub log_transitions: bool,
}

fn default_flow() -> String {
    "intake-2020".to_string()
}
fn default_log_transitions() -> bool {
    true
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            log_transitions: default_log_transitions(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_flow: default_flow(),
            navigation: NavigationConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("INTAKE")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
