use serde::Deserialize;

// ───── Body ─────────────────────────────────────────────────────────────── //

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    pub host: String,
    /// Port 0 asks the OS for any free port.
    pub port: u16,
}

impl Settings {
    /// Read configuration from the process environment.
    ///
    /// Only `PORT` is consulted, everything else keeps its default.
    pub fn load_configuration() -> Result<Settings, config::ConfigError> {
        Self::from_port_var(std::env::var("PORT").ok())
    }

    /// Build `Settings` from a raw `PORT` value. Unset and empty values
    /// both fall back to the default port.
    pub fn from_port_var(
        port: Option<String>,
    ) -> Result<Settings, config::ConfigError> {
        let port = port
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(|p| parse_port(&p))
            .transpose()?;

        let settings = config::Config::builder()
            .set_default("host", DEFAULT_HOST)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_override_option("port", port)?
            .build()?;

        // Try to deserialize the configuration values it read into
        // our `Settings` type.
        settings.try_deserialize()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `config` widens integers to `i64` and truncates on the way back into
/// `u16`, so the range is checked here.
fn parse_port(raw: &str) -> Result<i64, config::ConfigError> {
    raw.parse::<u16>().map(i64::from).map_err(|e| {
        config::ConfigError::Message(format!(
            "PORT must be an integer between 0 and 65535, got '{}': {}",
            raw, e
        ))
    })
}

// ───── Unit tests ───────────────────────────────────────────────────────── //
