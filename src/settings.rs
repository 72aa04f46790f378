// src/settings.rs
use anyhow::Result;
use serde::Deserialize;

/// Application configuration. The only knob is the forecast service base
/// address; overridable via an optional `coalwatch.toml` next to the binary
/// or the `COALWATCH_API_BASE` environment variable.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_base: String,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let cfg = config::Config::builder()
            .set_default("api_base", "http://localhost:8080")?
            .add_source(config::File::with_name("coalwatch").required(false))
            .add_source(config::Environment::with_prefix("COALWATCH"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_defaults_to_localhost() {
        let settings = Settings::load().unwrap();
        assert_eq!(settings.api_base, "http://localhost:8080");
    }
}
