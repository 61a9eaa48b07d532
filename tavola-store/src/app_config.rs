use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use tavola_catalog::PricingRules;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub menu: MenuConfig,
    #[serde(default)]
    pub pricing: PricingRules,
    pub payment: PaymentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MenuConfig {
    pub path: PathBuf,
    pub seed_on_start: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaymentConfig {
    pub method: String,
}

/// Environment layer: `TAVOLA_` prefix, `__` between nested keys.
/// Eg. `TAVOLA_MENU__PATH=/tmp/menu.json`
fn environment() -> config::Environment {
    config::Environment::with_prefix("TAVOLA")
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from(&run_mode, environment())
    }

    /// Load with an explicit run mode and environment source
    pub fn load_from(
        run_mode: &str,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("menu.path", crate::DEFAULT_MENU_FILE)?
            .set_default("menu.seed_on_start", true)?
            .set_default("payment.method", "Credit card")?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(environment)
            .build()?;

        s.try_deserialize()
    }
}
