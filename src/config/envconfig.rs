use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Loads `<PREFIX>_SECTION__KEY` environment variables (after `.env`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        // Crate-root .env first, then whatever dotenvy finds from the cwd.
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();

        let settings = config_rs::Config::builder()
            .add_source(
                config_rs::Environment::with_prefix(Self::PREFIX)
                    .prefix_separator("_")
                    .separator(Self::SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .context("failed to read environment variables for config")?;

        Self::finish(settings)
    }

    /// Builds a config from dotted `section.key` pairs only, ignoring the
    /// process environment.
    fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut builder = config_rs::Config::builder();
        for (key, value) in pairs {
            builder = builder
                .set_override(key, value)
                .with_context(|| format!("invalid config key {key}"))?;
        }
        let settings = builder.build().context("failed to assemble config")?;
        Self::finish(settings)
    }

    fn finish(settings: config_rs::Config) -> Result<Self> {
        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}
