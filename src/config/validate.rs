use anyhow::{Result, bail};

use super::AppConfig;
use crate::db::connection::StoreKind;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if cfg.general.public_dir.as_os_str().is_empty() {
        errors.push("general.public_dir must not be empty".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    } else if let Err(err) = StoreKind::from_url(&database.url) {
        errors.push(format!("database.url: {err}"));
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, EnvConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = AppConfig::from_pairs(std::iter::empty()).expect("defaults should validate");
        assert_eq!(cfg.general.port, 5000);
        assert!(cfg.database.url.starts_with("sqlite:"));
    }

    #[test]
    fn overrides_are_applied() {
        let cfg = AppConfig::from_pairs([
            ("general.port", "8080"),
            ("database.url", "postgres://localhost/fyyur"),
        ])
        .expect("overrides should validate");
        assert_eq!(cfg.general.port, 8080);
        assert_eq!(cfg.database.url, "postgres://localhost/fyyur");
    }

    #[test]
    fn collects_every_problem() {
        let err = AppConfig::from_pairs([
            ("general.host", " "),
            ("database.url", "mysql://localhost/fyyur"),
            ("database.max_connections", "1"),
            ("database.min_idle", "4"),
        ])
        .expect_err("config should be rejected");
        let message = format!("{err:#}");

        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("unsupported database url"));
        assert!(message.contains("database.min_idle (4)"));
    }
}
