use anyhow::{bail, Context, Result};

const DEFAULT_POSTMETA_TABLE: &str = "itll_postmeta";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefixed WordPress postmeta table, interpolated into the row query.
    pub postmeta_table: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let postmeta_table = std::env::var("POSTMETA_TABLE")
            .unwrap_or_else(|_| DEFAULT_POSTMETA_TABLE.to_string());
        validate_table_name(&postmeta_table)?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            postmeta_table,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

/// Table names cannot be bound as query parameters, so only plain
/// identifiers are accepted.
fn validate_table_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name.len() <= 64
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        bail!("POSTMETA_TABLE '{name}' is not a valid table name");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_name_accepts_prefixed_identifier() {
        assert!(validate_table_name("itll_postmeta").is_ok());
        assert!(validate_table_name("wp2_postmeta").is_ok());
    }

    #[test]
    fn test_table_name_rejects_injection() {
        assert!(validate_table_name("postmeta; DROP TABLE users").is_err());
        assert!(validate_table_name("`postmeta`").is_err());
        assert!(validate_table_name("").is_err());
    }
}
