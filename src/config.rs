use std::env;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_API_PREFIX: &str = "/api/v1";
pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost:3000,http://localhost:5173,http://localhost:8080";
pub const DEFAULT_DATABASE_URL: &str = "sqlite:dataset_explorer.db";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

/// Per-file upload limit, 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Process-wide settings, loaded once at startup and carried in `AppState`.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Prefix every API route is nested under, e.g. `/api/v1`. Derived URLs
    /// inside catalog payloads use the same prefix.
    pub api_prefix: String,
    pub cors_origins: Vec<String>,
    pub database_url: String,
    /// Kaggle credentials are accepted for parity with deployment configs but
    /// the catalog endpoints never contact Kaggle.
    pub kaggle_username: String,
    pub kaggle_key: String,
    pub upload_dir: String,
    pub max_file_size: u64,
}

impl Settings {
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists (for development)
        dotenvy::dotenv().ok();

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT value: {}", e))?;

        let max_file_size = env::var("MAX_FILE_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_FILE_SIZE.to_string())
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid MAX_FILE_SIZE value: {}", e))?;

        let settings = Settings {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string()),
            cors_origins: parse_origins(
                &env::var("CORS_ORIGINS").unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            ),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            kaggle_username: env::var("KAGGLE_USERNAME").unwrap_or_default(),
            kaggle_key: env::var("KAGGLE_KEY").unwrap_or_default(),
            upload_dir: env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            max_file_size,
        };

        settings.validate()?;

        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if !self.api_prefix.starts_with('/') || self.api_prefix.len() < 2 {
            anyhow::bail!(
                "API_PREFIX must be a non-root path starting with '/', got {:?}",
                self.api_prefix
            );
        }

        if self.database_url.is_empty() {
            anyhow::bail!("Database URL cannot be empty");
        }

        if self.max_file_size == 0 {
            anyhow::bail!("MAX_FILE_SIZE must be greater than 0");
        }

        if self.cors_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            cors_origins: parse_origins(DEFAULT_CORS_ORIGINS),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            kaggle_username: String::new(),
            kaggle_key: String::new(),
            upload_dir: DEFAULT_UPLOAD_DIR.to_string(),
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Split a comma-separated origin list, dropping empty entries.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.api_prefix, "/api/v1");
        assert_eq!(settings.cors_origins.len(), 3);
        assert_eq!(settings.max_file_size, 52_428_800);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins("http://a.example, http://b.example ,, http://c.example");
        assert_eq!(
            origins,
            vec!["http://a.example", "http://b.example", "http://c.example"]
        );
        assert!(parse_origins("").is_empty());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let settings = Settings {
            port: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        for prefix in ["", "/", "api/v1"] {
            let settings = Settings {
                api_prefix: prefix.to_string(),
                ..Settings::default()
            };
            assert!(settings.validate().is_err(), "prefix {:?} accepted", prefix);
        }
    }

    #[test]
    fn test_validate_rejects_zero_max_file_size() {
        let settings = Settings {
            max_file_size: 0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_env_overrides() {
        env::set_var("PORT", "9100");
        env::set_var("API_PREFIX", "/api/v2");
        env::set_var("CORS_ORIGINS", "http://one.example,http://two.example");
        env::set_var("MAX_FILE_SIZE", "1024");
        env::set_var("KAGGLE_USERNAME", "demo-user");

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.port, 9100);
        assert_eq!(settings.api_prefix, "/api/v2");
        assert_eq!(
            settings.cors_origins,
            vec!["http://one.example", "http://two.example"]
        );
        assert_eq!(settings.max_file_size, 1024);
        assert_eq!(settings.kaggle_username, "demo-user");

        env::remove_var("PORT");
        env::remove_var("API_PREFIX");
        env::remove_var("CORS_ORIGINS");
        env::remove_var("MAX_FILE_SIZE");
        env::remove_var("KAGGLE_USERNAME");
    }
}
