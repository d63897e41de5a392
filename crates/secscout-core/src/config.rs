//! Runtime settings and the `.env` secret store.
//!
//! Settings are built once at startup and passed by value into the resolver
//! and filing search clients; nothing below this module reads the process
//! environment.

use std::fmt::{Debug, Formatter};
use std::path::PathBuf;

use tracing::debug;

use crate::domain::{NameBounds, ANNUAL_REPORT_FORM};
use crate::error::ConfigError;
use crate::retry::RetryConfig;

pub const TOKEN_KEY: &str = "SEC_API_TOKEN";
pub const DEFAULT_SECRET_STORE: &str = ".env";
pub const DEFAULT_API_BASE: &str = "https://api.sec-api.io";
pub const DEFAULT_TICKERS_URL: &str = "https://www.sec.gov/files/company_tickers.json";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// API token. Never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for ApiToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiToken(***)")
    }
}

/// Key-value secret source backed by a dotenv-format file.
#[derive(Debug, Clone)]
pub struct SecretStore {
    path: PathBuf,
    key: String,
}

impl Default for SecretStore {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_STORE)
    }
}

impl SecretStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: String::from(TOKEN_KEY),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Resolve the token, preferring the process environment over the file.
    pub fn load_token(&self) -> Result<ApiToken, ConfigError> {
        self.resolve_token(std::env::var(&self.key).ok())
    }

    /// Resolve the token from `override_value` or, failing that, the file.
    ///
    /// The file is parsed without touching the process environment.
    pub fn resolve_token(&self, override_value: Option<String>) -> Result<ApiToken, ConfigError> {
        if let Some(value) = override_value.filter(|value| !value.trim().is_empty()) {
            debug!(key = %self.key, "token taken from environment");
            return Ok(ApiToken::new(value.trim()));
        }

        let entries = dotenvy::from_path_iter(&self.path).map_err(|error| {
            ConfigError::SecretStoreUnavailable {
                path: self.path.display().to_string(),
                reason: error.to_string(),
            }
        })?;

        for entry in entries {
            let (key, value) = entry.map_err(|error| ConfigError::SecretStoreUnavailable {
                path: self.path.display().to_string(),
                reason: error.to_string(),
            })?;
            if key == self.key && !value.trim().is_empty() {
                debug!(key = %self.key, path = %self.path.display(), "token taken from secret store");
                return Ok(ApiToken::new(value.trim()));
            }
        }

        Err(ConfigError::MissingSecret {
            key: self.key.clone(),
        })
    }
}

/// Settings for one lookup run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub token: ApiToken,
    /// Base URL shared by the name-mapping and filing search endpoints.
    pub api_base: String,
    pub name_bounds: NameBounds,
    pub form_type: String,
    pub timeout_ms: u64,
    pub retry: RetryConfig,
}

impl Settings {
    pub fn new(token: ApiToken) -> Self {
        Self {
            token,
            api_base: String::from(DEFAULT_API_BASE),
            name_bounds: NameBounds::default(),
            form_type: String::from(ANNUAL_REPORT_FORM),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryConfig::default(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_name_bounds(mut self, min: usize, max: usize) -> Result<Self, ConfigError> {
        self.name_bounds = NameBounds::new(min, max)?;
        Ok(self)
    }

    pub fn with_form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = form_type.into();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Result<Self, ConfigError> {
        if timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        self.timeout_ms = timeout_ms;
        Ok(self)
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn store_with(contents: &str) -> (tempfile::NamedTempFile, SecretStore) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write secret store");
        let store = SecretStore::new(file.path());
        (file, store)
    }

    #[test]
    fn token_is_read_from_file() {
        let (_file, store) = store_with("OTHER=1\nSEC_API_TOKEN=abc123\n");
        let token = store.resolve_token(None).expect("token present");
        assert_eq!(token.expose(), "abc123");
    }

    #[test]
    fn override_takes_precedence_over_file() {
        let (_file, store) = store_with("SEC_API_TOKEN=from-file\n");
        let token = store
            .resolve_token(Some(String::from("from-env")))
            .expect("token present");
        assert_eq!(token.expose(), "from-env");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = SecretStore::new(dir.path().join("absent.env"));
        let error = store.resolve_token(None).expect_err("file is missing");
        assert!(matches!(error, ConfigError::SecretStoreUnavailable { .. }));
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let (_file, store) = store_with("OTHER_TOKEN=abc\nSEC_API_TOKEN=\n");
        let error = store.resolve_token(None).expect_err("key is empty");
        assert!(matches!(error, ConfigError::MissingSecret { ref key } if key == TOKEN_KEY));
    }

    #[test]
    fn token_debug_output_is_redacted() {
        let settings = Settings::new(ApiToken::new("super-secret"));
        assert!(!format!("{settings:?}").contains("super-secret"));
    }

    #[test]
    fn settings_builders_validate_inputs() {
        let settings = Settings::new(ApiToken::new("t"))
            .with_api_base("https://example.test/")
            .with_name_bounds(2, 10)
            .expect("valid bounds")
            .with_timeout_ms(500)
            .expect("valid timeout");

        assert_eq!(settings.api_base, "https://example.test");
        assert_eq!(settings.name_bounds.min(), 2);
        assert_eq!(settings.form_type, "10-K");
        assert!(Settings::new(ApiToken::new("t")).with_timeout_ms(0).is_err());
        assert!(Settings::new(ApiToken::new("t")).with_name_bounds(5, 4).is_err());
    }
}
