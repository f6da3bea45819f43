// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    admin_password: String,
    auth_code_ttl: Duration,
    access_token_ttl: Duration,
    protected_prefixes: Vec<String>,
    oauth2_client_id: String,
    oauth2_client_secret: String,
    oauth2_redirect_uri: String,
    sweep_interval: Duration,
    login_rate_limit: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_auth_code_ttl() -> u64 {
    600
}

fn default_access_token_ttl() -> u64 {
    60 * 60 * 24
}

fn default_protected_prefixes() -> Vec<String> {
    vec!["/settings/".into(), "/oauth2/authorize".into()]
}

fn default_client_id() -> String {
    "dashgate-client".into()
}

fn default_redirect_uri() -> String {
    format!("http://{}/callback", default_listen_addr())
}

fn default_sweep_interval() -> u64 {
    300
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reads keys through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let admin_password = lookup("ADMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("ADMIN_PASSWORD"))?;

        let auth_code_ttl = positive_secs(&lookup, "AUTH_CODE_TTL_SECONDS", default_auth_code_ttl())?;
        let access_token_ttl =
            positive_secs(&lookup, "ACCESS_TOKEN_TTL_SECONDS", default_access_token_ttl())?;

        let protected_prefixes = match lookup("PROTECTED_PREFIXES") {
            Some(raw) => parse_prefixes(&raw)?,
            None => default_protected_prefixes(),
        };

        let oauth2_client_id = lookup("OAUTH2_CLIENT_ID").unwrap_or_else(default_client_id);
        let oauth2_client_secret = lookup("OAUTH2_CLIENT_SECRET").unwrap_or_default();
        let oauth2_redirect_uri =
            lookup("OAUTH2_REDIRECT_URI").unwrap_or_else(default_redirect_uri);
        url::Url::parse(&oauth2_redirect_uri).map_err(|err| {
            ConfigError::Invalid(format!("OAUTH2_REDIRECT_URI is not an absolute URL: {err}"))
        })?;

        let sweep_interval = match lookup("SWEEP_INTERVAL_SECONDS") {
            Some(v) => v.trim().parse::<u64>().map_err(|_| {
                ConfigError::Invalid("SWEEP_INTERVAL_SECONDS must be a non-negative integer".into())
            })?,
            None => default_sweep_interval(),
        };

        let login_rate_limit = lookup("LOGIN_RATE_LIMIT")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            admin_password,
            auth_code_ttl,
            access_token_ttl,
            protected_prefixes,
            oauth2_client_id,
            oauth2_client_secret,
            oauth2_redirect_uri,
            sweep_interval: Duration::from_secs(sweep_interval),
            login_rate_limit,
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn auth_code_ttl(&self) -> Duration {
        self.auth_code_ttl
    }

    pub fn access_token_ttl(&self) -> Duration {
        self.access_token_ttl
    }

    pub fn protected_prefixes(&self) -> &[String] {
        &self.protected_prefixes
    }

    pub fn oauth2_client_id(&self) -> &str {
        &self.oauth2_client_id
    }

    /// Empty when the token endpoint is not in use; it then rejects every client.
    pub fn oauth2_client_secret(&self) -> &str {
        &self.oauth2_client_secret
    }

    pub fn oauth2_redirect_uri(&self) -> &str {
        &self.oauth2_redirect_uri
    }

    /// Zero disables the background sweeper.
    pub fn sweep_interval(&self) -> Duration {
        self.sweep_interval
    }

    pub fn login_rate_limit(&self) -> bool {
        self.login_rate_limit
    }
}

fn positive_secs<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let secs = match lookup(key) {
        Some(v) => v
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::Invalid(format!("{key} must be a positive integer")))?,
        None => default,
    };
    if secs == 0 {
        return Err(ConfigError::Invalid(format!("{key} must be a positive integer")));
    }
    Ok(Duration::from_secs(secs))
}

fn parse_prefixes(raw: &str) -> Result<Vec<String>, ConfigError> {
    let prefixes: Vec<String> = raw
        .split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();

    if let Some(bad) = prefixes.iter().find(|p| !p.starts_with('/')) {
        return Err(ConfigError::Invalid(format!(
            "protected prefix {bad:?} must start with '/'"
        )));
    }
    Ok(prefixes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_password_is_set() {
        let cfg = config(&[("ADMIN_PASSWORD", "pw")]).unwrap();
        assert_eq!(cfg.listen_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.auth_code_ttl(), Duration::from_secs(600));
        assert_eq!(cfg.access_token_ttl(), Duration::from_secs(86_400));
        assert_eq!(cfg.protected_prefixes(), ["/settings/", "/oauth2/authorize"]);
        assert_eq!(cfg.oauth2_client_id(), "dashgate-client");
        assert_eq!(cfg.oauth2_client_secret(), "");
        assert_eq!(cfg.oauth2_redirect_uri(), "http://127.0.0.1:8080/callback");
        assert_eq!(cfg.sweep_interval(), Duration::from_secs(300));
        assert!(cfg.login_rate_limit());
    }

    #[test]
    fn password_is_required() {
        assert!(matches!(
            config(&[]),
            Err(ConfigError::Missing("ADMIN_PASSWORD"))
        ));
        assert!(matches!(
            config(&[("ADMIN_PASSWORD", "")]),
            Err(ConfigError::Missing("ADMIN_PASSWORD"))
        ));
    }

    #[test]
    fn ttls_must_be_positive_integers() {
        for value in ["0", "-5", "ten"] {
            let result = config(&[("ADMIN_PASSWORD", "pw"), ("AUTH_CODE_TTL_SECONDS", value)]);
            assert!(matches!(result, Err(ConfigError::Invalid(_))), "{value}");
        }
        let cfg = config(&[("ADMIN_PASSWORD", "pw"), ("ACCESS_TOKEN_TTL_SECONDS", "120")]).unwrap();
        assert_eq!(cfg.access_token_ttl(), Duration::from_secs(120));
    }

    #[test]
    fn prefixes_are_parsed_and_checked() {
        let cfg = config(&[
            ("ADMIN_PASSWORD", "pw"),
            ("PROTECTED_PREFIXES", " /settings/ , /admin/ ,"),
        ])
        .unwrap();
        assert_eq!(cfg.protected_prefixes(), ["/settings/", "/admin/"]);

        let bad = config(&[("ADMIN_PASSWORD", "pw"), ("PROTECTED_PREFIXES", "settings")]);
        assert!(matches!(bad, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn sweeper_and_limiter_can_be_disabled() {
        let cfg = config(&[
            ("ADMIN_PASSWORD", "pw"),
            ("SWEEP_INTERVAL_SECONDS", "0"),
            ("LOGIN_RATE_LIMIT", "false"),
        ])
        .unwrap();
        assert!(cfg.sweep_interval().is_zero());
        assert!(!cfg.login_rate_limit());
    }

    #[test]
    fn redirect_uri_must_be_absolute() {
        let bad = config(&[("ADMIN_PASSWORD", "pw"), ("OAUTH2_REDIRECT_URI", "/callback")]);
        assert!(matches!(bad, Err(ConfigError::Invalid(_))));
    }
}
