use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use crate::chat::DEFAULT_CONFIDENCE_THRESHOLD;
use crate::documents::{ValidationSettings, DEFAULT_SIGNATURE_THRESHOLD};
use crate::grants::{EncodingPolicy, UnknownCategoryPolicy, ZeroHouseholdPolicy};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub grants: GrantConfig,
    pub chat: ChatConfig,
    pub documents: DocumentConfig,
    pub mail: MailConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let unknown_category = parse_var(
            "APP_UNKNOWN_CATEGORY_POLICY",
            UnknownCategoryPolicy::Reject,
            UnknownCategoryPolicy::parse,
        )?;
        let zero_household = parse_var(
            "APP_ZERO_HOUSEHOLD_POLICY",
            ZeroHouseholdPolicy::Reject,
            ZeroHouseholdPolicy::parse,
        )?;
        let grants = GrantConfig {
            model_path: path_var("APP_GRANT_MODEL_PATH", "models/rf_grant_model.json"),
            policy: EncodingPolicy {
                unknown_category,
                zero_household,
            },
        };

        let chat = ChatConfig {
            embedding_model_dir: path_var("APP_EMBEDDING_MODEL_DIR", "models/all-MiniLM-L6-v2"),
            threshold: parse_var(
                "APP_CHAT_THRESHOLD",
                DEFAULT_CONFIDENCE_THRESHOLD,
                |value| value.trim().parse::<f32>().ok().filter(|t| t.is_finite()),
            )?,
        };

        let documents = DocumentConfig {
            scorer_url: env::var("APP_DOCUMENT_SCORER_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8501/v1/documents:score".to_string()),
            signature_threshold: parse_var(
                "APP_SIGNATURE_THRESHOLD",
                DEFAULT_SIGNATURE_THRESHOLD,
                |value| {
                    value
                        .trim()
                        .parse::<f64>()
                        .ok()
                        .filter(|t| (0.0..=1.0).contains(t))
                },
            )?,
            http_timeout: Duration::from_secs(parse_var("APP_HTTP_TIMEOUT_SECS", 30, |value| {
                value.trim().parse::<u64>().ok().filter(|secs| *secs > 0)
            })?),
        };

        let resend_api_key = env::var("RESEND_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if resend_api_key.is_none() && environment == AppEnvironment::Production {
            return Err(ConfigError::MissingApiKey);
        }
        let mail = MailConfig {
            resend_api_key,
            from: env::var("APP_MAIL_FROM")
                .unwrap_or_else(|_| "Alusive <alusiveafrica_rwa@alusiveafrica.org>".to_string()),
            copy_to: env::var("APP_MAIL_COPY_TO")
                .unwrap_or_else(|_| "alusiveafrica_rwa@alustudent.com".to_string()),
        };

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            grants,
            chat,
            documents,
            mail,
        })
    }

    pub fn validation_settings(&self) -> ValidationSettings {
        ValidationSettings {
            signature_threshold: self.documents.signature_threshold,
            mail_from: self.mail.from.clone(),
            copy_to: self.mail.copy_to.clone(),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

fn parse_var<T>(
    name: &'static str,
    default: T,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(value) => parse(&value).ok_or(ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Grant model artifact and encoding behavior.
#[derive(Debug, Clone)]
pub struct GrantConfig {
    pub model_path: PathBuf,
    pub policy: EncodingPolicy,
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub embedding_model_dir: PathBuf,
    pub threshold: f32,
}

/// Signature scoring service and its decision threshold.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    pub scorer_url: String,
    pub signature_threshold: f64,
    pub http_timeout: Duration,
}

#[derive(Clone)]
pub struct MailConfig {
    pub resend_api_key: Option<String>,
    pub from: String,
    pub copy_to: String,
}

impl fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailConfig")
            .field(
                "resend_api_key",
                &self.resend_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("from", &self.from)
            .field("copy_to", &self.copy_to)
            .finish()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidValue { name: &'static str, value: String },
    MissingApiKey,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidValue { name, value } => {
                write!(f, "{name} has an invalid value '{value}'")
            }
            ConfigError::MissingApiKey => {
                write!(f, "RESEND_API_KEY must be set when APP_ENV=production")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidValue { .. }
            | ConfigError::MissingApiKey => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for name in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "APP_GRANT_MODEL_PATH",
            "APP_UNKNOWN_CATEGORY_POLICY",
            "APP_ZERO_HOUSEHOLD_POLICY",
            "APP_EMBEDDING_MODEL_DIR",
            "APP_CHAT_THRESHOLD",
            "APP_DOCUMENT_SCORER_URL",
            "APP_SIGNATURE_THRESHOLD",
            "APP_HTTP_TIMEOUT_SECS",
            "RESEND_API_KEY",
            "APP_MAIL_FROM",
            "APP_MAIL_COPY_TO",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(
            config.grants.model_path,
            PathBuf::from("models/rf_grant_model.json")
        );
        assert_eq!(config.grants.policy, EncodingPolicy::default());
        assert_eq!(config.chat.threshold, 0.6);
        assert_eq!(config.documents.signature_threshold, 0.75);
        assert_eq!(config.documents.http_timeout, Duration::from_secs(30));
        assert!(config.mail.resend_api_key.is_none());
        assert_eq!(config.mail.copy_to, "alusiveafrica_rwa@alustudent.com");
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn overrides_policies_and_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_UNKNOWN_CATEGORY_POLICY", "collapse");
        env::set_var("APP_ZERO_HOUSEHOLD_POLICY", "propagate");
        env::set_var("APP_CHAT_THRESHOLD", "0.45");
        env::set_var("APP_SIGNATURE_THRESHOLD", "0.9");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(
            config.grants.policy.unknown_category,
            UnknownCategoryPolicy::Collapse
        );
        assert_eq!(
            config.grants.policy.zero_household,
            ZeroHouseholdPolicy::Propagate
        );
        assert_eq!(config.chat.threshold, 0.45);
        assert_eq!(config.validation_settings().signature_threshold, 0.9);
        reset_env();
    }

    #[test]
    fn rejects_unknown_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_UNKNOWN_CATEGORY_POLICY", "guess");
        let err = AppConfig::load().expect_err("invalid policy");
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "APP_UNKNOWN_CATEGORY_POLICY",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_signature_threshold_outside_unit_interval() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_SIGNATURE_THRESHOLD", "1.5");
        assert!(AppConfig::load().is_err());
        reset_env();
    }

    #[test]
    fn production_requires_mail_api_key() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        let err = AppConfig::load().expect_err("missing key");
        assert!(matches!(err, ConfigError::MissingApiKey));

        env::set_var("RESEND_API_KEY", "re_live_key");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert!(!format!("{:?}", config.mail).contains("re_live_key"));
        reset_env();
    }
}
