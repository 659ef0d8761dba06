//! Application configuration

use std::env;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Error, Result};

/// Chat API used when `CHAT_API_BASE_URL` is not set
pub const DEFAULT_CHAT_API_BASE_URL: &str = "https://chat.googleapis.com";

/// How alerts are delivered to the chat space
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    /// POST to a relay with the shared key as bearer token and routing headers
    Relay { url: String },
    /// POST straight to the chat API using a service-account OAuth2 token
    ServiceAccount {
        credentials_path: PathBuf,
        api_base_url: String,
    },
}

/// Shape of the alert text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AlertStyle {
    /// `<login> <label> a Pull Request  <<html_url>|<full_name>>`
    #[default]
    Link,
    /// `<login> <label> a Pull Request on repo: <full_name>\n<url>`
    Plain,
}

impl std::str::FromStr for AlertStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "link" => Ok(AlertStyle::Link),
            "plain" => Ok(AlertStyle::Plain),
            other => Err(Error::Config(format!("unknown ALERT_STYLE '{}'", other))),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path segment the webhook must be posted to
    pub secure_endpoint: String,
    /// Shared key expected in the `key` query parameter
    pub secure_key: String,
    pub transport: Transport,
    pub alert_style: AlertStyle,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::Config(format!("{} must be set", name)))
        };

        let secure_endpoint = required("SECURE_ENDPOINT")?;
        let secure_key = required("SECURE_KEY")?;

        let transport = match (lookup("KERYX_URL"), lookup("GOOGLE_APPLICATION_CREDENTIALS")) {
            (Some(url), _) if !url.is_empty() => Transport::Relay { url },
            (_, Some(path)) if !path.is_empty() => Transport::ServiceAccount {
                credentials_path: PathBuf::from(path),
                api_base_url: lookup("CHAT_API_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_CHAT_API_BASE_URL.to_string()),
            },
            _ => {
                return Err(Error::Config(
                    "either KERYX_URL or GOOGLE_APPLICATION_CREDENTIALS must be set".to_string(),
                ))
            }
        };
        debug!("Selected transport: {:?}", transport);

        let alert_style = match lookup("ALERT_STYLE") {
            Some(style) => style.parse()?,
            None => AlertStyle::default(),
        };

        Ok(Self {
            secure_endpoint,
            secure_key,
            transport,
            alert_style,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_relay_transport() {
        let config = Config::from_lookup(lookup(&[
            ("SECURE_ENDPOINT", "s3cr3t"),
            ("SECURE_KEY", "abc123"),
            ("KERYX_URL", "https://relay.example/post"),
        ]))
        .unwrap();

        assert_eq!(config.secure_endpoint, "s3cr3t");
        assert_eq!(config.secure_key, "abc123");
        assert_eq!(
            config.transport,
            Transport::Relay {
                url: "https://relay.example/post".to_string()
            }
        );
        assert_eq!(config.alert_style, AlertStyle::Link);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_relay_wins_over_service_account() {
        let config = Config::from_lookup(lookup(&[
            ("SECURE_ENDPOINT", "s3cr3t"),
            ("SECURE_KEY", "abc123"),
            ("KERYX_URL", "https://relay.example/post"),
            ("GOOGLE_APPLICATION_CREDENTIALS", "/etc/sa.json"),
        ]))
        .unwrap();

        assert!(matches!(config.transport, Transport::Relay { .. }));
    }

    #[test]
    fn test_service_account_transport() {
        let config = Config::from_lookup(lookup(&[
            ("SECURE_ENDPOINT", "s3cr3t"),
            ("SECURE_KEY", "abc123"),
            ("GOOGLE_APPLICATION_CREDENTIALS", "/etc/sa.json"),
            ("ALERT_STYLE", "plain"),
            ("PORT", "3000"),
        ]))
        .unwrap();

        assert_eq!(
            config.transport,
            Transport::ServiceAccount {
                credentials_path: PathBuf::from("/etc/sa.json"),
                api_base_url: DEFAULT_CHAT_API_BASE_URL.to_string(),
            }
        );
        assert_eq!(config.alert_style, AlertStyle::Plain);
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_missing_secrets() {
        let err = Config::from_lookup(lookup(&[
            ("SECURE_KEY", "abc123"),
            ("KERYX_URL", "https://relay.example/post"),
        ]))
        .unwrap_err();
        assert_eq!(err, Error::Config("SECURE_ENDPOINT must be set".to_string()));

        let err = Config::from_lookup(lookup(&[
            ("SECURE_ENDPOINT", "s3cr3t"),
            ("SECURE_KEY", ""),
            ("KERYX_URL", "https://relay.example/post"),
        ]))
        .unwrap_err();
        assert_eq!(err, Error::Config("SECURE_KEY must be set".to_string()));
    }

    #[test]
    fn test_missing_transport() {
        let result = Config::from_lookup(lookup(&[
            ("SECURE_ENDPOINT", "s3cr3t"),
            ("SECURE_KEY", "abc123"),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_alert_style() {
        assert!("fancy".parse::<AlertStyle>().is_err());
        assert_eq!("LINK".parse::<AlertStyle>().unwrap(), AlertStyle::Link);
    }
}
