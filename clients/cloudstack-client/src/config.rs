// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Client configuration

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

use crate::error::Error;

/// Default time to wait for an async job, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Default delay between two async job polls, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default limit for a single HTTP request, in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Connection settings for a CloudStack endpoint
///
/// Can be deserialized from JSON (all fields but the three credentials
/// have defaults) or loaded from `CLOUDSTACK_*` environment variables with
/// [`ClientConfig::from_env`].
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API endpoint, e.g. `https://cloud.example.com/client/api`
    pub api_url: String,
    pub api_key: String,
    pub secret_key: String,
    /// Verify the server's TLS certificate
    pub verify_ssl: bool,
    /// Wait for async jobs to finish instead of returning the job id
    pub async_jobs: bool,
    /// Async job timeout in seconds
    pub timeout_secs: u64,
    pub poll_interval_ms: u64,
    /// Limit for each HTTP request in seconds, independent of the job timeout
    pub http_timeout_secs: u64,
    /// Send every command as GET, even those normally POSTed
    pub http_get_only: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            api_key: String::new(),
            secret_key: String::new(),
            verify_ssl: true,
            async_jobs: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            http_get_only: false,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("verify_ssl", &self.verify_ssl)
            .field("async_jobs", &self.async_jobs)
            .field("timeout_secs", &self.timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("http_get_only", &self.http_get_only)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            ..Self::default()
        }
    }

    /// Load configuration from environment variables
    ///
    /// `CLOUDSTACK_API_URL`, `CLOUDSTACK_API_KEY` and `CLOUDSTACK_SECRET_KEY`
    /// (or `CLOUDSTACK_SECRET`) are required. `CLOUDSTACK_VERIFY_SSL`,
    /// `CLOUDSTACK_ASYNC`, `CLOUDSTACK_TIMEOUT`, `CLOUDSTACK_POLL_INTERVAL_MS`,
    /// `CLOUDSTACK_HTTP_TIMEOUT` and `CLOUDSTACK_HTTP_GET_ONLY` override the
    /// defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let required = |name: &str| {
            var(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{name} environment variable required")))
        };

        let api_url = required("CLOUDSTACK_API_URL")?;
        let api_key = required("CLOUDSTACK_API_KEY")?;
        let secret_key = required("CLOUDSTACK_SECRET_KEY").or_else(|_| required("CLOUDSTACK_SECRET"))?;

        let defaults = Self::default();
        let flag = |name: &str, default: bool| {
            var(name)
                .map(|v| matches!(v.trim().to_lowercase().as_str(), "true" | "1" | "yes"))
                .unwrap_or(default)
        };
        let number = |name: &str, default: u64| -> Result<u64, Error> {
            match var(name) {
                Some(v) => v
                    .trim()
                    .parse()
                    .map_err(|_| Error::Config(format!("Invalid {name}: {v}"))),
                None => Ok(default),
            }
        };

        Ok(Self {
            api_url,
            api_key,
            secret_key,
            verify_ssl: flag("CLOUDSTACK_VERIFY_SSL", defaults.verify_ssl),
            async_jobs: flag("CLOUDSTACK_ASYNC", defaults.async_jobs),
            timeout_secs: number("CLOUDSTACK_TIMEOUT", defaults.timeout_secs)?,
            poll_interval_ms: number("CLOUDSTACK_POLL_INTERVAL_MS", defaults.poll_interval_ms)?,
            http_timeout_secs: number("CLOUDSTACK_HTTP_TIMEOUT", defaults.http_timeout_secs)?,
            http_get_only: flag("CLOUDSTACK_HTTP_GET_ONLY", defaults.http_get_only),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("CLOUDSTACK_API_URL", "https://cloud.example.com/client/api"),
        ("CLOUDSTACK_API_KEY", "key"),
        ("CLOUDSTACK_SECRET_KEY", "secret"),
    ];

    #[test]
    fn test_from_vars_defaults() {
        let config = ClientConfig::from_vars(vars(&BASE)).unwrap();
        assert_eq!(config.api_url, "https://cloud.example.com/client/api");
        assert!(config.verify_ssl);
        assert!(config.async_jobs);
        assert!(!config.http_get_only);
        assert_eq!(config.timeout(), Duration::from_secs(300));
        assert_eq!(config.poll_interval(), Duration::from_secs(1));
        assert_eq!(config.http_timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_from_vars_overrides() {
        let mut pairs = BASE.to_vec();
        pairs.extend([
            ("CLOUDSTACK_VERIFY_SSL", "false"),
            ("CLOUDSTACK_ASYNC", "no"),
            ("CLOUDSTACK_TIMEOUT", "0"),
            ("CLOUDSTACK_HTTP_TIMEOUT", "15"),
            ("CLOUDSTACK_POLL_INTERVAL_MS", "250"),
            ("CLOUDSTACK_HTTP_GET_ONLY", "YES"),
        ]);
        let config = ClientConfig::from_vars(vars(&pairs)).unwrap();
        assert!(!config.verify_ssl);
        assert!(!config.async_jobs);
        assert!(config.http_get_only);
        assert_eq!(config.timeout_secs, 0);
        assert_eq!(config.http_timeout_secs, 15);
        assert_eq!(config.poll_interval_ms, 250);
    }

    #[test]
    fn test_secret_fallback_name() {
        let config = ClientConfig::from_vars(vars(&[
            ("CLOUDSTACK_API_URL", "http://localhost:8080/client/api"),
            ("CLOUDSTACK_API_KEY", "key"),
            ("CLOUDSTACK_SECRET", "legacy-secret"),
        ]))
        .unwrap();
        assert_eq!(config.secret_key, "legacy-secret");
    }

    #[test]
    fn test_missing_url() {
        let err = ClientConfig::from_vars(vars(&BASE[1..])).unwrap_err();
        assert!(err.to_string().contains("CLOUDSTACK_API_URL"));
    }

    #[test]
    fn test_invalid_timeout() {
        let mut pairs = BASE.to_vec();
        pairs.push(("CLOUDSTACK_TIMEOUT", "soon"));
        assert!(ClientConfig::from_vars(vars(&pairs)).is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api_url": "http://cs/client/api", "api_key": "k", "secret_key": "s",
                "verify_ssl": false}"#,
        )
        .unwrap();
        assert!(!config.verify_ssl);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!format!("{config:?}").contains("\"s\""));
    }
}
