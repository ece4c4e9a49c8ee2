// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management types

use anyhow::Context;
use cloudstack_client::{Client, ClientBuilder, ClientConfig, LookupOption};
use serde::{Deserialize, Serialize};

/// A connection profile
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name
    pub name: String,

    /// API endpoint, e.g. https://cloud.example.com/client/api
    pub url: String,

    #[serde(rename = "apiKey")]
    pub api_key: String,

    #[serde(rename = "secretKey")]
    pub secret_key: String,

    /// Skip TLS certificate verification
    #[serde(default)]
    pub insecure: bool,

    /// Zone every lookup is scoped to (optional)
    #[serde(rename = "zoneId", default, skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,

    /// Project every lookup is scoped to (optional)
    #[serde(rename = "projectId", default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,

    /// Async job timeout in seconds (optional)
    #[serde(rename = "timeoutSecs", default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    #[serde(rename = "pollIntervalMs", default, skip_serializing_if = "Option::is_none")]
    pub poll_interval_ms: Option<u64>,

    /// Send every command as GET
    #[serde(rename = "httpGetOnly", default)]
    pub http_get_only: bool,

    /// Wait for async jobs instead of returning the job id
    #[serde(rename = "asyncJobs", default = "default_async_jobs")]
    pub async_jobs: bool,
}

const REDACTED: &str = "[REDACTED]";

fn default_async_jobs() -> bool {
    true
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("name", &self.name)
            .field("url", &self.url)
            .field("api_key", &self.api_key)
            .field("secret_key", &REDACTED)
            .field("insecure", &self.insecure)
            .field("zone_id", &self.zone_id)
            .field("project_id", &self.project_id)
            .field("timeout_secs", &self.timeout_secs)
            .field("poll_interval_ms", &self.poll_interval_ms)
            .field("http_get_only", &self.http_get_only)
            .field("async_jobs", &self.async_jobs)
            .finish()
    }
}

impl Profile {
    /// Create a new profile
    pub fn new(name: String, url: String, api_key: String, secret_key: String) -> Self {
        Self {
            name,
            url,
            api_key,
            secret_key,
            insecure: false,
            zone_id: None,
            project_id: None,
            timeout_secs: None,
            poll_interval_ms: None,
            http_get_only: false,
            async_jobs: true,
        }
    }

    /// Build a profile from client settings
    pub fn from_client_config(name: &str, config: ClientConfig) -> Self {
        Self {
            insecure: !config.verify_ssl,
            timeout_secs: Some(config.timeout_secs),
            poll_interval_ms: Some(config.poll_interval_ms),
            http_get_only: config.http_get_only,
            async_jobs: config.async_jobs,
            ..Self::new(
                name.to_string(),
                config.api_url,
                config.api_key,
                config.secret_key,
            )
        }
    }

    /// Load a profile from a file
    pub fn load(name: &str) -> anyhow::Result<Self> {
        let path = super::paths::profile_path(name);
        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read profile '{}': {}", name, e))?;
        let profile: Profile = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile '{}': {}", name, e))?;
        Ok(profile)
    }

    /// Save the profile to a file, readable by the owner only
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let path = super::paths::profile_path(&self.name);
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o600))?;
        }
        Ok(())
    }

    /// Delete the profile file
    pub fn delete(name: &str) -> anyhow::Result<()> {
        let path = super::paths::profile_path(name);
        std::fs::remove_file(&path)
            .map_err(|e| anyhow::anyhow!("Failed to delete profile '{}': {}", name, e))?;
        Ok(())
    }

    /// List all available profiles
    pub fn list_all() -> anyhow::Result<Vec<String>> {
        let profiles_dir = super::paths::profiles_dir();
        if !profiles_dir.exists() {
            return Ok(vec![]);
        }

        let mut profiles = vec![];
        for entry in std::fs::read_dir(&profiles_dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json")
                && let Some(stem) = path.file_stem()
            {
                profiles.push(stem.to_string_lossy().to_string());
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    /// Copy with the secret key masked, for display
    pub fn redacted(&self) -> Self {
        Self {
            secret_key: REDACTED.to_string(),
            ..self.clone()
        }
    }

    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.url, &self.api_key, &self.secret_key);
        config.verify_ssl = !self.insecure;
        config.http_get_only = self.http_get_only;
        config.async_jobs = self.async_jobs;
        if let Some(secs) = self.timeout_secs {
            config.timeout_secs = secs;
        }
        if let Some(ms) = self.poll_interval_ms {
            config.poll_interval_ms = ms;
        }
        config
    }

    /// Lookup scope applied to every name resolution
    pub fn lookup_options(&self) -> Vec<LookupOption> {
        let mut options = Vec::new();
        if let Some(zone) = &self.zone_id {
            options.push(LookupOption::ZoneId(zone.clone()));
        }
        if let Some(project) = &self.project_id {
            options.push(LookupOption::ProjectId(project.clone()));
        }
        options
    }

    /// Build an API client for this profile
    pub fn client(&self) -> anyhow::Result<Client> {
        ClientBuilder::from_config(&self.client_config())
            .default_options(self.lookup_options())
            .build()
            .with_context(|| format!("Failed to create client for profile '{}'", self.name))
    }
}

/// Main configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Current active profile name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Previous profile (for `csctl profile set-current -`)
    #[serde(rename = "oldProfile", skip_serializing_if = "Option::is_none")]
    pub old_profile: Option<String>,
}

impl Config {
    /// Load the main config file
    pub fn load() -> anyhow::Result<Self> {
        let path = super::paths::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save the main config file
    pub fn save(&self) -> anyhow::Result<()> {
        super::paths::ensure_config_dirs()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(super::paths::config_file(), content)?;
        Ok(())
    }

    pub fn current_profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn set_current_profile(&mut self, name: &str) {
        self.old_profile = self.profile.take();
        self.profile = Some(name.to_string());
    }
}
