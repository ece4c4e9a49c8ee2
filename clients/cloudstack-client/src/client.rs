// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use std::sync::Arc;
use std::time::Duration;

use cloudstack_auth::{Credentials, RequestSigner};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::command::{Command, Mode};
use crate::config::ClientConfig;
use crate::envelope;
use crate::error::Error;
use crate::lookup::LookupOption;
use crate::params::Params;

/// Commands sent as a form POST so large user data fits in the request
const POST_COMMANDS: &[&str] = &["deployVirtualMachine", "login", "updateVirtualMachine"];

struct Inner {
    http: reqwest::Client,
    api_url: Url,
    signer: RequestSigner,
    async_jobs: bool,
    timeout: Duration,
    poll_interval: Duration,
    http_get_only: bool,
    default_options: Vec<LookupOption>,
}

/// CloudStack API client
///
/// Cheap to clone; clones share the HTTP connection pool.
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.inner.api_url.as_str())
            .field("async_jobs", &self.inner.async_jobs)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client that waits for async jobs to finish
    ///
    /// # Arguments
    /// * `api_url` - API endpoint, e.g. `https://cloud.example.com/client/api`
    /// * `api_key` - The user's API key
    /// * `secret_key` - The user's secret key
    /// * `verify_ssl` - Verify the server's TLS certificate
    pub fn new(
        api_url: &str,
        api_key: &str,
        secret_key: &str,
        verify_ssl: bool,
    ) -> Result<Self, Error> {
        ClientBuilder::new(api_url, api_key, secret_key)
            .verify_ssl(verify_ssl)
            .build()
    }

    /// Create a client that returns the job id of async commands
    /// immediately instead of waiting for the job
    pub fn new_without_job_wait(
        api_url: &str,
        api_key: &str,
        secret_key: &str,
        verify_ssl: bool,
    ) -> Result<Self, Error> {
        ClientBuilder::new(api_url, api_key, secret_key)
            .verify_ssl(verify_ssl)
            .async_jobs(false)
            .build()
    }

    pub fn builder(api_url: &str, api_key: &str, secret_key: &str) -> ClientBuilder {
        ClientBuilder::new(api_url, api_key, secret_key)
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        ClientBuilder::from_config(config).build()
    }

    pub fn api_url(&self) -> &Url {
        &self.inner.api_url
    }

    pub fn async_jobs(&self) -> bool {
        self.inner.async_jobs
    }

    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    pub(crate) fn poll_interval(&self) -> Duration {
        self.inner.poll_interval
    }

    pub(crate) fn default_options(&self) -> &[LookupOption] {
        &self.inner.default_options
    }

    /// Execute a typed command
    ///
    /// Asynchronous commands are followed to completion when the client
    /// waits for jobs; see [`Client::wait_for_job`] for the contract.
    pub async fn execute<C: Command>(&self, command: C) -> Result<C::Response, Error> {
        let payload = self.call(C::NAME, command.to_params()).await?;
        let payload = match C::MODE {
            Mode::Async if self.inner.async_jobs => {
                self.complete_job(C::SHAPE, payload).await?
            }
            Mode::Async | Mode::Sync => payload,
        };
        envelope::decode(C::NAME, C::SHAPE, payload)
    }

    /// Issue a raw command and return the payload inside its envelope
    ///
    /// The parameters are signed as given; no async job handling is done.
    pub async fn call(&self, command: &str, params: Params) -> Result<Value, Error> {
        let query = self
            .inner
            .signer
            .signed_query(command, params.into_inner())?;
        let post = !self.inner.http_get_only && POST_COMMANDS.contains(&command);

        let request = if post {
            debug!(command, method = "POST", "issuing CloudStack command");
            self.inner
                .http
                .post(self.inner.api_url.clone())
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(query)
        } else {
            debug!(command, method = "GET", "issuing CloudStack command");
            let mut url = self.inner.api_url.clone();
            url.set_query(Some(&query));
            self.inner.http.get(url)
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        envelope::parse(command, status, &body)
    }
}

/// Builder for [`Client`]
#[derive(Clone)]
pub struct ClientBuilder {
    api_url: String,
    api_key: String,
    secret_key: String,
    verify_ssl: bool,
    async_jobs: bool,
    timeout: Duration,
    poll_interval: Duration,
    http_timeout: Duration,
    http_get_only: bool,
    default_options: Vec<LookupOption>,
}

impl std::fmt::Debug for ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientBuilder")
            .field("api_url", &self.api_url)
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .field("verify_ssl", &self.verify_ssl)
            .field("async_jobs", &self.async_jobs)
            .field("timeout", &self.timeout)
            .field("poll_interval", &self.poll_interval)
            .field("http_timeout", &self.http_timeout)
            .field("http_get_only", &self.http_get_only)
            .field("default_options", &self.default_options)
            .finish()
    }
}

impl ClientBuilder {
    pub fn new(api_url: &str, api_key: &str, secret_key: &str) -> Self {
        Self::from_config(&ClientConfig::new(api_url, api_key, secret_key))
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            secret_key: config.secret_key.clone(),
            verify_ssl: config.verify_ssl,
            async_jobs: config.async_jobs,
            timeout: config.timeout(),
            poll_interval: config.poll_interval(),
            http_timeout: config.http_timeout(),
            http_get_only: config.http_get_only,
            default_options: Vec::new(),
        }
    }

    pub fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    pub fn async_jobs(mut self, wait: bool) -> Self {
        self.async_jobs = wait;
        self
    }

    /// How long to wait for an async job before giving up
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Limit for each HTTP request, independent of [`ClientBuilder::timeout`]
    pub fn http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn http_get_only(mut self, get_only: bool) -> Self {
        self.http_get_only = get_only;
        self
    }

    /// Options applied to every lookup before the per-call ones
    pub fn default_options(mut self, options: impl IntoIterator<Item = LookupOption>) -> Self {
        self.default_options.extend(options);
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let api_url = Url::parse(&self.api_url)
            .map_err(|e| Error::Config(format!("Invalid API URL {:?}: {}", self.api_url, e)))?;
        let signer = RequestSigner::new(Credentials::new(self.api_key, self.secret_key)?);

        // reqwest carries no crypto provider of its own in this build
        let _ = rustls::crypto::ring::default_provider().install_default();

        let http = reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(concat!("cloudstack-client/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(!self.verify_ssl)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Client {
            inner: Arc::new(Inner {
                http,
                api_url,
                signer,
                async_jobs: self.async_jobs,
                timeout: self.timeout,
                poll_interval: self.poll_interval,
                http_get_only: self.http_get_only,
                default_options: self.default_options,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_rejects_bad_url() {
        let err = ClientBuilder::new("not a url", "k", "s").build().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_build_rejects_missing_credentials() {
        let err = ClientBuilder::new("http://localhost:8080/client/api", "", "s")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_builder_debug_redacts_secret() {
        let builder = ClientBuilder::new("http://localhost:8080/client/api", "k", "hunter2-secret");
        let debug = format!("{builder:?}");
        assert!(!debug.contains("hunter2-secret"), "{debug}");
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_builder_settings() {
        let client = ClientBuilder::new("http://localhost:8080/client/api", "k", "s")
            .async_jobs(false)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert!(!client.async_jobs());
        assert_eq!(client.timeout(), Duration::from_secs(5));
        assert_eq!(client.api_url().path(), "/client/api");
    }
}
