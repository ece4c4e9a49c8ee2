// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! API key / secret key pair

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::error::AuthError;

/// The key pair a CloudStack user generates for API access
///
/// The API key travels with every request as the `apiKey` parameter. The
/// secret key never leaves the process; it only keys the HMAC.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create a credential pair, rejecting empty keys
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, AuthError> {
        let api_key = api_key.into();
        let secret_key = secret_key.into();
        if api_key.trim().is_empty() {
            return Err(AuthError::MissingCredential("api key"));
        }
        if secret_key.trim().is_empty() {
            return Err(AuthError::MissingCredential("secret key"));
        }
        Ok(Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn secret_key(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_keys() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::MissingCredential("api key"))
        ));
        assert!(matches!(
            Credentials::new("key", "  "),
            Err(AuthError::MissingCredential("secret key"))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let creds = Credentials::new("my-api-key", "hunter2").unwrap();
        let debug = format!("{creds:?}");
        assert!(debug.contains("my-api-key"));
        assert!(!debug.contains("hunter2"));
    }
}
