// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HMAC-SHA1 request signing
//!
//! CloudStack authenticates each request by recomputing a signature over
//! its query parameters:
//!
//! ```text
//! canonical = sort(params by key)
//!             .map(k + "=" + form_urlencode(v))
//!             .join("&")
//! signing   = lowercase(canonical).replace("+", "%20")
//! signature = base64(hmac_sha1(secret_key, signing))
//! ```
//!
//! Keys are never escaped, only values. The server decodes the values and
//! re-encodes them with a `java.net.URLEncoder` compatible encoder, which is
//! what [`url::form_urlencoded`] implements.

use std::collections::BTreeMap;

use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use url::form_urlencoded::byte_serialize;

use crate::credentials::Credentials;
use crate::error::AuthError;

type HmacSha1 = Hmac<Sha1>;

/// Form-urlencode a single parameter value
pub fn escape(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect()
}

/// Encode parameters as `k=v&k=v`, sorted by key, escaping only values
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, escape(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the string the HMAC is computed over
pub fn signing_string(params: &BTreeMap<String, String>) -> String {
    encode_query(params).to_lowercase().replace('+', "%20")
}

/// Compute the base64 HMAC-SHA1 signature of `params`
pub fn sign(secret_key: &str, params: &BTreeMap<String, String>) -> Result<String, AuthError> {
    let mut mac = HmacSha1::new_from_slice(secret_key.as_bytes())
        .map_err(|e| AuthError::SigningError(e.to_string()))?;
    mac.update(signing_string(params).as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(base64::engine::general_purpose::STANDARD.encode(digest))
}

/// Adds the authentication parameters to a command and signs it
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Insert `apiKey`, `command` and `response=json`
    ///
    /// Values already present under those keys are replaced.
    pub fn prepare(&self, command: &str, params: &mut BTreeMap<String, String>) {
        params.insert("apiKey".to_string(), self.credentials.api_key().to_string());
        params.insert("command".to_string(), command.to_string());
        params.insert("response".to_string(), "json".to_string());
    }

    /// Signature over an already prepared parameter set
    pub fn signature(&self, params: &BTreeMap<String, String>) -> Result<String, AuthError> {
        sign(self.credentials.secret_key(), params)
    }

    /// Prepare and sign `params`, returning the full encoded query
    ///
    /// The result is usable both as a GET query string and as an
    /// `application/x-www-form-urlencoded` POST body.
    pub fn signed_query(
        &self,
        command: &str,
        mut params: BTreeMap<String, String>,
    ) -> Result<String, AuthError> {
        self.prepare(command, &mut params);
        let signature = self.signature(&params)?;
        tracing::trace!(command, "signed request");
        Ok(format!(
            "{}&signature={}",
            encode_query(&params),
            escape(&signature)
        ))
    }
}
