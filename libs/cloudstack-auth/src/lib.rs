// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack API Key Authentication Library
//!
//! Every CloudStack API request is authenticated by an API key and a
//! signature. The signature is an HMAC-SHA1, keyed with the user's secret
//! key, over the request's canonical query string.
//!
//! # Authentication Flow
//!
//! 1. Create [`Credentials`] from the API key and secret key
//! 2. For each command:
//!    a. Add `apiKey`, `command` and `response=json` to its parameters
//!    b. Build the canonical string (see [`signature`])
//!    c. Sign it and append `signature=<escaped base64>`
//!
//! # Example
//!
//! ```ignore
//! use cloudstack_auth::{Credentials, RequestSigner};
//!
//! let signer = RequestSigner::new(Credentials::new("api-key", "secret-key")?);
//! let query = signer.signed_query("listZones", Default::default())?;
//! // GET https://cloud.example.com/client/api?{query}
//! ```

pub mod credentials;
pub mod error;
pub mod signature;

pub use credentials::Credentials;
pub use error::AuthError;
pub use signature::{RequestSigner, encode_query, escape, sign, signing_string};
