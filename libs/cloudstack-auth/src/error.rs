// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for cloudstack-auth

use thiserror::Error;

/// Errors that can occur while preparing or signing a request
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required credential was empty
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    /// Error during HMAC computation
    #[error("Signing error: {0}")]
    SigningError(String),
}
