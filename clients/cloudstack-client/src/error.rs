// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for cloudstack-client

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) operations
#[derive(Error, Debug)]
pub enum Error {
    /// The HTTP request could not be sent or its body not read
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the expected shape
    #[error("Failed to decode {command} response: {source}")]
    Decode {
        command: String,
        #[source]
        source: serde_json::Error,
    },

    /// CloudStack rejected the command
    #[error("CloudStack API error {error_code} (CSExceptionErrorCode: {cs_error_code}): {error_text}")]
    Api {
        error_code: i64,
        cs_error_code: i64,
        error_text: String,
    },

    /// Non-200 reply that is not a CloudStack error envelope
    #[error("Unexpected HTTP status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// An asynchronous job finished with a failure status
    #[error("Async job {job_id} failed with error {error_code}: {message}")]
    JobFailed {
        job_id: String,
        error_code: i64,
        message: String,
    },

    /// The job did not finish before the configured timeout
    ///
    /// `partial` holds the last response seen before giving up, usually
    /// the initial reply carrying the job id.
    #[error("Timeout waiting for async job {job_id} to finish")]
    AsyncTimeout {
        job_id: String,
        partial: Box<serde_json::Value>,
    },

    /// A lookup matched nothing
    #[error("No match found for {resource} {query}")]
    NotFound {
        resource: &'static str,
        query: String,
    },

    /// A lookup matched several records and none exactly
    #[error("Could not find an exact match for {resource} {query} ({count} results)")]
    Ambiguous {
        resource: &'static str,
        query: String,
        count: usize,
    },

    /// A parameter the command does not declare
    #[error("Command {command} does not accept parameter {param}")]
    UnsupportedParam {
        command: &'static str,
        param: String,
    },

    #[error(transparent)]
    Auth(#[from] cloudstack_auth::AuthError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// True for the async job timeout sentinel
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::AsyncTimeout { .. })
    }

    /// True for lookups that matched nothing
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Decode the partial response carried by [`Error::AsyncTimeout`]
    ///
    /// Returns `None` for other variants or when the partial response does
    /// not decode as `T`.
    pub fn partial_response<T: DeserializeOwned>(&self) -> Option<T> {
        match self {
            Self::AsyncTimeout { partial, .. } => {
                serde_json::from_value(partial.as_ref().clone()).ok()
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudstack_api::VirtualMachine;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_display() {
        let err = Error::Api {
            error_code: 431,
            cs_error_code: 4350,
            error_text: "Unable to execute API command".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "CloudStack API error 431 (CSExceptionErrorCode: 4350): Unable to execute API command"
        );
    }

    #[test]
    fn test_partial_response() {
        let err = Error::AsyncTimeout {
            job_id: "job-1".to_string(),
            partial: Box::new(serde_json::json!({"id": "vm-1", "jobid": "job-1"})),
        };
        assert!(err.is_timeout());
        let vm: VirtualMachine = err.partial_response().unwrap();
        assert_eq!(vm.id, "vm-1");
        assert_eq!(vm.jobid, "job-1");
    }

    #[test]
    fn test_partial_response_only_for_timeouts() {
        let err = Error::Config("nope".to_string());
        assert!(!err.is_timeout());
        assert!(err.partial_response::<VirtualMachine>().is_none());
    }
}
