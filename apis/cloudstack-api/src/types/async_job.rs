// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Async job types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status of an asynchronous job as reported by `queryAsyncJobResult`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
    Unknown(i64),
}

impl From<i64> for JobStatus {
    fn from(code: i64) -> Self {
        match code {
            0 => Self::Pending,
            1 => Self::Succeeded,
            2 => Self::Failed,
            other => Self::Unknown(other),
        }
    }
}

/// An asynchronous job and, once finished, its result
///
/// `jobresult` is left as raw JSON: its shape depends on the command that
/// started the job (`cmd`), and on failure it holds a [`JobError`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsyncJobResult {
    pub accountid: String,
    pub cmd: String,
    pub created: String,
    pub jobid: String,
    pub jobinstanceid: String,
    pub jobinstancetype: String,
    pub jobprocstatus: i64,
    pub jobresult: Value,
    pub jobresultcode: i64,
    pub jobresulttype: String,
    pub jobstatus: i64,
    pub userid: String,
}

impl AsyncJobResult {
    pub fn status(&self) -> JobStatus {
        JobStatus::from(self.jobstatus)
    }

    /// The failure details of a job with status [`JobStatus::Failed`]
    ///
    /// Returns `None` when the job did not fail. A failed job whose
    /// result is not an error object yields a [`JobError`] carrying the
    /// raw result as text.
    pub fn error(&self) -> Option<JobError> {
        if self.status() != JobStatus::Failed {
            return None;
        }
        Some(
            serde_json::from_value::<JobError>(self.jobresult.clone())
                .ok()
                .filter(|e| !e.errortext.is_empty())
                .unwrap_or_else(|| JobError {
                    errorcode: self.jobresultcode,
                    errortext: format!("Undefined error: {}", self.jobresult),
                }),
        )
    }
}

/// Error payload of a failed job
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobError {
    pub errorcode: i64,
    pub errortext: String,
}

list_response!(
    /// Response of `listAsyncJobs`
    ListAsyncJobsResponse,
    "asyncjobs",
    asyncjobs: AsyncJobResult
);
