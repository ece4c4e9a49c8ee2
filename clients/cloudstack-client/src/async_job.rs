// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Async job completion
//!
//! Mutating commands answer immediately with a job id. The job is then
//! polled with `queryAsyncJobResult` until it reports a terminal status:
//!
//! ```text
//! jobstatus 0  pending, sleep and poll again
//! jobstatus 1  success, `jobresult` is the command's payload
//! jobstatus 2  failure, `jobresult` is {errorcode, errortext}
//! ```
//!
//! Polls are spaced by the client's poll interval. Once the timeout has
//! elapsed the wait ends with [`Error::AsyncTimeout`].

use std::cmp;

use cloudstack_api::{AsyncJobResult, JobStatus};
use serde_json::Value;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::client::Client;
use crate::command::{Command, Shape};
use crate::envelope;
use crate::error::Error;
use crate::services::async_job::QueryAsyncJobResult;

impl Client {
    /// Fetch the current state of a job once
    ///
    /// Must not go through [`Client::execute`], which awaits this poller.
    pub async fn query_job(&self, job_id: &str) -> Result<AsyncJobResult, Error> {
        let command = QueryAsyncJobResult::new(job_id);
        let payload = self.call(QueryAsyncJobResult::NAME, command.to_params()).await?;
        envelope::decode(QueryAsyncJobResult::NAME, Shape::Flat, payload)
    }

    /// Poll a job until it finishes and return its raw `jobresult`
    ///
    /// # Errors
    /// * [`Error::JobFailed`] when the job reports a failure
    /// * [`Error::AsyncTimeout`] when the client timeout elapses first; its
    ///   partial response is the last job status seen
    /// * any transport or decode error from a poll, unchanged
    pub async fn wait_for_job(&self, job_id: &str) -> Result<Value, Error> {
        let deadline = Instant::now() + self.timeout();
        let mut polls = 0u32;

        loop {
            let job = self.query_job(job_id).await?;
            polls += 1;
            debug!(job_id, polls, jobstatus = job.jobstatus, "polled async job");

            match job.status() {
                JobStatus::Succeeded => return Ok(job.jobresult),
                JobStatus::Failed => {
                    let err = job.error().unwrap_or_default();
                    return Err(Error::JobFailed {
                        job_id: job_id.to_string(),
                        error_code: err.errorcode,
                        message: err.errortext,
                    });
                }
                JobStatus::Pending | JobStatus::Unknown(_) => {}
            }

            let now = Instant::now();
            if now >= deadline {
                warn!(job_id, polls, "timed out waiting for async job");
                return Err(Error::AsyncTimeout {
                    job_id: job_id.to_string(),
                    partial: Box::new(serde_json::to_value(&job).unwrap_or_default()),
                });
            }
            tokio::time::sleep(cmp::min(self.poll_interval(), deadline - now)).await;
        }
    }

    /// Follow the job named in an async command's initial reply
    ///
    /// A reply without a job id is returned untouched. On timeout the
    /// partial response becomes the initial reply.
    pub(crate) async fn complete_job(&self, shape: Shape, initial: Value) -> Result<Value, Error> {
        let Some(job_id) = initial
            .get("jobid")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_owned)
        else {
            return Ok(initial);
        };

        match self.wait_for_job(&job_id).await {
            Ok(result) => {
                let result = match shape {
                    Shape::Entity => envelope::unwrap_entity(result),
                    Shape::Flat => result,
                };
                Ok(envelope::merge(initial, result))
            }
            Err(Error::AsyncTimeout { job_id, .. }) => Err(Error::AsyncTimeout {
                job_id,
                partial: Box::new(initial),
            }),
            Err(e) => Err(e),
        }
    }
}
