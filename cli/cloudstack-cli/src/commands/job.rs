// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Async job commands

use anyhow::Result;
use clap::Subcommand;
use cloudstack_client::Client;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum JobCommand {
    /// Show the current state of a job
    Get {
        /// Job ID
        job_id: String,
    },
    /// Wait for a job to finish and print its result
    Wait {
        /// Job ID
        job_id: String,
    },
}

impl JobCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::Get { job_id } => {
                let job = client.query_job(&job_id).await?;
                if use_json {
                    json::print_json(&job)?;
                } else {
                    table::print_fields(&[
                        ("Job ID", job.jobid.clone()),
                        ("Command", job.cmd.clone()),
                        ("Status", format!("{:?}", job.status())),
                        ("Created", job.created.clone()),
                        ("Instance", job.jobinstanceid.clone()),
                    ]);
                }
                Ok(())
            }
            Self::Wait { job_id } => {
                let result = client.wait_for_job(&job_id).await?;
                json::print_json(&result)
            }
        }
    }
}
