// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Raw API calls

use anyhow::Result;
use clap::Args;
use cloudstack_client::{Client, Params};

use crate::output::json;

#[derive(Args, Clone)]
pub struct ApiArgs {
    /// API command name, e.g. listZones
    pub command: String,
    /// Parameters as key=value
    #[arg(value_parser = parse_param)]
    pub params: Vec<(String, String)>,
    /// Follow the async job named in the reply
    #[arg(short, long)]
    pub wait: bool,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter '{s}', expected key=value"))?;
    if key.is_empty() {
        return Err(format!("invalid parameter '{s}', empty key"));
    }
    Ok((key.to_string(), value.to_string()))
}

/// Issue a signed call and print the JSON payload
pub async fn run(args: ApiArgs, client: &Client) -> Result<()> {
    let params: Params = args.params.into_iter().collect();
    let payload = client.call(&args.command, params).await?;

    let job_id = payload.get("jobid").and_then(|v| v.as_str());
    match job_id {
        Some(job_id) if args.wait => json::print_json(&client.wait_for_job(job_id).await?),
        _ => json::print_json(&payload),
    }
}
