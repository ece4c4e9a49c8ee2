// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Usage commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_api::ListResponse;
use cloudstack_client::Client;
use cloudstack_client::services::usage::{ListUsageRecords, ListUsageTypes};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum UsageCommand {
    /// List usage types
    Types,
    /// List usage records for a date range
    Records(UsageRecordsArgs),
}

#[derive(Args, Clone)]
pub struct UsageRecordsArgs {
    /// Start date, yyyy-MM-dd
    #[arg(long)]
    pub start: String,
    /// End date, yyyy-MM-dd
    #[arg(long)]
    pub end: String,
    /// Usage type id, see 'csctl usage types'
    #[arg(long = "type")]
    pub kind: Option<i64>,
    /// Filter by account name
    #[arg(long)]
    pub account: Option<String>,
}

impl UsageCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::Types => list_types(client, use_json).await,
            Self::Records(args) => list_records(args, client, use_json).await,
        }
    }
}

async fn list_types(client: &Client, use_json: bool) -> Result<()> {
    let types = client.execute(ListUsageTypes::new()).await?.into_items();

    if use_json {
        json::print_json(&types)?;
    } else {
        let mut tbl = table::create_table(&["ID", "DESCRIPTION"]);
        for t in &types {
            tbl.add_row(vec![t.usagetypeid.to_string(), t.description.clone()]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn list_records(args: UsageRecordsArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListUsageRecords::new(args.end, args.start);
    if let Some(kind) = args.kind {
        command = command.kind(kind);
    }
    if let Some(account) = args.account {
        command = command.account(account);
    }
    let records = client.list_all(command).await?;

    if use_json {
        json::print_json(&records)?;
    } else {
        let mut tbl = table::create_table(&["ACCOUNT", "TYPE", "DESCRIPTION", "USAGE", "START", "END"]);
        for r in &records {
            tbl.add_row(vec![
                r.account.clone(),
                r.usagetype.to_string(),
                r.description.clone(),
                r.usage.clone(),
                r.startdate.clone(),
                r.enddate.clone(),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}
