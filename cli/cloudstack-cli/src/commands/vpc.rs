// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_api::Vpc;
use cloudstack_client::Client;
use cloudstack_client::services::vpc::{ListVpcs, RestartVpc};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum VpcCommand {
    /// List VPCs
    #[command(alias = "ls")]
    List(VpcListArgs),
    /// Get VPC details
    Get(VpcArgs),
    /// Restart a VPC
    Restart(VpcRestartArgs),
}

#[derive(Args, Clone)]
pub struct VpcListArgs {
    /// Filter by zone id
    #[arg(long)]
    pub zone_id: Option<String>,
    /// List VPCs of every account you can see
    #[arg(short = 'a', long)]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct VpcArgs {
    /// VPC ID or name
    pub vpc: String,
}

#[derive(Args, Clone)]
pub struct VpcRestartArgs {
    /// VPC ID or name
    pub vpc: String,
    /// Recreate the VPC routers
    #[arg(long)]
    pub cleanup: bool,
    /// Switch to redundant routers
    #[arg(long)]
    pub make_redundant: bool,
}

impl VpcCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_vpcs(args, client, use_json).await,
            Self::Get(args) => {
                let vpc = client.find::<ListVpcs>(&args.vpc, &[]).await?;
                print_vpc(&vpc, use_json)
            }
            Self::Restart(args) => restart_vpc(args, client, use_json).await,
        }
    }
}

async fn list_vpcs(args: VpcListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListVpcs::new();
    if let Some(zone) = args.zone_id {
        command = command.zoneid(zone);
    }
    if args.all {
        command = command.listall(true);
    }
    let vpcs = client.list_all(command).await?;

    if use_json {
        json::print_json(&vpcs)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "CIDR", "STATE", "ZONE"]);
        for vpc in &vpcs {
            tbl.add_row(vec![
                vpc.id.as_str(),
                vpc.name.as_str(),
                vpc.cidr.as_str(),
                vpc.state.as_str(),
                table::or_dash(&vpc.zonename),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn print_vpc(vpc: &Vpc, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(vpc);
    }
    table::print_fields(&[
        ("ID", vpc.id.clone()),
        ("Name", vpc.name.clone()),
        ("CIDR", vpc.cidr.clone()),
        ("State", vpc.state.clone()),
        ("Network domain", vpc.networkdomain.clone()),
        ("Networks", vpc.network.len().to_string()),
        ("Redundant", vpc.redundantvpcrouter.to_string()),
        ("Zone", vpc.zonename.clone()),
    ]);
    Ok(())
}

async fn restart_vpc(args: VpcRestartArgs, client: &Client, use_json: bool) -> Result<()> {
    let vpc = client.find::<ListVpcs>(&args.vpc, &[]).await?;
    let mut command = RestartVpc::new(vpc.id.as_str());
    if args.cleanup {
        command = command.cleanup(true);
    }
    if args.make_redundant {
        command = command.makeredundant(true);
    }
    let vpc = client.execute(command).await?;
    print_vpc(&vpc, use_json)
}
