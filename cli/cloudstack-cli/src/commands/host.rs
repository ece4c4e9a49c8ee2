// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_api::Host;
use cloudstack_client::Client;
use cloudstack_client::services::host::ListHosts;

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum HostCommand {
    /// List hosts
    #[command(alias = "ls")]
    List(HostListArgs),
    /// Get host details
    Get(HostGetArgs),
}

#[derive(Args, Clone)]
pub struct HostListArgs {
    /// Filter by zone id
    #[arg(long)]
    pub zone_id: Option<String>,
    /// Filter by host type, e.g. Routing or SecondaryStorage
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Filter by state
    #[arg(long)]
    pub state: Option<String>,
}

#[derive(Args, Clone)]
pub struct HostGetArgs {
    /// Host ID or name
    pub host: String,
}

impl HostCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_hosts(args, client, use_json).await,
            Self::Get(args) => get_host(args, client, use_json).await,
        }
    }
}

async fn list_hosts(args: HostListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListHosts::new();
    if let Some(zone) = args.zone_id {
        command = command.zoneid(zone);
    }
    if let Some(kind) = args.kind {
        command = command.kind(kind);
    }
    if let Some(state) = args.state {
        command = command.state(state);
    }
    let hosts = client.list_all(command).await?;

    if use_json {
        json::print_json(&hosts)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "STATE", "IP", "ZONE"]);
        for host in &hosts {
            tbl.add_row(vec![
                host.id.as_str(),
                host.name.as_str(),
                host.r#type.as_str(),
                host.state.as_str(),
                table::or_dash(&host.ipaddress),
                table::or_dash(&host.zonename),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

async fn get_host(args: HostGetArgs, client: &Client, use_json: bool) -> Result<()> {
    let host: Host = client.find::<ListHosts>(&args.host, &[]).await?;

    if use_json {
        json::print_json(&host)?;
    } else {
        table::print_fields(&[
            ("ID", host.id.clone()),
            ("Name", host.name.clone()),
            ("Type", host.r#type.clone()),
            ("State", host.state.clone()),
            ("Resource state", host.resourcestate.clone()),
            ("Hypervisor", host.hypervisor.clone()),
            ("IP address", host.ipaddress.clone()),
            ("Cluster", host.clustername.clone()),
            ("Pod", host.podname.clone()),
            ("Zone", host.zonename.clone()),
        ]);
    }
    Ok(())
}
