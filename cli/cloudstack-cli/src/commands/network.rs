// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_api::Network;
use cloudstack_client::Client;
use cloudstack_client::services::network::{DeleteNetwork, ListNetworks, RestartNetwork};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum NetworkCommand {
    /// List networks
    #[command(alias = "ls")]
    List(NetworkListArgs),
    /// Get network details
    Get(NetworkArgs),
    /// Restart a network
    Restart(NetworkRestartArgs),
    /// Delete a network
    #[command(alias = "rm")]
    Delete(NetworkDeleteArgs),
}

#[derive(Args, Clone)]
pub struct NetworkListArgs {
    /// Filter by zone id
    #[arg(long)]
    pub zone_id: Option<String>,
    /// Filter by VPC id
    #[arg(long)]
    pub vpc_id: Option<String>,
    /// List networks of every account you can see
    #[arg(short = 'a', long)]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct NetworkArgs {
    /// Network ID or name
    pub network: String,
}

#[derive(Args, Clone)]
pub struct NetworkRestartArgs {
    /// Network ID or name
    pub network: String,
    /// Recreate the network's routers
    #[arg(long)]
    pub cleanup: bool,
}

#[derive(Args, Clone)]
pub struct NetworkDeleteArgs {
    /// Network ID or name
    pub network: String,
    /// Delete even if resources still use it
    #[arg(short, long)]
    pub force: bool,
}

impl NetworkCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_networks(args, client, use_json).await,
            Self::Get(args) => get_network(args, client, use_json).await,
            Self::Restart(args) => restart_network(args, client, use_json).await,
            Self::Delete(args) => delete_network(args, client).await,
        }
    }
}

async fn resolve_network(network: &str, client: &Client) -> Result<Network> {
    Ok(client.find::<ListNetworks>(network, &[]).await?)
}

async fn list_networks(args: NetworkListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListNetworks::new();
    if let Some(zone) = args.zone_id {
        command = command.zoneid(zone);
    }
    if let Some(vpc) = args.vpc_id {
        command = command.vpcid(vpc);
    }
    if args.all {
        command = command.listall(true);
    }
    let networks = client.list_all(command).await?;

    if use_json {
        json::print_json(&networks)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "CIDR", "STATE", "ZONE"]);
        for net in &networks {
            tbl.add_row(vec![
                net.id.as_str(),
                net.name.as_str(),
                net.r#type.as_str(),
                table::or_dash(&net.cidr),
                net.state.as_str(),
                table::or_dash(&net.zonename),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn print_network(net: &Network, use_json: bool) -> Result<()> {
    if use_json {
        json::print_json(net)?;
    } else {
        table::print_fields(&[
            ("ID", net.id.clone()),
            ("Name", net.name.clone()),
            ("Type", net.r#type.clone()),
            ("State", net.state.clone()),
            ("CIDR", net.cidr.clone()),
            ("Gateway", net.gateway.clone()),
            ("Offering", net.networkofferingname.clone()),
            ("VPC", net.vpcid.clone()),
            ("Zone", net.zonename.clone()),
            ("Restart required", net.restartrequired.to_string()),
        ]);
    }
    Ok(())
}

async fn get_network(args: NetworkArgs, client: &Client, use_json: bool) -> Result<()> {
    let net = resolve_network(&args.network, client).await?;
    print_network(&net, use_json)
}

async fn restart_network(args: NetworkRestartArgs, client: &Client, use_json: bool) -> Result<()> {
    let net = resolve_network(&args.network, client).await?;
    let mut command = RestartNetwork::new(net.id.as_str());
    if args.cleanup {
        command = command.cleanup(true);
    }
    let net = client.execute(command).await?;
    print_network(&net, use_json)
}

async fn delete_network(args: NetworkDeleteArgs, client: &Client) -> Result<()> {
    let net = resolve_network(&args.network, client).await?;
    let mut command = DeleteNetwork::new(net.id.as_str());
    if args.force {
        command = command.forced(true);
    }
    client.execute(command).await?;
    println!("Deleted network {} ({})", net.name, net.id);
    Ok(())
}
