// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_client::Client;
use cloudstack_client::services::virtual_machine::ListVirtualMachines;
use cloudstack_client::services::volume::ListVolumes;

use crate::output::{json, table};

const GIB: i64 = 1024 * 1024 * 1024;

#[derive(Subcommand, Clone)]
pub enum VolumeCommand {
    /// List volumes
    #[command(alias = "ls")]
    List(VolumeListArgs),
}

#[derive(Args, Clone)]
pub struct VolumeListArgs {
    /// Only volumes attached to this VM (ID or name)
    #[arg(long)]
    pub vm: Option<String>,
    /// ROOT or DATADISK
    #[arg(long = "type")]
    pub kind: Option<String>,
    /// Filter by zone id
    #[arg(long)]
    pub zone_id: Option<String>,
}

impl VolumeCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_volumes(args, client, use_json).await,
        }
    }
}

async fn list_volumes(args: VolumeListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListVolumes::new();
    if let Some(vm) = args.vm {
        let vm_id = client.find_id::<ListVirtualMachines>(&vm, &[]).await?;
        command = command.virtualmachineid(vm_id);
    }
    if let Some(kind) = args.kind {
        command = command.kind(kind);
    }
    if let Some(zone) = args.zone_id {
        command = command.zoneid(zone);
    }
    let volumes = client.list_all(command).await?;

    if use_json {
        json::print_json(&volumes)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "TYPE", "SIZE", "STATE", "VM"]);
        for vol in &volumes {
            tbl.add_row(vec![
                vol.id.clone(),
                vol.name.clone(),
                vol.r#type.clone(),
                format!("{}G", vol.size / GIB),
                vol.state.clone(),
                table::or_dash(&vol.vmname).to_string(),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}
