// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cloudstack_api::VirtualMachine;
use cloudstack_client::Client;
use cloudstack_client::services::virtual_machine::{
    DestroyVirtualMachine, ListVirtualMachines, RebootVirtualMachine, StartVirtualMachine,
    StopVirtualMachine,
};

use crate::output::{json, table};

#[derive(Subcommand, Clone)]
pub enum VmCommand {
    /// List virtual machines
    #[command(alias = "ls")]
    List(VmListArgs),
    /// Get virtual machine details
    Get(VmArgs),
    /// Start a virtual machine
    Start(VmArgs),
    /// Stop a virtual machine
    Stop(VmStopArgs),
    /// Reboot a virtual machine
    Reboot(VmArgs),
    /// Destroy a virtual machine
    #[command(alias = "rm")]
    Destroy(VmDestroyArgs),
}

#[derive(Args, Clone)]
pub struct VmListArgs {
    /// Filter by state, e.g. Running or Stopped
    #[arg(long)]
    pub state: Option<String>,
    /// Filter by zone id
    #[arg(long)]
    pub zone_id: Option<String>,
    /// Filter by network id
    #[arg(long)]
    pub network_id: Option<String>,
    /// List machines of every account you can see
    #[arg(short = 'a', long)]
    pub all: bool,
}

#[derive(Args, Clone)]
pub struct VmArgs {
    /// Virtual machine ID or name
    pub vm: String,
}

#[derive(Args, Clone)]
pub struct VmStopArgs {
    /// Virtual machine ID or name
    pub vm: String,
    /// Force stop
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Clone)]
pub struct VmDestroyArgs {
    /// Virtual machine ID or name
    pub vm: String,
    /// Expunge immediately instead of keeping it recoverable
    #[arg(long)]
    pub expunge: bool,
}

impl VmCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::List(args) => list_vms(args, client, use_json).await,
            Self::Get(args) => {
                let vm = resolve_vm(&args.vm, client).await?;
                print_vm(&vm, use_json)
            }
            Self::Start(args) => {
                let id = resolve_vm(&args.vm, client).await?.id;
                let vm = client.execute(StartVirtualMachine::new(id)).await?;
                report(&vm, "Started", use_json)
            }
            Self::Stop(args) => {
                let id = resolve_vm(&args.vm, client).await?.id;
                let mut command = StopVirtualMachine::new(id);
                if args.force {
                    command = command.forced(true);
                }
                let vm = client.execute(command).await?;
                report(&vm, "Stopped", use_json)
            }
            Self::Reboot(args) => {
                let id = resolve_vm(&args.vm, client).await?.id;
                let vm = client.execute(RebootVirtualMachine::new(id)).await?;
                report(&vm, "Rebooted", use_json)
            }
            Self::Destroy(args) => {
                let id = resolve_vm(&args.vm, client).await?.id;
                let mut command = DestroyVirtualMachine::new(id);
                if args.expunge {
                    command = command.expunge(true);
                }
                let vm = client.execute(command).await?;
                report(&vm, "Destroyed", use_json)
            }
        }
    }
}

async fn resolve_vm(vm: &str, client: &Client) -> Result<VirtualMachine> {
    Ok(client.find::<ListVirtualMachines>(vm, &[]).await?)
}

async fn list_vms(args: VmListArgs, client: &Client, use_json: bool) -> Result<()> {
    let mut command = ListVirtualMachines::new();
    if let Some(state) = args.state {
        command = command.state(state);
    }
    if let Some(zone) = args.zone_id {
        command = command.zoneid(zone);
    }
    if let Some(network) = args.network_id {
        command = command.networkid(network);
    }
    if args.all {
        command = command.listall(true);
    }
    let vms = client.list_all(command).await?;

    if use_json {
        json::print_json(&vms)?;
    } else {
        let mut tbl = table::create_table(&["ID", "NAME", "STATE", "IP", "TEMPLATE", "ZONE"]);
        for vm in &vms {
            let ip = vm.nic.first().map(|n| n.ipaddress.as_str()).unwrap_or("");
            tbl.add_row(vec![
                vm.id.as_str(),
                vm.name.as_str(),
                vm.state.as_str(),
                table::or_dash(ip),
                table::or_dash(&vm.templatename),
                table::or_dash(&vm.zonename),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn print_vm(vm: &VirtualMachine, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(vm);
    }
    let ips: Vec<&str> = vm.nic.iter().map(|n| n.ipaddress.as_str()).collect();
    table::print_fields(&[
        ("ID", vm.id.clone()),
        ("Name", vm.name.clone()),
        ("Display name", vm.displayname.clone()),
        ("State", vm.state.clone()),
        ("Offering", vm.serviceofferingname.clone()),
        ("Template", vm.templatename.clone()),
        ("Hypervisor", vm.hypervisor.clone()),
        ("Host", vm.hostname.clone()),
        ("IPs", ips.join(", ")),
        ("Zone", vm.zonename.clone()),
    ]);
    Ok(())
}

fn report(vm: &VirtualMachine, action: &str, use_json: bool) -> Result<()> {
    if use_json {
        return json::print_json(vm);
    }
    println!("{} {} ({})", action, vm.name, vm.id);
    Ok(())
}
