// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual machine types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{Tag, lenient};
use super::nic::Nic;

/// Virtual machine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachine {
    pub account: String,
    pub affinitygroup: Vec<VirtualMachineAffinityGroup>,
    pub cpunumber: i64,
    pub cpuspeed: i64,
    pub cpuused: String,
    pub created: String,
    pub details: BTreeMap<String, String>,
    pub diskioread: i64,
    pub diskiowrite: i64,
    pub diskkbsread: i64,
    pub diskkbswrite: i64,
    pub diskofferingid: String,
    pub diskofferingname: String,
    pub displayname: String,
    pub displayvm: bool,
    pub domain: String,
    pub domainid: String,
    pub forvirtualnetwork: bool,
    pub group: String,
    pub groupid: String,
    pub guestosid: String,
    pub haenable: bool,
    pub hostid: String,
    pub hostname: String,
    pub hypervisor: String,
    pub id: String,
    pub instancename: String,
    pub isdynamicallyscalable: bool,
    pub isodisplaytext: String,
    pub isoid: String,
    pub isoname: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub keypair: String,
    pub memory: i64,
    pub memoryintfreekbs: i64,
    pub memorykbs: i64,
    pub memorytargetkbs: i64,
    pub name: String,
    pub networkkbsread: i64,
    pub networkkbswrite: i64,
    pub nic: Vec<Nic>,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub ostypeid: String,
    /// Only returned by deploy and password reset
    pub password: String,
    pub passwordenabled: bool,
    pub project: String,
    pub projectid: String,
    pub publicip: String,
    pub publicipid: String,
    pub rootdeviceid: i64,
    pub rootdevicetype: String,
    pub securitygroup: Vec<SecurityGroupRef>,
    pub serviceofferingid: String,
    pub serviceofferingname: String,
    pub servicestate: String,
    pub state: String,
    pub tags: Vec<Tag>,
    pub templatedisplaytext: String,
    pub templateid: String,
    pub templatename: String,
    pub userid: String,
    pub username: String,
    pub vgpu: String,
    pub zoneid: String,
    pub zonename: String,
}

/// Affinity group membership as embedded in a VM record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VirtualMachineAffinityGroup {
    pub account: String,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    pub id: String,
    pub name: String,
    pub project: String,
    pub projectid: String,
    pub r#type: String,
    #[serde(rename = "virtualmachineIds")]
    pub virtualmachine_ids: Vec<String>,
}

/// Security group membership as embedded in a VM record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecurityGroupRef {
    pub account: String,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    pub id: String,
    pub name: String,
    pub project: String,
    pub projectid: String,
    pub tags: Vec<Tag>,
}

/// Reply of `getVMPassword`, the password encrypted with the VM's SSH key
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmPassword {
    pub encryptedpassword: String,
}

list_response!(
    ListVirtualMachinesResponse,
    "virtualmachine",
    virtualmachines: VirtualMachine
);

resource!(VirtualMachine);
