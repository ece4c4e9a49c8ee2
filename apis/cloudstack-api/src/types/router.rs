// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual router types

use serde::{Deserialize, Serialize};

use super::nic::Nic;

/// Virtual router appliance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Router {
    pub account: String,
    pub created: String,
    pub dns1: String,
    pub dns2: String,
    pub domain: String,
    pub domainid: String,
    pub gateway: String,
    pub guestipaddress: String,
    pub guestmacaddress: String,
    pub guestnetmask: String,
    pub guestnetworkid: String,
    pub guestnetworkname: String,
    pub hostid: String,
    pub hostname: String,
    pub hypervisor: String,
    pub id: String,
    pub ip6dns1: String,
    pub ip6dns2: String,
    pub isredundantrouter: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub linklocalip: String,
    pub linklocalmacaddress: String,
    pub linklocalnetmask: String,
    pub linklocalnetworkid: String,
    pub name: String,
    pub networkdomain: String,
    pub nic: Vec<Nic>,
    pub podid: String,
    pub project: String,
    pub projectid: String,
    pub publicip: String,
    pub publicmacaddress: String,
    pub publicnetmask: String,
    pub publicnetworkid: String,
    pub redundantstate: String,
    pub requiresupgrade: bool,
    pub role: String,
    pub scriptsversion: String,
    pub serviceofferingid: String,
    pub serviceofferingname: String,
    pub state: String,
    pub templateid: String,
    pub version: String,
    pub vpcid: String,
    pub vpcname: String,
    pub zoneid: String,
    pub zonename: String,
}

list_response!(ListRoutersResponse, "router", routers: Router);

resource!(Router);
