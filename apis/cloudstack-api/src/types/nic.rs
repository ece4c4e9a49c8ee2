// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! NIC types

use serde::{Deserialize, Serialize};

/// Network interface of a virtual machine or router
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Nic {
    pub broadcasturi: String,
    pub deviceid: String,
    pub extradhcpoption: Vec<String>,
    pub gateway: String,
    pub id: String,
    pub ip6address: String,
    pub ip6cidr: String,
    pub ip6gateway: String,
    pub ipaddress: String,
    pub isdefault: bool,
    pub isolationuri: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub macaddress: String,
    pub netmask: String,
    pub networkid: String,
    pub networkname: String,
    pub nsxlogicalswitch: String,
    pub nsxlogicalswitchport: String,
    pub secondaryip: Vec<SecondaryIp>,
    pub traffictype: String,
    pub r#type: String,
    pub virtualmachineid: String,
}

/// Additional address assigned to a NIC
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecondaryIp {
    pub id: String,
    pub ipaddress: String,
}

/// Reply of `addIpToNic`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NicSecondaryIp {
    pub id: String,
    pub ipaddress: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub networkid: String,
    pub nicid: String,
    pub secondaryip: Vec<SecondaryIp>,
    pub virtualmachineid: String,
}

list_response!(ListNicsResponse, "nic", nics: Nic);
