// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Guest and physical network types

use serde::{Deserialize, Serialize};

use super::common::{NetworkService, Tag};

/// Guest network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Network {
    pub account: String,
    pub aclid: String,
    pub acltype: String,
    pub broadcastdomaintype: String,
    pub broadcasturi: String,
    pub canusefordeploy: bool,
    pub cidr: String,
    pub displaynetwork: bool,
    pub displaytext: String,
    pub dns1: String,
    pub dns2: String,
    pub domain: String,
    pub domainid: String,
    pub externalid: String,
    pub gateway: String,
    pub id: String,
    pub ip6cidr: String,
    pub ip6gateway: String,
    pub isdefault: bool,
    pub ispersistent: bool,
    pub issystem: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub name: String,
    pub netmask: String,
    pub networkcidr: String,
    pub networkdomain: String,
    pub networkofferingavailability: String,
    pub networkofferingconservemode: bool,
    pub networkofferingdisplaytext: String,
    pub networkofferingid: String,
    pub networkofferingname: String,
    pub physicalnetworkid: String,
    pub project: String,
    pub projectid: String,
    pub redundantrouter: bool,
    pub related: String,
    pub reservediprange: String,
    pub restartrequired: bool,
    pub service: Vec<NetworkService>,
    pub specifyipranges: bool,
    pub state: String,
    pub strechedl2subnet: bool,
    pub subdomainaccess: bool,
    pub tags: Vec<Tag>,
    pub traffictype: String,
    pub r#type: String,
    pub vlan: String,
    pub vpcid: String,
    pub zoneid: String,
    pub zonename: String,
}

/// Physical network backing guest and system traffic in a zone
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicalNetwork {
    pub broadcastdomainrange: String,
    pub domainid: String,
    pub id: String,
    pub isolationmethods: String,
    pub name: String,
    pub networkspeed: String,
    pub state: String,
    pub tags: String,
    pub vlan: String,
    pub zoneid: String,
}

/// Traffic type carried by a physical network
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficType {
    pub canenableindividualservice: bool,
    pub destinationphysicalnetworkid: String,
    pub id: String,
    pub name: String,
    pub physicalnetworkid: String,
    pub servicelist: Vec<String>,
    pub state: String,
}

list_response!(ListNetworksResponse, "network", networks: Network);
list_response!(
    ListPhysicalNetworksResponse,
    "physicalnetwork",
    physicalnetworks: PhysicalNetwork
);
list_response!(ListTrafficTypesResponse, "traffictype", traffictypes: TrafficType);

resource!(Network, PhysicalNetwork);
