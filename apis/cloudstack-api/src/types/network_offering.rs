// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network offering types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::NetworkService;

/// Network offering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkOffering {
    pub availability: String,
    pub conservemode: bool,
    pub created: String,
    pub details: BTreeMap<String, String>,
    pub displaytext: String,
    pub egressdefaultpolicy: bool,
    pub forvpc: bool,
    pub guestiptype: String,
    pub id: String,
    pub isdefault: bool,
    pub ispersistent: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub maxconnections: i64,
    pub name: String,
    pub networkrate: i64,
    pub service: Vec<NetworkService>,
    pub serviceofferingid: String,
    pub specifyipranges: bool,
    pub specifyvlan: bool,
    pub state: String,
    pub supportspublicaccess: bool,
    pub supportsstrechedl2subnet: bool,
    pub tags: String,
    pub traffictype: String,
}

list_response!(
    ListNetworkOfferingsResponse,
    "networkoffering",
    networkofferings: NetworkOffering
);

resource!(NetworkOffering);
