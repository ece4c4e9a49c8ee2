// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Volume types

use serde::{Deserialize, Serialize};

use super::common::Tag;

/// Root or data disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub account: String,
    pub attached: String,
    pub chaininfo: String,
    pub clusterid: String,
    pub clustername: String,
    pub created: String,
    pub destroyed: bool,
    pub deviceid: i64,
    #[serde(rename = "diskBytesReadRate")]
    pub disk_bytes_read_rate: i64,
    #[serde(rename = "diskBytesWriteRate")]
    pub disk_bytes_write_rate: i64,
    #[serde(rename = "diskIopsReadRate")]
    pub disk_iops_read_rate: i64,
    #[serde(rename = "diskIopsWriteRate")]
    pub disk_iops_write_rate: i64,
    pub diskofferingdisplaytext: String,
    pub diskofferingid: String,
    pub diskofferingname: String,
    pub displayvolume: bool,
    pub domain: String,
    pub domainid: String,
    pub hypervisor: String,
    pub id: String,
    pub isextractable: bool,
    pub isodisplaytext: String,
    pub isoid: String,
    pub isoname: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub maxiops: i64,
    pub miniops: i64,
    pub name: String,
    pub path: String,
    pub physicalsize: i64,
    pub podid: String,
    pub podname: String,
    pub project: String,
    pub projectid: String,
    pub provisioningtype: String,
    pub quiescevm: bool,
    pub serviceofferingdisplaytext: String,
    pub serviceofferingid: String,
    pub serviceofferingname: String,
    pub size: i64,
    pub snapshotid: String,
    pub state: String,
    pub status: String,
    pub storage: String,
    pub storageid: String,
    pub storagetype: String,
    pub tags: Vec<Tag>,
    pub templatedisplaytext: String,
    pub templateid: String,
    pub templatename: String,
    pub r#type: String,
    pub utilization: String,
    pub virtualmachineid: String,
    pub virtualsize: i64,
    pub vmdisplayname: String,
    pub vmname: String,
    pub vmstate: String,
    pub zoneid: String,
    pub zonename: String,
}

list_response!(ListVolumesResponse, "volume", volumes: Volume);

resource!(Volume);
