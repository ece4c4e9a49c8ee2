// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Disk offering types

use serde::{Deserialize, Serialize};

/// Disk offering
///
/// The I/O throttling fields are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskOffering {
    #[serde(rename = "cacheMode")]
    pub cache_mode: String,
    pub created: String,
    #[serde(rename = "diskBytesReadRate")]
    pub disk_bytes_read_rate: i64,
    #[serde(rename = "diskBytesReadRateMax")]
    pub disk_bytes_read_rate_max: i64,
    #[serde(rename = "diskBytesReadRateMaxLength")]
    pub disk_bytes_read_rate_max_length: i64,
    #[serde(rename = "diskBytesWriteRate")]
    pub disk_bytes_write_rate: i64,
    #[serde(rename = "diskBytesWriteRateMax")]
    pub disk_bytes_write_rate_max: i64,
    #[serde(rename = "diskBytesWriteRateMaxLength")]
    pub disk_bytes_write_rate_max_length: i64,
    #[serde(rename = "diskIopsReadRate")]
    pub disk_iops_read_rate: i64,
    #[serde(rename = "diskIopsReadRateMax")]
    pub disk_iops_read_rate_max: i64,
    #[serde(rename = "diskIopsReadRateMaxLength")]
    pub disk_iops_read_rate_max_length: i64,
    #[serde(rename = "diskIopsWriteRate")]
    pub disk_iops_write_rate: i64,
    #[serde(rename = "diskIopsWriteRateMax")]
    pub disk_iops_write_rate_max: i64,
    #[serde(rename = "diskIopsWriteRateMaxLength")]
    pub disk_iops_write_rate_max_length: i64,
    pub disksize: i64,
    pub displayoffering: bool,
    pub displaytext: String,
    pub domain: String,
    pub domainid: String,
    pub hypervisorsnapshotreserve: i64,
    pub id: String,
    pub iscustomized: bool,
    pub iscustomizediops: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub maxiops: i64,
    pub miniops: i64,
    pub name: String,
    pub provisioningtype: String,
    pub storagetype: String,
    pub tags: String,
}

list_response!(ListDiskOfferingsResponse, "diskoffering", diskofferings: DiskOffering);

resource!(DiskOffering);
