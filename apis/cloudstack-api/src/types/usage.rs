// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Usage accounting types

use serde::{Deserialize, Serialize};

use super::common::Tag;

/// One aggregated usage record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageRecord {
    pub account: String,
    pub accountid: String,
    pub cpunumber: i64,
    pub cpuspeed: i64,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    pub enddate: String,
    pub isdefault: bool,
    pub issourcenat: bool,
    pub issystem: bool,
    pub memory: i64,
    pub name: String,
    pub networkid: String,
    pub offeringid: String,
    pub project: String,
    pub projectid: String,
    pub rawusage: String,
    pub size: i64,
    pub startdate: String,
    pub tags: Vec<Tag>,
    pub templateid: String,
    pub r#type: String,
    pub usage: String,
    pub usageid: String,
    pub usagetype: i64,
    pub virtualmachineid: String,
    pub virtualsize: i64,
    pub zoneid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageType {
    pub description: String,
    pub usagetypeid: i64,
}

list_response!(ListUsageRecordsResponse, "usagerecord", usagerecords: UsageRecord);
list_response!(ListUsageTypesResponse, "usagetype", usagetypes: UsageType);
