// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Affinity group types

use serde::{Deserialize, Serialize};

/// Affinity group
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityGroup {
    pub account: String,
    pub description: String,
    pub domain: String,
    pub domainid: String,
    pub id: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub name: String,
    pub project: String,
    pub projectid: String,
    pub r#type: String,
    #[serde(rename = "virtualmachineIds")]
    pub virtualmachine_ids: Vec<String>,
}

/// A host affinity policy, e.g. `host anti-affinity`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AffinityGroupType {
    pub r#type: String,
}

list_response!(ListAffinityGroupsResponse, "affinitygroup", affinitygroups: AffinityGroup);
list_response!(
    ListAffinityGroupTypesResponse,
    "affinitygrouptype",
    affinitygrouptypes: AffinityGroupType
);

resource!(AffinityGroup);
