// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Host (hypervisor) types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Hypervisor host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Host {
    pub annotation: String,
    pub averageload: i64,
    pub capabilities: String,
    pub clusterid: String,
    pub clustername: String,
    pub clustertype: String,
    pub cpuallocated: String,
    pub cpunumber: i64,
    pub cpusockets: i64,
    pub cpuspeed: i64,
    pub cpuused: String,
    pub cpuwithoverprovisioning: String,
    pub created: String,
    pub details: BTreeMap<String, String>,
    pub disconnected: String,
    pub disksizeallocated: i64,
    pub disksizetotal: i64,
    pub events: String,
    pub hahost: bool,
    pub hasenoughcapacity: bool,
    pub hostha: String,
    pub hosttags: String,
    pub hypervisor: String,
    pub hypervisorversion: String,
    pub id: String,
    pub ipaddress: String,
    pub islocalstorageactive: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub lastannotated: String,
    pub lastpinged: String,
    pub managementserverid: i64,
    pub memoryallocated: i64,
    pub memorytotal: i64,
    pub memoryused: i64,
    pub memorywithoverprovisioning: String,
    pub name: String,
    pub networkkbsread: i64,
    pub networkkbswrite: i64,
    pub oscategoryid: String,
    pub oscategoryname: String,
    pub podid: String,
    pub podname: String,
    pub removed: String,
    pub resourcestate: String,
    pub state: String,
    pub suitableformigration: bool,
    pub r#type: String,
    pub username: String,
    pub version: String,
    pub zoneid: String,
    pub zonename: String,
}

/// A tag attached to a host, used to pin offerings to hosts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostTag {
    pub hostid: i64,
    pub id: String,
    pub name: String,
}

/// Migration target as returned by `findHostsForMigration`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostForMigration {
    #[serde(flatten)]
    pub host: Host,
    #[serde(rename = "requiresStorageMotion")]
    pub requires_storage_motion: bool,
}

/// A host reserved for a domain or account
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DedicatedHost {
    pub accountid: String,
    pub affinitygroupid: String,
    pub domainid: String,
    pub hostid: String,
    pub hostname: String,
    pub id: String,
}

list_response!(ListHostsResponse, "host", hosts: Host);
list_response!(
    ListHostsForMigrationResponse,
    "host",
    hosts: HostForMigration
);
list_response!(ListHostTagsResponse, "hosttag", hosttags: HostTag);

resource!(Host);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListResponse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_hosts_for_migration_keep_host_fields() {
        let list: ListHostsForMigrationResponse = serde_json::from_str(
            r#"{"count": 1, "host": [{"id": "host-2", "name": "kvm02", "state": "Up",
                "suitableformigration": true, "requiresStorageMotion": true}]}"#,
        )
        .unwrap();
        let target = &list.items()[0];
        assert_eq!(target.host.name, "kvm02");
        assert!(target.host.suitableformigration);
        assert!(target.requires_storage_motion);
    }
}
