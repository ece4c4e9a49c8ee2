// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    DedicatedHost, Host, ListHostTagsResponse, ListHostsForMigrationResponse, ListHostsResponse,
    SuccessResponse,
};

use crate::command::command;

command! {
    /// Add a hypervisor host to a pod
    ///
    /// The server answers with a host list, usually of one entry.
    AddHost("addHost", Sync, Flat) -> ListHostsResponse {
        required {
            hypervisor: String,
            password: String,
            podid: String,
            url: String,
            username: String,
            zoneid: String,
        }
        optional {
            allocationstate: String,
            clusterid: String,
            clustername: String,
            hosttags: Vec<String>,
        }
    }

    DeleteHost("deleteHost", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {
            forced: bool,
            forcedestroylocalstorage: bool,
        }
    }

    ListHosts("listHosts", Sync, Flat) -> ListHostsResponse {
        required {}
        optional {
            clusterid: String,
            /// Detail groups to return: `all`, `capacity`, `events`, `stats`, `min`
            details: Vec<String>,
            hahost: bool,
            hypervisor: String,
            id: String,
            keyword: String,
            name: String,
            outofbandmanagementenabled: bool,
            outofbandmanagementpowerstate: String,
            page: i64,
            pagesize: i64,
            podid: String,
            resourcestate: String,
            state: String,
            kind = "type": String,
            virtualmachineid: String,
            zoneid: String,
        }
    }

    UpdateHost("updateHost", Sync, Entity) -> Host {
        required { id: String }
        optional {
            allocationstate: String,
            annotation: String,
            hosttags: Vec<String>,
            oscategoryid: String,
            url: String,
        }
    }

    PrepareHostForMaintenance("prepareHostForMaintenance", Async, Entity) -> Host {
        required { id: String }
        optional {}
    }

    CancelHostMaintenance("cancelHostMaintenance", Async, Entity) -> Host {
        required { id: String }
        optional {}
    }

    ReconnectHost("reconnectHost", Async, Entity) -> Host {
        required { id: String }
        optional {}
    }

    ListHostTags("listHostTags", Sync, Flat) -> ListHostTagsResponse {
        required {}
        optional { keyword: String, page: i64, pagesize: i64 }
    }

    DedicateHost("dedicateHost", Async, Entity) -> DedicatedHost {
        required { domainid: String, hostid: String }
        optional { account: String }
    }

    ReleaseDedicatedHost("releaseDedicatedHost", Async, Flat) -> SuccessResponse {
        required { hostid: String }
        optional {}
    }

    /// Hosts a VM can be live migrated to
    FindHostsForMigration("findHostsForMigration", Sync, Flat) -> ListHostsForMigrationResponse {
        required { virtualmachineid: String }
        optional {
            keyword: String,
            page: i64,
            pagesize: i64,
        }
    }
}
