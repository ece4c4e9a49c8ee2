// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    ListNetworksResponse, ListPhysicalNetworksResponse, Network, PhysicalNetwork, SuccessResponse,
};

use crate::command::command;
use crate::params::KeyValues;

command! {
    CreateNetwork("createNetwork", Sync, Entity) -> Network {
        required {
            displaytext: String,
            name: String,
            networkofferingid: String,
            zoneid: String,
        }
        optional {
            account: String,
            aclid: String,
            /// `account` or `domain`
            acltype: String,
            bypassvlanoverlapcheck: bool,
            displaynetwork: bool,
            domainid: String,
            endip: String,
            endipv6: String,
            externalid: String,
            gateway: String,
            ip6cidr: String,
            ip6gateway: String,
            isolatedpvlan: String,
            netmask: String,
            networkdomain: String,
            physicalnetworkid: String,
            projectid: String,
            startip: String,
            startipv6: String,
            subdomainaccess: bool,
            vlan: String,
            vpcid: String,
        }
    }

    DeleteNetwork("deleteNetwork", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional { forced: bool }
    }

    /// List networks
    ///
    /// There is no `name` filter; lookups by name go through `keyword`.
    ListNetworks("listNetworks", Sync, Flat) -> ListNetworksResponse {
        required {}
        optional {
            account: String,
            acltype: String,
            canusefordeploy: bool,
            displaynetwork: bool,
            domainid: String,
            forvpc: bool,
            id: String,
            isrecursive: bool,
            issystem: bool,
            keyword: String,
            listall: bool,
            page: i64,
            pagesize: i64,
            physicalnetworkid: String,
            projectid: String,
            restartrequired: bool,
            specifyipranges: bool,
            supportedservices: Vec<String>,
            tags: KeyValues,
            traffictype: String,
            /// `Isolated`, `Shared` or `L2`
            kind = "type": String,
            vpcid: String,
            zoneid: String,
        }
    }

    RestartNetwork("restartNetwork", Async, Entity) -> Network {
        required { id: String }
        optional {
            /// Tear down and recreate the network's routers
            cleanup: bool,
            makeredundant: bool,
        }
    }

    UpdateNetwork("updateNetwork", Async, Entity) -> Network {
        required { id: String }
        optional {
            changecidr: bool,
            customid: String,
            displaynetwork: bool,
            displaytext: String,
            forced: bool,
            guestvmcidr: String,
            name: String,
            networkdomain: String,
            networkofferingid: String,
            updateinsequence: bool,
        }
    }

    ListPhysicalNetworks("listPhysicalNetworks", Sync, Flat) -> ListPhysicalNetworksResponse {
        required {}
        optional {
            id: String,
            keyword: String,
            name: String,
            page: i64,
            pagesize: i64,
            zoneid: String,
        }
    }

    CreatePhysicalNetwork("createPhysicalNetwork", Async, Entity) -> PhysicalNetwork {
        required { name: String, zoneid: String }
        optional {
            broadcastdomainrange: String,
            domainid: String,
            /// e.g. `VLAN`, `VXLAN` or `GRE`
            isolationmethods: Vec<String>,
            networkspeed: String,
            tags: Vec<String>,
            vlan: String,
        }
    }

    UpdatePhysicalNetwork("updatePhysicalNetwork", Async, Entity) -> PhysicalNetwork {
        required { id: String }
        optional {
            networkspeed: String,
            state: String,
            tags: Vec<String>,
            vlan: String,
        }
    }

    DeletePhysicalNetwork("deletePhysicalNetwork", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_list_networks_has_no_name_filter() {
        let mut cmd = ListNetworks::new();
        assert!(!cmd.set_param("name", "web"));
        assert!(cmd.set_param("keyword", "web"));
        assert_eq!(cmd.to_params().get("keyword"), Some("web"));
    }

    #[test]
    fn test_typed_field_wins_over_raw_param() {
        let mut cmd = RestartNetwork::new("net-1").cleanup(true);
        assert!(cmd.set_param("cleanup", "false"));
        assert_eq!(cmd.to_params().get("cleanup"), Some("true"));
    }

    #[test]
    fn test_create_physical_network() {
        let params = CreatePhysicalNetwork::new("physnet-guest", "zone-1")
            .isolationmethods(vec!["VLAN".to_string()])
            .vlan("100-200")
            .to_params();
        assert_eq!(params.get("isolationmethods"), Some("VLAN"));
        assert_eq!(params.get("vlan"), Some("100-200"));
        assert_eq!(params.len(), 4);
    }
}
