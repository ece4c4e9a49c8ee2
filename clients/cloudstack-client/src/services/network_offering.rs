// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{ListNetworkOfferingsResponse, NetworkOffering, SuccessResponse};

use crate::command::command;
use crate::params::{Details, KeyValues, ServiceProviders};

command! {
    CreateNetworkOffering("createNetworkOffering", Sync, Entity) -> NetworkOffering {
        required {
            displaytext: String,
            /// `Shared`, `Isolated` or `L2`
            guestiptype: String,
            name: String,
            supportedservices: Vec<String>,
            traffictype: String,
        }
        optional {
            availability: String,
            conservemode: bool,
            details: Details,
            egressdefaultpolicy: bool,
            forvpc: bool,
            ispersistent: bool,
            keepaliveenabled: bool,
            maxconnections: i64,
            /// Data rate in megabits per second
            networkrate: i64,
            servicecapabilitylist: KeyValues,
            serviceofferingid: String,
            serviceproviderlist: ServiceProviders,
            specifyipranges: bool,
            specifyvlan: bool,
            tags: String,
        }
    }

    DeleteNetworkOffering("deleteNetworkOffering", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListNetworkOfferings("listNetworkOfferings", Sync, Flat) -> ListNetworkOfferingsResponse {
        required {}
        optional {
            availability: String,
            displaytext: String,
            forvpc: bool,
            guestiptype: String,
            id: String,
            isdefault: bool,
            istagged: bool,
            keyword: String,
            name: String,
            networkid: String,
            page: i64,
            pagesize: i64,
            sourcenatsupported: bool,
            specifyipranges: bool,
            specifyvlan: bool,
            state: String,
            supportedservices: Vec<String>,
            tags: String,
            traffictype: String,
            zoneid: String,
        }
    }

    UpdateNetworkOffering("updateNetworkOffering", Sync, Entity) -> NetworkOffering {
        required {}
        optional {
            availability: String,
            displaytext: String,
            id: String,
            keepaliveenabled: bool,
            maxconnections: i64,
            name: String,
            sortkey: i64,
            /// `Enabled` or `Disabled`
            state: String,
            tags: String,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_offering_maps() {
        let providers: ServiceProviders = [("Dhcp", "VirtualRouter"), ("Dns", "VirtualRouter")]
            .into_iter()
            .collect();
        let params = CreateNetworkOffering::new(
            "Isolated with NAT",
            "Isolated",
            "iso-nat",
            vec!["Dhcp".to_string(), "Dns".to_string()],
            "Guest",
        )
        .serviceproviderlist(providers)
        .to_params();

        assert_eq!(params.get("supportedservices"), Some("Dhcp,Dns"));
        assert_eq!(params.get("serviceproviderlist[0].service"), Some("Dhcp"));
        assert_eq!(params.get("serviceproviderlist[1].service"), Some("Dns"));
        assert_eq!(
            params.get("serviceproviderlist[1].provider"),
            Some("VirtualRouter")
        );
    }
}
