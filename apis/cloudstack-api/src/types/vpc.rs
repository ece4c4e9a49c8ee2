// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! VPC types (VPCs, offerings, static routes, private gateways)

use serde::{Deserialize, Serialize};

use super::common::{NetworkService, Tag};
use super::network::Network;

/// Virtual private cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vpc {
    pub account: String,
    pub cidr: String,
    pub created: String,
    pub displaytext: String,
    pub distributedvpcrouter: bool,
    pub domain: String,
    pub domainid: String,
    pub fordisplay: bool,
    pub id: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub name: String,
    pub network: Vec<Network>,
    pub networkdomain: String,
    pub project: String,
    pub projectid: String,
    pub redundantvpcrouter: bool,
    pub regionlevelvpc: bool,
    pub restartrequired: bool,
    pub service: Vec<NetworkService>,
    pub state: String,
    pub tags: Vec<Tag>,
    pub vpcofferingid: String,
    pub zoneid: String,
    pub zonename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VpcOffering {
    pub created: String,
    pub displaytext: String,
    pub distributedvpcrouter: bool,
    pub id: String,
    pub isdefault: bool,
    pub name: String,
    pub service: Vec<NetworkService>,
    pub state: String,
    #[serde(rename = "supportsregionLevelvpc")]
    pub supports_region_level_vpc: bool,
}

/// Route from a VPC private gateway to a CIDR
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticRoute {
    pub account: String,
    pub cidr: String,
    pub domain: String,
    pub domainid: String,
    pub gatewayid: String,
    pub id: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub project: String,
    pub projectid: String,
    pub state: String,
    pub tags: Vec<Tag>,
    pub vpcid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivateGateway {
    pub account: String,
    pub aclid: String,
    pub domain: String,
    pub domainid: String,
    pub gateway: String,
    pub id: String,
    pub ipaddress: String,
    pub jobid: String,
    pub jobstatus: i64,
    pub netmask: String,
    pub physicalnetworkid: String,
    pub project: String,
    pub projectid: String,
    pub sourcenatsupported: bool,
    pub state: String,
    pub vlan: String,
    pub vpcid: String,
    pub zoneid: String,
    pub zonename: String,
}

list_response!(ListVpcsResponse, "vpc", vpcs: Vpc);
list_response!(ListVpcOfferingsResponse, "vpcoffering", vpcofferings: VpcOffering);
list_response!(ListStaticRoutesResponse, "staticroute", staticroutes: StaticRoute);
list_response!(
    ListPrivateGatewaysResponse,
    "privategateway",
    privategateways: PrivateGateway
);

resource!(Vpc, VpcOffering);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ListResponse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_list_vpcs_decodes_items_and_count() {
        let body = r#"{
            "count": 2,
            "vpc": [
                {"id": "v-1", "name": "prod", "cidr": "10.0.0.0/16",
                 "tags": [{"key": "env", "value": "prod"}]},
                {"id": "v-2", "name": "staging", "restartrequired": true}
            ]
        }"#;
        let list: ListVpcsResponse = serde_json::from_str(body).unwrap();
        assert_eq!(ListResponse::count(&list), 2);
        assert_eq!(list.items().len(), 2);
        assert_eq!(list.vpcs[0].tags[0].value, "prod");
        assert!(list.vpcs[1].restartrequired);
    }

    #[test]
    fn test_empty_list_response() {
        // The server drops both keys when nothing matches
        let list: ListVpcsResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(ListResponse::count(&list), 0);
        assert!(list.into_items().is_empty());
    }
}
