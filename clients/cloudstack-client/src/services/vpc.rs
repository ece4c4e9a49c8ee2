// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    ListPrivateGatewaysResponse, ListStaticRoutesResponse, ListVpcOfferingsResponse,
    ListVpcsResponse, PrivateGateway, StaticRoute, SuccessResponse, Vpc, VpcOffering,
};

use crate::command::command;
use crate::params::{KeyValues, ServiceProviders};

command! {
    CreateVpc("createVPC", Async, Entity) -> Vpc {
        required {
            /// Super CIDR of every guest network in the VPC
            cidr: String,
            displaytext: String,
            name: String,
            vpcofferingid: String,
            zoneid: String,
        }
        optional {
            account: String,
            domainid: String,
            fordisplay: bool,
            networkdomain: String,
            projectid: String,
            /// Start the VPC router right away
            start: bool,
        }
    }

    DeleteVpc("deleteVPC", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListVpcs("listVPCs", Sync, Flat) -> ListVpcsResponse {
        required {}
        optional {
            account: String,
            cidr: String,
            displaytext: String,
            domainid: String,
            fordisplay: bool,
            id: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            page: i64,
            pagesize: i64,
            projectid: String,
            restartrequired: bool,
            state: String,
            supportedservices: Vec<String>,
            tags: KeyValues,
            vpcofferingid: String,
            zoneid: String,
        }
    }

    RestartVpc("restartVPC", Async, Entity) -> Vpc {
        required { id: String }
        optional { cleanup: bool, makeredundant: bool }
    }

    UpdateVpc("updateVPC", Async, Entity) -> Vpc {
        required { id: String }
        optional {
            customid: String,
            displaytext: String,
            fordisplay: bool,
            name: String,
        }
    }

    ListVpcOfferings("listVPCOfferings", Sync, Flat) -> ListVpcOfferingsResponse {
        required {}
        optional {
            displaytext: String,
            id: String,
            isdefault: bool,
            keyword: String,
            name: String,
            page: i64,
            pagesize: i64,
            state: String,
            supportedservices: Vec<String>,
        }
    }

    CreateStaticRoute("createStaticRoute", Async, Entity) -> StaticRoute {
        required { cidr: String, gatewayid: String }
        optional {}
    }

    ListStaticRoutes("listStaticRoutes", Sync, Flat) -> ListStaticRoutesResponse {
        required {}
        optional {
            account: String,
            domainid: String,
            gatewayid: String,
            id: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            page: i64,
            pagesize: i64,
            projectid: String,
            tags: KeyValues,
            vpcid: String,
        }
    }

    DeleteStaticRoute("deleteStaticRoute", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    CreatePrivateGateway("createPrivateGateway", Async, Entity) -> PrivateGateway {
        required {
            gateway: String,
            ipaddress: String,
            netmask: String,
            vlan: String,
            vpcid: String,
        }
        optional {
            aclid: String,
            networkofferingid: String,
            physicalnetworkid: String,
            sourcenatsupported: bool,
        }
    }

    ListPrivateGateways("listPrivateGateways", Sync, Flat) -> ListPrivateGatewaysResponse {
        required {}
        optional {
            account: String,
            domainid: String,
            id: String,
            ipaddress: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            page: i64,
            pagesize: i64,
            projectid: String,
            state: String,
            vlan: String,
            vpcid: String,
        }
    }

    CreateVpcOffering("createVPCOffering", Async, Entity) -> VpcOffering {
        required {
            displaytext: String,
            name: String,
            supportedservices: Vec<String>,
        }
        optional {
            servicecapabilitylist: KeyValues,
            serviceofferingid: String,
            serviceproviderlist: ServiceProviders,
        }
    }

    UpdateVpcOffering("updateVPCOffering", Async, Entity) -> VpcOffering {
        required { id: String }
        optional {
            displaytext: String,
            name: String,
            /// `Enabled` or `Disabled`
            state: String,
        }
    }

    DeleteVpcOffering("deleteVPCOffering", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    DeletePrivateGateway("deletePrivateGateway", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }
}
