// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{ListRoutersResponse, Router};

use crate::command::command;

command! {
    ListRouters("listRouters", Sync, Flat) -> ListRoutersResponse {
        required {}
        optional {
            account: String,
            clusterid: String,
            domainid: String,
            forvpc: bool,
            hostid: String,
            id: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            networkid: String,
            page: i64,
            pagesize: i64,
            podid: String,
            projectid: String,
            state: String,
            version: String,
            vpcid: String,
            zoneid: String,
        }
    }

    StartRouter("startRouter", Async, Entity) -> Router {
        required { id: String }
        optional {}
    }

    StopRouter("stopRouter", Async, Entity) -> Router {
        required { id: String }
        optional { forced: bool }
    }

    RebootRouter("rebootRouter", Async, Entity) -> Router {
        required { id: String }
        optional {}
    }

    DestroyRouter("destroyRouter", Async, Entity) -> Router {
        required { id: String }
        optional {}
    }


    /// Change the offering of a stopped router
    ChangeServiceForRouter("changeServiceForRouter", Sync, Entity) -> Router {
        required { id: String, serviceofferingid: String }
        optional {}
    }
}
