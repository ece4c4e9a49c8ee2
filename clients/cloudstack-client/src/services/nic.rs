// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{ListNicsResponse, NicSecondaryIp, SuccessResponse, VirtualMachine};

use crate::command::command;

command! {
    /// Assign a secondary IP to a NIC
    AddIpToNic("addIpToNic", Async, Entity) -> NicSecondaryIp {
        required { nicid: String }
        optional {
            /// Picked from the network's range when not given
            ipaddress: String,
        }
    }

    ListNics("listNics", Sync, Flat) -> ListNicsResponse {
        required { virtualmachineid: String }
        optional {
            fordisplay: bool,
            keyword: String,
            networkid: String,
            nicid: String,
            page: i64,
            pagesize: i64,
        }
    }

    RemoveIpFromNic("removeIpFromNic", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    UpdateVmNicIp("updateVmNicIp", Async, Entity) -> VirtualMachine {
        required { nicid: String }
        optional { ipaddress: String }
    }
}
