// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{DiskOffering, ListDiskOfferingsResponse, SuccessResponse};

use crate::command::command;

command! {
    CreateDiskOffering("createDiskOffering", Sync, Entity) -> DiskOffering {
        required { displaytext: String, name: String }
        optional {
            bytesreadrate: i64,
            bytesreadratemax: i64,
            bytesreadratemaxlength: i64,
            byteswriterate: i64,
            byteswriteratemax: i64,
            byteswriteratemaxlength: i64,
            /// Let the size be chosen when the volume is created
            customized: bool,
            customizediops: bool,
            /// Size in GB
            disksize: i64,
            displayoffering: bool,
            domainid: String,
            hypervisorsnapshotreserve: i64,
            iopsreadrate: i64,
            iopsreadratemax: i64,
            iopsreadratemaxlength: i64,
            iopswriterate: i64,
            iopswriteratemax: i64,
            iopswriteratemaxlength: i64,
            maxiops: i64,
            miniops: i64,
            /// `thin`, `sparse` or `fat`
            provisioningtype: String,
            /// `shared` or `local`
            storagetype: String,
            tags: String,
        }
    }

    DeleteDiskOffering("deleteDiskOffering", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListDiskOfferings("listDiskOfferings", Sync, Flat) -> ListDiskOfferingsResponse {
        required {}
        optional {
            domainid: String,
            id: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            page: i64,
            pagesize: i64,
        }
    }

    UpdateDiskOffering("updateDiskOffering", Sync, Entity) -> DiskOffering {
        required { id: String }
        optional {
            displayoffering: bool,
            displaytext: String,
            name: String,
            sortkey: i64,
        }
    }
}
