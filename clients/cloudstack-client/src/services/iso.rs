// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    Extract, Iso, ListIsoPermissionsResponse, ListIsosResponse, SuccessResponse, VirtualMachine,
};

use crate::command::command;
use crate::params::{Details, KeyValues};

command! {
    AttachIso("attachIso", Async, Entity) -> VirtualMachine {
        required { id: String, virtualmachineid: String }
        optional {}
    }

    DetachIso("detachIso", Async, Entity) -> VirtualMachine {
        required { virtualmachineid: String }
        optional {}
    }

    DeleteIso("deleteIso", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {
            /// Delete only the copy in this zone
            zoneid: String,
        }
    }

    ListIsos("listIsos", Sync, Flat) -> ListIsosResponse {
        required {}
        optional {
            account: String,
            bootable: bool,
            domainid: String,
            hypervisor: String,
            id: String,
            /// `featured`, `self`, `selfexecutable`, `sharedexecutable`,
            /// `executable` or `community`
            isofilter: String,
            ispublic: bool,
            isready: bool,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            page: i64,
            pagesize: i64,
            projectid: String,
            showremoved: bool,
            tags: KeyValues,
            zoneid: String,
        }
    }

    /// Register an ISO from a URL; the server answers with an ISO list
    RegisterIso("registerIso", Sync, Flat) -> ListIsosResponse {
        required {
            displaytext: String,
            name: String,
            url: String,
            /// `-1` registers the ISO in every zone
            zoneid: String,
        }
        optional {
            account: String,
            bootable: bool,
            checksum: String,
            directdownload: bool,
            domainid: String,
            imagestoreuuid: String,
            isdynamicallyscalable: bool,
            isextractable: bool,
            isfeatured: bool,
            ispublic: bool,
            ostypeid: String,
            passwordenabled: bool,
            projectid: String,
        }
    }

    UpdateIso("updateIso", Sync, Entity) -> Iso {
        required { id: String }
        optional {
            bootable: bool,
            cleanupdetails: bool,
            details: Details,
            displaytext: String,
            format: String,
            isdynamicallyscalable: bool,
            isrouting: bool,
            name: String,
            ostypeid: String,
            passwordenabled: bool,
            requireshvm: bool,
            sortkey: i64,
            sshkeyenabled: bool,
        }
    }

    CopyIso("copyIso", Async, Entity) -> Iso {
        required { id: String }
        optional {
            destzoneid: String,
            destzoneids: Vec<String>,
            sourcezoneid: String,
        }
    }

    ExtractIso("extractIso", Async, Entity) -> Extract {
        required { id: String, mode: String }
        optional { url: String, zoneid: String }
    }

    ListIsoPermissions("listIsoPermissions", Sync, Flat) -> ListIsoPermissionsResponse {
        required { id: String }
        optional {}
    }

    UpdateIsoPermissions("updateIsoPermissions", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {
            accounts: Vec<String>,
            isextractable: bool,
            isfeatured: bool,
            ispublic: bool,
            /// `add`, `remove` or `reset`
            op: String,
            projectids: Vec<String>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_list_isos_tags() {
        let tags: KeyValues = [("os", "debian")].into_iter().collect();
        let params = ListIsos::new().isofilter("featured").tags(tags).to_params();
        assert_eq!(params.get("isofilter"), Some("featured"));
        assert_eq!(params.get("tags[0].key"), Some("os"));
        assert_eq!(params.get("tags[0].value"), Some("debian"));
    }

    #[test]
    fn test_update_iso_details() {
        let details: Details = [("rootDiskController", "scsi")].into_iter().collect();
        let params = UpdateIso::new("iso-1").details(details).to_params();
        assert_eq!(params.get("details[0].rootDiskController"), Some("scsi"));
    }

    #[test]
    fn test_copy_iso_to_several_zones() {
        let params = CopyIso::new("iso-1")
            .sourcezoneid("zone-1")
            .destzoneids(vec!["zone-2".to_string(), "zone-3".to_string()])
            .to_params();
        assert_eq!(params.get("destzoneids"), Some("zone-2,zone-3"));
        assert_eq!(params.get("sourcezoneid"), Some("zone-1"));
    }

    #[test]
    fn test_update_iso_permissions() {
        let params = UpdateIsoPermissions::new("iso-1")
            .op("add")
            .accounts(vec!["ops".to_string()])
            .ispublic(false)
            .to_params();
        assert_eq!(params.get("op"), Some("add"));
        assert_eq!(params.get("accounts"), Some("ops"));
        assert_eq!(params.get("ispublic"), Some("false"));
        assert_eq!(ExtractIso::MODE, crate::command::Mode::Async);
    }
}
