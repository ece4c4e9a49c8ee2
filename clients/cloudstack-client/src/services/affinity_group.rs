// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    AffinityGroup, ListAffinityGroupTypesResponse, ListAffinityGroupsResponse, SuccessResponse,
    VirtualMachine,
};

use crate::command::command;

command! {
    CreateAffinityGroup("createAffinityGroup", Async, Entity) -> AffinityGroup {
        required {
            name: String,
            /// Affinity group type, e.g. `host anti-affinity`
            kind = "type": String,
        }
        optional {
            account: String,
            description: String,
            domainid: String,
            projectid: String,
        }
    }

    /// Delete an affinity group by id or by name
    DeleteAffinityGroup("deleteAffinityGroup", Async, Flat) -> SuccessResponse {
        required {}
        optional {
            account: String,
            domainid: String,
            id: String,
            name: String,
            projectid: String,
        }
    }

    ListAffinityGroupTypes("listAffinityGroupTypes", Sync, Flat) -> ListAffinityGroupTypesResponse {
        required {}
        optional { keyword: String, page: i64, pagesize: i64 }
    }

    ListAffinityGroups("listAffinityGroups", Sync, Flat) -> ListAffinityGroupsResponse {
        required {}
        optional {
            account: String,
            domainid: String,
            id: String,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            page: i64,
            pagesize: i64,
            projectid: String,
            kind = "type": String,
            virtualmachineid: String,
        }
    }

    /// Replace the affinity groups of a stopped VM
    UpdateVmAffinityGroup("updateVMAffinityGroup", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional {
            affinitygroupids: Vec<String>,
            affinitygroupnames: Vec<String>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_type_field_wire_name() {
        let params = CreateAffinityGroup::new("web", "host anti-affinity").to_params();
        assert_eq!(params.get("type"), Some("host anti-affinity"));
        assert!(!params.contains("kind"));
        assert!(ListAffinityGroups::accepts("type"));
    }

    #[test]
    fn test_update_vm_group_names() {
        let cmd = UpdateVmAffinityGroup::new("vm-1")
            .affinitygroupnames(vec!["a".to_string(), "b".to_string()]);
        let params = cmd.to_params();
        assert_eq!(params.get("affinitygroupnames"), Some("a,b"));
        assert_eq!(UpdateVmAffinityGroup::NAME, "updateVMAffinityGroup");
    }
}
