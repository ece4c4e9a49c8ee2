// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{
    ListRolePermissionsResponse, ListRolesResponse, Role, RolePermission, SuccessResponse,
};

use crate::command::command;

command! {
    CreateRole("createRole", Sync, Entity) -> Role {
        required {
            name: String,
            /// `Admin`, `ResourceAdmin`, `DomainAdmin` or `User`
            kind = "type": String,
        }
        optional { description: String }
    }

    UpdateRole("updateRole", Sync, Entity) -> Role {
        required { id: String }
        optional {
            description: String,
            name: String,
            kind = "type": String,
        }
    }

    DeleteRole("deleteRole", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListRoles("listRoles", Sync, Flat) -> ListRolesResponse {
        required {}
        optional {
            id: String,
            name: String,
            kind = "type": String,
        }
    }

    CreateRolePermission("createRolePermission", Sync, Entity) -> RolePermission {
        required {
            /// `allow` or `deny`
            permission: String,
            roleid: String,
            /// API name or wildcard, e.g. `list*`
            rule: String,
        }
        optional { description: String }
    }

    ListRolePermissions("listRolePermissions", Sync, Flat) -> ListRolePermissionsResponse {
        required {}
        optional { roleid: String }
    }

    DeleteRolePermission("deleteRolePermission", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }


    /// Change a rule's permission, or reorder all rules of a role
    UpdateRolePermission("updateRolePermission", Sync, Flat) -> SuccessResponse {
        required { roleid: String }
        optional {
            permission: String,
            ruleid: String,
            /// Every rule id of the role, in the new order
            ruleorder: Vec<String>,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_reorder_role_permissions() {
        let params = UpdateRolePermission::new("role-1")
            .ruleorder(vec!["rule-3".to_string(), "rule-1".to_string()])
            .to_params();
        assert_eq!(params.get("ruleorder"), Some("rule-3,rule-1"));
        assert!(!params.contains("permission"));
    }
}
