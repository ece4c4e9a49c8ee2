// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Role based access control types

use serde::{Deserialize, Serialize};

/// Role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub description: String,
    pub id: String,
    pub name: String,
    /// One of `Admin`, `ResourceAdmin`, `DomainAdmin`, `User`
    pub r#type: String,
}

/// A rule allowing or denying API commands to a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RolePermission {
    pub description: String,
    pub id: String,
    /// `allow` or `deny`
    pub permission: String,
    pub roleid: String,
    pub rolename: String,
    /// API command name, wildcards allowed
    pub rule: String,
}

list_response!(ListRolesResponse, "role", roles: Role);
list_response!(
    ListRolePermissionsResponse,
    "rolepermission",
    rolepermissions: RolePermission
);

resource!(Role);
