// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! ISO image types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::common::{Tag, lenient};

/// ISO image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Iso {
    pub account: String,
    pub accountid: String,
    pub bits: i64,
    pub bootable: bool,
    pub checksum: String,
    pub created: String,
    #[serde(rename = "crossZones")]
    pub cross_zones: bool,
    pub details: BTreeMap<String, String>,
    pub directdownload: bool,
    pub displaytext: String,
    pub domain: String,
    pub domainid: String,
    pub format: String,
    pub hostid: String,
    pub hostname: String,
    pub hypervisor: String,
    pub id: String,
    pub isdynamicallyscalable: bool,
    pub isextractable: bool,
    pub isfeatured: bool,
    pub ispublic: bool,
    pub isready: bool,
    pub jobid: String,
    pub jobstatus: i64,
    pub name: String,
    #[serde(deserialize_with = "lenient::string_or_number")]
    pub ostypeid: String,
    pub ostypename: String,
    pub parenttemplateid: String,
    pub passwordenabled: bool,
    pub physicalsize: i64,
    pub project: String,
    pub projectid: String,
    pub removed: String,
    pub requireshvm: bool,
    pub size: i64,
    pub sourcetemplateid: String,
    pub sshkeyenabled: bool,
    pub status: String,
    pub tags: Vec<Tag>,
    pub templatetag: String,
    pub templatetype: String,
    pub zoneid: String,
    pub zonename: String,
}

/// Who may use an ISO besides its owner
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsoPermission {
    pub account: Vec<String>,
    pub domainid: String,
    pub id: String,
    pub ispublic: bool,
    pub projectids: Vec<String>,
}

list_response!(ListIsosResponse, "iso", isos: Iso);
list_response!(
    ListIsoPermissionsResponse,
    "isopermission",
    isopermissions: IsoPermission
);

resource!(Iso);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ostypeid() {
        let iso: Iso =
            serde_json::from_str(r#"{"id":"i-1","name":"debian","ostypeid":142,"crossZones":true}"#)
                .unwrap();
        assert_eq!(iso.ostypeid, "142");
        assert!(iso.cross_zones);
    }
}
