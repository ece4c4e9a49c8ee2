// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{Extract, ListVolumesResponse, SuccessResponse, Volume};

use crate::command::command;
use crate::params::KeyValues;

command! {
    /// Create a data volume from a disk offering or a snapshot
    CreateVolume("createVolume", Async, Entity) -> Volume {
        required {}
        optional {
            account: String,
            customid: String,
            diskofferingid: String,
            displayvolume: bool,
            domainid: String,
            maxiops: i64,
            miniops: i64,
            name: String,
            projectid: String,
            /// Size in GB, for custom disk offerings
            size: i64,
            snapshotid: String,
            /// Attach to this VM once created
            virtualmachineid: String,
            zoneid: String,
        }
    }

    DeleteVolume("deleteVolume", Sync, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListVolumes("listVolumes", Sync, Flat) -> ListVolumesResponse {
        required {}
        optional {
            account: String,
            clusterid: String,
            diskofferingid: String,
            displayvolume: bool,
            domainid: String,
            hostid: String,
            id: String,
            ids: Vec<String>,
            isrecursive: bool,
            keyword: String,
            listall: bool,
            name: String,
            page: i64,
            pagesize: i64,
            podid: String,
            projectid: String,
            storageid: String,
            tags: KeyValues,
            /// `ROOT` or `DATADISK`
            kind = "type": String,
            virtualmachineid: String,
            zoneid: String,
        }
    }

    AttachVolume("attachVolume", Async, Entity) -> Volume {
        required { id: String, virtualmachineid: String }
        optional { deviceid: i64 }
    }

    /// Detach a volume, by id or by VM and device id
    DetachVolume("detachVolume", Async, Entity) -> Volume {
        required {}
        optional {
            deviceid: i64,
            id: String,
            virtualmachineid: String,
        }
    }

    ResizeVolume("resizeVolume", Async, Entity) -> Volume {
        required { id: String }
        optional {
            diskofferingid: String,
            maxiops: i64,
            miniops: i64,
            /// Allow the volume to shrink
            shrinkok: bool,
            size: i64,
        }
    }


    UpdateVolume("updateVolume", Async, Entity) -> Volume {
        required {}
        optional {
            chaininfo: String,
            customid: String,
            displayvolume: bool,
            id: String,
            path: String,
            state: String,
            storageid: String,
        }
    }

    /// Move a volume to another primary storage
    MigrateVolume("migrateVolume", Async, Entity) -> Volume {
        required { storageid: String, volumeid: String }
        optional {
            livemigrate: bool,
            newdiskofferingid: String,
        }
    }

    ExtractVolume("extractVolume", Async, Entity) -> Extract {
        required {
            id: String,
            /// `HTTP_DOWNLOAD` or `FTP_UPLOAD`
            mode: String,
            zoneid: String,
        }
        optional { url: String }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;

    #[test]
    fn test_migrate_volume() {
        let params = MigrateVolume::new("pool-2", "vol-1").livemigrate(true).to_params();
        assert_eq!(params.get("storageid"), Some("pool-2"));
        assert_eq!(params.get("volumeid"), Some("vol-1"));
        assert_eq!(params.get("livemigrate"), Some("true"));
    }

    #[test]
    fn test_update_volume_has_no_required_fields() {
        let mut cmd = UpdateVolume::new();
        assert!(cmd.to_params().is_empty());
        assert!(cmd.set_param("displayvolume", "false"));
        assert_eq!(ExtractVolume::new("vol-1", "HTTP_DOWNLOAD", "zone-1").to_params().len(), 3);
    }
}
