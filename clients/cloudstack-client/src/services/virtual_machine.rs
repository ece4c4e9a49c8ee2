// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

use cloudstack_api::{ListVirtualMachinesResponse, SuccessResponse, VirtualMachine, VmPassword};

use crate::command::command;
use crate::params::{Details, KeyValues};

command! {
    /// Create and optionally start a VM
    ///
    /// Sent as a form POST so that large `userdata` fits.
    DeployVirtualMachine("deployVirtualMachine", Async, Entity) -> VirtualMachine {
        required {
            serviceofferingid: String,
            templateid: String,
            zoneid: String,
        }
        optional {
            account: String,
            affinitygroupids: Vec<String>,
            affinitygroupnames: Vec<String>,
            customid: String,
            /// Data disk offering per template data disk
            datadiskofferinglist: KeyValues,
            deploymentplanner: String,
            details: Details,
            dhcpoptionsnetworklist: KeyValues,
            diskofferingid: String,
            displayname: String,
            displayvm: bool,
            domainid: String,
            extraconfig: String,
            group: String,
            hostid: String,
            hypervisor: String,
            ip6address: String,
            ipaddress: String,
            iptonetworklist: KeyValues,
            keyboard: String,
            keypair: String,
            macaddress: String,
            name: String,
            networkids: Vec<String>,
            projectid: String,
            rootdisksize: i64,
            securitygroupids: Vec<String>,
            securitygroupnames: Vec<String>,
            size: i64,
            startvm: bool,
            /// Base64 encoded user data
            userdata: String,
        }
    }

    DestroyVirtualMachine("destroyVirtualMachine", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional {
            expunge: bool,
            volumeids: Vec<String>,
        }
    }

    ExpungeVirtualMachine("expungeVirtualMachine", Async, Flat) -> SuccessResponse {
        required { id: String }
        optional {}
    }

    ListVirtualMachines("listVirtualMachines", Sync, Flat) -> ListVirtualMachinesResponse {
        required {}
        optional {
            account: String,
            affinitygroupid: String,
            /// Detail groups to return, e.g. `all`, `nics`, `stats`, `min`
            details: Vec<String>,
            displayvm: bool,
            domainid: String,
            forvirtualnetwork: bool,
            groupid: String,
            hostid: String,
            hypervisor: String,
            id: String,
            ids: Vec<String>,
            isoid: String,
            isrecursive: bool,
            keypair: String,
            keyword: String,
            listall: bool,
            name: String,
            networkid: String,
            page: i64,
            pagesize: i64,
            podid: String,
            projectid: String,
            serviceofferingid: String,
            state: String,
            storageid: String,
            tags: KeyValues,
            templateid: String,
            userid: String,
            vpcid: String,
            zoneid: String,
        }
    }

    StartVirtualMachine("startVirtualMachine", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional {
            deploymentplanner: String,
            hostid: String,
        }
    }

    StopVirtualMachine("stopVirtualMachine", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional { forced: bool }
    }

    RebootVirtualMachine("rebootVirtualMachine", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional {}
    }

    RecoverVirtualMachine("recoverVirtualMachine", Sync, Entity) -> VirtualMachine {
        required { id: String }
        optional {}
    }

    /// Update a VM's properties; sent as a form POST like deployment
    UpdateVirtualMachine("updateVirtualMachine", Sync, Entity) -> VirtualMachine {
        required { id: String }
        optional {
            cleanupdetails: bool,
            customid: String,
            details: Details,
            dhcpoptionsnetworklist: KeyValues,
            displayname: String,
            displayvm: bool,
            extraconfig: String,
            group: String,
            haenable: bool,
            instancename: String,
            isdynamicallyscalable: bool,
            name: String,
            ostypeid: String,
            securitygroupids: Vec<String>,
            securitygroupnames: Vec<String>,
            userdata: String,
        }
    }

    AddNicToVirtualMachine("addNicToVirtualMachine", Async, Entity) -> VirtualMachine {
        required { networkid: String, virtualmachineid: String }
        optional {
            dhcpoptions: KeyValues,
            ipaddress: String,
            macaddress: String,
        }
    }

    /// Change the service offering of a stopped VM
    ChangeServiceForVirtualMachine("changeServiceForVirtualMachine", Sync, Entity) -> VirtualMachine {
        required { id: String, serviceofferingid: String }
        optional {
            /// Custom offering values such as `cpuNumber` and `memory`
            details: Details,
        }
    }

    RemoveNicFromVirtualMachine("removeNicFromVirtualMachine", Async, Entity) -> VirtualMachine {
        required { nicid: String, virtualmachineid: String }
        optional {}
    }

    UpdateDefaultNicForVirtualMachine("updateDefaultNicForVirtualMachine", Async, Entity) -> VirtualMachine {
        required { nicid: String, virtualmachineid: String }
        optional {}
    }

    /// Change the offering of a running VM
    ScaleVirtualMachine("scaleVirtualMachine", Async, Flat) -> SuccessResponse {
        required { id: String, serviceofferingid: String }
        optional {
            /// Custom CPU and memory values, e.g. `cpuNumber`
            details: Details,
        }
    }

    /// Reset the password of a stopped, password-enabled VM
    ResetPasswordForVirtualMachine("resetPasswordForVirtualMachine", Async, Entity) -> VirtualMachine {
        required { id: String }
        optional {}
    }

    MigrateVirtualMachine("migrateVirtualMachine", Async, Entity) -> VirtualMachine {
        required { virtualmachineid: String }
        optional {
            hostid: String,
            /// Target primary storage, for a stopped VM
            storageid: String,
        }
    }

    /// Reinstall the root disk from its template, or from `templateid`
    RestoreVirtualMachine("restoreVirtualMachine", Async, Entity) -> VirtualMachine {
        required { virtualmachineid: String }
        optional { templateid: String }
    }

    GetVmPassword("getVMPassword", Sync, Entity) -> VmPassword {
        required { id: String }
        optional {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Command, Mode, Shape};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deploy_params() {
        let details: Details = [("cpuNumber", "2"), ("memory", "2048")].into_iter().collect();
        let params = DeployVirtualMachine::new("so-1", "tpl-1", "zone-1")
            .name("web-01")
            .startvm(false)
            .networkids(vec!["net-1".to_string(), "net-2".to_string()])
            .details(details)
            .to_params();

        assert_eq!(params.get("serviceofferingid"), Some("so-1"));
        assert_eq!(params.get("name"), Some("web-01"));
        assert_eq!(params.get("startvm"), Some("false"));
        assert_eq!(params.get("networkids"), Some("net-1,net-2"));
        assert_eq!(params.get("details[0].cpuNumber"), Some("2"));
        assert_eq!(params.get("details[1].memory"), Some("2048"));
        assert_eq!(params.len(), 8);
    }

    #[test]
    fn test_required_only() {
        let params = StopVirtualMachine::new("vm-1").to_params();
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("id", "vm-1")]);
    }

    #[test]
    fn test_list_tags() {
        let tags: KeyValues = [("env", "prod")].into_iter().collect();
        let params = ListVirtualMachines::new().tags(tags).listall(true).to_params();
        assert_eq!(params.get("tags[0].key"), Some("env"));
        assert_eq!(params.get("tags[0].value"), Some("prod"));
        assert_eq!(params.get("listall"), Some("true"));
    }

    #[test]
    fn test_scale_details() {
        let details: Details = [("cpuNumber", "4"), ("memory", "8192")].into_iter().collect();
        let params = ScaleVirtualMachine::new("vm-1", "so-2").details(details).to_params();
        assert_eq!(params.get("serviceofferingid"), Some("so-2"));
        assert_eq!(params.get("details[0].cpuNumber"), Some("4"));
        assert_eq!(params.get("details[1].memory"), Some("8192"));
        assert_eq!(ScaleVirtualMachine::SHAPE, Shape::Flat);
    }

    #[test]
    fn test_nic_commands_take_vm_and_nic() {
        let params = UpdateDefaultNicForVirtualMachine::new("nic-2", "vm-1").to_params();
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("nicid", "nic-2"), ("virtualmachineid", "vm-1")]
        );
        assert_eq!(RemoveNicFromVirtualMachine::NAME, "removeNicFromVirtualMachine");
    }

    #[test]
    fn test_vm_password_is_sync() {
        assert_eq!(GetVmPassword::NAME, "getVMPassword");
        assert_eq!(GetVmPassword::MODE, Mode::Sync);
        assert_eq!(MigrateVirtualMachine::MODE, Mode::Async);
        let mut restore = RestoreVirtualMachine::new("vm-1");
        assert!(restore.set_param("templateid", "tpl-9"));
        assert!(!restore.set_param("hostid", "host-1"));
    }
}
