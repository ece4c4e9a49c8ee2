// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Name and id lookups over list commands
//!
//! Any list command registered as a [`Lookup`] gets three helpers:
//!
//! - [`Client::find_id`]: name to id. A single hit is returned as is;
//!   among several hits only an exact name match is accepted.
//! - [`Client::find_by_id`]: id to record
//! - [`Client::find_by_name`]: name to record
//!
//! Matches are counted from the returned items, not the reported `count`.

use cloudstack_api::{ListResponse, Resource};

use crate::client::Client;
use crate::command::Command;
use crate::error::Error;
use crate::services::{
    affinity_group::ListAffinityGroups, disk_offering::ListDiskOfferings, host::ListHosts,
    iso::ListIsos, network::ListNetworks, network::ListPhysicalNetworks,
    network_offering::ListNetworkOfferings, role::ListRoles, router::ListRouters,
    virtual_machine::ListVirtualMachines, volume::ListVolumes, vpc::ListVpcOfferings,
    vpc::ListVpcs,
};

/// A list command usable for name and id lookups
pub trait Lookup: Command<Response: ListResponse<Item: Resource>> {
    /// Resource kind used in error messages
    const RESOURCE: &'static str;

    /// Parameter carrying the name filter
    const NAME_PARAM: &'static str = "name";

    /// An unfiltered list command
    fn lookup() -> Self;
}

macro_rules! lookups {
    ($($command:ty => $resource:literal $(by $param:literal)?),+ $(,)?) => {
        $(
            impl Lookup for $command {
                const RESOURCE: &'static str = $resource;
                $( const NAME_PARAM: &'static str = $param; )?

                fn lookup() -> Self {
                    Self::new()
                }
            }
        )+
    };
}

lookups! {
    ListAffinityGroups => "AffinityGroup",
    ListDiskOfferings => "DiskOffering",
    ListHosts => "Host",
    ListIsos => "ISO",
    ListNetworks => "Network" by "keyword",
    ListNetworkOfferings => "NetworkOffering",
    ListPhysicalNetworks => "PhysicalNetwork",
    ListRoles => "Role",
    ListRouters => "Router",
    ListVirtualMachines => "VirtualMachine",
    ListVolumes => "Volume",
    ListVpcOfferings => "VPCOffering",
    ListVpcs => "VPC",
}

/// Scope for a lookup
///
/// An option whose parameter the list command does not accept is skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOption {
    ProjectId(String),
    DomainId(String),
    ZoneId(String),
    Hypervisor(String),
    /// Include resources of all accounts the caller may see
    ListAll(bool),
    /// Any other parameter, by wire name
    Param(String, String),
}

impl LookupOption {
    pub fn key(&self) -> &str {
        match self {
            Self::ProjectId(_) => "projectid",
            Self::DomainId(_) => "domainid",
            Self::ZoneId(_) => "zoneid",
            Self::Hypervisor(_) => "hypervisor",
            Self::ListAll(_) => "listall",
            Self::Param(key, _) => key,
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::ProjectId(v) | Self::DomainId(v) | Self::ZoneId(v) | Self::Hypervisor(v) => {
                v.clone()
            }
            Self::ListAll(all) => all.to_string(),
            Self::Param(_, v) => v.clone(),
        }
    }

    /// Set the option on `command`, returning whether it applied
    pub fn apply<C: Command>(&self, command: &mut C) -> bool {
        command.set_param(self.key(), self.value())
    }
}

/// Text of the error CloudStack returns for an unknown or malformed id
fn invalid_id_message(id: &str) -> String {
    format!(
        "Invalid parameter id value={id} due to incorrect long value format, or entity does not exist"
    )
}

impl Client {
    fn lookup_command<L: Lookup>(
        &self,
        filter: &str,
        value: &str,
        options: &[LookupOption],
    ) -> Result<L, Error> {
        let mut command = L::lookup();
        if !command.set_param(filter, value) {
            return Err(Error::UnsupportedParam {
                command: L::NAME,
                param: filter.to_string(),
            });
        }
        for option in self.default_options().iter().chain(options) {
            if !option.apply(&mut command) {
                tracing::trace!(command = L::NAME, param = option.key(), "option not supported");
            }
        }
        Ok(command)
    }

    /// Resolve a name to an id
    pub async fn find_id<L>(&self, name: &str, options: &[LookupOption]) -> Result<String, Error>
    where
        L: Lookup,
        L::Response: ListResponse,
        <L::Response as ListResponse>::Item: Resource,
    {
        let command = self.lookup_command::<L>(L::NAME_PARAM, name, options)?;
        let items = self.execute(command).await?.into_items();

        match items.len() {
            0 => Err(Error::NotFound {
                resource: L::RESOURCE,
                query: name.to_string(),
            }),
            1 => Ok(items[0].id().to_string()),
            count => items
                .iter()
                .find(|item| item.name() == name)
                .map(|item| item.id().to_string())
                .ok_or(Error::Ambiguous {
                    resource: L::RESOURCE,
                    query: name.to_string(),
                    count,
                }),
        }
    }

    /// Fetch a record by id
    pub async fn find_by_id<L>(
        &self,
        id: &str,
        options: &[LookupOption],
    ) -> Result<<L::Response as ListResponse>::Item, Error>
    where
        L: Lookup,
        L::Response: ListResponse,
        <L::Response as ListResponse>::Item: Resource,
    {
        let command = self.lookup_command::<L>("id", id, options)?;
        let items = match self.execute(command).await {
            Ok(response) => response.into_items(),
            Err(Error::Api { error_text, .. }) if error_text.contains(&invalid_id_message(id)) => {
                return Err(Error::NotFound {
                    resource: L::RESOURCE,
                    query: id.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let count = items.len();
        let mut items = items.into_iter();
        match (items.next(), count) {
            (Some(item), 1) => Ok(item),
            (None, _) => Err(Error::NotFound {
                resource: L::RESOURCE,
                query: id.to_string(),
            }),
            (Some(_), count) => Err(Error::Ambiguous {
                resource: L::RESOURCE,
                query: id.to_string(),
                count,
            }),
        }
    }

    /// Fetch a record by name
    pub async fn find_by_name<L>(
        &self,
        name: &str,
        options: &[LookupOption],
    ) -> Result<<L::Response as ListResponse>::Item, Error>
    where
        L: Lookup,
        L::Response: ListResponse,
        <L::Response as ListResponse>::Item: Resource,
    {
        let id = self.find_id::<L>(name, options).await?;
        self.find_by_id::<L>(&id, options).await
    }

    /// Fetch a record by id, falling back to a name lookup
    ///
    /// Convenient for command line arguments that accept either.
    pub async fn find<L>(
        &self,
        name_or_id: &str,
        options: &[LookupOption],
    ) -> Result<<L::Response as ListResponse>::Item, Error>
    where
        L: Lookup,
        L::Response: ListResponse,
        <L::Response as ListResponse>::Item: Resource,
    {
        match self.find_by_id::<L>(name_or_id, options).await {
            Err(Error::NotFound { .. }) => self.find_by_name::<L>(name_or_id, options).await,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_option_applies_only_to_declared_params() {
        let mut vpcs = ListVpcs::new();
        assert!(LookupOption::ZoneId("z-1".into()).apply(&mut vpcs));
        assert!(LookupOption::ProjectId("p-1".into()).apply(&mut vpcs));
        // listVPCs has no hypervisor filter
        assert!(!LookupOption::Hypervisor("KVM".into()).apply(&mut vpcs));

        let params = vpcs.to_params();
        assert_eq!(params.get("zoneid"), Some("z-1"));
        assert_eq!(params.get("projectid"), Some("p-1"));
        assert!(!params.contains("hypervisor"));
    }

    #[test]
    fn test_option_key_value() {
        let opt = LookupOption::ListAll(true);
        assert_eq!((opt.key(), opt.value()), ("listall", "true".to_string()));
        let opt = LookupOption::Param("keyword".into(), "web".into());
        assert_eq!((opt.key(), opt.value()), ("keyword", "web".to_string()));
    }

    #[test]
    fn test_invalid_id_message() {
        assert_eq!(
            invalid_id_message("abc"),
            "Invalid parameter id value=abc due to incorrect long value format, or entity does not exist"
        );
    }
}
