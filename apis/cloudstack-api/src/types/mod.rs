// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack type definitions

/// Declare a `{"count": N, "<key>": [...]}` list response and its
/// [`ListResponse`] implementation.
macro_rules! list_response {
    ($(#[$meta:meta])* $name:ident, $key:literal, $field:ident: $item:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Number of matches reported by the server
            pub count: i64,
            #[serde(rename = $key)]
            pub $field: Vec<$item>,
        }

        impl $crate::types::ListResponse for $name {
            type Item = $item;

            fn count(&self) -> usize {
                usize::try_from(self.count).unwrap_or_default()
            }

            fn items(&self) -> &[$item] {
                &self.$field
            }

            fn into_items(self) -> Vec<$item> {
                self.$field
            }
        }
    };
}

/// Implement [`Resource`] for records with plain `id` and `name` fields.
macro_rules! resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::types::Resource for $ty {
                fn id(&self) -> &str {
                    &self.id
                }

                fn name(&self) -> &str {
                    &self.name
                }
            }
        )+
    };
}

pub mod affinity_group;
pub mod async_job;
pub mod common;
pub mod disk_offering;
pub mod host;
pub mod iso;
pub mod ldap;
pub mod network;
pub mod network_offering;
pub mod nic;
pub mod role;
pub mod router;
pub mod usage;
pub mod virtual_machine;
pub mod volume;
pub mod vpc;

pub use affinity_group::*;
pub use async_job::*;
pub use common::*;
pub use disk_offering::*;
pub use host::*;
pub use iso::*;
pub use ldap::*;
pub use network::*;
pub use network_offering::*;
pub use nic::*;
pub use role::*;
pub use router::*;
pub use usage::*;
pub use virtual_machine::*;
pub use volume::*;
pub use vpc::*;
