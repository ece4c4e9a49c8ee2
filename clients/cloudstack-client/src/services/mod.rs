// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Typed commands, one module per API area
//!
//! Each command is built with `new` from its required parameters, refined
//! with the builder methods named after its optional ones, and run with
//! [`Client::execute`](crate::Client::execute).

pub mod affinity_group;
pub mod async_job;
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
