// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CLI command implementations

pub mod api;
pub mod env;
pub mod host;
pub mod job;
pub mod network;
pub mod profile;
pub mod usage;
pub mod vm;
pub mod volume;
pub mod vpc;

pub use api::ApiArgs;
pub use host::HostCommand;
pub use job::JobCommand;
pub use network::NetworkCommand;
pub use profile::ProfileCommand;
pub use usage::UsageCommand;
pub use vm::VmCommand;
pub use volume::VolumeCommand;
pub use vpc::VpcCommand;
