// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack API Client Library
//!
//! This client signs every request with the user's API and secret keys and
//! unwraps CloudStack's `{"<command>response": {...}}` envelope.
//!
//! Asynchronous commands (deployments, restarts, deletions...) are followed
//! to completion by polling `queryAsyncJobResult` unless the client is
//! created with [`Client::new_without_job_wait`].
//!
//! # Example
//!
//! ```ignore
//! use cloudstack_client::Client;
//! use cloudstack_client::services::vpc::{CreateVpc, ListVpcs};
//!
//! let client = Client::new(
//!     "https://cloud.example.com/client/api",
//!     "api-key",
//!     "secret-key",
//!     true,
//! )?;
//!
//! let vpc = client
//!     .execute(CreateVpc::new("10.0.0.0/16", "web", "web", offering_id, zone_id).start(true))
//!     .await?;
//!
//! let vpcs = client.list_all(ListVpcs::new().zoneid(zone_id)).await?;
//! let id = client.find_id::<ListVpcs>("web", &[]).await?;
//! ```
//!
//! # Raw commands
//!
//! [`Client::call`] issues any command from a parameter map and returns
//! the unwrapped JSON payload, for commands without a typed descriptor.

mod async_job;
pub mod client;
pub mod command;
pub mod config;
mod envelope;
pub mod error;
pub mod lookup;
mod pagination;
pub mod params;
pub mod services;

pub use client::{Client, ClientBuilder};
pub use command::{Command, Mode, Shape};
pub use config::ClientConfig;
pub use error::Error;
pub use lookup::{Lookup, LookupOption};
pub use pagination::DEFAULT_PAGE_SIZE;
pub use params::{Details, KeyValues, ParamValue, Params, ServiceProviders};

/// Re-export the response types for convenience
pub use cloudstack_api as types;
