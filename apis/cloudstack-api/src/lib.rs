// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! CloudStack API response types
//!
//! This crate mirrors the JSON records returned by the CloudStack
//! orchestration API (version 4.11). The types are plain data: every
//! struct is `#[serde(default)]` because the server omits empty fields,
//! and field names follow the lowercase wire names.
//!
//! List commands answer with `{"count": N, "<entity>": [...]}`; those
//! responses implement [`ListResponse`]. Records that can be looked up by
//! name implement [`Resource`].

pub mod types;
pub use types::*;
