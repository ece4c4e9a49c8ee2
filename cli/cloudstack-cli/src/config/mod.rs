// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;
use cloudstack_client::ClientConfig;

/// Name of the profile built from `CLOUDSTACK_*` variables
pub const ENV_PROFILE: &str = "env";

/// Build the "env" profile from environment variables
pub fn env_profile() -> Result<Profile> {
    let config = ClientConfig::from_env()?;
    Ok(Profile::from_client_config(ENV_PROFILE, config))
}

/// Load a saved profile, or the "env" profile
pub fn load_profile(name: &str) -> Result<Profile> {
    if name == ENV_PROFILE {
        env_profile()
    } else {
        Profile::load(name)
    }
}

/// Resolve which profile to use
///
/// Priority:
/// 1. CLI --profile argument (or CSCTL_PROFILE)
/// 2. "env" if CLOUDSTACK_API_URL is set
/// 3. Current profile from config.json
pub fn resolve_profile(cli_profile: Option<&str>) -> Result<Profile> {
    if let Some(name) = cli_profile {
        return load_profile(name);
    }

    if std::env::var("CLOUDSTACK_API_URL").is_ok() {
        return env_profile();
    }

    let config = Config::load()?;
    if let Some(name) = config.current_profile() {
        return Profile::load(name);
    }

    Err(anyhow::anyhow!(
        "No profile configured. Use 'csctl profile create' or set CLOUDSTACK_* environment variables."
    ))
}
