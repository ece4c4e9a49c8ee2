// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Environment variable export command

use crate::config::{Profile, resolve_profile};
use anyhow::Result;

/// Generate shell export statements for the profile
pub fn generate_env(profile_name: Option<&str>, shell: &str) -> Result<()> {
    let profile = resolve_profile(profile_name)?;
    let vars = env_vars(&profile);

    match shell {
        "fish" => {
            for (key, value) in &vars {
                println!("set -gx {key} '{value}'");
            }
            println!("# Run this command to configure your shell:");
            println!("#     csctl env | source");
        }
        "powershell" | "pwsh" => {
            for (key, value) in &vars {
                println!("$env:{key} = '{value}'");
            }
        }
        _ => {
            for (key, value) in &vars {
                println!("export {key}=\"{value}\"");
            }
            println!("# Run this command to configure your shell:");
            println!("#     eval \"$(csctl env)\"");
        }
    }

    Ok(())
}

/// The variables that recreate `profile` as the "env" profile
fn env_vars(profile: &Profile) -> Vec<(&'static str, String)> {
    let mut vars = vec![
        ("CLOUDSTACK_API_URL", profile.url.clone()),
        ("CLOUDSTACK_API_KEY", profile.api_key.clone()),
        ("CLOUDSTACK_SECRET_KEY", profile.secret_key.clone()),
        ("CLOUDSTACK_VERIFY_SSL", (!profile.insecure).to_string()),
    ];
    if let Some(secs) = profile.timeout_secs {
        vars.push(("CLOUDSTACK_TIMEOUT", secs.to_string()));
    }
    if let Some(ms) = profile.poll_interval_ms {
        vars.push(("CLOUDSTACK_POLL_INTERVAL_MS", ms.to_string()));
    }
    if !profile.async_jobs {
        vars.push(("CLOUDSTACK_ASYNC", "false".to_string()));
    }
    if profile.http_get_only {
        vars.push(("CLOUDSTACK_HTTP_GET_ONLY", "true".to_string()));
    }
    vars
}
