// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use crate::config::{Config, Profile, env_profile, load_profile, resolve_profile};
use crate::output::{json, table};
use anyhow::Result;
use clap::Subcommand;
use dialoguer::{Confirm, Input, Password};

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Get profile details
    Get {
        /// Profile name (defaults to current)
        name: Option<String>,
    },

    /// Create a new profile
    Create {
        /// Profile name
        name: Option<String>,
        /// API endpoint URL
        #[arg(long)]
        url: Option<String>,
        /// API key
        #[arg(long)]
        api_key: Option<String>,
        /// Secret key
        #[arg(long)]
        secret_key: Option<String>,
        /// Skip TLS verification
        #[arg(long)]
        insecure: bool,
        /// Scope lookups to this zone id
        #[arg(long)]
        zone_id: Option<String>,
        /// Scope lookups to this project id
        #[arg(long)]
        project_id: Option<String>,
        /// Return job ids instead of waiting for async jobs
        #[arg(long)]
        no_wait: bool,
        /// Make it the current profile
        #[arg(long)]
        set_current: bool,
    },

    /// Delete a profile
    #[command(alias = "rm")]
    Delete {
        /// Profile name(s)
        names: Vec<String>,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Set the current profile
    SetCurrent {
        /// Profile name (use '-' for previous)
        name: String,
    },
}

impl ProfileCommand {
    pub fn run(self, use_json: bool) -> Result<()> {
        match self {
            Self::List => list_profiles(use_json),
            Self::Get { name } => get_profile(name, use_json),
            Self::Create {
                name,
                url,
                api_key,
                secret_key,
                insecure,
                zone_id,
                project_id,
                no_wait,
                set_current,
            } => {
                let mut profile = prompt_profile(name, url, api_key, secret_key)?;
                profile.insecure = insecure;
                profile.zone_id = zone_id;
                profile.project_id = project_id;
                profile.async_jobs = !no_wait;
                create_profile(profile, set_current)
            }
            Self::Delete { names, force } => delete_profiles(&names, force),
            Self::SetCurrent { name } => set_current_profile(&name),
        }
    }
}

fn list_profiles(use_json: bool) -> Result<()> {
    let current = resolve_profile(None).ok().map(|p| p.name);

    let mut profiles: Vec<Profile> = Vec::new();
    if let Ok(env) = env_profile() {
        profiles.push(env);
    }
    for name in Profile::list_all()? {
        if let Ok(profile) = Profile::load(&name) {
            profiles.push(profile);
        }
    }

    if use_json {
        let redacted: Vec<Profile> = profiles.iter().map(Profile::redacted).collect();
        json::print_json(&redacted)?;
    } else {
        let mut tbl = table::create_table(&["NAME", "CURR", "ZONE", "URL"]);
        for profile in &profiles {
            let marker = if current.as_deref() == Some(profile.name.as_str()) {
                "*"
            } else {
                ""
            };
            tbl.add_row(vec![
                profile.name.as_str(),
                marker,
                profile.zone_id.as_deref().unwrap_or("-"),
                profile.url.as_str(),
            ]);
        }
        table::print_table(tbl);
    }
    Ok(())
}

fn get_profile(name: Option<String>, use_json: bool) -> Result<()> {
    let profile = match name {
        Some(n) => load_profile(&n)?,
        None => resolve_profile(None)?,
    }
    .redacted();

    if use_json {
        json::print_json(&profile)?;
    } else {
        table::print_fields(&[
            ("Name", profile.name.clone()),
            ("URL", profile.url.clone()),
            ("API key", profile.api_key.clone()),
            ("Insecure", profile.insecure.to_string()),
            ("Zone", profile.zone_id.clone().unwrap_or_default()),
            ("Project", profile.project_id.clone().unwrap_or_default()),
        ]);
    }
    Ok(())
}

/// Fill in missing values interactively
fn prompt_profile(
    name: Option<String>,
    url: Option<String>,
    api_key: Option<String>,
    secret_key: Option<String>,
) -> Result<Profile> {
    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Profile name").interact_text()?,
    };
    let url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("API URL")
            .default("http://localhost:8080/client/api".to_string())
            .interact_text()?,
    };
    let api_key = match api_key {
        Some(k) => k,
        None => Input::new().with_prompt("API key").interact_text()?,
    };
    let secret_key = match secret_key {
        Some(s) => s,
        None => Password::new().with_prompt("Secret key").interact()?,
    };
    Ok(Profile::new(name, url, api_key, secret_key))
}

fn create_profile(profile: Profile, set_current: bool) -> Result<()> {
    if profile.name == crate::config::ENV_PROFILE {
        return Err(anyhow::anyhow!("Profile name 'env' is reserved"));
    }
    if Profile::list_all()?.contains(&profile.name) {
        return Err(anyhow::anyhow!("Profile '{}' already exists", profile.name));
    }

    profile.save()?;
    println!("Created profile '{}'", profile.name);

    if set_current {
        let mut config = Config::load()?;
        config.set_current_profile(&profile.name);
        config.save()?;
        println!("Set '{}' as current profile", profile.name);
    }
    Ok(())
}

fn delete_profiles(names: &[String], force: bool) -> Result<()> {
    for name in names {
        if !force
            && !Confirm::new()
                .with_prompt(format!("Delete profile '{}'?", name))
                .default(false)
                .interact()?
        {
            continue;
        }
        Profile::delete(name)?;

        let mut config = Config::load()?;
        if config.current_profile() == Some(name.as_str()) {
            config.profile = None;
            config.save()?;
        }
        println!("Deleted profile '{}'", name);
    }
    Ok(())
}

fn set_current_profile(name: &str) -> Result<()> {
    let mut config = Config::load()?;

    let name = if name == "-" {
        config
            .old_profile
            .clone()
            .ok_or_else(|| anyhow::anyhow!("No previous profile"))?
    } else {
        // Verify profile exists
        Profile::load(name)?;
        name.to_string()
    };

    config.set_current_profile(&name);
    config.save()?;
    println!("Current profile: {}", name);
    Ok(())
}
