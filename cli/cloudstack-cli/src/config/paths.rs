// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration path resolution

use std::path::PathBuf;

/// Get the csctl configuration directory
///
/// Priority:
/// 1. CSCTL_CONFIG_DIR environment variable
/// 2. ~/.csctl/ if it exists
/// 3. XDG config dir (~/.config/csctl/ on Linux)
pub fn config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CSCTL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    let home = dirs::home_dir();
    if let Some(legacy_dir) = home.as_ref().map(|h| h.join(".csctl"))
        && legacy_dir.exists()
    {
        return legacy_dir;
    }

    dirs::config_dir()
        .map(|dir| dir.join("csctl"))
        .unwrap_or_else(|| home.unwrap_or_else(|| PathBuf::from(".")).join(".csctl"))
}

/// Get the profiles directory
pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// Get the path to the main config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Get the path to a specific profile
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{}.json", name))
}

/// Ensure config directories exist
pub fn ensure_config_dirs() -> std::io::Result<()> {
    std::fs::create_dir_all(config_dir())?;
    std::fs::create_dir_all(profiles_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path() {
        let path = profile_path("lab");
        assert!(path.ends_with("profiles.d/lab.json"));
    }
}
