// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for csctl integration tests

// Allow unused code - not every test file uses every helper
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use std::path::Path;

use assert_cmd::Command;

/// Variables that would leak the developer's own setup into a test
const AMBIENT_VARS: &[&str] = &[
    "CSCTL_PROFILE",
    "CLOUDSTACK_API_URL",
    "CLOUDSTACK_API_KEY",
    "CLOUDSTACK_SECRET_KEY",
    "CLOUDSTACK_SECRET",
    "CLOUDSTACK_VERIFY_SSL",
    "CLOUDSTACK_ASYNC",
    "CLOUDSTACK_TIMEOUT",
    "CLOUDSTACK_POLL_INTERVAL_MS",
    "CLOUDSTACK_HTTP_GET_ONLY",
];

/// Get a Command for running the csctl binary
pub fn csctl_cmd() -> Command {
    Command::cargo_bin("csctl").expect("Failed to find csctl binary")
}

/// csctl with its configuration confined to `dir`
pub fn isolated_cmd(dir: &Path) -> Command {
    let mut cmd = csctl_cmd();
    cmd.env("CSCTL_CONFIG_DIR", dir).env("HOME", dir);
    for var in AMBIENT_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// csctl pointed at `api_url` through the "env" profile
pub fn env_cmd(dir: &Path, api_url: &str) -> Command {
    let mut cmd = isolated_cmd(dir);
    cmd.env("CLOUDSTACK_API_URL", api_url)
        .env("CLOUDSTACK_API_KEY", "test-api-key")
        .env("CLOUDSTACK_SECRET_KEY", "test-secret-key")
        .env("CLOUDSTACK_POLL_INTERVAL_MS", "10");
    cmd
}
