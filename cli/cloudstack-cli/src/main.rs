// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! csctl - command-line interface for the CloudStack API

use anyhow::Result;
use clap::{Parser, Subcommand};
use cloudstack_client::Client;

mod commands;
mod config;
mod output;

use commands::{
    ApiArgs, HostCommand, JobCommand, NetworkCommand, ProfileCommand, UsageCommand, VmCommand,
    VolumeCommand, VpcCommand,
};
use config::Profile;

#[derive(Parser)]
#[command(
    name = "csctl",
    version,
    about = "CloudStack management CLI",
    long_about = "Command-line interface for the CloudStack orchestration API"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "CSCTL_PROFILE")]
    profile: Option<String>,

    /// API endpoint override
    #[arg(short = 'U', long, global = true)]
    url: Option<String>,

    /// API key override
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Secret key override
    #[arg(long, global = true)]
    secret_key: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Generate shell environment exports
    Env {
        /// Profile name (defaults to current)
        profile: Option<String>,
        /// Shell type (bash, fish, powershell)
        #[arg(short, long, default_value = "bash")]
        shell: String,
    },

    /// Manage hosts
    Host {
        #[command(subcommand)]
        command: HostCommand,
    },

    /// Manage guest networks
    #[command(alias = "net")]
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },

    /// Manage VPCs
    Vpc {
        #[command(subcommand)]
        command: VpcCommand,
    },

    /// Manage virtual machines
    #[command(alias = "instance")]
    Vm {
        #[command(subcommand)]
        command: VmCommand,
    },

    /// Manage volumes
    Volume {
        #[command(subcommand)]
        command: VolumeCommand,
    },

    /// Query usage records
    Usage {
        #[command(subcommand)]
        command: UsageCommand,
    },

    /// Inspect async jobs
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },

    /// Call any API command with key=value parameters
    Api(ApiArgs),
}

impl Cli {
    /// Build a client from CLI options or a profile
    fn build_client(&self) -> Result<Client> {
        if let (Some(url), Some(api_key), Some(secret_key)) =
            (&self.url, &self.api_key, &self.secret_key)
        {
            let profile = Profile::new(
                "cli".to_string(),
                url.clone(),
                api_key.clone(),
                secret_key.clone(),
            );
            return profile.client();
        }

        let mut profile = config::resolve_profile(self.profile.as_deref())?;

        // Allow CLI overrides on top of the profile
        if let Some(url) = &self.url {
            profile.url = url.clone();
        }
        if let Some(api_key) = &self.api_key {
            profile.api_key = api_key.clone();
        }
        if let Some(secret_key) = &self.secret_key {
            profile.secret_key = secret_key.clone();
        }

        tracing::debug!(profile = %profile.name, url = %profile.url, "using profile");
        profile.client()
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("csctl=debug,cloudstack_client=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    match &cli.command {
        Commands::Profile { command } => command.clone().run(cli.json),
        Commands::Env { profile, shell } => commands::env::generate_env(profile.as_deref(), shell),
        Commands::Host { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Network { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Vpc { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Vm { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Volume { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Usage { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Job { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Api(args) => {
            let client = cli.build_client()?;
            commands::api::run(args.clone(), &client).await
        }
    }
}
