//! # Command Line Interface
//!
//! `dualpass rotate` and `dualpass discard` run one rotation step against the
//! configured server. Connection settings come from the environment (see
//! [`crate::config`]); the admin password is never accepted on the command
//! line.

pub mod batch;

use crate::config::{Config, LoggingConfig};
use crate::exec::{DryRunExecutor, KubectlExec};
use crate::observability::{init_logging, log_config_info};
use crate::rotation::{Manager, Operation, RotationManager, UserRecord};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use batch::load_batch;

#[derive(Parser)]
#[command(name = "dualpass")]
#[command(about = "Zero-downtime MySQL password rotation through kubectl exec")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Namespace override
    #[arg(long, global = true)]
    pub namespace: Option<String>,

    /// Pod override
    #[arg(long, global = true)]
    pub pod: Option<String>,

    /// Container override
    #[arg(long, global = true)]
    pub container: Option<String>,

    /// Host override for the client's -h flag
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set new passwords, keeping the current ones valid as secondary credentials
    Rotate {
        /// Users file (YAML or JSON)
        #[arg(long)]
        users: PathBuf,

        /// Print the statements instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Discard the secondary credentials left by a previous rotation
    Discard {
        /// Users file (YAML or JSON)
        #[arg(long)]
        users: PathBuf,

        /// Print the statements instead of running them
        #[arg(long)]
        dry_run: bool,
    },
}

impl Commands {
    fn parts(&self) -> (Operation, &PathBuf, bool) {
        match self {
            Commands::Rotate { users, dry_run } => (Operation::RotateWithFallback, users, *dry_run),
            Commands::Discard { users, dry_run } => (Operation::DiscardFallback, users, *dry_run),
        }
    }
}

/// Run CLI commands
pub async fn run_cli() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Warning: Error loading .env file: {}", e);
        }
    }

    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    init_logging(&logging)?;

    let (operation, users_path, dry_run) = cli.command.parts();
    let users = load_batch(users_path)?;

    if dry_run {
        for statement in plan(operation, &users).await? {
            println!("{}", statement);
        }
        return Ok(());
    }

    let mut config = Config::from_env()?;
    apply_overrides(&mut config, &cli);
    config.validate()?;
    log_config_info(&config);

    let mut remote = KubectlExec::new().with_binary(&config.kubectl.binary);
    if let Some(context) = &config.kubectl.context {
        remote = remote.with_context(context);
    }
    let manager = RotationManager::exec(config.session(), remote);

    let result = manager.apply(operation, &users).await;
    manager.close().await;

    match result {
        Ok(()) => {
            println!("✅ {} committed for {} user(s)", operation, users.len());
            Ok(())
        }
        Err(e) => {
            if e.is_ambiguous() {
                eprintln!(
                    "⚠️  Transaction outcome is unknown. Verify the current passwords on the server before retrying."
                );
            }
            Err(e).with_context(|| format!("{} failed on {}", operation, config.session().workload))
        }
    }
}

/// Statements `operation` would issue for `users`, passwords masked.
pub async fn plan(operation: Operation, users: &[UserRecord]) -> crate::Result<Vec<String>> {
    let manager = RotationManager::new(DryRunExecutor::new());
    manager.apply(operation, users).await?;
    Ok(manager.executor().statements())
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(namespace) = &cli.namespace {
        config.target.namespace = namespace.clone();
    }
    if let Some(pod) = &cli.pod {
        config.target.pod = pod.clone();
    }
    if let Some(container) = &cli.container {
        config.target.container = container.clone();
    }
    if let Some(host) = &cli.host {
        config.target.host = host.clone();
    }
}
