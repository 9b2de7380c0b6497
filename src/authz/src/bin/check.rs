//! # Role Authorization Check
//!
//! Command-line front end for the role authorizer.
//!
//! ## Usage
//!
//! - `rolemask-check --hierarchy roles.json <REQUIRED> <ACTOR>` - prints `allow` or `deny`
//! - `rolemask-check --hierarchy roles.json --list` - prints each role's bit and signature
//!
//! ## Configuration
//!
//! Environment variables:
//! - `ROLEMASK_HIERARCHY` - hierarchy file used when `--hierarchy` is omitted
//! - `ROLEMASK_STRICT_NAMES` - validate role names (default: true)
//! - `RUST_LOG` - Log level (default: warn)

use anyhow::{Context, Result};
use clap::Parser;
use rolemask_authz::{AuthorizerConfig, RoleAuthorizer};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "rolemask-check")]
#[command(about = "Check role authorization against a compiled role hierarchy")]
#[command(version)]
struct Cli {
    /// Hierarchy file (JSON); overrides ROLEMASK_HIERARCHY
    #[arg(long)]
    hierarchy: Option<PathBuf>,

    /// List compiled roles instead of checking
    #[arg(long)]
    list: bool,

    /// Role required by the operation
    #[arg(required_unless_present = "list")]
    required: Option<String>,

    /// Role held by the actor
    #[arg(required_unless_present = "list")]
    actor: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    // Diagnostics go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = AuthorizerConfig::from_env()
        .context("Failed to read configuration from environment")?;
    if let Some(path) = cli.hierarchy {
        config = config.with_hierarchy_path(path);
    }

    debug!(?config, "Loaded configuration");

    let source = match &config.hierarchy_path {
        Some(path) => path.display().to_string(),
        None => "<unset>".to_string(),
    };
    let authz = RoleAuthorizer::from_config(&config)
        .with_context(|| format!("Failed to build authorizer from {}", source))?;

    info!(
        "Compiled {} roles (rolemask-authz v{})",
        authz.role_count(),
        rolemask_authz::VERSION
    );

    if cli.list {
        for (name, entry) in authz.table().iter() {
            println!("{:>2}  {}  {}", entry.bit, entry.signature, name);
        }
        return Ok(());
    }

    let (required, actor) = match (cli.required, cli.actor) {
        (Some(required), Some(actor)) => (required, actor),
        _ => anyhow::bail!("Both REQUIRED and ACTOR roles must be given"),
    };

    let allowed = authz
        .authorize(&required, &actor)
        .with_context(|| format!("Failed to authorize '{}' for '{}'", actor, required))?;

    println!("{}", if allowed { "allow" } else { "deny" });

    Ok(())
}
