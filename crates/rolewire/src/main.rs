//! rolewire - Entry Point
//!
//! Binary entry point for the rolewire container toolkit. Loads the
//! configuration, initializes logging, assembles a container runtime,
//! and reports what it resolved. With `--providers`, lists every
//! context provider linked into the binary.

// Force-link rolewire-infrastructure so its linkme provider
// registrations are included
extern crate rolewire_infrastructure;

use clap::Parser;
use rolewire_infrastructure::config::ConfigLoader;
use rolewire_infrastructure::di::{
    bootstrap, ContextProviderResolver, MetadataProviderResolver, SessionProviderResolver,
};
use rolewire_infrastructure::logging::init_logging;
use std::sync::Arc;

/// Command line interface for rolewire
#[derive(Parser, Debug)]
#[command(name = "rolewire")]
#[command(about = "rolewire - role-driven component wiring")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// List the context providers linked into this binary
    #[arg(long)]
    pub providers: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;

    init_logging(&config.logging)?;

    if cli.providers {
        let config = Arc::new(config);
        print_providers(
            "metadata",
            &MetadataProviderResolver::new(Arc::clone(&config)).list_available(),
        );
        print_providers(
            "context",
            &ContextProviderResolver::new(Arc::clone(&config)).list_available(),
        );
        print_providers(
            "session",
            &SessionProviderResolver::new(config).list_available(),
        );
        return Ok(());
    }

    let runtime = bootstrap(config)?;
    let values = runtime.registry().context_values();
    println!(
        "module '{}': metadata={}, context={}, session={}",
        runtime.config().container.module,
        values.metadata_provider_name(),
        values.context_provider_name(),
        values.session_provider_name(),
    );

    Ok(())
}

fn print_providers(capability: &str, providers: &[(&'static str, &'static str)]) {
    println!("{capability}:");
    for (name, description) in providers {
        println!("  {name:<14} {description}");
    }
}
