//! refdoc - API reference documentation migration tool
//!
//! A CLI tool for converting vendor-generated API reference HTML
//! (Javadoc-style class pages) into reStructuredText sources for a
//! documentation toolchain.

#![deny(unsafe_code)]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use refdoc::cli::{Cli, Commands, EmitArg};
use refdoc::pipeline::{self, Emit, PageSource};
use refdoc::template_profile::TemplateProfile;

/// Main entry point for the refdoc CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
#[tokio::main]
async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            source,
            output,
            emit,
            profile,
            verbose,
        } => {
            handle_convert_command(source, output, emit, profile, verbose).await?;
        }

        Commands::InitProfile { path, force } => {
            handle_init_profile_command(path, force)?;
        }
    }

    Ok(())
}

/// Handle the convert command
async fn handle_convert_command(
    source: String,
    output: Option<PathBuf>,
    emit: EmitArg,
    profile_path: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let profile = match profile_path {
        Some(path) => TemplateProfile::load(&path)
            .with_context(|| format!("Failed to load profile from {}", path.display()))?,
        None => TemplateProfile::default(),
    };

    let emit = match emit {
        EmitArg::Rst => Emit::Rst,
        EmitArg::Ast => Emit::Ast,
    };

    let page_source = PageSource::classify(&source);
    let rendered = pipeline::convert(&page_source, &profile, emit)
        .await
        .with_context(|| format!("Failed to convert {}", source))?;

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("✓ Successfully wrote: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Handle the init-profile command
fn handle_init_profile_command(path: Option<PathBuf>, force: bool) -> Result<()> {
    let target = path.unwrap_or_else(|| PathBuf::from("refdoc.toml"));

    if target.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite",
            target.display()
        );
    }

    TemplateProfile::default()
        .save(&target)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    println!("✓ Wrote default profile: {}", target.display());
    Ok(())
}
