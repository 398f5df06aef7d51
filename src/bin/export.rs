//! Schema Export CLI
//!
//! Extracts the JSON Schemas of the DANDI models, simplified for LLM use, into
//! the configured output directory (`src/schemas` by default).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dandi_schemas::export::COMBINED_FILENAME;
use dandi_schemas::{ExporterConfig, ModelRegistry, Progress, SchemaExporter};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dandi-schema-export")]
#[command(about = "Extract DANDI model JSON Schemas for LLM use")]
struct Cli {
    /// Config file (dandi-schemas.toml in the working directory is read if present)
    #[arg(short, long)]
    config: Option<String>,

    /// Output directory, overriding the configured one
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config =
        ExporterConfig::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = Some(dir);
    }

    if cli.dump_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    println!("Extracting DANDI schemas for LLM use...");

    let exporter = SchemaExporter::from_config(&config)?;
    let report = exporter
        .load_and_export(
            || {
                let registry = ModelRegistry::dandi()?;
                println!("Successfully loaded {} DANDI schema models", registry.len());
                Ok(registry)
            },
            |progress| match progress {
                Progress::Extracted(exported) => {
                    println!("✓ Extracted schema for {}", exported.name)
                }
                Progress::Failed(failure) => {
                    println!("✗ Error extracting schema for {}: {}", failure.name, failure.error)
                }
            },
        )
        .context("schema export failed")?;

    println!();
    println!(
        "✓ Extracted {} schemas to {}",
        report.schemas.len(),
        report.output_dir.display()
    );
    println!(
        "✓ Combined schemas saved to {}",
        report.output_dir.join(COMBINED_FILENAME).display()
    );
    println!();
    println!("Schema extraction complete!");
    Ok(())
}
