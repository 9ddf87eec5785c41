//! Firesight: Wildfire Risk Prediction CLI
//!
//! An interactive front end over pre-fit model artifacts: collects hourly
//! environmental measurements, runs the preprocessing pipeline and the
//! classifier, and reports a wildfire occurrence probability. A companion
//! `overview` subcommand summarizes the training dataset.

mod artifacts;
mod cli;
mod pipeline;
mod report;
mod utils;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use artifacts::ArtifactStore;
use cli::{Cli, Commands};
use pipeline::{predict, DECISION_THRESHOLD};
use report::{build_overview, export_overview_bundle, load_dataset, PredictionReport};
use utils::{
    create_spinner, finish_with_success, finish_with_warning, print_banner, print_completion,
    print_config, print_info, print_step_header, print_step_time,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = &cli.command {
        return match command {
            Commands::Overview { data, export, bins } => {
                run_overview(data, export.as_deref(), *bins)
            }
        };
    }

    // Main predict flow
    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Load the pre-fit artifacts, once for the whole session
    print_step_header(1, "Load Model Artifacts");
    println!();
    let step_start = Instant::now();
    let artifacts_dir = cli.artifacts_dir();
    let spinner = create_spinner("Loading scaler, projection, and classifier...");
    let store = ArtifactStore::load(&artifacts_dir).with_context(|| {
        format!(
            "Failed to load model artifacts from {}",
            artifacts_dir.display()
        )
    })?;
    finish_with_success(&spinner, "Artifacts loaded");
    print_step_time(step_start.elapsed());

    println!();
    print_config(&artifacts_dir, store.projected_dim(), DECISION_THRESHOLD);

    // Step 2: One prediction per trigger; each request builds a fresh record
    loop {
        let record = if cli.no_confirm {
            cli.seed_builder()?.build().context(
                "With --no-confirm every measurement must be supplied as a flag",
            )?
        } else {
            print_step_header(2, "Enter Measurements");
            println!();
            print_info("All measurements cover a one-hour period");
            println!();
            cli::complete_record(cli.seed_builder()?)?
        };

        let step_start = Instant::now();
        let prediction = predict(&record, &store)?;
        PredictionReport::new(prediction).display();
        print_step_time(step_start.elapsed());

        if cli.no_confirm || !cli::confirm_another()? {
            break;
        }
    }

    print_completion();
    Ok(())
}

/// Run the training-dataset overview report
fn run_overview(data: &Path, export: Option<&Path>, bins: usize) -> Result<()> {
    print_banner(env!("CARGO_PKG_VERSION"));

    // Step 1: Load dataset
    print_step_header(1, "Load Dataset");
    println!();
    let step_start = Instant::now();
    let spinner = create_spinner("Reading dataset...");
    let df = load_dataset(data)?;
    finish_with_success(&spinner, "Dataset loaded");

    let (rows, cols) = df.shape();
    println!("\n    {} Dataset Statistics:", style("✧").cyan());
    println!("      Rows: {}", rows);
    println!("      Columns: {}", cols);
    print_step_time(step_start.elapsed());

    // Step 2: Compute and render the overview
    print_step_header(2, "Compute Overview");
    println!();
    let step_start = Instant::now();
    let spinner = create_spinner("Computing dataset statistics...");
    let overview = build_overview(&df, bins)?;
    if overview.features.iter().any(|f| f.missing_pct > 0.0) {
        finish_with_warning(&spinner, "Statistics computed (missing values present)");
    } else {
        finish_with_success(&spinner, "Statistics computed");
    }
    print_step_time(step_start.elapsed());

    overview.display();

    // Step 3: Optional export bundle
    if let Some(path) = export {
        print_step_header(3, "Export Bundle");
        println!();
        let step_start = Instant::now();
        let spinner = create_spinner("Writing export bundle...");
        export_overview_bundle(&overview, data, path)?;
        finish_with_success(&spinner, &format!("Saved to {}", path.display()));
        print_step_time(step_start.elapsed());
    }

    print_completion();
    Ok(())
}
