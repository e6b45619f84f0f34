use super::progress_handler;
use crate::cli::{PieArgs, PiwasOverrides};
use crate::config::{ConfigSources, build_config};
use crate::error::Result;
use crate::logging;
use crate::utils::files;
use epiwas::engine::progress::ProgressReporter;
use epiwas::workflows::{self, pie::PieResult};
use std::path::Path;
use tracing::{info, warn};

pub fn run(args: PieArgs, quiet: bool) -> Result<()> {
    let config = build_config(&ConfigSources {
        config_path: args.config.as_deref(),
        set_values: &args.set_values,
        piwas: &PiwasOverrides::default(),
        pie: &args.pie,
    })?;
    logging::log_pie_parameters(&config.pie);

    let case = files::load_position_table(&args.case_table)?;
    let control = files::load_position_table(&args.control_table)?;
    files::ensure_output_dir(&args.output_dir)?;

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Testing {} case rows against {} control rows ({} permutations per position)...",
        case.len(),
        control.len(),
        config.pie.iterations
    );
    info!("Invoking the core PIE workflow...");
    let result = workflows::pie::run(&case, &control, &config.pie, &reporter)?;

    write_pie_outputs(&args.output_dir, &result)
}

/// Writes the full result table and the top-fraction subset, then prints a summary.
pub fn write_pie_outputs(output_dir: &Path, result: &PieResult) -> Result<()> {
    if result.results.is_empty() {
        warn!("No case positions were found; result tables will only contain headers.");
    }

    let total_path = files::write_results(output_dir, files::TOTAL_RESULTS_FILE, &result.results)?;
    let top_path = files::write_results(output_dir, files::TOP_RESULTS_FILE, &result.top)?;

    println!(
        "✓ Results for {} positions written to: {}",
        result.results.len(),
        total_path.display()
    );
    println!(
        "✓ Top {} positions written to: {}",
        result.top.len(),
        top_path.display()
    );
    Ok(())
}
