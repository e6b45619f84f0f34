use super::progress_handler;
use crate::cli::{PieOverrides, PiwasArgs};
use crate::config::{ConfigSources, build_config};
use crate::error::Result;
use crate::logging;
use crate::utils::files::{self, SampleRole};
use epiwas::engine::progress::ProgressReporter;
use epiwas::workflows;
use tracing::info;

pub fn run(args: PiwasArgs, quiet: bool) -> Result<()> {
    let config = build_config(&ConfigSources {
        config_path: args.config.as_deref(),
        set_values: &args.set_values,
        piwas: &args.piwas,
        pie: &PieOverrides::default(),
    })?;
    logging::log_piwas_parameters(&config.piwas);

    let case = files::load_sample_dir(&args.inputs.case_dir, &config.piwas)?;
    let control = files::load_sample_dir(&args.inputs.control_dir, &config.piwas)?;
    let protein = files::load_protein(&args.inputs.protein)?;
    files::ensure_output_dir(&args.output_dir)?;

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Scoring {} residues with PIWAS...", protein.len());
    info!("Invoking the core PIWAS workflow...");
    let result = workflows::piwas::run(&case, &control, &protein, &config.piwas, &reporter)?;

    let case_path = files::write_profile(&args.output_dir, &result.case, SampleRole::Case)?;
    let control_path =
        files::write_profile(&args.output_dir, &result.control, SampleRole::Control)?;

    println!(
        "✓ Case scores ({} positions) written to: {}",
        result.case.len(),
        case_path.display()
    );
    println!(
        "✓ Control scores ({} positions) written to: {}",
        result.control.len(),
        control_path.display()
    );
    Ok(())
}
