use super::pie::write_pie_outputs;
use super::progress_handler;
use crate::cli::PipelineArgs;
use crate::config::{ConfigSources, build_config};
use crate::error::Result;
use crate::logging;
use crate::utils::files::{self, SampleRole};
use epiwas::engine::progress::ProgressReporter;
use epiwas::workflows;
use tracing::info;

pub fn run(args: PipelineArgs, quiet: bool) -> Result<()> {
    let config = build_config(&ConfigSources {
        config_path: args.config.as_deref(),
        set_values: &args.set_values,
        piwas: &args.piwas,
        pie: &args.pie,
    })?;
    logging::log_piwas_parameters(&config.piwas);
    logging::log_pie_parameters(&config.pie);

    let case = files::load_sample_dir(&args.inputs.case_dir, &config.piwas)?;
    let control = files::load_sample_dir(&args.inputs.control_dir, &config.piwas)?;
    let protein = files::load_protein(&args.inputs.protein)?;
    files::ensure_output_dir(&args.output_dir)?;

    let progress_handler = progress_handler(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!("Running PIWAS and PIE on {} residues...", protein.len());
    info!("Invoking the core pipeline workflow...");
    let result = workflows::pipeline::run(
        &case,
        &control,
        &protein,
        &config.piwas,
        &config.pie,
        &reporter,
    )?;

    files::write_profile(&args.output_dir, &result.piwas.case, SampleRole::Case)?;
    files::write_profile(&args.output_dir, &result.piwas.control, SampleRole::Control)?;
    write_pie_outputs(&args.output_dir, &result.pie)
}
