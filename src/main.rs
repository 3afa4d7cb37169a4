use anyhow::Context;
use log::info;

use shift_fixtures::{config::GeneratorConfig, generator::ThreadIndexSource, pipeline};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GeneratorConfig::default();

    let execution = pipeline::run(&config, &ThreadIndexSource)
        .context("unable to generate shift fixtures")?;

    info!(
        "Wrote {} records to {} in {:?}",
        config.record_count(),
        config.output_path().display(),
        execution.duration
    );

    Ok(())
}
