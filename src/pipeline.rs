use log::info;

use crate::{
    config::GeneratorConfig,
    core::{
        job::{Job, JobBuilder, JobExecution},
        step::{StepBuilder, StepInstance},
    },
    error::FixtureError,
    generator::{
        IndexSource, RecordLineProcessor, RecordReaderBuilder, ShiftRecord, load_name_pool,
    },
    item::line::LineItemWriterBuilder,
};

/// Name of the job run by [`run`].
pub const JOB_NAME: &str = "shift-fixtures";
/// Name of the single step of that job.
pub const STEP_NAME: &str = "generate-shift-records";

/// Loads the name pool, generates `record_count` records and writes them to
/// the configured output file.
///
/// Every pool is validated before sampling starts and every record is
/// generated before the output file is opened, so a failure in the load or
/// sample stage leaves any previous output intact.
pub fn run(config: &GeneratorConfig, source: &dyn IndexSource) -> Result<JobExecution, FixtureError> {
    let names = load_name_pool(config.input_path())?;
    info!(
        "Loaded {} names from {}",
        names.len(),
        config.input_path().display()
    );

    for pool in [&names, config.weekdays(), config.shifts()] {
        pool.ensure_sampleable(config.sampling_bound())?;
    }

    let reader = RecordReaderBuilder::new(&names, config.weekdays(), config.shifts())
        .source(source)
        .sampling_bound(config.sampling_bound())
        .number_of_items(config.record_count())
        .build();

    let processor = RecordLineProcessor;

    let writer = LineItemWriterBuilder::new().from_path(config.output_path());

    let step: StepInstance<ShiftRecord, String> = StepBuilder::new()
        .name(STEP_NAME)
        .reader(&reader)
        .processor(&processor)
        .writer(&writer)
        .build();

    let job = JobBuilder::new().name(JOB_NAME).start(&step).build();
    job.run()
}
