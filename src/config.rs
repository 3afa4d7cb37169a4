use std::path::{Path, PathBuf};

use crate::generator::{Pool, SHIFTS, SamplingBound, WEEKDAYS};

/// Name list read at startup, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "tilfældigenavne.txt";
/// Fixture file written at the end of the run, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "input.csv";
/// Number of records generated per run.
pub const DEFAULT_RECORD_COUNT: usize = 400;

/// Everything a generation run needs besides the random source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    input_path: PathBuf,
    output_path: PathBuf,
    record_count: usize,
    weekdays: Pool,
    shifts: Pool,
    sampling_bound: SamplingBound,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfigBuilder::new().build()
    }
}

impl GeneratorConfig {
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn record_count(&self) -> usize {
        self.record_count
    }

    pub fn weekdays(&self) -> &Pool {
        &self.weekdays
    }

    pub fn shifts(&self) -> &Pool {
        &self.shifts
    }

    pub fn sampling_bound(&self) -> SamplingBound {
        self.sampling_bound
    }
}

/// Builder for [`GeneratorConfig`], starting from the default constants.
///
/// ```
/// use shift_fixtures::config::GeneratorConfigBuilder;
///
/// let config = GeneratorConfigBuilder::new()
///     .record_count(10)
///     .output_path("/tmp/fixtures.csv")
///     .build();
///
/// assert_eq!(config.record_count(), 10);
/// assert_eq!(config.shifts().len(), 3);
/// ```
pub struct GeneratorConfigBuilder {
    input_path: PathBuf,
    output_path: PathBuf,
    record_count: usize,
    weekdays: Vec<String>,
    shifts: Vec<String>,
    sampling_bound: SamplingBound,
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfigBuilder {
    pub fn new() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            record_count: DEFAULT_RECORD_COUNT,
            weekdays: WEEKDAYS.iter().map(|d| d.to_string()).collect(),
            shifts: SHIFTS.iter().map(|s| s.to_string()).collect(),
            sampling_bound: SamplingBound::default(),
        }
    }

    pub fn input_path(mut self, path: impl AsRef<Path>) -> GeneratorConfigBuilder {
        self.input_path = path.as_ref().to_path_buf();
        self
    }

    pub fn output_path(mut self, path: impl AsRef<Path>) -> GeneratorConfigBuilder {
        self.output_path = path.as_ref().to_path_buf();
        self
    }

    pub fn record_count(mut self, record_count: usize) -> GeneratorConfigBuilder {
        self.record_count = record_count;
        self
    }

    pub fn weekdays<S: Into<String>>(mut self, weekdays: impl IntoIterator<Item = S>) -> GeneratorConfigBuilder {
        self.weekdays = weekdays.into_iter().map(Into::into).collect();
        self
    }

    pub fn shifts<S: Into<String>>(mut self, shifts: impl IntoIterator<Item = S>) -> GeneratorConfigBuilder {
        self.shifts = shifts.into_iter().map(Into::into).collect();
        self
    }

    pub fn sampling_bound(mut self, bound: SamplingBound) -> GeneratorConfigBuilder {
        self.sampling_bound = bound;
        self
    }

    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            input_path: self.input_path,
            output_path: self.output_path,
            record_count: self.record_count,
            weekdays: Pool::new("weekdays", self.weekdays),
            shifts: Pool::new("shifts", self.shifts),
            sampling_bound: self.sampling_bound,
        }
    }
}
