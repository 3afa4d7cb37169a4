use std::time::{Duration, Instant};

use log::{error, info};
use uuid::Uuid;

use crate::error::FixtureError;

use super::{
    build_name,
    step::{Step, StepExecution},
};

/// Type alias for job execution results.
type JobResult<T> = Result<T, FixtureError>;

/// Represents a job that can be executed.
///
/// A job is a container for a sequence of steps that are executed in order.
/// The first failing step aborts the job and its error is returned unchanged.
pub trait Job {
    /// Runs the job and returns the result of the job execution.
    fn run(&self) -> JobResult<JobExecution>;
}

/// Timing and per-step summaries of a job run.
#[derive(Debug)]
pub struct JobExecution {
    /// The time when the job started executing
    pub start: Instant,
    /// The time when the job finished executing
    pub end: Instant,
    /// The total duration of the job execution
    pub duration: Duration,
    /// One entry per step, in execution order
    pub steps: Vec<StepExecution>,
}

/// Represents an instance of a job.
pub struct JobInstance<'a> {
    /// Unique identifier for this job instance
    id: Uuid,
    /// Human-readable name for the job
    name: String,
    /// Collection of steps that make up this job, in execution order
    steps: Vec<&'a dyn Step>,
}

impl JobInstance<'_> {
    pub fn get_name(&self) -> &str {
        &self.name
    }
}

impl Job for JobInstance<'_> {
    fn run(&self) -> JobResult<JobExecution> {
        let start = Instant::now();

        info!("Start of job: {}, id: {}", self.name, self.id);

        let mut executions = Vec::with_capacity(self.steps.len());
        for step in &self.steps {
            match step.execute() {
                Ok(execution) => executions.push(execution),
                Err(err) => {
                    error!(
                        "Job {} aborted at step {}, id: {}",
                        self.name,
                        step.get_name(),
                        self.id
                    );
                    return Err(err);
                }
            }
        }

        info!("End of job: {}, id: {}", self.name, self.id);

        Ok(JobExecution {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            steps: executions,
        })
    }
}

/// Builder for creating a job instance.
///
/// ```
/// use shift_fixtures::core::job::JobBuilder;
///
/// let job = JobBuilder::new().name("empty-job").build();
/// assert_eq!(job.get_name(), "empty-job");
/// ```
#[derive(Default)]
pub struct JobBuilder<'a> {
    /// Optional name for the job (generated randomly if not specified)
    name: Option<String>,
    /// Collection of steps to be executed, in order
    steps: Vec<&'a dyn Step>,
}

impl<'a> JobBuilder<'a> {
    pub fn new() -> Self {
        Self {
            name: None,
            steps: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> JobBuilder<'a> {
        self.name = Some(name.into());
        self
    }

    /// Sets the first step of the job.
    ///
    /// Same as `next()`, reads better for the first step.
    pub fn start(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    /// Adds a step to the job. Steps are executed in the order they are added.
    pub fn next(mut self, step: &'a dyn Step) -> JobBuilder<'a> {
        self.steps.push(step);
        self
    }

    pub fn build(self) -> JobInstance<'a> {
        JobInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            steps: self.steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::time::Instant;

    use uuid::Uuid;

    use super::{Job, JobBuilder};
    use crate::{
        core::step::{Step, StepExecution, StepStatus},
        error::FixtureError,
    };

    struct FakeStep {
        name: &'static str,
        fail: bool,
        runs: Cell<usize>,
    }

    impl FakeStep {
        fn new(name: &'static str, fail: bool) -> Self {
            Self {
                name,
                fail,
                runs: Cell::new(0),
            }
        }
    }

    impl Step for FakeStep {
        fn execute(&self) -> Result<StepExecution, FixtureError> {
            self.runs.set(self.runs.get() + 1);
            if self.fail {
                return Err(FixtureError::EmptyPool {
                    pool: "shifts".to_string(),
                });
            }
            let now = Instant::now();
            Ok(StepExecution {
                id: Uuid::new_v4(),
                name: self.name.to_string(),
                status: StepStatus::Success,
                start_time: now,
                end_time: now,
                duration: now.elapsed(),
                read_count: 1,
                process_count: 1,
                write_count: 1,
            })
        }

        fn get_name(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn job_should_run_steps_in_order() {
        let first = FakeStep::new("first", false);
        let second = FakeStep::new("second", false);

        let job = JobBuilder::new().start(&first).next(&second).build();
        let execution = job.run().unwrap();

        let names: Vec<&str> = execution.steps.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
        assert_eq!(first.runs.get(), 1);
        assert_eq!(second.runs.get(), 1);
    }

    #[test]
    fn job_should_stop_at_first_failing_step() {
        let failing = FakeStep::new("failing", true);
        let skipped = FakeStep::new("skipped", false);

        let job = JobBuilder::new()
            .name("test")
            .start(&failing)
            .next(&skipped)
            .build();
        let result = job.run();

        assert!(matches!(result, Err(FixtureError::EmptyPool { ref pool }) if pool == "shifts"));
        assert_eq!(skipped.runs.get(), 0);
    }
}
