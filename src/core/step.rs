use std::{
    cell::{Cell, RefCell},
    time::{Duration, Instant},
};

use log::{debug, error, info};
use uuid::Uuid;

use crate::error::FixtureError;

use super::{
    build_name,
    item::{ItemProcessor, ItemReader, ItemWriter},
};

/// Status of a step execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The step has been built but not executed yet.
    Starting,
    /// The reader failed before every item was read.
    ReadError,
    /// The processor failed on an item.
    ProcessorError,
    /// The writer failed to open, write, flush or close.
    WriteError,
    /// Every item was read, processed and written.
    Success,
}

/// Snapshot of a step run.
#[derive(Debug, Clone)]
pub struct StepExecution {
    /// Unique identifier for this step instance
    pub id: Uuid,
    /// Human-readable name for the step
    pub name: String,
    pub status: StepStatus,
    pub start_time: Instant,
    pub end_time: Instant,
    pub duration: Duration,
    /// Number of items successfully read
    pub read_count: usize,
    /// Number of items successfully processed
    pub process_count: usize,
    /// Number of items successfully written
    pub write_count: usize,
}

/// A unit of work in a job.
pub trait Step {
    /// Runs the step and returns its execution summary, or the first error hit.
    fn execute(&self) -> Result<StepExecution, FixtureError>;

    fn get_name(&self) -> &str;
}

/// Step that reads every item, processes every item, then writes them all at once.
///
/// Nothing reaches the writer until the reader is exhausted, so a failing
/// reader or processor leaves the destination untouched.
pub struct StepInstance<'a, I, O> {
    id: Uuid,
    name: String,
    reader: &'a dyn ItemReader<I>,
    processor: &'a dyn ItemProcessor<I, O>,
    writer: &'a dyn ItemWriter<O>,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    process_count: Cell<usize>,
    write_count: Cell<usize>,
    last_execution: RefCell<Option<StepExecution>>,
}

impl<I, O> Step for StepInstance<'_, I, O> {
    fn execute(&self) -> Result<StepExecution, FixtureError> {
        let start_time = Instant::now();
        self.reset();

        info!("Start of step: {}, id: {}", self.name, self.id);

        let result = self
            .read_all()
            .and_then(|items| self.process_all(&items))
            .and_then(|items| self.write_all(&items));

        if result.is_ok() {
            self.status.set(StepStatus::Success);
        }

        let execution = StepExecution {
            id: self.id,
            name: self.name.clone(),
            status: self.status.get(),
            start_time,
            end_time: Instant::now(),
            duration: start_time.elapsed(),
            read_count: self.read_count.get(),
            process_count: self.process_count.get(),
            write_count: self.write_count.get(),
        };
        *self.last_execution.borrow_mut() = Some(execution.clone());

        match result {
            Ok(()) => {
                info!(
                    "End of step: {}, id: {}, written: {}",
                    self.name, self.id, execution.write_count
                );
                Ok(execution)
            }
            Err(err) => {
                error!("Step {} failed ({:?}): {}", self.name, execution.status, err);
                Err(err)
            }
        }
    }

    fn get_name(&self) -> &str {
        &self.name
    }
}

impl<I, O> StepInstance<'_, I, O> {
    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    pub fn get_read_count(&self) -> usize {
        self.read_count.get()
    }

    pub fn get_process_count(&self) -> usize {
        self.process_count.get()
    }

    pub fn get_write_count(&self) -> usize {
        self.write_count.get()
    }

    /// Returns the summary of the most recent run, if any.
    pub fn last_execution(&self) -> Option<StepExecution> {
        self.last_execution.borrow().clone()
    }

    fn reset(&self) {
        self.status.set(StepStatus::Starting);
        self.read_count.set(0);
        self.process_count.set(0);
        self.write_count.set(0);
    }

    fn read_all(&self) -> Result<Vec<I>, FixtureError> {
        debug!("Start reading items");
        let mut items = Vec::new();

        loop {
            match self.reader.read() {
                Ok(Some(item)) => {
                    items.push(item);
                    self.read_count.set(self.read_count.get() + 1);
                }
                Ok(None) => break,
                Err(err) => {
                    self.status.set(StepStatus::ReadError);
                    return Err(err);
                }
            }
        }

        debug!("End reading items: {}", items.len());
        Ok(items)
    }

    fn process_all(&self, items: &[I]) -> Result<Vec<O>, FixtureError> {
        debug!("Start processing items");
        let mut processed = Vec::with_capacity(items.len());

        for item in items {
            match self.processor.process(item) {
                Ok(out) => {
                    processed.push(out);
                    self.process_count.set(self.process_count.get() + 1);
                }
                Err(err) => {
                    self.status.set(StepStatus::ProcessorError);
                    return Err(err);
                }
            }
        }

        debug!("End processing items");
        Ok(processed)
    }

    fn write_all(&self, items: &[O]) -> Result<(), FixtureError> {
        debug!("Start writing items");

        let result = self
            .writer
            .open()
            .and_then(|()| self.writer.write(items))
            .and_then(|()| self.writer.flush());

        // close even after a failed write so the destination is released
        let closed = self.writer.close();

        match result.and(closed) {
            Ok(()) => {
                self.write_count.set(items.len());
                debug!("End writing items");
                Ok(())
            }
            Err(err) => {
                self.status.set(StepStatus::WriteError);
                Err(err)
            }
        }
    }
}

/// Builder for [`StepInstance`].
pub struct StepBuilder<'a, I, O> {
    name: Option<String>,
    reader: Option<&'a dyn ItemReader<I>>,
    processor: Option<&'a dyn ItemProcessor<I, O>>,
    writer: Option<&'a dyn ItemWriter<O>>,
}

impl<I, O> Default for StepBuilder<'_, I, O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, I, O> StepBuilder<'a, I, O> {
    pub fn new() -> StepBuilder<'a, I, O> {
        Self {
            name: None,
            reader: None,
            processor: None,
            writer: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> StepBuilder<'a, I, O> {
        self.name = Some(name.into());
        self
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<I>) -> StepBuilder<'a, I, O> {
        self.reader = Some(reader);
        self
    }

    pub fn processor(mut self, processor: &'a impl ItemProcessor<I, O>) -> StepBuilder<'a, I, O> {
        self.processor = Some(processor);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<O>) -> StepBuilder<'a, I, O> {
        self.writer = Some(writer);
        self
    }

    /// Builds the step.
    ///
    /// # Panics
    ///
    /// Panics if the reader, processor or writer was not set.
    pub fn build(self) -> StepInstance<'a, I, O> {
        StepInstance {
            id: Uuid::new_v4(),
            name: self.name.unwrap_or_else(build_name),
            reader: self.reader.expect("Reader is required for building a step"),
            processor: self
                .processor
                .expect("Processor is required for building a step"),
            writer: self.writer.expect("Writer is required for building a step"),
            status: Cell::new(StepStatus::Starting),
            read_count: Cell::new(0),
            process_count: Cell::new(0),
            write_count: Cell::new(0),
            last_execution: RefCell::new(None),
        }
    }
}
