use std::cell::Cell;

use log::debug;

use crate::{
    core::item::{ItemReader, ItemReaderResult},
    error::FixtureError,
};

use super::{
    pool::{Pool, SamplingBound, sample_uniform},
    random::{IndexSource, ThreadIndexSource},
    record::ShiftRecord,
};

/// Reader yielding `number_of_items` freshly sampled records, then `None`.
///
/// Sequence numbers start at 0 and grow by one per record read.
pub struct RecordReader<'a> {
    names: &'a Pool,
    weekdays: &'a Pool,
    shifts: &'a Pool,
    source: &'a dyn IndexSource,
    bound: SamplingBound,
    remaining: Cell<usize>,
    sequence: Cell<u64>,
}

impl RecordReader<'_> {
    pub fn remaining(&self) -> usize {
        self.remaining.get()
    }

    fn sample(&self, pool: &Pool) -> Result<String, FixtureError> {
        sample_uniform(pool, self.source, self.bound).map(str::to_owned)
    }
}

impl ItemReader<ShiftRecord> for RecordReader<'_> {
    fn read(&self) -> ItemReaderResult<ShiftRecord> {
        if self.remaining.get() == 0 {
            return Ok(None);
        }

        let record = ShiftRecord {
            name: self.sample(self.names)?,
            weekday: self.sample(self.weekdays)?,
            shift: self.sample(self.shifts)?,
            sequence_number: self.sequence.get(),
        };

        self.remaining.set(self.remaining.get() - 1);
        self.sequence.set(self.sequence.get() + 1);

        debug!("Record: {}", record);
        Ok(Some(record))
    }
}

pub struct RecordReaderBuilder<'a> {
    names: &'a Pool,
    weekdays: &'a Pool,
    shifts: &'a Pool,
    source: Option<&'a dyn IndexSource>,
    bound: SamplingBound,
    number_of_items: usize,
}

impl<'a> RecordReaderBuilder<'a> {
    pub fn new(names: &'a Pool, weekdays: &'a Pool, shifts: &'a Pool) -> RecordReaderBuilder<'a> {
        RecordReaderBuilder {
            names,
            weekdays,
            shifts,
            source: None,
            bound: SamplingBound::default(),
            number_of_items: 0,
        }
    }

    /// Random source to draw from; the thread-local generator when unset.
    pub fn source(mut self, source: &'a dyn IndexSource) -> RecordReaderBuilder<'a> {
        self.source = Some(source);
        self
    }

    pub fn sampling_bound(mut self, bound: SamplingBound) -> RecordReaderBuilder<'a> {
        self.bound = bound;
        self
    }

    pub fn number_of_items(mut self, number_of_items: usize) -> RecordReaderBuilder<'a> {
        self.number_of_items = number_of_items;
        self
    }

    pub fn build(self) -> RecordReader<'a> {
        RecordReader {
            names: self.names,
            weekdays: self.weekdays,
            shifts: self.shifts,
            source: self.source.unwrap_or(&ThreadIndexSource),
            bound: self.bound,
            remaining: Cell::new(self.number_of_items),
            sequence: Cell::new(0),
        }
    }
}

/// Produces exactly `count` records with sequence numbers `0..count`.
///
/// Every pool is checked up front, so an unusable pool fails the call even
/// when `count` is zero.
pub fn generate_records(
    count: usize,
    names: &Pool,
    weekdays: &Pool,
    shifts: &Pool,
    source: &dyn IndexSource,
    bound: SamplingBound,
) -> Result<Vec<ShiftRecord>, FixtureError> {
    for pool in [names, weekdays, shifts] {
        pool.ensure_sampleable(bound)?;
    }

    let reader = RecordReaderBuilder::new(names, weekdays, shifts)
        .source(source)
        .sampling_bound(bound)
        .number_of_items(count)
        .build();

    std::iter::from_fn(|| reader.read().transpose()).collect()
}
