//! Shift-record generation: name and vocabulary pools, the random source, the
//! record type and the reader that samples records.

pub mod pool;

pub mod random;

pub mod reader;

pub mod record;

pub use pool::{Pool, SHIFTS, SamplingBound, WEEKDAYS, load_name_pool, sample_uniform};
pub use random::{IndexSource, SeededIndexSource, ThreadIndexSource};
pub use reader::{RecordReader, RecordReaderBuilder, generate_records};
pub use record::{RecordLineProcessor, ShiftRecord, serialize};
