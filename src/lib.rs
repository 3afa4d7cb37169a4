/*!
 # shift-fixtures

 Generates synthetic shift-schedule fixture data. A list of names is read from
 a text file, then a fixed number of records is written, one per line:

 ```text
 <name>, <weekday>, <shift>, <sequence_number>
 ```

 Name, weekday and shift are sampled independently and uniformly for each
 record; the sequence number starts at 0 and grows by one per record.

 ## Core Concepts

- **Job:** the whole run. A `Job` is composed of one or more `Step`s.
- **Step:** reads every item, processes every item, then hands them to the writer at once.
- **ItemReader:** produces items; here `RecordReader` samples `ShiftRecord`s from the pools.
- **ItemProcessor:** turns one item into another; here `RecordLineProcessor` serializes a record.
- **ItemWriter:** persists the processed items; here `LineItemWriter` fills the output file.

 ## Getting Started

```rust
use shift_fixtures::{
    config::GeneratorConfigBuilder,
    generator::SeededIndexSource,
    pipeline,
};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let dir = std::env::temp_dir().join("shift-fixtures-doc");
std::fs::create_dir_all(&dir)?;
std::fs::write(dir.join("names.txt"), "Alice\r\nBob\r\n")?;

let config = GeneratorConfigBuilder::new()
    .input_path(dir.join("names.txt"))
    .output_path(dir.join("out.csv"))
    .record_count(5)
    .build();

let execution = pipeline::run(&config, &SeededIndexSource::new(1))?;
assert_eq!(execution.steps[0].write_count, 5);

let output = std::fs::read_to_string(dir.join("out.csv"))?;
assert!(output.ends_with(", 4\n"));
# Ok(())
# }
```
 */

/// Generation settings and their literal defaults
pub mod config;

/// Core module for batch operations
pub mod core;

/// Error types for fixture generation
pub mod error;

#[doc(inline)]
pub use error::*;

/// Pools, random sources, records and the record reader
pub mod generator;

/// Item writers
pub mod item;

/// The load, generate, serialize, write job
pub mod pipeline;
