use crate::error::FixtureError;

/// Result of a single read: `Ok(None)` once the reader is exhausted.
pub type ItemReaderResult<I> = Result<Option<I>, FixtureError>;

/// Result of processing a single item.
pub type ItemProcessorResult<O> = Result<O, FixtureError>;

/// Result of a writer operation.
pub type ItemWriterResult = Result<(), FixtureError>;

/// Produces items one at a time until it returns `Ok(None)`.
pub trait ItemReader<I> {
    fn read(&self) -> ItemReaderResult<I>;
}

/// Turns a read item into the item handed to the writer.
pub trait ItemProcessor<I, O> {
    fn process(&self, item: &I) -> ItemProcessorResult<O>;
}

/// Persists processed items.
///
/// A step calls `open`, then `write` with every processed item, then `flush`
/// and `close`. Only `write` is mandatory.
pub trait ItemWriter<O> {
    fn write(&self, items: &[O]) -> ItemWriterResult;

    fn flush(&self) -> ItemWriterResult {
        Ok(())
    }

    fn open(&self) -> ItemWriterResult {
        Ok(())
    }

    fn close(&self) -> ItemWriterResult {
        Ok(())
    }
}

/// Passes items through unchanged.
#[derive(Default)]
pub struct PassThroughProcessor;

impl<I: Clone> ItemProcessor<I, I> for PassThroughProcessor {
    fn process(&self, item: &I) -> ItemProcessorResult<I> {
        Ok(item.clone())
    }
}
