use std::{
    cell::RefCell,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use log::debug;

use crate::{
    core::item::{ItemWriter, ItemWriterResult},
    error::FixtureError,
};

/// Writes already formatted lines, in order, with no separator added.
///
/// A writer built with [`LineItemWriterBuilder::from_path`] creates (or
/// truncates) its file in `open`, so building it has no effect on disk.
pub struct LineItemWriter<W: Write> {
    target: String,
    path: Option<PathBuf>,
    stream: RefCell<Option<BufWriter<W>>>,
}

impl<W: Write> LineItemWriter<W> {
    fn with_stream<F>(&self, op: F) -> ItemWriterResult
    where
        F: FnOnce(&mut BufWriter<W>) -> io::Result<()>,
    {
        let mut stream = self.stream.borrow_mut();
        match stream.as_mut() {
            Some(stream) => op(stream).map_err(|err| FixtureError::write(&self.target, err)),
            None => Err(FixtureError::write(
                &self.target,
                io::Error::other("writer is not open"),
            )),
        }
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(self) -> Result<W, FixtureError> {
        let target = self.target;
        match self.stream.into_inner() {
            Some(stream) => stream
                .into_inner()
                .map_err(|err| FixtureError::write(&target, err.into_error())),
            None => Err(FixtureError::write(
                &target,
                io::Error::other("writer is closed"),
            )),
        }
    }
}

impl LineItemWriter<File> {
    fn open_file(&self, path: &Path) -> ItemWriterResult {
        let file = File::create(path).map_err(|err| FixtureError::write(&self.target, err))?;
        *self.stream.borrow_mut() = Some(BufWriter::new(file));
        debug!("Opened {} for writing", self.target);
        Ok(())
    }
}

impl ItemWriter<String> for LineItemWriter<File> {
    fn write(&self, items: &[String]) -> ItemWriterResult {
        write_lines(self, items)
    }

    fn flush(&self) -> ItemWriterResult {
        self.with_stream(|stream| stream.flush())
    }

    fn open(&self) -> ItemWriterResult {
        match &self.path {
            Some(path) => self.open_file(path),
            None => Ok(()),
        }
    }

    fn close(&self) -> ItemWriterResult {
        let Some(mut stream) = self.stream.borrow_mut().take() else {
            return Ok(());
        };
        stream
            .flush()
            .map_err(|err| FixtureError::write(&self.target, err))
    }
}

/// Writer over an arbitrary stream, owned by the caller through `into_inner`.
pub struct StreamLineWriter<W: Write>(LineItemWriter<W>);

impl<W: Write> StreamLineWriter<W> {
    pub fn into_inner(self) -> Result<W, FixtureError> {
        self.0.into_inner()
    }
}

impl<W: Write> ItemWriter<String> for StreamLineWriter<W> {
    fn write(&self, items: &[String]) -> ItemWriterResult {
        write_lines(&self.0, items)
    }

    fn flush(&self) -> ItemWriterResult {
        self.0.with_stream(|stream| stream.flush())
    }

    fn close(&self) -> ItemWriterResult {
        self.flush()
    }
}

fn write_lines<W: Write>(writer: &LineItemWriter<W>, items: &[String]) -> ItemWriterResult {
    writer.with_stream(|stream| {
        for line in items {
            stream.write_all(line.as_bytes())?;
        }
        Ok(())
    })
}

#[derive(Default)]
pub struct LineItemWriterBuilder {}

impl LineItemWriterBuilder {
    pub fn new() -> LineItemWriterBuilder {
        LineItemWriterBuilder {}
    }

    /// Writer targeting `path`; the file is truncated when the writer is opened.
    pub fn from_path<P: AsRef<Path>>(self, path: P) -> LineItemWriter<File> {
        let path = path.as_ref().to_path_buf();
        LineItemWriter {
            target: path.display().to_string(),
            path: Some(path),
            stream: RefCell::new(None),
        }
    }

    /// Writer over any `io::Write`, usable without `open`.
    ///
    /// ```
    /// use shift_fixtures::core::item::ItemWriter;
    /// use shift_fixtures::item::line::LineItemWriterBuilder;
    ///
    /// let writer = LineItemWriterBuilder::new().from_writer(vec![]);
    /// writer.write(&["Alice, mandag, nat, 0\n".to_string()]).unwrap();
    ///
    /// let data = String::from_utf8(writer.into_inner().unwrap()).unwrap();
    /// assert_eq!(data, "Alice, mandag, nat, 0\n");
    /// ```
    pub fn from_writer<W: Write>(self, wtr: W) -> StreamLineWriter<W> {
        StreamLineWriter(LineItemWriter {
            target: "stream".to_string(),
            path: None,
            stream: RefCell::new(Some(BufWriter::new(wtr))),
        })
    }
}

/// Writes `lines` as the full content of `path`, replacing whatever was there.
pub fn write_output<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), FixtureError> {
    let writer = LineItemWriterBuilder::new().from_path(path);
    writer.open()?;
    let result = writer.write(lines).and_then(|()| writer.flush());
    let closed = writer.close();
    result.and(closed)
}
