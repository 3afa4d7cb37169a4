use std::{fs, path::Path};

use log::debug;

use crate::error::FixtureError;

use super::random::IndexSource;

/// Shift labels: night, day, evening.
pub const SHIFTS: [&str; 3] = ["nat", "dag", "aften"];

/// Weekday labels, Monday first.
pub const WEEKDAYS: [&str; 7] = [
    "mandag", "tirsdag", "onsdag", "torsdag", "fredag", "lørdag", "søndag",
];

/// Which indices `sample_uniform` may draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SamplingBound {
    /// Every entry is reachable: `[0, len)`.
    #[default]
    Full,
    /// The last entry is never drawn: `[0, len - 1)`. Matches fixtures produced
    /// by the earlier generator script; a single-entry pool has nothing to draw.
    ExcludeLast,
}

impl SamplingBound {
    fn upper(self, len: usize) -> usize {
        match self {
            SamplingBound::Full => len,
            SamplingBound::ExcludeLast => len.saturating_sub(1),
        }
    }
}

/// Named, read-only list of entries to sample from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    label: String,
    entries: Vec<String>,
}

impl Pool {
    pub fn new<S: Into<String>>(label: impl Into<String>, entries: impl IntoIterator<Item = S>) -> Self {
        Self {
            label: label.into(),
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Name pool built from already loaded entries.
    pub fn names<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Self {
        Self::new("names", entries)
    }

    pub fn weekdays() -> Self {
        Self::new("weekdays", WEEKDAYS)
    }

    pub fn shifts() -> Self {
        Self::new("shifts", SHIFTS)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.iter().any(|e| e == entry)
    }

    /// Fails with `EmptyPool` when `bound` leaves no entry to draw.
    pub fn ensure_sampleable(&self, bound: SamplingBound) -> Result<(), FixtureError> {
        if bound.upper(self.len()) == 0 {
            return Err(FixtureError::EmptyPool {
                pool: self.label.clone(),
            });
        }
        Ok(())
    }
}

/// Loads the name pool from a text file.
///
/// The file is split on `\r\n`, `\n` and `\r`; zero-length lines are dropped and
/// the remaining ones trimmed. Bytes that are not valid UTF-8 are replaced
/// rather than rejected. The returned pool may be empty.
pub fn load_name_pool<P: AsRef<Path>>(path: P) -> Result<Pool, FixtureError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|err| FixtureError::load(path.display(), err))?;
    let contents = String::from_utf8_lossy(&bytes);

    let pool = Pool::names(parse_names(&contents));
    debug!("Loaded {} names from {}", pool.len(), path.display());
    Ok(pool)
}

fn parse_names(contents: &str) -> Vec<&str> {
    contents
        .split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .map(str::trim)
        .collect()
}

/// Picks one entry of `pool` using an index drawn from `source`.
///
/// Fails with `EmptyPool` if `bound` leaves nothing to draw, and with
/// `IndexOutOfRange` if `source` ignores the requested bound.
pub fn sample_uniform<'a>(
    pool: &'a Pool,
    source: &dyn IndexSource,
    bound: SamplingBound,
) -> Result<&'a str, FixtureError> {
    pool.ensure_sampleable(bound)?;

    let upper = bound.upper(pool.len());
    let index = source.next_index(upper);
    if index >= upper {
        return Err(FixtureError::IndexOutOfRange {
            pool: pool.label.clone(),
            index,
            len: pool.len(),
        });
    }

    Ok(&pool.entries[index])
}
