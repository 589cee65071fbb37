//! Flat-file store for user records.
//!
//! ## Whole-Collection Rewrite
//!
//! The backing file is the only state. Every operation reads the complete
//! file, and every mutation writes the complete collection back (header plus
//! one encoded line per record). Nothing is cached between calls, so two
//! stores pointed at the same path always agree with the file.
//!
//! **There is no locking.** Two writers racing on the same path can lose each
//! other's changes; the store assumes a single writer at a time.
//!
//! Lines that do not decode into a full record are skipped on read. They are
//! then gone after the next write. [`FlatFileStore::read_all_with_report`]
//! counts them for callers that want to notice.

use crate::{ReadReport, Result as StoreErrorResult, StoreError};

use pc_core::{SearchField, UserRecord, codec};

use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use log::{debug, warn};

const TEMP_SUFFIX: &str = ".tmp";

/// CSV-backed collection of [`UserRecord`]s at a fixed path
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and a header-only file when missing.
    ///
    /// Safe to call before every operation.
    pub fn ensure_initialized(&self) -> StoreErrorResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
            && !dir.exists()
        {
            fs::create_dir_all(dir).map_err(|e| io_error("create directory", dir, e))?;
        }

        if !self.path.exists() {
            fs::write(&self.path, format!("{}\n", codec::header_line()))
                .map_err(|e| io_error("initialize", &self.path, e))?;
            debug!("Initialized user store at {}", self.path.display());
        }

        Ok(())
    }

    /// Every decodable record, in file order
    pub fn read_all(&self) -> StoreErrorResult<Vec<UserRecord>> {
        Ok(self.read_all_with_report()?.records)
    }

    /// Like [`read_all`](Self::read_all), also counting malformed lines
    pub fn read_all_with_report(&self) -> StoreErrorResult<ReadReport> {
        self.ensure_initialized()?;

        let content =
            fs::read_to_string(&self.path).map_err(|e| io_error("read", &self.path, e))?;

        let mut report = ReadReport::default();
        for line in codec::record_lines(&content).into_iter().skip(1) {
            match codec::decode(line) {
                Some(record) => report.records.push(record),
                None if line.trim().is_empty() => {}
                None => report.dropped_lines += 1,
            }
        }

        if report.dropped_lines > 0 {
            warn!(
                "Skipped {} malformed line(s) in {}",
                report.dropped_lines,
                self.path.display()
            );
        }

        Ok(report)
    }

    /// Replace the whole file with `records`.
    ///
    /// Content goes to a sibling temp file first and is renamed over the
    /// backing file, so readers see either the old or the new collection.
    pub fn write_all(&self, records: &[UserRecord]) -> StoreErrorResult<()> {
        self.ensure_initialized()?;

        let mut content = String::from(codec::header_line());
        content.push('\n');
        for record in records {
            content.push_str(&codec::encode(record));
            content.push('\n');
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content).map_err(|e| io_error("write", &temp_path, e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(io_error("replace", &self.path, e));
        }

        debug!("Wrote {} record(s) to {}", records.len(), self.path.display());
        Ok(())
    }

    /// Append one record. Ids are not checked for duplicates.
    pub fn add(&self, record: UserRecord) -> StoreErrorResult<()> {
        self.add_many([record])
    }

    /// Append records in the given order. Ids are not checked for duplicates.
    pub fn add_many<I>(&self, records: I) -> StoreErrorResult<()>
    where
        I: IntoIterator<Item = UserRecord>,
    {
        let mut all = self.read_all()?;
        all.extend(records);
        self.write_all(&all)
    }

    /// Replace the first record whose id equals `id`, keeping its position.
    ///
    /// Returns `false` without writing when no record has that id.
    pub fn update_by_id(&self, id: &str, record: UserRecord) -> StoreErrorResult<bool> {
        let mut all = self.read_all()?;

        let Some(slot) = all.iter_mut().find(|existing| existing.id == id) else {
            return Ok(false);
        };
        *slot = record;

        self.write_all(&all)?;
        Ok(true)
    }

    /// Remove every record whose id equals `id`.
    ///
    /// Returns `false` without writing when nothing matched.
    pub fn delete_by_id(&self, id: &str) -> StoreErrorResult<bool> {
        let mut all = self.read_all()?;
        let before = all.len();

        all.retain(|existing| existing.id != id);
        if all.len() == before {
            return Ok(false);
        }

        self.write_all(&all)?;
        Ok(true)
    }

    /// First record whose id equals `id`
    pub fn find_by_id(&self, id: &str) -> StoreErrorResult<Option<UserRecord>> {
        Ok(self.read_all()?.into_iter().find(|record| record.id == id))
    }

    /// Records where any of `fields` contains `term`, ignoring case
    pub fn search(&self, term: &str, fields: &[SearchField]) -> StoreErrorResult<Vec<UserRecord>> {
        Ok(self
            .read_all()?
            .into_iter()
            .filter(|record| record.matches(term, fields))
            .collect())
    }

    /// [`search`](Self::search) over first name, last name, email and city
    pub fn search_default(&self, term: &str) -> StoreErrorResult<Vec<UserRecord>> {
        self.search(term, &SearchField::DEFAULTS)
    }

    pub fn count(&self) -> StoreErrorResult<usize> {
        Ok(self.read_all()?.len())
    }

    pub(crate) fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_default();
        name.push(TEMP_SUFFIX);
        self.path.with_file_name(name)
    }
}

#[track_caller]
fn io_error(action: &'static str, path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        action,
        path: path.to_path_buf(),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}
