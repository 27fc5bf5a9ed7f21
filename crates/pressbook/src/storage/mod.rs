//! Storage layer for pressbook.
//!
//! Each record type lives in its own flat CSV file inside the data directory.
//! A [`Table`] is the full in-memory contents of one such file: it is read in
//! full, appended to, and rewritten in full.
//!
//! There is no locking. Two processes appending to the same store at once
//! will lose whichever update is rewritten first.

pub mod schema;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::record::Record;

/// The rows of one backing store, in append order.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<R> {
    /// Path to the backing store.
    path: PathBuf,
    /// Rows as read from the store, plus any appended since.
    rows: Vec<R>,
}

impl<R: Record> Table<R> {
    /// Load the store for `R` from `dir`, creating it if it doesn't exist.
    ///
    /// A new store gets the header row and no data rows. An existing store is
    /// returned verbatim; its header must equal [`Record::COLUMNS`] exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created, the file
    /// cannot be parsed, or the stored header differs from the expected one.
    pub fn load_or_init(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let path = Self::path_in(dir);

        if path.exists() {
            let rows = read_rows::<R>(&path)?;
            return Ok(Self { path, rows });
        }

        if !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|source| Error::DirectoryCreate {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let table = Self {
            path,
            rows: Vec::new(),
        };
        table.save()?;
        info!(
            "Created empty {} store at {}",
            R::LABEL,
            table.path.display()
        );
        Ok(table)
    }

    /// Where the store for `R` lives inside `dir`.
    #[must_use]
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(R::FILE_NAME)
    }

    /// Get the path to the backing store.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The rows, in append order.
    #[must_use]
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of data rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no data rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The most recently appended row.
    #[must_use]
    pub fn last(&self) -> Option<&R> {
        self.rows.last()
    }

    /// Append a row in memory. Call [`Table::save`] to persist it.
    pub fn append(&mut self, row: R) {
        self.rows.push(row);
    }

    /// Append a row and rewrite the backing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written. The row stays in
    /// memory but is lost on the next load.
    pub fn append_and_save(&mut self, row: R) -> Result<()> {
        self.append(row);
        self.save()?;
        info!(
            "Appended row {} to {} store",
            self.rows.len(),
            R::LABEL
        );
        Ok(())
    }

    /// Rewrite the backing store with the header row and every row.
    ///
    /// The contents are written to a sibling temporary file first and then
    /// renamed over the store, so a failed write leaves the old contents.
    /// The temporary file is removed if any step fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be written or renamed.
    pub fn save(&self) -> Result<()> {
        let tmp_path = self.path.with_extension("csv.tmp");
        debug!(
            "Writing {} rows to {}",
            self.rows.len(),
            self.path.display()
        );

        let result = self
            .write_to(&tmp_path)
            .and_then(|()| std::fs::rename(&tmp_path, &self.path).map_err(Error::from));
        if result.is_err() && tmp_path.exists() {
            if let Err(err) = std::fs::remove_file(&tmp_path) {
                warn!("Failed to remove {}: {err}", tmp_path.display());
            }
        }
        result
    }

    /// Write the header row and every row to `path`.
    fn write_to(&self, path: &Path) -> Result<()> {
        let write_err = |source| Error::CsvWrite {
            path: self.path.clone(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(write_err)?;
        writer.write_record(R::COLUMNS).map_err(write_err)?;
        for row in &self.rows {
            writer.serialize(row).map_err(write_err)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Read a store for `R`, checking its header row.
fn read_rows<R: Record>(path: &Path) -> Result<Vec<R>> {
    debug!("Opening {} store at {}", R::LABEL, path.display());

    let read_err = |source| Error::CsvRead {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_err)?;

    let headers = reader.headers().map_err(read_err)?;
    if !headers.iter().eq(R::COLUMNS.iter().copied()) {
        return Err(Error::SchemaMismatch {
            path: path.to_path_buf(),
            expected: R::COLUMNS.iter().map(ToString::to_string).collect(),
            found: headers.iter().map(ToString::to_string).collect(),
        });
    }

    let rows = reader
        .deserialize::<R>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(read_err)?;

    debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Statistics about one backing store.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct StoreStats {
    /// Table name.
    pub label: &'static str,
    /// Path to the backing store.
    pub path: PathBuf,
    /// Whether the store has been created yet.
    pub exists: bool,
    /// Number of data rows (zero for a store that doesn't exist yet).
    pub rows: usize,
}

impl StoreStats {
    /// Inspect the store for `R` in `dir` without creating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be parsed.
    pub fn collect<R: Record>(dir: &Path) -> Result<Self> {
        let path = Table::<R>::path_in(dir);
        let exists = path.exists();
        let rows = if exists { read_rows::<R>(&path)?.len() } else { 0 };
        Ok(Self {
            label: R::LABEL,
            path,
            exists,
            rows,
        })
    }
}
