//! CSV stage writer: one output file per stage, header row from the
//! record struct's field names, progress logged at a fixed row interval.

use crate::error::{GenError, GenResult};
use serde::Serialize;
use std::fs::File;
use std::path::Path;

pub struct StageWriter {
    stage: &'static str,
    inner: csv::Writer<File>,
    rows: u64,
    progress_every: u64,
}

impl StageWriter {
    pub fn create(
        out_dir: &Path,
        file_name: &str,
        stage: &'static str,
        progress_every: u64,
    ) -> GenResult<Self> {
        let path = out_dir.join(file_name);
        let inner = csv::Writer::from_path(&path)
            .map_err(|source| GenError::OpenFile { stage, path, source })?;
        Ok(Self {
            stage,
            inner,
            rows: 0,
            progress_every,
        })
    }

    pub fn write<R: Serialize>(&mut self, row: &R) -> GenResult<()> {
        self.inner.serialize(row).map_err(|source| GenError::Write {
            stage: self.stage,
            source,
        })?;
        self.rows += 1;
        if self.progress_every > 0 && self.rows % self.progress_every == 0 {
            log::info!("[{}] generated {} rows...", self.stage, self.rows);
        }
        Ok(())
    }

    /// Flush and close the file. The stage must not return until this has run.
    pub fn finish(mut self) -> GenResult<u64> {
        self.inner.flush().map_err(|e| GenError::Write {
            stage: self.stage,
            source: csv::Error::from(e),
        })?;
        Ok(self.rows)
    }
}
