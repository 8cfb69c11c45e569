use super::FeedbackStore;
use crate::Result;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

// Append-only line store, one email:feedback entry per line. The file is
// created on the first append and scanned in full on every lookup.
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FlatFileStore { path: path.into() }
    }
}

impl FeedbackStore for FlatFileStore {
    fn find(&self, email: &str) -> Result<Option<String>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let file = File::open(&self.path)?;
        for line in BufReader::new(file).lines() {
            let line = line?;
            let fields: Vec<&str> = line.split(':').collect();
            // Tolerate lines that don't follow the email:feedback format
            if fields.len() != 2 {
                continue;
            }
            if fields[0] == email {
                return Ok(Some(fields[1].to_string()));
            }
        }
        Ok(None)
    }

    fn append(&self, email: &str, feedback: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{email}:{feedback}")?;
        Ok(())
    }
}
