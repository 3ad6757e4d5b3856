//! One-entry-per-line vocabulary source.
//!
//! Every line is both the name and, unmodified apart from surrounding
//! whitespace, the raw reference. Blank lines are kept as entries so that
//! line numbers and record indices stay aligned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{LangmedError, Result};
use crate::vocabulary::source::{SourceEntry, VocabularySource};

/// A vocabulary source reading one raw line per record.
#[derive(Clone, Debug)]
pub struct LineVocabularySource {
    path: PathBuf,
}

impl LineVocabularySource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        LineVocabularySource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl VocabularySource for LineVocabularySource {
    fn read_entries(&self) -> Result<Vec<SourceEntry>> {
        let file = File::open(&self.path)
            .map_err(|e| LangmedError::load(format!("{}: {e}", self.path.display())))?;
        let reader = BufReader::new(file);

        let mut entries = Vec::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LangmedError::load_at(&self.path, line_num + 1, e))?;
            let raw = line.trim();
            entries.push(SourceEntry::new(raw, raw));
        }

        Ok(entries)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
