//! Delimited-rows vocabulary source.
//!
//! Each row carries an identifier and a canonical name in fixed columns, for
//! example a DrugBank vocabulary export:
//! ```csv
//! DrugBank ID,Accession Numbers,Common name,CAS,UNII,Synonyms,Standard InChI Key
//! DB00001,BIOD00024 | BTD00024,Lepirudin,138068-37-8,Y43GF64R34,Hirudin variant-1,
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::error::{LangmedError, Result};
use crate::vocabulary::source::{SourceEntry, VocabularySource};

/// A vocabulary source reading delimited rows.
#[derive(Clone, Debug)]
pub struct CsvVocabularySource {
    path: PathBuf,
    /// Column holding the raw reference
    id_column: usize,
    /// Column holding the canonical name
    name_column: usize,
    /// Whether the first row is a header to skip
    has_headers: bool,
    delimiter: u8,
}

impl CsvVocabularySource {
    /// Create a source with an id in column 0, a name in column 2, a header
    /// row and comma delimiters.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        CsvVocabularySource {
            path: path.as_ref().to_path_buf(),
            id_column: 0,
            name_column: 2,
            has_headers: true,
            delimiter: b',',
        }
    }

    /// Set the id and name columns.
    pub fn with_columns(mut self, id_column: usize, name_column: usize) -> Self {
        self.id_column = id_column;
        self.name_column = name_column;
        self
    }

    /// Set whether the first row is a header.
    pub fn with_headers(mut self, has_headers: bool) -> Self {
        self.has_headers = has_headers;
        self
    }

    /// Set a custom delimiter character.
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl VocabularySource for CsvVocabularySource {
    fn read_entries(&self) -> Result<Vec<SourceEntry>> {
        let file = File::open(&self.path)
            .map_err(|e| LangmedError::load(format!("{}: {e}", self.path.display())))?;
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(self.has_headers)
            .flexible(true)
            .from_reader(file);

        let mut entries = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| {
                let line = e.position().map(|p| p.line() as usize).unwrap_or(0);
                LangmedError::load_at(&self.path, line, e)
            })?;
            let line = record.position().map(|p| p.line() as usize).unwrap_or(0);

            let field = |column: usize| {
                record.get(column).ok_or_else(|| {
                    LangmedError::load_at(
                        &self.path,
                        line,
                        format!("row has {} fields, column {column} is missing", record.len()),
                    )
                })
            };
            let reference = field(self.id_column)?;
            let name = field(self.name_column)?;
            entries.push(SourceEntry::new(name, reference));
        }

        Ok(entries)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
