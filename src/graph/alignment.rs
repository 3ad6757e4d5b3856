//! Alignment file reader.
//!
//! One line per left record: `<left> <right_1> <right_2> ...`, integers
//! separated by whitespace. A line with only the left index declares no
//! edges. Blank lines are skipped; anything else that does not parse is a
//! load error naming the file and line.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use crate::error::{LangmedError, Result};

/// One parsed alignment line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlignmentRow {
    /// 1-based line number in the file.
    pub line: usize,
    pub left: usize,
    pub rights: Vec<usize>,
}

/// Streaming reader over the rows of an alignment file.
pub struct AlignmentReader<R> {
    path: PathBuf,
    lines: Lines<R>,
    line: usize,
}

impl AlignmentReader<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| LangmedError::load(format!("{}: {e}", path.display())))?;
        Ok(Self::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> AlignmentReader<R> {
    /// Read rows from any buffered reader; `path` is used in diagnostics.
    pub fn new<P: AsRef<Path>>(path: P, reader: R) -> Self {
        AlignmentReader {
            path: path.as_ref().to_path_buf(),
            lines: reader.lines(),
            line: 0,
        }
    }

    fn parse(&self, text: &str) -> Result<Option<AlignmentRow>> {
        let mut fields = text.split_whitespace();
        let Some(first) = fields.next() else {
            return Ok(None);
        };

        let parse_index = |field: &str| {
            field.parse::<usize>().map_err(|_| {
                LangmedError::load_at(&self.path, self.line, format!("invalid index {field:?}"))
            })
        };

        let left = parse_index(first)?;
        let rights = fields.map(parse_index).collect::<Result<Vec<_>>>()?;
        Ok(Some(AlignmentRow {
            line: self.line,
            left,
            rights,
        }))
    }
}

impl<R: BufRead> Iterator for AlignmentReader<R> {
    type Item = Result<AlignmentRow>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = self.lines.next()?;
            self.line += 1;

            let text = match text {
                Ok(text) => text,
                Err(e) => return Some(Err(LangmedError::load_at(&self.path, self.line, e))),
            };
            match self.parse(&text) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
