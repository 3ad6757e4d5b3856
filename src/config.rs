//! Configuration of data files, languages and link templates.
//!
//! The configuration is a JSON document. Every field has a default matching
//! an English (DrugBank) / German (Gelbe Liste) deployment, so an empty
//! object `{}` is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use langmed::config::LangmedConfig;
//! use langmed::side::Side;
//!
//! let config: LangmedConfig = serde_json::from_str(r#"{
//!     "right": {
//!         "language": "French",
//!         "source": { "format": "lines", "path": "meds/fr_meds.txt" },
//!         "link_template": "https://example.org/medicaments/"
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(config.resolve_language("french").unwrap(), Side::Right);
//! assert_eq!(config.resolve_language("English").unwrap(), Side::Left);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::medicine::AnalysisOptions;
use crate::error::{LangmedError, Result};
use crate::link::LinkTemplates;
use crate::side::Side;
use crate::vocabulary::VocabularySource;
use crate::vocabulary::csv::CsvVocabularySource;
use crate::vocabulary::lines::LineVocabularySource;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LangmedConfig {
    /// Language 1, whose indices come first on alignment lines.
    pub left: SideConfig,
    /// Language 2.
    pub right: SideConfig,
    /// Alignment file: `<left> <right>...` per line.
    pub alignment: PathBuf,
}

impl Default for LangmedConfig {
    fn default() -> Self {
        LangmedConfig {
            left: SideConfig {
                language: "English".to_string(),
                source: SourceConfig::Csv {
                    path: PathBuf::from("drugbank_vocabulary.csv"),
                    id_column: 0,
                    name_column: 2,
                    has_headers: true,
                    delimiter: ',',
                },
                link_template: "https://www.drugbank.ca/drugs/".to_string(),
                strip_units: false,
                expected_records: None,
            },
            right: SideConfig {
                language: "German".to_string(),
                source: SourceConfig::Lines {
                    path: PathBuf::from("meds/de_meds.csv"),
                },
                link_template: "https://www.gelbe-liste.de/produkte/".to_string(),
                strip_units: false,
                expected_records: None,
            },
            alignment: PathBuf::from("matcher/graph.matched"),
        }
    }
}

/// Configuration of one vocabulary side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SideConfig {
    /// Language tag used to select this side as a translation target.
    pub language: String,
    pub source: SourceConfig,
    /// Prefix (or `{ref}` template) turning a raw reference into a URL.
    pub link_template: String,
    /// Drop numbers and unit words from record names.
    #[serde(default)]
    pub strip_units: bool,
    /// Declared number of records; loading fails if the source disagrees.
    #[serde(default)]
    pub expected_records: Option<usize>,
}

impl SideConfig {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            strip_units: self.strip_units,
        }
    }
}

/// Where and how a side's vocabulary is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum SourceConfig {
    /// Delimited rows with an id column and a name column.
    Csv {
        path: PathBuf,
        #[serde(default)]
        id_column: usize,
        #[serde(default = "default_name_column")]
        name_column: usize,
        #[serde(default = "default_has_headers")]
        has_headers: bool,
        #[serde(default = "default_delimiter")]
        delimiter: char,
    },
    /// One raw line per record.
    Lines { path: PathBuf },
}

fn default_name_column() -> usize {
    2
}

fn default_has_headers() -> bool {
    true
}

fn default_delimiter() -> char {
    ','
}

impl SourceConfig {
    pub fn path(&self) -> &Path {
        match self {
            SourceConfig::Csv { path, .. } | SourceConfig::Lines { path } => path,
        }
    }

    fn path_mut(&mut self) -> &mut PathBuf {
        match self {
            SourceConfig::Csv { path, .. } | SourceConfig::Lines { path } => path,
        }
    }

    /// Create the vocabulary source reader for this configuration.
    pub fn open(&self) -> Box<dyn VocabularySource> {
        match self {
            SourceConfig::Csv {
                path,
                id_column,
                name_column,
                has_headers,
                delimiter,
            } => Box::new(
                CsvVocabularySource::new(path)
                    .with_columns(*id_column, *name_column)
                    .with_headers(*has_headers)
                    .with_delimiter(*delimiter as u8),
            ),
            SourceConfig::Lines { path } => Box::new(LineVocabularySource::new(path)),
        }
    }
}

impl LangmedConfig {
    /// Read a configuration file; relative paths resolve against its directory.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LangmedError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        let mut config: LangmedConfig = serde_json::from_str(&content)?;

        if let Some(base) = path.parent() {
            config.resolve_paths(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Make every relative data path relative to `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };
        resolve(self.left.source.path_mut());
        resolve(self.right.source.path_mut());
        resolve(&mut self.alignment);
    }

    /// Check settings that do not depend on the data files.
    pub fn validate(&self) -> Result<()> {
        for side in Side::BOTH {
            let config = self.side(side);
            if config.language.trim().is_empty() {
                return Err(LangmedError::config(format!("{side} language tag is empty")));
            }
            if let SourceConfig::Csv {
                id_column,
                name_column,
                delimiter,
                ..
            } = &config.source
            {
                if !delimiter.is_ascii() {
                    return Err(LangmedError::config(format!(
                        "{side} delimiter {delimiter:?} is not an ASCII character"
                    )));
                }
                if id_column == name_column {
                    return Err(LangmedError::config(format!(
                        "{side} id and name share column {id_column}"
                    )));
                }
            }
        }

        if self.left.language.eq_ignore_ascii_case(&self.right.language) {
            return Err(LangmedError::config(format!(
                "both sides use the language tag {:?}",
                self.left.language
            )));
        }
        Ok(())
    }

    pub fn side(&self, side: Side) -> &SideConfig {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Map a language tag (or `left`/`right`) to its side, ignoring case.
    pub fn resolve_language(&self, tag: &str) -> Result<Side> {
        let tag = tag.trim();
        Side::BOTH
            .into_iter()
            .find(|&side| {
                self.side(side).language.eq_ignore_ascii_case(tag)
                    || side.name().eq_ignore_ascii_case(tag)
            })
            .ok_or_else(|| {
                LangmedError::query(format!(
                    "unknown language {tag:?} (expected {} or {})",
                    self.left.language, self.right.language
                ))
            })
    }

    /// Link templates of both sides.
    pub fn links(&self) -> LinkTemplates {
        LinkTemplates::new(&self.left.link_template, &self.right.link_template)
    }
}
