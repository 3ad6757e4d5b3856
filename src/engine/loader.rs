//! Startup loading of a [`QueryEngine`] from configuration.
//!
//! Both vocabularies are read first; the graph is then dimensioned from the
//! number of records actually loaded, so a stale declared size can never
//! silently disagree with the index.

use log::info;

use crate::config::LangmedConfig;
use crate::engine::QueryEngine;
use crate::error::{LangmedError, Result};
use crate::graph::CorrespondenceGraph;
use crate::side::Side;
use crate::vocabulary::VocabularyStore;

impl QueryEngine {
    /// Load vocabularies and alignment named by the configuration.
    ///
    /// Any failure is fatal: the engine cannot answer queries without both
    /// vocabularies and the full alignment.
    pub fn open(config: &LangmedConfig) -> Result<Self> {
        config.validate()?;

        let left = load_side(config, Side::Left)?;
        let right = load_side(config, Side::Right)?;
        let graph = CorrespondenceGraph::load(&config.alignment, left.len(), right.len())?;

        let engine = QueryEngine::new(left, right, graph)?;
        info!(
            "engine ready: {} {} records, {} {} records",
            engine.vocabulary(Side::Left).len(),
            config.left.language,
            engine.vocabulary(Side::Right).len(),
            config.right.language
        );
        Ok(engine)
    }
}

fn load_side(config: &LangmedConfig, side: Side) -> Result<VocabularyStore> {
    let side_config = config.side(side);
    let source = side_config.source.open();
    let store = VocabularyStore::load(side, source.as_ref(), side_config.analysis_options())?;

    if let Some(expected) = side_config.expected_records
        && expected != store.len()
    {
        return Err(LangmedError::load(format!(
            "{}: expected {expected} {} records, found {}",
            source.describe(),
            side_config.language,
            store.len()
        )));
    }
    Ok(store)
}
