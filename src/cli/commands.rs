//! Command implementations for the langmed CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::LangmedConfig;
use crate::engine::QueryEngine;
use crate::error::{LangmedError, Result};
use crate::side::Side;

/// Execute a CLI command.
pub fn execute_command(args: LangmedArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Translate(translate_args) => {
            let engine = QueryEngine::open(&config)?;
            translate(&engine, &config, translate_args, &args)
        }
        Command::Explain(translate_args) => {
            let engine = QueryEngine::open(&config)?;
            explain(&engine, &config, translate_args, &args)
        }
        Command::Batch(batch_args) => {
            let engine = QueryEngine::open(&config)?;
            batch(&engine, &config, batch_args, &args)
        }
        Command::Stats => {
            let engine = QueryEngine::open(&config)?;
            show_stats(&engine, &config, &args)
        }
        Command::Validate => validate_data(&config, &args),
        Command::Config => show_config(&config, &args),
    }
}

/// Load the configuration file, or fall back to the defaults.
fn load_config(args: &LangmedArgs) -> Result<LangmedConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            LangmedConfig::from_file(path)
        }
        None => {
            debug!("No configuration file given, using defaults");
            let config = LangmedConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

/// Translate a single name.
fn translate(
    engine: &QueryEngine,
    config: &LangmedConfig,
    translate_args: &TranslateArgs,
    cli_args: &LangmedArgs,
) -> Result<()> {
    let target = config.resolve_language(&translate_args.target)?;
    let query = translate_args.query();
    let translation = translate_one(engine, config, target, &query);
    output_result(&translation, cli_args)
}

fn translate_one(
    engine: &QueryEngine,
    config: &LangmedConfig,
    target: Side,
    query: &str,
) -> Translation {
    let result = engine.query(target, query);
    Translation::new(
        query,
        &config.side(target).language,
        target.opposite(),
        &result,
        &config.links(),
    )
}

/// Show the intermediate steps of a translation.
fn explain(
    engine: &QueryEngine,
    config: &LangmedConfig,
    translate_args: &TranslateArgs,
    cli_args: &LangmedArgs,
) -> Result<()> {
    let target = config.resolve_language(&translate_args.target)?;
    let query = translate_args.query();
    let explanation = engine.explain(target, &query);
    let candidates = engine.vocabulary(target);

    let report = ExplanationReport {
        source_language: config.side(explanation.source).language.clone(),
        target_language: config.side(target).language.clone(),
        tokens: explanation
            .tokens
            .iter()
            .map(|t| TokenLine {
                token: t.token.clone(),
                records: t.records.clone(),
            })
            .collect(),
        found: explanation.found,
        lower_bound: explanation.lower_bound,
        votes: explanation
            .votes
            .iter()
            .map(|&(candidate, votes)| VoteLine {
                candidate,
                name: candidates
                    .get(candidate)
                    .map(|r| r.display_name())
                    .unwrap_or_default(),
                votes,
            })
            .collect(),
        translation: Translation::new(
            &query,
            &config.side(target).language,
            explanation.source,
            &explanation.result,
            &config.links(),
        ),
    };

    output_result(&report, cli_args)
}

/// Translate every line of a file (or stdin) in parallel.
fn batch(
    engine: &QueryEngine,
    config: &LangmedConfig,
    batch_args: &BatchArgs,
    cli_args: &LangmedArgs,
) -> Result<()> {
    let target = config.resolve_language(&batch_args.target)?;

    let lines = match &batch_args.input {
        Some(path) => read_queries(BufReader::new(File::open(path)?))?,
        None => read_queries(io::stdin().lock())?,
    };

    let start = Instant::now();
    let translations = translate_all(engine, config, target, &lines, batch_args.threads)?;
    info!(
        "Translated {} queries in {:.2?}",
        translations.len(),
        start.elapsed()
    );

    output_result(&BatchReport { translations }, cli_args)
}

/// Translate every query in parallel, returning results in input order.
///
/// With `threads` set the work runs in a dedicated pool of that size,
/// otherwise in the global rayon pool.
fn translate_all(
    engine: &QueryEngine,
    config: &LangmedConfig,
    target: Side,
    queries: &[String],
    threads: Option<usize>,
) -> Result<Vec<Translation>> {
    let run = || -> Vec<Translation> {
        queries
            .par_iter()
            .map(|query| translate_one(engine, config, target, query))
            .collect()
    };

    match threads {
        Some(threads) => Ok(rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| LangmedError::other(format!("failed to build thread pool: {e}")))?
            .install(run)),
        None => Ok(run()),
    }
}

/// Non-blank, trimmed lines of the batch input.
fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            queries.push(line.to_string());
        }
    }
    Ok(queries)
}

/// Show vocabulary and alignment statistics.
fn show_stats(engine: &QueryEngine, config: &LangmedConfig, cli_args: &LangmedArgs) -> Result<()> {
    let report = StatsReport::new(
        &engine.stats(),
        [config.left.language.as_str(), config.right.language.as_str()],
    );
    output_result(&report, cli_args)
}

/// Load every data file and report the first problem found.
fn validate_data(config: &LangmedConfig, cli_args: &LangmedArgs) -> Result<()> {
    let engine = QueryEngine::open(config)?;
    let report = ValidationReport {
        records: [
            engine.vocabulary(Side::Left).len(),
            engine.vocabulary(Side::Right).len(),
        ],
        edges: engine.graph().edge_count(),
    };
    output_result(&report, cli_args)
}

/// Print the effective configuration as JSON.
fn show_config(config: &LangmedConfig, cli_args: &LangmedArgs) -> Result<()> {
    match cli_args.output_format {
        OutputFormat::Json => output_json(config, cli_args),
        OutputFormat::Human => {
            println!("{}", serde_json::to_string_pretty(config)?);
            Ok(())
        }
    }
}
