//! Criterion benchmarks for langmed.
//!
//! Covers record analysis, index construction and translation queries over a
//! synthetic vocabulary pair.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use langmed::analysis::analyzer::Analyzer;
use langmed::analysis::analyzer::medicine::{AnalysisOptions, AnalysisProfile};
use langmed::engine::QueryEngine;
use langmed::graph::CorrespondenceGraph;
use langmed::index::InvertedIndex;
use langmed::side::Side;
use langmed::vocabulary::{SourceEntry, VocabularyStore};
use std::hint::black_box;

const WORDS: &[&str] = &[
    "acetylsalicylic",
    "acid",
    "ibuprofen",
    "paracetamol",
    "amoxicillin",
    "clavulanic",
    "metformin",
    "hydrochloride",
    "sodium",
    "potassium",
    "calcium",
    "magnesium",
    "citrate",
    "sulfate",
    "omeprazole",
    "pantoprazole",
    "simvastatin",
    "atorvastatin",
    "lisinopril",
    "ramipril",
    "bisoprolol",
    "fumarate",
    "levothyroxine",
    "diclofenac",
];

/// Generate `count` names of two to four words.
fn generate_names(count: usize, separator: &str) -> Vec<String> {
    (0..count)
        .map(|i| {
            let len = 2 + i % 3;
            (0..len)
                .map(|j| WORDS[(i * 7 + j * 13) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(separator)
        })
        .collect()
}

fn build_store(side: Side, names: &[String]) -> VocabularyStore {
    let analyzer = AnalysisProfile::Record(side)
        .analyzer(AnalysisOptions::default())
        .unwrap();
    let entries = names
        .iter()
        .enumerate()
        .map(|(i, name)| SourceEntry::new(name.clone(), format!("REF{i:05}")));
    VocabularyStore::from_entries(side, entries, &analyzer)
}

fn build_engine(size: usize) -> QueryEngine {
    let left = build_store(Side::Left, &generate_names(size, " "));
    // Slugs carry a trailing id segment that the tokenizer drops.
    let right_names: Vec<String> = generate_names(size, "-")
        .into_iter()
        .enumerate()
        .map(|(i, slug)| format!("{slug}-{i}"))
        .collect();
    let right = build_store(Side::Right, &right_names);

    let rows = (0..size).map(|i| (i, [i, (i * 31 + 5) % size]));
    let graph = CorrespondenceGraph::from_edge_list(size, size, rows).unwrap();
    QueryEngine::new(left, right, graph).unwrap()
}

/// Benchmark record analysis.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");

    let analyzer = AnalysisProfile::Record(Side::Left)
        .analyzer(AnalysisOptions { strip_units: true })
        .unwrap();
    let names = generate_names(1000, " ");

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("analyze_records", |b| {
        b.iter(|| {
            for name in &names {
                black_box(analyzer.terms(black_box(name)));
            }
        })
    });

    group.finish();
}

/// Benchmark inverted index construction.
fn bench_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("index");
    let store = build_store(Side::Left, &generate_names(10_000, " "));

    group.throughput(Throughput::Elements(store.len() as u64));
    group.bench_function("build_inverted_index", |b| {
        b.iter(|| black_box(InvertedIndex::build(black_box(&store))))
    });

    group.finish();
}

/// Benchmark translation queries.
fn bench_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("query");
    let engine = build_engine(10_000);

    group.bench_function("single_token", |b| {
        b.iter(|| black_box(engine.query(Side::Right, black_box("ibuprofen"))))
    });

    group.bench_function("multi_token", |b| {
        b.iter(|| {
            black_box(engine.query(Side::Right, black_box("metformin hydrochloride sodium")))
        })
    });

    group.bench_function("no_match", |b| {
        b.iter(|| black_box(engine.query(Side::Left, black_box("unknown-name"))))
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_index, bench_query);
criterion_main!(benches);
