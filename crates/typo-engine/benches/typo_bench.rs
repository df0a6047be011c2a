// Criterion benchmarks for typo-engine.
//
// The corpus is the plain-text test fixture repeated until it holds a few
// tens of thousands of words, with one misspelling per copy so the scorer
// has something to find.
//
// Run:
//   cargo bench -p typo-engine

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use typo_core::Word;
use typo_engine::tokenizer::TokenizerOptions;
use typo_engine::{Corpus, FrequencyTables, KnownWords, TypoChecker};

const COPIES: usize = 200;

fn load_corpus() -> Vec<Word> {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.txt");
    let text = std::fs::read_to_string(&path).unwrap_or_default();
    let mut corpus = Corpus::new(TokenizerOptions::default());
    for i in 0..COPIES {
        corpus.add_text(&format!("copy{i}.txt"), &text);
        corpus.add_text(&format!("copy{i}.txt"), "the procesing of trigarms");
    }
    corpus.into_words()
}

fn bench_tokenize(c: &mut Criterion) {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/sample.txt");
    let text = std::fs::read_to_string(&path).unwrap_or_default().repeat(COPIES);
    c.bench_function("tokenize", |b| {
        b.iter(|| {
            let mut corpus = Corpus::new(TokenizerOptions { filter_html: true });
            corpus.add_text("bench.txt", black_box(&text));
            corpus.len()
        })
    });
}

fn bench_frequency_tables(c: &mut Criterion) {
    let words = load_corpus();
    c.bench_function("frequency_tables", |b| {
        b.iter(|| FrequencyTables::build(black_box(&words)).trigram_kinds())
    });
}

fn bench_check(c: &mut Criterion) {
    let words = load_corpus();
    let checker = TypoChecker::new(KnownWords::from_text("the of and a to in"), Default::default());
    c.bench_function("check", |b| {
        b.iter(|| checker.check(black_box(words.clone())).typos.len())
    });
}

criterion_group!(benches, bench_tokenize, bench_frequency_tables, bench_check);
criterion_main!(benches);
