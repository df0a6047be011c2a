//! End-to-end tests: tokenize fixture files and run the full pipeline.

use std::path::PathBuf;

use typo_engine::tokenizer::TokenizerOptions;
use typo_engine::{CheckOptions, Corpus, KnownWords, Report, TypoChecker};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

fn load(name: &str, filter_html: bool) -> Corpus {
    let mut corpus = Corpus::new(TokenizerOptions { filter_html });
    corpus
        .add_file(&fixture(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"));
    corpus
}

fn run(name: &str, known: KnownWords, options: CheckOptions) -> Report {
    TypoChecker::new(known, options).check(load(name, false).into_words())
}

fn locations(words: &[typo_core::Word]) -> Vec<(String, usize, usize)> {
    words
        .iter()
        .map(|w| (w.text.clone(), w.line, w.byte))
        .collect()
}

// ---------------------------------------------------------------------------
// Plain text
// ---------------------------------------------------------------------------

#[test]
fn sample_repeats() {
    let report = run("sample.txt", KnownWords::new(), CheckOptions::default());
    assert_eq!(
        locations(&report.repeats),
        [("a".to_string(), 4, 38), ("With".to_string(), 6, 19)]
    );
}

#[test]
fn sample_top_word() {
    let report = run("sample.txt", KnownWords::new(), CheckOptions::default());
    let top = &report.typos[0];
    assert_eq!((top.text.as_str(), top.line, top.byte, top.score), ("byte", 3, 63, 64));
    assert!(report.typos.windows(2).all(|p| p[0].score >= p[1].score));
    assert!(report.typos.iter().all(|w| w.score >= 10));
    assert!(report.typos.len() <= 50);
}

#[test]
fn sample_text_rendering() {
    let options = CheckOptions {
        max_results: 1,
        ..CheckOptions::default()
    };
    let report = run("sample.txt", KnownWords::new(), options);
    let mut out = Vec::new();
    report.write_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let file = fixture("sample.txt").display().to_string();
    assert_eq!(
        text,
        format!("{file}:4:38 a repeats\n{file}:6:19 With repeats\n{file}:3:63 [64] byte\n")
    );
}

#[test]
fn limit_and_threshold() {
    let options = CheckOptions {
        max_results: 2,
        threshold: 5,
        report_repeats: true,
    };
    let report = run("sample.txt", KnownWords::new(), options);
    assert_eq!(report.typos.len(), 2);
    assert!(report.typos.iter().all(|w| w.score >= 5));

    let options = CheckOptions {
        max_results: 2,
        threshold: 60,
        report_repeats: true,
    };
    let report = run("sample.txt", KnownWords::new(), options);
    assert_eq!(report.typos.len(), 1);
}

#[test]
fn each_surface_form_reported_once() {
    let options = CheckOptions {
        max_results: usize::MAX,
        threshold: 0,
        report_repeats: false,
    };
    let report = run("sample.txt", KnownWords::new(), options);
    let mut texts: Vec<&str> = report.typos.iter().map(|w| w.text.as_str()).collect();
    let total = texts.len();
    texts.sort_unstable();
    texts.dedup();
    assert_eq!(texts.len(), total);

    // "the" occurs many times; the survivor is the first in text order.
    let the = report.typos.iter().find(|w| w.text == "the").unwrap();
    assert_eq!((the.line, the.byte), (1, 29));
}

#[test]
fn known_words_are_never_reported() {
    let corpus = load("sample.txt", false);
    let mut known = KnownWords::new();
    for w in corpus.words() {
        if w.text != "zxyz" {
            known.insert(w.text.clone());
        }
    }
    let options = CheckOptions {
        max_results: usize::MAX,
        threshold: 0,
        report_repeats: false,
    };
    let report = TypoChecker::new(known, options).check(corpus.into_words());
    // zxyz shares no trigram with the rest of the text: it carries no signal
    // and scores 0, which only a threshold of 0 lets through.
    assert_eq!(locations(&report.typos), [("zxyz".to_string(), 6, 37)]);
    assert_eq!(report.typos[0].score, 0);
}

#[test]
fn identical_runs_give_identical_reports() {
    let a = run("sample.txt", KnownWords::new(), CheckOptions::default());
    let b = run("sample.txt", KnownWords::new(), CheckOptions::default());
    assert_eq!(a, b);
}

// ---------------------------------------------------------------------------
// HTML
// ---------------------------------------------------------------------------

#[test]
fn html_locations() {
    let corpus = load("sample.html", true);
    let got = locations(corpus.words());
    assert_eq!(got[0], ("The".to_string(), 1, 4));
    assert_eq!(got[1], ("quick".to_string(), 1, 12));
    assert_eq!(got[3], ("fox".to_string(), 1, 29));
    assert_eq!(got[4], ("jumps".to_string(), 2, 13));
    assert_eq!(got[9], ("dog".to_string(), 2, 48));
}

#[test]
fn html_repeat() {
    let checker = TypoChecker::default();
    let report = checker.check(load("sample.html", true).into_words());
    assert_eq!(locations(&report.repeats), [("the".to_string(), 2, 39)]);
}

#[test]
fn html_unfiltered_keeps_tags() {
    let corpus = load("sample.html", false);
    assert!(corpus.words().iter().any(|w| w.text.contains('<')));
}
