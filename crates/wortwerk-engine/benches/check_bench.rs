// Criterion benchmarks for wortwerk-engine.
//
// Uses the German fixture dictionaries from tests/data.
//
// Run:
//   cargo bench -p wortwerk-engine

use criterion::{Criterion, criterion_group, criterion_main};
use wortwerk_core::NodeId;
use wortwerk_engine::{Dictionary, ProcessorRegistry, Spellchecker};

const PARAGRAPH: &str = "Die Lösungsvorschläge der EU-Kommission zur Be- und Verarbeitung \
                         sind gut. Das Haus ist gut, die Haustür und -fenster auch. \
                         Die Mit- und Zusammenarbeit im Ministerium am 12.03.2024 ist gut.";

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn load(name: &str) -> Dictionary {
    let path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    let json = std::fs::read_to_string(&path).expect("failed to read fixture");
    Dictionary::from_json(&json, &ProcessorRegistry::new()).expect("fixture dictionary")
}

fn checker() -> Spellchecker {
    let mut checker = Spellchecker::new();
    checker.add_dictionary(load("de.json"));
    checker.add_dictionary(load("abbr.json"));
    checker
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Full pipeline in a fresh session every iteration (cold caches).
fn bench_check_text(c: &mut Criterion) {
    let checker = checker();
    c.bench_function("check_text_paragraph", |b| {
        b.iter(|| std::hint::black_box(checker.check_text(std::hint::black_box(PARAGRAPH))));
    });
}

/// Repeated checks in one session (warm caches).
fn bench_check_session(c: &mut Criterion) {
    let checker = checker();
    let mut session = checker.new_session();
    c.bench_function("check_session_paragraph", |b| {
        b.iter(|| {
            checker.check(&mut session, PARAGRAPH, NodeId(0));
            checker.analyze(&mut session);
            std::hint::black_box(checker.apply_findings(&mut session));
        });
    });
}

/// Recursive decomposition of a long compound.
fn bench_resolve_compound(c: &mut Criterion) {
    let checker = checker();
    c.bench_function("resolve_compound", |b| {
        b.iter(|| std::hint::black_box(checker.resolve(std::hint::black_box("Lösungsvorschläge"))));
    });
}

criterion_group!(
    benches,
    bench_check_text,
    bench_check_session,
    bench_resolve_compound
);
criterion_main!(benches);
