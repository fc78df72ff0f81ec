use aso_combo_audit::{audit_keyword_combos, KeywordRuleset};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_audit_keyword_combos(c: &mut Criterion) {
    let keyword_ruleset = KeywordRuleset::default();

    let title = "Learn Spanish - Fast Language Lessons";
    let subtitle = "Speak, read and write with daily practice";

    c.bench_function("audit_keyword_combos", |b| {
        b.iter(|| {
            audit_keyword_combos(
                black_box(title),
                black_box(subtitle),
                black_box(&keyword_ruleset),
            )
        })
    });
}

criterion_group!(benches, benchmark_audit_keyword_combos);
criterion_main!(benches);
