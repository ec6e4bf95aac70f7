use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dotgram_grammar::{pattern, GrammarTable};
use dotgram_schema::SchemaModule;

fn criterion_benchmark(c: &mut Criterion) {
    let mut modules = Vec::new();
    for testcase in TESTCASES {
        modules.push(SchemaModule::load(testcase).unwrap());
    }

    let mut group = c.benchmark_group("grammar");
    group.bench_function("expand", |b| {
        b.iter(|| {
            pattern::expand(black_box(
                "k_(process|temp|volt)_(recovery|removal|setup|skew|slope)_(fall|rise)",
            ))
        })
    });
    group.bench_function("build", |b| {
        b.iter_with_large_drop(|| {
            let mut table = GrammarTable::new();
            for module in &modules {
                table.merge(module.build().unwrap());
            }
            table.check().is_ok()
        })
    });
    group.finish();
}

include!(concat!(env!("OUT_DIR"), "/test.rs"));

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
