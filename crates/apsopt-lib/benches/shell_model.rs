use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use apsopt_lib::{Assembly, Catalog, DrawPrefix};

fn bench_pipeline(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let body = vec![
        catalog.module("BASE BLEEDER").unwrap(),
        catalog.module("SOLID BODY").unwrap(),
        catalog.module("SOLID BODY").unwrap(),
        catalog.module("FUSE").unwrap(),
    ];
    let head = catalog.head("ARMOR PIERCING HEAD").unwrap();
    let assembly = Assembly::new(250, 2.0, 1, body, head).unwrap();

    c.bench_function("draw_prefix", |b| {
        b.iter(|| DrawPrefix::evaluate(black_box(&assembly)).unwrap())
    });

    let prefix = DrawPrefix::evaluate(&assembly).unwrap();
    c.bench_function("at_draw", |b| {
        b.iter(|| prefix.at_draw(black_box(5000)).unwrap())
    });

    c.bench_function("kinetic_dps", |b| {
        let stats = prefix.at_draw(5000).unwrap();
        b.iter(|| black_box(&stats).kinetic_dps(black_box(30.0)))
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
