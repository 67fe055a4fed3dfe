use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rgb::RGB8;
use web_color_names::ColorNameResolver;

fn queries(n: u32) -> Vec<RGB8> {
    (0 .. n).map(|i| RGB8::new((i * 7 % 256) as u8, (i * 13 % 256) as u8,
                               (i * 31 % 256) as u8))
        .collect()
}

fn resolve_benchmark(c: &mut Criterion) {
    let names = ColorNameResolver::web();
    c.bench_function("resolve", |b| {
        b.iter(|| names.resolve(black_box(&RGB8::new(93, 17, 201))))
    });

    let qs = queries(1000);
    c.bench_function("resolve_batch_1000", |b| {
        b.iter(|| names.resolve_batch(black_box(&qs)))
    });

    #[cfg(feature = "rayon")]
    c.bench_function("par_resolve_batch_1000", |b| {
        b.iter(|| names.par_resolve_batch(black_box(&qs)))
    });
}

criterion_group!(benches, resolve_benchmark);
criterion_main!(benches);
