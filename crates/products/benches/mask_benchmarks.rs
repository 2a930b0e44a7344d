use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use catalog_products::{
    BitFieldMask, BoolFieldMask, Category, Field, Product, ProductId, copy, render,
};

fn sample_product() -> Product {
    Product::new(ProductId::new(1), "iPhone 17", 1299.0, Category::Premium, true)
}

fn bench_render(c: &mut Criterion) {
    let product = sample_product();
    let mut group = c.benchmark_group("render");

    for (label, mask) in [
        ("none", BitFieldMask::none()),
        ("name_price", Field::Name | Field::Price),
        ("all", BitFieldMask::all()),
    ] {
        group.bench_with_input(BenchmarkId::new("bit", label), &mask, |b, mask| {
            b.iter(|| render(black_box(&product), black_box(mask)))
        });

        let flags = BoolFieldMask::from(mask);
        group.bench_with_input(BenchmarkId::new("bool", label), &flags, |b, flags| {
            b.iter(|| render(black_box(&product), black_box(flags)))
        });
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let source = sample_product();
    let target = Product::new(ProductId::new(2), "MacBook Air", 1499.0, Category::Enterprise, true);

    c.bench_function("copy/all", |b| {
        b.iter(|| {
            let mut t = target.clone();
            copy(black_box(&source), &mut t, black_box(&BitFieldMask::all()));
            t
        })
    });

    c.bench_function("copy/price", |b| {
        b.iter(|| {
            let mut t = target.clone();
            copy(black_box(&source), &mut t, black_box(&BitFieldMask::PRICE));
            t
        })
    });
}

criterion_group!(benches, bench_render, bench_copy);
criterion_main!(benches);
