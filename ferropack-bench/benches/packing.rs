//! Record packing benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use ferropack_bench::fixtures::{quote_layout, sample_quote};
use ferropack_core::ByteOrder;
use ferropack_record::Record;
use std::hint::black_box;

fn benchmark_layout_compile(c: &mut Criterion) {
    c.bench_function("layout_compile", |b| b.iter(|| black_box(quote_layout())));
}

fn benchmark_pack(c: &mut Criterion) {
    let layout = quote_layout();
    let record = sample_quote(&layout);

    c.bench_function("pack", |b| b.iter(|| black_box(record.pack().unwrap())));

    let mut dst = vec![0u8; layout.packed_size()];
    c.bench_function("pack_into", |b| {
        b.iter(|| record.pack_into(black_box(&mut dst)).unwrap())
    });

    c.bench_function("pack_big_endian", |b| {
        b.iter(|| black_box(record.pack_with_order(ByteOrder::BigEndian).unwrap()))
    });

    c.bench_function("pack_native_aligned", |b| {
        b.iter(|| {
            black_box(
                record
                    .pack_with_order(ByteOrder::NativeAligned)
                    .unwrap(),
            )
        })
    });
}

fn benchmark_unpack(c: &mut Criterion) {
    let layout = quote_layout();
    let bytes = sample_quote(&layout).pack().unwrap();
    let mut record = Record::new(&layout);

    c.bench_function("unpack", |b| {
        b.iter(|| record.unpack(black_box(&bytes)).unwrap())
    });
}

fn benchmark_field_access(c: &mut Criterion) {
    let layout = quote_layout();
    let record = sample_quote(&layout);

    c.bench_function("get_by_name", |b| {
        b.iter(|| black_box(record.get(black_box("bid")).unwrap()))
    });

    let mut record = sample_quote(&layout);
    c.bench_function("set_by_name", |b| {
        b.iter(|| record.set(black_box("bid"), 1_000_001i64).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_layout_compile,
    benchmark_pack,
    benchmark_unpack,
    benchmark_field_access,
);
criterion_main!(benches);
