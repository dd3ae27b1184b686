use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vindecode::core::*;
use vindecode::reference::ReferenceData;

fn reference() -> ReferenceData {
    ReferenceData::from_json(include_str!("../tests/fixtures/reference.json")).unwrap()
}

fn build_1000_vins() -> Vec<String> {
    (0..1000u32)
        .map(|n| with_check_digit(&format!("1HGCM82603A{n:06}")).unwrap())
        .collect()
}

fn bench_check_digit(c: &mut Criterion) {
    c.bench_function("compute_check_digit", |b| {
        b.iter(|| black_box(compute_check_digit(black_box("1HGCM82633A004352"))));
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_vin", |b| {
        b.iter(|| black_box(validate_vin(black_box("1HGCM82633A004352"))));
    });
}

fn bench_resolve_years(c: &mut Criterion) {
    c.bench_function("resolve_years", |b| {
        b.iter(|| black_box(resolve_years(black_box('3'), black_box(2025))));
    });
}

fn bench_decode(c: &mut Criterion) {
    let data = reference();
    let decoder = VinDecoder::with_config(
        &data,
        &data,
        DecoderConfig::builder().current_year(2025).build(),
    );
    c.bench_function("decode", |b| {
        b.iter(|| black_box(decoder.decode(black_box("1HGCM82633A004352"))));
    });
}

fn bench_decode_1000(c: &mut Criterion) {
    let data = reference();
    let decoder = VinDecoder::with_config(
        &data,
        &data,
        DecoderConfig::builder().current_year(2025).build(),
    );
    let vins = build_1000_vins();
    c.bench_function("decode_1000", |b| {
        b.iter(|| {
            for vin in &vins {
                let _ = black_box(decoder.decode(black_box(vin)));
            }
        });
    });
}

fn bench_reference_load(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/reference.json");
    c.bench_function("reference_from_json", |b| {
        b.iter(|| black_box(ReferenceData::from_json(black_box(json))));
    });
}

criterion_group!(
    benches,
    bench_check_digit,
    bench_validate,
    bench_resolve_years,
    bench_decode,
    bench_decode_1000,
    bench_reference_load,
);
criterion_main!(benches);
