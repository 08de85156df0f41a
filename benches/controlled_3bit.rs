use criterion::{black_box, criterion_group, criterion_main, Criterion};

use knx_bus::knx::{ControlValue, DptCodec, DptControlled3Bit, Payload};

fn bench_codec(c: &mut Criterion) {
    c.bench_function("controlled_3bit_encode", |b| {
        b.iter(|| DptControlled3Bit::to_payload(black_box(&ControlValue::up(5))))
    });

    c.bench_function("controlled_3bit_decode", |b| {
        b.iter(|| DptControlled3Bit::from_payload(black_box(&Payload::Binary(0x0D))))
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
