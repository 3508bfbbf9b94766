//! Hex codec throughput, standard binding vs portable binding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use octet_tools::{OctetTools, Portable, Standard};
use rand::Rng;

fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill(bytes.as_mut_slice());
    bytes
}

// A small repeated pattern plus random buffers straddling the bulk threshold
// of the portable encoder.
fn inputs() -> Vec<(String, Vec<u8>)> {
    let mut inputs = vec![("deadbeef_x20".to_string(), [0xde, 0xad, 0xbe, 0xef].repeat(20))];
    for size in [512, 513, 4096] {
        inputs.push((format!("random_{size}"), random_bytes(size)));
    }
    inputs
}

fn bench_to_hex(c: &mut Criterion) {
    let bindings: [&dyn OctetTools; 2] = [&Standard, &Portable];

    let mut group = c.benchmark_group("to_hex");
    for (label, bytes) in inputs() {
        group.throughput(Throughput::Bytes(bytes.len() as u64));
        for tools in bindings {
            group.bench_with_input(BenchmarkId::new(tools.name(), &label), &bytes, |b, bytes| {
                b.iter(|| black_box(tools.to_hex(black_box(bytes))));
            });
        }
    }
    group.finish();
}

fn bench_from_hex(c: &mut Criterion) {
    let bindings: [&dyn OctetTools; 2] = [&Standard, &Portable];

    let mut group = c.benchmark_group("from_hex");
    for (label, bytes) in inputs() {
        let hex = Standard.to_hex(&bytes);
        group.throughput(Throughput::Bytes(hex.len() as u64));
        for tools in bindings {
            group.bench_with_input(BenchmarkId::new(tools.name(), &label), &hex, |b, hex| {
                b.iter(|| black_box(tools.from_hex(black_box(hex))));
            });
        }
    }
    group.finish();
}

fn bench_from_hex_strict(c: &mut Criterion) {
    let bindings: [&dyn OctetTools; 2] = [&Standard, &Portable];

    let mut group = c.benchmark_group("from_hex_strict");
    for (label, bytes) in inputs() {
        let hex = Standard.to_hex(&bytes);
        group.throughput(Throughput::Bytes(hex.len() as u64));
        for tools in bindings {
            group.bench_with_input(BenchmarkId::new(tools.name(), &label), &hex, |b, hex| {
                b.iter(|| black_box(tools.from_hex_strict(black_box(hex))));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_to_hex, bench_from_hex, bench_from_hex_strict);
criterion_main!(benches);
