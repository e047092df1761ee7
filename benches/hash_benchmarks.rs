//! Throughput benchmarks across the supported digest algorithms.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use hashstream::{HashAlgorithm, HashWriter, hex_digest};

/// One-shot hashing throughput per algorithm and input size.
fn benchmark_hash_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_throughput");

    let sizes = [1024, 65536, 1_048_576];

    for size in &sizes {
        group.throughput(Throughput::Bytes(*size as u64));
        let data = vec![0u8; *size];

        for algorithm in HashAlgorithm::ALL {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), size),
                &data,
                |b, data| {
                    b.iter(|| {
                        let hex = hex_digest(algorithm, data).expect("hash should succeed");
                        std::hint::black_box(hex);
                    });
                },
            );
        }
    }

    group.finish();
}

/// Incremental writes versus a single write of the whole buffer.
fn benchmark_chunked_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_writes");

    let data = vec![0u8; 1_048_576];
    group.throughput(Throughput::Bytes(data.len() as u64));

    group.bench_function("sha256_one_shot", |b| {
        b.iter(|| {
            let hex = hex_digest(HashAlgorithm::Sha256, &data).expect("hash should succeed");
            std::hint::black_box(hex);
        });
    });

    group.bench_function("sha256_4k_chunks", |b| {
        b.iter(|| {
            let mut writer = HashWriter::new(HashAlgorithm::Sha256);
            for chunk in data.chunks(4096) {
                writer.push(chunk).expect("write should succeed");
            }
            let hex = writer.hex_digest().expect("hash should succeed");
            std::hint::black_box(hex);
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_hash_throughput, benchmark_chunked_writes);
criterion_main!(benches);
