//! Allocation throughput benchmarks
//!
//! Compares the pooled and simple strategies on the payload pattern the
//! crate is built for: allocate, fill, share, release.

use bufpool::{AllocatorConfig, BufferAllocator, PooledAllocator, SimpleAllocator};
use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

/// One request/response cycle: allocate two payloads, fill, release.
fn bench_request_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("request_response");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pooled", |b| {
        let allocator = PooledAllocator::new(&AllocatorConfig::default());

        b.iter(|| {
            let mut req = allocator.allocate(256);
            req.copy_from_slice(&[0x42; 256]);

            let mut resp = allocator.allocate(256);
            resp.copy_from_slice(&[0x24; 256]);

            black_box((&req, &resp));
            // Dropping returns both blocks to the 256-byte class.
        });
    });

    group.bench_function("simple", |b| {
        let allocator = SimpleAllocator::new(&AllocatorConfig::default());

        b.iter(|| {
            let mut req = allocator.allocate(256);
            req.copy_from_slice(&[0x42; 256]);

            let mut resp = allocator.allocate(256);
            resp.copy_from_slice(&[0x24; 256]);

            black_box((&req, &resp));
        });
    });

    group.finish();
}

/// Sharing a payload between owners: clone instead of copy.
fn bench_share(c: &mut Criterion) {
    let mut group = c.benchmark_group("share");
    group.throughput(Throughput::Elements(1));

    group.bench_function("pooled_clone_release", |b| {
        let allocator = PooledAllocator::new(&AllocatorConfig::default());
        let mut buf = allocator.allocate(1024);
        buf.copy_from_slice(&[0x7F; 1024]);

        b.iter(|| {
            let shared = buf.clone();
            black_box(&shared);
        });
    });

    group.bench_function("simple_clone_release", |b| {
        let allocator = SimpleAllocator::new(&AllocatorConfig::default());
        let mut buf = allocator.allocate(1024);
        buf.copy_from_slice(&[0x7F; 1024]);

        b.iter(|| {
            let shared = buf.clone();
            black_box(&shared);
        });
    });

    group.finish();
}

/// Mixed sizes: the pooled path pays the class lookup, the simple path
/// pays the system allocator.
fn bench_mixed_sizes(c: &mut Criterion) {
    const SIZES: [usize; 6] = [8, 40, 100, 256, 700, 4096];

    let mut group = c.benchmark_group("mixed_sizes");
    group.throughput(Throughput::Elements(SIZES.len() as u64));

    group.bench_function("pooled", |b| {
        let allocator = PooledAllocator::new(&AllocatorConfig::default());

        b.iter(|| {
            for size in SIZES {
                black_box(allocator.allocate(size));
            }
        });
    });

    group.bench_function("simple", |b| {
        let allocator = SimpleAllocator::new(&AllocatorConfig::default());

        b.iter(|| {
            for size in SIZES {
                black_box(allocator.allocate(size));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_request_response, bench_share, bench_mixed_sizes);
criterion_main!(benches);
