// Copyright 2026 XC320 Project Developers

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use digest::Digest;
use rand::{thread_rng, RngCore};
use xc320_hash::{single_shot, Xc320};

fn bench_xc320(c: &mut Criterion) {
	let mut group = c.benchmark_group("XC320");

	let mut rng = thread_rng();

	const N: usize = 1 << 16;
	let mut data = vec![0u8; N];
	rng.fill_bytes(&mut data);

	group.throughput(Throughput::Bytes(N as u64));
	group.bench_function("streaming", |bench| {
		bench.iter(|| Xc320::digest(&data));
	});
	group.bench_function("single-shot", |bench| {
		bench.iter(|| single_shot(&data));
	});

	group.finish()
}

fn bench_xc320_short_inputs(c: &mut Criterion) {
	let mut group = c.benchmark_group("XC320-short");

	for len in [0usize, 40, 128, 1024] {
		let data = vec![0xA5u8; len];
		group.throughput(Throughput::Bytes(len as u64));
		group.bench_function(format!("streaming/{len}"), |bench| {
			bench.iter(|| Xc320::digest(&data));
		});
	}

	group.finish()
}

criterion_group!(hash, bench_xc320, bench_xc320_short_inputs);
criterion_main!(hash);
