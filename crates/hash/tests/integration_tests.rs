// Copyright 2026 XC320 Project Developers

use digest::Digest;
use hex_literal::hex;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use xc320_hash::{
	digest_eq, encode_digest, force_scalar, remix_digest, single_shot, Xc320, DIGEST_SIZE,
};

/// Golden vectors generated from the reference implementation: input,
/// streaming digest, single-shot digest.
fn golden_vectors() -> Vec<(Vec<u8>, [u8; DIGEST_SIZE], [u8; DIGEST_SIZE])> {
	vec![
		(
			b"".to_vec(),
			hex!("6b6ef71c2d5a4bd8527a596124a39b251900a95cdbaa5ca419ce172343820dd6c15bdd3cc5b023b8"),
			hex!("8330af541dca5b8d742dc1d6632db241fd529dbf55f9782980eb675c5a19f4931cbcedc5a4d937ce"),
		),
		(
			b"a".to_vec(),
			hex!("5ff475f7544bdd9a9e5a62ccdbe6324de8ca7e3b78b7826ea8831aabd3e16d2ccddfa633bb4757a3"),
			hex!("8f9775883248c4695a9c3e0a035d73a31ddf23794d674a514eb9346092f1715f5d6f8985c83c1a3a"),
		),
		(
			b"abc".to_vec(),
			hex!("d133c41de0419c85d9809ab587ea064dda054c92d46f3963ba2c7367e26dc19ed1e062dd0fe4aeb2"),
			hex!("d7d44d09899db9b6b4678dc28ed07a1654f29cc4f297ccdd82bb963dc5d77ee25d8a4d388ceb4704"),
		),
		(
			b"Hello, World".to_vec(),
			hex!("e8154c62a6afde90685824f16e5e537358e9b53fda49260f5139c699e78534988ee922d11d38c35f"),
			hex!("3307395402e40d347b40759254084b43fe3062947339e6556eab05a38ce47362dc2941f13aa5a9c6"),
		),
		(
			vec![0u8; 128],
			hex!("456466f0dfcc7441605ebccfdf9e19f48c4e39e9cc3776362ec771b02b46540af658c63fe8c37775"),
			hex!("8ec1430abe6cb744a438d8cddd4bf4f635d56b3c3119eacc82555f402defe39e0733da9139d6352e"),
		),
		(
			vec![0u8; 127],
			hex!("6fc0114e050cc13ca7b3e0cd2debede71ea0f92193ababd9f34c9fb5156f5bcc879b997ba29871f4"),
			hex!("30aa5a51a373350d583e84ebbb5d17fb3e39e5b65ee04312fc6fd538af7488e342ed429997b5edd9"),
		),
		(
			vec![0xA5u8; 1024],
			hex!("d94634857974ff38c464e257ab95ddd8d4f268a5e543a6407304099a29ecb701fe54a4d8d98a9836"),
			hex!("3a4357d17e10bd462cefb6f21253972cd4c3e6f85034d7d9675425d3bfeb967f4679ff4b384ffedb"),
		),
		(
			(0..4096).map(|i| i as u8).collect(),
			hex!("02a5d3c6783002061adbc4892abd5e5dd0c68de41c0f5011f8ed994403a738c46ccf25d4534d0101"),
			hex!("90774ffe6435e8a50a9b72a9ca592b146abf0702e910a10a2f37a311c6cb4cd54174bcd48b6fa3a8"),
		),
	]
}

fn streaming_digest(data: &[u8]) -> [u8; DIGEST_SIZE] {
	let mut out = [0u8; DIGEST_SIZE];
	out.copy_from_slice(&Xc320::digest(data));
	out
}

#[test]
fn golden_vectors_streaming() {
	for (input, expected, _) in golden_vectors() {
		assert_eq!(
			streaming_digest(&input),
			expected,
			"streaming digest mismatch for {}-byte input",
			input.len()
		);
	}
}

#[test]
fn golden_vectors_single_shot() {
	for (input, _, expected) in golden_vectors() {
		assert_eq!(
			single_shot(&input),
			expected,
			"single-shot digest mismatch for {}-byte input",
			input.len()
		);
	}
}

#[test]
fn single_shot_is_remixed_streaming() {
	for (input, streamed, oneshot) in golden_vectors() {
		assert_eq!(remix_digest(&streamed), oneshot);
		assert_ne!(streamed, oneshot);
		assert_eq!(remix_digest(&streaming_digest(&input)), single_shot(&input));
	}
}

#[test]
fn digests_are_deterministic() {
	let mut rng = StdRng::seed_from_u64(7);
	for _ in 0..32 {
		let len = rng.gen_range(0..512);
		let mut data = vec![0u8; len];
		rng.fill_bytes(&mut data);
		assert_eq!(streaming_digest(&data), streaming_digest(&data));
		assert_eq!(single_shot(&data), single_shot(&data));
	}
}

#[test]
fn chunked_updates_match_whole_input() {
	for (input, expected, _) in golden_vectors() {
		// One byte at a time.
		let mut hasher = Xc320::new();
		for byte in &input {
			Digest::update(&mut hasher, core::slice::from_ref(byte));
		}
		assert_eq!(hasher.finalize().as_slice(), expected);

		// Splits straddling the block boundary.
		for split in [1usize, 63, 127, 128, 129, 255, 256] {
			let split = split.min(input.len());
			let mut hasher = Xc320::new();
			Digest::update(&mut hasher, &input[..split]);
			Digest::update(&mut hasher, &input[split..]);
			assert_eq!(hasher.finalize().as_slice(), expected);
		}
	}
}

#[test]
fn appending_a_byte_changes_the_digest() {
	let mut rng = StdRng::seed_from_u64(11);
	for len in [0usize, 1, 64, 127, 128, 500] {
		let mut data = vec![0u8; len];
		rng.fill_bytes(&mut data);
		let digest = streaming_digest(&data);
		data.push(0x00);
		assert_ne!(streaming_digest(&data), digest);
	}
}

#[test]
fn digest_is_forty_lowercase_hex_bytes() {
	let digest = streaming_digest(b"format check");
	assert_eq!(digest.len(), DIGEST_SIZE);
	let encoded = encode_digest(&digest);
	assert_eq!(encoded.len(), 80);
	assert!(encoded.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn digest_eq_matches_operator() {
	let a = streaming_digest(b"one");
	let b = streaming_digest(b"two");
	assert!(digest_eq(&a, &a));
	assert!(!digest_eq(&a, &b));
}

#[test]
fn forced_scalar_backend_matches_default() {
	let inputs: Vec<Vec<u8>> = vec![
		vec![],
		b"a".to_vec(),
		vec![0x5A; 127],
		vec![0xC3; 128],
		vec![0x0F; 1000],
	];
	let default_digests: Vec<_> = inputs.iter().map(|m| streaming_digest(m)).collect();

	force_scalar(true);
	let scalar_digests: Vec<_> = inputs.iter().map(|m| streaming_digest(m)).collect();
	force_scalar(false);

	assert_eq!(default_digests, scalar_digests);
}

/// Statistical avalanche check: flipping one input bit should flip about
/// half of the 320 digest bits.
#[test]
fn avalanche_statistics() {
	const SAMPLES: usize = 10_000;
	let mut rng = StdRng::seed_from_u64(0xC320);

	let mut sum = 0f64;
	let mut sum_sq = 0f64;
	for _ in 0..SAMPLES {
		let mut message = [0u8; 64];
		rng.fill_bytes(&mut message);
		let baseline = streaming_digest(&message);

		let bit = rng.gen_range(0..message.len() * 8);
		message[bit / 8] ^= 1 << (bit % 8);
		let flipped = streaming_digest(&message);

		let distance: u32 = baseline
			.iter()
			.zip(flipped.iter())
			.map(|(a, b)| (a ^ b).count_ones())
			.sum();
		sum += f64::from(distance);
		sum_sq += f64::from(distance) * f64::from(distance);
	}

	let mean = sum / SAMPLES as f64;
	let variance = sum_sq / SAMPLES as f64 - mean * mean;
	assert!((159.0..=161.0).contains(&mean), "avalanche mean {mean} out of range");
	assert!((70.0..=90.0).contains(&variance), "avalanche variance {variance} out of range");
}

proptest! {
	#[test]
	fn streaming_is_chunk_invariant(
		data in proptest::collection::vec(any::<u8>(), 0..1024),
		cuts in proptest::collection::vec(0usize..1024, 0..6),
	) {
		let expected = streaming_digest(&data);

		let mut cuts: Vec<usize> = cuts.into_iter().map(|c| c % (data.len() + 1)).collect();
		cuts.sort_unstable();

		let mut hasher = Xc320::new();
		let mut start = 0;
		for cut in cuts {
			Digest::update(&mut hasher, &data[start..cut.max(start)]);
			start = cut.max(start);
		}
		Digest::update(&mut hasher, &data[start..]);
		let result = hasher.finalize();
		prop_assert_eq!(result.as_slice(), expected);
	}

	#[test]
	fn single_shot_tracks_streaming(data in proptest::collection::vec(any::<u8>(), 0..512)) {
		prop_assert_eq!(remix_digest(&streaming_digest(&data)), single_shot(&data));
	}
}
