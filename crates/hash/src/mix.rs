// Copyright 2026 XC320 Project Developers

//! Scalar non-linear mixing primitives.
//!
//! [`gamma_mix`] and [`sigma_transform`] are the two building blocks shared
//! by the rest of the construction. The ten `little_box_process*` functions
//! form the per-lane process family of a LITTLE box; each combines a
//! distinct rotation pair, a sigma variant and a round-constant offset.

use crate::consts::round_constant;

/// Core three-input non-linear mix.
///
/// XORs the inputs, folds in rotated copies, applies a majority-style
/// non-linear term, injects the round word and finishes with two wrapping
/// multiplications. All arithmetic wraps.
pub fn gamma_mix(x: u64, y: u64, z: u64, round: u64) -> u64 {
	let mut r = x ^ y ^ z;
	r = r.wrapping_add(x.rotate_left(13) ^ y.rotate_right(7) ^ z.rotate_left(29));
	r ^= (x & y) | (z & !x);
	r = r.wrapping_add(round);
	r = r.rotate_right(17) ^ r.rotate_left(23);
	r ^= (r << 19) | (r >> 45);
	r.wrapping_add(x.wrapping_mul(0x8000000080008009) ^ y.wrapping_mul(0x8000000000008081))
}

/// One of four SHA-2 style rotation/shift patterns, selected by `variant`.
///
/// Variants 0 and 1 are pure rotation sums, variants 2 and 3 end in a
/// logical shift. Out-of-range variants return the input unchanged.
pub fn sigma_transform(x: u64, variant: u8) -> u64 {
	match variant {
		0 => x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39),
		1 => x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41),
		2 => x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7),
		3 => x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6),
		_ => x,
	}
}

/// Process 1: gamma mix of the input with a salt word.
pub fn little_box_process1(input: u64, salt: u64, round: u64) -> u64 {
	gamma_mix(input, salt, round, round_constant(round))
}

/// Process 2: rotation feedback, sigma 0, constant offset 1.
pub fn little_box_process2(mut x: u64, round: u64) -> u64 {
	x ^= x.rotate_right(19) ^ x.rotate_left(42);
	x = x.wrapping_add(sigma_transform(x, 0));
	x ^ round_constant(round.wrapping_add(1))
}

/// Process 3: rotation pair, sigma 1, constant offset 2.
pub fn little_box_process3(mut x: u64, round: u64) -> u64 {
	x = x.rotate_left(27) ^ x.rotate_right(31);
	x ^= sigma_transform(x, 1);
	x.wrapping_add(round_constant(round.wrapping_add(2)))
}

/// Process 4: shift feedback, sigma 2, constant offset 3.
pub fn little_box_process4(mut x: u64, round: u64) -> u64 {
	x ^= (x << 23) | (x >> 41);
	x = x.wrapping_add(sigma_transform(x, 2));
	x ^ round_constant(round.wrapping_add(3))
}

/// Process 5: negation by multiply, sigma 3, constant offset 4.
pub fn little_box_process5(mut x: u64, round: u64) -> u64 {
	x = x.wrapping_mul(0xFFFFFFFFFFFFFFFF);
	x ^= x.rotate_right(33);
	x = x.wrapping_add(sigma_transform(x, 3));
	x ^ round_constant(round.wrapping_add(4))
}

/// Process 6: rotation feedback, sigma 0, constant offset 5.
pub fn little_box_process6(mut x: u64, round: u64) -> u64 {
	x ^= x.rotate_left(37) ^ x.rotate_right(29);
	x = x.wrapping_add(sigma_transform(x, 0));
	x ^ round_constant(round.wrapping_add(5))
}

/// Process 7: shift feedback, sigma 1, constant offset 6.
pub fn little_box_process7(mut x: u64, round: u64) -> u64 {
	x ^= (x >> 17) ^ (x << 47);
	x = x.wrapping_add(sigma_transform(x, 1));
	x ^ round_constant(round.wrapping_add(6))
}

/// Process 8: rotation feedback, sigma 2, constant offset 7.
pub fn little_box_process8(mut x: u64, round: u64) -> u64 {
	x ^= x.rotate_right(11) ^ x.rotate_left(53);
	x = x.wrapping_add(sigma_transform(x, 2));
	x ^ round_constant(round.wrapping_add(7))
}

/// Process 9: gamma mix of the input with two of its own rotations.
pub fn little_box_process9(x: u64, round: u64) -> u64 {
	gamma_mix(x, x.rotate_right(31), x.rotate_left(29), round_constant(round.wrapping_add(8)))
}

/// Process 10: folds nine words through word-indexed rotations, then gamma
/// mixes the accumulator and finishes with sigma 3.
pub fn little_box_process10(words: &[u64; 9], round: u64) -> u64 {
	let mut r = 0u64;
	for (i, &v) in words.iter().enumerate() {
		r ^= v;
		r = r.wrapping_add(v.rotate_left(i as u32 * 7));
		r ^= v.rotate_right(i as u32 * 13);
	}
	r = gamma_mix(r, r.rotate_right(23), r.rotate_left(41), round_constant(round.wrapping_add(9)));
	r ^ sigma_transform(r, 3)
}
