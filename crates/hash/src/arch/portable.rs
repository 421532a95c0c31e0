// Copyright 2026 XC320 Project Developers

//! Portable LITTLE-box executor.
//!
//! Emulates the 4-wide vector kernel with an array of four 64-bit lanes.

use std::array;

use super::Lane;
use crate::consts::round_constant;

/// A logical 256-bit vector: four 64-bit lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LaneVec([u64; 4]);

impl LaneVec {
	#[inline(always)]
	fn splat(value: u64) -> Self {
		Self([value; 4])
	}

	#[inline(always)]
	fn add(self, other: Self) -> Self {
		Self(array::from_fn(|i| self.0[i].wrapping_add(other.0[i])))
	}

	#[inline(always)]
	fn xor(self, other: Self) -> Self {
		Self(array::from_fn(|i| self.0[i] ^ other.0[i]))
	}

	#[inline(always)]
	fn rotl(self, amount: u32) -> Self {
		Self(self.0.map(|lane| lane.rotate_left(amount)))
	}

	#[inline(always)]
	fn rotr(self, amount: u32) -> Self {
		Self(self.0.map(|lane| lane.rotate_right(amount)))
	}

	/// Reorder lanes by a two-bits-per-destination pattern byte: destination
	/// lane `d` is sourced from lane `(pattern >> (2 * d)) & 3`.
	#[inline(always)]
	fn permute(self, pattern: u8) -> Self {
		Self(array::from_fn(|d| self.0[(pattern as usize >> (2 * d)) & 3]))
	}

	#[inline(always)]
	fn mul_const(self, constant: u64) -> Self {
		Self(self.0.map(|lane| lane.wrapping_mul(constant)))
	}
}

/// Cross-lane diffusion: two lane permutations XORed, then rotation feedback.
#[inline(always)]
fn mix_lanes(v: LaneVec) -> LaneVec {
	let p0 = v.permute(0x4E);
	let p1 = p0.permute(0xB1);
	let x = p0.xor(p1);
	x.xor(x.rotl(17))
}

/// The ARX sweep applied to each load-slot vector.
#[inline(always)]
fn arx_mix(mut v: LaneVec, salt: LaneVec, rc: LaneVec, r1: u32, r2: u32) -> LaneVec {
	v = v.add(salt);
	v = v.xor(rc);
	v = v.add(v.rotl(r1));
	v = v.xor(v.rotr(r2));
	v = mix_lanes(v);
	v.mul_const(0x800000000000808A)
}

/// Reduce a vector to a single word: lane mixing, three permutation XORs,
/// a lane fold and a scalar diffusion tail.
#[inline(always)]
fn horizontal_fold(mut v: LaneVec) -> u64 {
	v = mix_lanes(v);
	v = v.xor(v.permute(0x4E));
	v = v.xor(v.permute(0x4E));
	v = v.xor(v.permute(0xB1));

	let mut r = v.0[0] ^ v.0[1] ^ v.0[2] ^ v.0[3];
	r ^= r >> 31;
	r = r.wrapping_mul(0x0000000000000088);
	r ^= r >> 29;
	r = r.wrapping_mul(0x8000000000008089);
	r ^= r >> 32;
	r = r.rotate_right(17) ^ r.rotate_left(43);
	r = r.wrapping_mul(0x8000000080008081);
	r ^ (r >> 27)
}

/// Load a slot from up to four lanes, padding missing tail lanes with zero.
#[inline(always)]
fn load_slot(batch: &[Lane], slot: usize) -> LaneVec {
	LaneVec(array::from_fn(|i| batch.get(i).map_or(0, |lane| lane[slot])))
}

#[inline(always)]
fn round_constant_vec(base: u64) -> LaneVec {
	LaneVec(array::from_fn(|i| round_constant(base.wrapping_add(i as u64))))
}

/// Run the LITTLE-box sweep over `lanes`, four lanes per batch.
pub(super) fn execute(lanes: &mut [Lane], salt: u64, round_base: u64) {
	for batch in lanes.chunks_mut(4) {
		let salt_v = LaneVec::splat(salt);

		let mut v0 = load_slot(batch, 1);
		let mut v0l = load_slot(batch, 0);
		let mut v1 = load_slot(batch, 5);
		let mut v1l = load_slot(batch, 4);
		let mut v2 = load_slot(batch, 9);
		let mut v2l = load_slot(batch, 8);

		let rc0 = round_constant_vec(round_base);
		let rc1 = round_constant_vec(round_base.wrapping_add(4));
		let rc2 = round_constant_vec(round_base.wrapping_add(8));

		v0 = arx_mix(v0, salt_v, rc0, 7, 13);
		v0l = arx_mix(v0l, salt_v, rc0, 7, 13);
		v1 = arx_mix(v1, salt_v, rc1, 11, 17);
		v1l = arx_mix(v1l, salt_v, rc1, 11, 17);
		v2 = arx_mix(v2, salt_v, rc2, 19, 23);
		v2l = arx_mix(v2l, salt_v, rc2, 19, 23);

		v0 = mix_lanes(v0);
		v0l = mix_lanes(v0l);
		v1 = mix_lanes(v1);
		v1l = mix_lanes(v1l);
		v2 = mix_lanes(v2);
		v2l = mix_lanes(v2l);

		// Store-back table: batch lanes 0 and 1 take the even/odd vector
		// lanes of v0/v1/v2, batch lanes 2 and 3 those of v0l/v1l/v2l.
		let sources = [
			(v0, v1, v2, 0, 0x00u8),
			(v0, v1, v2, 2, 0x55),
			(v0l, v1l, v2l, 0, 0xAA),
			(v0l, v1l, v2l, 2, 0xFF),
		];
		for (lane, (a, b, c, lo, pattern)) in batch.iter_mut().zip(sources) {
			let acc = a.permute(pattern).xor(b.permute(pattern)).xor(c.permute(pattern));
			lane[0] = a.0[lo];
			lane[1] = a.0[lo + 1];
			lane[4] = b.0[lo];
			lane[5] = b.0[lo + 1];
			lane[8] = c.0[lo];
			lane[9] = horizontal_fold(acc);
		}

		// Cross-lane feedback runs only on full batches.
		if let [l0, l1, l2, l3] = batch {
			let mut m = l0[9] ^ l1[9] ^ l2[9] ^ l3[9];
			m = m.rotate_right(17) ^ m.rotate_left(43);
			m = m.wrapping_mul(0x9E3779B97F4A7C15);
			l0[9] ^= m;
			l1[9] ^= m.rotate_right(11);
			l2[9] ^= m.rotate_left(23);
			l3[9] ^= m ^ (m >> 31);
		}
	}
}
