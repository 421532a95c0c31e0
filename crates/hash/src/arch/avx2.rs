// Copyright 2026 XC320 Project Developers

//! AVX2 LITTLE-box executor. Each 256-bit register carries one load slot of
//! a four-lane batch.

use std::arch::x86_64::*;

use super::Lane;
use crate::consts::round_constant;

#[inline(always)]
fn rotl64x4(v: __m256i, r: i32) -> __m256i {
	unsafe {
		_mm256_or_si256(
			_mm256_sll_epi64(v, _mm_cvtsi32_si128(r)),
			_mm256_srl_epi64(v, _mm_cvtsi32_si128(64 - r)),
		)
	}
}

#[inline(always)]
fn rotr64x4(v: __m256i, r: i32) -> __m256i {
	unsafe {
		_mm256_or_si256(
			_mm256_srl_epi64(v, _mm_cvtsi32_si128(r)),
			_mm256_sll_epi64(v, _mm_cvtsi32_si128(64 - r)),
		)
	}
}

#[inline(always)]
fn mix_lanes(v: __m256i) -> __m256i {
	unsafe {
		let v = _mm256_permute4x64_epi64::<0x4E>(v);
		let v = _mm256_xor_si256(v, _mm256_permute4x64_epi64::<0xB1>(v));
		_mm256_xor_si256(v, rotl64x4(v, 17))
	}
}

/// Lane-wise multiply folding built from 32-bit products:
/// `lo(a)·lo(b) + (hi(a)·hi(b) << 32)` per lane.
#[inline(always)]
fn mullo64(a: __m256i, b: __m256i) -> __m256i {
	unsafe {
		let lo = _mm256_mul_epu32(a, b);
		let hi = _mm256_mul_epu32(_mm256_srli_epi64::<32>(a), _mm256_srli_epi64::<32>(b));
		_mm256_add_epi64(lo, _mm256_slli_epi64::<32>(hi))
	}
}

#[inline(always)]
fn arx_mix(v: __m256i, salt: __m256i, rc: __m256i, r1: i32, r2: i32) -> __m256i {
	unsafe {
		let v = _mm256_add_epi64(v, salt);
		let v = _mm256_xor_si256(v, rc);
		let v = _mm256_add_epi64(v, rotl64x4(v, r1));
		let v = _mm256_xor_si256(v, rotr64x4(v, r2));
		let v = mix_lanes(v);
		mullo64(v, _mm256_set1_epi64x(0x800000000000808Au64 as i64))
	}
}

#[inline(always)]
fn horizontal_fold(v: __m256i) -> u64 {
	let mut r = unsafe {
		let v = mix_lanes(v);
		let v = _mm256_xor_si256(v, _mm256_permute4x64_epi64::<0x4E>(v));
		let v = _mm256_xor_si256(v, _mm256_permute4x64_epi64::<0x4E>(v));
		let v = _mm256_xor_si256(v, _mm256_permute4x64_epi64::<0xB1>(v));

		let x = _mm_xor_si128(_mm256_castsi256_si128(v), _mm256_extracti128_si256::<1>(v));
		let x = _mm_xor_si128(x, _mm_srli_si128::<8>(x));
		let x = _mm_xor_si128(x, _mm_slli_si128::<4>(x));
		_mm_cvtsi128_si64(x) as u64
	};

	r ^= r >> 31;
	r = r.wrapping_mul(0x0000000000000088);
	r ^= r >> 29;
	r = r.wrapping_mul(0x8000000000008089);
	r ^= r >> 32;
	r = r.rotate_right(17) ^ r.rotate_left(43);
	r = r.wrapping_mul(0x8000000080008081);
	r ^ (r >> 27)
}

#[inline(always)]
fn load_slot(batch: &[Lane], slot: usize) -> __m256i {
	let word = |i: usize| batch.get(i).map_or(0, |lane| lane[slot]) as i64;
	unsafe { _mm256_set_epi64x(word(3), word(2), word(1), word(0)) }
}

#[inline(always)]
fn round_constant_vec(base: u64) -> __m256i {
	unsafe {
		_mm256_set_epi64x(
			round_constant(base.wrapping_add(3)) as i64,
			round_constant(base.wrapping_add(2)) as i64,
			round_constant(base.wrapping_add(1)) as i64,
			round_constant(base) as i64,
		)
	}
}

#[inline(always)]
fn to_array(v: __m256i) -> [u64; 4] {
	let mut out = [0u64; 4];
	unsafe { _mm256_storeu_si256(out.as_mut_ptr() as *mut __m256i, v) };
	out
}

#[inline(always)]
fn xor3(a: __m256i, b: __m256i, c: __m256i) -> __m256i {
	unsafe { _mm256_xor_si256(_mm256_xor_si256(a, b), c) }
}

pub(super) fn execute(lanes: &mut [Lane], salt: u64, round_base: u64) {
	let salt_v = unsafe { _mm256_set1_epi64x(salt as i64) };

	for batch in lanes.chunks_mut(4) {
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

		let w0 = to_array(v0);
		let w1 = to_array(v1);
		let w2 = to_array(v2);
		let w0l = to_array(v0l);
		let w1l = to_array(v1l);
		let w2l = to_array(v2l);

		if let Some(lane) = batch.get_mut(0) {
			let acc = unsafe {
				xor3(
					_mm256_permute4x64_epi64::<0x00>(v0),
					_mm256_permute4x64_epi64::<0x00>(v1),
					_mm256_permute4x64_epi64::<0x00>(v2),
				)
			};
			lane[0] = w0[0];
			lane[1] = w0[1];
			lane[4] = w1[0];
			lane[5] = w1[1];
			lane[8] = w2[0];
			lane[9] = horizontal_fold(acc);
		}
		if let Some(lane) = batch.get_mut(1) {
			let acc = unsafe {
				xor3(
					_mm256_permute4x64_epi64::<0x55>(v0),
					_mm256_permute4x64_epi64::<0x55>(v1),
					_mm256_permute4x64_epi64::<0x55>(v2),
				)
			};
			lane[0] = w0[2];
			lane[1] = w0[3];
			lane[4] = w1[2];
			lane[5] = w1[3];
			lane[8] = w2[2];
			lane[9] = horizontal_fold(acc);
		}
		if let Some(lane) = batch.get_mut(2) {
			let acc = unsafe {
				xor3(
					_mm256_permute4x64_epi64::<0xAA>(v0l),
					_mm256_permute4x64_epi64::<0xAA>(v1l),
					_mm256_permute4x64_epi64::<0xAA>(v2l),
				)
			};
			lane[0] = w0l[0];
			lane[1] = w0l[1];
			lane[4] = w1l[0];
			lane[5] = w1l[1];
			lane[8] = w2l[0];
			lane[9] = horizontal_fold(acc);
		}
		if let Some(lane) = batch.get_mut(3) {
			let acc = unsafe {
				xor3(
					_mm256_permute4x64_epi64::<0xFF>(v0l),
					_mm256_permute4x64_epi64::<0xFF>(v1l),
					_mm256_permute4x64_epi64::<0xFF>(v2l),
				)
			};
			lane[0] = w0l[2];
			lane[1] = w0l[3];
			lane[4] = w1l[2];
			lane[5] = w1l[3];
			lane[8] = w2l[2];
			lane[9] = horizontal_fold(acc);
		}

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
