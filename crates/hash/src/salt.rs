// Copyright 2026 XC320 Project Developers

//! Salt derivation from the running hash state.

use crate::consts::SALT_SEED;

/// Derive the five salt words injected into a BIG-box stage.
///
/// Works on a 32-word copy of the seed table: the state is XORed into the
/// first five words, then seven rounds of position-dependent rotation
/// feedback run over all 32 words with a counter sweep. The cross term
/// `seed[(j + 3) & 7]` deliberately reads from the first eight words only;
/// the reduction below uses the same window.
pub(crate) fn derive_salt(state: &[u64; 5]) -> [u64; 5] {
	let mut seed = SALT_SEED;
	let mut counter = 0u64;

	for i in 0..5 {
		seed[i] ^= state[i];
	}

	for round in 0..7u32 {
		for j in 0..32 {
			let rot_a = (j as u32 * 7 + round * 3) % 64;
			let rot_b = (j as u32 * 5 + round * 2) % 64;
			seed[j] ^= seed[j].rotate_left(rot_a) ^ seed[(j + 3) & 7].rotate_right(rot_b);
			seed[j] = seed[j].wrapping_add(counter);
		}
		counter = counter.wrapping_add(0x7C5F8E4D3B2A6917);
	}

	let mut salt = [0u64; 5];
	for i in 0..5 {
		let mut v = seed[i] ^ seed[(i + 3) & 7];
		v ^= v >> 31;
		v = v.wrapping_mul(0x3A8F7E6D5C4B2918);
		v ^= v >> 29;
		v = v.wrapping_mul(0x276D9C5F8E3B41A2);
		salt[i] = v;
	}
	salt
}
