// Copyright 2026 XC320 Project Developers

//! The per-block compression function.

use crate::consts::BLOCK_SIZE;

/// Parse a 128-byte block and fold it into the hash state.
///
/// Block words are read little-endian on every platform.
pub(crate) fn compress_block(state: &mut [u64; 5], block: &[u8; BLOCK_SIZE]) {
	let mut words = [0u64; 16];
	for (word, chunk) in words.iter_mut().zip(block.chunks_exact(8)) {
		*word = u64::from_le_bytes(chunk.try_into().expect("chunk is 8 bytes"));
	}
	compress_words(state, &words);
}

/// The five-iteration ARX state update.
///
/// Iterations update the state in place in ascending order, so the
/// neighbouring reads `state[(i + 1) % 5]` and `state[(i + 4) % 5]` observe
/// partially-updated words. This ordering is part of the contract, as is the
/// fact that the last block word never enters the update.
pub(crate) fn compress_words(state: &mut [u64; 5], block: &[u64; 16]) {
	for i in 0..5 {
		let mut a = state[i];
		let b = block[i];
		let c = block[i + 5];
		let d = block[i + 10];

		a = a.wrapping_add(b ^ 0x6A09E667BB67AE85).rotate_left(13);
		a = (a ^ c.wrapping_add(0x3C6EF372A54FF53A)).rotate_left(29);
		a = a.wrapping_add(d ^ 0x510E527F9B05688C).rotate_left(37);

		a ^= state[(i + 1) % 5];
		a = a.wrapping_add(state[(i + 4) % 5]).rotate_left(17);

		a ^= a >> 32;
		a ^= a << 21;
		a = a.wrapping_mul(0x1F83D9AB5BE0CD19);
		a ^= a >> 29;
		a ^= a << 17;

		state[i] = a;
	}
}
