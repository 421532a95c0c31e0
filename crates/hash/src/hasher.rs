// Copyright 2026 XC320 Project Developers

//! The XC320 streaming hasher and the single-shot digest.

use core::fmt;

use digest::{
	consts::U40, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

use crate::{
	arch::Backend,
	big_box,
	compress::compress_block,
	consts::{
		round_constant, BIG_BOX_COUNT, BLOCK_SIZE, DIGEST_SIZE, INITIAL_STATE, LITTLE_BOX_COUNT,
	},
};

/// Incremental XC320 hasher.
///
/// Implements the RustCrypto [`digest`] traits, so the usual one-liner is
/// available: `Xc320::digest(data)` produces the 40-byte streaming digest.
/// For the single-shot contract with its extra output mixing, use
/// [`single_shot`]; the two digests intentionally differ.
///
/// The whole context is a flat ~1.2 KiB aggregate and lives on the stack.
#[derive(Clone)]
pub struct Xc320 {
	state: [u64; 5],
	little_boxes: [[u64; 10]; LITTLE_BOX_COUNT],
	big_boxes: [[u64; 5]; BIG_BOX_COUNT],
	buffer: [u8; BLOCK_SIZE],
	buffer_len: usize,
	total_bits: u64,
	backend: Backend,
	wiped: bool,
}

impl Default for Xc320 {
	fn default() -> Self {
		let mut state = INITIAL_STATE;
		state[0] ^= 0x9E3779B97F4A7C15;
		state[1] ^= 0xBF58476D1CE4E5B9;
		state[2] ^= 0x94D049BB133111EB;

		// Init-mix runs in place in ascending order; the cross-word XOR
		// reads partially-updated state.
		for i in 0..5 {
			state[i] ^= round_constant(i as u64 * 10);
			state[i] = state[i].rotate_left(17 + i as u32 * 7);
			state[i] = state[i].wrapping_mul(0x9E3779B97F4A7C15);
			state[i] ^= state[(i + 2) % 5];
		}

		Self {
			state,
			little_boxes: [[0; 10]; LITTLE_BOX_COUNT],
			big_boxes: [[0; 5]; BIG_BOX_COUNT],
			buffer: [0; BLOCK_SIZE],
			buffer_len: 0,
			total_bits: 0,
			backend: Backend::detect(),
			wiped: false,
		}
	}
}

impl Xc320 {
	/// Equivalent to `Self::default()`.
	pub fn new() -> Self {
		Self::default()
	}

	/// The back-end this context was constructed with.
	pub fn backend(&self) -> Backend {
		self.backend
	}

	/// Total bits consumed so far: 8 × the bytes passed to `update`.
	pub fn total_bits(&self) -> u64 {
		self.total_bits
	}

	/// Overwrite all owned state with zeros. The context must be reset
	/// before it can hash again; hashing on a wiped context is a debug
	/// assertion failure.
	pub fn wipe(&mut self) {
		self.state = [0; 5];
		self.little_boxes = [[0; 10]; LITTLE_BOX_COUNT];
		self.big_boxes = [[0; 5]; BIG_BOX_COUNT];
		self.buffer = [0; BLOCK_SIZE];
		self.buffer_len = 0;
		self.total_bits = 0;
		self.backend = Backend::Portable;
		self.wiped = true;
	}

	/// Pad the tail, run the last compression, drive the five BIG-box
	/// stages and the output mixing, and serialize the state.
	fn finalize_state(&mut self) -> [u8; DIGEST_SIZE] {
		debug_assert!(!self.wiped, "context was wiped; reset it before finalizing");
		// A single 0x80 marker byte, zero-filled to the block boundary; no
		// length suffix. The marker always fits because `update` flushes
		// full blocks eagerly.
		self.buffer[self.buffer_len] = 0x80;
		for byte in &mut self.buffer[self.buffer_len + 1..] {
			*byte = 0;
		}
		let block = self.buffer;
		compress_block(&mut self.state, &block);

		for bb in 0..BIG_BOX_COUNT {
			big_box::execute_stage(
				&self.state,
				&mut self.little_boxes,
				&mut self.big_boxes,
				bb,
				bb as u64 * 2000,
				self.backend,
			);
		}

		// Per-word diffusion with a rotating schedule.
		const ROT: [u32; 5] = [31, 27, 33, 23, 29];
		for i in 0..5 {
			let mut x = self.state[i];
			x ^= x.rotate_right(ROT[i]);
			x = x.wrapping_mul(0x510E9BB7927522F5);
			x = x.wrapping_add(0x243F6A8885A308D3);
			x ^= x.rotate_right(ROT[(i + 1) % 5]);
			x = x.wrapping_mul(0xA0761D647ABD642F);
			x ^= x >> 23;
			x ^= x >> 38;
			self.state[i] = x;
		}

		// Fold every BIG-box sub-state into every word.
		let mut folded = [0u64; 5];
		for i in 0..5 {
			let mut acc = self.state[i];
			for bb in 0..BIG_BOX_COUNT {
				acc ^= self.big_boxes[bb][i];
				acc = acc.rotate_right(19) ^ acc.rotate_left(37);
				acc = acc.wrapping_add(self.big_boxes[bb][(i + 2) % 5]);
				acc = acc.wrapping_mul(0x9E3779B97F4A7C15);
			}
			acc ^= acc >> 29;
			acc = acc.wrapping_mul(0xBF58476D1CE4E5B9);
			acc ^= acc >> 27;
			acc = acc.wrapping_mul(0x94D049BB133111EB);
			acc ^= acc >> 31;
			folded[i] = acc;
		}
		self.state = folded;

		// Three rounds of sub-state feedback.
		for round in 0..3 {
			for i in 0..5 {
				self.state[i] = extra_mix(self.state[i]);
				self.state[i] ^= self.big_boxes[round % BIG_BOX_COUNT][i];
				self.state[i] = self.state[i].rotate_left(17 + round as u32 * 5);
			}
		}

		// Five rounds of whole-state feedback.
		for _ in 0..5 {
			let mut m = 0u64;
			for i in 0..5 {
				m ^= self.state[i];
				m = m.rotate_left(17) ^ self.state[(i + 2) % 5];
			}
			for i in 0..5 {
				self.state[i] ^= m.rotate_left(i as u32 * 13);
				self.state[i] = self.state[i].wrapping_mul(0x9E3779B97F4A7C15);
				self.state[i] ^= self.state[(i + 1) % 5] >> (i * 7 + 3);
				self.state[i] = self.state[i].rotate_right(23 + i as u32 * 5);
			}
		}

		serialize_state(&self.state)
	}
}

impl HashMarker for Xc320 {}

impl Update for Xc320 {
	fn update(&mut self, mut data: &[u8]) {
		debug_assert!(!self.wiped, "context was wiped; reset it before hashing");
		self.total_bits = self.total_bits.wrapping_add((data.len() as u64).wrapping_mul(8));

		if self.buffer_len != 0 {
			let to_copy = usize::min(data.len(), BLOCK_SIZE - self.buffer_len);
			self.buffer[self.buffer_len..self.buffer_len + to_copy]
				.copy_from_slice(&data[..to_copy]);
			data = &data[to_copy..];
			self.buffer_len += to_copy;

			if self.buffer_len == BLOCK_SIZE {
				let block = self.buffer;
				compress_block(&mut self.state, &block);
				self.buffer_len = 0;
			}
		}

		// Whole blocks are compressed straight out of the input.
		let mut chunks = data.chunks_exact(BLOCK_SIZE);
		for chunk in &mut chunks {
			compress_block(&mut self.state, chunk.try_into().expect("chunk is one block"));
		}

		let remaining = chunks.remainder();
		if !remaining.is_empty() {
			self.buffer[..remaining.len()].copy_from_slice(remaining);
			self.buffer_len = remaining.len();
		}
	}
}

impl OutputSizeUser for Xc320 {
	type OutputSize = U40;
}

impl FixedOutput for Xc320 {
	fn finalize_into(mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.finalize_state());
	}
}

impl Reset for Xc320 {
	fn reset(&mut self) {
		*self = Self::default();
	}
}

impl FixedOutputReset for Xc320 {
	fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
		out.copy_from_slice(&self.finalize_state());
		Reset::reset(self);
	}
}

impl fmt::Debug for Xc320 {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Xc320")
			.field("backend", &self.backend)
			.field("total_bits", &self.total_bits)
			.finish_non_exhaustive()
	}
}

/// Hash a complete message in one call.
///
/// Applies three extra mixing passes on top of the streaming pipeline, so
/// the result is deliberately not equal to `Xc320::digest(data)`; callers
/// must use whichever variant their counterpart uses.
pub fn single_shot(data: impl AsRef<[u8]>) -> [u8; DIGEST_SIZE] {
	let mut hasher = Xc320::default();
	Update::update(&mut hasher, data.as_ref());
	let digest = hasher.finalize_state();
	hasher.wipe();
	remix_digest(&digest)
}

/// The extra output mixing the single-shot digest applies on top of the
/// streaming digest: three accumulator folding passes over the five words,
/// then one extra-mix sweep. `single_shot(m)` equals
/// `remix_digest(&streaming(m))` by construction.
pub fn remix_digest(digest: &[u8; DIGEST_SIZE]) -> [u8; DIGEST_SIZE] {
	let mut words = [0u64; 5];
	for (word, chunk) in words.iter_mut().zip(digest.chunks_exact(8)) {
		*word = u64::from_le_bytes(chunk.try_into().expect("chunk is 8 bytes"));
	}

	for _ in 0..3 {
		let mut acc = 0u64;
		for i in 0..5 {
			acc ^= words[i];
			words[i] = words[i].rotate_right(19) ^ acc.rotate_left(37);
			words[i] = words[i].wrapping_mul(0xBF58476D1CE4E5B9);
			words[i] ^= words[(i + 2) % 5] >> 27;
		}
	}

	for i in 0..5 {
		words[i] = extra_mix(words[i]);
		words[i] ^= words[(i + 2) % 5];
	}

	serialize_state(&words)
}

/// splitmix-style finisher with a rotation feedback tail.
fn extra_mix(mut x: u64) -> u64 {
	x ^= x >> 27;
	x = x.wrapping_mul(0x9E3779B97F4A7C15);
	x ^= x >> 31;
	x = x.wrapping_mul(0xBF58476D1CE4E5B9);
	x ^= x >> 29;
	x.wrapping_add(x.rotate_left(41))
}

fn serialize_state(words: &[u64; 5]) -> [u8; DIGEST_SIZE] {
	let mut out = [0u8; DIGEST_SIZE];
	for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
		chunk.copy_from_slice(&word.to_le_bytes());
	}
	out
}
