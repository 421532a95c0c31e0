// Copyright 2026 XC320 Project Developers

//! BIG-box stages: each derives a salt from the running state, drives ten
//! LITTLE-box lanes and folds them into one five-word sub-state.

use crate::{
	arch::{Backend, Lane},
	consts::{round_constant, BIG_BOX_COUNT, LITTLE_BOX_COUNT},
	mix::gamma_mix,
	salt::derive_salt,
};

/// Run BIG-box stage `box_index` with round base `round_base`.
///
/// Each lane carries the state XORed with the salt in its low half and the
/// state XORed with table constants in its high half, and is executed as a
/// batch of one. The fold XORs even slots and adds odd slots in ascending
/// lane order; wrapping addition makes that order part of the contract.
pub(crate) fn execute_stage(
	state: &[u64; 5],
	little_boxes: &mut [Lane; LITTLE_BOX_COUNT],
	big_boxes: &mut [[u64; 5]; BIG_BOX_COUNT],
	box_index: usize,
	round_base: u64,
	backend: Backend,
) {
	let salt = derive_salt(state);

	for (lb, lane) in little_boxes.iter_mut().enumerate() {
		for i in 0..5 {
			lane[i] = state[i] ^ salt[i];
			lane[i + 5] = state[i] ^ round_constant((lb * 10 + i) as u64);
		}
		let salt_variation = salt[lb % 5] ^ round_constant((lb * 10) as u64);
		backend.execute_little_boxes(
			std::slice::from_mut(lane),
			salt_variation,
			round_base.wrapping_add(lb as u64 * 10),
		);
	}

	for i in 0..5 {
		let mut folded = 0u64;
		for lane in little_boxes.iter() {
			folded ^= lane[i * 2];
			folded = folded.wrapping_add(lane[i * 2 + 1]);
		}
		big_boxes[box_index][i] = gamma_mix(
			folded,
			salt[i],
			round_constant((box_index * 100 + i) as u64),
			round_base.wrapping_add(1000),
		);
	}
}
