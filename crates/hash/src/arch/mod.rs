// Copyright 2026 XC320 Project Developers

//! LITTLE-box executor back-ends.
//!
//! The executor is a 4-wide kernel: four lanes form one batch, and the six
//! load slots of every lane are swept by the same vector equations. The
//! portable back-end evaluates those equations on `[u64; 4]` arrays; the
//! AVX2 back-end maps them onto 256-bit registers. Both are bit-exact, so a
//! context may run on either and produce the same digest.

use std::sync::atomic::{AtomicBool, Ordering};

use cfg_if::cfg_if;

use crate::consts::LANE_WORDS;

mod portable;

/// One LITTLE-box lane.
pub(crate) type Lane = [u64; LANE_WORDS];

static FORCE_SCALAR: AtomicBool = AtomicBool::new(false);

/// Force every context constructed from now on onto the portable back-end.
///
/// Digests are identical either way; the flag only pins the implementation.
pub fn force_scalar(force: bool) {
	FORCE_SCALAR.store(force, Ordering::Relaxed);
}

/// Whether [`force_scalar`] is currently set.
pub fn is_forced_scalar() -> bool {
	FORCE_SCALAR.load(Ordering::Relaxed)
}

/// The LITTLE-box executor variant a context runs on. Chosen once at
/// context construction and carried as a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Backend {
	#[default]
	Portable,
	#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
	Avx2,
}

impl Backend {
	/// Pick the widest back-end compiled in, honouring the force-scalar flag.
	pub fn detect() -> Self {
		if is_forced_scalar() {
			Self::Portable
		} else {
			Self::preferred()
		}
	}

	/// Run the LITTLE-box sweep over a batch of lanes in place.
	///
	/// Lanes are processed in groups of four; a short tail group is padded
	/// with zero lanes whose outputs are discarded.
	pub(crate) fn execute_little_boxes(self, lanes: &mut [Lane], salt: u64, round_base: u64) {
		match self {
			Self::Portable => portable::execute(lanes, salt, round_base),
			#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
			Self::Avx2 => avx2::execute(lanes, salt, round_base),
		}
	}
}

cfg_if! {
	if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
		mod avx2;

		impl Backend {
			fn preferred() -> Self {
				Self::Avx2
			}
		}
	} else {
		impl Backend {
			fn preferred() -> Self {
				Self::Portable
			}
		}
	}
}
