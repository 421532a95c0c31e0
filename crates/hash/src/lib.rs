// Copyright 2026 XC320 Project Developers

//! XC320, a 320-bit cryptographic hash function.
//!
//! XC320 is an ARX construction over five 64-bit state words. Input is
//! absorbed in 128-byte blocks; finalization runs five hierarchical
//! "BIG-box" stages, each driving ten SIMD-amenable "LITTLE-box" lanes,
//! followed by multi-round output mixing. Digests are bit-identical on
//! every platform, endianness and back-end.
//!
//! The streaming hasher [`Xc320`] implements the RustCrypto [`digest`]
//! traits. The [`single_shot`] function is a distinct digest that applies
//! additional output mixing; the two deliberately disagree, so pick the one
//! your counterpart uses.
//!
//! ```
//! use digest::Digest;
//! use xc320_hash::{single_shot, Xc320};
//!
//! let streamed = Xc320::digest(b"Hello, World");
//! let oneshot = single_shot(b"Hello, World");
//! assert_ne!(streamed.as_slice(), oneshot);
//! ```

pub mod arch;
mod big_box;
mod compress;
pub mod consts;
mod encoding;
mod hasher;
pub mod mix;
mod salt;

pub use arch::{force_scalar, is_forced_scalar, Backend};
pub use consts::{BLOCK_SIZE, DIGEST_SIZE};
pub use digest;
pub use encoding::*;
pub use hasher::*;
