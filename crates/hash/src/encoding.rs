// Copyright 2026 XC320 Project Developers

//! Hex encoding of digests and digest comparison.

use crate::consts::DIGEST_SIZE;

/// Error parsing a hex-encoded digest.
#[derive(Debug, thiserror::Error)]
pub enum ParseDigestError {
	#[error("digest must be {expected} hex characters, got {0}", expected = DIGEST_SIZE * 2)]
	InvalidLength(usize),
	#[error("invalid hex: {0}")]
	InvalidHex(#[from] hex::FromHexError),
}

/// Lowercase hex form of a digest, 80 characters.
pub fn encode_digest(digest: &[u8; DIGEST_SIZE]) -> String {
	hex::encode(digest)
}

/// Parse an 80-character hex digest. At most one trailing newline or
/// carriage return is accepted, matching digests read back from files; a
/// CRLF-terminated line is rejected.
pub fn parse_digest(s: &str) -> Result<[u8; DIGEST_SIZE], ParseDigestError> {
	let s = s
		.strip_suffix('\n')
		.or_else(|| s.strip_suffix('\r'))
		.unwrap_or(s);
	if s.len() != DIGEST_SIZE * 2 {
		return Err(ParseDigestError::InvalidLength(s.len()));
	}
	let mut digest = [0u8; DIGEST_SIZE];
	hex::decode_to_slice(s, &mut digest)?;
	Ok(digest)
}

/// Byte equality of two digests. Digests are outputs, not secrets, so this
/// is not constant-time.
pub fn digest_eq(a: &[u8; DIGEST_SIZE], b: &[u8; DIGEST_SIZE]) -> bool {
	a == b
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trips_through_hex() {
		let digest = core::array::from_fn(|i| i as u8);
		let encoded = encode_digest(&digest);
		assert_eq!(encoded.len(), 80);
		assert_eq!(parse_digest(&encoded).unwrap(), digest);
	}

	#[test]
	fn accepts_one_trailing_terminator() {
		let digest = [0xAB; DIGEST_SIZE];
		let encoded = encode_digest(&digest);
		assert_eq!(parse_digest(&format!("{encoded}\n")).unwrap(), digest);
		assert_eq!(parse_digest(&format!("{encoded}\r")).unwrap(), digest);
		assert!(matches!(
			parse_digest(&format!("{encoded}\r\n")),
			Err(ParseDigestError::InvalidLength(81))
		));
	}

	#[test]
	fn rejects_bad_input() {
		assert!(matches!(parse_digest("abcd"), Err(ParseDigestError::InvalidLength(4))));
		let not_hex = "zz".repeat(DIGEST_SIZE);
		assert!(matches!(parse_digest(&not_hex), Err(ParseDigestError::InvalidHex(_))));
	}

	#[test]
	fn digest_eq_is_byte_equality() {
		let a = [7u8; DIGEST_SIZE];
		let mut b = a;
		assert!(digest_eq(&a, &b));
		b[39] ^= 1;
		assert!(!digest_eq(&a, &b));
	}
}
