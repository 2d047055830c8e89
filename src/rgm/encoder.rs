// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: encoder.rs

//! HMAC computation and base64 serialization for text inputs.

use super::algorithm::HmacAlgorithm;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

type HmacMd5 = Hmac<Md5>;
type HmacSha1 = Hmac<Sha1>;
type HmacSha224 = Hmac<Sha224>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha384 = Hmac<Sha384>;
type HmacSha512 = Hmac<Sha512>;

/// Computes `base64(HMAC(algorithm, key, message))` with the standard
/// padded RFC 4648 alphabet. Deterministic for identical inputs; empty
/// message and key are valid. The raw digest stays internal to the call.
pub fn encode(
	message: &str,
	key: &str,
	algorithm: HmacAlgorithm,
) -> String {
	let digest =
		raw_digest(message.as_bytes(), key.as_bytes(), algorithm);
	debug_assert_eq!(digest.len(), algorithm.digest_length());
	STANDARD.encode(digest)
}

fn raw_digest(
	message: &[u8],
	key: &[u8],
	algorithm: HmacAlgorithm,
) -> Vec<u8> {
	match algorithm {
		HmacAlgorithm::Md5 => keyed_digest::<HmacMd5>(message, key),
		HmacAlgorithm::Sha1 => keyed_digest::<HmacSha1>(message, key),
		HmacAlgorithm::Sha224 => {
			keyed_digest::<HmacSha224>(message, key)
		}
		HmacAlgorithm::Sha256 => {
			keyed_digest::<HmacSha256>(message, key)
		}
		HmacAlgorithm::Sha384 => {
			keyed_digest::<HmacSha384>(message, key)
		}
		HmacAlgorithm::Sha512 => {
			keyed_digest::<HmacSha512>(message, key)
		}
	}
}

fn keyed_digest<M: Mac + KeyInit>(
	message: &[u8],
	key: &[u8],
) -> Vec<u8> {
	// HMAC accepts keys of any length, so new_from_slice cannot fail.
	let mut mac = <M as Mac>::new_from_slice(key)
		.expect("HMAC accepts keys of any length");
	mac.update(message);
	mac.finalize().into_bytes().to_vec()
}
