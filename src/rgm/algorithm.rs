// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: algorithm.rs

//! Closed catalog of HMAC digest algorithms and their derived constants.

use clap::ValueEnum;
use strum::EnumIter;

/// Digest families supported for HMAC signing. The set is closed: every
/// variant carries a primitive identifier and a digest length, and both
/// mappings are exhaustive match expressions checked by the compiler.
#[derive(
	Clone, Copy, Debug, Eq, PartialEq, Hash, ValueEnum, EnumIter,
)]
#[value(rename_all = "lower")]
pub enum HmacAlgorithm {
	Md5,
	Sha1,
	Sha224,
	Sha256,
	Sha384,
	Sha512,
}

impl HmacAlgorithm {
	/// Stable identifier of the underlying HMAC primitive, used for
	/// listing and JSON output.
	pub const fn primitive_id(self) -> &'static str {
		match self {
			Self::Md5 => "hmac-md5",
			Self::Sha1 => "hmac-sha1",
			Self::Sha224 => "hmac-sha224",
			Self::Sha256 => "hmac-sha256",
			Self::Sha384 => "hmac-sha384",
			Self::Sha512 => "hmac-sha512",
		}
	}

	/// Raw digest size in bytes produced by the primitive.
	pub const fn digest_length(self) -> usize {
		match self {
			Self::Md5 => 16,
			Self::Sha1 => 20,
			Self::Sha224 => 28,
			Self::Sha256 => 32,
			Self::Sha384 => 48,
			Self::Sha512 => 64,
		}
	}

	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Md5 => "HMAC-MD5",
			Self::Sha1 => "HMAC-SHA1",
			Self::Sha224 => "HMAC-SHA224",
			Self::Sha256 => "HMAC-SHA256",
			Self::Sha384 => "HMAC-SHA384",
			Self::Sha512 => "HMAC-SHA512",
		}
	}

	/// MD5 and SHA-1 are legacy per NIST SP 800-131A Rev.2 §3.
	pub const fn is_legacy(self) -> bool {
		matches!(self, Self::Md5 | Self::Sha1)
	}
}

impl std::fmt::Display for HmacAlgorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.primitive_id())
	}
}
