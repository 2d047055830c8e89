// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: output.rs

//! Rendering of signature results for the CLI surface.

use super::algorithm::HmacAlgorithm;
use serde_json::json;

/// Where the signed text came from, for contextual output lines.
#[derive(Debug, Clone, Copy)]
pub enum SignatureInput<'a> {
	Inline(&'a str),
	StdinLine(&'a str),
}

impl<'a> SignatureInput<'a> {
	pub fn text(&self) -> &'a str {
		match self {
			SignatureInput::Inline(text) => text,
			SignatureInput::StdinLine(line) => line,
		}
	}

	pub fn source(&self) -> &'static str {
		match self {
			SignatureInput::Inline(_) => "inline",
			SignatureInput::StdinLine(_) => "stdin",
		}
	}
}

pub fn render_plain(
	signature: &str,
	input: &SignatureInput<'_>,
) -> String {
	format!("{} {}", signature, input.text())
}

pub fn render_json(
	algorithm: HmacAlgorithm,
	signature: &str,
	input: &SignatureInput<'_>,
) -> String {
	json!({
		"algorithm": algorithm.primitive_id(),
		"display_name": algorithm.display_name(),
		"legacy": algorithm.is_legacy(),
		"digest_length": algorithm.digest_length(),
		"signature": signature,
		"input": { "type": input.source(), "value": input.text() },
	})
	.to_string()
}

pub fn legacy_warning_message(algorithm: HmacAlgorithm) -> String {
	format!(
		"warning: {} is considered legacy per NIST SP 800-131A Rev.2 §3; prefer SHA-2 based HMAC variants",
		algorithm.display_name()
	)
}

#[cfg(test)]
mod tests {
	use super::{
		legacy_warning_message, render_json, render_plain,
		SignatureInput,
	};
	use crate::rgm::algorithm::HmacAlgorithm;

	#[test]
	fn plain_line_pairs_signature_with_input() {
		let line = render_plain(
			"3nybhbi3iqa8ino29wqQcBydtNk=",
			&SignatureInput::Inline("The quick brown fox"),
		);
		assert_eq!(
			line,
			"3nybhbi3iqa8ino29wqQcBydtNk= The quick brown fox"
		);
	}

	#[test]
	fn json_record_carries_algorithm_metadata() {
		let payload = render_json(
			HmacAlgorithm::Sha256,
			"sig",
			&SignatureInput::StdinLine("alpha"),
		);
		let value: serde_json::Value =
			serde_json::from_str(&payload).unwrap();
		assert_eq!(value["algorithm"], "hmac-sha256");
		assert_eq!(value["legacy"], false);
		assert_eq!(value["digest_length"], 32);
		assert_eq!(value["input"]["type"], "stdin");
		assert_eq!(value["input"]["value"], "alpha");
	}

	#[test]
	fn legacy_warning_names_the_algorithm() {
		let msg = legacy_warning_message(HmacAlgorithm::Md5);
		assert!(msg.contains("HMAC-MD5"));
		assert!(msg.starts_with("warning:"));
	}
}
