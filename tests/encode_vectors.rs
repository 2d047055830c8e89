// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rustgenmac::rgm::algorithm::HmacAlgorithm;
use rustgenmac::rgm::encoder::encode;

const KEY: &str = "key";
const MESSAGE: &str =
	"The quick brown fox jumps over the lazy dog";

fn signature_hex(algorithm: HmacAlgorithm) -> String {
	let signature = encode(MESSAGE, KEY, algorithm);
	let raw = STANDARD
		.decode(signature)
		.expect("signature must be valid base64");
	hex::encode(raw)
}

#[test]
fn hmac_md5_matches_published_vector() {
	assert_eq!(
		signature_hex(HmacAlgorithm::Md5),
		"80070713463e7749b90c2dc24911e275"
	);
}

#[test]
fn hmac_sha1_matches_published_vector() {
	assert_eq!(
		signature_hex(HmacAlgorithm::Sha1),
		"de7c9b85b8b78aa6bc8a7a36f70a90701c9db4d9"
	);
}

#[test]
fn hmac_sha1_base64_form_matches_fixture() {
	assert_eq!(
		encode(MESSAGE, KEY, HmacAlgorithm::Sha1),
		"3nybhbi3iqa8ino29wqQcBydtNk="
	);
}

#[test]
fn hmac_sha256_matches_published_vector() {
	assert_eq!(
		signature_hex(HmacAlgorithm::Sha256),
		"f7bc83f430538424b13298e6aa6fb143ef4d59a14946175997479dbc2d1a3cd8"
	);
}

#[test]
fn hmac_sha512_matches_published_vector() {
	assert_eq!(
        signature_hex(HmacAlgorithm::Sha512),
        "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
    );
}
