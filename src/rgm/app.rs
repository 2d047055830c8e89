// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: app.rs

//! CLI wiring and dispatch for `rgm`.

use crate::rgm::algorithm::HmacAlgorithm;
use crate::rgm::encoder;
use crate::rgm::output::{
	legacy_warning_message, render_json, render_plain, SignatureInput,
};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::io::{self, BufRead};
use strum::IntoEnumIterator;
use zeroize::Zeroize;

#[derive(Parser, Debug)]
#[command(
	name = "rgm",
	version,
	about = "Generate base64-encoded HMAC signatures for strings and stdin."
)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Sign a single string value.
	String {
		/// HMAC digest algorithm.
		#[arg(short, long)]
		algorithm: HmacAlgorithm,
		/// Shared secret key, passed as UTF-8 text.
		#[arg(short, long)]
		key: String,
		/// The value to authenticate.
		#[arg(value_name = "MESSAGE")]
		message: String,
		/// Print only the base64 signature.
		#[arg(long)]
		signature_only: bool,
		/// Emit a JSON record instead of plain output.
		#[arg(long, conflicts_with = "signature_only")]
		json: bool,
	},
	/// Sign each non-empty line read from stdin.
	Stdio {
		#[arg(short, long)]
		algorithm: HmacAlgorithm,
		#[arg(short, long)]
		key: String,
		#[arg(long)]
		signature_only: bool,
		#[arg(long, conflicts_with = "signature_only")]
		json: bool,
	},
	/// List the supported algorithms with their digest lengths.
	List,
}

pub fn run() -> Result<(), Box<dyn Error>> {
	match Cli::parse().command {
		Command::String {
			algorithm,
			mut key,
			message,
			signature_only,
			json,
		} => {
			print_legacy_banner(algorithm);
			let signature = encoder::encode(&message, &key, algorithm);
			key.zeroize();
			emit(
				algorithm,
				&signature,
				&SignatureInput::Inline(&message),
				signature_only,
				json,
			);
			Ok(())
		}
		Command::Stdio {
			algorithm,
			mut key,
			signature_only,
			json,
		} => {
			print_legacy_banner(algorithm);
			let mut warned_blank = false;
			let stdin = io::stdin();
			for line_result in stdin.lock().lines() {
				let line = line_result?;
				if line.is_empty() {
					if !warned_blank {
						eprintln!("warning: skipping empty stdin line");
						warned_blank = true;
					}
					continue;
				}
				let signature =
					encoder::encode(&line, &key, algorithm);
				emit(
					algorithm,
					&signature,
					&SignatureInput::StdinLine(&line),
					signature_only,
					json,
				);
			}
			key.zeroize();
			Ok(())
		}
		Command::List => {
			for algorithm in HmacAlgorithm::iter() {
				let marker = if algorithm.is_legacy() {
					" (legacy)"
				} else {
					""
				};
				println!(
					"{:<12} {:>2} bytes  {}{}",
					algorithm.primitive_id(),
					algorithm.digest_length(),
					algorithm.display_name(),
					marker
				);
			}
			Ok(())
		}
	}
}

fn print_legacy_banner(algorithm: HmacAlgorithm) {
	if algorithm.is_legacy() {
		eprintln!("{}", legacy_warning_message(algorithm));
	}
}

fn emit(
	algorithm: HmacAlgorithm,
	signature: &str,
	input: &SignatureInput<'_>,
	signature_only: bool,
	json: bool,
) {
	if signature_only {
		println!("{}", signature);
	} else if json {
		println!("{}", render_json(algorithm, signature, input));
	} else {
		println!("{}", render_plain(signature, input));
	}
}
