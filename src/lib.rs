// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: lib.rs

pub mod rgm {
	pub mod algorithm;
	pub mod app;
	pub mod encoder;
	pub mod output;
}
