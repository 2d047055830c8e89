// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: main.rs

use rustgenmac::rgm::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
