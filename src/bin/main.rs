// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: main.rs
// Author: hashpipe maintainers

use hashpipe::hp::app;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	app::run()?;
	Ok(())
}
