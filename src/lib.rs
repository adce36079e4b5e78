// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: lib.rs
// Author: hashpipe maintainers

pub mod hp {
	pub mod algorithm;
	pub mod app;
	pub mod config;
	pub mod error;
	pub mod output;
	pub mod pipeline;
	pub mod sink;
	pub mod source;
}
