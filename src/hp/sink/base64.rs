// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: base64.rs
// Author: hashpipe maintainers

//! Base64 sinks. Both directions buffer the whole input, so memory use
//! grows with the input size.

use super::StreamSink;
use crate::hp::error::PipelineError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Base64Direction {
	Encode,
	Decode,
}

pub struct Base64Sink {
	direction: Base64Direction,
	buffer: Vec<u8>,
}

impl Base64Sink {
	pub fn new(direction: Base64Direction) -> Self {
		Self {
			direction,
			buffer: Vec::new(),
		}
	}

	pub fn encoder() -> Self {
		Self::new(Base64Direction::Encode)
	}

	pub fn decoder() -> Self {
		Self::new(Base64Direction::Decode)
	}

	pub fn buffered(&self) -> usize {
		self.buffer.len()
	}
}

impl StreamSink for Base64Sink {
	fn write(&mut self, chunk: &[u8]) -> Result<(), PipelineError> {
		self.buffer.extend_from_slice(chunk);
		Ok(())
	}

	fn finalize(self: Box<Self>) -> Result<Vec<u8>, PipelineError> {
		match self.direction {
			Base64Direction::Encode => {
				Ok(STANDARD.encode(&self.buffer).into_bytes())
			}
			Base64Direction::Decode => {
				// Line breaks are allowed anywhere in encoded input.
				let encoded: Vec<u8> = self
					.buffer
					.into_iter()
					.filter(|b| !matches!(b, b'\r' | b'\n'))
					.collect();
				Ok(STANDARD.decode(encoded)?)
			}
		}
	}
}
