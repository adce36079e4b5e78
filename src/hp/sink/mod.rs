// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// Module: sink
// Author: hashpipe maintainers

//! Streaming sinks: anything that accepts byte chunks and yields one
//! finalized blob. Digests stream; base64 buffers until finalize.

pub mod base64;
pub mod digest;

use crate::hp::error::PipelineError;

pub use self::base64::{Base64Direction, Base64Sink};
pub use self::digest::DigestSink;

pub trait StreamSink {
	fn write(&mut self, chunk: &[u8]) -> Result<(), PipelineError>;

	/// Consumes the sink, so nothing can be written after the result
	/// has been produced.
	fn finalize(self: Box<Self>) -> Result<Vec<u8>, PipelineError>;
}

/// Feed a complete buffer into `sink` and finalize it.
pub fn consume_bytes(
	data: &[u8],
	mut sink: Box<dyn StreamSink>,
) -> Result<Vec<u8>, PipelineError> {
	sink.write(data)?;
	sink.finalize()
}
