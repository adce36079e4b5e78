// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: digest.rs
// Author: hashpipe maintainers

use super::StreamSink;
use crate::hp::error::PipelineError;
use digest::{Digest, DynDigest};

pub struct DigestSink {
	digest: Box<dyn DynDigest>,
}

impl DigestSink {
	pub fn new(digest: Box<dyn DynDigest>) -> Self {
		Self { digest }
	}

	pub fn md5() -> Self {
		Self::new(Box::new(md5::Md5::new()))
	}

	pub fn sha224() -> Self {
		Self::new(Box::new(sha2::Sha224::new()))
	}

	pub fn sha256() -> Self {
		Self::new(Box::new(sha2::Sha256::new()))
	}

	pub fn output_size(&self) -> usize {
		self.digest.output_size()
	}
}

impl StreamSink for DigestSink {
	fn write(&mut self, chunk: &[u8]) -> Result<(), PipelineError> {
		self.digest.update(chunk);
		Ok(())
	}

	fn finalize(self: Box<Self>) -> Result<Vec<u8>, PipelineError> {
		Ok(self.digest.finalize().into_vec())
	}
}
