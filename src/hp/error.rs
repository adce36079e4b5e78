// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: error.rs
// Author: hashpipe maintainers

//! Error taxonomy shared by the sinks, the pipeline and the CLI.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineErrorKind {
	Configuration,
	NotFound,
	Io,
	InvalidEncoding,
}

#[derive(Debug, Error)]
pub enum PipelineError {
	/// Rejected before any input is opened.
	#[error("configuration error: {0}")]
	Configuration(String),

	#[error("file not found: {}", .0.display())]
	NotFound(PathBuf),

	#[error("{context}: {source}")]
	Io {
		context: String,
		#[source]
		source: io::Error,
	},

	#[error("invalid base64 input: {0}")]
	InvalidEncoding(#[from] base64::DecodeError),
}

impl PipelineError {
	pub fn configuration(message: impl Into<String>) -> Self {
		Self::Configuration(message.into())
	}

	pub fn io(context: impl Into<String>, source: io::Error) -> Self {
		Self::Io {
			context: context.into(),
			source,
		}
	}

	pub fn kind(&self) -> PipelineErrorKind {
		match self {
			Self::Configuration(_) => PipelineErrorKind::Configuration,
			Self::NotFound(_) => PipelineErrorKind::NotFound,
			Self::Io { .. } => PipelineErrorKind::Io,
			Self::InvalidEncoding(_) => {
				PipelineErrorKind::InvalidEncoding
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kind_matches_variant() {
		let err = PipelineError::configuration("unknown hash `x`");
		assert_eq!(err.kind(), PipelineErrorKind::Configuration);
		assert_eq!(
			err.to_string(),
			"configuration error: unknown hash `x`"
		);

		let err = PipelineError::NotFound(PathBuf::from("missing.bin"));
		assert_eq!(err.kind(), PipelineErrorKind::NotFound);
		assert_eq!(err.to_string(), "file not found: missing.bin");
	}

	#[test]
	fn io_error_keeps_context_and_source() {
		let err = PipelineError::io(
			"failed to read `a.txt`",
			io::Error::new(io::ErrorKind::Other, "disk on fire"),
		);
		assert_eq!(err.kind(), PipelineErrorKind::Io);
		assert_eq!(err.to_string(), "failed to read `a.txt`: disk on fire");
		assert!(std::error::Error::source(&err).is_some());
	}
}
