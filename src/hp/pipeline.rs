// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: pipeline.rs
// Author: hashpipe maintainers

//! Streams an input through a sink and emits the finalized result.

use crate::hp::config::{ErrorStrategy, RunConfig};
use crate::hp::error::PipelineError;
use crate::hp::output::{FormatMode, OutputTarget};
use crate::hp::sink::StreamSink;
use crate::hp::source::InputSource;
use std::io::{self, Read};

const READ_BUFFER_SIZE: usize = 8192;

/// Copy `reader` into `sink` until end of stream. Returns the number of
/// bytes consumed.
pub fn consume_reader<R: Read>(
	mut reader: R,
	sink: &mut dyn StreamSink,
	context: &str,
) -> Result<u64, PipelineError> {
	let mut buffer = [0u8; READ_BUFFER_SIZE];
	let mut total = 0u64;
	loop {
		let n = match reader.read(&mut buffer) {
			Ok(0) => break,
			Ok(n) => n,
			Err(err) if err.kind() == io::ErrorKind::Interrupted => {
				continue
			}
			Err(err) => {
				return Err(PipelineError::io(
					format!("failed to read {}", context),
					err,
				))
			}
		};
		sink.write(&buffer[..n])?;
		total += n as u64;
	}
	Ok(total)
}

/// Read `source` to exhaustion through `sink` and return the finalized
/// result without emitting it.
pub fn compute(
	source: &InputSource,
	mut sink: Box<dyn StreamSink>,
) -> Result<Vec<u8>, PipelineError> {
	let reader = source.open()?;
	let bytes = consume_reader(reader, sink.as_mut(), &source.to_string())?;
	log::debug!("read {} bytes from {}", bytes, source);
	sink.finalize()
}

/// Single linear pass: open, stream, finalize, format, emit.
pub fn run(
	source: &InputSource,
	sink: Box<dyn StreamSink>,
	destination: &OutputTarget,
	format: FormatMode,
) -> Result<(), PipelineError> {
	emit(source, sink, destination, format, None)
}

fn emit(
	source: &InputSource,
	sink: Box<dyn StreamSink>,
	destination: &OutputTarget,
	format: FormatMode,
	prefix: Option<&str>,
) -> Result<(), PipelineError> {
	let result = compute(source, sink)?;
	let payload = format.render(&result);
	log::debug!(
		"writing {} bytes ({}) to {}",
		payload.len(),
		format,
		destination
	);
	destination.emit(&payload, prefix)
}

#[derive(Debug)]
pub struct FileFailure {
	pub source: InputSource,
	pub error: PipelineError,
}

#[derive(Debug, Default)]
pub struct RunReport {
	pub succeeded: usize,
	pub failures: Vec<FileFailure>,
}

impl RunReport {
	pub fn is_success(&self) -> bool {
		self.failures.is_empty()
	}
}

/// Drives one run over every configured input, one after another.
pub struct Pipeline {
	config: RunConfig,
}

impl Pipeline {
	pub fn new(config: RunConfig) -> Result<Self, PipelineError> {
		config.validate()?;
		Ok(Self { config })
	}

	pub fn config(&self) -> &RunConfig {
		&self.config
	}

	pub fn process(
		&self,
		source: &InputSource,
	) -> Result<(), PipelineError> {
		let algorithm = self.config.algorithm;
		log::debug!(
			"hashing {} with {}",
			source,
			algorithm.display_name()
		);
		let label = source.to_string();
		let prefix = self
			.config
			.prefix_results()
			.then_some(label.as_str());
		emit(
			source,
			algorithm.create_sink(),
			&self.config.output,
			self.config.format_mode(),
			prefix,
		)
	}

	/// Process every input. Under [`ErrorStrategy::FailFast`] the first
	/// error is returned; otherwise failures are collected in the
	/// report.
	pub fn execute(&self) -> Result<RunReport, PipelineError> {
		let mut report = RunReport::default();
		for source in &self.config.inputs {
			match self.process(source) {
				Ok(()) => report.succeeded += 1,
				Err(error) => match self.config.strategy {
					ErrorStrategy::FailFast => return Err(error),
					ErrorStrategy::Continue => {
						log::warn!("skipping {}: {}", source, error);
						report.failures.push(FileFailure {
							source: source.clone(),
							error,
						});
					}
				},
			}
		}
		Ok(report)
	}

	pub fn exit_code(&self, report: &RunReport) -> i32 {
		if report.is_success() {
			self.config.exit_codes.success
		} else {
			self.config.exit_codes.recoverable
		}
	}
}
