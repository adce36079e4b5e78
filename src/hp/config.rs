// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: config.rs
// Author: hashpipe maintainers

//! Immutable run configuration assembled by the CLI layer.

use crate::hp::algorithm::Algorithm;
use crate::hp::error::PipelineError;
use crate::hp::output::{FormatMode, OutputTarget};
use crate::hp::source::InputSource;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorStrategy {
	/// Stop at the first file that fails.
	FailFast,
	/// Process every file and report all failures at the end.
	Continue,
}

#[derive(Clone, Debug)]
pub struct ExitCodes {
	pub success: i32,
	pub recoverable: i32,
	pub fatal: i32,
}

impl Default for ExitCodes {
	fn default() -> Self {
		Self {
			success: 0,
			recoverable: 2,
			fatal: 1,
		}
	}
}

#[derive(Clone, Debug)]
pub struct RunConfig {
	pub algorithm: Algorithm,
	pub inputs: Vec<InputSource>,
	pub output: OutputTarget,
	pub format: Option<FormatMode>,
	pub banner: bool,
	pub strategy: ErrorStrategy,
	pub exit_codes: ExitCodes,
}

impl Default for RunConfig {
	fn default() -> Self {
		Self {
			algorithm: Algorithm::default(),
			inputs: vec![InputSource::Stdin],
			output: OutputTarget::Stdout,
			format: None,
			banner: true,
			strategy: ErrorStrategy::FailFast,
			exit_codes: ExitCodes::default(),
		}
	}
}

impl RunConfig {
	/// Build a configuration from raw command line values. The
	/// algorithm tag is resolved here so an unknown tag fails before
	/// any input is touched.
	pub fn new(
		algorithm: &str,
		inputs: &[String],
		output: Option<&str>,
	) -> Result<Self, PipelineError> {
		let inputs = if inputs.is_empty() {
			vec![InputSource::Stdin]
		} else {
			inputs
				.iter()
				.map(|designator| InputSource::from_designator(designator))
				.collect()
		};
		let config = Self {
			algorithm: Algorithm::from_tag(algorithm)?,
			inputs,
			output: OutputTarget::from_option(output),
			..Self::default()
		};
		config.validate()?;
		Ok(config)
	}

	pub fn with_format(mut self, format: Option<FormatMode>) -> Self {
		self.format = format;
		self
	}

	pub fn with_banner(mut self, banner: bool) -> Self {
		self.banner = banner;
		self
	}

	pub fn with_strategy(mut self, strategy: ErrorStrategy) -> Self {
		self.strategy = strategy;
		self
	}

	pub fn validate(&self) -> Result<(), PipelineError> {
		if self.inputs.is_empty() {
			return Err(PipelineError::configuration(
				"no input given",
			));
		}
		if self.inputs.len() > 1
			&& matches!(self.output, OutputTarget::File(_))
		{
			return Err(PipelineError::configuration(
				"an output file can only be used with a single input",
			));
		}
		let stdin_count = self
			.inputs
			.iter()
			.filter(|input| **input == InputSource::Stdin)
			.count();
		if stdin_count > 1 {
			return Err(PipelineError::configuration(
				"standard input can only be read once",
			));
		}
		Ok(())
	}

	pub fn format_mode(&self) -> FormatMode {
		self.format.unwrap_or_else(|| {
			FormatMode::select(self.algorithm.kind(), &self.output)
		})
	}

	/// Results are labelled with their file name only when several
	/// inputs share stdout and the banner is enabled.
	pub fn prefix_results(&self) -> bool {
		self.banner && self.inputs.len() > 1
	}
}
