// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: source.rs
// Author: hashpipe maintainers

//! Input resolution: a named file or standard input.

use crate::hp::error::PipelineError;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Designator that selects standard input.
pub const STDIN_SENTINEL: &str = ".";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
	Stdin,
	File(PathBuf),
}

impl InputSource {
	pub fn from_designator(designator: &str) -> Self {
		if designator.is_empty() || designator == STDIN_SENTINEL {
			Self::Stdin
		} else {
			Self::File(PathBuf::from(designator))
		}
	}

	/// Check that a named file exists without opening it.
	pub fn ensure_exists(&self) -> Result<(), PipelineError> {
		match self {
			Self::File(path) if !path.exists() => {
				Err(PipelineError::NotFound(path.clone()))
			}
			_ => Ok(()),
		}
	}

	/// Open the source for a single sequential read.
	pub fn open(&self) -> Result<Box<dyn Read>, PipelineError> {
		match self {
			Self::Stdin => Ok(Box::new(io::stdin().lock())),
			Self::File(path) => {
				self.ensure_exists()?;
				if path.is_dir() {
					return Err(PipelineError::io(
						format!("failed to open `{}`", path.display()),
						io::Error::new(
							io::ErrorKind::InvalidInput,
							"is a directory",
						),
					));
				}
				let file = File::open(path).map_err(|err| {
					PipelineError::io(
						format!("failed to open `{}`", path.display()),
						err,
					)
				})?;
				Ok(Box::new(file))
			}
		}
	}
}

impl fmt::Display for InputSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stdin => write!(f, "<stdin>"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}
