// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// Module: output
// Purpose: Result formatting and emission to stdout or a file.

use crate::hp::algorithm::AlgorithmKind;
use crate::hp::error::PipelineError;
use clap::ValueEnum;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Permission bits for files written with `-o`.
pub const OUTPUT_FILE_MODE: u32 = 0o600;

/// How a finalized sink result is rendered.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum FormatMode {
	Hex,
	Raw,
}

impl FormatMode {
	/// Digests print as hex and are stored raw; base64 results are
	/// already text (or decoded bytes) and pass through untouched.
	pub fn select(kind: AlgorithmKind, target: &OutputTarget) -> Self {
		match (kind, target) {
			(AlgorithmKind::Digest, OutputTarget::Stdout) => Self::Hex,
			(AlgorithmKind::Digest, OutputTarget::File(_)) => Self::Raw,
			(AlgorithmKind::Base64, _) => Self::Raw,
		}
	}

	pub fn render(self, result: &[u8]) -> Vec<u8> {
		match self {
			Self::Hex => hex::encode(result).into_bytes(),
			Self::Raw => result.to_vec(),
		}
	}
}

impl fmt::Display for FormatMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let label = match self {
			Self::Hex => "hex",
			Self::Raw => "raw",
		};
		write!(f, "{}", label)
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputTarget {
	Stdout,
	File(PathBuf),
}

impl OutputTarget {
	pub fn from_option(path: Option<&str>) -> Self {
		match path {
			Some(path) if !path.is_empty() => {
				Self::File(PathBuf::from(path))
			}
			_ => Self::Stdout,
		}
	}

	/// Write an already rendered payload. `prefix` is only honored on
	/// stdout.
	pub fn emit(
		&self,
		payload: &[u8],
		prefix: Option<&str>,
	) -> Result<(), PipelineError> {
		match self {
			Self::Stdout => {
				let stdout = io::stdout();
				let mut handle = stdout.lock();
				write_line(&mut handle, payload, prefix).map_err(
					|err| {
						PipelineError::io(
							"failed to write to stdout",
							err,
						)
					},
				)
			}
			Self::File(path) => write_file(path, payload),
		}
	}
}

impl fmt::Display for OutputTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Stdout => write!(f, "<stdout>"),
			Self::File(path) => write!(f, "{}", path.display()),
		}
	}
}

/// Emit `payload` as one newline terminated line.
pub fn write_line<W: Write>(
	writer: &mut W,
	payload: &[u8],
	prefix: Option<&str>,
) -> io::Result<()> {
	if let Some(prefix) = prefix {
		write!(writer, "{}: ", prefix)?;
	}
	writer.write_all(payload)?;
	writer.write_all(b"\n")?;
	writer.flush()
}

/// Replace `path` with `payload` via a temporary file in the same
/// directory, so readers never observe a half written file.
pub fn write_file(
	path: &Path,
	payload: &[u8],
) -> Result<(), PipelineError> {
	let context = || format!("failed to write `{}`", path.display());
	let parent = path
		.parent()
		.filter(|dir| !dir.as_os_str().is_empty())
		.unwrap_or_else(|| Path::new("."));

	let mut staged = NamedTempFile::new_in(parent)
		.map_err(|err| PipelineError::io(context(), err))?;
	staged
		.write_all(payload)
		.map_err(|err| PipelineError::io(context(), err))?;
	staged
		.as_file()
		.sync_all()
		.map_err(|err| PipelineError::io(context(), err))?;
	set_mode(staged.as_file())
		.map_err(|err| PipelineError::io(context(), err))?;
	staged
		.persist(path)
		.map_err(|err| PipelineError::io(context(), err.error))?;
	Ok(())
}

#[cfg(unix)]
fn set_mode(file: &std::fs::File) -> io::Result<()> {
	use std::os::unix::fs::PermissionsExt;
	file.set_permissions(std::fs::Permissions::from_mode(
		OUTPUT_FILE_MODE,
	))
}

#[cfg(not(unix))]
fn set_mode(_file: &std::fs::File) -> io::Result<()> {
	Ok(())
}
