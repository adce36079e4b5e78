// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: algorithm.rs
// Author: hashpipe maintainers

//! Algorithm tags accepted on the command line and the sink each one
//! maps to.

use crate::hp::error::PipelineError;
use crate::hp::sink::{Base64Sink, DigestSink, StreamSink};
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

#[derive(
	Clone,
	Copy,
	Debug,
	Default,
	PartialEq,
	Eq,
	EnumIter,
	EnumString,
	IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Algorithm {
	#[default]
	Md5,
	Sha224,
	Sha256,
	Base64Encoder,
	Base64Decoder,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmKind {
	Digest,
	Base64,
}

impl Algorithm {
	/// Parse a command line tag such as `sha256` or `base64decoder`.
	pub fn from_tag(tag: &str) -> Result<Self, PipelineError> {
		Self::from_str(tag.trim()).map_err(|_| {
			PipelineError::configuration(format!(
				"unknown hash algorithm `{}` (expected one of: {})",
				tag,
				Self::identifiers().join(", ")
			))
		})
	}

	pub fn identifier(self) -> &'static str {
		self.into()
	}

	pub fn display_name(self) -> &'static str {
		match self {
			Self::Md5 => "MD5",
			Self::Sha224 => "SHA-224",
			Self::Sha256 => "SHA-256",
			Self::Base64Encoder => "Base64 encoder",
			Self::Base64Decoder => "Base64 decoder",
		}
	}

	pub fn kind(self) -> AlgorithmKind {
		match self {
			Self::Md5 | Self::Sha224 | Self::Sha256 => {
				AlgorithmKind::Digest
			}
			Self::Base64Encoder | Self::Base64Decoder => {
				AlgorithmKind::Base64
			}
		}
	}

	pub fn create_sink(self) -> Box<dyn StreamSink> {
		match self {
			Self::Md5 => Box::new(DigestSink::md5()),
			Self::Sha224 => Box::new(DigestSink::sha224()),
			Self::Sha256 => Box::new(DigestSink::sha256()),
			Self::Base64Encoder => Box::new(Base64Sink::encoder()),
			Self::Base64Decoder => Box::new(Base64Sink::decoder()),
		}
	}

	pub fn identifiers() -> Vec<&'static str> {
		Self::iter().map(Self::identifier).collect()
	}
}

impl std::fmt::Display for Algorithm {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.identifier())
	}
}
