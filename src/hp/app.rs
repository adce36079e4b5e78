// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: hashpipe
// File: app.rs
// Author: hashpipe maintainers

use crate::hp::algorithm::Algorithm;
use crate::hp::config::{ErrorStrategy, ExitCodes, RunConfig};
use crate::hp::error::PipelineError;
use crate::hp::output::FormatMode;
use crate::hp::pipeline::Pipeline;
use clap::{crate_name, Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use std::error::Error;
use std::io::{self, Write};

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Reads a file (or stdin when the input is `.` or omitted), pipes it
through a digest or base64 transform and prints or stores the result.
{usage-heading} {usage}

{all-args}{after-help}
";

fn build_cli() -> clap::Command {
	clap::Command::new(crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(crate_name!())
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("Digest or base64 transform for files and stdin")
		// `-h` selects the algorithm; help stays on `--help`.
		.disable_help_flag(true)
		.arg(
			Arg::new("help")
				.long("help")
				.help("Print help")
				.action(ArgAction::Help),
		)
		.arg(
			Arg::new("input")
				.short('i')
				.short_alias('f')
				.long("input")
				.value_name("PATH")
				.num_args(1..)
				.action(ArgAction::Append)
				.help("Input file(s); `.` or omitted reads stdin"),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_name("PATH")
				.help("Write the result to this file instead of stdout"),
		)
		.arg(
			Arg::new("hash")
				.short('h')
				.long("hash")
				.value_name("ALGORITHM")
				.default_value(Algorithm::default().identifier())
				.help(format!(
					"Algorithm ({})",
					Algorithm::identifiers().join(", ")
				)),
		)
		.arg(
			Arg::new("no-banner")
				.long("no-banner")
				.alias("nb")
				.action(ArgAction::SetTrue)
				.help("Suppress the banner and `<file>: ` result prefixes"),
		)
		.arg(
			Arg::new("format")
				.long("format")
				.value_parser(clap::value_parser!(FormatMode))
				.help("Override result rendering (hex, raw)"),
		)
		.arg(
			Arg::new("continue")
				.long("continue")
				.action(ArgAction::SetTrue)
				.help("Keep going after a file fails and report all errors"),
		)
		.arg(
			Arg::new("verbose")
				.short('v')
				.long("verbose")
				.action(ArgAction::Count)
				.help("Increase log verbosity (-v info, -vv debug)"),
		)
		.arg(
			Arg::new("generate-completions")
				.long("generate-completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.exclusive(true)
				.help("Print shell completions and exit"),
		)
}

fn init_logging(verbosity: u8) {
	let default_level = match verbosity {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let _ = env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(default_level),
	)
	.format(|buf, record| {
		writeln!(buf, "[{}] {}", record.level(), record.args())
	})
	.try_init();
}

fn config_from_matches(
	matches: &ArgMatches,
) -> Result<RunConfig, PipelineError> {
	let inputs: Vec<String> = matches
		.get_many::<String>("input")
		.map(|values| values.cloned().collect())
		.unwrap_or_default();
	let algorithm = matches
		.get_one::<String>("hash")
		.map(String::as_str)
		.unwrap_or_else(|| Algorithm::default().identifier());
	let output = matches.get_one::<String>("output").map(String::as_str);
	let strategy = if matches.get_flag("continue") {
		ErrorStrategy::Continue
	} else {
		ErrorStrategy::FailFast
	};

	Ok(RunConfig::new(algorithm, &inputs, output)?
		.with_format(matches.get_one::<FormatMode>("format").copied())
		.with_banner(!matches.get_flag("no-banner"))
		.with_strategy(strategy))
}

pub fn about() {
	eprintln!(
		"{}",
		format!(
			"{} v{} by {}",
			crate_name!(),
			clap::crate_version!(),
			clap::crate_authors!()
		)
		.dimmed()
	);
}

fn report_error(error: &PipelineError) {
	eprintln!("{} {}", "error:".red().bold(), error);
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	let name = cmd.get_name().to_string();
	generate(gen, cmd, name, &mut io::stdout());
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let matches = build_cli().get_matches();
	init_logging(matches.get_count("verbose"));

	if let Some(shell) = matches.get_one::<Shell>("generate-completions")
	{
		print_completions(*shell, &mut build_cli());
		return Ok(());
	}

	let config = match config_from_matches(&matches) {
		Ok(config) => config,
		Err(err) => {
			report_error(&err);
			std::process::exit(ExitCodes::default().fatal);
		}
	};
	log::info!(
		"algorithm {} on {} input(s)",
		config.algorithm.display_name(),
		config.inputs.len()
	);
	if config.banner {
		about();
	}

	let fatal = config.exit_codes.fatal;
	let pipeline = Pipeline::new(config)?;
	match pipeline.execute() {
		Ok(report) => {
			for failure in &report.failures {
				report_error(&failure.error);
			}
			let code = pipeline.exit_code(&report);
			if code != pipeline.config().exit_codes.success {
				std::process::exit(code);
			}
			Ok(())
		}
		Err(err) => {
			report_error(&err);
			std::process::exit(fatal);
		}
	}
}
