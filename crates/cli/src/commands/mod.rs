mod files;
mod profile;
mod user;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use color_print::{cformat, cprintln};

use mclp::config::Config;
use mclp::io::paths::Paths;
use mclp::io::profile_file::ProfileFile;
use mclp::profiles::version::{KNOWN_FORMAT, KNOWN_LAUNCHER_NAME, KNOWN_PROFILES_FORMAT};
use mclp::shared::output::{MCLPOutput, MessageContents, MessageLevel};

use self::files::FilesSubcommand;
use self::profile::ProfileSubcommand;
use self::user::UserSubcommand;

use super::output::TerminalOutput;

#[derive(Debug, Subcommand)]
pub enum Command {
	#[command(about = "Manage launch profiles")]
	#[clap(alias = "prof")]
	Profile {
		#[command(subcommand)]
		command: ProfileSubcommand,
	},
	#[command(about = "Manage stored accounts")]
	User {
		#[command(subcommand)]
		command: UserSubcommand,
	},
	#[command(
		about = "Check the launcher profile document",
		long_about = "Check that the selected profile and user exist and that the document
uses a format mclp understands."
	)]
	Check,
	#[command(about = "Deal with files used by mclp")]
	Files {
		#[command(subcommand)]
		command: FilesSubcommand,
	},
	#[command(about = "Print the mclp version")]
	Version,
}

#[derive(Debug, Parser)]
pub struct Cli {
	#[command(subcommand)]
	command: Command,
	#[arg(short, long)]
	debug: bool,
	#[arg(short = 'D', long)]
	trace: bool,
	/// Use this launcher profile document instead of the configured one
	#[arg(short, long)]
	file: Option<PathBuf>,
}

/// Run the command line interface. Errors from commands are displayed through the
/// output and turned into a failure exit code. Errors while setting up are returned
pub fn run_cli() -> anyhow::Result<ExitCode> {
	// Parse the CLI
	let cli = Cli::try_parse();
	if let Err(e) = &cli {
		if let clap::error::ErrorKind::DisplayHelp
		| clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
		| clap::error::ErrorKind::DisplayVersion = e.kind()
		{
			println!("{e}");
			return Ok(ExitCode::SUCCESS);
		} else {
			eprintln!("{}", cformat!("<r>{e}"));
			return Ok(ExitCode::FAILURE);
		}
	}
	let cli = cli?;

	// Prepare the command data
	let mut data = CmdData::new(cli.file.clone())?;
	let log_level = get_log_level(&cli);
	data.output.set_log_level(log_level);

	let res = match cli.command {
		Command::Profile { command } => profile::run(command, &mut data),
		Command::User { command } => user::run(command, &mut data),
		Command::Check => check(&mut data),
		Command::Files { command } => files::run(command, &mut data),
		Command::Version => {
			print_version();
			Ok(())
		}
	};

	if report_result(res, &mut data.output) {
		Ok(ExitCode::SUCCESS)
	} else {
		Ok(ExitCode::FAILURE)
	}
}

/// Display the error of a failed command. Returns whether the command succeeded
fn report_result(res: anyhow::Result<()>, o: &mut impl MCLPOutput) -> bool {
	match res {
		Ok(()) => true,
		Err(e) => {
			o.display(
				MessageContents::Error(format!("{e:?}")),
				MessageLevel::Important,
			);
			false
		}
	}
}

/// Get the log level based on the debug options
fn get_log_level(cli: &Cli) -> MessageLevel {
	if cli.trace {
		MessageLevel::Trace
	} else if cli.debug {
		MessageLevel::Debug
	} else {
		MessageLevel::Important
	}
}

/// Data passed to commands
pub struct CmdData {
	pub paths: Paths,
	pub config: Option<Config>,
	pub output: TerminalOutput,
	file_override: Option<PathBuf>,
}

impl CmdData {
	pub fn new(file_override: Option<PathBuf>) -> anyhow::Result<Self> {
		let paths = Paths::new().context("Failed to set up system paths")?;
		let output = TerminalOutput::new(&paths).context("Failed to set up output")?;
		Ok(Self {
			paths,
			config: None,
			output,
			file_override,
		})
	}

	/// Ensure that the config is loaded
	pub fn ensure_config(&mut self, show_warnings: bool) -> anyhow::Result<()> {
		if self.config.is_none() {
			let mut config = Config::load(
				&Config::get_path(&self.paths),
				&self.paths,
				show_warnings,
				&mut self.output,
			)
			.context("Failed to load config")?;
			if let Some(file) = &self.file_override {
				config.profiles_file = file.clone();
			}
			self.config = Some(config);
		}

		Ok(())
	}

	/// Open the launcher profile document that commands operate on
	pub fn open_profiles(&mut self, show_warnings: bool) -> anyhow::Result<ProfileFile> {
		self.ensure_config(show_warnings)?;
		let Some(config) = &self.config else {
			bail!("Config was not loaded");
		};
		config
			.open_profiles()
			.context("Failed to open launcher profile document")
	}
}

/// Check the document for dangling selections and unknown formats
fn check(data: &mut CmdData) -> anyhow::Result<()> {
	let file = data.open_profiles(true)?;
	let document = file.get();

	let version = document.get_launcher_version();
	data.output.display(
		MessageContents::Property(
			"Written by launcher".into(),
			Box::new(MessageContents::Simple(version.to_string())),
		),
		MessageLevel::Extra,
	);
	if !version.is_known_format() {
		data.output.display(
			MessageContents::Warning(format!(
				"Document format {}/{} differs from the known format {KNOWN_FORMAT}/{KNOWN_PROFILES_FORMAT}",
				version.get_format(),
				version.get_profiles_format()
			)),
			MessageLevel::Important,
		);
	}

	let logged_out: Vec<_> = document
		.authentication_database
		.iter()
		.filter(|(_, user)| !user.is_logged_in())
		.collect();
	if !logged_out.is_empty() {
		data.output.display(
			MessageContents::Notice(format!(
				"{} stored user(s) are logged out",
				logged_out.len()
			)),
			MessageLevel::Extra,
		);
		data.output.start_section();
		for (key, user) in logged_out {
			data.output.display(
				MessageContents::ListItem(Box::new(MessageContents::Simple(format!(
					"{} ({key})",
					user.display_name
				)))),
				MessageLevel::Extra,
			);
		}
		data.output.end_section();
	}

	document
		.check_references()
		.context("The document selects an entry that does not exist")?;

	data.output.display(
		MessageContents::Success(format!(
			"{} profile(s) and {} user(s) checked",
			document.profiles.len(),
			document.authentication_database.len()
		)),
		MessageLevel::Important,
	);

	Ok(())
}

/// Print the mclp version
fn print_version() {
	let version = env!("CARGO_PKG_VERSION");
	let mclp_version = mclp::VERSION;
	cprintln!("CLI version: <g>{}</g>", version);
	cprintln!("mclp version: <g>{}</g>", mclp_version);
	cprintln!(
		"Known document format: <g>{}</g> (format {}, profiles format {})",
		KNOWN_LAUNCHER_NAME,
		KNOWN_FORMAT,
		KNOWN_PROFILES_FORMAT
	);
}

#[cfg(test)]
mod tests {
	use anyhow::anyhow;
	use mclp::shared::output::Collect;

	use super::*;

	#[test]
	fn test_report_result() {
		let mut o = Collect::default();
		assert!(report_result(Ok(()), &mut o));
		assert!(o.messages.is_empty());

		let res: anyhow::Result<()> =
			Err(anyhow!("profile 'gone' does not exist")).context("Failed to select profile");
		assert!(!report_result(res, &mut o));
		assert_eq!(o.messages.len(), 1);
		assert!(o.messages[0].0.starts_with("Error: Failed to select profile"));
		assert!(o.messages[0].0.contains("profile 'gone' does not exist"));
	}
}
