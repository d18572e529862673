use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use color_print::{cformat, cstr};
use mclp::io::paths::Paths;
use mclp::shared::output::{MCLPOutput, Message, MessageContents, MessageLevel};
use mclp::shared::util::{add_period, utc_timestamp};

/// A nice colored bullet point for terminal output
pub const HYPHEN_POINT: &str = cstr!("<k!> - </k!>");

/// Terminal MCLPOutput
pub struct TerminalOutput {
	level: MessageLevel,
	in_process: bool,
	/// Whether a process message was printed without ending its line
	line_open: bool,
	indent_level: u8,
	log_file: File,
	latest_log_file: File,
}

impl MCLPOutput for TerminalOutput {
	fn display_text(&mut self, text: String, level: MessageLevel) {
		let _ = self.log_message(&text, level);
		self.display_text_impl(text, level);
	}

	fn display_message(&mut self, message: Message) {
		let _ = self.log_message(
			&Self::format_message_log(message.contents.clone()),
			message.level,
		);
		self.display_text_impl(Self::format_message(message.contents), message.level);
	}

	fn start_process(&mut self) {
		self.close_line();
		self.in_process = true;
	}

	fn end_process(&mut self) {
		self.close_line();
		self.in_process = false;
	}

	fn start_section(&mut self) {
		self.indent_level += 1;
	}

	fn end_section(&mut self) {
		self.indent_level = self.indent_level.saturating_sub(1);
	}
}

impl TerminalOutput {
	pub fn new(paths: &Paths) -> anyhow::Result<Self> {
		let path = get_log_file_path(paths).context("Failed to get log file path")?;
		let file = File::create(path).context("Failed to open log file")?;
		let latest_file = File::create(get_latest_log_file_path(paths))
			.context("Failed to open latest.txt log file")?;
		Ok(Self {
			level: MessageLevel::Important,
			in_process: false,
			line_open: false,
			indent_level: 0,
			log_file: file,
			latest_log_file: latest_file,
		})
	}

	/// Display text
	fn display_text_impl(&mut self, text: String, level: MessageLevel) {
		if !level.at_least(&self.level) {
			return;
		}

		let indent = "   ".repeat(self.indent_level.into());
		if self.in_process {
			// Processes clear and overwrite their previous line
			print!("\r\x1b[2K{indent}{text}");
			let _ = std::io::stdout().flush();
			self.line_open = true;
		} else {
			self.close_line();
			println!("{indent}{text}");
		}
	}

	/// End a line left open by a process message
	fn close_line(&mut self) {
		if self.line_open {
			println!();
			self.line_open = false;
		}
	}

	/// Formatting for messages
	fn format_message(contents: MessageContents) -> String {
		match contents {
			MessageContents::Simple(text) => text,
			MessageContents::Notice(text) => cformat!("<y>Notice: {}", text),
			MessageContents::Warning(text) => cformat!("<y><s>Warning:</> {}", text),
			MessageContents::Error(text) => cformat!("<r><s,u>Error:</> {}", text),
			MessageContents::Success(text) => cformat!("<g>{}", add_period(text)),
			MessageContents::Property(key, value) => {
				cformat!("<s>{}:</> {}", key, Self::format_message(*value))
			}
			MessageContents::Header(text) => cformat!("<s>{}", text),
			MessageContents::StartProcess(text) => cformat!("{text}..."),
			MessageContents::ListItem(item) => {
				HYPHEN_POINT.to_string() + &Self::format_message(*item)
			}
			contents => contents.default_format(),
		}
	}

	/// Formatting for messages in the log file
	fn format_message_log(contents: MessageContents) -> String {
		match contents {
			MessageContents::Simple(text) => text,
			MessageContents::Notice(text) => format!("[NOTICE] {}", text),
			MessageContents::Warning(text) => format!("[WARN] {}", text),
			MessageContents::Error(text) => format!("[ERR] {}", text),
			MessageContents::Success(text) => format!("[SUCCESS] {}", add_period(text)),
			MessageContents::Property(key, value) => {
				format!("{}: {}", key, Self::format_message_log(*value))
			}
			MessageContents::Header(text) => format!("### {} ###", text),
			MessageContents::StartProcess(text) => format!("{text}..."),
			MessageContents::ListItem(item) => " - ".to_string() + &Self::format_message_log(*item),
			contents => contents.default_format(),
		}
	}

	/// Log a message to the log file
	pub fn log_message(&mut self, text: &str, level: MessageLevel) -> anyhow::Result<()> {
		let level_indicator = level.indicator();
		writeln!(self.log_file, "[{level_indicator}] {text}")?;
		writeln!(self.latest_log_file, "[{level_indicator}] {text}")?;

		Ok(())
	}

	/// Set the log level of the output
	pub fn set_log_level(&mut self, level: MessageLevel) {
		self.level = level;
	}
}

/// Get the path to a log file
fn get_log_file_path(paths: &Paths) -> anyhow::Result<PathBuf> {
	Ok(paths.logs.join(format!("log-{}.txt", utc_timestamp()?)))
}

/// Get the path to the latest log file
pub fn get_latest_log_file_path(paths: &Paths) -> PathBuf {
	paths.logs.join("latest.txt")
}
