use super::CmdData;
use crate::output::get_latest_log_file_path;

use clap::Subcommand;
use color_print::cprintln;
use mclp::config::Config;

#[derive(Debug, Subcommand)]
pub enum FilesSubcommand {
	#[command(about = "Print the paths mclp uses")]
	Path,
}

pub fn run(subcommand: FilesSubcommand, data: &mut CmdData) -> anyhow::Result<()> {
	match subcommand {
		FilesSubcommand::Path => path(data),
	}
}

fn path(data: &mut CmdData) -> anyhow::Result<()> {
	data.ensure_config(true)?;
	let config_path = Config::get_path(&data.paths);
	if let Some(config) = &data.config {
		cprintln!("<s>Game directory:</> {}", config.minecraft_dir.display());
		cprintln!("<s>Profile document:</> {}", config.profiles_file.display());
	}
	cprintln!("<s>Config:</> {}", config_path.display());
	cprintln!(
		"<s>Latest log:</> {}",
		get_latest_log_file_path(&data.paths).display()
	);

	Ok(())
}
