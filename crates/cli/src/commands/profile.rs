use super::CmdData;
use crate::output::HYPHEN_POINT;

use anyhow::{bail, Context};
use clap::Subcommand;
use color_print::{cprint, cprintln};
use itertools::Itertools;
use mclp::profiles::LaunchProfile;
use mclp::shared::output::{MCLPOutput, MessageContents, MessageLevel};

#[derive(Debug, Subcommand)]
pub enum ProfileSubcommand {
	#[command(about = "Print useful information about a profile")]
	Info {
		/// The profile to show. If not specified, uses the selected profile
		profile: Option<String>,
	},
	#[command(about = "List all profiles")]
	#[clap(alias = "ls")]
	List {
		/// Whether to remove formatting and warnings from the output
		#[arg(short, long)]
		raw: bool,
	},
	#[command(about = "Select the profile the launcher uses")]
	Select {
		/// The profile to select
		profile: String,
	},
	#[command(about = "Remove a profile from the document")]
	#[clap(alias = "rm")]
	Remove {
		/// The profile to remove
		profile: String,
	},
}

pub fn run(subcommand: ProfileSubcommand, data: &mut CmdData) -> anyhow::Result<()> {
	match subcommand {
		ProfileSubcommand::Info { profile } => info(data, profile),
		ProfileSubcommand::List { raw } => list(data, raw),
		ProfileSubcommand::Select { profile } => select(data, &profile),
		ProfileSubcommand::Remove { profile } => remove(data, &profile),
	}
}

fn info(data: &mut CmdData, name: Option<String>) -> anyhow::Result<()> {
	let file = data.open_profiles(true)?;
	let document = file.get();
	let name = name.unwrap_or_else(|| document.get_selected_profile_name().to_string());
	let Some(profile) = document.get_profile(&name) else {
		bail!("Profile '{name}' does not exist");
	};

	let mut header = format!("Profile {name}");
	if document.get_selected_profile_name() == name {
		header.push_str(" (selected)");
	}
	data.output.display(MessageContents::Header(header), MessageLevel::Important);
	data.output.start_section();
	display_profile(profile, &mut data.output);
	data.output.end_section();

	Ok(())
}

/// Display every field of a profile with defaults applied
fn display_profile(profile: &LaunchProfile, o: &mut impl MCLPOutput) {
	let version = match &profile.last_version_id {
		Some(version) => version.clone(),
		None => "latest (default)".into(),
	};
	let types = profile
		.get_allowed_release_types()
		.iter()
		.map(|x| x.to_string())
		.join(", ");
	let types = with_default_note(types, profile.allowed_release_types.is_none());
	let visibility = with_default_note(
		profile.get_launcher_visibility().to_string(),
		profile.launcher_visibility_on_game_close.is_none(),
	);

	let properties = [
		("Name", profile.name.clone()),
		("Version", version),
		("Game directory", or_global_default(profile.game_dir.as_deref())),
		("Java", or_global_default(profile.java_dir.as_deref())),
		("Java arguments", or_global_default(profile.java_args.as_deref())),
		("Release types", types),
		("Launcher visibility", visibility),
	];
	for (key, value) in properties {
		o.display(
			MessageContents::Property(key.into(), Box::new(MessageContents::Simple(value))),
			MessageLevel::Important,
		);
	}
}

fn with_default_note(value: String, is_default: bool) -> String {
	if is_default {
		format!("{value} (default)")
	} else {
		value
	}
}

fn or_global_default(value: Option<&str>) -> String {
	value.unwrap_or("global default").to_string()
}

fn list(data: &mut CmdData, raw: bool) -> anyhow::Result<()> {
	let file = data.open_profiles(!raw)?;
	let document = file.get();

	if !raw {
		cprintln!("<s>Profiles:");
	}
	for (name, profile) in &document.profiles {
		if raw {
			println!("{name}");
			continue;
		}
		cprint!("{}", HYPHEN_POINT);
		if name == document.get_selected_profile_name() {
			cprint!("<s><m>{}</m>", name);
		} else {
			cprint!("<s><g>{}</g>", name);
		}
		match &profile.last_version_id {
			Some(version) => cprintln!(" <k!>[{}]", version),
			None => cprintln!(" <k!>[latest]"),
		}
	}

	Ok(())
}

fn select(data: &mut CmdData, name: &str) -> anyhow::Result<()> {
	let mut file = data.open_profiles(true)?;
	file.get_mut()
		.select_profile(name)
		.context("Failed to select profile")?;
	file.write(&mut data.output)?;

	data.output.display(
		MessageContents::Success(format!("Selected profile '{name}'")),
		MessageLevel::Important,
	);

	Ok(())
}

fn remove(data: &mut CmdData, name: &str) -> anyhow::Result<()> {
	let mut file = data.open_profiles(true)?;
	file.get_mut()
		.remove_profile(name)
		.context("Failed to remove profile")?;
	file.write(&mut data.output)?;

	data.output.display(
		MessageContents::Success(format!("Removed profile '{name}'")),
		MessageLevel::Important,
	);

	Ok(())
}

#[cfg(test)]
mod tests {
	use mclp::profiles::{LauncherVisibility, VersionType};
	use mclp::shared::output::Collect;

	use super::*;

	#[test]
	fn test_display_profile_defaults() {
		let mut o = Collect::default();
		display_profile(&LaunchProfile::new("default"), &mut o);
		let lines: Vec<_> = o.messages.into_iter().map(|(text, _)| text).collect();
		assert_eq!(lines[0], "Name: default");
		assert_eq!(lines[1], "Version: latest (default)");
		assert_eq!(lines[2], "Game directory: global default");
		assert_eq!(lines[5], "Release types: release (default)");
		assert_eq!(
			lines[6],
			"Launcher visibility: close launcher when game starts (default)"
		);
	}

	#[test]
	fn test_display_profile_stored_values() {
		let mut profile = LaunchProfile::new("Snapshots");
		profile.last_version_id = Some("24w14a".into());
		profile.allowed_release_types =
			Some([VersionType::Snapshot, VersionType::Release].into_iter().collect());
		profile.launcher_visibility_on_game_close = Some(LauncherVisibility::KeepOpen);

		let mut o = Collect::default();
		display_profile(&profile, &mut o);
		let lines: Vec<_> = o.messages.into_iter().map(|(text, _)| text).collect();
		assert_eq!(lines[1], "Version: 24w14a");
		assert_eq!(lines[5], "Release types: snapshot, release");
		assert_eq!(lines[6], "Launcher visibility: keep the launcher open");
	}
}
