use super::CmdData;
use crate::output::HYPHEN_POINT;

use anyhow::{bail, Context};
use clap::Subcommand;
use color_print::{cprint, cprintln};
use mclp::shared::output::{MCLPOutput, MessageContents, MessageLevel};

#[derive(Debug, Subcommand)]
pub enum UserSubcommand {
	#[command(about = "List all stored users")]
	#[clap(alias = "ls")]
	List {
		/// Whether to remove formatting and warnings from the output
		#[arg(short, long)]
		raw: bool,
	},
	#[command(about = "Get the status of the selected user")]
	Status,
	#[command(about = "Select the user the launcher uses")]
	Select {
		/// The key of the user in the authentication database
		user: String,
	},
	#[command(about = "Log out a user by removing its access token")]
	Logout {
		/// The user to log out. If not specified, uses the selected user
		user: Option<String>,
	},
	#[command(about = "Remove a user from the authentication database")]
	#[clap(alias = "rm")]
	Remove {
		/// The key of the user to remove
		user: String,
	},
}

pub fn run(subcommand: UserSubcommand, data: &mut CmdData) -> anyhow::Result<()> {
	match subcommand {
		UserSubcommand::List { raw } => list(data, raw),
		UserSubcommand::Status => status(data),
		UserSubcommand::Select { user } => select(data, &user),
		UserSubcommand::Logout { user } => logout(data, user),
		UserSubcommand::Remove { user } => remove(data, &user),
	}
}

fn list(data: &mut CmdData, raw: bool) -> anyhow::Result<()> {
	let file = data.open_profiles(!raw)?;
	let document = file.get();

	if !raw {
		cprintln!("<s>Users:");
	}
	for (key, user) in &document.authentication_database {
		if raw {
			println!("{key}");
			continue;
		}
		cprint!("{}", HYPHEN_POINT);
		if key == document.get_selected_user_key() {
			cprint!("<s><m>{}</m>", user.display_name);
		} else {
			cprint!("<s><g>{}</g>", user.display_name);
		}
		cprint!(" <k!>({})", key);
		if !user.is_logged_in() {
			cprint!(" <r>logged out");
		}
		cprintln!();
	}

	Ok(())
}

fn status(data: &mut CmdData) -> anyhow::Result<()> {
	let file = data.open_profiles(true)?;
	let document = file.get();

	match document.get_selected_user() {
		Some(user) => {
			if user.is_logged_in() {
				cprint!("<g>Logged in as ");
			} else {
				cprint!("<g>User chosen as ");
			}
			cprint!("<s,g!>{}", user.display_name);
			if !user.is_logged_in() {
				cprint!(" - <r>Currently logged out");
			}
			cprintln!();
			cprintln!("   <s>Username:</> {}", user.username);
			cprintln!("   <s>UUID:</> {}", user.uuid);
			cprintln!("   <s>User ID:</> {}", user.userid);
		}
		None => cprintln!(
			"<r>Selected user '{}' does not exist",
			document.get_selected_user_key()
		),
	}

	Ok(())
}

fn select(data: &mut CmdData, key: &str) -> anyhow::Result<()> {
	let mut file = data.open_profiles(true)?;
	file.get_mut()
		.select_user(key)
		.context("Failed to select user")?;
	file.write(&mut data.output)?;

	data.output.display(
		MessageContents::Success(format!("Selected user '{key}'")),
		MessageLevel::Important,
	);

	Ok(())
}

fn logout(data: &mut CmdData, key: Option<String>) -> anyhow::Result<()> {
	let mut file = data.open_profiles(true)?;
	let key = key.unwrap_or_else(|| file.get().get_selected_user_key().to_string());
	let Some(user) = file.get().get_user(&key) else {
		bail!("User '{key}' does not exist");
	};
	if !user.is_logged_in() {
		data.output.display(
			MessageContents::Notice(format!("User '{key}' is already logged out")),
			MessageLevel::Important,
		);
		return Ok(());
	}

	file.get_mut()
		.logout_user(&key)
		.context("Failed to log out user")?;
	file.write(&mut data.output)?;

	data.output.display(
		MessageContents::Success(format!("Logged out user '{key}'")),
		MessageLevel::Important,
	);

	Ok(())
}

fn remove(data: &mut CmdData, key: &str) -> anyhow::Result<()> {
	let mut file = data.open_profiles(true)?;
	file.get_mut()
		.remove_user(key)
		.context("Failed to remove user")?;
	file.write(&mut data.output)?;

	data.output.display(
		MessageContents::Success(format!("Removed user '{key}'")),
		MessageLevel::Important,
	);

	Ok(())
}
