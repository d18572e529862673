use std::{fs::File, io::BufWriter, path::PathBuf};

use mclp::{config::ConfigDeser, profiles::LauncherProfile};

fn main() {
	let args = std::env::args().skip(1);
	let dir = PathBuf::from("./schemas");
	if !dir.exists() {
		std::fs::create_dir(&dir).expect("Failed to create schema directory");
	}
	for arg in args {
		let (schema, filename) = match arg.as_str() {
			"profiles" => {
				let schema = schemars::schema_for!(LauncherProfile);
				(schema, "launcher_profiles.json")
			}
			"config" => {
				let schema = schemars::schema_for!(ConfigDeser);
				(schema, "config.json")
			}
			other => {
				println!("Unknown schema type '{other}'");
				continue;
			}
		};
		let file = File::create(dir.join(filename)).expect("Failed to create schema file");
		let mut file = BufWriter::new(file);
		serde_json::to_writer_pretty(&mut file, &schema).expect("Failed to write schema to file");
	}
}
