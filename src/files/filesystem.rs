/* Copyright © 2024-2025 Adam Train <adam@trainrelay.net>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <https://www.gnu.org/licenses/>.
 */
use crate::config::config_file::Config;
use crate::rates::resolved_rate::ResolvedRates;
use anyhow::{anyhow, bail, Error};
use dirs::home_dir;
use std::fs;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct Filesystem;

impl Filesystem {
	pub fn new() -> Self {
		Self
	}

	/// Fetches the config from the given path, or default path if none.
	/// Runs `api_key_cmd`, if set, and puts its output in `api_key`.
	pub fn get_config(
		&self,
		custom_config_path: Option<&String>,
	) -> Result<Config, Error> {
		let config_path = match &custom_config_path {
			None => {
				let Some(home_dir) = home_dir() else {
					bail!("Unable to determine home directory")
				};
				home_dir.join(".config/currates/config.toml")
			},
			Some(p) => PathBuf::from(p),
		};

		// create empty config file if it doesn't exist
		if !config_path.exists() && custom_config_path.is_none() {
			if let Some(parent) = config_path.parent() {
				fs::create_dir_all(parent)?;
			}
			File::create(config_path.clone())?;
		}

		let content = fs::read_to_string(&config_path).map_err(|e| {
			anyhow!("failed to read config {}: {}", config_path.display(), e)
		})?;
		let mut config: Config = toml::from_str(&content)
			.map_err(|e| anyhow!("failed to parse config: {}", e))?;

		if config.api_key_cmd.is_some() && config.api_key.is_some() {
			bail!("Only one of api_key and api_key_cmd may be specified")
		}

		if let Some(api_key_cmd) = &config.api_key_cmd {
			let output = Command::new("sh")
				.arg("-c")
				.arg(api_key_cmd)
				.output()
				.map_err(|e| anyhow!("failed to execute api_key_cmd: {}", e))?;

			if output.status.success() {
				config.api_key = Some(
					String::from_utf8(output.stdout)
						.map_err(|e| {
							anyhow!("failed to parse command output: {}", e)
						})?
						.trim()
						.to_string(),
				);
			} else {
				bail!(
					"api_key_cmd failed with status {}: {}",
					output.status,
					String::from_utf8_lossy(&output.stderr)
				);
			}
		}

		Ok(config)
	}

	/// Writes the rates as a flat JSON object. The document is rendered in
	/// full before the file is touched, so a failure leaves no partial file.
	pub fn write_rates(
		&self,
		path: &Path,
		rates: &ResolvedRates,
	) -> Result<(), Error> {
		let rendered = serde_json::to_string(rates)?;
		fs::write(path, rendered).map_err(|e| {
			anyhow!("failed to write {}: {}", path.display(), e)
		})?;
		Ok(())
	}
}
