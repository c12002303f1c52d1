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
use crate::config::settings::Settings;
use crate::files::filesystem::Filesystem;
use crate::rates::diagnostics::LogDiagnostics;
use crate::refresh::refresher::refresh;
use crate::reports::rate_reporter::RateReporter;
use crate::source::currate::core::CurrateClient;
use anyhow::Error;
use clap::Parser;
use std::env;
use std::path::PathBuf;

mod config;
mod files;
mod rates;
mod refresh;
mod reports;
mod source;

#[derive(Parser)]
#[command(
	name = "currates",
	version,
	about = "Resolves currency rates against a default currency"
)]
struct Cli {
	// ----------------
	// -- POSITIONAL --
	// ----------------
	/// Where to write the resolved rates as JSON
	output: PathBuf,

	// -----------
	// -- FLAGS --
	// -----------
	/// Custom config file location (default: ~/.config/currates/config.toml)
	#[arg(long)]
	config: Option<String>,

	/// Print a table of the resolved rates and where each came from
	#[arg(short, long)]
	summary: bool,

	/// Only log warnings and errors unless RUST_LOG says otherwise
	#[arg(short, long)]
	quiet: bool,
}

fn main() -> Result<(), Error> {
	let args = Cli::parse();

	// a missing .env is fine; the real environment still applies
	dotenvy::dotenv().ok();
	init_logging(args.quiet);

	let fs = Filesystem::new();
	let config = fs.get_config(args.config.as_ref())?;
	let settings = Settings::resolve(config, |name| env::var(name).ok())?;

	log::info!(
		"Resolving {} currencies against {}",
		settings.currencies.len(),
		settings.rates.default_currency()
	);

	let source =
		CurrateClient::new(&settings.api_url, settings.api_key.clone());
	let rates = refresh(&settings, &source, &mut LogDiagnostics)?;

	if rates.is_empty() {
		log::warn!("No currency rates could be resolved");
	}
	log::info!("Final currency rates: {:?}", rates.to_map());
	fs.write_rates(&args.output, &rates)?;
	log::info!("Wrote {} rates to {}", rates.len(), args.output.display());

	if args.summary {
		RateReporter::new(&rates).print_all_rates();
	}

	Ok(())
}

fn init_logging(quiet: bool) {
	let default_filter = if quiet { "warn" } else { "info" };
	env_logger::Builder::from_env(
		env_logger::Env::default().default_filter_or(default_filter),
	)
	.init();
}
