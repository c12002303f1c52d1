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
use crate::rates::error::RateError;
use crate::rates::fallback::{
	check_fallback, parse_fallback, DEFAULT_FALLBACK,
};
use crate::rates::pair::split_currency_list;
use crate::rates::settings::RateSettings;
use crate::source::currate::core::CURRATE_API_URL;
use std::collections::BTreeMap;

pub const DEFAULT_CURRENCIES: &str = "BYN,EUR,KZT,RUB,UAH,USD,BRL,TRY,PLN";
pub const DEFAULT_CURRENCY: &str = "RUB";

/// Everything a refresh needs, after layering built-in defaults, the config
/// file and the environment (highest precedence).
#[derive(Debug, PartialEq)]
pub struct Settings {
	pub api_key: String,
	pub api_url: String,
	pub currencies: Vec<String>,
	pub fallback: BTreeMap<String, f64>,
	pub rates: RateSettings,
}

impl Settings {
	/// `env` looks up an environment variable; empty values count as unset.
	pub fn resolve<F>(config: Config, env: F) -> Result<Self, RateError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

		let api_key = env("API_KEY")
			.or(config.api_key)
			.ok_or_else(|| {
				RateError::Configuration(
					"no API key; set API_KEY or api_key in the config file"
						.to_string(),
				)
			})?;

		let api_url = env("API_URL")
			.or(config.api_url)
			.unwrap_or_else(|| CURRATE_API_URL.to_string());

		let currencies = match env("DONATIONS") {
			Some(list) => split_currency_list(&list),
			None => config
				.currencies
				.unwrap_or_else(|| split_currency_list(DEFAULT_CURRENCIES)),
		};

		let default = env("DEFAULT_CURRENCY")
			.map(|c| c.trim().to_string())
			.or(config.default)
			.unwrap_or_else(|| DEFAULT_CURRENCY.to_string());

		let rates = match env("REFERENCES")
			.map(|list| split_currency_list(&list))
			.or(config.references)
		{
			Some(references) => {
				RateSettings::with_references(&default, references)
			},
			None => RateSettings::new(&default),
		};

		let fallback = match (env("FALLBACK"), config.fallback) {
			(Some(list), _) => parse_fallback(&list)?,
			(None, Some(table)) => check_fallback(table)?,
			(None, None) => parse_fallback(DEFAULT_FALLBACK)?,
		};

		Ok(Settings {
			api_key,
			api_url,
			currencies,
			fallback,
			rates,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn env_of(
		vars: &[(&str, &str)],
	) -> impl Fn(&str) -> Option<String> + 'static {
		let vars: HashMap<String, String> = vars
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		move |name: &str| vars.get(name).cloned()
	}

	#[test]
	fn test_defaults() {
		let settings =
			Settings::resolve(Config::default(), env_of(&[("API_KEY", "k")]))
				.unwrap();

		assert_eq!(settings.api_key, "k");
		assert_eq!(settings.api_url, CURRATE_API_URL);
		assert_eq!(settings.currencies.len(), 9);
		assert_eq!(settings.currencies[0], "BYN");
		assert_eq!(settings.rates, RateSettings::new("RUB"));
		assert_eq!(settings.fallback["BLRRUB"], 14.0);
		assert_eq!(settings.fallback["PLNRUB"], 21.5);
	}

	#[test]
	fn test_missing_api_key() {
		let err = Settings::resolve(Config::default(), env_of(&[]))
			.unwrap_err();
		assert!(matches!(err, RateError::Configuration(_)));

		let err =
			Settings::resolve(Config::default(), env_of(&[("API_KEY", "")]))
				.unwrap_err();
		assert!(matches!(err, RateError::Configuration(_)));
	}

	#[test]
	fn test_env_overrides_file() {
		let config = Config {
			api_key: Some("from-file".to_string()),
			currencies: Some(vec!["BYN".to_string()]),
			default: Some("USD".to_string()),
			fallback: Some(BTreeMap::from([("BYNUSD".to_string(), 0.3)])),
			..Default::default()
		};

		let settings = Settings::resolve(
			config,
			env_of(&[
				("API_KEY", "from-env"),
				("DONATIONS", "KZT,EUR"),
				("FALLBACK", "PLNRUB:21.5"),
				("REFERENCES", "EUR"),
			]),
		)
		.unwrap();

		assert_eq!(settings.api_key, "from-env");
		assert_eq!(settings.currencies, vec!["KZT", "EUR"]);
		assert_eq!(settings.rates.default_currency(), "USD");
		assert_eq!(settings.rates.references(), ["EUR".to_string()]);
		assert_eq!(
			settings.fallback,
			BTreeMap::from([("PLNRUB".to_string(), 21.5)])
		);
	}

	#[test]
	fn test_file_values_used_without_env() {
		let config = Config {
			api_key: Some("from-file".to_string()),
			api_url: Some("http://localhost:1/api/".to_string()),
			fallback: Some(BTreeMap::new()),
			..Default::default()
		};

		let settings = Settings::resolve(config, env_of(&[])).unwrap();

		assert_eq!(settings.api_key, "from-file");
		assert_eq!(settings.api_url, "http://localhost:1/api/");
		assert!(settings.fallback.is_empty());
	}

	#[test]
	fn test_non_finite_fallback_in_file() {
		let config: Config = toml::from_str(
			"api_key = \"k\"\n[fallback]\nPLNRUB = nan\n",
		)
		.unwrap();

		let err = Settings::resolve(config, env_of(&[])).unwrap_err();
		assert!(matches!(err, RateError::ValueConversion { .. }));
	}

	#[test]
	fn test_bad_fallback_env() {
		let err = Settings::resolve(
			Config::default(),
			env_of(&[("API_KEY", "k"), ("FALLBACK", "PLNRUB=21.5")]),
		)
		.unwrap_err();
		assert!(matches!(err, RateError::Configuration(_)));
	}
}
