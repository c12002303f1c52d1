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
use crate::rates::error::RateError;
use crate::rates::raw_rate::RawRate;
use crate::source::currate::models::{
	CurrencyListHolder, CurrencyListParams, RatesHolder, RatesParams,
};
use crate::source::http::Client;
use crate::source::rate_source::RateSource;
use std::collections::{BTreeMap, HashSet};

pub const CURRATE_API_URL: &str = "https://currate.ru/api/";

/// Client for the currate.ru API. Read-only; every call is a single GET
/// with the API key in the query string.
pub struct CurrateClient {
	http: Client,
	api_key: String,
}

impl CurrateClient {
	pub fn new(api_url: &str, api_key: String) -> Self {
		Self {
			http: Client::new(api_url),
			api_key,
		}
	}
}

impl RateSource for CurrateClient {
	fn list_supported_pairs(&self) -> Result<HashSet<String>, RateError> {
		let resp: CurrencyListHolder = self.http.get(&CurrencyListParams {
			get: "currency_list",
			key: &self.api_key,
		})?;

		warn_on_status(resp.status, resp.message.as_deref());
		Ok(resp.data.unwrap_or_default().into_iter().collect())
	}

	fn fetch_rates(
		&self,
		pairs: &[String],
	) -> Result<BTreeMap<String, RawRate>, RateError> {
		let resp: RatesHolder = self.http.get(&RatesParams {
			get: "rates",
			pairs: pairs.join(","),
			key: &self.api_key,
		})?;

		warn_on_status(resp.status, resp.message.as_deref());
		Ok(resp.data.map(|d| d.into_quotes()).unwrap_or_default())
	}
}

/// Failures such as a bad key come back in the body, not the HTTP status.
fn warn_on_status(status: Option<i64>, message: Option<&str>) {
	if let Some(status) = status.filter(|s| *s != 200) {
		log::warn!(
			"currate answered with status {}: {}",
			status,
			message.unwrap_or("no message")
		);
	}
}
