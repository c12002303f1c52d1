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
use crate::rates::raw_rate::RawRate;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// -------------
// -- SENDING --
// -------------

#[derive(Debug, Serialize)]
pub struct CurrencyListParams<'a> {
	pub get: &'static str,
	pub key: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RatesParams<'a> {
	pub get: &'static str,
	/// Comma-joined pair symbols
	pub pairs: String,
	pub key: &'a str,
}

// ---------------
// -- RECEIVING --
// ---------------

#[derive(Debug, Deserialize)]
pub struct CurrencyListHolder {
	pub status: Option<i64>,
	pub message: Option<String>,
	pub data: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct RatesHolder {
	pub status: Option<i64>,
	pub message: Option<String>,
	pub data: Option<RatesData>,
}

/// The source sends `[]` instead of `{}` when it has nothing.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RatesData {
	Quotes(BTreeMap<String, RawRate>),
	Nothing(Vec<IgnoredAny>),
}

impl RatesData {
	pub fn into_quotes(self) -> BTreeMap<String, RawRate> {
		match self {
			RatesData::Quotes(quotes) => quotes,
			RatesData::Nothing(_) => BTreeMap::new(),
		}
	}
}
