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
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
	pub api_key: Option<String>,
	pub api_key_cmd: Option<String>,
	pub api_url: Option<String>,

	/// Currencies to resolve rates for, in order
	pub currencies: Option<Vec<String>>,
	/// The currency every rate is quoted in
	pub default: Option<String>,
	/// Intermediate currencies for cross rates, tried in order
	pub references: Option<Vec<String>>,

	/// Static pair -> rate used when the source has nothing better
	pub fallback: Option<BTreeMap<String, f64>>,
}
