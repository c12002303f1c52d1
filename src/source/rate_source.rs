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
use std::collections::{BTreeMap, HashSet};

/// A remote quote provider.
pub trait RateSource {
	/// Pair symbols the source can quote right now.
	fn list_supported_pairs(&self) -> Result<HashSet<String>, RateError>;

	/// Whatever subset of `pairs` the source has quotes for.
	fn fetch_rates(
		&self,
		pairs: &[String],
	) -> Result<BTreeMap<String, RawRate>, RateError>;
}
