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
use serde::Deserialize;

/// A rate exactly as the source sent it. The source usually stringifies
/// numbers ("64.1824"), but plain JSON numbers are accepted too.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawRate {
	Number(f64),
	Text(String),
}

impl RawRate {
	/// Converts to a finite float; `pair` only labels the error. "NaN",
	/// "inf" and values that overflow are rejected like any other garbage.
	pub fn to_f64(&self, pair: &str) -> Result<f64, RateError> {
		let (parsed, shown) = match self {
			RawRate::Number(n) => (Some(*n), n.to_string()),
			RawRate::Text(s) => (s.trim().parse::<f64>().ok(), s.clone()),
		};

		parsed.filter(|rate| rate.is_finite()).ok_or_else(|| {
			RateError::ValueConversion {
				pair: pair.to_string(),
				value: shown,
			}
		})
	}
}

impl From<f64> for RawRate {
	fn from(n: f64) -> Self {
		RawRate::Number(n)
	}
}

impl From<&str> for RawRate {
	fn from(s: &str) -> Self {
		RawRate::Text(s.to_string())
	}
}
