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
use std::collections::BTreeMap;

pub const DEFAULT_FALLBACK: &str = "BLRRUB:14.00,PLNRUB:21.50";

/// Parses a `PAIR:RATE,PAIR:RATE` list. Empty segments are ignored; a later
/// entry for the same pair replaces an earlier one.
pub fn parse_fallback(list: &str) -> Result<BTreeMap<String, f64>, RateError> {
	let mut fallback = BTreeMap::new();

	for segment in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
		let (pair, value) = match segment.split_once(':') {
			Some((pair, value)) if !pair.is_empty() && !value.contains(':') => {
				(pair.trim(), value)
			},
			_ => {
				return Err(RateError::Configuration(format!(
					"fallback entry must look like PAIR:RATE, got {:?}",
					segment
				)))
			},
		};

		let rate = RawRate::from(value).to_f64(pair)?;
		fallback.insert(pair.to_string(), rate);
	}

	Ok(fallback)
}

/// Checks a fallback table that arrived already typed, e.g. from TOML,
/// which happily accepts `nan` and `inf`.
pub fn check_fallback(
	table: BTreeMap<String, f64>,
) -> Result<BTreeMap<String, f64>, RateError> {
	for (pair, rate) in &table {
		RawRate::from(*rate).to_f64(pair)?;
	}
	Ok(table)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_fallback() {
		let parsed = parse_fallback(DEFAULT_FALLBACK).unwrap();
		assert_eq!(parsed.len(), 2);
		assert_eq!(parsed["BLRRUB"], 14.0);
		assert_eq!(parsed["PLNRUB"], 21.5);
	}

	#[test]
	fn test_empty_segments_ignored() {
		assert!(parse_fallback("").unwrap().is_empty());
		let parsed = parse_fallback(" PLNRUB:21.5 ,, ").unwrap();
		assert_eq!(parsed["PLNRUB"], 21.5);
	}

	#[test]
	fn test_malformed_entries() {
		assert!(matches!(
			parse_fallback("PLNRUB"),
			Err(RateError::Configuration(_))
		));
		assert!(matches!(
			parse_fallback("PLNRUB:1:2"),
			Err(RateError::Configuration(_))
		));
		assert!(matches!(
			parse_fallback(":1.0"),
			Err(RateError::Configuration(_))
		));
		assert_eq!(
			parse_fallback("PLNRUB:abc"),
			Err(RateError::ValueConversion {
				pair: "PLNRUB".to_string(),
				value: "abc".to_string(),
			})
		);
		assert!(matches!(
			parse_fallback("PLNRUB:inf"),
			Err(RateError::ValueConversion { .. })
		));
	}

	#[test]
	fn test_check_fallback_rejects_non_finite() {
		let table = BTreeMap::from([
			("PLNRUB".to_string(), 21.5),
			("BLRRUB".to_string(), f64::NAN),
		]);
		assert_eq!(
			check_fallback(table),
			Err(RateError::ValueConversion {
				pair: "BLRRUB".to_string(),
				value: "NaN".to_string(),
			})
		);

		let table = BTreeMap::from([("PLNRUB".to_string(), 21.5)]);
		assert_eq!(check_fallback(table.clone()), Ok(table));
	}
}
