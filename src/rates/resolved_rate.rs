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
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// A final rate for one pair. A value object not intended to have much
/// functionality.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedRate {
	pub rate: f64,
	pub origin: Origin,
}

impl ResolvedRate {
	pub fn new(rate: f64, origin: Origin) -> Self {
		Self { rate, origin }
	}
}

/// Where a resolved rate came from, in order of precedence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Origin {
	/// Quoted by the rate source in this run
	Source,
	/// Operator-supplied static rate
	Fallback,
	/// Cross rate through the named reference currency
	Derived(String),
}

impl fmt::Display for Origin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Origin::Source => write!(f, "source"),
			Origin::Fallback => write!(f, "fallback"),
			Origin::Derived(via) => write!(f, "via {}", via),
		}
	}
}

/// Every `CURRENCY+DEFAULT` pair a run managed to resolve, keyed by pair
/// symbol. Serializes as a flat `{"PAIR": rate}` object in key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedRates {
	rates: BTreeMap<String, ResolvedRate>,
}

impl ResolvedRates {
	pub fn insert(&mut self, pair: String, rate: ResolvedRate) {
		self.rates.insert(pair, rate);
	}

	#[cfg(test)]
	pub fn get(&self, pair: &str) -> Option<f64> {
		self.rates.get(pair).map(|r| r.rate)
	}

	#[cfg(test)]
	pub fn origin(&self, pair: &str) -> Option<&Origin> {
		self.rates.get(pair).map(|r| &r.origin)
	}

	pub fn contains(&self, pair: &str) -> bool {
		self.rates.contains_key(pair)
	}

	pub fn len(&self) -> usize {
		self.rates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rates.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &ResolvedRate)> {
		self.rates.iter()
	}

	/// Drops the origins, leaving plain pair -> rate.
	pub fn to_map(&self) -> BTreeMap<String, f64> {
		self.rates
			.iter()
			.map(|(pair, r)| (pair.clone(), r.rate))
			.collect()
	}
}

impl Serialize for ResolvedRates {
	fn serialize<S: Serializer>(
		&self,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		serializer.collect_map(self.rates.iter().map(|(k, v)| (k, v.rate)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_serializes_flat() {
		let mut rates = ResolvedRates::default();
		rates.insert(
			"USDRUB".to_string(),
			ResolvedRate::new(90.0, Origin::Source),
		);
		rates.insert(
			"KZTRUB".to_string(),
			ResolvedRate::new(0.2, Origin::Derived("USD".to_string())),
		);

		let json = serde_json::to_string(&rates).unwrap();
		assert_eq!(json, r#"{"KZTRUB":0.2,"USDRUB":90.0}"#);
	}

	#[test]
	fn test_origin_display() {
		assert_eq!(Origin::Derived("EUR".to_string()).to_string(), "via EUR");
		assert_eq!(Origin::Fallback.to_string(), "fallback");
	}
}
