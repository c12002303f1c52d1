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
use crate::rates::diagnostics::{Diagnostic, Diagnostics};
use crate::rates::error::RateError;
use crate::rates::pair::{is_quoted_in, pair_symbol};
use crate::rates::raw_rate::RawRate;
use crate::rates::resolved_rate::{Origin, ResolvedRate, ResolvedRates};
use crate::rates::settings::RateSettings;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Rates known during one triangulation, in three layers. Lookups go
/// source, then fallback, then derived; a lower layer never shadows a
/// higher one.
#[derive(Debug, Default)]
struct RateLayers {
	source: BTreeMap<String, f64>,
	fallback: BTreeMap<String, f64>,
	/// pair -> (rate, reference currency)
	derived: BTreeMap<String, (f64, String)>,
}

impl RateLayers {
	/// Source or fallback only. Derivations read from here so no derived
	/// value ever feeds another one.
	fn base(&self, pair: &str) -> Option<f64> {
		self.source
			.get(pair)
			.or_else(|| self.fallback.get(pair))
			.copied()
	}

	fn lookup(&self, pair: &str) -> Option<ResolvedRate> {
		if let Some(rate) = self.source.get(pair) {
			return Some(ResolvedRate::new(*rate, Origin::Source));
		}
		if let Some(rate) = self.fallback.get(pair) {
			return Some(ResolvedRate::new(*rate, Origin::Fallback));
		}
		self.derived.get(pair).map(|(rate, via)| {
			ResolvedRate::new(*rate, Origin::Derived(via.clone()))
		})
	}

	/// Flattens the layers into the final result, keeping only pairs
	/// quoted in the default currency.
	fn resolve(&self, default: &str) -> ResolvedRates {
		let pairs: BTreeSet<&String> = self
			.source
			.keys()
			.chain(self.fallback.keys())
			.chain(self.derived.keys())
			.filter(|pair| is_quoted_in(pair, default))
			.collect();

		let mut resolved = ResolvedRates::default();
		for pair in pairs {
			if let Some(rate) = self.lookup(pair) {
				resolved.insert(pair.clone(), rate);
			}
		}
		resolved
	}
}

/// Fills in `CURRENCY+DEFAULT` rates the source did not quote, from
/// fallbacks and from single-hop cross rates through reference currencies.
pub struct Triangulator<'a> {
	settings: &'a RateSettings,
}

impl<'a> Triangulator<'a> {
	pub fn new(settings: &'a RateSettings) -> Self {
		Self { settings }
	}

	/// Builds the final rates for the desired currencies.
	///
	/// A source value always wins over a fallback for the same pair. A pair
	/// that neither layer has is derived as `REF+DEFAULT / REF+CURRENCY`,
	/// trying reference currencies in order. Currencies with no path are
	/// left out and reported; a zero reference quote is an error.
	pub fn triangulate(
		&self,
		raw: &BTreeMap<String, RawRate>,
		fallback: &BTreeMap<String, f64>,
		desired: &[String],
		diagnostics: &mut dyn Diagnostics,
	) -> Result<ResolvedRates, RateError> {
		let default = self.settings.default_currency();

		let mut layers = RateLayers {
			source: coerce(raw)?,
			fallback: fallback.clone(),
			derived: BTreeMap::new(),
		};

		for pair in layers.fallback.keys() {
			if !layers.source.contains_key(pair) {
				diagnostics
					.report(Diagnostic::FallbackUsed { pair: pair.clone() });
			}
		}

		let mut seen: HashSet<&str> = HashSet::new();
		for currency in desired {
			if currency == default || !seen.insert(currency.as_str()) {
				continue;
			}

			let pair = pair_symbol(currency, default);
			if layers.lookup(&pair).is_some() {
				continue;
			}

			match self.derive(currency, &layers)? {
				Some((rate, via)) => {
					diagnostics.report(Diagnostic::Derived {
						pair: pair.clone(),
						via: via.clone(),
					});
					layers.derived.insert(pair, (rate, via));
				},
				None => diagnostics.report(Diagnostic::Unresolved {
					currency: currency.clone(),
					pair,
				}),
			}
		}

		Ok(layers.resolve(default))
	}

	/// Cross rate for `CURRENCY+DEFAULT` through the first reference
	/// currency with both legs known. Returns the rate and that currency.
	fn derive(
		&self,
		currency: &str,
		layers: &RateLayers,
	) -> Result<Option<(f64, String)>, RateError> {
		let default = self.settings.default_currency();

		for via in self.settings.references() {
			let (Some(leg), Some(reference)) = (
				layers.base(&pair_symbol(via, currency)),
				layers.base(&pair_symbol(via, default)),
			) else {
				continue;
			};

			if leg == 0.0 {
				return Err(RateError::DivisionByZero {
					pair: pair_symbol(currency, default),
					via: via.clone(),
				});
			}

			let rate = reference / leg;
			if !rate.is_finite() {
				return Err(RateError::ValueConversion {
					pair: pair_symbol(currency, default),
					value: rate.to_string(),
				});
			}

			return Ok(Some((rate, via.clone())));
		}

		Ok(None)
	}
}

fn coerce(
	raw: &BTreeMap<String, RawRate>,
) -> Result<BTreeMap<String, f64>, RateError> {
	raw.iter()
		.map(|(pair, value)| {
			value.to_f64(pair).map(|rate| (pair.clone(), rate))
		})
		.collect()
}
