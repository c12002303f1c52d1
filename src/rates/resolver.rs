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
use crate::rates::pair::pair_symbol;
use crate::rates::settings::RateSettings;
use std::collections::HashSet;
use std::iter;

/// How one desired currency will be fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
	pub currency: String,
	/// The pair symbol to request from the source
	pub pair: String,
	/// The reference currency, if `pair` is `REF+CURRENCY` rather than the
	/// direct `CURRENCY+DEFAULT`
	pub via: Option<String>,
}

/// Everything to ask the source for in one request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestPlan {
	pub routes: Vec<Route>,
	/// Deduplicated, in first-seen order; route pairs then reference legs
	pub pairs: Vec<String>,
}

impl RequestPlan {
	/// The comma-joined form the source expects in its query string.
	pub fn joined(&self) -> String {
		self.pairs.join(",")
	}
}

/// Picks, for each desired currency, the single best pair to request from
/// the source given what it supports.
pub struct PairResolver<'a> {
	settings: &'a RateSettings,
}

impl<'a> PairResolver<'a> {
	pub fn new(settings: &'a RateSettings) -> Self {
		Self { settings }
	}

	/// Returns the pairs to request, deduplicated and in the order the
	/// desired currencies were given. Currencies equal to the default, or
	/// with no supported route, are skipped with a warning.
	pub fn resolve(
		&self,
		desired: &[String],
		supported: &HashSet<String>,
		diagnostics: &mut dyn Diagnostics,
	) -> Vec<String> {
		let default = self.settings.default_currency();
		let mut pairs: Vec<String> = Vec::new();

		for currency in desired {
			if currency == default {
				diagnostics.report(Diagnostic::DefaultSkipped {
					currency: currency.clone(),
				});
				continue;
			}

			match self.route(currency, supported) {
				Some(route) if !pairs.contains(&route.pair) => {
					pairs.push(route.pair)
				},
				Some(_) => {},
				None => diagnostics.report(Diagnostic::PairUnavailable {
					currency: currency.clone(),
					references: self.settings.references().to_vec(),
				}),
			}
		}

		pairs
	}

	/// `resolve`, plus the `REF+DEFAULT` leg for every route through a
	/// reference currency when the source supports it, so the cross rate
	/// can be computed even if `REF` itself was not desired.
	pub fn plan(
		&self,
		desired: &[String],
		supported: &HashSet<String>,
		diagnostics: &mut dyn Diagnostics,
	) -> RequestPlan {
		let mut pairs = self.resolve(desired, supported, diagnostics);

		// The first candidate among the resolved pairs is the one resolve
		// picked, since earlier candidates were unsupported.
		let default = self.settings.default_currency();
		let resolved: HashSet<String> = pairs.iter().cloned().collect();
		let mut seen: HashSet<&str> = HashSet::new();
		let routes: Vec<Route> = desired
			.iter()
			.filter(|c| c.as_str() != default && seen.insert(c.as_str()))
			.filter_map(|c| self.route(c, &resolved))
			.collect();

		for via in routes.iter().filter_map(|r| r.via.as_ref()) {
			let leg = pair_symbol(via, default);
			if supported.contains(&leg) && !pairs.contains(&leg) {
				diagnostics.report(Diagnostic::ReferenceLegAdded {
					pair: leg.clone(),
				});
				pairs.push(leg);
			}
		}

		RequestPlan { routes, pairs }
	}

	/// The highest priority candidate whose pair is in `available`.
	fn route(
		&self,
		currency: &str,
		available: &HashSet<String>,
	) -> Option<Route> {
		self.candidates(currency)
			.find(|route| available.contains(&route.pair))
	}

	/// Candidate routes in priority order: direct first, then each
	/// reference currency as configured.
	fn candidates<'b>(
		&'b self,
		currency: &'b str,
	) -> impl Iterator<Item = Route> + 'b {
		let direct = Route {
			currency: currency.to_string(),
			pair: pair_symbol(currency, self.settings.default_currency()),
			via: None,
		};

		iter::once(direct).chain(self.settings.references().iter().map(
			move |via| Route {
				currency: currency.to_string(),
				pair: pair_symbol(via, currency),
				via: Some(via.clone()),
			},
		))
	}
}
