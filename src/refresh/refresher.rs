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
use crate::config::settings::Settings;
use crate::rates::diagnostics::{Diagnostic, Diagnostics};
use crate::rates::error::RateError;
use crate::rates::pair::pair_symbol;
use crate::rates::resolved_rate::ResolvedRates;
use crate::rates::resolver::PairResolver;
use crate::rates::triangulator::Triangulator;
use crate::source::rate_source::RateSource;
use std::collections::{BTreeMap, HashSet};

/// Runs one full resolution against the source: list what it supports,
/// request the best pair per currency, then fill gaps from fallbacks and
/// cross rates.
///
/// An unreachable source while listing pairs is logged and treated as an
/// empty listing. Failing to fetch the rates themselves aborts the run.
pub fn refresh(
	settings: &Settings,
	source: &dyn RateSource,
	diagnostics: &mut dyn Diagnostics,
) -> Result<ResolvedRates, RateError> {
	let supported = source.list_supported_pairs().unwrap_or_else(|e| {
		log::error!("could not list supported pairs: {}", e);
		HashSet::new()
	});

	let plan = PairResolver::new(&settings.rates).plan(
		&settings.currencies,
		&supported,
		diagnostics,
	);

	let raw = if plan.pairs.is_empty() {
		log::debug!("no pairs to request");
		BTreeMap::new()
	} else {
		log::debug!("requesting pairs {}", plan.joined());
		source.fetch_rates(&plan.pairs).inspect_err(|e| {
			log::error!("currency failed to get: {}", e);
		})?
	};

	let resolved = Triangulator::new(&settings.rates).triangulate(
		&raw,
		&settings.fallback,
		&settings.currencies,
		diagnostics,
	)?;

	let default = settings.rates.default_currency();
	for route in &plan.routes {
		if !raw.contains_key(&route.pair)
			&& !resolved.contains(&pair_symbol(&route.currency, default))
		{
			diagnostics.report(Diagnostic::NotReturned {
				pair: route.pair.clone(),
			});
		}
	}

	Ok(resolved)
}
