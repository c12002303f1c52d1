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
use log::Level;
use std::fmt;

/// Something noteworthy that happened while resolving or triangulating.
/// None of these stop a run; fatal conditions are `RateError`s instead.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
	/// A desired currency is the default currency itself
	DefaultSkipped { currency: String },
	/// Neither a direct pair nor any reference route is supported
	PairUnavailable {
		currency: String,
		references: Vec<String>,
	},
	/// A `REF+DEFAULT` quote was added to the request for derivation
	ReferenceLegAdded { pair: String },
	/// A fallback rate filled a pair the source did not supply
	FallbackUsed { pair: String },
	/// A pair was computed through a reference currency
	Derived { pair: String, via: String },
	/// A desired currency ended up without any rate
	Unresolved { currency: String, pair: String },
	/// A pair was requested, the source did not return it, and it could not
	/// be derived or filled either
	NotReturned { pair: String },
}

impl Diagnostic {
	pub fn level(&self) -> Level {
		match self {
			Diagnostic::DefaultSkipped { .. }
			| Diagnostic::PairUnavailable { .. }
			| Diagnostic::Unresolved { .. }
			| Diagnostic::NotReturned { .. } => Level::Warn,
			Diagnostic::Derived { .. } => Level::Info,
			Diagnostic::ReferenceLegAdded { .. }
			| Diagnostic::FallbackUsed { .. } => Level::Debug,
		}
	}
}

impl fmt::Display for Diagnostic {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Diagnostic::DefaultSkipped { currency } => write!(
				f,
				"Currency equals default, cannot form a pair: {}",
				currency
			),
			Diagnostic::PairUnavailable {
				currency,
				references,
			} => write!(
				f,
				"Pair not available via direct or {}: {}",
				references.join("/"),
				currency
			),
			Diagnostic::ReferenceLegAdded { pair } => {
				write!(f, "Requesting reference leg {}", pair)
			},
			Diagnostic::FallbackUsed { pair } => {
				write!(f, "Using fallback rate for {}", pair)
			},
			Diagnostic::Derived { pair, via } => {
				write!(f, "Calculated {} via {}", pair, via)
			},
			Diagnostic::Unresolved { currency, pair } => write!(
				f,
				"No rate for {}: {} is neither quoted nor derivable",
				currency, pair
			),
			Diagnostic::NotReturned { pair } => write!(
				f,
				"Pair requested but not returned by source: {}",
				pair
			),
		}
	}
}

/// Sink for diagnostics, passed explicitly into the resolver and the
/// triangulator.
pub trait Diagnostics {
	fn report(&mut self, diagnostic: Diagnostic);
}

/// Forwards every diagnostic to the `log` facade at its own level.
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
	fn report(&mut self, diagnostic: Diagnostic) {
		log::log!(diagnostic.level(), "{}", diagnostic);
	}
}

/// Collects diagnostics in order; what the tests inspect.
impl Diagnostics for Vec<Diagnostic> {
	fn report(&mut self, diagnostic: Diagnostic) {
		self.push(diagnostic);
	}
}
