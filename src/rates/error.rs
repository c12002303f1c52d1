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
use thiserror::Error;

/// Failures that abort a rate refresh. Soft gaps (a currency that cannot be
/// resolved) are never errors; they go to the diagnostics sink instead.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RateError {
	#[error("configuration error: {0}")]
	Configuration(String),

	#[error("rate source error: {0}")]
	Transport(String),

	#[error("cannot convert rate for {pair} to a number: {value:?}")]
	ValueConversion { pair: String, value: String },

	#[error("cannot derive {pair} via {via}: reference quote is zero")]
	DivisionByZero { pair: String, via: String },
}

impl From<reqwest::Error> for RateError {
	fn from(e: reqwest::Error) -> Self {
		RateError::Transport(e.to_string())
	}
}
