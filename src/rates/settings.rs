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

/// Reference currencies tried, in order, when no direct pair exists.
pub const DEFAULT_REFERENCES: [&str; 2] = ["USD", "EUR"];

/// What the resolver and triangulator need to know about the run: the
/// currency everything is quoted in, and which currencies may sit in the
/// middle of a single-hop cross rate.
#[derive(Clone, Debug, PartialEq)]
pub struct RateSettings {
	default: String,
	references: Vec<String>,
}

impl RateSettings {
	pub fn new(default: &str) -> Self {
		Self::with_references(
			default,
			DEFAULT_REFERENCES.iter().map(|s| s.to_string()).collect(),
		)
	}

	pub fn with_references(default: &str, references: Vec<String>) -> Self {
		Self {
			default: default.to_string(),
			references,
		}
	}

	pub fn default_currency(&self) -> &str {
		&self.default
	}

	/// In priority order
	pub fn references(&self) -> &[String] {
		&self.references
	}
}
