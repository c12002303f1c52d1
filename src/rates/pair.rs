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

/// Builds the pair symbol quoting `quote` per one unit of `base`, e.g.
/// `pair_symbol("USD", "RUB") == "USDRUB"`.
pub fn pair_symbol(base: &str, quote: &str) -> String {
	format!("{}{}", base, quote)
}

/// Whether the pair is quoted in the given currency, i.e. has the shape
/// `CURRENCY+QUOTE` with a non-empty CURRENCY part.
pub fn is_quoted_in(pair: &str, quote: &str) -> bool {
	pair.len() > quote.len() && pair.ends_with(quote)
}

/// Splits a comma-separated currency list, trimming whitespace and
/// dropping empty entries. Order and duplicates are preserved.
pub fn split_currency_list(list: &str) -> Vec<String> {
	list.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}
