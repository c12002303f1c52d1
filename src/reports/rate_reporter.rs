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
use crate::rates::resolved_rate::ResolvedRates;
use crate::reports::table::Table;

pub struct RateReporter<'a> {
	rates: &'a ResolvedRates,
}

impl<'a> RateReporter<'a> {
	pub fn new(rates: &'a ResolvedRates) -> Self {
		Self { rates }
	}

	fn table(&self) -> Table {
		let mut table = Table::new(3);

		table.add_header(vec!["Pair", "Rate", "Origin"]);
		table.add_separator();
		table.right_align(vec![1]);

		for (pair, resolved) in self.rates.iter() {
			table.add_row(vec![
				pair.clone(),
				resolved.rate.to_string(),
				resolved.origin.to_string(),
			]);
		}

		table
	}

	pub fn print_all_rates(&self) {
		self.table().print();
	}
}
