use chrono::{Datelike, NaiveDate};

use crate::moment::TargetMoment;

/// Monday-first, to match the grid layout
pub const WEEKDAY_LABELS: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sá", "Do"];

const MONTH_NAMES: [&str; 12] = [
	"Enero", "Febrero", "Marzo", "Abril", "Mayo", "Junio",
	"Julio", "Agosto", "Septiembre", "Octubre", "Noviembre", "Diciembre"
];

#[must_use]
pub fn is_leap_year(year: i32) -> bool {
	year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns 0 for anything that isn't a real month (1..=12)
#[must_use]
pub fn days_in_month(year: i32, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 if is_leap_year(year) => 29,
		2 => 28,
		_ => 0
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarCell {
	Blank,
	Day { day: u32, is_target: bool }
}

/// One month's worth of cells, with the blanks needed to push the 1st under the right weekday
/// column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarGrid {
	year: i32,
	month: u32,
	leading_blanks: u32,
	days_in_month: u32,
	target_day: u32
}

impl CalendarGrid {
	#[must_use]
	pub fn for_date(date: NaiveDate) -> Self {
		// a `NaiveDate` always has a valid first day of its own month
		let first = date.with_day(1).unwrap_or(date);

		Self {
			year: date.year(),
			month: date.month(),
			leading_blanks: first.weekday().num_days_from_monday(),
			days_in_month: days_in_month(date.year(), date.month()),
			target_day: date.day()
		}
	}

	pub fn cells(&self) -> impl Iterator<Item = CalendarCell> + '_ {
		(0..self.leading_blanks)
			.map(|_| CalendarCell::Blank)
			.chain((1..=self.days_in_month).map(|day| CalendarCell::Day {
				day,
				is_target: day == self.target_day
			}))
	}

	#[must_use]
	pub fn year(&self) -> i32 {
		self.year
	}

	#[must_use]
	pub fn month(&self) -> u32 {
		self.month
	}

	#[must_use]
	pub fn leading_blanks(&self) -> u32 {
		self.leading_blanks
	}

	#[must_use]
	pub fn days_in_month(&self) -> u32 {
		self.days_in_month
	}

	#[must_use]
	pub fn target_day(&self) -> u32 {
		self.target_day
	}

	#[must_use]
	pub fn title(&self) -> String {
		let name = self.month()
			.checked_sub(1)
			.and_then(|idx| usize::try_from(idx).ok())
			.and_then(|idx| MONTH_NAMES.get(idx))
			.copied()
			.unwrap_or("?");

		format!("{name} {}", self.year())
	}
}

#[must_use]
pub fn compute_calendar_grid(target: &TargetMoment) -> CalendarGrid {
	CalendarGrid::for_date(target.naive().date())
}
