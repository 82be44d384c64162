use std::fmt;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeDelta, TimeZone};

use crate::calendar::CalendarGrid;

/// The fixed date-time the whole page counts down to.
///
/// It's stored without any offset since the configured string is wall-clock time; it only becomes
/// an absolute instant once it's [`resolve`](TargetMoment::resolve)d against the viewer's zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TargetMoment(NaiveDateTime);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MomentError {
	input: String,
	source: chrono::ParseError
}

impl fmt::Display for MomentError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "couldn't parse '{}' as YYYY-MM-DD HH:MM:SS: {}", self.input, self.source)
	}
}

impl std::error::Error for MomentError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.source)
	}
}

impl TargetMoment {
	pub const FORMAT: &'static str = "%Y-%m-%d %H:%M:%S";
	// what you'd get if you pasted it out of a browser's `Date` string
	const ISO_FORMAT: &'static str = "%Y-%m-%dT%H:%M:%S";

	pub fn parse(input: &str) -> Result<Self, MomentError> {
		let trimmed = input.trim();
		NaiveDateTime::parse_from_str(trimmed, Self::FORMAT)
			.or_else(|_| NaiveDateTime::parse_from_str(trimmed, Self::ISO_FORMAT))
			.map(Self)
			.map_err(|source| MomentError { input: input.to_string(), source })
	}

	#[must_use]
	pub fn naive(&self) -> NaiveDateTime {
		self.0
	}

	/// Pins this wall-clock time to an instant in `tz`.
	///
	/// Ambiguous times (when clocks go back) take the earlier instant. Times that don't exist
	/// (when clocks go forward) are pushed an hour later, which is what browsers do with
	/// `new Date("...")`.
	pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
		match tz.from_local_datetime(&self.0) {
			LocalResult::Single(dt) => Some(dt),
			LocalResult::Ambiguous(earliest, _) => Some(earliest),
			LocalResult::None => self.0.checked_add_signed(TimeDelta::hours(1))
				.and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
		}
	}

	#[must_use]
	pub fn calendar(&self) -> CalendarGrid {
		crate::calendar::compute_calendar_grid(self)
	}
}

impl fmt::Display for TargetMoment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0.format(Self::FORMAT))
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RemainingDuration {
	pub days: u64,
	pub hours: u64,
	pub minutes: u64,
	pub seconds: u64
}

impl RemainingDuration {
	pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

	#[must_use]
	pub fn from_seconds(total: u64) -> Self {
		Self {
			days: total / 86_400,
			hours: total % 86_400 / 3_600,
			minutes: total % 3_600 / 60,
			seconds: total % 60
		}
	}

	#[must_use]
	pub fn total_seconds(&self) -> u64 {
		self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Self::ZERO
	}
}

/// How long is left between `now` and `target`, in whole seconds. Once `target` has passed this
/// is just all zeros; there's no separate 'expired' state.
pub fn compute_remaining<A: TimeZone, B: TimeZone>(now: &DateTime<A>, target: &DateTime<B>) -> RemainingDuration {
	// num_seconds truncates toward zero, which is a floor for anything positive, and we clamp the
	// negatives away right after
	let secs = target.naive_utc()
		.signed_duration_since(now.naive_utc())
		.num_seconds();

	u64::try_from(secs).map_or(RemainingDuration::ZERO, RemainingDuration::from_seconds)
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::{FixedOffset, NaiveDate, Utc};

	fn utc(s: &str) -> DateTime<Utc> {
		TargetMoment::parse(s).unwrap().resolve(&Utc).unwrap()
	}

	#[test]
	fn parses_both_separators() {
		let spaced = TargetMoment::parse("2026-03-22 12:00:00").unwrap();
		let iso = TargetMoment::parse("2026-03-22T12:00:00").unwrap();
		assert_eq!(spaced, iso);
		assert_eq!(spaced.to_string(), "2026-03-22 12:00:00");
		assert_eq!(
			spaced.naive(),
			NaiveDate::from_ymd_opt(2026, 3, 22).unwrap().and_hms_opt(12, 0, 0).unwrap()
		);
	}

	#[test]
	fn rejects_garbage() {
		for bad in ["", "soon", "2026-03-22", "2026-13-01 00:00:00", "2026-02-30 10:00:00", "2026-03-22 25:00:00"] {
			let err = TargetMoment::parse(bad).unwrap_err();
			assert!(err.to_string().contains("YYYY-MM-DD"), "{bad}: {err}");
		}
	}

	#[test]
	fn two_days_out() {
		let target = utc("2026-03-22 12:00:00");
		let now = utc("2026-03-20 12:00:00");
		assert_eq!(
			compute_remaining(&now, &target),
			RemainingDuration { days: 2, hours: 0, minutes: 0, seconds: 0 }
		);
	}

	#[test]
	fn decomposes_largest_unit_first() {
		let target = utc("2026-03-22 12:00:00");
		let now = utc("2026-03-21 09:58:30");
		let remaining = compute_remaining(&now, &target);
		assert_eq!(remaining, RemainingDuration { days: 1, hours: 2, minutes: 1, seconds: 30 });
		assert_eq!(remaining.total_seconds(), 86_400 + 2 * 3_600 + 60 + 30);
	}

	#[test]
	fn partial_seconds_are_floored() {
		let target = utc("2026-03-22 12:00:05");
		let now = utc("2026-03-22 12:00:00") + TimeDelta::milliseconds(500);
		assert_eq!(compute_remaining(&now, &target).total_seconds(), 4);

		let almost = target - TimeDelta::milliseconds(1);
		assert!(compute_remaining(&almost, &target).is_zero());
	}

	#[test]
	fn past_targets_are_all_zero() {
		let target = utc("2026-03-22 12:00:00");
		for now in ["2026-03-22 12:00:00", "2026-03-22 12:00:01", "2030-01-01 00:00:00"] {
			assert_eq!(compute_remaining(&utc(now), &target), RemainingDuration::ZERO);
		}
	}

	#[test]
	fn sum_matches_difference_over_a_range() {
		let target = utc("2026-03-22 12:00:00");
		let mut now = utc("2025-12-31 23:59:59");
		// a prime stride so we hit lots of different residues
		while now < target {
			let remaining = compute_remaining(&now, &target);
			let expected = (target - now).num_seconds();
			assert_eq!(remaining.total_seconds(), expected as u64);
			assert!(remaining.hours < 24 && remaining.minutes < 60 && remaining.seconds < 60);
			now += TimeDelta::seconds(7_919);
		}
	}

	#[test]
	fn zones_are_respected() {
		let moment = TargetMoment::parse("2026-03-22 12:00:00").unwrap();
		let cdmx = FixedOffset::west_opt(6 * 3_600).unwrap();
		let target = moment.resolve(&cdmx).unwrap();
		// noon in UTC-6 is 18:00 UTC
		let now = utc("2026-03-22 12:00:00");
		assert_eq!(
			compute_remaining(&now, &target),
			RemainingDuration { days: 0, hours: 6, minutes: 0, seconds: 0 }
		);
	}

	#[test]
	fn from_seconds_round_trips() {
		for total in [0, 1, 59, 60, 3_599, 3_600, 86_399, 86_400, 1_000_000] {
			assert_eq!(RemainingDuration::from_seconds(total).total_seconds(), total);
		}
	}
}
