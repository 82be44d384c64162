/// Position state for the gallery viewer. Only the index lives here; the images themselves stay
/// with whatever is rendering them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
	len: usize,
	current: usize
}

impl Carousel {
	#[must_use]
	pub fn new(len: usize) -> Self {
		Self { len, current: 0 }
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Always 0 for an empty carousel, but there's nothing to show at that index anyways.
	#[must_use]
	pub fn current(&self) -> usize {
		self.current
	}

	/// Moves by `step` slides in either direction, wrapping past both ends.
	pub fn advance(&mut self, step: isize) {
		if self.is_empty() {
			return;
		}

		// a Vec can never hold more than isize::MAX items, so this cast can't wrap
		let len = self.len as isize;
		let forward = step.rem_euclid(len).unsigned_abs();
		self.current = (self.current + forward) % self.len;
	}

	/// Returns whether `index` was in range. Out-of-range indices leave the position alone.
	pub fn jump_to(&mut self, index: usize) -> bool {
		if index >= self.len {
			return false;
		}

		self.current = index;
		true
	}

	/// One flag per slide, with only the current one set.
	pub fn indicators(&self) -> impl Iterator<Item = bool> + '_ {
		(0..self.len).map(|idx| idx == self.current)
	}

	/// How far to translate the slide track, as a percentage of the viewport width.
	#[must_use]
	pub fn track_offset_percent(&self) -> i64 {
		i64::try_from(self.current)
			.map_or(0, |idx| idx.saturating_mul(-100))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wraps_both_ways() {
		let mut carousel = Carousel::new(3);
		carousel.advance(-1);
		assert_eq!(carousel.current(), 2);
		carousel.advance(1);
		assert_eq!(carousel.current(), 0);
		carousel.advance(1);
		carousel.advance(1);
		carousel.advance(1);
		assert_eq!(carousel.current(), 0);
	}

	#[test]
	fn arbitrary_steps_stay_in_range_and_undo() {
		let steps = [1, -1, 7, -13, 100, -101, isize::MAX, isize::MIN, 0, 2, -5];

		for len in 1..=9 {
			let mut carousel = Carousel::new(len);
			for step in steps {
				let before = carousel.current();
				carousel.advance(step);
				assert!(carousel.current() < len, "len {len}, step {step}");

				// isize::MIN can't be negated, so step back by its residue instead
				let undo = step.checked_neg().unwrap_or_else(|| -step.rem_euclid(len as isize));
				carousel.advance(undo);
				assert_eq!(carousel.current(), before, "len {len}, step {step}");

				carousel.advance(step);
			}
		}
	}

	#[test]
	fn jump_to_checks_bounds() {
		let mut carousel = Carousel::new(4);
		assert!(carousel.jump_to(3));
		assert_eq!(carousel.current(), 3);

		assert!(!carousel.jump_to(4));
		assert!(!carousel.jump_to(usize::MAX));
		assert_eq!(carousel.current(), 3);

		assert!(carousel.jump_to(0));
		assert_eq!(carousel.current(), 0);
	}

	#[test]
	fn exactly_one_active_indicator() {
		let mut carousel = Carousel::new(5);
		for step in [0, 1, 3, -2, -7] {
			carousel.advance(step);
			let indicators = carousel.indicators().collect::<Vec<_>>();
			assert_eq!(indicators.len(), 5);
			assert_eq!(indicators.iter().filter(|on| **on).count(), 1);
			assert!(indicators[carousel.current()]);
		}
	}

	#[test]
	fn empty_carousel_is_inert() {
		let mut carousel = Carousel::new(0);
		carousel.advance(1);
		carousel.advance(-1);
		carousel.advance(isize::MIN);
		assert!(!carousel.jump_to(0));
		assert_eq!(carousel.current(), 0);
		assert_eq!(carousel.indicators().count(), 0);
		assert_eq!(carousel.track_offset_percent(), 0);
		assert!(carousel.is_empty());
	}

	#[test]
	fn track_offset_follows_index() {
		let mut carousel = Carousel::new(8);
		carousel.advance(-1);
		assert_eq!(carousel.track_offset_percent(), -700);
		carousel.jump_to(2);
		assert_eq!(carousel.track_offset_percent(), -200);
	}
}
