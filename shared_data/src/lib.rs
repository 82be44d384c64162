mod md_to_html;
pub use md_to_html::md_to_html;

pub mod calendar;
pub mod carousel;
pub mod config;
pub mod moment;
pub mod rsvp;

pub use calendar::{CalendarCell, CalendarGrid, compute_calendar_grid};
pub use carousel::Carousel;
pub use config::{ConfigError, Couple, InviteConfig};
pub use moment::{MomentError, RemainingDuration, TargetMoment, compute_remaining};

/// Where the frontend asks for its [`WidgetInputs`]
pub const WIDGETS_ENDPOINT: &str = "/api/widgets";

/// Ids of the elements the server leaves empty (or filled with placeholders) for the frontend to
/// mount into
pub mod mount {
	pub const COUNTDOWN: &str = "countdown-root";
	pub const CAROUSEL: &str = "carousel-root";
	pub const RSVP: &str = "rsvp-root";
	pub const MUSIC: &str = "music-root";
}

/// Countdown unit labels, days first. Both the server's placeholder and the live widget use
/// these so nothing jumps around once the widget mounts.
pub const COUNTDOWN_LABELS: [&str; 4] = ["Días", "Hrs", "Mins", "Segs"];

/// What shows in each countdown field before (or instead of) a real value
pub const COUNTDOWN_PLACEHOLDER: &str = "--";

/// Everything the client-side widgets need, handed over by the page that hosts them.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct WidgetInputs {
	/// Kept as the raw configured string; the countdown does its own parsing so that a bad value
	/// shows up as a broken countdown rather than a broken page
	pub target_moment: String,
	pub gallery: Vec<String>,
	pub music: Option<String>,
	pub rsvp: RsvpInputs
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RsvpInputs {
	pub couple: Couple,
	pub whatsapp_phone: String
}

pub const BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;800&family=Montserrat:wght@300;400;600&display=swap');
* {
	box-sizing: border-box;
}
html, body {
	margin: 0;
	font-family: 'Montserrat', system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
	color: var(--theme-text);
}
body {
	background: linear-gradient(var(--theme-overlay), var(--theme-overlay)), var(--page-background, #1d1a16);
	background-size: cover;
	background-attachment: fixed;
	background-position: center center;
	background-repeat: no-repeat;
}
main {
	max-width: 1200px;
	margin: 0 auto;
	padding: 16px;
}
.section {
	width: 100%;
	border-radius: 22px;
	padding: 44px 36px;
	margin: 18px 0;
}
.h-serif {
	font-family: 'Playfair Display', serif;
	color: var(--theme-text);
}
.p-muted {
	color: rgba(245, 240, 232, 0.88);
}
.hr-soft {
	border: none;
	height: 1px;
	background: rgba(255, 255, 255, 0.18);
	margin: 18px 0;
}
.card {
	background: var(--card-background);
	color: var(--card-text);
	border-radius: 16px;
	padding: 18px;
	box-shadow: 0 10px 26px rgba(0, 0, 0, 0.18);
}
.btn-link {
	display: inline-block;
	background: #111;
	color: #fff;
	padding: 10px 16px;
	border-radius: 10px;
	text-decoration: none;
	font-weight: 600;
}
.small-center {
	text-align: center;
}
.gold {
	color: var(--theme-accent);
}
.icon-big {
	font-size: 36px;
	line-height: 1;
}
.notice {
	background: rgba(0, 0, 0, 0.35);
	border: 1px dashed var(--theme-accent);
	border-radius: 12px;
	padding: 14px 18px;
	text-align: center;
}
"#;

pub const WIDGET_STYLE: &str = r#"
.countdown {
	width: 100%;
	max-width: 520px;
	margin: 0 auto;
	border: 2px solid rgba(215, 194, 154, 0.65);
	border-radius: 14px;
	padding: 14px 10px;
	background: rgba(0, 0, 0, 0.25);
	font-family: 'Playfair Display', serif;
	display: flex;
	justify-content: space-around;
	gap: 10px;
	text-align: center;
}
.countdown-value {
	font-size: 26px;
	font-weight: 800;
}
.countdown-label {
	opacity: 0.9;
}
.calendar {
	max-width: 320px;
	margin: 18px auto 0 auto;
	text-align: center;
}
.calendar-title {
	font-family: 'Playfair Display', serif;
	font-size: 20px;
	margin-bottom: 8px;
}
.calendar-grid {
	display: grid;
	grid-template-columns: repeat(7, 1fr);
	gap: 4px;
}
.calendar-weekday {
	font-size: 12px;
	opacity: 0.7;
}
.calendar-day {
	padding: 6px 0;
	border-radius: 999px;
}
.calendar-day.target {
	background: var(--theme-accent);
	color: #111;
	font-weight: 800;
}
.carousel {
	width: 100%;
	max-width: 860px;
	margin: 0 auto;
	position: relative;
}
.viewport {
	width: 100%;
	height: clamp(320px, 50vw, 560px);
	border-radius: 16px;
	overflow: hidden;
	box-shadow: 0 16px 34px rgba(0, 0, 0, 0.30);
	background: rgba(0, 0, 0, 0.18);
	position: relative;
}
.track {
	display: flex;
	width: 100%;
	height: 100%;
	transition: transform 420ms ease;
	will-change: transform;
}
.slide {
	flex: 0 0 100%;
	width: 100%;
	height: 100%;
	display: flex;
	align-items: center;
	justify-content: center;
}
.slide img {
	width: 100%;
	height: 100%;
	object-fit: contain;
	display: block;
}
.navbtn {
	position: absolute;
	top: 50%;
	transform: translateY(-50%);
	width: 48px;
	height: 48px;
	border-radius: 999px;
	border: none;
	cursor: pointer;
	background: rgba(0, 0, 0, 0.55);
	color: white;
	font-size: 26px;
	z-index: 10;
}
.prev {
	left: 18px;
}
.next {
	right: 18px;
}
.dots {
	display: flex;
	justify-content: center;
	gap: 8px;
	margin-top: 12px;
}
.dot {
	width: 8px;
	height: 8px;
	border-radius: 999px;
	background: rgba(255, 255, 255, 0.45);
	cursor: pointer;
}
.dot.active {
	background: rgba(255, 255, 255, 0.95);
}
.rsvp-form {
	display: grid;
	gap: 10px;
}
.rsvp-form input {
	border-radius: 10px;
	border: 1px solid rgba(255, 255, 255, 0.3);
	background: rgba(0, 0, 0, 0.3);
	color: var(--theme-text);
	font-size: 16px;
	padding: 8px 12px;
}
.rsvp-form button {
	border: none;
	border-radius: 10px;
	padding: 10px 16px;
	background: var(--theme-accent);
	color: #111;
	font-weight: 600;
	cursor: pointer;
}
#music-btn {
	width: 48px;
	height: 48px;
	border-radius: 12px;
	border: none;
	cursor: pointer;
	background: rgba(0, 0, 0, 0.55);
	color: white;
	font-size: 22px;
	box-shadow: 0 10px 24px rgba(0, 0, 0, 0.25);
}
#tap-note {
	margin-top: 18px;
	padding: 8px 12px;
	border-radius: 999px;
	background: rgba(0, 0, 0, 0.35);
	font-size: 12px;
	display: inline-block;
}
"#;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widget_inputs_wire_format() {
		let inputs = WidgetInputs {
			target_moment: "2026-03-22 12:00:00".into(),
			gallery: vec!["/api/assets/gallery1.jpg".into()],
			music: None,
			rsvp: RsvpInputs { couple: Couple::default(), whatsapp_phone: "52".into() }
		};

		let json = serde_json::to_value(&inputs).unwrap();
		assert_eq!(json["target_moment"], "2026-03-22 12:00:00");
		assert_eq!(json["gallery"][0], "/api/assets/gallery1.jpg");
		assert!(json["music"].is_null());
		assert_eq!(json["rsvp"]["couple"]["first"], "Jesús Alberto");
	}
}
