use chrono::{DateTime, Local};
use gloo_console::error;
use gloo_timers::callback::Interval;
use invite_shared::{
	calendar::WEEKDAY_LABELS,
	CalendarCell,
	CalendarGrid,
	RemainingDuration,
	TargetMoment,
	compute_remaining,
	COUNTDOWN_LABELS,
	COUNTDOWN_PLACEHOLDER,
};
use yew::prelude::*;

const TICK_MS: u32 = 1_000;

#[derive(Properties, PartialEq)]
pub struct CountdownProps {
	/// Straight from the config, `YYYY-MM-DD HH:MM:SS` in the viewer's local time
	pub target: AttrValue
}

#[derive(Clone, Copy, PartialEq)]
struct Resolved {
	at: DateTime<Local>,
	grid: CalendarGrid
}

fn resolve(raw: &str) -> Option<Resolved> {
	let moment = match TargetMoment::parse(raw) {
		Ok(moment) => moment,
		Err(e) => {
			error!(format!("Countdown can't start: {e}"));
			return None;
		}
	};

	let Some(at) = moment.resolve(&Local) else {
		error!(format!("{moment} doesn't exist in this timezone"));
		return None;
	};

	Some(Resolved { at, grid: moment.calendar() })
}

fn remaining_until(target: DateTime<Local>) -> RemainingDuration {
	compute_remaining(&Local::now(), &target)
}

/// The countdown plus the month calendar underneath it. If the target doesn't parse, every field
/// shows a placeholder and the calendar is left out entirely.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
	let resolved = use_memo(props.target.clone(), |raw| resolve(raw));
	let remaining = {
		let resolved = *resolved;
		use_state(move || resolved.map(|r| remaining_until(r.at)))
	};

	// the interval is dropped (and so cancelled) whenever the target changes or we're unmounted
	{
		let set_remaining = remaining.setter();
		use_effect_with(resolved.clone(), move |resolved| {
			let ticker = (**resolved).map(|Resolved { at, .. }| {
				set_remaining.set(Some(remaining_until(at)));
				Interval::new(TICK_MS, move || set_remaining.set(Some(remaining_until(at))))
			});

			move || drop(ticker)
		});
	}

	let fields = remaining.map_or([None; 4], |r| [Some(r.days), Some(r.hours), Some(r.minutes), Some(r.seconds)]);

	html! {
		<>
			<div class="countdown">
				{ for fields.into_iter().zip(COUNTDOWN_LABELS).map(|(value, label)| html! {
					<div class="countdown-unit">
						<div class="countdown-value">{
							value.map_or_else(|| COUNTDOWN_PLACEHOLDER.to_string(), |v| v.to_string())
						}</div>
						<div class="countdown-label">{ label }</div>
					</div>
				}) }
			</div>
			{ resolved.map(|r| html! { <Calendar grid={ r.grid } /> }) }
		</>
	}
}

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
	pub grid: CalendarGrid
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
	let grid = &props.grid;

	html! {
		<div class="calendar">
			<div class="calendar-title">{ grid.title() }</div>
			<div class="calendar-grid">
				{ for WEEKDAY_LABELS.iter().map(|label| html! {
					<div class="calendar-weekday">{ *label }</div>
				}) }
				{ for grid.cells().map(|cell| match cell {
					CalendarCell::Blank => html! { <div class="calendar-blank"></div> },
					CalendarCell::Day { day, is_target } => html! {
						<div class={ classes!("calendar-day", is_target.then_some("target")) }>{ day }</div>
					}
				}) }
			</div>
		</div>
	}
}
