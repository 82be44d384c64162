use std::rc::Rc;

use gloo_events::EventListener;
use invite_shared::Carousel;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
struct CarouselState(Carousel);

pub enum CarouselAction {
	Advance(isize),
	JumpTo(usize)
}

impl Reducible for CarouselState {
	type Action = CarouselAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut carousel = self.0;

		match action {
			CarouselAction::Advance(step) => carousel.advance(step),
			CarouselAction::JumpTo(idx) => {
				// out of range just means a stale dot, so there's nothing to do about it
				carousel.jump_to(idx);
			}
		}

		Self(carousel).into()
	}
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
	pub images: Vec<AttrValue>
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
	let len = props.images.len();
	let state = use_reducer_eq(move || CarouselState(Carousel::new(len)));

	// arrow keys work from anywhere on the page, not just when the carousel has focus
	{
		let dispatcher = state.dispatcher();
		use_effect_with(len, move |len| {
			let listener = (*len > 0)
				.then(web_sys::window)
				.flatten()
				.and_then(|w| w.document())
				.map(|doc| EventListener::new(&doc, "keydown", move |event| {
					let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
						return;
					};

					match event.key().as_str() {
						"ArrowLeft" => dispatcher.dispatch(CarouselAction::Advance(-1)),
						"ArrowRight" => dispatcher.dispatch(CarouselAction::Advance(1)),
						_ => ()
					}
				}));

			move || drop(listener)
		});
	}

	let carousel = state.0;
	if carousel.is_empty() {
		return html! {};
	}

	let nav = |step: isize| {
		let state = state.clone();
		Callback::from(move |_: MouseEvent| state.dispatch(CarouselAction::Advance(step)))
	};

	html! {
		<div class="carousel">
			<div class="viewport">
				<div
					class="track"
					style={ format!("transform: translateX({}%);", carousel.track_offset_percent()) }
				>
					{ for props.images.iter().enumerate().map(|(idx, src)| html! {
						<div class="slide">
							<img src={ src.clone() } alt={ format!("Foto {}", idx + 1) } loading="lazy" />
						</div>
					}) }
				</div>
				<button class="navbtn prev" aria-label="Anterior" onclick={ nav(-1) }>{ "‹" }</button>
				<button class="navbtn next" aria-label="Siguiente" onclick={ nav(1) }>{ "›" }</button>
			</div>
			<div class="dots">
				{ for carousel.indicators().enumerate().map(|(idx, active)| {
					let state = state.clone();
					html! {
						<span
							class={ classes!("dot", active.then_some("active")) }
							onclick={ move |_: MouseEvent| state.dispatch(CarouselAction::JumpTo(idx)) }
						></span>
					}
				}) }
			</div>
		</div>
	}
}
