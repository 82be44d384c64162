use gloo_console::log;
use gloo_events::EventListener;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MusicProps {
	pub src: AttrValue
}

#[derive(Clone)]
struct Playback {
	playing: UseStateSetter<bool>,
	show_note: UseStateSetter<bool>
}

impl Playback {
	fn refused(&self) {
		self.playing.set(false);
		self.show_note.set(true);
	}

	// Browsers tend to refuse anything that isn't muted until the page has been interacted with,
	// which is what the note is for
	fn try_play(&self, audio: &HtmlAudioElement, unmuted: bool) {
		audio.set_loop(true);
		audio.set_muted(!unmuted);

		let promise = match audio.play() {
			Ok(promise) => promise,
			Err(e) => {
				log!("Couldn't start the song: ", e);
				self.refused();
				return;
			}
		};

		let playback = self.clone();
		wasm_bindgen_futures::spawn_local(async move {
			match JsFuture::from(promise).await {
				Ok(_) => {
					playback.playing.set(true);
					playback.show_note.set(false);
				},
				Err(e) => {
					log!("Song didn't play: ", e);
					playback.refused();
				}
			}
		});
	}
}

#[function_component(MusicToggle)]
pub fn music_toggle(props: &MusicProps) -> Html {
	let audio_ref = use_node_ref();
	let playing = use_state(|| false);
	let show_note = use_state(|| false);

	let playback = Playback {
		playing: playing.setter(),
		show_note: show_note.setter()
	};

	// muted autoplay straight away, then a real attempt the first time they click anywhere
	{
		let audio_ref = audio_ref.clone();
		let playback = playback.clone();
		use_effect_with((), move |()| {
			if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
				playback.try_play(&audio, false);
			}

			let listener = web_sys::window()
				.and_then(|w| w.document())
				.map(|doc| EventListener::once(&doc, "click", move |_| {
					if let Some(audio) = audio_ref.cast::<HtmlAudioElement>() {
						playback.try_play(&audio, true);
					}
				}));

			move || drop(listener)
		});
	}

	let toggle = {
		let audio_ref = audio_ref.clone();
		let is_playing = *playing;

		Callback::from(move |e: MouseEvent| {
			// otherwise this would also count as the first click on the document
			e.stop_propagation();

			let Some(audio) = audio_ref.cast::<HtmlAudioElement>() else {
				return;
			};

			if is_playing {
				if let Err(e) = audio.pause() {
					log!("Couldn't pause: ", e);
				}
				playback.playing.set(false);
			} else {
				playback.try_play(&audio, true);
			}
		})
	};

	html! {
		<>
			<audio ref={ audio_ref } src={ props.src.clone() } preload="auto"></audio>
			<button id="music-btn" title="Música" onclick={ toggle }>
				{ if *playing { "🔊" } else { "🔈" } }
			</button>
			if *show_note {
				<div id="tap-note">{ "Toca en cualquier parte para activar la música 🔊" }</div>
			}
		</>
	}
}
