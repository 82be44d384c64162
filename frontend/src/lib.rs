use gloo_console::error;
use invite_shared::{mount, WidgetInputs, WIDGETS_ENDPOINT};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::BaseComponent;

use carousel::{Gallery, GalleryProps};
use countdown::{Countdown, CountdownProps};
use music::{MusicProps, MusicToggle};
use rsvp::{RsvpForm, RsvpProps};

mod carousel;
mod countdown;
mod music;
mod rsvp;

async fn get_widget_inputs() -> Result<WidgetInputs, String> {
	let res = gloo_net::http::Request::get(WIDGETS_ENDPOINT)
		.send()
		.await
		.map_err(|e| format!("Couldn't ask for widget inputs: {e:?}"))?;

	if !res.ok() {
		return Err(match res.text().await {
			Ok(text) => format!("Server wouldn't give us widget inputs ({}): {text}", res.status()),
			Err(e) => format!("There was an error getting the response: {e:?}")
		});
	}

	res.json::<WidgetInputs>()
		.await
		.map_err(|e| format!("There was an error while decoding widget inputs: {e:?}"))
}

fn mount_root(id: &str) -> Option<Element> {
	let root = web_sys::window()?.document()?.get_element_by_id(id)?;
	// the server's placeholders would otherwise sit right next to the live widget
	root.set_inner_html("");
	Some(root)
}

fn mount_widget<C: BaseComponent>(id: &str, props: C::Properties) {
	match mount_root(id) {
		Some(root) => {
			yew::Renderer::<C>::with_root_and_props(root, props).render();
		},
		None => error!(format!("Nowhere to mount into; #{id} is missing"))
	}
}

/// Each widget gets mounted into its own element of the server-rendered page, once we know what
/// to give them. If we never find out, the page just keeps its placeholders.
#[wasm_bindgen(start)]
pub fn start() {
	console_error_panic_hook::set_once();

	wasm_bindgen_futures::spawn_local(async {
		let inputs = match get_widget_inputs().await {
			Ok(inputs) => inputs,
			Err(e) => {
				error!(e);
				return;
			}
		};

		mount_widget::<Countdown>(mount::COUNTDOWN, CountdownProps {
			target: inputs.target_moment.into()
		});

		// the page leaves these out entirely when there's nothing to show
		if !inputs.gallery.is_empty() {
			mount_widget::<Gallery>(mount::CAROUSEL, GalleryProps {
				images: inputs.gallery.into_iter().map(Into::into).collect()
			});
		}

		if let Some(src) = inputs.music {
			mount_widget::<MusicToggle>(mount::MUSIC, MusicProps { src: src.into() });
		}

		mount_widget::<RsvpForm>(mount::RSVP, RsvpProps {
			couple: inputs.rsvp.couple,
			phone: inputs.rsvp.whatsapp_phone.into()
		});
	});
}
