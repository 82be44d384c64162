use invite_shared::{
	rsvp::{compose_message, parse_guests, whatsapp_link, MAX_GUESTS},
	Couple,
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RsvpProps {
	pub couple: Couple,
	pub phone: AttrValue
}

fn input_value(e: &InputEvent) -> Option<String> {
	e.target()
		.and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
		.map(|input| input.value())
}

/// Nothing here ever reaches our server; submitting just builds the WhatsApp link for them to
/// open themselves.
#[function_component(RsvpForm)]
pub fn rsvp_form(props: &RsvpProps) -> Html {
	let name = use_state(String::new);
	let guests = use_state(|| 0u8);
	let link = use_state(|| None::<String>);

	let name_input = {
		let name = name.clone();
		Callback::from(move |e: InputEvent| if let Some(value) = input_value(&e) {
			name.set(value);
		})
	};

	let guests_input = {
		let guests = guests.clone();
		Callback::from(move |e: InputEvent| if let Some(value) = input_value(&e) {
			guests.set(parse_guests(&value));
		})
	};

	let submit = {
		let (name, guests, link) = (name.clone(), guests.clone(), link.clone());
		let couple = props.couple.clone();
		let phone = props.phone.clone();

		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			let message = compose_message(&couple, &name, *guests);
			link.set(Some(whatsapp_link(&phone, &message)));
		})
	};

	html! {
		<form class="rsvp-form" onsubmit={ submit }>
			<label for="rsvp-name">{ "Nombre" }</label>
			<input id="rsvp-name" type="text" value={ (*name).clone() } oninput={ name_input } />
			<label for="rsvp-guests">{ "Invitados" }</label>
			<input
				id="rsvp-guests"
				type="number"
				min="0"
				max={ MAX_GUESTS.to_string() }
				step="1"
				value={ guests.to_string() }
				oninput={ guests_input }
			/>
			<button type="submit">{ "Confirmar Asistencia" }</button>
			{ (*link).as_ref().map(|href| html! {
				<>
					<p>{ "Listo ✅ Ahora confirma por WhatsApp:" }</p>
					<a href={ href.clone() } target="_blank" rel="noopener">{ "Abrir WhatsApp" }</a>
				</>
			}) }
		</form>
	}
}
