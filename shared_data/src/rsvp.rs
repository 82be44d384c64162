use crate::config::Couple;

pub const MAX_GUESTS: u8 = 20;

// what gets shown in place of the name if they didn't bother to fill it in
const NO_NAME: &str = "___";

#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
	!phone.is_empty() && phone.bytes().all(|b| b.is_ascii_digit())
}

#[must_use]
pub fn compose_message(couple: &Couple, name: &str, guests: u8) -> String {
	let name = match name.trim() {
		"" => NO_NAME,
		trimmed => trimmed
	};

	format!(
		"Hola! Soy {name}. Confirmo mi asistencia a la boda de {couple}. Invitados: {}.",
		guests.min(MAX_GUESTS)
	)
}

/// Whatever's typed into the guest count field. Anything that isn't a number counts as nobody,
/// and anything too big is just capped.
#[must_use]
pub fn parse_guests(raw: &str) -> u8 {
	raw.trim()
		.parse::<u32>()
		.map_or(0, |n| u8::try_from(n).unwrap_or(u8::MAX).min(MAX_GUESTS))
}

/// Builds a `wa.me` deep link that opens a chat with `phone` with `message` already typed out.
#[must_use]
pub fn whatsapp_link(phone: &str, message: &str) -> String {
	format!("https://wa.me/{phone}?text={}", urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn couple() -> Couple {
		Couple { first: "Ana".into(), second: "Luis".into() }
	}

	#[test]
	fn message_uses_trimmed_name() {
		assert_eq!(
			compose_message(&couple(), "  Marta ", 3),
			"Hola! Soy Marta. Confirmo mi asistencia a la boda de Ana & Luis. Invitados: 3."
		);
	}

	#[test]
	fn blank_name_gets_placeholder() {
		assert!(compose_message(&couple(), " \t", 0).starts_with("Hola! Soy ___."));
	}

	#[test]
	fn guest_count_is_capped() {
		assert!(compose_message(&couple(), "Marta", 200).ends_with("Invitados: 20."));
	}

	#[test]
	fn link_is_fully_encoded() {
		let link = whatsapp_link("522219683400", "Hola! Soy Ñoño & co.");
		assert_eq!(link, "https://wa.me/522219683400?text=Hola%21%20Soy%20%C3%91o%C3%B1o%20%26%20co.");
	}

	#[test]
	fn guest_field_parsing() {
		assert_eq!(parse_guests("4"), 4);
		assert_eq!(parse_guests(" 12 "), 12);
		assert_eq!(parse_guests(""), 0);
		assert_eq!(parse_guests("dos"), 0);
		assert_eq!(parse_guests("-3"), 0);
		assert_eq!(parse_guests("21"), MAX_GUESTS);
		assert_eq!(parse_guests("9000"), MAX_GUESTS);
	}

	#[test]
	fn phone_validation() {
		assert!(is_valid_phone("522219683400"));
		assert!(!is_valid_phone(""));
		assert!(!is_valid_phone("+522219683400"));
		assert!(!is_valid_phone("52 221"));
	}
}
