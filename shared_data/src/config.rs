use std::fmt;

use serde::{Deserialize, Serialize};

// Everything here defaults to the content of the invitation we actually sent out, so a missing
// config file still gives you a complete (if somewhat specific) page. Every section can be
// overridden on its own from TOML.

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct InviteConfig {
	pub couple: Couple,
	pub event: EventDetails,
	pub intro: Intro,
	pub families: Families,
	pub venue: Venue,
	pub dress_code: DressCode,
	pub registry: Registry,
	pub gallery: GallerySettings,
	pub rsvp: RsvpSettings,
	pub footer: Footer,
	pub theme: Theme
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Couple {
	pub first: String,
	pub second: String
}

impl Default for Couple {
	fn default() -> Self {
		Self {
			first: "Jesús Alberto".into(),
			second: "Brianna Ayelen".into()
		}
	}
}

impl fmt::Display for Couple {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} & {}", self.first, self.second)
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct EventDetails {
	/// `YYYY-MM-DD HH:MM:SS`, in whatever timezone the viewer happens to be in
	pub date_time: String,
	pub hero_subtitle: String,
	pub hero_date_text: String
}

impl Default for EventDetails {
	fn default() -> Self {
		Self {
			date_time: "2026-03-22 12:00:00".into(),
			hero_subtitle: "NO FALTES A NUESTRA BODA".into(),
			hero_date_text: "22 MARZO, 2026".into()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Intro {
	pub title: String,
	/// Markdown
	pub text: String
}

impl Default for Intro {
	fn default() -> Self {
		Self {
			title: "¡Nos Casamos!".into(),
			text: "Después de compartir una hermosa historia de amor, nos complace invitarte a \
				celebrar el comienzo de una nueva etapa en nuestras vidas...".into()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Families {
	pub heading: String,
	pub bride_parents: Vec<String>,
	pub groom_parents: Vec<String>,
	/// Left empty, the sponsors column isn't shown at all
	pub sponsors: Vec<String>
}

impl Default for Families {
	fn default() -> Self {
		Self {
			heading: "¡Celebra con nosotros este día tan maravilloso!".into(),
			bride_parents: vec!["Enalyn Velasco".into(), "Vladimir Balam".into()],
			groom_parents: vec!["Jesús Tejeda".into(), "Evelin Sanchez".into()],
			sponsors: Vec::new()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Venue {
	pub title: String,
	pub date: String,
	pub time: String,
	pub place: String,
	pub maps_url: String
}

impl Default for Venue {
	fn default() -> Self {
		Self {
			title: "Ceremonia y Recepción".into(),
			date: "Domingo, 22 de Marzo de 2026".into(),
			time: "12:00 p.m.".into(),
			place: "Hotel Posada Señorial Cholula, Puebla".into(),
			maps_url: "https://maps.app.goo.gl/trKVWXCfvHpht5gG8".into()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DressCode {
	pub code: String,
	pub note: String
}

impl Default for DressCode {
	fn default() -> Self {
		Self {
			code: "Formal".into(),
			note: "Evitar color blanco (opcional).".into()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Registry {
	pub title: String,
	pub note: String,
	pub link: Option<String>
}

impl Default for Registry {
	fn default() -> Self {
		Self {
			title: "Mesa de Regalos".into(),
			note: "Tu presencia es nuestro mejor regalo. Si deseas tener un detalle con nosotros, \
				habrá una caja para sobres el día del evento.".into(),
			link: None
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct GallerySettings {
	pub title: String,
	pub thanks_text: String,
	pub empty_hint: String,
	pub max_items: usize
}

impl Default for GallerySettings {
	fn default() -> Self {
		Self {
			title: "Galería".into(),
			thanks_text: "Muchas gracias por su atención. Esperamos contar con su presencia.".into(),
			empty_hint: "Agrega fotos en /assets con nombres como: gallery1.jpg / gallery2.png / gallery3.jpeg ...".into(),
			max_items: 8
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RsvpSettings {
	pub title: String,
	/// Country code + number, digits only (no '+', no spaces)
	pub whatsapp_phone: String
}

impl Default for RsvpSettings {
	fn default() -> Self {
		Self {
			title: "Confirmación de Asistencia al Evento".into(),
			whatsapp_phone: "522219683400".into()
		}
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Footer {
	pub line: String
}

impl Default for Footer {
	fn default() -> Self {
		Self { line: "Con cariño".into() }
	}
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
	pub text: String,
	pub accent: String,
	pub card_background: String,
	pub card_text: String,
	pub overlay: String
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			text: "#f5f0e8".into(),
			accent: "#d7c29a".into(),
			card_background: "transparent".into(),
			card_text: "#ffffff".into(),
			overlay: "rgba(0,0,0,0.55)".into()
		}
	}
}

impl Theme {
	/// The custom properties that [`crate::BASE_STYLE`] reads from
	#[must_use]
	pub fn css_variables(&self) -> String {
		format!(
			":root {{\n\t--theme-text: {};\n\t--theme-accent: {};\n\t--card-background: {};\n\t--card-text: {};\n\t--theme-overlay: {};\n}}\n",
			self.text, self.accent, self.card_background, self.card_text, self.overlay
		)
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	InvalidPhone(String),
	EmptyCouple
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidPhone(phone) => write!(
				f, "rsvp.whatsapp_phone must be digits only (country code included, no '+'), got '{phone}'"
			),
			Self::EmptyCouple => f.write_str("couple.first and couple.second must both be set")
		}
	}
}

impl std::error::Error for ConfigError {}

impl InviteConfig {
	/// Checks the things that would make the page actively wrong, as opposed to just ugly. The
	/// event date isn't checked here since the countdown has its own broken state for that.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.couple.first.trim().is_empty() || self.couple.second.trim().is_empty() {
			return Err(ConfigError::EmptyCouple);
		}

		if !crate::rsvp::is_valid_phone(&self.rsvp.whatsapp_phone) {
			return Err(ConfigError::InvalidPhone(self.rsvp.whatsapp_phone.clone()));
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_are_valid() {
		assert_eq!(InviteConfig::default().validate(), Ok(()));
	}

	#[test]
	fn bad_phone_is_rejected() {
		let mut config = InviteConfig::default();
		config.rsvp.whatsapp_phone = "+52 221 968 3400".into();
		assert_eq!(
			config.validate(),
			Err(ConfigError::InvalidPhone("+52 221 968 3400".into()))
		);
	}

	#[test]
	fn blank_names_are_rejected() {
		let mut config = InviteConfig::default();
		config.couple.second = "  ".into();
		assert_eq!(config.validate(), Err(ConfigError::EmptyCouple));
	}

	#[test]
	fn partial_json_keeps_other_defaults() {
		let config: InviteConfig = serde_json::from_str(r#"{ "couple": { "first": "Ana" }, "gallery": { "max_items": 3 } }"#)
			.unwrap();
		assert_eq!(config.couple.first, "Ana");
		assert_eq!(config.couple.second, Couple::default().second);
		assert_eq!(config.gallery.max_items, 3);
		assert_eq!(config.gallery.title, "Galería");
		assert_eq!(config.venue, Venue::default());
	}

	#[test]
	fn theme_variables_cover_every_color() {
		let css = Theme::default().css_variables();
		for var in ["--theme-text: #f5f0e8", "--theme-accent: #d7c29a", "--theme-overlay: rgba(0,0,0,0.55)"] {
			assert!(css.contains(var), "{css}");
		}
	}

	#[test]
	fn couple_display() {
		assert_eq!(Couple::default().to_string(), "Jesús Alberto & Brianna Ayelen");
	}
}
