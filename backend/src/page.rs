use const_format::concatcp;
use horrorshow::{html, helper::doctype, Raw, RenderOnce, Template, TemplateBuffer};
use invite_shared::{
	config::{Families, InviteConfig},
	md_to_html,
	mount,
	BASE_STYLE,
	COUNTDOWN_LABELS,
	COUNTDOWN_PLACEHOLDER,
	WIDGET_STYLE,
};

use crate::assets::{Asset, AssetIndex};

const LAYOUT_STYLE: &str = r#"
#hero {
	width: 100%;
	height: 92vh;
	min-height: 550px;
	max-height: 800px;
	border-radius: 24px;
	overflow: hidden;
	position: relative;
	background-size: cover;
	background-position: center 38%;
	box-shadow: 0 14px 40px rgba(0, 0, 0, 0.35);
}
.hero-content {
	position: absolute;
	inset: 0;
	display: flex;
	flex-direction: column;
	align-items: center;
	justify-content: center;
	text-align: center;
	padding: 20px;
}
.hero-names {
	font-family: 'Playfair Display', serif;
	font-size: clamp(44px, 6vw, 92px);
	font-weight: 800;
	letter-spacing: 1px;
}
.hero-subtitle {
	margin-top: 10px;
	font-size: 14px;
	letter-spacing: 2px;
	font-weight: 600;
}
.hero-date {
	margin-top: 14px;
	font-family: 'Playfair Display', serif;
	font-size: 18px;
}
#music-root {
	position: absolute;
	right: 16px;
	top: 50%;
	transform: translateY(-50%);
	text-align: right;
}
#story-row {
	display: grid;
	grid-template-columns: 1.2fr 1fr 1.2fr;
	gap: 32px;
	align-items: center;
}
#story-row > img {
	width: 100%;
	border-radius: 16px;
}
@media (max-width: 800px) {
	#story-row {
		grid-template-columns: 1fr;
	}
}
#families {
	display: flex;
	gap: 20px;
	justify-content: space-between;
	flex-wrap: wrap;
	margin-top: 10px;
}
.family {
	flex: 1;
	min-width: 220px;
	text-align: center;
}
.family > .h-serif {
	font-size: 22px;
	font-weight: 700;
}
.family > .p-muted {
	margin-top: 10px;
	font-size: 16px;
}
.section-title {
	font-size: 40px;
	font-weight: 800;
}
#rsvp-root {
	max-width: 560px;
	margin: 0 auto;
}
"#;

const PAGE_STYLE: &str = concatcp!(BASE_STYLE, WIDGET_STYLE, LAYOUT_STYLE);

/// Loads the wasm bundle that `wasm-pack build --target web` spits out; it mounts all the
/// widgets itself once it starts.
const BOOTSTRAP_SCRIPT: &str = "import init from '/pkg/invite_frontend.js'; init();";

pub fn render_page(config: &InviteConfig, assets: &AssetIndex, year: i32) -> Result<String, horrorshow::Error> {
	InvitationPage { config, assets, year }.into_string()
}

pub struct InvitationPage<'a> {
	pub config: &'a InviteConfig,
	pub assets: &'a AssetIndex,
	/// For the copyright line in the footer
	pub year: i32
}

impl RenderOnce for InvitationPage<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self { config, assets, year } = self;

		let mut theme = config.theme.css_variables();
		if let Some(bg) = &assets.background {
			theme.push_str(&format!(":root {{ --page-background: url('{}'); }}\n", bg.url()));
		}

		tmpl << html! {
			: doctype::HTML;
			html(lang = "es") {
				head {
					meta(charset = "utf-8");
					meta(name = "viewport", content = "width=device-width, initial-scale=1");
					title : config.couple.to_string();
					style : Raw(PAGE_STYLE);
					style : Raw(theme);
					script(type = "module") : Raw(BOOTSTRAP_SCRIPT);
				}
				body {
					main {
						: Hero { config, assets };
						div(class = "section small-center") {
							div(class = "h-serif", style = "font-size: 56px; font-weight: 800;") : &config.intro.title;
							div(class = "p-muted", style = "max-width: 900px; margin: 14px auto 0; font-size: 16px;") : Raw(md_to_html(&config.intro.text));
						}
						div(id = "story-row") {
							: StoryImage(assets.story_left.as_ref(), "story_left");
							div(id = mount::COUNTDOWN) {
								div(class = "countdown") {
									@ for label in COUNTDOWN_LABELS {
										div(class = "countdown-unit") {
											div(class = "countdown-value") : COUNTDOWN_PLACEHOLDER;
											div(class = "countdown-label") : label;
										}
									}
								}
							}
							: StoryImage(assets.story_right.as_ref(), "story_right");
						}
						: FamiliesSection(&config.families);
						: VenueCard(config);
						div(class = "section") {
							div(class = "h-serif small-center section-title") : "Código de Vestimenta";
							div(class = "small-center p-muted", style = "margin-top: 10px; font-size: 18px;") {
								b(class = "h-serif") : &config.dress_code.code;
								br;
								: &config.dress_code.note;
							}
						}
						div(class = "section small-center") {
							div(class = "h-serif section-title") : &config.registry.title;
							div(class = "p-muted", style = "margin-top: 10px; font-size: 18px;") : &config.registry.note;
							: RegistryLink(config.registry.link.as_deref());
						}
						: GallerySection { config, assets };
						div(class = "section") {
							div(class = "h-serif small-center section-title") {
								: &config.rsvp.title;
								: " ";
								span(class = "gold") : "🟢";
							}
						}
						div(class = "card") {
							div(id = mount::RSVP) {
								noscript : "Activa JavaScript para confirmar tu asistencia.";
							}
						}
						div(class = "section small-center", style = "padding: 26px 16px;") {
							div(class = "p-muted") : &config.footer.line;
							div(class = "h-serif", style = "font-size: 22px; font-weight: 700;") : config.couple.to_string();
							div(style = "margin-top: 10px; opacity: 0.6; font-size: 12px;") : format_args!("© {year}");
						}
					}
				}
			}
		};
	}
}

struct Hero<'a> {
	config: &'a InviteConfig,
	assets: &'a AssetIndex
}

impl RenderOnce for Hero<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Some(hero) = &self.assets.hero else {
			tmpl << html! {
				div(class = "section notice") : "Missing hero image. Add one of: assets/hero.jpg | hero.jpeg | hero.png | hero.webp";
			};
			return;
		};

		let background = format!(
			"background-image: linear-gradient(var(--theme-overlay), var(--theme-overlay)), url('{}');",
			hero.url()
		);
		let couple = &self.config.couple;
		let event = &self.config.event;
		let has_music = self.assets.music.is_some();

		tmpl << html! {
			div(id = "hero", style = background) {
				div(class = "hero-content") {
					div(class = "hero-names") {
						: &couple.first;
						span(class = "gold", style = "font-weight: 600;") : " & ";
						: &couple.second;
					}
					div(class = "hero-subtitle") : &event.hero_subtitle;
					div(class = "hero-date") : &event.hero_date_text;
				}
				// the frontend fills this in with the play/pause button and the audio element
				@ if has_music {
					div(id = mount::MUSIC) {}
				}
			}
		};
	}
}

struct StoryImage<'a>(Option<&'a Asset>, &'static str);

impl RenderOnce for StoryImage<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self(asset, stem) = self;
		match asset {
			Some(asset) => tmpl << html! { img(src = asset.url(), alt = ""); },
			None => tmpl << html! {
				div(class = "notice p-muted") : format_args!("Add {stem}.jpg/.jpeg/.png/.webp in assets/");
			}
		};
	}
}

struct FamiliesSection<'a>(&'a Families);

impl RenderOnce for FamiliesSection<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let families = self.0;
		tmpl << html! {
			div(class = "section") {
				div(class = "h-serif small-center", style = "font-size: 42px; font-weight: 700;") : &families.heading;
				div(class = "hr-soft") {}
				div(id = "families") {
					: FamilyColumn("Padres de la Novia", &families.bride_parents);
					: FamilyColumn("Padres del Novio", &families.groom_parents);
					: FamilyColumn("Padrinos", &families.sponsors);
				}
			}
		};
	}
}

struct FamilyColumn<'a>(&'static str, &'a [String]);

impl RenderOnce for FamilyColumn<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let Self(title, names) = self;
		if names.is_empty() {
			return;
		}

		tmpl << html! {
			div(class = "family") {
				div(class = "h-serif") : title;
				div(class = "p-muted") {
					@ for (idx, name) in names.iter().enumerate() {
						@ if idx > 0 {
							br;
							span(class = "gold") : "&";
							br;
						}
						: name;
					}
				}
			}
		};
	}
}

struct VenueCard<'a>(&'a InviteConfig);

impl RenderOnce for VenueCard<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let venue = &self.0.venue;
		tmpl << html! {
			div(class = "card small-center") {
				div(class = "icon-big") : "🥂";
				div(class = "h-serif", style = "font-size: 28px; font-weight: 800; margin-top: 6px;") : &venue.title;
				div(style = "margin-top: 12px; font-size: 16px;") {
					div { b : &venue.date; }
					div(style = "margin-top: 2px;") : &venue.time;
					div(style = "margin-top: 12px;") : &venue.place;
				}
				div(style = "margin-top: 14px;") {
					a(class = "btn-link", href = &venue.maps_url, target = "_blank", rel = "noopener") : "Ver mapa!";
				}
			}
		};
	}
}

struct RegistryLink<'a>(Option<&'a str>);

impl RenderOnce for RegistryLink<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		if let Some(link) = self.0 {
			tmpl << html! {
				div(style = "margin-top: 14px;") {
					a(class = "btn-link", href = link, target = "_blank", rel = "noopener") : "Ver mesa de regalos";
				}
			};
		}
	}
}

struct GallerySection<'a> {
	config: &'a InviteConfig,
	assets: &'a AssetIndex
}

impl RenderOnce for GallerySection<'_> {
	fn render_once(self, tmpl: &mut TemplateBuffer) {
		let gallery = &self.config.gallery;
		let has_images = !self.assets.gallery.is_empty();

		tmpl << html! {
			div(class = "section") {
				div(class = "h-serif small-center section-title") : &gallery.title;
				div(class = "small-center p-muted", style = "margin-top: 10px;") {
					@ if has_images {
						: &gallery.thanks_text;
					} else {
						: &gallery.empty_hint;
					}
				}
			}
			@ if has_images {
				div(id = mount::CAROUSEL) {}
			}
		};
	}
}
