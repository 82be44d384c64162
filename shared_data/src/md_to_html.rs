use pulldown_cmark::{Event, Options, Parser};

/// Renders the intro text from the config. Raw HTML in the input is escaped rather than passed
/// through, since the config isn't necessarily written by whoever's running the server.
#[must_use]
pub fn md_to_html(input: &str) -> String {
	let events = Parser::new_ext(input, Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION)
		.map(|ev| match ev {
			Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);
	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn renders_paragraphs_and_emphasis() {
		assert_eq!(
			md_to_html("Nos *casamos*.\n\nTe esperamos."),
			"<p>Nos <em>casamos</em>.</p>\n<p>Te esperamos.</p>\n"
		);
	}

	#[test]
	fn raw_html_is_escaped() {
		let html = md_to_html("hola <script>alert(1)</script>");
		assert!(!html.contains("<script>"), "{html}");
		assert!(html.contains("&lt;script&gt;"), "{html}");
	}
}
