use std::{path::Path as FsPath, sync::Arc};

use axum::{
	extract::{Path, State},
	http::{header, StatusCode},
	response::{Html, IntoResponse},
	routing::get,
	Json,
	Router,
};
use chrono::Datelike;
use invite_shared::{InviteConfig, RsvpInputs, WidgetInputs, WIDGETS_ENDPOINT};
use tower_http::services::ServeDir;

use crate::{
	assets::{AssetIndex, ASSET_ROUTE},
	page::render_page,
	print_and_ret
};

/// Everything the handlers need. Built once before the server starts and never written to again,
/// so it's just shared behind an `Arc` with no locking.
#[derive(Debug)]
pub struct AppState {
	pub config: InviteConfig,
	pub assets: AssetIndex
}

impl AppState {
	#[must_use]
	pub fn widget_inputs(&self) -> WidgetInputs {
		WidgetInputs {
			target_moment: self.config.event.date_time.clone(),
			gallery: self.assets.gallery_urls(),
			music: self.assets.music.as_ref().map(|m| m.url()),
			rsvp: RsvpInputs {
				couple: self.config.couple.clone(),
				whatsapp_phone: self.config.rsvp.whatsapp_phone.clone()
			}
		}
	}
}

pub fn router(state: Arc<AppState>, frontend_dir: &FsPath) -> Router {
	Router::new()
		.route("/", get(get_invitation))
		.route(WIDGETS_ENDPOINT, get(get_widget_inputs))
		.route(&format!("{ASSET_ROUTE}/:name"), get(get_asset))
		.nest_service("/pkg", ServeDir::new(frontend_dir))
		.with_state(state)
}

async fn get_invitation(State(state): State<Arc<AppState>>) -> Result<Html<String>, (StatusCode, String)> {
	let year = chrono::Local::now().year();

	render_page(&state.config, &state.assets, year)
		.map(Html)
		.map_err(|e| print_and_ret!("Couldn't render the invitation: {e}"))
}

async fn get_widget_inputs(State(state): State<Arc<AppState>>) -> Json<WidgetInputs> {
	Json(state.widget_inputs())
}

async fn get_asset(
	State(state): State<Arc<AppState>>,
	Path(name): Path<String>
) -> Result<impl IntoResponse, StatusCode> {
	let Some(asset) = state.assets.get(&name) else {
		tracing::debug!("Asked for asset {name:?}, which wasn't discovered at startup");
		return Err(StatusCode::NOT_FOUND);
	};

	let data = tokio::fs::read(&asset.path)
		.await
		.map_err(|e| {
			tracing::error!("Can't read asset at {:?}: {e}", asset.path);
			match e.kind() {
				// it was there at startup but someone's moved it since
				std::io::ErrorKind::NotFound => StatusCode::NOT_FOUND,
				_ => StatusCode::INTERNAL_SERVER_ERROR
			}
		})?;

	Ok(([(header::CONTENT_TYPE, asset.mime())], data))
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::{body::{to_bytes, Body}, http::Request};
	use tempfile::TempDir;
	use tower::ServiceExt;

	fn app() -> (Router, TempDir) {
		let dir = TempDir::new().unwrap();
		std::fs::write(dir.path().join("hero.jpg"), b"hero bytes").unwrap();
		std::fs::write(dir.path().join("gallery1.png"), b"png bytes").unwrap();
		std::fs::write(dir.path().join("gallery2.png"), b"more png bytes").unwrap();
		std::fs::write(dir.path().join("notes.txt"), b"private").unwrap();

		let state = Arc::new(AppState {
			config: InviteConfig::default(),
			assets: AssetIndex::discover(dir.path(), 8)
		});

		(router(state, &dir.path().join("pkg")), dir)
	}

	async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
		let response = app
			.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
			.await
			.unwrap();

		let status = response.status();
		let content_type = response.headers()
			.get(header::CONTENT_TYPE)
			.map(|v| v.to_str().unwrap().to_string());
		let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

		(status, content_type, body.to_vec())
	}

	#[tokio::test]
	async fn serves_the_page() {
		let (app, _dir) = app();
		let (status, content_type, body) = get(app, "/").await;

		assert_eq!(status, StatusCode::OK);
		assert!(content_type.unwrap().starts_with("text/html"));
		let body = String::from_utf8(body).unwrap();
		assert!(body.contains("url('/api/assets/hero.jpg')"));
		assert!(body.contains(r#"id="carousel-root""#));
	}

	#[tokio::test]
	async fn serves_widget_inputs() {
		let (app, _dir) = app();
		let (status, _, body) = get(app, WIDGETS_ENDPOINT).await;

		assert_eq!(status, StatusCode::OK);
		let inputs: WidgetInputs = serde_json::from_slice(&body).unwrap();
		assert_eq!(inputs.target_moment, "2026-03-22 12:00:00");
		assert_eq!(inputs.gallery, ["/api/assets/gallery1.png", "/api/assets/gallery2.png"]);
		assert_eq!(inputs.music, None);
		assert_eq!(inputs.rsvp.whatsapp_phone, "522219683400");
	}

	#[tokio::test]
	async fn serves_discovered_assets_only() {
		let (app, _dir) = app();

		let (status, content_type, body) = get(app.clone(), "/api/assets/gallery1.png").await;
		assert_eq!(status, StatusCode::OK);
		assert_eq!(content_type.as_deref(), Some("image/png"));
		assert_eq!(body, b"png bytes");

		let (status, _, _) = get(app.clone(), "/api/assets/notes.txt").await;
		assert_eq!(status, StatusCode::NOT_FOUND);

		let (status, _, _) = get(app, "/api/assets/..%2Fnotes.txt").await;
		assert_eq!(status, StatusCode::NOT_FOUND);
	}

	#[tokio::test]
	async fn gallery_urls_resolve_for_awkward_names() {
		let dir = TempDir::new().unwrap();
		for name in ["gallery #1.jpg", "gallery%41.jpg", "gallery2.jpg"] {
			std::fs::write(dir.path().join(name), name.as_bytes()).unwrap();
		}

		let assets = AssetIndex::discover(dir.path(), 8);
		let urls = assets.gallery_urls();
		assert_eq!(urls.len(), 3);

		let app = router(Arc::new(AppState { config: InviteConfig::default(), assets }), &dir.path().join("pkg"));

		for (url, name) in urls.iter().zip(["gallery #1.jpg", "gallery%41.jpg", "gallery2.jpg"]) {
			let (status, content_type, body) = get(app.clone(), url).await;
			assert_eq!(status, StatusCode::OK, "{url}");
			assert_eq!(content_type.as_deref(), Some("image/jpeg"));
			assert_eq!(body, name.as_bytes());
		}
	}
}
