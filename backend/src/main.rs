use std::{net::SocketAddr, sync::Arc};

use invite_backend::{
	assets::AssetIndex,
	routes::{router, AppState},
	settings::{load_invite_config, log_filter, Settings},
};
use invite_shared::TargetMoment;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// before the subscriber, so a RUST_LOG in .env is honored
	let dotenv_result = dotenv::dotenv();

	tracing_subscriber::fmt()
		.with_env_filter(log_filter())
		.init();

	if let Err(e) = dotenv_result {
		tracing::info!("Not reading a .env file: {e}");
	}

	let settings = Settings::from_env();

	let config = load_invite_config(settings.config_path.as_deref())
		.inspect_err(|e| tracing::error!("Can't start without a usable invitation config: {e}"))?;

	// A bad date only breaks the countdown, not the rest of the page, so we'll still serve it
	match TargetMoment::parse(&config.event.date_time) {
		Ok(moment) => tracing::info!("Counting down to {moment} (viewer's local time)"),
		Err(e) => tracing::warn!("The countdown will show placeholders: {e}"),
	}

	let max_gallery = settings.gallery_max.unwrap_or(config.gallery.max_items);
	let assets = AssetIndex::discover(&settings.assets_dir, max_gallery);

	if assets.hero.is_none() {
		tracing::warn!(
			"No hero image in {:?}; add one of hero.jpg | hero.jpeg | hero.png | hero.webp",
			settings.assets_dir
		);
	}
	tracing::info!(
		"Found {} gallery image(s) and {} in {:?}",
		assets.gallery.len(),
		if assets.music.is_some() { "a song" } else { "no song" },
		settings.assets_dir
	);

	if !settings.frontend_dir.is_dir() {
		tracing::warn!(
			"FRONTEND_DIR {:?} doesn't exist; the page will render but none of the widgets will mount. \
			Build it with `wasm-pack build frontend --target web`.",
			settings.frontend_dir
		);
	}

	let state = Arc::new(AppState { config, assets });
	let app = router(state, &settings.frontend_dir);

	let addr = SocketAddr::from((settings.bind_addr, settings.port));
	let listener = tokio::net::TcpListener::bind(addr).await?;

	tracing::info!("Serving the invitation at http://{addr}");

	axum::serve(listener, app).await?;

	Ok(())
}
