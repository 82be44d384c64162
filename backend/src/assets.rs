use std::{
	collections::HashSet,
	path::{Path, PathBuf}
};

/// In the order we prefer them when more than one file shares a stem
pub const IMAGE_EXTS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];
pub const MUSIC_FILE: &str = "song.mp3";
pub const GALLERY_PREFIX: &str = "gallery";

/// Prefix that every asset is served under
pub const ASSET_ROUTE: &str = "/api/assets";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Asset {
	/// The file name, which is also what it's requested by
	pub name: String,
	pub path: PathBuf
}

impl Asset {
	fn from_path(path: PathBuf) -> Option<Self> {
		let name = path.file_name()?.to_str()?.to_string();
		Some(Self { name, path })
	}

	/// The name is percent-encoded, so spaces, `#`, `%` and the like survive the trip back
	/// through the router's path extraction.
	#[must_use]
	pub fn url(&self) -> String {
		format!("{ASSET_ROUTE}/{}", urlencoding::encode(&self.name))
	}

	#[must_use]
	pub fn mime(&self) -> &'static str {
		mime_for(&self.path)
	}
}

/// Everything we found in the assets dir at startup. This never changes afterwards, so adding a
/// photo means restarting the server.
#[derive(Clone, Debug, Default)]
pub struct AssetIndex {
	pub hero: Option<Asset>,
	pub background: Option<Asset>,
	pub story_left: Option<Asset>,
	pub story_right: Option<Asset>,
	pub music: Option<Asset>,
	pub gallery: Vec<Asset>
}

impl AssetIndex {
	pub fn discover(dir: &Path, max_gallery: usize) -> Self {
		let music = dir.join(MUSIC_FILE);

		Self {
			hero: pick_asset(dir, "hero"),
			background: pick_asset(dir, "bg"),
			story_left: pick_asset(dir, "story_left"),
			story_right: pick_asset(dir, "story_right"),
			music: music.is_file().then(|| Asset::from_path(music)).flatten(),
			gallery: gallery_files(dir, max_gallery)
		}
	}

	fn all(&self) -> impl Iterator<Item = &Asset> {
		[&self.hero, &self.background, &self.story_left, &self.story_right, &self.music]
			.into_iter()
			.flatten()
			.chain(&self.gallery)
	}

	/// Only names that were discovered can be looked up, so there's no way to request anything
	/// else that happens to live next to them (or above them)
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&Asset> {
		self.all().find(|asset| asset.name == name)
	}

	#[must_use]
	pub fn gallery_urls(&self) -> Vec<String> {
		self.gallery.iter().map(Asset::url).collect()
	}
}

/// The first `{stem}.{ext}` that exists, trying extensions in [`IMAGE_EXTS`] order
#[must_use]
pub fn pick_asset(dir: &Path, stem: &str) -> Option<Asset> {
	IMAGE_EXTS.iter()
		.map(|ext| dir.join(format!("{stem}.{ext}")))
		.find(|path| path.is_file())
		.and_then(Asset::from_path)
}

/// All `gallery*.{ext}` files, grouped by extension in [`IMAGE_EXTS`] order and sorted by name
/// within each group. Files that resolve to the same thing on disk (e.g. through a symlink) only
/// show up once, at their first position.
#[must_use]
pub fn gallery_files(dir: &Path, max_items: usize) -> Vec<Asset> {
	let entries = match std::fs::read_dir(dir) {
		Ok(entries) => entries,
		Err(e) => {
			tracing::warn!("Couldn't read assets dir {dir:?} for gallery images: {e}");
			return Vec::new();
		}
	};

	let mut names = entries
		.filter_map(|entry| entry.ok())
		.filter(|entry| entry.file_type().is_ok_and(|ty| !ty.is_dir()))
		.filter_map(|entry| entry.file_name().into_string().ok())
		.filter(|name| name.starts_with(GALLERY_PREFIX))
		.collect::<Vec<_>>();
	names.sort_unstable();

	let mut seen = HashSet::new();

	IMAGE_EXTS.iter()
		.flat_map(|ext| {
			let suffix = format!(".{ext}");
			names.iter()
				.filter(move |name| name.ends_with(&suffix))
				.map(|name| dir.join(name))
				.collect::<Vec<_>>()
		})
		.filter(|path| {
			// if it can't be canonicalized it's probably a dangling symlink, which we won't be
			// able to serve anyways
			match path.canonicalize() {
				Ok(resolved) => seen.insert(resolved),
				Err(e) => {
					tracing::warn!("Skipping gallery image {path:?}: {e}");
					false
				}
			}
		})
		.filter_map(Asset::from_path)
		.take(max_items)
		.collect()
}

#[must_use]
pub fn mime_for(path: &Path) -> &'static str {
	let ext = path.extension()
		.and_then(|ext| ext.to_str())
		.map(str::to_ascii_lowercase);

	match ext.as_deref() {
		Some("jpg" | "jpeg") => "image/jpeg",
		Some("png") => "image/png",
		Some("webp") => "image/webp",
		Some("mp3") => "audio/mpeg",
		_ => "application/octet-stream"
	}
}
