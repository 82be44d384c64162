use std::{
	fmt,
	net::{IpAddr, Ipv4Addr},
	path::{Path, PathBuf}
};
use invite_shared::{ConfigError, InviteConfig};
use tracing_subscriber::EnvFilter;

macro_rules! dotenv_num{
	($key:expr, $default:expr, $type:ident) => {
		dotenv::var($key).ok()
			.and_then(|v| v.parse::<$type>().ok())
			.unwrap_or($default)
	}
}

/// Process-level settings, read from the environment (or `.env`). The invitation's content lives
/// in [`InviteConfig`] instead.
#[derive(Debug, Clone)]
pub struct Settings {
	pub bind_addr: IpAddr,
	pub port: u16,
	pub assets_dir: PathBuf,
	pub frontend_dir: PathBuf,
	pub config_path: Option<PathBuf>,
	pub gallery_max: Option<usize>
}

impl Settings {
	#[must_use]
	pub fn from_env() -> Self {
		let path_var = |key: &str| dotenv::var(key).ok().filter(|v| !v.is_empty()).map(PathBuf::from);

		Self {
			bind_addr: dotenv_num!("BIND_ADDR", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr),
			port: dotenv_num!("BACKEND_PORT", 8080, u16),
			assets_dir: path_var("ASSETS_DIR").unwrap_or_else(|| "assets".into()),
			frontend_dir: path_var("FRONTEND_DIR").unwrap_or_else(|| "frontend/pkg".into()),
			config_path: path_var("INVITE_CONFIG"),
			gallery_max: dotenv::var("GALLERY_MAX").ok().and_then(|v| v.parse().ok())
		}
	}
}

/// `RUST_LOG`, read through `dotenv` so that a value in `.env` counts too. Anything missing or
/// unparsable means `info`.
#[must_use]
pub fn log_filter() -> EnvFilter {
	filter_from_var("RUST_LOG")
}

fn filter_from_var(key: &str) -> EnvFilter {
	dotenv::var(key).ok()
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new("info"))
}

#[derive(Debug)]
pub enum LoadError {
	Io(PathBuf, std::io::Error),
	Toml(toml::de::Error),
	Invalid(ConfigError)
}

impl fmt::Display for LoadError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Io(path, e) => write!(f, "couldn't read config at {path:?}: {e}"),
			Self::Toml(e) => write!(f, "config isn't valid: {e}"),
			Self::Invalid(e) => write!(f, "config isn't usable: {e}")
		}
	}
}

impl std::error::Error for LoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(_, e) => Some(e),
			Self::Toml(e) => Some(e),
			Self::Invalid(e) => Some(e)
		}
	}
}

pub fn parse_invite_config(contents: &str) -> Result<InviteConfig, LoadError> {
	let config: InviteConfig = toml::from_str(contents).map_err(LoadError::Toml)?;
	config.validate().map_err(LoadError::Invalid)?;
	Ok(config)
}

/// With no path, this is just the (validated) defaults
pub fn load_invite_config(path: Option<&Path>) -> Result<InviteConfig, LoadError> {
	let Some(path) = path else {
		tracing::info!("INVITE_CONFIG isn't set, using the built-in invitation content");
		return parse_invite_config("");
	};

	let contents = std::fs::read_to_string(path)
		.map_err(|e| LoadError::Io(path.to_path_buf(), e))?;

	tracing::info!("Read invitation content from {path:?}");
	parse_invite_config(&contents)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn log_filter_comes_from_env_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join(".env");
		std::fs::write(&path, "INVITE_TEST_LOG_FILTER=invite_backend=debug\n").unwrap();
		dotenv::from_path(&path).unwrap();

		assert_eq!(filter_from_var("INVITE_TEST_LOG_FILTER").to_string(), "invite_backend=debug");
		assert_eq!(filter_from_var("INVITE_TEST_LOG_FILTER_UNSET").to_string(), "info");
	}

	#[test]
	fn empty_file_is_the_defaults() {
		assert_eq!(parse_invite_config("").unwrap(), InviteConfig::default());
		assert_eq!(load_invite_config(None).unwrap(), InviteConfig::default());
	}

	#[test]
	fn sections_override_independently() {
		let config = parse_invite_config(r#"
			[couple]
			first = "Ana"
			second = "Luis"

			[event]
			date_time = "2027-01-09 17:30:00"

			[families]
			sponsors = ["Rosa", "Pedro"]
		"#).unwrap();

		assert_eq!(config.couple.to_string(), "Ana & Luis");
		assert_eq!(config.event.date_time, "2027-01-09 17:30:00");
		// untouched fields in a touched section keep their defaults too
		assert_eq!(config.event.hero_subtitle, "NO FALTES A NUESTRA BODA");
		assert_eq!(config.families.sponsors, ["Rosa", "Pedro"]);
		assert_eq!(config.venue, InviteConfig::default().venue);
	}

	#[test]
	fn bad_phone_fails_to_load() {
		let err = parse_invite_config("[rsvp]\nwhatsapp_phone = \"+52 1\"").unwrap_err();
		assert!(matches!(err, LoadError::Invalid(ConfigError::InvalidPhone(_))), "{err}");
	}

	#[test]
	fn malformed_toml_fails_to_load() {
		let err = parse_invite_config("[couple\nfirst = ").unwrap_err();
		assert!(matches!(err, LoadError::Toml(_)), "{err}");
	}

	#[test]
	fn reads_from_disk() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("invite.toml");
		std::fs::write(&path, "[dress_code]\ncode = \"Etiqueta\"\n").unwrap();

		let config = load_invite_config(Some(&path)).unwrap();
		assert_eq!(config.dress_code.code, "Etiqueta");

		let missing = load_invite_config(Some(&dir.path().join("nope.toml"))).unwrap_err();
		assert!(matches!(missing, LoadError::Io(..)), "{missing}");
	}
}
