mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Providers, Sqlite, Storage, SuggestionProviderConfig, WeatherProviderConfig};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.storage.sqlite.path.trim().is_empty() {
		return Err(Error::Validation {
			message: "storage.sqlite.path must be non-empty.".to_string(),
		});
	}
	if cfg.storage.sqlite.pool_max_conns == 0 {
		return Err(Error::Validation {
			message: "storage.sqlite.pool_max_conns must be greater than zero.".to_string(),
		});
	}

	for (label, base, path, timeout_ms) in [
		(
			"suggestion",
			&cfg.providers.suggestion.api_base,
			&cfg.providers.suggestion.path,
			cfg.providers.suggestion.timeout_ms,
		),
		(
			"weather",
			&cfg.providers.weather.api_base,
			&cfg.providers.weather.path,
			cfg.providers.weather.timeout_ms,
		),
	] {
		if base.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("providers.{label}.api_base must be non-empty."),
			});
		}
		if !path.starts_with('/') {
			return Err(Error::Validation {
				message: format!("providers.{label}.path must start with a slash."),
			});
		}
		if timeout_ms == 0 {
			return Err(Error::Validation {
				message: format!("providers.{label}.timeout_ms must be greater than zero."),
			});
		}
	}

	if cfg.providers.suggestion.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.suggestion.model must be non-empty.".to_string(),
		});
	}
	if cfg.providers.suggestion.instructions.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.suggestion.instructions must be non-empty.".to_string(),
		});
	}
	if cfg.providers.suggestion.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.suggestion.max_tokens must be greater than zero.".to_string(),
		});
	}
	if !cfg.providers.suggestion.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.suggestion.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&cfg.providers.suggestion.temperature) {
		return Err(Error::Validation {
			message: "providers.suggestion.temperature must be in the range 0.0-2.0.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	// Bases and paths are concatenated verbatim by the providers.
	strip_trailing_slash(&mut cfg.providers.suggestion.api_base);
	strip_trailing_slash(&mut cfg.providers.weather.api_base);
}

fn strip_trailing_slash(base: &mut String) {
	while base.ends_with('/') {
		base.pop();
	}
}
