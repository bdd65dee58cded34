use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub storage: Storage,
	pub providers: Providers,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub sqlite: Sqlite,
}

#[derive(Debug, Deserialize)]
pub struct Sqlite {
	pub path: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub suggestion: SuggestionProviderConfig,
	pub weather: WeatherProviderConfig,
}

/// Chat-completions style endpoint that reviews note text. The API key is not
/// part of the config; it is user-supplied and kept in the credential store.
#[derive(Debug, Deserialize)]
pub struct SuggestionProviderConfig {
	pub api_base: String,
	pub path: String,
	pub model: String,
	/// System prompt sent ahead of the user's text.
	pub instructions: String,
	pub max_tokens: u32,
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct WeatherProviderConfig {
	pub api_base: String,
	pub path: String,
	pub timeout_ms: u64,
}
