use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{Error, Result};

/// Asks the chat-completions endpoint for writing suggestions on `text`.
/// Returns the assistant's reply as a trimmed string.
pub async fn suggest(
	cfg: &jot_config::SuggestionProviderConfig,
	api_key: &str,
	text: &str,
) -> Result<String> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"messages": [
			{ "role": "system", "content": cfg.instructions },
			{ "role": "user", "content": user_prompt(text) },
		],
		"max_tokens": cfg.max_tokens,
		"temperature": cfg.temperature,
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let status = res.status();

	if status == StatusCode::UNAUTHORIZED {
		return Err(Error::Unauthorized);
	}
	if !status.is_success() {
		return Err(Error::Status { status: status.as_u16() });
	}

	let json: Value = res.json().await?;

	parse_suggestion(json)
}

fn user_prompt(text: &str) -> String {
	format!("Please review this text and provide suggestions for improvement:\n\n{text}")
}

fn parse_suggestion(json: Value) -> Result<String> {
	let Some(content) = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
	else {
		return Err(Error::InvalidResponse {
			message: "Suggestion response is missing message content.".to_string(),
		});
	};
	let trimmed = content.trim();

	if trimmed.is_empty() {
		return Err(Error::InvalidResponse {
			message: "Suggestion response content is empty.".to_string(),
		});
	}

	Ok(trimmed.to_string())
}
