use serde::{Deserialize, Serialize};

use jot_storage::kv;

use crate::{Error, JotService, Result, SUGGESTION_CREDENTIAL_KEY, WEATHER_CREDENTIAL_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
	Suggestion,
	Weather,
}
impl CredentialKind {
	pub fn storage_key(self) -> &'static str {
		match self {
			Self::Suggestion => SUGGESTION_CREDENTIAL_KEY,
			Self::Weather => WEATHER_CREDENTIAL_KEY,
		}
	}
}

impl JotService {
	/// Stores a user-supplied API key. Keys live in the same store as the
	/// collections, as plain text, with their own lifecycle.
	pub async fn store_credential(&self, kind: CredentialKind, secret: &str) -> Result<()> {
		let secret = secret.trim();

		if secret.is_empty() {
			return Err(Error::InvalidRequest { message: "API key must be non-empty.".to_string() });
		}

		kv::set(&self.db, kind.storage_key(), secret).await?;

		tracing::info!(?kind, "Stored an API credential.");

		Ok(())
	}

	pub async fn credential(&self, kind: CredentialKind) -> Result<Option<String>> {
		Ok(kv::get(&self.db, kind.storage_key()).await?)
	}

	pub async fn clear_credential(&self, kind: CredentialKind) -> Result<()> {
		kv::remove(&self.db, kind.storage_key()).await?;

		Ok(())
	}
}
