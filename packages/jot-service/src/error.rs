pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("No API key is stored for the {provider} provider.")]
	MissingCredential { provider: &'static str },
	#[error(transparent)]
	Collaborator(#[from] jot_providers::Error),
	#[error("Storage error: {message}")]
	Storage { message: String },
}

impl From<jot_storage::Error> for Error {
	fn from(err: jot_storage::Error) -> Self {
		match err {
			jot_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			jot_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
		}
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::Storage { message: format!("Failed to encode the collection: {err}.") }
	}
}
