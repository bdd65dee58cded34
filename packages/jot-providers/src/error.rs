pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
	#[error("{message}")]
	InvalidResponse { message: String },
	#[error("The provider rejected the API key.")]
	Unauthorized,
	#[error("City {city:?} was not found. Check the spelling and try again.")]
	CityNotFound { city: String },
	#[error("The provider responded with HTTP status {status}.")]
	Status { status: u16 },
}
