mod error;

pub use error::{Error, Result};

use tempfile::TempDir;

/// A throwaway SQLite database for one test. The file lives in a temporary
/// directory that is removed when the value drops, so tests that reopen the
/// database must keep this alive across connections.
pub struct TestDatabase {
	dir: TempDir,
	path: String,
}
impl TestDatabase {
	pub fn new() -> Result<Self> {
		let dir = TempDir::new()
			.map_err(|err| Error::Message(format!("Failed to create test directory: {err}.")))?;
		let path = dir
			.path()
			.join("jot_test.db")
			.to_str()
			.ok_or_else(|| Error::Message("Test directory path is not valid UTF-8.".to_string()))?
			.to_string();

		Ok(Self { dir, path })
	}

	pub fn path(&self) -> &str {
		&self.path
	}

	pub fn dir(&self) -> &std::path::Path {
		self.dir.path()
	}
}
