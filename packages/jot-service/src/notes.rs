use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jot_domain::{Annotation, Item, Payload, sentiment};

use crate::{CredentialKind, Error, JotService, Result};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveNoteRequest {
	/// Absent for a new note; present to edit an existing one in place.
	pub note_id: Option<Uuid>,
	pub title: String,
	pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveNoteResponse {
	pub note: Item,
	/// Human-readable reason when the suggestion call failed. The note itself
	/// is already persisted by the time this is set.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub suggestion_failure: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SuggestionOutcome {
	Attached { note: Item },
	/// The note disappeared while the provider call was in flight; the result
	/// was discarded.
	Discarded,
	Failed { reason: String },
}

impl JotService {
	/// Creates or edits a note. Sentiment is classified locally and persisted
	/// with the commit; the writing suggestion is fetched afterwards and
	/// attached best-effort, so a provider failure never loses the note.
	/// Without a stored suggestion key the note pad runs offline: no call is
	/// made and no failure is reported.
	pub async fn save_note(&self, req: SaveNoteRequest) -> Result<SaveNoteResponse> {
		let title = req.title.trim();
		let body = req.body.trim();

		if title.is_empty() || body.is_empty() {
			return Err(Error::InvalidRequest {
				message: "Both title and body are required.".to_string(),
			});
		}

		let payload = Payload::Note { title: title.to_string(), body: body.to_string() };
		let annotation = Annotation { sentiment: Some(sentiment::classify(body)), suggestion: None };
		let note = match req.note_id {
			None => self.notes.create(&self.db, payload, None, Some(annotation)).await?,
			Some(note_id) =>
				self.notes
					.update(&self.db, note_id, move |item| {
						item.payload = payload;
						item.annotation = Some(annotation);
					})
					.await?,
		};

		tracing::info!(item_id = %note.item_id, "Saved a note.");

		if self.credential(CredentialKind::Suggestion).await?.is_none() {
			return Ok(SaveNoteResponse { note, suggestion_failure: None });
		}

		match self.refresh_suggestion(note.item_id).await? {
			SuggestionOutcome::Attached { note } =>
				Ok(SaveNoteResponse { note, suggestion_failure: None }),
			SuggestionOutcome::Discarded => Ok(SaveNoteResponse { note, suggestion_failure: None }),
			SuggestionOutcome::Failed { reason } =>
				Ok(SaveNoteResponse { note, suggestion_failure: Some(reason) }),
		}
	}

	/// Fetches a writing suggestion for the note's body and attaches it if the
	/// note still exists once the call resolves. The repository lock is not
	/// held across the provider call, so deletes are free to race it; a result
	/// for a deleted note is discarded.
	pub async fn refresh_suggestion(&self, note_id: Uuid) -> Result<SuggestionOutcome> {
		let Some(api_key) = self.credential(CredentialKind::Suggestion).await? else {
			return Err(Error::MissingCredential { provider: "suggestion" });
		};
		let Some(note) = self.notes.find(note_id).await else {
			return Err(Error::NotFound { message: format!("Note {note_id} does not exist.") });
		};
		let text = note.payload.text().to_string();
		let suggestion = self
			.providers
			.suggestion
			.suggest(&self.cfg.providers.suggestion, &api_key, &text)
			.await;

		match suggestion {
			Ok(suggestion) => {
				let attach = self
					.notes
					.update(&self.db, note_id, move |item| {
						item.annotation.get_or_insert_with(Annotation::default).suggestion =
							Some(suggestion);
					})
					.await;

				match attach {
					Ok(note) => Ok(SuggestionOutcome::Attached { note }),
					Err(Error::NotFound { .. }) => {
						tracing::warn!(
							%note_id,
							"Note was deleted while its suggestion was in flight; discarding the result."
						);

						Ok(SuggestionOutcome::Discarded)
					},
					Err(err) => Err(err),
				}
			},
			Err(err) => {
				tracing::warn!(%note_id, error = %err, "Suggestion call failed; keeping the note without one.");

				Ok(SuggestionOutcome::Failed { reason: err.to_string() })
			},
		}
	}

	pub async fn delete_note(&self, item_id: Uuid) -> Result<()> {
		if !self.notes.delete(&self.db, item_id).await? {
			tracing::info!(%item_id, "Delete targeted an absent note; nothing to do.");
		}

		Ok(())
	}

	pub async fn list_notes(&self) -> Result<Vec<Item>> {
		Ok(self.notes.list().await)
	}
}
