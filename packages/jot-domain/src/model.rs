use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// One user-created record: a task or a note. Items are serialized whole into
/// the collection value; optional fields stay absent rather than null.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
	pub item_id: Uuid,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	pub payload: Payload,
	/// Completion flag for tasks; notes never carry one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub completed: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub annotation: Option<Annotation>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Payload {
	Task { label: String },
	Note { title: String, body: String },
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub sentiment: Option<Sentiment>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub suggestion: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
	pub category: SentimentCategory,
	pub confidence: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentCategory {
	Positive,
	Negative,
	Neutral,
}

impl Item {
	pub fn is_completed(&self) -> bool {
		self.completed == Some(true)
	}
}

impl Payload {
	/// The text the annotation pipeline runs on.
	pub fn text(&self) -> &str {
		match self {
			Self::Task { label } => label,
			Self::Note { body, .. } => body,
		}
	}

	pub fn is_blank(&self) -> bool {
		match self {
			Self::Task { label } => label.trim().is_empty(),
			Self::Note { title, body } => title.trim().is_empty() || body.trim().is_empty(),
		}
	}
}
