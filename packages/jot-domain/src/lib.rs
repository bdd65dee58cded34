pub mod filter;
pub mod model;
pub mod sentiment;
pub mod time_serde;

pub use model::{Annotation, Item, Payload, Sentiment, SentimentCategory};
