//! # MongoDB
//!
//! Document store for feedback submissions.
//!
//! ## Requirements
//!
//! - One insert per submission, write-once
//! - No updates, deletes, or reads on the hot path
//! - The store assigns the identifier
//!
//! ## Implementation
//!
//! - One `feedbacks` collection of [`FeedbackDocument`]
//! - Database taken from the connection URL, `feedback` if the URL names none
//! - Driver owns pooling; each insert is atomic from the handler's view
use async_trait::async_trait;
use mongodb::{
    Client, Collection,
    bson::{DateTime, oid::ObjectId},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::feedback::{FeedbackKind, FeedbackRecord};

pub const FEEDBACK_COLLECTION: &str = "feedbacks";
pub const DEFAULT_DATABASE: &str = "feedback";

pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// The storage seam. Handlers only see this trait, so tests can swap in an
/// in-memory double and the driver never leaks upward.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Persists the record and returns the assigned identifier.
    async fn insert(&self, record: &FeedbackRecord) -> Result<String, StoreError>;
}

/// BSON shape of a stored record. `_id` is absent on the way in so the
/// server assigns it.
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub page: String,
    #[serde(rename = "type")]
    pub kind: FeedbackKind,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub timestamp: DateTime,
}

impl From<&FeedbackRecord> for FeedbackDocument {
    fn from(record: &FeedbackRecord) -> Self {
        Self {
            id: None,
            page: record.page.clone(),
            kind: record.kind,
            options: record.options.clone(),
            comment: record.comment.clone(),
            timestamp: DateTime::from_millis(record.timestamp.timestamp_millis()),
        }
    }
}

pub struct MongoFeedbackStore {
    collection: Collection<FeedbackDocument>,
}

impl MongoFeedbackStore {
    pub async fn connect(mongo_url: &str) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(mongo_url).await?;

        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        info!("Connected to MongoDB database {}", database.name());

        Ok(Self {
            collection: database.collection(FEEDBACK_COLLECTION),
        })
    }
}

#[async_trait]
impl FeedbackStore for MongoFeedbackStore {
    async fn insert(&self, record: &FeedbackRecord) -> Result<String, StoreError> {
        let document = FeedbackDocument::from(record);

        let result = self.collection.insert_one(&document).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or("inserted id was not an ObjectId")?;

        Ok(id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use mongodb::bson::{Bson, to_document};

    fn record() -> FeedbackRecord {
        FeedbackRecord {
            page: "/docs/intro".to_string(),
            kind: FeedbackKind::Like,
            options: vec!["too vague".to_string()],
            comment: None,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
        }
    }

    #[test]
    fn test_document_omits_unassigned_id() {
        let document = to_document(&FeedbackDocument::from(&record())).unwrap();

        assert!(!document.contains_key("_id"));
    }

    #[test]
    fn test_document_field_mapping() {
        let document = to_document(&FeedbackDocument::from(&record())).unwrap();

        assert_eq!(document.get_str("page").unwrap(), "/docs/intro");
        assert_eq!(document.get_str("type").unwrap(), "like");
        assert_eq!(
            document.get_array("options").unwrap(),
            &vec![Bson::String("too vague".to_string())]
        );
        assert!(!document.contains_key("comment"));
    }

    #[test]
    fn test_document_timestamp_is_bson_datetime() {
        let document = to_document(&FeedbackDocument::from(&record())).unwrap();

        let timestamp = document.get_datetime("timestamp").unwrap();
        assert_eq!(
            timestamp.timestamp_millis(),
            record().timestamp.timestamp_millis()
        );
    }

    #[test]
    fn test_comment_is_kept_when_present() {
        let mut with_comment = record();
        with_comment.comment = Some("needs examples".to_string());

        let document = to_document(&FeedbackDocument::from(&with_comment)).unwrap();

        assert_eq!(document.get_str("comment").unwrap(), "needs examples");
    }
}
