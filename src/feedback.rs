//! # Feedback Records
//!
//! Shape and validation of a single feedback submission.
//!
//! A record is built from the decoded request payload by [`FeedbackRecord::from_payload`],
//! which either produces a complete record or a field-level [`ValidationError`].
//! Validation never touches the store, so it can be tested on its own.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Whether the reader liked or disliked the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Like => "like",
            FeedbackKind::Dislike => "dislike",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,

    #[error("page is required and must be a non-empty string")]
    InvalidPage,

    #[error("type must be 'like' or 'dislike'")]
    InvalidKind,

    #[error("options must be an array of strings")]
    InvalidOptions,

    #[error("comment must be a string")]
    InvalidComment,
}

/// A validated feedback submission, ready for the store.
///
/// The identifier is assigned by the store on insert and never lives here.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub page: String,
    pub kind: FeedbackKind,
    pub options: Vec<String>,
    pub comment: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl FeedbackRecord {
    /// Validates a decoded payload into a record.
    ///
    /// Checks run in a fixed order so the caller always gets the first
    /// offending field. Unknown fields are ignored. A `timestamp` is taken
    /// from the payload when it is a parseable RFC 3339 string, otherwise
    /// the record is stamped with the current time.
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationError> {
        let map = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let page = match map.get("page") {
            Some(Value::String(page)) if !page.is_empty() => page.clone(),
            _ => return Err(ValidationError::InvalidPage),
        };

        let kind = match map.get("type").and_then(Value::as_str) {
            Some("like") => FeedbackKind::Like,
            Some("dislike") => FeedbackKind::Dislike,
            _ => return Err(ValidationError::InvalidKind),
        };

        let options = match map.get("options") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(values)) => values
                .iter()
                .map(|value| {
                    value
                        .as_str()
                        .map(str::to_owned)
                        .ok_or(ValidationError::InvalidOptions)
                })
                .collect::<Result<_, _>>()?,
            Some(_) => return Err(ValidationError::InvalidOptions),
        };

        let comment = match map.get("comment") {
            None | Some(Value::Null) => None,
            Some(Value::String(comment)) => Some(comment.clone()),
            Some(_) => return Err(ValidationError::InvalidComment),
        };

        let timestamp = map
            .get("timestamp")
            .and_then(Value::as_str)
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|parsed| parsed.with_timezone(&Utc))
            .unwrap_or_else(Utc::now);

        Ok(Self {
            page,
            kind,
            options,
            comment,
            timestamp,
        })
    }
}
