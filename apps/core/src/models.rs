use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::AppError;
use crate::qa::Answer;

/// A question submitted from the Q&A form.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct QuerySubmission {
    /// The raw query text, passed to the responder untrimmed.
    #[validate(length(min = 1))]
    pub query: String,
}

impl QuerySubmission {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Rejects blank submissions and queries longer than `max_len` characters.
    pub fn check(&self, max_len: usize) -> Result<(), AppError> {
        self.validate()?;
        if self.query.trim().is_empty() {
            return Err(AppError::Validation("Query cannot be empty".to_string()));
        }
        let len = self.query.chars().count();
        if len > max_len {
            return Err(AppError::Validation(format!(
                "Query is too long ({} characters, maximum {})",
                len, max_len
            )));
        }
        Ok(())
    }
}

/// One answered question. Lives only as long as the caller keeps it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryRecord {
    pub id: Uuid,
    pub query: String,
    pub answer: Answer,
    pub submitted_at: DateTime<Utc>,
    pub answered_at: DateTime<Utc>,
}
