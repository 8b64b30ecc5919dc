//! Data Transfer Objects - request/response types for the API.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// Maximum post length, in characters.
pub const MAX_CONTENT_LENGTH: u64 = 1000;

/// Request to create a new draft.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(
        required(message = "content is required"),
        length(max = MAX_CONTENT_LENGTH, message = "content must be at most 1000 characters")
    )]
    pub content: Option<String>,
}

impl CreatePostRequest {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
        }
    }

    /// Validate the request and hand back the content.
    ///
    /// Whitespace-only content is rejected alongside the derived checks.
    pub fn into_content(self) -> Result<String, ValidationErrors> {
        self.validate()?;

        match self.content {
            Some(content) if !content.trim().is_empty() => Ok(content),
            _ => {
                let mut error = ValidationError::new("blank");
                error.message = Some(Cow::Borrowed("content must not be blank"));

                let mut errors = ValidationErrors::new();
                errors.add("content", error);
                Err(errors)
            }
        }
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: Option<u64>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub draft: bool,
}

/// Query string for searching published posts. Timestamps are RFC 3339.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPostsQuery {
    pub keyword: Option<String>,
    pub published_after: Option<DateTime<Utc>>,
    pub published_before: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_content() {
        let req = CreatePostRequest::new("Test content");
        assert_eq!(req.into_content().unwrap(), "Test content");
    }

    #[test]
    fn test_missing_content() {
        let req: CreatePostRequest = serde_json::from_str("{}").unwrap();
        let errors = req.into_content().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_blank_content() {
        for content in ["", "   ", "\n\t"] {
            let errors = CreatePostRequest::new(content).into_content().unwrap_err();
            assert!(errors.field_errors().contains_key("content"));
        }
    }

    #[test]
    fn test_content_length_limit() {
        let at_limit = "a".repeat(MAX_CONTENT_LENGTH as usize);
        assert!(CreatePostRequest::new(at_limit).into_content().is_ok());

        let too_long = "a".repeat(MAX_CONTENT_LENGTH as usize + 1);
        let errors = CreatePostRequest::new(too_long).into_content().unwrap_err();
        assert!(errors.field_errors().contains_key("content"));
    }

    #[test]
    fn test_length_counts_characters() {
        let multibyte = "あ".repeat(MAX_CONTENT_LENGTH as usize);
        assert!(CreatePostRequest::new(multibyte).into_content().is_ok());
    }

    #[test]
    fn test_post_response_field_names() {
        let response = PostResponse {
            id: Some(1),
            content: Some("Test content".to_string()),
            created_at: Utc::now(),
            updated_at: None,
            published_at: None,
            draft: true,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["draft"], true);
        assert!(json["publishedAt"].is_null());
        assert!(json["updatedAt"].is_null());
        assert!(json["createdAt"].is_string());
    }
}
