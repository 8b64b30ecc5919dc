use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};

/// Store-assigned post identifier.
pub type PostId = u64;

/// Post entity - a short text post that is either a draft or published.
///
/// Transitions consume the post and return the updated value, so the
/// canonical copy held by a store is only ever replaced, never mutated
/// through a shared reference.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Option<PostId>,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
    pub is_draft: bool,
}

impl Post {
    /// Create a new, unsaved draft.
    pub fn create_draft(content: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            updated_at: content.as_ref().map(|_| now),
            content,
            created_at: now,
            published_at: None,
            is_draft: true,
        }
    }

    pub fn with_id(mut self, id: PostId) -> Self {
        self.id = Some(id);
        self
    }

    /// Replace the content and bump `updated_at`. Draft state is untouched.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self.updated_at = Some(Utc::now());
        self
    }

    /// Move the post to the published state.
    ///
    /// `published_at` is stamped only on the first publish; later publishes
    /// after an unpublish keep the original timestamp.
    pub fn publish(mut self) -> Self {
        self.is_draft = false;
        if self.published_at.is_none() {
            self.published_at = Some(Utc::now());
        }
        self
    }

    /// Move the post back to draft. `published_at` is kept.
    pub fn unpublish(mut self) -> Self {
        self.is_draft = true;
        self
    }

    pub fn with_draft(self, draft: bool) -> Self {
        if draft { self.unpublish() } else { self.publish() }
    }

    pub fn is_published(&self) -> bool {
        !self.is_draft
    }

    /// Check whether a published post satisfies the given criteria.
    ///
    /// Drafts and posts that were never published never match.
    pub fn matches_search_criteria(&self, criteria: &SearchCriteria) -> bool {
        let published_at = match self.published_at {
            Some(at) if !self.is_draft => at,
            _ => return false,
        };

        if let Some(keyword) = criteria.keyword.as_deref().filter(|k| !k.is_empty()) {
            let Some(content) = self.content.as_deref() else {
                return false;
            };
            if !content.to_lowercase().contains(&keyword.to_lowercase()) {
                return false;
            }
        }

        if criteria.published_after.is_some_and(|after| published_at < after) {
            return false;
        }

        if criteria
            .published_before
            .is_some_and(|before| published_at > before)
        {
            return false;
        }

        true
    }
}

// Identity is the store-assigned id; unsaved posts are only equal to each other.
impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Filter applied to published posts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring of the content. Empty means "any".
    pub keyword: Option<String>,
    /// Inclusive lower bound on `published_at`.
    pub published_after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `published_at`.
    pub published_before: Option<DateTime<Utc>>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn published_after(mut self, after: DateTime<Utc>) -> Self {
        self.published_after = Some(after);
        self
    }

    pub fn published_before(mut self, before: DateTime<Utc>) -> Self {
        self.published_before = Some(before);
        self
    }
}
