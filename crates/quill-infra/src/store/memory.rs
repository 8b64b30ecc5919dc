//! In-memory post store backed by a sharded concurrent map.

use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use quill_core::domain::{Post, PostId, SearchCriteria};
use quill_core::ports::PostStore;

/// In-memory post store.
///
/// Posts live in a `DashMap`, so writers to different shards never contend.
/// Ids come from an atomic counter starting at 1 and are never reused.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: DashMap<PostId, Post>,
    next_id: AtomicU64,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    fn collect_sorted(&self, filter: impl Fn(&Post) -> bool) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|entry| filter(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        posts.sort_by_key(|post| post.id);
        posts
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PostStore for InMemoryPostStore {
    fn create_draft(&self, content: String) -> Post {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let post = Post::create_draft(Some(content)).with_id(id);
        self.posts.insert(id, post.clone());

        tracing::debug!(post_id = id, "Draft created");
        post
    }

    fn publish_post(&self, id: PostId) -> Option<Post> {
        // The entry guard is held across the check and the replacement, so
        // concurrent publishes of the same id see exactly one transition.
        let mut entry = self.posts.get_mut(&id)?;
        if entry.is_published() {
            tracing::debug!(post_id = id, "Post already published");
            return None;
        }

        let published = entry.value().clone().publish();
        *entry = published.clone();

        tracing::debug!(post_id = id, "Post published");
        Some(published)
    }

    fn delete_post(&self, id: PostId) -> bool {
        let removed = self.posts.remove(&id).is_some();
        if removed {
            tracing::debug!(post_id = id, "Post deleted");
        }
        removed
    }

    fn get_post(&self, id: PostId) -> Option<Post> {
        self.posts.get(&id).map(|entry| entry.value().clone())
    }

    fn list_published(&self) -> Vec<Post> {
        self.collect_sorted(Post::is_published)
    }

    fn list_drafts(&self) -> Vec<Post> {
        self.collect_sorted(|post| post.is_draft)
    }

    fn search_published(&self, criteria: &SearchCriteria) -> Vec<Post> {
        self.collect_sorted(|post| post.matches_search_criteria(criteria))
    }

    fn count(&self) -> usize {
        self.posts.len()
    }
}
