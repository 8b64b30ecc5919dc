use crate::domain::{Post, PostId, SearchCriteria};

/// Post store - owns the canonical copy of every post.
///
/// Every method is synchronous and returns clones. "Not found" and
/// "already published" are reported as `None`, never as an error.
pub trait PostStore: Send + Sync {
    /// Allocate the next id and store a new draft with the given content.
    fn create_draft(&self, content: String) -> Post;

    /// Publish a draft. Returns `None` if the post does not exist or is
    /// already published.
    fn publish_post(&self, id: PostId) -> Option<Post>;

    /// Remove a post. Returns whether anything was removed.
    fn delete_post(&self, id: PostId) -> bool;

    fn get_post(&self, id: PostId) -> Option<Post>;

    /// All published posts, in ascending id order.
    fn list_published(&self) -> Vec<Post>;

    /// All drafts, in ascending id order.
    fn list_drafts(&self) -> Vec<Post>;

    /// Published posts matching the criteria, in ascending id order.
    fn search_published(&self, criteria: &SearchCriteria) -> Vec<Post>;

    /// Number of live posts.
    fn count(&self) -> usize;
}
