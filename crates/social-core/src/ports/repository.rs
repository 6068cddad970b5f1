use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post repository.
///
/// Every read and write is scoped to the `removed` state the operation
/// expects: active rows for everything except [`find_removed`] and the
/// restore direction of [`set_removed`], which target soft-deleted rows.
/// A scoped write that matches no row is a silent no-op; existence is the
/// caller's concern, established by the preceding read.
///
/// [`find_removed`]: PostRepository::find_removed
/// [`set_removed`]: PostRepository::set_removed
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All active posts, newest id first.
    async fn list_active(&self) -> Result<Vec<Post>, RepoError>;

    /// A single active post by id.
    async fn find_active(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// A single soft-deleted post by id.
    async fn find_removed(&self, id: i64) -> Result<Option<Post>, RepoError>;

    /// Insert a post with the given content; every other column takes its
    /// store default. Returns the auto-increment id.
    async fn create(&self, content: &str) -> Result<i64, RepoError>;

    /// Replace the content of an active post.
    async fn update_content(&self, id: i64, content: &str) -> Result<(), RepoError>;

    /// Flip the soft-delete flag on a post currently in the opposite state.
    async fn set_removed(&self, id: i64, removed: bool) -> Result<(), RepoError>;

    /// Write an absolute likes counter on an active post.
    async fn set_likes(&self, id: i64, likes: i32) -> Result<(), RepoError>;
}
