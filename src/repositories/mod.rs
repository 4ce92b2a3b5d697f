pub mod stage;

pub use stage::StageRepository;

use async_trait::async_trait;

use crate::error::AppResult;

/// Base repository trait for common CRUD operations
#[async_trait]
pub trait Repository<T>
where
    T: Send + Sync,
{
    /// Find entity by ID; a missing row is `None`, not an error
    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>>;

    /// Delete entity by ID, returning the number of rows removed
    async fn delete(&self, id: i64) -> AppResult<u64>;

    /// List all entities
    async fn list(&self) -> AppResult<Vec<T>>;
}
