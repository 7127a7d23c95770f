//! Persistence port for series.
//!
//! The service layer depends only on [`SeriesStore`], never on a concrete database. The
//! production implementation is [`SeriesRepository`](super::series::SeriesRepository);
//! tests substitute an in-memory store.

use async_trait::async_trait;

use crate::server::{
    error::storage::StorageError,
    model::series::{Series, SeriesDraft},
};

/// Numeric series columns that may only change through [`SeriesStore::atomic_adjust`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterField {
    LastEpisodeWatched,
    Ranking,
}

/// Storage operations required by the series service.
///
/// Every method is a single round trip to the backend. Methods reporting
/// `rows_affected` return `0` when no row with the given ID exists.
#[async_trait]
pub trait SeriesStore: Send + Sync {
    /// Returns every stored series, ordered by ID.
    async fn list_all(&self) -> Result<Vec<Series>, StorageError>;

    /// Returns the series with the given ID, or `None` if it does not exist.
    async fn find_by_id(&self, id: i32) -> Result<Option<Series>, StorageError>;

    /// Stores a new series and returns it with its assigned ID.
    async fn insert(&self, draft: SeriesDraft) -> Result<Series, StorageError>;

    /// Overwrites every mutable field of an existing series.
    ///
    /// Returns `None` if the series does not exist.
    async fn replace(&self, id: i32, draft: SeriesDraft) -> Result<Option<Series>, StorageError>;

    /// Writes only the status column.
    async fn set_status(&self, id: i32, status: String) -> Result<u64, StorageError>;

    /// Deletes a series permanently.
    async fn delete_by_id(&self, id: i32) -> Result<u64, StorageError>;

    /// Adds `delta` to a counter as one indivisible backend operation.
    ///
    /// Concurrent adjustments of the same counter are each applied exactly once.
    /// A positive adjustment of `LastEpisodeWatched` only applies while the counter
    /// is below a positive `total_episodes`, so racing increments cannot overshoot
    /// the cap; in that case `0` rows are reported. The same applies when the result
    /// would not fit in an `i32`.
    async fn atomic_adjust(
        &self,
        id: i32,
        field: CounterField,
        delta: i32,
    ) -> Result<u64, StorageError>;
}
