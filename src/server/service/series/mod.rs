//! Series business rules.
//!
//! `SeriesService` validates input, enforces existence checks and the episode cap, and
//! drives the [`SeriesStore`] port. Counter changes always go through
//! [`SeriesStore::atomic_adjust`] so concurrent requests are never lost.

#[cfg(test)]
mod test;

use crate::server::{
    data::store::{CounterField, SeriesStore},
    error::AppError,
    model::series::{is_known_status, is_valid_title, Series, SeriesDraft, StatusUpdate},
};

pub struct SeriesService<'a> {
    store: &'a dyn SeriesStore,
}

impl<'a> SeriesService<'a> {
    pub fn new(store: &'a dyn SeriesStore) -> Self {
        Self { store }
    }

    /// Returns every series in ID order.
    pub async fn list(&self) -> Result<Vec<Series>, AppError> {
        Ok(self.store.list_all().await?)
    }

    /// Gets a single series by ID.
    ///
    /// # Returns
    /// - `Ok(Series)` - The stored series
    /// - `Err(AppError::NotFound)` - No series with this ID
    /// - `Err(AppError::StorageErr)` - Store failure
    pub async fn get(&self, id: i32) -> Result<Series, AppError> {
        self.find_existing(id).await
    }

    /// Creates a new series from a draft.
    ///
    /// # Returns
    /// - `Ok(Series)` - The created series with its assigned ID
    /// - `Err(AppError::InvalidInput)` - Missing or empty title
    /// - `Err(AppError::StorageErr)` - Store failure
    pub async fn create(&self, draft: SeriesDraft) -> Result<Series, AppError> {
        if !is_valid_title(&draft.title) {
            return Err(AppError::InvalidInput(
                "The 'title' field is required".to_string(),
            ));
        }

        let series = self.store.insert(draft).await?;

        tracing::info!("Created series {} ({})", series.id, series.title);

        Ok(series)
    }

    /// Overwrites every mutable field of an existing series.
    ///
    /// The title is not validated here; an empty title is stored as given.
    pub async fn replace(&self, id: i32, draft: SeriesDraft) -> Result<Series, AppError> {
        self.store
            .replace(id, draft)
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a series permanently.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let rows = self.store.delete_by_id(id).await?;

        if rows == 0 {
            return Err(not_found());
        }

        tracing::info!("Deleted series {}", id);

        Ok(())
    }

    /// Changes only the status of a series.
    ///
    /// Existence is checked before the status is validated, so an unknown ID yields
    /// `NotFound` even when the status is empty.
    pub async fn set_status(&self, id: i32, update: StatusUpdate) -> Result<Series, AppError> {
        self.find_existing(id).await?;

        if update.status.is_empty() {
            return Err(AppError::InvalidInput(
                "The 'status' field cannot be empty".to_string(),
            ));
        }

        if !is_known_status(&update.status) {
            tracing::debug!("Series {} set to unrecognized status {:?}", id, update.status);
        }

        let rows = self.store.set_status(id, update.status).await?;
        if rows == 0 {
            return Err(not_found());
        }

        self.find_existing(id).await
    }

    /// Records one more watched episode.
    ///
    /// A series whose counter already reached a known total, or the largest storable
    /// value, is returned unchanged.
    pub async fn advance_episode(&self, id: i32) -> Result<Series, AppError> {
        let mut series = self.find_existing(id).await?;

        if series.is_caught_up() {
            return Ok(series);
        }

        let Some(next) = series.last_episode_watched.checked_add(1) else {
            return Ok(series);
        };

        let rows = self
            .store
            .atomic_adjust(id, CounterField::LastEpisodeWatched, 1)
            .await?;

        if rows == 0 {
            // Deleted meanwhile, or a concurrent increment reached the cap first
            return self.find_existing(id).await;
        }

        series.last_episode_watched = next;

        Ok(series)
    }

    /// Raises the ranking by one.
    pub async fn upvote(&self, id: i32) -> Result<Series, AppError> {
        self.adjust_ranking(id, 1).await
    }

    /// Lowers the ranking by one. Rankings may go below zero.
    pub async fn downvote(&self, id: i32) -> Result<Series, AppError> {
        self.adjust_ranking(id, -1).await
    }

    /// A ranking already at the edge of the `i32` range stays where it is.
    async fn adjust_ranking(&self, id: i32, delta: i32) -> Result<Series, AppError> {
        self.find_existing(id).await?;

        let rows = self
            .store
            .atomic_adjust(id, CounterField::Ranking, delta)
            .await?;

        if rows == 0 {
            tracing::debug!("Ranking of series {} left unchanged", id);
        }

        // Missing here means the series was deleted after the first lookup
        self.find_existing(id).await
    }

    async fn find_existing(&self, id: i32) -> Result<Series, AppError> {
        self.store.find_by_id(id).await?.ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Series not found".to_string())
}
