//! In-memory series stores for tests.
//!
//! `InMemorySeriesStore` mirrors the SeaORM repository's observable behavior,
//! including monotonically increasing IDs and the episode cap on increments.
//! `FailingSeriesStore` and `PanickingSeriesStore` exercise error handling.

use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::server::{
    data::store::{CounterField, SeriesStore},
    error::storage::StorageError,
    model::series::{Series, SeriesDraft},
};

#[derive(Default)]
struct Rows {
    by_id: BTreeMap<i32, Series>,
    last_id: i32,
}

/// Series store backed by a mutex-guarded map.
#[derive(Default)]
pub struct InMemorySeriesStore {
    rows: Mutex<Rows>,
}

impl InMemorySeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given series, keeping their IDs.
    pub fn with_series(series: impl IntoIterator<Item = Series>) -> Self {
        let mut rows = Rows::default();
        for s in series {
            rows.last_id = rows.last_id.max(s.id);
            rows.by_id.insert(s.id, s);
        }

        Self {
            rows: Mutex::new(rows),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Rows>, StorageError> {
        self.rows
            .lock()
            .map_err(|e| DbErr::Custom(e.to_string()).into())
    }
}

#[async_trait]
impl SeriesStore for InMemorySeriesStore {
    async fn list_all(&self) -> Result<Vec<Series>, StorageError> {
        Ok(self.lock()?.by_id.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Series>, StorageError> {
        Ok(self.lock()?.by_id.get(&id).cloned())
    }

    async fn insert(&self, draft: SeriesDraft) -> Result<Series, StorageError> {
        let mut rows = self.lock()?;
        rows.last_id += 1;

        let series = Series {
            id: rows.last_id,
            title: draft.title,
            status: draft.status,
            last_episode_watched: draft.last_episode_watched,
            total_episodes: draft.total_episodes,
            ranking: draft.ranking,
        };
        rows.by_id.insert(series.id, series.clone());

        Ok(series)
    }

    async fn replace(&self, id: i32, draft: SeriesDraft) -> Result<Option<Series>, StorageError> {
        let mut rows = self.lock()?;
        let Some(series) = rows.by_id.get_mut(&id) else {
            return Ok(None);
        };

        series.title = draft.title;
        series.status = draft.status;
        series.last_episode_watched = draft.last_episode_watched;
        series.total_episodes = draft.total_episodes;
        series.ranking = draft.ranking;

        Ok(Some(series.clone()))
    }

    async fn set_status(&self, id: i32, status: String) -> Result<u64, StorageError> {
        let mut rows = self.lock()?;
        match rows.by_id.get_mut(&id) {
            Some(series) => {
                series.status = status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StorageError> {
        Ok(self.lock()?.by_id.remove(&id).map_or(0, |_| 1))
    }

    async fn atomic_adjust(
        &self,
        id: i32,
        field: CounterField,
        delta: i32,
    ) -> Result<u64, StorageError> {
        let mut rows = self.lock()?;
        let Some(series) = rows.by_id.get_mut(&id) else {
            return Ok(0);
        };

        if field == CounterField::LastEpisodeWatched && delta > 0 && series.is_caught_up() {
            return Ok(0);
        }

        let counter = match field {
            CounterField::LastEpisodeWatched => &mut series.last_episode_watched,
            CounterField::Ranking => &mut series.ranking,
        };

        // Out of i32 range is refused like the SQL bound
        match counter.checked_add(delta) {
            Some(value) => {
                *counter = value;
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

/// Store whose every operation fails as if the database were unreachable.
pub struct FailingSeriesStore;

fn offline() -> StorageError {
    DbErr::Custom("storage offline".to_string()).into()
}

#[async_trait]
impl SeriesStore for FailingSeriesStore {
    async fn list_all(&self) -> Result<Vec<Series>, StorageError> {
        Err(offline())
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Series>, StorageError> {
        Err(offline())
    }

    async fn insert(&self, _draft: SeriesDraft) -> Result<Series, StorageError> {
        Err(offline())
    }

    async fn replace(
        &self,
        _id: i32,
        _draft: SeriesDraft,
    ) -> Result<Option<Series>, StorageError> {
        Err(offline())
    }

    async fn set_status(&self, _id: i32, _status: String) -> Result<u64, StorageError> {
        Err(offline())
    }

    async fn delete_by_id(&self, _id: i32) -> Result<u64, StorageError> {
        Err(offline())
    }

    async fn atomic_adjust(
        &self,
        _id: i32,
        _field: CounterField,
        _delta: i32,
    ) -> Result<u64, StorageError> {
        Err(offline())
    }
}

/// Store that panics on every call, for exercising the panic boundary.
pub struct PanickingSeriesStore;

#[async_trait]
impl SeriesStore for PanickingSeriesStore {
    async fn list_all(&self) -> Result<Vec<Series>, StorageError> {
        panic!("list_all exploded")
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Series>, StorageError> {
        panic!("find_by_id exploded")
    }

    async fn insert(&self, _draft: SeriesDraft) -> Result<Series, StorageError> {
        panic!("insert exploded")
    }

    async fn replace(
        &self,
        _id: i32,
        _draft: SeriesDraft,
    ) -> Result<Option<Series>, StorageError> {
        panic!("replace exploded")
    }

    async fn set_status(&self, _id: i32, _status: String) -> Result<u64, StorageError> {
        panic!("set_status exploded")
    }

    async fn delete_by_id(&self, _id: i32) -> Result<u64, StorageError> {
        panic!("delete_by_id exploded")
    }

    async fn atomic_adjust(
        &self,
        _id: i32,
        _field: CounterField,
        _delta: i32,
    ) -> Result<u64, StorageError> {
        panic!("atomic_adjust exploded")
    }
}
