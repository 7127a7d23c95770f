//! Series data repository for database operations.
//!
//! This module provides the `SeriesRepository`, the SeaORM implementation of the
//! [`SeriesStore`] port. Entity models are converted to domain models at this boundary.

#[cfg(test)]
mod test;

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::store::{CounterField, SeriesStore},
    error::storage::StorageError,
    model::series::{Series, SeriesDraft},
};

/// Repository providing database operations for series management.
///
/// Holds a clone of the pooled connection so it can be shared behind an `Arc`.
pub struct SeriesRepository {
    db: DatabaseConnection,
}

impl SeriesRepository {
    /// Creates a new SeriesRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn counter_column(field: CounterField) -> entity::series::Column {
    match field {
        CounterField::LastEpisodeWatched => entity::series::Column::LastEpisodeWatched,
        CounterField::Ranking => entity::series::Column::Ranking,
    }
}

#[async_trait]
impl SeriesStore for SeriesRepository {
    async fn list_all(&self) -> Result<Vec<Series>, StorageError> {
        let entities = entity::prelude::Series::find()
            .order_by_asc(entity::series::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Series::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Series>, StorageError> {
        let entity = entity::prelude::Series::find_by_id(id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Series::from_entity))
    }

    /// Inserts a new series record; the ID is assigned by the database.
    ///
    /// # Returns
    /// - `Ok(Series)` - The created series with generated ID
    /// - `Err(StorageError)` - Database error during insert operation
    async fn insert(&self, draft: SeriesDraft) -> Result<Series, StorageError> {
        let entity = entity::series::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(draft.title),
            status: ActiveValue::Set(draft.status),
            last_episode_watched: ActiveValue::Set(draft.last_episode_watched),
            total_episodes: ActiveValue::Set(draft.total_episodes),
            ranking: ActiveValue::Set(draft.ranking),
        }
        .insert(&self.db)
        .await?;

        Ok(Series::from_entity(entity))
    }

    /// Overwrites all mutable fields of a series, keeping its ID.
    ///
    /// # Returns
    /// - `Ok(Some(Series))` - The updated series
    /// - `Ok(None)` - No series exists with the specified ID
    /// - `Err(StorageError)` - Database error during update operation
    async fn replace(&self, id: i32, draft: SeriesDraft) -> Result<Option<Series>, StorageError> {
        let Some(series) = entity::prelude::Series::find_by_id(id)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::series::ActiveModel = series.into();
        active_model.title = ActiveValue::Set(draft.title);
        active_model.status = ActiveValue::Set(draft.status);
        active_model.last_episode_watched = ActiveValue::Set(draft.last_episode_watched);
        active_model.total_episodes = ActiveValue::Set(draft.total_episodes);
        active_model.ranking = ActiveValue::Set(draft.ranking);

        match active_model.update(&self.db).await {
            Ok(entity) => Ok(Some(Series::from_entity(entity))),
            // Deleted between the lookup and the update
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set_status(&self, id: i32, status: String) -> Result<u64, StorageError> {
        let result = entity::prelude::Series::update_many()
            .col_expr(entity::series::Column::Status, Expr::value(status))
            .filter(entity::series::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn delete_by_id(&self, id: i32) -> Result<u64, StorageError> {
        let result = entity::prelude::Series::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Applies `column = column + delta` in a single UPDATE statement.
    ///
    /// Rows whose counter would leave the `i32` range are not matched, so `0` rows
    /// are reported instead of storing an unreadable value.
    async fn atomic_adjust(
        &self,
        id: i32,
        field: CounterField,
        delta: i32,
    ) -> Result<u64, StorageError> {
        use entity::series::Column;
        use sea_orm::sea_query::ExprTrait;

        let column = counter_column(field);

        let mut query = entity::prelude::Series::update_many()
            .col_expr(column, Expr::col(column).add(delta))
            .filter(Expr::col(Column::Id).eq(id));

        // Keep the result inside i32 so the row still decodes
        if delta > 0 {
            query = query.filter(Expr::col(column).lte(i32::MAX - delta));
        } else if delta < 0 {
            query = query.filter(Expr::col(column).gte(i32::MIN - delta));
        }

        if field == CounterField::LastEpisodeWatched && delta > 0 {
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::TotalEpisodes).lte(0))
                    .add(
                        Expr::col(Column::LastEpisodeWatched)
                            .lt(Expr::col(Column::TotalEpisodes)),
                    ),
            );
        }

        let result = query.exec(&self.db).await?;

        Ok(result.rows_affected)
    }
}
