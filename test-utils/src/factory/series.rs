//! Series factory for creating test series rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test series with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::series::SeriesFactory;
///
/// let series = SeriesFactory::new(&db)
///     .title("Frieren")
///     .status("Watching")
///     .total_episodes(28)
///     .build()
///     .await?;
/// ```
pub struct SeriesFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    status: String,
    last_episode_watched: i32,
    total_episodes: i32,
    ranking: i32,
}

impl<'a> SeriesFactory<'a> {
    /// Creates a new SeriesFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Series {n}"` where n is auto-incremented
    /// - status: `"Plan to Watch"`
    /// - last_episode_watched: `0`
    /// - total_episodes: `12`
    /// - ranking: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Series {}", id),
            status: "Plan to Watch".to_string(),
            last_episode_watched: 0,
            total_episodes: 12,
            ranking: 0,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn last_episode_watched(mut self, last_episode_watched: i32) -> Self {
        self.last_episode_watched = last_episode_watched;
        self
    }

    pub fn total_episodes(mut self, total_episodes: i32) -> Self {
        self.total_episodes = total_episodes;
        self
    }

    pub fn ranking(mut self, ranking: i32) -> Self {
        self.ranking = ranking;
        self
    }

    /// Builds and inserts the series entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::series::Model)` - Created series entity with its assigned ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::series::Model, DbErr> {
        entity::series::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title),
            status: ActiveValue::Set(self.status),
            last_episode_watched: ActiveValue::Set(self.last_episode_watched),
            total_episodes: ActiveValue::Set(self.total_episodes),
            ranking: ActiveValue::Set(self.ranking),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a series with default values.
///
/// Shorthand for `SeriesFactory::new(db).build().await`.
pub async fn create_series(db: &DatabaseConnection) -> Result<entity::series::Model, DbErr> {
    SeriesFactory::new(db).build().await
}
