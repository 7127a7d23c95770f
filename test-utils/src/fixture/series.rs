//! Series fixtures for creating in-memory test data.

use entity::series;

/// Default test series title.
pub const DEFAULT_TITLE: &str = "Cowboy Bebop";

/// Default watch status.
pub const DEFAULT_STATUS: &str = "Watching";

/// Default total episode count.
pub const DEFAULT_TOTAL_EPISODES: i32 = 26;

/// Creates a series entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - title: `"Cowboy Bebop"`
/// - status: `"Watching"`
/// - last_episode_watched: `0`
/// - total_episodes: `26`
/// - ranking: `0`
pub fn entity() -> series::Model {
    entity_builder().build()
}

/// Creates a series entity builder for customization.
pub fn entity_builder() -> SeriesEntityBuilder {
    SeriesEntityBuilder::default()
}

/// Builder for creating customized series entity models.
pub struct SeriesEntityBuilder {
    id: i32,
    title: String,
    status: String,
    last_episode_watched: i32,
    total_episodes: i32,
    ranking: i32,
}

impl Default for SeriesEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            title: DEFAULT_TITLE.to_string(),
            status: DEFAULT_STATUS.to_string(),
            last_episode_watched: 0,
            total_episodes: DEFAULT_TOTAL_EPISODES,
            ranking: 0,
        }
    }
}

impl SeriesEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
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

    /// Builds the series entity model.
    pub fn build(self) -> series::Model {
        series::Model {
            id: self.id,
            title: self.title,
            status: self.status,
            last_episode_watched: self.last_episode_watched,
            total_episodes: self.total_episodes,
            ranking: self.ranking,
        }
    }
}
