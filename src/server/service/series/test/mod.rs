
use super::*;
use crate::server::data::memory::{FailingSeriesStore, InMemorySeriesStore};

/// Builds a stored series with the given counters.
fn series(id: i32, last_episode_watched: i32, total_episodes: i32, ranking: i32) -> Series {
    Series {
        id,
        title: format!("Series {}", id),
        status: "Watching".to_string(),
        last_episode_watched,
        total_episodes,
        ranking,
    }
}
