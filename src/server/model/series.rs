//! Domain models for series operations.
//!
//! These models are the boundary between the data layer and the service/controller
//! layers. Entity models are converted here and never leak past the data layer; DTOs
//! are produced here and never reach the data layer.

use crate::model::series::{SeriesDraftDto, SeriesDto, StatusUpdateDto};

/// Watch statuses the client UI offers. Any other non-empty value is still accepted.
pub const KNOWN_STATUSES: [&str; 4] = ["Plan to Watch", "Watching", "Completed", "Dropped"];

/// A persisted series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    /// Store-assigned identifier, never reused.
    pub id: i32,
    pub title: String,
    pub status: String,
    pub last_episode_watched: i32,
    pub total_episodes: i32,
    pub ranking: i32,
}

impl Series {
    /// Converts an entity model to a series.
    ///
    /// # Arguments
    /// - `entity`: The entity model from the database
    ///
    /// # Returns
    /// - `Series`: The converted domain model
    pub fn from_entity(entity: entity::series::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            status: entity.status,
            last_episode_watched: entity.last_episode_watched,
            total_episodes: entity.total_episodes,
            ranking: entity.ranking,
        }
    }

    /// Converts the series to a DTO for API responses.
    pub fn into_dto(self) -> SeriesDto {
        SeriesDto {
            id: self.id,
            title: self.title,
            status: self.status,
            last_episode_watched: self.last_episode_watched,
            total_episodes: self.total_episodes,
            ranking: self.ranking,
        }
    }

    /// Whether the episode counter has reached a known episode total.
    ///
    /// A total of zero means the length is unknown, so the series is never caught up.
    pub fn is_caught_up(&self) -> bool {
        self.total_episodes > 0 && self.last_episode_watched >= self.total_episodes
    }
}

/// Caller-supplied values for every mutable series field.
///
/// Used both for creation and for full replacement; the `id` is never part of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeriesDraft {
    pub title: String,
    pub status: String,
    pub last_episode_watched: i32,
    pub total_episodes: i32,
    pub ranking: i32,
}

impl SeriesDraft {
    pub fn from_dto(dto: SeriesDraftDto) -> Self {
        Self {
            title: dto.title,
            status: dto.status,
            last_episode_watched: dto.last_episode_watched,
            total_episodes: dto.total_episodes,
            ranking: dto.ranking,
        }
    }
}

/// New status for a partial status update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: String,
}

impl StatusUpdate {
    pub fn from_dto(dto: StatusUpdateDto) -> Self {
        Self { status: dto.status }
    }
}

/// A series title is valid when it is non-empty.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty()
}

pub fn is_known_status(status: &str) -> bool {
    KNOWN_STATUSES.contains(&status)
}
