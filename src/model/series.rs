use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A tracked series as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDto {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Attack on Titan")]
    pub title: String,
    #[schema(example = "Watching")]
    pub status: String,
    #[schema(example = 10)]
    pub last_episode_watched: i32,
    #[schema(example = 24)]
    pub total_episodes: i32,
    #[schema(example = 8)]
    pub ranking: i32,
}

/// Request body for creating or fully replacing a series.
///
/// Every field is optional on the wire and falls back to an empty string or zero.
/// An `id` sent by the client is ignored; the server assigns or keeps it.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesDraftDto {
    #[schema(example = "Attack on Titan")]
    pub title: String,
    #[schema(example = "Plan to Watch")]
    pub status: String,
    #[schema(example = 0)]
    pub last_episode_watched: i32,
    #[schema(example = 24)]
    pub total_episodes: i32,
    #[schema(example = 0)]
    pub ranking: i32,
}

/// Request body for `PATCH /api/series/{id}/status`.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct StatusUpdateDto {
    #[schema(example = "Completed")]
    pub status: String,
}
