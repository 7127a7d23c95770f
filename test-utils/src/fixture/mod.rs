//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! unit tests, for seeding in-memory stores and for DTO conversion tests.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let series = fixture::series::entity();
//!
//! let caught_up = fixture::series::entity_builder()
//!     .total_episodes(5)
//!     .last_episode_watched(5)
//!     .build();
//! ```

pub mod series;

pub use series::{entity as series_entity, entity_builder as series_entity_builder};
