//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible defaults, reducing
//! boilerplate in tests. Each entity has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let series = factory::create_series(&db).await?;
//!
//! let finished = factory::series::SeriesFactory::new(&db)
//!     .total_episodes(12)
//!     .last_episode_watched(12)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod series;

pub use series::create_series;
