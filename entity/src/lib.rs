//! SeaORM entities for the series tracker database.

pub mod prelude;

pub mod series;
