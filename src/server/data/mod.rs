//! Database repository layer.
//!
//! `store` defines the persistence port the service layer depends on, and `series`
//! implements it with SeaORM. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separate from business logic.

#[cfg(test)]
pub mod memory;
pub mod series;
pub mod store;
