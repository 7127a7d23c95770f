use thiserror::Error;

/// Failure reported by a series store.
///
/// Covers connectivity, constraint and timeout failures alike. Always surfaced to
/// the client as a 500 Internal Server Error and never retried.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database operation error from SeaORM.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
