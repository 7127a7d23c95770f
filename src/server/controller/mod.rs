//! HTTP request handlers.
//!
//! Controllers parse path segments and bodies into domain inputs, call the service
//! layer, and convert the resulting domain models into DTOs.

pub mod health;
pub mod series;

#[cfg(test)]
mod test;
